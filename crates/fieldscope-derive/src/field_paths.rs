use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Ident, Visibility};

use crate::attrs::{
    field_key, get_serde_rename_all, get_serde_str, has_serde_skip, method_ident, to_snake_case,
    variant_key,
};

pub(crate) fn expand(input: DeriveInput) -> syn::Result<TokenStream> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "FieldPaths cannot be derived for generic types",
        ));
    }
    let name = &input.ident;

    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => {
                let rename_all = get_serde_rename_all(&input.attrs);
                let paths_name = format_ident!("{}Paths", name);
                let group = paths_struct(
                    &input.vis,
                    name,
                    &paths_name,
                    &fields.named,
                    rename_all.as_deref(),
                    None,
                );
                Ok(quote! {
                    #group

                    impl ::fieldscope::PathNode for #name {
                        type Path<__R> = #paths_name<__R>;

                        fn at_prefix<__R>(prefix: ::fieldscope::PathPrefix<__R>) -> Self::Path<__R> {
                            #paths_name { prefix }
                        }
                    }
                })
            }
            _ => Err(syn::Error::new_spanned(
                name,
                "FieldPaths can only be derived for structs with named fields",
            )),
        },
        Data::Enum(data) => {
            let tag = get_serde_str(&input.attrs, "tag").or_else(|| get_paths_tag(&input.attrs));
            match tag {
                Some(tag) => expand_tagged_enum(&input, data, &tag),
                None if data.variants.iter().all(|v| v.fields.is_empty()) => Ok(quote! {
                    impl ::fieldscope::PathNode for #name {
                        type Path<__R> = ::fieldscope::FieldPath<__R, #name>;

                        fn at_prefix<__R>(prefix: ::fieldscope::PathPrefix<__R>) -> Self::Path<__R> {
                            prefix.field()
                        }
                    }
                }),
                None => Err(syn::Error::new_spanned(
                    name,
                    "FieldPaths on enums with data needs an internally tagged representation: \
                     add #[serde(tag = \"...\")] or #[paths(tag = \"...\")]",
                )),
            }
        }
        Data::Union(_) => Err(syn::Error::new_spanned(
            name,
            "FieldPaths cannot be derived for unions",
        )),
    }
}

/// `#[paths(tag = "...")]` for enums whose serde representation is set elsewhere.
fn get_paths_tag(attrs: &[syn::Attribute]) -> Option<String> {
    let mut tag = None;
    for attr in attrs.iter().filter(|a| a.path().is_ident("paths")) {
        let _ = attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("tag") {
                let value: syn::LitStr = meta.value()?.parse()?;
                tag = Some(value.value());
            }
            Ok(())
        });
    }
    tag
}

/// Accessor struct with one method per field. `tag` adds an accessor for the
/// discriminator field of the enclosing union member.
fn paths_struct(
    vis: &Visibility,
    value_type: &Ident,
    paths_name: &Ident,
    fields: &syn::punctuated::Punctuated<syn::Field, syn::Token![,]>,
    rename_all: Option<&str>,
    tag: Option<&str>,
) -> TokenStream {
    let mut methods = Vec::new();

    if let Some(tag) = tag {
        let method = method_ident(tag);
        methods.push(quote! {
            pub fn #method(&self) -> ::fieldscope::FieldPath<R, ::std::string::String> {
                self.prefix.nested(#tag).field()
            }
        });
    }

    for field in fields.iter().filter(|f| !has_serde_skip(&f.attrs)) {
        let Some(method) = &field.ident else {
            continue;
        };
        let key = field_key(field, rename_all);
        let ty = &field.ty;
        methods.push(quote! {
            pub fn #method(&self) -> <#ty as ::fieldscope::PathNode>::Path<R> {
                <#ty as ::fieldscope::PathNode>::at_prefix(self.prefix.nested(#key))
            }
        });
    }

    let doc = format!(" Typed field paths through [`{}`].", value_type);

    quote! {
        #[doc = #doc]
        #vis struct #paths_name<R> {
            prefix: ::fieldscope::PathPrefix<R>,
        }

        #[allow(dead_code)]
        impl<R> #paths_name<R> {
            #(#methods)*
        }

        impl<R> ::fieldscope::PathGroup<R> for #paths_name<R> {
            type Value = #value_type;

            fn prefix(&self) -> &::fieldscope::PathPrefix<R> {
                &self.prefix
            }
        }
    }
}

fn expand_tagged_enum(input: &DeriveInput, data: &syn::DataEnum, tag: &str) -> syn::Result<TokenStream> {
    let name = &input.ident;
    let vis = &input.vis;
    let paths_name = format_ident!("{}Paths", name);
    let rename_all = get_serde_rename_all(&input.attrs);
    let tag_method = method_ident(tag);

    let mut variant_groups = Vec::new();
    let mut variant_methods = Vec::new();

    for variant in &data.variants {
        let value = variant_key(variant, rename_all.as_deref());
        let method = method_ident(&to_snake_case(&variant.ident.to_string()));
        let select = quote! { self.prefix.select(#tag, #value) };

        match &variant.fields {
            Fields::Unnamed(fields) if fields.unnamed.len() == 1 => {
                let ty = &fields.unnamed[0].ty;
                variant_methods.push(quote! {
                    pub fn #method(&self) -> <#ty as ::fieldscope::PathNode>::Path<R> {
                        <#ty as ::fieldscope::PathNode>::at_prefix(#select)
                    }
                });
            }
            Fields::Unnamed(_) => {
                return Err(syn::Error::new_spanned(
                    variant,
                    "tuple variants cannot be internally tagged",
                ));
            }
            Fields::Named(_) | Fields::Unit => {
                let variant_paths = format_ident!("{}{}Paths", name, variant.ident);
                let empty = syn::punctuated::Punctuated::new();
                let fields = match &variant.fields {
                    Fields::Named(named) => &named.named,
                    _ => &empty,
                };
                let variant_rename_all = get_serde_rename_all(&variant.attrs);
                variant_groups.push(paths_struct(
                    vis,
                    name,
                    &variant_paths,
                    fields,
                    variant_rename_all.as_deref(),
                    Some(tag),
                ));
                variant_methods.push(quote! {
                    pub fn #method(&self) -> #variant_paths<R> {
                        #variant_paths { prefix: #select }
                    }
                });
            }
        }
    }

    let doc = format!(" Typed field paths through [`{}`], one accessor per variant.", name);

    Ok(quote! {
        #[doc = #doc]
        #vis struct #paths_name<R> {
            prefix: ::fieldscope::PathPrefix<R>,
        }

        #[allow(dead_code)]
        impl<R> #paths_name<R> {
            /// The discriminator field.
            pub fn #tag_method(&self) -> ::fieldscope::FieldPath<R, ::std::string::String> {
                self.prefix.nested(#tag).field()
            }

            #(#variant_methods)*
        }

        impl<R> ::fieldscope::PathGroup<R> for #paths_name<R> {
            type Value = #name;

            fn prefix(&self) -> &::fieldscope::PathPrefix<R> {
                &self.prefix
            }
        }

        #(#variant_groups)*

        impl ::fieldscope::PathNode for #name {
            type Path<__R> = #paths_name<__R>;

            fn at_prefix<__R>(prefix: ::fieldscope::PathPrefix<__R>) -> Self::Path<__R> {
                #paths_name { prefix }
            }
        }
    })
}

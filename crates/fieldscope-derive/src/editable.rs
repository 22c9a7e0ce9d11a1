use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{Data, DeriveInput, Fields, Path};

use crate::attrs::{field_key, get_serde_rename_all, has_serde_skip};

/// Container options from `#[editable(...)]`.
#[derive(Default)]
struct EditableOptions {
    /// Recurse into this struct when it appears as a field.
    deep: bool,
    /// Extra derives for the generated structs.
    derives: Vec<Path>,
}

fn parse_options(input: &DeriveInput) -> syn::Result<EditableOptions> {
    let mut options = EditableOptions::default();
    for attr in input.attrs.iter().filter(|a| a.path().is_ident("editable")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("deep") {
                options.deep = true;
                Ok(())
            } else if meta.path.is_ident("derive") {
                let content;
                syn::parenthesized!(content in meta.input);
                let paths = content.parse_terminated(Path::parse_mod_style, syn::Token![,])?;
                options.derives.extend(paths);
                Ok(())
            } else {
                Err(meta.error("expected `deep` or `derive(...)`"))
            }
        })?;
    }
    Ok(options)
}

pub(crate) fn expand(input: DeriveInput) -> syn::Result<TokenStream> {
    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "Editable cannot be derived for generic types",
        ));
    }
    let options = parse_options(&input)?;
    let name = &input.ident;

    match &input.data {
        Data::Struct(data) => match &data.fields {
            Fields::Named(fields) => Ok(expand_struct(&input, &options, &fields.named)),
            _ => Err(syn::Error::new_spanned(
                name,
                "Editable can only be derived for structs with named fields",
            )),
        },
        Data::Enum(data) => {
            let fieldless = data.variants.iter().all(|v| v.fields.is_empty());
            Ok(expand_enum(name, fieldless))
        }
        Data::Union(_) => Err(syn::Error::new_spanned(
            name,
            "Editable cannot be derived for unions",
        )),
    }
}

fn expand_struct(
    input: &DeriveInput,
    options: &EditableOptions,
    fields: &syn::punctuated::Punctuated<syn::Field, syn::Token![,]>,
) -> TokenStream {
    let name = &input.ident;
    let vis = &input.vis;
    let editable_name = format_ident!("Editable{}", name);
    let nullable_name = format_ident!("Nullable{}", name);
    let rename_all = get_serde_rename_all(&input.attrs);
    let extra_derives = &options.derives;

    let fields: Vec<_> = fields.iter().filter(|f| !has_serde_skip(&f.attrs)).collect();
    let field_vis: Vec<_> = fields.iter().map(|f| &f.vis).collect();
    let field_names: Vec<_> = fields.iter().map(|f| &f.ident).collect();
    let field_types: Vec<_> = fields.iter().map(|f| &f.ty).collect();
    let field_keys: Vec<_> = fields
        .iter()
        .map(|f| field_key(f, rename_all.as_deref()))
        .collect();

    let (editable_slot, nullable_slot) = if options.deep {
        (
            quote! { ::fieldscope::Nullish<#editable_name> },
            quote! { ::fieldscope::Nullish<#nullable_name> },
        )
    } else {
        (
            quote! { ::fieldscope::Nullish<#name> },
            quote! { ::fieldscope::Nullish<#name> },
        )
    };

    let editable_doc = format!(" Editing-time counterpart of [`{}`].", name);
    let nullable_doc = format!(" [`{}`] with every field optional and nullable.", name);

    quote! {
        #[doc = #editable_doc]
        #[derive(
            ::std::default::Default,
            ::fieldscope::serde::Serialize,
            ::fieldscope::serde::Deserialize,
            #(#extra_derives),*
        )]
        #[serde(crate = "::fieldscope::serde", default)]
        #vis struct #editable_name {
            #(
                #[serde(rename = #field_keys, skip_serializing_if = "::fieldscope::EditableValue::is_absent")]
                #field_vis #field_names: <#field_types as ::fieldscope::EditableField>::Editable,
            )*
        }

        #[doc = #nullable_doc]
        #[derive(
            ::std::default::Default,
            ::fieldscope::serde::Serialize,
            ::fieldscope::serde::Deserialize,
            #(#extra_derives),*
        )]
        #[serde(crate = "::fieldscope::serde", default)]
        #vis struct #nullable_name {
            #(
                #[serde(rename = #field_keys, skip_serializing_if = "::fieldscope::EditableValue::is_absent")]
                #field_vis #field_names: <#field_types as ::fieldscope::NullableField>::Nullable,
            )*
        }

        impl ::fieldscope::Editable for #name {
            type Editable = #editable_name;
            type AllNullable = #nullable_name;
        }

        impl ::fieldscope::EditableField for #name {
            type Editable = #editable_slot;
        }

        impl ::fieldscope::NullableField for #name {
            type Nullable = #nullable_slot;
        }
    }
}

/// Fieldless enums behave like primitives; enums carrying data are chosen
/// as a whole.
fn expand_enum(name: &syn::Ident, fieldless: bool) -> TokenStream {
    let editable_slot = if fieldless {
        quote! { ::std::option::Option<#name> }
    } else {
        quote! { ::fieldscope::Nullish<#name> }
    };

    quote! {
        impl ::fieldscope::EditableField for #name {
            type Editable = #editable_slot;
        }

        impl ::fieldscope::NullableField for #name {
            type Nullable = ::fieldscope::Nullish<#name>;
        }
    }
}

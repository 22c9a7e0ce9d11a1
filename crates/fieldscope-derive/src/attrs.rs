// ---------------------------------------------------------------------------
// Serde attribute parsing helpers
// ---------------------------------------------------------------------------

use proc_macro2::{Ident, Span};
use syn::{Expr, Lit, Meta};

/// String value of `#[serde(<key> = "...")]`, if present.
pub(crate) fn get_serde_str(attrs: &[syn::Attribute], key: &str) -> Option<String> {
    for attr in attrs {
        if !attr.path().is_ident("serde") {
            continue;
        }
        if let Ok(nested) = attr
            .parse_args_with(syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated)
        {
            for meta in &nested {
                if let Meta::NameValue(nv) = meta {
                    if nv.path.is_ident(key) {
                        if let Expr::Lit(lit) = &nv.value {
                            if let Lit::Str(s) = &lit.lit {
                                return Some(s.value());
                            }
                        }
                    }
                }
            }
        }
    }
    None
}

/// Extract `#[serde(rename_all = "...")]`.
pub(crate) fn get_serde_rename_all(attrs: &[syn::Attribute]) -> Option<String> {
    get_serde_str(attrs, "rename_all")
}

/// Extract `#[serde(rename = "...")]`.
pub(crate) fn get_serde_rename(attrs: &[syn::Attribute]) -> Option<String> {
    get_serde_str(attrs, "rename")
}

/// Whether a field carries `#[serde(skip)]`.
pub(crate) fn has_serde_skip(attrs: &[syn::Attribute]) -> bool {
    attrs.iter().filter(|a| a.path().is_ident("serde")).any(|attr| {
        attr.parse_args_with(syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated)
            .map(|nested| {
                nested
                    .iter()
                    .any(|meta| matches!(meta, Meta::Path(p) if p.is_ident("skip")))
            })
            .unwrap_or(false)
    })
}

/// JSON key of a field: `#[serde(rename)]` > container `rename_all` > field name.
pub(crate) fn field_key(field: &syn::Field, rename_all: Option<&str>) -> String {
    let name = field
        .ident
        .as_ref()
        .map(|i| syn::ext::IdentExt::unraw(i).to_string())
        .unwrap_or_default();
    get_serde_rename(&field.attrs).unwrap_or_else(|| match rename_all {
        Some(convention) => rename_field(&name, convention),
        None => name,
    })
}

/// Serialized name of an enum variant: `#[serde(rename)]` > enum `rename_all` > ident.
pub(crate) fn variant_key(variant: &syn::Variant, rename_all: Option<&str>) -> String {
    let name = variant.ident.to_string();
    get_serde_rename(&variant.attrs).unwrap_or_else(|| match rename_all {
        Some(convention) => rename_variant(&name, convention),
        None => name,
    })
}

/// Convert a snake_case field name to the given naming convention.
fn rename_field(name: &str, convention: &str) -> String {
    match convention {
        "lowercase" => name.to_lowercase(),
        "UPPERCASE" => name.to_uppercase(),
        "camelCase" => to_camel_case(name),
        "PascalCase" => to_pascal_case(name),
        "snake_case" => name.to_string(),
        "SCREAMING_SNAKE_CASE" => name.to_uppercase(),
        "kebab-case" => name.replace('_', "-"),
        "SCREAMING-KEBAB-CASE" => name.replace('_', "-").to_uppercase(),
        _ => name.to_string(),
    }
}

/// Convert a PascalCase variant name to the given naming convention.
fn rename_variant(name: &str, convention: &str) -> String {
    match convention {
        "lowercase" => name.to_lowercase(),
        "UPPERCASE" => name.to_uppercase(),
        "PascalCase" => name.to_string(),
        "camelCase" => {
            let mut chars = name.chars();
            match chars.next() {
                Some(first) => first.to_lowercase().chain(chars).collect(),
                None => String::new(),
            }
        }
        other => rename_field(&to_snake_case(name), other),
    }
}

fn to_camel_case(s: &str) -> String {
    let mut result = String::new();
    let mut capitalize_next = false;
    for ch in s.chars() {
        if ch == '_' {
            capitalize_next = true;
        } else if capitalize_next {
            result.extend(ch.to_uppercase());
            capitalize_next = false;
        } else {
            result.push(ch);
        }
    }
    result
}

fn to_pascal_case(s: &str) -> String {
    let mut result = String::new();
    let mut capitalize_next = true;
    for ch in s.chars() {
        if ch == '_' {
            capitalize_next = true;
        } else if capitalize_next {
            result.extend(ch.to_uppercase());
            capitalize_next = false;
        } else {
            result.push(ch);
        }
    }
    result
}

pub(crate) fn to_snake_case(s: &str) -> String {
    let mut result = String::new();
    for (i, ch) in s.chars().enumerate() {
        if ch.is_uppercase() {
            if i > 0 {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
        } else {
            result.push(ch);
        }
    }
    result
}

const KEYWORDS: &[&str] = &[
    "abstract", "as", "async", "await", "become", "box", "break", "const", "continue", "do",
    "dyn", "else", "enum", "extern", "false", "final", "fn", "for", "if", "impl", "in", "let",
    "loop", "macro", "match", "mod", "move", "mut", "override", "priv", "pub", "ref", "return",
    "static", "struct", "trait", "true", "try", "type", "typeof", "unsafe", "unsized", "use",
    "virtual", "where", "while", "yield",
];

/// Method identifier for a serialized name (`"type"` → `r#type`, `"kind-of"` → `kind_of`).
pub(crate) fn method_ident(name: &str) -> Ident {
    let mut cleaned: String = name
        .chars()
        .map(|c| if c.is_ascii_alphanumeric() || c == '_' { c } else { '_' })
        .collect();
    if cleaned.is_empty() || cleaned.starts_with(|c: char| c.is_ascii_digit()) {
        cleaned.insert(0, '_');
    }
    match cleaned.as_str() {
        "self" | "Self" | "super" | "crate" => Ident::new(&format!("{}_", cleaned), Span::call_site()),
        kw if KEYWORDS.contains(&kw) => Ident::new_raw(kw, Span::call_site()),
        _ => Ident::new(&cleaned, Span::call_site()),
    }
}

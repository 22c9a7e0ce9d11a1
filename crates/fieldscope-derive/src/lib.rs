use proc_macro::TokenStream;
use syn::{parse_macro_input, DeriveInput};

mod attrs;
mod editable;
mod field_paths;

/// Derive macro that generates the editing-time types of a validated struct.
///
/// For `struct User` it generates `EditableUser` (each field mapped through
/// `fieldscope::EditableField`) and `NullableUser` (each field mapped through
/// `fieldscope::NullableField`), and implements `fieldscope::Editable`,
/// `EditableField` and `NullableField` for `User`.
///
/// # Usage
///
/// ```ignore
/// use fieldscope::Editable;
///
/// #[derive(Serialize, Deserialize, Editable)]
/// #[editable(deep, derive(Debug, Clone))]
/// struct Address {
///     street: String,
///     city: String,
/// }
///
/// #[derive(Serialize, Deserialize, Editable)]
/// struct Customer {
///     name: String,           // EditableCustomer::name: Option<String>
///     address: Address,       // Nullish<EditableAddress> (deep)
///     tags: Vec<String>,      // Option<Vec<String>>
/// }
/// ```
///
/// # Attributes
///
/// - `#[editable(deep)]`: when this struct is a field of another editable
///   struct, its own fields become editable too instead of it being kept whole.
/// - `#[editable(derive(...))]`: extra derives for the generated structs.
///
/// `#[serde(rename = "...")]`, `#[serde(rename_all = "...")]` and
/// `#[serde(skip)]` are honoured, so the generated structs use the same JSON
/// keys as the validated struct.
///
/// On enums, only `EditableField` and `NullableField` are implemented:
/// fieldless enums are primitive slots (`Option<E>`), enums with data are
/// kept whole (`Nullish<E>`).
#[proc_macro_derive(Editable, attributes(editable))]
pub fn derive_editable(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    editable::expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Derive macro that generates typed field-path accessors.
///
/// For a struct it generates `{Name}Paths<R>` with one method per field,
/// each returning the path type of the field's type (`FieldPath` for
/// leaves, `ArrayPath` for `Vec`, the generated accessors for nested
/// structs).
///
/// # Discriminated unions
///
/// ```ignore
/// #[derive(Serialize, Deserialize, FieldPaths)]
/// #[serde(tag = "kind", rename_all = "snake_case")]
/// enum Payment {
///     Card { number: String },
///     BankTransfer { iban: String },
/// }
///
/// let number = paths::<Payment>().card().number();
/// assert_eq!(number.as_str(), "number");
/// assert_eq!(number.discriminator(), Some(&Discriminator::new("kind", "card")));
/// ```
///
/// Internally tagged enums (`#[serde(tag = "...")]`, or `#[paths(tag = "...")]`
/// when serde is configured differently) get an accessor for the tag field
/// plus one per variant. Variant accessors return `{Name}{Variant}Paths<R>`
/// for struct and unit variants and the inner type's paths for newtype
/// variants. Fieldless enums without a tag are leaves.
#[proc_macro_derive(FieldPaths, attributes(paths))]
pub fn derive_field_paths(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    field_paths::expand(input)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

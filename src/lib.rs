//! # fieldscope: schema introspection for typed forms
//!
//! `fieldscope` reads the structure of a [`fieldscope_schema`] schema to answer
//! the questions a form UI keeps asking while fields are rendered:
//!
//! - what does this field start out as? ([`get_schema_defaults`], [`extract_default`])
//! - does leaving it empty fail validation? ([`is_required_field`], [`requires_valid_input`])
//! - which schema node sits at `items.0.title` in the active union member?
//!   ([`extract_field_from_schema`])
//! - which constraints should the hint text mention? ([`get_field_checks`])
//!
//! The compile-time side mirrors these answers: [`Editable`] derives the
//! editing-time counterpart of a validated struct and `#[derive(FieldPaths)]`
//! turns field paths into typed method chains.
//!
//! ## Quick start
//!
//! ```rust
//! use fieldscope::schema::{self as z, prelude::*};
//! use fieldscope::{get_schema_defaults, is_required_field, Discriminator, FieldSelector};
//!
//! let schema = z::discriminated_union("mode")
//!     .variant(
//!         z::object()
//!             .field("mode", z::literal("create"))
//!             .field("name", z::string().min(1)),
//!     )
//!     .variant(
//!         z::object()
//!             .field("mode", z::literal("edit"))
//!             .field("id", z::number().with_default(1)),
//!     )
//!     .into_node();
//!
//! let edit = Discriminator::new("mode", "edit");
//! assert_eq!(get_schema_defaults(&schema, Some(&edit))["id"], 1);
//!
//! let create = Discriminator::new("mode", "create");
//! let name = FieldSelector::new(&schema, "name").with_discriminator(Some(&create));
//! assert!(is_required_field(&name));
//!
//! // without a selection the field is unresolvable, hence not required
//! assert!(!is_required_field(&FieldSelector::new(&schema, "name")));
//! ```
//!
//! All introspection is total: unresolvable fields come back as `None`,
//! `false` or an empty list, never as a panic.

pub mod checks;
pub mod defaults;
pub mod editable;
pub mod path;
pub mod paths;
pub mod requirement;
pub mod walker;

pub use fieldscope_schema as schema;

// Re-exports used by generated code
#[doc(hidden)]
pub use serde;
#[doc(hidden)]
pub use serde_json;

#[cfg(feature = "derive")]
pub use fieldscope_derive::{Editable, FieldPaths};

pub use checks::{field_checks, get_field_checks, NumberFormat, StringFormat, ValidationCheck};
pub use defaults::get_schema_defaults;
pub use editable::{
    AllNullable, Editable, EditableField, EditableOf, EditableValue, NullableField, Nullish,
};
pub use path::{
    extract_discriminated_schema, extract_field_from_schema, split_path, Discriminator,
    FieldSelector, RouteSelection, Segment,
};
pub use paths::{
    paths, ArrayPath, BoolValue, FieldPath, NumberValue, PathGroup, PathNode, PathPrefix,
    TextValue,
};
pub use requirement::{is_required_field, requires_valid_input};
pub use walker::{
    collect_object_defaults, extract_default, primitive_type, strip_default, unwrap_to_primitive,
    PrimitiveType, UnwrapOptions,
};

/// Prelude: the introspection functions, path types and schema builders.
pub mod prelude {
    pub use crate::schema::prelude::*;
    pub use crate::{
        extract_field_from_schema, field_checks, get_field_checks, get_schema_defaults,
        is_required_field, paths, requires_valid_input, Discriminator, Editable, EditableField,
        FieldPath, FieldSelector, Nullish, PathNode, ValidationCheck,
    };
}

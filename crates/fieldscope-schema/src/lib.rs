//! # fieldscope-schema: introspectable validation schemas
//!
//! A small Zod-style schema engine whose nodes can be *looked at* as well as
//! run. Every node reports a [`NodeKind`], so tooling can walk wrappers
//! (`optional`, `nullable`, `default`, pipelines, refinements) down to the
//! primitive they decorate, read the constraints attached to it and check
//! whether it accepts a given value.
//!
//! ```rust
//! use fieldscope_schema::prelude::*;
//! use fieldscope_schema as z;
//!
//! let user = z::object()
//!     .field("name", z::string().min(2))
//!     .field("age", z::number().int().optional())
//!     .field("role", z::enumeration(&["admin", "user"]).with_default("user"));
//!
//! let parsed = user.parse(r#"{"name": "Alex"}"#).unwrap();
//! assert_eq!(parsed["role"], "user");
//! assert!(parsed.get("age").is_none());
//!
//! let NodeKind::Object(shape) = user.kind() else { unreachable!() };
//! assert_eq!(shape.keyof(), vec!["name", "age", "role"]);
//! ```
//!
//! Absent and `null` are distinct inputs: [`SchemaNode::parse_input`] takes
//! `None` for a missing key and `Some(&Value::Null)` for an explicit null.

pub mod collections;
pub mod combinators;
pub mod error;
pub mod input;
pub mod modifiers;
mod node;
pub mod object;
pub mod primitives;

pub use node::{IntoNode, Node, NodeKind, SchemaExt, SchemaNode};

// ---------------------------------------------------------------------------
// Convenience constructors
// ---------------------------------------------------------------------------

/// Create a string schema.
pub fn string() -> primitives::ZString {
    primitives::ZString::new()
}

/// Create a number schema (`f64`).
pub fn number() -> primitives::ZNumber {
    primitives::ZNumber::new()
}

/// Create a boolean schema.
pub fn boolean() -> primitives::ZBoolean {
    primitives::ZBoolean::new()
}

/// Create a schema that only accepts `value`.
pub fn literal(value: impl Into<serde_json::Value>) -> primitives::ZLiteral {
    primitives::ZLiteral::new(value)
}

/// Create a string enum schema.
///
/// ```
/// use fieldscope_schema::prelude::*;
///
/// let color = fieldscope_schema::enumeration(&["red", "green"]);
/// assert!(color.parse(r#""red""#).is_ok());
/// assert!(color.parse(r#""blue""#).is_err());
/// ```
pub fn enumeration(variants: &[&str]) -> primitives::ZEnum {
    primitives::ZEnum::new(variants)
}

/// Create a schema accepting anything, including an absent value.
pub fn any() -> primitives::ZAny {
    primitives::ZAny::new()
}

/// Create an array schema.
pub fn array(element: impl IntoNode) -> collections::ZArray {
    collections::ZArray::new(element.into_node())
}

/// Create an empty object schema. Add fields with [`ZObject::field`](object::ZObject::field).
pub fn object() -> object::ZObject {
    object::ZObject::new()
}

/// Create a discriminated union keyed on `discriminator`.
pub fn discriminated_union(discriminator: impl Into<String>) -> combinators::ZDiscriminatedUnion {
    combinators::ZDiscriminatedUnion::new(discriminator)
}

/// Create a union of two schemas; chain more with [`ZUnion::or`](combinators::ZUnion::or).
pub fn union(a: impl IntoNode, b: impl IntoNode) -> combinators::ZUnion {
    combinators::ZUnion::new(vec![a.into_node(), b.into_node()])
}

/// Prelude: import everything commonly needed.
pub mod prelude {
    pub use crate::collections::{ArrayCheck, ZArray};
    pub use crate::combinators::{
        ZDescribe, ZDiscriminatedUnion, ZPipe, ZRefine, ZTransform, ZUnion,
    };
    pub use crate::error::{IssueCode, PathSegment, SchemaError, ValidationIssue};
    pub use crate::input::SchemaInput;
    pub use crate::modifiers::{DefaultValue, ZDefault, ZNullable, ZOptional};
    pub use crate::object::{UnknownKeys, ZObject};
    pub use crate::primitives::{
        NumberCheck, StringCheck, ZAny, ZBoolean, ZEnum, ZLiteral, ZNumber, ZString,
    };
    pub use crate::{IntoNode, Node, NodeKind, SchemaExt, SchemaNode};
}

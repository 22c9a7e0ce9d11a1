use serde_json::{json, Value};

use fieldscope_schema::{Node, NodeKind};

use crate::path::{extract_field_from_schema, FieldSelector};
use crate::walker::{strip_default, unwrap_to_primitive, UnwrapOptions};

/// Whether an empty submission of this field fails validation.
///
/// A field does *not* require input when any of these hold:
///
/// 1. with its default removed, it accepts an absent value;
/// 2. it accepts `null`;
/// 3. its terminal type is a string and it accepts `""`;
/// 4. its terminal type is an array and it accepts `[]`.
///
/// Acceptance is asked of the schema itself, so any stack of wrappers and
/// refinements is judged the way validation would judge it. Defaults count
/// as initial values only: `number().with_default(0)` still requires input.
///
/// ```
/// use fieldscope::schema::{self as z, prelude::*};
/// use fieldscope::requires_valid_input;
///
/// assert!(!requires_valid_input(&z::string().into_node()));
/// assert!(requires_valid_input(&z::string().min(1).into_node()));
/// assert!(requires_valid_input(&z::number().into_node()));
/// assert!(!requires_valid_input(&z::number().optional().into_node()));
/// ```
pub fn requires_valid_input(node: &Node) -> bool {
    let accepts_empty = || match unwrap_to_primitive(node, UnwrapOptions::default()).kind() {
        NodeKind::String(_) => node.accepts(Some(&Value::String(String::new()))),
        NodeKind::Array(_) => node.accepts(Some(&json!([]))),
        _ => false,
    };

    let optional = strip_default(node).accepts(None)
        || node.accepts(Some(&Value::Null))
        || accepts_empty();
    !optional
}

/// [`requires_valid_input`] for the field a selector addresses.
///
/// Unresolvable fields, including union fields without a discriminator,
/// are reported as not required.
pub fn is_required_field(selector: &FieldSelector<'_>) -> bool {
    extract_field_from_schema(selector).map_or(false, |field| requires_valid_input(&field))
}

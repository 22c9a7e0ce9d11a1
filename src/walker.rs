//! Wrapper-walking primitives over schema nodes.
//!
//! Every introspection question starts by peeling `optional`, `nullable`,
//! `default`, transform/refine and pipeline wrappers off a field until the
//! node that actually describes the value is reached. Pipelines are always
//! followed on their *input* side: introspection describes what may be typed,
//! not what validation produces.

use serde_json::{Map, Value};

use fieldscope_schema::object::ZObject;
use fieldscope_schema::{IntoNode, Node, NodeKind, SchemaExt};

/// Options for [`unwrap_to_primitive`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct UnwrapOptions {
    /// Continue into the element schema when an array is reached.
    pub unwrap_arrays: bool,
}

impl UnwrapOptions {
    pub fn through_arrays() -> Self {
        Self {
            unwrap_arrays: true,
        }
    }
}

/// Classification of the node reached by [`unwrap_to_primitive`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PrimitiveType {
    String,
    Number,
    Boolean,
    Literal,
    Enum,
    Any,
    Array,
    Object,
    DiscriminatedUnion,
    Union,
}

impl PrimitiveType {
    /// `None` for wrapper kinds.
    pub fn of(kind: NodeKind<'_>) -> Option<Self> {
        Some(match kind {
            NodeKind::String(_) => PrimitiveType::String,
            NodeKind::Number(_) => PrimitiveType::Number,
            NodeKind::Boolean => PrimitiveType::Boolean,
            NodeKind::Literal(_) => PrimitiveType::Literal,
            NodeKind::Enum(_) => PrimitiveType::Enum,
            NodeKind::Any => PrimitiveType::Any,
            NodeKind::Array(_) => PrimitiveType::Array,
            NodeKind::Object(_) => PrimitiveType::Object,
            NodeKind::DiscriminatedUnion(_) => PrimitiveType::DiscriminatedUnion,
            NodeKind::Union(_) => PrimitiveType::Union,
            NodeKind::Optional(_)
            | NodeKind::Nullable(_)
            | NodeKind::Default(_)
            | NodeKind::Pipe { .. }
            | NodeKind::Effects(_) => return None,
        })
    }
}

/// Whether `kind` is terminal, i.e. not a unary wrapper.
pub fn is_primitive_kind(kind: NodeKind<'_>) -> bool {
    kind.wrapped().is_none()
}

/// Follow unary wrappers until a terminal node is reached.
///
/// Arrays are terminal unless `options.unwrap_arrays` is set, in which case
/// the walk continues into the element schema. Applying this to its own
/// result is a no-op.
///
/// ```
/// use fieldscope::schema::{self as z, prelude::*};
/// use fieldscope::walker::{unwrap_to_primitive, UnwrapOptions};
///
/// let field = z::string().min(1).optional().nullable().with_default("x").into_node();
/// let leaf = unwrap_to_primitive(&field, UnwrapOptions::default());
/// assert_eq!(leaf.kind().name(), "string");
/// ```
pub fn unwrap_to_primitive(node: &Node, options: UnwrapOptions) -> Node {
    let mut current = node.clone();
    loop {
        let next = match current.kind() {
            NodeKind::Array(array) if options.unwrap_arrays => Some(array.element().clone()),
            kind => kind.wrapped().cloned(),
        };
        match next {
            Some(inner) => current = inner,
            None => return current,
        }
    }
}

/// Remove a `default` wrapper while keeping the optional/nullable layers
/// around it.
///
/// A default node yields its child. Optional and nullable nodes are rebuilt
/// around the stripped inner node, in the same nesting order. Anything else
/// is returned as is.
pub fn strip_default(node: &Node) -> Node {
    match node.kind() {
        NodeKind::Default(default) => default.inner_schema().clone(),
        NodeKind::Optional(inner) => strip_default(inner).optional().into_node(),
        NodeKind::Nullable(inner) => strip_default(inner).nullable().into_node(),
        _ => node.clone(),
    }
}

/// The default a field declares, looking through wrappers.
///
/// Producers are invoked on every call. `None` means "no default", which is
/// distinct from a declared default of `null`.
pub fn extract_default(node: &Node) -> Option<Value> {
    match node.kind() {
        NodeKind::Default(default) => Some(default.default_value().evaluate()),
        kind => kind.wrapped().and_then(extract_default),
    }
}

/// Defaults for every field of an object schema.
///
/// An explicit default wins. A field without one whose unwrapped type is
/// itself an object contributes its own collected defaults, but only when
/// that nested map is non-empty. Fields with neither are omitted.
pub fn collect_object_defaults(object: &ZObject) -> Map<String, Value> {
    let mut defaults = Map::new();
    for (name, field) in object.shape() {
        if let Some(value) = extract_default(field) {
            defaults.insert(name.to_string(), value);
            continue;
        }
        let unwrapped = unwrap_to_primitive(field, UnwrapOptions::default());
        if let NodeKind::Object(nested) = unwrapped.kind() {
            let nested_defaults = collect_object_defaults(nested);
            if !nested_defaults.is_empty() {
                defaults.insert(name.to_string(), Value::Object(nested_defaults));
            }
        }
    }
    defaults
}

/// Classify the terminal type of `node` (arrays are terminal).
pub fn primitive_type(node: &Node) -> PrimitiveType {
    let leaf = unwrap_to_primitive(node, UnwrapOptions::default());
    PrimitiveType::of(leaf.kind()).unwrap_or(PrimitiveType::Any)
}

/// First description found on `node` or on any wrapper below it.
pub fn find_description(node: &Node) -> Option<String> {
    let mut current = node.clone();
    loop {
        if let Some(description) = current.description() {
            return Some(description.to_string());
        }
        let next = current.kind().wrapped().cloned()?;
        current = next;
    }
}

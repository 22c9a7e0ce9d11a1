use std::fmt;
use std::ops::Deref;
use std::sync::Arc;

use serde_json::Value;

use crate::collections::ZArray;
use crate::combinators::{ZDescribe, ZDiscriminatedUnion, ZPipe, ZRefine, ZTransform};
use crate::error::SchemaError;
use crate::input::SchemaInput;
use crate::modifiers::{DefaultValue, ZDefault, ZNullable, ZOptional};
use crate::object::ZObject;
use crate::primitives::{ZNumber, ZString};

/// Structural view of a schema node.
///
/// Wrapper kinds expose exactly one child; containers expose their children
/// through the borrowed schema type. The vocabulary is closed: every schema in
/// this crate reports one of these kinds.
#[derive(Clone, Copy)]
pub enum NodeKind<'a> {
    String(&'a ZString),
    Number(&'a ZNumber),
    Boolean,
    Literal(&'a Value),
    Enum(&'a [String]),
    Any,
    Array(&'a ZArray),
    Object(&'a ZObject),
    DiscriminatedUnion(&'a ZDiscriminatedUnion),
    Union(&'a [Node]),
    Optional(&'a Node),
    Nullable(&'a Node),
    Default(&'a ZDefault),
    /// Two-stage pipeline; `input` describes what may be typed in.
    Pipe { input: &'a Node, output: &'a Node },
    /// Transform or refinement over `0`.
    Effects(&'a Node),
}

impl<'a> NodeKind<'a> {
    /// Short stable name of the kind (`"string"`, `"optional"`, ...).
    pub fn name(&self) -> &'static str {
        match self {
            NodeKind::String(_) => "string",
            NodeKind::Number(_) => "number",
            NodeKind::Boolean => "boolean",
            NodeKind::Literal(_) => "literal",
            NodeKind::Enum(_) => "enum",
            NodeKind::Any => "any",
            NodeKind::Array(_) => "array",
            NodeKind::Object(_) => "object",
            NodeKind::DiscriminatedUnion(_) => "discriminated_union",
            NodeKind::Union(_) => "union",
            NodeKind::Optional(_) => "optional",
            NodeKind::Nullable(_) => "nullable",
            NodeKind::Default(_) => "default",
            NodeKind::Pipe { .. } => "pipe",
            NodeKind::Effects(_) => "effects",
        }
    }

    /// The child of a unary wrapper, `None` for every other kind.
    ///
    /// Pipelines report their input side.
    pub fn wrapped(&self) -> Option<&'a Node> {
        match *self {
            NodeKind::Optional(inner) | NodeKind::Nullable(inner) | NodeKind::Effects(inner) => {
                Some(inner)
            }
            NodeKind::Default(default) => Some(default.inner_schema()),
            NodeKind::Pipe { input, .. } => Some(input),
            _ => None,
        }
    }
}

/// Object-safe trait implemented by every schema type.
///
/// `None` stands for an absent value (a missing object key). Parsing an
/// absent value may legitimately produce an absent output, which is how
/// optional fields disappear from parsed objects.
pub trait SchemaNode: Send + Sync {
    /// Structural kind of this node.
    fn kind(&self) -> NodeKind<'_>;

    /// Parse and validate a possibly-absent value.
    fn parse_input(&self, input: Option<&Value>) -> Result<Option<Value>, SchemaError>;

    /// Human-readable description attached via [`SchemaExt::describe`].
    fn description(&self) -> Option<&str> {
        None
    }

    /// Whether validating `input` succeeds.
    fn accepts(&self, input: Option<&Value>) -> bool {
        self.parse_input(input).is_ok()
    }

    /// Parse from any supported input (JSON string, bytes, `serde_json::Value`).
    fn parse<I: SchemaInput + ?Sized>(&self, input: &I) -> Result<Value, SchemaError>
    where
        Self: Sized,
    {
        let json = input.to_json_value()?;
        Ok(self.parse_input(Some(&json))?.unwrap_or(Value::Null))
    }
}

/// Shared handle to a schema node.
///
/// Cloning is cheap and preserves identity, so a node can be used as a stable
/// cache key for the lifetime of a form.
#[derive(Clone)]
pub struct Node(Arc<dyn SchemaNode>);

impl Node {
    pub fn new<S: SchemaNode + 'static>(schema: S) -> Self {
        Node(Arc::new(schema))
    }

    /// Whether both handles point at the same schema value.
    pub fn ptr_eq(a: &Node, b: &Node) -> bool {
        Arc::ptr_eq(&a.0, &b.0)
    }

    /// Address-based identity, stable while any clone of the handle is alive.
    pub fn identity(&self) -> usize {
        Arc::as_ptr(&self.0) as *const () as usize
    }

    /// Parse from any supported input.
    pub fn parse<I: SchemaInput + ?Sized>(&self, input: &I) -> Result<Value, SchemaError> {
        let json = input.to_json_value()?;
        Ok(self.0.parse_input(Some(&json))?.unwrap_or(Value::Null))
    }
}

impl Deref for Node {
    type Target = dyn SchemaNode;

    fn deref(&self) -> &Self::Target {
        &*self.0
    }
}

impl fmt::Debug for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Node({})", self.kind().name())?;
        if let Some(desc) = self.description() {
            write!(f, " {:?}", desc)?;
        }
        Ok(())
    }
}

/// Conversion into a shared [`Node`]. Implemented for every schema type and
/// for `Node` itself (without re-wrapping).
pub trait IntoNode {
    fn into_node(self) -> Node;
}

impl<S: SchemaNode + 'static> IntoNode for S {
    fn into_node(self) -> Node {
        Node::new(self)
    }
}

impl IntoNode for Node {
    fn into_node(self) -> Node {
        self
    }
}

impl IntoNode for &Node {
    fn into_node(self) -> Node {
        self.clone()
    }
}

/// Builder methods shared by all schemas.
///
/// # Example
/// ```
/// use fieldscope_schema::prelude::*;
///
/// let bio = fieldscope_schema::string().max(200).optional();
/// assert!(bio.accepts(None));
/// ```
pub trait SchemaExt: IntoNode + Sized {
    /// Accept an absent value.
    fn optional(self) -> ZOptional {
        ZOptional::new(self.into_node())
    }

    /// Accept `null`.
    fn nullable(self) -> ZNullable {
        ZNullable::new(self.into_node())
    }

    /// Accept both an absent value and `null` (`optional(nullable(self))`).
    fn nullish(self) -> ZOptional {
        ZOptional::new(ZNullable::new(self.into_node()).into_node())
    }

    /// Replace an absent value with `value`.
    fn with_default(self, value: impl Into<Value>) -> ZDefault {
        ZDefault::new(self.into_node(), DefaultValue::Static(value.into()))
    }

    /// Replace an absent value with the result of calling `producer`.
    fn default_with<F>(self, producer: F) -> ZDefault
    where
        F: Fn() -> Value + Send + Sync + 'static,
    {
        ZDefault::new(self.into_node(), DefaultValue::Producer(Arc::new(producer)))
    }

    /// Map the parsed value.
    fn transform<F>(self, f: F) -> ZTransform
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        ZTransform::new(self.into_node(), f)
    }

    /// Add a custom check on the parsed value.
    fn refine<F>(self, check: F, message: &str) -> ZRefine
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        ZRefine::new(self.into_node(), check, message)
    }

    /// Feed the parsed value into `next`.
    fn pipe<S: IntoNode>(self, next: S) -> ZPipe {
        ZPipe::new(self.into_node(), next.into_node())
    }

    /// Attach a human-readable description. Does not affect validation.
    fn describe(self, description: &str) -> ZDescribe {
        ZDescribe::new(self.into_node(), description)
    }
}

impl<T: IntoNode> SchemaExt for T {}

use serde_json::Value;

use crate::error::SchemaError;
use crate::node::{Node, NodeKind, SchemaNode};

/// Accepts `null`; everything else (including an absent value) goes to the
/// inner schema.
///
/// The difference from [`ZOptional`](super::ZOptional):
/// - `optional()`: the field may be missing entirely
/// - `nullable()`: the field must be present but may be `null`
pub struct ZNullable {
    inner: Node,
}

impl ZNullable {
    pub fn new(inner: Node) -> Self {
        Self { inner }
    }

    pub fn inner_schema(&self) -> &Node {
        &self.inner
    }
}

impl SchemaNode for ZNullable {
    fn kind(&self) -> NodeKind<'_> {
        NodeKind::Nullable(&self.inner)
    }

    fn parse_input(&self, input: Option<&Value>) -> Result<Option<Value>, SchemaError> {
        match input {
            Some(Value::Null) => Ok(Some(Value::Null)),
            _ => self.inner.parse_input(input),
        }
    }
}

use serde_json::Value;

use crate::error::SchemaError;
use crate::node::{Node, NodeKind, SchemaNode};

/// Accepts an absent value; everything else goes to the inner schema.
///
/// `null` is *not* accepted unless the inner schema accepts it; see
/// [`ZNullable`](super::ZNullable).
pub struct ZOptional {
    inner: Node,
}

impl ZOptional {
    pub fn new(inner: Node) -> Self {
        Self { inner }
    }

    pub fn inner_schema(&self) -> &Node {
        &self.inner
    }
}

impl SchemaNode for ZOptional {
    fn kind(&self) -> NodeKind<'_> {
        NodeKind::Optional(&self.inner)
    }

    fn parse_input(&self, input: Option<&Value>) -> Result<Option<Value>, SchemaError> {
        match input {
            None => Ok(None),
            Some(_) => self.inner.parse_input(input),
        }
    }
}

use serde_json::Value;

use crate::error::SchemaError;
use crate::node::{Node, NodeKind, SchemaNode};

/// Attaches a human-readable description to a schema.
///
/// Metadata only: the node reports the inner schema's kind and validates
/// exactly like it.
///
/// Created via [`SchemaExt::describe()`](crate::SchemaExt::describe).
pub struct ZDescribe {
    inner: Node,
    description: String,
}

impl ZDescribe {
    pub fn new(inner: Node, description: &str) -> Self {
        Self {
            inner,
            description: description.to_string(),
        }
    }

    pub fn inner_schema(&self) -> &Node {
        &self.inner
    }
}

impl SchemaNode for ZDescribe {
    fn kind(&self) -> NodeKind<'_> {
        self.inner.kind()
    }

    fn parse_input(&self, input: Option<&Value>) -> Result<Option<Value>, SchemaError> {
        self.inner.parse_input(input)
    }

    fn description(&self) -> Option<&str> {
        Some(&self.description)
    }
}

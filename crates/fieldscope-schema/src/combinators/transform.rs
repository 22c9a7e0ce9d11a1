use std::sync::Arc;

use serde_json::Value;

use crate::error::SchemaError;
use crate::node::{Node, NodeKind, SchemaNode};

/// Maps the output of a schema after successful parsing.
///
/// An absent output stays absent; the function only sees present values.
///
/// Created via [`SchemaExt::transform()`](crate::SchemaExt::transform).
pub struct ZTransform {
    inner: Node,
    transform_fn: Arc<dyn Fn(Value) -> Value + Send + Sync>,
}

impl ZTransform {
    pub fn new<F>(inner: Node, transform_fn: F) -> Self
    where
        F: Fn(Value) -> Value + Send + Sync + 'static,
    {
        Self {
            inner,
            transform_fn: Arc::new(transform_fn),
        }
    }

    pub fn inner_schema(&self) -> &Node {
        &self.inner
    }
}

impl SchemaNode for ZTransform {
    fn kind(&self) -> NodeKind<'_> {
        NodeKind::Effects(&self.inner)
    }

    fn parse_input(&self, input: Option<&Value>) -> Result<Option<Value>, SchemaError> {
        Ok(self.inner.parse_input(input)?.map(|v| (self.transform_fn)(v)))
    }
}

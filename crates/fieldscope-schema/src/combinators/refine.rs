use std::sync::Arc;

use serde_json::Value;

use crate::error::{IssueCode, SchemaError};
use crate::node::{Node, NodeKind, SchemaNode};

/// Adds a custom check to a schema without changing its output.
///
/// Created via [`SchemaExt::refine()`](crate::SchemaExt::refine).
///
/// # Example
/// ```
/// use fieldscope_schema::prelude::*;
///
/// let even = fieldscope_schema::number()
///     .int()
///     .refine(|v| v.as_i64().map_or(false, |n| n % 2 == 0), "Must be even");
/// assert!(even.parse("4").is_ok());
/// assert!(even.parse("3").is_err());
/// ```
pub struct ZRefine {
    inner: Node,
    check: Arc<dyn Fn(&Value) -> bool + Send + Sync>,
    message: String,
}

impl ZRefine {
    pub fn new<F>(inner: Node, check: F, message: &str) -> Self
    where
        F: Fn(&Value) -> bool + Send + Sync + 'static,
    {
        Self {
            inner,
            check: Arc::new(check),
            message: message.to_string(),
        }
    }

    pub fn inner_schema(&self) -> &Node {
        &self.inner
    }
}

impl SchemaNode for ZRefine {
    fn kind(&self) -> NodeKind<'_> {
        NodeKind::Effects(&self.inner)
    }

    fn parse_input(&self, input: Option<&Value>) -> Result<Option<Value>, SchemaError> {
        let result = self.inner.parse_input(input)?;
        match &result {
            Some(v) if !(self.check)(v) => Err(SchemaError::single_with_value(
                IssueCode::Custom {
                    code: "custom".to_string(),
                },
                self.message.clone(),
                v,
            )),
            _ => Ok(result),
        }
    }
}

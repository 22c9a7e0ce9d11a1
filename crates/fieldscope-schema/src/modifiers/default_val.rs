use std::fmt;
use std::sync::Arc;

use serde_json::Value;

use crate::error::SchemaError;
use crate::node::{Node, NodeKind, SchemaNode};

/// The value a [`ZDefault`] substitutes for an absent input.
#[derive(Clone)]
pub enum DefaultValue {
    Static(Value),
    /// Zero-argument producer, invoked on every evaluation.
    Producer(Arc<dyn Fn() -> Value + Send + Sync>),
}

impl DefaultValue {
    pub fn evaluate(&self) -> Value {
        match self {
            DefaultValue::Static(v) => v.clone(),
            DefaultValue::Producer(f) => f(),
        }
    }
}

impl fmt::Debug for DefaultValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DefaultValue::Static(v) => write!(f, "Static({})", v),
            DefaultValue::Producer(_) => f.write_str("Producer(..)"),
        }
    }
}

/// Substitutes a default for an absent value.
///
/// - absent → the default value
/// - present and valid → the parsed value
/// - present but invalid → an error (NOT the default)
///
/// `null` is a present value and goes to the inner schema.
pub struct ZDefault {
    inner: Node,
    default_value: DefaultValue,
}

impl ZDefault {
    pub fn new(inner: Node, default_value: DefaultValue) -> Self {
        Self {
            inner,
            default_value,
        }
    }

    pub fn inner_schema(&self) -> &Node {
        &self.inner
    }

    pub fn default_value(&self) -> &DefaultValue {
        &self.default_value
    }
}

impl SchemaNode for ZDefault {
    fn kind(&self) -> NodeKind<'_> {
        NodeKind::Default(self)
    }

    fn parse_input(&self, input: Option<&Value>) -> Result<Option<Value>, SchemaError> {
        match input {
            None => Ok(Some(self.default_value.evaluate())),
            Some(_) => self.inner.parse_input(input),
        }
    }
}

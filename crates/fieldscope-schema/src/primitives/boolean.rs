use serde_json::Value;

use crate::error::SchemaError;
use crate::node::{NodeKind, SchemaNode};

/// Schema for boolean validation. Created via [`fieldscope_schema::boolean()`](crate::boolean).
#[derive(Debug, Clone, Default)]
pub struct ZBoolean;

impl ZBoolean {
    pub fn new() -> Self {
        ZBoolean
    }
}

impl SchemaNode for ZBoolean {
    fn kind(&self) -> NodeKind<'_> {
        NodeKind::Boolean
    }

    fn parse_input(&self, input: Option<&Value>) -> Result<Option<Value>, SchemaError> {
        let value = input.ok_or_else(SchemaError::required)?;
        match value {
            Value::Bool(_) => Ok(Some(value.clone())),
            _ => Err(SchemaError::invalid_type("boolean", value)),
        }
    }
}

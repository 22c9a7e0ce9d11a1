use serde_json::Value;

use crate::error::SchemaError;
use crate::node::{NodeKind, SchemaNode};

/// Schema that accepts anything, including an absent value.
#[derive(Debug, Clone, Default)]
pub struct ZAny;

impl ZAny {
    pub fn new() -> Self {
        ZAny
    }
}

impl SchemaNode for ZAny {
    fn kind(&self) -> NodeKind<'_> {
        NodeKind::Any
    }

    fn parse_input(&self, input: Option<&Value>) -> Result<Option<Value>, SchemaError> {
        Ok(input.cloned())
    }
}

use serde_json::Value;

use crate::error::{format_value_short, IssueCode, SchemaError};
use crate::node::{NodeKind, SchemaNode};

/// Schema for exact value matching. Created via [`fieldscope_schema::literal()`](crate::literal).
///
/// Literals are what discriminated-union members use to tag themselves.
///
/// ```
/// use fieldscope_schema::prelude::*;
/// assert!(fieldscope_schema::literal("admin").parse(r#""admin""#).is_ok());
/// assert!(fieldscope_schema::literal(42).parse("41").is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ZLiteral {
    expected: Value,
}

impl ZLiteral {
    pub fn new(expected: impl Into<Value>) -> Self {
        Self {
            expected: expected.into(),
        }
    }

    /// The literal value.
    pub fn value(&self) -> &Value {
        &self.expected
    }
}

impl SchemaNode for ZLiteral {
    fn kind(&self) -> NodeKind<'_> {
        NodeKind::Literal(&self.expected)
    }

    fn parse_input(&self, input: Option<&Value>) -> Result<Option<Value>, SchemaError> {
        let value = input.ok_or_else(SchemaError::required)?;
        if *value == self.expected {
            Ok(Some(value.clone()))
        } else {
            Err(SchemaError::single_with_value(
                IssueCode::InvalidLiteral,
                format!("Expected literal {}", format_value_short(&self.expected)),
                value,
            ))
        }
    }
}

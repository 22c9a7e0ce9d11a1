use serde_json::Value;

use crate::error::{IssueCode, SchemaError};

/// Types that can be fed to [`Node::parse`](crate::Node::parse).
///
/// Implemented for JSON strings (`&str`, `String`), raw bytes (`&[u8]`) and
/// `serde_json::Value`.
pub trait SchemaInput {
    fn to_json_value(&self) -> Result<Value, SchemaError>;
}

impl SchemaInput for Value {
    fn to_json_value(&self) -> Result<Value, SchemaError> {
        Ok(self.clone())
    }
}

impl SchemaInput for str {
    fn to_json_value(&self) -> Result<Value, SchemaError> {
        serde_json::from_str(self)
            .map_err(|e| SchemaError::single(IssueCode::ParseError, format!("Invalid JSON: {}", e)))
    }
}

impl SchemaInput for String {
    fn to_json_value(&self) -> Result<Value, SchemaError> {
        self.as_str().to_json_value()
    }
}

impl SchemaInput for [u8] {
    fn to_json_value(&self) -> Result<Value, SchemaError> {
        serde_json::from_slice(self)
            .map_err(|e| SchemaError::single(IssueCode::ParseError, format!("Invalid JSON: {}", e)))
    }
}

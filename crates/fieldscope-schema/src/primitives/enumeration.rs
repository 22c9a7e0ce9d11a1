use serde_json::Value;

use crate::error::{IssueCode, SchemaError};
use crate::node::{NodeKind, SchemaNode};

/// Schema for string enum validation. Created via [`fieldscope_schema::enumeration()`](crate::enumeration).
///
/// # Example
/// ```
/// use fieldscope_schema::prelude::*;
///
/// let role = fieldscope_schema::enumeration(&["admin", "user", "moderator"]);
/// assert!(role.parse(r#""admin""#).is_ok());
/// assert!(role.parse(r#""hacker""#).is_err());
/// ```
#[derive(Debug, Clone)]
pub struct ZEnum {
    variants: Vec<String>,
}

impl ZEnum {
    pub fn new(variants: &[&str]) -> Self {
        Self {
            variants: variants.iter().map(|s| s.to_string()).collect(),
        }
    }

    /// Create from a Vec of Strings.
    pub fn from_strings(variants: Vec<String>) -> Self {
        Self { variants }
    }

    pub fn variants(&self) -> &[String] {
        &self.variants
    }
}

impl SchemaNode for ZEnum {
    fn kind(&self) -> NodeKind<'_> {
        NodeKind::Enum(&self.variants)
    }

    fn parse_input(&self, input: Option<&Value>) -> Result<Option<Value>, SchemaError> {
        let value = input.ok_or_else(SchemaError::required)?;
        let s = value
            .as_str()
            .ok_or_else(|| SchemaError::invalid_type("string", value))?;

        if self.variants.iter().any(|v| v == s) {
            Ok(Some(value.clone()))
        } else {
            Err(SchemaError::single_with_value(
                IssueCode::InvalidEnumValue,
                format!(
                    "Invalid enum value: \"{}\". Expected one of: {}",
                    s,
                    self.variants
                        .iter()
                        .map(|v| format!("\"{}\"", v))
                        .collect::<Vec<_>>()
                        .join(", ")
                ),
                value,
            ))
        }
    }
}

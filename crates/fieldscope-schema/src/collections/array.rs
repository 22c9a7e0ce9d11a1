use serde_json::Value;

use crate::error::{IssueCode, PathSegment, SchemaError};
use crate::node::{Node, NodeKind, SchemaNode};

/// A declared array length constraint, in declaration order.
#[derive(Debug, Clone, PartialEq)]
pub enum ArrayCheck {
    MinLength(usize),
    MaxLength(usize),
    Length(usize),
}

/// Schema for array validation. Created via [`fieldscope_schema::array()`](crate::array).
///
/// Every element is validated with the single element schema; arrays are
/// homogeneous.
///
/// # Example
/// ```
/// use fieldscope_schema::prelude::*;
///
/// let schema = fieldscope_schema::array(fieldscope_schema::string().min(1)).min_len(1).max_len(10);
/// assert!(schema.parse(r#"["a"]"#).is_ok());
/// assert!(schema.parse("[]").is_err());
/// ```
#[derive(Clone)]
pub struct ZArray {
    element: Node,
    checks: Vec<ArrayCheck>,
}

impl ZArray {
    pub fn new(element: Node) -> Self {
        Self {
            element,
            checks: vec![],
        }
    }

    /// The element schema.
    pub fn element(&self) -> &Node {
        &self.element
    }

    /// Declared length constraints, in declaration order.
    pub fn checks(&self) -> &[ArrayCheck] {
        &self.checks
    }

    /// Minimum number of elements.
    pub fn min_len(mut self, len: usize) -> Self {
        self.checks.push(ArrayCheck::MinLength(len));
        self
    }

    /// Maximum number of elements.
    pub fn max_len(mut self, len: usize) -> Self {
        self.checks.push(ArrayCheck::MaxLength(len));
        self
    }

    /// Exact number of elements.
    pub fn len(mut self, len: usize) -> Self {
        self.checks.push(ArrayCheck::Length(len));
        self
    }

    /// Alias for `min_len(1)`: the array must not be empty.
    pub fn non_empty(self) -> Self {
        self.min_len(1)
    }
}

impl SchemaNode for ZArray {
    fn kind(&self) -> NodeKind<'_> {
        NodeKind::Array(self)
    }

    fn parse_input(&self, input: Option<&Value>) -> Result<Option<Value>, SchemaError> {
        let value = input.ok_or_else(SchemaError::required)?;
        let arr = value
            .as_array()
            .ok_or_else(|| SchemaError::invalid_type("array", value))?;

        let mut errors = SchemaError::new();

        for check in &self.checks {
            match *check {
                ArrayCheck::MinLength(min) if arr.len() < min => errors.push_with_value(
                    IssueCode::TooSmall {
                        minimum: min as f64,
                        inclusive: true,
                    },
                    format!("Array must have at least {} elements", min),
                    value,
                ),
                ArrayCheck::MaxLength(max) if arr.len() > max => errors.push_with_value(
                    IssueCode::TooBig {
                        maximum: max as f64,
                        inclusive: true,
                    },
                    format!("Array must have at most {} elements", max),
                    value,
                ),
                ArrayCheck::Length(exact) if arr.len() != exact => errors.push_with_value(
                    IssueCode::Custom {
                        code: "invalid_length".to_string(),
                    },
                    format!("Array must have exactly {} elements", exact),
                    value,
                ),
                _ => {}
            }
        }

        let mut results = Vec::with_capacity(arr.len());
        for (i, item) in arr.iter().enumerate() {
            match self.element.parse_input(Some(item)) {
                Ok(v) => results.push(v.unwrap_or(Value::Null)),
                Err(e) => errors = errors.merge(e.with_prefix(PathSegment::Index(i))),
            }
        }

        if errors.is_empty() {
            Ok(Some(Value::Array(results)))
        } else {
            Err(errors)
        }
    }
}

use std::fmt;

use serde_json::Value;

/// A segment in a validation error path.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub enum PathSegment {
    /// Object field name.
    Field(String),
    /// Array index.
    Index(usize),
}

impl fmt::Display for PathSegment {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PathSegment::Field(name) => write!(f, ".{}", name),
            PathSegment::Index(idx) => write!(f, "[{}]", idx),
        }
    }
}

/// Type of string format validation that failed.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub enum StringValidation {
    Email,
    Url,
    Uuid,
    StartsWith,
    EndsWith,
    Includes,
    Ipv4,
    IsoDate,
    Hostname,
}

/// Validation issue code: what went wrong.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub enum IssueCode {
    InvalidType { expected: String, received: String },
    TooSmall { minimum: f64, inclusive: bool },
    TooBig { maximum: f64, inclusive: bool },
    InvalidString { validation: StringValidation },
    NotInt,
    NotFinite,
    NotMultipleOf { divisor: f64 },
    /// A required value was absent.
    Required,
    UnrecognizedField,
    InvalidLiteral,
    InvalidEnumValue,
    InvalidDiscriminator,
    InvalidUnion,
    ParseError,
    Custom { code: String },
}

impl IssueCode {
    /// Stable string key for this error code. Useful for i18n and error mapping.
    pub fn key(&self) -> &str {
        match self {
            IssueCode::InvalidType { .. } => "invalid_type",
            IssueCode::TooSmall { .. } => "too_small",
            IssueCode::TooBig { .. } => "too_big",
            IssueCode::InvalidString { .. } => "invalid_string",
            IssueCode::NotInt => "not_int",
            IssueCode::NotFinite => "not_finite",
            IssueCode::NotMultipleOf { .. } => "not_multiple_of",
            IssueCode::Required => "required",
            IssueCode::UnrecognizedField => "unrecognized_field",
            IssueCode::InvalidLiteral => "invalid_literal",
            IssueCode::InvalidEnumValue => "invalid_enum_value",
            IssueCode::InvalidDiscriminator => "invalid_discriminator",
            IssueCode::InvalidUnion => "invalid_union",
            IssueCode::ParseError => "parse_error",
            IssueCode::Custom { code } => code,
        }
    }
}

/// A single validation issue with path, message and received value.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct ValidationIssue {
    pub code: IssueCode,
    pub message: String,
    pub path: Vec<PathSegment>,
    /// The value that was received, `None` when the input was absent.
    pub received: Option<Value>,
}

/// Collection of validation issues.
///
/// Issues are accumulated (not short-circuited), so all problems of an
/// object are reported at once.
#[derive(Debug, Clone, PartialEq, Default)]
#[cfg_attr(feature = "serialize", derive(serde::Serialize))]
pub struct SchemaError {
    pub issues: Vec<ValidationIssue>,
}

impl SchemaError {
    /// Create an empty error container.
    pub fn new() -> Self {
        Self { issues: vec![] }
    }

    /// Create an error with a single issue (no received value).
    pub fn single(code: IssueCode, message: impl Into<String>) -> Self {
        Self {
            issues: vec![ValidationIssue {
                code,
                message: message.into(),
                path: vec![],
                received: None,
            }],
        }
    }

    /// Create an error with a single issue and the received value.
    pub fn single_with_value(code: IssueCode, message: impl Into<String>, received: &Value) -> Self {
        Self {
            issues: vec![ValidationIssue {
                code,
                message: message.into(),
                path: vec![],
                received: Some(truncate_value(received)),
            }],
        }
    }

    /// The issue reported for an absent value that must be present.
    pub fn required() -> Self {
        Self::single(IssueCode::Required, "Required")
    }

    /// Issue for a value of the wrong JSON type.
    pub fn invalid_type(expected: &str, received: &Value) -> Self {
        Self::single_with_value(
            IssueCode::InvalidType {
                expected: expected.to_string(),
                received: value_type_name(received),
            },
            format!("Expected {}, received {}", expected, value_type_name(received)),
            received,
        )
    }

    /// Prepend a path segment to all issues (used for nested objects/arrays).
    pub fn with_prefix(mut self, segment: PathSegment) -> Self {
        for issue in &mut self.issues {
            issue.path.insert(0, segment.clone());
        }
        self
    }

    /// Merge another error's issues into this one.
    pub fn merge(mut self, other: SchemaError) -> Self {
        self.issues.extend(other.issues);
        self
    }

    /// Check if there are no issues.
    pub fn is_empty(&self) -> bool {
        self.issues.is_empty()
    }

    /// Push a single issue with the received value.
    pub fn push_with_value(&mut self, code: IssueCode, message: impl Into<String>, received: &Value) {
        self.issues.push(ValidationIssue {
            code,
            message: message.into(),
            path: vec![],
            received: Some(truncate_value(received)),
        });
    }

    /// Issues grouped by their dotted path (`""` for root-level issues).
    ///
    /// Dotted paths use the same segment syntax as field names (`items.0.title`).
    pub fn field_messages(&self) -> Vec<(String, String)> {
        self.issues
            .iter()
            .map(|issue| {
                let path = issue
                    .path
                    .iter()
                    .map(|segment| match segment {
                        PathSegment::Field(name) => name.clone(),
                        PathSegment::Index(idx) => idx.to_string(),
                    })
                    .collect::<Vec<_>>()
                    .join(".");
                (path, issue.message.clone())
            })
            .collect()
    }
}

impl fmt::Display for SchemaError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (i, issue) in self.issues.iter().enumerate() {
            if i > 0 {
                writeln!(f)?;
            }
            if !issue.path.is_empty() {
                let path_str: String = issue.path.iter().map(|p| p.to_string()).collect();
                write!(f, "{}: ", path_str)?;
            }
            write!(f, "{}", issue.message)?;
            if let Some(val) = &issue.received {
                write!(f, ", received {}", format_value_short(val))?;
            }
        }
        Ok(())
    }
}

impl std::error::Error for SchemaError {}

/// Returns the JSON type name for a value.
pub fn value_type_name(value: &Value) -> String {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
    .to_string()
}

/// Format a JSON value for display in errors (short form).
pub fn format_value_short(value: &Value) -> String {
    match value {
        Value::Null => "null".to_string(),
        Value::Bool(b) => b.to_string(),
        Value::Number(n) => n.to_string(),
        Value::String(s) => {
            if s.chars().count() > 50 {
                let head: String = s.chars().take(47).collect();
                format!("\"{}...\"", head)
            } else {
                format!("\"{}\"", s)
            }
        }
        Value::Array(arr) => format!("Array(len={})", arr.len()),
        Value::Object(obj) => format!("Object(keys={})", obj.len()),
    }
}

/// Truncate large values to avoid storing huge payloads in errors.
fn truncate_value(value: &Value) -> Value {
    match value {
        Value::String(s) if s.chars().count() > 100 => {
            let head: String = s.chars().take(97).collect();
            Value::String(format!("{}...", head))
        }
        Value::Array(arr) if arr.len() > 5 => {
            let mut truncated: Vec<Value> = arr[..5].to_vec();
            truncated.push(Value::String(format!("... ({} more)", arr.len() - 5)));
            Value::Array(truncated)
        }
        _ => value.clone(),
    }
}

use serde::{Deserialize, Serialize};

use fieldscope_schema::collections::ArrayCheck;
use fieldscope_schema::primitives::{NumberCheck, StringCheck};
use fieldscope_schema::{Node, NodeKind};

use crate::path::{extract_field_from_schema, FieldSelector};
use crate::walker::{unwrap_to_primitive, UnwrapOptions};

/// A declared constraint in a form suitable for UI hints.
///
/// Serialized with a `check` tag:
/// `{"check": "min_length", "minimum": 3}`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "check", rename_all = "snake_case")]
pub enum ValidationCheck {
    MinLength { minimum: usize },
    MaxLength { maximum: usize },
    LengthEquals { length: usize },
    GreaterThan { value: f64, inclusive: bool },
    LessThan { value: f64, inclusive: bool },
    MultipleOf { value: f64 },
    NumberFormat { format: NumberFormat },
    StringFormat { format: StringFormat },
    StartsWith { prefix: String },
    EndsWith { suffix: String },
    Includes { substring: String },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum NumberFormat {
    Int,
    #[serde(rename = "safeint")]
    SafeInt,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StringFormat {
    Email,
    Url,
    Uuid,
    Ipv4,
    IsoDate,
    Hostname,
}

impl ValidationCheck {
    /// The `check` tag this record serializes with.
    pub fn tag(&self) -> &'static str {
        match self {
            ValidationCheck::MinLength { .. } => "min_length",
            ValidationCheck::MaxLength { .. } => "max_length",
            ValidationCheck::LengthEquals { .. } => "length_equals",
            ValidationCheck::GreaterThan { .. } => "greater_than",
            ValidationCheck::LessThan { .. } => "less_than",
            ValidationCheck::MultipleOf { .. } => "multiple_of",
            ValidationCheck::NumberFormat { .. } => "number_format",
            ValidationCheck::StringFormat { .. } => "string_format",
            ValidationCheck::StartsWith { .. } => "starts_with",
            ValidationCheck::EndsWith { .. } => "ends_with",
            ValidationCheck::Includes { .. } => "includes",
        }
    }
}

fn string_check(check: &StringCheck) -> ValidationCheck {
    match check {
        StringCheck::Min(minimum, _) => ValidationCheck::MinLength { minimum: *minimum },
        StringCheck::Max(maximum, _) => ValidationCheck::MaxLength { maximum: *maximum },
        StringCheck::Len(length, _) => ValidationCheck::LengthEquals { length: *length },
        StringCheck::Email(_) => ValidationCheck::StringFormat {
            format: StringFormat::Email,
        },
        StringCheck::Url(_) => ValidationCheck::StringFormat {
            format: StringFormat::Url,
        },
        StringCheck::Uuid(_) => ValidationCheck::StringFormat {
            format: StringFormat::Uuid,
        },
        StringCheck::Ipv4(_) => ValidationCheck::StringFormat {
            format: StringFormat::Ipv4,
        },
        StringCheck::IsoDate(_) => ValidationCheck::StringFormat {
            format: StringFormat::IsoDate,
        },
        StringCheck::Hostname(_) => ValidationCheck::StringFormat {
            format: StringFormat::Hostname,
        },
        StringCheck::StartsWith(prefix, _) => ValidationCheck::StartsWith {
            prefix: prefix.clone(),
        },
        StringCheck::EndsWith(suffix, _) => ValidationCheck::EndsWith {
            suffix: suffix.clone(),
        },
        StringCheck::Contains(substring, _) => ValidationCheck::Includes {
            substring: substring.clone(),
        },
    }
}

fn number_check(check: &NumberCheck) -> Option<ValidationCheck> {
    let mapped = match check {
        NumberCheck::Min(value, _) => ValidationCheck::GreaterThan {
            value: *value,
            inclusive: true,
        },
        NumberCheck::Gt(value, _) => ValidationCheck::GreaterThan {
            value: *value,
            inclusive: false,
        },
        NumberCheck::Max(value, _) => ValidationCheck::LessThan {
            value: *value,
            inclusive: true,
        },
        NumberCheck::Lt(value, _) => ValidationCheck::LessThan {
            value: *value,
            inclusive: false,
        },
        NumberCheck::Positive(_) => ValidationCheck::GreaterThan {
            value: 0.0,
            inclusive: false,
        },
        NumberCheck::NonNegative(_) => ValidationCheck::GreaterThan {
            value: 0.0,
            inclusive: true,
        },
        NumberCheck::Negative(_) => ValidationCheck::LessThan {
            value: 0.0,
            inclusive: false,
        },
        NumberCheck::NonPositive(_) => ValidationCheck::LessThan {
            value: 0.0,
            inclusive: true,
        },
        NumberCheck::MultipleOf(value, _) => ValidationCheck::MultipleOf { value: *value },
        NumberCheck::Int(_) => ValidationCheck::NumberFormat {
            format: NumberFormat::Int,
        },
        NumberCheck::Safe(_) => ValidationCheck::NumberFormat {
            format: NumberFormat::SafeInt,
        },
        NumberCheck::Finite(_) => return None,
    };
    Some(mapped)
}

fn array_check(check: &ArrayCheck) -> ValidationCheck {
    match check {
        ArrayCheck::MinLength(minimum) => ValidationCheck::MinLength { minimum: *minimum },
        ArrayCheck::MaxLength(maximum) => ValidationCheck::MaxLength { maximum: *maximum },
        ArrayCheck::Length(length) => ValidationCheck::LengthEquals { length: *length },
    }
}

/// Declared constraints of a field's terminal node, in declaration order.
///
/// Constraints without a hint form are left out. Non-constrainable kinds
/// yield an empty list.
///
/// ```
/// use fieldscope::schema::{self as z, prelude::*};
/// use fieldscope::{get_field_checks, ValidationCheck};
///
/// let checks = get_field_checks(&z::string().min(3).max(20).optional().into_node());
/// assert_eq!(
///     checks,
///     vec![
///         ValidationCheck::MinLength { minimum: 3 },
///         ValidationCheck::MaxLength { maximum: 20 },
///     ]
/// );
/// ```
pub fn get_field_checks(node: &Node) -> Vec<ValidationCheck> {
    let leaf = unwrap_to_primitive(node, UnwrapOptions::default());
    match leaf.kind() {
        NodeKind::String(string) => string.checks().iter().map(string_check).collect(),
        NodeKind::Number(number) => number.checks().iter().filter_map(number_check).collect(),
        NodeKind::Array(array) => array.checks().iter().map(array_check).collect(),
        _ => vec![],
    }
}

/// [`get_field_checks`] for the field a selector addresses; empty when the
/// field does not resolve.
pub fn field_checks(selector: &FieldSelector<'_>) -> Vec<ValidationCheck> {
    extract_field_from_schema(selector)
        .map(|field| get_field_checks(&field))
        .unwrap_or_default()
}

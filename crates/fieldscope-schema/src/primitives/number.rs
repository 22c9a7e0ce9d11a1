use serde_json::Value;

use crate::error::{IssueCode, SchemaError};
use crate::node::{NodeKind, SchemaNode};

const MAX_SAFE_INTEGER: f64 = 9_007_199_254_740_991.0;

/// A declared numeric constraint, in declaration order.
///
/// The trailing `String` is the error message reported on failure.
#[derive(Debug, Clone, PartialEq)]
pub enum NumberCheck {
    /// Inclusive lower bound.
    Min(f64, String),
    /// Inclusive upper bound.
    Max(f64, String),
    /// Exclusive lower bound.
    Gt(f64, String),
    /// Exclusive upper bound.
    Lt(f64, String),
    Int(String),
    Positive(String),
    Negative(String),
    NonNegative(String),
    NonPositive(String),
    Finite(String),
    MultipleOf(f64, String),
    Safe(String),
}

/// `n / divisor` lands within rounding error of a whole number. A zero
/// divisor admits everything.
fn is_multiple_of(n: f64, divisor: f64) -> bool {
    if divisor == 0.0 {
        return true;
    }
    let quotient = n / divisor;
    (quotient - quotient.round()).abs() <= 1e-9
}

impl NumberCheck {
    /// Stable key identifying the check category.
    pub fn key(&self) -> &str {
        match self {
            NumberCheck::Min(..) | NumberCheck::Gt(..) => "too_small",
            NumberCheck::Max(..) | NumberCheck::Lt(..) => "too_big",
            NumberCheck::Int(..) => "not_int",
            NumberCheck::Positive(..) => "not_positive",
            NumberCheck::Negative(..) => "not_negative",
            NumberCheck::NonNegative(..) => "not_non_negative",
            NumberCheck::NonPositive(..) => "not_non_positive",
            NumberCheck::Finite(..) => "not_finite",
            NumberCheck::MultipleOf(..) => "not_multiple_of",
            NumberCheck::Safe(..) => "not_safe",
        }
    }

    fn set_message(&mut self, msg: String) {
        match self {
            NumberCheck::Min(_, m)
            | NumberCheck::Max(_, m)
            | NumberCheck::Gt(_, m)
            | NumberCheck::Lt(_, m)
            | NumberCheck::Int(m)
            | NumberCheck::Positive(m)
            | NumberCheck::Negative(m)
            | NumberCheck::NonNegative(m)
            | NumberCheck::NonPositive(m)
            | NumberCheck::Finite(m)
            | NumberCheck::MultipleOf(_, m)
            | NumberCheck::Safe(m) => *m = msg,
        }
    }

    fn run(&self, n: f64, value: &Value, errors: &mut SchemaError) {
        let too_small = |minimum: f64, inclusive: bool| IssueCode::TooSmall { minimum, inclusive };
        let too_big = |maximum: f64, inclusive: bool| IssueCode::TooBig { maximum, inclusive };
        let (code, message) = match self {
            NumberCheck::Min(min, msg) if n < *min => (too_small(*min, true), msg),
            NumberCheck::Max(max, msg) if n > *max => (too_big(*max, true), msg),
            NumberCheck::Gt(min, msg) if n <= *min => (too_small(*min, false), msg),
            NumberCheck::Lt(max, msg) if n >= *max => (too_big(*max, false), msg),
            NumberCheck::Int(msg) if n.fract() != 0.0 || !n.is_finite() => (IssueCode::NotInt, msg),
            NumberCheck::Positive(msg) if n <= 0.0 => (too_small(0.0, false), msg),
            NumberCheck::Negative(msg) if n >= 0.0 => (too_big(0.0, false), msg),
            NumberCheck::NonNegative(msg) if n < 0.0 => (too_small(0.0, true), msg),
            NumberCheck::NonPositive(msg) if n > 0.0 => (too_big(0.0, true), msg),
            NumberCheck::Finite(msg) if !n.is_finite() => (IssueCode::NotFinite, msg),
            NumberCheck::MultipleOf(divisor, msg) if !is_multiple_of(n, *divisor) => {
                (IssueCode::NotMultipleOf { divisor: *divisor }, msg)
            }
            NumberCheck::Safe(msg) if n.abs() > MAX_SAFE_INTEGER => {
                (too_big(MAX_SAFE_INTEGER, true), msg)
            }
            _ => return,
        };
        errors.push_with_value(code, message.clone(), value);
    }
}

/// Schema for number validation (`f64`). Created via [`fieldscope_schema::number()`](crate::number).
///
/// # Example
/// ```
/// use fieldscope_schema::prelude::*;
///
/// let schema = fieldscope_schema::number().int().min(0.0).max(100.0);
/// assert!(schema.parse("42").is_ok());
/// assert!(schema.parse("4.2").is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ZNumber {
    checks: Vec<NumberCheck>,
}

impl ZNumber {
    pub fn new() -> Self {
        Self { checks: vec![] }
    }

    /// Declared constraints, in declaration order.
    pub fn checks(&self) -> &[NumberCheck] {
        &self.checks
    }

    /// Whether an `int()` constraint is declared.
    pub fn is_int(&self) -> bool {
        self.checks.iter().any(|c| matches!(c, NumberCheck::Int(_)))
    }

    /// Override error messages in bulk by check key.
    pub fn with_messages<F>(mut self, f: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        for check in &mut self.checks {
            if let Some(msg) = f(check.key()) {
                check.set_message(msg);
            }
        }
        self
    }

    /// Minimum value (inclusive). Alias: `gte`.
    pub fn min(mut self, val: f64) -> Self {
        self.checks.push(NumberCheck::Min(
            val,
            format!("Number must be at least {}", val),
        ));
        self
    }

    /// Maximum value (inclusive). Alias: `lte`.
    pub fn max(mut self, val: f64) -> Self {
        self.checks.push(NumberCheck::Max(
            val,
            format!("Number must be at most {}", val),
        ));
        self
    }

    /// Greater than (exclusive).
    pub fn gt(mut self, val: f64) -> Self {
        self.checks.push(NumberCheck::Gt(
            val,
            format!("Number must be greater than {}", val),
        ));
        self
    }

    /// Greater than or equal (inclusive). Same as `min`.
    pub fn gte(self, val: f64) -> Self {
        self.min(val)
    }

    /// Less than (exclusive).
    pub fn lt(mut self, val: f64) -> Self {
        self.checks.push(NumberCheck::Lt(
            val,
            format!("Number must be less than {}", val),
        ));
        self
    }

    /// Less than or equal (inclusive). Same as `max`.
    pub fn lte(self, val: f64) -> Self {
        self.max(val)
    }

    /// Must be an integer.
    pub fn int(mut self) -> Self {
        self.checks
            .push(NumberCheck::Int("Expected integer, received float".to_string()));
        self
    }

    /// Must be positive (> 0).
    pub fn positive(mut self) -> Self {
        self.checks
            .push(NumberCheck::Positive("Number must be positive".to_string()));
        self
    }

    /// Must be negative (< 0).
    pub fn negative(mut self) -> Self {
        self.checks
            .push(NumberCheck::Negative("Number must be negative".to_string()));
        self
    }

    /// Must be non-negative (>= 0).
    pub fn non_negative(mut self) -> Self {
        self.checks.push(NumberCheck::NonNegative(
            "Number must be non-negative".to_string(),
        ));
        self
    }

    /// Must be non-positive (<= 0).
    pub fn non_positive(mut self) -> Self {
        self.checks.push(NumberCheck::NonPositive(
            "Number must be non-positive".to_string(),
        ));
        self
    }

    /// Must be finite (not infinity or NaN).
    pub fn finite(mut self) -> Self {
        self.checks
            .push(NumberCheck::Finite("Number must be finite".to_string()));
        self
    }

    /// Must be a multiple of `val`.
    pub fn multiple_of(mut self, val: f64) -> Self {
        self.checks.push(NumberCheck::MultipleOf(
            val,
            format!("Number must be a multiple of {}", val),
        ));
        self
    }

    /// Must be within the safe integer range (±2^53 - 1).
    pub fn safe(mut self) -> Self {
        self.checks.push(NumberCheck::Safe(
            "Number must be a safe integer".to_string(),
        ));
        self
    }
}

impl SchemaNode for ZNumber {
    fn kind(&self) -> NodeKind<'_> {
        NodeKind::Number(self)
    }

    fn parse_input(&self, input: Option<&Value>) -> Result<Option<Value>, SchemaError> {
        let value = input.ok_or_else(SchemaError::required)?;
        let n = value
            .as_f64()
            .ok_or_else(|| SchemaError::invalid_type("number", value))?;

        let mut errors = SchemaError::new();
        for check in &self.checks {
            check.run(n, value, &mut errors);
        }

        if errors.is_empty() {
            Ok(Some(value.clone()))
        } else {
            Err(errors)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn multiple_of_tolerates_decimal_rounding() {
        let tenths = ZNumber::new().multiple_of(0.1);
        assert!(tenths.accepts(Some(&json!(0.3))));
        assert!(tenths.accepts(Some(&json!(0.7))));
        assert!(tenths.accepts(Some(&json!(-1.2))));
        assert!(!tenths.accepts(Some(&json!(0.35))));

        let fives = ZNumber::new().multiple_of(5.0);
        assert!(fives.accepts(Some(&json!(15))));
        assert!(!fives.accepts(Some(&json!(7))));
    }

    #[test]
    fn zero_divisor_accepts_everything() {
        assert!(is_multiple_of(3.7, 0.0));
    }
}

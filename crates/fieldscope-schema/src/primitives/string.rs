use serde_json::Value;

use crate::error::{IssueCode, SchemaError, StringValidation};
use crate::node::{NodeKind, SchemaNode};

fn is_valid_email(s: &str) -> bool {
    let at = match s.find('@') {
        Some(pos) if pos > 0 => pos,
        _ => return false,
    };
    let local = &s[..at];
    let domain = &s[at + 1..];
    if local.is_empty() || domain.is_empty() {
        return false;
    }
    let local_ok = local
        .chars()
        .all(|ch| ch.is_ascii_alphanumeric() || "!#$%&'*+/=?^_`{|}~.-".contains(ch));
    local_ok && domain.contains('.') && is_valid_hostname(domain)
}

fn is_valid_uuid(s: &str) -> bool {
    if s.len() != 36 {
        return false;
    }
    s.bytes().enumerate().all(|(i, b)| match i {
        8 | 13 | 18 | 23 => b == b'-',
        _ => b.is_ascii_hexdigit(),
    })
}

fn is_valid_url(s: &str) -> bool {
    let rest = match s.strip_prefix("https://").or_else(|| s.strip_prefix("http://")) {
        Some(r) => r,
        None => return false,
    };
    !rest.is_empty() && !rest.contains(char::is_whitespace)
}

fn is_valid_ipv4(s: &str) -> bool {
    let parts: Vec<&str> = s.split('.').collect();
    if parts.len() != 4 {
        return false;
    }
    parts.iter().all(|part| {
        !part.is_empty()
            && part.len() <= 3
            && !(part.len() > 1 && part.starts_with('0'))
            && matches!(part.parse::<u16>(), Ok(n) if n <= 255)
    })
}

/// Parse exactly `n` ASCII digits from `s`, return the number and remaining slice.
fn parse_digits(s: &str, n: usize) -> Option<(u32, &str)> {
    if s.len() < n || !s.is_char_boundary(n) {
        return None;
    }
    let (digits, rest) = s.split_at(n);
    if !digits.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    digits.parse::<u32>().ok().map(|v| (v, rest))
}

fn is_valid_iso_date(s: &str) -> bool {
    // YYYY-MM-DD
    if s.len() != 10 {
        return false;
    }
    let parsed = parse_digits(s, 4)
        .and_then(|(_, rest)| rest.strip_prefix('-'))
        .and_then(|rest| parse_digits(rest, 2))
        .and_then(|(month, rest)| Some((month, rest.strip_prefix('-')?)))
        .and_then(|(month, rest)| parse_digits(rest, 2).map(|(day, rest)| (month, day, rest)));
    match parsed {
        Some((month, day, "")) => (1..=12).contains(&month) && (1..=31).contains(&day),
        _ => false,
    }
}

fn is_valid_hostname(s: &str) -> bool {
    if s.is_empty() || s.len() > 253 {
        return false;
    }
    s.split('.').all(|label| {
        !label.is_empty()
            && label.len() <= 63
            && !label.starts_with('-')
            && !label.ends_with('-')
            && label.chars().all(|c| c.is_ascii_alphanumeric() || c == '-')
    })
}

/// A declared string constraint, in declaration order.
///
/// The trailing `String` is the error message reported on failure.
#[derive(Debug, Clone, PartialEq)]
pub enum StringCheck {
    Min(usize, String),
    Max(usize, String),
    Len(usize, String),
    Email(String),
    Url(String),
    Uuid(String),
    StartsWith(String, String),
    EndsWith(String, String),
    Contains(String, String),
    Ipv4(String),
    IsoDate(String),
    Hostname(String),
}

impl StringCheck {
    /// Stable key identifying the check category.
    pub fn key(&self) -> &str {
        match self {
            StringCheck::Min(..) => "too_small",
            StringCheck::Max(..) => "too_big",
            StringCheck::Len(..) => "invalid_length",
            StringCheck::Email(..) => "invalid_email",
            StringCheck::Url(..) => "invalid_url",
            StringCheck::Uuid(..) => "invalid_uuid",
            StringCheck::StartsWith(..) => "invalid_starts_with",
            StringCheck::EndsWith(..) => "invalid_ends_with",
            StringCheck::Contains(..) => "invalid_contains",
            StringCheck::Ipv4(..) => "invalid_ipv4",
            StringCheck::IsoDate(..) => "invalid_iso_date",
            StringCheck::Hostname(..) => "invalid_hostname",
        }
    }

    fn set_message(&mut self, msg: String) {
        match self {
            StringCheck::Min(_, m)
            | StringCheck::Max(_, m)
            | StringCheck::Len(_, m)
            | StringCheck::Email(m)
            | StringCheck::Url(m)
            | StringCheck::Uuid(m)
            | StringCheck::Ipv4(m)
            | StringCheck::IsoDate(m)
            | StringCheck::Hostname(m)
            | StringCheck::StartsWith(_, m)
            | StringCheck::EndsWith(_, m)
            | StringCheck::Contains(_, m) => *m = msg,
        }
    }

    fn run(&self, s: &str, value: &Value, errors: &mut SchemaError) {
        let len = s.chars().count();
        let (code, message) = match self {
            StringCheck::Min(min, msg) if len < *min => (
                IssueCode::TooSmall {
                    minimum: *min as f64,
                    inclusive: true,
                },
                msg,
            ),
            StringCheck::Max(max, msg) if len > *max => (
                IssueCode::TooBig {
                    maximum: *max as f64,
                    inclusive: true,
                },
                msg,
            ),
            StringCheck::Len(exact, msg) if len != *exact => (
                IssueCode::Custom {
                    code: "invalid_length".to_string(),
                },
                msg,
            ),
            StringCheck::Email(msg) if !is_valid_email(s) => (invalid(StringValidation::Email), msg),
            StringCheck::Url(msg) if !is_valid_url(s) => (invalid(StringValidation::Url), msg),
            StringCheck::Uuid(msg) if !is_valid_uuid(s) => (invalid(StringValidation::Uuid), msg),
            StringCheck::StartsWith(prefix, msg) if !s.starts_with(prefix.as_str()) => {
                (invalid(StringValidation::StartsWith), msg)
            }
            StringCheck::EndsWith(suffix, msg) if !s.ends_with(suffix.as_str()) => {
                (invalid(StringValidation::EndsWith), msg)
            }
            StringCheck::Contains(sub, msg) if !s.contains(sub.as_str()) => {
                (invalid(StringValidation::Includes), msg)
            }
            StringCheck::Ipv4(msg) if !is_valid_ipv4(s) => (invalid(StringValidation::Ipv4), msg),
            StringCheck::IsoDate(msg) if !is_valid_iso_date(s) => {
                (invalid(StringValidation::IsoDate), msg)
            }
            StringCheck::Hostname(msg) if !is_valid_hostname(s) => {
                (invalid(StringValidation::Hostname), msg)
            }
            _ => return,
        };
        errors.push_with_value(code, message.clone(), value);
    }
}

fn invalid(validation: StringValidation) -> IssueCode {
    IssueCode::InvalidString { validation }
}

/// Schema for string validation. Created via [`fieldscope_schema::string()`](crate::string).
///
/// # Example
/// ```
/// use fieldscope_schema::prelude::*;
///
/// let schema = fieldscope_schema::string().min(3).max(20);
/// assert!(schema.parse(r#""hello""#).is_ok());
/// assert!(schema.parse(r#""hi""#).is_err());
/// ```
#[derive(Debug, Clone, Default)]
pub struct ZString {
    checks: Vec<StringCheck>,
}

impl ZString {
    pub fn new() -> Self {
        Self { checks: vec![] }
    }

    /// Declared constraints, in declaration order.
    pub fn checks(&self) -> &[StringCheck] {
        &self.checks
    }

    /// Override error messages in bulk by check key.
    ///
    /// The closure receives the check key (e.g. `"too_small"`, `"invalid_email"`)
    /// and returns `Some(new_message)` to replace, or `None` to keep the original.
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

    /// Minimum length in characters (inclusive).
    pub fn min(self, len: usize) -> Self {
        self.min_msg(len, format!("String must be at least {} characters", len))
    }

    /// Minimum length with custom message.
    pub fn min_msg(mut self, len: usize, msg: impl Into<String>) -> Self {
        self.checks.push(StringCheck::Min(len, msg.into()));
        self
    }

    /// Maximum length in characters (inclusive).
    pub fn max(self, len: usize) -> Self {
        self.max_msg(len, format!("String must be at most {} characters", len))
    }

    /// Maximum length with custom message.
    pub fn max_msg(mut self, len: usize, msg: impl Into<String>) -> Self {
        self.checks.push(StringCheck::Max(len, msg.into()));
        self
    }

    /// Exact length in characters.
    pub fn len(mut self, len: usize) -> Self {
        self.checks.push(StringCheck::Len(
            len,
            format!("String must be exactly {} characters", len),
        ));
        self
    }

    /// Must not be empty. Same as `min(1)`.
    pub fn non_empty(self) -> Self {
        self.min_msg(1, "String must not be empty")
    }

    /// Must be a valid email address.
    pub fn email(mut self) -> Self {
        self.checks
            .push(StringCheck::Email("Invalid email address".to_string()));
        self
    }

    /// Must be a valid URL (http/https).
    pub fn url(mut self) -> Self {
        self.checks.push(StringCheck::Url("Invalid URL".to_string()));
        self
    }

    /// Must be a valid UUID.
    pub fn uuid(mut self) -> Self {
        self.checks.push(StringCheck::Uuid("Invalid UUID".to_string()));
        self
    }

    /// Must start with the given prefix.
    pub fn starts_with(mut self, prefix: impl Into<String>) -> Self {
        let p = prefix.into();
        let msg = format!("String must start with \"{}\"", p);
        self.checks.push(StringCheck::StartsWith(p, msg));
        self
    }

    /// Must end with the given suffix.
    pub fn ends_with(mut self, suffix: impl Into<String>) -> Self {
        let s = suffix.into();
        let msg = format!("String must end with \"{}\"", s);
        self.checks.push(StringCheck::EndsWith(s, msg));
        self
    }

    /// Must contain the given substring.
    pub fn contains(mut self, sub: impl Into<String>) -> Self {
        let s = sub.into();
        let msg = format!("String must contain \"{}\"", s);
        self.checks.push(StringCheck::Contains(s, msg));
        self
    }

    /// Must be a valid IPv4 address.
    pub fn ipv4(mut self) -> Self {
        self.checks
            .push(StringCheck::Ipv4("Invalid IPv4 address".to_string()));
        self
    }

    /// Must be an ISO 8601 date (`YYYY-MM-DD`).
    pub fn iso_date(mut self) -> Self {
        self.checks
            .push(StringCheck::IsoDate("Invalid ISO date".to_string()));
        self
    }

    /// Must be a valid hostname.
    pub fn hostname(mut self) -> Self {
        self.checks
            .push(StringCheck::Hostname("Invalid hostname".to_string()));
        self
    }
}

impl SchemaNode for ZString {
    fn kind(&self) -> NodeKind<'_> {
        NodeKind::String(self)
    }

    fn parse_input(&self, input: Option<&Value>) -> Result<Option<Value>, SchemaError> {
        let value = input.ok_or_else(SchemaError::required)?;
        let s = value
            .as_str()
            .ok_or_else(|| SchemaError::invalid_type("string", value))?;

        let mut errors = SchemaError::new();
        for check in &self.checks {
            check.run(s, value, &mut errors);
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

    #[test]
    fn format_helpers() {
        assert!(is_valid_email("a@example.com"));
        assert!(!is_valid_email("@example.com"));
        assert!(is_valid_uuid("550e8400-e29b-41d4-a716-446655440000"));
        assert!(!is_valid_uuid("550e8400"));
        assert!(is_valid_ipv4("192.168.0.1"));
        assert!(!is_valid_ipv4("192.168.0.01"));
        assert!(is_valid_iso_date("2024-02-29"));
        assert!(!is_valid_iso_date("2024-13-01"));
        assert!(!is_valid_iso_date("2024-1-011"));
    }
}

//! Typed scalar values held by normalized records.

use std::fmt;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

// A full decimal literal: optional sign, digits with optional fraction (or a
// bare fraction), optional exponent. Rejects "inf", "NaN", hex and trailing junk.
static DECIMAL_PATTERN: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^[+-]?(\d+(\.\d*)?|\.\d+)([eE][+-]?\d+)?$").unwrap()
});

/// Parse text as a decimal number, accepting surrounding whitespace.
///
/// Returns `None` unless the whole (trimmed) text is a decimal literal with a
/// finite value.
pub fn parse_decimal(text: &str) -> Option<f64> {
    let trimmed = text.trim();
    if !DECIMAL_PATTERN.is_match(trimmed) {
        return None;
    }
    trimmed.parse::<f64>().ok().filter(|n| n.is_finite())
}

/// A typed field value.
///
/// A missing field is not a variant: records simply omit the key, and
/// lookups return `None`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Numeric value.
    Number(f64),
    /// Boolean value (`true`/`false`, any case, in the source).
    Boolean(bool),
    /// Any other non-empty text.
    Text(String),
}

impl Value {
    /// Coerce to a number.
    ///
    /// Numbers coerce when finite, text when it parses fully as a decimal.
    /// Booleans never coerce.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) if n.is_finite() => Some(*n),
            Value::Number(_) => None,
            Value::Boolean(_) => None,
            Value::Text(s) => parse_decimal(s),
        }
    }

    /// True for empty text and NaN, the values treated as missing.
    pub fn is_blank(&self) -> bool {
        match self {
            Value::Text(s) => s.is_empty(),
            Value::Number(n) => n.is_nan(),
            Value::Boolean(_) => false,
        }
    }

    /// Hashable identity under exact equality.
    pub(crate) fn key(&self) -> ValueKey {
        match self {
            // Fold -0.0 into 0.0 so they group together, as `==` does.
            Value::Number(n) if *n == 0.0 => ValueKey::Number(0.0f64.to_bits()),
            Value::Number(n) => ValueKey::Number(n.to_bits()),
            Value::Boolean(b) => ValueKey::Boolean(*b),
            Value::Text(s) => ValueKey::Text(s.clone()),
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Boolean(b) => write!(f, "{}", b),
            Value::Text(s) => f.write_str(s),
        }
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Number(n)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Number(n as f64)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Number(n as f64)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Text(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Text(s)
    }
}

/// Hash key mirroring `Value` equality; numbers compare by bit pattern.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub(crate) enum ValueKey {
    Number(u64),
    Boolean(bool),
    Text(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_decimal() {
        assert_eq!(parse_decimal("30"), Some(30.0));
        assert_eq!(parse_decimal(" 30 "), Some(30.0));
        assert_eq!(parse_decimal("-1.5"), Some(-1.5));
        assert_eq!(parse_decimal("+.5"), Some(0.5));
        assert_eq!(parse_decimal("1e3"), Some(1000.0));
        assert_eq!(parse_decimal("7."), Some(7.0));
    }

    #[test]
    fn test_parse_decimal_rejects_non_decimal() {
        assert_eq!(parse_decimal(""), None);
        assert_eq!(parse_decimal("abc"), None);
        assert_eq!(parse_decimal("30abc"), None);
        assert_eq!(parse_decimal("inf"), None);
        assert_eq!(parse_decimal("NaN"), None);
        assert_eq!(parse_decimal("0x1F"), None);
        assert_eq!(parse_decimal("1e999"), None);
        assert_eq!(parse_decimal("1 2"), None);
    }

    #[test]
    fn test_as_number() {
        assert_eq!(Value::Number(4.0).as_number(), Some(4.0));
        assert_eq!(Value::Number(f64::NAN).as_number(), None);
        assert_eq!(Value::Text("12".into()).as_number(), Some(12.0));
        assert_eq!(Value::Text("twelve".into()).as_number(), None);
        assert_eq!(Value::Boolean(true).as_number(), None);
    }

    #[test]
    fn test_key_distinguishes_number_and_text() {
        assert_ne!(Value::Number(1.0).key(), Value::Text("1".into()).key());
        assert_eq!(Value::Number(0.0).key(), Value::Number(-0.0).key());
    }

    #[test]
    fn test_serialize_untagged() {
        let values = vec![Value::Number(1.5), Value::Boolean(false), Value::from("x")];
        let json = serde_json::to_string(&values).unwrap();
        assert_eq!(json, r#"[1.5,false,"x"]"#);
    }

    #[test]
    fn test_display() {
        assert_eq!(Value::Number(30.0).to_string(), "30");
        assert_eq!(Value::Number(2.5).to_string(), "2.5");
        assert_eq!(Value::from("Sales").to_string(), "Sales");
    }
}

//! Scalar attribute values and their normalization.

use serde::{Deserialize, Serialize};

/// A normalized playlist attribute value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Bool(bool),
    Number(f64),
    String(String),
}

impl AttributeValue {
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(s) => Some(s),
            _ => None,
        }
    }

    pub const fn as_f64(&self) -> Option<f64> {
        match self {
            Self::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Normalize this value. Only strings are coerced; booleans and numbers
    /// pass through untouched.
    #[must_use]
    pub fn normalized(self) -> Self {
        match self {
            Self::String(s) => normalize_value(&s),
            other => other,
        }
    }
}

impl std::fmt::Display for AttributeValue {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(b) => write!(f, "{b}"),
            // f64's Display drops a zero fraction ("30", not "30.0")
            Self::Number(n) => write!(f, "{n}"),
            Self::String(s) => f.write_str(s),
        }
    }
}

impl From<&str> for AttributeValue {
    fn from(value: &str) -> Self {
        Self::String(value.to_string())
    }
}

impl From<f64> for AttributeValue {
    fn from(value: f64) -> Self {
        Self::Number(value)
    }
}

impl From<bool> for AttributeValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// Coerce a raw attribute token.
///
/// `true`/`yes` and `false`/`no` (any case, surrounding whitespace ignored)
/// become booleans, plain decimals such as `1080` or `30.000` become numbers,
/// and anything else is kept verbatim.
pub fn normalize_value(raw: &str) -> AttributeValue {
    let trimmed = raw.trim();

    match trimmed.to_lowercase().as_str() {
        "true" | "yes" => return AttributeValue::Bool(true),
        "false" | "no" => return AttributeValue::Bool(false),
        _ => {}
    }

    if is_plain_decimal(trimmed) {
        if let Ok(number) = trimmed.parse::<f64>() {
            return AttributeValue::Number(number);
        }
    }

    AttributeValue::String(raw.to_string())
}

/// Matches `\d+` or `\d+\.\d+`.
fn is_plain_decimal(s: &str) -> bool {
    fn digits(s: &str) -> bool {
        !s.is_empty() && s.bytes().all(|b| b.is_ascii_digit())
    }

    match s.split_once('.') {
        Some((whole, fraction)) => digits(whole) && digits(fraction),
        None => digits(s),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn test_normalize_booleans() {
        assert_eq!(normalize_value("true"), AttributeValue::Bool(true));
        assert_eq!(normalize_value("YES"), AttributeValue::Bool(true));
        assert_eq!(normalize_value(" false "), AttributeValue::Bool(false));
        assert_eq!(normalize_value("no"), AttributeValue::Bool(false));
    }

    #[test]
    fn test_normalize_numbers() {
        assert_eq!(normalize_value("1080"), AttributeValue::Number(1080.0));
        assert_eq!(normalize_value("60.000"), AttributeValue::Number(60.0));
        assert_eq!(normalize_value("1600000000.25"), AttributeValue::Number(1_600_000_000.25));
    }

    #[test]
    fn test_normalize_keeps_strings() {
        assert_eq!(normalize_value("1920x1080"), AttributeValue::from("1920x1080"));
        assert_eq!(normalize_value("1.2.3"), AttributeValue::from("1.2.3"));
        assert_eq!(normalize_value("-5"), AttributeValue::from("-5"));
        assert_eq!(normalize_value(".5"), AttributeValue::from(".5"));
        assert_eq!(normalize_value(""), AttributeValue::from(""));
    }

    #[test]
    fn test_non_strings_pass_through() {
        assert_eq!(
            AttributeValue::Number(720.0).normalized(),
            AttributeValue::Number(720.0)
        );
        assert_eq!(
            AttributeValue::Bool(false).normalized(),
            AttributeValue::Bool(false)
        );
    }

    #[test]
    fn test_display_matches_source_text() {
        assert_eq!(AttributeValue::Number(30.0).to_string(), "30");
        assert_eq!(AttributeValue::Number(29.97).to_string(), "29.97");
        assert_eq!(AttributeValue::Bool(true).to_string(), "true");
    }

    proptest! {
        #[test]
        fn prop_normalize_is_idempotent(raw in "\\PC{0,12}") {
            let once = normalize_value(&raw);
            prop_assert_eq!(once.clone().normalized(), once);
        }

        #[test]
        fn prop_digit_strings_become_numbers(whole in "[0-9]{1,9}", fraction in proptest::option::of("[0-9]{1,3}")) {
            let raw = match &fraction {
                Some(fraction) => format!("{whole}.{fraction}"),
                None => whole.clone(),
            };
            prop_assert!(normalize_value(&raw).as_f64().is_some());
        }
    }
}

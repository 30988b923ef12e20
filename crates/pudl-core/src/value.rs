use std::fmt;

use serde::{Deserialize, Serialize};

/// A single cell of tabular data as it moves between source, transform and sink.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Default)]
#[serde(untagged)]
pub enum Value {
    #[default]
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
}

impl Value {
    pub fn text(s: impl Into<String>) -> Self {
        Value::Text(s.into())
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Null, or text that is empty once trimmed.
    pub fn is_blank(&self) -> bool {
        match self {
            Value::Null => true,
            Value::Text(s) => s.trim().is_empty(),
            _ => false,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s.as_str()),
            _ => None,
        }
    }

    /// Numeric view of the value. Text is parsed leniently; anything that does not
    /// parse is `None`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(i) => Some(*i as f64),
            Value::Float(f) if f.is_finite() => Some(*f),
            Value::Text(s) => parse_f64(s),
            _ => None,
        }
    }

    /// Integer view of the value. Floats with a fractional part are rejected.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            Value::Float(f) => whole(*f),
            Value::Text(s) => parse_i64(s),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            Value::Int(0) => Some(false),
            Value::Int(1) => Some(true),
            Value::Text(s) => parse_bool(s),
            _ => None,
        }
    }

    /// Scales a numeric value, leaving null (or unparseable text) as null.
    pub fn scaled(&self, factor: f64) -> Value {
        self.as_f64()
            .map(|v| Value::Float(v * factor))
            .unwrap_or(Value::Null)
    }
}

/// Lenient number parsing for spreadsheet and CSV cells: surrounding
/// whitespace and thousands separators are ignored.
pub fn parse_f64(s: &str) -> Option<f64> {
    let t = s.trim();
    if t.is_empty() {
        return None;
    }
    let cleaned: String = t.chars().filter(|c| *c != ',').collect();
    cleaned.parse::<f64>().ok().filter(|f| f.is_finite())
}

pub fn parse_i64(s: &str) -> Option<i64> {
    let t = s.trim();
    t.parse::<i64>().ok().or_else(|| parse_f64(t).and_then(whole))
}

/// `Y`/`N` style flags as EIA and FERC write them.
pub fn parse_bool(s: &str) -> Option<bool> {
    match s.trim().to_ascii_lowercase().as_str() {
        "y" | "yes" | "t" | "true" | "1" => Some(true),
        "n" | "no" | "f" | "false" | "0" => Some(false),
        _ => None,
    }
}

pub(crate) fn whole(f: f64) -> Option<i64> {
    (f.is_finite() && f.fract() == 0.0).then_some(f as i64)
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Null => Ok(()),
            Value::Bool(b) => write!(f, "{b}"),
            Value::Int(i) => write!(f, "{i}"),
            Value::Float(v) => write!(f, "{v}"),
            Value::Text(s) => f.write_str(s),
        }
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

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<i32> for Value {
    fn from(i: i32) -> Self {
        Value::Int(i64::from(i))
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(Value::Null)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn text_numbers_parse_leniently() {
        assert_eq!(Value::text(" 1,250.5 ").as_f64(), Some(1250.5));
        assert_eq!(Value::text("1994").as_i64(), Some(1994));
        assert_eq!(Value::text("1994.0").as_i64(), Some(1994));
        assert_eq!(Value::text("19xx").as_i64(), None);
        assert_eq!(Value::text("").as_f64(), None);
        assert_eq!(Value::Float(2.5).as_i64(), None);
    }

    #[test]
    fn scaling_keeps_nulls_null() {
        assert_eq!(Value::Int(3).scaled(1000.0), Value::Float(3000.0));
        assert_eq!(Value::Null.scaled(1000.0), Value::Null);
        assert_eq!(Value::text("n/a").scaled(1000.0), Value::Null);
    }

    #[test]
    fn flags_parse_both_spellings() {
        assert_eq!(parse_bool(" Y "), Some(true));
        assert_eq!(parse_bool("no"), Some(false));
        assert_eq!(parse_bool("maybe"), None);
        assert_eq!(parse_i64("12,000"), Some(12000));
    }

    #[test]
    fn blank_covers_whitespace_text() {
        assert!(Value::text("   ").is_blank());
        assert!(Value::Null.is_blank());
        assert!(!Value::Int(0).is_blank());
    }
}

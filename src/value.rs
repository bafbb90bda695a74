//! The element type handed in by an interactive front end: an integer or a piece of text.

use core::fmt;
use std::{convert::Infallible, str::FromStr};

/// An integer or string element.
///
/// Variants are ordered integers first, so sorting a mixed sequence is well defined.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Value {
    Int(i64),
    Str(String),
}

impl Value {
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            Value::Str(_) => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::Int(_) => None,
            Value::Str(s) => Some(s),
        }
    }
}

/// A token that reads as a signed integer becomes [Value::Int], anything else [Value::Str].
impl FromStr for Value {
    type Err = Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();
        Ok(s.parse::<i64>().map_or_else(|_| Value::Str(s.to_string()), Value::Int))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Int(i) => write!(f, "{i}"),
            Value::Str(s) => write!(f, "{s}"),
        }
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Int(value)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Int(value.into())
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::Str(value.to_string())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::Str(value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use itertools::Itertools;

    #[test]
    fn test_parse() {
        assert_eq!("42".parse::<Value>(), Ok(Value::Int(42)));
        assert_eq!(" -7 ".parse::<Value>(), Ok(Value::Int(-7)));
        assert_eq!("document1.pdf".parse::<Value>(), Ok(Value::from("document1.pdf")));
        assert_eq!("1.5".parse::<Value>(), Ok(Value::from("1.5")));
    }

    #[test]
    fn test_accessors() {
        let number = Value::from(12i64);
        let text = Value::from(String::from("twelve"));
        assert_eq!((number.as_int(), number.as_str()), (Some(12), None));
        assert_eq!((text.as_int(), text.as_str()), (None, Some("twelve")));
    }

    #[test]
    fn test_mixed_ordering() {
        let values = [Value::from("b"), Value::from(3), Value::from("a"), Value::from(-1)];
        let sorted = values.iter().sorted().map(|v| v.to_string()).collect_vec();
        assert_eq!(sorted, &["-1", "3", "a", "b"]);
    }
}

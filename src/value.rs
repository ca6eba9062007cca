use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::diagnostics::ParseError;
use crate::syntax::parser::parse_value;

/// A parsed scalar JSON value. Only `Number` carries a payload.
///
/// # Examples
///
/// ```rust
/// use scalar_json::Value;
/// let n = Value::Number(3.25);
/// assert_eq!(n.type_name(), "number");
/// assert!(Value::default().is_null());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize, Deserialize)]
pub enum Value {
    #[default]
    Null,
    False,
    True,
    Number(f64),
}

/// The variant tag of a [`Value`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueType {
    Null,
    False,
    True,
    Number,
}

impl Value {
    pub fn value_type(&self) -> ValueType {
        match self {
            Value::Null => ValueType::Null,
            Value::False => ValueType::False,
            Value::True => ValueType::True,
            Value::Number(_) => ValueType::Number,
        }
    }

    /// Returns the type name of the value as a string.
    pub fn type_name(&self) -> &'static str {
        self.value_type().as_str()
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns the contained number if this is a `Number` value.
    ///
    /// ```rust
    /// use scalar_json::Value;
    /// assert_eq!(Value::Number(2.0).as_number(), Some(2.0));
    /// assert_eq!(Value::True.as_number(), None);
    /// ```
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::True => Some(true),
            Value::False => Some(false),
            _ => None,
        }
    }
}

impl ValueType {
    pub fn as_str(&self) -> &'static str {
        match self {
            ValueType::Null => "null",
            ValueType::False => "false",
            ValueType::True => "true",
            ValueType::Number => "number",
        }
    }
}

impl fmt::Display for ValueType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for Value {
    type Err = ParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_value(s)
    }
}

/// Returns the variant tag of `value`.
pub fn get_type(value: &Value) -> ValueType {
    value.value_type()
}

/// Returns the numeric payload of `value`.
///
/// # Panics
///
/// Panics if `value` is not a `Number`; asking a literal for its number is a caller bug.
pub fn get_number(value: &Value) -> f64 {
    match value {
        Value::Number(n) => *n,
        other => panic!("get_number called on a {} value", other.type_name()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_null() {
        assert_eq!(get_type(&Value::default()), ValueType::Null);
    }

    #[test]
    fn tags_match_variants() {
        let cases = [
            (Value::Null, ValueType::Null),
            (Value::False, ValueType::False),
            (Value::True, ValueType::True),
            (Value::Number(-2.5), ValueType::Number),
        ];

        for (value, tag) in cases {
            assert_eq!(get_type(&value), tag);
        }
    }

    #[test]
    fn bool_accessor_only_answers_for_booleans() {
        assert_eq!(Value::True.as_bool(), Some(true));
        assert_eq!(Value::False.as_bool(), Some(false));
        assert_eq!(Value::Null.as_bool(), None);
        assert_eq!(Value::Number(1.0).as_bool(), None);
    }

    #[test]
    #[should_panic(expected = "get_number called on a true value")]
    fn get_number_rejects_non_numbers() {
        get_number(&Value::True);
    }

    #[test]
    fn from_str_runs_the_parser() {
        let value: Value = "  42 ".parse().unwrap();
        assert_eq!(get_number(&value), 42.0);
        assert!("nope".parse::<Value>().is_err());
    }
}

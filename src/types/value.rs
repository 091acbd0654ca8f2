//! The generic value tree produced by the resource parser.

use indexmap::IndexMap;
use serde::Serialize;

/// A parsed resource value.
///
/// Every value literal in a `.tres` resource section maps to exactly one of
/// these variants. Syntax the classifier does not recognize degrades to
/// [`Value::String`] holding the raw trimmed text, so parsing is total.
///
/// Serializes to plain JSON: `Color` and `Vector2` become objects with
/// `r`/`g`/`b`/`a` and `x`/`y` keys, maps keep their insertion order.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// `null` or `nil`.
    Null,

    /// `true` or `false`.
    Bool(bool),

    /// A whole number, e.g. `42` or `-7`.
    Int(i64),

    /// A decimal number, e.g. `1.5` or `-0.25`.
    Float(f64),

    /// A quoted string, or the raw-text fallback for unrecognized syntax.
    String(String),

    /// A `Color(r, g, b, a)` literal.
    Color { r: f64, g: f64, b: f64, a: f64 },

    /// A `Vector2(x, y)` literal.
    Vector2 { x: f64, y: f64 },

    /// A `[...]` array literal.
    Array(Vec<Value>),

    /// A `{...}` dictionary literal, keys in source order.
    Map(IndexMap<String, Value>),
}

impl Value {
    /// Check whether this is the null value.
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Get the boolean content, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    /// Get the integer content, if this is an `Int`.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            Value::Int(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the numeric content of an `Int` or `Float`.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Int(n) => Some(*n as f64),
            Value::Float(n) => Some(*n),
            _ => None,
        }
    }

    /// Get the string content, if this is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get the elements, if this is an `Array`.
    pub fn as_array(&self) -> Option<&[Value]> {
        match self {
            Value::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Get the entries, if this is a `Map`.
    pub fn as_map(&self) -> Option<&IndexMap<String, Value>> {
        match self {
            Value::Map(entries) => Some(entries),
            _ => None,
        }
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Int(n)
    }
}

impl From<f64> for Value {
    fn from(n: f64) -> Self {
        Value::Float(n)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accessors() {
        assert!(Value::Null.is_null());
        assert_eq!(Value::Bool(true).as_bool(), Some(true));
        assert_eq!(Value::Int(3).as_i64(), Some(3));
        assert_eq!(Value::Int(3).as_f64(), Some(3.0));
        assert_eq!(Value::Float(1.5).as_f64(), Some(1.5));
        assert_eq!(Value::String("hi".into()).as_str(), Some("hi"));
        assert_eq!(Value::Bool(true).as_str(), None);
    }

    #[test]
    fn test_serialize_scalars() {
        assert_eq!(serde_json::to_string(&Value::Null).unwrap(), "null");
        assert_eq!(serde_json::to_string(&Value::Bool(false)).unwrap(), "false");
        assert_eq!(serde_json::to_string(&Value::Int(-7)).unwrap(), "-7");
        assert_eq!(serde_json::to_string(&Value::Float(2.5)).unwrap(), "2.5");
        assert_eq!(
            serde_json::to_string(&Value::String("a\"b".into())).unwrap(),
            "\"a\\\"b\""
        );
    }

    #[test]
    fn test_serialize_color() {
        let c = Value::Color {
            r: 1.0,
            g: 0.5,
            b: 0.0,
            a: 1.0,
        };
        assert_eq!(
            serde_json::to_string(&c).unwrap(),
            r#"{"r":1.0,"g":0.5,"b":0.0,"a":1.0}"#
        );
    }

    #[test]
    fn test_serialize_vector2() {
        let v = Value::Vector2 { x: -4.0, y: 12.5 };
        assert_eq!(serde_json::to_string(&v).unwrap(), r#"{"x":-4.0,"y":12.5}"#);
    }

    #[test]
    fn test_serialize_map_preserves_order() {
        let mut entries = IndexMap::new();
        entries.insert("zeta".to_string(), Value::Int(1));
        entries.insert("alpha".to_string(), Value::Int(2));
        let json = serde_json::to_string(&Value::Map(entries)).unwrap();

        assert_eq!(json, r#"{"zeta":1,"alpha":2}"#);
    }

    #[test]
    fn test_serialize_nested_array() {
        let v = Value::Array(vec![
            Value::Int(1),
            Value::Array(vec![Value::Int(2), Value::Int(3)]),
        ]);
        assert_eq!(serde_json::to_string(&v).unwrap(), "[1,[2,3]]");
    }
}

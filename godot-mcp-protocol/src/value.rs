//! Free-form property values
//!
//! Tools such as `set_node_property` accept whatever JSON the caller sends:
//! numbers, booleans, strings, `[x, y]` vectors, `[r, g, b, a]` colors, or
//! whole dictionaries. The bridge never checks lengths or ranges; the addon
//! converts the value to the matching Variant type.

use std::fmt;

use serde::{Deserialize, Serialize};
use serde_json::{Map, Number, Value};

/// A JSON value passed through to the addon unchanged
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PropertyValue {
    Null,
    Bool(bool),
    Number(Number),
    String(String),
    /// Vectors, colors, rects: any all-numeric array
    NumericArray(Vec<Number>),
    Array(Vec<Value>),
    Object(Map<String, Value>),
}

impl From<Value> for PropertyValue {
    fn from(value: Value) -> Self {
        match value {
            Value::Null => Self::Null,
            Value::Bool(b) => Self::Bool(b),
            Value::Number(n) => Self::Number(n),
            Value::String(s) => Self::String(s),
            Value::Array(items) => {
                if items.iter().all(Value::is_number) {
                    Self::NumericArray(
                        items
                            .into_iter()
                            .filter_map(|v| match v {
                                Value::Number(n) => Some(n),
                                _ => None,
                            })
                            .collect(),
                    )
                } else {
                    Self::Array(items)
                }
            }
            Value::Object(map) => Self::Object(map),
        }
    }
}

impl From<PropertyValue> for Value {
    fn from(value: PropertyValue) -> Self {
        match value {
            PropertyValue::Null => Value::Null,
            PropertyValue::Bool(b) => Value::Bool(b),
            PropertyValue::Number(n) => Value::Number(n),
            PropertyValue::String(s) => Value::String(s),
            PropertyValue::NumericArray(items) => {
                Value::Array(items.into_iter().map(Value::Number).collect())
            }
            PropertyValue::Array(items) => Value::Array(items),
            PropertyValue::Object(map) => Value::Object(map),
        }
    }
}

impl fmt::Display for PropertyValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Null => f.write_str("null"),
            Self::Bool(b) => write!(f, "{}", b),
            Self::Number(n) => write!(f, "{}", n),
            Self::String(s) => f.write_str(s),
            Self::NumericArray(items) => write_list(f, items.iter()),
            Self::Array(items) => write_list(f, items.iter()),
            Self::Object(map) => write!(f, "{}", Value::Object(map.clone())),
        }
    }
}

fn write_list<T: fmt::Display>(
    f: &mut fmt::Formatter<'_>,
    items: impl Iterator<Item = T>,
) -> fmt::Result {
    f.write_str("[")?;
    for (i, item) in items.enumerate() {
        if i > 0 {
            f.write_str(", ")?;
        }
        write!(f, "{}", item)?;
    }
    f.write_str("]")
}

//! Attribute values collected from an ontology before they become typed
//! definition fields

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use std::fmt;

/// Scalar value of a metamodel attribute
///
/// Supports:
/// - String (IRIs, local names, plain and language-tagged literals)
/// - Integer (xsd integer family)
/// - Float (xsd decimal/double/float)
/// - Boolean (xsd boolean)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    Boolean(bool),
    Integer(i64),
    Float(f64),
    String(String),
}

impl Value {
    /// Get string value if this is a string
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Get integer value if this is an integer
    pub fn as_integer(&self) -> Option<i64> {
        match self {
            Value::Integer(i) => Some(*i),
            _ => None,
        }
    }

    /// Get float value if this is a float
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            _ => None,
        }
    }

    /// Boolean view; also accepts the strings "true" / "false"
    pub fn as_boolean(&self) -> Option<bool> {
        match self {
            Value::Boolean(b) => Some(*b),
            Value::String(s) => match s.as_str() {
                "true" => Some(true),
                "false" => Some(false),
                _ => None,
            },
            _ => None,
        }
    }

    /// Get type name as string
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::String(_) => "String",
            Value::Integer(_) => "Integer",
            Value::Float(_) => "Float",
            Value::Boolean(_) => "Boolean",
        }
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::String(s) => write!(f, "{}", s),
            Value::Integer(i) => write!(f, "{}", i),
            Value::Float(fl) => write!(f, "{}", fl),
            Value::Boolean(b) => write!(f, "{}", b),
        }
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Integer(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Boolean(b)
    }
}

/// A single-valued or multi-valued attribute
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AttributeValue {
    Single(Value),
    Many(Vec<Value>),
}

impl AttributeValue {
    /// All values, in insertion order
    pub fn values(&self) -> &[Value] {
        match self {
            AttributeValue::Single(v) => std::slice::from_ref(v),
            AttributeValue::Many(vs) => vs,
        }
    }

    /// Number of values held
    pub fn len(&self) -> usize {
        self.values().len()
    }

    /// True for an empty list
    pub fn is_empty(&self) -> bool {
        self.values().is_empty()
    }

    /// Last value; the winner when a list lands in a scalar slot
    pub fn last(&self) -> Option<&Value> {
        self.values().last()
    }

    /// Text of the last value
    pub fn to_text(&self) -> Option<String> {
        self.last().map(|v| v.to_string())
    }

    /// Text of every value
    pub fn to_texts(&self) -> Vec<String> {
        self.values().iter().map(|v| v.to_string()).collect()
    }

    /// Boolean view of the last value
    pub fn as_boolean(&self) -> Option<bool> {
        self.last().and_then(Value::as_boolean)
    }

    /// Integer view of the last value
    pub fn as_integer(&self) -> Option<i64> {
        self.last().and_then(Value::as_integer)
    }
}

/// Metamodel attribute name → value(s) for one subject, in the order the
/// attributes were first seen
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
pub struct AttributeRecord {
    attributes: IndexMap<String, AttributeValue>,
}

impl AttributeRecord {
    pub fn new() -> Self {
        Self::default()
    }

    /// Overwrite a scalar attribute (last write wins)
    pub fn set(&mut self, name: impl Into<String>, value: Value) {
        self.attributes
            .insert(name.into(), AttributeValue::Single(value));
    }

    /// Append to a list attribute, creating it if needed. A scalar already
    /// stored under the name is kept as the first list element.
    pub fn push(&mut self, name: impl Into<String>, value: Value) {
        let entry = self
            .attributes
            .entry(name.into())
            .or_insert_with(|| AttributeValue::Many(Vec::new()));
        match entry {
            AttributeValue::Many(vs) => vs.push(value),
            AttributeValue::Single(existing) => {
                *entry = AttributeValue::Many(vec![existing.clone(), value]);
            }
        }
    }

    pub fn get(&self, name: &str) -> Option<&AttributeValue> {
        self.attributes.get(name)
    }

    pub fn contains(&self, name: &str) -> bool {
        self.attributes.contains_key(name)
    }

    /// Remove an attribute, keeping the order of the others
    pub fn remove(&mut self, name: &str) -> Option<AttributeValue> {
        self.attributes.shift_remove(name)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.attributes.keys().map(String::as_str)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &AttributeValue)> {
        self.attributes.iter()
    }

    pub fn len(&self) -> usize {
        self.attributes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.attributes.is_empty()
    }
}

impl IntoIterator for AttributeRecord {
    type Item = (String, AttributeValue);
    type IntoIter = indexmap::map::IntoIter<String, AttributeValue>;

    fn into_iter(self) -> Self::IntoIter {
        self.attributes.into_iter()
    }
}

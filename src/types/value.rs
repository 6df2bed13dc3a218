//! Structured value tree

use super::{Array, Blob, Key};
use std::collections::BTreeMap;
use std::fmt;

/// Mapping from keys to values
pub type Map = BTreeMap<Key, Value>;

/// Value kind, used in error reports
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ValueTag {
    Null,
    Bool,
    Int,
    Float,
    String,
    List,
    Map,
    Array,
    Blob,
    Bytes,
}

impl fmt::Display for ValueTag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            ValueTag::Null => "null",
            ValueTag::Bool => "bool",
            ValueTag::Int => "int",
            ValueTag::Float => "float",
            ValueTag::String => "string",
            ValueTag::List => "list",
            ValueTag::Map => "mapping",
            ValueTag::Array => "array",
            ValueTag::Blob => "blob",
            ValueTag::Bytes => "bytes",
        };
        f.write_str(name)
    }
}

/// A structured value
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    List(Vec<Value>),
    Map(Map),
    Array(Array),
    Blob(Blob),
    /// Raw bytes of a blob tag decoded without a blob format
    Bytes(Vec<u8>),
}

impl Value {
    /// Get the tag for this value
    pub fn tag(&self) -> ValueTag {
        match self {
            Value::Null => ValueTag::Null,
            Value::Bool(_) => ValueTag::Bool,
            Value::Int(_) => ValueTag::Int,
            Value::Float(_) => ValueTag::Float,
            Value::String(_) => ValueTag::String,
            Value::List(_) => ValueTag::List,
            Value::Map(_) => ValueTag::Map,
            Value::Array(_) => ValueTag::Array,
            Value::Blob(_) => ValueTag::Blob,
            Value::Bytes(_) => ValueTag::Bytes,
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Bool(b) => Some(*b),
            _ => None,
        }
    }

    pub fn as_int(&self) -> Option<i64> {
        match self {
            Value::Int(i) => Some(*i),
            _ => None,
        }
    }

    /// Numeric value as f64; integers are widened
    pub fn as_float(&self) -> Option<f64> {
        match self {
            Value::Float(f) => Some(*f),
            Value::Int(i) => Some(*i as f64),
            _ => None,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    pub fn as_list(&self) -> Option<&[Value]> {
        match self {
            Value::List(l) => Some(l),
            _ => None,
        }
    }

    pub fn as_map(&self) -> Option<&Map> {
        match self {
            Value::Map(m) => Some(m),
            _ => None,
        }
    }

    pub fn as_array(&self) -> Option<&Array> {
        match self {
            Value::Array(a) => Some(a),
            _ => None,
        }
    }

    pub fn as_blob(&self) -> Option<&Blob> {
        match self {
            Value::Blob(b) => Some(b),
            _ => None,
        }
    }

    pub fn as_bytes(&self) -> Option<&[u8]> {
        match self {
            Value::Bytes(b) => Some(b),
            Value::Blob(b) => Some(b.as_bytes()),
            _ => None,
        }
    }

    /// Look up a direct child of a mapping
    pub fn get(&self, key: impl Into<Key>) -> Option<&Value> {
        self.as_map()?.get(&key.into())
    }

    /// Get a nested value by dot-separated path (e.g. `"3.amplitude"`).
    ///
    /// Each segment is converted the same way on-disk keys are, so digit
    /// segments address integer keys.
    pub fn get_path(&self, path: &str) -> Option<&Value> {
        let mut current = self;
        for segment in path.split('.') {
            current = current.as_map()?.get(&Key::parse(segment))?;
        }
        Some(current)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Value::Bool(v)
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Int(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Int(v as i64)
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Value::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::String(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::String(v.to_string())
    }
}

impl From<Vec<Value>> for Value {
    fn from(v: Vec<Value>) -> Self {
        Value::List(v)
    }
}

impl From<Map> for Value {
    fn from(v: Map) -> Self {
        Value::Map(v)
    }
}

impl From<Array> for Value {
    fn from(v: Array) -> Self {
        Value::Array(v)
    }
}

impl From<Blob> for Value {
    fn from(v: Blob) -> Self {
        Value::Blob(v)
    }
}

impl<K: Into<Key>, V: Into<Value>> FromIterator<(K, V)> for Value {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Value::Map(
            iter.into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        )
    }
}

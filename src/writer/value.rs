//! Value serialization

use crate::error::{Error, Result};
use crate::options::CodecOptions;
use crate::types::{Map, Value};
use serde_json::{Number, Value as Json};

use super::array::write_array;
use super::blob::{write_blob, write_bytes};

/// Convert a value into its JSON form
pub fn write_value(value: &Value, options: &CodecOptions) -> Result<Json> {
    let json = match value {
        Value::Null => Json::Null,
        Value::Bool(b) => Json::Bool(*b),
        Value::Int(i) => Json::from(*i),
        Value::Float(f) => Json::Number(
            Number::from_f64(*f).ok_or(Error::NonFiniteFloat { value: *f })?,
        ),
        Value::String(s) => Json::String(s.clone()),
        Value::List(items) => Json::Array(
            items
                .iter()
                .map(|item| write_value(item, options))
                .collect::<Result<_>>()?,
        ),
        Value::Map(map) => Json::Object(write_map(map, options)?),
        Value::Array(arr) => write_array(arr, options)?,
        Value::Blob(blob) => write_blob(blob, options),
        Value::Bytes(bytes) => write_bytes(bytes),
    };
    Ok(json)
}

/// Convert a mapping, turning integer keys into their decimal strings
pub fn write_map(map: &Map, options: &CodecOptions) -> Result<serde_json::Map<String, Json>> {
    let mut out = serde_json::Map::new();
    for (key, val) in map {
        let key = key.to_string();
        if out.contains_key(&key) {
            return Err(Error::DuplicateKey { key });
        }
        out.insert(key, write_value(val, options)?);
    }
    Ok(out)
}

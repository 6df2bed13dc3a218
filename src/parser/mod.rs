//! Parser for the JSON interchange format
//!
//! Tagged objects are rebuilt into arrays and blobs while the JSON tree is
//! walked bottom-up, then digit-only keys are turned back into integer
//! keys at every mapping level.

mod array;
mod blob;
mod value;

pub use array::parse_ndarray;
pub use blob::parse_blob;
pub use value::{parse_map, parse_value};

use crate::error::{Error, Result};
use crate::options::CodecOptions;
use crate::types::{Map, Value};

/// Decode JSON text into a mapping with the default options
pub fn decode(text: &str) -> Result<Map> {
    decode_with(text, &CodecOptions::default())
}

/// Decode JSON text into a mapping.
///
/// Empty text (or text that is only whitespace) gives an empty mapping.
pub fn decode_with(text: &str, options: &CodecOptions) -> Result<Map> {
    if text.trim().is_empty() {
        return Ok(Map::new());
    }
    let json: serde_json::Value = serde_json::from_str(text)?;
    match parse_value(json, options)? {
        Value::Map(map) => Ok(map),
        other => Err(Error::NotAMapping {
            actual: other.tag(),
        }),
    }
}

//! Serialization of values to the JSON interchange format

mod array;
mod blob;
mod value;

pub use array::write_array;
pub use blob::{write_blob, write_bytes};
pub use value::{write_map, write_value};

use crate::error::{Error, Result};
use crate::options::CodecOptions;
use crate::types::{Map, Value};
use serde::Serialize;
use serde_json::ser::PrettyFormatter;
use std::io::Write;

/// Write a mapping value as JSON text to a writer.
///
/// Object keys come out sorted and indentation is fixed by `options`, so
/// equal input always gives identical bytes.
pub fn write<W: Write>(writer: &mut W, value: &Value, options: &CodecOptions) -> Result<()> {
    let map = match value {
        Value::Map(map) => map,
        other => {
            return Err(Error::NotAMapping {
                actual: other.tag(),
            });
        }
    };
    write_map_to(writer, map, options)
}

/// Write a mapping as JSON text to a writer
pub fn write_map_to<W: Write>(writer: &mut W, map: &Map, options: &CodecOptions) -> Result<()> {
    let json = serde_json::Value::Object(write_map(map, options)?);
    let indent = vec![b' '; options.indent];
    let mut ser = serde_json::Serializer::with_formatter(writer, PrettyFormatter::with_indent(&indent));
    json.serialize(&mut ser)?;
    Ok(())
}

/// Encode a mapping value with the default options
pub fn encode(value: &Value) -> Result<String> {
    encode_with(value, &CodecOptions::default())
}

/// Encode a mapping value
pub fn encode_with(value: &Value, options: &CodecOptions) -> Result<String> {
    let mut buf = Vec::new();
    write(&mut buf, value, options)?;
    Ok(String::from_utf8(buf)?)
}

/// Encode a mapping with the default options
pub fn encode_map(map: &Map) -> Result<String> {
    let mut buf = Vec::new();
    write_map_to(&mut buf, map, &CodecOptions::default())?;
    Ok(String::from_utf8(buf)?)
}

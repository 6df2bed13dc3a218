//! JSON files in the interchange format

use super::fs::ensure_parent_exists;
use crate::error::{Error, Result};
use crate::options::CodecOptions;
use crate::parser::decode_with;
use crate::types::{Map, Value};
use crate::writer;
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

/// Load a JSON file with the default options
pub fn load_json(path: impl AsRef<Path>) -> Result<Map> {
    load_json_with(path, &CodecOptions::default())
}

/// Load a JSON file. An empty file gives an empty mapping.
pub fn load_json_with(path: impl AsRef<Path>, options: &CodecOptions) -> Result<Map> {
    let path = path.as_ref();
    if !path.exists() {
        return Err(Error::NotFound {
            path: path.to_path_buf(),
        });
    }
    let contents = std::fs::read_to_string(path)?;
    log::debug!("Loading {}.", path.display());
    decode_with(&contents, options)
}

/// Save a mapping value to a JSON file with the default options
pub fn save_json(path: impl AsRef<Path>, value: &Value) -> Result<()> {
    save_json_with(path, value, &CodecOptions::default())
}

/// Save a mapping value to a JSON file, creating the parent directory if
/// needed
pub fn save_json_with(path: impl AsRef<Path>, value: &Value, options: &CodecOptions) -> Result<()> {
    let path = path.as_ref();
    // Encode first so a rejected value leaves no partial file behind
    let text = writer::encode_with(value, options)?;
    ensure_parent_exists(path)?;
    let mut out = BufWriter::new(File::create(path)?);
    out.write_all(text.as_bytes())?;
    out.flush()?;
    log::info!("Wrote {}.", path.display());
    Ok(())
}

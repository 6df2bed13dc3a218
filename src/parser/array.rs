//! Array tag parsing

use crate::error::{Error, Result};
use crate::options::NDARRAY_TAG;
use crate::types::{Array, DType};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Map, Value as Json};

/// Rebuild an array from a tagged object
pub fn parse_ndarray(obj: &Map<String, Json>) -> Result<Array> {
    let payload = obj
        .get(NDARRAY_TAG)
        .and_then(Json::as_str)
        .ok_or_else(|| Error::invalid_tag(NDARRAY_TAG, "payload must be a base64 string"))?;

    let name = obj
        .get("dtype")
        .and_then(Json::as_str)
        .ok_or_else(|| Error::invalid_tag(NDARRAY_TAG, "missing `dtype` string"))?;
    let dtype = DType::from_name(name).ok_or_else(|| Error::UnknownDType {
        name: name.to_string(),
    })?;

    let shape = match obj.get("shape") {
        Some(Json::Array(dims)) => dims
            .iter()
            .map(|d| {
                d.as_u64().ok_or_else(|| {
                    Error::invalid_tag(NDARRAY_TAG, format!("bad dimension {}", d))
                })
            })
            .collect::<Result<Vec<u64>>>()?,
        _ => return Err(Error::invalid_tag(NDARRAY_TAG, "missing `shape` list")),
    };

    let data = STANDARD.decode(payload)?;
    Array::new(dtype, shape, data)
}

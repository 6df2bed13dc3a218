//! Array serialization

use crate::error::Result;
use crate::options::{CodecOptions, NDARRAY_TAG};
use crate::types::{Array, ArrayType, DType};
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Number, Value as Json};

/// Write an array value.
///
/// Short 1-D arrays become a plain list of numbers; everything else
/// becomes a tagged object carrying base64 bytes, dtype and shape.
pub fn write_array(arr: &Array, options: &CodecOptions) -> Result<Json> {
    arr.check_size()?;

    let short = matches!(arr.num_elements(), Some(n) if n <= options.inline_limit as u64);
    if arr.ndim() == 1 && short {
        // NaN and infinity have no JSON literal, keep those tagged
        if let Some(items) = inline_elements(arr) {
            return Ok(Json::Array(items));
        }
    }

    let mut obj = serde_json::Map::new();
    obj.insert(NDARRAY_TAG.into(), Json::String(STANDARD.encode(&arr.data)));
    obj.insert("dtype".into(), Json::String(arr.dtype.name().into()));
    obj.insert(
        "shape".into(),
        Json::Array(arr.shape.iter().map(|&d| Json::from(d)).collect()),
    );
    Ok(Json::Object(obj))
}

fn inline_elements(arr: &Array) -> Option<Vec<Json>> {
    arr.element_bytes()
        .map(|bytes| element_json(arr.dtype, bytes))
        .collect()
}

fn element_json(dtype: DType, bytes: &[u8]) -> Option<Json> {
    let json = match dtype {
        DType::Bool => Json::Bool(bool::read_le(bytes)),
        DType::U8 => Json::from(u8::read_le(bytes)),
        DType::I8 => Json::from(i8::read_le(bytes)),
        DType::U16 => Json::from(u16::read_le(bytes)),
        DType::I16 => Json::from(i16::read_le(bytes)),
        DType::U32 => Json::from(u32::read_le(bytes)),
        DType::I32 => Json::from(i32::read_le(bytes)),
        DType::U64 => Json::from(u64::read_le(bytes)),
        DType::I64 => Json::from(i64::read_le(bytes)),
        DType::F32 => Json::Number(Number::from_f64(f32::read_le(bytes) as f64)?),
        DType::F64 => Json::Number(Number::from_f64(f64::read_le(bytes))?),
    };
    Some(json)
}

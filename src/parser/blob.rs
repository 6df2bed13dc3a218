//! Blob tag parsing

use crate::error::{Error, Result};
use crate::options::{BLOB_TAG, CodecOptions};
use crate::types::Value;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::{Map, Value as Json};

/// Rebuild a blob from a tagged object.
///
/// Without a configured blob format the decoded bytes are returned as
/// [`Value::Bytes`].
pub fn parse_blob(obj: &Map<String, Json>, options: &CodecOptions) -> Result<Value> {
    let payload = obj
        .get(BLOB_TAG)
        .and_then(Json::as_str)
        .ok_or_else(|| Error::invalid_tag(BLOB_TAG, "payload must be a base64 string"))?;
    let bytes = STANDARD.decode(payload)?;

    match &options.blob_format {
        Some(format) => Ok(Value::Blob(format.unpack(bytes)?)),
        None => Ok(Value::Bytes(bytes)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::QtBlobFormat;
    use crate::types::Blob;
    use serde_json::json;

    fn object(json: Json) -> Map<String, Json> {
        match json {
            Json::Object(obj) => obj,
            _ => unreachable!(),
        }
    }

    #[test]
    fn raw_format() {
        let obj = object(json!({"__qbytearray__": "aGVsbG8="}));
        let value = parse_blob(&obj, &CodecOptions::default()).unwrap();
        assert_eq!(value, Value::Blob(Blob::from_bytes(b"hello".to_vec())));
    }

    #[test]
    fn qt_format() {
        let obj = object(json!({"__qbytearray__": "YUdWc2JHOD0="}));
        let opts = CodecOptions::default().with_blob_format(QtBlobFormat);
        let value = parse_blob(&obj, &opts).unwrap();
        assert_eq!(value.as_blob().unwrap().as_bytes(), b"hello");
    }

    #[test]
    fn no_format_gives_bytes() {
        let obj = object(json!({"__qbytearray__": "aGVsbG8="}));
        let opts = CodecOptions::default().without_blob_format();
        let value = parse_blob(&obj, &opts).unwrap();
        assert_eq!(value, Value::Bytes(b"hello".to_vec()));
    }
}

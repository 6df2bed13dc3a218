//! Blob serialization

use crate::options::{BLOB_TAG, CodecOptions};
use crate::types::Blob;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use serde_json::Value as Json;

/// Write a blob through the configured blob format
pub fn write_blob(blob: &Blob, options: &CodecOptions) -> Json {
    match &options.blob_format {
        Some(format) => write_bytes(&format.pack(blob)),
        None => write_bytes(&blob.data),
    }
}

/// Write bytes as a blob tag with no packing
pub fn write_bytes(bytes: &[u8]) -> Json {
    let mut obj = serde_json::Map::new();
    obj.insert(BLOB_TAG.into(), Json::String(STANDARD.encode(bytes)));
    Json::Object(obj)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::options::QtBlobFormat;
    use serde_json::json;

    #[test]
    fn raw_blob() {
        let blob = Blob::from_bytes(b"hello".to_vec());
        let json = write_blob(&blob, &CodecOptions::default());
        assert_eq!(json, json!({"__qbytearray__": "aGVsbG8="}));
    }

    #[test]
    fn qt_blob_is_double_encoded() {
        let blob = Blob::from_bytes(b"hello".to_vec());
        let opts = CodecOptions::default().with_blob_format(QtBlobFormat);
        let json = write_blob(&blob, &opts);
        // base64("aGVsbG8=")
        assert_eq!(json, json!({"__qbytearray__": "YUdWc2JHOD0="}));
    }
}

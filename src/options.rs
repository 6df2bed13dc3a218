//! Codec configuration and blob formats

use crate::error::Result;
use crate::types::Blob;
use base64::Engine;
use base64::engine::general_purpose::STANDARD;
use std::fmt;
use std::sync::Arc;

/// Marker field of a tagged array object
pub const NDARRAY_TAG: &str = "__ndarray__";

/// Marker field of a tagged blob object
pub const BLOB_TAG: &str = "__qbytearray__";

/// Default maximum length of a 1-D array written as a plain list
pub const DEFAULT_INLINE_LIMIT: usize = 10;

/// Default number of spaces per indentation level
pub const DEFAULT_INDENT: usize = 2;

/// How blob bytes are packed before the codec base64-encodes them.
///
/// Supplied by the host through [`CodecOptions::blob_format`]. With no
/// format configured, blob tags decode to [`Value::Bytes`](crate::Value::Bytes).
pub trait BlobFormat: Send + Sync + fmt::Debug {
    /// Bytes stored (base64-encoded) in the blob tag
    fn pack(&self, blob: &Blob) -> Vec<u8>;

    /// Rebuild a blob from the base64-decoded tag payload
    fn unpack(&self, bytes: Vec<u8>) -> Result<Blob>;
}

/// Blob bytes stored as-is
#[derive(Debug, Clone, Copy, Default)]
pub struct RawBlobFormat;

impl BlobFormat for RawBlobFormat {
    fn pack(&self, blob: &Blob) -> Vec<u8> {
        blob.data.clone()
    }

    fn unpack(&self, bytes: Vec<u8>) -> Result<Blob> {
        Ok(Blob::from_bytes(bytes))
    }
}

/// Blob bytes base64-encoded once more before the codec encodes them.
///
/// Matches files written from toolkit byte arrays that serialize
/// themselves as base64 text.
#[derive(Debug, Clone, Copy, Default)]
pub struct QtBlobFormat;

impl BlobFormat for QtBlobFormat {
    fn pack(&self, blob: &Blob) -> Vec<u8> {
        STANDARD.encode(&blob.data).into_bytes()
    }

    fn unpack(&self, bytes: Vec<u8>) -> Result<Blob> {
        Ok(Blob::from_bytes(STANDARD.decode(bytes)?))
    }
}

/// Options shared by the writer and the parser
#[derive(Debug, Clone)]
pub struct CodecOptions {
    /// 1-D arrays with at most this many elements are written as plain lists
    pub inline_limit: usize,
    /// Spaces per indentation level of the written text
    pub indent: usize,
    /// Blob packing; `None` decodes blob tags to raw bytes
    pub blob_format: Option<Arc<dyn BlobFormat>>,
}

impl Default for CodecOptions {
    /// Inline limit 10, indent 2, blobs stored with [`RawBlobFormat`].
    ///
    /// Files whose blob tags hold serialized toolkit byte arrays are
    /// double base64-encoded and need [`QtBlobFormat`].
    fn default() -> Self {
        Self {
            inline_limit: DEFAULT_INLINE_LIMIT,
            indent: DEFAULT_INDENT,
            blob_format: Some(Arc::new(RawBlobFormat)),
        }
    }
}

impl CodecOptions {
    pub fn with_inline_limit(mut self, limit: usize) -> Self {
        self.inline_limit = limit;
        self
    }

    pub fn with_indent(mut self, indent: usize) -> Self {
        self.indent = indent;
        self
    }

    pub fn with_blob_format(mut self, format: impl BlobFormat + 'static) -> Self {
        self.blob_format = Some(Arc::new(format));
        self
    }

    pub fn without_blob_format(mut self) -> Self {
        self.blob_format = None;
        self
    }
}

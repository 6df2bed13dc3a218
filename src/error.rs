//! Error types for arraystore

use crate::types::{DType, ValueTag};
use std::path::PathBuf;
use thiserror::Error;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, Error>;

/// Errors produced while encoding, decoding, and persisting values.
#[derive(Debug, Error)]
pub enum Error {
    /// Filesystem or stream IO failure.
    #[error("io: {0}")]
    Io(#[from] std::io::Error),
    /// Malformed JSON text.
    #[error("json: {0}")]
    Json(#[from] serde_json::Error),
    /// Encoded output is not valid UTF-8.
    #[error("utf-8: {0}")]
    Utf8(#[from] std::string::FromUtf8Error),
    /// JSON number with no integer or float representation.
    #[error("unsupported number {number}")]
    UnsupportedNumber { number: String },
    /// Source file does not exist.
    #[error("the file `{}` doesn't exist", path.display())]
    NotFound { path: PathBuf },
    /// Path exists but is not a directory.
    #[error("`{}` exists and is not a directory", path.display())]
    NotADirectory { path: PathBuf },
    /// Encode or decode expected a mapping at the top level.
    #[error("expected a mapping, got {actual}")]
    NotAMapping { actual: ValueTag },
    /// Two keys of one mapping collapse to the same key after normalization.
    #[error("duplicate key after normalization: {key:?}")]
    DuplicateKey { key: String },
    /// Float with no JSON literal (NaN or infinity).
    #[error("non-finite float {value} cannot be written as JSON")]
    NonFiniteFloat { value: f64 },
    /// Tag object with a missing or malformed field.
    #[error("invalid `{tag}` object: {message}")]
    InvalidTag {
        tag: &'static str,
        message: String,
    },
    /// Payload is not valid base64.
    #[error("base64: {0}")]
    Base64(#[from] base64::DecodeError),
    /// Dtype name not understood.
    #[error("unknown dtype {name:?}")]
    UnknownDType { name: String },
    /// Element type differs from the one requested.
    #[error("dtype mismatch: expected {expected}, got {actual}")]
    DTypeMismatch { expected: DType, actual: DType },
    /// Shape doesn't match data length.
    #[error("shape {shape:?} doesn't match data length {data_len}")]
    ShapeMismatch { shape: Vec<u64>, data_len: usize },
    /// Malformed row in a two-column table.
    #[error("{}:{line}: {message}", path.display())]
    Tabular {
        path: PathBuf,
        line: usize,
        message: String,
    },
}

impl Error {
    pub(crate) fn invalid_tag(tag: &'static str, message: impl Into<String>) -> Self {
        Error::InvalidTag {
            tag,
            message: message.into(),
        }
    }
}

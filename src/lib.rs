//! arraystore - JSON persistence for typed arrays and cluster metadata
//!
//! Stores mappings whose keys are integers or strings and whose values may
//! be scalars, lists, nested mappings, typed arrays (numpy-like, with dtype
//! and shape) or opaque binary blobs, as human-diffable JSON.
//!
//! # Format
//!
//! - Integer keys are written as decimal strings and read back as integers.
//! - 1-D arrays of at most 10 elements are written as plain number lists.
//! - Other arrays become `{"__ndarray__": <base64>, "dtype": ..., "shape": [...]}`.
//! - Blobs become `{"__qbytearray__": <base64>}`.
//! - Object keys are sorted and indentation is fixed, so output is stable.
//!
//! # Example
//!
//! ```rust
//! use arraystore::{Array, Key, Value, decode, encode};
//!
//! let metadata: Value = [
//!     (Key::Int(3), Value::Array(Array::from_vec(vec![1i64, 2, 3]))),
//!     (Key::from("cluster_group"), Value::from("good")),
//! ]
//! .into_iter()
//! .collect();
//!
//! let text = encode(&metadata).unwrap();
//! let back = decode(&text).unwrap();
//! assert!(back.contains_key(&Key::Int(3)));
//! ```

pub mod error;
pub mod io;
pub mod options;
pub mod parser;
pub mod types;
pub mod writer;

#[cfg(feature = "ndarray")]
pub mod ndarray_ext;

// Re-export common types at crate root
pub use error::{Error, Result};
pub use options::{BLOB_TAG, BlobFormat, CodecOptions, NDARRAY_TAG, QtBlobFormat, RawBlobFormat};
pub use parser::{decode, decode_with};
pub use types::{Array, ArrayType, Blob, DType, Key, Map, Value, ValueTag};
pub use writer::{encode, encode_map, encode_with};

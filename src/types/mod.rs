//! Core types of the value model

mod array;
mod blob;
mod dtype;
mod key;
mod value;

pub use array::Array;
pub use blob::Blob;
pub use dtype::{ArrayType, DType};
pub use key::Key;
pub use value::{Map, Value, ValueTag};

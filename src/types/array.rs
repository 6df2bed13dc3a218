//! Typed array type

use super::{ArrayType, DType};
use crate::error::{Error, Result};

/// Owned typed array.
///
/// Elements are stored contiguously in row-major order, little-endian.
#[derive(Debug, Clone, PartialEq)]
pub struct Array {
    pub dtype: DType,
    pub shape: Vec<u64>,
    pub data: Vec<u8>,
}

impl Array {
    /// Build from raw bytes, checking that the byte length matches the shape
    pub fn new(dtype: DType, shape: Vec<u64>, data: Vec<u8>) -> Result<Self> {
        let arr = Self { dtype, shape, data };
        arr.check_size()?;
        Ok(arr)
    }

    /// Build from a slice of elements laid out in row-major order
    pub fn from_slice<T: ArrayType>(shape: Vec<u64>, elements: &[T]) -> Result<Self> {
        let mut data = Vec::with_capacity(elements.len() * T::DTYPE.element_size());
        for &e in elements {
            e.write_le(&mut data);
        }
        Self::new(T::DTYPE, shape, data)
    }

    /// 1-D array from a vector of elements
    pub fn from_vec<T: ArrayType>(elements: Vec<T>) -> Self {
        let shape = vec![elements.len() as u64];
        let mut data = Vec::with_capacity(elements.len() * T::DTYPE.element_size());
        for e in elements {
            e.write_le(&mut data);
        }
        Self {
            dtype: T::DTYPE,
            shape,
            data,
        }
    }

    /// Total number of elements, `None` when the shape overflows `u64`
    pub fn num_elements(&self) -> Option<u64> {
        self.shape.iter().try_fold(1u64, |acc, &d| acc.checked_mul(d))
    }

    /// Expected data size in bytes, `None` when it overflows `u64`
    pub fn expected_size(&self) -> Option<u64> {
        self.num_elements()?
            .checked_mul(self.dtype.element_size() as u64)
    }

    /// Fail unless the data length matches the shape and dtype
    pub fn check_size(&self) -> Result<()> {
        match self.expected_size() {
            Some(size) if size == self.data.len() as u64 => Ok(()),
            _ => Err(Error::ShapeMismatch {
                shape: self.shape.clone(),
                data_len: self.data.len(),
            }),
        }
    }

    pub fn ndim(&self) -> usize {
        self.shape.len()
    }

    /// Iterate over the raw bytes of each element
    pub fn element_bytes(&self) -> std::slice::ChunksExact<'_, u8> {
        self.data.chunks_exact(self.dtype.element_size())
    }

    /// Copy the elements out in row-major order
    pub fn to_vec<T: ArrayType>(&self) -> Result<Vec<T>> {
        if T::DTYPE != self.dtype {
            return Err(Error::DTypeMismatch {
                expected: T::DTYPE,
                actual: self.dtype,
            });
        }
        Ok(self.element_bytes().map(T::read_le).collect())
    }
}

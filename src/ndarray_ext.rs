//! ndarray integration for typed arrays
//!
//! This module provides conversions between [`Array`] and ndarray's
//! array types. Any memory layout is accepted on the way in: transposed,
//! strided or sliced arrays are copied into contiguous row-major order
//! before their bytes are taken.
//!
//! Enable with the `ndarray` feature flag (on by default).

use crate::error::{Error, Result};
use crate::types::{Array, ArrayType, Value};
use ndarray::{ArrayBase, ArrayD, Data, Dimension, IxDyn};

// =============================================================================
// From ndarray
// =============================================================================

impl Array {
    /// Create an Array from any ndarray array or view
    pub fn from_ndarray<T, S, D>(arr: &ArrayBase<S, D>) -> Self
    where
        T: ArrayType,
        S: Data<Elem = T>,
        D: Dimension,
    {
        let shape: Vec<u64> = arr.shape().iter().map(|&d| d as u64).collect();
        let mut data = Vec::with_capacity(arr.len() * T::DTYPE.element_size());

        let standard = arr.as_standard_layout();
        match standard.as_slice() {
            Some(elements) => elements.iter().for_each(|&e| e.write_le(&mut data)),
            None => standard.iter().for_each(|&e| e.write_le(&mut data)),
        }

        Array {
            dtype: T::DTYPE,
            shape,
            data,
        }
    }
}

impl<T, S, D> From<&ArrayBase<S, D>> for Value
where
    T: ArrayType,
    S: Data<Elem = T>,
    D: Dimension,
{
    fn from(arr: &ArrayBase<S, D>) -> Self {
        Value::Array(Array::from_ndarray(arr))
    }
}

// =============================================================================
// To ndarray
// =============================================================================

impl Array {
    /// Convert to an owned ndarray ArrayD
    pub fn to_ndarray<T: ArrayType>(&self) -> Result<ArrayD<T>> {
        let elements = self.to_vec::<T>()?;
        let shape: Vec<usize> = self.shape.iter().map(|&d| d as usize).collect();

        ArrayD::from_shape_vec(IxDyn(&shape), elements).map_err(|_| Error::ShapeMismatch {
            shape: self.shape.clone(),
            data_len: self.data.len(),
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::DType;
    use ndarray::{Array2, array, s};

    #[test]
    fn roundtrip_1d_f32() {
        let arr = array![1.0f32, 2.0, 3.0, 4.0].into_dyn();
        let blob = Array::from_ndarray(&arr);

        assert_eq!(blob.dtype, DType::F32);
        assert_eq!(blob.shape, vec![4]);

        let back: ArrayD<f32> = blob.to_ndarray().unwrap();
        assert_eq!(arr, back);
    }

    #[test]
    fn roundtrip_2d_i32() {
        let arr = array![[1i32, 2, 3], [4, 5, 6]];
        let blob = Array::from_ndarray(&arr);

        assert_eq!(blob.dtype, DType::I32);
        assert_eq!(blob.shape, vec![2, 3]);

        let back: ArrayD<i32> = blob.to_ndarray().unwrap();
        assert_eq!(arr.into_dyn(), back);
    }

    #[test]
    fn transposed_view_is_copied_row_major() {
        let arr = array![[1u8, 2, 3], [4, 5, 6]];
        let transposed = arr.t();
        assert!(!transposed.is_standard_layout());

        let blob = Array::from_ndarray(&transposed);
        assert_eq!(blob.shape, vec![3, 2]);
        assert_eq!(blob.data, vec![1, 4, 2, 5, 3, 6]);
    }

    #[test]
    fn strided_slice_is_copied() {
        let arr = Array2::<i64>::from_shape_fn((4, 4), |(i, j)| (i * 4 + j) as i64);
        let view = arr.slice(s![..;2, 1..3]);

        let blob = Array::from_ndarray(&view);
        assert_eq!(blob.shape, vec![2, 2]);
        assert_eq!(blob.to_vec::<i64>().unwrap(), vec![1, 2, 9, 10]);
    }

    #[test]
    fn dtype_mismatch_error() {
        let blob = Array::from_ndarray(&array![1.0f32, 2.0, 3.0]);
        let result: Result<ArrayD<f64>> = blob.to_ndarray();
        assert!(matches!(result, Err(Error::DTypeMismatch { .. })));
    }

    #[test]
    fn zero_dimensional() {
        let arr = ndarray::arr0(2.5f64);
        let blob = Array::from_ndarray(&arr);
        assert!(blob.shape.is_empty());
        let back = blob.to_ndarray::<f64>().unwrap();
        assert_eq!(back.ndim(), 0);
        assert_eq!(back.iter().copied().collect::<Vec<_>>(), vec![2.5]);
    }
}

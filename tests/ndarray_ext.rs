//! Integration tests for ndarray support
//!
//! These tests store ndarray arrays as cluster metadata and read them back.

#![cfg(feature = "ndarray")]

use arraystore::{Array, DType, Key, Value, decode, encode};
use ndarray::{Array2, ArrayD, IxDyn, array, s};

fn roundtrip(value: &Value, key: Key) -> Array {
    let map = decode(&encode(value).unwrap()).unwrap();
    map[&key].as_array().unwrap().clone()
}

// =============================================================================
// Basic ndarray roundtrips
// =============================================================================

#[test]
fn roundtrip_ndarray_2d_matrix() {
    let matrix = Array2::<f64>::from_shape_fn((3, 5), |(i, j)| i as f64 * 0.1 - j as f64);
    let value: Value = [(Key::Int(0), Value::from(&matrix))].into_iter().collect();

    let back: ArrayD<f64> = roundtrip(&value, Key::Int(0)).to_ndarray().unwrap();
    assert_eq!(matrix.into_dyn(), back);
}

#[test]
fn roundtrip_ndarray_3d_tensor() {
    let tensor = ArrayD::<i32>::from_shape_fn(IxDyn(&[2, 3, 4]), |idx| {
        (idx[0] * 12 + idx[1] * 4 + idx[2]) as i32
    });
    let value: Value = [(Key::from("features"), Value::from(&tensor))]
        .into_iter()
        .collect();

    let back = roundtrip(&value, Key::from("features"));
    assert_eq!(back.dtype, DType::I32);
    assert_eq!(back.shape, vec![2, 3, 4]);
    assert_eq!(back.to_ndarray::<i32>().unwrap(), tensor);
}

#[test]
fn short_vector_comes_back_as_list() {
    let amplitudes = array![10.5f32, 20.25, 30.0];
    let value: Value = [(Key::Int(5), Value::from(&amplitudes))].into_iter().collect();

    let map = decode(&encode(&value).unwrap()).unwrap();
    assert_eq!(
        map[&Key::Int(5)],
        Value::List(vec![
            Value::Float(10.5),
            Value::Float(20.25),
            Value::Float(30.0)
        ])
    );
}

// =============================================================================
// Non-contiguous layouts
// =============================================================================

#[test]
fn transposed_large_array_is_bit_exact() {
    let base = Array2::<f64>::from_shape_fn((25, 40), |(i, j)| {
        ((i * 40 + j) as f64).sqrt() / 3.0
    });
    let transposed = base.t();
    assert!(!transposed.is_standard_layout());

    let value: Value = [(Key::Int(1), Value::from(&transposed))].into_iter().collect();
    let back = roundtrip(&value, Key::Int(1));
    assert_eq!(back.shape, vec![40, 25]);

    let back = back.to_ndarray::<f64>().unwrap();
    for (a, b) in transposed.iter().zip(back.iter()) {
        assert_eq!(a.to_bits(), b.to_bits());
    }
}

#[test]
fn strided_view_roundtrip() {
    let base = Array2::<u8>::from_shape_fn((6, 6), |(i, j)| (i * 6 + j) as u8);
    let view = base.slice(s![1..;2, ..;3]);

    let value: Value = [(Key::Int(2), Value::from(&view))].into_iter().collect();
    let back = roundtrip(&value, Key::Int(2)).to_ndarray::<u8>().unwrap();
    assert_eq!(back, view.to_owned().into_dyn());
}

#[test]
fn dtype_preserved_for_every_element_type() {
    macro_rules! check {
        ($ty:ty, $dtype:expr) => {{
            let arr = ArrayD::<$ty>::from_elem(IxDyn(&[3, 4]), <$ty>::default());
            let value: Value = [(Key::Int(0), Value::from(&arr))].into_iter().collect();
            let back = roundtrip(&value, Key::Int(0));
            assert_eq!(back.dtype, $dtype);
            assert_eq!(back.to_ndarray::<$ty>().unwrap(), arr);
        }};
    }

    check!(bool, DType::Bool);
    check!(u8, DType::U8);
    check!(i8, DType::I8);
    check!(u16, DType::U16);
    check!(i16, DType::I16);
    check!(u32, DType::U32);
    check!(i32, DType::I32);
    check!(u64, DType::U64);
    check!(i64, DType::I64);
    check!(f32, DType::F32);
    check!(f64, DType::F64);
}

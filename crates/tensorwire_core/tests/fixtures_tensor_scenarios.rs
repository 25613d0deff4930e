#![allow(missing_docs)]

use ndarray::arr2;
use num_complex::Complex;
use tensorwire::codec::{CodecError, DecodeOptions, ElementType, NativeArray, StructuredTensor, TypeTable, decode_tensor, encode_tensor};
use tensorwire_testkit::{load_json_fixture, utf8_entries};

fn decode_fixture(name: &str) -> tensorwire::codec::Result<NativeArray> {
	let tensor: StructuredTensor = load_json_fixture(name);
	decode_tensor(TypeTable::global(), &tensor, &DecodeOptions::default())
}

#[test]
fn scalar_float_fixture() {
	let NativeArray::F32(arr) = decode_fixture("scalar_float.json").expect("decode succeeds") else {
		panic!("expected f32 array");
	};
	assert_eq!(arr.shape(), &[] as &[usize]);
	assert_eq!(arr.first().copied(), Some(1.0));
}

#[test]
fn int64_matrix_fixture() {
	let value = decode_fixture("int64_matrix.json").expect("decode succeeds");
	assert_eq!(value, NativeArray::I64(arr2(&[[1_i64, 2], [3, 4]]).into_dyn()));
	assert_eq!(value.shape().iter().product::<usize>(), 4);
}

#[test]
fn string_tensor_fixture_round_trips() {
	let value = decode_fixture("string_tensor.json").expect("decode succeeds");
	let NativeArray::Text(arr) = &value else {
		panic!("expected text array");
	};
	assert_eq!(arr.iter().map(String::as_str).collect::<Vec<_>>(), ["héllo", "b"]);

	let encoded = encode_tensor(TypeTable::global(), &value, None).expect("encode succeeds");
	assert_eq!(encoded.element_type, ElementType::String);
	assert_eq!(encoded.string_data, utf8_entries(&["héllo", "b"]));
	assert!(encoded.raw_data.is_none());
}

#[test]
fn complex_typed_fixture() {
	let NativeArray::Complex64(arr) = decode_fixture("complex_typed.json").expect("decode succeeds") else {
		panic!("expected complex64 array");
	};
	assert_eq!(arr.shape(), &[2, 1]);
	assert_eq!(arr.iter().copied().collect::<Vec<_>>(), vec![Complex::new(1.0, -1.0), Complex::new(0.5, 2.0)]);
}

#[test]
fn segmented_fixture_is_rejected() {
	let err = decode_fixture("segmented.json").expect_err("segment present");
	assert!(matches!(err, CodecError::UnsupportedFeature { .. }));
}

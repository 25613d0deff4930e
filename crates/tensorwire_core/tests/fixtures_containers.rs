#![allow(missing_docs)]

use ndarray::{ArrayD, IxDyn};
use tensorwire::codec::{
	DecodeOptions, MapKey, MapValue, NativeArray, NativeValue, SequenceValue, TypeTable, decode_map, decode_sequence, json,
};
use tensorwire_testkit::load_json_fixture;

#[test]
fn nested_map_fixture() {
	let map: MapValue = load_json_fixture("nested_map.json");
	let decoded = decode_map(TypeTable::global(), &map, &DecodeOptions::default()).expect("map decodes");
	assert_eq!(
		decoded.get(&MapKey::Int(7)),
		Some(&NativeValue::Array(NativeArray::F32(ArrayD::from_elem(IxDyn(&[]), 2.5))))
	);
}

#[test]
fn sequence_of_maps_matches_golden_json() {
	let seq: SequenceValue = load_json_fixture("sequence_of_maps.json");
	let decoded = decode_sequence(TypeTable::global(), &seq, &DecodeOptions::default()).expect("sequence decodes");
	let expected: serde_json::Value = load_json_fixture("sequence_of_maps.expected.json");
	assert_eq!(json::to_json(&NativeValue::Sequence(decoded)), expected);
}

#[test]
fn options_fixture_limits_nesting() {
	let opt: DecodeOptions = load_json_fixture("decode_options.json");
	assert_eq!(opt.max_depth, 3);
	assert_eq!(opt.max_elements, Some(4096));

	let seq: SequenceValue = load_json_fixture("sequence_of_maps.json");
	decode_sequence(TypeTable::global(), &seq, &opt).expect("three levels fit a ceiling of three");

	let tight = DecodeOptions { max_depth: 2, ..opt };
	decode_sequence(TypeTable::global(), &seq, &tight).expect_err("three levels exceed a ceiling of two");
}

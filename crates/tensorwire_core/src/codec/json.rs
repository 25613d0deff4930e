//! Render decoded values as plain JSON.
//!
//! Arrays become nested lists following their shape, zero-dimensional arrays
//! become bare scalars, and maps become objects keyed by the key's text form.
//!
//! Keys of different kinds can share a text form: `Int(1)`, `UInt(1)` and
//! `Text("1")` all render as `"1"`. Keys are written in `MapKey` order
//! (signed, unsigned, text), so the last of the colliding keys keeps its value.

use serde_json::{Map, Number, Value};

use crate::codec::{NativeArray, NativeValue};

/// Render a decoded container tree.
pub fn to_json(value: &NativeValue) -> Value {
	match value {
		NativeValue::Array(array) => array_to_json(array),
		NativeValue::Sequence(items) => Value::Array(items.iter().map(to_json).collect()),
		NativeValue::Map(map) => Value::Object(map.iter().map(|(key, value)| (key.to_string(), to_json(value))).collect::<Map<_, _>>()),
	}
}

/// Render one array as nested lists.
pub fn array_to_json(array: &NativeArray) -> Value {
	let flat: Vec<Value> = match array {
		NativeArray::Bool(arr) => arr.iter().map(|v| Value::Bool(*v)).collect(),
		NativeArray::U8(arr) => arr.iter().map(|v| Value::from(*v)).collect(),
		NativeArray::I8(arr) => arr.iter().map(|v| Value::from(*v)).collect(),
		NativeArray::U16(arr) => arr.iter().map(|v| Value::from(*v)).collect(),
		NativeArray::I16(arr) => arr.iter().map(|v| Value::from(*v)).collect(),
		NativeArray::I32(arr) => arr.iter().map(|v| Value::from(*v)).collect(),
		NativeArray::I64(arr) => arr.iter().map(|v| Value::from(*v)).collect(),
		NativeArray::U32(arr) => arr.iter().map(|v| Value::from(*v)).collect(),
		NativeArray::U64(arr) => arr.iter().map(|v| Value::from(*v)).collect(),
		NativeArray::F16(arr) => arr.iter().map(|v| float(v.to_f64())).collect(),
		NativeArray::BF16(arr) => arr.iter().map(|v| float(v.to_f64())).collect(),
		NativeArray::F32(arr) => arr.iter().map(|v| float(f64::from(*v))).collect(),
		NativeArray::F64(arr) => arr.iter().map(|v| float(*v)).collect(),
		NativeArray::Complex64(arr) => arr.iter().map(|v| Value::Array(vec![float(f64::from(v.re)), float(f64::from(v.im))])).collect(),
		NativeArray::Complex128(arr) => arr.iter().map(|v| Value::Array(vec![float(v.re), float(v.im)])).collect(),
		NativeArray::Text(arr) => arr.iter().map(|v| Value::String(v.clone())).collect(),
		NativeArray::NestedText(arr) => arr
			.iter()
			.map(|list| Value::Array(list.iter().cloned().map(Value::String).collect()))
			.collect(),
	};

	let mut items = flat.into_iter();
	nest(&mut items, array.shape())
}

// Non-finite floats have no JSON form.
fn float(value: f64) -> Value {
	Number::from_f64(value).map_or(Value::Null, Value::Number)
}

fn nest(items: &mut impl Iterator<Item = Value>, shape: &[usize]) -> Value {
	match shape.split_first() {
		None => items.next().unwrap_or(Value::Null),
		Some((len, rest)) => Value::Array((0..*len).map(|_| nest(items, rest)).collect()),
	}
}

#[cfg(test)]
mod tests {
	use ndarray::{ArrayD, IxDyn, arr2};
	use num_complex::Complex;
	use serde_json::json;

	use super::{array_to_json, to_json};
	use crate::codec::{MapKey, NativeArray, NativeMap, NativeValue};

	#[test]
	fn arrays_nest_by_shape() {
		let array = NativeArray::I64(arr2(&[[1_i64, 2, 3], [4, 5, 6]]).into_dyn());
		assert_eq!(array_to_json(&array), json!([[1, 2, 3], [4, 5, 6]]));
	}

	#[test]
	fn zero_dim_arrays_are_bare_scalars() {
		let array = NativeArray::F32(ArrayD::from_elem(IxDyn(&[]), 2.5));
		assert_eq!(array_to_json(&array), json!(2.5));
	}

	#[test]
	fn non_finite_floats_become_null() {
		let array = NativeArray::F64(ArrayD::from_shape_vec(IxDyn(&[2]), vec![f64::NAN, 1.0]).expect("shape"));
		assert_eq!(array_to_json(&array), json!([null, 1.0]));
	}

	#[test]
	fn complex_elements_are_pairs() {
		let array = NativeArray::Complex64(ArrayD::from_elem(IxDyn(&[1]), Complex::new(1.0, -2.0)));
		assert_eq!(array_to_json(&array), json!([[1.0, -2.0]]));
	}

	#[test]
	fn maps_use_key_text() {
		let mut map = NativeMap::new();
		map.insert(MapKey::Int(7), NativeValue::Array(NativeArray::F32(ArrayD::from_elem(IxDyn(&[]), 2.5))));
		map.insert(
			MapKey::Text("names".to_owned()),
			NativeValue::Sequence(vec![NativeValue::Array(NativeArray::Text(ArrayD::from_elem(IxDyn(&[1]), "x".to_owned())))]),
		);
		assert_eq!(to_json(&NativeValue::Map(map)), json!({"7": 2.5, "names": [["x"]]}));
	}

	#[test]
	fn colliding_key_text_keeps_the_text_key_value() {
		let scalar = |v: f32| NativeValue::Array(NativeArray::F32(ArrayD::from_elem(IxDyn(&[]), v)));
		let mut map = NativeMap::new();
		map.insert(MapKey::Text("1".to_owned()), scalar(3.0));
		map.insert(MapKey::Int(1), scalar(1.0));
		map.insert(MapKey::UInt(1), scalar(2.0));
		assert_eq!(map.len(), 3);
		assert_eq!(to_json(&NativeValue::Map(map)), json!({"1": 3.0}));
	}
}

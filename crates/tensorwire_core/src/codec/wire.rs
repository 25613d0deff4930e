use serde::{Deserialize, Serialize};

use crate::codec::{ElemKind, ElementType};

/// Deprecated segment marker. Its presence makes a tensor undecodable.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct Segment {
	/// First element index covered by the segment.
	pub begin: i64,
	/// One past the last element index covered by the segment.
	pub end: i64,
}

/// Parsed tensor message as handed over by the schema layer.
///
/// At most one payload form is expected to be populated. When `raw_data` is
/// present it wins over the typed fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct StructuredTensor {
	/// Optional tensor name.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Declared scalar type.
	pub element_type: ElementType,
	/// Shape, outermost dimension first. Empty for scalars.
	#[serde(default)]
	pub dims: Vec<u64>,
	/// Packed little-endian payload.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub raw_data: Option<Vec<u8>>,
	/// Values of storage type FLOAT (and COMPLEX64 pairs).
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub float_data: Vec<f32>,
	/// Values of storage type INT32 and UINT16.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub int32_data: Vec<i32>,
	/// UTF-8 encoded strings, one per element.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub string_data: Vec<Vec<u8>>,
	/// Values of storage type INT64.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub int64_data: Vec<i64>,
	/// Values of storage type DOUBLE (and COMPLEX128 pairs).
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub double_data: Vec<f64>,
	/// Values of storage type UINT32 and UINT64.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub uint64_data: Vec<u64>,
	/// Deprecated segment marker.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub segment: Option<Segment>,
}

impl StructuredTensor {
	/// Empty tensor of `element_type` with the given shape and no payload.
	pub fn new(element_type: ElementType, dims: Vec<u64>) -> Self {
		Self {
			name: None,
			element_type,
			dims,
			raw_data: None,
			float_data: Vec::new(),
			int32_data: Vec::new(),
			string_data: Vec::new(),
			int64_data: Vec::new(),
			double_data: Vec::new(),
			uint64_data: Vec::new(),
			segment: None,
		}
	}
}

/// Child of a sequence or value of a map.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WireValue {
	/// Dense (or sparse, decoded as dense) tensor.
	Tensor(StructuredTensor),
	/// Nested sequence.
	Sequence(SequenceValue),
	/// Nested map.
	Map(MapValue),
}

impl WireValue {
	/// Stable lowercase label of the variant.
	pub fn kind_label(&self) -> &'static str {
		match self {
			Self::Tensor(_) => "tensor",
			Self::Sequence(_) => "sequence",
			Self::Map(_) => "map",
		}
	}
}

/// Ordered sequence whose children all share one declared kind.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SequenceValue {
	/// Optional sequence name.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Declared kind of every child.
	pub elem_kind: ElemKind,
	/// Children in order.
	#[serde(default)]
	pub values: Vec<WireValue>,
}

/// Ordered list of key/value pairs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MapValue {
	/// Optional map name.
	#[serde(default, skip_serializing_if = "Option::is_none")]
	pub name: Option<String>,
	/// Pairs in wire order. Keys may repeat.
	#[serde(default)]
	pub pairs: Vec<KeyValuePair>,
}

/// One map entry. The key lives in the scalar slot selected by `key_type`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct KeyValuePair {
	/// Wire type of the key.
	pub key_type: ElementType,
	/// Key slot for signed integer key types.
	#[serde(default)]
	pub int64_key: i64,
	/// Key slot for unsigned integer key types.
	#[serde(default)]
	pub uint64_key: u64,
	/// Key slot for string keys, UTF-8 encoded.
	#[serde(default, skip_serializing_if = "Vec::is_empty")]
	pub string_key: Vec<u8>,
	/// Declared kind of `value`.
	pub value_type: ElemKind,
	/// Entry value.
	pub value: WireValue,
}

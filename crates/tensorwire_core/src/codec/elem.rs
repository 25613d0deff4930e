use serde::{Deserialize, Serialize};

use crate::codec::{CodecError, Result};

/// Wire tag identifying a tensor's scalar element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i32)]
pub enum ElementType {
	/// Sentinel for an unset type. Never valid as a payload type.
	Undefined = 0,
	/// IEEE 754 single precision.
	Float = 1,
	/// Unsigned 8-bit integer.
	Uint8 = 2,
	/// Signed 8-bit integer.
	Int8 = 3,
	/// Unsigned 16-bit integer.
	Uint16 = 4,
	/// Signed 16-bit integer.
	Int16 = 5,
	/// Signed 32-bit integer.
	Int32 = 6,
	/// Signed 64-bit integer.
	Int64 = 7,
	/// UTF-8 text.
	String = 8,
	/// Boolean.
	Bool = 9,
	/// IEEE 754 half precision.
	Float16 = 10,
	/// IEEE 754 double precision.
	Double = 11,
	/// Unsigned 32-bit integer.
	Uint32 = 12,
	/// Unsigned 64-bit integer.
	Uint64 = 13,
	/// Complex value with `f32` parts.
	Complex64 = 14,
	/// Complex value with `f64` parts.
	Complex128 = 15,
	/// Brain floating point (8-bit exponent, 7-bit mantissa).
	Bfloat16 = 16,
}

impl ElementType {
	/// Every tag in wire order.
	pub const ALL: [Self; 17] = [
		Self::Undefined,
		Self::Float,
		Self::Uint8,
		Self::Int8,
		Self::Uint16,
		Self::Int16,
		Self::Int32,
		Self::Int64,
		Self::String,
		Self::Bool,
		Self::Float16,
		Self::Double,
		Self::Uint32,
		Self::Uint64,
		Self::Complex64,
		Self::Complex128,
		Self::Bfloat16,
	];

	/// Parse a raw wire tag.
	pub fn from_tag(tag: i32) -> Result<Self> {
		usize::try_from(tag)
			.ok()
			.and_then(|idx| Self::ALL.get(idx).copied())
			.ok_or_else(|| CodecError::UnsupportedType {
				ty: format!("element type tag {tag}"),
			})
	}

	/// Raw wire tag.
	pub fn tag(self) -> i32 {
		self as i32
	}

	/// Stable upper-case label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Undefined => "UNDEFINED",
			Self::Float => "FLOAT",
			Self::Uint8 => "UINT8",
			Self::Int8 => "INT8",
			Self::Uint16 => "UINT16",
			Self::Int16 => "INT16",
			Self::Int32 => "INT32",
			Self::Int64 => "INT64",
			Self::String => "STRING",
			Self::Bool => "BOOL",
			Self::Float16 => "FLOAT16",
			Self::Double => "DOUBLE",
			Self::Uint32 => "UINT32",
			Self::Uint64 => "UINT64",
			Self::Complex64 => "COMPLEX64",
			Self::Complex128 => "COMPLEX128",
			Self::Bfloat16 => "BFLOAT16",
		}
	}

	/// Whether the type holds interleaved real/imaginary pairs in typed fields.
	pub fn is_complex(self) -> bool {
		matches!(self, Self::Complex64 | Self::Complex128)
	}
}

/// Kind tag for the children of a sequence or the values of a map.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(i32)]
pub enum ElemKind {
	/// Sentinel for an unset kind.
	Undefined = 0,
	/// Dense tensor.
	Tensor = 1,
	/// Sparse tensor, decoded like a dense tensor.
	SparseTensor = 2,
	/// Nested sequence.
	Sequence = 3,
	/// Nested map.
	Map = 4,
}

impl ElemKind {
	/// Parse a raw wire tag.
	pub fn from_tag(tag: i32) -> Result<Self> {
		match tag {
			0 => Ok(Self::Undefined),
			1 => Ok(Self::Tensor),
			2 => Ok(Self::SparseTensor),
			3 => Ok(Self::Sequence),
			4 => Ok(Self::Map),
			_ => Err(CodecError::UndefinedType { context: "value kind", tag }),
		}
	}

	/// Raw wire tag.
	pub fn tag(self) -> i32 {
		self as i32
	}
}

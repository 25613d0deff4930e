use std::collections::BTreeMap;
use std::fmt;

use half::{bf16, f16};
use ndarray::ArrayD;
use num_complex::Complex;

use crate::codec::NativeDtype;

/// Element kind of a native array, fixed when the array is constructed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ArrayKind {
	/// Fixed-width scalar elements.
	Numeric(NativeDtype),
	/// One text value per element.
	Text,
	/// A list of text values per element.
	NestedText,
}

/// Dense row-major array produced by tensor decoding.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeArray {
	/// Booleans.
	Bool(ArrayD<bool>),
	/// Unsigned 8-bit integers.
	U8(ArrayD<u8>),
	/// Signed 8-bit integers.
	I8(ArrayD<i8>),
	/// Unsigned 16-bit integers.
	U16(ArrayD<u16>),
	/// Signed 16-bit integers.
	I16(ArrayD<i16>),
	/// Signed 32-bit integers.
	I32(ArrayD<i32>),
	/// Signed 64-bit integers.
	I64(ArrayD<i64>),
	/// Unsigned 32-bit integers.
	U32(ArrayD<u32>),
	/// Unsigned 64-bit integers.
	U64(ArrayD<u64>),
	/// Half precision floats.
	F16(ArrayD<f16>),
	/// Brain floats.
	BF16(ArrayD<bf16>),
	/// Single precision floats.
	F32(ArrayD<f32>),
	/// Double precision floats.
	F64(ArrayD<f64>),
	/// Complex values with `f32` parts.
	Complex64(ArrayD<Complex<f32>>),
	/// Complex values with `f64` parts.
	Complex128(ArrayD<Complex<f64>>),
	/// Unicode text.
	Text(ArrayD<String>),
	/// Lists of Unicode text, flattened on encode.
	NestedText(ArrayD<Vec<String>>),
}

macro_rules! with_array {
	($value:expr, $arr:ident => $body:expr) => {
		match $value {
			NativeArray::Bool($arr) => $body,
			NativeArray::U8($arr) => $body,
			NativeArray::I8($arr) => $body,
			NativeArray::U16($arr) => $body,
			NativeArray::I16($arr) => $body,
			NativeArray::I32($arr) => $body,
			NativeArray::I64($arr) => $body,
			NativeArray::U32($arr) => $body,
			NativeArray::U64($arr) => $body,
			NativeArray::F16($arr) => $body,
			NativeArray::BF16($arr) => $body,
			NativeArray::F32($arr) => $body,
			NativeArray::F64($arr) => $body,
			NativeArray::Complex64($arr) => $body,
			NativeArray::Complex128($arr) => $body,
			NativeArray::Text($arr) => $body,
			NativeArray::NestedText($arr) => $body,
		}
	};
}

impl NativeArray {
	/// Construction-time element kind.
	pub fn kind(&self) -> ArrayKind {
		match self {
			Self::Bool(_) => ArrayKind::Numeric(NativeDtype::Bool),
			Self::U8(_) => ArrayKind::Numeric(NativeDtype::U8),
			Self::I8(_) => ArrayKind::Numeric(NativeDtype::I8),
			Self::U16(_) => ArrayKind::Numeric(NativeDtype::U16),
			Self::I16(_) => ArrayKind::Numeric(NativeDtype::I16),
			Self::I32(_) => ArrayKind::Numeric(NativeDtype::I32),
			Self::I64(_) => ArrayKind::Numeric(NativeDtype::I64),
			Self::U32(_) => ArrayKind::Numeric(NativeDtype::U32),
			Self::U64(_) => ArrayKind::Numeric(NativeDtype::U64),
			Self::F16(_) => ArrayKind::Numeric(NativeDtype::F16),
			Self::BF16(_) => ArrayKind::Numeric(NativeDtype::BF16),
			Self::F32(_) => ArrayKind::Numeric(NativeDtype::F32),
			Self::F64(_) => ArrayKind::Numeric(NativeDtype::F64),
			Self::Complex64(_) => ArrayKind::Numeric(NativeDtype::Complex64),
			Self::Complex128(_) => ArrayKind::Numeric(NativeDtype::Complex128),
			Self::Text(_) => ArrayKind::Text,
			Self::NestedText(_) => ArrayKind::NestedText,
		}
	}

	/// Array shape, outermost dimension first.
	pub fn shape(&self) -> &[usize] {
		with_array!(self, arr => arr.shape())
	}

	/// Number of elements.
	pub fn len(&self) -> usize {
		with_array!(self, arr => arr.len())
	}

	/// Whether the array has no elements.
	pub fn is_empty(&self) -> bool {
		self.len() == 0
	}
}

macro_rules! impl_from_array {
	($($variant:ident => $ty:ty),* $(,)?) => {
		$(
			impl From<ArrayD<$ty>> for NativeArray {
				fn from(value: ArrayD<$ty>) -> Self {
					Self::$variant(value)
				}
			}
		)*
	};
}

impl_from_array!(
	Bool => bool,
	U8 => u8,
	I8 => i8,
	U16 => u16,
	I16 => i16,
	I32 => i32,
	I64 => i64,
	U32 => u32,
	U64 => u64,
	F16 => f16,
	BF16 => bf16,
	F32 => f32,
	F64 => f64,
	Complex64 => Complex<f32>,
	Complex128 => Complex<f64>,
	Text => String,
	NestedText => Vec<String>,
);

/// Scalar map key.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub enum MapKey {
	/// Signed integer key.
	Int(i64),
	/// Unsigned integer key.
	UInt(u64),
	/// Text key.
	Text(String),
}

impl fmt::Display for MapKey {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		match self {
			Self::Int(value) => write!(f, "{value}"),
			Self::UInt(value) => write!(f, "{value}"),
			Self::Text(value) => f.write_str(value),
		}
	}
}

/// Decoded map. Later duplicate keys overwrite earlier ones.
pub type NativeMap = BTreeMap<MapKey, NativeValue>;

/// Decoded container tree.
#[derive(Debug, Clone, PartialEq)]
pub enum NativeValue {
	/// Dense array.
	Array(NativeArray),
	/// Ordered sequence.
	Sequence(Vec<NativeValue>),
	/// Key/value association.
	Map(NativeMap),
}

impl NativeValue {
	/// Stable lowercase label of the variant.
	pub fn kind_label(&self) -> &'static str {
		match self {
			Self::Array(_) => "tensor",
			Self::Sequence(_) => "sequence",
			Self::Map(_) => "map",
		}
	}
}

impl From<NativeArray> for NativeValue {
	fn from(value: NativeArray) -> Self {
		Self::Array(value)
	}
}

use std::str::Utf8Error;

use thiserror::Error;

use crate::codec::ElemKind;

/// Crate-local result type.
pub type Result<T> = std::result::Result<T, CodecError>;

/// Errors produced while converting between wire values and native arrays.
#[derive(Debug, Error)]
pub enum CodecError {
	/// Deprecated or unsupported payload form was present.
	#[error("unsupported feature: {feature}")]
	UnsupportedFeature {
		/// Name of the offending payload form.
		feature: &'static str,
	},
	/// Element type or value kind is the undefined sentinel or an unknown tag.
	#[error("{context} is not defined (tag={tag})")]
	UndefinedType {
		/// What carried the undefined tag.
		context: &'static str,
		/// Raw wire tag.
		tag: i32,
	},
	/// No mapping-table entry exists for a wire type or native dtype.
	#[error("unsupported type: {ty}")]
	UnsupportedType {
		/// Label of the type that has no entry.
		ty: String,
	},
	/// Payload element count does not match the declared dimensions.
	#[error("shape mismatch for dims {dims:?}: expected {expected} elements, got {actual}")]
	ShapeMismatch {
		/// Declared tensor dimensions.
		dims: Vec<u64>,
		/// Element count implied by `dims`.
		expected: usize,
		/// Element count implied by the payload.
		actual: usize,
	},
	/// Product of dimensions does not fit in `usize`.
	#[error("dimension product overflows for dims {dims:?}")]
	DimensionOverflow {
		/// Declared tensor dimensions.
		dims: Vec<u64>,
	},
	/// Text payload is not valid UTF-8.
	#[error("{context} {index} is not valid utf-8: {source}")]
	EncodingError {
		/// Which payload held the bytes, such as a tensor string entry or a map key.
		context: &'static str,
		/// Index of the offending entry or pair.
		index: usize,
		/// Underlying UTF-8 error.
		source: Utf8Error,
	},
	/// Native element cannot be encoded.
	#[error("unsupported element: {kind}")]
	UnsupportedElement {
		/// Logical kind of the rejected element.
		kind: &'static str,
	},
	/// Container child does not match the declared kind.
	#[error("container kind mismatch: expected {expected:?}, got {got}")]
	KindMismatch {
		/// Declared element or value kind.
		expected: ElemKind,
		/// Actual child kind.
		got: &'static str,
	},
	/// Container nesting exceeded the configured ceiling.
	#[error("nesting too deep (max={max_depth})")]
	NestingTooDeep {
		/// Configured depth ceiling.
		max_depth: u32,
	},
	/// Tensor element count exceeded the configured ceiling.
	#[error("tensor too large: count={count}, max={max}")]
	TooManyElements {
		/// Element count implied by dims.
		count: usize,
		/// Maximum permitted element count.
		max: usize,
	},
	/// Host byte order is not little-endian.
	#[error("unsupported endianness (expected little-endian host)")]
	BigEndianUnsupported,
	/// Options document could not be parsed.
	#[error("config: {0}")]
	Config(#[from] serde_json::Error),
}

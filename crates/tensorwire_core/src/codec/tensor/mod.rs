use half::{bf16, f16};
use ndarray::{ArrayD, IxDyn};
use num_complex::Complex;

use crate::codec::bytes::{Element, read_all, write_all};
use crate::codec::{CodecError, DecodeOptions, ElementType, NativeArray, NativeDtype, Result, StorageField, StructuredTensor, TypeTable};

/// Validated tensor geometry.
struct Layout<'a> {
	dims: &'a [u64],
	shape: Vec<usize>,
	count: usize,
}

impl<'a> Layout<'a> {
	fn new(dims: &'a [u64]) -> Result<Self> {
		let overflow = || CodecError::DimensionOverflow { dims: dims.to_vec() };
		let shape = dims.iter().map(|dim| usize::try_from(*dim).map_err(|_| overflow())).collect::<Result<Vec<_>>>()?;
		let count = shape.iter().try_fold(1_usize, |acc, dim| acc.checked_mul(*dim)).ok_or_else(overflow)?;
		Ok(Self { dims, shape, count })
	}

	fn mismatch(&self, actual: usize) -> CodecError {
		CodecError::ShapeMismatch {
			dims: self.dims.to_vec(),
			expected: self.count,
			actual,
		}
	}

	fn build<T>(&self, values: Vec<T>) -> Result<ArrayD<T>> {
		if values.len() != self.count {
			return Err(self.mismatch(values.len()));
		}
		let actual = values.len();
		ArrayD::from_shape_vec(IxDyn(&self.shape), values).map_err(|_| self.mismatch(actual))
	}

	/// Convert a typed payload, checking its length before copying it.
	fn convert<S: Copy, T>(&self, values: &[S], f: impl Fn(S) -> T) -> Result<ArrayD<T>> {
		if values.len() != self.count {
			return Err(self.mismatch(values.len()));
		}
		self.build(values.iter().copied().map(f).collect())
	}

	fn pairs<T: Copy>(&self, values: &[T]) -> Result<ArrayD<Complex<T>>> {
		if values.len() % 2 == 0 && values.len() / 2 != self.count {
			return Err(self.mismatch(values.len() / 2));
		}
		self.build(pair_up(values, self.dims)?)
	}
}

/// Convert a structured tensor into a dense native array.
pub fn decode_tensor(table: &TypeTable, tensor: &StructuredTensor, opt: &DecodeOptions) -> Result<NativeArray> {
	ensure_little_endian()?;
	if tensor.segment.is_some() {
		return Err(CodecError::UnsupportedFeature { feature: "segment" });
	}
	let ty = tensor.element_type;
	if ty == ElementType::Undefined {
		return Err(CodecError::UndefinedType {
			context: "tensor element type",
			tag: ty.tag(),
		});
	}

	tracing::trace!(element_type = ty.as_str(), dims = ?tensor.dims, raw = tensor.raw_data.is_some(), "decoding tensor");

	let layout = Layout::new(&tensor.dims)?;
	opt.check_elements(layout.count)?;
	let native = table.native_dtype(ty)?;

	if native == NativeDtype::Text {
		return decode_text(table, tensor, &layout);
	}
	if let Some(raw) = &tensor.raw_data {
		return decode_raw(native, raw, &layout);
	}
	decode_typed(table, tensor, native, &layout)
}

fn decode_text(table: &TypeTable, tensor: &StructuredTensor, layout: &Layout<'_>) -> Result<NativeArray> {
	let field = table.storage_field(tensor.element_type)?;
	if field != StorageField::StringData {
		return Err(unsupported_storage(NativeDtype::Text, field));
	}
	if tensor.string_data.len() != layout.count {
		return Err(layout.mismatch(tensor.string_data.len()));
	}

	let texts = tensor
		.string_data
		.iter()
		.enumerate()
		.map(|(index, bytes)| {
			std::str::from_utf8(bytes)
				.map(str::to_owned)
				.map_err(|source| CodecError::EncodingError {
					context: "string entry",
					index,
					source,
				})
		})
		.collect::<Result<Vec<_>>>()?;
	Ok(NativeArray::Text(layout.build(texts)?))
}

fn decode_raw(native: NativeDtype, raw: &[u8], layout: &Layout<'_>) -> Result<NativeArray> {
	Ok(match native {
		NativeDtype::Bool => NativeArray::Bool(unpack(raw, layout)?),
		NativeDtype::U8 => NativeArray::U8(unpack(raw, layout)?),
		NativeDtype::I8 => NativeArray::I8(unpack(raw, layout)?),
		NativeDtype::U16 => NativeArray::U16(unpack(raw, layout)?),
		NativeDtype::I16 => NativeArray::I16(unpack(raw, layout)?),
		NativeDtype::I32 => NativeArray::I32(unpack(raw, layout)?),
		NativeDtype::I64 => NativeArray::I64(unpack(raw, layout)?),
		NativeDtype::U32 => NativeArray::U32(unpack(raw, layout)?),
		NativeDtype::U64 => NativeArray::U64(unpack(raw, layout)?),
		NativeDtype::F16 => NativeArray::F16(unpack(raw, layout)?),
		NativeDtype::BF16 => NativeArray::BF16(unpack(raw, layout)?),
		NativeDtype::F32 => NativeArray::F32(unpack(raw, layout)?),
		NativeDtype::F64 => NativeArray::F64(unpack(raw, layout)?),
		NativeDtype::Complex64 => NativeArray::Complex64(unpack(raw, layout)?),
		NativeDtype::Complex128 => NativeArray::Complex128(unpack(raw, layout)?),
		NativeDtype::Text => {
			return Err(CodecError::UnsupportedFeature {
				feature: "raw_data for text tensors",
			});
		}
	})
}

fn unpack<T: Element>(raw: &[u8], layout: &Layout<'_>) -> Result<ArrayD<T>> {
	let need = layout.count.checked_mul(T::WIDTH).ok_or_else(|| CodecError::DimensionOverflow {
		dims: layout.dims.to_vec(),
	})?;
	if raw.len() != need {
		return Err(layout.mismatch(raw.len().div_ceil(T::WIDTH)));
	}
	layout.build(read_all(raw))
}

fn decode_typed(table: &TypeTable, tensor: &StructuredTensor, native: NativeDtype, layout: &Layout<'_>) -> Result<NativeArray> {
	let field = table.storage_field(tensor.element_type)?;

	// FLOAT16 and BFLOAT16 are stored as UINT16 bit patterns widened into int32 slots.
	Ok(match (native, field) {
		(NativeDtype::F32, StorageField::FloatData) => NativeArray::F32(layout.convert(&tensor.float_data, |v| v)?),
		(NativeDtype::F64, StorageField::DoubleData) => NativeArray::F64(layout.convert(&tensor.double_data, |v| v)?),
		(NativeDtype::I32, StorageField::Int32Data) => NativeArray::I32(layout.convert(&tensor.int32_data, |v| v)?),
		(NativeDtype::I64, StorageField::Int64Data) => NativeArray::I64(layout.convert(&tensor.int64_data, |v| v)?),
		(NativeDtype::U64, StorageField::Uint64Data) => NativeArray::U64(layout.convert(&tensor.uint64_data, |v| v)?),
		(NativeDtype::U32, StorageField::Uint64Data) => NativeArray::U32(layout.convert(&tensor.uint64_data, |v| v as u32)?),
		(NativeDtype::U8, StorageField::Int32Data) => NativeArray::U8(layout.convert(&tensor.int32_data, |v| v as u8)?),
		(NativeDtype::I8, StorageField::Int32Data) => NativeArray::I8(layout.convert(&tensor.int32_data, |v| v as i8)?),
		(NativeDtype::U16, StorageField::Int32Data) => NativeArray::U16(layout.convert(&tensor.int32_data, |v| v as u16)?),
		(NativeDtype::I16, StorageField::Int32Data) => NativeArray::I16(layout.convert(&tensor.int32_data, |v| v as i16)?),
		(NativeDtype::Bool, StorageField::Int32Data) => NativeArray::Bool(layout.convert(&tensor.int32_data, |v| v != 0)?),
		(NativeDtype::F16, StorageField::Int32Data) => NativeArray::F16(layout.convert(&tensor.int32_data, |v| f16::from_bits(v as u16))?),
		(NativeDtype::BF16, StorageField::Int32Data) => NativeArray::BF16(layout.convert(&tensor.int32_data, |v| bf16::from_bits(v as u16))?),
		(NativeDtype::Complex64, StorageField::FloatData) => NativeArray::Complex64(layout.pairs(&tensor.float_data)?),
		(NativeDtype::Complex128, StorageField::DoubleData) => NativeArray::Complex128(layout.pairs(&tensor.double_data)?),
		(native, field) => return Err(unsupported_storage(native, field)),
	})
}

/// Pair interleaved real/imaginary values: entries `2i` and `2i + 1` become element `i`.
///
/// An odd number of values is a [`CodecError::ShapeMismatch`].
pub fn combine_pairs_to_complex<T: Copy>(values: &[T]) -> Result<Vec<Complex<T>>> {
	pair_up(values, &[])
}

fn pair_up<T: Copy>(values: &[T], dims: &[u64]) -> Result<Vec<Complex<T>>> {
	if values.len() % 2 != 0 {
		return Err(CodecError::ShapeMismatch {
			dims: dims.to_vec(),
			expected: values.len() + 1,
			actual: values.len(),
		});
	}
	Ok(values.chunks_exact(2).map(|pair| Complex::new(pair[0], pair[1])).collect())
}

/// Convert a native array into a structured tensor.
///
/// Numeric arrays become a packed `raw_data` payload. Text arrays fill
/// `string_data` instead and never set `raw_data`.
pub fn encode_tensor(table: &TypeTable, array: &NativeArray, name: Option<&str>) -> Result<StructuredTensor> {
	ensure_little_endian()?;
	let dims = array.shape().iter().map(|dim| *dim as u64).collect::<Vec<_>>();

	let mut tensor = match array {
		NativeArray::Text(arr) => text_tensor(table, dims, arr.iter().map(String::as_str))?,
		NativeArray::NestedText(arr) => nested_text_tensor(table, dims, arr)?,
		NativeArray::Bool(arr) => raw_tensor(table, NativeDtype::Bool, dims, arr)?,
		NativeArray::U8(arr) => raw_tensor(table, NativeDtype::U8, dims, arr)?,
		NativeArray::I8(arr) => raw_tensor(table, NativeDtype::I8, dims, arr)?,
		NativeArray::U16(arr) => raw_tensor(table, NativeDtype::U16, dims, arr)?,
		NativeArray::I16(arr) => raw_tensor(table, NativeDtype::I16, dims, arr)?,
		NativeArray::I32(arr) => raw_tensor(table, NativeDtype::I32, dims, arr)?,
		NativeArray::I64(arr) => raw_tensor(table, NativeDtype::I64, dims, arr)?,
		NativeArray::U32(arr) => raw_tensor(table, NativeDtype::U32, dims, arr)?,
		NativeArray::U64(arr) => raw_tensor(table, NativeDtype::U64, dims, arr)?,
		NativeArray::F16(arr) => raw_tensor(table, NativeDtype::F16, dims, arr)?,
		NativeArray::BF16(arr) => raw_tensor(table, NativeDtype::BF16, dims, arr)?,
		NativeArray::F32(arr) => raw_tensor(table, NativeDtype::F32, dims, arr)?,
		NativeArray::F64(arr) => raw_tensor(table, NativeDtype::F64, dims, arr)?,
		NativeArray::Complex64(arr) => raw_tensor(table, NativeDtype::Complex64, dims, arr)?,
		NativeArray::Complex128(arr) => raw_tensor(table, NativeDtype::Complex128, dims, arr)?,
	};

	tensor.name = name.filter(|name| !name.is_empty()).map(str::to_owned);
	Ok(tensor)
}

fn raw_tensor<T: Element>(table: &TypeTable, dtype: NativeDtype, dims: Vec<u64>, arr: &ArrayD<T>) -> Result<StructuredTensor> {
	let mut tensor = StructuredTensor::new(table.element_type_for(dtype)?, dims);
	tensor.raw_data = Some(write_all(arr.iter()));
	Ok(tensor)
}

fn text_tensor<'a>(table: &TypeTable, dims: Vec<u64>, texts: impl Iterator<Item = &'a str>) -> Result<StructuredTensor> {
	let mut tensor = StructuredTensor::new(table.element_type_for(NativeDtype::Text)?, dims);
	tensor.string_data = texts.map(|text| text.as_bytes().to_vec()).collect();
	Ok(tensor)
}

fn nested_text_tensor(table: &TypeTable, dims: Vec<u64>, arr: &ArrayD<Vec<String>>) -> Result<StructuredTensor> {
	// Outer shape only; inner lists are flattened in order and may differ in length.
	text_tensor(table, dims, arr.iter().flatten().map(String::as_str))
}

fn unsupported_storage(native: NativeDtype, field: StorageField) -> CodecError {
	CodecError::UnsupportedType {
		ty: format!("{} stored in {}", native.as_str(), field.name()),
	}
}

fn ensure_little_endian() -> Result<()> {
	if cfg!(target_endian = "big") {
		return Err(CodecError::BigEndianUnsupported);
	}
	Ok(())
}

use std::sync::OnceLock;

use crate::codec::{CodecError, ElementType, Result};

const SLOTS: usize = ElementType::ALL.len();

/// In-memory scalar representation of a wire element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum NativeDtype {
	/// `bool`, one byte per element in raw payloads.
	Bool,
	/// `u8`.
	U8,
	/// `i8`.
	I8,
	/// `u16`.
	U16,
	/// `i16`.
	I16,
	/// `i32`.
	I32,
	/// `i64`.
	I64,
	/// `u32`.
	U32,
	/// `u64`.
	U64,
	/// `half::f16`.
	F16,
	/// `half::bf16`.
	BF16,
	/// `f32`.
	F32,
	/// `f64`.
	F64,
	/// `Complex<f32>`.
	Complex64,
	/// `Complex<f64>`.
	Complex128,
	/// Unicode text. Has no fixed byte width.
	Text,
}

impl NativeDtype {
	/// Packed byte width of one element, or `None` for text.
	pub fn width(self) -> Option<usize> {
		match self {
			Self::Bool | Self::U8 | Self::I8 => Some(1),
			Self::U16 | Self::I16 | Self::F16 | Self::BF16 => Some(2),
			Self::I32 | Self::U32 | Self::F32 => Some(4),
			Self::I64 | Self::U64 | Self::F64 | Self::Complex64 => Some(8),
			Self::Complex128 => Some(16),
			Self::Text => None,
		}
	}

	/// Stable lowercase label.
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Bool => "bool",
			Self::U8 => "u8",
			Self::I8 => "i8",
			Self::U16 => "u16",
			Self::I16 => "i16",
			Self::I32 => "i32",
			Self::I64 => "i64",
			Self::U32 => "u32",
			Self::U64 => "u64",
			Self::F16 => "f16",
			Self::BF16 => "bf16",
			Self::F32 => "f32",
			Self::F64 => "f64",
			Self::Complex64 => "complex64",
			Self::Complex128 => "complex128",
			Self::Text => "text",
		}
	}
}

/// Typed repeated payload slot on a structured tensor.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum StorageField {
	/// `float_data`.
	FloatData,
	/// `int32_data`.
	Int32Data,
	/// `string_data`.
	StringData,
	/// `int64_data`.
	Int64Data,
	/// `double_data`.
	DoubleData,
	/// `uint64_data`.
	Uint64Data,
}

impl StorageField {
	/// Wire field name.
	pub fn name(self) -> &'static str {
		match self {
			Self::FloatData => "float_data",
			Self::Int32Data => "int32_data",
			Self::StringData => "string_data",
			Self::Int64Data => "int64_data",
			Self::DoubleData => "double_data",
			Self::Uint64Data => "uint64_data",
		}
	}
}

/// Scalar key slot on a map key/value pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum KeyField {
	/// `int64_key`.
	Int64Key,
	/// `uint64_key`.
	Uint64Key,
	/// `string_key`.
	StringKey,
}

impl KeyField {
	/// Wire field name.
	pub fn name(self) -> &'static str {
		match self {
			Self::Int64Key => "int64_key",
			Self::Uint64Key => "uint64_key",
			Self::StringKey => "string_key",
		}
	}
}

/// Registered mapping for one wire element type.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TypeEntry {
	/// Native representation of decoded values.
	pub native: NativeDtype,
	/// Wire type whose typed field holds the values.
	pub storage: ElementType,
}

/// Immutable lookup table between wire element types and native representations.
///
/// Build one with [`TypeTable::standard`] or start from [`TypeTable::empty`] for a
/// substitute table. [`TypeTable::global`] hands out a shared instance that is
/// initialised once and never mutated, so it can be read from any thread.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeTable {
	entries: [Option<TypeEntry>; SLOTS],
	storage_fields: [Option<StorageField>; SLOTS],
	key_fields: [Option<KeyField>; SLOTS],
}

impl TypeTable {
	/// Table with no registered types.
	pub fn empty() -> Self {
		Self {
			entries: [None; SLOTS],
			storage_fields: [None; SLOTS],
			key_fields: [None; SLOTS],
		}
	}

	/// Table covering every defined wire element type.
	pub fn standard() -> Self {
		use ElementType as T;
		use NativeDtype as N;
		use StorageField as F;

		Self::empty()
			.with_type(T::Float, N::F32, T::Float)
			.with_type(T::Uint8, N::U8, T::Int32)
			.with_type(T::Int8, N::I8, T::Int32)
			.with_type(T::Uint16, N::U16, T::Int32)
			.with_type(T::Int16, N::I16, T::Int32)
			.with_type(T::Int32, N::I32, T::Int32)
			.with_type(T::Int64, N::I64, T::Int64)
			.with_type(T::String, N::Text, T::String)
			.with_type(T::Bool, N::Bool, T::Int32)
			.with_type(T::Float16, N::F16, T::Uint16)
			.with_type(T::Double, N::F64, T::Double)
			.with_type(T::Uint32, N::U32, T::Uint32)
			.with_type(T::Uint64, N::U64, T::Uint64)
			.with_type(T::Complex64, N::Complex64, T::Float)
			.with_type(T::Complex128, N::Complex128, T::Double)
			.with_type(T::Bfloat16, N::BF16, T::Uint16)
			.with_storage_field(T::Float, F::FloatData)
			.with_storage_field(T::Int32, F::Int32Data)
			.with_storage_field(T::Int64, F::Int64Data)
			.with_storage_field(T::Uint16, F::Int32Data)
			.with_storage_field(T::Double, F::DoubleData)
			.with_storage_field(T::Uint32, F::Uint64Data)
			.with_storage_field(T::Uint64, F::Uint64Data)
			.with_storage_field(T::String, F::StringData)
			.with_key_field(T::Int8, KeyField::Int64Key)
			.with_key_field(T::Int16, KeyField::Int64Key)
			.with_key_field(T::Int32, KeyField::Int64Key)
			.with_key_field(T::Int64, KeyField::Int64Key)
			.with_key_field(T::Uint8, KeyField::Uint64Key)
			.with_key_field(T::Uint16, KeyField::Uint64Key)
			.with_key_field(T::Uint32, KeyField::Uint64Key)
			.with_key_field(T::Uint64, KeyField::Uint64Key)
			.with_key_field(T::String, KeyField::StringKey)
	}

	/// Shared standard table, built on first use.
	pub fn global() -> &'static Self {
		static TABLE: OnceLock<TypeTable> = OnceLock::new();
		TABLE.get_or_init(Self::standard)
	}

	/// Register `ty` with its native representation and storage type.
	pub fn with_type(mut self, ty: ElementType, native: NativeDtype, storage: ElementType) -> Self {
		self.entries[slot(ty)] = Some(TypeEntry { native, storage });
		self
	}

	/// Register the typed field that holds values of storage type `storage`.
	pub fn with_storage_field(mut self, storage: ElementType, field: StorageField) -> Self {
		self.storage_fields[slot(storage)] = Some(field);
		self
	}

	/// Register the scalar slot that holds map keys of type `key_type`.
	pub fn with_key_field(mut self, key_type: ElementType, field: KeyField) -> Self {
		self.key_fields[slot(key_type)] = Some(field);
		self
	}

	/// Registered entry for `ty`.
	pub fn entry(&self, ty: ElementType) -> Result<TypeEntry> {
		self.entries[slot(ty)].ok_or_else(|| unsupported(ty))
	}

	/// Native representation of `ty`.
	pub fn native_dtype(&self, ty: ElementType) -> Result<NativeDtype> {
		Ok(self.entry(ty)?.native)
	}

	/// Wire type whose typed field stores values of `ty`.
	pub fn storage_type(&self, ty: ElementType) -> Result<ElementType> {
		Ok(self.entry(ty)?.storage)
	}

	/// Typed field holding non-raw values of `ty`, resolved through its storage type.
	pub fn storage_field(&self, ty: ElementType) -> Result<StorageField> {
		let storage = self.storage_type(ty)?;
		self.storage_fields[slot(storage)].ok_or_else(|| unsupported(storage))
	}

	/// Scalar key slot for map keys of `key_type`.
	pub fn key_field(&self, key_type: ElementType) -> Result<KeyField> {
		self.key_fields[slot(key_type)].ok_or_else(|| CodecError::UnsupportedType {
			ty: format!("map key {}", key_type.as_str()),
		})
	}

	/// Wire element type registered for native `dtype`.
	pub fn element_type_for(&self, dtype: NativeDtype) -> Result<ElementType> {
		ElementType::ALL
			.into_iter()
			.find(|ty| self.entries[slot(*ty)].is_some_and(|entry| entry.native == dtype))
			.ok_or_else(|| CodecError::UnsupportedType {
				ty: format!("native dtype {}", dtype.as_str()),
			})
	}

	/// Verify every registered type reaches a native storage representation and a storage field.
	pub fn check_closure(&self) -> Result<()> {
		for ty in ElementType::ALL {
			let Some(entry) = self.entries[slot(ty)] else {
				continue;
			};
			self.native_dtype(entry.storage)?;
			self.storage_field(ty)?;
		}
		Ok(())
	}
}

impl Default for TypeTable {
	fn default() -> Self {
		Self::standard()
	}
}

fn slot(ty: ElementType) -> usize {
	ty as usize
}

fn unsupported(ty: ElementType) -> CodecError {
	CodecError::UnsupportedType {
		ty: ty.as_str().to_owned(),
	}
}

#[cfg(test)]
mod tests;

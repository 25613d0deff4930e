use crate::codec::{CodecError, ElementType, KeyField, NativeDtype, StorageField, TypeTable};

#[test]
fn standard_table_is_closed() {
	TypeTable::standard().check_closure().expect("every type reaches a storage representation");
}

#[test]
fn global_table_matches_standard() {
	assert_eq!(TypeTable::global(), &TypeTable::standard());
	assert!(std::ptr::eq(TypeTable::global(), TypeTable::global()));
}

#[test]
fn half_precision_is_stored_as_uint16_bits_in_int32_field() {
	let table = TypeTable::standard();
	for ty in [ElementType::Float16, ElementType::Bfloat16] {
		assert_eq!(table.storage_type(ty).expect("storage type"), ElementType::Uint16);
		assert_eq!(table.storage_field(ty).expect("storage field"), StorageField::Int32Data);
	}
	assert_eq!(table.native_dtype(ElementType::Float16).expect("native"), NativeDtype::F16);
	assert_eq!(table.native_dtype(ElementType::Bfloat16).expect("native"), NativeDtype::BF16);
}

#[test]
fn complex_types_use_float_fields() {
	let table = TypeTable::standard();
	assert_eq!(table.storage_type(ElementType::Complex64).expect("storage"), ElementType::Float);
	assert_eq!(table.storage_field(ElementType::Complex64).expect("field").name(), "float_data");
	assert_eq!(table.storage_type(ElementType::Complex128).expect("storage"), ElementType::Double);
	assert_eq!(table.storage_field(ElementType::Complex128).expect("field").name(), "double_data");
}

#[test]
fn narrow_integers_and_bool_share_int32_storage() {
	let table = TypeTable::standard();
	for ty in [ElementType::Uint8, ElementType::Int8, ElementType::Uint16, ElementType::Int16, ElementType::Bool] {
		assert_eq!(table.storage_type(ty).expect("storage"), ElementType::Int32, "{ty:?}");
		assert_eq!(table.storage_field(ty).expect("field"), StorageField::Int32Data, "{ty:?}");
	}
	assert_eq!(table.storage_field(ElementType::Uint32).expect("field"), StorageField::Uint64Data);
}

#[test]
fn undefined_has_no_entry() {
	let err = TypeTable::standard()
		.native_dtype(ElementType::Undefined)
		.expect_err("undefined should not map");
	assert!(matches!(err, CodecError::UnsupportedType { ref ty } if ty == "UNDEFINED"));
}

#[test]
fn inverse_lookup_round_trips_every_entry() {
	let table = TypeTable::standard();
	for ty in ElementType::ALL.into_iter().skip(1) {
		let native = table.native_dtype(ty).expect("native dtype");
		assert_eq!(table.element_type_for(native).expect("inverse"), ty);
	}
}

#[test]
fn key_fields_cover_integers_and_strings() {
	let table = TypeTable::standard();
	assert_eq!(table.key_field(ElementType::Int8).expect("key"), KeyField::Int64Key);
	assert_eq!(table.key_field(ElementType::Uint32).expect("key"), KeyField::Uint64Key);
	assert_eq!(table.key_field(ElementType::String).expect("key").name(), "string_key");
	let err = table.key_field(ElementType::Float).expect_err("float keys are not allowed");
	assert!(matches!(err, CodecError::UnsupportedType { .. }));
}

#[test]
fn substitute_table_only_knows_registered_types() {
	let table = TypeTable::empty()
		.with_type(ElementType::Float, NativeDtype::F32, ElementType::Float)
		.with_storage_field(ElementType::Float, StorageField::FloatData);
	table.check_closure().expect("substitute table is closed");
	assert_eq!(table.element_type_for(NativeDtype::F32).expect("inverse"), ElementType::Float);
	assert!(matches!(
		table.native_dtype(ElementType::Int64),
		Err(CodecError::UnsupportedType { .. })
	));
	assert!(matches!(
		table.element_type_for(NativeDtype::I64),
		Err(CodecError::UnsupportedType { .. })
	));
}

#[test]
fn closure_check_reports_missing_storage_field() {
	let table = TypeTable::empty().with_type(ElementType::Float16, NativeDtype::F16, ElementType::Uint16);
	let err = table.check_closure().expect_err("uint16 storage is not registered");
	assert!(matches!(err, CodecError::UnsupportedType { ref ty } if ty == "UINT16"));
}

#[test]
fn element_type_tags_round_trip() {
	for ty in ElementType::ALL {
		assert_eq!(ElementType::from_tag(ty.tag()).expect("known tag"), ty);
	}
	assert!(matches!(ElementType::from_tag(17), Err(CodecError::UnsupportedType { .. })));
	assert!(matches!(ElementType::from_tag(-1), Err(CodecError::UnsupportedType { .. })));
}

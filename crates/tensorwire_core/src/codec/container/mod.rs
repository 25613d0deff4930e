use crate::codec::{
	CodecError, DecodeOptions, ElemKind, KeyField, KeyValuePair, MapKey, MapValue, NativeMap, NativeValue, Result, SequenceValue, TypeTable,
	WireValue, decode_tensor, encode_tensor,
};

/// Decode any wire value, recursing through nested containers.
pub fn decode_value(table: &TypeTable, value: &WireValue, opt: &DecodeOptions) -> Result<NativeValue> {
	decode_value_impl(table, value, opt, 0)
}

/// Decode every child of a sequence, preserving order.
pub fn decode_sequence(table: &TypeTable, seq: &SequenceValue, opt: &DecodeOptions) -> Result<Vec<NativeValue>> {
	decode_sequence_impl(table, seq, opt, 0)
}

/// Decode a map into a key/value association. Later duplicate keys win.
pub fn decode_map(table: &TypeTable, map: &MapValue, opt: &DecodeOptions) -> Result<NativeMap> {
	decode_map_impl(table, map, opt, 0)
}

/// Encode native values as a sequence of tensors.
///
/// Nested sequences and maps cannot be encoded and fail with
/// [`CodecError::UnsupportedElement`].
pub fn encode_sequence(table: &TypeTable, values: &[NativeValue], name: Option<&str>) -> Result<SequenceValue> {
	let values = values
		.iter()
		.map(|value| match value {
			NativeValue::Array(array) => Ok(WireValue::Tensor(encode_tensor(table, array, None)?)),
			other => Err(CodecError::UnsupportedElement { kind: other.kind_label() }),
		})
		.collect::<Result<Vec<_>>>()?;

	Ok(SequenceValue {
		name: name.filter(|name| !name.is_empty()).map(str::to_owned),
		elem_kind: ElemKind::Tensor,
		values,
	})
}

fn decode_value_impl(table: &TypeTable, value: &WireValue, opt: &DecodeOptions, depth: u32) -> Result<NativeValue> {
	match value {
		WireValue::Tensor(tensor) => Ok(NativeValue::Array(decode_tensor(table, tensor, opt)?)),
		WireValue::Sequence(seq) => Ok(NativeValue::Sequence(decode_sequence_impl(table, seq, opt, depth)?)),
		WireValue::Map(map) => Ok(NativeValue::Map(decode_map_impl(table, map, opt, depth)?)),
	}
}

fn decode_sequence_impl(table: &TypeTable, seq: &SequenceValue, opt: &DecodeOptions, depth: u32) -> Result<Vec<NativeValue>> {
	opt.check_depth(depth)?;
	if seq.elem_kind == ElemKind::Undefined {
		return Err(undefined_kind("sequence element kind"));
	}

	tracing::trace!(elem_kind = ?seq.elem_kind, len = seq.values.len(), depth, "decoding sequence");

	seq.values
		.iter()
		.map(|child| decode_child(table, seq.elem_kind, child, opt, depth + 1))
		.collect()
}

fn decode_map_impl(table: &TypeTable, map: &MapValue, opt: &DecodeOptions, depth: u32) -> Result<NativeMap> {
	opt.check_depth(depth)?;

	tracing::trace!(pairs = map.pairs.len(), depth, "decoding map");

	let mut out = NativeMap::new();
	for (index, pair) in map.pairs.iter().enumerate() {
		let key = decode_key(table, pair, index)?;
		let value = decode_child(table, pair.value_type, &pair.value, opt, depth + 1)?;
		if out.contains_key(&key) {
			tracing::debug!(%key, index, "duplicate map key overwrites earlier entry");
		}
		out.insert(key, value);
	}
	Ok(out)
}

fn decode_child(table: &TypeTable, kind: ElemKind, child: &WireValue, opt: &DecodeOptions, depth: u32) -> Result<NativeValue> {
	match (kind, child) {
		(ElemKind::Undefined, _) => Err(undefined_kind("container value kind")),
		(ElemKind::Tensor | ElemKind::SparseTensor, WireValue::Tensor(tensor)) => Ok(NativeValue::Array(decode_tensor(table, tensor, opt)?)),
		(ElemKind::Sequence, WireValue::Sequence(seq)) => Ok(NativeValue::Sequence(decode_sequence_impl(table, seq, opt, depth)?)),
		(ElemKind::Map, WireValue::Map(map)) => Ok(NativeValue::Map(decode_map_impl(table, map, opt, depth)?)),
		(expected, other) => Err(CodecError::KindMismatch {
			expected,
			got: other.kind_label(),
		}),
	}
}

fn decode_key(table: &TypeTable, pair: &KeyValuePair, index: usize) -> Result<MapKey> {
	Ok(match table.key_field(pair.key_type)? {
		KeyField::Int64Key => MapKey::Int(pair.int64_key),
		KeyField::Uint64Key => MapKey::UInt(pair.uint64_key),
		KeyField::StringKey => {
			let text = std::str::from_utf8(&pair.string_key).map_err(|source| CodecError::EncodingError {
				context: "map key of pair",
				index,
				source,
			})?;
			MapKey::Text(text.to_owned())
		}
	})
}

fn undefined_kind(context: &'static str) -> CodecError {
	CodecError::UndefinedType {
		context,
		tag: ElemKind::Undefined.tag(),
	}
}

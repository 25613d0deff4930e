mod bytes;
mod container;
mod elem;
mod error;
mod mapping;
mod native;
mod options;
mod tensor;
mod wire;

/// JSON rendering of decoded native values.
pub mod json;

/// Recursive sequence and map conversion entry points.
pub use container::{decode_map, decode_sequence, decode_value, encode_sequence};
/// Wire element-type and container value-kind tags.
pub use elem::{ElemKind, ElementType};
/// Error and result aliases.
pub use error::{CodecError, Result};
/// Element-type mapping table and its lookup results.
pub use mapping::{KeyField, NativeDtype, StorageField, TypeEntry, TypeTable};
/// Decoded native value types.
pub use native::{ArrayKind, MapKey, NativeArray, NativeMap, NativeValue};
/// Decode limits.
pub use options::DecodeOptions;
/// Single-tensor conversion entry points.
pub use tensor::{combine_pairs_to_complex, decode_tensor, encode_tensor};
/// Structured wire value types.
pub use wire::{KeyValuePair, MapValue, Segment, SequenceValue, StructuredTensor, WireValue};

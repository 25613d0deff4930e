//! Public library API for converting structured tensor wire values to and from dense native arrays.

/// Tensor, sequence, and map codecs plus the element-type mapping table.
pub mod codec;

use serde::{Deserialize, Serialize};

use crate::codec::{CodecError, Result};

/// Runtime limits for decoding.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DecodeOptions {
	/// Maximum container nesting depth.
	pub max_depth: u32,
	/// Maximum element count of any one decoded tensor.
	pub max_elements: Option<usize>,
}

impl Default for DecodeOptions {
	fn default() -> Self {
		Self {
			max_depth: 64,
			max_elements: None,
		}
	}
}

impl DecodeOptions {
	/// Preset for inputs from untrusted sources.
	pub fn for_untrusted() -> Self {
		Self {
			max_depth: 16,
			max_elements: Some(1 << 26),
		}
	}

	/// Parse options from a JSON document. Missing keys keep their defaults.
	pub fn from_json_str(text: &str) -> Result<Self> {
		Ok(serde_json::from_str(text)?)
	}

	pub(crate) fn check_elements(&self, count: usize) -> Result<()> {
		match self.max_elements {
			Some(max) if count > max => {
				tracing::debug!(count, max, "tensor element ceiling hit");
				Err(CodecError::TooManyElements { count, max })
			}
			_ => Ok(()),
		}
	}

	pub(crate) fn check_depth(&self, depth: u32) -> Result<()> {
		if depth >= self.max_depth {
			tracing::debug!(depth, max_depth = self.max_depth, "container nesting ceiling hit");
			return Err(CodecError::NestingTooDeep { max_depth: self.max_depth });
		}
		Ok(())
	}
}

//! Shared test helpers for workspace crates.

use std::fs;
use std::path::{Path, PathBuf};

use serde::de::DeserializeOwned;

/// Resolve the workspace root path.
pub fn workspace_root() -> PathBuf {
	let manifest_dir = Path::new(env!("CARGO_MANIFEST_DIR"));
	manifest_dir
		.join("..")
		.join("..")
		.canonicalize()
		.unwrap_or_else(|_| manifest_dir.join("..").join(".."))
}

/// Resolve a fixture path under `<workspace>/fixtures`.
pub fn fixture_path(name: &str) -> PathBuf {
	workspace_root().join("fixtures").join(name)
}

/// Read and deserialize a JSON fixture, panicking with the fixture name on failure.
pub fn load_json_fixture<T: DeserializeOwned>(name: &str) -> T {
	let path = fixture_path(name);
	let text = fs::read_to_string(&path).unwrap_or_else(|err| panic!("fixture {} unreadable: {err}", path.display()));
	serde_json::from_str(&text).unwrap_or_else(|err| panic!("fixture {} is not valid: {err}", path.display()))
}

/// Pack `f32` values little-endian.
pub fn f32_le(values: &[f32]) -> Vec<u8> {
	values.iter().flat_map(|value| value.to_le_bytes()).collect()
}

/// Pack `f64` values little-endian.
pub fn f64_le(values: &[f64]) -> Vec<u8> {
	values.iter().flat_map(|value| value.to_le_bytes()).collect()
}

/// Pack `i32` values little-endian.
pub fn i32_le(values: &[i32]) -> Vec<u8> {
	values.iter().flat_map(|value| value.to_le_bytes()).collect()
}

/// Pack `i64` values little-endian.
pub fn i64_le(values: &[i64]) -> Vec<u8> {
	values.iter().flat_map(|value| value.to_le_bytes()).collect()
}

/// UTF-8 bytes of each string, as stored in a string payload.
pub fn utf8_entries(values: &[&str]) -> Vec<Vec<u8>> {
	values.iter().map(|value| value.as_bytes().to_vec()).collect()
}

#[cfg(test)]
mod tests {
	use super::{f32_le, i64_le, utf8_entries};

	#[test]
	fn packs_little_endian() {
		assert_eq!(f32_le(&[1.0]), vec![0x00, 0x00, 0x80, 0x3f]);
		assert_eq!(i64_le(&[1, -1]).len(), 16);
		assert_eq!(utf8_entries(&["é"]), vec![vec![0xc3, 0xa9]]);
	}
}

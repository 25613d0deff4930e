use half::{bf16, f16};
use num_complex::Complex;

/// Fixed-width scalar that can be packed into and read from little-endian raw payloads.
pub(crate) trait Element: Sized {
	/// Packed byte width.
	const WIDTH: usize;

	/// Decode one element from exactly `WIDTH` bytes.
	fn read_le(bytes: &[u8]) -> Self;

	/// Append the packed encoding of `self`.
	fn write_le(&self, out: &mut Vec<u8>);
}

macro_rules! impl_element {
	($($ty:ty),* $(,)?) => {
		$(
			impl Element for $ty {
				const WIDTH: usize = std::mem::size_of::<$ty>();

				fn read_le(bytes: &[u8]) -> Self {
					let mut buf = [0_u8; std::mem::size_of::<$ty>()];
					buf.copy_from_slice(bytes);
					<$ty>::from_le_bytes(buf)
				}

				fn write_le(&self, out: &mut Vec<u8>) {
					out.extend_from_slice(&self.to_le_bytes());
				}
			}
		)*
	};
}

impl_element!(u8, i8, u16, i16, i32, i64, u32, u64, f32, f64);

impl Element for bool {
	const WIDTH: usize = 1;

	fn read_le(bytes: &[u8]) -> Self {
		bytes[0] != 0
	}

	fn write_le(&self, out: &mut Vec<u8>) {
		out.push(u8::from(*self));
	}
}

impl Element for f16 {
	const WIDTH: usize = 2;

	fn read_le(bytes: &[u8]) -> Self {
		f16::from_bits(u16::read_le(bytes))
	}

	fn write_le(&self, out: &mut Vec<u8>) {
		self.to_bits().write_le(out);
	}
}

impl Element for bf16 {
	const WIDTH: usize = 2;

	fn read_le(bytes: &[u8]) -> Self {
		bf16::from_bits(u16::read_le(bytes))
	}

	fn write_le(&self, out: &mut Vec<u8>) {
		self.to_bits().write_le(out);
	}
}

impl<T: Element> Element for Complex<T> {
	const WIDTH: usize = 2 * T::WIDTH;

	// Real part first, then imaginary.
	fn read_le(bytes: &[u8]) -> Self {
		let (re, im) = bytes.split_at(T::WIDTH);
		Complex::new(T::read_le(re), T::read_le(im))
	}

	fn write_le(&self, out: &mut Vec<u8>) {
		self.re.write_le(out);
		self.im.write_le(out);
	}
}

/// Unpack a raw payload whose length is already known to be a multiple of `T::WIDTH`.
pub(crate) fn read_all<T: Element>(bytes: &[u8]) -> Vec<T> {
	bytes.chunks_exact(T::WIDTH).map(T::read_le).collect()
}

/// Pack elements in iteration order with no padding.
pub(crate) fn write_all<'a, T: Element + 'a>(values: impl ExactSizeIterator<Item = &'a T>) -> Vec<u8> {
	let mut out = Vec::with_capacity(values.len() * T::WIDTH);
	for value in values {
		value.write_le(&mut out);
	}
	out
}

#[cfg(test)]
mod tests {
	use half::{bf16, f16};
	use num_complex::Complex;

	use super::{Element, read_all, write_all};

	#[test]
	fn reads_little_endian_integers() {
		assert_eq!(read_all::<i64>(&[1, 0, 0, 0, 0, 0, 0, 0, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff, 0xff]), vec![1, -1]);
		assert_eq!(read_all::<u16>(&[0x34, 0x12]), vec![0x1234]);
	}

	#[test]
	fn bool_is_one_byte_and_nonzero_is_true() {
		assert_eq!(read_all::<bool>(&[0, 1, 2]), vec![false, true, true]);
		assert_eq!(write_all([true, false].iter()), vec![1, 0]);
	}

	#[test]
	fn half_floats_pack_their_bits() {
		let values = [f16::from_f32(1.5), f16::from_f32(-2.0)];
		let bytes = write_all(values.iter());
		assert_eq!(bytes, vec![0x00, 0x3e, 0x00, 0xc0]);
		assert_eq!(read_all::<f16>(&bytes), values.to_vec());
		assert_eq!(<bf16 as Element>::WIDTH, 2);
	}

	#[test]
	fn complex_packs_real_then_imaginary() {
		let value = Complex::new(1.0_f32, -1.0_f32);
		let bytes = write_all([value].iter());
		assert_eq!(bytes.len(), 8);
		assert_eq!(&bytes[..4], &1.0_f32.to_le_bytes());
		assert_eq!(&bytes[4..], &(-1.0_f32).to_le_bytes());
		assert_eq!(read_all::<Complex<f32>>(&bytes), vec![value]);
		assert_eq!(<Complex<f64> as Element>::WIDTH, 16);
	}
}

// Copyright 2016 The Grin Developers
// Licensed under the Apache License, Version 2.0 (the "License");
// you may not use this file except in compliance with the License.
// You may obtain a copy of the License at
//
//     http://www.apache.org/licenses/LICENSE-2.0
//
// Unless required by applicable law or agreed to in writing, software
// distributed under the License is distributed on an "AS IS" BASIS,
// WITHOUT WARRANTIES OR CONDITIONS OF ANY KIND, either express or implied.
// See the License for the specific language governing permissions and
// limitations under the License.

//! Serialization and deserialization layer specialized for binary
//! encoding. Ensures the bytes used to compute a header's id and the
//! bytes written to the wire are always the same bytes.
//!
//! Operates purely over in-memory byte slices rather than
//! `std::io::Read`/`Write`: this crate performs no I/O, so there is
//! nothing for a `Read`/`Write` abstraction to buy us, and it lets every
//! error be a typed [`crate::error::Error::MalformedProof`] instead of
//! wrapping `io::Error`.

use byteorder::{BigEndian, ByteOrder};

use crate::error::{Error, Result};

/// Implementations describe how a value writes itself to a growable byte
/// buffer.
pub trait Writeable {
	/// Appends this value's canonical byte image to `writer`.
	fn write(&self, writer: &mut Writer);
}

/// Implementations describe how a value reads itself back from a byte
/// cursor produced by the matching [`Writeable`].
pub trait Readable: Sized {
	/// Reads a value from `reader`, advancing its cursor.
	fn read(reader: &mut Reader<'_>) -> Result<Self>;
}

/// Accumulates bytes written by [`Writeable`] implementations.
#[derive(Default)]
pub struct Writer {
	buf: Vec<u8>,
}

impl Writer {
	/// Starts a fresh, empty writer.
	pub fn new() -> Writer {
		Writer { buf: Vec::new() }
	}

	/// Writes a single byte.
	pub fn write_u8(&mut self, n: u8) {
		self.buf.push(n);
	}

	/// Writes a `u32`, big-endian.
	pub fn write_u32(&mut self, n: u32) {
		let mut tmp = [0u8; 4];
		BigEndian::write_u32(&mut tmp, n);
		self.buf.extend_from_slice(&tmp);
	}

	/// Writes an `i32`, big-endian, as mandated by the wire format.
	pub fn write_i32(&mut self, n: i32) {
		let mut tmp = [0u8; 4];
		BigEndian::write_i32(&mut tmp, n);
		self.buf.extend_from_slice(&tmp);
	}

	/// Writes a `u64`, big-endian.
	pub fn write_u64(&mut self, n: u64) {
		let mut tmp = [0u8; 8];
		BigEndian::write_u64(&mut tmp, n);
		self.buf.extend_from_slice(&tmp);
	}

	/// Writes raw bytes with no length prefix; the reader is expected to
	/// know the length up front.
	pub fn write_fixed_bytes(&mut self, bytes: &[u8]) {
		self.buf.extend_from_slice(bytes);
	}

	/// Writes a byte vector prefixed by its `u32` big-endian length.
	pub fn write_var_bytes(&mut self, bytes: &[u8]) {
		self.write_u32(bytes.len() as u32);
		self.write_fixed_bytes(bytes);
	}

	/// Consumes the writer, returning the accumulated bytes.
	pub fn into_vec(self) -> Vec<u8> {
		self.buf
	}
}

/// A cursor over a byte slice, consumed by [`Readable`] implementations.
pub struct Reader<'a> {
	buf: &'a [u8],
	pos: usize,
}

impl<'a> Reader<'a> {
	/// Wraps `buf` in a fresh reader positioned at the start.
	pub fn new(buf: &'a [u8]) -> Reader<'a> {
		Reader { buf, pos: 0 }
	}

	/// Number of unread bytes remaining.
	pub fn remaining(&self) -> usize {
		self.buf.len() - self.pos
	}

	fn take(&mut self, n: usize) -> Result<&'a [u8]> {
		if self.remaining() < n {
			return Err(Error::MalformedProof(format!(
				"expected {} more bytes, found {}",
				n,
				self.remaining()
			)));
		}
		let slice = &self.buf[self.pos..self.pos + n];
		self.pos += n;
		Ok(slice)
	}

	/// Reads a single byte.
	pub fn read_u8(&mut self) -> Result<u8> {
		Ok(self.take(1)?[0])
	}

	/// Reads a big-endian `u32`.
	pub fn read_u32(&mut self) -> Result<u32> {
		Ok(BigEndian::read_u32(self.take(4)?))
	}

	/// Reads a big-endian `i32`, as mandated by the wire format.
	pub fn read_i32(&mut self) -> Result<i32> {
		Ok(BigEndian::read_i32(self.take(4)?))
	}

	/// Reads a big-endian `u64`.
	pub fn read_u64(&mut self) -> Result<u64> {
		Ok(BigEndian::read_u64(self.take(8)?))
	}

	/// Reads exactly `len` raw bytes.
	pub fn read_fixed_bytes(&mut self, len: usize) -> Result<Vec<u8>> {
		Ok(self.take(len)?.to_vec())
	}

	/// Reads a `u32`-length-prefixed byte vector.
	pub fn read_var_bytes(&mut self) -> Result<Vec<u8>> {
		let len = self.read_u32()? as usize;
		self.read_fixed_bytes(len)
	}

	/// True once every byte of the underlying slice has been consumed.
	/// Used by the codec to reject trailing garbage.
	pub fn is_exhausted(&self) -> bool {
		self.remaining() == 0
	}
}

/// Serializes a [`Writeable`] into a fresh, owned byte vector.
pub fn ser_vec<W: Writeable>(thing: &W) -> Result<Vec<u8>> {
	let mut writer = Writer::new();
	thing.write(&mut writer);
	Ok(writer.into_vec())
}

/// Deserializes a [`Readable`] from a byte slice. Does not require the
/// slice to be fully consumed; callers that need exact-length framing
/// (the proof codec does) check `reader.is_exhausted()` themselves.
pub fn deserialize<R: Readable>(bytes: &[u8]) -> Result<R> {
	let mut reader = Reader::new(bytes);
	R::read(&mut reader)
}

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

//! The canonical, length-prefixed binary encoding of a proof:
//!
//! ```text
//! int32 k
//! int32 m
//! int32 prefix_count
//! repeat prefix_count: int32 header_len, bytes[header_len]
//! int32 suffix_count
//! repeat suffix_count: int32 header_len, bytes[header_len]
//! ```
//!
//! Every integer is big-endian and 32-bit **signed**, including the
//! counts and lengths: this asymmetry with the logical `(m, k)`
//! constructor order (the wire puts `k` first) is consensus-observable
//! and preserved bit-for-bit.

use crate::error::{Error, Result};
use crate::header::parse_header;
use crate::proof::Proof;
use crate::ser::{Reader, Writer};

/// Encodes a proof into its canonical byte representation.
pub fn encode(proof: &Proof) -> Vec<u8> {
	let mut writer = Writer::new();
	writer.write_i32(proof.k() as i32);
	writer.write_i32(proof.m() as i32);
	write_headers(&mut writer, proof.prefix());
	write_headers(&mut writer, proof.suffix());
	writer.into_vec()
}

fn write_headers(writer: &mut Writer, headers: &[crate::header::Header]) {
	writer.write_i32(headers.len() as i32);
	for h in headers {
		let bytes = h.canonical_bytes();
		writer.write_i32(bytes.len() as i32);
		writer.write_fixed_bytes(&bytes);
	}
}

/// Decodes a proof from its canonical byte representation. Fails with
/// [`Error::MalformedProof`] on a short buffer, a negative or absurd
/// count/length, invalid header bytes, or trailing bytes the declared
/// counts and lengths didn't account for (the buffer must be consumed
/// exactly).
pub fn decode(bytes: &[u8]) -> Result<Proof> {
	let mut reader = Reader::new(bytes);

	let k = read_non_negative(&mut reader)?;
	let m = read_non_negative(&mut reader)?;
	let prefix = read_headers(&mut reader)?;
	let suffix = read_headers(&mut reader)?;

	if !reader.is_exhausted() {
		return Err(Error::MalformedProof(format!(
			"{} trailing byte(s) after a fully-framed proof",
			reader.remaining()
		)));
	}

	Ok(Proof::new(m, k, prefix, suffix).with_size(bytes.len() as u64))
}

fn read_headers(reader: &mut Reader<'_>) -> Result<Vec<crate::header::Header>> {
	let count = read_non_negative(reader)? as usize;
	if count > MAX_HEADER_COUNT {
		return Err(Error::MalformedProof(format!(
			"header count {} exceeds sanity bound",
			count
		)));
	}
	let mut headers = Vec::with_capacity(count);
	for _ in 0..count {
		let len = read_non_negative(reader)? as usize;
		let bytes = reader.read_fixed_bytes(len)?;
		headers.push(parse_header(&bytes)?);
	}
	Ok(headers)
}

/// Generous sanity bound on header counts, well above anything a real
/// proof would ever carry, to reject obviously-corrupt length fields
/// before allocating.
const MAX_HEADER_COUNT: usize = 1 << 20;

fn read_non_negative(reader: &mut Reader<'_>) -> Result<u32> {
	let v = reader.read_i32()?;
	if v < 0 {
		return Err(Error::MalformedProof(format!("negative count/length field: {}", v)));
	}
	Ok(v as u32)
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::header::Header;
	use num_bigint::BigUint;

	fn genesis() -> Header {
		Header::genesis(0x1d00ffff, BigUint::from(1u32))
	}

	fn child(height: u64, parent: &Header, distance: u32) -> Header {
		Header::new(
			parent.id(),
			height,
			0x1d00ffff,
			BigUint::from(distance),
			vec![parent.id()],
			false,
		)
	}

	#[test]
	fn round_trips() {
		let g = genesis();
		let h1 = child(1, &g, 1_000_000);
		let h2 = child(2, &h1, 1_000_000);
		let proof = Proof::new(6, 6, vec![g, h1], vec![h2]);

		let bytes = encode(&proof);
		let decoded = decode(&bytes).unwrap();

		assert_eq!(decoded.m(), proof.m());
		assert_eq!(decoded.k(), proof.k());
		assert_eq!(decoded.prefix(), proof.prefix());
		assert_eq!(decoded.suffix(), proof.suffix());
		assert_eq!(decoded.size_opt(), Some(bytes.len() as u64));
	}

	#[test]
	fn field_order_is_k_then_m() {
		let proof = Proof::new(9, 4, vec![genesis()], vec![]);
		let bytes = encode(&proof);
		// First int32 is k (4), second is m (9).
		assert_eq!(&bytes[0..4], &4i32.to_be_bytes());
		assert_eq!(&bytes[4..8], &9i32.to_be_bytes());
	}

	#[test]
	fn rejects_trailing_garbage() {
		let proof = Proof::new(1, 0, vec![genesis()], vec![]);
		let mut bytes = encode(&proof);
		bytes.push(0xAB);
		assert!(matches!(decode(&bytes), Err(Error::MalformedProof(_))));
	}

	#[test]
	fn rejects_short_buffer() {
		assert!(matches!(decode(&[0u8; 3]), Err(Error::MalformedProof(_))));
	}
}

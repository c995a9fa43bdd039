// Copyright 2018 The Grin Developers
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

//! Read-only projection of a block header: everything the proof
//! subsystem needs to know about a header and nothing else. A header
//! knows its height, its parent, its PoW target and solution, and the
//! interlink vector it carries, but not its transactions, its timestamp,
//! or anything else that belongs to the full block.

use num_bigint::BigUint;

use crate::error::{Error, Result};
use crate::hash::{Hash, Hashed, ZERO_HASH};
use crate::ser::{Readable, Reader, Writeable, Writer};

/// A read-only header view. Headers are immutable once built: every field
/// is private and reached through an accessor, and `id` is always the
/// hash of the header's own canonical bytes, never a value trusted
/// as-is from the wire.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Header {
	id: Hash,
	parent_id: Hash,
	height: u64,
	n_bits: u32,
	pow_distance: BigUint,
	interlinks: Vec<Hash>,
	is_genesis: bool,
}

impl Header {
	/// Builds a header, computing its id from the canonical serialization
	/// of the other fields. This is the only way to construct a `Header`
	/// outside of [`crate::ser::deserialize`], which routes through the
	/// same path.
	pub fn new(
		parent_id: Hash,
		height: u64,
		n_bits: u32,
		pow_distance: BigUint,
		interlinks: Vec<Hash>,
		is_genesis: bool,
	) -> Header {
		let body = HeaderBody {
			parent_id,
			height,
			n_bits,
			pow_distance,
			interlinks,
			is_genesis,
		};
		let id = body.hash();
		Header {
			id,
			parent_id: body.parent_id,
			height: body.height,
			n_bits: body.n_bits,
			pow_distance: body.pow_distance,
			interlinks: body.interlinks,
			is_genesis: body.is_genesis,
		}
	}

	/// Builds the canonical genesis header: height 0, zero parent, and an
	/// interlink vector containing only itself once constructed (callers
	/// build children via [`crate::interlink::update_interlinks`]).
	pub fn genesis(n_bits: u32, pow_distance: BigUint) -> Header {
		Header::new(ZERO_HASH, 0, n_bits, pow_distance, Vec::new(), true)
	}

	/// The header's stable identifier: the hash of its canonical bytes.
	pub fn id(&self) -> Hash {
		self.id
	}

	/// The parent header's identifier.
	pub fn parent_id(&self) -> Hash {
		self.parent_id
	}

	/// The header's height above genesis.
	pub fn height(&self) -> u64 {
		self.height
	}

	/// The compact-encoded PoW target (`nBits`).
	pub fn n_bits(&self) -> u32 {
		self.n_bits
	}

	/// The PoW solution's distance `d`.
	pub fn pow_distance(&self) -> &BigUint {
		&self.pow_distance
	}

	/// The interlink vector this header carries.
	pub fn interlinks(&self) -> &[Hash] {
		&self.interlinks
	}

	/// True for the chain's genesis header.
	pub fn is_genesis(&self) -> bool {
		self.is_genesis
	}

	/// The byte image used for id hashing and for per-header wire framing
	/// Stable and the same image both hashed and
	/// sent over the wire, by construction: there is only one `Writeable`
	/// impl.
	pub fn canonical_bytes(&self) -> Vec<u8> {
		crate::ser::ser_vec(self).expect("in-memory serialization cannot fail")
	}
}

/// The fields that go into a header's canonical serialization, excluding
/// the id itself (which is derived from them). Kept as a private
/// companion type so `Header::new` can hash before the public `Header` is
/// fully assembled.
struct HeaderBody {
	parent_id: Hash,
	height: u64,
	n_bits: u32,
	pow_distance: BigUint,
	interlinks: Vec<Hash>,
	is_genesis: bool,
}

impl Writeable for HeaderBody {
	fn write(&self, writer: &mut Writer) {
		writer.write_u64(self.height);
		writer.write_fixed_bytes(self.parent_id.as_bytes());
		writer.write_u32(self.n_bits);
		let d_bytes = self.pow_distance.to_bytes_be();
		writer.write_var_bytes(&d_bytes);
		writer.write_u32(self.interlinks.len() as u32);
		for link in &self.interlinks {
			writer.write_fixed_bytes(link.as_bytes());
		}
		writer.write_u8(if self.is_genesis { 1 } else { 0 });
	}
}

impl Writeable for Header {
	fn write(&self, writer: &mut Writer) {
		let body = HeaderBody {
			parent_id: self.parent_id,
			height: self.height,
			n_bits: self.n_bits,
			pow_distance: self.pow_distance.clone(),
			interlinks: self.interlinks.clone(),
			is_genesis: self.is_genesis,
		};
		body.write(writer);
	}
}

impl Readable for Header {
	fn read(reader: &mut Reader<'_>) -> Result<Header> {
		let height = reader.read_u64()?;
		let parent_id = Hash::from_slice(&reader.read_fixed_bytes(32)?);
		let n_bits = reader.read_u32()?;
		let d_bytes = reader.read_var_bytes()?;
		let pow_distance = BigUint::from_bytes_be(&d_bytes);
		let link_count = reader.read_u32()? as usize;
		if link_count > MAX_INTERLINK_LEN {
			return Err(Error::MalformedProof(format!(
				"interlink vector too long: {}",
				link_count
			)));
		}
		let mut interlinks = Vec::with_capacity(link_count);
		for _ in 0..link_count {
			interlinks.push(Hash::from_slice(&reader.read_fixed_bytes(32)?));
		}
		let is_genesis = reader.read_u8()? != 0;
		Ok(Header::new(
			parent_id,
			height,
			n_bits,
			pow_distance,
			interlinks,
			is_genesis,
		))
	}
}

/// Generous upper bound on interlink vector length used to reject
/// obviously-corrupt input before allocating; real interlinks are bounded
/// by `log2(height)` and never get anywhere close to this.
const MAX_INTERLINK_LEN: usize = 1 << 16;

/// Parses a header from its canonical byte encoding. Equivalent to
/// `nipopow_core::ser::deserialize::<Header>`, exposed under its own name
/// since header decoding is a distinct concern from the generic codec.
pub fn parse_header(bytes: &[u8]) -> Result<Header> {
	crate::ser::deserialize(bytes)
}

#[cfg(test)]
mod tests {
	use super::*;

	fn sample_header(height: u64, parent: Hash, nonce: u32) -> Header {
		Header::new(
			parent,
			height,
			0x1d00ffff,
			BigUint::from(nonce) + BigUint::from(1u32),
			vec![ZERO_HASH],
			false,
		)
	}

	#[test]
	fn id_is_hash_of_canonical_bytes() {
		let h = sample_header(1, ZERO_HASH, 42);
		// `Header` implements `Writeable` over the same body bytes that
		// produced `id` in `Header::new`, so hashing the header itself
		// through the blanket `Hashed` impl must agree with `id()`.
		assert_eq!(h.id(), Hashed::hash(&h));
	}

	#[test]
	fn distinct_headers_have_distinct_ids() {
		let a = sample_header(1, ZERO_HASH, 1);
		let b = sample_header(1, ZERO_HASH, 2);
		assert_ne!(a.id(), b.id());
	}

	#[test]
	fn round_trips_through_codec() {
		let h = sample_header(7, Hash([3u8; 32]), 99);
		let bytes = h.canonical_bytes();
		let back = parse_header(&bytes).unwrap();
		assert_eq!(h, back);
		assert_eq!(h.id(), back.id());
	}

	#[test]
	fn genesis_has_empty_interlinks() {
		let g = Header::genesis(0x1d00ffff, BigUint::from(1u32));
		assert!(g.is_genesis());
		assert!(g.interlinks().is_empty());
	}
}

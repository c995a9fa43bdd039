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

//! The fixed-width identifier used pervasively for headers: a 32-byte
//! digest, along with the `Hashed` trait that ties a type's canonical byte
//! image to its identifier.

use std::fmt;

use blake2_rfc::blake2b::blake2b;
use serde::{Deserialize, Serialize};

/// A 32-byte identifier, used as both header id and parent/interlink
/// pointer.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct Hash(pub [u8; 32]);

/// The all-zero hash, used as the parent pointer of the genesis header.
pub const ZERO_HASH: Hash = Hash([0; 32]);

impl Hash {
	/// Builds a hash from a 32-byte slice. Panics if the slice isn't
	/// exactly 32 bytes; callers that accept untrusted lengths should
	/// check first (the codec does, via `ChainNotAnchored`/`MalformedProof`
	/// paths rather than this constructor).
	pub fn from_slice(s: &[u8]) -> Hash {
		let mut a = [0u8; 32];
		a.copy_from_slice(s);
		Hash(a)
	}

	/// Borrows the hash as a byte slice.
	pub fn as_bytes(&self) -> &[u8] {
		&self.0
	}

	/// Copies the hash out as an owned byte vector.
	pub fn to_vec(&self) -> Vec<u8> {
		self.0.to_vec()
	}
}

impl fmt::Display for Hash {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "{}", nipopow_util::to_hex(&self.0))
	}
}

impl fmt::Debug for Hash {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "Hash({})", self)
	}
}

/// A type whose identifier is the hash of its canonical byte
/// serialization. Implemented for anything that already implements
/// [`crate::ser::Writeable`] via the blanket impl below, so hashing and
/// wire framing can never drift apart.
pub trait Hashed {
	/// Returns the hash of this value's canonical byte serialization.
	fn hash(&self) -> Hash;
}

impl<T: crate::ser::Writeable> Hashed for T {
	fn hash(&self) -> Hash {
		let bytes = crate::ser::ser_vec(self).expect("in-memory serialization cannot fail");
		Hash(blake2b_256(&bytes))
	}
}

fn blake2b_256(data: &[u8]) -> [u8; 32] {
	let digest = blake2b(32, &[], data);
	let mut out = [0u8; 32];
	out.copy_from_slice(digest.as_bytes());
	out
}

#[cfg(test)]
mod tests {
	use super::*;

	#[test]
	fn display_round_trips_through_hex() {
		let h = Hash([7u8; 32]);
		let s = h.to_string();
		assert_eq!(s.len(), 64);
		assert_eq!(crate::hash::Hash::from_slice(&nipopow_util::from_hex(&s).unwrap()), h);
	}
}

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

//! The proof object itself: `m`, `k`, a prefix anchored at genesis,
//! and a fixed-length suffix. A `Proof` is an immutable, exclusive owner
//! of its headers: decoding always deep-copies, never shares state with
//! whatever produced the bytes.

use crate::header::Header;

/// A NiPoPoW proof: `m` (superchain density), `k` (suffix length), a
/// non-empty `prefix` anchored at genesis, and a `suffix` of exactly `k`
/// headers following the prefix's head. `size_opt` is populated by the
/// codec on decode and is purely informational.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Proof {
	m: u32,
	k: u32,
	prefix: Vec<Header>,
	suffix: Vec<Header>,
	size_opt: Option<u64>,
}

impl Proof {
	/// Builds a freshly-constructed proof with no cached size. Does not
	/// validate anything; pair with [`crate::validate::validate`] before
	/// trusting the result.
	pub fn new(m: u32, k: u32, prefix: Vec<Header>, suffix: Vec<Header>) -> Proof {
		Proof {
			m,
			k,
			prefix,
			suffix,
			size_opt: None,
		}
	}

	/// Superchain density parameter.
	pub fn m(&self) -> u32 {
		self.m
	}

	/// Suffix length (stability) parameter.
	pub fn k(&self) -> u32 {
		self.k
	}

	/// The proof's prefix, anchored at genesis.
	pub fn prefix(&self) -> &[Header] {
		&self.prefix
	}

	/// The proof's suffix: the `k` headers following the prefix's head.
	pub fn suffix(&self) -> &[Header] {
		&self.suffix
	}

	/// The cached byte length set by the codec on decode, if any.
	pub fn size_opt(&self) -> Option<u64> {
		self.size_opt
	}

	/// The genesis header anchoring this proof's prefix. Panics if the
	/// prefix is empty; a proof with an empty prefix fails structural
	/// validation and should never reach this call in practice.
	pub fn genesis(&self) -> &Header {
		self.prefix.first().expect("prefix is always non-empty for a constructed proof")
	}

	/// Every prefix header except the genesis.
	pub fn prefix_tail(&self) -> &[Header] {
		&self.prefix[1.min(self.prefix.len())..]
	}

	/// Sets the cached size. Used by the codec right after a successful
	/// decode.
	pub(crate) fn with_size(mut self, size: u64) -> Proof {
		self.size_opt = Some(size);
		self
	}
}

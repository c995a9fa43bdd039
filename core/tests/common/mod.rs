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

//! Shared header-building helpers for the proof test scenarios.

use num_bigint::BigUint;

use nipopow_core::hash::Hash;
use nipopow_core::header::Header;

/// A fixed compact target used throughout these tests; its actual value
/// doesn't matter, only that every header in a test chain shares it.
pub const N_BITS: u32 = 0x1d00ffff;

/// Builds the chain's genesis header.
pub fn genesis() -> Header {
	Header::genesis(N_BITS, BigUint::from(1u32))
}

/// Builds a child of `parent` at the given `distance` (smaller distance ==
/// higher superchain level), carrying `parent`'s freshly-updated
/// interlinks.
pub fn child(parent: &Header, height: u64, distance: u64) -> Header {
	let interlinks = nipopow_core::interlink::update_interlinks(parent);
	Header::new(
		parent.id(),
		height,
		N_BITS,
		BigUint::from(distance),
		interlinks,
		false,
	)
}

/// Builds a child with an explicit, possibly-wrong interlink vector, used
/// by tests that need to break anchoring on purpose.
pub fn child_with_interlinks(parent: &Header, height: u64, distance: u64, interlinks: Vec<Hash>) -> Header {
	Header::new(parent.id(), height, N_BITS, BigUint::from(distance), interlinks, false)
}

/// Extends `chain`'s last header with `count` more headers at `distance`,
/// returning the newly appended headers (not the whole chain).
pub fn extend(chain: &[Header], count: u64, distance: u64) -> Vec<Header> {
	let mut out = Vec::with_capacity(count as usize);
	let mut parent = chain.last().expect("chain must be non-empty").clone();
	let mut height = parent.height() + 1;
	for _ in 0..count {
		let h = child(&parent, height, distance);
		out.push(h.clone());
		parent = h;
		height += 1;
	}
	out
}

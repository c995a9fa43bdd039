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

//! Pure helpers over ordered header sequences: filtering by superchain
//! level, lowest common ancestor between two prefixes, and the
//! best-argument strength score.

use crate::header::Header;
use crate::level::max_level_of;

/// The superchain of level `mu`: the subsequence of `chain` whose headers
/// reach level `mu`, in order. The genesis header (level "infinity")
/// belongs to every superchain.
pub fn headers_of_level(chain: &[Header], mu: u32) -> Vec<Header> {
	chain
		.iter()
		.filter(|h| max_level_of(h) >= mu)
		.cloned()
		.collect()
}

/// The lowest common ancestor of two chains sharing a genesis: the last
/// header along which `a` and `b` agree, walking from the shared head.
/// Returns `None` if the two chains don't even share a head. Agreement is
/// checked by header id, not full header equality (cheaper, and
/// sufficient since ids are collision-resistant hashes of the header's own
/// content).
pub fn lowest_common_ancestor(a: &[Header], b: &[Header]) -> Option<Header> {
	let (first_a, first_b) = (a.first()?, b.first()?);
	if first_a.id() != first_b.id() {
		return None;
	}

	let mut i = 1;
	while i < a.len() && i < b.len() && a[i].id() == b[i].id() {
		i += 1;
	}
	Some(a[i - 1].clone())
}

/// The proof-strength score of a chain: the maximum of
/// `2^mu * |chain filtered to level >= mu|` over every `mu` for which that
/// filtered subchain still has at least `m` headers. `mu = 0` is always a
/// valid candidate, so this is never less than `chain.len()`.
///
/// Uses a `u128` accumulator and saturates rather than overflows once
/// `mu` exceeds what `u128` can shift by, which only matters for
/// superchain levels with no real-world counterpart.
///
/// The scan only climbs as far as the highest *finite* level among
/// `chain`'s headers plus one: the genesis header reports the sentinel
/// "infinite" level, and without this bound a chain containing genesis
/// with `m == 1` would never see its count drop below `m`, scanning
/// toward `u32::MAX` instead of stopping at the first real divergence.
pub fn best_arg(chain: &[Header], m: u32) -> u128 {
	let levels: Vec<u32> = chain.iter().map(max_level_of).collect();
	let max_finite = levels.iter().copied().filter(|&l| l < u32::MAX).max().unwrap_or(0);
	let upper = max_finite.saturating_add(1);

	let mut best = chain.len() as u128;
	for mu in 1..=upper {
		let count = levels.iter().filter(|&&l| l >= mu).count();
		if (count as u128) < m as u128 {
			break;
		}

		let weight = 1u128.checked_shl(mu).unwrap_or(u128::MAX);
		let score = weight.saturating_mul(count as u128);
		if score > best {
			best = score;
		}
	}

	best
}

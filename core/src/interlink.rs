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

//! Computes the interlink vector a header's child must carry, given the
//! parent alone.

use crate::hash::Hash;
use crate::header::Header;
use crate::level::max_level_of;

/// Computes the interlink vector that a child of `parent` must carry.
/// A header of level `L` supersedes interlink slots for levels `1..=L`,
/// since it is itself a valid witness for all of them.
pub fn update_interlinks(parent: &Header) -> Vec<Hash> {
	if parent.is_genesis() {
		return vec![parent.id()];
	}

	let level = max_level_of(parent);
	let v = parent.interlinks();

	if level == 0 {
		return v.to_vec();
	}

	let genesis = v[0];
	let tail = &v[1..];
	let l = level as usize;
	let keep = tail.len().saturating_sub(l);

	let mut result = Vec::with_capacity(1 + keep + l);
	result.push(genesis);
	result.extend_from_slice(&tail[..keep]);
	result.extend(std::iter::repeat(parent.id()).take(l));
	result
}

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

//! Decides whether one proof is strictly
//! stronger than another, so the enclosing node knows whether to replace
//! its currently held best proof.

use log::trace;

use crate::chain::{best_arg, lowest_common_ancestor};
use crate::header::Header;
use crate::proof::Proof;

impl Proof {
	/// True iff `self` is a strictly better proof than `other` under
	/// superchain density `m`. Finds the lowest common ancestor of
	/// the two prefixes and compares `best_arg` only on the portion of
	/// each chain above that ancestor (falling back to the full prefixes
	/// when they share no ancestor at all); ties go to the incumbent,
	/// i.e. `other`, this is never a `>=`.
	pub fn is_better_than(&self, other: &Proof, m: u32) -> bool {
		let (a_chain, b_chain) = match lowest_common_ancestor(self.prefix(), other.prefix()) {
			Some(lca) => {
				let h0 = lca.height();
				let a: Vec<Header> = self
					.prefix()
					.iter()
					.filter(|h| h.height() > h0)
					.cloned()
					.collect();
				let b: Vec<Header> = other
					.prefix()
					.iter()
					.filter(|h| h.height() > h0)
					.cloned()
					.collect();
				(a, b)
			}
			None => (self.prefix().to_vec(), other.prefix().to_vec()),
		};

		let (self_arg, other_arg) = (best_arg(&a_chain, m), best_arg(&b_chain, m));
		trace!("comparing proofs: self best-arg {}, other best-arg {}", self_arg, other_arg);
		self_arg > other_arg
	}
}

#[cfg(test)]
mod tests {
	use super::*;
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
	fn is_irreflexive() {
		let g = genesis();
		let h1 = child(1, &g, 1_000_000);
		let p = Proof::new(1, 0, vec![g, h1], vec![]);
		assert!(!p.is_better_than(&p, 1));
	}

	#[test]
	fn ties_favor_the_incumbent() {
		let g = genesis();
		let h1 = child(1, &g, 1_000_000);
		let h2 = child(2, &h1, 1_000_000);
		let a = Proof::new(1, 0, vec![g.clone(), h1.clone(), h2.clone()], vec![]);
		let b = Proof::new(1, 0, vec![g, h1, h2], vec![]);
		assert!(!a.is_better_than(&b, 1));
		assert!(!b.is_better_than(&a, 1));
	}

	#[test]
	fn longer_chain_past_the_lca_wins() {
		let g = genesis();
		let h1 = child(1, &g, 1_000_000);
		let h2a = child(2, &h1, 1_000_000);
		let h3a = child(3, &h2a, 1_000_000);
		let h2b = child(2, &h1, 1_000_000);

		let a = Proof::new(1, 0, vec![g.clone(), h1.clone(), h2a, h3a], vec![]);
		let b = Proof::new(1, 0, vec![g, h1, h2b], vec![]);

		assert!(a.is_better_than(&b, 1));
		assert!(!b.is_better_than(&a, 1));
	}
}

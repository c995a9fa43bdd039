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

//! Structural checks a proof must always hold, and the richer
//! super-chain/multi-level quality predicate, kept separate as documented
//! in DESIGN.md: `validate` is the hard acceptance rule, `good_superchain`
//! is advisory and left for callers that want the stronger guarantee.

use std::collections::BTreeMap;

use log::{debug, warn};

use crate::consensus::ConsensusParams;
use crate::error::{Error, Result};
use crate::header::Header;
use crate::level::max_level_of;
use crate::proof::Proof;

/// Runs the structural checks every accepted proof must pass, against the
/// consensus parameters supplied by the caller (never the proof's own
/// `m`/`k` fields, trusting those would let a prover validate itself).
/// Checks run in the order listed and stop at the first failure.
pub fn validate(proof: &Proof, params: &ConsensusParams) -> Result<()> {
	if proof.prefix().is_empty() {
		warn!("rejecting proof with an empty prefix");
		return Err(Error::MalformedProof("prefix must be non-empty".into()));
	}

	// 1. Suffix length.
	if proof.suffix().len() != params.k as usize {
		warn!(
			"rejecting proof: suffix length {} != k {}",
			proof.suffix().len(),
			params.k
		);
		return Err(Error::InvalidSuffixLength {
			expected: params.k,
			actual: proof.suffix().len(),
		});
	}

	// 2. Prefix density: group prefix.tail by max_level_of, each
	// represented level must carry exactly `m` headers.
	let mut by_level: BTreeMap<u32, usize> = BTreeMap::new();
	for h in proof.prefix_tail() {
		*by_level.entry(max_level_of(h)).or_insert(0) += 1;
	}
	for (level, count) in &by_level {
		if *count != params.m as usize {
			warn!(
				"rejecting proof: level {} carries {} header(s), expected {}",
				level, count, params.m
			);
			return Err(Error::InvalidPrefixLength {
				level: *level,
				expected: params.m,
				actual: *count,
			});
		}
	}

	// 3. Anchoring: every prefix-tail header's first interlink entry must
	// point at the prefix head.
	let genesis_id = proof.genesis().id();
	for (index, h) in proof.prefix_tail().iter().enumerate() {
		if h.interlinks().first() != Some(&genesis_id) {
			warn!("rejecting proof: header at prefix index {} is not anchored", index);
			return Err(Error::ChainNotAnchored { index });
		}
	}

	debug!(
		"proof validated: prefix {} header(s), suffix {} header(s)",
		proof.prefix().len(),
		proof.suffix().len()
	);
	Ok(())
}

/// The super-chain/multi-level quality predicate, advisory per
/// DESIGN.md's Open Question resolution. Evaluates whether `super_chain`
/// (the level-`mu` superchain of `chain`) is a "good" superchain: dense
/// enough relative to `chain` (super-chain quality) and, at every level up
/// to `mu`, dense enough relative to the next level down once there are
/// enough samples to judge (multi-level quality).
pub fn good_superchain(
	chain: &[Header],
	super_chain: &[Header],
	mu: u32,
	params: &ConsensusParams,
) -> Result<()> {
	if super_chain.is_empty() {
		// Nothing to judge; vacuously fine.
		return Ok(());
	}

	let first_id = super_chain.first().expect("checked non-empty above").id();
	let last_id = super_chain.last().expect("checked non-empty above").id();

	let start = chain
		.iter()
		.position(|h| h.id() == first_id)
		.ok_or_else(|| Error::MalformedProof("super-chain head not found in chain".into()))?;
	let end = chain
		.iter()
		.rposition(|h| h.id() == last_id)
		.ok_or_else(|| Error::MalformedProof("super-chain tail not found in chain".into()))?;
	let down_chain = &chain[start..=end];

	super_chain_quality(chain, super_chain, down_chain, mu, params)?;
	multi_level_quality(down_chain, mu, params)?;
	debug!("super-chain at level {} passed the goodness check", mu);
	Ok(())
}

fn super_chain_quality(
	chain: &[Header],
	super_chain: &[Header],
	down_chain: &[Header],
	mu: u32,
	params: &ConsensusParams,
) -> Result<()> {
	for m_prime in (params.m as usize)..chain.len() {
		let s = super_chain.len().min(m_prime);
		let d_prime = down_chain.len().min(m_prime);
		let bound = (1.0 - params.delta) * 2f64.powi(-(mu as i32)) * d_prime as f64;
		if !(s as f64 > bound) {
			warn!("super-chain quality failed at m' = {}", m_prime);
			return Err(Error::WeakSuperChain { m_prime });
		}
	}
	Ok(())
}

fn multi_level_quality(down_chain: &[Header], mu: u32, params: &ConsensusParams) -> Result<()> {
	for mu_prime in 1..=mu {
		let lower = mu_prime.saturating_sub(1);
		let c_star: Vec<&Header> = down_chain
			.iter()
			.filter(|h| max_level_of(h) >= lower)
			.collect();
		let u = c_star.iter().filter(|h| max_level_of(h) >= mu_prime).count();

		if u >= params.k1 as usize {
			let at_mu = c_star.iter().filter(|h| max_level_of(h) >= mu).count();
			let bound = (1.0 - params.delta) * 2f64.powi(mu as i32 - mu_prime as i32) * u as f64;
			if !(at_mu as f64 >= bound) {
				warn!("multi-level quality failed at level {}", mu_prime);
				return Err(Error::WeakMultiLevel { level: mu_prime });
			}
		}
	}
	Ok(())
}

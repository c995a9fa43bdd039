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

//! Error kinds produced by the proof core. Every variant is a deterministic,
//! typed failure reason; nothing here retries or blocks, and nothing wraps
//! an I/O error: the core never performs I/O. The caller is expected to
//! match on the kind to decide whether to drop a message, penalize a peer,
//! or log and move on.

use thiserror::Error;

/// Convenience alias used throughout this crate.
pub type Result<T> = std::result::Result<T, Error>;

/// Failure reasons for decoding, structural validation and the richer
/// superchain-quality checks.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
	/// Decoding failed: a short buffer, an invalid count, invalid header
	/// bytes, or trailing data the declared lengths didn't account for.
	#[error("malformed proof: {0}")]
	MalformedProof(String),

	/// `suffix.len() != k`.
	#[error("invalid suffix length: expected {expected}, got {actual}")]
	InvalidSuffixLength {
		/// The configured suffix length `k`.
		expected: u32,
		/// The suffix length actually present in the proof.
		actual: usize,
	},

	/// Some level represented in `prefix.tail` does not carry exactly `m`
	/// headers.
	#[error("invalid prefix length at level {level}: expected {expected} headers, got {actual}")]
	InvalidPrefixLength {
		/// The superchain level at which the group-size constraint failed.
		level: u32,
		/// The configured superchain density `m`.
		expected: u32,
		/// The number of headers actually found at that level.
		actual: usize,
	},

	/// A prefix-tail header's first interlink entry does not reference the
	/// prefix head.
	#[error("chain not anchored: header at prefix index {index} does not point at the prefix head")]
	ChainNotAnchored {
		/// Index into `prefix.tail` of the offending header.
		index: usize,
	},

	/// The super-chain quality check failed, advisory.
	#[error("weak super-chain: quality bound violated at m' = {m_prime}")]
	WeakSuperChain {
		/// The `m'` value at which the quality bound first failed.
		m_prime: usize,
	},

	/// The multi-level quality check failed, advisory.
	#[error("weak multi-level quality at level {level}")]
	WeakMultiLevel {
		/// The level `mu'` at which the quality bound failed.
		level: u32,
	},
}

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

//! Consensus-relevant constants and parameters. As with the rest of this
//! crate, these are data, not global state: a parameter set is a value
//! passed explicitly to validation and comparison, not a `static` read out
//! from under the caller: their values belong to chain configuration,
//! not to the proof itself.

use serde::{Deserialize, Serialize};

/// The network envelope type byte this proof object is tagged with.
pub const PROOF_MSG_TYPE: u8 = 0x6E;

/// `q`: the chain's base target constant, against which a compact `nBits`
/// target is divided to get the per-header required target
/// (`T_required = q / decode_compact(nBits)`). Chosen as the maximum
/// representable 256-bit value, matching the convention of treating the
/// base target as "hardest possible difficulty".
pub const BASE_TARGET: [u8; 32] = [0xff; 32];

/// Protocol parameters controlling superchain density (`m`), suffix
/// length (`k`), multi-level quality threshold (`k1`) and goodness slack
/// (`delta`). Fixed for a given chain version and supplied by the
/// enclosing node's configuration rather than hard-coded here.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ConsensusParams {
	/// Superchain density: the number of headers required at every
	/// represented level of `prefix.tail`.
	pub m: u32,
	/// Suffix length: the exact number of headers `proof.suffix` must
	/// contain.
	pub k: u32,
	/// Multi-level quality threshold `k1` used by `good_superchain`.
	pub k1: u32,
	/// Goodness slack `delta`, in `(0, 1)`, used by `good_superchain`.
	pub delta: f64,
}

impl ConsensusParams {
	/// Reference parameter set used by this crate's own tests and
	/// doctests. Not a protocol default: real deployments configure their
	/// own `m, k, k1, delta`.
	pub const fn reference() -> ConsensusParams {
		ConsensusParams {
			m: 6,
			k: 6,
			k1: 15,
			delta: 0.15,
		}
	}
}

impl Default for ConsensusParams {
	fn default() -> ConsensusParams {
		ConsensusParams::reference()
	}
}

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

//! How rare a header's proof-of-work is, expressed as an integer
//! "superchain level" `mu` such that the header belongs to every
//! superchain of level `0..=mu`.

use num_bigint::BigUint;
use num_traits::Zero;

use crate::consensus::BASE_TARGET;
use crate::header::Header;

/// Decodes a Bitcoin/Ergo-style compact target (`nBits`): a one-byte
/// exponent followed by a three-byte mantissa, into the full-width target
/// it represents. The mantissa's high bit is a sign flag in the original
/// format; targets are never negative here, so that bit is simply masked
/// off rather than interpreted.
pub fn decode_compact(n_bits: u32) -> BigUint {
	let exponent = (n_bits >> 24) & 0xff;
	let mantissa = BigUint::from(n_bits & 0x007f_ffff);

	if exponent <= 3 {
		let shift = (8 * (3 - exponent)) as usize;
		mantissa >> shift
	} else {
		let shift = (8 * (exponent - 3)) as usize;
		mantissa << shift
	}
}

/// Returns the largest non-negative integer `mu` such that
/// `header.pow_distance() * 2^mu <= T_required`, where `T_required =
/// q / decode_compact(header.n_bits())` and `q` is the chain's
/// [`BASE_TARGET`]. The genesis header returns `u32::MAX`, the sentinel
/// "infinity": it participates in every superchain.
pub fn max_level_of(header: &Header) -> u32 {
	if header.is_genesis() {
		return u32::MAX;
	}

	let base_target = BigUint::from_bytes_be(&BASE_TARGET);
	let target = decode_compact(header.n_bits());
	if target.is_zero() {
		// No valid PoW target decodes to zero; treat defensively as the
		// weakest possible requirement rather than dividing by zero.
		return 0;
	}
	let t_required = base_target / target;

	let d = header.pow_distance();
	if d.is_zero() {
		// A zero distance would satisfy the inequality at any level; this
		// cannot occur for a genuine PoW solution, so we return the
		// largest finite level rather than treating it as genesis.
		return u32::MAX - 1;
	}
	if t_required < *d {
		// d is larger than the required target: the header does not even
		// reach level 0. Impossible for a valid PoW header; clamp.
		return 0;
	}

	let ratio = t_required / d;
	floor_log2(&ratio)
}

/// `floor(log2(x))` for `x >= 1`; `0` for `x == 0` (the clamp case
/// documented at the call site).
fn floor_log2(x: &BigUint) -> u32 {
	if x.is_zero() {
		return 0;
	}
	(x.bits() as u32).saturating_sub(1)
}

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

//! A Non-Interactive Proof of Proof-of-Work (NiPoPoW) proof object: a
//! compact, self-contained certificate that a participant on a
//! proof-of-work chain has seen a sufficiently strong chain, without
//! requiring the verifier to download every header.
//!
//! This crate is pure and stateless: every public function is a plain
//! computation over its arguments, safe to call concurrently from any
//! number of threads. Building a proof from a live chain, gossiping it
//! over the network, and persisting the winning proof are all the job of
//! the enclosing node, not of this crate.

#![deny(non_upper_case_globals)]
#![deny(non_camel_case_types)]
#![deny(non_snake_case)]
#![deny(unused_mut)]
#![warn(missing_docs)]

pub mod chain;
pub mod codec;
pub mod compare;
pub mod consensus;
pub mod error;
pub mod hash;
pub mod header;
pub mod interlink;
pub mod level;
pub mod proof;
pub mod ser;
pub mod validate;

pub use crate::consensus::PROOF_MSG_TYPE;
pub use crate::error::{Error, Result};
pub use crate::header::Header;
pub use crate::proof::Proof;

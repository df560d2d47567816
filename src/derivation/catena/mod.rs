//! Catena password scrambling framework (v3.3).
//!
//! Catena is a memory-hard password hashing and key derivation function
//! built on top of an arbitrary cryptographic digest. Its cost is set by the
//! garlic `g` (memory of `2^g` digest-sized vertices) and the depth `lambda`
//! (passes over that memory), and it can be raised after the fact without
//! knowing the password.
//!
//! # Security Properties
//!
//! - **Memory hardness**: the graph functions force `2^g` vertices to be kept
//!   in memory, or a heavy recomputation penalty to be paid.
//! - **Cache-timing resistance of the graph**: the graph functions access
//!   memory in a password-independent order. Only the randomization layer Γ
//!   depends on the salt (or a separate public input).
//! - **Domain separation**: the version identifier, mode, depth, output
//!   length and salt length are all bound into the initial hash.
//!
//! # Algorithm Overview
//!
//! 1. **Initialization**: `x = H(H(V) || t || H(AD) || pwd || salt)`.
//! 2. **Warm-up**: one discarded flap at garlic `(min_garlic + 1) / 2`.
//! 3. **Escalation**: for `c = min_garlic..=garlic`, `x = flap(x, c)` and
//!    `x = H(c || x)`.
//! 4. **Output**: the first `hashlen` bytes of `x`.
//!
//! A flap fills the memory array from `x` (`initmem`), scrambles it with
//! the salt-dependent layer Γ, and runs the graph function F.
//!
//! # Protocol Extensions
//!
//! - **Server relief**: the client stops before the last chaining hash and
//!   the server only computes `H(garlic || x)`.
//! - **Client-independent update**: a stored hash is moved to a higher garlic
//!   by resuming the escalation loop.
//! - **Key derivation**: a KDF-mode hash is expanded to arbitrary length.
//! - **Keyed hashing**: the hash is XORed with a keystream bound to a secret
//!   key and a user identifier.

mod boundary;
pub mod core;
pub mod graph;
mod helper;
mod memory;
pub(crate) mod params;
mod xorshift;

pub use self::core::{Catena, KEY_LEN};
pub use graph::{Topology, reverse_bits};
pub use params::{CatenaParams, MAX_GARLIC};

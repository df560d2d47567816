//! Memory-hard password hashing on top of pluggable digests
//!
//! This crate implements the Catena password scrambling framework, a
//! Password Hashing Competition finalist, together with the narrow hash
//! interfaces it is built on.
//!
//! The focus is on **clarity, predictability, and auditability**: every step
//! of the construction maps onto a small, explicitly named function, and all
//! password-derived buffers are wiped before they are released.
//!
//! # Module overview
//!
//! - `hash`
//!   The `Digest` and `FastHash` capabilities Catena consumes, with
//!   Blake2b-512 and SHA-512 backed by the RustCrypto crates and the
//!   single-round Blake2b-1 fast hash implemented in-house.
//!
//! - `derivation`
//!   Password hashing and key derivation. It currently provides
//!   **Catena** with its two graph instances:
//!   - *Dragonfly*: the Bit-Reversal Graph
//!   - *Butterfly*: the Double-Butterfly Graph
//!
//!   each in a fast variant (round-reduced interior hashing) and a full
//!   variant, plus server relief, client-independent cost updates, key
//!   derivation and keyed hashing.
//!
//! - `scheme`
//!   The generic `PasswordHashingScheme` interface (output length,
//!   password, salt, time cost, memory cost).
//!
//! - `error`
//!   The error type shared by all operations.
//!
//! # Design goals
//!
//! - Validation before allocation: invalid parameters never touch memory
//! - Scoped wiping of password, state, memory array and generator seed
//! - Single-threaded, deterministic, call-and-return operations
//! - Structured `tracing` events carrying cost parameters, never secrets
//!
//! Constant-time execution is not a goal beyond the password-independent
//! memory access pattern of the graph functions.

pub mod derivation;
pub mod error;
pub mod hash;
pub mod scheme;

pub use derivation::catena::{Catena, CatenaParams, KEY_LEN, Topology};
pub use error::{Error, Result};
pub use scheme::PasswordHashingScheme;

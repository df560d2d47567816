//! Cost parameter definitions and validation for Catena.
//!
//! This module defines the tunable cost parameters of a Catena call and the
//! checks that must pass before any memory is allocated or any digest is
//! invoked.

use crate::error::{Error, Result};

/// Largest garlic accepted: the memory array has `1.5 * 2^garlic` vertices.
pub const MAX_GARLIC: u8 = 63;

/// Cost parameters for one Catena call.
///
/// # Parameters
///
/// - `lambda`: depth of the graph, the number of passes over the memory
///   array per garlic level (minimum 1).
/// - `min_garlic`: first garlic level of the escalation loop.
/// - `garlic`: final garlic level; memory grows with `2^garlic` vertices of
///   digest size each.
/// - `hashlen`: output length in bytes, at most the digest output size.
///
/// # Recommended Values
///
/// The reference instances use λ=2, garlic=21 for Dragonfly (192 MiB with
/// Blake2b) and λ=4, garlic=16 for Butterfly (6 MiB with Blake2b).
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct CatenaParams {
    /// Depth of the graph (minimum 1).
    pub lambda: u8,
    /// Garlic level the escalation loop starts at (at most `garlic`).
    pub min_garlic: u8,
    /// Memory cost as a base-2 logarithm (at most 63).
    pub garlic: u8,
    /// Length of the output hash in bytes.
    pub hashlen: usize,
}

impl CatenaParams {
    /// Default parameters of Catena-Dragonfly: λ=2, garlic=21, 64-byte hash.
    pub const fn dragonfly_default() -> Self {
        Self {
            lambda: 2,
            min_garlic: 21,
            garlic: 21,
            hashlen: 64,
        }
    }

    /// Default parameters of Catena-Butterfly: λ=4, garlic=16, 64-byte hash.
    pub const fn butterfly_default() -> Self {
        Self {
            lambda: 4,
            min_garlic: 16,
            garlic: 16,
            hashlen: 64,
        }
    }

    /// Returns the same cost with a different output length.
    pub const fn with_hashlen(self, hashlen: usize) -> Self {
        Self { hashlen, ..self }
    }

    /// Checks the parameters against a digest with `h_len` output bytes.
    pub fn validate(&self, h_len: usize) -> Result<()> {
        if self.hashlen > h_len {
            return Err(Error::InvalidArgument(
                "hashlen exceeds the digest output size",
            ));
        }

        validate_cost(self.lambda, self.min_garlic, self.garlic)
    }
}

/// Checks depth and garlic range, shared by every operation.
pub(crate) fn validate_cost(lambda: u8, min_garlic: u8, garlic: u8) -> Result<()> {
    if garlic > MAX_GARLIC {
        return Err(Error::InvalidArgument("garlic must not exceed 63"));
    }

    if min_garlic > garlic {
        return Err(Error::InvalidArgument("min_garlic exceeds garlic"));
    }

    if lambda == 0 {
        return Err(Error::InvalidArgument("lambda must be at least 1"));
    }

    Ok(())
}

/// Domain selector folded into the tweak.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
#[repr(u8)]
pub(crate) enum Mode {
    PasswordHashing = 0,
    KeyDerivation = 1,
}

/// Whether the final chaining hash is left to the server.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) enum Relief {
    Regular,
    Client,
}

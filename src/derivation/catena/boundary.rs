//! Initialization and chaining hashes for Catena.
//!
//! This module handles the digest-only steps around the memory-hard core:
//! computing the initial state from all inputs, and the per-garlic chaining
//! hash that folds the garlic level into the state.

use zeroize::Zeroizing;

use super::params::{CatenaParams, Mode};
use crate::hash::Digest;

/// The 4-byte tweak binding the output to the exact parameter set.
///
/// ```text
/// t = mode || lambda || hashlen || saltlen
/// ```
///
/// Each field is a single byte; lengths above 255 wrap, which keeps the
/// encoding identical to the reference instances.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub(crate) struct Tweak {
    mode: Mode,
    lambda: u8,
    hashlen: u8,
    saltlen: u8,
}

impl Tweak {
    pub(crate) fn new(mode: Mode, params: &CatenaParams, salt_len: usize) -> Self {
        Self {
            mode,
            lambda: params.lambda,
            hashlen: params.hashlen as u8,
            saltlen: salt_len as u8,
        }
    }

    pub(crate) fn to_bytes(self) -> [u8; 4] {
        [self.mode as u8, self.lambda, self.hashlen, self.saltlen]
    }
}

/// Computes the initial state `x` from all Catena inputs.
///
/// ```text
/// x = H(H(V) || t || H(AD) || pwd || salt)
/// ```
///
/// where `V` is the version identifier of the instance. Missing associated
/// data hashes as the empty string.
pub(crate) fn initial_hash<D: Digest>(
    digest: &mut D,
    version_id: &str,
    tweak: Tweak,
    data: Option<&[u8]>,
    password: &[u8],
    salt: &[u8],
) -> Zeroizing<Vec<u8>> {
    let h_len = digest.output_size();
    let mut hv = Zeroizing::new(vec![0u8; h_len]);
    let mut x = Zeroizing::new(vec![0u8; h_len]);

    digest.update(version_id.as_bytes());
    digest.finalize_into_reset(&mut hv);

    digest.update(data.unwrap_or_default());
    digest.finalize_into_reset(&mut x);

    digest.update(&hv);
    digest.update(&tweak.to_bytes());
    digest.update(&x);
    digest.update(password);
    digest.update(salt);
    digest.finalize_into_reset(&mut x);

    x
}

/// Chaining hash after a flap: `x = H(garlic || x)`.
pub(crate) fn fold<D: Digest>(digest: &mut D, garlic: u8, x: &mut [u8]) {
    digest.update_byte(garlic);
    digest.update(x);
    digest.finalize_into_reset(x);
}

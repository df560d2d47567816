//! Hash capabilities consumed by the password hashing schemes.
//!
//! Catena only needs two narrow interfaces from its underlying primitives:
//!
//! - [`Digest`]: a full-strength reset-update-finalize hash function.
//! - [`FastHash`]: an optional reduced-round two-input transform, keyed by a
//!   small vertex index, used for the bulk of the memory-array updates.
//!
//! Full digests are provided by the RustCrypto crates through
//! [`DigestAdapter`]; the round-reduced [`Blake2b1`] is implemented here.

mod adapter;
mod blake2b_1;

pub use adapter::{Blake2b, DigestAdapter, Sha512};
pub use blake2b_1::Blake2b1;

/// A full-round cryptographic hash function with incremental input.
///
/// Implementations are stateful: input accumulates through [`Digest::update`]
/// until [`Digest::finalize_into_reset`] writes the digest and returns the
/// hasher to its initial state.
pub trait Digest {
    /// Length of the digest in bytes (`hLen`).
    fn output_size(&self) -> usize;

    /// Absorbs `data`.
    fn update(&mut self, data: &[u8]);

    /// Absorbs a single byte.
    fn update_byte(&mut self, byte: u8) {
        self.update(&[byte]);
    }

    /// Writes the digest into `out[..output_size()]` and resets the hasher.
    ///
    /// # Panics
    ///
    /// Panics if `out` is shorter than [`Digest::output_size`].
    fn finalize_into_reset(&mut self, out: &mut [u8]);

    /// Discards any absorbed input.
    fn reset(&mut self);
}

/// A reduced-round hash over two `output_size()`-byte inputs.
///
/// The `vertex` index selects the behaviour of a call (e.g. which round
/// schedule is used), so this is not a general purpose digest. Implementations
/// may chain internal state across calls until [`FastHash::reset`].
pub trait FastHash {
    /// Length of the output, and of each input, in bytes.
    fn output_size(&self) -> usize;

    /// Hashes `input1 ‖ input2` for the given vertex index into `out`.
    fn hash(&mut self, vertex: u64, input1: &[u8], input2: &[u8], out: &mut [u8]);

    /// Returns the transform to its initial chaining state.
    fn reset(&mut self);
}

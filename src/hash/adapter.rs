//! Full-round digests backed by the RustCrypto hash crates.

use digest::{FixedOutputReset, Output};

use super::Digest;

/// Exposes any RustCrypto fixed-output hasher as a Catena [`Digest`].
#[derive(Clone, Default)]
pub struct DigestAdapter<H> {
    inner: H,
}

/// Blake2b with a 64-byte output, the digest of the reference instances.
pub type Blake2b = DigestAdapter<blake2::Blake2b512>;

/// SHA-512 as an alternative 64-byte full digest.
pub type Sha512 = DigestAdapter<sha2::Sha512>;

impl<H> DigestAdapter<H>
where
    H: digest::Digest + FixedOutputReset + Default,
{
    /// Creates a hasher in its initial state.
    pub fn new() -> Self {
        Self { inner: H::default() }
    }
}

impl<H> Digest for DigestAdapter<H>
where
    H: digest::Digest + FixedOutputReset,
{
    fn output_size(&self) -> usize {
        <H as digest::Digest>::output_size()
    }

    fn update(&mut self, data: &[u8]) {
        digest::Digest::update(&mut self.inner, data);
    }

    fn finalize_into_reset(&mut self, out: &mut [u8]) {
        let len = <H as digest::Digest>::output_size();
        let out = <Output<H>>::from_mut_slice(&mut out[..len]);
        digest::Digest::finalize_into_reset(&mut self.inner, out);
    }

    fn reset(&mut self) {
        digest::Digest::reset(&mut self.inner);
    }
}

//! Hash dispatch and memory preparation shared by both graph functions.
//!
//! The helper borrows the instance's digest and optional fast hash for the
//! duration of one flap. It owns two digest-sized scratch buffers that every
//! hash call writes into; callers copy the result into its target vertex, so
//! inputs and outputs never alias.

use tracing::trace;
use zeroize::Zeroizing;

use super::memory::MemoryArray;
use super::xorshift::Xorshift1024Star;
use crate::hash::{Digest, FastHash};

pub(crate) struct CatenaHelper<'a, D, F> {
    digest: &'a mut D,
    fast_hash: Option<&'a mut F>,
    h_len: usize,
    out: Zeroizing<Vec<u8>>,
    inner: Zeroizing<Vec<u8>>,
}

impl<'a, D: Digest, F: FastHash> CatenaHelper<'a, D, F> {
    pub(crate) fn new(digest: &'a mut D, fast_hash: Option<&'a mut F>) -> Self {
        let h_len = digest.output_size();

        Self {
            digest,
            fast_hash,
            h_len,
            out: Zeroizing::new(vec![0u8; h_len]),
            inner: Zeroizing::new(vec![0u8; h_len]),
        }
    }

    #[inline]
    pub(crate) fn h_len(&self) -> usize {
        self.h_len
    }

    /// Restarts the chaining state of the fast hash, if there is one.
    pub(crate) fn reset_fast(&mut self) {
        if let Some(fast_hash) = self.fast_hash.as_deref_mut() {
            fast_hash.reset();
        }
    }

    /// Full-strength hash of a layer's first vertex: `H(0 || H(a || b))`.
    ///
    /// Always uses the full digest, so every layer transition keeps full
    /// cryptographic strength even when interior steps are round-reduced.
    pub(crate) fn h_first(&mut self, a: &[u8], b: &[u8]) -> &[u8] {
        self.digest.update(&a[..self.h_len]);
        self.digest.update(&b[..self.h_len]);
        self.digest.finalize_into_reset(&mut self.inner);

        self.digest.update_byte(0);
        self.digest.update(&self.inner);
        self.digest.finalize_into_reset(&mut self.out);

        &self.out
    }

    /// Interior vertex hash: the fast hash if configured, else `H(a || b)`
    /// with the full digest.
    pub(crate) fn hash_fast(&mut self, vertex: u64, a: &[u8], b: &[u8]) -> &[u8] {
        match self.fast_hash.as_deref_mut() {
            Some(fast_hash) => fast_hash.hash(vertex, a, b, &mut self.out),
            None => {
                self.digest.update(&a[..self.h_len]);
                self.digest.update(&b[..self.h_len]);
                self.digest.finalize_into_reset(&mut self.out);
            }
        }

        &self.out
    }

    /// `r[out] = hash_fast(vertex, r[a], r[b])`.
    #[inline]
    pub(crate) fn hash_fast_vertex(
        &mut self,
        vertex: u64,
        r: &mut MemoryArray,
        a: usize,
        b: usize,
        out: usize,
    ) {
        let hash = self.hash_fast(vertex, r.vertex(a), r.vertex(b));
        r.vertex_mut(out).copy_from_slice(hash);
    }

    /// Fills the first `c` vertices of `r` sequentially from the state `x`.
    ///
    /// ```text
    /// v-1 = H(0 || x), v-2 = H(1 || x)
    /// r[0] = H'(v-1 || v-2), r[1] = H'(r[0] || v-1)
    /// r[i] = H'(r[i-1] || r[i-2])
    /// ```
    pub(crate) fn initmem(&mut self, x: &[u8], c: usize, r: &mut MemoryArray) {
        let mut vm1 = Zeroizing::new(vec![0u8; self.h_len]);
        let mut vm2 = Zeroizing::new(vec![0u8; self.h_len]);

        self.digest.update_byte(0);
        self.digest.update(x);
        self.digest.finalize_into_reset(&mut vm1);

        self.digest.update_byte(1);
        self.digest.update(x);
        self.digest.finalize_into_reset(&mut vm2);

        self.reset_fast();

        let hash = self.hash_fast(0, &vm1, &vm2);
        r.vertex_mut(0).copy_from_slice(hash);

        let hash = self.hash_fast(1, r.vertex(0), &vm1);
        r.vertex_mut(1).copy_from_slice(hash);

        for i in 2..c {
            self.hash_fast_vertex(i as u64, r, i - 1, i - 2, i);
        }
    }

    /// The randomization layer Γ.
    ///
    /// Seeds xorshift1024* with `H(γ)` and `H(H(γ))` and performs
    /// `2^((3g + 3) / 4)` updates `r[j] = H'(r[j] || r[j2])` at pseudo-random
    /// `garlic`-bit indices `j`, `j2`.
    pub(crate) fn salt_mix(&mut self, garlic: u8, public_input: &[u8], r: &mut MemoryArray) {
        let updates = 1u64 << ((3 * u32::from(garlic) + 3) / 4);

        let mut seed_a = Zeroizing::new(vec![0u8; self.h_len]);
        let mut seed_b = Zeroizing::new(vec![0u8; self.h_len]);

        self.digest.update(public_input);
        self.digest.finalize_into_reset(&mut seed_a);

        self.digest.update(&seed_a);
        self.digest.finalize_into_reset(&mut seed_b);

        let mut rng = Xorshift1024Star::from_seed(&seed_a, &seed_b);

        trace!(garlic, updates, "salt mix");

        self.reset_fast();

        for vertex in 0..updates {
            let j = rng.next_index(garlic);
            let j2 = rng.next_index(garlic);
            self.hash_fast_vertex(vertex, r, j, j2, j);
        }
    }
}

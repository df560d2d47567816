//! Blake2b-1: a single-round Blake2b compression used as Catena's fast hash.
//!
//! Each call compresses the 128-byte block `input1 ‖ input2` with exactly one
//! Blake2b round. The vertex index picks the message schedule
//! (`SIGMA[vertex % 12]`), so consecutive vertices are mixed with different
//! word permutations. The chaining value and the byte counter carry over
//! between calls until [`FastHash::reset`] is invoked, which Catena does at
//! the start of every layer.
//!
//! On its own this transform is not a secure hash; Catena only uses it for
//! interior memory updates and keeps full Blake2b at layer boundaries.

use zeroize::Zeroize;

use super::FastHash;

const OUTPUT_LEN: usize = 64;
const BLOCK_LEN: usize = 128;

/// Blake2b initialization vector (same as the SHA-512 IV).
const IV: [u64; 8] = [
    0x6a09_e667_f3bc_c908,
    0xbb67_ae85_84ca_a73b,
    0x3c6e_f372_fe94_f82b,
    0xa54f_f53a_5f1d_36f1,
    0x510e_527f_ade6_82d1,
    0x9b05_688c_2b3e_6c1f,
    0x1f83_d9ab_fb41_bd6b,
    0x5be0_cd19_137e_2179,
];

/// Message word permutations, one per round of full Blake2b.
const SIGMA: [[usize; 16]; 12] = [
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
    [11, 8, 12, 0, 5, 2, 15, 13, 10, 14, 3, 6, 7, 1, 9, 4],
    [7, 9, 3, 1, 13, 12, 11, 14, 2, 6, 5, 10, 4, 0, 15, 8],
    [9, 0, 5, 7, 2, 4, 10, 15, 14, 1, 11, 12, 6, 8, 3, 13],
    [2, 12, 6, 10, 0, 11, 8, 3, 4, 13, 7, 5, 15, 14, 1, 9],
    [12, 5, 1, 15, 14, 13, 4, 10, 0, 7, 6, 3, 9, 2, 8, 11],
    [13, 11, 7, 14, 12, 1, 3, 9, 5, 0, 15, 4, 8, 6, 2, 10],
    [6, 15, 14, 9, 11, 3, 0, 8, 12, 2, 13, 7, 1, 4, 10, 5],
    [10, 2, 8, 4, 7, 6, 1, 5, 15, 11, 9, 14, 3, 12, 13, 0],
    [0, 1, 2, 3, 4, 5, 6, 7, 8, 9, 10, 11, 12, 13, 14, 15],
    [14, 10, 4, 8, 9, 15, 13, 6, 1, 12, 0, 2, 11, 7, 5, 3],
];

/// Parameter block word 0 for an unkeyed 64-byte digest
/// (digest length 64, fanout 1, depth 1).
const PARAM_0: u64 = 0x0101_0040;

/// Round-reduced Blake2b with a chaining value kept across calls.
#[derive(Clone, Debug)]
pub struct Blake2b1 {
    h: [u64; 8],
    counter: u128,
}

impl Blake2b1 {
    /// Creates the transform in its initial chaining state.
    pub fn new() -> Self {
        let mut h = IV;
        h[0] ^= PARAM_0;

        Self { h, counter: 0 }
    }

    fn compress(&mut self, m: &[u64; 16], round: usize) {
        self.counter = self.counter.wrapping_add(BLOCK_LEN as u128);

        let mut v = [0u64; 16];
        v[..8].copy_from_slice(&self.h);
        v[8..12].copy_from_slice(&IV[..4]);
        v[12] = IV[4] ^ (self.counter as u64);
        v[13] = IV[5] ^ ((self.counter >> 64) as u64);
        // every call is treated as a final block
        v[14] = IV[6] ^ u64::MAX;
        v[15] = IV[7];

        let s = &SIGMA[round];

        g(&mut v, 0, 4, 8, 12, m[s[0]], m[s[1]]);
        g(&mut v, 1, 5, 9, 13, m[s[2]], m[s[3]]);
        g(&mut v, 2, 6, 10, 14, m[s[4]], m[s[5]]);
        g(&mut v, 3, 7, 11, 15, m[s[6]], m[s[7]]);

        g(&mut v, 0, 5, 10, 15, m[s[8]], m[s[9]]);
        g(&mut v, 1, 6, 11, 12, m[s[10]], m[s[11]]);
        g(&mut v, 2, 7, 8, 13, m[s[12]], m[s[13]]);
        g(&mut v, 3, 4, 9, 14, m[s[14]], m[s[15]]);

        for i in 0..8 {
            self.h[i] ^= v[i] ^ v[i + 8];
        }

        v.zeroize();
    }
}

impl Default for Blake2b1 {
    fn default() -> Self {
        Self::new()
    }
}

impl FastHash for Blake2b1 {
    fn output_size(&self) -> usize {
        OUTPUT_LEN
    }

    fn hash(&mut self, vertex: u64, input1: &[u8], input2: &[u8], out: &mut [u8]) {
        let mut m = [0u64; 16];
        let (low, high) = m.split_at_mut(8);

        for (word, chunk) in low.iter_mut().zip(input1[..OUTPUT_LEN].chunks_exact(8)) {
            *word = u64::from_le_bytes(chunk.try_into().unwrap());
        }
        for (word, chunk) in high.iter_mut().zip(input2[..OUTPUT_LEN].chunks_exact(8)) {
            *word = u64::from_le_bytes(chunk.try_into().unwrap());
        }

        self.compress(&m, (vertex % 12) as usize);
        m.zeroize();

        for (chunk, word) in out[..OUTPUT_LEN].chunks_exact_mut(8).zip(&self.h) {
            chunk.copy_from_slice(&word.to_le_bytes());
        }
    }

    fn reset(&mut self) {
        self.h.zeroize();
        *self = Self::new();
    }
}

impl Drop for Blake2b1 {
    fn drop(&mut self) {
        self.h.zeroize();
        self.counter = 0;
    }
}

/// Blake2b G mixing function with the message words already selected.
///
/// Rotation amounts are 32, 24, 16 and 63 bits.
#[inline(always)]
fn g(v: &mut [u64; 16], a: usize, b: usize, c: usize, d: usize, x: u64, y: u64) {
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(x);
    v[d] = (v[d] ^ v[a]).rotate_right(32);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(24);
    v[a] = v[a].wrapping_add(v[b]).wrapping_add(y);
    v[d] = (v[d] ^ v[a]).rotate_right(16);
    v[c] = v[c].wrapping_add(v[d]);
    v[b] = (v[b] ^ v[c]).rotate_right(63);
}

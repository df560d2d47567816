//! xorshift1024* generator driving the salt-dependent randomization layer.
//!
//! The generator is not cryptographically secure. It only spreads the
//! salt-mix updates over the memory array; its state is seeded from a double
//! hash of the public input and wiped on drop.

use zeroize::Zeroize;

const MULTIPLIER: u64 = 1_181_783_497_276_652_981;

pub(crate) struct Xorshift1024Star {
    s: [u64; 16],
    p: usize,
}

impl Xorshift1024Star {
    /// Seeds the state with little-endian words from `a`, then from `b`.
    ///
    /// With two 64-byte digests this fills all 16 words; words not covered
    /// by shorter seeds stay zero.
    pub(crate) fn from_seed(a: &[u8], b: &[u8]) -> Self {
        let mut s = [0u64; 16];

        for (word, chunk) in s
            .iter_mut()
            .zip(a.chunks_exact(8).chain(b.chunks_exact(8)))
        {
            let mut bytes = [0u8; 8];
            bytes.copy_from_slice(chunk);
            *word = u64::from_le_bytes(bytes);
        }

        Self { s, p: 0 }
    }

    pub(crate) fn next_u64(&mut self) -> u64 {
        let mut s0 = self.s[self.p];
        self.p = (self.p + 1) & 15;
        let mut s1 = self.s[self.p];

        s1 ^= s1 << 31;
        s1 ^= s1 >> 11;
        s0 ^= s0 >> 30;
        self.s[self.p] = s0 ^ s1;

        self.s[self.p].wrapping_mul(MULTIPLIER)
    }

    /// Draws a `bits`-bit index from the high bits of the next output.
    pub(crate) fn next_index(&mut self, bits: u8) -> usize {
        if bits == 0 {
            return 0;
        }

        (self.next_u64() >> (64 - u32::from(bits))) as usize
    }
}

impl Drop for Xorshift1024Star {
    fn drop(&mut self) {
        self.s.zeroize();
        self.p = 0;
    }
}

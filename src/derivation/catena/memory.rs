//! The memory-hard working set of one flap.
//!
//! Memory is a flat byte buffer viewed as an array of digest-sized vertices.
//! For garlic `g` it holds `2^g + 2^(g-1)` vertices: the bit-reversal graph
//! uses the first `2^g`, the double-butterfly graph rotates its rows through
//! all of them. The buffer is wiped when the array is dropped.

use tracing::trace;
use zeroize::Zeroizing;

use crate::error::{Error, Result};

pub(crate) struct MemoryArray {
    bytes: Zeroizing<Vec<u8>>,
    h_len: usize,
}

impl MemoryArray {
    /// Number of vertices for a garlic level.
    ///
    /// `initmem` always writes vertices 0 and 1, so at least two are kept even
    /// for garlic 0.
    pub(crate) fn vertex_count(garlic: u8) -> Option<usize> {
        let c = 1usize.checked_shl(u32::from(garlic))?;
        c.checked_add(c / 2).map(|n| n.max(2))
    }

    /// Size of the array in bytes, or an error if it does not fit in memory.
    pub(crate) fn byte_len(garlic: u8, h_len: usize) -> Result<usize> {
        Self::vertex_count(garlic)
            .and_then(|n| n.checked_mul(h_len))
            .filter(|&len| len <= isize::MAX as usize)
            .ok_or(Error::MemoryCost { garlic })
    }

    /// Allocates a zeroed array for `garlic` with `h_len`-byte vertices.
    pub(crate) fn allocate(garlic: u8, h_len: usize) -> Result<Self> {
        let len = Self::byte_len(garlic, h_len)?;

        let mut bytes = Vec::new();
        bytes
            .try_reserve_exact(len)
            .map_err(|_| Error::MemoryCost { garlic })?;
        bytes.resize(len, 0);
        trace!(garlic, bytes = len, "memory array allocated");

        Ok(Self {
            bytes: Zeroizing::new(bytes),
            h_len,
        })
    }

    #[inline]
    pub(crate) fn vertex(&self, index: usize) -> &[u8] {
        let start = index * self.h_len;
        &self.bytes[start..start + self.h_len]
    }

    #[inline]
    pub(crate) fn vertex_mut(&mut self, index: usize) -> &mut [u8] {
        let start = index * self.h_len;
        &mut self.bytes[start..start + self.h_len]
    }

    /// Writes `vertex(a) ⊕ vertex(b)` into `out`.
    #[inline]
    pub(crate) fn xor_into(&self, a: usize, b: usize, out: &mut [u8]) {
        out.iter_mut()
            .zip(self.vertex(a).iter().zip(self.vertex(b)))
            .for_each(|(o, (x, y))| *o = x ^ y);
    }
}

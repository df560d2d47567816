//! Bit-Reversal Graph (Catena-Dragonfly).

use zeroize::Zeroizing;

use super::super::helper::CatenaHelper;
use super::super::memory::MemoryArray;
use crate::hash::{Digest, FastHash};

/// Reverses the low `bits` bits of `i`.
///
/// `bits == 0` maps every index to 0. The mapping is an involution on
/// `0..2^bits`.
#[inline]
pub fn reverse_bits(i: u64, bits: u8) -> u64 {
    if bits == 0 {
        return 0;
    }

    i.reverse_bits() >> (64 - u32::from(bits))
}

/// Memory-hard function over the Bit-Reversal Graph.
///
/// Every layer starts by rehashing vertex 0 with full strength from the last
/// and first vertex. Even layers then walk `i = 1..c` writing
/// `r[rev(i)] = H'(previous || r[rev(i)])`; odd layers walk the vertices in
/// order writing `r[i] = H'(r[i-1] || r[i])`. The output is `r[c-1]`.
pub(crate) fn bit_reversal_graph<D: Digest, F: FastHash>(
    helper: &mut CatenaHelper<'_, D, F>,
    r: &mut MemoryArray,
    garlic: u8,
    lambda: u8,
    h: &mut [u8],
) {
    let c = 1usize << garlic;
    let mut previous = Zeroizing::new(vec![0u8; helper.h_len()]);

    for layer in 0..lambda {
        let hash = helper.h_first(r.vertex(c - 1), r.vertex(0));
        r.vertex_mut(0).copy_from_slice(hash);
        helper.reset_fast();

        if layer % 2 == 0 {
            previous.copy_from_slice(r.vertex(0));

            for i in 1..c {
                let j = reverse_bits(i as u64, garlic) as usize;
                let hash = helper.hash_fast(i as u64, &previous, r.vertex(j));
                previous.copy_from_slice(hash);
                r.vertex_mut(j).copy_from_slice(&previous);
            }
        } else {
            for i in 1..c {
                helper.hash_fast_vertex(i as u64, r, i - 1, i, i);
            }
        }
    }

    h.copy_from_slice(r.vertex(c - 1));
}

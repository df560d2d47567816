//! Double-Butterfly Graph (Catena-Butterfly).

use zeroize::Zeroizing;

use super::super::helper::CatenaHelper;
use super::super::memory::MemoryArray;
use crate::hash::{Digest, FastHash};

/// Maps a (row, column) of the graph onto the rotating three-slot buffer.
///
/// Rows cycle through three slots: `[0, c)`, `[c, c + m) ∪ [0, m)` and
/// `[m, c + m)`, so consecutive rows never overlap while the buffer holds only
/// `c + m` vertices. `carry` shifts the slot sequence between layers.
#[derive(Clone, Copy, Debug)]
struct RowLayout {
    c: usize,
    m: usize,
}

impl RowLayout {
    #[inline]
    fn index(&self, row: usize, col: usize, carry: usize) -> usize {
        match (row + carry) % 3 {
            0 => col,
            1 if col < self.m => col + self.c,
            1 => col - self.m,
            _ => col + self.m,
        }
    }
}

/// Butterfly edge from row `i` into row `i + 1`.
///
/// The first `g` rows flip bit `g-1-i` of the column (front diagonal), the
/// remaining rows flip bit `i-(g-1)` (back diagonal).
#[inline]
fn sigma(garlic: u8, i: usize, j: usize) -> usize {
    let g = usize::from(garlic);

    if i < g {
        j ^ (1 << (g - 1 - i))
    } else {
        j ^ (1 << (i - (g - 1)))
    }
}

/// Memory-hard function over the Double-Butterfly Graph.
///
/// For each of `lambda` layers and each row `i = 1..2g`:
///
/// ```text
/// r[i][0] = H_First(r[i-1][c-1] ⊕ r[i-1][0], r[i-1][σ(i-1, 0)])
/// r[i][j] = H'(r[i][j-1] ⊕ r[i-1][j], r[i-1][σ(i-1, j)])
/// ```
///
/// The output is the last column of the last row.
pub(crate) fn double_butterfly_graph<D: Digest, F: FastHash>(
    helper: &mut CatenaHelper<'_, D, F>,
    r: &mut MemoryArray,
    garlic: u8,
    lambda: u8,
    h: &mut [u8],
) {
    let c = 1usize << garlic;
    let layout = RowLayout { c, m: c / 2 };
    let rows = 2 * usize::from(garlic);

    let mut tmp = Zeroizing::new(vec![0u8; helper.h_len()]);
    let mut carry = 0;

    for _ in 0..lambda {
        for i in 1..rows {
            let idx = |row, col| layout.index(row, col, carry);

            r.xor_into(idx(i - 1, c - 1), idx(i - 1, 0), &mut tmp);
            let hash = helper.h_first(&tmp, r.vertex(idx(i - 1, sigma(garlic, i - 1, 0))));
            r.vertex_mut(idx(i, 0)).copy_from_slice(hash);
            helper.reset_fast();

            for j in 1..c {
                r.xor_into(idx(i, j - 1), idx(i - 1, j), &mut tmp);
                let hash =
                    helper.hash_fast(j as u64, &tmp, r.vertex(idx(i - 1, sigma(garlic, i - 1, j))));
                r.vertex_mut(idx(i, j)).copy_from_slice(hash);
            }
        }

        // the last row of this layer becomes row 0 of the next
        carry = (carry + rows.saturating_sub(1)) % 3;
    }

    h.copy_from_slice(r.vertex(layout.index(0, c - 1, carry)));
}

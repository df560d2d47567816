//! Memory-hard graph functions F.
//!
//! Catena is instantiated with one of two graph topologies:
//!
//! - **Bit-Reversal Graph** (Catena-Dragonfly): `lambda` alternating passes
//!   over `2^g` vertices, in bit-reversed and then sequential order.
//! - **Double-Butterfly Graph** (Catena-Butterfly): `2g - 1` rows of a
//!   stacked butterfly network per layer, computed in a rotating three-slot
//!   buffer of `1.5 * 2^g` vertices.
//!
//! Both read and overwrite the whole memory array and write the final vertex
//! into the state `x`.

mod brg;
mod dbg;

use super::helper::CatenaHelper;
use super::memory::MemoryArray;
use super::params::CatenaParams;
use crate::hash::{Digest, FastHash};

pub use brg::reverse_bits;

/// Graph topology of a Catena instance.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum Topology {
    /// Bit-Reversal Graph, the "Dragonfly" instances.
    BitReversal,
    /// Double-Butterfly Graph, the "Butterfly" instances.
    DoubleButterfly,
}

impl Topology {
    /// Instance name of the topology.
    pub const fn name(self) -> &'static str {
        match self {
            Topology::BitReversal => "Dragonfly",
            Topology::DoubleButterfly => "Butterfly",
        }
    }

    /// Version identifier `V` folded into the initial hash.
    ///
    /// The `-Full` suffix marks instances that use the full digest for every
    /// vertex instead of a round-reduced fast hash.
    pub const fn version_id(self, fast: bool) -> &'static str {
        match (self, fast) {
            (Topology::BitReversal, true) => "Dragonfly",
            (Topology::BitReversal, false) => "Dragonfly-Full",
            (Topology::DoubleButterfly, true) => "Butterfly",
            (Topology::DoubleButterfly, false) => "Butterfly-Full",
        }
    }

    /// Recommended cost parameters for the topology.
    pub const fn default_params(self) -> CatenaParams {
        match self {
            Topology::BitReversal => CatenaParams::dragonfly_default(),
            Topology::DoubleButterfly => CatenaParams::butterfly_default(),
        }
    }

    /// Runs the graph function over `r` and writes its output vertex to `h`.
    pub(crate) fn apply<D: Digest, F: FastHash>(
        self,
        helper: &mut CatenaHelper<'_, D, F>,
        r: &mut MemoryArray,
        garlic: u8,
        lambda: u8,
        h: &mut [u8],
    ) {
        match self {
            Topology::BitReversal => brg::bit_reversal_graph(helper, r, garlic, lambda, h),
            Topology::DoubleButterfly => dbg::double_butterfly_graph(helper, r, garlic, lambda, h),
        }
    }
}

//! Per-tile search records and the candidate-heap entry.

use std::cmp::Ordering;

use empire_core::TileIndex;

// ── SearchNode ────────────────────────────────────────────────────────────────

/// One tile's pathfinding record.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct SearchNode {
    pub tile: TileIndex,

    /// Tile this node was most cheaply reached from; `TileIndex::INVALID`
    /// for the source.
    pub predecessor: TileIndex,

    /// Path cost from the source.
    pub g: u32,

    /// Manhattan distance to the destination, fixed at creation.
    pub h: u32,

    /// `g + h`; `None` until the node is first reached.
    pub f: Option<u32>,
}

impl SearchNode {
    /// A node not yet reached from anywhere.
    pub fn new(tile: TileIndex, h: u32) -> Self {
        Self { tile, predecessor: TileIndex::INVALID, g: 0, h, f: None }
    }

    /// The search root: `g = 0`, `f = h`, no predecessor.
    pub fn source(tile: TileIndex, h: u32) -> Self {
        Self { tile, predecessor: TileIndex::INVALID, g: 0, h, f: Some(h) }
    }

    /// Offer a path arriving from `from` whose cost there is `from_g`.
    ///
    /// Adopts it and returns `true` if it is cheaper than what the node
    /// already holds (or the node is fresh).
    pub fn relax(&mut self, from: TileIndex, from_g: u32) -> bool {
        let g = from_g + 1;
        let f = g + self.h;
        match self.f {
            Some(current) if f >= current => false,
            _ => {
                self.g = g;
                self.f = Some(f);
                self.predecessor = from;
                true
            }
        }
    }

    #[inline]
    pub fn has_predecessor(&self) -> bool {
        self.predecessor.is_valid()
    }
}

// ── Candidate ─────────────────────────────────────────────────────────────────

/// Heap entry for the candidate set.
///
/// Several entries for one tile may coexist; only the tile's record in the
/// pathfinder's tables is authoritative.  Entries that surface after their
/// tile was finalized are discarded on pop.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub(crate) struct Candidate {
    pub f:    u32,
    pub h:    u32,
    pub tile: TileIndex,
}

// `BinaryHeap` is a max-heap: order so the smallest `f` (then smallest `h`)
// compares greatest.  The tile is a final key so `Ord` agrees with `Eq`.
impl Ord for Candidate {
    fn cmp(&self, other: &Self) -> Ordering {
        other
            .f
            .cmp(&self.f)
            .then_with(|| other.h.cmp(&self.h))
            .then_with(|| other.tile.cmp(&self.tile))
    }
}

impl PartialOrd for Candidate {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

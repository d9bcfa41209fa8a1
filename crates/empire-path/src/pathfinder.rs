//! Budgeted, resumable A* search between two tiles.
//!
//! # Per-node step
//!
//! ```text
//! pop cheapest candidate (f, then h)      ── none left → Unreachable
//!   already finalized?  → discard, pop again
//!   finalize
//!   destination?        → Found
//!   for each on-map cardinal neighbor not yet finalized:
//!     legal move?  (buildable or road, and predecessor → here → neighbor
//!                   passes the host's connectivity check)
//!     relax g = here.g + 1; if cheaper, push a candidate
//! ```
//!
//! Duplicate candidates for one tile are allowed; `BinaryHeap` has no
//! decrease-key, so stale entries are dropped when they surface instead.
//!
//! Step cost is uniform and the heuristic is Manhattan distance, which is
//! consistent on a 4-neighbor grid: a finalized node never improves, so it
//! is never reopened.

use std::collections::BinaryHeap;

use rustc_hash::FxHashMap;
use tracing::{debug, info};

use empire_core::{MapSize, TileIndex, TileOffset};
use empire_world::World;

use crate::node::{Candidate, SearchNode};
use crate::{Route, RouteIter};

/// Progress of one search.  `Found` and `Unreachable` are terminal.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum SearchStatus {
    InProgress,
    Found,
    Unreachable,
}

impl SearchStatus {
    #[inline]
    pub fn is_terminal(self) -> bool {
        !matches!(self, SearchStatus::InProgress)
    }
}

/// A* search for one `(source, destination)` pair.
pub struct Pathfinder {
    map:         MapSize,
    source:      TileIndex,
    destination: TileIndex,
    status:      SearchStatus,

    /// Priority index over `pending`; may hold stale duplicates.
    candidates: BinaryHeap<Candidate>,

    /// Authoritative records of reached but not yet finalized tiles.
    pending: FxHashMap<TileIndex, SearchNode>,

    /// Records of finalized tiles.  Disjoint from `pending`.
    finalized: FxHashMap<TileIndex, SearchNode>,

    /// Tiles finalized so far, over all `advance` calls.
    expanded: u64,
}

impl Pathfinder {
    /// Start a search.  The source is seeded as the only candidate.
    pub fn new(map: MapSize, source: TileIndex, destination: TileIndex) -> Self {
        let root = SearchNode::source(source, map.manhattan(source, destination));
        let mut candidates = BinaryHeap::new();
        candidates.push(Candidate { f: root.h, h: root.h, tile: source });

        let mut pending = FxHashMap::default();
        pending.insert(source, root);

        Self {
            map,
            source,
            destination,
            status: SearchStatus::InProgress,
            candidates,
            pending,
            finalized: FxHashMap::default(),
            expanded: 0,
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    #[inline]
    pub fn status(&self) -> SearchStatus {
        self.status
    }

    #[inline]
    pub fn source(&self) -> TileIndex {
        self.source
    }

    #[inline]
    pub fn destination(&self) -> TileIndex {
        self.destination
    }

    /// Tiles finalized so far.
    #[inline]
    pub fn nodes_expanded(&self) -> u64 {
        self.expanded
    }

    #[inline]
    pub fn is_finalized(&self, tile: TileIndex) -> bool {
        self.finalized.contains_key(&tile)
    }

    /// Number of entries in the candidate heap, stale duplicates included.
    #[inline]
    pub fn candidate_count(&self) -> usize {
        self.candidates.len()
    }

    /// Walk of the found route, destination first.  `None` unless `Found`.
    pub fn route(&self) -> Option<RouteIter<'_>> {
        (self.status == SearchStatus::Found)
            .then(|| RouteIter::new(&self.finalized, self.destination))
    }

    /// Give up the search state and keep only the found route.
    pub fn into_route(self) -> Option<Route> {
        (self.status == SearchStatus::Found)
            .then(|| Route::new(self.finalized, self.source, self.destination))
    }

    // ── Search ────────────────────────────────────────────────────────────

    /// Finalize at most `max_nodes` tiles, then report the status.
    ///
    /// Once the status is terminal this is a no-op.  Discarding a stale
    /// duplicate does not count against the budget.
    pub fn advance<W: World + ?Sized>(&mut self, world: &W, max_nodes: u32) -> SearchStatus {
        if self.status.is_terminal() {
            return self.status;
        }

        let mut processed = 0u32;
        while processed < max_nodes {
            let Some(current) = self.pop_cheapest() else {
                self.status = SearchStatus::Unreachable;
                info!(
                    source = %self.source,
                    destination = %self.destination,
                    expanded = self.expanded,
                    "destination unreachable",
                );
                break;
            };
            processed += 1;

            self.finalize(current);

            if current.tile == self.destination {
                self.status = SearchStatus::Found;
                info!(
                    source = %self.source,
                    destination = %self.destination,
                    length = current.g + 1,
                    expanded = self.expanded,
                    "route found",
                );
                break;
            }

            self.expand(world, &current);
        }

        debug!(
            processed,
            candidates = self.candidates.len(),
            status = ?self.status,
            "pathfinder advanced",
        );
        self.status
    }

    /// Pop the cheapest live candidate, dropping stale duplicates.
    fn pop_cheapest(&mut self) -> Option<SearchNode> {
        while let Some(candidate) = self.candidates.pop() {
            if self.finalized.contains_key(&candidate.tile) {
                continue;
            }
            if let Some(node) = self.pending.remove(&candidate.tile) {
                return Some(node);
            }
        }
        None
    }

    fn finalize(&mut self, node: SearchNode) {
        let previous = self.finalized.insert(node.tile, node);
        debug_assert!(previous.is_none(), "{} finalized twice", node.tile);
        self.expanded += 1;
    }

    fn expand<W: World + ?Sized>(&mut self, world: &W, current: &SearchNode) {
        for offset in TileOffset::CARDINALS {
            let Some(next) = self.map.offset(current.tile, offset) else {
                continue;
            };
            if self.finalized.contains_key(&next) || !is_legal_move(world, current, next) {
                continue;
            }

            let h = self.map.manhattan(next, self.destination);
            let node = self
                .pending
                .entry(next)
                .or_insert_with(|| SearchNode::new(next, h));

            if node.relax(current.tile, current.g) {
                if let Some(f) = node.f {
                    self.candidates.push(Candidate { f, h: node.h, tile: next });
                }
            }
        }
    }
}

/// Can a road continue from `current` onto `next`?
///
/// The source has no predecessor, so only the terrain of `next` is checked
/// on the first step.
pub fn is_legal_move<W: World + ?Sized>(world: &W, current: &SearchNode, next: TileIndex) -> bool {
    if !(world.is_buildable(next) || world.has_road(next)) {
        return false;
    }
    !current.has_predecessor() || world.connectivity_legal(current.tile, current.predecessor, next) > 0
}

//! Found routes and their traversal.

use rustc_hash::FxHashMap;

use empire_core::{MapSize, TileIndex};

use crate::SearchNode;

// ── RouteIter ─────────────────────────────────────────────────────────────────

/// Walks predecessor links from the destination back to the source,
/// yielding each tile once.  Finite; call `iter()` again to restart.
#[derive(Clone)]
pub struct RouteIter<'a> {
    nodes: &'a FxHashMap<TileIndex, SearchNode>,
    next:  Option<TileIndex>,
}

impl<'a> RouteIter<'a> {
    pub(crate) fn new(nodes: &'a FxHashMap<TileIndex, SearchNode>, destination: TileIndex) -> Self {
        Self { nodes, next: Some(destination) }
    }
}

impl Iterator for RouteIter<'_> {
    type Item = TileIndex;

    fn next(&mut self) -> Option<TileIndex> {
        let tile = self.next?;
        self.next = self
            .nodes
            .get(&tile)
            .map(|n| n.predecessor)
            .filter(|p| p.is_valid());
        Some(tile)
    }
}

// ── Route ─────────────────────────────────────────────────────────────────────

/// A completed route: the finalized-node table of a successful search.
///
/// The tile sequence is never materialized; [`iter`](Self::iter) and
/// [`step`](Self::step) follow predecessor links on demand.
#[derive(Clone, Debug)]
pub struct Route {
    nodes:       FxHashMap<TileIndex, SearchNode>,
    source:      TileIndex,
    destination: TileIndex,
}

impl Route {
    pub(crate) fn new(
        nodes:       FxHashMap<TileIndex, SearchNode>,
        source:      TileIndex,
        destination: TileIndex,
    ) -> Self {
        Self { nodes, source, destination }
    }

    /// Build a route from an explicit tile sequence, source first.
    ///
    /// Useful for hosts that already know the path and for tests.
    /// `None` if `tiles` is empty, leaves `map`, repeats a tile, or has two
    /// consecutive tiles that do not share an edge.
    pub fn from_tiles(map: MapSize, tiles: &[TileIndex]) -> Option<Self> {
        let (&source, _) = tiles.split_first()?;
        let destination = *tiles.last()?;
        let mut nodes = FxHashMap::default();
        let mut predecessor = TileIndex::INVALID;
        for (g, &tile) in tiles.iter().enumerate() {
            if !map.contains(tile) {
                return None;
            }
            if predecessor.is_valid() && !map.are_adjacent(predecessor, tile) {
                return None;
            }
            let node = SearchNode {
                tile,
                predecessor,
                g: g as u32,
                h: 0,
                f: Some(g as u32),
            };
            if nodes.insert(tile, node).is_some() {
                return None;
            }
            predecessor = tile;
        }
        Some(Self { nodes, source, destination })
    }

    #[inline]
    pub fn source(&self) -> TileIndex {
        self.source
    }

    #[inline]
    pub fn destination(&self) -> TileIndex {
        self.destination
    }

    /// Tiles on the route, both endpoints included.
    pub fn len(&self) -> usize {
        self.nodes
            .get(&self.destination)
            .map_or(0, |n| n.g as usize + 1)
    }

    /// Always `false` for a route produced by a search.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Destination-to-source traversal.
    pub fn iter(&self) -> RouteIter<'_> {
        RouteIter::new(&self.nodes, self.destination)
    }

    /// The tile after `tile` in traversal order (its predecessor), or `None`
    /// past the source.
    pub fn step(&self, tile: TileIndex) -> Option<TileIndex> {
        self.nodes
            .get(&tile)
            .map(|n| n.predecessor)
            .filter(|p| p.is_valid())
    }
}

impl<'a> IntoIterator for &'a Route {
    type Item = TileIndex;
    type IntoIter = RouteIter<'a>;

    fn into_iter(self) -> RouteIter<'a> {
        self.iter()
    }
}

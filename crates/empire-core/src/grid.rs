//! Grid addressing: `(x, y)` coordinates ↔ linear [`TileIndex`].
//!
//! Tiles are numbered row-major, `index = y * width + x`.  Offsets are kept
//! as signed `(dx, dy)` pairs; [`MapSize::offset`] bounds-checks both axes so a step off the east edge
//! never wraps onto the next row.

use std::fmt;

use crate::TileIndex;

// ── TileOffset ────────────────────────────────────────────────────────────────

/// A signed 2-D step between tiles.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TileOffset {
    pub dx: i32,
    pub dy: i32,
}

impl TileOffset {
    /// The four axis-aligned neighbor offsets, in expansion order:
    /// +x, −x, +y, −y.
    pub const CARDINALS: [TileOffset; 4] = [
        TileOffset { dx: 1,  dy: 0 },
        TileOffset { dx: -1, dy: 0 },
        TileOffset { dx: 0,  dy: 1 },
        TileOffset { dx: 0,  dy: -1 },
    ];

    #[inline]
    pub const fn new(dx: i32, dy: i32) -> Self {
        Self { dx, dy }
    }

    /// Manhattan length of the step.
    #[inline]
    pub fn length(self) -> u32 {
        self.dx.unsigned_abs() + self.dy.unsigned_abs()
    }
}

impl fmt::Display for TileOffset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "({:+}, {:+})", self.dx, self.dy)
    }
}

// ── MapSize ───────────────────────────────────────────────────────────────────

/// Dimensions of the tile grid.  Cheap to copy; holds no tile data.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MapSize {
    pub width:  u32,
    pub height: u32,
}

impl MapSize {
    #[inline]
    pub const fn new(width: u32, height: u32) -> Self {
        Self { width, height }
    }

    /// Total number of tiles.
    #[inline]
    pub fn tile_count(self) -> usize {
        self.width as usize * self.height as usize
    }

    /// Linear index of `(x, y)`.  The caller guarantees `x < width`,
    /// `y < height`; use [`try_tile_index`](Self::try_tile_index) otherwise.
    #[inline]
    pub fn tile_index(self, x: u32, y: u32) -> TileIndex {
        debug_assert!(x < self.width && y < self.height, "({x}, {y}) off map");
        TileIndex(y * self.width + x)
    }

    /// Bounds-checked [`tile_index`](Self::tile_index).
    pub fn try_tile_index(self, x: i64, y: i64) -> Option<TileIndex> {
        if x < 0 || y < 0 || x >= self.width as i64 || y >= self.height as i64 {
            return None;
        }
        Some(TileIndex(y as u32 * self.width + x as u32))
    }

    /// `(x, y)` of `tile`.
    #[inline]
    pub fn coords(self, tile: TileIndex) -> (u32, u32) {
        (tile.0 % self.width, tile.0 / self.width)
    }

    #[inline]
    pub fn contains(self, tile: TileIndex) -> bool {
        tile.is_valid() && (tile.0 as usize) < self.tile_count()
    }

    /// The tile reached from `tile` by `offset`, or `None` if it leaves the map.
    pub fn offset(self, tile: TileIndex, offset: TileOffset) -> Option<TileIndex> {
        let (x, y) = self.coords(tile);
        self.try_tile_index(x as i64 + offset.dx as i64, y as i64 + offset.dy as i64)
    }

    /// The step from `from` to `to`.
    pub fn delta(self, from: TileIndex, to: TileIndex) -> TileOffset {
        let (fx, fy) = self.coords(from);
        let (tx, ty) = self.coords(to);
        TileOffset::new(tx as i32 - fx as i32, ty as i32 - fy as i32)
    }

    /// `true` if `a` and `b` share an edge.
    #[inline]
    pub fn are_adjacent(self, a: TileIndex, b: TileIndex) -> bool {
        self.delta(a, b).length() == 1
    }

    /// Manhattan distance between two tiles.
    #[inline]
    pub fn manhattan(self, a: TileIndex, b: TileIndex) -> u32 {
        self.delta(a, b).length()
    }

    /// Iterator over the on-map axis-aligned neighbors of `tile`, in
    /// [`TileOffset::CARDINALS`] order.
    pub fn neighbors(self, tile: TileIndex) -> impl Iterator<Item = TileIndex> {
        TileOffset::CARDINALS
            .into_iter()
            .filter_map(move |o| self.offset(tile, o))
    }

    /// Every tile on the map, in index order.
    pub fn tiles(self) -> impl Iterator<Item = TileIndex> {
        (0..self.tile_count() as u32).map(TileIndex)
    }
}

impl fmt::Display for MapSize {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}x{}", self.width, self.height)
    }
}

//! Records of construction calls made against a world.

use empire_core::TileIndex;

/// A single construction primitive invocation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ConstructionAction {
    /// Road piece joining two adjacent tiles.
    Road { from: TileIndex, to: TileIndex },

    /// Passenger station on `tile`, entered from `front`.
    Station { tile: TileIndex, front: TileIndex },

    /// Road vehicle depot on `tile`, entered from `front`.
    Depot { tile: TileIndex, front: TileIndex },
}

/// What became of a [`ConstructionAction`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Built,
    Suspended,
    Rejected(&'static str),
}

impl Outcome {
    #[inline]
    pub fn is_built(self) -> bool {
        matches!(self, Outcome::Built)
    }
}

/// One committed (non-dry-run) construction call and its result.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ConstructionEvent {
    pub action:  ConstructionAction,
    pub outcome: Outcome,
}

//! Per-tile terrain model of [`GridWorld`](crate::GridWorld).

use empire_core::TileIndex;

/// What occupies a tile.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Terrain {
    /// Empty land; buildable unless steep.
    #[default]
    Clear,
    Water,
    /// A town house.  Never buildable; generates passengers.
    House,
    Road,
    /// Station whose entrance faces `front`.
    Station { front: TileIndex },
    /// Depot whose entrance faces `front`.
    Depot { front: TileIndex },
}

/// Land shape of a tile.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Slope {
    #[default]
    Flat,
    /// Inclined along the x axis; roads may only run straight east–west.
    InclinedX,
    /// Inclined along the y axis; roads may only run straight north–south.
    InclinedY,
    /// Too steep for any road.
    Steep,
}

/// One map tile.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tile {
    pub terrain:    Terrain,
    pub slope:      Slope,
    /// Monthly passengers generated by this tile (houses only).
    pub passengers: u16,
}

impl Tile {
    /// Vacant land that accepts new construction.
    #[inline]
    pub fn is_buildable(&self) -> bool {
        self.terrain == Terrain::Clear && self.slope != Slope::Steep
    }

    #[inline]
    pub fn has_road(&self) -> bool {
        self.terrain == Terrain::Road
    }

    /// The entrance tile of a station or depot.
    #[inline]
    pub fn front(&self) -> Option<TileIndex> {
        match self.terrain {
            Terrain::Station { front } | Terrain::Depot { front } => Some(front),
            _ => None,
        }
    }
}

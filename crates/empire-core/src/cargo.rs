//! Cargo classes and station catchment parameters used when asking the host
//! how much cargo a tile generates.

/// Cargo class of interest.  Only passengers are routed today.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[non_exhaustive]
pub enum CargoClass {
    #[default]
    Passengers,
    Mail,
}

impl CargoClass {
    pub fn as_str(self) -> &'static str {
        match self {
            CargoClass::Passengers => "passengers",
            CargoClass::Mail       => "mail",
        }
    }
}

impl std::fmt::Display for CargoClass {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Footprint and catchment radius of a prospective station, in tiles.
///
/// A query covers the rectangle `[x - radius, x + width - 1 + radius]` ×
/// `[y - radius, y + height - 1 + radius]`, clipped to the map.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct CoverageRadius {
    pub width:  u32,
    pub height: u32,
    pub radius: u32,
}

impl Default for CoverageRadius {
    /// A single-tile bus stop with a radius-3 catchment.
    fn default() -> Self {
        Self { width: 1, height: 1, radius: 3 }
    }
}

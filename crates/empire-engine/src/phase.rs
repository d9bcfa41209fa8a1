//! The controller's state value.

use std::fmt;

use empire_build::RoadBuilder;
use empire_core::TileIndex;
use empire_path::{Pathfinder, Route};

/// Where the controller is in its cycle, together with the component the
/// phase owns.  The component is dropped when the phase is left.
pub enum Phase {
    /// Fund and name the organization, then pick two endpoints.
    Init,
    /// Endpoints chosen; the search starts next tick.
    NewCargoRoute { from: TileIndex, to: TileIndex },
    /// Search in progress.
    FindPath(Pathfinder),
    /// Road construction in progress along the found route.
    BuildRoad(RoadBuilder),
    /// Road issued; stations and depot go up next tick.
    BuildStations(Route),
}

impl Phase {
    pub fn kind(&self) -> PhaseKind {
        match self {
            Phase::Init                   => PhaseKind::Init,
            Phase::NewCargoRoute { .. }   => PhaseKind::NewCargoRoute,
            Phase::FindPath(_)            => PhaseKind::FindPath,
            Phase::BuildRoad(_)           => PhaseKind::BuildRoad,
            Phase::BuildStations(_)       => PhaseKind::BuildStations,
        }
    }
}

impl fmt::Debug for Phase {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Phase::NewCargoRoute { from, to } => f
                .debug_struct("NewCargoRoute")
                .field("from", from)
                .field("to", to)
                .finish(),
            Phase::FindPath(search) => f
                .debug_struct("FindPath")
                .field("status", &search.status())
                .field("nodes_expanded", &search.nodes_expanded())
                .field("candidates", &search.candidate_count())
                .finish(),
            Phase::BuildRoad(builder) => f
                .debug_struct("BuildRoad")
                .field("segments_issued", &builder.segments_issued())
                .finish(),
            Phase::BuildStations(route) => f
                .debug_struct("BuildStations")
                .field("route_len", &route.len())
                .finish(),
            Phase::Init => f.write_str("Init"),
        }
    }
}

/// Payload-free tag of a [`Phase`], handed to observers.
#[derive(Copy, Clone, PartialEq, Eq, Hash, Debug)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum PhaseKind {
    Init,
    NewCargoRoute,
    FindPath,
    BuildRoad,
    BuildStations,
}

impl fmt::Display for PhaseKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            PhaseKind::Init          => "Init",
            PhaseKind::NewCargoRoute => "NewCargoRoute",
            PhaseKind::FindPath      => "FindPath",
            PhaseKind::BuildRoad     => "BuildRoad",
            PhaseKind::BuildStations => "BuildStations",
        };
        f.write_str(name)
    }
}

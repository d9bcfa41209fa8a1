//! The phase controller.

use std::mem;

use tracing::{info, warn};

use empire_build::{RoadBuilder, StationBuilder, StationOutcome};
use empire_core::{EngineConfig, TileIndex};
use empire_path::{Pathfinder, SearchStatus};
use empire_world::{Tolerate, World};

use crate::{Phase, PhaseKind};

/// Running totals kept by the controller, one entry per completed step.
#[derive(Copy, Clone, PartialEq, Eq, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct EngineStats {
    /// Endpoint pairs handed to the pathfinder.
    pub routes_planned:      u64,
    /// Searches that ended `Unreachable`.
    pub routes_unreachable:  u64,
    /// Routes whose road was fully issued.
    pub roads_completed:     u64,
    /// Road segments the host did not build.
    pub segments_failed:     u64,
    /// Routes that got both stations and a depot issued.
    pub stations_built:      u64,
    /// Routes abandoned for lack of station or depot sites.
    pub stations_infeasible: u64,
    /// Init runs that could not find two distinct endpoints.
    pub endpoint_misses:     u64,
}

/// Finite state machine sequencing endpoint choice, search, road building
/// and station building.
///
/// Call [`update`](Self::update) once per tick; it runs the current phase's
/// step and moves to the next phase when that step completes.  The cycle
/// has no terminal state.
pub struct DecisionEngine {
    config: EngineConfig,
    phase:  Phase,
    stats:  EngineStats,
}

impl DecisionEngine {
    /// A controller in `Init`.  The config is assumed to be valid; see
    /// [`EmpireBuilder`](crate::EmpireBuilder).
    pub fn new(config: EngineConfig) -> Self {
        Self { config, phase: Phase::Init, stats: EngineStats::default() }
    }

    #[inline]
    pub fn phase(&self) -> &Phase {
        &self.phase
    }

    #[inline]
    pub fn phase_kind(&self) -> PhaseKind {
        self.phase.kind()
    }

    #[inline]
    pub fn stats(&self) -> &EngineStats {
        &self.stats
    }

    #[inline]
    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Run one step of the current phase against `world`.
    ///
    /// Returns the phase the controller was in before the step.
    pub fn update<W: World>(&mut self, world: &mut W) -> PhaseKind {
        let phase = mem::replace(&mut self.phase, Phase::Init);
        let before = phase.kind();

        self.phase = match phase {
            Phase::Init => self.init(world),

            Phase::NewCargoRoute { from, to } => {
                self.stats.routes_planned += 1;
                Phase::FindPath(Pathfinder::new(world.map_size(), from, to))
            }

            Phase::FindPath(search) => self.find_path(world, search),

            Phase::BuildRoad(builder) => self.build_road(world, builder),

            Phase::BuildStations(route) => {
                match StationBuilder::new(&route, self.config.passenger_radius).build(world) {
                    StationOutcome::Built { .. } => self.stats.stations_built += 1,
                    StationOutcome::Infeasible   => self.stats.stations_infeasible += 1,
                }
                Phase::Init
            }
        };

        let after = self.phase.kind();
        if after != before {
            info!(from = %before, to = %after, "phase transition");
        }
        before
    }

    // ── Phase steps ───────────────────────────────────────────────────────

    fn init<W: World>(&mut self, world: &mut W) -> Phase {
        world.grant_funds(self.config.starting_funds).tolerate("grant funds");
        world.set_organization_name(&self.config.company_name).tolerate("set company name");

        let Some((from, to)) = self.pick_endpoints(world) else {
            self.stats.endpoint_misses += 1;
            warn!(
                attempts = self.config.max_endpoint_attempts,
                "no second endpoint distinct from the first; retrying next tick",
            );
            return Phase::Init;
        };

        info!(
            from = %from,
            from_name = world.describe_location(from).as_deref().unwrap_or("-"),
            to = %to,
            to_name = world.describe_location(to).as_deref().unwrap_or("-"),
            "endpoints chosen",
        );
        Phase::NewCargoRoute { from, to }
    }

    fn pick_endpoints<W: World>(&self, world: &mut W) -> Option<(TileIndex, TileIndex)> {
        let from = world.pick_random_location();
        let to = (0..self.config.max_endpoint_attempts)
            .map(|_| world.pick_random_location())
            .find(|&to| to != from)?;
        Some((from, to))
    }

    fn find_path<W: World>(&mut self, world: &W, mut search: Pathfinder) -> Phase {
        match search.advance(world, self.config.nodes_per_tick) {
            SearchStatus::InProgress  => Phase::FindPath(search),
            SearchStatus::Unreachable => {
                self.stats.routes_unreachable += 1;
                Phase::Init
            }
            SearchStatus::Found => match search.into_route() {
                Some(route) => Phase::BuildRoad(RoadBuilder::new(route)),
                None        => Phase::Init,
            },
        }
    }

    fn build_road<W: World>(&mut self, world: &mut W, mut builder: RoadBuilder) -> Phase {
        let mut finished = false;
        for _ in 0..self.config.segments_per_tick {
            if builder.advance_segment(world) {
                finished = true;
                break;
            }
        }

        if finished || builder.is_finished() {
            self.stats.roads_completed += 1;
            self.stats.segments_failed += builder.segments_failed() as u64;
            Phase::BuildStations(builder.into_route())
        } else {
            Phase::BuildRoad(builder)
        }
    }
}

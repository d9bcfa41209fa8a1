//! Station and depot siting along a built route.
//!
//! # Selection policy
//!
//! Route tiles are scanned in traversal order; for each, the four cardinal
//! neighbors are probed.  A neighbor is a feasible *site* when it is vacant
//! and a dry run of "station here, facing the route tile, plus a road piece
//! linking them" succeeds.  Feasible sites are assigned in this order:
//!
//! 1. the first one whose route tile generates passengers → first station;
//! 2. otherwise, while no depot is chosen and a dry run of the depot
//!    succeeds there too → depot;
//! 3. any later one whose route tile generates passengers → second station
//!    (each such site replaces the previous choice, so the second station
//!    ends up as far along the route as possible).
//!
//! A tile already claimed by an earlier site is never reused.  If any of
//! the three sites is missing, nothing is built.

use tracing::info;

use empire_core::{CargoClass, CoverageRadius, TileIndex, TileOffset};
use empire_path::Route;
use empire_world::{Tolerate, World, WorldResult};

// ── Site & plan ───────────────────────────────────────────────────────────────

/// A building location next to the route.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct Site {
    /// Route tile the building faces.
    pub route_tile: TileIndex,
    /// Step from `route_tile` to `tile`.
    pub offset: TileOffset,
    /// Where the building goes.
    pub tile: TileIndex,
}

/// The three sites the builder needs.
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub struct SitePlan {
    pub first_station:  Site,
    pub depot:          Site,
    pub second_station: Site,
}

/// Result of [`StationBuilder::build`].
#[derive(Copy, Clone, PartialEq, Eq, Debug)]
pub enum StationOutcome {
    /// All construction was issued.  `failed` counts actions the host did
    /// not carry out; they are not rolled back.
    Built { plan: SitePlan, failed: usize },
    /// Fewer than three sites were found; nothing was issued.
    Infeasible,
}

// ── StationBuilder ────────────────────────────────────────────────────────────

/// One-shot builder for two passenger stations and a depot along a route.
pub struct StationBuilder<'a> {
    route:  &'a Route,
    radius: CoverageRadius,
}

impl<'a> StationBuilder<'a> {
    pub fn new(route: &'a Route, radius: CoverageRadius) -> Self {
        Self { route, radius }
    }

    /// Scan the route for sites.  Probes the host in test mode only.
    pub fn select_sites<W: World>(&self, world: &mut W) -> Option<SitePlan> {
        let map = world.map_size();
        let mut first: Option<Site> = None;
        let mut depot: Option<Site> = None;
        let mut second: Option<Site> = None;

        for route_tile in self.route.iter() {
            let mut provides_passengers: Option<bool> = None;

            for offset in TileOffset::CARDINALS {
                let Some(tile) = map.offset(route_tile, offset) else {
                    continue;
                };
                let claimed = [first, depot]
                    .iter()
                    .flatten()
                    .any(|s| s.tile == tile);
                let site = Site { route_tile, offset, tile };
                if claimed || !is_feasible_site(world, Building::Station, site) {
                    continue;
                }

                let passengers = *provides_passengers.get_or_insert_with(|| {
                    world.cargo_potential(route_tile, CargoClass::Passengers, self.radius) > 0
                });

                if first.is_none() && passengers {
                    first = Some(site);
                } else if depot.is_none() && is_feasible_site(world, Building::Depot, site) {
                    depot = Some(site);
                } else if passengers {
                    second = Some(site);
                }
            }
        }

        Some(SitePlan {
            first_station:  first?,
            depot:          depot?,
            second_station: second?,
        })
    }

    /// Select sites and, if all three exist, issue the construction:
    /// first station, second station, depot, each followed by the road piece
    /// joining it to the route.
    pub fn build<W: World>(&self, world: &mut W) -> StationOutcome {
        let Some(plan) = self.select_sites(world) else {
            info!(route_len = self.route.len(), "no room for stations and depot along route");
            return StationOutcome::Infeasible;
        };

        let mut failed = 0;
        let steps = [
            (plan.first_station, Building::Station, "first station"),
            (plan.second_station, Building::Station, "second station"),
            (plan.depot, Building::Depot, "depot"),
        ];
        for (site, building, what) in steps {
            if !building.place(world, site).tolerate(what) {
                failed += 1;
            }
            if !world.construct_road(site.tile, site.route_tile).tolerate("site link road") {
                failed += 1;
            }
        }

        info!(
            first = %plan.first_station.tile,
            second = %plan.second_station.tile,
            depot = %plan.depot.tile,
            failed,
            "stations and depot issued",
        );
        StationOutcome::Built { plan, failed }
    }
}

#[derive(Copy, Clone)]
enum Building {
    Station,
    Depot,
}

impl Building {
    fn place<W: World>(self, world: &mut W, site: Site) -> WorldResult<()> {
        match self {
            Building::Station => world.construct_station(site.tile, site.route_tile),
            Building::Depot   => world.construct_depot(site.tile, site.route_tile),
        }
    }
}

/// Vacant, and the host would accept `building` on the site plus the road
/// piece joining it to the route.
fn is_feasible_site<W: World>(world: &mut W, building: Building, site: Site) -> bool {
    world.is_buildable(site.tile)
        && world.dry_run(|w| {
            building.place(w, site).is_ok() && w.construct_road(site.tile, site.route_tile).is_ok()
        })
}

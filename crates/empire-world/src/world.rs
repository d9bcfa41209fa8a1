//! The `World` trait: everything the core asks of its host.

use empire_core::{CargoClass, CoverageRadius, MapSize, TileIndex};

use crate::WorldResult;

/// Host capabilities consumed by the pathfinder, the builders and the
/// decision engine.
///
/// Implementations are thin wrappers around the host's scripting API; they
/// hold no algorithmic state of their own.  [`GridWorld`](crate::GridWorld)
/// is an in-memory implementation used by tests and the demo.
///
/// # Test mode
///
/// While test mode is on, construction primitives must validate exactly as
/// they would for real and report the same result, but leave the world
/// untouched.  [`dry_run`](Self::dry_run) is the only sanctioned way to
/// toggle it.
///
/// # Example
///
/// ```rust,ignore
/// let feasible = world.dry_run(|w| w.construct_road(site, route_tile).is_ok());
/// ```
pub trait World {
    // ── Map & endpoints ───────────────────────────────────────────────────

    /// Dimensions of the tile grid.
    fn map_size(&self) -> MapSize;

    /// A random candidate endpoint (typically a town centre).
    fn pick_random_location(&mut self) -> TileIndex;

    /// Human-readable name for `tile`, if the host has one (e.g. a town name).
    ///
    /// Default: `None`.
    fn describe_location(&self, _tile: TileIndex) -> Option<String> {
        None
    }

    // ── Organization ──────────────────────────────────────────────────────

    fn grant_funds(&mut self, amount: u64) -> WorldResult<()>;

    fn set_organization_name(&mut self, name: &str) -> WorldResult<()>;

    // ── Queries ───────────────────────────────────────────────────────────

    /// Vacant land that accepts new construction.
    fn is_buildable(&self, tile: TileIndex) -> bool;

    fn has_road(&self, tile: TileIndex) -> bool;

    /// Monthly amount of `cargo` generated around `tile` within `radius`.
    fn cargo_potential(&self, tile: TileIndex, cargo: CargoClass, radius: CoverageRadius) -> i32;

    /// Whether a road may run `prev → target → next`.
    ///
    /// `> 0` legal, `0` illegal (slope, terrain), `< 0` invalid arguments
    /// (tiles not adjacent to `target`).
    fn connectivity_legal(&self, target: TileIndex, prev: TileIndex, next: TileIndex) -> i32;

    // ── Construction ──────────────────────────────────────────────────────

    /// Build a road piece joining two adjacent tiles.
    fn construct_road(&mut self, from: TileIndex, to: TileIndex) -> WorldResult<()>;

    /// Build a passenger station on `tile` with its entrance facing `front`.
    fn construct_station(&mut self, tile: TileIndex, front: TileIndex) -> WorldResult<()>;

    /// Build a road depot on `tile` with its entrance facing `front`.
    fn construct_depot(&mut self, tile: TileIndex, front: TileIndex) -> WorldResult<()>;

    /// Switch test mode on or off.  See the trait docs.
    fn set_test_mode(&mut self, enabled: bool);

    /// Evaluate `probe` with test mode on and return its verdict.
    ///
    /// Construction performed inside `probe` is validated but never committed.
    fn dry_run<F>(&mut self, probe: F) -> bool
    where
        F: FnOnce(&mut Self) -> bool,
        Self: Sized,
    {
        self.set_test_mode(true);
        let verdict = probe(self);
        self.set_test_mode(false);
        verdict
    }
}

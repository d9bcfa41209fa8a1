//! In-memory [`World`] over a rectangular tile grid, and its builder.
//!
//! # Rules
//!
//! - A tile is buildable when it is `Clear` and not `Steep`.
//! - A road piece may touch `Clear` or `Road` tiles, or a station/depot
//!   whose entrance faces the other end of the piece.  Inclined tiles only
//!   take pieces running along their axis; steep tiles take none.
//! - Stations and depots need a buildable tile and an adjacent front.
//!
//! Injected suspensions ([`GridWorld::suspend_next`]) are consumed by
//! committed construction calls only; dry runs never see them.

use empire_core::{
    CargoClass, CoreError, CoreResult, CoverageRadius, EmpireRng, MapSize, TileIndex, TownId,
};

use crate::{
    ConstructionAction, ConstructionEvent, Outcome, Slope, Terrain, Tile, World, WorldError,
    WorldResult,
};

// ── Town ──────────────────────────────────────────────────────────────────────

/// A named endpoint candidate.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Town {
    pub id:     TownId,
    pub name:   String,
    pub center: TileIndex,
}

// ── GridWorld ─────────────────────────────────────────────────────────────────

/// A self-contained host world.  Create via [`GridWorldBuilder`].
pub struct GridWorld {
    size:         MapSize,
    tiles:        Vec<Tile>,
    towns:        Vec<Town>,
    rng:          EmpireRng,
    test_mode:    bool,
    /// Committed construction calls still to be answered with `Suspended`.
    suspensions:  u32,
    log:          Vec<ConstructionEvent>,
    funds:        u64,
    company_name: Option<String>,
}

impl GridWorld {
    // ── Inspection ────────────────────────────────────────────────────────

    #[inline]
    pub fn tile(&self, tile: TileIndex) -> &Tile {
        &self.tiles[tile.index()]
    }

    pub fn towns(&self) -> &[Town] {
        &self.towns
    }

    /// Every committed construction call, in order, including failures.
    pub fn construction_log(&self) -> &[ConstructionEvent] {
        &self.log
    }

    /// Actions from the log that took effect.
    pub fn built(&self) -> impl Iterator<Item = ConstructionAction> + '_ {
        self.log
            .iter()
            .filter(|e| e.outcome.is_built())
            .map(|e| e.action)
    }

    pub fn funds(&self) -> u64 {
        self.funds
    }

    pub fn company_name(&self) -> Option<&str> {
        self.company_name.as_deref()
    }

    // ── Fault injection ───────────────────────────────────────────────────

    /// Answer the next `n` committed construction calls with
    /// [`WorldError::Suspended`].
    pub fn suspend_next(&mut self, n: u32) {
        self.suspensions = n;
    }

    // ── Validation ────────────────────────────────────────────────────────

    fn on_map(&self, tile: TileIndex) -> WorldResult<()> {
        if self.size.contains(tile) {
            Ok(())
        } else {
            Err(WorldError::Rejected("tile off map"))
        }
    }

    /// Can `tile` carry a road piece heading towards `other`?
    fn accepts_road(&self, tile: TileIndex, other: TileIndex) -> WorldResult<()> {
        let t = self.tile(tile);
        match t.terrain {
            Terrain::Clear | Terrain::Road => {}
            _ if t.front() == Some(other) => {}
            _ => return Err(WorldError::Rejected("tile occupied")),
        }
        let step = self.size.delta(tile, other);
        match t.slope {
            Slope::Flat => Ok(()),
            Slope::Steep => Err(WorldError::Rejected("slope too steep")),
            Slope::InclinedX if step.dy == 0 => Ok(()),
            Slope::InclinedY if step.dx == 0 => Ok(()),
            _ => Err(WorldError::Rejected("road must run along the slope")),
        }
    }

    fn validate_road(&self, from: TileIndex, to: TileIndex) -> WorldResult<()> {
        self.on_map(from)?;
        self.on_map(to)?;
        if !self.size.are_adjacent(from, to) {
            return Err(WorldError::Rejected("tiles not adjacent"));
        }
        self.accepts_road(from, to)?;
        self.accepts_road(to, from)
    }

    fn validate_building(&self, tile: TileIndex, front: TileIndex) -> WorldResult<()> {
        self.on_map(tile)?;
        self.on_map(front)?;
        if !self.size.are_adjacent(tile, front) {
            return Err(WorldError::Rejected("front not adjacent"));
        }
        if !self.tile(tile).is_buildable() {
            return Err(WorldError::Rejected("tile not buildable"));
        }
        Ok(())
    }

    /// Shared path for all construction primitives: validate, honour test
    /// mode and injected suspensions, then commit and log.
    fn construct<F>(
        &mut self,
        action:   ConstructionAction,
        validate: WorldResult<()>,
        commit:   F,
    ) -> WorldResult<()>
    where
        F: FnOnce(&mut Self),
    {
        if self.test_mode {
            return validate;
        }
        let result = if self.suspensions > 0 {
            self.suspensions -= 1;
            Err(WorldError::Suspended)
        } else {
            validate
        };
        let outcome = match &result {
            Ok(()) => {
                commit(self);
                Outcome::Built
            }
            Err(WorldError::Suspended)     => Outcome::Suspended,
            Err(WorldError::Rejected(why)) => Outcome::Rejected(*why),
        };
        self.log.push(ConstructionEvent { action, outcome });
        result
    }
}

impl World for GridWorld {
    fn map_size(&self) -> MapSize {
        self.size
    }

    /// A random town centre, or any random tile if the map has no towns.
    fn pick_random_location(&mut self) -> TileIndex {
        match self.rng.choose(&self.towns) {
            Some(town) => town.center,
            None => TileIndex(self.rng.gen_range(0..self.size.tile_count() as u32)),
        }
    }

    fn describe_location(&self, tile: TileIndex) -> Option<String> {
        self.towns
            .iter()
            .find(|t| t.center == tile)
            .map(|t| t.name.clone())
    }

    fn grant_funds(&mut self, amount: u64) -> WorldResult<()> {
        self.funds = self.funds.saturating_add(amount);
        Ok(())
    }

    fn set_organization_name(&mut self, name: &str) -> WorldResult<()> {
        self.company_name = Some(name.to_owned());
        Ok(())
    }

    fn is_buildable(&self, tile: TileIndex) -> bool {
        self.size.contains(tile) && self.tile(tile).is_buildable()
    }

    fn has_road(&self, tile: TileIndex) -> bool {
        self.size.contains(tile) && self.tile(tile).has_road()
    }

    fn cargo_potential(&self, tile: TileIndex, cargo: CargoClass, radius: CoverageRadius) -> i32 {
        if !self.size.contains(tile) {
            return 0;
        }
        let (x, y) = self.size.coords(tile);
        let x0 = x.saturating_sub(radius.radius);
        let y0 = y.saturating_sub(radius.radius);
        let x1 = x
            .saturating_add(radius.width.max(1) - 1)
            .saturating_add(radius.radius)
            .min(self.size.width - 1);
        let y1 = y
            .saturating_add(radius.height.max(1) - 1)
            .saturating_add(radius.radius)
            .min(self.size.height - 1);

        let mut total: i32 = 0;
        for ty in y0..=y1 {
            for tx in x0..=x1 {
                let passengers = self.tile(self.size.tile_index(tx, ty)).passengers;
                total = total.saturating_add(passengers as i32);
            }
        }
        match cargo {
            CargoClass::Passengers => total,
            // Houses post roughly one bag of mail per four passengers.
            _ => total / 4,
        }
    }

    fn connectivity_legal(&self, target: TileIndex, prev: TileIndex, next: TileIndex) -> i32 {
        let map = self.size;
        if !map.contains(target) || !map.contains(prev) || !map.contains(next) {
            return -1;
        }
        if prev == next || !map.are_adjacent(target, prev) || !map.are_adjacent(target, next) {
            return -1;
        }
        let in_step = map.delta(prev, target);
        let out_step = map.delta(target, next);
        let straight = in_step == out_step;
        match self.tile(target).slope {
            Slope::Flat => 1,
            Slope::Steep => 0,
            Slope::InclinedX if straight && out_step.dy == 0 => 1,
            Slope::InclinedY if straight && out_step.dx == 0 => 1,
            _ => 0,
        }
    }

    fn construct_road(&mut self, from: TileIndex, to: TileIndex) -> WorldResult<()> {
        let validate = self.validate_road(from, to);
        self.construct(ConstructionAction::Road { from, to }, validate, |w| {
            for t in [from, to] {
                let tile = &mut w.tiles[t.index()];
                if tile.terrain == Terrain::Clear {
                    tile.terrain = Terrain::Road;
                }
            }
        })
    }

    fn construct_station(&mut self, tile: TileIndex, front: TileIndex) -> WorldResult<()> {
        let validate = self.validate_building(tile, front);
        self.construct(ConstructionAction::Station { tile, front }, validate, |w| {
            w.tiles[tile.index()].terrain = Terrain::Station { front };
        })
    }

    fn construct_depot(&mut self, tile: TileIndex, front: TileIndex) -> WorldResult<()> {
        let validate = self.validate_building(tile, front);
        self.construct(ConstructionAction::Depot { tile, front }, validate, |w| {
            w.tiles[tile.index()].terrain = Terrain::Depot { front };
        })
    }

    fn set_test_mode(&mut self, enabled: bool) {
        self.test_mode = enabled;
    }
}

// ── GridWorldBuilder ──────────────────────────────────────────────────────────

/// Incremental builder for [`GridWorld`].
///
/// Starts from an all-`Clear`, all-`Flat` map.  Coordinates passed to the
/// setters must lie on the map.
///
/// # Example
///
/// ```rust,ignore
/// let world = GridWorldBuilder::new(32, 32)
///     .seed(7)
///     .town("Springfield", 4, 4)
///     .town("Shelbyville", 27, 20)
///     .house(5, 4, 40)
///     .water_rect(10, 0, 12, 25)
///     .build()?;
/// ```
pub struct GridWorldBuilder {
    size:  MapSize,
    tiles: Vec<Tile>,
    towns: Vec<Town>,
    seed:  u64,
}

impl GridWorldBuilder {
    pub fn new(width: u32, height: u32) -> Self {
        let size = MapSize::new(width, height);
        Self {
            size,
            tiles: vec![Tile::default(); size.tile_count()],
            towns: Vec::new(),
            seed:  0,
        }
    }

    /// Seed for [`World::pick_random_location`].
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = seed;
        self
    }

    fn at(&mut self, x: u32, y: u32) -> &mut Tile {
        let t = self.size.tile_index(x, y);
        &mut self.tiles[t.index()]
    }

    pub fn terrain(mut self, x: u32, y: u32, terrain: Terrain) -> Self {
        self.at(x, y).terrain = terrain;
        self
    }

    pub fn slope(mut self, x: u32, y: u32, slope: Slope) -> Self {
        self.at(x, y).slope = slope;
        self
    }

    pub fn road(self, x: u32, y: u32) -> Self {
        self.terrain(x, y, Terrain::Road)
    }

    pub fn water(self, x: u32, y: u32) -> Self {
        self.terrain(x, y, Terrain::Water)
    }

    /// Fill the inclusive rectangle `(x0, y0)..=(x1, y1)` with water.
    pub fn water_rect(mut self, x0: u32, y0: u32, x1: u32, y1: u32) -> Self {
        for y in y0..=y1 {
            for x in x0..=x1 {
                self.at(x, y).terrain = Terrain::Water;
            }
        }
        self
    }

    /// A house generating `passengers` per month.
    pub fn house(mut self, x: u32, y: u32, passengers: u16) -> Self {
        let tile = self.at(x, y);
        tile.terrain = Terrain::House;
        tile.passengers = passengers;
        self
    }

    /// Register a town whose centre is a flat road tile at `(x, y)`.
    pub fn town(mut self, name: &str, x: u32, y: u32) -> Self {
        let center = self.size.tile_index(x, y);
        let tile = self.at(x, y);
        tile.terrain = Terrain::Road;
        tile.slope = Slope::Flat;
        let id = TownId(self.towns.len() as u16);
        self.towns.push(Town { id, name: name.to_owned(), center });
        self
    }

    /// Validate dimensions and produce the world.
    pub fn build(self) -> CoreResult<GridWorld> {
        if self.size.width == 0 || self.size.height == 0 {
            return Err(CoreError::Config(format!("map must not be empty, got {}", self.size)));
        }
        if self.towns.len() >= TownId::INVALID.index() {
            return Err(CoreError::Config("too many towns".into()));
        }
        Ok(GridWorld {
            size:         self.size,
            tiles:        self.tiles,
            towns:        self.towns,
            rng:          EmpireRng::new(self.seed),
            test_mode:    false,
            suspensions:  0,
            log:          Vec::new(),
            funds:        0,
            company_name: None,
        })
    }
}

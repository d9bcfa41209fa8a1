//! Fluent builder for constructing an [`Empire`].

use empire_core::{EngineConfig, Tick};
use empire_world::World;

use crate::{DecisionEngine, Empire, EngineError, EngineResult};

/// Fluent builder for [`Empire<W>`].
///
/// # Optional inputs (have defaults)
///
/// | Method            | Default                    |
/// |-------------------|----------------------------|
/// | `.config(c)`      | `EngineConfig::default()`  |
/// | `.start_tick(t)`  | `Tick::ZERO`               |
///
/// # Example
///
/// ```rust,ignore
/// let mut empire = EmpireBuilder::new(world)
///     .config(config)
///     .build()?;
/// empire.run_ticks(500, &mut NoopObserver);
/// ```
pub struct EmpireBuilder<W: World> {
    world:      W,
    config:     Option<EngineConfig>,
    start_tick: Tick,
}

impl<W: World> EmpireBuilder<W> {
    pub fn new(world: W) -> Self {
        Self { world, config: None, start_tick: Tick::ZERO }
    }

    pub fn config(mut self, config: EngineConfig) -> Self {
        self.config = Some(config);
        self
    }

    /// Tick number of the first callback, for hosts that attach mid-game.
    pub fn start_tick(mut self, tick: Tick) -> Self {
        self.start_tick = tick;
        self
    }

    /// Validate the config and the world, and return an `Empire` in `Init`.
    pub fn build(self) -> EngineResult<Empire<W>> {
        let config = self.config.unwrap_or_default();
        config.validate()?;

        if self.world.map_size().tile_count() == 0 {
            return Err(EngineError::EmptyMap);
        }

        Ok(Empire {
            world:  self.world,
            engine: DecisionEngine::new(config),
            now:    self.start_tick,
        })
    }
}

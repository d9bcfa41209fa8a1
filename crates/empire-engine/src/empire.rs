//! `Empire`: a world plus the controller that acts on it.

use empire_core::Tick;
use empire_world::World;

use crate::{DecisionEngine, EngineObserver, EngineStats, PhaseKind};

/// The agent bound to its host.
///
/// Owns the world handle and the [`DecisionEngine`], and counts ticks.  The
/// host calls [`tick`](Self::tick) once per scheduling callback.
///
/// Create via [`EmpireBuilder`][crate::EmpireBuilder].
pub struct Empire<W: World> {
    pub(crate) world:  W,
    pub(crate) engine: DecisionEngine,
    pub(crate) now:    Tick,
}

impl<W: World> Empire<W> {
    /// Run one controller step and advance the tick counter.
    pub fn tick<O: EngineObserver>(&mut self, observer: &mut O) {
        let now = self.now;
        observer.on_tick_start(now, self.engine.phase_kind());

        let before = self.engine.update(&mut self.world);
        let after = self.engine.phase_kind();
        if after != before {
            observer.on_phase_change(now, before, after);
        }

        observer.on_tick_end(now, self.engine.stats());
        self.now = now.next();
    }

    /// Run exactly `n` ticks from the current position.
    pub fn run_ticks<O: EngineObserver>(&mut self, n: u64, observer: &mut O) {
        for _ in 0..n {
            self.tick(observer);
        }
    }

    // ── Accessors ─────────────────────────────────────────────────────────

    /// The next tick to run.
    #[inline]
    pub fn current_tick(&self) -> Tick {
        self.now
    }

    #[inline]
    pub fn phase(&self) -> PhaseKind {
        self.engine.phase_kind()
    }

    #[inline]
    pub fn stats(&self) -> &EngineStats {
        self.engine.stats()
    }

    pub fn engine(&self) -> &DecisionEngine {
        &self.engine
    }

    pub fn world(&self) -> &W {
        &self.world
    }

    pub fn world_mut(&mut self) -> &mut W {
        &mut self.world
    }

    /// Tear down, handing the world back.
    pub fn into_world(self) -> W {
        self.world
    }
}

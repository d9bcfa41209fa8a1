//! Observer trait for progress reporting and test instrumentation.

use empire_core::Tick;

use crate::{EngineStats, PhaseKind};

/// Callbacks invoked by [`Empire::tick`][crate::Empire::tick].
///
/// All methods have default no-op implementations so implementors only need
/// to override what they care about.
///
/// # Example — transition printer
///
/// ```rust,ignore
/// struct Printer;
///
/// impl EngineObserver for Printer {
///     fn on_phase_change(&mut self, tick: Tick, from: PhaseKind, to: PhaseKind) {
///         println!("{tick}: {from} -> {to}");
///     }
/// }
/// ```
pub trait EngineObserver {
    /// Called before the controller runs, with the phase about to run.
    fn on_tick_start(&mut self, _tick: Tick, _phase: PhaseKind) {}

    /// Called when a tick's step moved the controller to a new phase.
    fn on_phase_change(&mut self, _tick: Tick, _from: PhaseKind, _to: PhaseKind) {}

    /// Called after the controller ran, with the running totals.
    fn on_tick_end(&mut self, _tick: Tick, _stats: &EngineStats) {}
}

/// An [`EngineObserver`] that does nothing.
pub struct NoopObserver;

impl EngineObserver for NoopObserver {}

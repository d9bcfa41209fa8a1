//! gridworld — drive the empire agent on a synthetic valley map.
//!
//! Usage: `gridworld [config.json]`.  Without an argument the default
//! `EngineConfig` is used.  Set `RUST_LOG=debug` to watch the search and
//! the road builder tick by tick.

mod world;

use std::collections::BTreeMap;
use std::time::Instant;

use anyhow::{Context, Result};
use tracing::info;
use tracing_subscriber::EnvFilter;

use empire_core::{EngineConfig, Tick};
use empire_engine::{EmpireBuilder, EngineObserver, EngineStats, PhaseKind};
use empire_world::{Outcome, World};

use world::build_world;

// ── Constants ─────────────────────────────────────────────────────────────────

const TOTAL_TICKS: u64 = 2_000;

// ── Observer ──────────────────────────────────────────────────────────────────

/// Counts ticks spent in each phase and completed cycles.
#[derive(Default)]
struct PhaseTally {
    ticks:  BTreeMap<String, u64>,
    cycles: u64,
}

impl EngineObserver for PhaseTally {
    fn on_tick_start(&mut self, _tick: Tick, phase: PhaseKind) {
        *self.ticks.entry(phase.to_string()).or_default() += 1;
    }

    fn on_phase_change(&mut self, tick: Tick, from: PhaseKind, to: PhaseKind) {
        if to == PhaseKind::Init && from != PhaseKind::Init {
            self.cycles += 1;
            info!(%tick, cycles = self.cycles, "cycle complete");
        }
    }
}

// ── main ──────────────────────────────────────────────────────────────────────

fn load_config() -> Result<EngineConfig> {
    let Some(path) = std::env::args().nth(1) else {
        return Ok(EngineConfig::default());
    };
    let text = std::fs::read_to_string(&path)
        .with_context(|| format!("reading config file {path}"))?;
    let config = serde_json::from_str(&text)
        .with_context(|| format!("parsing config file {path}"))?;
    Ok(config)
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = load_config()?;
    println!("=== gridworld — empire route-building agent ===");
    println!(
        "Map: {}x{}  |  Ticks: {TOTAL_TICKS}  |  Budgets: {} nodes, {} segments per tick",
        world::WIDTH,
        world::HEIGHT,
        config.nodes_per_tick,
        config.segments_per_tick,
    );
    println!();

    let world = build_world(config.seed)?;
    let mut empire = EmpireBuilder::new(world).config(config).build()?;
    let mut tally = PhaseTally::default();

    let t0 = Instant::now();
    empire.run_ticks(TOTAL_TICKS, &mut tally);
    let elapsed = t0.elapsed();

    // ── Summary ───────────────────────────────────────────────────────────
    println!("Run complete in {:.3} s, {} cycles", elapsed.as_secs_f64(), tally.cycles);
    println!();
    println!("{:<16} {:>8}", "Phase", "Ticks");
    println!("{}", "-".repeat(25));
    for (phase, ticks) in &tally.ticks {
        println!("{phase:<16} {ticks:>8}");
    }
    println!();

    let world = empire.world();
    let mut outcomes: BTreeMap<&str, usize> = BTreeMap::new();
    for event in world.construction_log() {
        let key = match event.outcome {
            Outcome::Built        => "built",
            Outcome::Suspended    => "suspended",
            Outcome::Rejected(_)  => "rejected",
        };
        *outcomes.entry(key).or_default() += 1;
    }
    let roads = world
        .map_size()
        .tiles()
        .filter(|&t| world.has_road(t))
        .count();
    println!("Construction calls: {outcomes:?}");
    println!("Road tiles on map:  {roads}");
    println!("Company funds:      {}", world.funds());
    println!();

    let stats: &EngineStats = empire.stats();
    println!("{}", serde_json::to_string_pretty(stats)?);

    Ok(())
}

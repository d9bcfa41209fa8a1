//! `empire-engine` — the phase controller that turns the pathfinder and the
//! builders into an agent.
//!
//! # Phase cycle
//!
//! ```text
//! Init ──► NewCargoRoute ──► FindPath ─┬─► BuildRoad ──► BuildStations ──► Init
//!  ▲                           ▲   │   │      ▲   │
//!  │                           └───┘   │      └───┘
//!  └──────── unreachable ──────────────┘
//! ```
//!
//! Exactly one phase runs per tick.  `FindPath` expands at most
//! `nodes_per_tick` search nodes and `BuildRoad` issues at most
//! `segments_per_tick` road pieces, so the work done in a tick is bounded
//! whatever the map or route size.
//!
//! # Quick-start
//!
//! ```rust,ignore
//! use empire_core::EngineConfig;
//! use empire_engine::{EmpireBuilder, NoopObserver};
//!
//! let mut empire = EmpireBuilder::new(world)
//!     .config(EngineConfig::default())
//!     .build()?;
//! empire.run_ticks(1_000, &mut NoopObserver);
//! ```

pub mod builder;
pub mod empire;
pub mod engine;
pub mod error;
pub mod observer;
pub mod phase;


pub use builder::EmpireBuilder;
pub use empire::Empire;
pub use engine::{DecisionEngine, EngineStats};
pub use error::{EngineError, EngineResult};
pub use observer::{EngineObserver, NoopObserver};
pub use phase::{Phase, PhaseKind};

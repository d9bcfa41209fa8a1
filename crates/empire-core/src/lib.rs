//! `empire-core` — foundational types for the empire route-building agent.
//!
//! This crate is a dependency of every other `empire-*` crate.  It has no
//! `empire-*` dependencies and minimal external ones (only `rand` and
//! `thiserror`, plus optional `serde`).
//!
//! # What lives here
//!
//! | Module          | Contents                                              |
//! |-----------------|-------------------------------------------------------|
//! | [`ids`]         | `TileIndex`, `TownId`                                 |
//! | [`grid`]        | `MapSize` grid addressing, `TileOffset`               |
//! | [`cargo`]       | `CargoClass`, `CoverageRadius`                        |
//! | [`time`]        | `Tick`                                                |
//! | [`rng`]         | `EmpireRng`                                           |
//! | [`config`]      | `EngineConfig` (per-tick budgets, company settings)   |
//! | [`error`]       | `CoreError`, `CoreResult`                             |
//!
//! # Feature flags
//!
//! | Flag    | Effect                                                     |
//! |---------|------------------------------------------------------------|
//! | `serde` | Adds `Serialize`/`Deserialize` to all public types.        |

pub mod cargo;
pub mod config;
pub mod error;
pub mod grid;
pub mod ids;
pub mod rng;
pub mod time;


// ── Re-exports ────────────────────────────────────────────────────────────────

pub use cargo::{CargoClass, CoverageRadius};
pub use config::EngineConfig;
pub use error::{CoreError, CoreResult};
pub use grid::{MapSize, TileOffset};
pub use ids::{TileIndex, TownId};
pub use rng::EmpireRng;
pub use time::Tick;

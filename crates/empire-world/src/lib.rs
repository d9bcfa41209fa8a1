//! `empire-world` — the boundary between the route-building core and the
//! simulation that hosts it.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                        |
//! |----------------|-----------------------------------------------------------------|
//! | [`world`]      | `World` trait — queries, construction primitives, `dry_run`     |
//! | [`tile`]       | `Terrain`, `Slope`, `Tile` used by the in-memory world          |
//! | [`event`]      | `ConstructionAction`, `ConstructionEvent`, `Outcome`            |
//! | [`grid_world`] | `GridWorld`, `GridWorldBuilder` — in-memory host                |
//! | [`error`]      | `WorldError`, `WorldResult<T>`, `Tolerate`                      |
//!
//! # Design notes
//!
//! Queries (`is_buildable`, `has_road`, `cargo_potential`,
//! `connectivity_legal`) are infallible.  Mutations return
//! [`WorldResult`]; the host may answer [`WorldError::Suspended`] when it
//! cannot act right now.  The core never escalates either error variant: it
//! calls [`Tolerate::tolerate`] at the call site, logs, and carries on.

pub mod error;
pub mod event;
pub mod grid_world;
pub mod tile;
pub mod world;


pub use error::{Tolerate, WorldError, WorldResult};
pub use event::{ConstructionAction, ConstructionEvent, Outcome};
pub use grid_world::{GridWorld, GridWorldBuilder, Town};
pub use tile::{Slope, Terrain, Tile};
pub use world::World;

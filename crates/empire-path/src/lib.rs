//! `empire-path` — resumable A* over the host's tile grid.
//!
//! # Crate layout
//!
//! | Module         | Contents                                                  |
//! |----------------|-----------------------------------------------------------|
//! | [`node`]       | `SearchNode` (per-tile record), heap `Candidate`          |
//! | [`pathfinder`] | `Pathfinder`, `SearchStatus`                              |
//! | [`route`]      | `Route` (owned result), `RouteIter` (destination → source)|
//!
//! # Incremental search
//!
//! A [`Pathfinder`] serves one `(source, destination)` pair.  Each call to
//! [`Pathfinder::advance`] finalizes at most `max_nodes` tiles and returns;
//! all search state stays in the instance so the next tick resumes exactly
//! where the last one stopped.
//!
//! Node records live in two tables keyed by [`TileIndex`](empire_core::TileIndex),
//! and predecessors are stored as tile indices rather than references, so a
//! finished search can be handed on as a [`Route`] without copying.

pub mod node;
pub mod pathfinder;
pub mod route;

#[cfg(test)]
mod tests;

pub use node::SearchNode;
pub use pathfinder::{Pathfinder, SearchStatus};
pub use route::{Route, RouteIter};

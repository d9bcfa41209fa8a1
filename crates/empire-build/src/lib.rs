//! `empire-build` — turn a found [`Route`](empire_path::Route) into
//! infrastructure.
//!
//! # Crate layout
//!
//! | Module      | Contents                                                      |
//! |-------------|---------------------------------------------------------------|
//! | [`road`]    | `RoadBuilder` — one road segment per call along a route       |
//! | [`station`] | `StationBuilder`, `SitePlan`, `Site`, `StationOutcome`        |
//!
//! Both builders swallow host errors at the call site (see
//! [`empire_world::Tolerate`]); neither ever fails the caller.

pub mod road;
pub mod station;


pub use road::RoadBuilder;
pub use station::{Site, SitePlan, StationBuilder, StationOutcome};

//! Engine configuration.
//!
//! Typically built with [`EngineConfig::default`] and tweaked, or loaded from
//! JSON by the application crate (with the `serde` feature).

use crate::{CoreError, CoreResult, CoverageRadius};

/// Settings for the phase controller and the host-facing Init phase.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(default))]
pub struct EngineConfig {
    /// Candidate pops the pathfinder may process per tick.  Default: 100.
    pub nodes_per_tick: u32,

    /// Road segments the route builder may issue per tick.  Default: 2.
    pub segments_per_tick: u32,

    /// Name given to the organization on every Init.
    pub company_name: String,

    /// Funds requested from the host on every Init.
    pub starting_funds: u64,

    /// Re-draws allowed while looking for a second endpoint distinct from the
    /// first.  When exhausted, Init is retried on the next tick.
    pub max_endpoint_attempts: u32,

    /// Catchment used when asking whether a route tile generates passengers.
    pub passenger_radius: CoverageRadius,

    /// Seed for hosts that pick endpoints with an [`EmpireRng`](crate::EmpireRng).
    pub seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            nodes_per_tick:        100,
            segments_per_tick:     2,
            company_name:          "Empire Transport".to_owned(),
            starting_funds:        100_000_000,
            max_endpoint_attempts: 64,
            passenger_radius:      CoverageRadius::default(),
            seed:                  0,
        }
    }
}

impl EngineConfig {
    /// Reject settings that would stall the engine forever.
    pub fn validate(&self) -> CoreResult<()> {
        if self.nodes_per_tick == 0 {
            return Err(CoreError::Config("nodes_per_tick must be at least 1".into()));
        }
        if self.segments_per_tick == 0 {
            return Err(CoreError::Config("segments_per_tick must be at least 1".into()));
        }
        if self.max_endpoint_attempts == 0 {
            return Err(CoreError::Config("max_endpoint_attempts must be at least 1".into()));
        }
        if self.company_name.trim().is_empty() {
            return Err(CoreError::Config("company_name must not be empty".into()));
        }
        Ok(())
    }
}

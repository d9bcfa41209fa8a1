//! Scheduler tick counter.
//!
//! The host calls the agent once per tick; nothing in the core measures wall
//! time.  Budgets are expressed per tick (see [`EngineConfig`](crate::EngineConfig)).

use std::fmt;

/// An absolute tick counter, advanced by one for every host callback.
#[derive(Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash, Debug, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Tick(pub u64);

impl Tick {
    pub const ZERO: Tick = Tick(0);

    /// The tick after `self`.
    #[inline]
    pub fn next(self) -> Tick {
        Tick(self.0 + 1)
    }
}

impl fmt::Display for Tick {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "T{}", self.0)
    }
}

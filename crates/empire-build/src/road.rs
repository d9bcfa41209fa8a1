//! Incremental road construction along a route.

use tracing::{debug, info};

use empire_core::TileIndex;
use empire_path::Route;
use empire_world::{Tolerate, World};

/// Builds a [`Route`] one segment per [`advance_segment`](Self::advance_segment)
/// call, so the caller can spread the work over ticks.
///
/// Two cursors walk the route in traversal order (destination → source).
/// Both start on the first tile; the first call moves `current` one step
/// ahead, and every segment then moves both.
pub struct RoadBuilder {
    route:    Route,
    previous: Option<TileIndex>,
    current:  Option<TileIndex>,
    /// Segments issued to the host, whatever their outcome.
    issued:   usize,
    /// Segments the host reported as not built.
    failed:   usize,
}

impl RoadBuilder {
    pub fn new(route: Route) -> Self {
        let first = route.iter().next();
        Self { route, previous: first, current: first, issued: 0, failed: 0 }
    }

    /// Issue the next road segment.
    ///
    /// Returns `true` once the whole route has been issued; that call (and
    /// every later one) issues nothing.  A segment the host suspends or
    /// rejects is still counted as issued and is not retried.
    pub fn advance_segment<W: World + ?Sized>(&mut self, world: &mut W) -> bool {
        if self.current == self.previous {
            self.current = self.current.and_then(|t| self.route.step(t));
        }

        let (Some(previous), Some(current)) = (self.previous, self.current) else {
            return true;
        };

        if !world.construct_road(previous, current).tolerate("road segment") {
            self.failed += 1;
        }
        self.issued += 1;
        debug!(from = %previous, to = %current, issued = self.issued, "road segment issued");

        self.previous = Some(current);
        self.current = self.route.step(current);
        if self.current.is_none() {
            info!(segments = self.issued, failed = self.failed, "road construction complete");
        }
        false
    }

    /// `true` if the next [`advance_segment`](Self::advance_segment) would
    /// report completion without issuing anything.
    pub fn is_finished(&self) -> bool {
        let next = if self.current == self.previous {
            self.current.and_then(|t| self.route.step(t))
        } else {
            self.current
        };
        self.previous.is_none() || next.is_none()
    }

    /// Segments issued so far.
    pub fn segments_issued(&self) -> usize {
        self.issued
    }

    /// Segments the host reported as built.
    pub fn segments_built(&self) -> usize {
        self.issued - self.failed
    }

    /// Segments the host did not build.
    pub fn segments_failed(&self) -> usize {
        self.failed
    }

    pub fn route(&self) -> &Route {
        &self.route
    }

    /// Hand the route on (to the station builder).
    pub fn into_route(self) -> Route {
        self.route
    }
}

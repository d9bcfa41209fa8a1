//! World-boundary error type.

use thiserror::Error;
use tracing::warn;

/// Why a world-mutation primitive had no effect.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum WorldError {
    /// The host deferred the operation; it may succeed if retried later.
    #[error("operation suspended by host")]
    Suspended,

    /// The host refused the operation outright.
    #[error("operation rejected: {0}")]
    Rejected(&'static str),
}

pub type WorldResult<T> = Result<T, WorldError>;

/// Swallow a world error at its call site.
///
/// Neither variant is fatal to the agent: the effect simply did not happen
/// this call.  Returns `true` when the operation took effect.
pub trait Tolerate {
    fn tolerate(self, action: &str) -> bool;
}

impl Tolerate for WorldResult<()> {
    fn tolerate(self, action: &str) -> bool {
        match self {
            Ok(()) => true,
            Err(e) => {
                warn!(action, error = %e, "world operation had no effect");
                false
            }
        }
    }
}

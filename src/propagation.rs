use chrono::NaiveDateTime;
use thiserror::Error;

use crate::location::{GeodeticPosition, GroundLocation};
use crate::passes::Pass;

/// Precision setting for a propagation backend instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PrecisionMode {
    /// Cheap approximate propagation, for coarse screening
    Fast,
    /// Full accuracy propagation. Prediction operations use this.
    Precise,
}

/// Raised by propagation backends. Never constructed nor caught in this
/// crate: backends report them, callers decide recovery.
#[derive(Debug, Error)]
pub enum PropagationError {
    /// The two line element text was rejected by the backend.
    #[error("malformed element set: {0}")]
    MalformedElements(String),
    /// The numerical propagation failed to converge.
    #[error("propagation diverged: {0}")]
    Diverged(String),
    /// Requested instant lies outside the backend validity range.
    #[error("date out of range: {0}")]
    OutOfRange(NaiveDateTime),
}

/// External orbit propagation backend (SGP4/SDP4 or equivalent).
/// Implement this trait to wrap a propagation library; the raw two line
/// text is opaque to the calling crate and only interpreted here.
pub trait PropagationEngine {
    type Predictor: Predictor;
    /// Wraps raw two line element text into a fresh propagation handle
    /// configured for the given precision. Every call yields an
    /// independent instance scoped to the caller: no caching.
    fn load(&self, lines: &str, mode: PrecisionMode)
        -> Result<Self::Predictor, PropagationError>;
}

/// Propagation handle bound to exactly one element set and one
/// precision mode.
///
/// Instants cross this boundary as naive UTC: backends carry no
/// timezone information.
pub trait Predictor {
    /// Lazily produced pass sequence, in non decreasing time order.
    type Passes: Iterator<Item = Result<Pass, PropagationError>>;
    /// Geodetic position at the given instant.
    fn position_at(&self, t: NaiveDateTime) -> Result<GeodeticPosition, PropagationError>;
    /// Passes over `location` starting at or after `start`, ordered by
    /// time of closest approach. Consumes the handle: pass search is a
    /// terminal operation.
    fn passes_from(self, location: &GroundLocation, start: NaiveDateTime) -> Self::Passes;
}

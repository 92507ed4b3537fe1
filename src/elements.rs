use chrono::{DateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::satellite::SatelliteId;

/// Orbital element snapshot ("TLE") recorded for a satellite.
/// Most accurate at its epoch, degrading with temporal distance.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct ElementSet {
    /// Owning satellite
    pub(crate) sat: SatelliteId,
    /// Instant this snapshot describes best
    pub(crate) epoch: DateTime<Utc>,
    /// Raw two line encoding, handed to the propagation backend untouched
    pub(crate) lines: String,
}

impl ElementSet {
    /// Builds a new snapshot from its raw two line encoding.
    /// The text is not parsed nor validated here: the propagation
    /// backend is its only consumer and rejects it on use.
    pub fn new(sat: SatelliteId, epoch: DateTime<Utc>, lines: impl Into<String>) -> Self {
        Self {
            sat,
            epoch,
            lines: lines.into(),
        }
    }
    /// Owning satellite
    pub fn satellite(&self) -> SatelliteId {
        self.sat
    }
    /// Instant this snapshot describes best
    pub fn epoch(&self) -> DateTime<Utc> {
        self.epoch
    }
    /// Raw two line encoding
    pub fn lines(&self) -> &str {
        &self.lines
    }
}

/// Implement this trait to expose a satellite's element history.
/// Epochs are compared directly: storage order does not matter and
/// duplicate epochs are allowed.
pub trait ElementStore {
    /// Element set with the greatest epoch at or before `t`.
    fn latest_at(&self, t: DateTime<Utc>) -> Option<&ElementSet>;
    /// Element set with the smallest epoch strictly after `t`.
    fn earliest_after(&self, t: DateTime<Utc>) -> Option<&ElementSet>;
    /// Element set with the greatest epoch overall.
    fn latest(&self) -> Option<&ElementSet>;
    /// True when no element set is recorded.
    fn is_empty(&self) -> bool;
}

impl ElementStore for [ElementSet] {
    fn latest_at(&self, t: DateTime<Utc>) -> Option<&ElementSet> {
        self.iter()
            .filter(|set| set.epoch <= t)
            .max_by_key(|set| set.epoch)
    }
    fn earliest_after(&self, t: DateTime<Utc>) -> Option<&ElementSet> {
        self.iter()
            .filter(|set| set.epoch > t)
            .min_by_key(|set| set.epoch)
    }
    fn latest(&self) -> Option<&ElementSet> {
        self.iter().max_by_key(|set| set.epoch)
    }
    fn is_empty(&self) -> bool {
        self.first().is_none()
    }
}

use std::fmt;

use chrono::{DateTime, Duration, Utc};
use itertools::Itertools;
use log::debug;
use thiserror::Error;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::elements::{ElementSet, ElementStore};
use crate::location::GroundLocation;
use crate::passes::PassesOver;
use crate::propagation::{PrecisionMode, PropagationEngine, PropagationError};
use crate::select::select_closest;
use crate::track::GroundTrack;

/// Default ground track sampling step [s]
const DEFAULT_TRACK_STEP_SECONDS: i64 = 60;

/// Errors raised while orchestrating predictions.
#[derive(Debug, Error)]
pub enum Error {
    /// Predictions require at least one recorded element set.
    /// No fallback prediction exists: this is a usage error.
    #[error("satellite {0} has no element sets")]
    NoElements(SatelliteId),
    /// Forwarded untouched from the propagation backend.
    #[error(transparent)]
    Propagation(#[from] PropagationError),
}

/// Satellite catalog identity (NORAD number).
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct SatelliteId(pub u32);

impl fmt::Display for SatelliteId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// A tracked satellite and its recorded element history.
///
/// Element sets are ingested externally and recorded as they arrive:
/// no order is assumed. All prediction operations require a non empty
/// history and build their own backend instance, scoped to the call.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Satellite {
    id: SatelliteId,
    name: String,
    elements: Vec<ElementSet>,
}

impl Satellite {
    /// Builds a new satellite with an empty element history.
    pub fn new(id: SatelliteId, name: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            elements: Vec::new(),
        }
    }
    /// Catalog identity
    pub fn id(&self) -> SatelliteId {
        self.id
    }
    /// Display name
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Records an externally ingested element snapshot.
    pub fn record(&mut self, set: ElementSet) {
        self.elements.push(set);
    }
    /// Recorded element history, in storage order.
    pub fn elements(&self) -> &[ElementSet] {
        &self.elements
    }
    /// Recorded element history, in chronological order.
    pub fn history(&self) -> impl Iterator<Item = &ElementSet> {
        self.elements.iter().sorted_by_key(|set| set.epoch())
    }
    /// Most recent element set, if any.
    pub fn newest_elements(&self) -> Option<&ElementSet> {
        self.elements.latest()
    }

    /// Builds a propagation handle bound to the element set that
    /// minimizes prediction error for `for_date`, or to the latest
    /// known set when no date is given.
    ///
    /// Fails with [Error::NoElements] on an empty history, and
    /// forwards backend rejections of the element text untouched.
    pub fn predictor<E: PropagationEngine>(
        &self,
        engine: &E,
        for_date: Option<DateTime<Utc>>,
        mode: PrecisionMode,
    ) -> Result<E::Predictor, Error> {
        if self.elements.is_empty() {
            return Err(Error::NoElements(self.id));
        }
        let best = match for_date {
            Some(target) => select_closest(self.elements.as_slice(), target),
            None => self.elements.latest(),
        }
        // the history was checked non empty above
        .unwrap_or_else(|| panic!("selection over a non empty element history failed"));

        debug!(
            "{} - elements of {} selected ({:?} requested)",
            self.id,
            best.epoch(),
            for_date
        );
        Ok(engine.load(best.lines(), mode)?)
    }

    /// Samples the ground track over `[start, end]` every 60 seconds.
    /// See [Satellite::ground_track_with_step].
    pub fn ground_track<E: PropagationEngine>(
        &self,
        engine: &E,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<GroundTrack<E::Predictor>, Error> {
        self.ground_track_with_step(
            engine,
            start,
            end,
            Duration::seconds(DEFAULT_TRACK_STEP_SECONDS),
        )
    }

    /// Samples the ground track over `[start, end]`, both ends
    /// inclusive, advancing by `step` between samples.
    ///
    /// A single full precision predictor serves the whole interval,
    /// selected for the interval midpoint. An interval ending before
    /// it starts yields an empty track.
    pub fn ground_track_with_step<E: PropagationEngine>(
        &self,
        engine: &E,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        step: Duration,
    ) -> Result<GroundTrack<E::Predictor>, Error> {
        let center = start + (end - start) / 2;
        debug!(
            "{} - ground track {} -> {} (step {}s)",
            self.id,
            start,
            end,
            step.num_seconds()
        );
        let predictor = self.predictor(engine, Some(center), PrecisionMode::Precise)?;
        Ok(GroundTrack::new(predictor, start, end, step))
    }

    /// Enumerates visibility passes over `location` between `start`
    /// and `end`, ordered by time of closest approach.
    ///
    /// The search runs on the latest known element set, seeded at
    /// `start`, and terminates at the first pass losing signal after
    /// `end` without emitting it.
    pub fn passes_over<E: PropagationEngine>(
        &self,
        engine: &E,
        location: &GroundLocation,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Result<PassesOver<E::Predictor>, Error> {
        debug!(
            "{} - passes over {} within {} -> {}",
            self.id, location, start, end
        );
        let predictor = self.predictor(engine, None, PrecisionMode::Precise)?;
        Ok(PassesOver::new(predictor, location, start, end))
    }
}

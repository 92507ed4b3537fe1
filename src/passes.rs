use chrono::{DateTime, Duration, NaiveDateTime, Utc};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

use crate::location::GroundLocation;
use crate::propagation::{Predictor, PropagationError};

/// One visibility window of a satellite over a ground location.
///
/// Produced by the propagation backend and forwarded untouched.
/// Instants are naive UTC, like everything crossing the backend
/// boundary.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Pass {
    /// Acquisition of signal: the satellite rises above the horizon
    pub aos: NaiveDateTime,
    /// Time of closest approach
    pub tca: NaiveDateTime,
    /// Loss of signal: the satellite drops below the horizon
    pub los: NaiveDateTime,
    /// Elevation at closest approach [ddeg]
    pub max_elevation_deg: f64,
}

impl Pass {
    /// Visibility duration, AOS to LOS.
    pub fn duration(&self) -> Duration {
        self.los - self.aos
    }
}

/// Visibility passes over a fixed ground point, bounded by a search
/// window.
///
/// Wraps the backend native pass sequence and terminates at the first
/// pass losing signal past the window end. Backends yield passes in
/// non decreasing time order, so nothing after that pass can still fit.
pub struct PassesOver<P: Predictor> {
    passes: P::Passes,
    end: NaiveDateTime,
    done: bool,
}

impl<P: Predictor> PassesOver<P> {
    pub(crate) fn new(
        predictor: P,
        location: &GroundLocation,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
    ) -> Self {
        Self {
            passes: predictor.passes_from(location, start.naive_utc()),
            end: end.naive_utc(),
            done: false,
        }
    }
}

impl<P: Predictor> Iterator for PassesOver<P> {
    type Item = Result<Pass, PropagationError>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.done {
            return None;
        }
        match self.passes.next()? {
            Ok(pass) => {
                if pass.los > self.end {
                    self.done = true;
                    None
                } else {
                    Some(Ok(pass))
                }
            },
            Err(err) => {
                self.done = true;
                Some(Err(err))
            },
        }
    }
}

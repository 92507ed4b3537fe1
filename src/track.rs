use chrono::{DateTime, Duration, Utc};

use crate::location::GeodeticPosition;
use crate::propagation::{Predictor, PropagationError};

/// Fixed step ground track over a closed interval.
///
/// Samples are produced on demand, one backend call per step. The
/// backend only accepts naive UTC instants: each timestamp is converted
/// on the way in and the emitted sample pairs the position with the
/// original aware timestamp.
#[derive(Debug)]
pub struct GroundTrack<P: Predictor> {
    predictor: P,
    current: DateTime<Utc>,
    end: DateTime<Utc>,
    step: Duration,
    failed: bool,
}

impl<P: Predictor> GroundTrack<P> {
    pub(crate) fn new(
        predictor: P,
        start: DateTime<Utc>,
        end: DateTime<Utc>,
        step: Duration,
    ) -> Self {
        assert!(step > Duration::zero(), "sampling step must be positive");
        Self {
            predictor,
            current: start,
            end,
            step,
            failed: false,
        }
    }
}

impl<P: Predictor> Iterator for GroundTrack<P> {
    type Item = Result<(DateTime<Utc>, GeodeticPosition), PropagationError>;
    fn next(&mut self) -> Option<Self::Item> {
        if self.failed || self.current > self.end {
            return None;
        }
        let at = self.current;
        self.current = at + self.step;
        match self.predictor.position_at(at.naive_utc()) {
            Ok(position) => Some(Ok((at, position))),
            Err(err) => {
                self.failed = true;
                Some(Err(err))
            },
        }
    }
}

//! Test fixtures: a deterministic propagation backend plus canned
//! satellites, locations and passes.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use chrono::{DateTime, Duration, NaiveDateTime, TimeZone, Timelike, Utc};

use crate::prelude::*;

pub const SAT_ID: SatelliteId = SatelliteId(25544);

pub fn utc(y: i32, m: u32, d: u32, h: u32, min: u32, s: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(y, m, d, h, min, s).unwrap()
}

pub fn element_set(epoch: DateTime<Utc>, lines: &str) -> ElementSet {
    ElementSet::new(SAT_ID, epoch, lines)
}

pub fn satellite_with_epochs(epochs: &[DateTime<Utc>]) -> Satellite {
    let mut sat = Satellite::new(SAT_ID, "fixture");
    for epoch in epochs {
        sat.record(element_set(*epoch, &epoch.to_rfc3339()));
    }
    sat
}

pub fn svalbard() -> GroundLocation {
    GroundLocation::new("svalbard", 78.2297, 15.3975, 458.0)
}

/// Ten minute pass centered on `tca`.
pub fn pass_at(tca: DateTime<Utc>) -> Pass {
    Pass {
        aos: (tca - Duration::minutes(5)).naive_utc(),
        tca: tca.naive_utc(),
        los: (tca + Duration::minutes(5)).naive_utc(),
        max_elevation_deg: 45.0,
    }
}

/// Position encoding the requested instant, so tests can tell which
/// instant actually reached the backend.
pub fn position_for(t: NaiveDateTime) -> GeodeticPosition {
    GeodeticPosition {
        latitude_deg: f64::from(t.hour()),
        longitude_deg: f64::from(t.minute()),
        altitude_km: t.and_utc().timestamp() as f64,
    }
}

/// Deterministic propagation backend.
///
/// Element text starting with `!` is rejected on load. Each predictor
/// serves [position_for] positions and the engine's scripted pass
/// sequence, filtered to AOS at or after the search start. Loads and
/// position calls are recorded for inspection.
pub struct FakeEngine {
    passes: Vec<Pass>,
    fail_after: Option<NaiveDateTime>,
    loads: RefCell<Vec<(String, PrecisionMode)>>,
    positions: Rc<Cell<usize>>,
}

impl FakeEngine {
    pub fn new() -> Self {
        Self::with_passes(Vec::new())
    }
    pub fn with_passes(passes: Vec<Pass>) -> Self {
        Self {
            passes,
            fail_after: None,
            loads: RefCell::new(Vec::new()),
            positions: Rc::new(Cell::new(0)),
        }
    }
    /// Predictors will reject instants past `cutoff`.
    pub fn failing_after(mut self, cutoff: DateTime<Utc>) -> Self {
        self.fail_after = Some(cutoff.naive_utc());
        self
    }
    /// Element text loads recorded so far, oldest first.
    pub fn loads(&self) -> Vec<(String, PrecisionMode)> {
        self.loads.borrow().clone()
    }
    /// Number of position computations requested so far.
    pub fn positions_requested(&self) -> usize {
        self.positions.get()
    }
}

impl PropagationEngine for FakeEngine {
    type Predictor = FakePredictor;
    fn load(&self, lines: &str, mode: PrecisionMode) -> Result<FakePredictor, PropagationError> {
        if lines.starts_with('!') {
            return Err(PropagationError::MalformedElements(lines.to_string()));
        }
        self.loads.borrow_mut().push((lines.to_string(), mode));
        Ok(FakePredictor {
            passes: self.passes.clone(),
            fail_after: self.fail_after,
            positions: Rc::clone(&self.positions),
        })
    }
}

#[derive(Debug)]
pub struct FakePredictor {
    passes: Vec<Pass>,
    fail_after: Option<NaiveDateTime>,
    positions: Rc<Cell<usize>>,
}

impl Predictor for FakePredictor {
    type Passes = std::vec::IntoIter<Result<Pass, PropagationError>>;
    fn position_at(&self, t: NaiveDateTime) -> Result<GeodeticPosition, PropagationError> {
        self.positions.set(self.positions.get() + 1);
        match self.fail_after {
            Some(cutoff) if t > cutoff => Err(PropagationError::OutOfRange(t)),
            _ => Ok(position_for(t)),
        }
    }
    fn passes_from(self, _location: &GroundLocation, start: NaiveDateTime) -> Self::Passes {
        self.passes
            .into_iter()
            .filter(|pass| pass.aos >= start)
            .map(Ok)
            .collect::<Vec<_>>()
            .into_iter()
    }
}

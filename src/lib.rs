#![doc = include_str!("../README.md")]
#![cfg_attr(docrs, feature(doc_cfg))]

// private modules
mod elements;
mod location;
mod passes;
mod propagation;
mod satellite;
mod select;
mod track;

// pub export
pub use satellite::Error;

#[cfg(test)]
mod test_utils;

// prelude
pub mod prelude {
    pub use crate::elements::{ElementSet, ElementStore};
    pub use crate::location::{GeodeticPosition, GroundLocation};
    pub use crate::passes::{Pass, PassesOver};
    pub use crate::propagation::{PrecisionMode, Predictor, PropagationEngine, PropagationError};
    pub use crate::satellite::{Error, Satellite, SatelliteId};
    pub use crate::select::select_closest;
    pub use crate::track::GroundTrack;
    // re-export
    pub use chrono::{DateTime, Duration, NaiveDateTime, Utc};
}

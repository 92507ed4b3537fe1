use std::fmt;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A named point on the Earth surface, used as pass prediction input.
/// Propagation backends convert it to their native location type.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GroundLocation {
    name: String,
    latitude_deg: f64,
    longitude_deg: f64,
    elevation_m: f64,
}

impl GroundLocation {
    /// Builds Self from geodetic coordinates (latitude [ddeg],
    /// longitude [ddeg], elevation above sea level [m])
    pub fn new(
        name: impl Into<String>,
        latitude_deg: f64,
        longitude_deg: f64,
        elevation_m: f64,
    ) -> Self {
        Self {
            name: name.into(),
            latitude_deg,
            longitude_deg,
            elevation_m,
        }
    }
    /// Location name
    pub fn name(&self) -> &str {
        &self.name
    }
    /// Latitude [ddeg]
    pub fn latitude_deg(&self) -> f64 {
        self.latitude_deg
    }
    /// Longitude [ddeg]
    pub fn longitude_deg(&self) -> f64 {
        self.longitude_deg
    }
    /// Elevation above sea level [m]
    pub fn elevation_m(&self) -> f64 {
        self.elevation_m
    }
    /// Returns geodetic coordinates as a (latitude [ddeg],
    /// longitude [ddeg], elevation [m]) triple, for backend adapters.
    pub fn geodetic_ddeg(&self) -> (f64, f64, f64) {
        (self.latitude_deg, self.longitude_deg, self.elevation_m)
    }
}

impl fmt::Display for GroundLocation {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} at ({:.4}, {:.4}) {} m",
            self.name, self.latitude_deg, self.longitude_deg, self.elevation_m
        )
    }
}

/// Geodetic position of an orbiting object relative to the Earth surface.
#[derive(Debug, Clone, Copy, PartialEq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct GeodeticPosition {
    /// Latitude [ddeg]
    pub latitude_deg: f64,
    /// Longitude [ddeg]
    pub longitude_deg: f64,
    /// Altitude above sea level [km]
    pub altitude_km: f64,
}

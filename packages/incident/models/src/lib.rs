#![cfg_attr(feature = "fail-on-warnings", deny(warnings))]
#![warn(clippy::all, clippy::pedantic, clippy::nursery, clippy::cargo)]
#![allow(clippy::multiple_crate_versions, clippy::cargo_common_metadata)]

//! Fire incident record types.
//!
//! An [`Incident`] is the unit of data displayed by the dashboard: a
//! location and a free-text report, keyed by a positive [`IncidentId`].
//! Incidents are loaded once and never mutated.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

/// Positive integer identifying an incident, unique within a store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct IncidentId(u32);

impl IncidentId {
    /// Creates an incident ID, returning `None` for zero.
    #[must_use]
    pub const fn new(value: u32) -> Option<Self> {
        if value == 0 { None } else { Some(Self(value)) }
    }

    /// Returns the numeric value of this ID.
    #[must_use]
    pub const fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for IncidentId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Error returned when an [`IncidentId`] cannot be built from its input.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseIncidentIdError {
    /// Incident IDs start at 1.
    #[error("incident id must be positive")]
    Zero,
    /// The input was not an unsigned integer.
    #[error("invalid incident id {0:?}: expected a positive integer")]
    NotANumber(String),
}

impl TryFrom<u32> for IncidentId {
    type Error = ParseIncidentIdError;

    fn try_from(value: u32) -> Result<Self, Self::Error> {
        Self::new(value).ok_or(ParseIncidentIdError::Zero)
    }
}

impl From<IncidentId> for u32 {
    fn from(id: IncidentId) -> Self {
        id.0
    }
}

impl FromStr for IncidentId {
    type Err = ParseIncidentIdError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let value: u32 = s
            .parse()
            .map_err(|_| ParseIncidentIdError::NotANumber(s.to_string()))?;
        Self::try_from(value)
    }
}

/// A WGS84 coordinate pair.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LatLng {
    /// Latitude in degrees.
    pub lat: f64,
    /// Longitude in degrees.
    pub lng: f64,
}

impl LatLng {
    /// Creates a coordinate pair from latitude and longitude in degrees.
    #[must_use]
    pub const fn new(lat: f64, lng: f64) -> Self {
        Self { lat, lng }
    }
}

/// A fire incident report.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Incident {
    /// Unique incident ID.
    pub id: IncidentId,
    /// Latitude.
    pub latitude: f64,
    /// Longitude.
    pub longitude: f64,
    /// Free-text report.
    pub report: String,
}

impl Incident {
    /// Returns the incident's location.
    #[must_use]
    pub const fn position(&self) -> LatLng {
        LatLng::new(self.latitude, self.longitude)
    }
}

//! Location domain types.
//!
//! A user types either a US ZIP code or a `City, State` pair. Both are
//! resolved to [`Coordinates`] by a geocoder before any forecast lookup.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::ports::CoreError;

/// A point on the globe in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Coordinates {
    pub latitude: f64,
    pub longitude: f64,
}

impl Coordinates {
    /// Create a coordinate pair.
    pub const fn new(latitude: f64, longitude: f64) -> Self {
        Self {
            latitude,
            longitude,
        }
    }

    /// Check that both components are within their valid ranges.
    pub fn is_valid(&self) -> bool {
        self.latitude.is_finite()
            && self.longitude.is_finite()
            && (-90.0..=90.0).contains(&self.latitude)
            && (-180.0..=180.0).contains(&self.longitude)
    }
}

/// Formats as `lat,lon` with four decimal places.
///
/// The weather.gov points endpoint redirects (301) on anything more precise,
/// so this is also the wire format.
impl fmt::Display for Coordinates {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{:.4},{:.4}", self.latitude, self.longitude)
    }
}

/// A parsed location lookup request.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum LocationQuery {
    /// Five-digit US postal code.
    Zip(String),
    /// City name plus state (name or abbreviation).
    CityState { city: String, state: String },
}

impl LocationQuery {
    /// Parse raw user input.
    ///
    /// Exactly five ASCII digits is a ZIP code. Anything else must be
    /// `City, State` split on the first comma, with both halves non-empty.
    pub fn parse(input: &str) -> Result<Self, CoreError> {
        let trimmed = input.trim();
        if trimmed.is_empty() {
            return Err(CoreError::Validation(
                "Location cannot be empty".to_string(),
            ));
        }

        if is_zip_code(trimmed) {
            return Ok(Self::Zip(trimmed.to_string()));
        }

        let Some((city, state)) = trimmed.split_once(',') else {
            return Err(CoreError::Validation(format!(
                "'{trimmed}' is neither a 5-digit ZIP code nor 'City, State'"
            )));
        };

        let city = city.trim();
        let state = state.trim();
        if city.is_empty() || state.is_empty() {
            return Err(CoreError::Validation(format!(
                "'{trimmed}' must include both a city and a state"
            )));
        }

        Ok(Self::CityState {
            city: city.to_string(),
            state: state.to_string(),
        })
    }
}

impl fmt::Display for LocationQuery {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Zip(zip) => write!(f, "{zip}"),
            Self::CityState { city, state } => write!(f, "{city}, {state}"),
        }
    }
}

fn is_zip_code(s: &str) -> bool {
    s.len() == 5 && s.bytes().all(|b| b.is_ascii_digit())
}

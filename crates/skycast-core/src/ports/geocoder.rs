//! Geocoder port.
//!
//! Turns a [`LocationQuery`] into coordinates. The implementation lives in
//! `skycast-net`.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Coordinates, LocationQuery};

/// Errors from geocoding operations.
#[derive(Debug, Error)]
pub enum GeocodeError {
    /// Network or connectivity error.
    #[error("Geocoder network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// The geocoder answered with something unexpected.
    #[error("Invalid geocoder response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// Usage policy limit hit.
    #[error("Geocoder rate limit exceeded, try again later")]
    RateLimited,

    /// Bad base URL or similar.
    #[error("Geocoder configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

/// Port for resolving user-supplied locations.
#[async_trait]
pub trait GeocoderPort: Send + Sync {
    /// Resolve a query to coordinates.
    ///
    /// Returns `Ok(None)` when the location is well-formed but unknown.
    async fn locate(&self, query: &LocationQuery) -> Result<Option<Coordinates>, GeocodeError>;
}

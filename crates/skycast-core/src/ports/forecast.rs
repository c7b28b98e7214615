//! Forecast provider port.
//!
//! Models the three-step weather.gov flow: coordinates to grid point, then
//! grid point to the period and hourly forecasts.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::{Coordinates, ForecastPeriod, GridPoint};

/// Errors from forecast provider operations.
#[derive(Debug, Error)]
pub enum ForecastError {
    /// The coordinates are outside the provider's coverage (e.g. not in the US).
    #[error("No forecast coverage for {coordinates}")]
    OutsideCoverage {
        /// The coordinates that were looked up
        coordinates: String,
    },

    /// The grid point has no hourly forecast, or it returned no periods.
    #[error("No hourly forecast available for this location")]
    NoHourlyForecast,

    /// The period forecast returned no periods.
    #[error("Forecast contained no periods")]
    EmptyForecast,

    /// Network or connectivity error.
    #[error("Forecast network error: {message}")]
    Network {
        /// Description of the network error
        message: String,
    },

    /// The provider answered with something unexpected.
    #[error("Invalid forecast response: {message}")]
    InvalidResponse {
        /// What was invalid
        message: String,
    },

    /// API rate limit exceeded.
    #[error("Forecast rate limit exceeded, try again later")]
    RateLimited,

    /// Bad base URL or similar.
    #[error("Forecast configuration error: {message}")]
    Configuration {
        /// What's wrong with the configuration
        message: String,
    },
}

/// Port for forecast retrieval.
#[async_trait]
pub trait ForecastPort: Send + Sync {
    /// Resolve coordinates to forecast endpoints and the nearest place name.
    async fn grid_point(&self, coordinates: Coordinates) -> Result<GridPoint, ForecastError>;

    /// Fetch the twelve-hour period forecast.
    async fn forecast(&self, grid: &GridPoint) -> Result<Vec<ForecastPeriod>, ForecastError>;

    /// Fetch the hourly forecast.
    ///
    /// Returns `Err(ForecastError::NoHourlyForecast)` if the grid point has no hourly URL.
    async fn hourly_forecast(&self, grid: &GridPoint)
    -> Result<Vec<ForecastPeriod>, ForecastError>;
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::sync::Arc;

    fn _assert_object_safe(_: Arc<dyn ForecastPort>) {}

    #[test]
    fn test_error_display() {
        let err = ForecastError::OutsideCoverage {
            coordinates: "51.5074,-0.1278".to_string(),
        };
        assert!(err.to_string().contains("51.5074,-0.1278"));
    }
}

//! Port trait implementations.
//!
//! Implements the core-owned `ForecastPort` and `GeocoderPort` traits and
//! maps internal `NetError`s to the port error types.

use async_trait::async_trait;
use skycast_core::{
    Coordinates, ForecastError, ForecastPeriod, ForecastPort, GeocodeError, GeocoderPort,
    GridPoint, LocationQuery,
};

use crate::client::{NominatimGeocoder, NwsClient};
use crate::error::NetError;
use crate::http::HttpBackend;

// ============================================================================
// Error Mapping
// ============================================================================

/// Convert internal `NetError` to `ForecastError`.
fn map_forecast_error(err: NetError) -> ForecastError {
    match err {
        NetError::ApiRequestFailed { status: 429, .. } => ForecastError::RateLimited,
        NetError::ApiRequestFailed { status, url } => ForecastError::Network {
            message: format!("weather.gov returned {status} for {url}"),
        },
        NetError::InvalidResponse { message } => ForecastError::InvalidResponse { message },
        NetError::Network(e) => ForecastError::Network {
            message: e.to_string(),
        },
        NetError::InvalidUrl(e) => ForecastError::Configuration {
            message: e.to_string(),
        },
        NetError::JsonParse(e) => ForecastError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

/// Convert internal `NetError` to `GeocodeError`.
fn map_geocode_error(err: NetError) -> GeocodeError {
    match err {
        NetError::ApiRequestFailed { status: 429, .. } => GeocodeError::RateLimited,
        NetError::ApiRequestFailed { status, url } => GeocodeError::Network {
            message: format!("geocoder returned {status} for {url}"),
        },
        NetError::InvalidResponse { message } => GeocodeError::InvalidResponse { message },
        NetError::Network(e) => GeocodeError::Network {
            message: e.to_string(),
        },
        NetError::InvalidUrl(e) => GeocodeError::Configuration {
            message: e.to_string(),
        },
        NetError::JsonParse(e) => GeocodeError::InvalidResponse {
            message: e.to_string(),
        },
    }
}

// ============================================================================
// Port Implementations
// ============================================================================

#[async_trait]
impl<B: HttpBackend> ForecastPort for NwsClient<B> {
    async fn grid_point(&self, coordinates: Coordinates) -> Result<GridPoint, ForecastError> {
        self.points(coordinates).await.map_err(|err| match err.status() {
            // weather.gov answers 404 for points it has no grid for
            Some(404) => ForecastError::OutsideCoverage {
                coordinates: coordinates.to_string(),
            },
            _ => map_forecast_error(err),
        })
    }

    async fn forecast(&self, grid: &GridPoint) -> Result<Vec<ForecastPeriod>, ForecastError> {
        self.periods(&grid.forecast_url)
            .await
            .map_err(map_forecast_error)
    }

    async fn hourly_forecast(
        &self,
        grid: &GridPoint,
    ) -> Result<Vec<ForecastPeriod>, ForecastError> {
        let url = grid
            .hourly_forecast_url
            .as_deref()
            .ok_or(ForecastError::NoHourlyForecast)?;
        self.periods(url).await.map_err(map_forecast_error)
    }
}

#[async_trait]
impl<B: HttpBackend> GeocoderPort for NominatimGeocoder<B> {
    async fn locate(&self, query: &LocationQuery) -> Result<Option<Coordinates>, GeocodeError> {
        self.search(query).await.map_err(map_geocode_error)
    }
}

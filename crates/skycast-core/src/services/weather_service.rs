//! Weather lookup service - orchestrates geocoding and forecast retrieval.

use std::sync::Arc;

use tracing::{debug, info};

use crate::domain::{Coordinates, LocationQuery, WeatherReport};
use crate::ports::{CoreError, ForecastError, ForecastPort, GeocoderPort};

/// Service that turns a location query into a [`WeatherReport`].
pub struct WeatherService {
    geocoder: Arc<dyn GeocoderPort>,
    forecast: Arc<dyn ForecastPort>,
}

impl WeatherService {
    /// Create a new weather service over the given ports.
    pub fn new(geocoder: Arc<dyn GeocoderPort>, forecast: Arc<dyn ForecastPort>) -> Self {
        Self { geocoder, forecast }
    }

    /// Look up the weather for raw user input (`80302` or `Boulder, CO`).
    ///
    /// Returns `Ok(None)` if the location could not be geocoded.
    pub async fn lookup(&self, input: &str) -> Result<Option<WeatherReport>, CoreError> {
        let query = LocationQuery::parse(input)?;
        self.lookup_query(query).await
    }

    /// Look up the weather for an already-parsed query.
    pub async fn lookup_query(
        &self,
        query: LocationQuery,
    ) -> Result<Option<WeatherReport>, CoreError> {
        debug!(%query, "Geocoding location");
        let Some(coordinates) = self.geocoder.locate(&query).await? else {
            info!(%query, "Location not found");
            return Ok(None);
        };

        self.report_for(Some(query), coordinates).await.map(Some)
    }

    /// Look up the weather for known coordinates.
    ///
    /// The report carries no query; it is labelled with the nearby place
    /// the API reports, else the coordinates.
    pub async fn lookup_coordinates(
        &self,
        coordinates: Coordinates,
    ) -> Result<WeatherReport, CoreError> {
        if !coordinates.is_valid() {
            return Err(CoreError::Validation(format!(
                "Coordinates out of range: {coordinates}"
            )));
        }
        self.report_for(None, coordinates).await
    }

    async fn report_for(
        &self,
        query: Option<LocationQuery>,
        coordinates: Coordinates,
    ) -> Result<WeatherReport, CoreError> {
        debug!(%coordinates, "Resolving grid point");
        let grid = self.forecast.grid_point(coordinates).await?;
        info!(
            city = grid.city.as_deref().unwrap_or("?"),
            state = grid.state.as_deref().unwrap_or("?"),
            "Resolved forecast location"
        );
        debug!(forecast_url = %grid.forecast_url, hourly_url = ?grid.hourly_forecast_url, "Forecast endpoints");

        let (daily, hourly) = tokio::try_join!(
            self.forecast.forecast(&grid),
            self.forecast.hourly_forecast(&grid)
        )?;

        if hourly.is_empty() {
            return Err(ForecastError::NoHourlyForecast.into());
        }
        if daily.is_empty() {
            return Err(ForecastError::EmptyForecast.into());
        }

        WeatherReport::assemble(query, coordinates, grid, daily, hourly)
            .ok_or_else(|| ForecastError::EmptyForecast.into())
    }
}

//! weather.gov requests.

use skycast_core::{Coordinates, ForecastPeriod, GridPoint};
use tracing::debug;
use url::Url;

use super::NwsClient;
use crate::error::{NetError, NetResult};
use crate::http::HttpBackend;
use crate::models::{ForecastResponse, PointsResponse};
use crate::parsing::{to_grid_point, to_period};
use crate::url::build_points_url;

impl<B: HttpBackend> NwsClient<B> {
    /// Resolve coordinates to a grid point.
    pub(crate) async fn points(&self, coordinates: Coordinates) -> NetResult<GridPoint> {
        let url = build_points_url(&self.settings.nws_base_url, coordinates);
        let response: PointsResponse = self.backend.get_json(&url).await?;
        let grid = to_grid_point(response)?;
        debug!(
            forecast = %grid.forecast_url,
            hourly = ?grid.hourly_forecast_url,
            "Resolved grid point"
        );
        Ok(grid)
    }

    /// Fetch the periods behind a forecast URL returned by `points`.
    pub(crate) async fn periods(&self, forecast_url: &str) -> NetResult<Vec<ForecastPeriod>> {
        let url = Url::parse(forecast_url).map_err(|e| NetError::InvalidResponse {
            message: format!("bad forecast URL '{forecast_url}': {e}"),
        })?;
        let response: ForecastResponse = self.backend.get_json(&url).await?;
        debug!(%url, periods = response.properties.periods.len(), "Fetched forecast");
        Ok(response.properties.periods.into_iter().map(to_period).collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::FakeBackend;
    use crate::models::NetSettings;
    use serde_json::json;

    #[tokio::test]
    async fn test_points_requests_rounded_coordinates() {
        let backend = FakeBackend::new().with_json(
            "/points/",
            json!({"properties": {"forecast": "https://api.weather.gov/gridpoints/BOU/53,74/forecast"}}),
        );
        let client = NwsClient::with_backend(NetSettings::default(), backend);

        let grid = client
            .points(Coordinates::new(40.014_986, -105.270_546))
            .await
            .unwrap();

        assert!(grid.forecast_url.ends_with("/forecast"));
        assert_eq!(
            client.backend.requests(),
            vec!["https://api.weather.gov/points/40.0150,-105.2705".to_string()]
        );
    }

    #[tokio::test]
    async fn test_periods_rejects_bad_url() {
        let client = NwsClient::with_backend(NetSettings::default(), FakeBackend::new());
        let result = client.periods("not a url").await;
        assert!(matches!(result, Err(NetError::InvalidResponse { .. })));
        assert!(client.backend.requests().is_empty());
    }
}

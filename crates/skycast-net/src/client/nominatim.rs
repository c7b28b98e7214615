//! Nominatim requests.

use skycast_core::{Coordinates, LocationQuery};
use tracing::debug;

use super::NominatimGeocoder;
use crate::error::NetResult;
use crate::http::HttpBackend;
use crate::models::NominatimPlace;
use crate::parsing::to_coordinates;
use crate::url::{build_city_search_url, build_zip_search_url};

impl<B: HttpBackend> NominatimGeocoder<B> {
    /// Search for the first US match of a query.
    pub(crate) async fn search(&self, query: &LocationQuery) -> NetResult<Option<Coordinates>> {
        let base = &self.settings.geocoder_base_url;
        let url = match query {
            LocationQuery::Zip(zip) => build_zip_search_url(base, zip),
            LocationQuery::CityState { city, state } => build_city_search_url(base, city, state),
        };

        let places: Vec<NominatimPlace> = self.backend.get_json(&url).await?;
        if let Some(place) = places.first() {
            debug!(
                %query,
                display_name = place.display_name.as_deref().unwrap_or(""),
                "Geocoded location"
            );
        }
        to_coordinates(&places)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::http::testing::FakeBackend;
    use crate::models::NetSettings;
    use serde_json::json;

    #[tokio::test]
    async fn test_zip_query_uses_postalcode() {
        let backend = FakeBackend::new().with_json(
            "postalcode=80302",
            json!([{"lat": "40.0150", "lon": "-105.2705", "display_name": "Boulder"}]),
        );
        let geocoder = NominatimGeocoder::with_backend(NetSettings::default(), backend);

        let coords = geocoder
            .search(&LocationQuery::Zip("80302".to_string()))
            .await
            .unwrap()
            .unwrap();
        assert!((coords.longitude + 105.2705).abs() < 1e-9);
    }

    #[tokio::test]
    async fn test_city_query_uses_structured_search() {
        let backend = FakeBackend::new().with_json("city=Austin&state=TX", json!([]));
        let geocoder = NominatimGeocoder::with_backend(NetSettings::default(), backend);

        let result = geocoder
            .search(&LocationQuery::CityState {
                city: "Austin".to_string(),
                state: "TX".to_string(),
            })
            .await
            .unwrap();

        assert!(result.is_none());
        assert!(geocoder.backend.requests()[0].contains("countrycodes=us"));
    }
}

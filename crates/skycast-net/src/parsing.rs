//! Conversions from wire types to domain types.

use skycast_core::{Coordinates, ForecastPeriod, GridPoint};

use crate::error::{NetError, NetResult};
use crate::models::{NominatimPlace, PeriodDto, PointsResponse};

/// Extract the forecast endpoints and nearest place from a points response.
pub fn to_grid_point(response: PointsResponse) -> NetResult<GridPoint> {
    let properties = response.properties;
    let forecast_url = properties
        .forecast
        .filter(|u| !u.is_empty())
        .ok_or_else(|| NetError::InvalidResponse {
            message: "points response has no forecast URL".to_string(),
        })?;

    let (city, state) = properties
        .relative_location
        .map(|r| (r.properties.city, r.properties.state))
        .unwrap_or_default();

    Ok(GridPoint {
        forecast_url,
        hourly_forecast_url: properties.forecast_hourly.filter(|u| !u.is_empty()),
        city,
        state,
    })
}

/// Convert one API period to the domain type.
pub fn to_period(dto: PeriodDto) -> ForecastPeriod {
    ForecastPeriod {
        number: dto.number,
        name: dto.name,
        start_time: dto.start_time,
        end_time: dto.end_time,
        is_daytime: dto.is_daytime,
        temperature: dto.temperature,
        temperature_unit: dto.temperature_unit,
        wind_speed: dto.wind_speed,
        wind_direction: dto.wind_direction,
        precipitation_probability: dto
            .probability_of_precipitation
            .and_then(|p| p.value)
            .map(percent),
        short_forecast: dto.short_forecast,
        detailed_forecast: dto.detailed_forecast,
    }
}

#[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)] // clamped to 0..=100
fn percent(value: f64) -> u8 {
    value.round().clamp(0.0, 100.0) as u8
}

/// First Nominatim match as coordinates, `None` for an empty result.
pub fn to_coordinates(places: &[NominatimPlace]) -> NetResult<Option<Coordinates>> {
    let Some(place) = places.first() else {
        return Ok(None);
    };

    let parse = |field: &str, raw: &str| {
        raw.trim()
            .parse::<f64>()
            .map_err(|e| NetError::InvalidResponse {
                message: format!("invalid {field} '{raw}': {e}"),
            })
    };
    let coordinates = Coordinates::new(parse("lat", &place.lat)?, parse("lon", &place.lon)?);

    if !coordinates.is_valid() {
        return Err(NetError::InvalidResponse {
            message: format!("coordinates out of range: {coordinates}"),
        });
    }
    Ok(Some(coordinates))
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    fn points(value: serde_json::Value) -> PointsResponse {
        serde_json::from_value(value).unwrap()
    }

    #[test]
    fn test_grid_point_with_relative_location() {
        let grid = to_grid_point(points(json!({
            "properties": {
                "forecast": "https://api.weather.gov/gridpoints/BOU/53,74/forecast",
                "forecastHourly": "https://api.weather.gov/gridpoints/BOU/53,74/forecast/hourly",
                "relativeLocation": {"properties": {"city": "Boulder", "state": "CO"}}
            }
        })))
        .unwrap();

        assert!(grid.forecast_url.ends_with("/forecast"));
        assert!(grid.hourly_forecast_url.unwrap().ends_with("/hourly"));
        assert_eq!(grid.city.as_deref(), Some("Boulder"));
        assert_eq!(grid.state.as_deref(), Some("CO"));
    }

    #[test]
    fn test_grid_point_without_forecast_is_invalid() {
        let result = to_grid_point(points(json!({"properties": {"forecast": null}})));
        assert!(matches!(result, Err(NetError::InvalidResponse { .. })));
    }

    #[test]
    fn test_grid_point_without_hourly_or_location() {
        let grid = to_grid_point(points(json!({
            "properties": {"forecast": "https://example.com/f"}
        })))
        .unwrap();
        assert!(grid.hourly_forecast_url.is_none());
        assert!(grid.city.is_none());
    }

    #[test]
    fn test_period_conversion() {
        let dto: PeriodDto = serde_json::from_value(json!({
            "number": 2,
            "name": "Tonight",
            "startTime": "2026-10-18T18:00:00-06:00",
            "endTime": "2026-10-19T06:00:00-06:00",
            "isDaytime": false,
            "temperature": 41,
            "temperatureUnit": "F",
            "windSpeed": "5 to 10 mph",
            "windDirection": "W",
            "probabilityOfPrecipitation": {"value": 30},
            "shortForecast": "Mostly Clear",
            "detailedForecast": "Mostly clear, with a low around 41."
        }))
        .unwrap();

        let period = to_period(dto);
        assert_eq!(period.name, "Tonight");
        assert_eq!(period.temperature, 41);
        assert!(!period.is_daytime);
        assert_eq!(period.precipitation_probability, Some(30));
        assert_eq!(period.wind_summary(), "5 to 10 mph W");
    }

    #[test]
    fn test_coordinates_from_strings() {
        let places = vec![NominatimPlace {
            lat: "40.0149856".to_string(),
            lon: "-105.2705456".to_string(),
            display_name: None,
        }];
        let coords = to_coordinates(&places).unwrap().unwrap();
        assert!((coords.latitude - 40.014_985_6).abs() < 1e-9);
        assert!(to_coordinates(&[]).unwrap().is_none());
    }

    #[test]
    fn test_coordinates_reject_garbage() {
        let places = vec![NominatimPlace {
            lat: "north".to_string(),
            lon: "0".to_string(),
            display_name: None,
        }];
        assert!(matches!(
            to_coordinates(&places),
            Err(NetError::InvalidResponse { .. })
        ));
    }
}

//! Forecast domain types.
//!
//! These mirror the parts of the weather.gov forecast payloads the
//! application uses, independent of the wire format.

use chrono::{DateTime, Local, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::location::{Coordinates, LocationQuery};
use super::temperature::format_temperature_pair;

/// One forecast period (an hour for hourly forecasts, a half-day otherwise).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForecastPeriod {
    /// Sequence number within the forecast, starting at 1.
    pub number: u32,
    /// Period name, e.g. "Tonight" or "Wednesday". Empty for hourly periods.
    pub name: String,
    /// Period start (ISO 8601 with offset, as returned by the API).
    pub start_time: String,
    /// Period end (ISO 8601 with offset, as returned by the API).
    pub end_time: String,
    pub is_daytime: bool,
    /// Temperature in `temperature_unit` (Fahrenheit for US grid points).
    pub temperature: i32,
    pub temperature_unit: String,
    /// Free-form wind speed, e.g. "5 to 10 mph".
    pub wind_speed: String,
    /// Compass direction, e.g. "NW".
    pub wind_direction: String,
    /// Chance of precipitation in percent, when the API reports one.
    pub precipitation_probability: Option<u8>,
    pub short_forecast: String,
    pub detailed_forecast: String,
}

impl ForecastPeriod {
    /// Wind as shown in tables: `"5 mph NW"`.
    pub fn wind_summary(&self) -> String {
        format!("{} {}", self.wind_speed, self.wind_direction)
            .trim()
            .to_string()
    }
}

/// Forecast endpoints and nearest named place for a coordinate pair.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GridPoint {
    /// URL of the twelve-hour period forecast.
    pub forecast_url: String,
    /// URL of the hourly forecast, absent for some marine and remote points.
    pub hourly_forecast_url: Option<String>,
    /// Nearest city reported by the API.
    pub city: Option<String>,
    /// State of the nearest city.
    pub state: Option<String>,
}

impl GridPoint {
    /// `City, State` when both are known.
    pub fn place_name(&self) -> Option<String> {
        match (&self.city, &self.state) {
            (Some(city), Some(state)) => Some(format!("{city}, {state}")),
            (Some(city), None) => Some(city.clone()),
            _ => None,
        }
    }
}

/// Everything shown for a single location lookup.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WeatherReport {
    /// What the user asked for; `None` for a lookup by coordinates.
    pub query: Option<LocationQuery>,
    pub coordinates: Coordinates,
    pub grid: GridPoint,
    /// Conditions right now (first hourly period).
    pub current: ForecastPeriod,
    /// `"{name}: {detailed forecast}"` of the first daily period.
    pub description: String,
    /// Daily periods after the first.
    pub future: Vec<ForecastPeriod>,
    pub fetched_at: DateTime<Utc>,
}

impl WeatherReport {
    /// Assemble a report from the two forecast series.
    ///
    /// Returns `None` if either series is empty.
    pub fn assemble(
        query: Option<LocationQuery>,
        coordinates: Coordinates,
        grid: GridPoint,
        daily: Vec<ForecastPeriod>,
        hourly: Vec<ForecastPeriod>,
    ) -> Option<Self> {
        let current = hourly.into_iter().next()?;
        let mut daily = daily.into_iter();
        let first = daily.next()?;

        Some(Self {
            query,
            coordinates,
            grid,
            current,
            description: format!("{}: {}", first.name, first.detailed_forecast),
            future: daily.collect(),
            fetched_at: Utc::now(),
        })
    }

    /// Label for storing and display: the API's place name, else the
    /// query, else the coordinates.
    pub fn location_label(&self) -> String {
        self.grid.place_name().unwrap_or_else(|| match self.query {
            Some(ref query) => query.to_string(),
            None => self.coordinates.to_string(),
        })
    }

    /// Current temperature as `72°F/22°C`.
    pub fn temperature_display(&self) -> String {
        format_temperature_pair(self.current.temperature)
    }

    /// Current wind as `Wind: 5 mph NW`.
    pub fn wind_display(&self) -> String {
        format!("Wind: {}", self.current.wind_summary())
    }

    /// Calendar date of the lookup in the local time zone.
    pub fn local_date(&self) -> NaiveDate {
        self.fetched_at.with_timezone(&Local).date_naive()
    }

    /// Serialize the report as pretty-printed JSON.
    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

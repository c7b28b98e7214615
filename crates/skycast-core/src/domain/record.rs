//! Saved weather record types.

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};

use super::forecast::WeatherReport;

/// A weather observation persisted in the local store.
///
/// Records are unique per `(location, date)`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeatherRecord {
    /// Database ID of the record.
    pub id: i64,
    /// Location label, e.g. "Boulder, CO".
    pub location: String,
    /// Calendar day of the observation.
    pub date: NaiveDate,
    /// Temperature in Fahrenheit.
    pub temperature: i32,
    pub wind_speed: String,
    pub wind_direction: String,
    /// Short forecast text, possibly empty.
    pub forecast: String,
    /// When the row was written (UTC).
    pub created_at: DateTime<Utc>,
}

/// A weather record to be stored (no ID yet).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewWeatherRecord {
    pub location: String,
    pub date: NaiveDate,
    pub temperature: i32,
    pub wind_speed: String,
    pub wind_direction: String,
    #[serde(default)]
    pub forecast: String,
}

impl NewWeatherRecord {
    /// Create a record with an empty forecast.
    pub fn new(
        location: impl Into<String>,
        date: NaiveDate,
        temperature: i32,
        wind_speed: impl Into<String>,
        wind_direction: impl Into<String>,
    ) -> Self {
        Self {
            location: location.into(),
            date,
            temperature,
            wind_speed: wind_speed.into(),
            wind_direction: wind_direction.into(),
            forecast: String::new(),
        }
    }

    /// Set the forecast text.
    #[must_use]
    pub fn with_forecast(mut self, forecast: impl Into<String>) -> Self {
        self.forecast = forecast.into();
        self
    }

    /// Capture the current conditions of a report.
    pub fn from_report(report: &WeatherReport, date: NaiveDate) -> Self {
        Self::new(
            report.location_label(),
            date,
            report.current.temperature,
            report.current.wind_speed.clone(),
            report.current.wind_direction.clone(),
        )
        .with_forecast(report.current.short_forecast.clone())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::forecast::fixtures::{grid, period};
    use crate::domain::{Coordinates, LocationQuery};

    #[test]
    fn from_report_uses_current_conditions() {
        let report = WeatherReport::assemble(
            Some(LocationQuery::Zip("80302".to_string())),
            Coordinates::new(40.0, -105.3),
            grid(),
            vec![period(1, "Today", 70)],
            vec![period(1, "", 58)],
        )
        .unwrap();
        let date = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();

        let record = NewWeatherRecord::from_report(&report, date);

        assert_eq!(record.location, "Boulder, CO");
        assert_eq!(record.date, date);
        assert_eq!(record.temperature, 58);
        assert_eq!(record.wind_speed, "5 mph");
        assert_eq!(record.wind_direction, "NW");
        assert_eq!(record.forecast, "Sunny");
    }

    #[test]
    fn forecast_defaults_to_empty_when_deserializing() {
        let json = r#"{"location":"Austin, TX","date":"2026-07-04","temperature":98,"wind_speed":"10 mph","wind_direction":"S"}"#;
        let record: NewWeatherRecord = serde_json::from_str(json).unwrap();
        assert_eq!(record.forecast, "");
        assert_eq!(record.date, NaiveDate::from_ymd_opt(2026, 7, 4).unwrap());
    }
}

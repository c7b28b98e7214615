//! Row mapping helpers for `SQLite` queries.

use chrono::{DateTime, NaiveDate, NaiveDateTime, Utc};
use skycast_core::{RepositoryError, WeatherRecord};
use sqlx::Row;

/// Shared SELECT column list for weather record queries.
pub const RECORD_SELECT_COLUMNS: &str =
    "id, location, date, temperature, wind_speed, wind_direction, forecast, created_at";

/// Storage format of the `date` column.
pub const DATE_FORMAT: &str = "%Y-%m-%d";

/// Helper to parse datetime strings that may have "UTC" suffix.
pub fn parse_datetime(datetime_str: Option<String>) -> Option<DateTime<Utc>> {
    datetime_str.and_then(|s| {
        let trimmed = s.trim_end_matches(" UTC");
        NaiveDateTime::parse_from_str(trimmed, "%Y-%m-%d %H:%M:%S%.f")
            .map(|dt| DateTime::<Utc>::from_naive_utc_and_offset(dt, Utc))
            .ok()
    })
}

/// Format a date for the `date` column.
pub fn date_to_db(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

/// Escape `LIKE` wildcards so user input matches literally (`ESCAPE '\'`).
pub fn escape_like(fragment: &str) -> String {
    let mut escaped = String::with_capacity(fragment.len());
    for c in fragment.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

/// Parse a database row into a `WeatherRecord`.
pub fn row_to_record(row: &sqlx::sqlite::SqliteRow) -> Result<WeatherRecord, RepositoryError> {
    let date_str: String = row
        .try_get("date")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;
    let date = NaiveDate::parse_from_str(&date_str, DATE_FORMAT).map_err(|e| {
        RepositoryError::Serialization(format!("Invalid record date '{date_str}': {e}"))
    })?;

    let created_at_str: Option<String> = row
        .try_get("created_at")
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

    Ok(WeatherRecord {
        id: row
            .try_get::<i64, _>("id")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        location: row
            .try_get("location")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        date,
        temperature: row
            .try_get::<i32, _>("temperature")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        wind_speed: row
            .try_get("wind_speed")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        wind_direction: row
            .try_get("wind_direction")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?,
        forecast: row
            .try_get::<Option<String>, _>("forecast")
            .map_err(|e| RepositoryError::Storage(e.to_string()))?
            .unwrap_or_default(),
        created_at: parse_datetime(created_at_str).unwrap_or_else(Utc::now),
    })
}

//! `SQLite` implementation of the `WeatherRecordRepository` trait.

use async_trait::async_trait;
use chrono::NaiveDate;
use sqlx::SqlitePool;

use skycast_core::{NewWeatherRecord, RepositoryError, WeatherRecord, WeatherRecordRepository};

use super::row_mappers::{RECORD_SELECT_COLUMNS, date_to_db, escape_like, row_to_record};

/// `SQLite` implementation of the `WeatherRecordRepository` trait.
///
/// Records are keyed by `(location, date)`; re-saving the same key
/// overwrites the measurements but keeps the row id.
pub struct SqliteWeatherRecordRepository {
    pool: SqlitePool,
}

impl SqliteWeatherRecordRepository {
    /// Create a new `SQLite` weather record repository.
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl WeatherRecordRepository for SqliteWeatherRecordRepository {
    async fn upsert(&self, record: &NewWeatherRecord) -> Result<WeatherRecord, RepositoryError> {
        let date = date_to_db(record.date);

        sqlx::query(
            r#"INSERT INTO weather_records (
                location, date, temperature, wind_speed, wind_direction, forecast
            ) VALUES (?, ?, ?, ?, ?, ?)
            ON CONFLICT(location, date) DO UPDATE SET
                temperature = excluded.temperature,
                wind_speed = excluded.wind_speed,
                wind_direction = excluded.wind_direction,
                forecast = excluded.forecast,
                created_at = datetime('now')
            "#,
        )
        .bind(&record.location)
        .bind(&date)
        .bind(record.temperature)
        .bind(&record.wind_speed)
        .bind(&record.wind_direction)
        .bind(&record.forecast)
        .execute(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        // Read back by natural key (works for both insert and update)
        let row = sqlx::query(&format!(
            "SELECT {RECORD_SELECT_COLUMNS} FROM weather_records WHERE location = ? AND date = ? LIMIT 1"
        ))
        .bind(&record.location)
        .bind(&date)
        .fetch_one(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        row_to_record(&row)
    }

    async fn list(&self) -> Result<Vec<WeatherRecord>, RepositoryError> {
        let rows = sqlx::query(&format!(
            "SELECT {RECORD_SELECT_COLUMNS} FROM weather_records ORDER BY date DESC, location ASC"
        ))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        rows.iter().map(row_to_record).collect()
    }

    async fn search_by_location(
        &self,
        fragment: &str,
    ) -> Result<Vec<WeatherRecord>, RepositoryError> {
        let rows = sqlx::query(&format!(
            r"SELECT {RECORD_SELECT_COLUMNS} FROM weather_records
              WHERE location LIKE '%' || ? || '%' ESCAPE '\'
              ORDER BY date DESC, location ASC"
        ))
        .bind(escape_like(fragment))
        .fetch_all(&self.pool)
        .await
        .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        rows.iter().map(row_to_record).collect()
    }

    async fn delete(&self, location: &str, date: NaiveDate) -> Result<bool, RepositoryError> {
        let result = sqlx::query("DELETE FROM weather_records WHERE location = ? AND date = ?")
            .bind(location)
            .bind(date_to_db(date))
            .execute(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        Ok(result.rows_affected() > 0)
    }

    async fn count(&self) -> Result<u64, RepositoryError> {
        let (count,): (i64,) = sqlx::query_as("SELECT COUNT(*) FROM weather_records")
            .fetch_one(&self.pool)
            .await
            .map_err(|e| RepositoryError::Storage(e.to_string()))?;

        u64::try_from(count).map_err(|e| RepositoryError::Storage(e.to_string()))
    }
}

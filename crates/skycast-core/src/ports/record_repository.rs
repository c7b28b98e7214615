//! Weather record repository trait definition.
//!
//! This port defines the interface for weather record persistence.
//! Implementations must handle all storage details internally.

use async_trait::async_trait;
use chrono::NaiveDate;

use super::RepositoryError;
use crate::domain::{NewWeatherRecord, WeatherRecord};

/// Repository for saved weather records.
///
/// # Design Rules
///
/// - No `sqlx` types in signatures
/// - Identity is `(location, date)`; `upsert` replaces an existing record
/// - Validation belongs in `RecordService`, not here
#[async_trait]
pub trait WeatherRecordRepository: Send + Sync {
    /// Insert a record, replacing any record with the same location and date.
    ///
    /// Returns the stored record.
    async fn upsert(&self, record: &NewWeatherRecord) -> Result<WeatherRecord, RepositoryError>;

    /// All records, newest date first, then by location.
    async fn list(&self) -> Result<Vec<WeatherRecord>, RepositoryError>;

    /// Records whose location contains `fragment`, newest date first.
    async fn search_by_location(
        &self,
        fragment: &str,
    ) -> Result<Vec<WeatherRecord>, RepositoryError>;

    /// Delete the record for an exact location and date.
    ///
    /// Returns `true` if a record was removed.
    async fn delete(&self, location: &str, date: NaiveDate) -> Result<bool, RepositoryError>;

    /// Total number of records.
    async fn count(&self) -> Result<u64, RepositoryError>;
}

//! Record service - saved weather record operations.

use chrono::NaiveDate;
use std::sync::Arc;
use tracing::debug;

use crate::domain::{NewWeatherRecord, WeatherRecord, WeatherReport};
use crate::ports::{CoreError, WeatherRecordRepository};

/// Service for saved weather records.
///
/// Thin facade over `WeatherRecordRepository` that adds input validation.
pub struct RecordService {
    repo: Arc<dyn WeatherRecordRepository>,
}

impl RecordService {
    /// Create a new record service with the given repository.
    pub fn new(repo: Arc<dyn WeatherRecordRepository>) -> Self {
        Self { repo }
    }

    /// Store the current conditions of a report.
    ///
    /// `date` defaults to the local calendar date of the lookup.
    pub async fn save_report(
        &self,
        report: &WeatherReport,
        date: Option<NaiveDate>,
    ) -> Result<WeatherRecord, CoreError> {
        let date = date.unwrap_or_else(|| report.local_date());
        self.save(NewWeatherRecord::from_report(report, date)).await
    }

    /// Store a record, replacing any record with the same location and date.
    pub async fn save(&self, mut record: NewWeatherRecord) -> Result<WeatherRecord, CoreError> {
        let location = record.location.trim();
        if location.is_empty() {
            return Err(CoreError::Validation(
                "Record location cannot be empty".to_string(),
            ));
        }
        record.location = location.to_string();

        debug!(location = %record.location, date = %record.date, "Saving weather record");
        self.repo.upsert(&record).await.map_err(CoreError::from)
    }

    /// List all records.
    pub async fn list(&self) -> Result<Vec<WeatherRecord>, CoreError> {
        self.repo.list().await.map_err(CoreError::from)
    }

    /// Records whose location contains `location`.
    ///
    /// A blank fragment lists everything.
    pub async fn search(&self, location: &str) -> Result<Vec<WeatherRecord>, CoreError> {
        let fragment = location.trim();
        if fragment.is_empty() {
            return self.list().await;
        }
        self.repo
            .search_by_location(fragment)
            .await
            .map_err(CoreError::from)
    }

    /// Delete a record. Returns `false` when no record matched.
    pub async fn delete(&self, location: &str, date: NaiveDate) -> Result<bool, CoreError> {
        self.repo
            .delete(location.trim(), date)
            .await
            .map_err(CoreError::from)
    }

    /// Total number of saved records.
    pub async fn count(&self) -> Result<u64, CoreError> {
        self.repo.count().await.map_err(CoreError::from)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::fixtures::{grid, period};
    use crate::domain::{Coordinates, LocationQuery};
    use crate::ports::RepositoryError;
    use async_trait::async_trait;
    use chrono::Utc;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MockRecordRepo {
        records: Mutex<Vec<WeatherRecord>>,
    }

    #[async_trait]
    impl WeatherRecordRepository for MockRecordRepo {
        async fn upsert(&self, record: &NewWeatherRecord) -> Result<WeatherRecord, RepositoryError> {
            let mut records = self.records.lock().unwrap();
            let next_id = records.len() as i64 + 1;
            let existing = records
                .iter()
                .position(|r| r.location == record.location && r.date == record.date);
            let stored = WeatherRecord {
                id: existing.map_or(next_id, |i| records[i].id),
                location: record.location.clone(),
                date: record.date,
                temperature: record.temperature,
                wind_speed: record.wind_speed.clone(),
                wind_direction: record.wind_direction.clone(),
                forecast: record.forecast.clone(),
                created_at: Utc::now(),
            };
            match existing {
                Some(i) => records[i] = stored.clone(),
                None => records.push(stored.clone()),
            }
            Ok(stored)
        }

        async fn list(&self) -> Result<Vec<WeatherRecord>, RepositoryError> {
            Ok(self.records.lock().unwrap().clone())
        }

        async fn search_by_location(
            &self,
            fragment: &str,
        ) -> Result<Vec<WeatherRecord>, RepositoryError> {
            Ok(self
                .records
                .lock()
                .unwrap()
                .iter()
                .filter(|r| r.location.contains(fragment))
                .cloned()
                .collect())
        }

        async fn delete(&self, location: &str, date: NaiveDate) -> Result<bool, RepositoryError> {
            let mut records = self.records.lock().unwrap();
            let before = records.len();
            records.retain(|r| !(r.location == location && r.date == date));
            Ok(records.len() != before)
        }

        async fn count(&self) -> Result<u64, RepositoryError> {
            Ok(self.records.lock().unwrap().len() as u64)
        }
    }

    fn day(d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, d).unwrap()
    }

    fn service() -> RecordService {
        RecordService::new(Arc::new(MockRecordRepo::default()))
    }

    #[tokio::test]
    async fn save_trims_and_replaces_same_day() {
        let service = service();

        let first = service
            .save(NewWeatherRecord::new("  Austin, TX ", day(1), 90, "10 mph", "S"))
            .await
            .unwrap();
        assert_eq!(first.location, "Austin, TX");

        let second = service
            .save(NewWeatherRecord::new("Austin, TX", day(1), 95, "12 mph", "SE"))
            .await
            .unwrap();
        assert_eq!(second.id, first.id);
        assert_eq!(service.count().await.unwrap(), 1);
        assert_eq!(service.list().await.unwrap()[0].temperature, 95);
    }

    #[tokio::test]
    async fn save_rejects_blank_location() {
        let err = service()
            .save(NewWeatherRecord::new("   ", day(1), 70, "5 mph", "N"))
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Validation(_)));
    }

    #[tokio::test]
    async fn save_report_uses_given_date() {
        let service = service();
        let report = WeatherReport::assemble(
            Some(LocationQuery::Zip("80302".to_string())),
            Coordinates::new(40.0, -105.3),
            grid(),
            vec![period(1, "Today", 70)],
            vec![period(1, "", 59)],
        )
        .unwrap();

        let record = service.save_report(&report, Some(day(5))).await.unwrap();
        assert_eq!(record.location, "Boulder, CO");
        assert_eq!(record.date, day(5));
        assert_eq!(record.temperature, 59);
    }

    #[tokio::test]
    async fn search_and_delete() {
        let service = service();
        service
            .save(NewWeatherRecord::new("Austin, TX", day(1), 90, "10 mph", "S"))
            .await
            .unwrap();
        service
            .save(NewWeatherRecord::new("Boulder, CO", day(1), 60, "5 mph", "W"))
            .await
            .unwrap();

        assert_eq!(service.search("Austin").await.unwrap().len(), 1);
        assert_eq!(service.search(" ").await.unwrap().len(), 2);

        assert!(service.delete("Austin, TX", day(1)).await.unwrap());
        assert!(!service.delete("Austin, TX", day(1)).await.unwrap());
        assert_eq!(service.count().await.unwrap(), 1);
    }
}

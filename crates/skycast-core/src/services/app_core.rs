//! `AppCore` - the primary application facade.
//!
//! This is the composition root for core services. Adapters (the CLI today)
//! receive an `AppCore` instance and use it to access all functionality.

use crate::ports::{Repos, Services};

use super::{RecordService, SettingsService, WeatherService};

/// The core application facade.
///
/// Constructed at the adapter's composition root (bootstrap.rs) with concrete
/// repositories and network adapters.
///
/// # Example
///
/// ```ignore
/// let repos = CoreFactory::build_repos(pool);
/// let services = Services::new(Arc::new(geocoder), Arc::new(nws));
/// let core = AppCore::new(repos, services);
///
/// let report = core.weather().lookup("80302").await?;
/// ```
pub struct AppCore {
    weather: WeatherService,
    records: RecordService,
    settings: SettingsService,
}

impl AppCore {
    /// Create a new `AppCore` from repositories and network ports.
    pub fn new(repos: Repos, services: Services) -> Self {
        Self {
            weather: WeatherService::new(services.geocoder, services.forecast),
            records: RecordService::new(repos.records),
            settings: SettingsService::new(repos.settings),
        }
    }

    /// Access the weather lookup service.
    pub const fn weather(&self) -> &WeatherService {
        &self.weather
    }

    /// Access the saved record service.
    pub const fn records(&self) -> &RecordService {
        &self.records
    }

    /// Access the settings service.
    pub const fn settings(&self) -> &SettingsService {
        &self.settings
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::{
        Coordinates, ForecastPeriod, GridPoint, LocationQuery, NewWeatherRecord, WeatherRecord,
    };
    use crate::ports::{
        ForecastError, ForecastPort, GeocodeError, GeocoderPort, RepositoryError,
        SettingsRepository, WeatherRecordRepository,
    };
    use crate::settings::Settings;
    use async_trait::async_trait;
    use chrono::NaiveDate;
    use std::sync::{Arc, Mutex};

    struct EmptyRecordRepo;

    #[async_trait]
    impl WeatherRecordRepository for EmptyRecordRepo {
        async fn upsert(&self, _record: &NewWeatherRecord) -> Result<WeatherRecord, RepositoryError> {
            Err(RepositoryError::Storage("read-only".to_string()))
        }
        async fn list(&self) -> Result<Vec<WeatherRecord>, RepositoryError> {
            Ok(vec![])
        }
        async fn search_by_location(
            &self,
            _fragment: &str,
        ) -> Result<Vec<WeatherRecord>, RepositoryError> {
            Ok(vec![])
        }
        async fn delete(&self, _location: &str, _date: NaiveDate) -> Result<bool, RepositoryError> {
            Ok(false)
        }
        async fn count(&self) -> Result<u64, RepositoryError> {
            Ok(0)
        }
    }

    struct MockSettingsRepo {
        settings: Mutex<Settings>,
    }

    #[async_trait]
    impl SettingsRepository for MockSettingsRepo {
        async fn load(&self) -> Result<Settings, RepositoryError> {
            Ok(self.settings.lock().unwrap().clone())
        }
        async fn save(&self, settings: &Settings) -> Result<(), RepositoryError> {
            *self.settings.lock().unwrap() = settings.clone();
            Ok(())
        }
    }

    struct NowhereGeocoder;

    #[async_trait]
    impl GeocoderPort for NowhereGeocoder {
        async fn locate(&self, _query: &LocationQuery) -> Result<Option<Coordinates>, GeocodeError> {
            Ok(None)
        }
    }

    struct OfflineForecast;

    #[async_trait]
    impl ForecastPort for OfflineForecast {
        async fn grid_point(&self, _coordinates: Coordinates) -> Result<GridPoint, ForecastError> {
            Err(ForecastError::Network {
                message: "offline".to_string(),
            })
        }
        async fn forecast(&self, _grid: &GridPoint) -> Result<Vec<ForecastPeriod>, ForecastError> {
            Ok(vec![])
        }
        async fn hourly_forecast(
            &self,
            _grid: &GridPoint,
        ) -> Result<Vec<ForecastPeriod>, ForecastError> {
            Ok(vec![])
        }
    }

    #[tokio::test]
    async fn test_app_core_creation() {
        let repos = Repos::new(
            Arc::new(EmptyRecordRepo),
            Arc::new(MockSettingsRepo {
                settings: Mutex::new(Settings::with_defaults()),
            }),
        );
        let services = Services::new(Arc::new(NowhereGeocoder), Arc::new(OfflineForecast));

        let core = AppCore::new(repos, services);

        assert!(core.records().list().await.unwrap().is_empty());
        assert_eq!(core.settings().get().await.unwrap().future_periods, Some(13));
        assert!(core.weather().lookup("80302").await.unwrap().is_none());
    }
}

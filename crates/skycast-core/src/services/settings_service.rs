//! Settings service - orchestrates settings operations.

use crate::ports::{CoreError, SettingsRepository};
use crate::settings::{Settings, SettingsUpdate, validate_settings};
use std::sync::Arc;

/// Service for settings operations.
pub struct SettingsService {
    repo: Arc<dyn SettingsRepository>,
}

impl SettingsService {
    /// Create a new settings service.
    pub fn new(repo: Arc<dyn SettingsRepository>) -> Self {
        Self { repo }
    }

    /// Get current settings.
    pub async fn get(&self) -> Result<Settings, CoreError> {
        self.repo.load().await.map_err(CoreError::from)
    }

    /// Apply a partial update. Nothing is written if the result is invalid.
    pub async fn update(&self, update: SettingsUpdate) -> Result<Settings, CoreError> {
        let mut current = self.repo.load().await.map_err(CoreError::from)?;
        current.merge(&update);
        validate_settings(&current)?;
        self.repo.save(&current).await.map_err(CoreError::from)?;
        Ok(current)
    }

    /// Save complete settings (validates first).
    pub async fn save(&self, settings: &Settings) -> Result<(), CoreError> {
        validate_settings(settings)?;
        self.repo.save(settings).await.map_err(CoreError::from)
    }

    /// Restore defaults and return them.
    pub async fn reset(&self) -> Result<Settings, CoreError> {
        let defaults = Settings::with_defaults();
        self.repo.save(&defaults).await.map_err(CoreError::from)?;
        Ok(defaults)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ports::RepositoryError;
    use async_trait::async_trait;
    use std::sync::Mutex;

    struct MockSettingsRepo {
        settings: Mutex<Settings>,
    }

    impl MockSettingsRepo {
        fn new() -> Self {
            Self {
                settings: Mutex::new(Settings::with_defaults()),
            }
        }
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

    #[tokio::test]
    async fn test_get_default_settings() {
        let service = SettingsService::new(Arc::new(MockSettingsRepo::new()));

        let settings = service.get().await.unwrap();
        assert_eq!(settings.future_periods, Some(13));
        assert_eq!(settings.show_celsius, Some(true));
    }

    #[tokio::test]
    async fn test_update_settings() {
        let service = SettingsService::new(Arc::new(MockSettingsRepo::new()));

        let update = SettingsUpdate {
            default_location: Some(Some("80302".to_string())),
            future_periods: Some(Some(4)),
            ..Default::default()
        };

        let updated = service.update(update).await.unwrap();
        assert_eq!(updated.future_periods, Some(4));

        let fetched = service.get().await.unwrap();
        assert_eq!(fetched.default_location.as_deref(), Some("80302"));
        assert_eq!(fetched.future_periods, Some(4));
    }

    #[tokio::test]
    async fn test_invalid_update_is_not_persisted() {
        let service = SettingsService::new(Arc::new(MockSettingsRepo::new()));

        let err = service
            .update(SettingsUpdate {
                future_periods: Some(Some(40)),
                ..Default::default()
            })
            .await
            .unwrap_err();
        assert!(matches!(err, CoreError::Settings(_)));

        let fetched = service.get().await.unwrap();
        assert_eq!(fetched.future_periods, Some(13));
    }

    #[tokio::test]
    async fn test_reset_restores_defaults() {
        let service = SettingsService::new(Arc::new(MockSettingsRepo::new()));
        service
            .update(SettingsUpdate {
                show_celsius: Some(Some(false)),
                contact_email: Some(Some("me@example.com".to_string())),
                ..Default::default()
            })
            .await
            .unwrap();

        let reset = service.reset().await.unwrap();
        assert_eq!(reset, Settings::with_defaults());
        assert_eq!(service.get().await.unwrap(), Settings::with_defaults());
    }
}

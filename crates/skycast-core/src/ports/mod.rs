//! Port definitions (trait abstractions) for external systems.
//!
//! Ports define the interfaces that the core domain expects from infrastructure.
//! They contain no implementation details and use only domain types.
//!
//! # Design Rules
//!
//! - No `sqlx` or `reqwest` types in any signature
//! - Repositories are CRUD-focused
//! - Network ports return typed errors; "nothing found" is a value, not an error

pub mod forecast;
pub mod geocoder;
pub mod record_repository;
pub mod settings_repository;

use std::sync::Arc;
use thiserror::Error;

pub use forecast::{ForecastError, ForecastPort};
pub use geocoder::{GeocodeError, GeocoderPort};
pub use record_repository::WeatherRecordRepository;
pub use settings_repository::SettingsRepository;

/// Container for all repository trait objects.
///
/// Lives in `skycast-core` so that `AppCore` can accept it without
/// depending on `skycast-db`.
#[derive(Clone)]
pub struct Repos {
    /// Saved weather records.
    pub records: Arc<dyn WeatherRecordRepository>,
    /// Application settings.
    pub settings: Arc<dyn SettingsRepository>,
}

impl Repos {
    /// Create a new Repos container.
    pub fn new(
        records: Arc<dyn WeatherRecordRepository>,
        settings: Arc<dyn SettingsRepository>,
    ) -> Self {
        Self { records, settings }
    }
}

/// Container for the network-facing ports.
#[derive(Clone)]
pub struct Services {
    pub geocoder: Arc<dyn GeocoderPort>,
    pub forecast: Arc<dyn ForecastPort>,
}

impl Services {
    /// Create a new Services container.
    pub fn new(geocoder: Arc<dyn GeocoderPort>, forecast: Arc<dyn ForecastPort>) -> Self {
        Self { geocoder, forecast }
    }
}

/// Domain-specific errors for repository operations.
///
/// This error type abstracts away storage implementation details (e.g., sqlx errors)
/// and provides a clean interface for services to handle storage failures.
#[derive(Debug, Error)]
pub enum RepositoryError {
    /// The requested entity was not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// Storage backend error (database, filesystem, etc.).
    #[error("Storage error: {0}")]
    Storage(String),

    /// Serialization or deserialization failed.
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// A constraint was violated (e.g., NOT NULL, unique constraint).
    #[error("Constraint violation: {0}")]
    Constraint(String),
}

/// Core error type for semantic domain errors.
///
/// Adapters map this to their own error types (CLI exit codes, JSON output).
#[derive(Debug, Error)]
pub enum CoreError {
    /// Repository operation failed.
    #[error(transparent)]
    Repository(#[from] RepositoryError),

    /// Geocoding failed.
    #[error(transparent)]
    Geocode(#[from] GeocodeError),

    /// Forecast retrieval failed.
    #[error(transparent)]
    Forecast(#[from] ForecastError),

    /// Settings validation error.
    #[error(transparent)]
    Settings(#[from] crate::settings::SettingsError),

    /// Validation error (invalid input).
    #[error("Validation error: {0}")]
    Validation(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Configuration(String),

    /// Requested entity does not exist.
    #[error("Not found: {0}")]
    NotFound(String),
}

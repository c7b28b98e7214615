//! Core domain, ports and services for skycast.
//!
//! This crate holds everything that does not touch a database, the network
//! or the terminal. Adapters (`skycast-db`, `skycast-net`, `skycast-cli`)
//! implement the traits in [`ports`] and compose them into an
//! [`AppCore`](services::AppCore).
#![deny(unused_crate_dependencies)]

pub mod domain;
pub mod paths;
pub mod ports;
pub mod services;
pub mod settings;

// Re-export commonly used types for convenience
pub use domain::{
    Coordinates, ForecastPeriod, GridPoint, LocationQuery, NewWeatherRecord, WeatherRecord,
    WeatherReport, fahrenheit_to_celsius_half, format_celsius, format_temperature_pair,
};
pub use ports::{
    CoreError, ForecastError, ForecastPort, GeocodeError, GeocoderPort, Repos, RepositoryError,
    Services, SettingsRepository, WeatherRecordRepository,
};
pub use services::{AppCore, RecordService, SettingsService, WeatherService};
pub use settings::{
    DEFAULT_FUTURE_PERIODS, MAX_FUTURE_PERIODS, Settings, SettingsError, SettingsUpdate,
    validate_settings,
};

// Re-export path utilities
pub use paths::{
    DATA_DIR_ENV, PathError, ResolvedPaths, data_root, database_path, env_file_path,
    normalize_user_path, resolve_database_path,
};

#[cfg(test)]
use tokio_test as _;

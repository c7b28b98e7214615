//! CLI-specific error types and mappings.
//!
//! Handlers return `anyhow::Result`; `main` turns whatever comes back into a
//! [`CliError`] to pick a message and an exit code.

use skycast_core::{CoreError, ForecastError, GeocodeError, PathError};
use thiserror::Error;

/// CLI-specific error type.
#[derive(Debug, Error)]
pub enum CliError {
    /// Core domain error.
    #[error("{0}")]
    Core(String),

    /// Argument or input validation error.
    #[error("Invalid arguments: {0}")]
    Arguments(String),

    /// Location or forecast not found.
    #[error("Not found: {0}")]
    NotFound(String),

    /// IO error (file not found, permission denied, etc.).
    #[error("IO error: {0}")]
    Io(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Database error.
    #[error("Database error: {0}")]
    Database(String),

    /// weather.gov or the geocoder could not be reached.
    #[error("Service unavailable: {0}")]
    Unavailable(String),

    /// A remote service answered with something we could not read.
    #[error("Unexpected response: {0}")]
    Protocol(String),
}

impl CliError {
    /// Map error to appropriate exit code.
    ///
    /// Exit codes follow Unix conventions:
    /// - 0: Success
    /// - 1: General error
    /// - 2: Misuse of shell command (invalid arguments)
    /// - 64-78: Reserved for specific error categories (see sysexits.h)
    pub const fn exit_code(&self) -> i32 {
        match self {
            Self::Core(_) | Self::NotFound(_) => 1,
            Self::Arguments(_) => 2, // EX_USAGE
            Self::Unavailable(_) => 69, // EX_UNAVAILABLE
            Self::Database(_) => 73, // EX_CANTCREAT (closest fit)
            Self::Io(_) => 74, // EX_IOERR
            Self::Protocol(_) => 76, // EX_PROTOCOL
            Self::Config(_) => 78, // EX_CONFIG
        }
    }

    /// Classify an error returned by a handler or bootstrap.
    pub fn from_anyhow(err: anyhow::Error) -> Self {
        let err = match err.downcast::<Self>() {
            Ok(cli) => return cli,
            Err(err) => err,
        };
        let err = match err.downcast::<CoreError>() {
            Ok(core) => return core.into(),
            Err(err) => err,
        };
        let err = match err.downcast::<PathError>() {
            Ok(path) => return Self::Config(path.to_string()),
            Err(err) => err,
        };
        match err.downcast::<std::io::Error>() {
            Ok(io) => io.into(),
            Err(err) => Self::Core(format!("{err:#}")),
        }
    }
}

impl From<CoreError> for CliError {
    fn from(err: CoreError) -> Self {
        match err {
            CoreError::Repository(repo_err) => Self::Database(repo_err.to_string()),
            CoreError::Settings(settings_err) => Self::Config(settings_err.to_string()),
            CoreError::Validation(msg) => Self::Arguments(msg),
            CoreError::Configuration(msg) => Self::Config(msg),
            CoreError::NotFound(msg) => Self::NotFound(msg),
            CoreError::Geocode(geo_err) => match geo_err {
                GeocodeError::Network { .. } | GeocodeError::RateLimited => {
                    Self::Unavailable(geo_err.to_string())
                }
                GeocodeError::InvalidResponse { .. } => Self::Protocol(geo_err.to_string()),
                GeocodeError::Configuration { .. } => Self::Config(geo_err.to_string()),
            },
            CoreError::Forecast(forecast_err) => match forecast_err {
                ForecastError::Network { .. } | ForecastError::RateLimited => {
                    Self::Unavailable(forecast_err.to_string())
                }
                ForecastError::InvalidResponse { .. } => Self::Protocol(forecast_err.to_string()),
                ForecastError::Configuration { .. } => Self::Config(forecast_err.to_string()),
                ForecastError::OutsideCoverage { .. }
                | ForecastError::NoHourlyForecast
                | ForecastError::EmptyForecast => Self::NotFound(forecast_err.to_string()),
            },
        }
    }
}

impl From<std::io::Error> for CliError {
    fn from(err: std::io::Error) -> Self {
        Self::Io(err.to_string())
    }
}

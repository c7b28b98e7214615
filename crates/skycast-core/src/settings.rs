//! Settings domain types and validation.
//!
//! This module contains the core settings types used across the application.
//! These are pure domain types with no infrastructure dependencies.

use serde::{Deserialize, Serialize};

/// Default number of future periods printed after current conditions.
///
/// weather.gov returns fourteen twelve-hour periods; the first is shown as
/// the detailed description, leaving thirteen.
pub const DEFAULT_FUTURE_PERIODS: u32 = 13;

/// Largest accepted `future_periods` value.
pub const MAX_FUTURE_PERIODS: u32 = 14;

/// Application settings structure.
///
/// All fields are optional to support partial updates and graceful defaults.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct Settings {
    /// Location used when a command is run without a query.
    pub default_location: Option<String>,

    /// How many future forecast periods to print (1-14).
    pub future_periods: Option<u32>,

    /// Whether to show Celsius alongside Fahrenheit.
    pub show_celsius: Option<bool>,

    /// Contact address sent in the HTTP User-Agent.
    pub contact_email: Option<String>,
}

impl Settings {
    /// Create settings with sensible defaults.
    #[must_use]
    pub const fn with_defaults() -> Self {
        Self {
            default_location: None,
            future_periods: Some(DEFAULT_FUTURE_PERIODS),
            show_celsius: Some(true),
            contact_email: None,
        }
    }

    /// Get the effective number of future periods (with default fallback).
    #[must_use]
    pub const fn effective_future_periods(&self) -> u32 {
        match self.future_periods {
            Some(n) => n,
            None => DEFAULT_FUTURE_PERIODS,
        }
    }

    /// Whether Celsius should be shown (defaults to true).
    #[must_use]
    pub const fn effective_show_celsius(&self) -> bool {
        match self.show_celsius {
            Some(v) => v,
            None => true,
        }
    }

    /// Merge another settings into this one, only updating fields that are Some.
    pub fn merge(&mut self, other: &SettingsUpdate) {
        if let Some(ref location) = other.default_location {
            self.default_location.clone_from(location);
        }
        if let Some(ref periods) = other.future_periods {
            self.future_periods = *periods;
        }
        if let Some(ref show) = other.show_celsius {
            self.show_celsius = *show;
        }
        if let Some(ref email) = other.contact_email {
            self.contact_email.clone_from(email);
        }
    }
}

/// Partial settings update.
///
/// Each field is `Option<Option<T>>`:
/// - `None` = don't change this field
/// - `Some(None)` = set field to None/null
/// - `Some(Some(value))` = set field to value
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SettingsUpdate {
    pub default_location: Option<Option<String>>,
    pub future_periods: Option<Option<u32>>,
    pub show_celsius: Option<Option<bool>>,
    pub contact_email: Option<Option<String>>,
}

impl SettingsUpdate {
    /// True if the update would not change anything.
    pub const fn is_empty(&self) -> bool {
        self.default_location.is_none()
            && self.future_periods.is_none()
            && self.show_celsius.is_none()
            && self.contact_email.is_none()
    }
}

/// Settings validation error.
#[derive(Debug, Clone, thiserror::Error)]
pub enum SettingsError {
    #[error("Future periods must be between 1 and 14, got {0}")]
    InvalidFuturePeriods(u32),

    #[error("Default location cannot be blank")]
    BlankDefaultLocation,

    #[error("Contact email '{0}' is not an email address")]
    InvalidContactEmail(String),
}

/// Validate settings values.
pub fn validate_settings(settings: &Settings) -> Result<(), SettingsError> {
    if let Some(periods) = settings.future_periods {
        if !(1..=MAX_FUTURE_PERIODS).contains(&periods) {
            return Err(SettingsError::InvalidFuturePeriods(periods));
        }
    }

    if let Some(ref location) = settings.default_location {
        if location.trim().is_empty() {
            return Err(SettingsError::BlankDefaultLocation);
        }
    }

    if let Some(ref email) = settings.contact_email {
        let trimmed = email.trim();
        let valid = trimmed
            .split_once('@')
            .is_some_and(|(user, host)| !user.is_empty() && !host.is_empty());
        if !valid {
            return Err(SettingsError::InvalidContactEmail(email.clone()));
        }
    }

    Ok(())
}

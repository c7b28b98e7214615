//! Core services - the application's business logic layer.
//!
//! Services orchestrate between ports (trait interfaces) and domain logic.
//! They don't know about concrete implementations.

mod app_core;
mod record_service;
mod settings_service;
mod weather_service;

pub use app_core::AppCore;
pub use record_service::RecordService;
pub use settings_service::SettingsService;
pub use weather_service::WeatherService;

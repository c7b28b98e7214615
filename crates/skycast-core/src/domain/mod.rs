//! Core domain types.
//!
//! These types represent the pure domain model, independent of any
//! infrastructure concerns (database, HTTP, terminal).
//!
//! # Structure
//!
//! - `location` - Lookup queries and coordinates
//! - `forecast` - Forecast periods, grid points and assembled reports
//! - `record` - Saved weather records
//! - `temperature` - Unit conversion and display

mod forecast;
mod location;
mod record;
mod temperature;

pub use forecast::{ForecastPeriod, GridPoint, WeatherReport};
pub use location::{Coordinates, LocationQuery};
pub use record::{NewWeatherRecord, WeatherRecord};
pub use temperature::{fahrenheit_to_celsius_half, format_celsius, format_temperature_pair};

#[cfg(test)]
pub(crate) use forecast::fixtures;

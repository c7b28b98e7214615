//! Main commands enum and primary subcommands.

use chrono::NaiveDate;
use clap::Subcommand;
use skycast_core::{Coordinates, MAX_FUTURE_PERIODS};

use crate::config_commands::ConfigCommand;

/// Available skycast commands.
#[derive(Subcommand)]
pub enum Commands {
    /// Show current conditions and the forecast for a location
    Now {
        /// 5-digit ZIP code or "City, State" (defaults to the configured location)
        #[arg(conflicts_with = "at")]
        query: Option<String>,
        /// Look up known coordinates instead, e.g. "40.015,-105.27"
        #[arg(long, value_name = "LAT,LON", value_parser = parse_coordinates, allow_hyphen_values = true)]
        at: Option<Coordinates>,
        /// Number of future forecast periods to show
        #[arg(long, value_parser = clap::value_parser!(u32).range(1..=i64::from(MAX_FUTURE_PERIODS)))]
        periods: Option<u32>,
        /// Print the full report as JSON
        #[arg(long)]
        json: bool,
    },

    /// Look up a location and save its current conditions
    Save {
        /// 5-digit ZIP code or "City, State" (defaults to the configured location)
        query: Option<String>,
        /// Record date as YYYY-MM-DD (defaults to today)
        #[arg(long)]
        date: Option<NaiveDate>,
    },

    /// Save a weather record entered by hand
    Add {
        /// Location label, e.g. "Boulder, CO"
        #[arg(long)]
        location: String,
        /// Record date as YYYY-MM-DD
        #[arg(long)]
        date: NaiveDate,
        /// Temperature in Fahrenheit
        #[arg(long, allow_negative_numbers = true)]
        temperature: i32,
        /// Wind speed, e.g. "10 mph"
        #[arg(long)]
        wind_speed: String,
        /// Wind direction, e.g. "NW"
        #[arg(long)]
        wind_direction: String,
        /// Short forecast text
        #[arg(long)]
        forecast: Option<String>,
    },

    /// List saved weather records
    History {
        /// Only show records whose location contains this text
        #[arg(short, long)]
        location: Option<String>,
    },

    /// Delete a saved weather record
    Delete {
        /// Location label exactly as saved
        location: String,
        /// Record date as YYYY-MM-DD
        date: NaiveDate,
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },

    /// Show how many weather records are saved
    Count,

    /// View or change settings
    Config {
        #[command(subcommand)]
        command: ConfigCommand,
    },

    /// Show resolved paths for the data directory and database
    Paths,
}

/// Parse `LAT,LON` into coordinates.
fn parse_coordinates(value: &str) -> Result<Coordinates, String> {
    let (lat, lon) = value
        .split_once(',')
        .ok_or_else(|| format!("expected LAT,LON but got '{value}'"))?;
    let latitude: f64 = lat
        .trim()
        .parse()
        .map_err(|_| format!("invalid latitude '{}'", lat.trim()))?;
    let longitude: f64 = lon
        .trim()
        .parse()
        .map_err(|_| format!("invalid longitude '{}'", lon.trim()))?;

    let coordinates = Coordinates::new(latitude, longitude);
    if coordinates.is_valid() {
        Ok(coordinates)
    } else {
        Err(format!("coordinates out of range: {value}"))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_coordinates() {
        let coords = parse_coordinates("40.015, -105.27").unwrap();
        assert!((coords.latitude - 40.015).abs() < f64::EPSILON);
        assert!((coords.longitude + 105.27).abs() < f64::EPSILON);
    }

    #[test]
    fn test_parse_coordinates_rejects_bad_input() {
        assert!(parse_coordinates("40.015").is_err());
        assert!(parse_coordinates("north,-105").is_err());
        assert!(parse_coordinates("95,-105").is_err());
    }
}

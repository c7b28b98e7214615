//! Main CLI parser and top-level argument handling.

use clap::Parser;

use crate::commands::Commands;

/// Environment variable overriding the weather.gov base URL.
pub const NWS_URL_ENV: &str = "SKYCAST_NWS_URL";

/// Environment variable overriding the Nominatim base URL.
pub const GEOCODER_URL_ENV: &str = "SKYCAST_GEOCODER_URL";

/// Command-line interface for looking up and recording US weather.
///
/// Global options apply to every subcommand.
#[derive(Parser)]
#[command(name = "skycast")]
#[command(about = "National Weather Service forecasts and a local weather log")]
#[command(version)]
pub struct Cli {
    /// Use this database file instead of the default location
    #[arg(long = "db", value_name = "PATH", global = true)]
    pub database: Option<String>,

    /// Override the weather.gov API base URL
    #[arg(long, value_name = "URL", env = NWS_URL_ENV, global = true)]
    pub nws_url: Option<String>,

    /// Override the Nominatim API base URL
    #[arg(long, value_name = "URL", env = GEOCODER_URL_ENV, global = true)]
    pub geocoder_url: Option<String>,

    /// Enable verbose/debug output
    #[arg(short = 'v', long = "verbose", global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Option<Commands>,
}

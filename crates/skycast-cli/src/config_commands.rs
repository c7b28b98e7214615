//! Configuration management subcommands.

use clap::Subcommand;

/// Settings commands.
#[derive(Subcommand)]
pub enum ConfigCommand {
    /// Show all current settings
    Show,
    /// Update one or more settings
    Set {
        /// Location used by `now` and `save` when none is given
        #[arg(long, conflicts_with = "clear_default_location")]
        default_location: Option<String>,
        /// Forget the default location
        #[arg(long)]
        clear_default_location: bool,
        /// Number of future forecast periods to show (1-14)
        #[arg(long)]
        future_periods: Option<u32>,
        /// Show Celsius next to Fahrenheit (true/false)
        #[arg(long)]
        show_celsius: Option<bool>,
        /// Contact address sent to weather.gov and Nominatim in the User-Agent
        #[arg(long, conflicts_with = "clear_contact_email")]
        contact_email: Option<String>,
        /// Stop sending a contact address
        #[arg(long)]
        clear_contact_email: bool,
    },
    /// Reset all settings to defaults
    Reset {
        /// Skip confirmation prompt
        #[arg(short, long)]
        force: bool,
    },
}

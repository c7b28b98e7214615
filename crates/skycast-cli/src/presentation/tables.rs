//! Table formatting utilities for CLI output.

use std::fmt::Write;

use skycast_core::{WeatherRecord, format_temperature_pair};

/// Truncates a string to a maximum number of characters, adding "..." if needed.
///
/// # Examples
///
/// ```rust
/// use skycast_cli::presentation::truncate_string;
///
/// assert_eq!(truncate_string("Boulder", 10), "Boulder");
/// assert_eq!(truncate_string("Partly Cloudy", 8), "Partl...");
/// ```
pub fn truncate_string(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else {
        let kept: String = s.chars().take(max_len.saturating_sub(3)).collect();
        format!("{kept}...")
    }
}

/// Format a Fahrenheit temperature, adding Celsius when `show_celsius` is set.
pub fn format_temperature(fahrenheit: i32, show_celsius: bool) -> String {
    if show_celsius {
        format_temperature_pair(fahrenheit)
    } else {
        format!("{fahrenheit}°F")
    }
}

/// Format an optional value for table display, returning a default if None.
pub fn format_optional<T: std::fmt::Display>(value: Option<&T>, default: &str) -> String {
    value.map_or_else(|| default.to_string(), ToString::to_string)
}

const RECORD_TABLE_WIDTH: usize = 96;

/// Print saved records as a table.
pub fn print_record_table(records: &[WeatherRecord], show_celsius: bool) {
    print!("{}", render_record_table(records, show_celsius));
}

/// Render saved records as a table.
pub fn render_record_table(records: &[WeatherRecord], show_celsius: bool) -> String {
    let mut out = String::new();

    // Writing to a String cannot fail
    let _ = writeln!(
        out,
        "{:<24} {:<10} {:<14} {:<16} Forecast",
        "Location", "Date", "Temp", "Wind"
    );
    let _ = writeln!(out, "{}", "-".repeat(RECORD_TABLE_WIDTH));

    for record in records {
        let wind = format!("{} {}", record.wind_speed, record.wind_direction);
        let _ = writeln!(
            out,
            "{:<24} {:<10} {:<14} {:<16} {}",
            truncate_string(&record.location, 23),
            record.date.format("%Y-%m-%d"),
            format_temperature(record.temperature, show_celsius),
            truncate_string(wind.trim(), 15),
            format_optional(Some(&record.forecast).filter(|f| !f.is_empty()), "--"),
        );
    }

    out
}

//! Terminal rendering of a [`WeatherReport`].
//!
//! A report is shown as three panes: current conditions, the detailed
//! description of the first forecast period, and a table of the periods
//! that follow.

use std::fmt::Write;

use skycast_core::{ForecastPeriod, Settings, WeatherReport};

use super::tables::{format_optional, format_temperature, truncate_string};

const FUTURE_TABLE_WIDTH: usize = 78;

/// Display options for [`render_report`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportOpts {
    /// Maximum number of future periods to list.
    pub periods: usize,
    /// Show Celsius next to Fahrenheit.
    pub show_celsius: bool,
}

impl ReportOpts {
    /// Options from stored settings; `periods` overrides the stored count.
    pub fn from_settings(settings: &Settings, periods: Option<u32>) -> Self {
        let periods = periods.unwrap_or_else(|| settings.effective_future_periods());
        Self {
            periods: usize::try_from(periods).unwrap_or(usize::MAX),
            show_celsius: settings.effective_show_celsius(),
        }
    }

    fn temperature(self, fahrenheit: i32) -> String {
        format_temperature(fahrenheit, self.show_celsius)
    }
}

/// Render a report to a string.
pub fn render_report(report: &WeatherReport, opts: ReportOpts) -> String {
    let mut out = String::new();
    let current = &report.current;

    // Writing to a String cannot fail
    let _ = writeln!(out, "{} ({})", report.location_label(), report.coordinates);
    let _ = writeln!(out);
    let _ = writeln!(out, "  {}", opts.temperature(current.temperature));
    let _ = writeln!(out, "  {}", report.wind_display());
    if !current.short_forecast.is_empty() {
        let _ = writeln!(out, "  {}", current.short_forecast);
    }
    let _ = writeln!(out);
    let _ = writeln!(out, "{}", report.description);

    let future: Vec<&ForecastPeriod> = report.future.iter().take(opts.periods).collect();
    if future.is_empty() {
        return out;
    }

    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "{:<16} {:<12} {:<18} {:<6} Forecast",
        "Period", "Temp", "Wind", "Rain"
    );
    let _ = writeln!(out, "{}", "-".repeat(FUTURE_TABLE_WIDTH));
    for period in future {
        let rain = period.precipitation_probability.map(|p| format!("{p}%"));
        let _ = writeln!(
            out,
            "{:<16} {:<12} {:<18} {:<6} {}",
            truncate_string(&period.name, 15),
            opts.temperature(period.temperature),
            truncate_string(&period.wind_summary(), 17),
            format_optional(rain.as_ref(), "--"),
            period.short_forecast,
        );
    }

    out
}

/// Print a report to stdout.
pub fn display_report(report: &WeatherReport, opts: ReportOpts) {
    print!("{}", render_report(report, opts));
}

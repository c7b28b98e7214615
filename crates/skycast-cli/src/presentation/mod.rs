//! Shared CLI presentation utilities.
//!
//! Keep this module format-only: no lookups, no storage access.

pub mod report_display;
pub mod tables;

pub use report_display::{ReportOpts, display_report, render_report};
pub use tables::{
    format_optional, format_temperature, print_record_table, render_record_table, truncate_string,
};

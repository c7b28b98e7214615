//! Save command handler.
//!
//! Looks up a location and stores its current conditions as a record.

use anyhow::Result;
use chrono::NaiveDate;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::format_temperature;

/// Execute the save command.
///
/// A record with the same location and date is replaced.
pub async fn execute(ctx: &CliContext, query: Option<String>, date: Option<NaiveDate>) -> Result<()> {
    let query = super::query_or_default(ctx, query).await?;
    let report = ctx
        .app()
        .weather()
        .lookup(&query)
        .await?
        .ok_or(CliError::NotFound(query))?;

    let record = ctx.app().records().save_report(&report, date).await?;
    let settings = ctx.app().settings().get().await?;
    println!(
        "✓ Saved {} for {} on {}.",
        format_temperature(record.temperature, settings.effective_show_celsius()),
        record.location,
        record.date
    );
    Ok(())
}

//! Add command handler.
//!
//! Stores a weather record typed in by the user.

use anyhow::Result;
use skycast_core::NewWeatherRecord;

use crate::bootstrap::CliContext;

/// Execute the add command.
pub async fn execute(ctx: &CliContext, record: NewWeatherRecord) -> Result<()> {
    let stored = ctx.app().records().save(record).await?;
    println!(
        "✓ Saved record for {} on {} (ID {}).",
        stored.location, stored.date, stored.id
    );
    Ok(())
}

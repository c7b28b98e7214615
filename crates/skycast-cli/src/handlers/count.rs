//! Count command handler.

use anyhow::Result;

use crate::bootstrap::CliContext;

/// Execute the count command.
pub async fn execute(ctx: &CliContext) -> Result<()> {
    let count = ctx.app().records().count().await?;
    println!("{count} weather record(s) saved.");
    Ok(())
}

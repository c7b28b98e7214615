//! History command handler.
//!
//! Lists saved weather records, optionally filtered by location.

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::presentation::print_record_table;

/// Execute the history command.
pub async fn execute(ctx: &CliContext, location: Option<String>) -> Result<()> {
    let records = match location.as_deref() {
        Some(fragment) => ctx.app().records().search(fragment).await?,
        None => ctx.app().records().list().await?,
    };

    if records.is_empty() {
        match location {
            Some(fragment) => println!("No records found matching: '{fragment}'"),
            None => {
                println!("No weather records saved yet.");
                println!("Use 'skycast save <location>' to record today's weather.");
            }
        }
        return Ok(());
    }

    let settings = ctx.app().settings().get().await?;
    println!("Found {} record(s):\n", records.len());
    print_record_table(&records, settings.effective_show_celsius());
    Ok(())
}

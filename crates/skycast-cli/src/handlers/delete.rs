//! Delete command handler.

use anyhow::Result;
use chrono::NaiveDate;

use crate::bootstrap::CliContext;
use crate::utils::input;

/// Execute the delete command.
///
/// Asks for confirmation unless `force` is set. Deleting a record that
/// does not exist is not an error.
pub async fn execute(ctx: &CliContext, location: &str, date: NaiveDate, force: bool) -> Result<()> {
    if !force {
        let confirm = input::prompt_confirmation(&format!(
            "Delete the record for '{location}' on {date}?"
        ))?;
        if !confirm {
            println!("Delete cancelled.");
            return Ok(());
        }
    }

    if ctx.app().records().delete(location, date).await? {
        println!("✓ Deleted record for '{location}' on {date}.");
    } else {
        println!("No record found for '{location}' on {date}.");
    }
    Ok(())
}

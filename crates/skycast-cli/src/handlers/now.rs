//! Now command handler.
//!
//! Looks up the weather for a location and prints current conditions,
//! the forecast description and upcoming periods.

use anyhow::Result;
use skycast_core::Coordinates;

use crate::bootstrap::CliContext;
use crate::error::CliError;
use crate::presentation::{ReportOpts, display_report};

/// Arguments for the now command.
pub struct NowArgs {
    pub query: Option<String>,
    pub at: Option<Coordinates>,
    pub periods: Option<u32>,
    pub json: bool,
}

/// Execute the now command.
///
/// # Errors
///
/// Fails with [`CliError::NotFound`] if the location cannot be geocoded, or
/// with the underlying error if weather.gov cannot be reached.
pub async fn execute(ctx: &CliContext, args: NowArgs) -> Result<()> {
    let report = match args.at {
        Some(coordinates) => ctx.app().weather().lookup_coordinates(coordinates).await?,
        None => {
            let query = super::query_or_default(ctx, args.query).await?;
            ctx.app()
                .weather()
                .lookup(&query)
                .await?
                .ok_or(CliError::NotFound(query))?
        }
    };

    if args.json {
        println!("{}", report.to_json_pretty()?);
        return Ok(());
    }

    let settings = ctx.app().settings().get().await?;
    display_report(&report, ReportOpts::from_settings(&settings, args.periods));
    Ok(())
}

//! Command handlers that delegate to `AppCore`.
//!
//! Handlers follow the canonical pattern:
//! - Signature: `pub async fn execute(ctx: &CliContext, ...) -> Result<()>`
//! - Thin wrappers that:
//!   1. Parse/validate CLI-specific input
//!   2. Call `AppCore` methods
//!   3. Format output for the terminal
//!
//! Handlers should NOT access repositories directly or contain business logic.

pub mod add;
pub mod config;
pub mod count;
pub mod delete;
pub mod history;
pub mod now;
pub mod paths;
pub mod save;

use anyhow::Result;

use crate::bootstrap::CliContext;
use crate::error::CliError;

/// The query to look up: the argument, or the configured default location.
pub(crate) async fn query_or_default(ctx: &CliContext, query: Option<String>) -> Result<String> {
    if let Some(query) = query.filter(|q| !q.trim().is_empty()) {
        return Ok(query);
    }

    let settings = ctx.app().settings().get().await?;
    settings.default_location.ok_or_else(|| {
        CliError::Arguments(
            "No location given and no default set. \
             Pass a ZIP code or \"City, State\", or run 'skycast config set --default-location'."
                .to_string(),
        )
        .into()
    })
}

//! Paths command handler.
//!
//! Displays all resolved paths for diagnostics.

use anyhow::Result;

use skycast_core::ResolvedPaths;

/// Execute the paths command.
///
/// Resolves and displays all paths used by skycast in `key = value` format,
/// honouring the `--db` override.
pub fn execute(database: Option<&str>) -> Result<()> {
    let paths = ResolvedPaths::resolve_with_database(database)?;
    println!("{paths}");
    Ok(())
}

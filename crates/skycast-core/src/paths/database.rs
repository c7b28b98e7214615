//! Database path resolution.

use std::path::PathBuf;

use super::error::PathError;
use super::platform::{data_root, ensure_dir, normalize_user_path};

/// File name of the `SQLite` database.
pub const DATABASE_FILE_NAME: &str = "skycast.db";

/// Get the path to the skycast database file.
///
/// Returns `<data_root>/data/skycast.db`. The `data/` subdirectory is
/// created if it doesn't exist.
pub fn database_path() -> Result<PathBuf, PathError> {
    let data_dir = data_root()?.join("data");
    ensure_dir(&data_dir)?;
    Ok(data_dir.join(DATABASE_FILE_NAME))
}

/// Resolve the database path, honouring an explicit `--db` override.
pub fn resolve_database_path(override_path: Option<&str>) -> Result<PathBuf, PathError> {
    match override_path {
        Some(raw) => normalize_user_path(raw),
        None => database_path(),
    }
}

//! Resolved path snapshot for the `skycast paths` command.

use std::path::PathBuf;

use super::{PathError, data_root, env_file_path, resolve_database_path};

/// All resolved paths captured in a single struct.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ResolvedPaths {
    /// Root directory for application data
    pub data_root: PathBuf,
    /// Path to the `SQLite` database file
    pub database_path: PathBuf,
    /// Optional `.env` file read at startup
    pub env_file: PathBuf,
}

impl ResolvedPaths {
    /// Resolve all paths using the current environment.
    pub fn resolve() -> Result<Self, PathError> {
        Self::resolve_with_database(None)
    }

    /// Resolve with an explicit database override (`--db`).
    pub fn resolve_with_database(database: Option<&str>) -> Result<Self, PathError> {
        Ok(Self {
            data_root: data_root()?,
            database_path: resolve_database_path(database)?,
            env_file: env_file_path()?,
        })
    }
}

impl std::fmt::Display for ResolvedPaths {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        writeln!(f, "data_root = {}", self.data_root.display())?;
        writeln!(f, "database_path = {}", self.database_path.display())?;
        write!(f, "env_file = {}", self.env_file.display())
    }
}

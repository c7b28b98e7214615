//! Path utilities for skycast data directories.
//!
//! - Returns `PathBuf` and `PathError` for clear error handling
//! - No terminal I/O; adapters decide how to report failures

mod database;
mod error;
mod platform;
mod resolver;

#[cfg(test)]
mod test_utils;

pub use database::{DATABASE_FILE_NAME, database_path, resolve_database_path};
pub use error::PathError;
pub use platform::{DATA_DIR_ENV, data_root, env_file_path, normalize_user_path};
pub use resolver::ResolvedPaths;

use std::env;
use std::path::PathBuf;

use crate::error::AppError;

/// Filesystem location of the SQLite database file (defaults to
/// ./data/videos.db)
pub fn db_path() -> PathBuf {
    env::var("DB_PATH")
        .map(PathBuf::from)
        .unwrap_or_else(|_| PathBuf::from("./data/videos.db"))
}

/// Build the SeaORM connection URL for the embedded store, creating the
/// parent directory if it does not exist yet. `mode=rwc` lets SQLite create
/// the file on first open.
pub fn db_url() -> Result<String, AppError> {
    let path = db_path();

    if let Some(dir) = path.parent() {
        if !dir.as_os_str().is_empty() && !dir.exists() {
            std::fs::create_dir_all(dir).map_err(|e| {
                AppError::config(format!("Failed to create database directory: {e}"))
            })?;
        }
    }

    Ok(format!("sqlite://{}?mode=rwc", path.display()))
}

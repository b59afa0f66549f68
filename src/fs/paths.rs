//! Path and directory management.

use std::path::{Path, PathBuf};

use crate::config::Config;
use crate::error::Result;
use crate::fs::naming::query_to_dir_name;

/// Get the folder images for `query` are saved in.
pub fn get_query_folder(config: &Config, query: &str) -> Result<PathBuf> {
    Ok(config.download_directory().join(query_to_dir_name(query)?))
}

/// Ensure a directory exists, creating it if necessary.
pub fn ensure_dir(path: &Path) -> Result<()> {
    if !path.exists() {
        tracing::debug!("Creating directory {}", path.display());
        std::fs::create_dir_all(path)?;
    }
    Ok(())
}

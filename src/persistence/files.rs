use super::error::StoreError;
use anyhow::{Context, Result};
use std::env;
use std::fs;
use std::io::Write;
use std::path::{Path, PathBuf};
use tempfile::NamedTempFile;

const DIR_NAME: &str = ".depot";

/// Get the depot directory - checks for local .depot first, then falls back to global ~/.depot
pub fn get_depot_dir() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    if let Some(local_dir) = find_local_depot(&current_dir) {
        return Ok(local_dir);
    }

    let home = dirs::home_dir().context("Could not determine home directory")?;
    Ok(home.join(DIR_NAME))
}

/// Find local .depot directory by walking up the directory tree
fn find_local_depot(start_dir: &Path) -> Option<PathBuf> {
    let mut current = start_dir;

    loop {
        let depot_dir = current.join(DIR_NAME);
        if depot_dir.is_dir() {
            return Some(depot_dir);
        }

        current = current.parent()?;
    }
}

/// Ensure the depot directory exists
pub fn ensure_depot_dir() -> Result<PathBuf> {
    let dir = get_depot_dir()?;
    if !dir.exists() {
        fs::create_dir_all(&dir)
            .with_context(|| format!("Failed to create directory: {}", dir.display()))?;
    }
    Ok(dir)
}

/// Initialize a local .depot directory in the current directory
pub fn init_local_depot() -> Result<PathBuf> {
    let current_dir = env::current_dir().context("Could not determine current directory")?;
    let depot_dir = current_dir.join(DIR_NAME);

    if depot_dir.exists() {
        anyhow::bail!("Depot directory already exists: {}", depot_dir.display());
    }

    fs::create_dir_all(&depot_dir)
        .with_context(|| format!("Failed to create directory: {}", depot_dir.display()))?;

    Ok(depot_dir)
}

/// Path to the persisted key-value map
pub fn state_file() -> Result<PathBuf> {
    Ok(ensure_depot_dir()?.join("state.json"))
}

/// Directory for rolling log files
pub fn logs_dir() -> Result<PathBuf> {
    Ok(ensure_depot_dir()?.join("logs"))
}

/// Atomically write content to a file using temp file + rename
pub fn atomic_write<P: AsRef<Path>>(path: P, content: &str) -> Result<(), StoreError> {
    let path = path.as_ref();
    let io_err = |source| StoreError::Io {
        path: path.to_path_buf(),
        source,
    };
    let dir = path
        .parent()
        .ok_or_else(|| StoreError::NoParent(path.to_path_buf()))?;

    let mut temp_file = NamedTempFile::new_in(dir).map_err(io_err)?;
    temp_file.write_all(content.as_bytes()).map_err(io_err)?;
    temp_file.as_file().sync_all().map_err(io_err)?;
    temp_file.persist(path).map_err(|e| io_err(e.error))?;

    Ok(())
}

/// Read file content, return empty string if file doesn't exist
pub fn read_file<P: AsRef<Path>>(path: P) -> Result<String> {
    let path = path.as_ref();
    if !path.exists() {
        return Ok(String::new());
    }
    fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path.display()))
}

//! File persistence helpers.
//!
//! Handles loading and saving store snapshots as JSON.

use std::path::{Path, PathBuf};

use cachet_core::StoreError;
use serde::{de::DeserializeOwned, Serialize};
use tracing::{debug, warn};

// ============================================================================
// Default Paths
// ============================================================================

/// Returns the default cache directory.
///
/// - macOS: `~/Library/Caches/cachet`
/// - Linux: `~/.cache/cachet`
/// - Windows: `%LOCALAPPDATA%\cachet`
pub fn default_cache_dir() -> PathBuf {
    dirs::cache_dir()
        .map(|c| c.join("cachet"))
        .unwrap_or_else(|| PathBuf::from("."))
}

/// Returns the default response store file path.
pub fn default_store_path() -> PathBuf {
    default_cache_dir().join("responses.json")
}

// ============================================================================
// File Operations
// ============================================================================

/// Saves data to a JSON file.
///
/// Creates parent directories if they don't exist and writes atomically
/// (via temp file + rename) so a crash mid-write never leaves a truncated
/// snapshot behind.
pub async fn save_json<T: Serialize>(path: &Path, data: &T) -> Result<(), StoreError> {
    debug!(path = %path.display(), "Saving JSON file");

    if let Some(parent) = path.parent() {
        if !parent.exists() {
            debug!(path = %parent.display(), "Creating cache directory");
            tokio::fs::create_dir_all(parent).await?;
        }
    }

    let json = serde_json::to_string_pretty(data)?;

    let temp_path = path.with_extension("json.tmp");
    tokio::fs::write(&temp_path, &json).await?;
    tokio::fs::rename(&temp_path, path).await?;

    debug!(path = %path.display(), "JSON file saved");
    Ok(())
}

/// Loads data from a JSON file.
pub async fn load_json<T: DeserializeOwned>(path: &Path) -> Result<T, StoreError> {
    debug!(path = %path.display(), "Loading JSON file");

    let content = tokio::fs::read_to_string(path).await?;
    let data = serde_json::from_str(&content)?;

    Ok(data)
}

/// Loads data from a JSON file, returning default if not found.
pub async fn load_json_or_default<T: DeserializeOwned + Default>(path: &Path) -> T {
    match load_json(path).await {
        Ok(data) => data,
        Err(e) => {
            if !matches!(e, StoreError::Io(_)) {
                warn!(path = %path.display(), error = %e, "Failed to load, using defaults");
            }
            T::default()
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

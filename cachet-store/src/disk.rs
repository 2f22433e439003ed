//! Disk-backed cache store.

use std::collections::HashMap;
use std::path::PathBuf;
use std::sync::Arc;

use async_trait::async_trait;
use cachet_core::{CacheEntry, CacheStore, StoreError};
use tokio::sync::RwLock;
use tracing::{debug, info};

use crate::persistence::{default_store_path, load_json_or_default, save_json};

/// [`CacheStore`] that mirrors an in-memory map to a JSON snapshot file.
///
/// The full map is loaded on open; every mutation rewrites the snapshot
/// while the write lock is held, so reads never observe a half-applied
/// mutation and the on-disk file always reflects the latest completed write.
#[derive(Debug)]
pub struct DiskStore {
    path: PathBuf,
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
}

impl DiskStore {
    /// Opens a store at the given snapshot path, loading any existing data.
    pub async fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let entries: HashMap<String, CacheEntry> = load_json_or_default(&path).await;

        info!(
            path = %path.display(),
            entries = entries.len(),
            "Opened disk cache store"
        );

        Ok(Self {
            path,
            entries: Arc::new(RwLock::new(entries)),
        })
    }

    /// Opens a store at the platform default cache path.
    pub async fn open_default() -> Result<Self, StoreError> {
        Self::open(default_store_path()).await
    }

    /// Returns the snapshot file path.
    pub fn path(&self) -> &PathBuf {
        &self.path
    }

    /// Returns the number of stored entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns true if no entries are stored.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }
}

impl Clone for DiskStore {
    fn clone(&self) -> Self {
        Self {
            path: self.path.clone(),
            entries: Arc::clone(&self.entries),
        }
    }
}

#[async_trait]
impl CacheStore for DiskStore {
    async fn get(&self, url: &str) -> Result<Option<CacheEntry>, StoreError> {
        Ok(self.entries.read().await.get(url).cloned())
    }

    async fn put(&self, entry: CacheEntry) -> Result<(), StoreError> {
        debug!(url = %entry.url, path = %self.path.display(), "Storing cache entry");

        let mut entries = self.entries.write().await;
        entries.insert(entry.url.clone(), entry);
        save_json(&self.path, &*entries).await
    }

    async fn remove(&self, url: &str) -> Result<(), StoreError> {
        let mut entries = self.entries.write().await;
        if entries.remove(url).is_none() {
            return Ok(());
        }
        save_json(&self.path, &*entries).await
    }
}

// ============================================================================
// Tests
// ============================================================================

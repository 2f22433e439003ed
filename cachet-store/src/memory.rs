//! In-memory cache store.

use std::collections::HashMap;
use std::sync::Arc;

use async_trait::async_trait;
use cachet_core::{CacheEntry, CacheStore, StoreError};
use tokio::sync::RwLock;
use tracing::debug;

/// In-memory [`CacheStore`] backed by a hash map keyed by URL.
///
/// A single read-write lock covers the map, so reads for a key always
/// observe the latest completed write for that key. Entries are returned
/// whether or not they have expired; freshness is the caller's policy.
#[derive(Debug, Default)]
pub struct MemoryStore {
    entries: Arc<RwLock<HashMap<String, CacheEntry>>>,
}

impl MemoryStore {
    /// Creates an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns the number of stored entries.
    pub async fn len(&self) -> usize {
        self.entries.read().await.len()
    }

    /// Returns true if no entries are stored.
    pub async fn is_empty(&self) -> bool {
        self.entries.read().await.is_empty()
    }

    /// Removes all entries.
    pub async fn clear(&self) {
        self.entries.write().await.clear();
    }
}

impl Clone for MemoryStore {
    fn clone(&self) -> Self {
        Self {
            entries: Arc::clone(&self.entries),
        }
    }
}

#[async_trait]
impl CacheStore for MemoryStore {
    async fn get(&self, url: &str) -> Result<Option<CacheEntry>, StoreError> {
        Ok(self.entries.read().await.get(url).cloned())
    }

    async fn put(&self, entry: CacheEntry) -> Result<(), StoreError> {
        debug!(url = %entry.url, "Storing cache entry");
        self.entries.write().await.insert(entry.url.clone(), entry);
        Ok(())
    }

    async fn remove(&self, url: &str) -> Result<(), StoreError> {
        self.entries.write().await.remove(url);
        Ok(())
    }
}

// ============================================================================
// Tests
// ============================================================================

//! Trait definitions for cachet.
//!
//! This module defines the seams between the fetch core and its
//! collaborators: the network transport and the cache store. Both are
//! object-safe so callers can inject test doubles or alternative backends.

use async_trait::async_trait;

use crate::error::{StoreError, TransportError};
use crate::models::{CacheEntry, HttpResponse};

/// Performs the actual network GET for a URL.
///
/// Retries and timeouts are the transport's responsibility; strategy code
/// issues at most one call per fetch. A non-2xx status is a response, not a
/// transport error — the error channel is reserved for network-level
/// failures (DNS, connect, timeout).
#[async_trait]
pub trait HttpTransport: Send + Sync {
    /// Fetches the URL and returns the raw response.
    async fn get(&self, url: &str) -> Result<HttpResponse, TransportError>;
}

/// Key-value store of cached responses, keyed by URL.
///
/// The store holds data; freshness is the caller's policy. `get` returns
/// entries whether or not their window has elapsed, and implementations must
/// be linearizable per key: a read observes the most recent completed write
/// for that URL. No ordering is required across keys.
#[async_trait]
pub trait CacheStore: Send + Sync {
    /// Returns the entry for a URL, expired or not.
    async fn get(&self, url: &str) -> Result<Option<CacheEntry>, StoreError>;

    /// Inserts or overwrites the entry for its URL (last-write-wins).
    async fn put(&self, entry: CacheEntry) -> Result<(), StoreError>;

    /// Removes the entry for a URL. Removing an absent key is a no-op.
    async fn remove(&self, url: &str) -> Result<(), StoreError>;
}

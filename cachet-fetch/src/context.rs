//! Fetch context bundling the injected collaborators.
//!
//! The context is passed to every strategy and carries the two seams a
//! fetch can touch: the network transport and the cache store. There is no
//! process-wide state; two contexts share nothing unless handed the same
//! collaborators.

use std::sync::Arc;

use cachet_core::{CacheStore, HttpTransport};
use cachet_store::MemoryStore;

use crate::client::HttpClient;

// ============================================================================
// Fetch Context
// ============================================================================

/// Collaborators available to fetch strategies.
#[derive(Clone)]
pub struct FetchContext {
    /// Network transport.
    pub transport: Arc<dyn HttpTransport>,
    /// Cache store keyed by URL.
    pub store: Arc<dyn CacheStore>,
}

impl FetchContext {
    /// Creates a context with the default transport and an in-memory store.
    pub fn new() -> Self {
        Self {
            transport: Arc::new(HttpClient::default()),
            store: Arc::new(MemoryStore::new()),
        }
    }

    /// Creates a context from explicit collaborators.
    pub fn with_parts(transport: Arc<dyn HttpTransport>, store: Arc<dyn CacheStore>) -> Self {
        Self { transport, store }
    }

    /// Creates a builder for customizing the context.
    pub fn builder() -> FetchContextBuilder {
        FetchContextBuilder::new()
    }
}

impl Default for FetchContext {
    fn default() -> Self {
        Self::new()
    }
}

impl std::fmt::Debug for FetchContext {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FetchContext").finish_non_exhaustive()
    }
}

// ============================================================================
// Fetch Context Builder
// ============================================================================

/// Builder for constructing a `FetchContext`.
pub struct FetchContextBuilder {
    transport: Option<Arc<dyn HttpTransport>>,
    store: Option<Arc<dyn CacheStore>>,
}

impl FetchContextBuilder {
    /// Creates a new builder.
    pub fn new() -> Self {
        Self {
            transport: None,
            store: None,
        }
    }

    /// Sets the transport implementation.
    pub fn transport(mut self, transport: Arc<dyn HttpTransport>) -> Self {
        self.transport = Some(transport);
        self
    }

    /// Sets the cache store implementation.
    pub fn store(mut self, store: Arc<dyn CacheStore>) -> Self {
        self.store = Some(store);
        self
    }

    /// Builds the fetch context, filling unset parts with defaults.
    pub fn build(self) -> FetchContext {
        FetchContext {
            transport: self
                .transport
                .unwrap_or_else(|| Arc::new(HttpClient::default())),
            store: self.store.unwrap_or_else(|| Arc::new(MemoryStore::new())),
        }
    }
}

impl Default for FetchContextBuilder {
    fn default() -> Self {
        Self::new()
    }
}

// ============================================================================
// Tests
// ============================================================================

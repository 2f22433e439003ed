//! Caching strategy implementations.
//!
//! - [`NoCache`] - always network, cache untouched
//! - [`ExpireCache`] - serve from cache while fresh, refetch after expiry
//! - [`UpdateCache`] - always refetch, cache as fallback on failure

mod expire_cache;
mod no_cache;
mod update_cache;

pub use expire_cache::ExpireCache;
pub use no_cache::NoCache;
pub use update_cache::UpdateCache;

use std::sync::Arc;

use cachet_core::{CacheEntry, CacheStore};
use tokio::task::JoinHandle;
use tracing::warn;

use crate::context::FetchContext;

/// Spawns a detached cache write.
///
/// The write runs on its own task so that aborting the fetch cannot abort a
/// write already handed to the runtime. A store failure is logged, never
/// surfaced: the network response it belongs to is still emitted.
fn spawn_cache_write(store: Arc<dyn CacheStore>, entry: CacheEntry) -> JoinHandle<()> {
    tokio::spawn(async move {
        let url = entry.url.clone();
        if let Err(error) = store.put(entry).await {
            warn!(url = %url, error = %error, "Cache write failed");
        }
    })
}

/// Writes an entry through to the store before the caller emits.
///
/// Sequential fetches must observe the write, so completion is awaited on
/// the happy path; the task itself survives cancellation of the awaiter.
async fn write_through(ctx: &FetchContext, entry: CacheEntry) {
    let write = spawn_cache_write(Arc::clone(&ctx.store), entry);
    if let Err(error) = write.await {
        warn!(error = %error, "Cache write task failed");
    }
}

// ============================================================================
// Test Support
// ============================================================================

#[cfg(test)]
pub(crate) mod testing {
    use std::collections::VecDeque;
    use std::sync::atomic::{AtomicUsize, Ordering};
    use std::sync::{Arc, Mutex};

    use async_trait::async_trait;
    use cachet_core::{
        CacheEntry, CacheStore, Headers, HttpResponse, HttpTransport, StoreError, TransportError,
    };
    use cachet_store::MemoryStore;
    use url::Url;

    use crate::context::FetchContext;

    /// Transport double replaying programmed outcomes and counting calls.
    pub(crate) struct MockTransport {
        calls: AtomicUsize,
        outcomes: Mutex<VecDeque<Result<HttpResponse, TransportError>>>,
    }

    impl MockTransport {
        pub(crate) fn replaying(
            outcomes: Vec<Result<HttpResponse, TransportError>>,
        ) -> Arc<Self> {
            Arc::new(Self {
                calls: AtomicUsize::new(0),
                outcomes: Mutex::new(outcomes.into()),
            })
        }

        pub(crate) fn calls(&self) -> usize {
            self.calls.load(Ordering::SeqCst)
        }
    }

    #[async_trait]
    impl HttpTransport for MockTransport {
        async fn get(&self, _url: &str) -> Result<HttpResponse, TransportError> {
            self.calls.fetch_add(1, Ordering::SeqCst);
            self.outcomes
                .lock()
                .unwrap()
                .pop_front()
                .unwrap_or_else(|| Err(TransportError::Other("no outcome programmed".to_string())))
        }
    }

    /// Store double whose every operation fails.
    pub(crate) struct FailingStore;

    #[async_trait]
    impl CacheStore for FailingStore {
        async fn get(&self, _url: &str) -> Result<Option<CacheEntry>, StoreError> {
            Err(StoreError::Unavailable("store offline".to_string()))
        }

        async fn put(&self, _entry: CacheEntry) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("store offline".to_string()))
        }

        async fn remove(&self, _url: &str) -> Result<(), StoreError> {
            Err(StoreError::Unavailable("store offline".to_string()))
        }
    }

    pub(crate) fn response(body: &str) -> HttpResponse {
        HttpResponse::new(200, Headers::new(), body.as_bytes().to_vec())
    }

    pub(crate) fn refused() -> TransportError {
        TransportError::Connect("connection refused".to_string())
    }

    pub(crate) fn url(raw: &str) -> Url {
        Url::parse(raw).unwrap()
    }

    /// Builds a context over a mock transport, handing back the store for
    /// assertions.
    pub(crate) fn context(transport: Arc<MockTransport>) -> (FetchContext, Arc<MemoryStore>) {
        let store = Arc::new(MemoryStore::new());
        let ctx = FetchContext::with_parts(
            transport,
            Arc::clone(&store) as Arc<dyn cachet_core::CacheStore>,
        );
        (ctx, store)
    }
}

//! Fetch dispatcher.
//!
//! The [`Fetcher`] is the public entry point: it validates the request,
//! builds the selected strategy, and hands back a [`FetchHandle`] that
//! delivers the single result.

use cachet_core::CacheStrategy;
use tokio::sync::oneshot;
use tracing::{debug, instrument};
use url::Url;

use crate::context::FetchContext;
use crate::error::FetchError;
use crate::handle::FetchHandle;
use crate::strategies::{ExpireCache, NoCache, UpdateCache};
use crate::strategy::FetchStrategy;

/// Dispatches fetches to the configured caching strategy.
///
/// The fetcher holds only its collaborators; all per-request state lives in
/// the spawned fetch task. Configuration errors (zero expiry window,
/// malformed URL) are returned here, before any network or cache access.
#[derive(Debug, Clone)]
pub struct Fetcher {
    ctx: FetchContext,
}

impl Fetcher {
    /// Creates a fetcher with the default transport and an in-memory store.
    pub fn new() -> Self {
        Self {
            ctx: FetchContext::new(),
        }
    }

    /// Creates a fetcher over an explicit context.
    pub fn with_context(ctx: FetchContext) -> Self {
        Self { ctx }
    }

    /// Returns the fetcher's context.
    pub fn context(&self) -> &FetchContext {
        &self.ctx
    }

    /// Fetches a URL with the default policy (no caching).
    pub fn fetch(&self, url: &str) -> Result<FetchHandle, FetchError> {
        self.fetch_with(url, CacheStrategy::NoCache)
    }

    /// Fetches a URL with the given caching strategy.
    ///
    /// Returns immediately with a handle; the fetch itself runs on a
    /// spawned task. Dropping the handle cancels the fetch.
    #[instrument(skip(self), fields(strategy = %strategy.kind()))]
    pub fn fetch_with(&self, url: &str, strategy: CacheStrategy) -> Result<FetchHandle, FetchError> {
        let url = Url::parse(url)?;
        let strategy = build_strategy(strategy)?;

        debug!(url = %url, strategy = strategy.display_name(), "Dispatching fetch");

        let ctx = self.ctx.clone();
        let (tx, rx) = oneshot::channel();
        let task = tokio::spawn(async move {
            let result = strategy.fetch(&url, &ctx).await;
            // The receiver may already be gone if the caller canceled.
            let _ = tx.send(result);
        });

        Ok(FetchHandle::new(rx, task))
    }
}

impl Default for Fetcher {
    fn default() -> Self {
        Self::new()
    }
}

/// Builds the strategy for a validated configuration.
fn build_strategy(strategy: CacheStrategy) -> Result<Box<dyn FetchStrategy>, FetchError> {
    match strategy {
        CacheStrategy::NoCache => Ok(Box::new(NoCache::new())),
        CacheStrategy::ExpireCache { expire_after } => {
            Ok(Box::new(ExpireCache::new(expire_after)?))
        }
        CacheStrategy::UpdateCache => Ok(Box::new(UpdateCache::new())),
    }
}

// ============================================================================
// Tests
// ============================================================================

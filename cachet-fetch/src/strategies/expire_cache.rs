//! Time-bounded expiry caching.

use std::time::Duration;

use async_trait::async_trait;
use cachet_core::{CacheEntry, CoreError, ResponseSource, StrategyKind};
use chrono::Utc;
use tracing::{debug, warn};
use url::Url;

use crate::context::FetchContext;
use crate::error::FetchError;
use crate::strategies::write_through;
use crate::strategy::{FetchResult, FetchStrategy};

/// Serves from the cache while the entry is fresh; refetches otherwise.
///
/// A fresh hit never touches the network. A miss or an expired entry goes
/// to the transport; on success the store is overwritten with a new window,
/// on failure the error propagates and the store is left exactly as found.
#[derive(Debug, Clone, Copy)]
pub struct ExpireCache {
    expire_after: Duration,
}

impl ExpireCache {
    /// Creates the strategy with the given freshness window.
    ///
    /// A zero window is rejected here, before any network or cache access.
    pub fn new(expire_after: Duration) -> Result<Self, FetchError> {
        if expire_after.is_zero() {
            return Err(CoreError::InvalidConfig(
                "expire_after must be greater than zero".to_string(),
            )
            .into());
        }
        Ok(Self { expire_after })
    }

    /// Returns the freshness window.
    pub fn expire_after(&self) -> Duration {
        self.expire_after
    }
}

#[async_trait]
impl FetchStrategy for ExpireCache {
    fn kind(&self) -> StrategyKind {
        StrategyKind::ExpireCache
    }

    async fn fetch(&self, url: &Url, ctx: &FetchContext) -> Result<FetchResult, FetchError> {
        let now = Utc::now();

        match ctx.store.get(url.as_str()).await {
            Ok(Some(entry)) if entry.is_fresh(now) => {
                debug!(url = %url, age_ms = entry.age(now).as_millis() as u64, "Cache hit");
                return Ok(FetchResult::new(
                    entry.into_response(),
                    ResponseSource::Cache,
                    self.kind(),
                ));
            }
            Ok(Some(_)) => debug!(url = %url, "Cache entry expired, refetching"),
            Ok(None) => debug!(url = %url, "Cache miss"),
            Err(error) => {
                // A broken store must not break the fetch.
                warn!(url = %url, error = %error, "Cache read failed, falling back to network");
            }
        }

        let response = ctx.transport.get(url.as_str()).await?;

        let entry = CacheEntry::new(url.as_str(), response.clone(), Some(self.expire_after));
        write_through(ctx, entry).await;

        Ok(FetchResult::new(
            response,
            ResponseSource::Network,
            self.kind(),
        ))
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::strategies::testing::{context, refused, response, url, FailingStore, MockTransport};
    use cachet_core::{CacheStore, TransportError};
    use chrono::TimeDelta;
    use std::sync::Arc;

    const WINDOW: Duration = Duration::from_secs(1);

    #[test]
    fn test_zero_window_rejected_at_construction() {
        let err = ExpireCache::new(Duration::ZERO).unwrap_err();
        assert!(matches!(err, FetchError::Core(CoreError::InvalidConfig(_))));
    }

    #[tokio::test]
    async fn test_fresh_hit_skips_the_network() {
        let transport = MockTransport::replaying(vec![Ok(response("r1"))]);
        let (ctx, _store) = context(transport.clone());
        let strategy = ExpireCache::new(WINDOW).unwrap();
        let target = url("https://example.com/a");

        let first = strategy.fetch(&target, &ctx).await.unwrap();
        let second = strategy.fetch(&target, &ctx).await.unwrap();

        assert_eq!(first.source, ResponseSource::Network);
        assert_eq!(second.source, ResponseSource::Cache);
        assert_eq!(second.response.body, b"r1");
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_expired_entry_triggers_refetch_and_overwrite() {
        let transport = MockTransport::replaying(vec![Ok(response("r2"))]);
        let (ctx, store) = context(transport.clone());
        let strategy = ExpireCache::new(WINDOW).unwrap();
        let target = url("https://example.com/a");

        let stale = CacheEntry::new(target.as_str(), response("r1"), Some(WINDOW))
            .with_cached_at(Utc::now() - TimeDelta::seconds(10));
        store.put(stale).await.unwrap();

        let result = strategy.fetch(&target, &ctx).await.unwrap();

        assert_eq!(result.source, ResponseSource::Network);
        assert_eq!(result.response.body, b"r2");
        assert_eq!(transport.calls(), 1);

        let entry = store.get(target.as_str()).await.unwrap().unwrap();
        assert_eq!(entry.response.body, b"r2");
        assert!(entry.is_fresh(Utc::now()));
    }

    #[tokio::test]
    async fn test_transport_failure_on_miss_propagates_and_leaves_store() {
        let transport = MockTransport::replaying(vec![Err(refused())]);
        let (ctx, store) = context(transport);
        let strategy = ExpireCache::new(WINDOW).unwrap();
        let target = url("https://example.com/a");

        let stale = CacheEntry::new(target.as_str(), response("old"), Some(WINDOW))
            .with_cached_at(Utc::now() - TimeDelta::seconds(10));
        store.put(stale.clone()).await.unwrap();

        let err = strategy.fetch(&target, &ctx).await.unwrap_err();

        assert!(matches!(
            err,
            FetchError::Transport(TransportError::Connect(_))
        ));

        // The expired entry is left exactly as found.
        let entry = store.get(target.as_str()).await.unwrap().unwrap();
        assert_eq!(entry.cached_at, stale.cached_at);
        assert_eq!(entry.response.body, b"old");
    }

    #[tokio::test]
    async fn test_store_failure_does_not_fail_the_fetch() {
        // Both the read and the write fail; the network response still flows.
        let transport = MockTransport::replaying(vec![Ok(response("r1"))]);
        let ctx = FetchContext::with_parts(transport.clone(), Arc::new(FailingStore));
        let strategy = ExpireCache::new(WINDOW).unwrap();

        let result = strategy
            .fetch(&url("https://example.com/a"), &ctx)
            .await
            .unwrap();

        assert_eq!(result.source, ResponseSource::Network);
        assert_eq!(result.response.body, b"r1");
        assert_eq!(transport.calls(), 1);
    }

    #[tokio::test]
    async fn test_expired_entry_is_never_served() {
        let transport = MockTransport::replaying(vec![Ok(response("fresh"))]);
        let (ctx, store) = context(transport.clone());
        let strategy = ExpireCache::new(WINDOW).unwrap();
        let target = url("https://example.com/a");

        let expired = CacheEntry::new(target.as_str(), response("expired"), Some(WINDOW))
            .with_cached_at(Utc::now() - TimeDelta::seconds(2));
        store.put(expired).await.unwrap();

        let result = strategy.fetch(&target, &ctx).await.unwrap();

        assert_eq!(result.response.body, b"fresh");
        assert_eq!(transport.calls(), 1);
    }
}

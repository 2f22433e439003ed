//! Strategy that bypasses the cache entirely.

use async_trait::async_trait;
use cachet_core::{ResponseSource, StrategyKind};
use tracing::debug;
use url::Url;

use crate::context::FetchContext;
use crate::error::FetchError;
use crate::strategy::{FetchResult, FetchStrategy};

/// Always delegates to the transport; the store is never read or written.
///
/// A transport failure terminates the fetch with that error unmodified —
/// there is no fallback.
#[derive(Debug, Default, Clone, Copy)]
pub struct NoCache;

impl NoCache {
    /// Creates the strategy.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FetchStrategy for NoCache {
    fn kind(&self) -> StrategyKind {
        StrategyKind::NoCache
    }

    async fn fetch(&self, url: &Url, ctx: &FetchContext) -> Result<FetchResult, FetchError> {
        debug!(url = %url, "Fetching without cache");

        let response = ctx.transport.get(url.as_str()).await?;
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
    use crate::strategies::testing::{context, refused, response, url, MockTransport};
    use cachet_core::TransportError;

    #[tokio::test]
    async fn test_every_fetch_hits_the_network() {
        let transport =
            MockTransport::replaying(vec![Ok(response("one")), Ok(response("two"))]);
        let (ctx, store) = context(transport.clone());
        let strategy = NoCache::new();
        let target = url("https://example.com/a");

        let first = strategy.fetch(&target, &ctx).await.unwrap();
        let second = strategy.fetch(&target, &ctx).await.unwrap();

        assert_eq!(first.response.body, b"one");
        assert_eq!(second.response.body, b"two");
        assert_eq!(first.source, ResponseSource::Network);
        assert_eq!(transport.calls(), 2);
        assert!(store.is_empty().await);
    }

    #[tokio::test]
    async fn test_transport_error_propagates_unmodified() {
        let transport = MockTransport::replaying(vec![Err(refused())]);
        let (ctx, store) = context(transport);
        let strategy = NoCache::new();

        let err = strategy
            .fetch(&url("https://example.com/a"), &ctx)
            .await
            .unwrap_err();

        assert!(matches!(
            err,
            FetchError::Transport(TransportError::Connect(_))
        ));
        assert!(store.is_empty().await);
    }
}

//! Refresh-then-update caching.

use async_trait::async_trait;
use cachet_core::{CacheEntry, ResponseSource, StrategyKind};
use chrono::Utc;
use tracing::{debug, info, warn};
use url::Url;

use crate::context::FetchContext;
use crate::error::FetchError;
use crate::strategies::write_through;
use crate::strategy::{FetchResult, FetchStrategy};

/// Always refetches; the cache is a last-resort fallback.
///
/// Every successful fetch overwrites the store with an entry that never
/// expires. When the transport fails, whatever entry exists is served with
/// the stale marker regardless of age; only with an empty cache does the
/// transport error reach the caller.
#[derive(Debug, Default, Clone, Copy)]
pub struct UpdateCache;

impl UpdateCache {
    /// Creates the strategy.
    pub fn new() -> Self {
        Self
    }
}

#[async_trait]
impl FetchStrategy for UpdateCache {
    fn kind(&self) -> StrategyKind {
        StrategyKind::UpdateCache
    }

    async fn fetch(&self, url: &Url, ctx: &FetchContext) -> Result<FetchResult, FetchError> {
        debug!(url = %url, "Refreshing from network");

        match ctx.transport.get(url.as_str()).await {
            Ok(response) => {
                let entry = CacheEntry::new(url.as_str(), response.clone(), None);
                write_through(ctx, entry).await;

                Ok(FetchResult::new(
                    response,
                    ResponseSource::Network,
                    self.kind(),
                ))
            }
            Err(transport_error) => {
                warn!(
                    url = %url,
                    error = %transport_error,
                    "Network refresh failed, falling back to cache"
                );

                match ctx.store.get(url.as_str()).await {
                    Ok(Some(entry)) => {
                        info!(
                            url = %url,
                            age_ms = entry.age(Utc::now()).as_millis() as u64,
                            "Serving stale cached response"
                        );
                        Ok(FetchResult::new(
                            entry.into_response(),
                            ResponseSource::StaleCache,
                            self.kind(),
                        ))
                    }
                    Ok(None) => Err(transport_error.into()),
                    Err(store_error) => {
                        warn!(url = %url, error = %store_error, "Cache fallback read failed");
                        Err(transport_error.into())
                    }
                }
            }
        }
    }
}

// ============================================================================
// Tests
// ============================================================================

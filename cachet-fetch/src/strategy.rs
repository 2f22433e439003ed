//! Fetch strategy trait and result types.
//!
//! A strategy decides how a single fetch sources its result from the cache
//! and/or the network. The three implementations live in [`crate::strategies`].

use async_trait::async_trait;
use cachet_core::{HttpResponse, ResponseSource, StrategyKind};
use url::Url;

use crate::context::FetchContext;
use crate::error::FetchError;

// ============================================================================
// Fetch Result
// ============================================================================

/// The result of a successful fetch operation.
#[derive(Debug, Clone)]
pub struct FetchResult {
    /// The fetched response.
    pub response: HttpResponse,
    /// Where the response came from.
    pub source: ResponseSource,
    /// The strategy that produced it.
    pub strategy: StrategyKind,
}

impl FetchResult {
    /// Creates a new fetch result.
    pub fn new(response: HttpResponse, source: ResponseSource, strategy: StrategyKind) -> Self {
        Self {
            response,
            source,
            strategy,
        }
    }

    /// Returns true if the response was served past its freshness window.
    pub fn served_stale(&self) -> bool {
        self.source.is_stale()
    }
}

// ============================================================================
// Fetch Strategy Trait
// ============================================================================

/// A policy for sourcing one fetch from cache and/or network.
///
/// Implementations hold their own configuration but no request state; the
/// collaborators arrive through the [`FetchContext`] on every call.
#[async_trait]
pub trait FetchStrategy: Send + Sync {
    /// The kind of caching this strategy performs.
    fn kind(&self) -> StrategyKind;

    /// Human-readable name for this strategy.
    fn display_name(&self) -> &'static str {
        self.kind().display_name()
    }

    /// Produces the single result for `url`.
    async fn fetch(&self, url: &Url, ctx: &FetchContext) -> Result<FetchResult, FetchError>;
}

// ============================================================================
// Tests
// ============================================================================

//! Caching strategy selection.
//!
//! - [`StrategyKind`] - the named strategy kinds
//! - [`CacheStrategy`] - a kind together with its parameters, validated at
//!   construction rather than re-checked per fetch

use std::fmt;
use std::str::FromStr;
use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;

// ============================================================================
// Strategy Kind
// ============================================================================

/// The kind of caching a fetch uses.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum StrategyKind {
    /// Always hit the network; the cache is never read or written.
    NoCache,
    /// Serve from the cache while fresh; refetch once the entry expires.
    ExpireCache,
    /// Always refetch and overwrite; the cache is a fallback on failure.
    UpdateCache,
}

impl StrategyKind {
    /// Returns the short name for this kind.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::NoCache => "none",
            Self::ExpireCache => "expire",
            Self::UpdateCache => "update",
        }
    }
}

impl fmt::Display for StrategyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

impl FromStr for StrategyKind {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "none" | "no_cache" => Ok(Self::NoCache),
            "expire" | "expire_cache" => Ok(Self::ExpireCache),
            "update" | "update_cache" => Ok(Self::UpdateCache),
            other => Err(CoreError::UnknownStrategy(other.to_string())),
        }
    }
}

// ============================================================================
// Cache Strategy
// ============================================================================

/// A fully configured caching strategy.
///
/// The expire variant carries its freshness window; a zero window is a
/// configuration error caught by [`CacheStrategy::validate`] before any
/// network or cache access happens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum CacheStrategy {
    /// No caching.
    NoCache,
    /// Time-bounded caching.
    ExpireCache {
        /// How long a cached response stays fresh.
        expire_after: Duration,
    },
    /// Refresh-then-update caching.
    UpdateCache,
}

impl CacheStrategy {
    /// Creates a validated expire-cache strategy.
    pub fn expire_cache(expire_after: Duration) -> Result<Self, CoreError> {
        let strategy = Self::ExpireCache { expire_after };
        strategy.validate()?;
        Ok(strategy)
    }

    /// Builds a strategy from a kind and an optional expiry window.
    ///
    /// The expire kind requires a window; the other kinds ignore it.
    pub fn from_kind(kind: StrategyKind, expire_after: Option<Duration>) -> Result<Self, CoreError> {
        match kind {
            StrategyKind::NoCache => Ok(Self::NoCache),
            StrategyKind::UpdateCache => Ok(Self::UpdateCache),
            StrategyKind::ExpireCache => {
                let expire_after = expire_after.ok_or_else(|| {
                    CoreError::InvalidConfig("expire cache requires an expiry window".to_string())
                })?;
                Self::expire_cache(expire_after)
            }
        }
    }

    /// Returns the kind of this strategy.
    pub fn kind(&self) -> StrategyKind {
        match self {
            Self::NoCache => StrategyKind::NoCache,
            Self::ExpireCache { .. } => StrategyKind::ExpireCache,
            Self::UpdateCache => StrategyKind::UpdateCache,
        }
    }

    /// Validates the strategy parameters.
    pub fn validate(&self) -> Result<(), CoreError> {
        if let Self::ExpireCache { expire_after } = self {
            if expire_after.is_zero() {
                return Err(CoreError::InvalidConfig(
                    "expire_after must be greater than zero".to_string(),
                ));
            }
        }
        Ok(())
    }
}

impl Default for CacheStrategy {
    fn default() -> Self {
        Self::NoCache
    }
}

// ============================================================================
// Tests
// ============================================================================

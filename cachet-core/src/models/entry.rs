//! Cache entry model.

use std::time::Duration;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::response::HttpResponse;

/// A cached response keyed by URL.
///
/// An entry with an expiry window is valid only while
/// `now - cached_at < expire_after`; the boundary itself counts as expired.
/// Entries without a window never expire and persist until overwritten.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CacheEntry {
    /// The URL this entry was fetched from (the cache key).
    pub url: String,
    /// The cached response.
    pub response: HttpResponse,
    /// When the entry was written.
    pub cached_at: DateTime<Utc>,
    /// Freshness window, if any.
    pub expire_after: Option<Duration>,
}

impl CacheEntry {
    /// Creates an entry cached now.
    pub fn new(url: impl Into<String>, response: HttpResponse, expire_after: Option<Duration>) -> Self {
        Self {
            url: url.into(),
            response,
            cached_at: Utc::now(),
            expire_after,
        }
    }

    /// Overrides the write timestamp.
    pub fn with_cached_at(mut self, cached_at: DateTime<Utc>) -> Self {
        self.cached_at = cached_at;
        self
    }

    /// Returns the entry's age at `now`.
    ///
    /// An entry written in the future (clock skew) has age zero.
    pub fn age(&self, now: DateTime<Utc>) -> Duration {
        (now - self.cached_at).to_std().unwrap_or(Duration::ZERO)
    }

    /// Returns true if the entry may still be served as a cache hit at `now`.
    pub fn is_fresh(&self, now: DateTime<Utc>) -> bool {
        match self.expire_after {
            Some(expire_after) => self.age(now) < expire_after,
            None => true,
        }
    }

    /// Returns true if the freshness window has elapsed at `now`.
    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        !self.is_fresh(now)
    }

    /// Consumes the entry, yielding the cached response.
    pub fn into_response(self) -> HttpResponse {
        self.response
    }
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::response::Headers;
    use chrono::TimeDelta;

    fn entry_with_age(age: Duration, expire_after: Option<Duration>) -> CacheEntry {
        let response = HttpResponse::new(200, Headers::new(), b"body".to_vec());
        CacheEntry::new("https://example.com/a", response, expire_after)
            .with_cached_at(Utc::now() - TimeDelta::from_std(age).unwrap())
    }

    #[test]
    fn test_fresh_inside_window() {
        let entry = entry_with_age(Duration::from_millis(999), Some(Duration::from_secs(1)));
        assert!(entry.is_fresh(Utc::now()));
    }

    #[test]
    fn test_expired_at_exact_boundary() {
        // Age == expire_after is already expired.
        let entry = entry_with_age(Duration::from_secs(1), Some(Duration::from_secs(1)));
        let now = entry.cached_at + TimeDelta::seconds(1);
        assert!(entry.is_expired(now));
    }

    #[test]
    fn test_expired_past_window() {
        let entry = entry_with_age(Duration::from_secs(5), Some(Duration::from_secs(1)));
        assert!(entry.is_expired(Utc::now()));
    }

    #[test]
    fn test_no_window_never_expires() {
        let entry = entry_with_age(Duration::from_secs(86_400 * 365), None);
        assert!(entry.is_fresh(Utc::now()));
    }

    #[test]
    fn test_future_timestamp_has_zero_age() {
        let response = HttpResponse::new(200, Headers::new(), Vec::new());
        let entry = CacheEntry::new("https://example.com/a", response, Some(Duration::from_secs(1)))
            .with_cached_at(Utc::now() + TimeDelta::seconds(60));

        assert_eq!(entry.age(Utc::now()), Duration::ZERO);
        assert!(entry.is_fresh(Utc::now()));
    }
}

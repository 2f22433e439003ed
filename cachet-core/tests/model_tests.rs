//! Integration tests for core models.

use std::time::Duration;

use cachet_core::{CacheEntry, CacheStrategy, Headers, HttpResponse, StrategyKind};
use chrono::{TimeDelta, Utc};

fn sample_response() -> HttpResponse {
    let mut headers = Headers::new();
    headers.insert("content-type", "text/plain");
    HttpResponse::new(200, headers, b"hello".to_vec())
}

#[test]
fn test_entry_serialization_roundtrip() {
    let entry = CacheEntry::new(
        "https://example.com/data",
        sample_response(),
        Some(Duration::from_secs(30)),
    );

    let json = serde_json::to_string(&entry).unwrap();
    let parsed: CacheEntry = serde_json::from_str(&json).unwrap();

    assert_eq!(parsed, entry);
    assert!(parsed.is_fresh(Utc::now()));
}

#[test]
fn test_entry_freshness_window_boundaries() {
    let window = Duration::from_millis(1000);
    let entry = CacheEntry::new("https://example.com/a", sample_response(), Some(window));

    let just_inside = entry.cached_at + TimeDelta::milliseconds(999);
    let boundary = entry.cached_at + TimeDelta::milliseconds(1000);

    assert!(entry.is_fresh(just_inside));
    assert!(entry.is_expired(boundary));
}

#[test]
fn test_strategy_config_serialization() {
    let strategy = CacheStrategy::expire_cache(Duration::from_secs(5)).unwrap();

    let json = serde_json::to_string(&strategy).unwrap();
    assert!(json.contains("expire_cache"));

    let parsed: CacheStrategy = serde_json::from_str(&json).unwrap();
    assert_eq!(parsed.kind(), StrategyKind::ExpireCache);
    assert!(parsed.validate().is_ok());
}

//! HTTP response model.
//!
//! This module contains the immutable response value passed between the
//! transport, the cache, and the caller:
//! - [`HttpResponse`] - status, headers, body, and fetch timestamp
//! - [`Headers`] - multi-value-aware header map
//! - [`ResponseSource`] - where an emitted response came from

use std::collections::HashMap;
use std::fmt;

use base64::engine::general_purpose::STANDARD as BASE64;
use chrono::{DateTime, Utc};
use serde::{de::DeserializeOwned, Deserialize, Serialize};

use crate::error::CoreError;

// ============================================================================
// Headers
// ============================================================================

/// HTTP header map with case-insensitive names and multi-value support.
///
/// Names are lowercased on insertion, so `Set-Cookie` and `set-cookie`
/// address the same slot.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Headers(HashMap<String, Vec<String>>);

impl Headers {
    /// Creates an empty header map.
    pub fn new() -> Self {
        Self(HashMap::new())
    }

    /// Replaces all values for a header name with a single value.
    pub fn insert(&mut self, name: &str, value: impl Into<String>) {
        self.0.insert(name.to_ascii_lowercase(), vec![value.into()]);
    }

    /// Appends a value to a header name, keeping existing values.
    pub fn append(&mut self, name: &str, value: impl Into<String>) {
        self.0
            .entry(name.to_ascii_lowercase())
            .or_default()
            .push(value.into());
    }

    /// Returns the first value for a header name, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .get(&name.to_ascii_lowercase())
            .and_then(|values| values.first())
            .map(String::as_str)
    }

    /// Returns all values for a header name.
    pub fn get_all(&self, name: &str) -> &[String] {
        self.0
            .get(&name.to_ascii_lowercase())
            .map(Vec::as_slice)
            .unwrap_or_default()
    }

    /// Returns true if the header name is present.
    pub fn contains(&self, name: &str) -> bool {
        self.0.contains_key(&name.to_ascii_lowercase())
    }

    /// Returns the number of distinct header names.
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Returns true if no headers are present.
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Iterates over header names and their values.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &[String])> {
        self.0.iter().map(|(k, v)| (k.as_str(), v.as_slice()))
    }
}

// ============================================================================
// Http Response
// ============================================================================

/// An immutable HTTP response.
///
/// Produced by the transport or reconstructed from the cache; owned by
/// whichever handle emits it. The body is serialized as base64 so cached
/// snapshots stay valid JSON regardless of payload content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HttpResponse {
    /// HTTP status code.
    pub status: u16,
    /// Response headers.
    pub headers: Headers,
    /// Raw response body.
    #[serde(with = "base64_bytes")]
    pub body: Vec<u8>,
    /// When this response was fetched from the network.
    pub fetched_at: DateTime<Utc>,
}

impl HttpResponse {
    /// Creates a response fetched now.
    pub fn new(status: u16, headers: Headers, body: Vec<u8>) -> Self {
        Self {
            status,
            headers,
            body,
            fetched_at: Utc::now(),
        }
    }

    /// Returns true for 2xx status codes.
    pub fn is_success(&self) -> bool {
        (200..300).contains(&self.status)
    }

    /// Returns the body as text, replacing invalid UTF-8.
    pub fn text(&self) -> std::borrow::Cow<'_, str> {
        String::from_utf8_lossy(&self.body)
    }

    /// Deserializes the body as JSON.
    pub fn json<T: DeserializeOwned>(&self) -> Result<T, CoreError> {
        Ok(serde_json::from_slice(&self.body)?)
    }

    /// Returns the Content-Type header, if present.
    pub fn content_type(&self) -> Option<&str> {
        self.headers.get("content-type")
    }
}

/// Serde adapter storing body bytes as a base64 string.
mod base64_bytes {
    use super::BASE64;
    use base64::Engine as _;
    use serde::{Deserialize, Deserializer, Serializer};

    pub fn serialize<S: Serializer>(bytes: &[u8], serializer: S) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&BASE64.encode(bytes))
    }

    pub fn deserialize<'de, D: Deserializer<'de>>(deserializer: D) -> Result<Vec<u8>, D::Error> {
        let encoded = String::deserialize(deserializer)?;
        BASE64.decode(encoded).map_err(serde::de::Error::custom)
    }
}

// ============================================================================
// Response Source
// ============================================================================

/// Where an emitted response came from.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ResponseSource {
    /// Fresh from the network.
    #[default]
    Network,
    /// Served from a valid cache entry; no network call was made.
    Cache,
    /// Served from the cache after the network failed; may be arbitrarily old.
    StaleCache,
}

impl ResponseSource {
    /// Returns the display name for this source.
    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Network => "network",
            Self::Cache => "cache",
            Self::StaleCache => "stale cache",
        }
    }

    /// Returns true if the response was served past its freshness window.
    pub fn is_stale(&self) -> bool {
        matches!(self, Self::StaleCache)
    }

    /// Returns true if the response came from the cache at all.
    pub fn from_cache(&self) -> bool {
        matches!(self, Self::Cache | Self::StaleCache)
    }
}

impl fmt::Display for ResponseSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

// ============================================================================
// Tests
// ============================================================================

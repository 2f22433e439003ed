//! Core error types for `cachet`.

use thiserror::Error;

// ============================================================================
// Core Error
// ============================================================================

/// Error type for configuration and model validation.
#[derive(Debug, Error)]
pub enum CoreError {
    /// Invalid configuration.
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Strategy name did not match any known kind.
    #[error("Unknown cache strategy: {0} (valid kinds: none, expire, update)")]
    UnknownStrategy(String),

    /// Invalid data in a response or cache entry.
    #[error("Invalid data: {0}")]
    InvalidData(String),

    /// Serialization/deserialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Generic error with message.
    #[error("{0}")]
    Other(String),
}

// ============================================================================
// Transport Error
// ============================================================================

/// Error type for the network transport.
///
/// Kept transport-agnostic: implementations map their own error types onto
/// these variants so strategies never see a concrete HTTP client error.
#[derive(Debug, Error)]
pub enum TransportError {
    /// Connection could not be established (DNS, refused, TLS).
    #[error("Connection failed: {0}")]
    Connect(String),

    /// Request timed out.
    #[error("Request timed out")]
    Timeout,

    /// The URL was rejected by the transport.
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// The response body could not be read.
    #[error("Failed to read response body: {0}")]
    Body(String),

    /// Any other transport failure.
    #[error("Transport error: {0}")]
    Other(String),
}

// ============================================================================
// Store Error
// ============================================================================

/// Error type for cache store operations.
///
/// Lives here rather than in the store crate because the [`CacheStore`]
/// contract is defined in this crate.
///
/// [`CacheStore`]: crate::traits::CacheStore
#[derive(Debug, Error)]
pub enum StoreError {
    /// IO error from the backing storage.
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization error.
    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    /// Backing storage unavailable.
    #[error("Store unavailable: {0}")]
    Unavailable(String),

    /// Generic store error.
    #[error("Store error: {0}")]
    Other(String),
}

impl StoreError {
    /// Returns true if this is a transient error that might succeed on retry.
    pub fn is_transient(&self) -> bool {
        matches!(self, StoreError::Io(_) | StoreError::Unavailable(_))
    }
}

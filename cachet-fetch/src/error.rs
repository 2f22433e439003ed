//! Fetch error types.

use cachet_core::{CoreError, TransportError};
use thiserror::Error;

/// Error type for fetch operations.
///
/// Configuration and argument errors surface synchronously from the
/// dispatcher, before any network or cache access; transport errors arrive
/// through the result stream.
#[derive(Debug, Error)]
pub enum FetchError {
    /// Configuration or strategy validation error.
    #[error("Core error: {0}")]
    Core(#[from] CoreError),

    /// The URL could not be parsed.
    #[error("Invalid URL: {0}")]
    InvalidUrl(#[from] url::ParseError),

    /// The network transport failed.
    #[error("Transport error: {0}")]
    Transport(#[from] TransportError),

    /// The fetch was canceled before a result was delivered.
    #[error("Fetch canceled before completion")]
    Canceled,
}

impl FetchError {
    /// Returns true if the error was raised before any I/O started.
    pub fn is_configuration(&self) -> bool {
        matches!(self, FetchError::Core(_) | FetchError::InvalidUrl(_))
    }
}

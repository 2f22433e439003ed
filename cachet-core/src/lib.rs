// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Cachet Core
//!
//! Core types, models, and traits for the `cachet` fetch-and-cache library.
//!
//! This crate provides the foundational abstractions used across the other
//! `cachet` crates, including:
//!
//! - Domain models (responses, cache entries, strategy selection)
//! - Error types
//! - Trait seams for the transport and the cache store
//!
//! ## Key Types
//!
//! ### Response Types
//! - [`HttpResponse`] - Immutable response value (status, headers, body)
//! - [`Headers`] - Multi-value-aware header map
//! - [`ResponseSource`] - Whether a result came from network, cache, or a
//!   stale fallback
//!
//! ### Cache Types
//! - [`CacheEntry`] - Cached response with timestamp and freshness window
//! - [`CacheStrategy`] - Validated strategy configuration
//! - [`StrategyKind`] - The named strategy kinds
//!
//! ### Seams
//! - [`HttpTransport`] - Network GET collaborator
//! - [`CacheStore`] - Key-value store contract keyed by URL

pub mod error;
pub mod models;
pub mod traits;

// Re-export error types
pub use error::{CoreError, StoreError, TransportError};

// Re-export all model types
pub use models::{CacheEntry, CacheStrategy, Headers, HttpResponse, ResponseSource, StrategyKind};

// Re-export traits
pub use traits::{CacheStore, HttpTransport};

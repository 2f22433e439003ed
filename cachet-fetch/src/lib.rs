// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Cachet Fetch
//!
//! Caching strategies and the fetch dispatcher for the `cachet` library.
//!
//! A fetch routes one URL through a caching policy and delivers exactly one
//! response (or an error) over an asynchronous, cancellable handle:
//!
//! - [`strategies::NoCache`] - always network, cache untouched
//! - [`strategies::ExpireCache`] - serve from cache while fresh
//! - [`strategies::UpdateCache`] - always refresh, cache as fallback
//!
//! ## Example
//!
//! ```ignore
//! use std::time::Duration;
//! use cachet_core::CacheStrategy;
//! use cachet_fetch::Fetcher;
//!
//! let fetcher = Fetcher::new();
//!
//! let strategy = CacheStrategy::expire_cache(Duration::from_secs(60))?;
//! let result = fetcher
//!     .fetch_with("https://example.com/data", strategy)?
//!     .recv()
//!     .await?;
//!
//! println!("{} bytes from {}", result.response.body.len(), result.source);
//! ```
//!
//! The handle also implements [`futures::Stream`], yielding the single
//! result and then ending; dropping it cancels the fetch.

// Core modules
pub mod client;
pub mod context;
pub mod error;
pub mod fetcher;
pub mod handle;
pub mod retry;
pub mod strategies;
pub mod strategy;

// Re-export key types at crate root

// Errors
pub use error::FetchError;

// Transport
pub use client::HttpClient;
pub use retry::RetryStrategy;

// Dispatch
pub use context::{FetchContext, FetchContextBuilder};
pub use fetcher::Fetcher;
pub use handle::FetchHandle;
pub use strategies::{ExpireCache, NoCache, UpdateCache};
pub use strategy::{FetchResult, FetchStrategy};

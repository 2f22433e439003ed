// Lint configuration for this crate
#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]
#![allow(clippy::must_use_candidate)]

//! # Cachet Store
//!
//! Cache store backends for the `cachet` fetch-and-cache library.
//!
//! This crate provides implementations of the [`CacheStore`] contract:
//!
//! - **[`MemoryStore`]**: hash map behind a read-write lock, the default
//! - **[`DiskStore`]**: the same map mirrored to a JSON snapshot file
//! - **Persistence**: atomic JSON save/load helpers
//!
//! Both stores are storage only: they return entries whether or not the
//! freshness window has elapsed, leaving expiry policy to the caller.
//!
//! ## Usage
//!
//! ```ignore
//! use cachet_store::{DiskStore, MemoryStore};
//!
//! let memory = MemoryStore::new();
//!
//! // Or persist across runs
//! let disk = DiskStore::open_default().await?;
//! ```
//!
//! [`CacheStore`]: cachet_core::CacheStore

pub mod disk;
pub mod memory;
pub mod persistence;

pub use cachet_core::StoreError;
pub use disk::DiskStore;
pub use memory::MemoryStore;
pub use persistence::{
    default_cache_dir, default_store_path, load_json, load_json_or_default, save_json,
};

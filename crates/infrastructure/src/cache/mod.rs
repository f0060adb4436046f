//! Cache implementations
//!
//! Provides the in-memory cache adapter the translation service stores
//! computed narrations in. The cache is built by whoever owns the session
//! and injected; nothing here is process-global.

mod moka_cache;

pub use moka_cache::{MokaCache, MokaCacheConfig};

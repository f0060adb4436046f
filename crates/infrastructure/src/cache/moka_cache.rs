//! Moka in-memory cache implementation
//!
//! Thread-safe in-memory cache with TTL support, weighed by entry size.

use std::{
    sync::atomic::{AtomicU64, Ordering},
    time::Duration,
};

use application::{
    error::ApplicationError,
    ports::{CachePort, CacheStats},
};
use async_trait::async_trait;
use moka::future::Cache;
use tracing::{debug, instrument};

/// Default maximum cache size in MB
const DEFAULT_MAX_CAPACITY_MB: u64 = 16;

/// Configuration for Moka cache
#[derive(Debug, Clone, Copy)]
pub struct MokaCacheConfig {
    /// Maximum capacity in megabytes
    pub max_capacity_mb: u64,
    /// Default TTL for entries
    pub default_ttl: Duration,
    /// Time to idle before eviction (optional)
    pub time_to_idle: Option<Duration>,
}

impl Default for MokaCacheConfig {
    fn default() -> Self {
        Self {
            max_capacity_mb: DEFAULT_MAX_CAPACITY_MB,
            default_ttl: Duration::from_secs(3600), // 1 hour
            time_to_idle: Some(Duration::from_secs(1800)), // 30 minutes
        }
    }
}

/// Moka-based in-memory cache
///
/// Entries are evicted by TTL and memory pressure.
///
/// Note: Moka 0.12 uses a global TTL configured at build time. Per-entry TTL
/// requires the `Expiry` trait; the cache-level TTL is sufficient here, so
/// the per-call TTL parameter is accepted and ignored.
pub struct MokaCache {
    cache: Cache<String, Vec<u8>>,
    hits: AtomicU64,
    misses: AtomicU64,
}

impl std::fmt::Debug for MokaCache {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("MokaCache")
            .field("entries", &self.cache.entry_count())
            .field("hits", &self.hits.load(Ordering::Relaxed))
            .field("misses", &self.misses.load(Ordering::Relaxed))
            .finish()
    }
}

impl MokaCache {
    /// Create a new Moka cache with default configuration
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(MokaCacheConfig::default())
    }

    /// Create a new Moka cache with custom configuration
    #[must_use]
    pub fn with_config(config: MokaCacheConfig) -> Self {
        let max_capacity_bytes = config.max_capacity_mb * 1024 * 1024;

        let mut builder = Cache::builder()
            .max_capacity(max_capacity_bytes)
            .time_to_live(config.default_ttl)
            .weigher(|_key: &String, value: &Vec<u8>| -> u32 {
                // Weight by size in bytes, capped at u32::MAX
                value.len().try_into().unwrap_or(u32::MAX)
            });

        if let Some(tti) = config.time_to_idle {
            builder = builder.time_to_idle(tti);
        }

        Self {
            cache: builder.build(),
            hits: AtomicU64::new(0),
            misses: AtomicU64::new(0),
        }
    }

    /// Create a cache sized for translated narrations
    ///
    /// Narrations are short and keyed by their source text, so entries stay
    /// valid for a whole session.
    #[must_use]
    pub fn for_translations() -> Self {
        Self::with_config(MokaCacheConfig {
            max_capacity_mb: 8,
            default_ttl: Duration::from_secs(24 * 3600),
            time_to_idle: None,
        })
    }

    /// Estimate memory usage based on entry count and average size
    fn estimate_memory(&self) -> u64 {
        // Moka doesn't expose exact memory usage
        self.cache.entry_count() * 256
    }
}

impl Default for MokaCache {
    fn default() -> Self {
        Self::new()
    }
}

#[async_trait]
impl CachePort for MokaCache {
    #[instrument(skip(self), level = "debug")]
    #[allow(clippy::option_if_let_else)]
    async fn get_bytes(&self, key: &str) -> Result<Option<Vec<u8>>, ApplicationError> {
        if let Some(bytes) = self.cache.get(key).await {
            self.hits.fetch_add(1, Ordering::Relaxed);
            debug!(key = %key, "Cache hit");
            Ok(Some(bytes))
        } else {
            self.misses.fetch_add(1, Ordering::Relaxed);
            debug!(key = %key, "Cache miss");
            Ok(None)
        }
    }

    #[instrument(skip(self, value), level = "debug")]
    async fn set_bytes(
        &self,
        key: &str,
        value: Vec<u8>,
        _ttl: Duration,
    ) -> Result<(), ApplicationError> {
        // Entries use the cache's configured TTL
        self.cache.insert(key.to_string(), value).await;
        debug!(key = %key, "Cache set");
        Ok(())
    }

    #[instrument(skip(self), level = "debug")]
    async fn invalidate(&self, key: &str) -> Result<(), ApplicationError> {
        self.cache.invalidate(key).await;
        debug!(key = %key, "Cache invalidated");
        Ok(())
    }

    #[instrument(skip(self), level = "debug")]
    async fn exists(&self, key: &str) -> Result<bool, ApplicationError> {
        Ok(self.cache.contains_key(key))
    }

    fn stats(&self) -> CacheStats {
        CacheStats {
            hits: self.hits.load(Ordering::Relaxed),
            misses: self.misses.load(Ordering::Relaxed),
            entries: self.cache.entry_count(),
            memory_bytes: self.estimate_memory(),
        }
    }
}

//! Error types for the cache engine.

use thiserror::Error;

/// Result type for cache operations.
pub type CacheResult<T> = Result<T, CacheError>;

/// Errors that can occur in cache operations.
///
/// Cache misses and shape mismatches are not errors: a miss is reported as
/// `None` from a read, and mismatched values are stored inline.
#[derive(Debug, Error)]
pub enum CacheError {
    /// The configuration cannot produce a working cache.
    #[error("invalid configuration: {0}")]
    InvalidConfig(String),

    /// Response data handed to `write` is not a root-field mapping.
    #[error("invalid response data: {0}")]
    InvalidData(String),

    /// Snapshot import/export failed.
    #[error("store error: {0}")]
    Store(#[from] gqlcache_store::StoreError),
}

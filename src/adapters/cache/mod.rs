//! In-memory caching layer for hot-path gateway reads.
//!
//! Uses `moka` for concurrent caching with idle-time (sliding) expiration.
//! Explicit invalidation is driven by the services after successful writes.

pub mod moka_cache;

pub use moka_cache::MokaExpiringCache;

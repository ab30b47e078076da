//! # featureguard Redis
//!
//! Redis-backed [`FlagStore`](featureguard_core::FlagStore) with bb8
//! connection pooling.
//!
//! Flags are written with `SET key value` (no expiration), cleared with
//! `DEL key` and read with `GET key`; a nil reply reads as "not found".
//!
//! ## Quick Start
//!
//! ```rust,ignore
//! use featureguard_core::{Context, FeatureGuard};
//! use featureguard_redis::{RedisConfig, RedisFlagStore};
//!
//! #[tokio::main]
//! async fn main() -> Result<(), Box<dyn std::error::Error>> {
//!     let config = RedisConfig::builder()
//!         .url("redis://localhost:6379")
//!         .pool_size(10)
//!         .build();
//!
//!     let store = RedisFlagStore::connect(&config).await?;
//!     let guard = FeatureGuard::new(store, "featureguard:%s");
//!
//!     let ctx = Context::background();
//!     guard.enable_feature(&ctx, "checkout-v2").await?;
//!     assert!(guard.is_feature_enabled(&ctx, "checkout-v2").await?);
//!
//!     Ok(())
//! }
//! ```

mod config;
mod error;
mod pool;
mod store;

pub use config::{RedisConfig, RedisConfigBuilder};
pub use error::{RedisError, Result};
pub use pool::{RedisPool, RedisPoolBuilder};
pub use store::RedisFlagStore;

// Re-export redis crate for convenience
pub use redis;

/// Prelude for common imports.
pub mod prelude {
    pub use crate::config::{RedisConfig, RedisConfigBuilder};
    pub use crate::error::{RedisError, Result};
    pub use crate::pool::RedisPool;
    pub use crate::store::RedisFlagStore;
}

// featureguard - feature flag toggles backed by a remote key-value store
//
// Maps a feature name to a storage key and enables, disables, checks or
// toggles the boolean stored there.

// Re-export core functionality
pub use featureguard_core::*;

// Re-export optional crates
#[cfg(feature = "redis")]
pub use featureguard_redis;

#[cfg(feature = "redis")]
pub use featureguard_redis::{RedisConfig, RedisError, RedisFlagStore};

// Prelude for common imports
pub mod prelude {
    pub use featureguard_core::prelude::*;

    #[cfg(feature = "redis")]
    pub use featureguard_redis::{RedisConfig, RedisFlagStore};
}

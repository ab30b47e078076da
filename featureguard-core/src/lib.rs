//! Feature flag toggles backed by a remote key-value store.
//!
//! A [`FeatureGuard`] maps each feature name to a storage key through a
//! [`KeyPattern`] and runs one of four operations against that key:
//! enable, disable, check and toggle. Flag state lives entirely in the
//! store; a missing key reads as disabled.
//!
//! # Quick Start
//!
//! ```
//! use featureguard_core::{Context, FeatureGuard, InMemoryFlagStore};
//!
//! # tokio_test::block_on(async {
//! let guard = FeatureGuard::new(InMemoryFlagStore::new(), "featureguard:%s");
//! let ctx = Context::background();
//!
//! guard.enable_feature(&ctx, "checkout-v2").await?;
//! assert!(guard.is_feature_enabled(&ctx, "checkout-v2").await?);
//!
//! guard.toggle_feature(&ctx, "checkout-v2").await?;
//! assert!(!guard.is_feature_enabled(&ctx, "checkout-v2").await?);
//! # Ok::<(), featureguard_core::GuardError>(())
//! # }).unwrap();
//! ```
//!
//! # Key Patterns
//!
//! Templates carry one `%s` slot; anything else is used as a prefix.
//!
//! ```
//! use featureguard_core::KeyPattern;
//!
//! assert_eq!(KeyPattern::parse("flags:%s:on").derive("beta"), "flags:beta:on");
//! assert_eq!(KeyPattern::parse("flags:").derive("beta"), "flags:beta");
//! ```
//!
//! # Timeouts and Cancellation
//!
//! ```
//! use featureguard_core::{CancelHandle, Context};
//! use std::time::Duration;
//!
//! let handle = CancelHandle::new();
//! let ctx = Context::background()
//!     .with_timeout(Duration::from_secs(2))
//!     .with_cancellation(handle.clone());
//! ```

pub mod config;
pub mod context;
pub mod error;
pub mod guard;
pub mod key;
pub mod memory;
pub mod mock;
pub mod store;
pub mod value;

pub use config::{GuardConfig, GuardConfigBuilder, KEY_PATTERN_ENV};
pub use context::{CancelHandle, Context};
pub use error::{GuardError, Result, StoreError, StoreResult};
pub use guard::FeatureGuard;
pub use key::{DEFAULT_KEY_PATTERN, KeyPattern};
pub use memory::InMemoryFlagStore;
pub use mock::{MockFlagStore, StoreCall};
pub use store::FlagStore;

/// Re-export commonly used types
pub mod prelude {
    pub use crate::config::GuardConfig;
    pub use crate::context::{CancelHandle, Context};
    pub use crate::error::{GuardError, StoreError};
    pub use crate::guard::FeatureGuard;
    pub use crate::key::KeyPattern;
    pub use crate::memory::InMemoryFlagStore;
    pub use crate::store::FlagStore;
}

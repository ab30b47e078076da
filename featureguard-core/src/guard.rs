//! Feature guard.
//!
//! Maps feature names to storage keys and runs enable, disable, check and
//! toggle against a [`FlagStore`].

use tracing::{debug, warn};

use crate::config::GuardConfig;
use crate::context::Context;
use crate::error::{GuardError, Result};
use crate::key::KeyPattern;
use crate::store::FlagStore;
use crate::value;

/// Feature flag toggles backed by a remote key-value store.
///
/// Holds no flag data of its own; the store is the source of truth. The
/// store handle is only borrowed immutably, so one guard can serve
/// concurrent callers.
#[derive(Debug, Clone)]
pub struct FeatureGuard<S> {
    store: S,
    key_pattern: KeyPattern,
}

impl<S: FlagStore> FeatureGuard<S> {
    /// Create a guard over an already-connected store.
    ///
    /// An empty `key_pattern` selects [`DEFAULT_KEY_PATTERN`](crate::DEFAULT_KEY_PATTERN).
    ///
    /// # Examples
    ///
    /// ```
    /// use featureguard_core::{FeatureGuard, InMemoryFlagStore};
    ///
    /// let guard = FeatureGuard::new(InMemoryFlagStore::new(), "");
    /// assert_eq!(guard.derive_key("unit"), "featureguard:unit");
    /// ```
    pub fn new(store: S, key_pattern: impl Into<KeyPattern>) -> Self {
        Self {
            store,
            key_pattern: key_pattern.into(),
        }
    }

    /// Create a guard from configuration.
    pub fn with_config(store: S, config: &GuardConfig) -> Self {
        Self::new(store, config.key_pattern.clone())
    }

    /// The configured key pattern.
    pub fn key_pattern(&self) -> &KeyPattern {
        &self.key_pattern
    }

    /// The underlying store.
    pub fn store(&self) -> &S {
        &self.store
    }

    /// Storage key for a feature.
    pub fn derive_key(&self, feature: &str) -> String {
        self.key_pattern.derive(feature)
    }

    /// Enable a feature. Writes `true` with no expiration.
    pub async fn enable_feature(&self, ctx: &Context, feature: &str) -> Result<()> {
        self.write(ctx, feature, true).await
    }

    /// Disable a feature by deleting its key.
    pub async fn disable_feature(&self, ctx: &Context, feature: &str) -> Result<()> {
        let key = self.derive_key(feature);
        debug!(feature = %feature, key = %key, "Disabling feature");
        self.store.delete(ctx, &key).await?;
        Ok(())
    }

    /// Check whether a feature is enabled.
    ///
    /// A missing key is `Ok(false)`. On error the flag must be treated as
    /// disabled; see [`is_feature_enabled_or_default`](Self::is_feature_enabled_or_default).
    pub async fn is_feature_enabled(&self, ctx: &Context, feature: &str) -> Result<bool> {
        let key = self.derive_key(feature);

        let Some(raw) = self.store.get(ctx, &key).await? else {
            debug!(feature = %feature, key = %key, "Feature key not found, treating as disabled");
            return Ok(false);
        };

        match value::decode(&raw) {
            Some(enabled) => Ok(enabled),
            None => {
                warn!(feature = %feature, key = %key, value = %raw, "Stored flag value is not a boolean");
                Err(GuardError::MalformedValue { key, value: raw })
            }
        }
    }

    /// Check whether a feature is enabled, reading any error as disabled.
    pub async fn is_feature_enabled_or_default(&self, ctx: &Context, feature: &str) -> bool {
        match self.is_feature_enabled(ctx, feature).await {
            Ok(enabled) => enabled,
            Err(e) => {
                warn!(feature = %feature, error = %e, "Flag check failed, defaulting to disabled");
                false
            }
        }
    }

    /// Flip a feature's state.
    ///
    /// Reads the current state, then writes its negation. The two calls are
    /// not atomic: a concurrent write between them is overwritten. A failed
    /// read aborts without writing.
    pub async fn toggle_feature(&self, ctx: &Context, feature: &str) -> Result<()> {
        let current = self.is_feature_enabled(ctx, feature).await?;
        self.write(ctx, feature, !current).await
    }

    async fn write(&self, ctx: &Context, feature: &str, enabled: bool) -> Result<()> {
        let key = self.derive_key(feature);
        debug!(feature = %feature, key = %key, enabled, "Writing feature flag");
        self.store
            .set(ctx, &key, value::encode(enabled).to_string(), None)
            .await?;
        Ok(())
    }
}

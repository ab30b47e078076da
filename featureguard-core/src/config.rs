//! Feature guard configuration.

use serde::{Deserialize, Serialize};

use crate::key::KeyPattern;

/// Environment variable holding the key pattern.
pub const KEY_PATTERN_ENV: &str = "FEATUREGUARD_KEY_PATTERN";

/// Feature guard configuration.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GuardConfig {
    /// Naming convention from feature name to storage key.
    #[serde(default)]
    pub key_pattern: KeyPattern,
}

impl GuardConfig {
    /// Create a configuration with the given key pattern.
    pub fn new(key_pattern: impl Into<KeyPattern>) -> Self {
        Self {
            key_pattern: key_pattern.into(),
        }
    }

    /// Create a builder.
    pub fn builder() -> GuardConfigBuilder {
        GuardConfigBuilder::new()
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> GuardConfigBuilder {
        let mut builder = GuardConfigBuilder::new();

        if let Ok(pattern) = std::env::var(KEY_PATTERN_ENV) {
            builder = builder.key_pattern(pattern);
        }

        builder
    }
}

/// Builder for [`GuardConfig`].
#[derive(Debug, Default)]
pub struct GuardConfigBuilder {
    config: GuardConfig,
}

impl GuardConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the key pattern. An empty pattern selects the default.
    pub fn key_pattern(mut self, pattern: impl Into<KeyPattern>) -> Self {
        self.config.key_pattern = pattern.into();
        self
    }

    /// Use a template pattern with one `%s` slot.
    pub fn key_template(mut self, template: impl Into<String>) -> Self {
        self.config.key_pattern = KeyPattern::template(template);
        self
    }

    /// Use a plain prefix.
    pub fn key_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.config.key_pattern = KeyPattern::prefix(prefix);
        self
    }

    /// Build the configuration.
    pub fn build(self) -> GuardConfig {
        self.config
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = GuardConfig::default();
        assert_eq!(config.key_pattern, KeyPattern::default());
    }

    #[test]
    fn test_builder() {
        let config = GuardConfig::builder().key_prefix("flags/").build();
        assert_eq!(config.key_pattern.derive("beta"), "flags/beta");

        let config = GuardConfig::builder().key_template("f:%s:on").build();
        assert_eq!(config.key_pattern.derive("beta"), "f:beta:on");
    }

    #[test]
    fn test_empty_pattern_uses_default() {
        let config = GuardConfig::builder().key_pattern("").build();
        assert_eq!(config.key_pattern, KeyPattern::default());
    }

    #[test]
    fn test_deserialize_without_pattern() {
        let config: GuardConfig = serde_json::from_str("{}").unwrap();
        assert_eq!(config, GuardConfig::default());

        let config: GuardConfig =
            serde_json::from_str(r#"{"key_pattern":"app:flags:%s"}"#).unwrap();
        assert_eq!(config.key_pattern.derive("x"), "app:flags:x");
    }
}

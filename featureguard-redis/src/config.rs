//! Redis configuration.

use serde::{Deserialize, Serialize};
use std::time::Duration;
use url::Url;

use crate::{RedisError, Result};

/// Redis configuration.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct RedisConfig {
    /// Redis URL (redis://host:port or rediss://host:port for TLS).
    pub url: String,
    /// Connection pool size.
    pub pool_size: u32,
    /// Minimum idle connections.
    pub min_idle: Option<u32>,
    /// Connection timeout.
    #[serde(with = "duration_secs")]
    pub connection_timeout: Duration,
    /// Upper bound on a single command, applied on top of the caller's context.
    #[serde(with = "duration_secs")]
    pub command_timeout: Duration,
    /// Database number (0-15).
    pub database: Option<u8>,
    /// Username for Redis 6+ ACL.
    pub username: Option<String>,
    /// Password.
    pub password: Option<String>,
    /// Use TLS.
    pub tls: bool,
}

/// Interpret a boolean environment value (`1` or `true`, any case).
fn parse_flag(value: &str) -> bool {
    let value = value.trim();
    value == "1" || value.eq_ignore_ascii_case("true")
}

fn default_connection_timeout() -> Duration {
    Duration::from_secs(5)
}

fn default_command_timeout() -> Duration {
    Duration::from_secs(30)
}

impl Default for RedisConfig {
    fn default() -> Self {
        Self {
            url: "redis://localhost:6379".to_string(),
            pool_size: 10,
            min_idle: Some(1),
            connection_timeout: default_connection_timeout(),
            command_timeout: default_command_timeout(),
            database: None,
            username: None,
            password: None,
            tls: false,
        }
    }
}

impl RedisConfig {
    /// Create a new configuration.
    pub fn new(url: impl Into<String>) -> Self {
        Self {
            url: url.into(),
            ..Default::default()
        }
    }

    /// Create a builder.
    pub fn builder() -> RedisConfigBuilder {
        RedisConfigBuilder::new()
    }

    /// Load configuration from environment variables.
    pub fn from_env() -> RedisConfigBuilder {
        let mut builder = RedisConfigBuilder::new();

        if let Ok(url) = std::env::var("REDIS_URL") {
            builder = builder.url(url);
        }

        if let Ok(pool_size) = std::env::var("REDIS_POOL_SIZE")
            && let Ok(size) = pool_size.parse()
        {
            builder = builder.pool_size(size);
        }

        if let Ok(db) = std::env::var("REDIS_DATABASE")
            && let Ok(db_num) = db.parse()
        {
            builder = builder.database(db_num);
        }

        if let Ok(username) = std::env::var("REDIS_USERNAME") {
            builder = builder.username(username);
        }

        if let Ok(password) = std::env::var("REDIS_PASSWORD") {
            builder = builder.password(password);
        }

        if let Ok(secs) = std::env::var("REDIS_COMMAND_TIMEOUT")
            && let Ok(secs) = secs.parse()
        {
            builder = builder.command_timeout(Duration::from_secs(secs));
        }

        if let Ok(tls) = std::env::var("REDIS_TLS") {
            builder = builder.tls(parse_flag(&tls));
        }

        builder
    }

    /// Check the configuration for values the pool cannot use.
    pub fn validate(&self) -> Result<()> {
        let url = Url::parse(&self.url).map_err(|e| RedisError::Config(e.to_string()))?;

        if !matches!(url.scheme(), "redis" | "rediss") {
            return Err(RedisError::Config(format!(
                "unsupported scheme: {}",
                url.scheme()
            )));
        }
        if url.host_str().is_none_or(str::is_empty) {
            return Err(RedisError::Config("missing host".to_string()));
        }
        if self.pool_size == 0 {
            return Err(RedisError::Config("pool_size must be at least 1".to_string()));
        }
        if self.database.is_some_and(|db| db > 15) {
            return Err(RedisError::Config("database must be 0-15".to_string()));
        }

        Ok(())
    }

    /// Get the full Redis URL with scheme, auth and database applied.
    pub fn connection_url(&self) -> Result<String> {
        self.validate()?;

        let mut url = Url::parse(&self.url).map_err(|e| RedisError::Config(e.to_string()))?;
        let invalid = |what: &str| RedisError::Config(format!("cannot set {} on {}", what, self.url));

        if self.tls && url.scheme() == "redis" {
            url.set_scheme("rediss").map_err(|_| invalid("scheme"))?;
        }

        if let Some(password) = &self.password {
            // Without a username this yields the legacy redis://:password@host form.
            if let Some(username) = &self.username {
                url.set_username(username).map_err(|_| invalid("username"))?;
            }
            url.set_password(Some(password))
                .map_err(|_| invalid("password"))?;
        }

        if let Some(db) = self.database
            && matches!(url.path(), "" | "/")
        {
            url.set_path(&format!("/{}", db));
        }

        Ok(url.into())
    }
}

/// Builder for Redis configuration.
#[derive(Default)]
pub struct RedisConfigBuilder {
    config: RedisConfig,
}

impl RedisConfigBuilder {
    /// Create a new builder.
    pub fn new() -> Self {
        Self {
            config: RedisConfig::default(),
        }
    }

    /// Set the Redis URL.
    pub fn url(mut self, url: impl Into<String>) -> Self {
        self.config.url = url.into();
        self
    }

    /// Set the pool size.
    pub fn pool_size(mut self, size: u32) -> Self {
        self.config.pool_size = size;
        self
    }

    /// Set the minimum idle connections.
    pub fn min_idle(mut self, min_idle: u32) -> Self {
        self.config.min_idle = Some(min_idle);
        self
    }

    /// Set the connection timeout.
    pub fn connection_timeout(mut self, timeout: Duration) -> Self {
        self.config.connection_timeout = timeout;
        self
    }

    /// Set the command timeout.
    pub fn command_timeout(mut self, timeout: Duration) -> Self {
        self.config.command_timeout = timeout;
        self
    }

    /// Set the database number.
    pub fn database(mut self, db: u8) -> Self {
        self.config.database = Some(db);
        self
    }

    /// Set the username (Redis 6+ ACL).
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.config.username = Some(username.into());
        self
    }

    /// Set the password.
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.config.password = Some(password.into());
        self
    }

    /// Enable TLS.
    pub fn tls(mut self, enabled: bool) -> Self {
        self.config.tls = enabled;
        self
    }

    /// Build the configuration.
    pub fn build(self) -> RedisConfig {
        self.config
    }
}

mod duration_secs {
    use serde::{Deserialize, Deserializer, Serialize, Serializer};
    use std::time::Duration;

    pub fn serialize<S>(duration: &Duration, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        duration.as_secs().serialize(serializer)
    }

    pub fn deserialize<'de, D>(deserializer: D) -> Result<Duration, D::Error>
    where
        D: Deserializer<'de>,
    {
        let secs = u64::deserialize(deserializer)?;
        Ok(Duration::from_secs(secs))
    }
}

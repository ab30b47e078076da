//! Redis error types.

use featureguard_core::StoreError;
use thiserror::Error;

/// Result type for Redis operations.
pub type Result<T> = std::result::Result<T, RedisError>;

/// Redis errors.
#[derive(Debug, Error)]
pub enum RedisError {
    /// Connection error.
    #[error("Connection error: {0}")]
    Connection(String),

    /// Pool error.
    #[error("Pool error: {0}")]
    Pool(String),

    /// Command error.
    #[error("Command error: {0}")]
    Command(String),

    /// Configuration error.
    #[error("Configuration error: {0}")]
    Config(String),

    /// Authentication error.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Timeout error.
    #[error("Operation timed out")]
    Timeout,

    /// Underlying Redis error.
    #[error("Redis error: {0}")]
    Redis(#[source] redis::RedisError),
}

impl RedisError {
    /// Check if this error indicates connection loss.
    pub fn is_connection_error(&self) -> bool {
        match self {
            Self::Connection(_) => true,
            Self::Redis(e) => e.is_connection_refusal() || e.is_connection_dropped(),
            _ => false,
        }
    }
}

impl From<redis::RedisError> for RedisError {
    fn from(err: redis::RedisError) -> Self {
        match err.kind() {
            redis::ErrorKind::AuthenticationFailed => Self::Auth(err.to_string()),
            _ => Self::Redis(err),
        }
    }
}

impl From<bb8::RunError<redis::RedisError>> for RedisError {
    fn from(err: bb8::RunError<redis::RedisError>) -> Self {
        match err {
            bb8::RunError::TimedOut => Self::Timeout,
            bb8::RunError::User(e) => e.into(),
        }
    }
}

impl From<RedisError> for StoreError {
    fn from(err: RedisError) -> Self {
        match err {
            RedisError::Timeout => StoreError::Timeout,
            RedisError::Auth(msg) => StoreError::Auth(msg),
            RedisError::Redis(ref e) if e.is_timeout() => StoreError::Timeout,
            ref e if e.is_connection_error() => StoreError::Connection(e.to_string()),
            RedisError::Pool(msg) => StoreError::Connection(msg),
            other => StoreError::Backend(other.to_string()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_timeout_maps_to_store_timeout() {
        assert_eq!(StoreError::from(RedisError::Timeout), StoreError::Timeout);
    }

    #[test]
    fn test_connection_maps_to_store_connection() {
        let err = StoreError::from(RedisError::Connection("refused".to_string()));
        assert_eq!(
            err,
            StoreError::Connection("Connection error: refused".to_string())
        );
    }

    #[test]
    fn test_pool_maps_to_store_connection() {
        let err = StoreError::from(RedisError::Pool("exhausted".to_string()));
        assert_eq!(err, StoreError::Connection("exhausted".to_string()));
    }

    #[test]
    fn test_auth_maps_to_store_auth() {
        let err = StoreError::from(RedisError::Auth("WRONGPASS".to_string()));
        assert_eq!(err, StoreError::Auth("WRONGPASS".to_string()));
    }

    #[test]
    fn test_command_maps_to_backend() {
        let err = StoreError::from(RedisError::Command("WRONGTYPE".to_string()));
        assert!(matches!(err, StoreError::Backend(_)));
    }

    #[test]
    fn test_native_auth_failure_maps_to_store_auth() {
        let native = redis::RedisError::from((
            redis::ErrorKind::AuthenticationFailed,
            "WRONGPASS invalid username-password pair",
        ));
        let err = RedisError::from(native);
        assert!(matches!(err, RedisError::Auth(_)));
        assert!(matches!(StoreError::from(err), StoreError::Auth(_)));
    }

    #[test]
    fn test_auth_failure_at_checkout_maps_to_store_auth() {
        let native = redis::RedisError::from((
            redis::ErrorKind::AuthenticationFailed,
            "NOAUTH Authentication required",
        ));
        let err: RedisError = bb8::RunError::User(native).into();
        assert!(matches!(StoreError::from(err), StoreError::Auth(_)));
    }

    #[test]
    fn test_pool_timeout() {
        let err: RedisError = bb8::RunError::<redis::RedisError>::TimedOut.into();
        assert!(matches!(err, RedisError::Timeout));
    }
}

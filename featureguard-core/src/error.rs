//! Error types for flag operations.

use thiserror::Error;

/// Result type for store operations.
pub type StoreResult<T> = std::result::Result<T, StoreError>;

/// Result type for feature guard operations.
pub type Result<T> = std::result::Result<T, GuardError>;

/// Errors produced by a [`FlagStore`](crate::FlagStore) backend.
///
/// A missing key is not an error; stores report it as `Ok(None)` from `get`.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum StoreError {
    /// The store could not be reached.
    #[error("Connection error: {0}")]
    Connection(String),

    /// The store did not answer in time.
    #[error("Operation timed out")]
    Timeout,

    /// The caller's context deadline passed before the call completed.
    #[error("Context deadline exceeded")]
    DeadlineExceeded,

    /// The caller's context was cancelled.
    #[error("Context cancelled")]
    Cancelled,

    /// The store rejected the credentials.
    #[error("Authentication error: {0}")]
    Auth(String),

    /// Any other backend failure.
    #[error("Backend error: {0}")]
    Backend(String),
}

impl StoreError {
    /// Whether the failure came from the caller's context rather than the store.
    pub fn is_context_error(&self) -> bool {
        matches!(self, Self::DeadlineExceeded | Self::Cancelled)
    }
}

/// Errors returned by [`FeatureGuard`](crate::FeatureGuard) operations.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum GuardError {
    /// The remote store call failed. Passed through unchanged.
    #[error("Store unavailable: {0}")]
    Store(#[from] StoreError),

    /// The stored value is not a boolean.
    #[error("Malformed flag value at {key}: {value:?}")]
    MalformedValue {
        /// Storage key that was read.
        key: String,
        /// Raw value found at the key.
        value: String,
    },
}

impl GuardError {
    /// Check if this error came from the store call itself.
    pub fn is_store_unavailable(&self) -> bool {
        matches!(self, Self::Store(_))
    }

    /// The underlying store error, if any.
    pub fn store_error(&self) -> Option<&StoreError> {
        match self {
            Self::Store(err) => Some(err),
            Self::MalformedValue { .. } => None,
        }
    }
}

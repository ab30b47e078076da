//! Flag store trait definition.

use crate::context::Context;
use crate::error::StoreResult;
use async_trait::async_trait;
use std::sync::Arc;
use std::time::Duration;

/// Remote key-value store capability used by [`FeatureGuard`](crate::FeatureGuard).
///
/// Implementations must forward `ctx` to the remote call, normally by
/// wrapping it in [`Context::run`].
#[async_trait]
pub trait FlagStore: Send + Sync {
    /// Store `value` at `key`.
    ///
    /// # Arguments
    ///
    /// * `ctx` - Operation context
    /// * `key` - The storage key
    /// * `value` - The encoded value
    /// * `ttl` - Optional time-to-live; `None` means no expiration
    async fn set(
        &self,
        ctx: &Context,
        key: &str,
        value: String,
        ttl: Option<Duration>,
    ) -> StoreResult<()>;

    /// Delete `key`. Deleting a missing key succeeds.
    async fn delete(&self, ctx: &Context, key: &str) -> StoreResult<()>;

    /// Read `key`.
    ///
    /// # Returns
    ///
    /// Returns `Ok(Some(value))` if the key exists, `Ok(None)` if not found,
    /// or an error if the call fails.
    async fn get(&self, ctx: &Context, key: &str) -> StoreResult<Option<String>>;
}

#[async_trait]
impl<S: FlagStore + ?Sized> FlagStore for Arc<S> {
    async fn set(
        &self,
        ctx: &Context,
        key: &str,
        value: String,
        ttl: Option<Duration>,
    ) -> StoreResult<()> {
        (**self).set(ctx, key, value, ttl).await
    }

    async fn delete(&self, ctx: &Context, key: &str) -> StoreResult<()> {
        (**self).delete(ctx, key).await
    }

    async fn get(&self, ctx: &Context, key: &str) -> StoreResult<Option<String>> {
        (**self).get(ctx, key).await
    }
}

#[async_trait]
impl<S: FlagStore + ?Sized> FlagStore for Box<S> {
    async fn set(
        &self,
        ctx: &Context,
        key: &str,
        value: String,
        ttl: Option<Duration>,
    ) -> StoreResult<()> {
        (**self).set(ctx, key, value, ttl).await
    }

    async fn delete(&self, ctx: &Context, key: &str) -> StoreResult<()> {
        (**self).delete(ctx, key).await
    }

    async fn get(&self, ctx: &Context, key: &str) -> StoreResult<Option<String>> {
        (**self).get(ctx, key).await
    }
}

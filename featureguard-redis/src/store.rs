//! Redis-backed flag store.

use async_trait::async_trait;
use featureguard_core::{Context, FlagStore, StoreError, StoreResult};
use redis::AsyncCommands;
use std::future::Future;
use std::time::Duration;
use tracing::debug;

use crate::pool::{RedisPool, RedisPoolBuilder};
use crate::{RedisConfig, RedisError, Result};

/// [`FlagStore`] over a pooled Redis connection.
///
/// Cloning is cheap; clones share the pool.
#[derive(Clone)]
pub struct RedisFlagStore {
    pool: RedisPool,
    command_timeout: Duration,
}

impl RedisFlagStore {
    /// Connect a new pool and wrap it.
    pub async fn connect(config: &RedisConfig) -> Result<Self> {
        let pool = RedisPoolBuilder::new(config.clone()).build().await?;
        Ok(Self::from_pool(pool, config.command_timeout))
    }

    /// Wrap an existing pool.
    pub fn from_pool(pool: RedisPool, command_timeout: Duration) -> Self {
        Self {
            pool,
            command_timeout,
        }
    }

    /// Get the connection pool.
    pub fn pool(&self) -> &RedisPool {
        &self.pool
    }

    /// Check if the connection is healthy.
    pub async fn health_check(&self) -> Result<()> {
        self.command(async {
            let mut conn = self.pool.get().await?;
            let _: String = redis::cmd("PING")
                .query_async(&mut *conn)
                .await
                .map_err(|e| RedisError::Connection(e.to_string()))?;
            Ok(())
        })
        .await
    }

    async fn command<T, F>(&self, op: F) -> Result<T>
    where
        F: Future<Output = Result<T>>,
    {
        tokio::time::timeout(self.command_timeout, op)
            .await
            .map_err(|_| RedisError::Timeout)?
    }
}

#[async_trait]
impl FlagStore for RedisFlagStore {
    async fn set(
        &self,
        ctx: &Context,
        key: &str,
        value: String,
        ttl: Option<Duration>,
    ) -> StoreResult<()> {
        debug!(key = %key, ttl = ?ttl, "SET");
        ctx.run(async {
            self.command(async {
                let mut conn = self.pool.get().await?;
                match ttl {
                    // EX 0 is rejected by Redis.
                    Some(ttl) => {
                        let _: () = conn.set_ex(key, value, ttl.as_secs().max(1)).await?;
                    }
                    None => {
                        let _: () = conn.set(key, value).await?;
                    }
                }
                Ok(())
            })
            .await
            .map_err(StoreError::from)
        })
        .await
    }

    async fn delete(&self, ctx: &Context, key: &str) -> StoreResult<()> {
        debug!(key = %key, "DEL");
        ctx.run(async {
            self.command(async {
                let mut conn = self.pool.get().await?;
                let _: u32 = conn.del(key).await?;
                Ok(())
            })
            .await
            .map_err(StoreError::from)
        })
        .await
    }

    async fn get(&self, ctx: &Context, key: &str) -> StoreResult<Option<String>> {
        debug!(key = %key, "GET");
        ctx.run(async {
            self.command(async {
                let mut conn = self.pool.get().await?;
                let value: Option<String> = conn.get(key).await?;
                Ok(value)
            })
            .await
            .map_err(StoreError::from)
        })
        .await
    }
}

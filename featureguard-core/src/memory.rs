//! In-memory flag store.

use crate::context::Context;
use crate::error::StoreResult;
use crate::store::FlagStore;
use async_trait::async_trait;
use std::collections::HashMap;
use std::sync::Arc;
use std::time::Duration;
use tokio::sync::RwLock;
use tokio::time::Instant;

/// Process-local [`FlagStore`] for development and tests.
///
/// Clones share the same data.
#[derive(Clone, Default)]
pub struct InMemoryFlagStore {
    data: Arc<RwLock<HashMap<String, Entry>>>,
}

#[derive(Clone)]
struct Entry {
    value: String,
    expires_at: Option<Instant>,
}

impl Entry {
    fn is_live(&self, now: Instant) -> bool {
        self.expires_at.is_none_or(|exp| exp > now)
    }
}

impl InMemoryFlagStore {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Raw value at `key`, bypassing any context.
    pub async fn raw(&self, key: &str) -> Option<String> {
        let now = Instant::now();
        self.data
            .read()
            .await
            .get(key)
            .filter(|entry| entry.is_live(now))
            .map(|entry| entry.value.clone())
    }

    /// Number of live entries.
    pub async fn len(&self) -> usize {
        let now = Instant::now();
        self.data
            .read()
            .await
            .values()
            .filter(|entry| entry.is_live(now))
            .count()
    }

    /// Whether the store holds no live entries.
    pub async fn is_empty(&self) -> bool {
        self.len().await == 0
    }
}

#[async_trait]
impl FlagStore for InMemoryFlagStore {
    async fn set(
        &self,
        ctx: &Context,
        key: &str,
        value: String,
        ttl: Option<Duration>,
    ) -> StoreResult<()> {
        ctx.run(async {
            let expires_at = ttl.map(|d| Instant::now() + d);
            self.data
                .write()
                .await
                .insert(key.to_string(), Entry { value, expires_at });
            Ok(())
        })
        .await
    }

    async fn delete(&self, ctx: &Context, key: &str) -> StoreResult<()> {
        ctx.run(async {
            self.data.write().await.remove(key);
            Ok(())
        })
        .await
    }

    async fn get(&self, ctx: &Context, key: &str) -> StoreResult<Option<String>> {
        ctx.run(async { Ok(self.raw(key).await) }).await
    }
}

//! Integration tests for featureguard-core

use featureguard_core::*;
use std::sync::Arc;
use std::time::Duration;

#[tokio::test]
async fn test_absent_flag_is_disabled() {
    let guard = FeatureGuard::new(InMemoryFlagStore::new(), "");
    let enabled = guard
        .is_feature_enabled(&Context::background(), "never-touched")
        .await;
    assert_eq!(enabled, Ok(false));
}

#[tokio::test]
async fn test_enable_then_disable() {
    let guard = FeatureGuard::new(InMemoryFlagStore::new(), "");
    let ctx = Context::background();

    guard.enable_feature(&ctx, "checkout-v2").await.unwrap();
    assert_eq!(guard.is_feature_enabled(&ctx, "checkout-v2").await, Ok(true));

    guard.disable_feature(&ctx, "checkout-v2").await.unwrap();
    assert_eq!(guard.is_feature_enabled(&ctx, "checkout-v2").await, Ok(false));
}

#[tokio::test]
async fn test_disable_never_enabled_flag() {
    let guard = FeatureGuard::new(InMemoryFlagStore::new(), "");
    let ctx = Context::background();

    guard.disable_feature(&ctx, "ghost").await.unwrap();
    assert_eq!(guard.is_feature_enabled(&ctx, "ghost").await, Ok(false));
}

#[tokio::test]
async fn test_toggle_inverts() {
    let guard = FeatureGuard::new(InMemoryFlagStore::new(), "");
    let ctx = Context::background();

    for expected in [true, false, true, false] {
        guard.toggle_feature(&ctx, "unit").await.unwrap();
        assert_eq!(guard.is_feature_enabled(&ctx, "unit").await, Ok(expected));
    }
}

#[tokio::test]
async fn test_guards_with_different_patterns_share_store() {
    let store = Arc::new(InMemoryFlagStore::new());
    let template = FeatureGuard::new(store.clone(), "featureguard:%s");
    let prefix = FeatureGuard::new(store.clone(), KeyPattern::prefix("featureguard:"));
    let other = FeatureGuard::new(store.clone(), "other:%s");
    let ctx = Context::background();

    template.enable_feature(&ctx, "unit").await.unwrap();

    assert_eq!(prefix.is_feature_enabled(&ctx, "unit").await, Ok(true));
    assert_eq!(other.is_feature_enabled(&ctx, "unit").await, Ok(false));
}

#[tokio::test]
async fn test_foreign_value_is_malformed() {
    let store = InMemoryFlagStore::new();
    let ctx = Context::background();
    store
        .set(&ctx, "featureguard:unit", "yes".to_string(), None)
        .await
        .unwrap();

    let guard = FeatureGuard::new(store, "");
    let err = guard.is_feature_enabled(&ctx, "unit").await.unwrap_err();
    assert_eq!(
        err,
        GuardError::MalformedValue {
            key: "featureguard:unit".to_string(),
            value: "yes".to_string(),
        }
    );
    assert!(!guard.is_feature_enabled_or_default(&ctx, "unit").await);
}

#[tokio::test]
async fn test_legacy_boolean_spellings_are_read() {
    let store = InMemoryFlagStore::new();
    let ctx = Context::background();
    store
        .set(&ctx, "featureguard:a", "true".to_string(), None)
        .await
        .unwrap();
    store
        .set(&ctx, "featureguard:b", "False".to_string(), None)
        .await
        .unwrap();

    let guard = FeatureGuard::new(store, "");
    assert_eq!(guard.is_feature_enabled(&ctx, "a").await, Ok(true));
    assert_eq!(guard.is_feature_enabled(&ctx, "b").await, Ok(false));
}

#[tokio::test]
async fn test_concurrent_callers_share_guard() {
    let guard = Arc::new(FeatureGuard::new(InMemoryFlagStore::new(), ""));

    let handles: Vec<_> = (0..16)
        .map(|i| {
            let guard = guard.clone();
            tokio::spawn(async move {
                let ctx = Context::background();
                guard.enable_feature(&ctx, &format!("flag-{i}")).await
            })
        })
        .collect();

    for handle in handles {
        handle.await.unwrap().unwrap();
    }

    let ctx = Context::background();
    for i in 0..16 {
        assert_eq!(
            guard.is_feature_enabled(&ctx, &format!("flag-{i}")).await,
            Ok(true)
        );
    }
    assert_eq!(guard.store().len().await, 16);
}

#[tokio::test]
async fn test_toggle_issues_one_read_then_one_write() {
    let mock = MockFlagStore::new();
    let guard = FeatureGuard::new(mock.clone(), "");
    let ctx = Context::background();

    // The write is unconditional; no compare-and-swap is attempted.
    mock.expect_get("featureguard:unit").set_val("0");
    mock.expect_set("featureguard:unit", "1", None).set_ok();
    guard.toggle_feature(&ctx, "unit").await.unwrap();

    assert_eq!(
        mock.calls(),
        vec![
            StoreCall::Get {
                key: "featureguard:unit".to_string()
            },
            StoreCall::Set {
                key: "featureguard:unit".to_string(),
                value: "1".to_string(),
                ttl: None,
            },
        ]
    );
}

#[tokio::test(start_paused = true)]
async fn test_context_deadline_surfaces_as_store_error() {
    struct SlowStore;

    #[async_trait::async_trait]
    impl FlagStore for SlowStore {
        async fn set(
            &self,
            ctx: &Context,
            _key: &str,
            _value: String,
            _ttl: Option<Duration>,
        ) -> StoreResult<()> {
            ctx.run(async {
                tokio::time::sleep(Duration::from_secs(60)).await;
                Ok(())
            })
            .await
        }

        async fn delete(&self, ctx: &Context, _key: &str) -> StoreResult<()> {
            ctx.run(async { Ok(()) }).await
        }

        async fn get(&self, ctx: &Context, _key: &str) -> StoreResult<Option<String>> {
            ctx.run(async { Ok(None) }).await
        }
    }

    let guard = FeatureGuard::new(SlowStore, "");
    let ctx = Context::background().with_timeout(Duration::from_secs(1));

    let err = guard.enable_feature(&ctx, "unit").await.unwrap_err();
    assert_eq!(err, GuardError::Store(StoreError::DeadlineExceeded));
    assert!(err.is_store_unavailable());
}

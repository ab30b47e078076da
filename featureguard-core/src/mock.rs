//! Scripted flag store for tests.
//!
//! Expectations are queued in the order calls should arrive. Each call is
//! matched against the head of the queue and answered with the scripted
//! result.
//!
//! ```
//! use featureguard_core::{Context, FeatureGuard, MockFlagStore};
//!
//! # tokio_test::block_on(async {
//! let mock = MockFlagStore::new();
//! mock.expect_get("featureguard:unit").set_val("0");
//! mock.expect_set("featureguard:unit", "1", None).set_ok();
//!
//! let guard = FeatureGuard::new(mock.clone(), "");
//! guard.toggle_feature(&Context::background(), "unit").await.unwrap();
//! assert!(mock.expectations_were_met().is_ok());
//! # });
//! ```

use crate::context::Context;
use crate::error::{StoreError, StoreResult};
use crate::store::FlagStore;
use async_trait::async_trait;
use parking_lot::Mutex;
use std::collections::VecDeque;
use std::sync::Arc;
use std::time::Duration;

/// A call received by the mock.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum StoreCall {
    /// `set` with the key, encoded value and optional expiry.
    Set {
        /// Storage key.
        key: String,
        /// Value as written, `"1"` or `"0"` for flags.
        value: String,
        /// Expiry, `None` for no expiry.
        ttl: Option<Duration>,
    },
    /// `delete` of a key.
    Delete {
        /// Storage key.
        key: String,
    },
    /// `get` of a key.
    Get {
        /// Storage key.
        key: String,
    },
}

#[derive(Debug)]
enum Reply {
    Unit(StoreResult<()>),
    Value(StoreResult<Option<String>>),
}

#[derive(Debug)]
struct Expectation {
    call: StoreCall,
    reply: Reply,
}

#[derive(Debug, Default)]
struct MockState {
    expected: VecDeque<Expectation>,
    calls: Vec<StoreCall>,
    unexpected: Vec<String>,
}

/// Expectation-driven [`FlagStore`].
///
/// Clones share the same script and call log.
#[derive(Debug, Clone, Default)]
pub struct MockFlagStore {
    state: Arc<Mutex<MockState>>,
}

impl MockFlagStore {
    /// Create a mock with no expectations.
    pub fn new() -> Self {
        Self::default()
    }

    /// Expect a `get` of `key`.
    pub fn expect_get(&self, key: impl Into<String>) -> ExpectGet<'_> {
        ExpectGet {
            mock: self,
            call: StoreCall::Get { key: key.into() },
        }
    }

    /// Expect a `set` of `value` at `key`.
    pub fn expect_set(
        &self,
        key: impl Into<String>,
        value: impl Into<String>,
        ttl: Option<Duration>,
    ) -> ExpectUnit<'_> {
        ExpectUnit {
            mock: self,
            call: StoreCall::Set {
                key: key.into(),
                value: value.into(),
                ttl,
            },
        }
    }

    /// Expect a `delete` of `key`.
    pub fn expect_delete(&self, key: impl Into<String>) -> ExpectUnit<'_> {
        ExpectUnit {
            mock: self,
            call: StoreCall::Delete { key: key.into() },
        }
    }

    /// Calls received so far, in order.
    pub fn calls(&self) -> Vec<StoreCall> {
        self.state.lock().calls.clone()
    }

    /// Verify every expectation was consumed and no call went unmatched.
    pub fn expectations_were_met(&self) -> Result<(), String> {
        let state = self.state.lock();
        if let Some(message) = state.unexpected.first() {
            return Err(message.clone());
        }
        if let Some(pending) = state.expected.front() {
            return Err(format!(
                "{} expectation(s) not met, next: {:?}",
                state.expected.len(),
                pending.call
            ));
        }
        Ok(())
    }

    fn push(&self, call: StoreCall, reply: Reply) {
        self.state
            .lock()
            .expected
            .push_back(Expectation { call, reply });
    }

    fn respond(&self, call: StoreCall) -> StoreResult<Reply> {
        let mut state = self.state.lock();
        state.calls.push(call.clone());

        match state.expected.pop_front() {
            Some(expectation) if expectation.call == call => Ok(expectation.reply),
            Some(expectation) => {
                let message = format!(
                    "unexpected call {:?}, expected {:?}",
                    call, expectation.call
                );
                state.expected.push_front(expectation);
                state.unexpected.push(message.clone());
                Err(StoreError::Backend(message))
            }
            None => {
                let message = format!("unexpected call {:?}, no expectations left", call);
                state.unexpected.push(message.clone());
                Err(StoreError::Backend(message))
            }
        }
    }

    fn respond_unit(&self, call: StoreCall) -> StoreResult<()> {
        match self.respond(call)? {
            Reply::Unit(result) => result,
            Reply::Value(result) => result.map(|_| ()),
        }
    }

    fn respond_value(&self, call: StoreCall) -> StoreResult<Option<String>> {
        match self.respond(call)? {
            Reply::Value(result) => result,
            Reply::Unit(result) => result.map(|_| None),
        }
    }
}

/// Pending `get` expectation.
#[must_use = "an expectation is only registered once its reply is set"]
pub struct ExpectGet<'a> {
    mock: &'a MockFlagStore,
    call: StoreCall,
}

impl ExpectGet<'_> {
    /// Reply with a stored value.
    pub fn set_val(self, value: impl Into<String>) {
        self.mock
            .push(self.call, Reply::Value(Ok(Some(value.into()))));
    }

    /// Reply with "not found".
    pub fn set_nil(self) {
        self.mock.push(self.call, Reply::Value(Ok(None)));
    }

    /// Reply with an error.
    pub fn set_err(self, err: StoreError) {
        self.mock.push(self.call, Reply::Value(Err(err)));
    }
}

/// Pending `set` or `delete` expectation.
#[must_use = "an expectation is only registered once its reply is set"]
pub struct ExpectUnit<'a> {
    mock: &'a MockFlagStore,
    call: StoreCall,
}

impl ExpectUnit<'_> {
    /// Reply with success.
    pub fn set_ok(self) {
        self.mock.push(self.call, Reply::Unit(Ok(())));
    }

    /// Reply with an error.
    pub fn set_err(self, err: StoreError) {
        self.mock.push(self.call, Reply::Unit(Err(err)));
    }
}

#[async_trait]
impl FlagStore for MockFlagStore {
    async fn set(
        &self,
        ctx: &Context,
        key: &str,
        value: String,
        ttl: Option<Duration>,
    ) -> StoreResult<()> {
        let call = StoreCall::Set {
            key: key.to_string(),
            value,
            ttl,
        };
        ctx.run(async { self.respond_unit(call) }).await
    }

    async fn delete(&self, ctx: &Context, key: &str) -> StoreResult<()> {
        let call = StoreCall::Delete {
            key: key.to_string(),
        };
        ctx.run(async { self.respond_unit(call) }).await
    }

    async fn get(&self, ctx: &Context, key: &str) -> StoreResult<Option<String>> {
        let call = StoreCall::Get {
            key: key.to_string(),
        };
        ctx.run(async { self.respond_value(call) }).await
    }
}

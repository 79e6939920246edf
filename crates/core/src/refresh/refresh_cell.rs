use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::{PoisonError, RwLock, RwLockReadGuard, RwLockWriteGuard};

use log::{debug, warn};
use serde::{Deserialize, Serialize};

use crate::errors::Result;

/// Identifies one fetch cycle. Later cycles carry larger tokens.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct RequestToken(u64);

impl RequestToken {
    pub fn value(self) -> u64 {
        self.0
    }
}

/// What `complete` did with a result.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", content = "message", rename_all = "camelCase")]
pub enum Outcome {
    Published,
    /// A newer cycle was started; the result was discarded
    Superseded,
    /// The cycle failed; the previous value is kept
    Failed(String),
}

struct Slot<T> {
    value: Option<T>,
    published: u64,
    last_error: Option<String>,
}

/// Holds the latest result of a repeatedly refreshed view.
///
/// A result is published only if no newer cycle was begun in the meantime,
/// so a slow response can never overwrite a fresher one.
pub struct RefreshCell<T> {
    issued: AtomicU64,
    slot: RwLock<Slot<T>>,
}

impl<T> Default for RefreshCell<T> {
    fn default() -> Self {
        Self::new()
    }
}

impl<T> RefreshCell<T> {
    pub fn new() -> Self {
        Self {
            issued: AtomicU64::new(0),
            slot: RwLock::new(Slot {
                value: None,
                published: 0,
                last_error: None,
            }),
        }
    }

    /// Starts a cycle and supersedes every earlier one.
    pub fn begin(&self) -> RequestToken {
        RequestToken(self.issued.fetch_add(1, Ordering::SeqCst) + 1)
    }

    pub fn is_latest(&self, token: RequestToken) -> bool {
        self.issued.load(Ordering::SeqCst) == token.0
    }

    pub fn complete(&self, token: RequestToken, result: Result<T>) -> Outcome {
        let mut slot = self.write();
        if !self.is_latest(token) || token.0 <= slot.published {
            debug!("Discarding result of superseded request {}", token.0);
            return Outcome::Superseded;
        }
        slot.published = token.0;

        match result {
            Ok(value) => {
                slot.value = Some(value);
                slot.last_error = None;
                Outcome::Published
            }
            Err(e) => {
                warn!("Refresh request {} failed: {}", token.0, e);
                let message = e.user_message();
                slot.last_error = Some(message.clone());
                Outcome::Failed(message)
            }
        }
    }

    /// Runs one full cycle around `fetch`.
    pub async fn run<F>(&self, fetch: F) -> Outcome
    where
        F: Future<Output = Result<T>>,
    {
        let token = self.begin();
        let result = fetch.await;
        self.complete(token, result)
    }

    pub fn last_error(&self) -> Option<String> {
        self.read().last_error.clone()
    }

    pub fn has_value(&self) -> bool {
        self.read().value.is_some()
    }

    fn read(&self) -> RwLockReadGuard<'_, Slot<T>> {
        self.slot.read().unwrap_or_else(PoisonError::into_inner)
    }

    fn write(&self) -> RwLockWriteGuard<'_, Slot<T>> {
        self.slot.write().unwrap_or_else(PoisonError::into_inner)
    }
}

impl<T: Clone> RefreshCell<T> {
    /// Last published value, if any.
    pub fn current(&self) -> Option<T> {
        self.read().value.clone()
    }
}

//! Cancellation scopes for UI-bound background work
//!
//! Every fetch spawned on behalf of a screen or popup carries a
//! [`ScopeGuard`]. When the owning [`CancelScope`] is cancelled or dropped
//! the task abandons its request at the next await point. Results that still
//! reach the update loop carry a [`ScopeId`] that no longer matches any live
//! scope, and are discarded there.

use std::future::Future;
use std::sync::atomic::{AtomicU64, Ordering};

use tokio::sync::watch;

static NEXT_SCOPE_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one scope instance; never reused within a process
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ScopeId(u64);

impl ScopeId {
    pub fn as_u64(&self) -> u64 {
        self.0
    }
}

/// Owner side of a cancellation scope. Cancelled on drop.
#[derive(Debug)]
pub struct CancelScope {
    id: ScopeId,
    tx: watch::Sender<bool>,
}

impl CancelScope {
    pub fn new() -> Self {
        let (tx, _rx) = watch::channel(false);
        Self {
            id: ScopeId(NEXT_SCOPE_ID.fetch_add(1, Ordering::Relaxed)),
            tx,
        }
    }

    pub fn id(&self) -> ScopeId {
        self.id
    }

    /// Token handed to a background task
    pub fn guard(&self) -> ScopeGuard {
        ScopeGuard {
            id: self.id,
            rx: self.tx.subscribe(),
        }
    }

    pub fn cancel(&self) {
        self.tx.send_replace(true);
    }

    pub fn is_cancelled(&self) -> bool {
        *self.tx.borrow()
    }
}

impl Default for CancelScope {
    fn default() -> Self {
        Self::new()
    }
}

impl Drop for CancelScope {
    fn drop(&mut self) {
        self.cancel();
    }
}

/// Task side of a cancellation scope
#[derive(Debug, Clone)]
pub struct ScopeGuard {
    id: ScopeId,
    rx: watch::Receiver<bool>,
}

impl ScopeGuard {
    pub fn id(&self) -> ScopeId {
        self.id
    }

    pub fn is_cancelled(&self) -> bool {
        *self.rx.borrow()
    }

    /// Resolves once the scope is cancelled or its owner is gone
    pub async fn cancelled(&mut self) {
        loop {
            if *self.rx.borrow_and_update() {
                return;
            }
            if self.rx.changed().await.is_err() {
                return;
            }
        }
    }

    /// Run `fut` unless the scope is cancelled first. `None` means cancelled.
    pub async fn run<F: Future>(&mut self, fut: F) -> Option<F::Output> {
        if self.is_cancelled() {
            return None;
        }
        tokio::select! {
            biased;
            _ = self.cancelled() => None,
            out = fut => Some(out),
        }
    }
}

//! One-shot completion gate.

use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::Arc;
use tokio::sync::Notify;

/// A single-fire synchronization primitive.
///
/// The orchestrator creates the gate and waits on it; the initiator
/// signals it when the stop condition is met. Signalling is
/// idempotent — only the first call fires the gate — and a waiter that
/// arrives after the gate has fired is released immediately.
///
/// Handles are cheap clones sharing one underlying gate.
#[derive(Clone)]
pub struct CompletionGate {
    inner: Arc<GateInner>,
}

struct GateInner {
    fired: AtomicBool,
    notify: Notify,
}

impl CompletionGate {
    pub fn new() -> Self {
        Self {
            inner: Arc::new(GateInner {
                fired: AtomicBool::new(false),
                notify: Notify::new(),
            }),
        }
    }

    /// Fire the gate, releasing all current and future waiters.
    ///
    /// Subsequent calls are no-ops.
    pub fn signal(&self) {
        if !self.inner.fired.swap(true, Ordering::SeqCst) {
            self.inner.notify.notify_waiters();
        }
    }

    /// Whether the gate has fired
    pub fn is_fired(&self) -> bool {
        self.inner.fired.load(Ordering::SeqCst)
    }

    /// Wait until the gate fires. Returns immediately if it already
    /// has.
    pub async fn wait(&self) {
        if self.is_fired() {
            return;
        }

        // Register interest before the re-check so a signal landing in
        // between still wakes us.
        let notified = self.inner.notify.notified();
        tokio::pin!(notified);
        notified.as_mut().enable();

        if self.is_fired() {
            return;
        }
        notified.await;
    }
}

impl Default for CompletionGate {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;
    use tokio::time::timeout;

    #[tokio::test]
    async fn test_signal_releases_waiter() {
        let gate = CompletionGate::new();
        let waiter = {
            let gate = gate.clone();
            tokio::spawn(async move { gate.wait().await })
        };

        gate.signal();
        timeout(Duration::from_secs(1), waiter)
            .await
            .expect("waiter was not released")
            .unwrap();
        assert!(gate.is_fired());
    }

    #[tokio::test]
    async fn test_wait_after_signal_returns_immediately() {
        let gate = CompletionGate::new();
        gate.signal();

        timeout(Duration::from_secs(1), gate.wait())
            .await
            .expect("late waiter was not released");
    }

    #[tokio::test]
    async fn test_signal_is_idempotent() {
        let gate = CompletionGate::new();
        gate.signal();
        gate.signal();
        assert!(gate.is_fired());

        timeout(Duration::from_secs(1), gate.wait())
            .await
            .expect("waiter was not released");
    }

    #[tokio::test]
    async fn test_releases_waiters_before_and_after_signal() {
        let gate = CompletionGate::new();
        let early = {
            let gate = gate.clone();
            tokio::spawn(async move { gate.wait().await })
        };
        // Let the early waiter register.
        tokio::task::yield_now().await;

        gate.signal();

        let late = {
            let gate = gate.clone();
            tokio::spawn(async move { gate.wait().await })
        };

        timeout(Duration::from_secs(1), early)
            .await
            .expect("early waiter was not released")
            .unwrap();
        timeout(Duration::from_secs(1), late)
            .await
            .expect("late waiter was not released")
            .unwrap();
    }

    #[test]
    fn test_not_fired_initially() {
        let gate = CompletionGate::new();
        assert!(!gate.is_fired());
    }
}

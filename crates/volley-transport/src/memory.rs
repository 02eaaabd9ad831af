//! In-memory channel for same-process exchanges.

use crate::channel::MessageChannel;
use crate::error::{Result, TransportError};
use crate::router::MessageRouter;
use async_trait::async_trait;
use std::sync::atomic::{AtomicBool, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;
use tokio::sync::mpsc;
use tokio::task::JoinHandle;
use volley_protocol::{Message, PlayerId};

/// How long `stop` waits for the delivery worker to exit. A timeout is
/// logged and tolerated, not fatal.
const WORKER_STOP_TIMEOUT: Duration = Duration::from_secs(1);

/// In-memory [`MessageChannel`] backed by an unbounded FIFO queue and
/// one delivery worker task.
///
/// The worker dequeues messages one at a time and hands them to the
/// router for synchronous dispatch, so a sender's outbound order is
/// preserved end-to-end. Shutdown is cooperative: `stop` enqueues a
/// sentinel behind any pending messages and the worker drains
/// everything in front of it before exiting.
///
/// Channels are single-use. The queue receiver is consumed by the
/// first `start`; once stopped, a channel cannot be restarted.
pub struct InMemoryChannel {
    router: Arc<MessageRouter>,
    /// Id of the participant this channel hands off to. Only used to
    /// identify the delivery worker in logs.
    peer: PlayerId,
    tx: mpsc::UnboundedSender<Message>,
    rx: Mutex<Option<mpsc::UnboundedReceiver<Message>>>,
    running: AtomicBool,
    worker: Mutex<Option<JoinHandle<()>>>,
}

impl InMemoryChannel {
    /// Create a new channel that routes messages through `router`.
    pub fn new(router: Arc<MessageRouter>, peer: PlayerId) -> Self {
        let (tx, rx) = mpsc::unbounded_channel();
        Self {
            router,
            peer,
            tx,
            rx: Mutex::new(Some(rx)),
            running: AtomicBool::new(false),
            worker: Mutex::new(None),
        }
    }
}

#[async_trait]
impl MessageChannel for InMemoryChannel {
    fn send(&self, message: Message) -> Result<()> {
        if !self.running.load(Ordering::SeqCst) {
            return Err(TransportError::NotRunning);
        }
        self.tx
            .send(message)
            .map_err(|_| TransportError::ChannelClosed)
    }

    fn start(&self) -> Result<()> {
        if self.running.swap(true, Ordering::SeqCst) {
            return Err(TransportError::AlreadyRunning);
        }

        let rx = self.rx.lock().expect("receiver lock poisoned").take();
        let mut rx = match rx {
            Some(rx) => rx,
            None => {
                // Receiver was consumed by an earlier start; channels
                // are single-use.
                self.running.store(false, Ordering::SeqCst);
                return Err(TransportError::ChannelClosed);
            }
        };

        let router = Arc::clone(&self.router);
        let peer = self.peer.clone();
        let handle = tokio::spawn(async move {
            while let Some(message) = rx.recv().await {
                if message.is_stop() {
                    break;
                }
                router.dispatch(message);
            }
            tracing::debug!(peer = %peer, "delivery worker exited");
        });

        *self.worker.lock().expect("worker lock poisoned") = Some(handle);
        Ok(())
    }

    async fn stop(&self) {
        if !self.running.swap(false, Ordering::SeqCst) {
            return;
        }

        // Wake the worker; goes straight to the sender and is exempt
        // from the running check.
        if self.tx.send(Message::stop(PlayerId::system())).is_err() {
            tracing::debug!(peer = %self.peer, "delivery worker already gone");
        }

        let handle = self.worker.lock().expect("worker lock poisoned").take();
        if let Some(handle) = handle {
            if tokio::time::timeout(WORKER_STOP_TIMEOUT, handle)
                .await
                .is_err()
            {
                tracing::warn!(
                    peer = %self.peer,
                    timeout = ?WORKER_STOP_TIMEOUT,
                    "delivery worker did not exit in time"
                );
            }
        }
    }

    fn is_running(&self) -> bool {
        self.running.load(Ordering::SeqCst)
    }
}

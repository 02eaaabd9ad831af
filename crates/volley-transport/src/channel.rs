//! Message delivery capability.

use crate::error::Result;
use async_trait::async_trait;
use volley_protocol::Message;

/// Abstraction over message delivery between players.
///
/// A channel owns an ordered queue and a delivery worker that drains
/// it. [`crate::InMemoryChannel`] is the only implementation today; a
/// network-backed channel can be substituted without touching
/// [`crate::Player`], [`crate::MessageRouter`], or
/// [`crate::GameController`].
#[async_trait]
pub trait MessageChannel: Send + Sync {
    /// Queue a message for delivery.
    ///
    /// Fails with [`crate::TransportError::NotRunning`] when the
    /// channel has not been started or has already been stopped.
    /// Safe under concurrent callers; never drops or reorders.
    fn send(&self, message: Message) -> Result<()>;

    /// Start the channel and launch its delivery worker.
    ///
    /// Fails with [`crate::TransportError::AlreadyRunning`] on a
    /// duplicate start.
    fn start(&self) -> Result<()>;

    /// Stop the channel.
    ///
    /// Idempotent. Everything queued before the call is still
    /// delivered; the worker exits once it reaches the internal stop
    /// sentinel, and the call waits (bounded) for that to happen.
    async fn stop(&self);

    /// Snapshot of the running flag.
    fn is_running(&self) -> bool;
}

//! Player actor: identity, counters, and the increment-and-echo
//! protocol.

use crate::channel::MessageChannel;
use crate::error::Result;
use crate::gate::CompletionGate;
use crate::router::MessageHandler;
use std::sync::atomic::{AtomicBool, AtomicU64, Ordering};
use std::sync::Arc;
use volley_protocol::{Message, PlayerId, PlayerRole};

/// A participant in the message exchange.
///
/// A player sends through its own channel and receives through the
/// router, which calls [`MessageHandler::on_message`] on the sending
/// channel's worker task. Counters are atomics: the send path and the
/// receive path may run on different tasks, but each counter only ever
/// moves upward.
///
/// Lifecycle is `start → exchange → stop`, terminal; a stopped player
/// is not reusable.
pub struct Player {
    id: PlayerId,
    role: PlayerRole,
    channel: Arc<dyn MessageChannel>,
    sent_count: AtomicU64,
    // Initiator-only counters backing the stop condition.
    messages_sent: AtomicU64,
    responses_received: AtomicU64,
    stopped: AtomicBool,
    rounds: u64,
    gate: Option<CompletionGate>,
}

impl Player {
    /// Create a new player.
    ///
    /// `rounds` is the stop-condition threshold and `gate` the
    /// completion gate to signal once it is reached; both only matter
    /// for the [`PlayerRole::Initiator`].
    pub fn new(
        id: PlayerId,
        role: PlayerRole,
        channel: Arc<dyn MessageChannel>,
        rounds: u64,
        gate: Option<CompletionGate>,
    ) -> Self {
        Self {
            id,
            role,
            channel,
            sent_count: AtomicU64::new(0),
            messages_sent: AtomicU64::new(0),
            responses_received: AtomicU64::new(0),
            stopped: AtomicBool::new(false),
            rounds,
            gate,
        }
    }

    pub fn id(&self) -> &PlayerId {
        &self.id
    }

    pub fn role(&self) -> PlayerRole {
        self.role
    }

    /// Total messages sent by this player
    pub fn sent_count(&self) -> u64 {
        self.sent_count.load(Ordering::SeqCst)
    }

    /// Messages sent while acting as initiator
    pub fn messages_sent(&self) -> u64 {
        self.messages_sent.load(Ordering::SeqCst)
    }

    /// Responses received while acting as initiator
    pub fn responses_received(&self) -> u64 {
        self.responses_received.load(Ordering::SeqCst)
    }

    /// Send `payload` to another player through this player's channel.
    ///
    /// The new send count is stamped on the message as its sequence
    /// number.
    pub fn send(&self, payload: &str, to: &PlayerId) -> Result<()> {
        let sequence = self.sent_count.fetch_add(1, Ordering::SeqCst) + 1;
        if self.role == PlayerRole::Initiator {
            self.messages_sent.fetch_add(1, Ordering::SeqCst);
        }

        let message = Message::new(
            payload,
            Some(self.id.clone()),
            Some(to.clone()),
            Some(sequence),
        );
        self.channel.send(message)?;

        tracing::info!(player = %self.id, sequence, to = %to, payload, "sent message");
        Ok(())
    }

    /// Start this player's channel.
    pub fn start(&self) -> Result<()> {
        self.channel.start()
    }

    /// Stop this player.
    ///
    /// Sets the stopped flag before stopping the channel, so a message
    /// already dequeued cannot trigger a fresh send. Safe to call
    /// twice.
    pub async fn stop(&self) {
        self.stopped.store(true, Ordering::SeqCst);
        self.channel.stop().await;
    }
}

impl MessageHandler for Player {
    fn on_message(&self, message: Message) {
        tracing::info!(
            player = %self.id,
            from = message.sender().map_or("", PlayerId::as_str),
            payload = message.payload(),
            "received message"
        );

        if self.stopped.load(Ordering::SeqCst) {
            return;
        }

        // Non-numeric payloads restart the count at 1; the protocol is
        // self-healing and never surfaces the parse failure.
        let next = match message.payload().parse::<u64>() {
            Ok(value) => value.saturating_add(1),
            Err(_) => 1,
        };

        // Time may have passed; do not race a reply out mid-shutdown.
        if !self.stopped.load(Ordering::SeqCst) {
            if let Some(from) = message.sender() {
                if let Err(err) = self.send(&next.to_string(), from) {
                    tracing::debug!(player = %self.id, %err, "reply dropped during shutdown");
                }
            }
        }

        if self.role == PlayerRole::Initiator {
            let received = self.responses_received.fetch_add(1, Ordering::SeqCst) + 1;
            let sent = self.messages_sent.load(Ordering::SeqCst);
            tracing::debug!(player = %self.id, sent, received, "initiator progress");

            if sent >= self.rounds && received >= self.rounds {
                if let Some(gate) = &self.gate {
                    tracing::info!(player = %self.id, "stop condition met, signalling completion");
                    gate.signal();
                }
            }
        }
    }
}

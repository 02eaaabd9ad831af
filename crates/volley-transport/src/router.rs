//! Message routing between players in the same process.

use dashmap::DashMap;
use std::sync::{Arc, Weak};
use volley_protocol::{Message, PlayerId};

/// The router's view of a player: something that can take delivery of
/// a message.
pub trait MessageHandler: Send + Sync {
    /// Handle an incoming message.
    ///
    /// Invoked synchronously on the delivering channel's worker task.
    fn on_message(&self, message: Message);
}

/// Maps player ids to handlers so channels can deliver messages
/// without the players holding direct references to each other.
///
/// The registry holds non-owning handles; dropping a player makes its
/// registration dead without any unregister call. Registration and
/// dispatch are safe from concurrent worker tasks, no external locking
/// required.
pub struct MessageRouter {
    players: DashMap<PlayerId, Weak<dyn MessageHandler>>,
}

impl MessageRouter {
    pub fn new() -> Self {
        Self {
            players: DashMap::new(),
        }
    }

    /// Register a handler under `id`, overwriting any prior
    /// registration for that id.
    pub fn register<H>(&self, id: &PlayerId, handler: &Arc<H>)
    where
        H: MessageHandler + 'static,
    {
        let handler: Arc<dyn MessageHandler> = handler.clone();
        let handler: Weak<dyn MessageHandler> = Arc::downgrade(&handler);
        self.players.insert(id.clone(), handler);
    }

    /// Remove the registration for `id`. No-op when absent.
    pub fn unregister(&self, id: &PlayerId) {
        self.players.remove(id);
    }

    /// Deliver a message to its addressee.
    ///
    /// A message without a recipient, with an unregistered recipient,
    /// or whose handler has been dropped is silently discarded —
    /// delivery is at-most-once, best-effort. The handler runs on the
    /// calling task, after the registry guard has been released.
    pub fn dispatch(&self, message: Message) {
        let to = match message.recipient() {
            Some(to) => to,
            None => return,
        };

        let handler = match self.players.get(to) {
            Some(entry) => entry.upgrade(),
            None => return,
        };

        if let Some(handler) = handler {
            handler.on_message(message);
        }
    }

    /// Number of registrations (live or dead)
    pub fn len(&self) -> usize {
        self.players.len()
    }

    pub fn is_empty(&self) -> bool {
        self.players.is_empty()
    }
}

impl Default for MessageRouter {
    fn default() -> Self {
        Self::new()
    }
}

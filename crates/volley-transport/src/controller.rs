//! Session orchestration.

use crate::channel::MessageChannel;
use crate::config::GameConfig;
use crate::error::Result;
use crate::gate::CompletionGate;
use crate::memory::InMemoryChannel;
use crate::player::Player;
use crate::router::MessageRouter;
use std::sync::Arc;
use volley_protocol::{PlayerId, PlayerRole};

const INITIATOR_ID: &str = "initiator";
const RESPONDER_ID: &str = "responder";

/// The literal payload that opens the exchange.
const OPENING_PAYLOAD: &str = "1";

/// Final counters of a completed exchange.
#[derive(Debug, Clone, Copy)]
pub struct ExchangeReport {
    pub initiator_sent: u64,
    pub initiator_received: u64,
    pub responder_sent: u64,
}

/// Wires a router, two cross-addressed channels, and two players, then
/// drives one exchange session from the opening message to cooperative
/// shutdown.
pub struct GameController {
    config: GameConfig,
}

impl GameController {
    pub fn new() -> Self {
        Self::with_config(GameConfig::default())
    }

    pub fn with_config(config: GameConfig) -> Self {
        Self { config }
    }

    /// Run one full exchange session.
    ///
    /// Blocks until the initiator's stop condition fires, stops both
    /// players (initiator first), and returns the final counters.
    pub async fn run(&self) -> Result<ExchangeReport> {
        tracing::info!(rounds = self.config.rounds, "starting player message exchange");

        let router = Arc::new(MessageRouter::new());
        let initiator_id = PlayerId::new(INITIATOR_ID);
        let responder_id = PlayerId::new(RESPONDER_ID);

        // Each channel names the participant it hands off to.
        let initiator_channel: Arc<dyn MessageChannel> = Arc::new(InMemoryChannel::new(
            Arc::clone(&router),
            responder_id.clone(),
        ));
        let responder_channel: Arc<dyn MessageChannel> = Arc::new(InMemoryChannel::new(
            Arc::clone(&router),
            initiator_id.clone(),
        ));

        let gate = CompletionGate::new();

        let responder = Arc::new(Player::new(
            responder_id.clone(),
            PlayerRole::Responder,
            responder_channel,
            self.config.rounds,
            None,
        ));
        let initiator = Arc::new(Player::new(
            initiator_id.clone(),
            PlayerRole::Initiator,
            initiator_channel,
            self.config.rounds,
            Some(gate.clone()),
        ));

        router.register(&responder_id, &responder);
        router.register(&initiator_id, &initiator);

        responder.start()?;
        initiator.start()?;

        tracing::info!("initiator sending opening message");
        initiator.send(OPENING_PAYLOAD, &responder_id)?;

        gate.wait().await;

        tracing::info!("stop condition reached, shutting down");
        initiator.stop().await;
        responder.stop().await;

        let report = ExchangeReport {
            initiator_sent: initiator.sent_count(),
            initiator_received: initiator.responses_received(),
            responder_sent: responder.sent_count(),
        };
        tracing::info!(
            initiator_sent = report.initiator_sent,
            initiator_received = report.initiator_received,
            responder_sent = report.responder_sent,
            "shutdown complete"
        );
        Ok(report)
    }
}

impl Default for GameController {
    fn default() -> Self {
        Self::new()
    }
}

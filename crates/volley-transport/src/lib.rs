pub mod channel;
pub mod config;
pub mod controller;
pub mod error;
pub mod gate;
pub mod memory;
pub mod player;
pub mod router;

pub use channel::MessageChannel;
pub use config::{ConfigError, GameConfig};
pub use controller::{ExchangeReport, GameController};
pub use error::{Result, TransportError};
pub use gate::CompletionGate;
pub use memory::InMemoryChannel;
pub use player::Player;
pub use router::{MessageHandler, MessageRouter};

pub mod error;
pub mod id;
pub mod message;
pub mod role;

pub use error::{ProtocolError, Result};
pub use id::PlayerId;
pub use message::Message;
pub use role::PlayerRole;

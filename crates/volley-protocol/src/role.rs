//! Player roles.

use std::fmt;

/// Role of a player in the message exchange.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum PlayerRole {
    /// Opens the conversation with the first message and is responsible
    /// for deciding when the exchange is done.
    Initiator,

    /// Replies to whatever the initiator sends.
    Responder,
}

impl fmt::Display for PlayerRole {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            PlayerRole::Initiator => f.write_str("INITIATOR"),
            PlayerRole::Responder => f.write_str("RESPONDER"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_role_display() {
        assert_eq!(format!("{}", PlayerRole::Initiator), "INITIATOR");
        assert_eq!(format!("{}", PlayerRole::Responder), "RESPONDER");
    }

    #[test]
    fn test_role_equality() {
        assert_eq!(PlayerRole::Initiator, PlayerRole::Initiator);
        assert_ne!(PlayerRole::Initiator, PlayerRole::Responder);
    }
}

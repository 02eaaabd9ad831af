//! Message value type and its line-based wire codec.

use crate::error::{ProtocolError, Result};
use crate::id::PlayerId;
use std::fmt;

/// Payload reserved for the internal stop sentinel.
///
/// Application payloads must never legitimately equal this string; a
/// payload that does is treated as a stop signal.
pub const STOP_PAYLOAD: &str = "STOP";

/// A message exchanged between players.
///
/// Immutable once constructed. `from`, `to`, and `sequence` are
/// optional; the wire encoding represents an absent field as the
/// empty string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    payload: String,
    from: Option<PlayerId>,
    to: Option<PlayerId>,
    sequence: Option<u64>,
}

impl Message {
    /// Create a new message
    pub fn new(
        payload: impl Into<String>,
        from: Option<PlayerId>,
        to: Option<PlayerId>,
        sequence: Option<u64>,
    ) -> Self {
        Self {
            payload: payload.into(),
            from,
            to,
            sequence,
        }
    }

    /// Create the stop sentinel used to shut down a channel worker.
    ///
    /// Carries no recipient and no sequence number; it exists only to
    /// wake the worker and is never delivered to application logic.
    pub fn stop(from: PlayerId) -> Self {
        Self::new(STOP_PAYLOAD, Some(from), None, None)
    }

    pub fn payload(&self) -> &str {
        &self.payload
    }

    pub fn sender(&self) -> Option<&PlayerId> {
        self.from.as_ref()
    }

    pub fn recipient(&self) -> Option<&PlayerId> {
        self.to.as_ref()
    }

    pub fn sequence(&self) -> Option<u64> {
        self.sequence
    }

    /// Check whether this is the stop sentinel
    pub fn is_stop(&self) -> bool {
        self.payload == STOP_PAYLOAD
    }

    /// Serialize to the line-based wire format.
    ///
    /// Format: `from|to|sequence|payload`, with the empty string for
    /// absent optional fields. Round-trips through [`Message::decode`].
    pub fn encode(&self) -> String {
        let from = self.from.as_ref().map_or("", PlayerId::as_str);
        let to = self.to.as_ref().map_or("", PlayerId::as_str);
        let sequence = self.sequence.map(|s| s.to_string()).unwrap_or_default();
        format!("{}|{}|{}|{}", from, to, sequence, self.payload)
    }

    /// Deserialize from the line-based wire format.
    ///
    /// Fails on empty/blank input, on fewer than four `|`-delimited
    /// fields, and on a non-empty sequence field that is not a number.
    /// The payload is everything after the third delimiter; a payload
    /// containing `|` itself is out of scope and carries no escaping.
    pub fn decode(input: &str) -> Result<Self> {
        if input.trim().is_empty() {
            return Err(ProtocolError::EmptyMessage);
        }

        let mut parts = input.splitn(4, '|');
        let (from, to, sequence, payload) =
            match (parts.next(), parts.next(), parts.next(), parts.next()) {
                (Some(from), Some(to), Some(sequence), Some(payload)) => {
                    (from, to, sequence, payload)
                }
                _ => {
                    return Err(ProtocolError::MalformedMessage {
                        input: input.to_string(),
                    })
                }
            };

        let from = (!from.is_empty()).then(|| PlayerId::new(from));
        let to = (!to.is_empty()).then(|| PlayerId::new(to));
        let sequence = if sequence.is_empty() {
            None
        } else {
            Some(sequence.parse::<u64>()?)
        };

        Ok(Self {
            payload: payload.to_string(),
            from,
            to,
            sequence,
        })
    }
}

impl fmt::Display for Message {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let from = self.from.as_ref().map_or("-", PlayerId::as_str);
        let to = self.to.as_ref().map_or("-", PlayerId::as_str);
        let sequence = self.sequence.map(|s| s.to_string()).unwrap_or_default();
        write!(
            f,
            "Message{{from={}, to={}, seq={}, payload='{}'}}",
            from, to, sequence, self.payload
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encode_all_fields() {
        let msg = Message::new(
            "hello",
            Some(PlayerId::new("alice")),
            Some(PlayerId::new("bob")),
            Some(7),
        );
        assert_eq!(msg.encode(), "alice|bob|7|hello");
    }

    #[test]
    fn test_encode_absent_fields() {
        let msg = Message::new("hello", None, None, None);
        assert_eq!(msg.encode(), "|||hello");
    }

    #[test]
    fn test_roundtrip_all_fields() {
        let original = Message::new(
            "42",
            Some(PlayerId::new("initiator")),
            Some(PlayerId::new("responder")),
            Some(3),
        );
        let decoded = Message::decode(&original.encode()).unwrap();
        assert_eq!(decoded, original);
    }

    #[test]
    fn test_roundtrip_absent_fields_stay_absent() {
        let original = Message::new("ping", None, None, None);
        let decoded = Message::decode(&original.encode()).unwrap();
        assert_eq!(decoded, original);
        assert!(decoded.sender().is_none());
        assert!(decoded.recipient().is_none());
        assert!(decoded.sequence().is_none());
    }

    #[test]
    fn test_decode_empty_input_fails() {
        assert!(matches!(
            Message::decode(""),
            Err(ProtocolError::EmptyMessage)
        ));
        assert!(matches!(
            Message::decode("   "),
            Err(ProtocolError::EmptyMessage)
        ));
    }

    #[test]
    fn test_decode_too_few_fields_fails() {
        assert!(matches!(
            Message::decode("a|b|c"),
            Err(ProtocolError::MalformedMessage { .. })
        ));
    }

    #[test]
    fn test_decode_non_numeric_sequence_fails() {
        assert!(matches!(
            Message::decode("a|b|notanumber|x"),
            Err(ProtocolError::InvalidSequence(_))
        ));
    }

    #[test]
    fn test_stop_sentinel() {
        let stop = Message::stop(PlayerId::new("x"));
        assert!(stop.is_stop());
        assert_eq!(stop.payload(), "STOP");
        assert!(stop.recipient().is_none());
        assert!(stop.sequence().is_none());

        let regular = Message::new("1", Some(PlayerId::new("x")), None, None);
        assert!(!regular.is_stop());
    }

    #[test]
    fn test_display() {
        let msg = Message::new(
            "1",
            Some(PlayerId::new("initiator")),
            Some(PlayerId::new("responder")),
            Some(1),
        );
        assert_eq!(
            format!("{}", msg),
            "Message{from=initiator, to=responder, seq=1, payload='1'}"
        );
    }
}

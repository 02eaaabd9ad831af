//! Player identity.

use std::fmt;

/// Identity reserved for internally generated control messages
/// (the stop sentinel a channel enqueues for its own worker).
const SYSTEM_ID: &str = "system";

/// Unique identifier for a player.
///
/// Used as the routing key in the message router and as the
/// `from`/`to` fields of a [`crate::Message`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PlayerId(String);

impl PlayerId {
    /// Create a player id from a string
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// The reserved `"system"` identity used to author internal control messages
    pub fn system() -> Self {
        Self::new(SYSTEM_ID)
    }

    /// Get the underlying string value
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl From<&str> for PlayerId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

impl From<String> for PlayerId {
    fn from(id: String) -> Self {
        Self(id)
    }
}

impl fmt::Display for PlayerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

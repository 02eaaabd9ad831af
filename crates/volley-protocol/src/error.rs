use thiserror::Error;

#[derive(Error, Debug)]
pub enum ProtocolError {
    #[error("Serialized message cannot be empty")]
    EmptyMessage,

    #[error("Invalid message format: {input}")]
    MalformedMessage { input: String },

    #[error("Invalid sequence number: {0}")]
    InvalidSequence(#[from] std::num::ParseIntError),
}

pub type Result<T> = std::result::Result<T, ProtocolError>;

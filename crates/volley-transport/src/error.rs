use thiserror::Error;

#[derive(Error, Debug)]
pub enum TransportError {
    #[error("Channel is not running")]
    NotRunning,

    #[error("Channel is already running")]
    AlreadyRunning,

    #[error("Channel is closed (delivery worker gone)")]
    ChannelClosed,
}

pub type Result<T> = std::result::Result<T, TransportError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        assert_eq!(
            TransportError::NotRunning.to_string(),
            "Channel is not running"
        );
        assert_eq!(
            TransportError::AlreadyRunning.to_string(),
            "Channel is already running"
        );
        assert_eq!(
            TransportError::ChannelClosed.to_string(),
            "Channel is closed (delivery worker gone)"
        );
    }

    #[test]
    fn test_result_type() {
        let ok: Result<u64> = Ok(42);
        assert_eq!(ok.unwrap(), 42);

        let err: Result<u64> = Err(TransportError::NotRunning);
        assert!(err.is_err());
    }
}

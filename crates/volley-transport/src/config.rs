use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("Failed to read config file: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Failed to parse config: {0}")]
    ParseError(#[from] toml::de::Error),

    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),
}

/// Default number of rounds each side completes before the exchange
/// stops.
pub const DEFAULT_ROUNDS: u64 = 10;

/// Configuration for one exchange session.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct GameConfig {
    /// The initiator keeps the exchange going until it has both sent
    /// and received this many messages.
    #[serde(default = "default_rounds")]
    pub rounds: u64,
}

fn default_rounds() -> u64 {
    DEFAULT_ROUNDS
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            rounds: DEFAULT_ROUNDS,
        }
    }
}

impl GameConfig {
    /// Load configuration from a TOML file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self, ConfigError> {
        let contents = fs::read_to_string(path)?;
        let config: GameConfig = toml::from_str(&contents)?;
        config.validate()?;
        Ok(config)
    }

    fn validate(&self) -> Result<(), ConfigError> {
        if self.rounds == 0 {
            return Err(ConfigError::InvalidConfig(
                "rounds must be at least 1".to_string(),
            ));
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_default_rounds() {
        assert_eq!(GameConfig::default().rounds, 10);
    }

    #[test]
    fn test_parse_rounds() {
        let config: GameConfig = toml::from_str("rounds = 5").unwrap();
        assert_eq!(config.rounds, 5);
    }

    #[test]
    fn test_parse_empty_uses_default() {
        let config: GameConfig = toml::from_str("").unwrap();
        assert_eq!(config.rounds, 10);
    }

    #[test]
    fn test_validate_zero_rounds() {
        let config: GameConfig = toml::from_str("rounds = 0").unwrap();
        assert!(config.validate().is_err());
    }

    #[test]
    fn test_load_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rounds = 3").unwrap();

        let config = GameConfig::load(file.path()).unwrap();
        assert_eq!(config.rounds, 3);
    }

    #[test]
    fn test_load_missing_file() {
        let result = GameConfig::load("/nonexistent/volley.toml");
        assert!(matches!(result, Err(ConfigError::IoError(_))));
    }

    #[test]
    fn test_load_rejects_zero_rounds() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "rounds = 0").unwrap();

        let result = GameConfig::load(file.path());
        assert!(matches!(result, Err(ConfigError::InvalidConfig(_))));
    }
}

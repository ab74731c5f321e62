use serde::{Deserialize, Serialize};
use thiserror::Error;

pub const DECK_SIZE: usize = 54;
pub const HAND_SIZE: usize = 5;
pub const ROW_SIZE: usize = 4;

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid session config: {0}")]
    Parse(#[from] serde_json::Error),
    #[error("player names must not be empty")]
    EmptyName,
}

/// Per-session settings. The rules themselves are fixed.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
#[serde(default)]
pub struct SessionConfig {
    pub seed: Option<u64>,
    pub human_name: String,
    pub computer_name: String,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            seed: None,
            human_name: "Human".to_string(),
            computer_name: "Computer".to_string(),
        }
    }
}

impl SessionConfig {
    pub fn from_json_str(text: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(text)?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.human_name.trim().is_empty() || self.computer_name.trim().is_empty() {
            return Err(ConfigError::EmptyName);
        }
        Ok(())
    }

    pub fn with_seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }
}

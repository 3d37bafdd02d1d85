//! Session configuration, loadable from TOML.

use std::path::Path;
use std::time::Duration;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use chess_core::Color;
use move_oracle::Difficulty;

/// Pacing for oracle turns: the reply is held back until a minimum
/// visible delay has passed, and the call itself is bounded by a ceiling
/// (enforced by the HTTP client; the fallback covers timeouts).
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct ThinkPolicy {
    pub min_visible_delay_ms: u64,
    pub response_ceiling_ms: u64,
}

impl Default for ThinkPolicy {
    fn default() -> Self {
        Self {
            min_visible_delay_ms: 600,
            response_ceiling_ms: 2_000,
        }
    }
}

impl ThinkPolicy {
    pub fn min_visible_delay(&self) -> Duration {
        Duration::from_millis(self.min_visible_delay_ms)
    }

    pub fn response_ceiling(&self) -> Duration {
        Duration::from_millis(self.response_ceiling_ms)
    }

    /// How much longer to hold a reply that arrived after `elapsed`.
    pub fn residual_wait(&self, elapsed: Duration) -> Duration {
        self.min_visible_delay().saturating_sub(elapsed)
    }
}

/// Which side the human plays.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PlayerSide {
    #[default]
    White,
    Black,
}

impl PlayerSide {
    pub fn color(self) -> Color {
        match self {
            PlayerSide::White => Color::White,
            PlayerSide::Black => Color::Black,
        }
    }
}

#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub difficulty: Difficulty,
    pub player: PlayerSide,
    pub think: ThinkPolicy,
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read session config: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse session config: {0}")]
    Parse(#[from] toml::de::Error),
}

impl SessionConfig {
    pub fn from_toml_str(text: &str) -> Result<Self, ConfigError> {
        Ok(toml::from_str(text)?)
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        Self::from_toml_str(&std::fs::read_to_string(path)?)
    }
}

#[cfg(test)]
#[path = "config_tests.rs"]
mod config_tests;

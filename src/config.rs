use std::path::Path;

use clap::ValueEnum;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;
use crate::game::{Hex, Square};
use crate::strategy::StrategyKind;

/// Board shape selector.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, ValueEnum)]
#[serde(rename_all = "lowercase")]
pub enum TopologyKind {
    Hex,
    Square,
}

impl TopologyKind {
    pub fn default_size(self) -> usize {
        match self {
            TopologyKind::Hex => Hex::DEFAULT_SIZE,
            TopologyKind::Square => Square::DEFAULT_SIZE,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    pub topology: TopologyKind,
    /// Cells along the widest axis; the topology's default when unset
    pub grid_size: Option<usize>,
}

impl Default for GameConfig {
    fn default() -> Self {
        GameConfig {
            topology: TopologyKind::Hex,
            grid_size: None,
        }
    }
}

impl GameConfig {
    pub fn grid_size(&self) -> usize {
        self.grid_size
            .unwrap_or_else(|| self.topology.default_size())
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub black: StrategyKind,
    pub white: StrategyKind,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            black: StrategyKind::Combined,
            white: StrategyKind::Random,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    pub games: usize,
    /// Moves plus passes allowed in one game before it is abandoned
    pub max_turns: usize,
    /// Seed for random strategies; fresh entropy when unset
    pub seed: Option<u64>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        SessionConfig {
            games: 1,
            max_turns: 1_000,
            seed: None,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub game: GameConfig,
    pub players: PlayersConfig,
    pub session: SessionConfig,
}

impl AppConfig {
    /// Load configuration from a TOML file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let content = std::fs::read_to_string(path).map_err(|e| ConfigError::FileRead {
            path: path.to_path_buf(),
            source: e,
        })?;
        let config: AppConfig = toml::from_str(&content)?;
        config.validate()?;
        Ok(config)
    }

    /// Load configuration from a TOML file, falling back to defaults if the
    /// file does not exist.
    pub fn load_or_default(path: &Path) -> Result<Self, ConfigError> {
        if path.exists() {
            Self::load(path)
        } else {
            warn!(path = %path.display(), "config file not found, using defaults");
            Ok(Self::default())
        }
    }

    /// Validate configuration values.
    pub fn validate(&self) -> Result<(), ConfigError> {
        let size = self.game.grid_size();
        match self.game.topology {
            TopologyKind::Hex => {
                Hex::new(size)?;
            }
            TopologyKind::Square => {
                Square::new(size)?;
            }
        }
        if self.session.games == 0 {
            return Err(ConfigError::Validation(
                "session.games must be > 0".into(),
            ));
        }
        if self.session.max_turns == 0 {
            return Err(ConfigError::Validation(
                "session.max_turns must be > 0".into(),
            ));
        }
        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}

use std::path::Path;

use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::error::ConfigError;
use crate::game::{Player, COLS};

/// Token colors available to both presentation layers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TokenColor {
    Red,
    Yellow,
    Green,
    Blue,
    Magenta,
    Cyan,
}

impl TokenColor {
    /// SGR foreground code for plain-text output
    pub fn ansi_code(self) -> u8 {
        match self {
            TokenColor::Red => 31,
            TokenColor::Green => 32,
            TokenColor::Yellow => 33,
            TokenColor::Blue => 34,
            TokenColor::Magenta => 35,
            TokenColor::Cyan => 36,
        }
    }
}

/// How one player is shown on screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlayerStyle {
    pub name: String,
    pub color: TokenColor,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PlayersConfig {
    pub one: PlayerStyle,
    pub two: PlayerStyle,
}

impl Default for PlayersConfig {
    fn default() -> Self {
        PlayersConfig {
            one: PlayerStyle {
                name: Player::One.name().to_string(),
                color: TokenColor::Red,
            },
            two: PlayerStyle {
                name: Player::Two.name().to_string(),
                color: TokenColor::Yellow,
            },
        }
    }
}

impl PlayersConfig {
    pub fn style(&self, player: Player) -> &PlayerStyle {
        match player {
            Player::One => &self.one,
            Player::Two => &self.two,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct UiConfig {
    /// Column highlighted when the TUI starts
    pub start_column: usize,
    /// Emit ANSI colors in plain text mode
    pub color: bool,
}

impl Default for UiConfig {
    fn default() -> Self {
        UiConfig {
            start_column: 3,
            color: true,
        }
    }
}

/// Top-level application configuration, loadable from TOML.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub players: PlayersConfig,
    pub ui: UiConfig,
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

    /// Load configuration from a TOML file, falling back to defaults if the file
    /// does not exist.
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
        if self.players.one.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.one.name must not be empty".into(),
            ));
        }
        if self.players.two.name.trim().is_empty() {
            return Err(ConfigError::Validation(
                "players.two.name must not be empty".into(),
            ));
        }
        if self.players.one.color == self.players.two.color {
            return Err(ConfigError::Validation(
                "players.one.color and players.two.color must differ".into(),
            ));
        }
        if self.ui.start_column >= COLS {
            return Err(ConfigError::Validation(format!(
                "ui.start_column must be < {COLS}"
            )));
        }

        Ok(())
    }

    /// Generate a TOML string with all default values (useful for creating
    /// example config files).
    pub fn default_toml() -> Result<String, toml::ser::Error> {
        toml::to_string_pretty(&AppConfig::default())
    }
}

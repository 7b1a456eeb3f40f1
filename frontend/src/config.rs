//! Session configuration loaded from TOML.
//!
//! ```toml
//! board = "boson640"
//! ticks = 400
//! initial_mode = "scaled"
//! clock_polls = 1000
//!
//! [[button]]
//! level = "released"
//! ticks = 20
//!
//! [[button]]
//! level = "held"
//! ticks = 120
//! ```

use std::path::{Path, PathBuf};

use diva_core::display::DisplayMode;
use diva_soc::registry::DEFAULT_BOARD;
use diva_soc::{ButtonLevel, ButtonScript, ScriptSegment};
use serde::Deserialize;

/// Config file name under the user's config directory.
const CONFIG_DIR: &str = "diva";
const CONFIG_FILE: &str = "config.toml";

#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    #[error("failed to read {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },

    #[error("invalid config {}: {source}", .path.display())]
    Parse {
        path: PathBuf,
        source: toml::de::Error,
    },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ModeSetting {
    Native,
    Scaled,
}

impl From<ModeSetting> for DisplayMode {
    fn from(setting: ModeSetting) -> Self {
        match setting {
            ModeSetting::Native => DisplayMode::Native,
            ModeSetting::Scaled => DisplayMode::Scaled,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LevelSetting {
    Held,
    Released,
}

/// One `[[button]]` table.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
pub struct ButtonSegmentConfig {
    pub level: LevelSetting,
    pub ticks: u32,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Board profile name (see `--list-boards`).
    pub board: String,
    /// Loop iterations to run after boot.
    pub ticks: u64,
    pub initial_mode: ModeSetting,
    /// Camera clock polls allowed during boot before giving up.
    pub clock_polls: u32,
    #[serde(rename = "button")]
    pub buttons: Vec<ButtonSegmentConfig>,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            board: DEFAULT_BOARD.to_string(),
            ticks: 300,
            initial_mode: ModeSetting::Scaled,
            clock_polls: 1000,
            buttons: Vec::new(),
        }
    }
}

impl SessionConfig {
    /// `<config_dir>/diva/config.toml`, if the platform has a config dir.
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(CONFIG_DIR).join(CONFIG_FILE))
    }

    /// Parse a config from TOML text. `path` is only used in errors.
    pub fn from_toml(text: &str, path: &Path) -> Result<Self, ConfigError> {
        toml::from_str(text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })
    }

    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_toml(&text, path)
    }

    /// Load an explicit config file, or the default one if it exists.
    ///
    /// A missing default file yields built-in defaults; a missing explicit
    /// file is an error.
    pub fn resolve(explicit: Option<&Path>) -> Result<Self, ConfigError> {
        if let Some(path) = explicit {
            return Self::load(path);
        }
        match Self::default_path() {
            Some(path) if path.is_file() => {
                log::debug!("loading config from {}", path.display());
                Self::load(&path)
            }
            _ => Ok(Self::default()),
        }
    }

    pub fn button_script(&self) -> ButtonScript {
        ButtonScript::new(
            self.buttons
                .iter()
                .map(|b| ScriptSegment {
                    level: match b.level {
                        LevelSetting::Held => ButtonLevel::Held,
                        LevelSetting::Released => ButtonLevel::Released,
                    },
                    ticks: b.ticks,
                })
                .collect(),
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(text: &str) -> Result<SessionConfig, ConfigError> {
        SessionConfig::from_toml(text, Path::new("test.toml"))
    }

    #[test]
    fn empty_file_is_default() {
        assert_eq!(parse("").unwrap(), SessionConfig::default());
    }

    #[test]
    fn full_config() {
        let config = parse(
            r#"
            board = "boson640-cold"
            ticks = 50
            initial_mode = "native"
            clock_polls = 7

            [[button]]
            level = "held"
            ticks = 120

            [[button]]
            level = "released"
            ticks = 3
            "#,
        )
        .unwrap();

        assert_eq!(config.board, "boson640-cold");
        assert_eq!(config.ticks, 50);
        assert_eq!(DisplayMode::from(config.initial_mode), DisplayMode::Native);
        assert_eq!(config.clock_polls, 7);
        assert_eq!(
            config.button_script().segments(),
            &[ScriptSegment::held(120), ScriptSegment::released(3)]
        );
    }

    #[test]
    fn unknown_mode_is_parse_error() {
        let err = parse(r#"initial_mode = "stretched""#).unwrap_err();
        assert!(matches!(err, ConfigError::Parse { .. }));
        assert!(err.to_string().contains("test.toml"));
    }

    #[test]
    fn missing_explicit_file_is_io_error() {
        let path = std::env::temp_dir().join("diva_config_test_missing.toml");
        let _ = std::fs::remove_file(&path);
        let err = SessionConfig::resolve(Some(&path)).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
    }

    #[test]
    fn load_from_disk() {
        let dir = std::env::temp_dir().join("diva_config_test_load");
        let _ = std::fs::remove_dir_all(&dir);
        std::fs::create_dir_all(&dir).unwrap();
        let path = dir.join("config.toml");
        std::fs::write(&path, "ticks = 12\n").unwrap();

        let config = SessionConfig::resolve(Some(&path)).unwrap();
        assert_eq!(config.ticks, 12);
        assert_eq!(config.board, DEFAULT_BOARD);

        std::fs::remove_dir_all(&dir).unwrap();
    }
}

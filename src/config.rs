//! Configuration management for arkanoid

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::error::{GameError, Result};

/// Application configuration
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Config {
    /// Window settings
    #[serde(default)]
    pub window: WindowConfig,

    /// Gameplay settings
    #[serde(default)]
    pub gameplay: GameplayConfig,

    /// Asset settings
    #[serde(default)]
    pub assets: AssetsConfig,

    /// Logging settings
    #[serde(default)]
    pub logging: LoggingConfig,
}

/// Window configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WindowConfig {
    /// Window width in pixels
    pub width: u32,
    /// Window height in pixels
    pub height: u32,
    /// Start in borderless fullscreen
    pub fullscreen: bool,
    /// Synchronize presentation with the display
    pub vsync: bool,
}

/// Gameplay configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GameplayConfig {
    /// Fixed world seed; omitted means a random seed per launch
    pub seed: Option<u64>,
}

/// Asset configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// Directory holding textures and the HUD font
    pub dir: PathBuf,
}

/// Logging configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level
    pub level: String,
    /// Enable colored output
    pub color: bool,
}

impl Default for WindowConfig {
    fn default() -> Self {
        Self {
            width: 640,
            height: 480,
            fullscreen: false,
            vsync: true,
        }
    }
}

impl Default for GameplayConfig {
    fn default() -> Self {
        Self { seed: None }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("assets"),
        }
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            color: true,
        }
    }
}

impl Config {
    /// Get the config file path
    pub fn config_path() -> Result<PathBuf> {
        let config_dir = dirs::config_dir()
            .ok_or_else(|| GameError::config("Could not find config directory"))?;
        Ok(config_dir.join("arkanoid").join("config.toml"))
    }

    /// Load configuration from the default location
    pub fn load() -> Result<Self> {
        let path = Self::config_path()?;
        Self::load_from(&path)
    }

    /// Load configuration from a specific file, falling back to defaults
    /// when it does not exist
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let content = std::fs::read_to_string(path)?;
            let config: Config = toml::from_str(&content)?;
            Ok(config)
        } else {
            Ok(Self::default())
        }
    }

    /// Load configuration from an explicit path when given, otherwise
    /// from the default location
    pub fn load_or_default_path(path: Option<&Path>) -> Result<Self> {
        match path {
            Some(path) => Self::load_from(path),
            None => Self::load(),
        }
    }

    /// Save configuration to a specific file
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let content =
            toml::to_string_pretty(self).map_err(|e| GameError::Config(e.to_string()))?;
        std::fs::write(path, content)?;

        Ok(())
    }

    /// Reset the configuration file at `path` to defaults
    pub fn reset_at(path: &Path) -> Result<()> {
        Self::default().save_to(path)
    }

    /// Write a default configuration file at `path`
    pub fn init_at(path: &Path, force: bool) -> Result<()> {
        if path.exists() && !force {
            return Err(GameError::config(
                "Configuration file already exists. Use --force to overwrite.",
            ));
        }

        Self::default().save_to(path)
    }

    /// Get a configuration value by key
    pub fn get(&self, key: &str) -> Option<String> {
        match key {
            "window.width" => Some(self.window.width.to_string()),
            "window.height" => Some(self.window.height.to_string()),
            "window.fullscreen" => Some(self.window.fullscreen.to_string()),
            "window.vsync" => Some(self.window.vsync.to_string()),

            "gameplay.seed" => self.gameplay.seed.map(|s| s.to_string()),

            "assets.dir" => Some(self.assets.dir.display().to_string()),

            "logging.level" => Some(self.logging.level.clone()),
            "logging.color" => Some(self.logging.color.to_string()),

            _ => None,
        }
    }

    /// Set a configuration value by key
    pub fn set(&mut self, key: &str, value: &str) -> Result<()> {
        match key {
            "window.width" => {
                self.window.width = value
                    .parse()
                    .map_err(|_| GameError::config("Invalid number for width"))?;
            }
            "window.height" => {
                self.window.height = value
                    .parse()
                    .map_err(|_| GameError::config("Invalid number for height"))?;
            }
            "window.fullscreen" => {
                self.window.fullscreen = value
                    .parse()
                    .map_err(|_| GameError::config("Invalid boolean for fullscreen"))?;
            }
            "window.vsync" => {
                self.window.vsync = value
                    .parse()
                    .map_err(|_| GameError::config("Invalid boolean for vsync"))?;
            }

            "gameplay.seed" => {
                self.gameplay.seed = if value.is_empty() {
                    None
                } else {
                    Some(
                        value
                            .parse()
                            .map_err(|_| GameError::config("Invalid number for seed"))?,
                    )
                };
            }

            "assets.dir" => {
                self.assets.dir = PathBuf::from(value);
            }

            "logging.level" => {
                self.logging.level = value.to_string();
            }
            "logging.color" => {
                self.logging.color = value
                    .parse()
                    .map_err(|_| GameError::config("Invalid boolean for color"))?;
            }

            _ => {
                return Err(GameError::config(format!(
                    "Unknown configuration key: {}",
                    key
                )));
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = Config::default();
        assert_eq!(config.window.width, 640);
        assert_eq!(config.window.height, 480);
        assert!(config.window.vsync);
        assert!(!config.window.fullscreen);
        assert_eq!(config.gameplay.seed, None);
        assert_eq!(config.logging.level, "info");
    }

    #[test]
    fn test_get_set() {
        let mut config = Config::default();

        config.set("window.fullscreen", "true").unwrap();
        assert_eq!(config.get("window.fullscreen"), Some("true".to_string()));

        config.set("gameplay.seed", "42").unwrap();
        assert_eq!(config.get("gameplay.seed"), Some("42".to_string()));

        config.set("gameplay.seed", "").unwrap();
        assert_eq!(config.get("gameplay.seed"), None);
    }

    #[test]
    fn test_unknown_key_rejected() {
        let mut config = Config::default();
        assert!(config.set("window.title", "x").is_err());
        assert_eq!(config.get("window.title"), None);
    }

    #[test]
    fn test_load_from_missing_file_uses_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let config = Config::load_from(&dir.path().join("config.toml")).unwrap();
        assert_eq!(config.window.width, 640);
    }

    #[test]
    fn test_load_from_malformed_file_errors() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");
        std::fs::write(&path, "window = [not toml").unwrap();
        assert!(Config::load_from(&path).is_err());
    }

    #[test]
    fn test_save_to_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("nested").join("config.toml");

        let mut config = Config::default();
        config.set("window.height", "600").unwrap();
        config.save_to(&path).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.window.height, 600);
    }

    #[test]
    fn test_init_at_refuses_existing_without_force() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        Config::init_at(&path, false).unwrap();
        assert!(Config::init_at(&path, false).is_err());
        Config::init_at(&path, true).unwrap();
    }

    #[test]
    fn test_reset_at_restores_defaults() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.set("window.width", "1024").unwrap();
        config.save_to(&path).unwrap();

        Config::reset_at(&path).unwrap();
        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.window.width, 640);
    }

    #[test]
    fn test_load_from_file_roundtrip() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.toml");

        let mut config = Config::default();
        config.set("window.width", "800").unwrap();
        config.set("logging.level", "debug").unwrap();
        let content = toml::to_string_pretty(&config).unwrap();
        std::fs::write(&path, content).unwrap();

        let loaded = Config::load_from(&path).unwrap();
        assert_eq!(loaded.window.width, 800);
        assert_eq!(loaded.logging.level, "debug");
    }
}

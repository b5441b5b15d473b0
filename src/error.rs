//! Error types for arkanoid

use std::path::PathBuf;
use thiserror::Error;

/// Main error type for arkanoid operations
#[derive(Error, Debug)]
pub enum GameError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Walkdir error: {0}")]
    WalkDir(#[from] walkdir::Error),

    #[error("SDL error: {0}")]
    Sdl(String),

    #[error("Failed to create window: {0}")]
    WindowBuild(#[from] sdl2::video::WindowBuildError),

    #[error("Failed to create renderer: {0}")]
    CanvasBuild(#[from] sdl2::IntegerOrSdlError),

    #[error("Failed to load texture '{name}': {reason}")]
    TextureLoad { name: String, reason: String },

    #[error("Font error: {0}")]
    Font(String),

    #[error("Asset directory not found: {path}")]
    AssetsNotFound { path: PathBuf },

    #[error("Asset validation failed: {0}")]
    AssetsIncomplete(String),

    #[error("Configuration error: {0}")]
    Config(String),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("{0}")]
    Other(String),
}

/// Result type alias for arkanoid operations
pub type Result<T> = std::result::Result<T, GameError>;

impl GameError {
    /// Create a new SDL error from SDL's string error channel
    pub fn sdl(msg: impl Into<String>) -> Self {
        Self::Sdl(msg.into())
    }

    /// Create a new font error
    pub fn font(msg: impl Into<String>) -> Self {
        Self::Font(msg.into())
    }

    /// Create a new configuration error
    pub fn config(msg: impl Into<String>) -> Self {
        Self::Config(msg.into())
    }

    /// Create a texture loading error
    pub fn texture(name: impl Into<String>, reason: impl Into<String>) -> Self {
        Self::TextureLoad {
            name: name.into(),
            reason: reason.into(),
        }
    }

    /// Create an asset-directory-not-found error
    pub fn assets_not_found(path: impl Into<PathBuf>) -> Self {
        Self::AssetsNotFound { path: path.into() }
    }
}

use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

use crate::portfolio::Portfolio;

/// Where UI sound cues go
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SoundBackend {
    /// Synthesized tones on the default audio device
    Speaker,
    /// Terminal bell for error cues only
    Bell,
    Off,
}

impl Default for SoundBackend {
    fn default() -> Self {
        if cfg!(feature = "audio") {
            SoundBackend::Speaker
        } else {
            SoundBackend::Bell
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub sound_enabled: bool,
    pub sound_backend: SoundBackend,
    pub show_splash: bool,
    /// Delay between revealed characters of the typewriter effect
    pub typing_speed_ms: u64,
    /// Simulated processing time before a command's output appears
    pub command_delay_ms: u64,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub download_dir: Option<PathBuf>,
    /// External portfolio dataset, takes precedence over `portfolio`
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio_path: Option<PathBuf>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub portfolio: Option<Portfolio>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            sound_enabled: true,
            sound_backend: SoundBackend::default(),
            show_splash: true,
            typing_speed_ms: 30,
            command_delay_ms: 500,
            download_dir: None,
            portfolio_path: None,
            portfolio: None,
        }
    }
}

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("Config file not found: {}", .0.display())]
    NotFound(PathBuf),
    #[error("Invalid JSON in config: {0}")]
    InvalidJson(String),
    #[error("IO error reading config: {0}")]
    IoError(#[from] std::io::Error),
}

/// Default config location, `~/.config/termfolio.json`
pub fn config_path() -> Option<PathBuf> {
    dirs::home_dir().map(|p| p.join(".config").join("termfolio.json"))
}

/// Resolve the config file: explicit path, then `TERMFOLIO_CONFIG`, then the default location
pub fn resolve_config_path(explicit: Option<&Path>) -> Option<PathBuf> {
    if let Some(path) = explicit {
        return Some(path.to_path_buf());
    }
    if let Ok(path) = std::env::var("TERMFOLIO_CONFIG")
        && !path.is_empty()
    {
        return Some(PathBuf::from(path));
    }
    config_path()
}

pub fn load_config_from(path: &Path) -> Result<Config, ConfigError> {
    if !path.exists() {
        return Err(ConfigError::NotFound(path.to_path_buf()));
    }

    let content = fs::read_to_string(path)?;
    serde_json::from_str(&content).map_err(|e| ConfigError::InvalidJson(e.to_string()))
}

pub fn load_config(explicit: Option<&Path>) -> Result<Config, ConfigError> {
    let path = resolve_config_path(explicit)
        .ok_or_else(|| ConfigError::NotFound(PathBuf::from("~/.config/termfolio.json")))?;
    load_config_from(&path)
}

impl Config {
    /// The dataset to present: external file, inline object, or the built-in sample
    pub fn load_portfolio(&self) -> Result<Portfolio, ConfigError> {
        if let Some(ref path) = self.portfolio_path {
            return Portfolio::load(path);
        }
        Ok(self.portfolio.clone().unwrap_or_default())
    }
}

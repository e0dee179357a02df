//! Configuration file handling for kana-artgen.
//!
//! Loads configuration from `kana-artgen.toml` in the working directory
//! or a custom path. Every value is optional; CLI flags take precedence.

use serde::Deserialize;
use std::path::{Path, PathBuf};

/// Configuration file structure for kana-artgen.
#[derive(Debug, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub font: FontConfig,
    #[serde(default)]
    pub grid: GridConfig,
    #[serde(default)]
    pub render: RenderConfig,
    #[serde(default)]
    pub output: OutputConfig,
    #[serde(default)]
    pub ramp: RampConfig,
}

#[derive(Debug, Deserialize, Default)]
pub struct FontConfig {
    /// Font files to try, in order.
    #[serde(default)]
    pub sources: Vec<PathBuf>,
}

#[derive(Debug, Deserialize, Default)]
pub struct GridConfig {
    pub width: Option<u16>,
    pub height: Option<u16>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RenderConfig {
    pub canvas: Option<usize>,
    pub point_size: Option<f32>,
}

#[derive(Debug, Deserialize, Default)]
pub struct OutputConfig {
    /// Directory for the per-category table files.
    pub dir: Option<PathBuf>,
    /// Source file to splice the tables into.
    pub target: Option<PathBuf>,
}

#[derive(Debug, Deserialize, Default)]
pub struct RampConfig {
    /// Density ramp override, lightest to darkest.
    pub symbols: Option<String>,
}

/// Default config file path, relative to the working directory.
pub fn default_path() -> PathBuf {
    PathBuf::from("kana-artgen.toml")
}

impl Config {
    /// Load configuration from a file path.
    /// Returns default config if the file doesn't exist.
    /// Returns an error if the file exists but cannot be parsed.
    pub fn load(path: Option<&Path>) -> Result<Self, ConfigError> {
        let path = path.map(PathBuf::from).unwrap_or_else(default_path);

        if path.exists() {
            let content = std::fs::read_to_string(&path).map_err(|e| ConfigError::IoError {
                path: path.clone(),
                source: e,
            })?;
            let config: Config = toml::from_str(&content).map_err(|e| ConfigError::ParseError {
                path: path.clone(),
                source: e,
            })?;
            Ok(config)
        } else {
            Ok(Config::default())
        }
    }
}

/// Errors that can occur when loading configuration.
#[derive(Debug)]
pub enum ConfigError {
    IoError {
        path: PathBuf,
        source: std::io::Error,
    },
    ParseError {
        path: PathBuf,
        source: toml::de::Error,
    },
}

impl std::fmt::Display for ConfigError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ConfigError::IoError { path, source } => {
                write!(f, "failed to read config {}: {}", path.display(), source)
            }
            ConfigError::ParseError { path, source } => {
                write!(f, "failed to parse config {}: {}", path.display(), source)
            }
        }
    }
}

impl std::error::Error for ConfigError {}

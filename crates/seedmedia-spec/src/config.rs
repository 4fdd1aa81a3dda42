//! Generator configuration.
//!
//! All fields have defaults matching the stock demo setup, so an empty JSON
//! object (or no config file at all) is a valid configuration. CLI flags are
//! applied on top of whatever the file provides.

use std::path::Path;

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::error::BackendError;

/// Errors from loading or validating a configuration.
#[derive(Debug, Error)]
pub enum ConfigError {
    /// Config file could not be read.
    #[error("failed to read config '{path}': {source}")]
    Io {
        /// Path that failed.
        path: String,
        /// Underlying error.
        #[source]
        source: std::io::Error,
    },

    /// Config file is not valid JSON for this schema.
    #[error("failed to parse config: {0}")]
    Parse(#[from] serde_json::Error),

    /// A field has an unusable value.
    #[error("invalid config field '{field}': {message}")]
    Invalid {
        /// Dotted field path.
        field: &'static str,
        /// What is wrong with it.
        message: String,
    },
}

impl BackendError for ConfigError {
    fn code(&self) -> &'static str {
        match self {
            ConfigError::Io { .. } => "CONFIG_001",
            ConfigError::Parse(_) => "CONFIG_002",
            ConfigError::Invalid { .. } => "CONFIG_003",
        }
    }

    fn category(&self) -> &'static str {
        "config"
    }
}

/// How enhanced covers choose their gradient palette.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum PaletteMode {
    /// Pick any genre palette at random.
    #[default]
    Random,
    /// Use the palette of the album artist's catalog genre.
    Genre,
}

/// Settings for basic-mode generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct BasicConfig {
    /// Cover width in pixels.
    pub width: u32,
    /// Cover height in pixels.
    pub height: u32,
    /// JPEG quality (1-100).
    pub quality: u8,
    /// Number of `sample-song-N.wav` clips.
    pub clip_count: u32,
    /// Clip length in seconds.
    pub clip_seconds: u32,
}

impl Default for BasicConfig {
    fn default() -> Self {
        Self {
            width: 400,
            height: 400,
            quality: 85,
            clip_count: 10,
            clip_seconds: 30,
        }
    }
}

/// Settings for enhanced-mode generation.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct EnhancedConfig {
    /// Cover width in pixels.
    pub width: u32,
    /// Cover height in pixels.
    pub height: u32,
    /// JPEG quality (1-100).
    pub quality: u8,
    /// Number of `song-sample-NNN.wav` clips.
    pub clip_count: u32,
    /// Clip length in seconds.
    pub clip_seconds: u32,
    /// Palette selection for covers.
    pub palette: PaletteMode,
}

impl Default for EnhancedConfig {
    fn default() -> Self {
        Self {
            width: 600,
            height: 600,
            quality: 90,
            clip_count: 30,
            clip_seconds: 180,
            palette: PaletteMode::Random,
        }
    }
}

/// Top-level generator configuration.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct GeneratorConfig {
    /// Base seed for all random choices.
    pub seed: u32,
    /// Audio sample rate in Hz.
    pub sample_rate: u32,
    /// Basic mode settings.
    pub basic: BasicConfig,
    /// Enhanced mode settings.
    pub enhanced: EnhancedConfig,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            seed: 0,
            sample_rate: 44_100,
            basic: BasicConfig::default(),
            enhanced: EnhancedConfig::default(),
        }
    }
}

impl GeneratorConfig {
    /// Parses and validates a configuration from JSON text.
    pub fn from_json(json: &str) -> Result<Self, ConfigError> {
        let config: Self = serde_json::from_str(json)?;
        config.validate()?;
        Ok(config)
    }

    /// Loads and validates a configuration file.
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = std::fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.display().to_string(),
            source,
        })?;
        Self::from_json(&text)
    }

    /// Checks that every field is usable.
    pub fn validate(&self) -> Result<(), ConfigError> {
        if self.sample_rate == 0 {
            return Err(invalid("sample_rate", "must be positive"));
        }
        check_dimensions("basic.width", self.basic.width)?;
        check_dimensions("basic.height", self.basic.height)?;
        check_quality("basic.quality", self.basic.quality)?;
        check_clip_seconds("basic.clip_seconds", self.basic.clip_seconds)?;
        check_dimensions("enhanced.width", self.enhanced.width)?;
        check_dimensions("enhanced.height", self.enhanced.height)?;
        check_quality("enhanced.quality", self.enhanced.quality)?;
        check_clip_seconds("enhanced.clip_seconds", self.enhanced.clip_seconds)?;
        Ok(())
    }
}

fn invalid(field: &'static str, message: impl Into<String>) -> ConfigError {
    ConfigError::Invalid {
        field,
        message: message.into(),
    }
}

fn check_dimensions(field: &'static str, value: u32) -> Result<(), ConfigError> {
    // JPEG caps each side at 65535
    if value == 0 || value > u16::MAX as u32 {
        return Err(invalid(field, format!("{} is outside 1..=65535", value)));
    }
    Ok(())
}

fn check_quality(field: &'static str, value: u8) -> Result<(), ConfigError> {
    if !(1..=100).contains(&value) {
        return Err(invalid(field, format!("{} is outside 1..=100", value)));
    }
    Ok(())
}

fn check_clip_seconds(field: &'static str, value: u32) -> Result<(), ConfigError> {
    if value == 0 {
        return Err(invalid(field, "must be at least 1 second"));
    }
    Ok(())
}

//! Application configuration (TOML)
//!
//! Only presentation settings live here. Selection state is never persisted.

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;

use crate::constants::{branding, config};

/// Top-level configuration file
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AppConfig {
    #[serde(default = "default_log_level")]
    pub log_level: String,
    #[serde(default)]
    pub branding: Branding,
    #[serde(default)]
    pub output: OutputSettings,
    #[serde(default)]
    pub window: WindowSettings,
}

/// Brand shown in the app header and the generated document
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct Branding {
    /// Used when the client form leaves the brand name blank
    pub brand_name: String,
    pub product_mark: String,
    pub tagline: String,
}

/// Where generated documents are written
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct OutputSettings {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub directory: Option<PathBuf>,
}

/// Initial window size
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WindowSettings {
    #[serde(default = "default_window_width")]
    pub width: f32,
    #[serde(default = "default_window_height")]
    pub height: f32,
}

// Default value functions
fn default_log_level() -> String {
    "info".to_string()
}

fn default_window_width() -> f32 {
    1200.0
}

fn default_window_height() -> f32 {
    820.0
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            log_level: default_log_level(),
            branding: Branding::default(),
            output: OutputSettings::default(),
            window: WindowSettings::default(),
        }
    }
}

impl Default for Branding {
    fn default() -> Self {
        Self {
            brand_name: branding::BRAND_NAME.to_string(),
            product_mark: branding::PRODUCT_MARK.to_string(),
            tagline: branding::TAGLINE.to_string(),
        }
    }
}

impl Default for WindowSettings {
    fn default() -> Self {
        Self {
            width: default_window_width(),
            height: default_window_height(),
        }
    }
}

impl OutputSettings {
    /// Configured directory, else the user's documents dir, else the working dir
    pub fn directory(&self) -> PathBuf {
        self.directory
            .clone()
            .or_else(dirs::document_dir)
            .unwrap_or_else(|| PathBuf::from("."))
    }
}

impl AppConfig {
    /// `<config dir>/solution-configurator/config.toml`
    pub fn default_path() -> PathBuf {
        let mut path = dirs::config_dir().unwrap_or_else(|| PathBuf::from("."));
        path.push(config::APP_DIR);
        path.push(config::FILENAME);
        path
    }

    pub fn parse(contents: &str) -> Result<Self> {
        toml::from_str(contents).context("Failed to parse config TOML")
    }

    /// Load configuration from a TOML file
    pub fn load(path: &Path) -> Result<Self> {
        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {:?}", path))?;
        let config = Self::parse(&contents)
            .with_context(|| format!("Invalid config file {:?}", path))?;
        info!(path = %path.display(), brand = %config.branding.brand_name, "Loaded config");
        Ok(config)
    }

    /// Load the file, writing a default one first if it does not exist
    pub fn load_or_create(path: &Path) -> Result<Self> {
        if !path.exists() {
            info!("Config file not found, creating default config at {:?}", path);
            let config = Self::default();
            config.save(path)?;
            return Ok(config);
        }
        Self::load(path)
    }

    pub fn save(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create config directory {:?}", parent))?;
        }

        let toml_string = toml::to_string_pretty(self)
            .context("Failed to serialize config to TOML")?;
        fs::write(path, toml_string)
            .with_context(|| format!("Failed to write config to {:?}", path))?;

        info!("Saved config to {:?}", path);
        Ok(())
    }
}

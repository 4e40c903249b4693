//! Configuration file support for rpelog.
//!
//! Configuration is loaded from `$XDG_CONFIG_HOME/rpelog/config.toml`.

use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Environment variable that overrides the monitor's port
pub const PORT_ENV_VAR: &str = "PORT";

/// Application configuration
#[derive(Clone, Debug, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub display: DisplayConfig,

    #[serde(default)]
    pub monitor: MonitorConfig,
}

/// Output formatting for the interactive session
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct DisplayConfig {
    #[serde(default = "default_unit")]
    pub unit: String,
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self {
            unit: default_unit(),
        }
    }
}

/// Status monitor configuration
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct MonitorConfig {
    #[serde(default = "default_host")]
    pub host: String,

    #[serde(default = "default_port")]
    pub port: u16,

    #[serde(default = "default_title")]
    pub title: String,

    #[serde(default = "default_environment")]
    pub environment: String,
}

impl Default for MonitorConfig {
    fn default() -> Self {
        Self {
            host: default_host(),
            port: default_port(),
            title: default_title(),
            environment: default_environment(),
        }
    }
}

impl MonitorConfig {
    /// Port to listen on, preferring an explicit override (normally `$PORT`)
    pub fn resolve_port(&self, env_value: Option<&str>) -> Result<u16> {
        match env_value.map(str::trim) {
            Some(raw) if !raw.is_empty() => raw.parse::<u16>().map_err(|e| {
                Error::Config(format!("invalid {} value '{}': {}", PORT_ENV_VAR, raw, e))
            }),
            _ => Ok(self.port),
        }
    }
}

// Default value functions
fn default_unit() -> String {
    "kg".into()
}

fn default_host() -> String {
    "0.0.0.0".into()
}

fn default_port() -> u16 {
    5000
}

fn default_title() -> String {
    "Video Platform Monitor".into()
}

fn default_environment() -> String {
    "Production".into()
}

impl Config {
    /// Load configuration from the standard config path
    pub fn load() -> Result<Self> {
        let config_path = Self::default_config_path()?;
        if config_path.exists() {
            Self::load_from(&config_path)
        } else {
            tracing::info!(
                "No config file found at {:?}, using defaults",
                config_path
            );
            Ok(Self::default())
        }
    }

    /// Load configuration from a specific path
    pub fn load_from(path: &Path) -> Result<Self> {
        let contents = std::fs::read_to_string(path)?;
        let config: Config = toml::from_str(&contents)?;
        tracing::info!("Loaded config from {:?}", path);
        Ok(config)
    }

    /// Get the default config file path
    pub fn default_config_path() -> Result<PathBuf> {
        let base = match dirs::config_dir() {
            Some(dir) => dir,
            None => std::env::var("HOME")
                .map(|home| PathBuf::from(home).join(".config"))
                .map_err(|_| Error::Config("cannot locate a config directory".into()))?,
        };
        Ok(base.join("rpelog").join("config.toml"))
    }

    /// Save the current configuration to a specific path
    pub fn save_to(&self, path: &Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            std::fs::create_dir_all(parent)?;
        }

        let contents = toml::to_string_pretty(self)
            .map_err(|e| Error::Config(format!("Failed to serialize config: {}", e)))?;
        std::fs::write(path, contents)?;
        tracing::info!("Saved config to {:?}", path);
        Ok(())
    }
}

use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::provider::open_meteo::{FORECAST_BASE_URL, GEOCODING_BASE_URL};

/// Optional overrides for the two collaborator hosts.
///
/// Example TOML:
/// [endpoints]
/// geocoding_base_url = "https://geocoding-api.open-meteo.com"
/// forecast_base_url = "https://api.open-meteo.com"
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Endpoints {
    pub geocoding_base_url: Option<String>,
    pub forecast_base_url: Option<String>,
}

/// Top-level configuration stored on disk.
///
/// Both collaborators are keyless, so the only knobs are the base URLs,
/// for pointing the client at a mirror or a self-hosted instance.
#[derive(Debug, Clone, Serialize, Deserialize, Default)]
pub struct Config {
    #[serde(default)]
    pub endpoints: Endpoints,
}

impl Config {
    /// Geocoding host: the configured override or the public default.
    pub fn geocoding_base_url(&self) -> String {
        self.endpoints
            .geocoding_base_url
            .clone()
            .unwrap_or_else(|| GEOCODING_BASE_URL.to_owned())
    }

    /// Forecast host: the configured override or the public default.
    pub fn forecast_base_url(&self) -> String {
        self.endpoints
            .forecast_base_url
            .clone()
            .unwrap_or_else(|| FORECAST_BASE_URL.to_owned())
    }

    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        if !path.exists() {
            // First run: no config file, return empty.
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(&path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<()> {
        let path = Self::config_file_path()?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(&path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "weathernow", "weathernow")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }
}

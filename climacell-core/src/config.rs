use anyhow::{Context, Result, anyhow};
use directories::ProjectDirs;
use serde::{Deserialize, Serialize};
use std::{fs, path::PathBuf};

use crate::{client::Client, unit::Unit};

/// Environment variable that takes precedence over the stored API key.
pub const API_KEY_ENV: &str = "CLIMACELL_API_KEY";

/// Top-level configuration stored on disk.
///
/// Example TOML:
/// api_key = "..."
/// base_url = "https://api.climacell.co/v3"
/// default_unit = "us"
#[derive(Debug, Clone, Serialize, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    pub api_key: Option<String>,

    /// Overrides the public API base URL, e.g. for a proxy.
    pub base_url: Option<String>,

    pub default_unit: Option<Unit>,
}

impl Config {
    /// Load config from disk, or return an empty default if it doesn't exist yet.
    pub fn load() -> Result<Self> {
        let path = Self::config_file_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &std::path::Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = fs::read_to_string(path)
            .with_context(|| format!("Failed to read config file: {}", path.display()))?;

        let cfg: Config = toml::from_str(&contents)
            .with_context(|| format!("Failed to parse config file: {}", path.display()))?;

        Ok(cfg)
    }

    /// Save config to disk, creating parent directories as needed.
    pub fn save(&self) -> Result<PathBuf> {
        let path = Self::config_file_path()?;
        self.save_to(&path)?;
        Ok(path)
    }

    pub fn save_to(&self, path: &std::path::Path) -> Result<()> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent).with_context(|| {
                format!("Failed to create config directory: {}", parent.display())
            })?;
        }

        let toml =
            toml::to_string_pretty(self).context("Failed to serialize configuration to TOML")?;

        fs::write(path, toml)
            .with_context(|| format!("Failed to write config file: {}", path.display()))?;

        Ok(())
    }

    /// Path to the config file.
    pub fn config_file_path() -> Result<PathBuf> {
        let dirs = ProjectDirs::from("dev", "climacell", "climacell-cli")
            .ok_or_else(|| anyhow!("Could not determine platform config directory"))?;

        Ok(dirs.config_dir().join("config.toml"))
    }

    /// API key from the environment if set, otherwise the stored one.
    pub fn resolved_api_key(&self) -> Option<String> {
        let from_env = std::env::var(API_KEY_ENV)
            .ok()
            .filter(|key| !key.is_empty());
        self.api_key_with_override(from_env)
    }

    fn api_key_with_override(&self, from_env: Option<String>) -> Option<String> {
        from_env.or_else(|| self.api_key.clone().filter(|key| !key.is_empty()))
    }

    pub fn unit(&self) -> Unit {
        self.default_unit.unwrap_or_default()
    }
}

/// Construct a client from config.
pub fn client_from_config(config: &Config) -> Result<Client> {
    let api_key = config.resolved_api_key().ok_or_else(|| {
        anyhow!(
            "No API key configured.\n\
             Hint: run `climacell configure` or set {API_KEY_ENV}."
        )
    })?;

    let mut builder = Client::builder(api_key);
    if let Some(base_url) = &config.base_url {
        builder = builder.base_url(base_url.clone());
    }

    builder.build().context("Failed to construct ClimaCell client")
}

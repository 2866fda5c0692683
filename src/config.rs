// File: src/config.rs
use crate::paths::AppPaths;
use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::Path;
use std::time::Duration;

pub const DEFAULT_BASE_URL: &str = "https://rickandmortyapi.com/api";

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

// One episode request at a time, like the original app.
fn default_concurrency() -> usize {
    1
}

fn default_timeout() -> u64 {
    30
}

#[derive(Deserialize, Serialize, Clone, Debug, PartialEq)]
pub struct Config {
    #[serde(default = "default_base_url")]
    pub base_url: String,

    #[serde(default)]
    pub allow_insecure_certs: bool,

    /// Max episode requests in flight while resolving a character's episode titles.
    #[serde(default = "default_concurrency")]
    pub episode_concurrency: usize,

    #[serde(default = "default_timeout")]
    pub request_timeout_secs: u64,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            allow_insecure_certs: false,
            episode_concurrency: default_concurrency(),
            request_timeout_secs: default_timeout(),
        }
    }
}

impl Config {
    /// Loads the config file, falling back to defaults when it does not exist yet.
    pub fn load() -> Result<Self> {
        let path = AppPaths::get_config_file_path()?;
        Self::load_from(&path)
    }

    pub fn load_from(path: &Path) -> Result<Self> {
        if !path.exists() {
            log::debug!("No config at {:?}, using defaults", path);
            return Ok(Self::default());
        }
        let contents =
            fs::read_to_string(path).with_context(|| format!("Failed to read {:?}", path))?;
        let config: Config =
            toml::from_str(&contents).with_context(|| format!("Invalid config in {:?}", path))?;
        Ok(config)
    }

    pub fn save(&self) -> Result<()> {
        let path = AppPaths::get_config_file_path()?;
        let toml_str = toml::to_string_pretty(self)?;
        fs::write(path, toml_str)?;
        Ok(())
    }

    pub fn get_path_string() -> Result<String> {
        let path = AppPaths::get_config_file_path()?;
        Ok(path.to_string_lossy().to_string())
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs.max(1))
    }

    /// `0` means the same as `1`: strictly sequential.
    pub fn effective_concurrency(&self) -> usize {
        self.episode_concurrency.max(1)
    }
}

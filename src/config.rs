//! Global configuration management
//!
//! Config is stored at `~/.config/ghprojects/config.toml` (XDG standard):
//!
//! ```toml
//! [github]
//! base_url = "https://api.github.com/"
//! token = "ghp_..."
//! timeout_secs = 30
//! ```
//!
//! `GITHUB_TOKEN` and `GHPROJECTS_BASE_URL` override the file.

use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context as _;
use serde::{Deserialize, Serialize};

use crate::client::{DEFAULT_BASE_URL, DEFAULT_USER_AGENT};
use crate::paths;

/// Environment variable holding the API token
pub const TOKEN_ENV: &str = "GITHUB_TOKEN";

/// Environment variable overriding the API endpoint
pub const BASE_URL_ENV: &str = "GHPROJECTS_BASE_URL";

/// Global ghprojects configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct GlobalConfig {
    /// API client settings
    #[serde(default)]
    pub github: ClientConfig,
}

/// Settings for building a [`crate::Client`]
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ClientConfig {
    /// API endpoint
    #[serde(default = "default_base_url")]
    pub base_url: String,
    /// Bearer token
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub token: Option<String>,
    /// User agent header
    #[serde(default = "default_user_agent")]
    pub user_agent: String,
    /// Per-request timeout in seconds (none = no timeout)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub timeout_secs: Option<u64>,
}

fn default_base_url() -> String {
    DEFAULT_BASE_URL.to_string()
}

fn default_user_agent() -> String {
    DEFAULT_USER_AGENT.to_string()
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: default_base_url(),
            token: None,
            user_agent: default_user_agent(),
            timeout_secs: None,
        }
    }
}

impl GlobalConfig {
    /// Get the config file path
    #[must_use]
    pub fn config_path() -> PathBuf {
        paths::global_config()
    }

    /// Load config from disk and apply environment overrides
    ///
    /// A missing or unreadable file yields the defaults.
    #[must_use]
    pub fn load() -> Self {
        let path = Self::config_path();
        let mut config = if path.exists() {
            Self::load_from(&path).unwrap_or_else(|e| {
                log::warn!("ignoring config {}: {e:#}", path.display());
                Self::default()
            })
        } else {
            Self::default()
        };
        config.apply_env();
        config
    }

    /// Load config from a specific file, without environment overrides
    pub fn load_from(path: &Path) -> anyhow::Result<Self> {
        let content = fs::read_to_string(path)
            .with_context(|| format!("failed to read {}", path.display()))?;
        toml::from_str(&content).with_context(|| format!("failed to parse {}", path.display()))
    }

    /// Override file values with `GITHUB_TOKEN` / `GHPROJECTS_BASE_URL`
    pub fn apply_env(&mut self) {
        if let Some(token) = non_empty_env(TOKEN_ENV) {
            self.github.token = Some(token);
        }
        if let Some(url) = non_empty_env(BASE_URL_ENV) {
            self.github.base_url = url;
        }
    }

    /// Save config to the default location
    pub fn save(&self) -> anyhow::Result<()> {
        self.save_to(&Self::config_path())
    }

    /// Save config to a specific file
    pub fn save_to(&self, path: &Path) -> anyhow::Result<()> {
        if let Some(dir) = path.parent() {
            fs::create_dir_all(dir)?;
        }
        let content = toml::to_string_pretty(self)?;
        fs::write(path, content)?;
        Ok(())
    }
}

fn non_empty_env(name: &str) -> Option<String> {
    std::env::var(name).ok().filter(|v| !v.trim().is_empty())
}

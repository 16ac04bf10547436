//! Configuration management for Gate.
//!
//! Loads configuration from ${GATE_HOME}/config.toml with sensible defaults.

use std::fs;
use std::path::Path;
use std::time::Duration;

use anyhow::{Context, Result};
use serde::{Deserialize, Serialize};

/// Environment variable overriding the user-lookup base URL.
pub const USERS_BASE_URL_ENV: &str = "GATE_USERS_BASE_URL";

/// Environment variable overriding the log filter.
pub const LOG_ENV: &str = "GATE_LOG";

pub mod paths {
    //! Path resolution for Gate configuration and data directories.
    //!
    //! GATE_HOME resolution order:
    //! 1. GATE_HOME environment variable (if set)
    //! 2. ~/.config/gate (default)
    //! 3. ./.gate when no home directory can be determined

    use std::path::PathBuf;

    /// Returns the Gate home directory.
    pub fn gate_home() -> PathBuf {
        if let Ok(home) = std::env::var("GATE_HOME") {
            return PathBuf::from(home);
        }

        dirs::home_dir().map_or_else(
            || PathBuf::from(".gate"),
            |h| h.join(".config").join("gate"),
        )
    }

    /// Returns the path to the config.toml file.
    pub fn config_path() -> PathBuf {
        gate_home().join("config.toml")
    }

    /// Returns the directory log files are written to.
    pub fn logs_dir() -> PathBuf {
        gate_home().join("logs")
    }
}

/// User-lookup service configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct UsersConfig {
    /// Base URL of the lookup service.
    pub base_url: Option<String>,
    /// Request timeout in seconds (0 disables)
    pub timeout_secs: u32,
}

impl Default for UsersConfig {
    fn default() -> Self {
        Self {
            base_url: None,
            timeout_secs: UsersConfig::DEFAULT_TIMEOUT_SECS,
        }
    }
}

impl UsersConfig {
    pub const DEFAULT_BASE_URL: &str = "https://jsonplaceholder.typicode.com";
    const DEFAULT_TIMEOUT_SECS: u32 = 10;

    /// Returns the configured base URL, treating empty/whitespace as unset.
    pub fn configured_base_url(&self) -> Option<&str> {
        self.base_url
            .as_deref()
            .map(str::trim)
            .filter(|url| !url.is_empty())
    }

    /// Resolves the base URL: env override, then config, then the default.
    ///
    /// Trailing slashes are trimmed so paths can be appended directly.
    pub fn resolve_base_url(&self, env_override: Option<&str>) -> String {
        let url = env_override
            .map(str::trim)
            .filter(|url| !url.is_empty())
            .or_else(|| self.configured_base_url())
            .unwrap_or(Self::DEFAULT_BASE_URL);
        url.trim_end_matches('/').to_string()
    }

    /// Resolves the base URL using the process environment.
    pub fn effective_base_url(&self) -> String {
        let env = std::env::var(USERS_BASE_URL_ENV).ok();
        self.resolve_base_url(env.as_deref())
    }

    /// Returns the request timeout, or None if disabled.
    pub fn timeout(&self) -> Option<Duration> {
        (self.timeout_secs > 0).then(|| Duration::from_secs(u64::from(self.timeout_secs)))
    }
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct LogConfig {
    /// Filter directive used when GATE_LOG is unset.
    pub level: String,
    /// Log file name inside the logs directory.
    pub file: String,
}

impl Default for LogConfig {
    fn default() -> Self {
        Self {
            level: "info".to_string(),
            file: "gate.log".to_string(),
        }
    }
}

/// Main configuration structure.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Id of the user record fetched on submit
    pub user_id: u64,

    /// User-lookup service settings.
    pub users: UsersConfig,

    /// Logging settings.
    pub log: LogConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            user_id: Self::DEFAULT_USER_ID,
            users: UsersConfig::default(),
            log: LogConfig::default(),
        }
    }
}

/// Returns the commented config template written by `Config::init`.
pub fn default_config_template() -> &'static str {
    include_str!("../default_config.toml")
}

impl Config {
    const DEFAULT_USER_ID: u64 = 1;

    /// Loads configuration from the default config path.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load() -> Result<Self> {
        Self::load_from(&paths::config_path())
    }

    /// Loads configuration from a specific path.
    /// Returns defaults if file doesn't exist.
    ///
    /// # Errors
    /// Returns an error if the file exists but cannot be read or parsed.
    pub fn load_from(path: &Path) -> Result<Self> {
        if path.exists() {
            let contents = fs::read_to_string(path)
                .with_context(|| format!("Failed to read config from {}", path.display()))?;
            toml::from_str(&contents)
                .with_context(|| format!("Failed to parse config from {}", path.display()))
        } else {
            Ok(Config::default())
        }
    }

    /// Creates a default config file at the given path.
    ///
    /// # Errors
    /// Returns an error if the file already exists or cannot be written.
    pub fn init(path: &Path) -> Result<()> {
        if path.exists() {
            anyhow::bail!("Config file already exists at {}", path.display());
        }

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)
                .with_context(|| format!("Failed to create directory {}", parent.display()))?;
        }

        let tmp_path = path.with_extension("toml.tmp");
        fs::write(&tmp_path, default_config_template())
            .with_context(|| format!("Failed to write config to {}", tmp_path.display()))?;
        fs::rename(&tmp_path, path).with_context(|| {
            format!(
                "Failed to move {} into place at {}",
                tmp_path.display(),
                path.display()
            )
        })?;
        Ok(())
    }
}

use crate::error::ExplorerError;
use anyhow::{Context, Result};
use serde::Deserialize;
use std::fmt;
use std::path::{Path, PathBuf};
use std::time::Duration;
use url::Url;

pub const BASE_URL_VAR: &str = "ETHSCAN_BASE_URL";
/// Older name for the base URL variable, still honored.
pub const LEGACY_BASE_URL_VAR: &str = "BASE_URL";
pub const API_KEY_VAR: &str = "ETHERSCAN_API_KEY";
pub const TIMEOUT_VAR: &str = "ETHSCAN_TIMEOUT_SECS";

pub const DEFAULT_TIMEOUT_SECS: u64 = 30;

/// Settings as read from the config file and environment. Every field is
/// optional here; [`Config::endpoint`] decides whether the result is usable.
#[derive(Debug, Clone, Deserialize, Default, PartialEq, Eq)]
pub struct Config {
    pub base_url: Option<String>,
    pub api_key: Option<String>,
    pub timeout_secs: Option<u64>,
}

impl Config {
    /// Returns the config file path (~/.config/ethscan/config.toml on Linux),
    /// or `None` when the platform has no config directory
    pub fn config_path() -> Option<PathBuf> {
        dirs::config_dir().map(|p| p.join("ethscan").join("config.toml"))
    }

    /// Load the config file (if any), then `.env`, then the process
    /// environment. Later sources win.
    pub fn load() -> Result<Self> {
        // A missing .env is the normal case
        let _ = dotenv::dotenv();

        Self::load_from(Self::config_path().as_deref(), |key| std::env::var(key).ok())
    }

    /// [`Config::load`] with the file location and environment supplied by
    /// the caller. No file location behaves like a missing file.
    pub fn load_from<F>(path: Option<&Path>, lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = match path {
            Some(path) => Self::from_file(path)?,
            None => Self::default(),
        };
        config.apply_env(lookup)?;
        Ok(config)
    }

    /// Read a TOML config file, or return the default if it does not exist
    pub fn from_file(path: &Path) -> Result<Self> {
        if !path.exists() {
            return Ok(Self::default());
        }

        let contents = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config from {path:?}"))?;

        toml::from_str(&contents).with_context(|| format!("Failed to parse config file {path:?}"))
    }

    /// Overlay values from an environment lookup. Blank values are ignored.
    pub fn apply_env<F>(&mut self, lookup: F) -> Result<()>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        if let Some(url) = get(BASE_URL_VAR).or_else(|| get(LEGACY_BASE_URL_VAR)) {
            self.base_url = Some(url);
        }
        if let Some(key) = get(API_KEY_VAR) {
            self.api_key = Some(key);
        }
        if let Some(secs) = get(TIMEOUT_VAR) {
            let secs = secs
                .trim()
                .parse::<u64>()
                .with_context(|| format!("{TIMEOUT_VAR} must be a number of seconds, got {secs:?}"))?;
            self.timeout_secs = Some(secs);
        }
        Ok(())
    }

    /// Resolve into a validated [`Endpoint`]. Fails when the base URL or API
    /// key is missing, before any request can be made.
    pub fn endpoint(&self) -> Result<Endpoint, ExplorerError> {
        let base_url = self.base_url.as_deref().ok_or_else(|| {
            ExplorerError::Configuration(format!(
                "no base URL configured (set {BASE_URL_VAR} or `base_url` in the config file)"
            ))
        })?;
        let api_key = self.api_key.as_deref().ok_or_else(|| {
            ExplorerError::Configuration(format!(
                "no API key configured (set {API_KEY_VAR} or `api_key` in the config file)"
            ))
        })?;
        let timeout = Duration::from_secs(self.timeout_secs.unwrap_or(DEFAULT_TIMEOUT_SECS));

        Endpoint::new(base_url, api_key)?.with_timeout(timeout)
    }
}

/// Where and how requests are sent: base URL, API key and request timeout.
#[derive(Clone)]
pub struct Endpoint {
    base_url: Url,
    api_key: String,
    timeout: Duration,
}

impl Endpoint {
    pub fn new(base_url: &str, api_key: &str) -> Result<Self, ExplorerError> {
        let base_url = Url::parse(base_url.trim()).map_err(|e| {
            ExplorerError::Configuration(format!("invalid base URL {base_url:?}: {e}"))
        })?;
        if !matches!(base_url.scheme(), "http" | "https") {
            return Err(ExplorerError::Configuration(format!(
                "base URL must use http or https, got {:?}",
                base_url.scheme()
            )));
        }

        let api_key = api_key.trim();
        if api_key.is_empty() {
            return Err(ExplorerError::Configuration("API key is empty".to_string()));
        }

        Ok(Self {
            base_url,
            api_key: api_key.to_string(),
            timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS),
        })
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Result<Self, ExplorerError> {
        if timeout.is_zero() {
            return Err(ExplorerError::Configuration(
                "request timeout must be greater than zero".to_string(),
            ));
        }
        self.timeout = timeout;
        Ok(self)
    }

    pub fn base_url(&self) -> &Url {
        &self.base_url
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn timeout(&self) -> Duration {
        self.timeout
    }
}

// Keeps the API key out of logs and error output
impl fmt::Debug for Endpoint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Endpoint")
            .field("base_url", &self.base_url.as_str())
            .field("api_key", &"<redacted>")
            .field("timeout", &self.timeout)
            .finish()
    }
}

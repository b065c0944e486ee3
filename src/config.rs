use anyhow::{bail, Context, Result};
use serde::Deserialize;
use std::path::{Path, PathBuf};
use std::time::Duration;

use crate::client::{RateLimiter, StashLocation};

const APP_DIR: &str = "stashvision";
const SESSION_ENV: &str = "POESESSID";

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RateLimitConfig {
    pub requests_per_minute: u32,
    pub burst: u32,
}

impl Default for RateLimitConfig {
    fn default() -> Self {
        Self { requests_per_minute: 6, burst: 3 }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct Config {
    /// Value of the POESESSID cookie
    pub session_id: Option<String>,
    pub account_name: Option<String>,
    pub league: String,
    pub realm: String,
    pub tab_index: u32,
    pub poll_interval_secs: u64,
    pub index_path: Option<PathBuf>,
    pub rate_limit: RateLimitConfig,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            session_id: None,
            account_name: None,
            league: "Standard".to_string(),
            realm: "pc".to_string(),
            tab_index: 0,
            poll_interval_secs: 10,
            index_path: None,
            rate_limit: RateLimitConfig::default(),
        }
    }
}

impl Config {
    /// `<config_dir>/stashvision/config.toml`
    pub fn default_path() -> Option<PathBuf> {
        dirs::config_dir().map(|dir| dir.join(APP_DIR).join("config.toml"))
    }

    /// Load from `path`, or from the default location when it exists.
    /// Environment overrides are applied on top.
    pub fn load(path: Option<&Path>) -> Result<Self> {
        let config = match path {
            Some(path) => Self::from_file(path)?,
            None => match Self::default_path() {
                Some(path) if path.exists() => Self::from_file(&path)?,
                _ => Self::default(),
            },
        };
        Ok(config.with_env(|key| std::env::var(key).ok()))
    }

    pub fn from_file(path: &Path) -> Result<Self> {
        let data = std::fs::read_to_string(path)
            .with_context(|| format!("Failed to read config {}", path.display()))?;
        Self::from_toml(&data).with_context(|| format!("Invalid config {}", path.display()))
    }

    pub fn from_toml(data: &str) -> Result<Self> {
        Ok(toml::from_str(data)?)
    }

    /// Apply environment overrides looked up through `var`
    pub fn with_env(mut self, var: impl Fn(&str) -> Option<String>) -> Self {
        if let Some(session) = var(SESSION_ENV).filter(|s| !s.is_empty()) {
            self.session_id = Some(session);
        }
        self
    }

    /// Configured index path, or `<cache_dir>/stashvision/stash.db`
    pub fn index_path(&self) -> Result<PathBuf> {
        if let Some(path) = &self.index_path {
            return Ok(path.clone());
        }
        let cache = dirs::cache_dir().context("No cache directory on this platform")?;
        Ok(cache.join(APP_DIR).join("stash.db"))
    }

    pub fn poll_interval(&self) -> Duration {
        Duration::from_secs(self.poll_interval_secs.max(1))
    }

    pub fn session_id(&self) -> Result<&str> {
        match self.session_id.as_deref() {
            Some(session) => Ok(session),
            None => bail!("Missing session id: set session_id in the config or {SESSION_ENV}"),
        }
    }

    pub fn stash_location(&self) -> Result<StashLocation> {
        let Some(account_name) = self.account_name.clone() else {
            bail!("Missing account_name in the config");
        };
        Ok(StashLocation {
            account_name,
            league: self.league.clone(),
            realm: self.realm.clone(),
        })
    }

    pub fn rate_limiter(&self) -> RateLimiter {
        RateLimiter::new(self.rate_limit.requests_per_minute, self.rate_limit.burst)
    }
}

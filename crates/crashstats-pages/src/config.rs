//! Session configuration.
//!
//! The harness decides where the application lives and how long the one
//! explicit wait in this crate may take. Values come from code, from the
//! environment, or from a JSON document.

use crate::result::{PageError, PageResult};
use serde::{Deserialize, Serialize};
use std::env;

/// Default application base URL
pub const DEFAULT_BASE_URL: &str = "https://crash-stats.allizom.org";

/// Default timeout for the reports-tab visibility wait (10 seconds)
pub const DEFAULT_REPORTS_TAB_TIMEOUT_MS: u64 = 10_000;

/// Default polling interval for waits (50ms)
pub const DEFAULT_POLL_INTERVAL_MS: u64 = 50;

/// Environment variable overriding the base URL
pub const ENV_BASE_URL: &str = "CRASHSTATS_BASE_URL";

/// Environment variable overriding the reports-tab timeout
pub const ENV_REPORTS_TIMEOUT_MS: &str = "CRASHSTATS_REPORTS_TIMEOUT_MS";

/// Environment variable overriding the poll interval
pub const ENV_POLL_INTERVAL_MS: &str = "CRASHSTATS_POLL_INTERVAL_MS";

/// Configuration shared by every page of one session
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct SessionConfig {
    /// Application base URL, without trailing slash
    pub base_url: String,
    /// Timeout for the reports-tab visibility wait in milliseconds
    pub reports_tab_timeout_ms: u64,
    /// Polling interval for waits in milliseconds
    pub poll_interval_ms: u64,
}

impl Default for SessionConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            reports_tab_timeout_ms: DEFAULT_REPORTS_TAB_TIMEOUT_MS,
            poll_interval_ms: DEFAULT_POLL_INTERVAL_MS,
        }
    }
}

impl SessionConfig {
    /// Create config with defaults
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the base URL
    #[must_use]
    pub fn with_base_url(mut self, url: impl Into<String>) -> Self {
        self.base_url = trim_base_url(url.into());
        self
    }

    /// Set the reports-tab wait timeout
    #[must_use]
    pub const fn with_reports_tab_timeout(mut self, timeout_ms: u64) -> Self {
        self.reports_tab_timeout_ms = timeout_ms;
        self
    }

    /// Set the wait polling interval
    #[must_use]
    pub const fn with_poll_interval(mut self, poll_interval_ms: u64) -> Self {
        self.poll_interval_ms = poll_interval_ms;
        self
    }

    /// Load configuration from environment variables
    pub fn from_env() -> PageResult<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Load configuration from any key lookup, falling back to defaults
    pub fn from_lookup<F>(lookup: F) -> PageResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let mut config = Self::default();

        if let Some(url) = lookup(ENV_BASE_URL) {
            if url.trim().is_empty() {
                return Err(PageError::config(format!("{ENV_BASE_URL} is empty")));
            }
            config.base_url = trim_base_url(url);
        }

        if let Some(timeout) = lookup(ENV_REPORTS_TIMEOUT_MS) {
            config.reports_tab_timeout_ms = timeout
                .parse()
                .map_err(|_| PageError::config(format!("Invalid {ENV_REPORTS_TIMEOUT_MS}")))?;
        }

        if let Some(interval) = lookup(ENV_POLL_INTERVAL_MS) {
            config.poll_interval_ms = interval
                .parse()
                .map_err(|_| PageError::config(format!("Invalid {ENV_POLL_INTERVAL_MS}")))?;
        }

        Ok(config)
    }

    /// Parse configuration from a JSON document
    pub fn from_json(json: &str) -> PageResult<Self> {
        let mut config: Self = serde_json::from_str(json)?;
        config.base_url = trim_base_url(config.base_url);
        Ok(config)
    }

    /// Join a site-relative path onto the base URL
    #[must_use]
    pub fn url_for(&self, path: &str) -> String {
        if path.is_empty() {
            return self.base_url.clone();
        }
        if path.starts_with('/') {
            format!("{}{path}", self.base_url)
        } else {
            format!("{}/{path}", self.base_url)
        }
    }
}

fn trim_base_url(url: String) -> String {
    url.trim().trim_end_matches('/').to_string()
}

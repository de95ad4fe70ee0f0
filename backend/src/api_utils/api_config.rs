//! Upstream API settings read from the environment.

use std::time::Duration;

pub const DEFAULT_API_URL: &str = "http://localhost:3333";
pub const DEFAULT_TIMEOUT_SECS: u64 = 15;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ApiConfig {
    pub base_url: String,
    pub timeout: Duration,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self { base_url: DEFAULT_API_URL.to_string(), timeout: Duration::from_secs(DEFAULT_TIMEOUT_SECS) }
    }
}

impl ApiConfig {
    /// `MAGANG_API_URL` and `MAGANG_API_TIMEOUT_SECS`, each falling back to its default.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let base_url = lookup("MAGANG_API_URL")
            .map(|url| url.trim().to_string())
            .filter(|url| !url.is_empty())
            .unwrap_or(DEFAULT_API_URL.to_string());
        let timeout_secs = lookup("MAGANG_API_TIMEOUT_SECS")
            .and_then(|secs| secs.trim().parse::<u64>().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(DEFAULT_TIMEOUT_SECS);
        Self { base_url, timeout: Duration::from_secs(timeout_secs) }
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into();
        self
    }
}

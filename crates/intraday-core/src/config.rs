//! Provider configuration.
//!
//! Values come from the environment and can be overridden by the binaries'
//! command-line flags:
//!
//! | Variable | Default |
//! |----------|---------|
//! | `ALPHAVANTAGE_API_KEY` | `demo` |
//! | `ALPHAVANTAGE_BASE_URL` | `https://www.alphavantage.co/query` |
//! | `ALPHAVANTAGE_TIMEOUT_MS` | unset: no timeout beyond reqwest's default |
//!
//! The API key is never logged; `Debug` redacts it.

use std::fmt::{Debug, Formatter};

use crate::ConfigError;

pub const API_KEY_ENV: &str = "ALPHAVANTAGE_API_KEY";
pub const BASE_URL_ENV: &str = "ALPHAVANTAGE_BASE_URL";
pub const TIMEOUT_ENV: &str = "ALPHAVANTAGE_TIMEOUT_MS";

pub const DEFAULT_BASE_URL: &str = "https://www.alphavantage.co/query";

#[derive(Clone, PartialEq, Eq)]
pub struct ProviderConfig {
    api_key: String,
    base_url: String,
    timeout_ms: Option<u64>,
}

impl ProviderConfig {
    pub fn new(api_key: impl Into<String>) -> Self {
        Self {
            api_key: api_key.into(),
            base_url: String::from(DEFAULT_BASE_URL),
            timeout_ms: None,
        }
    }

    /// Build from `ALPHAVANTAGE_*` variables, falling back to defaults.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Result<Self, ConfigError> {
        let mut config = Self::new(lookup(API_KEY_ENV).unwrap_or_else(|| String::from("demo")));

        if let Some(base_url) = lookup(BASE_URL_ENV) {
            config = config.with_base_url(base_url);
        }

        if let Some(raw) = lookup(TIMEOUT_ENV) {
            let timeout_ms = raw
                .trim()
                .parse::<u64>()
                .map_err(|_| ConfigError::InvalidNumber {
                    name: TIMEOUT_ENV,
                    value: raw.clone(),
                })?;
            config = config.with_timeout_ms(timeout_ms);
        }

        config.validate()
    }

    pub fn with_api_key(mut self, api_key: impl Into<String>) -> Self {
        self.api_key = api_key.into();
        self
    }

    pub fn with_base_url(mut self, base_url: impl Into<String>) -> Self {
        self.base_url = base_url.into().trim_end_matches('/').to_owned();
        self
    }

    pub fn with_timeout_ms(mut self, timeout_ms: u64) -> Self {
        self.timeout_ms = Some(timeout_ms);
        self
    }

    pub fn validate(self) -> Result<Self, ConfigError> {
        if self.api_key.trim().is_empty() {
            return Err(ConfigError::EmptyApiKey);
        }
        if !(self.base_url.starts_with("http://") || self.base_url.starts_with("https://")) {
            return Err(ConfigError::InvalidBaseUrl {
                value: self.base_url,
            });
        }
        if self.timeout_ms == Some(0) {
            return Err(ConfigError::ZeroTimeout);
        }
        Ok(self)
    }

    pub fn api_key(&self) -> &str {
        &self.api_key
    }

    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    pub const fn timeout_ms(&self) -> Option<u64> {
        self.timeout_ms
    }
}

impl Default for ProviderConfig {
    fn default() -> Self {
        Self::new("demo")
    }
}

impl Debug for ProviderConfig {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProviderConfig")
            .field("api_key", &"<redacted>")
            .field("base_url", &self.base_url)
            .field("timeout_ms", &self.timeout_ms)
            .finish()
    }
}

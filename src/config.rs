//! Checker configuration
//!
//! Resolves the evaluation endpoint, request timeout and debounce delay.

use reqwest::Url;
use std::time::Duration;

use crate::error::ConfigError;

pub const ENDPOINT_VAR: &str = "PWD_CHECK_ENDPOINT";
pub const TIMEOUT_VAR: &str = "PWD_CHECK_TIMEOUT_MS";
pub const DEBOUNCE_VAR: &str = "PWD_CHECK_DEBOUNCE_MS";

pub const DEFAULT_ENDPOINT: &str = "http://127.0.0.1:5000/check";
pub const DEFAULT_TIMEOUT: Duration = Duration::from_millis(5000);

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckerConfig {
    pub endpoint: Url,
    /// Upper bound for one request/response exchange.
    pub timeout: Duration,
    /// Quiet period after an edit before a request is issued. Zero disables it.
    pub debounce: Duration,
}

impl Default for CheckerConfig {
    fn default() -> Self {
        Self {
            endpoint: default_endpoint(),
            timeout: DEFAULT_TIMEOUT,
            debounce: Duration::ZERO,
        }
    }
}

fn default_endpoint() -> Url {
    Url::parse(DEFAULT_ENDPOINT).expect("DEFAULT_ENDPOINT is a valid URL")
}

impl CheckerConfig {
    /// Builds the configuration from the environment.
    ///
    /// # Environment Variables
    ///
    /// - `PWD_CHECK_ENDPOINT`: full URL of the check route
    ///   (default: `http://127.0.0.1:5000/check`)
    /// - `PWD_CHECK_TIMEOUT_MS`: request timeout in milliseconds (default: `5000`)
    /// - `PWD_CHECK_DEBOUNCE_MS`: debounce delay in milliseconds (default: `0`)
    ///
    /// # Errors
    ///
    /// Returns error if the endpoint is not an http(s) URL or a duration is
    /// not a non-negative integer.
    pub fn from_env() -> Result<Self, ConfigError> {
        let mut config = Self::default();

        if let Ok(raw) = std::env::var(ENDPOINT_VAR) {
            config.endpoint = parse_endpoint(&raw)?;
        }
        if let Some(timeout) = duration_var(TIMEOUT_VAR)? {
            if timeout.is_zero() {
                return Err(ConfigError::InvalidValue { key: TIMEOUT_VAR, value: "0".into() });
            }
            config.timeout = timeout;
        }
        if let Some(debounce) = duration_var(DEBOUNCE_VAR)? {
            config.debounce = debounce;
        }

        #[cfg(feature = "tracing")]
        tracing::info!(
            "Checker configured: endpoint={} timeout={:?} debounce={:?}",
            config.endpoint,
            config.timeout,
            config.debounce
        );

        Ok(config)
    }

    pub fn with_endpoint(mut self, endpoint: &str) -> Result<Self, ConfigError> {
        self.endpoint = parse_endpoint(endpoint)?;
        Ok(self)
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = timeout;
        self
    }

    pub fn with_debounce(mut self, debounce: Duration) -> Self {
        self.debounce = debounce;
        self
    }
}

fn parse_endpoint(raw: &str) -> Result<Url, ConfigError> {
    let url = Url::parse(raw.trim()).map_err(|e| ConfigError::InvalidEndpoint(format!("{raw}: {e}")))?;
    match url.scheme() {
        "http" | "https" => Ok(url),
        other => Err(ConfigError::InvalidEndpoint(format!("unsupported scheme {other:?}"))),
    }
}

fn duration_var(key: &'static str) -> Result<Option<Duration>, ConfigError> {
    match std::env::var(key) {
        Ok(raw) => raw
            .trim()
            .parse::<u64>()
            .map(|ms| Some(Duration::from_millis(ms)))
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
        Err(_) => Ok(None),
    }
}

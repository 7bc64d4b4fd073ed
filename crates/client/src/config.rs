//! Client configuration

use std::time::Duration;

/// Base URL used when `PORTAL_API_BASE_URL` is not set at build time
pub const DEFAULT_API_BASE_URL: &str = "http://localhost:3000";

/// Configuration shared by every API call
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClientConfig {
    /// API base URL, without trailing slash
    pub base_url: String,
    /// Request timeout. Ignored on wasm, where fetch has no timeout.
    pub timeout: Option<Duration>,
}

impl ClientConfig {
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into(),
            timeout: None,
        }
    }

    /// Configuration baked in at build time from `PORTAL_API_BASE_URL` and
    /// `PORTAL_API_TIMEOUT_SECS`
    pub fn from_build_env() -> Self {
        let config = Self::new(option_env!("PORTAL_API_BASE_URL").unwrap_or(DEFAULT_API_BASE_URL));
        match parse_timeout(option_env!("PORTAL_API_TIMEOUT_SECS")) {
            Some(timeout) => config.with_timeout(timeout),
            None => config,
        }
    }

    pub fn with_timeout(mut self, timeout: Duration) -> Self {
        self.timeout = Some(timeout);
        self
    }
}

/// Whole seconds; zero or unparsable values mean no timeout
fn parse_timeout(secs: Option<&str>) -> Option<Duration> {
    secs.and_then(|secs| secs.trim().parse::<u64>().ok())
        .filter(|secs| *secs > 0)
        .map(Duration::from_secs)
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self::from_build_env()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn build_env_falls_back_to_default() {
        let config = ClientConfig::from_build_env();
        match option_env!("PORTAL_API_BASE_URL") {
            Some(url) => assert_eq!(config.base_url, url),
            None => assert_eq!(config.base_url, DEFAULT_API_BASE_URL),
        }
        assert_eq!(
            config.timeout,
            parse_timeout(option_env!("PORTAL_API_TIMEOUT_SECS"))
        );
    }

    #[test]
    fn timeout_parsing() {
        assert_eq!(parse_timeout(Some("30")), Some(Duration::from_secs(30)));
        assert_eq!(parse_timeout(Some(" 5 ")), Some(Duration::from_secs(5)));
        assert_eq!(parse_timeout(Some("0")), None);
        assert_eq!(parse_timeout(Some("soon")), None);
        assert_eq!(parse_timeout(None), None);
    }
}

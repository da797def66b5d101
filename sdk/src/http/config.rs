use crate::error::CoveraError;
use crate::utils::duration::CoveraDuration;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::str::FromStr;

pub const DEFAULT_API_URL: &str = "http://localhost:8763";
pub const DEFAULT_POLL_INTERVAL: &str = "10s";

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct HttpClientConfig {
    /// Base URL of the Covera API gateway.
    pub api_url: String,
    /// Transient-error retries applied by the middleware.
    pub retries: u32,
    /// Interval between notification poll ticks.
    pub poll_interval: CoveraDuration,
}

impl Default for HttpClientConfig {
    fn default() -> HttpClientConfig {
        HttpClientConfig {
            api_url: DEFAULT_API_URL.to_string(),
            retries: 3,
            poll_interval: CoveraDuration::from_str(DEFAULT_POLL_INTERVAL)
                .unwrap_or_else(|_| CoveraDuration::from(10)),
        }
    }
}

impl HttpClientConfig {
    /// Loads the configuration from a TOML file. Missing keys fall back to
    /// the defaults.
    pub fn from_path(path: impl AsRef<Path>) -> Result<HttpClientConfig, CoveraError> {
        let content = std::fs::read_to_string(path)?;
        let config: HttpClientConfig = toml::from_str(&content)?;
        Ok(config)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn should_default_to_local_gateway() {
        let config = HttpClientConfig::default();
        assert_eq!(config.api_url, "http://localhost:8763");
        assert_eq!(config.retries, 3);
        assert_eq!(config.poll_interval.as_secs(), 10);
    }

    #[test]
    fn should_parse_toml_configuration() {
        let config: HttpClientConfig = toml::from_str(
            r#"
            api_url = "https://api.covera.io"
            retries = 5
            poll_interval = "30s"
            "#,
        )
        .unwrap();
        assert_eq!(config.api_url, "https://api.covera.io");
        assert_eq!(config.retries, 5);
        assert_eq!(config.poll_interval.as_secs(), 30);
    }
}

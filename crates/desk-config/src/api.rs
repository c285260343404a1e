//! Ticketing API endpoint configuration.

use std::time::Duration;

use serde::{Deserialize, Serialize};

use crate::ConfigError;

const fn default_timeout_secs() -> u64 {
    30
}

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ApiConfig {
    /// Base URL of the ticketing API (e.g., `https://desk.example.com/api`).
    #[serde(default)]
    pub base_url: String,

    /// Per-request timeout in seconds. `0` disables the timeout.
    #[serde(default = "default_timeout_secs")]
    pub timeout_secs: u64,
}

impl Default for ApiConfig {
    fn default() -> Self {
        Self {
            base_url: String::new(),
            timeout_secs: default_timeout_secs(),
        }
    }
}

impl ApiConfig {
    pub fn is_configured(&self) -> bool {
        !self.base_url.trim().is_empty()
    }

    /// Request timeout, `None` when disabled.
    pub const fn timeout(&self) -> Option<Duration> {
        if self.timeout_secs == 0 {
            None
        } else {
            Some(Duration::from_secs(self.timeout_secs))
        }
    }

    /// Base URL without a trailing slash.
    pub fn normalized_base_url(&self) -> Result<String, ConfigError> {
        let trimmed = self.base_url.trim().trim_end_matches('/');
        if trimmed.is_empty() {
            return Err(ConfigError::NotConfigured {
                section: "api".into(),
            });
        }
        if !(trimmed.starts_with("http://") || trimmed.starts_with("https://")) {
            return Err(ConfigError::InvalidValue {
                field: "api.base_url".into(),
                reason: format!("'{trimmed}' must start with http:// or https://"),
            });
        }
        Ok(trimmed.to_string())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_not_configured() {
        let config = ApiConfig::default();
        assert!(!config.is_configured());
        assert_eq!(config.timeout(), Some(Duration::from_secs(30)));
        assert!(matches!(
            config.normalized_base_url(),
            Err(ConfigError::NotConfigured { .. })
        ));
    }

    #[test]
    fn normalizes_trailing_slash() {
        let config = ApiConfig {
            base_url: "https://desk.example.com/api/".into(),
            ..Default::default()
        };
        assert_eq!(
            config.normalized_base_url().expect("valid url"),
            "https://desk.example.com/api"
        );
    }

    #[test]
    fn rejects_missing_scheme() {
        let config = ApiConfig {
            base_url: "desk.example.com".into(),
            ..Default::default()
        };
        assert!(matches!(
            config.normalized_base_url(),
            Err(ConfigError::InvalidValue { .. })
        ));
    }

    #[test]
    fn zero_timeout_disables_it() {
        let config = ApiConfig {
            timeout_secs: 0,
            ..Default::default()
        };
        assert!(config.timeout().is_none());
    }
}

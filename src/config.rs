//! Configuration for the Fast2FA client

use std::time::Duration;

/// Default base URL of the Fast2FA API
pub const DEFAULT_BASE_URL: &str = "https://api.fast2fa.com";

const DEFAULT_SESSION_TIMEOUT_SECS: u64 = 120;
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Fast2FA client configuration
#[derive(Debug, Clone)]
pub struct ClientConfig {
    /// Base URL of the verification service
    pub base_url: String,
    /// Default deadline for a whole polling session
    pub default_timeout: Duration,
    /// Timeout for individual API requests
    pub request_timeout: Duration,
}

impl Default for ClientConfig {
    fn default() -> Self {
        Self {
            base_url: DEFAULT_BASE_URL.to_string(),
            default_timeout: Duration::from_secs(DEFAULT_SESSION_TIMEOUT_SECS),
            request_timeout: Duration::from_secs(DEFAULT_REQUEST_TIMEOUT_SECS),
        }
    }
}

impl ClientConfig {
    /// Create configuration from environment variables
    ///
    /// Reads `FAST2FA_BASE_URL`, `FAST2FA_DEFAULT_TIMEOUT_SECS` and
    /// `FAST2FA_REQUEST_TIMEOUT_SECS`; every variable is optional and falls
    /// back to the built-in default.
    pub fn from_env() -> Self {
        Self {
            base_url: std::env::var("FAST2FA_BASE_URL")
                .unwrap_or_else(|_| DEFAULT_BASE_URL.to_string()),
            default_timeout: duration_secs_or(
                std::env::var("FAST2FA_DEFAULT_TIMEOUT_SECS").ok(),
                DEFAULT_SESSION_TIMEOUT_SECS,
            ),
            request_timeout: duration_secs_or(
                std::env::var("FAST2FA_REQUEST_TIMEOUT_SECS").ok(),
                DEFAULT_REQUEST_TIMEOUT_SECS,
            ),
        }
    }
}

fn duration_secs_or(value: Option<String>, default_secs: u64) -> Duration {
    Duration::from_secs(value.and_then(|v| v.parse().ok()).unwrap_or(default_secs))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_config() {
        let config = ClientConfig::default();
        assert_eq!(config.base_url, "https://api.fast2fa.com");
        assert_eq!(config.default_timeout, Duration::from_secs(120));
        assert_eq!(config.request_timeout, Duration::from_secs(30));
    }

    #[test]
    fn test_timeout_parsing() {
        assert_eq!(
            duration_secs_or(Some("45".to_string()), 120),
            Duration::from_secs(45)
        );
        assert_eq!(duration_secs_or(None, 120), Duration::from_secs(120));
        assert_eq!(
            duration_secs_or(Some("junk".to_string()), 120),
            Duration::from_secs(120)
        );
    }
}

//! Configuration management
//!
//! Everything is read once from the process environment at startup and
//! passed explicitly to the client.

use serde::{Deserialize, Serialize};
use std::time::Duration;

/// Variable holding the Jenkins base URL
pub const JENKINS_URL_VAR: &str = "JENKINS_URL";
/// Variable holding the request timeout in seconds
pub const TIMEOUT_VAR: &str = "JENKCTL_TIMEOUT";
/// Variable holding the log level
pub const LOG_LEVEL_VAR: &str = "JENKCTL_LOG";

const DEFAULT_TIMEOUT: Duration = Duration::from_secs(30);

/// Application configuration
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Config {
    /// Jenkins base URL, optionally with `user:token@` credentials
    pub jenkins_url: Option<String>,
    /// Timeout for each request and for discovery
    pub timeout: Duration,
    /// Log level
    pub log_level: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            jenkins_url: None,
            timeout: DEFAULT_TIMEOUT,
            log_level: "info".to_string(),
        }
    }
}

impl Config {
    /// Reads the configuration from the process environment
    #[must_use]
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Log level from the environment, readable before logging is installed
    #[must_use]
    pub fn log_level_from_env() -> String {
        Self::log_level_from_lookup(|key| std::env::var(key).ok())
    }

    /// Log level through `lookup`, defaulting to `info`
    pub fn log_level_from_lookup<F>(lookup: F) -> String
    where
        F: Fn(&str) -> Option<String>,
    {
        lookup(LOG_LEVEL_VAR)
            .filter(|value| !value.trim().is_empty())
            .unwrap_or_else(|| Self::default().log_level)
    }

    /// Reads the configuration through `lookup`, which maps a variable name to its value
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();
        let non_empty = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let timeout = match non_empty(TIMEOUT_VAR) {
            Some(raw) => match raw.trim().parse::<u64>() {
                Ok(secs) if secs > 0 => Duration::from_secs(secs),
                _ => {
                    tracing::warn!(
                        "Ignoring invalid {}={:?}, using {:?}",
                        TIMEOUT_VAR,
                        raw,
                        defaults.timeout
                    );
                    defaults.timeout
                }
            },
            None => defaults.timeout,
        };

        Self {
            jenkins_url: non_empty(JENKINS_URL_VAR),
            timeout,
            log_level: Self::log_level_from_lookup(&lookup),
        }
    }
}

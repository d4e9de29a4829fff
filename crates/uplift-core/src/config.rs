//! Application configuration model.
//!
//! Loaded from `config.toml` by the infrastructure layer. Every field has a
//! default so a missing or partial file is valid.

use std::path::PathBuf;
use std::time::Duration;

use serde::{Deserialize, Serialize};

pub const DEFAULT_LOGIN_DELAY_MS: u64 = 1000;
pub const DEFAULT_ASSISTANT_DELAY_MS: u64 = 1500;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    /// Overrides where persisted records are kept.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub storage_dir: Option<PathBuf>,
    /// Default tracing filter when `RUST_LOG` is unset.
    pub log_level: String,
    /// Simulated latency of the demo login.
    pub login_delay_ms: u64,
    /// Simulated latency of the demo assistant.
    pub assistant_delay_ms: u64,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            storage_dir: None,
            log_level: "info".to_string(),
            login_delay_ms: DEFAULT_LOGIN_DELAY_MS,
            assistant_delay_ms: DEFAULT_ASSISTANT_DELAY_MS,
        }
    }
}

impl AppConfig {
    /// A configuration without simulated latency, for tests.
    pub fn instant() -> Self {
        Self {
            login_delay_ms: 0,
            assistant_delay_ms: 0,
            ..Self::default()
        }
    }

    pub fn login_delay(&self) -> Duration {
        Duration::from_millis(self.login_delay_ms)
    }

    pub fn assistant_delay(&self) -> Duration {
        Duration::from_millis(self.assistant_delay_ms)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_partial_toml_uses_defaults() {
        let config: AppConfig = toml::from_str("assistant_delay_ms = 200").unwrap();

        assert_eq!(config.assistant_delay(), Duration::from_millis(200));
        assert_eq!(config.login_delay_ms, DEFAULT_LOGIN_DELAY_MS);
        assert_eq!(config.log_level, "info");
        assert!(config.storage_dir.is_none());
    }

    #[test]
    fn test_instant_has_no_latency() {
        let config = AppConfig::instant();
        assert_eq!(config.login_delay(), Duration::ZERO);
        assert_eq!(config.assistant_delay(), Duration::ZERO);
    }
}

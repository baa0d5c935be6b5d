//! Startup configuration read from `SIMPLEQR_*` environment variables.

use serde::Deserialize;
use thiserror::Error;

use crate::{DefaultSettings, ErrorCorrectionLevel, ParseLevelError, clamp_size, sanitize_filename};

const ENV_PREFIX: &str = "SIMPLEQR_";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read configuration from environment: {0}")]
    Env(#[from] serde_env::Error),
    #[error("invalid SIMPLEQR_DEFAULT_LEVEL: {0}")]
    Level(#[from] ParseLevelError),
}

#[derive(Debug, Default, Deserialize)]
struct RawConfig {
    analytics: Option<bool>,
    default_size: Option<u32>,
    default_level: Option<String>,
    default_filename: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    /// Whether usage events are sent to the analytics sink.
    pub analytics: bool,
    pub defaults: DefaultSettings,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            analytics: true,
            defaults: DefaultSettings::default(),
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(std::env::vars())
    }

    /// Builds the config from `(key, value)` pairs; keys without the
    /// `SIMPLEQR_` prefix are ignored.
    pub fn from_vars<I>(vars: I) -> Result<Self, ConfigError>
    where
        I: IntoIterator<Item = (String, String)>,
    {
        let scoped: Vec<(String, String)> = vars
            .into_iter()
            .filter_map(|(key, value)| {
                key.strip_prefix(ENV_PREFIX)
                    .map(|key| (key.to_owned(), value))
            })
            .collect();
        let raw: RawConfig = serde_env::from_iter(scoped)?;
        Self::from_raw(raw)
    }

    fn from_raw(raw: RawConfig) -> Result<Self, ConfigError> {
        let RawConfig {
            analytics,
            default_size,
            default_level,
            default_filename,
        } = raw;

        let fallback = DefaultSettings::default();
        let level = match default_level {
            Some(level) => level.parse::<ErrorCorrectionLevel>()?,
            None => fallback.level,
        };

        let defaults = DefaultSettings {
            size: default_size.map(clamp_size).unwrap_or(fallback.size),
            level,
            filename: default_filename
                .as_deref()
                .map(sanitize_filename)
                .unwrap_or(fallback.filename),
            auto_generate: fallback.auto_generate,
        };

        Ok(Self {
            analytics: analytics.unwrap_or(true),
            defaults,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn vars(pairs: &[(&str, &str)]) -> Vec<(String, String)> {
        pairs
            .iter()
            .map(|(k, v)| ((*k).to_owned(), (*v).to_owned()))
            .collect()
    }

    #[test]
    fn test_empty_environment_uses_defaults() {
        let config = AppConfig::from_vars(vars(&[("PATH", "/usr/bin")]))
            .expect("empty config should deserialize");
        assert_eq!(config, AppConfig::default());
    }

    #[test]
    fn test_overrides_are_applied() {
        let config = AppConfig::from_vars(vars(&[
            ("SIMPLEQR_ANALYTICS", "false"),
            ("SIMPLEQR_DEFAULT_SIZE", "5000"),
            ("SIMPLEQR_DEFAULT_LEVEL", "h"),
            ("SIMPLEQR_DEFAULT_FILENAME", "my:code"),
        ]))
        .expect("config should deserialize");

        assert!(!config.analytics);
        assert_eq!(config.defaults.size, 1024);
        assert_eq!(config.defaults.level, ErrorCorrectionLevel::High);
        assert_eq!(config.defaults.filename, "mycode");
    }

    #[test]
    fn test_invalid_level_is_rejected() {
        let result = AppConfig::from_vars(vars(&[("SIMPLEQR_DEFAULT_LEVEL", "Z")]));
        assert!(matches!(result, Err(ConfigError::Level(_))));
    }
}

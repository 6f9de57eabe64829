//! Assistant configuration.
//!
//! Read from the process environment, optionally seeded from a `.env`
//! file. Variables already present in the environment win over the file.

use serde::{Deserialize, Serialize};
use std::collections::HashMap;
use std::env;
use std::fmt::Display;
use std::path::Path;
use std::str::FromStr;
use std::time::Duration;
use validator::Validate;

use crate::error::AppError;

pub const TYPING_DELAY_VAR: &str = "ASSISTANT_TYPING_DELAY_MS";
pub const RNG_SEED_VAR: &str = "ASSISTANT_RNG_SEED";
pub const MAILBOX_CAPACITY_VAR: &str = "ASSISTANT_MAILBOX_CAPACITY";
pub const REPLY_TIMEOUT_VAR: &str = "ASSISTANT_REPLY_TIMEOUT_MS";
pub const LOG_FORMAT_VAR: &str = "ASSISTANT_LOG_FORMAT";

/// Output format for log records.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    /// Human-readable lines on stderr.
    #[default]
    Text,
    /// Bunyan JSON records on stderr.
    Json,
}

impl FromStr for LogFormat {
    type Err = AppError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "text" | "pretty" => Ok(LogFormat::Text),
            "json" | "bunyan" => Ok(LogFormat::Json),
            other => Err(AppError::Config(format!(
                "{} must be 'text' or 'json', got '{}'",
                LOG_FORMAT_VAR, other
            ))),
        }
    }
}

/// Runtime settings for the assistant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Validate)]
pub struct AssistantConfig {
    /// Simulated "thinking" delay between a submit and its reply.
    #[validate(range(max = 60000))]
    pub typing_delay_ms: u64,
    /// Fixed seed for reply selection. `None` seeds from OS entropy.
    pub rng_seed: Option<u64>,
    /// Capacity of the session actor mailbox.
    #[validate(range(min = 1, max = 1024))]
    pub mailbox_capacity: usize,
    /// How long a handle waits for the actor to answer a request.
    #[validate(range(min = 100))]
    pub reply_timeout_ms: u64,
    pub log_format: LogFormat,
}

impl Default for AssistantConfig {
    fn default() -> Self {
        Self {
            typing_delay_ms: 1000,
            rng_seed: None,
            mailbox_capacity: 32,
            reply_timeout_ms: 5000,
            log_format: LogFormat::Text,
        }
    }
}

impl AssistantConfig {
    /// Loads `.env` (if any) into the environment, then reads the environment.
    pub fn from_env() -> Result<Self, AppError> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Reads the environment, falling back to values in `path` for unset keys.
    ///
    /// The file is parsed but not exported, so the process environment is
    /// left untouched.
    pub fn from_env_file(path: impl AsRef<Path>) -> Result<Self, AppError> {
        let mut file_vars = HashMap::new();
        // `from_path` would export into the process environment
        #[allow(deprecated)]
        let items = dotenv::from_path_iter(path.as_ref())?;
        for item in items {
            let (key, value) = item?;
            file_vars.insert(key, value);
        }

        Self::from_lookup(|key| env::var(key).ok().or_else(|| file_vars.get(key).cloned()))
    }

    /// Builds and validates a config from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, AppError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let defaults = Self::default();

        let log_format = match lookup(LOG_FORMAT_VAR) {
            Some(raw) if !raw.trim().is_empty() => raw.parse()?,
            _ => defaults.log_format,
        };

        let config = Self {
            typing_delay_ms: parse_var(&lookup, TYPING_DELAY_VAR)?
                .unwrap_or(defaults.typing_delay_ms),
            rng_seed: parse_var(&lookup, RNG_SEED_VAR)?,
            mailbox_capacity: parse_var(&lookup, MAILBOX_CAPACITY_VAR)?
                .unwrap_or(defaults.mailbox_capacity),
            reply_timeout_ms: parse_var(&lookup, REPLY_TIMEOUT_VAR)?
                .unwrap_or(defaults.reply_timeout_ms),
            log_format,
        };

        config.validate()?;
        Ok(config)
    }

    pub fn typing_delay(&self) -> Duration {
        Duration::from_millis(self.typing_delay_ms)
    }

    pub fn reply_timeout(&self) -> Duration {
        Duration::from_millis(self.reply_timeout_ms)
    }
}

fn parse_var<T, F>(lookup: &F, key: &str) -> Result<Option<T>, AppError>
where
    T: FromStr,
    T::Err: Display,
    F: Fn(&str) -> Option<String>,
{
    match lookup(key) {
        Some(raw) if !raw.trim().is_empty() => raw
            .trim()
            .parse::<T>()
            .map(Some)
            .map_err(|e| AppError::Config(format!("{} = '{}': {}", key, raw, e))),
        _ => Ok(None),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    const ALL_VARS: [&str; 5] = [
        TYPING_DELAY_VAR,
        RNG_SEED_VAR,
        MAILBOX_CAPACITY_VAR,
        REPLY_TIMEOUT_VAR,
        LOG_FORMAT_VAR,
    ];

    fn unset_all() -> Vec<(&'static str, Option<&'static str>)> {
        ALL_VARS.iter().map(|k| (*k, None)).collect()
    }

    #[test]
    fn test_defaults_when_unset() {
        let config = AssistantConfig::from_lookup(|_| None).unwrap();
        assert_eq!(config, AssistantConfig::default());
        assert_eq!(config.typing_delay(), Duration::from_millis(1000));
    }

    #[test]
    fn test_reads_environment() {
        temp_env::with_vars(
            [
                (TYPING_DELAY_VAR, Some("250")),
                (RNG_SEED_VAR, Some("42")),
                (MAILBOX_CAPACITY_VAR, None),
                (REPLY_TIMEOUT_VAR, Some("2000")),
                (LOG_FORMAT_VAR, Some("JSON")),
            ],
            || {
                let config = AssistantConfig::from_env().unwrap();
                assert_eq!(config.typing_delay_ms, 250);
                assert_eq!(config.rng_seed, Some(42));
                assert_eq!(config.mailbox_capacity, 32);
                assert_eq!(config.reply_timeout_ms, 2000);
                assert_eq!(config.log_format, LogFormat::Json);
            },
        );
    }

    #[test]
    fn test_malformed_number_is_config_error() {
        let result = AssistantConfig::from_lookup(|key| {
            (key == TYPING_DELAY_VAR).then(|| "soon".to_string())
        });
        assert!(matches!(result, Err(AppError::Config(msg)) if msg.contains(TYPING_DELAY_VAR)));
    }

    #[test]
    fn test_out_of_range_is_validation_error() {
        let result = AssistantConfig::from_lookup(|key| {
            (key == MAILBOX_CAPACITY_VAR).then(|| "0".to_string())
        });
        assert!(matches!(result, Err(AppError::Validation(_))));

        let result = AssistantConfig::from_lookup(|key| {
            (key == TYPING_DELAY_VAR).then(|| "600000".to_string())
        });
        assert!(matches!(result, Err(AppError::Validation(_))));
    }

    #[test]
    fn test_unknown_log_format() {
        let result =
            AssistantConfig::from_lookup(|key| (key == LOG_FORMAT_VAR).then(|| "xml".to_string()));
        assert!(matches!(result, Err(AppError::Config(_))));
    }

    #[test]
    fn test_env_file_fills_unset_keys() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{}=0", TYPING_DELAY_VAR).unwrap();
        writeln!(file, "{}=7", RNG_SEED_VAR).unwrap();
        writeln!(file, "{}=64", MAILBOX_CAPACITY_VAR).unwrap();

        let mut vars = unset_all();
        vars.retain(|(k, _)| *k != MAILBOX_CAPACITY_VAR);
        vars.push((MAILBOX_CAPACITY_VAR, Some("8")));

        temp_env::with_vars(vars, || {
            let config = AssistantConfig::from_env_file(file.path()).unwrap();
            assert_eq!(config.typing_delay_ms, 0);
            assert_eq!(config.rng_seed, Some(7));
            // the environment wins over the file
            assert_eq!(config.mailbox_capacity, 8);
        });
    }

    #[test]
    fn test_env_file_is_not_exported() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "{}=123", RNG_SEED_VAR).unwrap();

        temp_env::with_vars(unset_all(), || {
            let config = AssistantConfig::from_env_file(file.path()).unwrap();
            assert_eq!(config.rng_seed, Some(123));
            assert!(env::var(RNG_SEED_VAR).is_err());
        });
    }

    #[test]
    fn test_missing_env_file_is_config_error() {
        let dir = tempfile::tempdir().unwrap();
        let result = AssistantConfig::from_env_file(dir.path().join("absent.env"));
        assert!(matches!(result, Err(AppError::Config(_))));
    }
}

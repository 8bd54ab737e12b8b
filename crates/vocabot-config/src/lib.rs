use std::env;
use std::path::PathBuf;

use serde::{Deserialize, Serialize};

use self::delivery::DeliveryConfig;
use self::telegram::TelegramConfig;

pub mod delivery;
pub mod telegram;

#[cfg(test)]
mod tests;

/// Parse an env var, falling back to `default` when unset or malformed
pub(crate) fn env_or<T: std::str::FromStr>(key: &str, default: T) -> T {
    match env::var(key) {
        Ok(raw) => match raw.trim().parse() {
            Ok(value) => value,
            Err(_) => {
                tracing::warn!("{key}={raw:?} is not valid, using default");
                default
            }
        },
        Err(_) => default,
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LogFormat {
    #[default]
    Pretty,
    Json,
}

impl std::str::FromStr for LogFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "pretty" | "text" => Ok(LogFormat::Pretty),
            "json" => Ok(LogFormat::Json),
            other => Err(format!("unknown log format: {other}")),
        }
    }
}

fn default_vocab_path() -> PathBuf {
    PathBuf::from("vocab.json")
}

#[derive(Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    pub telegram: TelegramConfig,
    pub delivery: DeliveryConfig,

    /// JSON array of vocabulary entries, read once at startup
    #[serde(default = "default_vocab_path")]
    pub vocab_path: PathBuf,
    pub log_format: LogFormat,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            telegram: TelegramConfig::default(),
            delivery: DeliveryConfig::default(),
            vocab_path: default_vocab_path(),
            log_format: LogFormat::default(),
        }
    }
}

impl Config {
    pub fn new() -> Self {
        let vocab_path = env::var("VOCAB_PATH")
            .map(PathBuf::from)
            .unwrap_or_else(|_| default_vocab_path());

        let log_format = env_or("LOG_FORMAT", LogFormat::Pretty);

        Config {
            telegram: TelegramConfig::new(),
            delivery: DeliveryConfig::new(),

            vocab_path,
            log_format,
        }
    }
}

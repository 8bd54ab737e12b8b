use std::path::PathBuf;
use std::time::Duration;

use crate::{Config, LogFormat};

#[test]
fn defaults_match_documented_values() {
    let config = Config::default();

    assert_eq!(config.vocab_path, PathBuf::from("vocab.json"));
    assert_eq!(config.log_format, LogFormat::Pretty);
    assert_eq!(config.telegram.api_url, "https://api.telegram.org");
    assert_eq!(config.telegram.poll_timeout_seconds, 30);
    assert!(config.telegram.token.is_empty());
    assert_eq!(config.delivery.delay(), Duration::from_millis(1500));
    assert_eq!(config.delivery.batch_size, 20);
    assert_eq!(config.delivery.search_limit, 3);
    assert_eq!(config.delivery.page_size, 20);
}

#[test]
fn partial_json_fills_in_defaults() {
    let json = r#"{
        "telegram": { "token": "123:abc" },
        "delivery": { "delay_ms": 0 },
        "log_format": "json"
    }"#;

    let config: Config = serde_json::from_str(json).expect("valid config");

    assert_eq!(config.telegram.token, "123:abc");
    assert_eq!(config.telegram.api_url, "https://api.telegram.org");
    assert_eq!(config.delivery.delay(), Duration::ZERO);
    assert_eq!(config.delivery.page_size, 20);
    assert_eq!(config.log_format, LogFormat::Json);
}

#[test]
fn log_format_parses_case_insensitively() {
    assert_eq!("JSON".parse::<LogFormat>(), Ok(LogFormat::Json));
    assert_eq!("text".parse::<LogFormat>(), Ok(LogFormat::Pretty));
    assert!("xml".parse::<LogFormat>().is_err());
}

#[test]
fn zero_sizes_are_clamped() {
    let json = r#"{ "delivery": { "batch_size": 0, "search_limit": 0, "page_size": 0 } }"#;
    let mut config: Config = serde_json::from_str(json).expect("valid config");

    config.delivery.clamp_sizes();

    assert_eq!(config.delivery.batch_size, 1);
    assert_eq!(config.delivery.search_limit, 1);
    assert_eq!(config.delivery.page_size, 1);
}

#[test]
fn nonzero_sizes_are_kept() {
    let mut config = Config::default();
    config.delivery.page_size = 5;

    config.delivery.clamp_sizes();

    assert_eq!(config.delivery.page_size, 5);
    assert_eq!(config.delivery.batch_size, 20);
}

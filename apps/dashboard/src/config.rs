use std::path::PathBuf;
use std::time::Duration;

use anyhow::{Context, Result};

use crate::store::PROFILE_SLOT_KEY;

/// Dashboard configuration loaded from environment variables.
/// Every variable is optional; unset ones fall back to the defaults below.
#[derive(Debug, Clone)]
pub struct Config {
    pub data_dir: PathBuf,
    pub profile_key: String,
    pub toast_ttl: Duration,
    pub search_debounce: Duration,
    pub submit_delay: Duration,
    pub rust_log: String,
}

impl Default for Config {
    fn default() -> Self {
        Config {
            data_dir: PathBuf::from("./data"),
            profile_key: PROFILE_SLOT_KEY.to_string(),
            toast_ttl: Duration::from_millis(5000),
            search_debounce: Duration::from_millis(300),
            submit_delay: Duration::from_millis(2000),
            rust_log: "info".to_string(),
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok(); // load .env if present; ignore if missing

        let defaults = Config::default();
        Ok(Config {
            data_dir: std::env::var("DASHBOARD_DATA_DIR")
                .map(PathBuf::from)
                .unwrap_or(defaults.data_dir),
            profile_key: std::env::var("PROFILE_SLOT_KEY").unwrap_or(defaults.profile_key),
            toast_ttl: millis_env("TOAST_TTL_MS", defaults.toast_ttl)?,
            search_debounce: millis_env("SEARCH_DEBOUNCE_MS", defaults.search_debounce)?,
            submit_delay: millis_env("SUBMIT_DELAY_MS", defaults.submit_delay)?,
            rust_log: std::env::var("RUST_LOG").unwrap_or(defaults.rust_log),
        })
    }
}

fn millis_env(key: &str, default: Duration) -> Result<Duration> {
    match std::env::var(key) {
        Ok(raw) => parse_millis(key, &raw),
        Err(_) => Ok(default),
    }
}

fn parse_millis(key: &str, raw: &str) -> Result<Duration> {
    raw.trim()
        .parse::<u64>()
        .map(Duration::from_millis)
        .with_context(|| format!("{key} must be a whole number of milliseconds, got '{raw}'"))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_defaults_match_front_end_timings() {
        let config = Config::default();
        assert_eq!(config.profile_key, "profileData");
        assert_eq!(config.toast_ttl, Duration::from_secs(5));
        assert_eq!(config.search_debounce, Duration::from_millis(300));
        assert_eq!(config.submit_delay, Duration::from_secs(2));
    }

    #[test]
    fn test_from_env_without_overrides_succeeds() {
        let config = Config::from_env().unwrap();
        assert!(!config.profile_key.is_empty());
    }

    #[test]
    fn test_parse_millis_accepts_padded_number() {
        assert_eq!(
            parse_millis("TOAST_TTL_MS", " 750 ").unwrap(),
            Duration::from_millis(750)
        );
    }

    #[test]
    fn test_parse_millis_rejects_garbage() {
        let err = parse_millis("SEARCH_DEBOUNCE_MS", "soon").unwrap_err();
        assert!(err.to_string().contains("SEARCH_DEBOUNCE_MS"));
    }
}

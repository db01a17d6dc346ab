//! Runtime configuration from environment variables
//!
//! | Variable         | Default                  |
//! |------------------|--------------------------|
//! | `DATA_PATH`      | `data/data_cleaned.csv`  |
//! | `PORT`           | `3000`                   |
//! | `CACHE_CAPACITY` | `1000`                   |
//! | `CACHE_TTL_SECS` | `300`                    |
//! | `STRICT_CODES`   | `false`                  |

use std::path::PathBuf;
use std::str::FromStr;
use std::time::Duration;

use crate::data::LoadOptions;

pub const DEFAULT_DATA_PATH: &str = "data/data_cleaned.csv";
pub const DEFAULT_PORT: u16 = 3000;
pub const DEFAULT_CACHE_CAPACITY: u64 = 1_000;
pub const DEFAULT_CACHE_TTL_SECS: u64 = 300;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub data_path: PathBuf,
    pub port: u16,
    pub cache_capacity: u64,
    pub cache_ttl: Duration,
    pub strict_codes: bool,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            data_path: PathBuf::from(DEFAULT_DATA_PATH),
            port: DEFAULT_PORT,
            cache_capacity: DEFAULT_CACHE_CAPACITY,
            cache_ttl: Duration::from_secs(DEFAULT_CACHE_TTL_SECS),
            strict_codes: false,
        }
    }
}

impl AppConfig {
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build from an arbitrary key lookup (environment, test map, ...)
    pub fn from_lookup<F>(lookup: F) -> Self
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_path = lookup("DATA_PATH")
            .filter(|p| !p.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_PATH));

        Self {
            data_path,
            port: parse_or_default(&lookup, "PORT", DEFAULT_PORT),
            cache_capacity: parse_or_default(&lookup, "CACHE_CAPACITY", DEFAULT_CACHE_CAPACITY),
            cache_ttl: Duration::from_secs(parse_or_default(&lookup, "CACHE_TTL_SECS", DEFAULT_CACHE_TTL_SECS)),
            strict_codes: lookup("STRICT_CODES").is_some_and(|v| parse_flag(&v)),
        }
    }

    pub fn load_options(&self) -> LoadOptions {
        LoadOptions { strict_codes: self.strict_codes }
    }

    pub fn log_summary(&self) {
        tracing::info!("Configuration:");
        tracing::info!("  DATA_PATH: {}", self.data_path.display());
        tracing::info!("  PORT: {}", self.port);
        tracing::info!("  CACHE_CAPACITY: {}", self.cache_capacity);
        tracing::info!("  CACHE_TTL_SECS: {}", self.cache_ttl.as_secs());
        tracing::info!("  STRICT_CODES: {}", self.strict_codes);
    }
}

fn parse_or_default<F, T>(lookup: &F, key: &str, default: T) -> T
where
    F: Fn(&str) -> Option<String>,
    T: FromStr + Copy + std::fmt::Display,
{
    match lookup(key) {
        None => default,
        Some(raw) => raw.trim().parse().unwrap_or_else(|_| {
            tracing::warn!("Ignoring invalid {}={:?}, using {}", key, raw, default);
            default
        }),
    }
}

fn parse_flag(value: &str) -> bool {
    matches!(value.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes" | "on")
}

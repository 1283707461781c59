use std::path::PathBuf;
use std::time::Duration;

use anyhow::Context;
use bankrank_core::constants::{
    DEFAULT_MAX_ATTEMPTS, DEFAULT_REQUEST_TIMEOUT_MS, DEFAULT_RETRY_DELAY_MS, DEFAULT_SOURCE_URL,
};
use bankrank_core::{ColumnMapping, FetchConfig};
use chrono_tz::Tz;

use crate::schedule::CronSchedule;

pub const DEFAULT_DATA_DIR: &str = "./data";
pub const DEFAULT_SCHEDULE: &str = "0 6 * * 1";
pub const DEFAULT_TIMEZONE: &str = "America/New_York";

#[derive(Debug, Clone)]
pub struct Config {
    pub source_url: String,
    pub data_dir: PathBuf,
    pub fetch: FetchConfig,
    pub schedule: CronSchedule,
    pub column_mapping_path: Option<PathBuf>,
}

impl Config {
    pub fn from_env() -> anyhow::Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Builds a config from any key lookup.
    ///
    /// Unparseable numbers fall back to their defaults. An unparseable
    /// schedule or timezone is an error since nothing sensible can run.
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());
        let number = |key: &str, default: u64| -> u64 {
            var(key)
                .and_then(|v| v.trim().parse().ok())
                .unwrap_or(default)
        };

        let source_url = var("BANKRANK_SOURCE_URL").unwrap_or_else(|| DEFAULT_SOURCE_URL.into());
        let data_dir = var("BANKRANK_DATA_DIR").unwrap_or_else(|| DEFAULT_DATA_DIR.into());

        let max_attempts = number("BANKRANK_RETRY_ATTEMPTS", u64::from(DEFAULT_MAX_ATTEMPTS));
        let retry_delay_ms = number("BANKRANK_RETRY_DELAY_MS", DEFAULT_RETRY_DELAY_MS);
        let timeout_ms = number("BANKRANK_REQUEST_TIMEOUT_MS", DEFAULT_REQUEST_TIMEOUT_MS);

        let timezone_name = var("BANKRANK_TIMEZONE").unwrap_or_else(|| DEFAULT_TIMEZONE.into());
        let timezone: Tz = timezone_name
            .trim()
            .parse()
            .map_err(|e| anyhow::anyhow!("Invalid BANKRANK_TIMEZONE '{}': {}", timezone_name, e))?;
        let schedule_text = var("BANKRANK_SCHEDULE").unwrap_or_else(|| DEFAULT_SCHEDULE.into());
        let schedule = CronSchedule::parse(&schedule_text, timezone)
            .with_context(|| format!("Invalid BANKRANK_SCHEDULE '{}'", schedule_text))?;

        Ok(Self {
            source_url,
            data_dir: PathBuf::from(data_dir),
            fetch: FetchConfig {
                max_attempts: u32::try_from(max_attempts)
                    .unwrap_or(DEFAULT_MAX_ATTEMPTS)
                    .max(1),
                retry_delay: Duration::from_millis(retry_delay_ms),
                request_timeout: Duration::from_millis(timeout_ms),
            },
            schedule,
            column_mapping_path: var("BANKRANK_COLUMN_MAPPING").map(PathBuf::from),
        })
    }

    /// Loads the column mapping file if one is configured.
    pub fn column_mapping(&self) -> anyhow::Result<ColumnMapping> {
        match &self.column_mapping_path {
            None => Ok(ColumnMapping::default()),
            Some(path) => {
                let raw = std::fs::read_to_string(path)
                    .with_context(|| format!("Failed to read column mapping {}", path.display()))?;
                ColumnMapping::from_json(&raw)
                    .with_context(|| format!("Invalid column mapping {}", path.display()))
            }
        }
    }
}

use crate::error::{Error, Result};
use std::env;

pub const DEFAULT_API_URL: &str = "https://api.github.com";
pub const DEFAULT_CALENDAR_DAYS: u32 = 366;
pub const DEFAULT_EVENT_LIMIT: u32 = 100;
pub const DEFAULT_SEARCH_LIMIT: u32 = 50;
/// Longest accepted calendar window, roughly a century.
pub const MAX_CALENDAR_DAYS: u32 = 36_600;

/// Accepts calendar windows in `1..=MAX_CALENDAR_DAYS`.
pub fn validate_calendar_days(days: u32) -> Result<u32> {
    if (1..=MAX_CALENDAR_DAYS).contains(&days) {
        Ok(days)
    } else {
        Err(Error::Config(format!(
            "calendar window must be between 1 and {} days, got {}",
            MAX_CALENDAR_DAYS, days
        )))
    }
}

#[derive(Debug, Clone)]
pub struct Config {
    pub github_token: String,
    pub api_base_url: String,
    pub event_limit: u32,
    pub calendar_days: u32,
}

impl Config {
    pub fn from_env() -> Result<Self> {
        let github_token = env::var("GITHUB_TOKEN")
            .map_err(|_| Error::Config("GITHUB_TOKEN environment variable not set".to_string()))?;

        let api_base_url = env::var("GITHUB_API_URL")
            .map(|v| v.trim_end_matches('/').to_string())
            .unwrap_or_else(|_| DEFAULT_API_URL.to_string());

        let event_limit = env::var("EVENT_LIMIT")
            .ok()
            .and_then(|v| v.parse().ok())
            .unwrap_or(DEFAULT_EVENT_LIMIT);

        let calendar_days = match env::var("CALENDAR_DAYS") {
            Ok(v) => {
                let days = v.trim().parse().map_err(|_| {
                    Error::Config(format!("CALENDAR_DAYS must be a number of days, got {:?}", v))
                })?;
                validate_calendar_days(days)?
            }
            Err(_) => DEFAULT_CALENDAR_DAYS,
        };

        Ok(Self {
            github_token,
            api_base_url,
            event_limit,
            calendar_days,
        })
    }
}

#[derive(Debug, Clone)]
pub struct MetricsConfig {
    pub calendar_days: u32,
    pub event_limit: u32,
    pub search_limit: u32,
}

impl Default for MetricsConfig {
    fn default() -> Self {
        Self {
            calendar_days: DEFAULT_CALENDAR_DAYS,
            event_limit: DEFAULT_EVENT_LIMIT,
            search_limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

impl From<&Config> for MetricsConfig {
    fn from(config: &Config) -> Self {
        Self {
            calendar_days: config.calendar_days,
            event_limit: config.event_limit,
            search_limit: DEFAULT_SEARCH_LIMIT,
        }
    }
}

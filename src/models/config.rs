use anyhow::{Context, Result};
use std::time::Duration;

const MAX_TIMEOUT_SECS: u64 = 60;
const DEFAULT_TIMEOUT_SECS: u64 = 10;
const DEFAULT_LOG_FILE: &str = "signup-tui.log";

#[derive(Debug, Clone)]
pub struct AppConfig {
    pub register_url: Option<String>,
    pub request_timeout: Duration,
    pub log_file: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build the config from any variable source; `from_env` passes the
    /// process environment
    pub fn from_lookup<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Registration backend is optional; without it a valid form just navigates home
        let register_url = var("SIGNUP_REGISTER_URL")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        if let Some(url) = &register_url {
            reqwest::Url::parse(url)
                .with_context(|| format!("SIGNUP_REGISTER_URL is not a valid URL: {}", url))?;
        }

        let requested_timeout = var("SIGNUP_REQUEST_TIMEOUT_SECS")
            .and_then(|s| s.trim().parse::<u64>().ok())
            .unwrap_or(DEFAULT_TIMEOUT_SECS);

        let timeout_secs = if requested_timeout > MAX_TIMEOUT_SECS {
            tracing::warn!(
                "SIGNUP_REQUEST_TIMEOUT_SECS is set to {}, which exceeds the maximum of {}. Capping at {}s.",
                requested_timeout,
                MAX_TIMEOUT_SECS,
                MAX_TIMEOUT_SECS
            );
            MAX_TIMEOUT_SECS
        } else {
            requested_timeout
        };

        Ok(Self {
            register_url,
            request_timeout: Duration::from_secs(timeout_secs),
            log_file: var("SIGNUP_LOG_FILE").unwrap_or_else(|| DEFAULT_LOG_FILE.to_string()),
        })
    }
}

/// Log destination from `SIGNUP_LOG_FILE`
pub fn log_file_from_env() -> String {
    std::env::var("SIGNUP_LOG_FILE").unwrap_or_else(|_| DEFAULT_LOG_FILE.to_string())
}

use std::{fmt::Display, str::FromStr, time::Duration};

use url::Url;

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_SWAPI_BASE_URL: &str = "https://swapi.dev/api";
/// Daily at midnight.
const DEFAULT_SYNC_CRON: &str = "0 0 0 * * *";
const DEFAULT_SYNC_CONCURRENCY: usize = 4;
const DEFAULT_UPSTREAM_TIMEOUT_SECS: u64 = 30;
const DEFAULT_UPSTREAM_MAX_RETRIES: u32 = 3;
const MAX_UPSTREAM_RETRIES: u32 = 10;
pub const DEFAULT_TOKEN_TTL_HOURS: i64 = 24;
/// One year.
const MAX_TOKEN_TTL_HOURS: i64 = 24 * 365;

/// Application configuration loaded from the environment.
#[derive(Debug, Clone)]
pub struct Config {
    pub database_url: String,
    pub host: String,
    pub port: u16,

    pub swapi_base_url: Url,
    pub sync_cron: String,
    pub sync_on_startup: bool,
    pub sync_concurrency: usize,
    pub upstream_timeout: Duration,
    pub upstream_max_retries: u32,

    pub token_ttl: chrono::Duration,

    /// Bootstrap admin created at startup when no admin exists.
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        Ok(Self {
            database_url: required("DATABASE_URL")?,
            host: optional("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            port: parsed("PORT", DEFAULT_PORT)?,
            swapi_base_url: parsed_url(
                "SWAPI_BASE_URL",
                optional("SWAPI_BASE_URL").unwrap_or_else(|| DEFAULT_SWAPI_BASE_URL.to_string()),
            )?,
            sync_cron: optional("SYNC_CRON").unwrap_or_else(|| DEFAULT_SYNC_CRON.to_string()),
            sync_on_startup: parsed("SYNC_ON_STARTUP", true)?,
            sync_concurrency: parsed("SYNC_CONCURRENCY", DEFAULT_SYNC_CONCURRENCY)?.max(1),
            upstream_timeout: Duration::from_secs(parsed(
                "UPSTREAM_TIMEOUT_SECS",
                DEFAULT_UPSTREAM_TIMEOUT_SECS,
            )?),
            upstream_max_retries: bounded(
                "UPSTREAM_MAX_RETRIES",
                DEFAULT_UPSTREAM_MAX_RETRIES,
                0,
                MAX_UPSTREAM_RETRIES,
            )?,
            token_ttl: chrono::Duration::hours(bounded(
                "TOKEN_TTL_HOURS",
                DEFAULT_TOKEN_TTL_HOURS,
                1,
                MAX_TOKEN_TTL_HOURS,
            )?),
            admin_email: optional("ADMIN_EMAIL"),
            admin_password: optional("ADMIN_PASSWORD"),
        })
    }

    pub fn bind_address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

fn required(name: &str) -> Result<String, ConfigError> {
    optional(name).ok_or_else(|| ConfigError::MissingEnvVar(name.to_string()))
}

/// Unset and blank variables are both treated as absent.
fn optional(name: &str) -> Option<String> {
    std::env::var(name)
        .ok()
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

fn parsed<T>(name: &str, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    match optional(name) {
        None => Ok(default),
        Some(value) => value.parse().map_err(|e: T::Err| ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: e.to_string(),
            value,
        }),
    }
}

/// Like `parsed`, but rejects values outside `min..=max`.
fn bounded<T>(name: &str, default: T, min: T, max: T) -> Result<T, ConfigError>
where
    T: FromStr + PartialOrd + Display,
    T::Err: Display,
{
    let value = parsed(name, default)?;

    if value < min || value > max {
        return Err(ConfigError::InvalidEnvVar {
            name: name.to_string(),
            reason: format!("must be between {} and {}", min, max),
            value: value.to_string(),
        });
    }

    Ok(value)
}

/// Parses a base URL, forcing a trailing slash so relative joins append to the path.
fn parsed_url(name: &str, value: String) -> Result<Url, ConfigError> {
    let normalized = format!("{}/", value.trim_end_matches('/'));
    Url::parse(&normalized).map_err(|e| ConfigError::InvalidEnvVar {
        name: name.to_string(),
        value,
        reason: e.to_string(),
    })
}

use std::env;
use std::fmt::Display;
use std::str::FromStr;
use std::time::Duration;

use crate::common::ConfigError;
use crate::pipeline::DEFAULT_TIMEOUT;

/// Runtime settings, read from the environment (and `.env` via dotenvy).
#[derive(Debug, Clone)]
pub struct Config {
    /// Unset means the in-memory demo store.
    pub database_url: Option<String>,
    pub bind_addr: String,
    pub max_connections: u32,
    pub timeout: Duration,
    pub seed_database: bool,
    pub admin_email: Option<String>,
    pub admin_password: Option<String>,
    pub cookie_secure: bool,
}

fn var(key: &str) -> Option<String> {
    env::var(key)
        .ok()
        .map(|value| value.trim().to_string())
        .filter(|value| !value.is_empty())
}

fn try_load<T>(key: &'static str, default: &str) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: Display,
{
    let value = var(key).unwrap_or_else(|| {
        log::info!("{key} not set, using default: {default}");
        default.to_string()
    });

    match value.parse::<T>() {
        Ok(parsed) => Ok(parsed),
        Err(e) => Err(ConfigError::Invalid {
            key,
            reason: e.to_string(),
            value,
        }),
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        let database_url = var("DATABASE_URL");
        if database_url.is_none() {
            log::warn!("DATABASE_URL not set, serving from an in-memory store");
        }

        let timeout_secs: u64 = try_load("READ_TIMEOUT_SECS", &DEFAULT_TIMEOUT.as_secs().to_string())?;
        if timeout_secs == 0 {
            return Err(ConfigError::Invalid {
                key: "READ_TIMEOUT_SECS",
                value: timeout_secs.to_string(),
                reason: "must be at least 1".into(),
            });
        }

        Ok(Self {
            database_url,
            bind_addr: try_load("BIND_ADDR", "0.0.0.0:8080")?,
            max_connections: try_load("DATABASE_MAX_CONNECTIONS", "5")?,
            timeout: Duration::from_secs(timeout_secs),
            seed_database: try_load("SEED_DATABASE", "false")?,
            admin_email: var("ADMIN_EMAIL"),
            admin_password: var("ADMIN_PASSWORD"),
            cookie_secure: try_load("COOKIE_SECURE", "true")?,
        })
    }
}

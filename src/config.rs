use anyhow::{anyhow, Context, Result};
use chrono_tz::Tz;
use std::env;

pub const DEFAULT_DATABASE_URL: &str = "sqlite://social.db?mode=rwc";
pub const DEFAULT_CORS_ORIGIN: &str = "http://localhost:3000";
pub const DEFAULT_TIMEZONE: &str = "Europe/Oslo";

#[derive(Debug, Clone)]
pub struct Settings {
    pub database_url: String,
    pub host: String,
    pub port: u16,
    pub cors_origin: String,
    pub timezone: Tz,
    pub max_connections: u32,
}

impl Settings {
    pub fn from_env() -> Result<Self> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let port = match lookup("PORT") {
            Some(raw) => raw
                .parse::<u16>()
                .with_context(|| format!("Invalid PORT: {}", raw))?,
            None => 8080,
        };

        let max_connections = match lookup("DB_MAX_CONNECTIONS") {
            Some(raw) => raw
                .parse::<u32>()
                .with_context(|| format!("Invalid DB_MAX_CONNECTIONS: {}", raw))?,
            None => 5,
        };

        let zone_name = lookup("MESSAGE_TIMEZONE").unwrap_or_else(|| DEFAULT_TIMEZONE.to_string());
        let timezone = zone_name
            .parse::<Tz>()
            .map_err(|e| anyhow!("Invalid MESSAGE_TIMEZONE {}: {}", zone_name, e))?;

        Ok(Settings {
            database_url: lookup("DATABASE_URL").unwrap_or_else(|| DEFAULT_DATABASE_URL.to_string()),
            host: lookup("HOST").unwrap_or_else(|| "0.0.0.0".to_string()),
            port,
            cors_origin: lookup("CORS_ORIGIN").unwrap_or_else(|| DEFAULT_CORS_ORIGIN.to_string()),
            timezone,
            max_connections,
        })
    }
}

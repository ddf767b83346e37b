//! Server configuration
//!
//! Read once at startup from the process environment (after `.env` is loaded).

use std::env;
use std::str::FromStr;

use anyhow::Context;
use sqlx::postgres::PgConnectOptions;
use traffic::TrafficConfig;
use traffic::application::config::DEFAULT_DATABASE_NAME;

const DEFAULT_PORT: u16 = 4000;
const DEFAULT_DB_HOST: &str = "localhost";
const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_DB_USER: &str = "postgres";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;

#[derive(Debug, Clone)]
pub struct ApiConfig {
    pub port: u16,
    pub database: PgConnectOptions,
    pub database_name: String,
    pub max_connections: u32,
    /// `None` allows any origin
    pub frontend_origins: Option<Vec<String>>,
    pub run_migrations: bool,
}

impl ApiConfig {
    pub fn from_env() -> anyhow::Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Build from an arbitrary key lookup; empty values count as unset
    pub fn from_lookup<F>(lookup: F) -> anyhow::Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let var = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let port = parse_or(var("PORT"), "PORT", DEFAULT_PORT)?;
        let max_connections = parse_or(
            var("DB_MAX_CONNECTIONS"),
            "DB_MAX_CONNECTIONS",
            DEFAULT_MAX_CONNECTIONS,
        )?;

        let database = match var("DATABASE_URL") {
            Some(url) => PgConnectOptions::from_str(&url).context("Invalid DATABASE_URL")?,
            None => PgConnectOptions::new()
                .host(&var("DB_HOST").unwrap_or_else(|| DEFAULT_DB_HOST.to_string()))
                .port(parse_or(var("DB_PORT"), "DB_PORT", DEFAULT_DB_PORT)?)
                .username(&var("DB_USER").unwrap_or_else(|| DEFAULT_DB_USER.to_string()))
                .password(&lookup("DB_PASSWORD").unwrap_or_default())
                .database(&var("DB_NAME").unwrap_or_else(|| DEFAULT_DATABASE_NAME.to_string())),
        };

        let database_name = database
            .get_database()
            .unwrap_or(DEFAULT_DATABASE_NAME)
            .to_string();

        let frontend_origins = var("FRONTEND_ORIGINS").map(|origins| {
            origins
                .split(',')
                .map(str::trim)
                .filter(|origin| !origin.is_empty())
                .map(String::from)
                .collect()
        });

        let run_migrations = var("RUN_MIGRATIONS")
            .map(|v| matches!(v.trim().to_ascii_lowercase().as_str(), "1" | "true" | "yes"))
            .unwrap_or(false);

        Ok(Self {
            port,
            database,
            database_name,
            max_connections,
            frontend_origins,
            run_migrations,
        })
    }

    pub fn traffic_config(&self) -> TrafficConfig {
        TrafficConfig::with_database_name(self.database_name.clone())
    }
}

fn parse_or<T>(value: Option<String>, key: &str, default: T) -> anyhow::Result<T>
where
    T: FromStr,
    T::Err: std::error::Error + Send + Sync + 'static,
{
    match value {
        Some(raw) => raw
            .trim()
            .parse()
            .with_context(|| format!("Invalid value for {}: {:?}", key, raw)),
        None => Ok(default),
    }
}

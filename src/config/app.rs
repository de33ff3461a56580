//! Process configuration from environment variables (a `.env` file is honoured).

use crate::error::ConfigError;
use crate::model::DeletePolicy;
use serde::Deserialize;
use sqlx::postgres::PgConnectOptions;
use std::fmt;
use std::str::FromStr;

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:3000";
const DEFAULT_MAX_BODY_BYTES: usize = 64 * 1024;

#[derive(Clone, Debug)]
pub struct AppConfig {
    pub bind_addr: String,
    pub database: DatabaseConfig,
    pub delete_policy: DeletePolicy,
    pub max_body_bytes: usize,
}

#[derive(Clone)]
pub struct DatabaseConfig {
    pub connect_options: PgConnectOptions,
    pub max_connections: u32,
    pub min_connections: u32,
}

// Credentials never reach the logs.
impl fmt::Debug for DatabaseConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("DatabaseConfig")
            .field("host", &self.connect_options.get_host())
            .field("port", &self.connect_options.get_port())
            .field("database", &self.connect_options.get_database())
            .field("max_connections", &self.max_connections)
            .field("min_connections", &self.min_connections)
            .finish()
    }
}

/// Credentials payload as stored by a secret manager.
#[derive(Deserialize)]
struct DbSecret {
    username: String,
    password: String,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        dotenvy::dotenv().ok();
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Build config from any key lookup. Empty values count as unset.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let get = |key: &str| lookup(key).filter(|v| !v.trim().is_empty());

        let bind_addr = get("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.into());
        let delete_policy = match get("PRODUCT_DELETE_POLICY") {
            Some(v) => v.parse()?,
            None => DeletePolicy::default(),
        };
        let max_body_bytes = parse_or("MAX_BODY_BYTES", get("MAX_BODY_BYTES"), DEFAULT_MAX_BODY_BYTES)?;

        let connect_options = match get("DATABASE_URL") {
            Some(url) => PgConnectOptions::from_str(&url).map_err(|e| ConfigError::Invalid {
                key: "DATABASE_URL",
                message: e.to_string(),
            })?,
            None => connect_options_from_parts(&get)?,
        };
        let max_connections = parse_or("DB_MAX_CONNECTIONS", get("DB_MAX_CONNECTIONS"), 5u32)?;
        let min_connections = parse_or("DB_MIN_CONNECTIONS", get("DB_MIN_CONNECTIONS"), 1u32)?;
        if min_connections > max_connections {
            return Err(ConfigError::Invalid {
                key: "DB_MIN_CONNECTIONS",
                message: format!("{} exceeds DB_MAX_CONNECTIONS {}", min_connections, max_connections),
            });
        }

        Ok(AppConfig {
            bind_addr,
            database: DatabaseConfig {
                connect_options,
                max_connections,
                min_connections,
            },
            delete_policy,
            max_body_bytes,
        })
    }
}

fn connect_options_from_parts<G>(get: &G) -> Result<PgConnectOptions, ConfigError>
where
    G: Fn(&str) -> Option<String>,
{
    let host = get("DB_HOST").ok_or(ConfigError::Missing("DB_HOST"))?;
    let port = parse_or("DB_PORT", get("DB_PORT"), 5432u16)?;
    let name = get("DB_NAME").ok_or(ConfigError::Missing("DB_NAME"))?;

    let (username, password) = match get("DB_SECRET") {
        Some(raw) => {
            let secret: DbSecret = serde_json::from_str(&raw).map_err(|e| ConfigError::Invalid {
                key: "DB_SECRET",
                message: e.to_string(),
            })?;
            (secret.username, secret.password)
        }
        None => (
            get("DB_USERNAME").ok_or(ConfigError::Missing("DB_USERNAME"))?,
            get("DB_PASSWORD").unwrap_or_default(),
        ),
    };

    Ok(PgConnectOptions::new()
        .host(&host)
        .port(port)
        .database(&name)
        .username(&username)
        .password(&password))
}

fn parse_or<T>(key: &'static str, raw: Option<String>, default: T) -> Result<T, ConfigError>
where
    T: FromStr,
    T::Err: fmt::Display,
{
    match raw {
        Some(v) => v.trim().parse().map_err(|e: T::Err| ConfigError::Invalid {
            key,
            message: e.to_string(),
        }),
        None => Ok(default),
    }
}

use std::env;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};

use sqlx::postgres::PgConnectOptions;
use thiserror::Error;

pub mod cors;
pub mod security;

pub use cors::create_cors_layer;
pub use security::create_security_headers_layer;

const DEFAULT_DB_HOST: &str = "localhost";
const DEFAULT_DB_PORT: u16 = 5432;
const DEFAULT_DB_USER: &str = "postgres";
const DEFAULT_DB_NAME: &str = "events";
const DEFAULT_MAX_CONNECTIONS: u32 = 5;
const DEFAULT_SERVER_PORT: u16 = 3001;
const DEFAULT_ALLOWED_ORIGINS: &str = "http://localhost:3000,http://localhost:5173";

#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("invalid value {value:?} for {key}")]
    InvalidValue { key: &'static str, value: String },

    #[error("invalid DATABASE_URL: {0}")]
    InvalidDatabaseUrl(#[source] sqlx::Error),
}

#[derive(Debug, Clone)]
pub struct Config {
    pub database: PgConnectOptions,
    pub max_connections: u32,
    pub bind_addr: SocketAddr,
    pub cors_allowed_origins: Vec<String>,
    /// `RUST_ENV=production`; turns on HSTS.
    pub production: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            database: connect_options_from_parts(
                DEFAULT_DB_HOST,
                DEFAULT_DB_PORT,
                DEFAULT_DB_USER,
                None,
                DEFAULT_DB_NAME,
            ),
            max_connections: DEFAULT_MAX_CONNECTIONS,
            bind_addr: SocketAddr::new(IpAddr::V4(Ipv4Addr::UNSPECIFIED), DEFAULT_SERVER_PORT),
            cors_allowed_origins: split_origins(DEFAULT_ALLOWED_ORIGINS),
            production: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the config from any key/value source; unset keys fall back to defaults.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        let database = match lookup("DATABASE_URL") {
            Some(url) if !url.trim().is_empty() => url
                .trim()
                .parse::<PgConnectOptions>()
                .map_err(ConfigError::InvalidDatabaseUrl)?,
            _ => connect_options_from_parts(
                &lookup("DB_HOST").unwrap_or_else(|| DEFAULT_DB_HOST.to_string()),
                parse_or(&lookup, "DB_PORT", DEFAULT_DB_PORT)?,
                &lookup("DB_USER").unwrap_or_else(|| DEFAULT_DB_USER.to_string()),
                lookup("DB_PASSWORD").filter(|p| !p.is_empty()).as_deref(),
                &lookup("DB_NAME").unwrap_or_else(|| DEFAULT_DB_NAME.to_string()),
            ),
        };

        let max_connections = parse_or(&lookup, "DB_MAX_CONNECTIONS", DEFAULT_MAX_CONNECTIONS)?;
        if max_connections == 0 {
            return Err(ConfigError::InvalidValue {
                key: "DB_MAX_CONNECTIONS",
                value: "0".to_string(),
            });
        }

        let host = parse_or(
            &lookup,
            "SERVER_HOST",
            IpAddr::V4(Ipv4Addr::UNSPECIFIED),
        )?;
        let port = parse_or(&lookup, "SERVER_PORT", DEFAULT_SERVER_PORT)?;

        let cors_allowed_origins = split_origins(
            &lookup("CORS_ALLOWED_ORIGINS").unwrap_or_else(|| DEFAULT_ALLOWED_ORIGINS.to_string()),
        );

        let production = lookup("RUST_ENV")
            .map(|v| v.eq_ignore_ascii_case("production"))
            .unwrap_or(false);

        Ok(Self {
            database,
            max_connections,
            bind_addr: SocketAddr::new(host, port),
            cors_allowed_origins,
            production,
        })
    }
}

fn parse_or<F, T>(lookup: &F, key: &'static str, default: T) -> Result<T, ConfigError>
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    match lookup(key) {
        Some(raw) => raw
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidValue { key, value: raw }),
        None => Ok(default),
    }
}

/// Typed options, so credentials never pass through URL syntax.
fn connect_options_from_parts(
    host: &str,
    port: u16,
    user: &str,
    password: Option<&str>,
    name: &str,
) -> PgConnectOptions {
    let options = PgConnectOptions::new()
        .host(host)
        .port(port)
        .username(user)
        .database(name);

    match password {
        Some(password) => options.password(password),
        None => options,
    }
}

fn split_origins(raw: &str) -> Vec<String> {
    raw.split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_string)
        .collect()
}

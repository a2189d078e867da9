use std::env;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use tracing_subscriber::EnvFilter;
use vocal_coach_core::AppError;

const DEFAULT_DATABASE_MAX_CONNECTIONS: u32 = 10;
const DEFAULT_ACCESS_TOKEN_TTL_DAYS: i64 = 30;
const MAX_ACCESS_TOKEN_TTL_DAYS: i64 = 3650;
const DEFAULT_API_PORT: u16 = 3000;

#[derive(Clone)]
pub struct ApiConfig {
    pub migrate_only: bool,
    pub database_url: String,
    pub database_max_connections: u32,
    pub jwt_secret: String,
    pub access_token_ttl_days: i64,
    pub api_host: String,
    pub api_port: u16,
}

impl std::fmt::Debug for ApiConfig {
    fn fmt(&self, formatter: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        formatter
            .debug_struct("ApiConfig")
            .field("migrate_only", &self.migrate_only)
            .field("database_max_connections", &self.database_max_connections)
            .field("access_token_ttl_days", &self.access_token_ttl_days)
            .field("api_host", &self.api_host)
            .field("api_port", &self.api_port)
            .finish_non_exhaustive()
    }
}

impl ApiConfig {
    pub fn load() -> Result<Self, AppError> {
        let command = env::args().nth(1);
        Self::from_lookup(command.as_deref(), |name| env::var(name).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_lookup(
        command: Option<&str>,
        lookup: impl Fn(&str) -> Option<String>,
    ) -> Result<Self, AppError> {
        let required_non_empty = |name: &str| -> Result<String, AppError> {
            let value =
                lookup(name).ok_or_else(|| AppError::Validation(format!("{name} is required")))?;
            if value.trim().is_empty() {
                return Err(AppError::Validation(format!("{name} must not be empty")));
            }
            Ok(value)
        };

        let database_url = required_non_empty("DATABASE_URL")?;
        let jwt_secret = required_non_empty("JWT_SECRET")?;

        let database_max_connections = parse_or(
            "DATABASE_MAX_CONNECTIONS",
            lookup("DATABASE_MAX_CONNECTIONS"),
            DEFAULT_DATABASE_MAX_CONNECTIONS,
        )?;
        let access_token_ttl_days = parse_or(
            "ACCESS_TOKEN_TTL_DAYS",
            lookup("ACCESS_TOKEN_TTL_DAYS"),
            DEFAULT_ACCESS_TOKEN_TTL_DAYS,
        )?;
        if !(1..=MAX_ACCESS_TOKEN_TTL_DAYS).contains(&access_token_ttl_days) {
            return Err(AppError::Validation(format!(
                "ACCESS_TOKEN_TTL_DAYS must be between 1 and {MAX_ACCESS_TOKEN_TTL_DAYS}"
            )));
        }

        let api_host = lookup("API_HOST").unwrap_or_else(|| "127.0.0.1".to_owned());
        let api_port = match lookup("API_PORT") {
            Some(value) => parse_or("API_PORT", Some(value), DEFAULT_API_PORT)?,
            None => parse_or("PORT", lookup("PORT"), DEFAULT_API_PORT)?,
        };

        Ok(Self {
            migrate_only: command == Some("migrate"),
            database_url,
            database_max_connections,
            jwt_secret,
            access_token_ttl_days,
            api_host,
            api_port,
        })
    }

    pub fn socket_address(&self) -> Result<SocketAddr, AppError> {
        let host = IpAddr::from_str(&self.api_host).map_err(|error| {
            AppError::Validation(format!("invalid API_HOST '{}': {error}", self.api_host))
        })?;
        Ok(SocketAddr::from((host, self.api_port)))
    }
}

pub fn init_tracing() {
    let env_filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"));

    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_target(false)
        .compact()
        .init();
}

fn parse_or<T>(name: &str, value: Option<String>, default: T) -> Result<T, AppError>
where
    T: FromStr,
    T::Err: std::fmt::Display,
{
    match value.filter(|value| !value.trim().is_empty()) {
        Some(value) => value
            .trim()
            .parse::<T>()
            .map_err(|error| AppError::Validation(format!("invalid {name}: {error}"))),
        None => Ok(default),
    }
}

//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the Japri API server.
//! It retrieves configuration values from environment variables and provides defaults
//! where appropriate.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Per-request timeout (default: 30)
//! - `ADMIN_PASSWORD_HASH`: Argon2 PHC string for the shared admin password
//! - `ADMIN_PASSWORD`: Plain admin password, hashed at startup when no hash is given
//! - `DASHBOARD_POLL_SECONDS`: Refresh interval advertised to dashboard clients (default: 30)
//! - `SCHEDULE_LOCK_TIMEOUT_MS`: Longest wait for the per-room/day booking lock (default: 5000, zero is ignored)
//! - `STATIC_DIR`: Directory with a front-end to serve at `/` (optional)

use eyre::{eyre, Result, WrapErr};
use std::{env, path::PathBuf, time::Duration};
use tracing::Level;

use crate::middleware::auth;

/// Configuration for the Japri API server
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use japri_api::config::ApiConfig;
///
/// fn example() -> Result<()> {
///     let config = ApiConfig::from_env()?;
///     println!("Starting server on {}:{}", config.host, config.port);
///     Ok(())
/// }
/// ```
#[derive(Debug, Clone)]
pub struct ApiConfig {
    /// Host address for the API server (e.g., "127.0.0.1", "0.0.0.0")
    pub host: String,

    /// Port for the API server to listen on
    pub port: u16,

    /// PostgreSQL database connection string
    pub database_url: String,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Argon2 hash of the shared admin password. Without it every
    /// mutation is refused.
    pub admin_password_hash: Option<String>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Seconds between dashboard refreshes suggested to clients
    pub poll_interval_secs: u64,

    /// Upper bound on waiting for the booking lock of one room and day
    pub lock_timeout: Duration,

    /// Static front-end directory served as the fallback route
    pub static_dir: Option<PathBuf>,
}

fn parse_level(value: &str) -> Level {
    match value {
        "trace" => Level::TRACE,
        "debug" => Level::DEBUG,
        "info" => Level::INFO,
        "warn" => Level::WARN,
        "error" => Level::ERROR,
        _ => Level::INFO,
    }
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The DATABASE_URL environment variable is not set
    /// - The API_PORT value cannot be parsed as a u16
    /// - ADMIN_PASSWORD_HASH is not a valid PHC string
    pub fn from_env() -> Result<Self> {
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary key lookup.
    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Network settings
        let host = lookup("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = lookup("API_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse()
            .wrap_err("Invalid API_PORT value")?;

        // Database settings
        let database_url = lookup("DATABASE_URL")
            .ok_or_else(|| eyre!("DATABASE_URL environment variable must be set"))?;

        // Logging settings
        let log_level = parse_level(&lookup("LOG_LEVEL").unwrap_or_else(|| "info".to_string()));

        // CORS settings
        let cors_origins = lookup("API_CORS_ORIGINS").map(|origins| {
            origins
                .split(',')
                .map(|s| s.trim().to_string())
                .filter(|s| !s.is_empty())
                .collect()
        });

        // Admin credential
        let admin_password_hash = match (lookup("ADMIN_PASSWORD_HASH"), lookup("ADMIN_PASSWORD")) {
            (Some(hash), _) => {
                argon2::PasswordHash::new(&hash)
                    .map_err(|e| eyre!("Invalid ADMIN_PASSWORD_HASH: {}", e))?;
                Some(hash)
            }
            (None, Some(password)) => Some(auth::hash_password(&password)?),
            (None, None) => None,
        };

        // Performance settings
        let request_timeout = lookup("API_REQUEST_TIMEOUT_SECONDS")
            .and_then(|value| value.parse().ok())
            .unwrap_or(30);

        let poll_interval_secs = lookup("DASHBOARD_POLL_SECONDS")
            .and_then(|value| value.parse().ok())
            .filter(|secs| *secs > 0)
            .unwrap_or(30);

        let lock_timeout = Duration::from_millis(
            lookup("SCHEDULE_LOCK_TIMEOUT_MS")
                .and_then(|value| value.parse().ok())
                .filter(|ms| *ms > 0)
                .unwrap_or(5000),
        );

        let static_dir = lookup("STATIC_DIR").map(PathBuf::from);

        Ok(Self {
            host,
            port,
            database_url,
            log_level,
            cors_origins,
            admin_password_hash,
            request_timeout,
            poll_interval_secs,
            lock_timeout,
            static_dir,
        })
    }

    /// Returns the server address as a string
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

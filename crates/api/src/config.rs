//! # API Configuration Module
//!
//! This module handles loading and managing configuration for the CareBook API server.
//! It retrieves configuration values from environment variables and provides defaults
//! where appropriate.
//!
//! ## Environment Variables
//!
//! - `API_HOST`: The host address to bind the server to (default: "0.0.0.0")
//! - `API_PORT`: The port to listen on (default: 3000)
//! - `DATABASE_URL`: PostgreSQL connection string (required)
//! - `DATABASE_MAX_CONNECTIONS`: Connection pool size (default: 5)
//! - `LOG_LEVEL`: Logging level (default: "info")
//! - `API_CORS_ORIGINS`: Comma-separated list of allowed CORS origins
//! - `API_REQUEST_TIMEOUT_SECONDS`: Request timeout (default: 30)
//! - `APPOINTMENT_BUFFER_MINUTES`: Idle minutes required between bookings (default: 10)

use carebook_core::resolve_buffer_minutes;
use eyre::{Result, WrapErr, eyre};
use std::env;
use tracing::Level;

/// Configuration for the CareBook API server
///
/// # Example
///
/// ```no_run
/// use eyre::Result;
/// use carebook_api::config::ApiConfig;
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

    /// Maximum number of pooled database connections
    pub database_max_connections: u32,

    /// Log level for the application
    pub log_level: Level,

    /// CORS allowed origins (optional)
    pub cors_origins: Option<Vec<String>>,

    /// Request timeout in seconds
    pub request_timeout: u64,

    /// Buffer enforced around every booking, in minutes. Never negative.
    pub buffer_minutes: i64,
}

impl ApiConfig {
    /// Creates a new ApiConfig from environment variables
    ///
    /// # Errors
    ///
    /// This function will return an error if:
    /// - The DATABASE_URL environment variable is not set
    /// - The API_PORT value cannot be parsed as a u16
    pub fn from_env() -> Result<Self> {
        Self::from_vars(|key| env::var(key).ok())
    }

    /// Builds the configuration from an arbitrary variable source.
    pub fn from_vars<F>(var: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Network settings
        let host = var("API_HOST").unwrap_or_else(|| "0.0.0.0".to_string());
        let port = var("API_PORT")
            .unwrap_or_else(|| "3000".to_string())
            .parse::<u16>()
            .wrap_err("Invalid API_PORT value")?;

        // Database settings
        let database_url =
            var("DATABASE_URL").ok_or_else(|| eyre!("DATABASE_URL environment variable must be set"))?;
        let database_max_connections = var("DATABASE_MAX_CONNECTIONS")
            .and_then(|value| value.parse::<u32>().ok())
            .unwrap_or(5);

        // Logging settings
        let log_level = match var("LOG_LEVEL").unwrap_or_else(|| "info".to_string()).as_str() {
            "trace" => Level::TRACE,
            "debug" => Level::DEBUG,
            "info" => Level::INFO,
            "warn" => Level::WARN,
            "error" => Level::ERROR,
            _ => Level::INFO,
        };

        // CORS settings
        let cors_origins = var("API_CORS_ORIGINS").map(|origins| {
            origins.split(',').map(|s| s.trim().to_string()).collect()
        });

        // Performance settings
        let request_timeout = var("API_REQUEST_TIMEOUT_SECONDS")
            .and_then(|value| value.parse::<u64>().ok())
            .unwrap_or(30);

        // Scheduling settings
        let buffer_minutes = resolve_buffer_minutes(var("APPOINTMENT_BUFFER_MINUTES").as_deref());

        Ok(Self {
            host,
            port,
            database_url,
            database_max_connections,
            log_level,
            cors_origins,
            request_timeout,
            buffer_minutes,
        })
    }

    /// Returns the server address as a string (e.g., "127.0.0.1:8080")
    pub fn server_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

//! Application configuration loaded from environment variables.
//!
//! Configuration is loaded once at startup and validated before the server
//! starts. The core treats every value here as an immutable input.
//!
//! ## Required Variables
//!
//! - `BASE_URL` - Public base URL prefixed to every generated short link,
//!   e.g. `http://short.ly`. A trailing slash is trimmed.
//! - `MAX_CONCURRENT_REQUESTS` - Admission limit: the number of encode/decode
//!   operations allowed in flight at once. Must be a positive integer.
//!
//! ## Optional Variables
//!
//! - `LISTEN` - Bind address (default: `0.0.0.0:3000`)
//! - `RUST_LOG` - Log level (default: `info`)
//! - `LOG_FORMAT` - Log format: `text` or `json` (default: `text`)

use anyhow::{Context, Result};
use std::env;

/// Service configuration loaded from environment variables.
#[derive(Debug, Clone)]
pub struct Config {
    /// Base URL for generated short links, without trailing slash.
    pub base_url: String,
    /// Maximum number of concurrently admitted encode/decode operations.
    pub max_concurrent_requests: usize,
    pub listen_addr: String,
    pub log_level: String,
    pub log_format: String,
}

impl Config {
    /// Loads configuration from environment variables.
    ///
    /// # Errors
    ///
    /// Returns an error if `BASE_URL` or `MAX_CONCURRENT_REQUESTS` is missing
    /// or unparseable.
    pub fn from_env() -> Result<Self> {
        let base_url = env::var("BASE_URL")
            .context("BASE_URL must be set")?
            .trim_end_matches('/')
            .to_string();

        let max_concurrent_requests = env::var("MAX_CONCURRENT_REQUESTS")
            .context("MAX_CONCURRENT_REQUESTS must be set")?
            .parse::<usize>()
            .context("MAX_CONCURRENT_REQUESTS must be a positive integer")?;

        let listen_addr = env::var("LISTEN").unwrap_or_else(|_| "0.0.0.0:3000".to_string());
        let log_level = env::var("RUST_LOG").unwrap_or_else(|_| "info".to_string());
        let log_format = env::var("LOG_FORMAT").unwrap_or_else(|_| "text".to_string());

        Ok(Self {
            base_url,
            max_concurrent_requests,
            listen_addr,
            log_level,
            log_format,
        })
    }

    /// Validates the configuration.
    ///
    /// # Errors
    ///
    /// Returns an error if:
    /// - `base_url` is empty or has no scheme separator
    /// - `max_concurrent_requests` is zero or unreasonably large
    /// - `log_format` is not `text` or `json`
    /// - `listen_addr` is not in `host:port` form
    pub fn validate(&self) -> Result<()> {
        if self.base_url.is_empty() {
            anyhow::bail!("BASE_URL must not be empty");
        }

        if !self.base_url.contains("://") {
            anyhow::bail!(
                "BASE_URL must include a scheme, e.g. 'http://short.ly', got '{}'",
                self.base_url
            );
        }

        if self.max_concurrent_requests == 0 {
            anyhow::bail!("MAX_CONCURRENT_REQUESTS must be at least 1");
        }

        if self.max_concurrent_requests > 1_000_000 {
            anyhow::bail!(
                "MAX_CONCURRENT_REQUESTS is too large (max: 1000000), got {}",
                self.max_concurrent_requests
            );
        }

        if self.log_format != "text" && self.log_format != "json" {
            anyhow::bail!(
                "LOG_FORMAT must be 'text' or 'json', got '{}'",
                self.log_format
            );
        }

        if !self.listen_addr.contains(':') {
            anyhow::bail!(
                "LISTEN must be in format 'host:port', got '{}'",
                self.listen_addr
            );
        }

        Ok(())
    }

    /// Prints configuration summary.
    pub fn print_summary(&self) {
        tracing::info!("Configuration loaded:");
        tracing::info!("  Listen address: {}", self.listen_addr);
        tracing::info!("  Base URL: {}", self.base_url);
        tracing::info!(
            "  Max concurrent requests: {}",
            self.max_concurrent_requests
        );
        tracing::info!("  Log level: {}", self.log_level);
        tracing::info!("  Log format: {}", self.log_format);
    }
}

/// Loads and validates configuration from environment variables.
///
/// # Errors
///
/// Returns an error if required variables are missing or validation fails.
///
/// # Note
///
/// This function expects environment variables to be already loaded
/// (e.g., via `dotenvy::dotenv()` in `main.rs`).
pub fn load_from_env() -> Result<Config> {
    let config = Config::from_env()?;
    config.validate()?;
    Ok(config)
}

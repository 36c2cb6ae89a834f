//! Configuration loader for the `ocean-guard` service.
//!
//! This module centralizes all runtime configuration values and their defaults,
//! loading from environment variables (with optional `.env` file support
//! provided by the caller). Nothing else in the crate reads `env::var`
//! directly.
//!
use std::env;
use std::net::{IpAddr, SocketAddr};

use anyhow::{anyhow, Result};

/// Parse an optional integer environment variable with a default value.
macro_rules! parse_env_u16 {
    ($var_name:expr, $default:expr) => {
        env::var($var_name)
            .ok()
            .map(|v| v.parse::<u16>())
            .transpose()
            .map_err(|e| anyhow!("Invalid {}: {}", $var_name, e))?
            .unwrap_or($default)
    };
}

/// Parse an optional boolean environment variable with a default value.
macro_rules! parse_env_bool {
    ($var_name:expr, $default:expr) => {
        match env::var($var_name).ok() {
            Some(v) => parse_flag(&v).ok_or_else(|| {
                anyhow!("Invalid {}: expected 1|true|yes|0|false|no, got {:?}", $var_name, v)
            })?,
            None => $default,
        }
    };
}

/// Strongly typed application configuration.
///
/// All fields are immutable after loading, ensuring a consistent configuration
/// snapshot for the lifetime of the application.
#[derive(Debug, Clone)]
pub struct Config {
    // ---
    /// Interface to bind the HTTP listener on.
    pub host: IpAddr,

    /// TCP port for the HTTP listener.
    pub port: u16,

    /// Load the demo reports into the store at startup.
    pub seed_demo_reports: bool,

    /// Load the demo alerts onto the board at startup.
    pub seed_demo_alerts: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            host: IpAddr::from([0, 0, 0, 0]),
            port: 8080,
            seed_demo_reports: true,
            seed_demo_alerts: true,
        }
    }
}

/// Load configuration from environment variables with defaults.
///
/// Optional:
/// - `OCEAN_GUARD_HOST` – bind address (default: 0.0.0.0)
/// - `OCEAN_GUARD_PORT` – listen port (default: 8080)
/// - `SEED_DEMO_REPORTS` – load demo reports at startup (default: true)
/// - `SEED_DEMO_ALERTS` – load demo alerts at startup (default: true)
///
/// Returns an error if any variable is set but invalid.
pub fn load_from_env() -> Result<Config> {
    // ---
    let defaults = Config::default();

    let host = match env::var("OCEAN_GUARD_HOST").ok() {
        Some(v) => v
            .parse::<IpAddr>()
            .map_err(|e| anyhow!("Invalid OCEAN_GUARD_HOST: {}", e))?,
        None => defaults.host,
    };
    let port = parse_env_u16!("OCEAN_GUARD_PORT", defaults.port);
    let seed_demo_reports = parse_env_bool!("SEED_DEMO_REPORTS", defaults.seed_demo_reports);
    let seed_demo_alerts = parse_env_bool!("SEED_DEMO_ALERTS", defaults.seed_demo_alerts);

    Ok(Config {
        host,
        port,
        seed_demo_reports,
        seed_demo_alerts,
    })
}

/// Accepts the same spellings as `FORCE_COLOR`.
fn parse_flag(value: &str) -> Option<bool> {
    // ---
    match value.trim().to_ascii_lowercase().as_str() {
        "1" | "true" | "yes" => Some(true),
        "0" | "false" | "no" => Some(false),
        _ => None,
    }
}

impl Config {
    pub fn bind_addr(&self) -> SocketAddr {
        SocketAddr::new(self.host, self.port)
    }

    /// Log the loaded configuration for debugging purposes.
    pub fn log_config(&self) {
        // ---
        tracing::info!("Configuration loaded:");
        tracing::info!("  OCEAN_GUARD_HOST  : {}", self.host);
        tracing::info!("  OCEAN_GUARD_PORT  : {}", self.port);
        tracing::info!("  SEED_DEMO_REPORTS : {}", self.seed_demo_reports);
        tracing::info!("  SEED_DEMO_ALERTS  : {}", self.seed_demo_alerts);
    }
}

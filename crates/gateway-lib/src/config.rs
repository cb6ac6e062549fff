// ============================
// crates/gateway-lib/src/config.rs
// ============================
//! Configuration management.
use std::net::SocketAddr;

use config::{Config, Environment, File};
use serde::Deserialize;

use crate::error::AppError;

/// Application settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Settings {
    /// Server bind address
    pub bind_addr: SocketAddr,
    /// Log level used when `RUST_LOG` is not set
    pub log_level: String,
    /// Credential checking settings
    pub auth: AuthSettings,
}

/// Credential checking settings
#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct AuthSettings {
    /// The single recognized submitter
    pub user: String,
    /// Shared secret the challenge digest is derived from
    pub secret: String,
    /// Accepted distance between client and server clocks, in seconds
    pub max_clock_skew_secs: u64,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            bind_addr: "127.0.0.1:3000".parse().unwrap(),
            log_level: "info".to_string(),
            auth: AuthSettings::default(),
        }
    }
}

impl Default for AuthSettings {
    fn default() -> Self {
        Self {
            user: "mina86".to_string(),
            secret: "zaq12wsx".to_string(),
            max_clock_skew_secs: 24 * 3600,
        }
    }
}

impl Settings {
    /// Load settings from the default config file and the environment
    pub fn load() -> Result<Self, AppError> {
        Self::load_from("config/default.toml")
    }

    /// Load settings from an explicit config file plus the environment
    pub fn load_from(path: &str) -> Result<Self, AppError> {
        let settings = Config::builder()
            .add_source(File::with_name(path).required(false))
            .add_source(Environment::with_prefix("MUSICGW").separator("__"))
            .build()?
            .try_deserialize()?;

        Ok(settings)
    }
}

//! Runtime configuration
//!
//! Everything is read from environment variables with sensible defaults, so
//! the server starts with no setup at all.

use crate::rescue::service::DEFAULT_PICKUP_LOCATION;
use std::{net::SocketAddr, path::PathBuf};
use thiserror::Error;

/// Socket address to bind
pub const ADDR_VAR: &str = "ANIMAL_RESCUE_ADDR";
/// Comma-separated CORS origin allow-list
pub const ALLOWED_ORIGINS_VAR: &str = "ANIMAL_RESCUE_ALLOWED_ORIGINS";
/// Pickup location printed on adoption certificates
pub const PICKUP_LOCATION_VAR: &str = "ANIMAL_RESCUE_PICKUP_LOCATION";
/// Optional JSON file replacing the built-in seed dataset
pub const SEED_FILE_VAR: &str = "ANIMAL_RESCUE_SEED_FILE";

const DEFAULT_ADDR: &str = "0.0.0.0:8000";
const DEFAULT_ALLOWED_ORIGIN: &str = "https://playground.ai.cloudflare.com";

/// Errors raised while reading configuration.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("{var} is not a valid socket address: '{value}'")]
    InvalidAddr { var: &'static str, value: String },
}

/// Which browser origins may call the server.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AllowedOrigins {
    /// `*`: any origin
    Any,
    /// Exact origins, e.g. `https://example.com`
    List(Vec<String>),
}

/// Server settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    pub addr: SocketAddr,
    pub allowed_origins: AllowedOrigins,
    pub pickup_location: String,
    pub seed_file: Option<PathBuf>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            addr: SocketAddr::from(([0, 0, 0, 0], 8000)),
            allowed_origins: AllowedOrigins::List(vec![DEFAULT_ALLOWED_ORIGIN.to_owned()]),
            pickup_location: DEFAULT_PICKUP_LOCATION.to_owned(),
            seed_file: None,
        }
    }
}

impl Config {
    /// Reads configuration from the process environment.
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Reads configuration through `lookup`, which maps a variable name to
    /// its value if set.
    pub fn from_lookup<F>(lookup: F) -> Result<Self, ConfigError>
    where
        F: Fn(&str) -> Option<String>,
    {
        // Empty values count as unset.
        let get = |key: &str| lookup(key).filter(|value| !value.trim().is_empty());

        let raw_addr = get(ADDR_VAR).unwrap_or_else(|| DEFAULT_ADDR.to_owned());
        let addr = raw_addr
            .trim()
            .parse()
            .map_err(|_| ConfigError::InvalidAddr {
                var: ADDR_VAR,
                value: raw_addr.clone(),
            })?;

        let allowed_origins = get(ALLOWED_ORIGINS_VAR)
            .map(|raw| parse_origins(&raw))
            .unwrap_or_else(|| Self::default().allowed_origins);

        Ok(Self {
            addr,
            allowed_origins,
            pickup_location: get(PICKUP_LOCATION_VAR)
                .unwrap_or_else(|| DEFAULT_PICKUP_LOCATION.to_owned()),
            seed_file: get(SEED_FILE_VAR).map(PathBuf::from),
        })
    }
}

fn parse_origins(raw: &str) -> AllowedOrigins {
    let origins: Vec<String> = raw
        .split(',')
        .map(str::trim)
        .filter(|origin| !origin.is_empty())
        .map(str::to_owned)
        .collect();

    if origins.iter().any(|origin| origin == "*") {
        AllowedOrigins::Any
    } else {
        AllowedOrigins::List(origins)
    }
}

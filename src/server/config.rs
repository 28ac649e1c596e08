use std::{collections::HashSet, net::SocketAddr};

use crate::server::error::{config::ConfigError, AppError};

const DEFAULT_BIND_ADDR: &str = "0.0.0.0:8080";

pub struct Config {
    pub database_url: String,

    /// Keys accepted in the `x-api-key` header
    pub api_keys: HashSet<String>,

    pub bind_addr: SocketAddr,
    /// Allowed CORS origin, any origin when unset
    pub cors_origin: Option<String>,
}

impl Config {
    pub fn from_env() -> Result<Self, AppError> {
        let database_url = std::env::var("DATABASE_URL")
            .map_err(|_| ConfigError::MissingEnvVar("DATABASE_URL".to_string()))?;

        let api_keys = parse_api_keys(
            &std::env::var("API_KEYS")
                .map_err(|_| ConfigError::MissingEnvVar("API_KEYS".to_string()))?,
        )?;

        let bind_addr = std::env::var("BIND_ADDR")
            .unwrap_or_else(|_| DEFAULT_BIND_ADDR.to_string())
            .parse::<SocketAddr>()
            .map_err(|e| ConfigError::InvalidEnvVar {
                name: "BIND_ADDR".to_string(),
                reason: e.to_string(),
            })?;

        let cors_origin = std::env::var("CORS_ORIGIN")
            .ok()
            .filter(|origin| !origin.trim().is_empty());

        Ok(Self {
            database_url,
            api_keys,
            bind_addr,
            cors_origin,
        })
    }
}

/// Splits a comma separated key list, ignoring blank entries.
fn parse_api_keys(value: &str) -> Result<HashSet<String>, ConfigError> {
    let keys: HashSet<String> = value
        .split(',')
        .map(str::trim)
        .filter(|key| !key.is_empty())
        .map(str::to_string)
        .collect();

    if keys.is_empty() {
        return Err(ConfigError::InvalidEnvVar {
            name: "API_KEYS".to_string(),
            reason: "at least one key is required".to_string(),
        });
    }

    Ok(keys)
}

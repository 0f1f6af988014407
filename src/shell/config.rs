// Runtime configuration read from the environment.
//
// Variables (all optional, a `.env` file is loaded first when present)
// - EVENTOS_HOST: bind address, default 0.0.0.0
// - EVENTOS_PORT: bind port, default 8080
// - EVENTOS_ENV: development | production, default production

use std::collections::HashMap;
use std::net::SocketAddr;
use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ConfigError {
    #[error("EVENTOS_PORT must be a port number, got {0:?}")]
    InvalidPort(String),

    #[error("EVENTOS_ENV must be development or production, got {0:?}")]
    InvalidEnvironment(String),

    #[error("invalid bind address {0}")]
    InvalidAddress(String),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Environment {
    Development,
    Production,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppConfig {
    pub host: String,
    pub port: u16,
    pub environment: Environment,
}

impl AppConfig {
    pub fn from_env() -> Result<Self, ConfigError> {
        Self::from_vars(&std::env::vars().collect())
    }

    pub fn from_vars(vars: &HashMap<String, String>) -> Result<Self, ConfigError> {
        let host = vars
            .get("EVENTOS_HOST")
            .cloned()
            .unwrap_or_else(|| "0.0.0.0".to_string());

        let port = match vars.get("EVENTOS_PORT") {
            Some(raw) => raw
                .trim()
                .parse()
                .map_err(|_| ConfigError::InvalidPort(raw.clone()))?,
            None => 8080,
        };

        let environment = match vars.get("EVENTOS_ENV").map(|v| v.trim().to_lowercase()) {
            None => Environment::Production,
            Some(v) if v == "development" => Environment::Development,
            Some(v) if v == "production" => Environment::Production,
            Some(v) => return Err(ConfigError::InvalidEnvironment(v)),
        };

        Ok(Self {
            host,
            port,
            environment,
        })
    }

    pub fn socket_addr(&self) -> Result<SocketAddr, ConfigError> {
        let raw = format!("{}:{}", self.host, self.port);
        raw.parse().map_err(|_| ConfigError::InvalidAddress(raw))
    }
}

//! Host configuration from the environment
//!
//! Only the binaries read this; the library core takes no configuration.

use crate::error::BotError;
use crate::Result;
use std::env;

const DEFAULT_PORT: &str = "8080";
const DEFAULT_BIND_ADDR: &str = "0.0.0.0";
const DEFAULT_LOG_LEVEL: &str = "info";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct HostConfig {
    pub bind_addr: String,
    pub port: u16,
    pub log_level: String,
}

impl HostConfig {
    /// Load `.env` if present, then read `PORT`/`API_PORT`, `BIND_ADDR` and `LOG_LEVEL`.
    pub fn from_env() -> Result<Self> {
        dotenv::dotenv().ok();
        Self::from_lookup(|key| env::var(key).ok())
    }

    pub fn from_lookup<F>(lookup: F) -> Result<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let raw_port = lookup("PORT")
            .or_else(|| lookup("API_PORT"))
            .unwrap_or_else(|| DEFAULT_PORT.to_string());

        let port = raw_port
            .trim()
            .parse::<u16>()
            .map_err(|_| BotError::Config(format!("invalid port: {:?}", raw_port)))?;

        Ok(Self {
            bind_addr: lookup("BIND_ADDR").unwrap_or_else(|| DEFAULT_BIND_ADDR.to_string()),
            port,
            log_level: lookup("LOG_LEVEL").unwrap_or_else(|| DEFAULT_LOG_LEVEL.to_string()),
        })
    }

    pub fn listen_addr(&self) -> String {
        format!("{}:{}", self.bind_addr, self.port)
    }
}

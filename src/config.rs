//! Configuration types.

use crate::error::ConfigError;

/// Gateway configuration, read from the environment at startup.
#[derive(Debug, Clone)]
pub struct GatewayConfig {
    /// Interface to bind.
    pub host: String,
    /// TCP port to bind.
    pub port: u16,
}

impl Default for GatewayConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8084,
        }
    }
}

impl GatewayConfig {
    /// Read configuration from `LLM_GATEWAY_HOST` / `LLM_GATEWAY_PORT`.
    ///
    /// Unset variables fall back to defaults; a port that is set but
    /// unparsable is an error rather than a silent fallback.
    pub fn from_env() -> Result<Self, ConfigError> {
        let defaults = Self::default();

        let host = std::env::var("LLM_GATEWAY_HOST").unwrap_or(defaults.host);

        let port = match std::env::var("LLM_GATEWAY_PORT") {
            Ok(raw) => raw.parse().map_err(|_| ConfigError::InvalidValue {
                key: "LLM_GATEWAY_PORT".to_string(),
                message: format!("not a valid port: {raw}"),
            })?,
            Err(_) => defaults.port,
        };

        Ok(Self { host, port })
    }

    /// Socket address string for the TCP listener.
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

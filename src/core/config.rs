//! Configuration management for the MCP server.
//!
//! This module provides a centralized configuration structure that can be
//! populated from environment variables, configuration files, or defaults.

use super::transport::TransportConfig;
use serde::{Deserialize, Serialize};
use tracing::info;

/// Main configuration structure for the MCP server.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Config {
    /// Server identification and metadata.
    pub server: ServerConfig,

    /// Maps provider configuration.
    pub maps: MapsConfig,

    /// Logging configuration.
    pub logging: LoggingConfig,

    /// Transport configuration.
    pub transport: TransportConfig,

    /// External API credentials configuration.
    pub credentials: CredentialsConfig,
}

/// Server identification configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ServerConfig {
    /// The name of the server as reported to clients.
    pub name: String,

    /// The version of the server.
    pub version: String,
}

/// Configuration for the maps provider.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MapsConfig {
    /// Default language for provider responses, sent with every call.
    pub language: String,
}

/// Logging configuration.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LoggingConfig {
    /// Log level filter (e.g., "info", "debug", "trace").
    pub level: String,
}

/// Configuration for external API credentials.
#[derive(Clone, Serialize, Deserialize)]
pub struct CredentialsConfig {
    /// Google Maps API key. Required; the server refuses to start without
    /// one. Set via the GOOGLE_MAPS_API_KEY environment variable.
    pub google_maps_api_key: Option<String>,
}

/// Custom Debug implementation to redact secrets from logs.
impl std::fmt::Debug for CredentialsConfig {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CredentialsConfig")
            .field(
                "google_maps_api_key",
                &self.google_maps_api_key.as_ref().map(|_| "[REDACTED]"),
            )
            .finish()
    }
}

impl Default for MapsConfig {
    fn default() -> Self {
        Self {
            // Matches the upstream service this server was built for.
            language: "zh-TW".to_string(),
        }
    }
}

impl Default for CredentialsConfig {
    fn default() -> Self {
        Self {
            google_maps_api_key: None,
        }
    }
}

impl Default for Config {
    fn default() -> Self {
        Self {
            server: ServerConfig {
                name: "maps-mcp-server".to_string(),
                version: env!("CARGO_PKG_VERSION").to_string(),
            },
            maps: MapsConfig::default(),
            logging: LoggingConfig {
                level: "info".to_string(),
            },
            transport: TransportConfig::default(),
            credentials: CredentialsConfig::default(),
        }
    }
}

impl Config {
    /// Create a new configuration with default values.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load configuration from environment variables.
    ///
    /// Server settings are prefixed with `MCP_` (e.g. `MCP_SERVER_NAME`,
    /// `MCP_LOG_LEVEL`, `MCP_MAPS_LANGUAGE`); the credential uses the
    /// conventional `GOOGLE_MAPS_API_KEY`.
    pub fn from_env() -> Self {
        dotenvy::dotenv().ok();

        let mut config = Self::default();

        if let Ok(name) = std::env::var("MCP_SERVER_NAME") {
            config.server.name = name;
        }

        if let Ok(level) = std::env::var("MCP_LOG_LEVEL") {
            config.logging.level = level;
        }

        if let Ok(language) = std::env::var("MCP_MAPS_LANGUAGE") {
            config.maps.language = language;
        }

        config.transport = TransportConfig::from_env();

        if let Ok(api_key) = std::env::var("GOOGLE_MAPS_API_KEY") {
            config.credentials.google_maps_api_key = Some(api_key);
            info!("Google Maps API key loaded from environment");
        }

        config
    }
}

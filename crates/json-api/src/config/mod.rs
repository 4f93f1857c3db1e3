//! Server configuration module

use clap::Parser;

use crate::config::{
    observability::{LoggingConfig, ObservabilityConfig},
    server::ServerRuntimeConfig,
    store::StoreConfig,
};

pub(crate) mod observability;
pub(crate) mod server;
pub(crate) mod store;

/// Shopfront JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "shopfront-json", about = "Shopfront JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ServerRuntimeConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Observability (traces/metrics) settings.
    #[command(flatten)]
    pub observability: ObservabilityConfig,

    /// Backing store settings.
    #[command(flatten)]
    pub store: StoreConfig,
}

impl ServerConfig {
    /// Load configuration from environment and CLI arguments
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        // Load .env file if present (ignore if missing)
        _ = dotenvy::dotenv();

        Self::try_parse()
    }

    /// Get the socket address for binding
    #[must_use]
    pub fn socket_addr(&self) -> String {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use super::*;

    #[test]
    fn defaults_to_an_unseeded_in_memory_store() -> TestResult {
        let config = ServerConfig::try_parse_from(["shopfront-json"])?;

        assert_eq!(config.socket_addr(), "0.0.0.0:8698");
        assert!(config.store.database_url.is_none());
        assert!(config.store.seed_file.is_none());
        assert!(!config.observability.otel_enabled);

        Ok(())
    }

    #[test]
    fn flags_override_defaults() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "shopfront-json",
            "--port",
            "9000",
            "--seed-file",
            "seed.yaml",
            "--log-format",
            "json",
        ])?;

        assert_eq!(config.server.port, 9000);
        assert_eq!(
            config.store.seed_file.as_deref(),
            Some(std::path::Path::new("seed.yaml"))
        );

        Ok(())
    }
}

//! Server configuration module

use std::net::SocketAddr;

use clap::Parser;

use crate::config::{
    catalog::CatalogConfig, coupons::CouponsConfig, logging::LoggingConfig,
    server::ListenConfig,
};

pub(crate) mod catalog;
pub(crate) mod coupons;
pub(crate) mod logging;
pub(crate) mod server;

/// Coupons JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "coupons-json", about = "Coupons JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// Server network settings.
    #[command(flatten)]
    pub server: ListenConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Product catalog settings.
    #[command(flatten)]
    pub catalog: CatalogConfig,

    /// Coupon store settings.
    #[command(flatten)]
    pub coupons: CouponsConfig,
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
    pub fn socket_addr(&self) -> SocketAddr {
        self.server.socket_addr()
    }
}

#[cfg(test)]
mod tests {
    use testresult::TestResult;

    use crate::config::logging::LogFormat;

    use super::*;

    #[test]
    fn parses_flags_into_groups() -> TestResult {
        let config = ServerConfig::try_parse_from([
            "coupons-json",
            "--host",
            "127.0.0.1",
            "--port",
            "9000",
            "--log-format",
            "json",
            "--catalog-max-product-id",
            "25",
            "--catalog-price-step",
            "5",
            "--coupons-seed",
            "seed.yml",
        ])?;

        assert_eq!(config.socket_addr().to_string(), "127.0.0.1:9000");
        assert!(matches!(config.logging.log_format, LogFormat::Json));
        assert_eq!(config.catalog.max_product_id, 25);
        assert_eq!(config.catalog.price_step, 5);
        assert_eq!(
            config.coupons.seed.as_deref().and_then(|path| path.to_str()),
            Some("seed.yml")
        );

        Ok(())
    }
}

//! Server configuration.
//!
//! All settings are explicit constructor inputs resolved once at startup;
//! nothing reads process-wide state after this point.

use clap::Parser;

use crate::config::{
    db::DatabaseConfig, logging::LoggingConfig, server::HttpConfig, throttle::ThrottleConfig,
};

pub(crate) mod db;
pub(crate) mod logging;
pub(crate) mod server;
pub(crate) mod throttle;

/// Atrium JSON API Server configuration
#[derive(Debug, Parser)]
#[command(name = "atrium-json", about = "Atrium JSON API Server", long_about = None)]
pub struct ServerConfig {
    /// HTTP listener settings.
    #[command(flatten)]
    pub http: HttpConfig,

    /// Logging output settings.
    #[command(flatten)]
    pub logging: LoggingConfig,

    /// Application database settings.
    #[command(flatten)]
    pub database: DatabaseConfig,

    /// Mutation throttling settings.
    #[command(flatten)]
    pub throttle: ThrottleConfig,
}

impl ServerConfig {
    /// Load configuration from `.env`, the environment, and CLI arguments.
    ///
    /// # Errors
    ///
    /// Returns an error if configuration cannot be parsed
    pub fn load() -> Result<Self, clap::Error> {
        _ = dotenvy::dotenv();

        Self::try_parse()
    }
}

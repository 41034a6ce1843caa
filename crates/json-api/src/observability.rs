//! Logging subscriber initialisation.

use tracing_subscriber::EnvFilter;

use crate::config::logging::{LogFormat, LoggingConfig};

pub(crate) fn init_logging(config: &LoggingConfig) {
    let filter =
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(&config.log_level));

    match config.log_format {
        LogFormat::Compact => tracing_subscriber::fmt()
            .compact()
            .with_target(true)
            .with_env_filter(filter)
            .init(),
        LogFormat::Json => tracing_subscriber::fmt()
            .json()
            .with_current_span(true)
            .with_target(true)
            .with_env_filter(filter)
            .init(),
    }
}

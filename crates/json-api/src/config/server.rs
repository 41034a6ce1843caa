//! HTTP listener configuration.

use clap::Args;

/// Network settings for the HTTP listener.
#[derive(Debug, Args)]
pub struct HttpConfig {
    /// Address the server listens on
    #[arg(short = 'H', long, env = "SERVER_HOST", default_value = "0.0.0.0")]
    pub host: String,

    /// Port the server listens on
    #[arg(short, long, env = "SERVER_PORT", default_value = "8640")]
    pub port: u16,
}

impl HttpConfig {
    /// `host:port` string handed to the TCP listener.
    #[must_use]
    pub fn bind_addr(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }
}

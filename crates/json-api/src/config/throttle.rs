//! Throttle Config

use std::time::Duration;

use atrium_app::throttle::ThrottleGate;
use clap::Args;

/// Mutation throttling settings.
///
/// Counters are scoped per workspace, user, and operation; the limit applies
/// within a fixed window. A limit of 0 disables throttling.
#[derive(Debug, Args)]
pub struct ThrottleConfig {
    /// Mutations allowed per window for each workspace/user/operation tuple
    #[arg(long, env = "THROTTLE_MUTATION_LIMIT", default_value = "10")]
    pub mutation_limit: u32,

    /// Throttle window length in seconds
    #[arg(long, env = "THROTTLE_WINDOW_SECS", default_value = "3600")]
    pub window_secs: u64,
}

impl ThrottleConfig {
    /// Builds the gate shared by all throttled routes.
    #[must_use]
    pub fn gate(&self) -> ThrottleGate {
        ThrottleGate::new(self.mutation_limit, Duration::from_secs(self.window_secs))
    }
}

//! Shutdown handling.
//!
//! On SIGTERM or Ctrl-C the server stops accepting connections and drains
//! in-flight requests instead of dropping them.

use std::{io, time::Duration};

use salvo::server::ServerHandle;
use tokio::signal;
use tracing::info;

/// How long in-flight requests may take to finish once a signal arrives.
const DRAIN_TIMEOUT: Duration = Duration::from_secs(20);

pub(crate) async fn listen(handle: ServerHandle) -> io::Result<()> {
    let received = wait_for_signal().await?;

    info!("{received} received, draining connections");

    handle.stop_graceful(DRAIN_TIMEOUT);

    Ok(())
}

#[cfg(unix)]
async fn wait_for_signal() -> io::Result<&'static str> {
    let mut sigterm = signal::unix::signal(signal::unix::SignalKind::terminate())?;

    tokio::select! {
        result = signal::ctrl_c() => result.map(|()| "ctrl_c"),
        _ = sigterm.recv() => Ok("SIGTERM"),
    }
}

#[cfg(not(unix))]
async fn wait_for_signal() -> io::Result<&'static str> {
    signal::ctrl_c().await.map(|()| "ctrl_c")
}

// Signal handling module
//
// Supported signals:
// - SIGTERM: Graceful shutdown
// - SIGINT:  Graceful shutdown (Ctrl+C)

use tokio::sync::watch;

use crate::logger;

/// Register SIGTERM/SIGINT and flip `shutdown` to `true` on the first one.
///
/// Registration happens before returning so a failure surfaces as a
/// startup error instead of a server that cannot be stopped.
#[cfg(unix)]
pub fn spawn_signal_handler(shutdown: watch::Sender<bool>) -> std::io::Result<()> {
    use tokio::signal::unix::{signal, SignalKind};

    let mut sigterm = signal(SignalKind::terminate())?;
    let mut sigint = signal(SignalKind::interrupt())?;

    tokio::spawn(async move {
        let name = tokio::select! {
            _ = sigterm.recv() => "SIGTERM",
            _ = sigint.recv() => "SIGINT",
        };
        logger::log_signal_received(name);
        let _ = shutdown.send(true);
    });
    Ok(())
}

/// Non-unix fallback - only handles Ctrl+C
#[cfg(not(unix))]
pub fn spawn_signal_handler(shutdown: watch::Sender<bool>) -> std::io::Result<()> {
    tokio::spawn(async move {
        match tokio::signal::ctrl_c().await {
            Ok(()) => {
                logger::log_signal_received("Ctrl+C");
                let _ = shutdown.send(true);
            }
            Err(e) => {
                logger::log_error(&format!("Failed to listen for Ctrl+C: {e}"));
                // Dropping the sender would stop the server
                shutdown.closed().await;
            }
        }
    });
    Ok(())
}

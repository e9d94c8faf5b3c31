//! Ctrl+C / SIGTERM become an orderly [`Message::Quit`], so the terminal is
//! restored by the normal shutdown path rather than by the default handler.

use std::fmt;

use tokio::sync::mpsc;

use ptracker_core::prelude::*;

use crate::message::Message;

/// Which OS request ended the session
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ShutdownSignal {
    Interrupt,
    Terminate,
}

impl fmt::Display for ShutdownSignal {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            ShutdownSignal::Interrupt => "interrupt",
            ShutdownSignal::Terminate => "terminate",
        })
    }
}

/// Forward the first shutdown signal to the update loop as a quit
pub fn spawn_signal_handler(tx: mpsc::Sender<Message>) {
    tokio::spawn(async move {
        let signal = match wait_for_shutdown().await {
            Ok(signal) => signal,
            Err(e) => {
                warn!("Signal handling unavailable, only the quit key will exit: {}", e);
                return;
            }
        };

        info!("Received {} signal, quitting", signal);
        if tx.send(Message::Quit).await.is_err() {
            debug!("Update loop already gone when {} arrived", signal);
        }
    });
}

#[cfg(unix)]
async fn wait_for_shutdown() -> Result<ShutdownSignal> {
    use tokio::signal::unix::{signal, SignalKind};

    let listen = |kind: SignalKind, name: &str| {
        signal(kind).map_err(|e| Error::terminal(format!("Cannot listen for {}: {}", name, e)))
    };
    let mut interrupt = listen(SignalKind::interrupt(), "SIGINT")?;
    let mut terminate = listen(SignalKind::terminate(), "SIGTERM")?;

    Ok(tokio::select! {
        _ = interrupt.recv() => ShutdownSignal::Interrupt,
        _ = terminate.recv() => ShutdownSignal::Terminate,
    })
}

#[cfg(windows)]
async fn wait_for_shutdown() -> Result<ShutdownSignal> {
    tokio::signal::ctrl_c()
        .await
        .map_err(|e| Error::terminal(format!("Cannot listen for Ctrl+C: {}", e)))?;
    Ok(ShutdownSignal::Interrupt)
}

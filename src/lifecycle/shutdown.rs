//! Shutdown coordination for the host shell.

use serde::Serialize;
use tokio::sync::broadcast;

/// Why the shell is stopping.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ShutdownReason {
    /// SIGINT / Ctrl-C.
    Interrupt,
    /// Requested by the embedding code.
    Requested,
}

/// Fan-out of a single stop request to every running loop.
#[derive(Debug, Clone)]
pub struct Shutdown {
    tx: broadcast::Sender<ShutdownReason>,
}

impl Shutdown {
    pub fn new() -> Self {
        let (tx, _) = broadcast::channel(1);
        Self { tx }
    }

    /// Receiver that yields the reason once shutdown is triggered.
    pub fn subscribe(&self) -> broadcast::Receiver<ShutdownReason> {
        self.tx.subscribe()
    }

    /// Ask every subscriber to stop. Loops that subscribe later are unaffected.
    pub fn trigger(&self, reason: ShutdownReason) {
        let notified = self.tx.send(reason).unwrap_or(0);
        tracing::debug!(?reason, notified, "Shutdown triggered");
    }
}

impl Default for Shutdown {
    fn default() -> Self {
        Self::new()
    }
}

//! Router input events and change notifications.
//!
//! # Responsibilities
//! - Queue navigation requests and history-change reports in FIFO order
//! - Describe each state transition for subscribers
//!
//! # Design Decisions
//! - One unbounded queue per router; the event loop drains it via
//!   `Router::process_pending`, so requests issued while a transition is being
//!   handled run after it, never inside it
//! - Senders never fail loudly: a dropped router just discards new events

use serde::Serialize;
use tokio::sync::mpsc;

use crate::routing::router::{NavigationMode, NavigationTarget, RouterSnapshot};

/// Work item for the router's event loop.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum RouterEvent {
    /// The host changed the fragment (back/forward, edited URL).
    HistoryChanged,
    /// Navigation requested by a view or by the router's own redirect policy.
    Navigate {
        target: NavigationTarget,
        mode: NavigationMode,
    },
}

/// Cloneable entry point into the router's event queue.
#[derive(Debug, Clone)]
pub struct RouterHandle {
    tx: mpsc::UnboundedSender<RouterEvent>,
}

impl RouterHandle {
    pub(crate) fn new(tx: mpsc::UnboundedSender<RouterEvent>) -> Self {
        Self { tx }
    }

    /// Report that the host's fragment changed. Returns false once the router
    /// is gone.
    pub fn history_changed(&self) -> bool {
        self.send(RouterEvent::HistoryChanged)
    }

    /// Queue a navigation. Failures are logged when the queue is drained.
    pub fn navigate(&self, target: impl Into<NavigationTarget>, mode: NavigationMode) {
        self.send(RouterEvent::Navigate {
            target: target.into(),
            mode,
        });
    }

    fn send(&self, event: RouterEvent) -> bool {
        if self.tx.send(event).is_err() {
            tracing::debug!("Router dropped, discarding event");
            return false;
        }
        true
    }
}

/// What caused a transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ChangeCause {
    Push,
    Replace,
    History,
}

impl From<NavigationMode> for ChangeCause {
    fn from(mode: NavigationMode) -> Self {
        match mode {
            NavigationMode::Push => ChangeCause::Push,
            NavigationMode::Replace => ChangeCause::Replace,
        }
    }
}

/// Notification delivered to subscribers on every transition.
#[derive(Debug, Clone, Serialize)]
pub struct RouteChange {
    pub previous: RouterSnapshot,
    pub current: RouterSnapshot,
    pub cause: ChangeCause,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_enqueues_in_order() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let handle = RouterHandle::new(tx);

        handle.navigate("settings", NavigationMode::Push);
        assert!(handle.history_changed());

        assert_eq!(
            rx.try_recv().unwrap(),
            RouterEvent::Navigate {
                target: NavigationTarget::Name("settings".into()),
                mode: NavigationMode::Push,
            }
        );
        assert_eq!(rx.try_recv().unwrap(), RouterEvent::HistoryChanged);
        assert!(rx.try_recv().is_err());
    }

    #[test]
    fn test_send_after_receiver_dropped() {
        let (tx, rx) = mpsc::unbounded_channel();
        let handle = RouterHandle::new(tx);
        drop(rx);
        assert!(!handle.history_changed());
    }

    #[test]
    fn test_cause_from_mode() {
        assert_eq!(ChangeCause::from(NavigationMode::Push), ChangeCause::Push);
        assert_eq!(ChangeCause::from(NavigationMode::Replace), ChangeCause::Replace);
    }
}

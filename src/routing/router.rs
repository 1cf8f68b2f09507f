//! Router: binds a route table to the host's history.
//!
//! # States
//! - Ready: the current fragment resolves to a route
//! - Unresolved: the current fragment matches no route (degraded, not an error)
//!
//! # State Transitions
//! ```text
//! (construction)  → Ready(route) | Unresolved(path)
//! navigate_to ok  → Ready(target), one history entry pushed or replaced
//! navigate_to err → unchanged
//! history change  → Ready(resolved) | Unresolved(path)
//! ```
//!
//! # Design Decisions
//! - Sole owner of router state; consumers get owned snapshots
//! - Synchronous: navigate_to has updated state before it returns
//! - Every transition is broadcast to subscribers, in order
//! - Host-driven changes and queued requests share one FIFO queue

use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

use serde::{Deserialize, Serialize};
use tokio::sync::{broadcast, mpsc};

use crate::config::{RouterSettings, UnresolvedPolicy};
use crate::history::History;
use crate::routing::error::{NavigationError, NavigationResult};
use crate::routing::event::{ChangeCause, RouteChange, RouterEvent, RouterHandle};
use crate::routing::fragment::{fragment_for_path, path_from_fragment};
use crate::routing::table::{RouteDefinition, RouteTable};

/// How a navigation updates the history stack.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum NavigationMode {
    /// New entry; back returns to the previous route.
    #[default]
    Push,
    /// Overwrite the current entry.
    Replace,
}

impl FromStr for NavigationMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "push" => Ok(NavigationMode::Push),
            "replace" => Ok(NavigationMode::Replace),
            other => Err(format!("unknown navigation mode `{other}`")),
        }
    }
}

/// Navigation target, by symbolic name or by literal path.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "lowercase")]
pub enum NavigationTarget {
    Name(String),
    Path(String),
}

impl NavigationTarget {
    /// Interpret user input: `#/x` is a fragment, `/x` a path, anything else a name.
    pub fn parse(input: &str) -> Self {
        if input.starts_with('#') {
            NavigationTarget::Path(path_from_fragment(input).to_string())
        } else if input.starts_with('/') {
            NavigationTarget::Path(input.to_string())
        } else {
            NavigationTarget::Name(input.to_string())
        }
    }
}

impl From<&str> for NavigationTarget {
    fn from(input: &str) -> Self {
        Self::parse(input)
    }
}

impl From<&RouteDefinition> for NavigationTarget {
    fn from(route: &RouteDefinition) -> Self {
        NavigationTarget::Name(route.name.clone())
    }
}

impl fmt::Display for NavigationTarget {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            NavigationTarget::Name(name) => write!(f, "name `{name}`"),
            NavigationTarget::Path(path) => write!(f, "path `{path}`"),
        }
    }
}

/// Whether the current fragment resolved to a route.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum RouteStatus {
    Ready,
    Unresolved,
}

/// Immutable copy of router state.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct RouterSnapshot {
    /// Path portion of the active history entry.
    pub current_path: String,
    /// Route matching `current_path`; `None` while unresolved.
    pub current_route: Option<RouteDefinition>,
    /// `Ready` exactly when `current_route` is set.
    pub status: RouteStatus,
    /// Incremented on every transition.
    pub revision: u64,
}

impl RouterSnapshot {
    fn new(current_path: String, current_route: Option<RouteDefinition>, revision: u64) -> Self {
        let status = match current_route {
            Some(_) => RouteStatus::Ready,
            None => RouteStatus::Unresolved,
        };
        Self {
            current_path,
            current_route,
            status,
            revision,
        }
    }

    pub fn route_name(&self) -> Option<&str> {
        self.current_route.as_ref().map(|r| r.name.as_str())
    }
}

/// Construction-time router options.
#[derive(Debug, Clone)]
pub struct RouterOptions {
    /// What to do when the fragment matches no route.
    pub unresolved: UnresolvedPolicy,
    /// Buffered changes per subscriber before it starts lagging.
    pub notify_capacity: usize,
}

impl Default for RouterOptions {
    fn default() -> Self {
        Self {
            unresolved: UnresolvedPolicy::Degrade,
            notify_capacity: 16,
        }
    }
}

impl From<&RouterSettings> for RouterOptions {
    fn from(settings: &RouterSettings) -> Self {
        Self {
            unresolved: settings.unresolved.clone(),
            notify_capacity: settings.notify_capacity,
        }
    }
}

/// Hash-history router.
pub struct Router<H: History> {
    table: Arc<RouteTable>,
    history: H,
    options: RouterOptions,
    state: RouterSnapshot,
    changes: broadcast::Sender<RouteChange>,
    events_tx: mpsc::UnboundedSender<RouterEvent>,
    events_rx: mpsc::UnboundedReceiver<RouterEvent>,
}

impl<H: History> Router<H> {
    /// Bind `table` to `history` and resolve the current fragment.
    pub fn new(table: Arc<RouteTable>, mut history: H, options: RouterOptions) -> Self {
        let (events_tx, events_rx) = mpsc::unbounded_channel();
        history.listen(RouterHandle::new(events_tx.clone()));

        let (changes, _) = broadcast::channel(options.notify_capacity.max(1));

        let fragment = history.fragment();
        let current_path = path_from_fragment(&fragment).to_string();
        let current_route = table.resolve_by_path(&current_path).cloned();

        let mut router = Self {
            table,
            history,
            options,
            state: RouterSnapshot::new(current_path, current_route, 0),
            changes,
            events_tx,
            events_rx,
        };

        tracing::info!(
            fragment = %fragment,
            route = router.state.route_name().unwrap_or("<none>"),
            routes = router.table.len(),
            "Router ready"
        );

        if router.state.current_route.is_none() {
            router.on_unresolved();
            router.process_pending();
        }

        router
    }

    /// Navigate to a route by name or path.
    ///
    /// On success exactly one history entry has been pushed or replaced and
    /// the returned snapshot is already the router's state.
    pub fn navigate_to(
        &mut self,
        target: impl Into<NavigationTarget>,
        mode: NavigationMode,
    ) -> NavigationResult<RouterSnapshot> {
        let target = target.into();
        let route = match self.resolve_target(&target) {
            Some(route) => route.clone(),
            None => {
                tracing::debug!(%target, "Navigation target not found");
                return Err(NavigationError::NoMatch { target });
            }
        };

        let fragment = fragment_for_path(&route.path);
        match mode {
            NavigationMode::Push => self.history.push_fragment(&fragment),
            NavigationMode::Replace => self.history.replace_fragment(&fragment),
        }

        Ok(self.transition(route.path.clone(), Some(route), mode.into()))
    }

    /// Copy of the current state.
    pub fn current_route_snapshot(&self) -> RouterSnapshot {
        self.state.clone()
    }

    /// Receive every subsequent transition.
    pub fn subscribe(&self) -> broadcast::Receiver<RouteChange> {
        self.changes.subscribe()
    }

    /// Queue endpoint for views and host callbacks.
    pub fn handle(&self) -> RouterHandle {
        RouterHandle::new(self.events_tx.clone())
    }

    /// Re-read the host fragment now, then drain the queue.
    pub fn handle_history_change(&mut self) -> RouterSnapshot {
        self.apply_history_change();
        self.process_pending();
        self.current_route_snapshot()
    }

    /// Drain queued events in order. Events queued while draining (redirects,
    /// navigations requested by a subscriber) run after the one that caused
    /// them. Returns the number of events handled.
    pub fn process_pending(&mut self) -> usize {
        let mut processed = 0;
        while let Ok(event) = self.events_rx.try_recv() {
            processed += 1;
            match event {
                RouterEvent::HistoryChanged => self.apply_history_change(),
                RouterEvent::Navigate { target, mode } => {
                    if let Err(e) = self.navigate_to(target, mode) {
                        tracing::warn!(error = %e, "Queued navigation dropped");
                    }
                }
            }
        }
        processed
    }

    /// Move `delta` entries through history. Returns false when there is no
    /// such entry.
    pub fn go(&mut self, delta: isize) -> bool {
        if !self.history.go(delta) {
            tracing::debug!(delta = delta as i64, "History move out of range");
            return false;
        }
        self.handle_history_change();
        true
    }

    pub fn back(&mut self) -> bool {
        self.go(-1)
    }

    pub fn forward(&mut self) -> bool {
        self.go(1)
    }

    /// Fragment a navigation to `target` would produce, without navigating.
    pub fn href(&self, target: impl Into<NavigationTarget>) -> NavigationResult<String> {
        let target = target.into();
        match self.resolve_target(&target) {
            Some(route) => Ok(fragment_for_path(&route.path)),
            None => Err(NavigationError::NoMatch { target }),
        }
    }

    pub fn table(&self) -> &RouteTable {
        &self.table
    }

    pub fn history(&self) -> &H {
        &self.history
    }

    fn resolve_target(&self, target: &NavigationTarget) -> Option<&RouteDefinition> {
        match target {
            NavigationTarget::Name(name) => self.table.resolve_by_name(name),
            NavigationTarget::Path(path) => self.table.resolve_by_path(path),
        }
    }

    fn apply_history_change(&mut self) {
        let fragment = self.history.fragment();
        let path = path_from_fragment(&fragment);
        if path == self.state.current_path {
            tracing::debug!(path, "History change kept the current path");
            return;
        }

        let route = self.table.resolve_by_path(path).cloned();
        let unresolved = route.is_none();
        self.transition(path.to_string(), route, ChangeCause::History);
        if unresolved {
            self.on_unresolved();
        }
    }

    fn on_unresolved(&self) {
        tracing::warn!(path = %self.state.current_path, "No route matches fragment");
        if let UnresolvedPolicy::Redirect { route } = &self.options.unresolved {
            tracing::info!(route = %route, "Redirecting unresolved fragment");
            self.handle()
                .navigate(NavigationTarget::Name(route.clone()), NavigationMode::Replace);
        }
    }

    fn transition(
        &mut self,
        path: String,
        route: Option<RouteDefinition>,
        cause: ChangeCause,
    ) -> RouterSnapshot {
        let current = RouterSnapshot::new(path, route, self.state.revision + 1);
        let previous = std::mem::replace(&mut self.state, current.clone());

        tracing::info!(
            path = %current.current_path,
            route = current.route_name().unwrap_or("<none>"),
            cause = ?cause,
            revision = current.revision,
            "Route changed"
        );

        // Err only means nobody is subscribed.
        let _ = self.changes.send(RouteChange {
            previous,
            current: current.clone(),
            cause,
        });

        current
    }
}

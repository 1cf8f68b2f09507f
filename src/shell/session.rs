//! Shell session: executes commands against a router and its history.

use serde_json::{json, Value};
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt};
use tokio::sync::broadcast;

use crate::history::MemoryHistory;
use crate::lifecycle::ShutdownReason;
use crate::routing::{RouteChange, Router};
use crate::shell::command::Command;

/// A router plus the host-side handle on its history.
pub struct Session {
    router: Router<MemoryHistory>,
    history: MemoryHistory,
    changes: broadcast::Receiver<RouteChange>,
}

impl Session {
    pub fn new(router: Router<MemoryHistory>, history: MemoryHistory) -> Self {
        let changes = router.subscribe();
        Self {
            router,
            history,
            changes,
        }
    }

    pub fn router(&self) -> &Router<MemoryHistory> {
        &self.router
    }

    /// Execute one command and describe the outcome.
    pub fn execute(&mut self, command: Command) -> Value {
        let mut reply = match command {
            Command::Navigate { target, mode } => match self.router.navigate_to(target, mode) {
                Ok(snapshot) => json!({ "snapshot": snapshot }),
                Err(e) => json!({ "error": e.to_string(), "target": e.target() }),
            },
            Command::Go(delta) => {
                let moved = self.router.go(delta);
                json!({ "moved": moved, "snapshot": self.router.current_route_snapshot() })
            }
            Command::Hash(fragment) => {
                self.history.set_fragment(&fragment);
                self.router.process_pending();
                json!({ "snapshot": self.router.current_route_snapshot() })
            }
            Command::Href(target) => match self.router.href(target) {
                Ok(href) => json!({ "href": href }),
                Err(e) => json!({ "error": e.to_string(), "target": e.target() }),
            },
            Command::Show => json!({
                "snapshot": self.router.current_route_snapshot(),
                "history": self.history.entries(),
                "position": self.history.position(),
            }),
            Command::Routes => {
                let routes: Vec<_> = self.router.table().routes().collect();
                json!({ "routes": routes })
            }
        };

        let changes = self.drain_changes();
        if let Some(object) = reply.as_object_mut() {
            object.insert("changes".to_string(), Value::Array(changes));
        }
        reply
    }

    /// Read commands until EOF or shutdown, answering each with one JSON line.
    /// Returns the number of commands handled.
    pub async fn run<R, W>(
        &mut self,
        input: R,
        mut output: W,
        mut shutdown: broadcast::Receiver<ShutdownReason>,
    ) -> std::io::Result<usize>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        let mut handled = 0;

        loop {
            tokio::select! {
                Ok(reason) = shutdown.recv() => {
                    tracing::info!(?reason, "Shell stopping");
                    break;
                }
                line = lines.next_line() => {
                    let Some(line) = line? else { break };
                    let line = line.trim();
                    if line.is_empty() {
                        continue;
                    }

                    let reply = match line.parse::<Command>() {
                        Ok(command) => {
                            tracing::debug!(command = ?command, "Executing");
                            self.execute(command)
                        }
                        Err(e) => json!({ "error": e.to_string() }),
                    };

                    output.write_all(serde_json::to_string(&reply)?.as_bytes()).await?;
                    output.write_all(b"\n").await?;
                    handled += 1;
                }
            }
        }

        output.flush().await?;
        Ok(handled)
    }

    fn drain_changes(&mut self) -> Vec<Value> {
        let mut drained = Vec::new();
        loop {
            match self.changes.try_recv() {
                Ok(change) => drained.push(json!({
                    "cause": change.cause,
                    "from": change.previous.current_path,
                    "to": change.current.current_path,
                    "route": change.current.route_name(),
                })),
                Err(broadcast::error::TryRecvError::Lagged(skipped)) => {
                    tracing::warn!(skipped, "Shell fell behind route changes");
                }
                Err(_) => break,
            }
        }
        drained
    }
}

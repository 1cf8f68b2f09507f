//! Shared fixtures for integration tests.

use std::path::PathBuf;
use std::sync::Arc;

use meeting_router::routing::{RouteDefinition, RouteTable, Router, RouterOptions};
use meeting_router::MemoryHistory;

/// The application's route table: meeting at `/`, settings at `/settings`.
#[allow(dead_code)]
pub fn meeting_table() -> Arc<RouteTable> {
    Arc::new(
        RouteTable::build(vec![
            RouteDefinition::new("/", "meeting", "TauriCallView"),
            RouteDefinition::new("/settings", "settings", "SettingsView"),
        ])
        .unwrap(),
    )
}

/// A router at `fragment`, plus the host's handle on the shared history.
#[allow(dead_code)]
pub fn start_router(fragment: &str) -> (Router<MemoryHistory>, MemoryHistory) {
    start_router_with(fragment, RouterOptions::default())
}

#[allow(dead_code)]
pub fn start_router_with(
    fragment: &str,
    options: RouterOptions,
) -> (Router<MemoryHistory>, MemoryHistory) {
    let history = MemoryHistory::new(fragment);
    let router = Router::new(meeting_table(), history.clone(), options);
    (router, history)
}

/// Write `contents` to a uniquely named file in the temp directory.
#[allow(dead_code)]
pub fn write_temp_config(name: &str, contents: &str) -> PathBuf {
    let file = format!("meeting_router_{}_{}.toml", name, std::process::id());
    let path = std::env::temp_dir().join(file);
    std::fs::write(&path, contents).unwrap();
    path
}

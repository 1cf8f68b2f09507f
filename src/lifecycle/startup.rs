//! Startup orchestration.
//!
//! # Responsibilities
//! - Load and validate configuration
//! - Build the route table
//! - Bind the router to a history
//!
//! # Design Decisions
//! - Fail fast: any startup error is fatal
//! - Without a config file the built-in meeting/settings table is used

use std::path::Path;
use std::sync::Arc;

use thiserror::Error;

use crate::config::loader::{load_config, ConfigError};
use crate::config::validation::validate_config;
use crate::config::NavigationConfig;
use crate::history::{History, MemoryHistory};
use crate::routing::{ConfigurationError, RouteTable, Router, RouterOptions};

/// Errors that abort startup.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),

    #[error("route table error: {0}")]
    Routes(#[from] ConfigurationError),
}

/// A router bound to an in-memory history, plus the host's handle on that history.
pub struct Started {
    pub router: Router<MemoryHistory>,
    pub history: MemoryHistory,
}

/// Load `path`, or validate the defaults when no path is given.
pub fn load_or_default(path: Option<&Path>) -> Result<NavigationConfig, StartupError> {
    match path {
        Some(path) => Ok(load_config(path)?),
        None => {
            let config = NavigationConfig::default();
            validate_config(&config).map_err(ConfigError::Validation)?;
            Ok(config)
        }
    }
}

/// Build the route table from `config` and bind it to `history`.
pub fn build_router<H: History>(
    config: &NavigationConfig,
    history: H,
) -> Result<Router<H>, StartupError> {
    let table = Arc::new(RouteTable::from_config(&config.routes)?);
    tracing::info!(
        routes = table.len(),
        unresolved = ?config.router.unresolved,
        "Route table loaded"
    );
    Ok(Router::new(table, history, RouterOptions::from(&config.router)))
}

/// Start a router over a fresh in-memory history at the configured fragment.
pub fn start(config: &NavigationConfig) -> Result<Started, StartupError> {
    let history = MemoryHistory::new(config.router.initial_fragment.clone());
    let router = build_router(config, history.clone())?;
    Ok(Started { router, history })
}

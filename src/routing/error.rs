//! Routing error definitions.

use thiserror::Error;

use crate::routing::router::NavigationTarget;

/// Route table construction failures.
///
/// Raised once, while the table is built at startup. The application cannot run
/// with an ambiguous table, so callers treat this as fatal.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigurationError {
    /// Two definitions share a path.
    #[error("duplicate route path `{path}` (entries {first} and {second})")]
    DuplicatePath {
        path: String,
        first: usize,
        second: usize,
    },

    /// Two definitions share a name.
    #[error("duplicate route name `{name}` (entries {first} and {second})")]
    DuplicateName {
        name: String,
        first: usize,
        second: usize,
    },
}

/// Programmatic navigation failures.
///
/// Recoverable: router state and history are left untouched.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum NavigationError {
    /// No route matches the requested name or path.
    #[error("no route matches {target}")]
    NoMatch { target: NavigationTarget },
}

impl NavigationError {
    /// The identifier the caller tried to navigate to.
    pub fn target(&self) -> &NavigationTarget {
        match self {
            NavigationError::NoMatch { target } => target,
        }
    }
}

/// Result type for navigation operations.
pub type NavigationResult<T> = Result<T, NavigationError>;

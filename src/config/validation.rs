//! Configuration validation.
//!
//! # Responsibilities
//! - Semantic validation (serde handles syntactic)
//! - Check route paths are fragment-safe literal paths
//! - Detect duplicate route paths and names
//! - Check the redirect policy references an existing route
//!
//! # Design Decisions
//! - Returns all validation errors, not just first
//! - Validation is pure function: NavigationConfig → Result<(), Vec<ValidationError>>
//! - Runs before config is accepted into the system

use std::collections::HashSet;

use thiserror::Error;

use crate::config::schema::{NavigationConfig, UnresolvedPolicy};
use crate::routing::fragment::path_from_fragment;

/// A single semantic problem in the configuration.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ValidationError {
    #[error("no routes configured")]
    NoRoutes,

    #[error("route #{index}: name is empty")]
    EmptyName { index: usize },

    #[error("route `{name}`: path `{path}` must start with `/`")]
    RelativePath { name: String, path: String },

    #[error("route `{name}`: path `{path}` must not contain `#` or `?`")]
    ReservedCharacter { name: String, path: String },

    #[error("duplicate route path `{0}`")]
    DuplicatePath(String),

    #[error("duplicate route name `{0}`")]
    DuplicateName(String),

    #[error("unresolved redirect targets unknown route `{0}`")]
    UnknownRedirect(String),

    #[error("router.notify_capacity must be greater than zero")]
    ZeroCapacity,

    #[error("router.initial_fragment `{0}` does not name a `/` path")]
    InvalidInitialFragment(String),
}

/// Validate a parsed configuration.
pub fn validate_config(config: &NavigationConfig) -> Result<(), Vec<ValidationError>> {
    let mut errors = Vec::new();

    if config.routes.is_empty() {
        errors.push(ValidationError::NoRoutes);
    }

    let mut paths = HashSet::new();
    let mut names = HashSet::new();

    for (index, route) in config.routes.iter().enumerate() {
        if route.name.trim().is_empty() {
            errors.push(ValidationError::EmptyName { index });
        }
        if !route.path.starts_with('/') {
            errors.push(ValidationError::RelativePath {
                name: route.name.clone(),
                path: route.path.clone(),
            });
        }
        if route.path.contains(['#', '?']) {
            errors.push(ValidationError::ReservedCharacter {
                name: route.name.clone(),
                path: route.path.clone(),
            });
        }
        if !paths.insert(route.path.as_str()) {
            errors.push(ValidationError::DuplicatePath(route.path.clone()));
        }
        if !names.insert(route.name.as_str()) {
            errors.push(ValidationError::DuplicateName(route.name.clone()));
        }
    }

    if let UnresolvedPolicy::Redirect { route } = &config.router.unresolved {
        if !names.contains(route.as_str()) {
            errors.push(ValidationError::UnknownRedirect(route.clone()));
        }
    }

    if config.router.notify_capacity == 0 {
        errors.push(ValidationError::ZeroCapacity);
    }

    if !path_from_fragment(&config.router.initial_fragment).starts_with('/') {
        errors.push(ValidationError::InvalidInitialFragment(
            config.router.initial_fragment.clone(),
        ));
    }

    if errors.is_empty() {
        Ok(())
    } else {
        Err(errors)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::schema::RouteConfig;

    fn route(path: &str, name: &str) -> RouteConfig {
        RouteConfig {
            path: path.into(),
            name: name.into(),
            view: "View".into(),
        }
    }

    #[test]
    fn test_default_config_is_valid() {
        assert!(validate_config(&NavigationConfig::default()).is_ok());
    }

    #[test]
    fn test_no_routes() {
        let mut config = NavigationConfig::default();
        config.routes.clear();
        assert_eq!(validate_config(&config).unwrap_err(), vec![ValidationError::NoRoutes]);
    }

    #[test]
    fn test_collects_all_errors() {
        let mut config = NavigationConfig::default();
        config.routes.push(route("settings", ""));
        config.routes.push(route("/settings", "meeting"));
        config.router.notify_capacity = 0;

        let errors = validate_config(&config).unwrap_err();
        assert!(errors.contains(&ValidationError::EmptyName { index: 2 }));
        assert!(errors.iter().any(|e| matches!(
            e,
            ValidationError::RelativePath { path, .. } if path == "settings"
        )));
        assert!(errors.contains(&ValidationError::DuplicatePath("/settings".into())));
        assert!(errors.contains(&ValidationError::DuplicateName("meeting".into())));
        assert!(errors.contains(&ValidationError::ZeroCapacity));
    }

    #[test]
    fn test_reserved_characters() {
        let mut config = NavigationConfig::default();
        config.routes.push(route("/room?id=1", "room"));
        config.routes.push(route("/#lobby", "lobby"));

        let errors = validate_config(&config).unwrap_err();
        assert_eq!(errors.len(), 2);
        assert!(errors.iter().all(|e| matches!(e, ValidationError::ReservedCharacter { .. })));
    }

    #[test]
    fn test_unknown_redirect() {
        let mut config = NavigationConfig::default();
        config.router.unresolved = UnresolvedPolicy::Redirect {
            route: "lobby".into(),
        };
        assert_eq!(
            validate_config(&config).unwrap_err(),
            vec![ValidationError::UnknownRedirect("lobby".into())]
        );

        config.router.unresolved = UnresolvedPolicy::Redirect {
            route: "meeting".into(),
        };
        assert!(validate_config(&config).is_ok());
    }

    #[test]
    fn test_initial_fragment() {
        let mut config = NavigationConfig::default();
        config.router.initial_fragment = String::new();
        assert!(validate_config(&config).is_ok());

        config.router.initial_fragment = "#settings".into();
        assert_eq!(
            validate_config(&config).unwrap_err(),
            vec![ValidationError::InvalidInitialFragment("#settings".into())]
        );
    }
}

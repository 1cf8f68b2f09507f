//! Route table construction and lookup.
//!
//! # Responsibilities
//! - Store route definitions in declaration order
//! - Reject duplicate paths and names at build time
//! - Look up a definition by path or by name
//!
//! # Design Decisions
//! - Immutable after construction (no runtime registration)
//! - O(1) name and path lookup via HashMap index into the ordered list
//! - Paths are compared literally; normalization belongs to the fragment codec

use std::collections::HashMap;
use std::fmt;

use serde::{Deserialize, Serialize};

use crate::config::RouteConfig;
use crate::routing::error::ConfigurationError;

/// Opaque handle to a renderable screen.
///
/// Owned by the presentation layer; the router stores it and hands it back
/// without looking inside.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ViewId(String);

impl ViewId {
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for ViewId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for ViewId {
    fn from(id: &str) -> Self {
        Self::new(id)
    }
}

/// A named, path-identified binding between a fragment and a screen.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RouteDefinition {
    pub path: String,
    pub name: String,
    pub view: ViewId,
}

impl RouteDefinition {
    pub fn new(path: impl Into<String>, name: impl Into<String>, view: impl Into<ViewId>) -> Self {
        Self {
            path: path.into(),
            name: name.into(),
            view: view.into(),
        }
    }
}

impl From<&RouteConfig> for RouteDefinition {
    fn from(config: &RouteConfig) -> Self {
        Self::new(
            config.path.clone(),
            config.name.clone(),
            ViewId::new(config.view.clone()),
        )
    }
}

/// Validated, ordered set of route definitions.
#[derive(Debug, Clone)]
pub struct RouteTable {
    routes: Vec<RouteDefinition>,
    by_path: HashMap<String, usize>,
    by_name: HashMap<String, usize>,
}

impl RouteTable {
    /// Build a table from definitions in declaration order.
    ///
    /// Fails on the first repeated path or name, reporting both positions.
    pub fn build(
        entries: impl IntoIterator<Item = RouteDefinition>,
    ) -> Result<Self, ConfigurationError> {
        let mut routes = Vec::new();
        let mut by_path = HashMap::new();
        let mut by_name = HashMap::new();

        for (index, route) in entries.into_iter().enumerate() {
            if let Some(&first) = by_path.get(&route.path) {
                return Err(ConfigurationError::DuplicatePath {
                    path: route.path,
                    first,
                    second: index,
                });
            }
            if let Some(&first) = by_name.get(&route.name) {
                return Err(ConfigurationError::DuplicateName {
                    name: route.name,
                    first,
                    second: index,
                });
            }
            by_path.insert(route.path.clone(), index);
            by_name.insert(route.name.clone(), index);
            routes.push(route);
        }

        tracing::debug!(routes = routes.len(), "Route table built");

        Ok(Self {
            routes,
            by_path,
            by_name,
        })
    }

    /// Build a table from the `[[routes]]` section of the config file.
    pub fn from_config(configs: &[RouteConfig]) -> Result<Self, ConfigurationError> {
        Self::build(configs.iter().map(RouteDefinition::from))
    }

    /// The definition whose path equals `path`, if any.
    pub fn resolve_by_path(&self, path: &str) -> Option<&RouteDefinition> {
        self.by_path.get(path).map(|&i| &self.routes[i])
    }

    /// The definition whose name equals `name`, if any.
    pub fn resolve_by_name(&self, name: &str) -> Option<&RouteDefinition> {
        self.by_name.get(name).map(|&i| &self.routes[i])
    }

    pub fn has_route(&self, name: &str) -> bool {
        self.by_name.contains_key(name)
    }

    /// Definitions in declaration order.
    pub fn routes(&self) -> impl Iterator<Item = &RouteDefinition> {
        self.routes.iter()
    }

    pub fn len(&self) -> usize {
        self.routes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.routes.is_empty()
    }
}

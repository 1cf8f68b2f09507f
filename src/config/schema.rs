//! Configuration schema definitions.
//!
//! This module defines the configuration file layout for the router and its
//! host shell. All types derive Serde traits for deserialization from TOML.

use serde::{Deserialize, Serialize};

/// Root configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct NavigationConfig {
    /// Router behaviour.
    pub router: RouterSettings,

    /// Route definitions, in match order.
    pub routes: Vec<RouteConfig>,

    /// Observability settings.
    pub observability: ObservabilityConfig,
}

impl Default for NavigationConfig {
    fn default() -> Self {
        Self {
            router: RouterSettings::default(),
            routes: vec![
                RouteConfig {
                    path: "/".to_string(),
                    name: "meeting".to_string(),
                    view: "TauriCallView".to_string(),
                },
                RouteConfig {
                    path: "/settings".to_string(),
                    name: "settings".to_string(),
                    view: "SettingsView".to_string(),
                },
            ],
            observability: ObservabilityConfig::default(),
        }
    }
}

/// Router settings.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct RouterSettings {
    /// Fragment the in-memory history starts from (the host's hash at launch).
    pub initial_fragment: String,

    /// Buffered change notifications per subscriber.
    pub notify_capacity: usize,

    /// Behaviour when the fragment matches no route.
    pub unresolved: UnresolvedPolicy,
}

impl Default for RouterSettings {
    fn default() -> Self {
        Self {
            initial_fragment: "#/".to_string(),
            notify_capacity: 16,
            unresolved: UnresolvedPolicy::Degrade,
        }
    }
}

/// Policy applied when the current fragment matches no route.
#[derive(Debug, Clone, PartialEq, Eq, Default, Deserialize, Serialize)]
#[serde(tag = "policy", rename_all = "lowercase")]
pub enum UnresolvedPolicy {
    /// Stay in the unresolved state; the presentation layer picks a fallback.
    #[default]
    Degrade,
    /// Replace the unmatched entry with the named route.
    Redirect { route: String },
}

/// A single route entry.
#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct RouteConfig {
    /// Literal path, e.g. "/settings".
    pub path: String,

    /// Unique symbolic name.
    pub name: String,

    /// Opaque view token handed to the presentation layer.
    pub view: String,
}

/// Observability configuration.
#[derive(Debug, Clone, Deserialize, Serialize)]
#[serde(default)]
pub struct ObservabilityConfig {
    /// Log level (trace, debug, info, warn, error).
    pub log_level: String,

    /// Include span/target metadata in log lines.
    pub log_targets: bool,
}

impl Default for ObservabilityConfig {
    fn default() -> Self {
        Self {
            log_level: "info".to_string(),
            log_targets: false,
        }
    }
}

//! Hash-fragment navigation for the meeting desktop client.
//!
//! Maps the application's screens to `#/<path>` fragments and lets views move
//! between them by name.

pub mod config;
pub mod history;
pub mod lifecycle;
pub mod observability;
pub mod routing;
pub mod shell;

pub use config::schema::NavigationConfig;
pub use history::{History, MemoryHistory};
pub use routing::{NavigationMode, NavigationTarget, RouteTable, Router, RouterSnapshot};

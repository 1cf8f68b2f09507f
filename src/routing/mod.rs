//! Routing subsystem.
//!
//! # Data Flow
//! ```text
//! Route Compilation (at startup):
//!     RouteConfig[]
//!     → table.rs (reject duplicate paths/names)
//!     → Freeze as immutable RouteTable, shared via Arc
//!
//! Programmatic navigation:
//!     navigate_to(name | path, mode)
//!     → table.rs (resolve target)
//!     → fragment.rs (path → "#/path")
//!     → History push/replace
//!     → router.rs (state transition, broadcast RouteChange)
//!
//! External history change (back/forward, edited hash):
//!     History fragment
//!     → fragment.rs ("#/path" → path)
//!     → table.rs (resolve by path)
//!     → router.rs (Ready or Unresolved, broadcast RouteChange)
//! ```
//!
//! # Design Decisions
//! - Routes compiled at startup, immutable at runtime
//! - Literal path matching only, no patterns or nesting
//! - First match wins (table order)
//! - Explicit Unresolved state rather than a silent default route

pub mod error;
pub mod event;
pub mod fragment;
pub mod router;
pub mod table;

pub use error::{ConfigurationError, NavigationError};
pub use event::{ChangeCause, RouteChange, RouterEvent, RouterHandle};
pub use router::{
    NavigationMode, NavigationTarget, RouteStatus, Router, RouterOptions, RouterSnapshot,
};
pub use table::{RouteDefinition, RouteTable, ViewId};

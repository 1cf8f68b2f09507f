//! Lifecycle management subsystem.
//!
//! # Data Flow
//! ```text
//! Startup (startup.rs):
//!     Load config → Validate → Build route table → Bind history → Router ready
//!
//! Shutdown (shutdown.rs):
//!     Trigger received → Shell stops reading commands → Exit
//!
//! Signals (signals.rs):
//!     SIGINT (Ctrl-C) → Trigger shutdown
//! ```
//!
//! # Design Decisions
//! - Ordered startup: config first, then table, then router
//! - Fail fast: an ambiguous route table aborts startup

pub mod shutdown;
pub mod signals;
pub mod startup;

pub use shutdown::{Shutdown, ShutdownReason};
pub use startup::{StartupError, Started};

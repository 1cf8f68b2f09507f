//! Observability subsystem.
//!
//! # Data Flow
//! ```text
//! All subsystems produce:
//!     → tracing events (route changes, unresolved fragments, dropped navigations)
//!
//! Consumers:
//!     → logging.rs installs the subscriber (stderr, filtered)
//! ```
//!
//! # Design Decisions
//! - Structured fields on every routing event (path, route, cause, revision)
//! - Logs go to stderr so the host shell's stdout stays machine-readable
//! - RUST_LOG overrides the configured level

pub mod logging;

pub use logging::init_logging;

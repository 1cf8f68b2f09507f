//! Host shell: a line-driven stand-in for the web-view host.
//!
//! # Data Flow
//! ```text
//! stdin line
//!     → command.rs (parse)
//!     → session.rs (drive Router / MemoryHistory)
//!     → one JSON object per line on stdout
//! ```
//!
//! # Design Decisions
//! - Every command answers with exactly one JSON line, errors included
//! - Host actions (`hash`, `back`, `forward`) go through the shared history,
//!   the same path a real web view's events would take

pub mod command;
pub mod session;

pub use command::{Command, ShellError};
pub use session::Session;

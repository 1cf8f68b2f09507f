//! Host history abstraction.
//!
//! # Data Flow
//! ```text
//! Router navigation:
//!     Router → History::push_fragment / replace_fragment (silent)
//!
//! Host navigation (back/forward, edited hash):
//!     History cursor moves
//!     → RouterHandle::history_changed (queued)
//!     → Router::process_pending re-resolves the fragment
//! ```
//!
//! # Design Decisions
//! - The host's history is process-wide state; the router only sees it through
//!   this trait, injected at construction
//! - Writes made by the router never notify, matching pushState/replaceState
//! - Cursor moves notify, matching popstate/hashchange

pub mod memory;

pub use memory::MemoryHistory;

use crate::routing::RouterHandle;

/// Narrow interface over the host's fragment-based history.
pub trait History {
    /// Current fragment, including the leading `#` when the host has one.
    fn fragment(&self) -> String;

    /// Add an entry after the current one, discarding any forward entries.
    fn push_fragment(&mut self, fragment: &str);

    /// Overwrite the current entry.
    fn replace_fragment(&mut self, fragment: &str);

    /// Move the cursor by `delta` entries. Returns false, without notifying,
    /// when the move would leave the stack.
    fn go(&mut self, delta: isize) -> bool;

    /// Register the router to be told about host-driven changes.
    fn listen(&mut self, handle: RouterHandle);
}

//! In-memory history stack.
//!
//! Stands in for the web view's history when running the host shell or tests.
//! Clones share one stack, so the host side can keep a copy to simulate user
//! actions while the router owns another.

use std::cell::RefCell;
use std::rc::Rc;

use crate::history::History;
use crate::routing::RouterHandle;

#[derive(Debug)]
struct Stack {
    entries: Vec<String>,
    position: usize,
    listeners: Vec<RouterHandle>,
}

impl Stack {
    /// Notify every live listener; handles of dropped routers are discarded.
    fn notify(&mut self) {
        self.listeners.retain(|listener| listener.history_changed());
    }
}

/// Shared in-memory history.
#[derive(Debug, Clone)]
pub struct MemoryHistory {
    inner: Rc<RefCell<Stack>>,
}

impl MemoryHistory {
    /// Create a history holding a single entry.
    pub fn new(initial_fragment: impl Into<String>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Stack {
                entries: vec![initial_fragment.into()],
                position: 0,
                listeners: Vec::new(),
            })),
        }
    }

    /// Simulate the user or host editing the fragment directly.
    ///
    /// Like a hashchange, this adds an entry and notifies listeners; setting the
    /// fragment it already holds does neither.
    pub fn set_fragment(&self, fragment: &str) {
        let mut stack = self.inner.borrow_mut();
        if stack.entries[stack.position] == fragment {
            return;
        }
        push(&mut stack, fragment);
        stack.notify();
    }

    /// Simulate the host's back button.
    pub fn back(&self) -> bool {
        self.move_by(-1)
    }

    /// Simulate the host's forward button.
    pub fn forward(&self) -> bool {
        self.move_by(1)
    }

    /// Number of entries in the stack.
    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// Always false: a history holds at least its initial entry.
    pub fn is_empty(&self) -> bool {
        self.inner.borrow().entries.is_empty()
    }

    /// Index of the current entry.
    pub fn position(&self) -> usize {
        self.inner.borrow().position
    }

    pub fn entries(&self) -> Vec<String> {
        self.inner.borrow().entries.clone()
    }

    fn move_by(&self, delta: isize) -> bool {
        let mut stack = self.inner.borrow_mut();
        let target = match stack.position.checked_add_signed(delta) {
            Some(target) if delta != 0 && target < stack.entries.len() => target,
            _ => return false,
        };
        stack.position = target;
        stack.notify();
        true
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::new("")
    }
}

fn push(stack: &mut Stack, fragment: &str) {
    let keep = stack.position + 1;
    stack.entries.truncate(keep);
    stack.entries.push(fragment.to_string());
    stack.position = keep;
}

impl History for MemoryHistory {
    fn fragment(&self) -> String {
        let stack = self.inner.borrow();
        stack.entries[stack.position].clone()
    }

    fn push_fragment(&mut self, fragment: &str) {
        push(&mut self.inner.borrow_mut(), fragment);
    }

    fn replace_fragment(&mut self, fragment: &str) {
        let mut stack = self.inner.borrow_mut();
        let position = stack.position;
        stack.entries[position] = fragment.to_string();
    }

    fn go(&mut self, delta: isize) -> bool {
        self.move_by(delta)
    }

    fn listen(&mut self, handle: RouterHandle) {
        self.inner.borrow_mut().listeners.push(handle);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::routing::RouterEvent;
    use tokio::sync::mpsc;

    #[test]
    fn test_push_and_replace() {
        let mut history = MemoryHistory::new("#/");
        history.push_fragment("#/settings");
        assert_eq!(history.len(), 2);
        assert_eq!(history.fragment(), "#/settings");

        history.replace_fragment("#/profile");
        assert_eq!(history.len(), 2);
        assert_eq!(history.entries(), ["#/", "#/profile"]);
    }

    #[test]
    fn test_push_discards_forward_entries() {
        let mut history = MemoryHistory::new("#/");
        history.push_fragment("#/a");
        history.push_fragment("#/b");
        assert!(history.go(-2));

        history.push_fragment("#/c");
        assert_eq!(history.entries(), ["#/", "#/c"]);
        assert_eq!(history.position(), 1);
    }

    #[test]
    fn test_go_out_of_range_is_noop() {
        let mut history = MemoryHistory::new("#/");
        assert!(!history.go(-1));
        assert!(!history.go(1));
        assert!(!history.go(0));
        assert_eq!(history.fragment(), "#/");

        history.push_fragment("#/settings");
        assert!(!history.go(isize::MAX));
        assert!(!history.go(isize::MIN));
        assert_eq!(history.position(), 1);
        assert!(history.go(-1));
    }

    #[test]
    fn test_clones_share_stack() {
        let mut router_side = MemoryHistory::new("#/");
        let host_side = router_side.clone();

        router_side.push_fragment("#/settings");
        assert_eq!(host_side.fragment(), "#/settings");

        assert!(host_side.back());
        assert_eq!(router_side.fragment(), "#/");
    }

    #[test]
    fn test_notifications() {
        let (tx, mut rx) = mpsc::unbounded_channel();
        let mut history = MemoryHistory::new("#/");
        history.listen(RouterHandle::new(tx));

        // Router-issued writes are silent.
        history.push_fragment("#/settings");
        history.replace_fragment("#/settings");
        assert!(rx.try_recv().is_err());

        // Host-driven moves notify.
        assert!(history.back());
        assert_eq!(rx.try_recv().unwrap(), RouterEvent::HistoryChanged);

        history.set_fragment("#/unknown");
        assert_eq!(rx.try_recv().unwrap(), RouterEvent::HistoryChanged);

        // Same fragment: no entry, no event.
        history.set_fragment("#/unknown");
        assert!(rx.try_recv().is_err());
        assert_eq!(history.len(), 2);
    }

    #[test]
    fn test_dropped_listeners_are_pruned() {
        let history = MemoryHistory::new("#/");
        let (live_tx, mut live_rx) = mpsc::unbounded_channel();
        let (dead_tx, dead_rx) = mpsc::unbounded_channel();
        history.clone().listen(RouterHandle::new(live_tx));
        history.clone().listen(RouterHandle::new(dead_tx));
        drop(dead_rx);

        history.set_fragment("#/settings");
        assert_eq!(history.inner.borrow().listeners.len(), 1);
        assert_eq!(live_rx.try_recv().unwrap(), RouterEvent::HistoryChanged);
    }
}

//! History abstraction the navigation shell reads from and writes to.
//!
//! The browser adapter lives in the web crate. [`MemoryHistory`] is an
//! in-process stack with the same push/back/forward semantics, used for tests
//! and for walking the route table outside a browser.

use std::cell::RefCell;
use std::rc::{Rc, Weak};

use thiserror::Error;

/// Failures surfaced by [`History::push`].
#[derive(Clone, Debug, PartialEq, Eq, Error)]
pub enum HistoryError {
    /// No window or history object is reachable.
    #[error("history API is unavailable")]
    Unavailable,
    /// The history object refused the new entry.
    #[error("history push rejected: {0}")]
    PushRejected(String),
}

/// Read/write access to a navigation history.
pub trait History {
    /// Current location path (no query string, no hash).
    fn location(&self) -> String;

    /// Appends a new entry for `path` and makes it current.
    ///
    /// Must not emit a history-navigation notification.
    fn push(&self, path: &str) -> Result<(), HistoryError>;
}

/// Source of history-navigation notifications (back/forward).
pub trait HistoryEvents {
    /// Registers `listener` until the returned guard is dropped.
    fn subscribe(&self, listener: Box<dyn Fn()>) -> Subscription;
}

/// Guard for a registered history listener. Dropping it unregisters.
#[must_use = "dropping a Subscription unregisters the listener immediately"]
pub struct Subscription {
    release: Option<Box<dyn FnOnce()>>,
}

impl Subscription {
    /// Wraps the closure that undoes a registration.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Releases the listener now instead of at drop.
    pub fn release(mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl Drop for Subscription {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl std::fmt::Debug for Subscription {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Subscription")
            .field("active", &self.release.is_some())
            .finish()
    }
}

type Listener = Rc<dyn Fn()>;

struct Stack {
    entries: Vec<String>,
    cursor: usize,
    read_only: bool,
    listeners: Vec<(u64, Listener)>,
    next_listener: u64,
}

/// In-memory history stack.
///
/// `push` drops any forward entries, like a browser does. `back` and
/// `forward` move the cursor and notify subscribers.
#[derive(Clone)]
pub struct MemoryHistory {
    stack: Rc<RefCell<Stack>>,
}

impl MemoryHistory {
    /// A history holding a single entry for `initial`.
    pub fn new(initial: impl Into<String>) -> Self {
        Self::build(initial.into(), false)
    }

    /// A history whose `push` always fails, as in sandboxed frames.
    pub fn read_only(initial: impl Into<String>) -> Self {
        Self::build(initial.into(), true)
    }

    fn build(initial: String, read_only: bool) -> Self {
        Self {
            stack: Rc::new(RefCell::new(Stack {
                entries: vec![initial],
                cursor: 0,
                read_only,
                listeners: Vec::new(),
                next_listener: 0,
            })),
        }
    }

    /// All entries, oldest first.
    pub fn entries(&self) -> Vec<String> {
        self.stack.borrow().entries.clone()
    }

    /// Number of entries in the stack.
    pub fn len(&self) -> usize {
        self.stack.borrow().entries.len()
    }

    /// Always false: a history holds at least its initial entry.
    pub fn is_empty(&self) -> bool {
        self.stack.borrow().entries.is_empty()
    }

    /// Index of the current entry.
    pub fn cursor(&self) -> usize {
        self.stack.borrow().cursor
    }

    /// Number of live subscriptions.
    pub fn listener_count(&self) -> usize {
        self.stack.borrow().listeners.len()
    }

    /// Steps one entry back. Returns false at the start of the stack.
    pub fn back(&self) -> bool {
        self.traverse(-1)
    }

    /// Steps one entry forward. Returns false at the end of the stack.
    pub fn forward(&self) -> bool {
        self.traverse(1)
    }

    fn traverse(&self, delta: isize) -> bool {
        let listeners: Vec<Listener> = {
            let mut stack = self.stack.borrow_mut();
            let Some(target) = stack.cursor.checked_add_signed(delta) else {
                return false;
            };
            if target >= stack.entries.len() {
                return false;
            }
            stack.cursor = target;
            stack.listeners.iter().map(|(_, l)| Rc::clone(l)).collect()
        };

        // Listeners read the location, so the borrow must be gone by now.
        for listener in listeners {
            listener();
        }
        true
    }
}

impl History for MemoryHistory {
    fn location(&self) -> String {
        let stack = self.stack.borrow();
        stack.entries[stack.cursor].clone()
    }

    fn push(&self, path: &str) -> Result<(), HistoryError> {
        let mut stack = self.stack.borrow_mut();
        if stack.read_only {
            return Err(HistoryError::PushRejected(format!(
                "history is read-only, cannot push {path}"
            )));
        }
        let keep = stack.cursor + 1;
        stack.entries.truncate(keep);
        stack.entries.push(path.to_string());
        stack.cursor = keep;
        Ok(())
    }
}

impl HistoryEvents for MemoryHistory {
    fn subscribe(&self, listener: Box<dyn Fn()>) -> Subscription {
        let id = {
            let mut stack = self.stack.borrow_mut();
            let id = stack.next_listener;
            stack.next_listener += 1;
            stack.listeners.push((id, Rc::from(listener)));
            id
        };

        let weak: Weak<RefCell<Stack>> = Rc::downgrade(&self.stack);
        Subscription::new(move || {
            if let Some(stack) = weak.upgrade() {
                stack.borrow_mut().listeners.retain(|(lid, _)| *lid != id);
            }
        })
    }
}

impl std::fmt::Debug for MemoryHistory {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let stack = self.stack.borrow();
        f.debug_struct("MemoryHistory")
            .field("entries", &stack.entries)
            .field("cursor", &stack.cursor)
            .field("listeners", &stack.listeners.len())
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::cell::Cell;

    #[test]
    fn push_appends_and_moves_cursor() {
        let history = MemoryHistory::new("/");
        history.push("/homepage").unwrap();
        history.push("/homepage-responsive").unwrap();

        assert_eq!(history.entries(), vec!["/", "/homepage", "/homepage-responsive"]);
        assert_eq!(history.cursor(), 2);
        assert_eq!(history.location(), "/homepage-responsive");
    }

    #[test]
    fn push_after_back_drops_forward_entries() {
        let history = MemoryHistory::new("/");
        history.push("/a").unwrap();
        history.push("/b").unwrap();
        assert!(history.back());
        history.push("/c").unwrap();

        assert_eq!(history.entries(), vec!["/", "/a", "/c"]);
        assert!(!history.forward());
    }

    #[test]
    fn back_and_forward_stop_at_the_ends() {
        let history = MemoryHistory::new("/");
        assert!(!history.back());
        assert!(!history.forward());

        history.push("/homepage").unwrap();
        assert!(history.back());
        assert_eq!(history.location(), "/");
        assert!(history.forward());
        assert_eq!(history.location(), "/homepage");
    }

    #[test]
    fn traversal_notifies_but_push_does_not() {
        let history = MemoryHistory::new("/");
        let hits = Rc::new(Cell::new(0));
        let counter = Rc::clone(&hits);
        let _sub = history.subscribe(Box::new(move || counter.set(counter.get() + 1)));

        history.push("/homepage").unwrap();
        assert_eq!(hits.get(), 0);

        history.back();
        history.forward();
        assert_eq!(hits.get(), 2);
    }

    #[test]
    fn listeners_see_the_updated_location() {
        let history = MemoryHistory::new("/");
        history.push("/homepage").unwrap();

        let seen = Rc::new(RefCell::new(String::new()));
        let sink = Rc::clone(&seen);
        let reader = history.clone();
        let _sub = history.subscribe(Box::new(move || *sink.borrow_mut() = reader.location()));

        history.back();
        assert_eq!(seen.borrow().as_str(), "/");
    }

    #[test]
    fn dropping_the_guard_unsubscribes() {
        let history = MemoryHistory::new("/");
        history.push("/x").unwrap();
        let hits = Rc::new(Cell::new(0));

        let counter = Rc::clone(&hits);
        let sub = history.subscribe(Box::new(move || counter.set(counter.get() + 1)));
        assert_eq!(history.listener_count(), 1);
        drop(sub);
        assert_eq!(history.listener_count(), 0);

        history.back();
        assert_eq!(hits.get(), 0);
    }

    #[test]
    fn explicit_release_unsubscribes_once() {
        let history = MemoryHistory::new("/");
        let sub = history.subscribe(Box::new(|| {}));
        let other = history.subscribe(Box::new(|| {}));
        sub.release();
        assert_eq!(history.listener_count(), 1);
        drop(other);
        assert_eq!(history.listener_count(), 0);
    }

    #[test]
    fn guard_outliving_history_is_harmless() {
        let history = MemoryHistory::new("/");
        let sub = history.subscribe(Box::new(|| {}));
        drop(history);
        drop(sub);
    }

    #[test]
    fn read_only_history_rejects_push() {
        let history = MemoryHistory::read_only("/");
        let err = history.push("/homepage").unwrap_err();
        assert!(matches!(err, HistoryError::PushRejected(_)));
        assert_eq!(history.entries(), vec!["/"]);
        assert!(err.to_string().contains("/homepage"));
    }
}

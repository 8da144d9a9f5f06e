//! In-memory navigation history used in place of the browser location stack.

use std::{cell::RefCell, rc::Rc};

use crate::model::{Location, NavigationKind};

#[derive(Debug)]
struct HistoryStack {
    entries: Vec<Location>,
    index: usize,
    action: NavigationKind,
}

#[derive(Debug, Clone)]
/// Shared handle to a location stack.
///
/// Clones refer to the same stack. Use [`MemoryHistory::ptr_eq`] to tell handles apart.
pub struct MemoryHistory {
    inner: Rc<RefCell<HistoryStack>>,
}

impl MemoryHistory {
    /// Creates a history holding `entries`, positioned at the last one.
    ///
    /// An empty entry list starts at `/`.
    pub fn new<I, S>(entries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut entries: Vec<Location> = entries
            .into_iter()
            .map(|entry| Location::parse(entry.as_ref()))
            .collect();
        if entries.is_empty() {
            entries.push(Location::default());
        }
        let index = entries.len() - 1;
        Self {
            inner: Rc::new(RefCell::new(HistoryStack {
                entries,
                index,
                action: NavigationKind::Pop,
            })),
        }
    }

    /// Creates a single-entry history at `route`.
    pub fn at(route: &str) -> Self {
        Self::new([route])
    }

    pub fn location(&self) -> Location {
        let stack = self.inner.borrow();
        stack.entries[stack.index].clone()
    }

    /// How the history reached its current entry.
    pub fn action(&self) -> NavigationKind {
        self.inner.borrow().action
    }

    /// Pushes `route`, discarding any forward entries.
    pub fn push(&self, route: &str) {
        let mut stack = self.inner.borrow_mut();
        let next = stack.index + 1;
        stack.entries.truncate(next);
        stack.entries.push(Location::parse(route));
        stack.index = next;
        stack.action = NavigationKind::Push;
    }

    /// Replaces the current entry with `route`.
    pub fn replace(&self, route: &str) {
        let mut stack = self.inner.borrow_mut();
        let index = stack.index;
        stack.entries[index] = Location::parse(route);
        stack.action = NavigationKind::Replace;
    }

    /// Moves `delta` entries through the stack, clamped to its bounds.
    ///
    /// Returns `false` when the position did not change.
    pub fn go(&self, delta: isize) -> bool {
        let mut stack = self.inner.borrow_mut();
        let last = stack.entries.len() - 1;
        let target = stack.index.saturating_add_signed(delta).min(last);
        if target == stack.index {
            return false;
        }
        stack.index = target;
        stack.action = NavigationKind::Pop;
        true
    }

    pub fn back(&self) -> bool {
        self.go(-1)
    }

    pub fn forward(&self) -> bool {
        self.go(1)
    }

    pub fn len(&self) -> usize {
        self.inner.borrow().entries.len()
    }

    /// Always `false`: a history holds at least one entry. Present alongside [`Self::len`] for
    /// the `len_without_is_empty` lint.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    pub fn index(&self) -> usize {
        self.inner.borrow().index
    }

    pub fn ptr_eq(&self, other: &Self) -> bool {
        Rc::ptr_eq(&self.inner, &other.inner)
    }
}

impl Default for MemoryHistory {
    fn default() -> Self {
        Self::at("/")
    }
}

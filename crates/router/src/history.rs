//! In-memory back/forward navigation history.
//!
//! Plays the role a browser's session history plays for a web router: every
//! navigation pushes the previous location onto the back stack and clears the
//! forward stack. Nothing is persisted.

use std::collections::VecDeque;

/// Maximum number of locations kept on the back stack.
pub const DEFAULT_HISTORY_LIMIT: usize = 100;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NavigationHistory {
    back: VecDeque<String>,
    current: String,
    forward: Vec<String>,
    limit: usize,
}

impl NavigationHistory {
    pub fn new(initial: impl Into<String>) -> Self {
        Self::with_limit(initial, DEFAULT_HISTORY_LIMIT)
    }

    pub fn with_limit(initial: impl Into<String>, limit: usize) -> Self {
        Self {
            back: VecDeque::new(),
            current: initial.into(),
            forward: Vec::new(),
            limit: limit.max(1),
        }
    }

    pub fn current(&self) -> &str {
        &self.current
    }

    /// Records a navigation. Returns `false` (and changes nothing) when the
    /// location equals the current one.
    pub fn push(&mut self, location: impl Into<String>) -> bool {
        let location = location.into();
        if location == self.current {
            return false;
        }
        let previous = std::mem::replace(&mut self.current, location);
        self.back.push_back(previous);
        while self.back.len() > self.limit {
            self.back.pop_front();
        }
        self.forward.clear();
        true
    }

    /// Moves one step back and returns the new current location.
    pub fn back(&mut self) -> Option<&str> {
        let previous = self.back.pop_back()?;
        let current = std::mem::replace(&mut self.current, previous);
        self.forward.push(current);
        Some(&self.current)
    }

    /// Moves one step forward and returns the new current location.
    pub fn forward(&mut self) -> Option<&str> {
        let next = self.forward.pop()?;
        let current = std::mem::replace(&mut self.current, next);
        self.back.push_back(current);
        Some(&self.current)
    }

    pub fn can_go_back(&self) -> bool {
        !self.back.is_empty()
    }

    pub fn can_go_forward(&self) -> bool {
        !self.forward.is_empty()
    }

    pub fn back_len(&self) -> usize {
        self.back.len()
    }
}

impl Default for NavigationHistory {
    fn default() -> Self {
        Self::new("/")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn back_and_forward_walk_the_stacks() {
        let mut history = NavigationHistory::new("/");
        assert!(history.push("/documents"));
        assert!(history.push("/contacts"));

        assert_eq!(history.back(), Some("/documents"));
        assert_eq!(history.back(), Some("/"));
        assert_eq!(history.back(), None);
        assert_eq!(history.current(), "/");

        assert_eq!(history.forward(), Some("/documents"));
        assert_eq!(history.forward(), Some("/contacts"));
        assert_eq!(history.forward(), None);
    }

    #[test]
    fn new_navigation_clears_forward_stack() {
        let mut history = NavigationHistory::new("/");
        history.push("/documents");
        history.back();
        assert!(history.can_go_forward());

        history.push("/settings");
        assert!(!history.can_go_forward());
        assert_eq!(history.back(), Some("/"));
    }

    #[test]
    fn pushing_current_location_is_ignored() {
        let mut history = NavigationHistory::new("/documents");
        assert!(!history.push("/documents"));
        assert!(!history.can_go_back());
    }

    #[test]
    fn back_stack_is_bounded() {
        let mut history = NavigationHistory::with_limit("/", 2);
        for path in ["/a", "/b", "/c"] {
            history.push(path);
        }
        assert_eq!(history.back_len(), 2);
        assert_eq!(history.back(), Some("/b"));
        assert_eq!(history.back(), Some("/a"));
        assert_eq!(history.back(), None);
    }
}

//! Display-name directory.
//!
//! Two structures with different lifetimes: the active set tracks names in
//! use right now, the history index maps every name ever seen to the player
//! who last wore it and survives disconnects and renames. The leader
//! tracker trusts a name only when both agree.

use std::collections::{HashMap, HashSet};

use super::PlayerId;

#[derive(Debug, Default)]
pub struct NameDirectory {
    active: HashSet<String>,
    history: HashMap<String, PlayerId>,
}

impl NameDirectory {
    pub fn new() -> Self {
        Self::default()
    }

    /// Is this name currently in use by a connected player?
    pub fn has_active(&self, name: &str) -> bool {
        self.active.contains(name)
    }

    /// Resolve a name through history, connected or not.
    pub fn resolve(&self, name: &str) -> Option<PlayerId> {
        self.history.get(name).copied()
    }

    /// Mark a name active and point its history at `id`. A reused name
    /// re-points history at the latest wearer.
    pub fn record(&mut self, name: &str, id: PlayerId) {
        self.active.insert(name.to_string());
        self.history.insert(name.to_string(), id);
    }

    /// Remove a name from the active set, keeping its history entry.
    pub fn release(&mut self, name: &str) {
        self.active.remove(name);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_release_keeps_history() {
        let mut names = NameDirectory::new();
        names.record("Alice", 5);
        names.release("Alice");

        assert!(!names.has_active("Alice"));
        assert_eq!(names.resolve("Alice"), Some(5));
    }

    #[test]
    fn test_reused_name_points_at_latest_wearer() {
        let mut names = NameDirectory::new();
        names.record("Ace", 1);
        names.release("Ace");
        names.record("Ace", 2);

        assert!(names.has_active("Ace"));
        assert_eq!(names.resolve("Ace"), Some(2));
    }

    #[test]
    fn test_unknown_name() {
        let names = NameDirectory::new();
        assert!(!names.has_active("Nobody"));
        assert_eq!(names.resolve("Nobody"), None);
    }
}

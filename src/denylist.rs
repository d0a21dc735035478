use serde::{Deserialize, Serialize};
use std::collections::HashSet;
use std::hash::Hash;

/// A set of flagged identifiers.
///
/// Inserts and removals are idempotent: flagging an already-flagged
/// entry or clearing an absent one is a no-op, never an error.
/// Membership is pure storage; the registry attaches no enforcement
/// to it beyond the query surface.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct Denylist<T: Eq + Hash> {
    entries: HashSet<T>,
}

impl<T: Eq + Hash> Denylist<T> {
    pub fn new() -> Self {
        Denylist {
            entries: HashSet::new(),
        }
    }

    /// Flag an entry. Returns true if it was not already flagged.
    pub fn insert(&mut self, entry: T) -> bool {
        self.entries.insert(entry)
    }

    /// Clear an entry. Returns true if it was flagged.
    pub fn remove(&mut self, entry: &T) -> bool {
        self.entries.remove(entry)
    }

    /// Membership query
    pub fn contains(&self, entry: &T) -> bool {
        self.entries.contains(entry)
    }

    /// Number of flagged entries
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate over flagged entries (no ordering guarantee)
    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }
}

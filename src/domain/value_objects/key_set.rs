//! KeySet value object - a set of node keys
//!
//! Used for the three tree state axes (expanded, checked, selected).
//! Operations that change membership return a new set; a set handed out to a
//! caller is never mutated behind its back.

use std::collections::BTreeSet;
use std::fmt;

use serde::{Deserialize, Serialize};

/// An ordered set of node keys
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct KeySet(BTreeSet<String>);

impl KeySet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn contains(&self, key: &str) -> bool {
        self.0.contains(key)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    /// Returns a copy with `key` added
    pub fn with(&self, key: &str) -> Self {
        let mut next = self.clone();
        next.insert(key);
        next
    }

    /// Returns a copy with `key` removed
    pub fn without(&self, key: &str) -> Self {
        let mut next = self.clone();
        next.remove(key);
        next
    }

    /// Returns a copy with `key` flipped
    pub fn toggled(&self, key: &str) -> Self {
        if self.contains(key) {
            self.without(key)
        } else {
            self.with(key)
        }
    }

    /// Returns a copy with every key of `other` added
    pub fn union(&self, other: &KeySet) -> Self {
        Self(self.0.union(&other.0).cloned().collect())
    }

    /// Returns a copy without any key of `other`
    pub fn difference(&self, other: &KeySet) -> Self {
        Self(self.0.difference(&other.0).cloned().collect())
    }

    /// Number of keys shared with `other`
    pub fn intersection_count(&self, other: &KeySet) -> usize {
        // Iterate the smaller side
        if self.len() <= other.len() {
            self.iter().filter(|k| other.contains(k)).count()
        } else {
            other.iter().filter(|k| self.contains(k)).count()
        }
    }

    pub fn to_vec(&self) -> Vec<String> {
        self.0.iter().cloned().collect()
    }

    // In-place mutation stays crate-private: builders inside the engine use it
    // on sets they own, never on a set received from a caller.
    pub(crate) fn insert(&mut self, key: impl Into<String>) -> bool {
        self.0.insert(key.into())
    }

    pub(crate) fn remove(&mut self, key: &str) -> bool {
        self.0.remove(key)
    }

    pub(crate) fn retain(&mut self, mut f: impl FnMut(&str) -> bool) {
        self.0.retain(|k| f(k));
    }
}

impl<S: Into<String>> FromIterator<S> for KeySet {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        Self(iter.into_iter().map(Into::into).collect())
    }
}

impl<'a> IntoIterator for &'a KeySet {
    type Item = &'a String;
    type IntoIter = std::collections::btree_set::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}

impl fmt::Display for KeySet {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{{")?;
        for (i, key) in self.0.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{}", key)?;
        }
        write!(f, "}}")
    }
}

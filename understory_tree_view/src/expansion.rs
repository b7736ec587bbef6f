// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Expansion set: which groups are open.

use core::hash::Hash;

use hashbrown::HashSet;

/// The set of expanded group identifiers.
///
/// Membership is advisory: an identifier may be expanded before (or after) its
/// item is registered. Traversal ignores entries without a live group.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ExpansionSet<K: Eq + Hash> {
    expanded: HashSet<K>,
}

impl<K: Eq + Hash> Default for ExpansionSet<K> {
    fn default() -> Self {
        Self {
            expanded: HashSet::new(),
        }
    }
}

impl<K: Eq + Hash> FromIterator<K> for ExpansionSet<K> {
    fn from_iter<I: IntoIterator<Item = K>>(iter: I) -> Self {
        Self {
            expanded: iter.into_iter().collect(),
        }
    }
}

impl<K: Eq + Hash> ExpansionSet<K> {
    /// Create an empty set.
    pub fn new() -> Self {
        Self::default()
    }

    /// Returns `true` if `id` is expanded.
    pub fn is_expanded(&self, id: &K) -> bool {
        self.expanded.contains(id)
    }

    /// Mark `id` expanded. Returns `true` if it was collapsed.
    pub fn expand(&mut self, id: K) -> bool {
        self.expanded.insert(id)
    }

    /// Mark `id` collapsed. Returns `true` if it was expanded.
    pub fn collapse(&mut self, id: &K) -> bool {
        self.expanded.remove(id)
    }

    /// Flip `id` and return its new state.
    pub fn toggle(&mut self, id: K) -> bool {
        if self.expanded.remove(&id) {
            false
        } else {
            self.expanded.insert(id);
            true
        }
    }

    /// Collapse everything. Returns `true` if anything was expanded.
    pub fn clear(&mut self) -> bool {
        let changed = !self.expanded.is_empty();
        self.expanded.clear();
        changed
    }

    /// Number of expanded identifiers.
    pub fn len(&self) -> usize {
        self.expanded.len()
    }

    /// Returns `true` if nothing is expanded.
    pub fn is_empty(&self) -> bool {
        self.expanded.is_empty()
    }

    /// Expanded identifiers, in no particular order.
    pub fn iter(&self) -> impl Iterator<Item = &K> + '_ {
        self.expanded.iter()
    }
}

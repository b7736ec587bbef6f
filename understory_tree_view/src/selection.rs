// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Selection set with single and multiple modes.

use alloc::vec::Vec;

/// Whether more than one item may be selected at a time.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum SelectionMode {
    /// At most one selected item.
    #[default]
    Single,
    /// Any number of selected items.
    Multiple,
}

impl SelectionMode {
    /// Mode for the `multiple` configuration flag.
    pub const fn from_multiple(multiple: bool) -> Self {
        if multiple {
            Self::Multiple
        } else {
            Self::Single
        }
    }
}

/// Selected identifiers in selection order.
///
/// In [`SelectionMode::Single`] the set never holds more than one identifier:
/// selecting replaces the previous selection in one step.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SelectionSet<K> {
    mode: SelectionMode,
    selected: Vec<K>,
}

impl<K: PartialEq> SelectionSet<K> {
    /// Create an empty selection.
    pub const fn new(mode: SelectionMode) -> Self {
        Self {
            mode,
            selected: Vec::new(),
        }
    }

    /// Selection mode fixed at construction.
    pub fn mode(&self) -> SelectionMode {
        self.mode
    }

    /// Returns `true` if `id` is selected.
    pub fn is_selected(&self, id: &K) -> bool {
        self.selected.contains(id)
    }

    /// The first selected identifier, or `None` if nothing is selected.
    pub fn first(&self) -> Option<&K> {
        self.selected.first()
    }

    /// Select `id`. Returns `true` if the selection changed.
    ///
    /// Single mode replaces the current selection; multiple mode adds to it.
    pub fn select(&mut self, id: K) -> bool {
        match self.mode {
            SelectionMode::Single => {
                if self.selected.len() == 1 && self.selected[0] == id {
                    return false;
                }
                self.selected.clear();
                self.selected.push(id);
                true
            }
            SelectionMode::Multiple => {
                if self.selected.contains(&id) {
                    return false;
                }
                self.selected.push(id);
                true
            }
        }
    }

    /// Deselect `id`. Returns `true` if it was selected.
    pub fn deselect(&mut self, id: &K) -> bool {
        let before = self.selected.len();
        self.selected.retain(|s| s != id);
        self.selected.len() != before
    }

    /// Toggle `id` and return whether it is selected afterwards.
    ///
    /// In single mode toggling a non-selected item replaces the selection.
    pub fn toggle_select(&mut self, id: K) -> bool {
        if self.deselect(&id) {
            false
        } else {
            self.select(id);
            true
        }
    }

    /// Deselect everything. Returns `true` if anything was selected.
    pub fn clear(&mut self) -> bool {
        let changed = !self.selected.is_empty();
        self.selected.clear();
        changed
    }

    /// Replace the selection wholesale.
    ///
    /// Duplicates are dropped. In single mode only the last identifier is
    /// kept. Returns `true` if the selection changed.
    pub fn replace(&mut self, ids: impl IntoIterator<Item = K>) -> bool {
        let mut next: Vec<K> = Vec::new();
        for id in ids {
            match self.mode {
                SelectionMode::Single => {
                    next.clear();
                    next.push(id);
                }
                SelectionMode::Multiple => {
                    if !next.contains(&id) {
                        next.push(id);
                    }
                }
            }
        }
        if next == self.selected {
            return false;
        }
        self.selected = next;
        true
    }

    /// Selected identifiers in selection order.
    pub fn as_slice(&self) -> &[K] {
        &self.selected
    }

    /// Number of selected identifiers.
    pub fn len(&self) -> usize {
        self.selected.len()
    }

    /// Returns `true` if nothing is selected.
    pub fn is_empty(&self) -> bool {
        self.selected.is_empty()
    }
}

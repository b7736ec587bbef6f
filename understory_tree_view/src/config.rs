// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Construction-time configuration.

use alloc::vec::Vec;

use crate::snapshot::TreeViewSnapshot;
use crate::typeahead::DEFAULT_TYPEAHEAD_TIMEOUT_MS;

/// Initial state and behavior switches for a [`TreeView`](crate::TreeView).
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TreeViewConfig<K> {
    /// Allow more than one selected item. Fixed for the lifetime of the view.
    pub multiple: bool,
    /// Groups expanded at construction. They need not be registered yet.
    pub expanded: Vec<K>,
    /// Items selected at construction, in selection order.
    ///
    /// In single mode only the last entry is kept.
    pub selected: Vec<K>,
    /// Item focused at construction.
    pub focused: Option<K>,
    /// Report expand/collapse of a leaf as
    /// [`TreeError::InvalidTarget`](crate::TreeError::InvalidTarget) instead of
    /// ignoring it.
    pub strict: bool,
    /// Milliseconds after which the type-ahead buffer starts over.
    pub typeahead_timeout: u64,
}

impl<K> Default for TreeViewConfig<K> {
    fn default() -> Self {
        Self {
            multiple: false,
            expanded: Vec::new(),
            selected: Vec::new(),
            focused: None,
            strict: false,
            typeahead_timeout: DEFAULT_TYPEAHEAD_TIMEOUT_MS,
        }
    }
}

impl<K> TreeViewConfig<K> {
    /// Configuration restoring a previously taken snapshot.
    pub fn from_snapshot(snapshot: TreeViewSnapshot<K>) -> Self {
        Self {
            multiple: snapshot.multiple,
            expanded: snapshot.expanded,
            selected: snapshot.selected,
            focused: snapshot.focused,
            ..Self::default()
        }
    }
}

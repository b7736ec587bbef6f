// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Persistable view state.

use alloc::vec::Vec;

/// The user-visible state of a tree view, for host persistence.
///
/// Restore with [`TreeViewConfig::from_snapshot`](crate::TreeViewConfig::from_snapshot).
#[derive(Clone, Debug, Default, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct TreeViewSnapshot<K> {
    /// Selection mode at the time of the snapshot.
    pub multiple: bool,
    /// Expanded group identifiers, in no particular order.
    pub expanded: Vec<K>,
    /// Selected identifiers in selection order.
    pub selected: Vec<K>,
    /// Focused item, if any.
    pub focused: Option<K>,
}

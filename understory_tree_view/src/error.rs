// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for tree view operations.

use core::fmt::Debug;

/// Conditions reported by the tree view engine.
///
/// Only [`TreeError::DuplicateItem`] is always returned to the caller. The
/// other variants are recovered internally unless the engine runs in strict
/// mode (see [`TreeViewConfig::strict`](crate::TreeViewConfig::strict)).
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum TreeError<K: Debug> {
    /// An item with this identifier is already registered.
    #[error("tree item {0:?} is already registered")]
    DuplicateItem(K),
    /// Expand/collapse was requested for an item that is not a group.
    #[error("tree item {0:?} is not a group and cannot be expanded or collapsed")]
    InvalidTarget(K),
    /// The identifier does not refer to a registered item.
    #[error("tree item {0:?} is not registered")]
    NotFound(K),
}

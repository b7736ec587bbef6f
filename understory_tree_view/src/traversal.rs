// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Visible traversal order.
//!
//! The order is a depth-first pre-order walk from the roots in registration
//! order, descending only into expanded groups. It is recomputed on demand;
//! nothing here is cached.

use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use crate::expansion::ExpansionSet;
use crate::registry::ItemRegistry;

/// A computed visible order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct VisibleOrder<K> {
    items: Vec<K>,
}

impl<K: PartialEq> VisibleOrder<K> {
    /// Index of `id` in the order, or `None` if it is not visible.
    pub fn position(&self, id: &K) -> Option<usize> {
        self.items.iter().position(|k| k == id)
    }

    /// Returns `true` if `id` is visible.
    pub fn contains(&self, id: &K) -> bool {
        self.items.contains(id)
    }

    /// Item after `id`, or `None` if `id` is last or not visible.
    pub fn next(&self, id: &K) -> Option<&K> {
        let at = self.position(id)?;
        self.items.get(at + 1)
    }

    /// Item before `id`, or `None` if `id` is first or not visible.
    pub fn previous(&self, id: &K) -> Option<&K> {
        let at = self.position(id)?;
        at.checked_sub(1).and_then(|i| self.items.get(i))
    }

    /// First visible item.
    pub fn first(&self) -> Option<&K> {
        self.items.first()
    }

    /// Last visible item.
    pub fn last(&self) -> Option<&K> {
        self.items.last()
    }

    /// The order as a slice.
    pub fn as_slice(&self) -> &[K] {
        &self.items
    }

    /// Number of visible items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if no item is visible.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Iterate in visible order.
    pub fn iter(&self) -> core::slice::Iter<'_, K> {
        self.items.iter()
    }

    /// Consume into the underlying vector.
    pub fn into_vec(self) -> Vec<K> {
        self.items
    }
}

impl<'a, K> IntoIterator for &'a VisibleOrder<K> {
    type Item = &'a K;
    type IntoIter = core::slice::Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.items.iter()
    }
}

/// Compute the visible order of `registry` under `expansion`.
///
/// Expansion entries for identifiers that are not registered groups are
/// ignored. Cost is proportional to the number of visible items plus the
/// number of root items.
pub fn visible_order<K>(registry: &ItemRegistry<K>, expansion: &ExpansionSet<K>) -> VisibleOrder<K>
where
    K: Clone + Eq + Hash + Debug,
{
    let mut items = Vec::new();
    let mut stack: Vec<&K> = registry.roots().iter().rev().collect();
    while let Some(id) = stack.pop() {
        items.push(id.clone());
        if registry.is_group(id) && expansion.is_expanded(id) {
            stack.extend(registry.children_of(id).iter().rev());
        }
    }
    VisibleOrder { items }
}

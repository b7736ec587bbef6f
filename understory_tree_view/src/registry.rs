// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Item registry: which items are mounted and how they nest.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use hashbrown::HashMap;
use log::{error, trace};

use crate::error::TreeError;

/// Properties supplied by the host when an item mounts.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ItemProps<K> {
    /// Group this item belongs to, or `None` for a root item.
    pub parent: Option<K>,
    /// Whether the item is a group.
    ///
    /// A group may currently have zero children and still be expandable.
    pub has_children: bool,
    /// Display name used by type-ahead search.
    pub label: String,
}

impl<K> Default for ItemProps<K> {
    fn default() -> Self {
        Self {
            parent: None,
            has_children: false,
            label: String::new(),
        }
    }
}

impl<K> ItemProps<K> {
    /// A root leaf with the given label.
    pub fn leaf(label: impl Into<String>) -> Self {
        Self {
            label: label.into(),
            ..Self::default()
        }
    }

    /// A root group with the given label.
    pub fn group(label: impl Into<String>) -> Self {
        Self {
            has_children: true,
            label: label.into(),
            ..Self::default()
        }
    }

    /// Place the item inside `parent`.
    #[must_use]
    pub fn in_group(mut self, parent: K) -> Self {
        self.parent = Some(parent);
        self
    }
}

/// Metadata of a registered item.
#[derive(Clone, Debug)]
pub struct Item<K> {
    parent: Option<K>,
    has_children: bool,
    label: String,
    order: u64,
}

impl<K> Item<K> {
    /// Parent group, or `None` for roots.
    pub fn parent(&self) -> Option<&K> {
        self.parent.as_ref()
    }

    /// Whether this item is a group.
    pub fn is_group(&self) -> bool {
        self.has_children
    }

    /// Display name.
    pub fn label(&self) -> &str {
        &self.label
    }

    /// Registration index; later registrations have larger values.
    pub fn order(&self) -> u64 {
        self.order
    }
}

/// Flat, insertion-ordered mapping from identifier to item metadata.
///
/// Children are kept per parent identifier, in registration order. An item may
/// register before its parent does; it simply stays unreachable from the roots
/// until the parent arrives. All lookups are total: unknown identifiers yield
/// `None` or an empty slice.
#[derive(Clone)]
pub struct ItemRegistry<K> {
    items: HashMap<K, Item<K>>,
    roots: Vec<K>,
    children: HashMap<K, Vec<K>>,
    next_order: u64,
}

impl<K: Debug> Debug for ItemRegistry<K> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("ItemRegistry")
            .field("items", &self.items.len())
            .field("roots", &self.roots)
            .field("next_order", &self.next_order)
            .finish_non_exhaustive()
    }
}

impl<K> Default for ItemRegistry<K> {
    fn default() -> Self {
        Self {
            items: HashMap::new(),
            roots: Vec::new(),
            children: HashMap::new(),
            next_order: 0,
        }
    }
}

impl<K: Clone + Eq + Hash + Debug> ItemRegistry<K> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a mounted item.
    ///
    /// Fails with [`TreeError::DuplicateItem`] if `id` is already registered;
    /// this indicates a bug in the host adapter.
    pub fn register(&mut self, id: K, props: ItemProps<K>) -> Result<(), TreeError<K>> {
        if self.items.contains_key(&id) {
            error!("duplicate tree item registration: {id:?}");
            return Err(TreeError::DuplicateItem(id));
        }
        let order = self.next_order;
        self.next_order += 1;
        match &props.parent {
            Some(parent) => self
                .children
                .entry(parent.clone())
                .or_default()
                .push(id.clone()),
            None => self.roots.push(id.clone()),
        }
        trace!("registered tree item {id:?} under {:?}", props.parent);
        self.items.insert(
            id,
            Item {
                parent: props.parent,
                has_children: props.has_children,
                label: props.label,
                order,
            },
        );
        Ok(())
    }

    /// Remove an item. Unknown identifiers are ignored.
    ///
    /// Children of the removed item keep their own registrations; they become
    /// unreachable until a group with the same identifier registers again.
    /// Returns `true` if an item was removed.
    pub fn unregister(&mut self, id: &K) -> bool {
        let Some(item) = self.items.remove(id) else {
            return false;
        };
        match &item.parent {
            Some(parent) => {
                if let Some(siblings) = self.children.get_mut(parent) {
                    siblings.retain(|c| c != id);
                    if siblings.is_empty() {
                        self.children.remove(parent);
                    }
                }
            }
            None => self.roots.retain(|r| r != id),
        }
        trace!("unregistered tree item {id:?}");
        true
    }

    /// Returns `true` if `id` is registered.
    pub fn contains(&self, id: &K) -> bool {
        self.items.contains_key(id)
    }

    /// Metadata for `id`.
    pub fn get(&self, id: &K) -> Option<&Item<K>> {
        self.items.get(id)
    }

    /// Number of registered items.
    pub fn len(&self) -> usize {
        self.items.len()
    }

    /// Returns `true` if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Root items in registration order.
    pub fn roots(&self) -> &[K] {
        &self.roots
    }

    /// Registered children of `id` in registration order.
    pub fn children_of(&self, id: &K) -> &[K] {
        self.children.get(id).map(Vec::as_slice).unwrap_or(&[])
    }

    /// Parent group of `id`, or `None` for roots and unknown identifiers.
    pub fn parent_of(&self, id: &K) -> Option<&K> {
        self.items.get(id).and_then(Item::parent)
    }

    /// Returns `true` if `id` is a registered group.
    pub fn is_group(&self, id: &K) -> bool {
        self.items.get(id).is_some_and(Item::is_group)
    }

    /// Display name of `id`.
    pub fn label_of(&self, id: &K) -> Option<&str> {
        self.items.get(id).map(Item::label)
    }

    /// Replace the display name of a registered item.
    pub fn set_label(&mut self, id: &K, label: impl Into<String>) -> Result<(), TreeError<K>> {
        match self.items.get_mut(id) {
            Some(item) => {
                item.label = label.into();
                Ok(())
            }
            None => Err(TreeError::NotFound(id.clone())),
        }
    }

    /// Nesting level of `id`, starting at 1 for root items.
    ///
    /// Returns `None` if `id` or one of its ancestors is not registered.
    pub fn level_of(&self, id: &K) -> Option<usize> {
        let mut level = 1;
        let mut current = self.items.get(id)?;
        while let Some(parent) = &current.parent {
            current = self.items.get(parent)?;
            level += 1;
            if level > self.items.len() {
                // Parent links form a loop; nothing in it is reachable.
                return None;
            }
        }
        Some(level)
    }

    /// Identifiers of all registered groups, in no particular order.
    pub fn groups(&self) -> impl Iterator<Item = &K> + '_ {
        self.items
            .iter()
            .filter_map(|(id, item)| item.has_children.then_some(id))
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tree view engine.

use alloc::string::String;
use alloc::vec::Vec;
use core::fmt::Debug;
use core::hash::Hash;

use log::{debug, trace, warn};
use understory_kbd::KeyEvent;
use understory_observe::{Derived, Observable, SubscriptionId};

use crate::config::TreeViewConfig;
use crate::error::TreeError;
use crate::expansion::ExpansionSet;
use crate::keyboard::{KeyIntent, KeyOutcome, TreeAction, intent_for};
use crate::registry::{ItemProps, ItemRegistry};
use crate::selection::{SelectionMode, SelectionSet};
use crate::snapshot::TreeViewSnapshot;
use crate::traversal::{VisibleOrder, visible_order};
use crate::typeahead::TypeAhead;

/// A single tree instance: registry, expansion, selection and focus.
///
/// Every transition is synchronous. Subscribers of a channel are notified
/// once per transition, after the state is final.
#[derive(Debug)]
pub struct TreeView<K: Eq + Hash> {
    registry: ItemRegistry<K>,
    expanded: Observable<ExpansionSet<K>>,
    selected: Observable<SelectionSet<K>>,
    first_selected: Derived<Option<K>>,
    focus: Observable<Option<K>>,
    typeahead: TypeAhead,
    strict: bool,
}

impl<K: Clone + Eq + Hash + Debug> Default for TreeView<K> {
    fn default() -> Self {
        Self::new(TreeViewConfig::default())
    }
}

impl<K: Clone + Eq + Hash + Debug> TreeView<K> {
    /// Create a tree view from its initial configuration.
    pub fn new(config: TreeViewConfig<K>) -> Self {
        let mut selection = SelectionSet::new(SelectionMode::from_multiple(config.multiple));
        selection.replace(config.selected);
        let first = selection.first().cloned();
        let selected = Observable::new(selection);
        let first_selected = Derived::new(&[selected.version()], first);
        Self {
            registry: ItemRegistry::new(),
            expanded: Observable::new(config.expanded.into_iter().collect()),
            selected,
            first_selected,
            focus: Observable::new(config.focused),
            typeahead: TypeAhead::new(config.typeahead_timeout),
            strict: config.strict,
        }
    }

    // --- registry ---

    /// Register a mounted item.
    pub fn register(&mut self, id: K, props: ItemProps<K>) -> Result<(), TreeError<K>> {
        self.registry.register(id, props)
    }

    /// Unregister an unmounted item. Unknown identifiers are ignored.
    ///
    /// Expansion and selection entries for `id` are kept so that a remount
    /// restores them. A focus pointer on `id` goes stale and is recovered by
    /// the next navigation command.
    pub fn unregister(&mut self, id: &K) -> bool {
        self.registry.unregister(id)
    }

    /// Read access to the item registry.
    pub fn registry(&self) -> &ItemRegistry<K> {
        &self.registry
    }

    /// Replace the display name of a registered item.
    pub fn set_label(&mut self, id: &K, label: impl Into<String>) -> Result<(), TreeError<K>> {
        self.registry.set_label(id, label)
    }

    // --- expansion ---

    /// Current expansion set.
    pub fn expanded(&self) -> &ExpansionSet<K> {
        self.expanded.get()
    }

    /// Returns `true` if `id` is expanded.
    pub fn is_expanded(&self, id: &K) -> bool {
        self.expanded.get().is_expanded(id)
    }

    /// Expand a group. Returns `Ok(true)` if it was collapsed.
    pub fn expand(&mut self, id: K) -> Result<bool, TreeError<K>> {
        if !self.accepts_expansion(&id)? {
            return Ok(false);
        }
        debug!("expand {id:?}");
        Ok(self.expanded.update(|e| e.expand(id)))
    }

    /// Collapse a group. Returns `Ok(true)` if it was expanded.
    pub fn collapse(&mut self, id: &K) -> Result<bool, TreeError<K>> {
        if !self.accepts_expansion(id)? {
            return Ok(false);
        }
        debug!("collapse {id:?}");
        Ok(self.expanded.update(|e| e.collapse(id)))
    }

    /// Flip a group and return whether it is expanded afterwards.
    pub fn toggle_expanded(&mut self, id: K) -> Result<bool, TreeError<K>> {
        if !self.accepts_expansion(&id)? {
            return Ok(false);
        }
        let mut now_expanded = false;
        self.expanded.update(|e| {
            now_expanded = e.toggle(id);
            true
        });
        Ok(now_expanded)
    }

    /// Expand every registered group. Returns `true` if anything changed.
    pub fn expand_all(&mut self) -> bool {
        let groups: Vec<K> = self.registry.groups().cloned().collect();
        self.expanded.update(|e| {
            let mut changed = false;
            for group in groups {
                changed |= e.expand(group);
            }
            changed
        })
    }

    /// Collapse everything. Returns `true` if anything changed.
    pub fn collapse_all(&mut self) -> bool {
        self.expanded.update(ExpansionSet::clear)
    }

    /// Replace the expansion set.
    ///
    /// Registered leaves are dropped from `ids`. Returns `true` if the set
    /// changed.
    pub fn set_expanded(&mut self, ids: impl IntoIterator<Item = K>) -> bool {
        let registry = &self.registry;
        let next: ExpansionSet<K> = ids
            .into_iter()
            .filter(|id| {
                let leaf = registry.contains(id) && !registry.is_group(id);
                if leaf {
                    warn!("dropping leaf {id:?} from expansion set");
                }
                !leaf
            })
            .collect();
        self.expanded.set(next)
    }

    /// `Ok(false)` for a leaf in lenient mode, `Err` for a leaf in strict mode.
    fn accepts_expansion(&self, id: &K) -> Result<bool, TreeError<K>> {
        if self.registry.contains(id) && !self.registry.is_group(id) {
            if self.strict {
                return Err(TreeError::InvalidTarget(id.clone()));
            }
            warn!("ignoring expand/collapse of leaf {id:?}");
            return Ok(false);
        }
        Ok(true)
    }

    // --- selection ---

    /// Current selection.
    pub fn selection(&self) -> &SelectionSet<K> {
        self.selected.get()
    }

    /// Selected identifiers in selection order.
    pub fn selected(&self) -> &[K] {
        self.selected.get().as_slice()
    }

    /// Returns `true` if `id` is selected.
    pub fn is_selected(&self, id: &K) -> bool {
        self.selected.get().is_selected(id)
    }

    /// The first selected item.
    pub fn first_selected(&self) -> Option<&K> {
        self.first_selected.get().as_ref()
    }

    /// Select `id`. Returns `true` if the selection changed.
    pub fn select(&mut self, id: K) -> bool {
        self.update_selection(|s| s.select(id))
    }

    /// Deselect `id`. Returns `true` if it was selected.
    pub fn deselect(&mut self, id: &K) -> bool {
        self.update_selection(|s| s.deselect(id))
    }

    /// Toggle `id` and return whether it is selected afterwards.
    pub fn toggle_select(&mut self, id: K) -> bool {
        let mut now_selected = false;
        self.update_selection(|s| {
            now_selected = s.toggle_select(id);
            true
        });
        now_selected
    }

    /// Deselect everything. Returns `true` if anything was selected.
    pub fn clear_selection(&mut self) -> bool {
        self.update_selection(SelectionSet::clear)
    }

    /// Replace the selection. In single mode only the last identifier is kept.
    pub fn set_selected(&mut self, ids: impl IntoIterator<Item = K>) -> bool {
        self.update_selection(|s| s.replace(ids))
    }

    fn update_selection(&mut self, f: impl FnOnce(&mut SelectionSet<K>) -> bool) -> bool {
        let changed = self.selected.update(f);
        if changed {
            let selected = &self.selected;
            self.first_selected
                .sync(&[selected.version()], || selected.get().first().cloned());
        }
        changed
    }

    // --- focus ---

    /// The focused item, which may be stale after an unregister or collapse.
    pub fn focused(&self) -> Option<&K> {
        self.focus.get().as_ref()
    }

    /// Record that `id` received focus.
    ///
    /// Unknown identifiers and items hidden inside a collapsed group are
    /// ignored. Returns `true` if the focus pointer moved.
    pub fn focus(&mut self, id: K) -> bool {
        if !self.visible_order().contains(&id) {
            debug!("focus on unregistered or hidden item {id:?} ignored");
            return false;
        }
        self.focus.set(Some(id))
    }

    /// Drop the focus pointer.
    pub fn clear_focus(&mut self) -> bool {
        self.focus.set(None)
    }

    // --- traversal ---

    /// The visible order under the current expansion state.
    pub fn visible_order(&self) -> VisibleOrder<K> {
        visible_order(&self.registry, self.expanded.get())
    }

    /// Visible item after `id`.
    pub fn next_visible(&self, id: &K) -> Option<K> {
        self.visible_order().next(id).cloned()
    }

    /// Visible item before `id`.
    pub fn previous_visible(&self, id: &K) -> Option<K> {
        self.visible_order().previous(id).cloned()
    }

    /// First visible item.
    pub fn first_visible(&self) -> Option<K> {
        self.visible_order().first().cloned()
    }

    /// Last visible item. Collapsed groups are never entered.
    pub fn last_visible(&self) -> Option<K> {
        self.visible_order().last().cloned()
    }

    // --- input ---

    /// Handle a key press at time `now` (milliseconds).
    ///
    /// If the focused item is missing or hidden, commands that depend on it
    /// move focus to the first visible item instead.
    pub fn handle_key(&mut self, event: impl Into<KeyEvent>, now: u64) -> KeyOutcome<K> {
        let event = event.into();
        let intent = intent_for(&event);
        if !matches!(intent, Some(KeyIntent::Search(_))) {
            self.typeahead.clear();
        }
        let Some(intent) = intent else {
            trace!("tree ignores {:?}", event.key);
            return KeyOutcome::unhandled(self.focus.get().clone());
        };

        let order = self.visible_order();
        let current = self.focus.get().as_ref().and_then(|f| order.position(f));
        trace!("tree key {intent:?} at {current:?}");

        let action = match (intent, current) {
            (KeyIntent::Search(c), _) => self.search(c, now, &order, current),
            (KeyIntent::First, _) => self.move_focus(order.first()),
            (KeyIntent::Last, _) => self.move_focus(order.last()),
            (_, None) => {
                debug!(
                    "focus {:?} is not visible; falling back to first item",
                    self.focus.get()
                );
                self.move_focus(order.first())
            }
            (KeyIntent::ToggleSelect, Some(at)) => {
                let id = order.as_slice()[at].clone();
                let selected = self.toggle_select(id.clone());
                TreeAction::Selected { id, selected }
            }
            (KeyIntent::Next, Some(at)) => self.move_focus(order.as_slice().get(at + 1)),
            (KeyIntent::Previous, Some(at)) => {
                self.move_focus(at.checked_sub(1).and_then(|i| order.as_slice().get(i)))
            }
            (KeyIntent::ExpandOrEnter, Some(at)) => {
                let id = order.as_slice()[at].clone();
                self.expand_or_enter(id)
            }
            (KeyIntent::CollapseOrExit, Some(at)) => {
                let id = order.as_slice()[at].clone();
                self.collapse_or_exit(id)
            }
        };

        KeyOutcome {
            action,
            focus: self.focus.get().clone(),
            handled: true,
        }
    }

    /// Handle pointer activation of `id`.
    ///
    /// Focuses the item, toggles its selection and, for groups, toggles its
    /// expansion. Returns `false` for unknown identifiers.
    pub fn click(&mut self, id: K) -> bool {
        if !self.registry.contains(&id) {
            return false;
        }
        self.typeahead.clear();
        self.focus.set(Some(id.clone()));
        self.toggle_select(id.clone());
        if self.registry.is_group(&id) {
            self.expanded.update(|e| {
                e.toggle(id);
                true
            });
        }
        true
    }

    /// Drop the type-ahead buffer if its window elapsed at `now`.
    pub fn expire_typeahead(&mut self, now: u64) -> bool {
        self.typeahead.expire(now)
    }

    fn search(
        &mut self,
        c: char,
        now: u64,
        order: &VisibleOrder<K>,
        current: Option<usize>,
    ) -> TreeAction<K> {
        self.typeahead.push(c, now);
        let matched = self
            .typeahead
            .search(order.as_slice(), current, |id| self.registry.label_of(id))
            .cloned();
        if let Some(hit) = &matched {
            self.focus.set(Some(hit.clone()));
        }
        TreeAction::Searched { matched }
    }

    fn move_focus(&mut self, target: Option<&K>) -> TreeAction<K> {
        let Some(to) = target else {
            return TreeAction::Ignored;
        };
        let from = self.focus.get().clone();
        if from.as_ref() == Some(to) {
            return TreeAction::Ignored;
        }
        self.focus.set(Some(to.clone()));
        TreeAction::Moved {
            from,
            to: to.clone(),
        }
    }

    fn expand_or_enter(&mut self, id: K) -> TreeAction<K> {
        if !self.registry.is_group(&id) {
            return TreeAction::Ignored;
        }
        if !self.is_expanded(&id) {
            debug!("expand {id:?}");
            self.expanded.update(|e| e.expand(id.clone()));
            return TreeAction::Expanded(id);
        }
        let first_child = self.registry.children_of(&id).first().cloned();
        self.move_focus(first_child.as_ref())
    }

    fn collapse_or_exit(&mut self, id: K) -> TreeAction<K> {
        if self.registry.is_group(&id) && self.is_expanded(&id) {
            debug!("collapse {id:?}");
            self.expanded.update(|e| e.collapse(&id));
            return TreeAction::Collapsed(id);
        }
        let parent = self.registry.parent_of(&id).cloned();
        self.move_focus(parent.as_ref())
    }

    // --- subscriptions ---

    /// Subscribe to expansion changes.
    pub fn subscribe_expanded(
        &mut self,
        callback: impl FnMut(&ExpansionSet<K>) + 'static,
    ) -> SubscriptionId {
        self.expanded.subscribe(callback)
    }

    /// Subscribe to selection changes.
    pub fn subscribe_selected(
        &mut self,
        callback: impl FnMut(&SelectionSet<K>) + 'static,
    ) -> SubscriptionId {
        self.selected.subscribe(callback)
    }

    /// Subscribe to changes of the first selected item.
    pub fn subscribe_first_selected(
        &mut self,
        callback: impl FnMut(&Option<K>) + 'static,
    ) -> SubscriptionId {
        self.first_selected.subscribe(callback)
    }

    /// Subscribe to focus changes.
    pub fn subscribe_focus(&mut self, callback: impl FnMut(&Option<K>) + 'static) -> SubscriptionId {
        self.focus.subscribe(callback)
    }

    /// Remove a subscription made on any channel of this view.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.expanded.unsubscribe(id)
            || self.selected.unsubscribe(id)
            || self.first_selected.unsubscribe(id)
            || self.focus.unsubscribe(id)
    }

    // --- persistence ---

    /// Capture the user-visible state.
    pub fn snapshot(&self) -> TreeViewSnapshot<K> {
        TreeViewSnapshot {
            multiple: self.selected.get().mode() == SelectionMode::Multiple,
            expanded: self.expanded.get().iter().cloned().collect(),
            selected: self.selected().to_vec(),
            focused: self.focus.get().clone(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::RefCell;
    use understory_kbd::{Key, Modifiers};

    /// A (leaf), B (group: B1, B2), C (leaf).
    fn abc(config: TreeViewConfig<&'static str>) -> TreeView<&'static str> {
        let mut tree = TreeView::new(config);
        tree.register("A", ItemProps::leaf("A")).unwrap();
        tree.register("B", ItemProps::group("B")).unwrap();
        tree.register("B1", ItemProps::leaf("B1").in_group("B")).unwrap();
        tree.register("B2", ItemProps::leaf("B2").in_group("B")).unwrap();
        tree.register("C", ItemProps::leaf("C")).unwrap();
        tree
    }

    fn order(tree: &TreeView<&'static str>) -> Vec<&'static str> {
        tree.visible_order().into_vec()
    }

    fn press(tree: &mut TreeView<&'static str>, key: Key) -> KeyOutcome<&'static str> {
        tree.handle_key(key, 0)
    }

    #[test]
    fn arrow_right_expands_collapsed_group() {
        let mut tree = abc(TreeViewConfig::default());
        assert_eq!(order(&tree), vec!["A", "B", "C"]);
        tree.focus("B");
        let out = press(&mut tree, Key::ArrowRight);
        assert_eq!(out.action, TreeAction::Expanded("B"));
        assert_eq!(out.focus, Some("B"));
        assert!(out.handled);
        assert_eq!(order(&tree), vec!["A", "B", "B1", "B2", "C"]);
    }

    #[test]
    fn arrow_right_enters_expanded_group() {
        let mut tree = abc(TreeViewConfig {
            expanded: vec!["B"],
            ..TreeViewConfig::default()
        });
        tree.focus("B");
        let out = press(&mut tree, Key::ArrowRight);
        assert_eq!(
            out.action,
            TreeAction::Moved {
                from: Some("B"),
                to: "B1"
            }
        );
        assert_eq!(tree.focused(), Some(&"B1"));
    }

    #[test]
    fn arrow_right_on_leaf_or_empty_group_is_noop() {
        let mut tree = abc(TreeViewConfig::default());
        tree.register("E", ItemProps::group("E")).unwrap();
        tree.expand("E").unwrap();
        tree.focus("E");
        assert_eq!(press(&mut tree, Key::ArrowRight).action, TreeAction::Ignored);
        tree.focus("A");
        let out = press(&mut tree, Key::ArrowRight);
        assert_eq!(out.action, TreeAction::Ignored);
        assert_eq!(out.focus, Some("A"));
        assert!(out.handled);
    }

    #[test]
    fn arrow_left_moves_to_parent_then_collapses() {
        let mut tree = abc(TreeViewConfig {
            expanded: vec!["B"],
            ..TreeViewConfig::default()
        });
        tree.focus("B1");
        press(&mut tree, Key::ArrowLeft);
        assert_eq!(tree.focused(), Some(&"B"));
        assert!(tree.is_expanded(&"B"));

        let out = press(&mut tree, Key::ArrowLeft);
        assert_eq!(out.action, TreeAction::Collapsed("B"));
        assert_eq!(tree.focused(), Some(&"B"));
        assert_eq!(order(&tree), vec!["A", "B", "C"]);

        // Collapsed root group: nowhere to go.
        assert_eq!(press(&mut tree, Key::ArrowLeft).action, TreeAction::Ignored);
    }

    #[test]
    fn up_and_down_stop_at_the_ends() {
        let mut tree = abc(TreeViewConfig::default());
        tree.focus("A");
        assert_eq!(press(&mut tree, Key::ArrowUp).action, TreeAction::Ignored);
        press(&mut tree, Key::ArrowDown);
        press(&mut tree, Key::ArrowDown);
        assert_eq!(tree.focused(), Some(&"C"));
        assert_eq!(press(&mut tree, Key::ArrowDown).action, TreeAction::Ignored);
        press(&mut tree, Key::ArrowUp);
        assert_eq!(tree.focused(), Some(&"B"));
        assert!(tree.expanded().is_empty());
        assert!(tree.selected().is_empty());
    }

    #[test]
    fn end_lands_on_collapsed_last_group() {
        let mut tree = TreeView::new(TreeViewConfig::default());
        tree.register("A", ItemProps::leaf("A")).unwrap();
        tree.register("Z", ItemProps::group("Z")).unwrap();
        tree.register("Z1", ItemProps::leaf("Z1").in_group("Z")).unwrap();
        tree.focus("A");
        press(&mut tree, Key::End);
        assert_eq!(tree.focused(), Some(&"Z"));
        assert!(!tree.is_expanded(&"Z"));
        press(&mut tree, Key::Home);
        assert_eq!(tree.focused(), Some(&"A"));
    }

    #[test]
    fn enter_and_space_toggle_selection() {
        let mut tree = abc(TreeViewConfig::default());
        tree.focus("A");
        let out = press(&mut tree, Key::Enter);
        assert_eq!(
            out.action,
            TreeAction::Selected {
                id: "A",
                selected: true
            }
        );
        assert_eq!(out.focus, Some("A"));
        tree.focus("C");
        press(&mut tree, Key::Space);
        assert_eq!(tree.selected(), &["C"]);
        press(&mut tree, Key::Space);
        assert!(tree.selected().is_empty());
        assert_eq!(tree.first_selected(), None);
    }

    #[test]
    fn multiple_mode_accumulates() {
        let mut tree = abc(TreeViewConfig {
            multiple: true,
            ..TreeViewConfig::default()
        });
        tree.focus("C");
        press(&mut tree, Key::Enter);
        tree.focus("A");
        press(&mut tree, Key::Enter);
        assert_eq!(tree.selected(), &["C", "A"]);
        assert_eq!(tree.first_selected(), Some(&"C"));
        tree.deselect(&"C");
        assert_eq!(tree.first_selected(), Some(&"A"));
    }

    #[test]
    fn typeahead_cycles_through_matches() {
        let mut tree = TreeView::new(TreeViewConfig::default());
        tree.register("apple", ItemProps::leaf("Apple")).unwrap();
        tree.register("banana", ItemProps::leaf("Banana")).unwrap();
        tree.register("avocado", ItemProps::leaf("Avocado")).unwrap();
        tree.focus("apple");

        let out = tree.handle_key(Key::Character('a'), 1_000);
        assert_eq!(
            out.action,
            TreeAction::Searched {
                matched: Some("avocado")
            }
        );
        tree.handle_key(Key::Character('a'), 1_100);
        assert_eq!(tree.focused(), Some(&"apple"));

        // A fresh search after the window elapsed.
        tree.handle_key(Key::Character('b'), 5_000);
        assert_eq!(tree.focused(), Some(&"banana"));
        let out = tree.handle_key(Key::Character('z'), 10_000);
        assert_eq!(out.action, TreeAction::Searched { matched: None });
        assert_eq!(tree.focused(), Some(&"banana"));
    }

    #[test]
    fn typeahead_skips_collapsed_subtrees() {
        let mut tree = abc(TreeViewConfig::default());
        tree.set_label(&"B1", "Zebra").unwrap();
        tree.focus("A");
        tree.handle_key(Key::Character('z'), 0);
        assert_eq!(tree.focused(), Some(&"A"));
        tree.expand("B").unwrap();
        tree.handle_key(Key::Character('z'), 1_000);
        assert_eq!(tree.focused(), Some(&"B1"));
    }

    #[test]
    fn typeahead_accumulates_within_window() {
        let mut tree = TreeView::new(TreeViewConfig::default());
        tree.register(1, ItemProps::leaf("carrot")).unwrap();
        tree.register(2, ItemProps::leaf("celery")).unwrap();
        tree.register(3, ItemProps::leaf("cabbage")).unwrap();
        tree.focus(1);
        tree.handle_key(Key::Character('c'), 0);
        assert_eq!(tree.focused(), Some(&2));
        tree.handle_key(Key::Character('a'), 200);
        assert_eq!(tree.focused(), Some(&3));
        tree.handle_key(Key::Character('r'), 400);
        assert_eq!(tree.focused(), Some(&1));
        // A navigation key resets the buffer.
        tree.handle_key(Key::Home, 450);
        tree.handle_key(Key::Character('c'), 500);
        assert_eq!(tree.focused(), Some(&2));
    }

    #[test]
    fn command_characters_are_not_typeahead() {
        let mut tree = abc(TreeViewConfig::default());
        tree.focus("A");
        let ev = KeyEvent::new(Key::Character('c')).with_modifiers(Modifiers::CONTROL);
        let out = tree.handle_key(ev, 0);
        assert!(!out.handled);
        assert_eq!(tree.focused(), Some(&"A"));
    }

    #[test]
    fn unhandled_keys_reset_typeahead() {
        let mut tree = TreeView::new(TreeViewConfig::default());
        tree.register(1, ItemProps::leaf("cat")).unwrap();
        tree.register(2, ItemProps::leaf("apple")).unwrap();
        tree.register(3, ItemProps::leaf("avocado")).unwrap();
        tree.focus(1);

        tree.handle_key(Key::Character('c'), 0);
        let out = tree.handle_key(Key::Tab, 50);
        assert!(!out.handled);
        let out = tree.handle_key(Key::Character('a'), 100);
        assert_eq!(out.action, TreeAction::Searched { matched: Some(2) });

        let copy = KeyEvent::new(Key::Character('c')).with_modifiers(Modifiers::CONTROL);
        let keys = [Key::Escape.into(), Key::Unidentified.into(), copy];
        for (step, key) in (1_u64..).zip(keys) {
            let now = step * 100 + 1_000;
            tree.focus(1);
            tree.handle_key(Key::Character('c'), now);
            assert!(!tree.handle_key(key, now + 10).handled);
            tree.handle_key(Key::Character('a'), now + 20);
            assert_eq!(tree.focused(), Some(&2));
        }
    }

    #[test]
    fn hidden_items_cannot_take_focus() {
        let mut tree = abc(TreeViewConfig::default());
        tree.focus("A");
        assert!(!tree.focus("B1"));
        assert_eq!(tree.focused(), Some(&"A"));
        tree.expand("B").unwrap();
        assert!(tree.focus("B1"));
        assert_eq!(tree.focused(), Some(&"B1"));
    }

    #[test]
    fn stale_focus_falls_back_to_first_visible() {
        let mut tree = abc(TreeViewConfig {
            expanded: vec!["B"],
            ..TreeViewConfig::default()
        });
        tree.focus("B2");
        tree.collapse(&"B").unwrap();
        let out = press(&mut tree, Key::ArrowDown);
        assert_eq!(
            out.action,
            TreeAction::Moved {
                from: Some("B2"),
                to: "A"
            }
        );

        tree.focus("C");
        tree.unregister(&"C");
        press(&mut tree, Key::Enter);
        assert_eq!(tree.focused(), Some(&"A"));
        assert!(tree.selected().is_empty());
    }

    #[test]
    fn no_focus_and_empty_tree() {
        let mut tree: TreeView<u32> = TreeView::default();
        let out = tree.handle_key(Key::ArrowDown, 0);
        assert_eq!(out.action, TreeAction::Ignored);
        assert_eq!(out.focus, None);
        assert_eq!(tree.last_visible(), None);
    }

    #[test]
    fn strict_mode_rejects_leaf_expansion() {
        let mut lenient = abc(TreeViewConfig::default());
        assert_eq!(lenient.expand("A"), Ok(false));
        assert!(!lenient.is_expanded(&"A"));

        let mut strict = abc(TreeViewConfig {
            strict: true,
            ..TreeViewConfig::default()
        });
        assert_eq!(strict.expand("A"), Err(TreeError::InvalidTarget("A")));
        assert_eq!(strict.collapse(&"C"), Err(TreeError::InvalidTarget("C")));
        // Not yet mounted identifiers may be expanded ahead of time.
        assert_eq!(strict.expand("later"), Ok(true));
    }

    #[test]
    fn expansion_round_trips_and_bulk_operations() {
        let mut tree = abc(TreeViewConfig::default());
        assert_eq!(tree.expand("B"), Ok(true));
        assert_eq!(tree.expand("B"), Ok(false));
        assert_eq!(tree.toggle_expanded("B"), Ok(false));
        assert!(tree.expand_all());
        assert!(!tree.expand_all());
        assert!(tree.is_expanded(&"B"));
        assert!(tree.collapse_all());
        assert!(tree.set_expanded(["B", "A"]));
        assert_eq!(tree.expanded().len(), 1);
    }

    #[test]
    fn subscribers_see_final_state_once() {
        let mut tree = abc(TreeViewConfig::default());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        tree.subscribe_selected(move |s| sink.borrow_mut().push(s.as_slice().to_vec()));
        let firsts = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&firsts);
        let first_sub = tree.subscribe_first_selected(move |f| sink.borrow_mut().push(*f));

        tree.select("A");
        tree.select("C");
        tree.select("C");
        assert_eq!(*seen.borrow(), vec![vec!["A"], vec!["C"]]);
        assert_eq!(*firsts.borrow(), vec![Some("A"), Some("C")]);

        assert!(tree.unsubscribe(first_sub));
        assert!(!tree.unsubscribe(first_sub));
        tree.clear_selection();
        assert_eq!(firsts.borrow().len(), 2);
    }

    #[test]
    fn focus_channel_publishes_moves() {
        let mut tree = abc(TreeViewConfig::default());
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        tree.subscribe_focus(move |f| sink.borrow_mut().push(*f));
        tree.focus("A");
        press(&mut tree, Key::ArrowDown);
        press(&mut tree, Key::ArrowRight);
        assert_eq!(*seen.borrow(), vec![Some("A"), Some("B")]);
        assert!(!tree.focus("nope"));
    }

    #[test]
    fn click_focuses_selects_and_toggles_groups() {
        let mut tree = abc(TreeViewConfig::default());
        assert!(tree.click("B"));
        assert_eq!(tree.focused(), Some(&"B"));
        assert!(tree.is_selected(&"B"));
        assert!(tree.is_expanded(&"B"));
        tree.click("B");
        assert!(!tree.is_selected(&"B"));
        assert!(!tree.is_expanded(&"B"));
        assert!(!tree.click("missing"));
    }

    #[test]
    fn snapshot_restores_state() {
        let mut tree = abc(TreeViewConfig {
            multiple: true,
            ..TreeViewConfig::default()
        });
        tree.expand("B").unwrap();
        tree.select("B1");
        tree.select("A");
        tree.focus("B2");
        let snap = tree.snapshot();

        let restored = abc(TreeViewConfig::from_snapshot(snap.clone()));
        assert_eq!(order(&restored), order(&tree));
        assert_eq!(restored.selected(), &["B1", "A"]);
        assert_eq!(restored.first_selected(), Some(&"B1"));
        assert_eq!(restored.focused(), Some(&"B2"));
        assert_eq!(restored.snapshot().multiple, snap.multiple);
    }

    #[test]
    fn initial_selection_respects_single_mode() {
        let tree = abc(TreeViewConfig {
            selected: vec!["A", "C"],
            ..TreeViewConfig::default()
        });
        assert_eq!(tree.selected(), &["C"]);
        assert_eq!(tree.first_selected(), Some(&"C"));
    }

    #[test]
    fn duplicate_registration_surfaces() {
        let mut tree = abc(TreeViewConfig::default());
        assert_eq!(
            tree.register("A", ItemProps::leaf("again")),
            Err(TreeError::DuplicateItem("A"))
        );
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Key intents and the actions they resolve to.

use understory_kbd::{Key, KeyEvent};

/// What a key press asks the tree to do, before looking at any state.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum KeyIntent {
    /// Enter or Space.
    ToggleSelect,
    /// ArrowDown.
    Next,
    /// ArrowUp.
    Previous,
    /// Home.
    First,
    /// End.
    Last,
    /// ArrowRight.
    ExpandOrEnter,
    /// ArrowLeft.
    CollapseOrExit,
    /// A printable character.
    Search(char),
}

/// Map a key press to an intent.
///
/// Returns `None` for keys the tree does not handle, including characters
/// typed with Control, Alt or Meta held.
pub fn intent_for(event: &KeyEvent) -> Option<KeyIntent> {
    Some(match event.key {
        Key::Enter | Key::Space => KeyIntent::ToggleSelect,
        Key::ArrowDown => KeyIntent::Next,
        Key::ArrowUp => KeyIntent::Previous,
        Key::Home => KeyIntent::First,
        Key::End => KeyIntent::Last,
        Key::ArrowRight => KeyIntent::ExpandOrEnter,
        Key::ArrowLeft => KeyIntent::CollapseOrExit,
        key => {
            if event.has_command_modifier() {
                return None;
            }
            KeyIntent::Search(key.printable()?)
        }
    })
}

/// The state transition a command caused.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum TreeAction<K> {
    /// Selection of `id` was toggled; `selected` is its new state.
    Selected {
        /// The toggled item.
        id: K,
        /// Whether it is selected now.
        selected: bool,
    },
    /// Focus moved.
    Moved {
        /// Previous focus, if any.
        from: Option<K>,
        /// New focus.
        to: K,
    },
    /// A group was expanded.
    Expanded(K),
    /// A group was collapsed.
    Collapsed(K),
    /// Type-ahead ran; `matched` is the item focused by it, if any.
    Searched {
        /// The matching item.
        matched: Option<K>,
    },
    /// Nothing changed.
    Ignored,
}

/// Result of handling one key press.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct KeyOutcome<K> {
    /// What happened.
    pub action: TreeAction<K>,
    /// Focus after the command.
    pub focus: Option<K>,
    /// Whether the key belongs to the tree; the host should then suppress
    /// the platform default (scrolling, form submission, ...).
    pub handled: bool,
}

impl<K> KeyOutcome<K> {
    pub(crate) fn unhandled(focus: Option<K>) -> Self {
        Self {
            action: TreeAction::Ignored,
            focus,
            handled: false,
        }
    }
}

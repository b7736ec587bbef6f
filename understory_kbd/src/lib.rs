// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_kbd --heading-base-level=0

//! Understory Kbd: key identity for headless controllers.
//!
//! Controllers such as `understory_tree_view` or `understory_stepper` react to
//! a handful of named keys plus printable characters. This crate gives those
//! keys a small, copyable representation so controllers do not depend on any
//! particular windowing or DOM binding.
//!
//! - [`Key`]: the logical key, parsed from DOM `KeyboardEvent.key` strings with
//!   [`Key::from_name`] or constructed directly by a native host.
//! - [`Modifiers`]: held modifier keys.
//! - [`KeyEvent`]: a key plus its modifiers.
//!
//! ```rust
//! use understory_kbd::{Key, KeyEvent, Modifiers};
//!
//! assert_eq!(Key::from_name("ArrowDown"), Key::ArrowDown);
//! assert_eq!(Key::from_name(" "), Key::Space);
//! assert_eq!(Key::from_name("a").printable(), Some('a'));
//!
//! let ev = KeyEvent::new(Key::Character('s')).with_modifiers(Modifiers::CONTROL);
//! assert!(ev.has_command_modifier());
//! ```
//!
//! This crate is `no_std`.

#![no_std]

/// A logical key.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub enum Key {
    /// Enter / Return.
    Enter,
    /// The space bar.
    Space,
    /// Up arrow.
    ArrowUp,
    /// Down arrow.
    ArrowDown,
    /// Left arrow.
    ArrowLeft,
    /// Right arrow.
    ArrowRight,
    /// Home.
    Home,
    /// End.
    End,
    /// Page up.
    PageUp,
    /// Page down.
    PageDown,
    /// Escape.
    Escape,
    /// Tab.
    Tab,
    /// Backspace.
    Backspace,
    /// A key that produces a single character.
    Character(char),
    /// Any other key (function keys, lone modifiers, IME composition, ...).
    Unidentified,
}

impl Key {
    /// Parse a DOM `KeyboardEvent.key` value.
    ///
    /// Single-character strings become [`Key::Character`], except `" "` which
    /// is [`Key::Space`]. Unknown multi-character names become
    /// [`Key::Unidentified`].
    pub fn from_name(name: &str) -> Self {
        match name {
            "Enter" => Self::Enter,
            " " | "Spacebar" => Self::Space,
            "ArrowUp" | "Up" => Self::ArrowUp,
            "ArrowDown" | "Down" => Self::ArrowDown,
            "ArrowLeft" | "Left" => Self::ArrowLeft,
            "ArrowRight" | "Right" => Self::ArrowRight,
            "Home" => Self::Home,
            "End" => Self::End,
            "PageUp" => Self::PageUp,
            "PageDown" => Self::PageDown,
            "Escape" | "Esc" => Self::Escape,
            "Tab" => Self::Tab,
            "Backspace" => Self::Backspace,
            _ => {
                let mut chars = name.chars();
                match (chars.next(), chars.next()) {
                    (Some(c), None) => Self::Character(c),
                    _ => Self::Unidentified,
                }
            }
        }
    }

    /// The character this key types, if it is a printable character.
    ///
    /// Space is not considered printable here since controllers treat it as
    /// an activation key.
    pub fn printable(&self) -> Option<char> {
        match *self {
            Self::Character(c) if !c.is_control() && !c.is_whitespace() => Some(c),
            _ => None,
        }
    }
}

bitflags::bitflags! {
    /// Modifier keys held during a key press.
    #[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
    pub struct Modifiers: u8 {
        /// Shift.
        const SHIFT   = 0b0000_0001;
        /// Control.
        const CONTROL = 0b0000_0010;
        /// Alt / Option.
        const ALT     = 0b0000_0100;
        /// Meta / Command / Windows.
        const META    = 0b0000_1000;
    }
}

/// A key press as seen by a controller.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
pub struct KeyEvent {
    /// The logical key.
    pub key: Key,
    /// Modifiers held while the key was pressed.
    pub modifiers: Modifiers,
}

impl KeyEvent {
    /// A key press without modifiers.
    pub const fn new(key: Key) -> Self {
        Self {
            key,
            modifiers: Modifiers::empty(),
        }
    }

    /// Replace the modifier set.
    #[must_use]
    pub const fn with_modifiers(mut self, modifiers: Modifiers) -> Self {
        self.modifiers = modifiers;
        self
    }

    /// Returns `true` if Control, Alt or Meta is held.
    ///
    /// Such presses are shortcuts, not text input.
    pub fn has_command_modifier(&self) -> bool {
        self.modifiers
            .intersects(Modifiers::CONTROL | Modifiers::ALT | Modifiers::META)
    }
}

impl From<Key> for KeyEvent {
    fn from(key: Key) -> Self {
        Self::new(key)
    }
}

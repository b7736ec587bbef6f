// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_tree_view --heading-base-level=0

//! Understory Tree View: a headless tree view engine.
//!
//! This crate owns the behavior of an accessible tree widget and leaves
//! rendering to the host. The host registers items as they mount, forwards key
//! presses, and reads back which item should have focus, which groups are
//! expanded, and what is selected.
//!
//! ## Pieces
//!
//! - [`ItemRegistry`]: identifiers, parent links, children in registration
//!   order, and labels. Lookups are total; unknown identifiers yield nothing.
//! - [`ExpansionSet`]: expanded group identifiers. Entries may precede the
//!   item they refer to.
//! - [`SelectionSet`]: selected identifiers in selection order, in single or
//!   multiple [`SelectionMode`].
//! - [`visible_order`]: the depth-first order of items reachable through
//!   expanded groups. Keyboard navigation only ever lands on these.
//! - [`intent_for`] and [`TreeAction`]: the key map, split into a pure
//!   key-to-intent step and a state-dependent resolution step.
//! - [`TypeAhead`]: the rolling buffer behind search-by-typing.
//! - [`TreeView`]: all of the above behind one owner, with observable
//!   expansion, selection, first-selected and focus channels.
//!
//! ## Keys
//!
//! | Key | Effect |
//! |---|---|
//! | Enter, Space | toggle selection of the focused item |
//! | ArrowDown / ArrowUp | next / previous visible item |
//! | ArrowRight | expand a collapsed group, or enter an expanded one |
//! | ArrowLeft | collapse an expanded group, or move to the parent |
//! | Home / End | first / last visible item |
//! | printable character | type-ahead search |
//!
//! ## Example
//!
//! ```rust
//! use understory_kbd::Key;
//! use understory_tree_view::{ItemProps, TreeAction, TreeView, TreeViewConfig};
//!
//! let mut tree = TreeView::new(TreeViewConfig::default());
//! tree.register("A", ItemProps::leaf("Alpha")).unwrap();
//! tree.register("B", ItemProps::group("Beta")).unwrap();
//! tree.register("B1", ItemProps::leaf("Beta one").in_group("B")).unwrap();
//! tree.register("C", ItemProps::leaf("Gamma")).unwrap();
//!
//! assert_eq!(tree.visible_order().as_slice(), &["A", "B", "C"]);
//!
//! tree.focus("B");
//! let out = tree.handle_key(Key::ArrowRight, 0);
//! assert_eq!(out.action, TreeAction::Expanded("B"));
//! assert_eq!(tree.visible_order().as_slice(), &["A", "B", "B1", "C"]);
//!
//! tree.handle_key(Key::ArrowRight, 10);
//! assert_eq!(tree.focused(), Some(&"B1"));
//!
//! tree.handle_key(Key::Character('g'), 20);
//! assert_eq!(tree.focused(), Some(&"C"));
//!
//! tree.handle_key(Key::Enter, 30);
//! assert_eq!(tree.first_selected(), Some(&"C"));
//! ```
//!
//! ## Features
//!
//! - `serde`: derive `Serialize` and `Deserialize` for [`TreeViewSnapshot`].
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod error;
mod expansion;
mod keyboard;
mod registry;
mod selection;
mod snapshot;
mod traversal;
mod typeahead;
mod view;

pub use config::TreeViewConfig;
pub use error::TreeError;
pub use expansion::ExpansionSet;
pub use keyboard::{KeyIntent, KeyOutcome, TreeAction, intent_for};
pub use registry::{Item, ItemProps, ItemRegistry};
pub use selection::{SelectionMode, SelectionSet};
pub use snapshot::TreeViewSnapshot;
pub use traversal::{VisibleOrder, visible_order};
pub use typeahead::{DEFAULT_TYPEAHEAD_TIMEOUT_MS, TypeAhead};
pub use view::TreeView;

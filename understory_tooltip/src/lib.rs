// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_tooltip --heading-base-level=0

//! Understory Tooltip: headless tooltip open/close logic.
//!
//! [`Tooltips`] owns every tooltip of a host. The host forwards pointer, focus
//! and key events for each trigger, calls [`Tooltips::advance`] when time
//! passes, and shows or hides content according to the returned
//! [`TooltipEvent`]s.
//!
//! - Hovering the trigger opens after [`TooltipConfig::open_delay`]; focusing
//!   it opens immediately. The first reason wins while the tooltip is open.
//! - Leaving the trigger closes after [`TooltipConfig::close_delay`], unless
//!   the tooltip was opened by focus or the pointer is over the content.
//! - Leaving toward hoverable content arms a grace area, the convex hull of
//!   the exit point and the content bounds. The tooltip stays open while the
//!   pointer travels inside it.
//! - Tooltips sharing a [`TooltipGroup`] exclude each other: opening one
//!   closes the group's open tooltip.
//!
//! ```rust
//! use understory_tooltip::{OpenReason, TooltipConfig, TooltipEvent, TooltipGroup, Tooltips};
//!
//! let mut tips = Tooltips::new();
//! let shared = TooltipConfig { group: TooltipGroup::Shared, ..TooltipConfig::default() };
//! let (save, _) = tips.insert(shared.clone());
//! let (load, _) = tips.insert(shared);
//!
//! tips.pointer_enter(save, 0);
//! let events = tips.advance(1_000);
//! assert_eq!(events, [TooltipEvent::Opened { id: save, reason: OpenReason::Pointer }]);
//!
//! // Keyboard focus moves to the other button; its tooltip replaces the first.
//! let events = tips.focus(load);
//! assert_eq!(events[0], TooltipEvent::Closed { id: save });
//! assert!(tips.is_open(load));
//! ```
//!
//! ## Features
//!
//! - `std` (enabled by default): use the standard library float routines in
//!   `kurbo`.
//! - `libm`: use `libm` instead, for `no_std` targets.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod config;
mod grace;
mod tooltips;

pub use config::{TooltipConfig, TooltipGroup};
pub use tooltips::{OpenReason, TooltipEvent, TooltipId, Tooltips};

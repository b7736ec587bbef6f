// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Per-tooltip options.

use alloc::string::String;

/// Mutual-exclusion group of a tooltip.
///
/// At most one tooltip per group is open at a time. Ungrouped tooltips never
/// close each other.
#[derive(Clone, Debug, Default, PartialEq, Eq, Hash)]
pub enum TooltipGroup {
    /// Independent of every other tooltip.
    #[default]
    Ungrouped,
    /// The single group shared by every tooltip configured with it.
    Shared,
    /// A named group; different names are independent.
    Named(String),
}

impl TooltipGroup {
    /// Returns `true` if the tooltip takes part in mutual exclusion.
    pub fn is_grouped(&self) -> bool {
        !matches!(self, Self::Ungrouped)
    }
}

impl From<bool> for TooltipGroup {
    fn from(shared: bool) -> Self {
        if shared { Self::Shared } else { Self::Ungrouped }
    }
}

impl From<&str> for TooltipGroup {
    fn from(name: &str) -> Self {
        Self::Named(name.into())
    }
}

/// Options of one tooltip. Delays are in milliseconds.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct TooltipConfig {
    /// Open on insertion.
    pub open: bool,
    /// Hover time before a pointer opens the tooltip.
    pub open_delay: u64,
    /// Time after the pointer leaves before the tooltip closes.
    pub close_delay: u64,
    /// Close on Escape.
    pub close_on_escape: bool,
    /// Close when the trigger is pressed.
    pub close_on_pointer_down: bool,
    /// Treat the content as outside the tooltip for hover purposes.
    pub disable_hoverable_content: bool,
    /// Mutual-exclusion group.
    pub group: TooltipGroup,
}

impl Default for TooltipConfig {
    fn default() -> Self {
        Self {
            open: false,
            open_delay: 1000,
            close_delay: 0,
            close_on_escape: true,
            close_on_pointer_down: true,
            disable_hoverable_content: false,
            group: TooltipGroup::Ungrouped,
        }
    }
}

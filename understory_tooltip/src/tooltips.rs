// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The tooltip registry and its state machine.

use alloc::vec::Vec;
use core::fmt;

use hashbrown::HashMap;
use kurbo::{Point, Rect};
use log::{debug, trace};
use understory_kbd::{Key, KeyEvent};
use understory_observe::{SubscriptionId, Subscribers};

use crate::config::{TooltipConfig, TooltipGroup};
use crate::grace::GraceArea;

/// Identifier for a tooltip (generational).
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct TooltipId(u32, u32);

impl TooltipId {
    #[allow(
        clippy::cast_possible_truncation,
        reason = "TooltipId uses 32-bit indices."
    )]
    const fn new(idx: usize, generation: u32) -> Self {
        Self(idx as u32, generation)
    }

    const fn idx(self) -> usize {
        self.0 as usize
    }
}

/// Why a tooltip is open.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum OpenReason {
    /// The pointer hovered the trigger.
    Pointer,
    /// The trigger received keyboard focus.
    Focus,
    /// The host opened it.
    External,
}

/// A visibility change.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum TooltipEvent {
    /// The tooltip became visible.
    Opened {
        /// Which tooltip.
        id: TooltipId,
        /// Why.
        reason: OpenReason,
    },
    /// The tooltip was hidden.
    Closed {
        /// Which tooltip.
        id: TooltipId,
    },
}

#[derive(Copy, Clone, Debug, PartialEq, Eq)]
enum Timer {
    Open { at: u64 },
    Close { at: u64 },
}

impl Timer {
    fn due(self, now: u64) -> bool {
        match self {
            Self::Open { at } | Self::Close { at } => at <= now,
        }
    }
}

#[derive(Debug)]
struct Tooltip {
    generation: u32,
    config: TooltipConfig,
    open: Option<OpenReason>,
    timer: Option<Timer>,
    over_trigger: bool,
    over_content: bool,
    focused: bool,
    /// Set by a press on the trigger; focus does not reopen until blur.
    pressed: bool,
    trigger: Option<Rect>,
    content: Option<Rect>,
    grace: Option<GraceArea>,
}

impl Tooltip {
    fn new(generation: u32, config: TooltipConfig) -> Self {
        Self {
            generation,
            config,
            open: None,
            timer: None,
            over_trigger: false,
            over_content: false,
            focused: false,
            pressed: false,
            trigger: None,
            content: None,
            grace: None,
        }
    }

    fn hoverable(&self) -> bool {
        !self.config.disable_hoverable_content
    }

    fn hovered(&self) -> bool {
        self.over_trigger || (self.hoverable() && self.over_content)
    }
}

/// All tooltips of a host, with group mutual exclusion.
///
/// Every operation returns the [`TooltipEvent`]s it caused, in order, and
/// publishes them to subscribers. Timestamps are caller-supplied
/// milliseconds; delayed transitions fire from [`Tooltips::advance`].
pub struct Tooltips {
    slots: Vec<Option<Tooltip>>,
    /// last generation per slot (persists across removals)
    generations: Vec<u32>,
    free_list: Vec<usize>,
    open_in_group: HashMap<TooltipGroup, TooltipId>,
    subscribers: Subscribers<TooltipEvent>,
}

impl fmt::Debug for Tooltips {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let live = self.slots.iter().filter(|s| s.is_some()).count();
        f.debug_struct("Tooltips")
            .field("live", &live)
            .field("free_list", &self.free_list.len())
            .field("open_in_group", &self.open_in_group)
            .field("subscribers", &self.subscribers.len())
            .finish_non_exhaustive()
    }
}

impl Default for Tooltips {
    fn default() -> Self {
        Self::new()
    }
}

impl Tooltips {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            slots: Vec::new(),
            generations: Vec::new(),
            free_list: Vec::new(),
            open_in_group: HashMap::new(),
            subscribers: Subscribers::new(),
        }
    }

    /// Add a tooltip.
    ///
    /// A tooltip configured to start open opens immediately and closes the
    /// open tooltip of its group.
    pub fn insert(&mut self, config: TooltipConfig) -> (TooltipId, Vec<TooltipEvent>) {
        let start_open = config.open;
        let id = if let Some(idx) = self.free_list.pop() {
            let generation = self.generations[idx].saturating_add(1);
            self.generations[idx] = generation;
            self.slots[idx] = Some(Tooltip::new(generation, config));
            TooltipId::new(idx, generation)
        } else {
            let generation = 1_u32;
            self.slots.push(Some(Tooltip::new(generation, config)));
            self.generations.push(generation);
            TooltipId::new(self.slots.len() - 1, generation)
        };
        let mut out = Vec::new();
        if start_open {
            self.open_now(id, OpenReason::External, &mut out);
        }
        (id, self.emit(out))
    }

    /// Remove a tooltip. Stale identifiers are ignored.
    pub fn remove(&mut self, id: TooltipId) -> Vec<TooltipEvent> {
        let mut out = Vec::new();
        if !self.is_alive(id) {
            return out;
        }
        self.close_now(id, &mut out);
        self.slots[id.idx()] = None;
        self.free_list.push(id.idx());
        self.emit(out)
    }

    /// Returns `true` if `id` refers to a live tooltip.
    pub fn is_alive(&self, id: TooltipId) -> bool {
        self.get(id).is_some()
    }

    /// Number of live tooltips.
    pub fn len(&self) -> usize {
        self.slots.iter().filter(|s| s.is_some()).count()
    }

    /// Returns `true` if there are no live tooltips.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Returns `true` if `id` is open.
    pub fn is_open(&self, id: TooltipId) -> bool {
        self.open_reason(id).is_some()
    }

    /// Why `id` is open, or `None` if it is closed or stale.
    pub fn open_reason(&self, id: TooltipId) -> Option<OpenReason> {
        self.get(id).and_then(|t| t.open)
    }

    /// Returns `true` if the trigger of `id` has keyboard focus.
    pub fn is_focused(&self, id: TooltipId) -> bool {
        self.get(id).is_some_and(|t| t.focused)
    }

    /// Options of `id`.
    pub fn config(&self, id: TooltipId) -> Option<&TooltipConfig> {
        self.get(id).map(|t| &t.config)
    }

    /// The open tooltip of `group`, if any.
    pub fn open_in(&self, group: &TooltipGroup) -> Option<TooltipId> {
        self.open_in_group.get(group).copied()
    }

    /// Earliest pending deadline, for hosts that schedule a wake-up.
    pub fn next_deadline(&self) -> Option<u64> {
        self.slots
            .iter()
            .flatten()
            .filter_map(|t| match t.timer? {
                Timer::Open { at } | Timer::Close { at } => Some(at),
            })
            .min()
    }

    /// Record trigger and content bounds used for the grace area.
    pub fn set_geometry(&mut self, id: TooltipId, trigger: Rect, content: Rect) {
        if let Some(t) = self.get_mut(id) {
            t.trigger = Some(trigger);
            t.content = Some(content);
        }
    }

    /// Open or close from the host.
    pub fn set_open(&mut self, id: TooltipId, open: bool) -> Vec<TooltipEvent> {
        let mut out = Vec::new();
        if open {
            self.open_now(id, OpenReason::External, &mut out);
        } else {
            self.close_now(id, &mut out);
        }
        self.emit(out)
    }

    // --- trigger ---

    /// The pointer entered the trigger.
    pub fn pointer_enter(&mut self, id: TooltipId, now: u64) -> Vec<TooltipEvent> {
        let mut out = Vec::new();
        let Some(t) = self.get_mut(id) else {
            return out;
        };
        t.over_trigger = true;
        t.grace = None;
        if t.open.is_some() {
            t.timer = None;
        } else if t.config.open_delay == 0 {
            self.open_now(id, OpenReason::Pointer, &mut out);
        } else {
            let at = now.saturating_add(t.config.open_delay);
            trace!("tooltip {id:?} opens at {at}");
            t.timer = Some(Timer::Open { at });
        }
        self.emit(out)
    }

    /// The pointer left the trigger, last seen at `exit`.
    ///
    /// With hoverable content and known content bounds, leaving toward the
    /// content arms a grace area instead of closing.
    pub fn pointer_leave(
        &mut self,
        id: TooltipId,
        exit: Option<Point>,
        now: u64,
    ) -> Vec<TooltipEvent> {
        let mut out = Vec::new();
        let Some(t) = self.get_mut(id) else {
            return out;
        };
        t.over_trigger = false;
        if matches!(t.timer, Some(Timer::Open { .. })) {
            t.timer = None;
        }
        let reason = t.open;
        match reason {
            None | Some(OpenReason::Focus) => {}
            Some(_) if t.hovered() => {}
            Some(_) => {
                if t.hoverable()
                    && let (Some(exit), Some(content)) = (exit, t.content)
                {
                    trace!("tooltip {id:?} grace area armed");
                    t.grace = Some(GraceArea::new(exit, content));
                } else {
                    self.schedule_close(id, now, &mut out);
                }
            }
        }
        self.emit(out)
    }

    /// The pointer moved to `point`.
    ///
    /// Tooltips with an armed grace area close once the pointer leaves it
    /// without reaching the content or the trigger.
    pub fn pointer_move(&mut self, point: Point, now: u64) -> Vec<TooltipEvent> {
        let mut lost = Vec::new();
        for (idx, slot) in self.slots.iter_mut().enumerate() {
            let Some(t) = slot else {
                continue;
            };
            let Some(grace) = &t.grace else {
                continue;
            };
            let inside = grace.contains(point)
                || t.content.is_some_and(|r| r.contains(point))
                || t.trigger.is_some_and(|r| r.contains(point));
            if !inside {
                t.grace = None;
                if t.open.is_some() && !t.hovered() {
                    lost.push(TooltipId::new(idx, t.generation));
                }
            }
        }
        let mut out = Vec::new();
        for id in lost {
            self.schedule_close(id, now, &mut out);
        }
        self.emit(out)
    }

    /// The trigger was pressed.
    pub fn pointer_down(&mut self, id: TooltipId) -> Vec<TooltipEvent> {
        let mut out = Vec::new();
        let Some(t) = self.get_mut(id) else {
            return out;
        };
        if matches!(t.timer, Some(Timer::Open { .. })) {
            t.timer = None;
        }
        if t.config.close_on_pointer_down {
            t.pressed = true;
            self.close_now(id, &mut out);
        }
        self.emit(out)
    }

    /// The trigger received focus. Opens immediately unless it was just pressed.
    pub fn focus(&mut self, id: TooltipId) -> Vec<TooltipEvent> {
        let mut out = Vec::new();
        let Some(t) = self.get_mut(id) else {
            return out;
        };
        t.focused = true;
        if !t.pressed {
            self.open_now(id, OpenReason::Focus, &mut out);
        }
        self.emit(out)
    }

    /// The trigger lost focus.
    ///
    /// A tooltip still under the pointer stays open and is treated as opened
    /// by the pointer from now on.
    pub fn blur(&mut self, id: TooltipId) -> Vec<TooltipEvent> {
        let mut out = Vec::new();
        let Some(t) = self.get_mut(id) else {
            return out;
        };
        t.focused = false;
        t.pressed = false;
        if t.open.is_some() {
            if t.hovered() {
                t.open = Some(OpenReason::Pointer);
            } else {
                self.close_now(id, &mut out);
            }
        }
        self.emit(out)
    }

    /// A key was pressed while the trigger had focus.
    pub fn handle_key(&mut self, id: TooltipId, event: impl Into<KeyEvent>) -> Vec<TooltipEvent> {
        let mut out = Vec::new();
        let event = event.into();
        if event.key == Key::Escape
            && self
                .get(id)
                .is_some_and(|t| t.config.close_on_escape && t.open.is_some())
        {
            self.close_now(id, &mut out);
        }
        self.emit(out)
    }

    // --- content ---

    /// The pointer entered the tooltip content.
    pub fn content_pointer_enter(&mut self, id: TooltipId) -> Vec<TooltipEvent> {
        let out = Vec::new();
        if let Some(t) = self.get_mut(id) {
            t.over_content = true;
            if t.hoverable() {
                t.grace = None;
                if matches!(t.timer, Some(Timer::Close { .. })) {
                    t.timer = None;
                }
            }
        }
        self.emit(out)
    }

    /// The pointer left the tooltip content.
    pub fn content_pointer_leave(&mut self, id: TooltipId, now: u64) -> Vec<TooltipEvent> {
        let mut out = Vec::new();
        let Some(t) = self.get_mut(id) else {
            return out;
        };
        t.over_content = false;
        let closes = t.hoverable()
            && !t.over_trigger
            && !matches!(t.open, None | Some(OpenReason::Focus));
        if closes {
            self.schedule_close(id, now, &mut out);
        }
        self.emit(out)
    }

    // --- time ---

    /// Fire every timer due at `now`.
    pub fn advance(&mut self, now: u64) -> Vec<TooltipEvent> {
        let due: Vec<(TooltipId, Timer)> = self
            .slots
            .iter()
            .enumerate()
            .filter_map(|(idx, slot)| {
                let t = slot.as_ref()?;
                let timer = t.timer.filter(|timer| timer.due(now))?;
                Some((TooltipId::new(idx, t.generation), timer))
            })
            .collect();
        let mut out = Vec::new();
        for (id, timer) in due {
            if let Some(t) = self.get_mut(id) {
                t.timer = None;
            }
            match timer {
                Timer::Open { .. } => self.open_now(id, OpenReason::Pointer, &mut out),
                Timer::Close { .. } => self.close_now(id, &mut out),
            }
        }
        self.emit(out)
    }

    // --- subscriptions ---

    /// Subscribe to open/close events of every tooltip.
    pub fn subscribe(&mut self, callback: impl FnMut(&TooltipEvent) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(callback)
    }

    /// Remove a subscription.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    // --- internals ---

    fn get(&self, id: TooltipId) -> Option<&Tooltip> {
        self.slots
            .get(id.idx())
            .and_then(Option::as_ref)
            .filter(|t| t.generation == id.1)
    }

    fn get_mut(&mut self, id: TooltipId) -> Option<&mut Tooltip> {
        self.slots
            .get_mut(id.idx())
            .and_then(Option::as_mut)
            .filter(|t| t.generation == id.1)
    }

    fn open_now(&mut self, id: TooltipId, reason: OpenReason, out: &mut Vec<TooltipEvent>) {
        let Some(t) = self.get_mut(id) else {
            return;
        };
        t.timer = None;
        if t.open.is_some() {
            return;
        }
        t.open = Some(reason);
        let group = t.config.group.clone();
        if group.is_grouped()
            && let Some(previous) = self.open_in_group.insert(group, id)
            && previous != id
        {
            debug!("tooltip {previous:?} closed by {id:?} in the same group");
            self.close_now(previous, out);
        }
        debug!("tooltip {id:?} opened ({reason:?})");
        out.push(TooltipEvent::Opened { id, reason });
    }

    fn close_now(&mut self, id: TooltipId, out: &mut Vec<TooltipEvent>) {
        let Some(t) = self.get_mut(id) else {
            return;
        };
        t.timer = None;
        t.grace = None;
        if t.open.take().is_none() {
            return;
        }
        let group = t.config.group.clone();
        if group.is_grouped() && self.open_in_group.get(&group) == Some(&id) {
            self.open_in_group.remove(&group);
        }
        debug!("tooltip {id:?} closed");
        out.push(TooltipEvent::Closed { id });
    }

    fn schedule_close(&mut self, id: TooltipId, now: u64, out: &mut Vec<TooltipEvent>) {
        let Some(t) = self.get_mut(id) else {
            return;
        };
        if t.config.close_delay == 0 {
            self.close_now(id, out);
        } else {
            let at = now.saturating_add(t.config.close_delay);
            trace!("tooltip {id:?} closes at {at}");
            t.timer = Some(Timer::Close { at });
        }
    }

    fn emit(&mut self, events: Vec<TooltipEvent>) -> Vec<TooltipEvent> {
        for event in &events {
            self.subscribers.notify(event);
        }
        events
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::rc::Rc;
    use alloc::vec;
    use core::cell::RefCell;

    fn instant() -> TooltipConfig {
        TooltipConfig {
            open_delay: 0,
            ..TooltipConfig::default()
        }
    }

    fn grouped(open: bool, group: TooltipGroup) -> TooltipConfig {
        TooltipConfig {
            open,
            group,
            ..TooltipConfig::default()
        }
    }

    #[test]
    fn opens_after_delay_and_closes_on_leave() {
        let mut tips = Tooltips::new();
        let (id, _) = tips.insert(TooltipConfig::default());
        assert!(tips.pointer_enter(id, 0).is_empty());
        assert_eq!(tips.next_deadline(), Some(1000));
        assert!(tips.advance(999).is_empty());
        assert_eq!(
            tips.advance(1000),
            vec![TooltipEvent::Opened {
                id,
                reason: OpenReason::Pointer
            }]
        );
        assert_eq!(tips.pointer_leave(id, None, 1500), vec![TooltipEvent::Closed { id }]);
    }

    #[test]
    fn leaving_before_delay_cancels_opening() {
        let mut tips = Tooltips::new();
        let (id, _) = tips.insert(TooltipConfig::default());
        tips.pointer_enter(id, 0);
        tips.pointer_leave(id, None, 400);
        assert!(tips.advance(5000).is_empty());
        assert!(!tips.is_open(id));
    }

    #[test]
    fn close_delay_is_cancelled_by_reentry() {
        let mut tips = Tooltips::new();
        let (id, _) = tips.insert(TooltipConfig {
            close_delay: 300,
            ..instant()
        });
        tips.pointer_enter(id, 0);
        assert!(tips.pointer_leave(id, None, 100).is_empty());
        tips.pointer_enter(id, 200);
        assert!(tips.advance(1000).is_empty());
        assert!(tips.is_open(id));
        tips.pointer_leave(id, None, 1000);
        assert_eq!(tips.advance(1300), vec![TooltipEvent::Closed { id }]);
    }

    #[test]
    fn opens_on_focus_and_closes_on_blur() {
        let mut tips = Tooltips::new();
        let (id, _) = tips.insert(TooltipConfig::default());
        tips.focus(id);
        assert_eq!(tips.open_reason(id), Some(OpenReason::Focus));
        assert!(tips.is_focused(id));
        tips.blur(id);
        assert!(!tips.is_open(id));
    }

    #[test]
    fn focus_opened_survives_pointer_leave() {
        let mut tips = Tooltips::new();
        let (id, _) = tips.insert(TooltipConfig::default());
        tips.focus(id);
        tips.pointer_enter(id, 0);
        assert!(tips.is_open(id));
        tips.pointer_leave(id, None, 10);
        assert!(tips.is_open(id));
        tips.blur(id);
        assert!(!tips.is_open(id));
    }

    #[test]
    fn pointer_opened_survives_blur() {
        let mut tips = Tooltips::new();
        let (id, _) = tips.insert(instant());
        tips.pointer_enter(id, 0);
        tips.focus(id);
        assert_eq!(tips.open_reason(id), Some(OpenReason::Pointer));
        tips.blur(id);
        assert!(tips.is_open(id));
        tips.pointer_leave(id, None, 10);
        assert!(!tips.is_open(id));
    }

    #[test]
    fn pointer_down_closes_and_blocks_focus_until_blur() {
        let mut tips = Tooltips::new();
        let (id, _) = tips.insert(instant());
        tips.pointer_enter(id, 0);
        assert_eq!(tips.pointer_down(id), vec![TooltipEvent::Closed { id }]);
        assert!(tips.focus(id).is_empty());
        tips.blur(id);
        tips.focus(id);
        assert!(tips.is_open(id));
    }

    #[test]
    fn escape_closes_when_configured() {
        let mut tips = Tooltips::new();
        let (a, _) = tips.insert(instant());
        let (b, _) = tips.insert(TooltipConfig {
            close_on_escape: false,
            ..instant()
        });
        tips.focus(a);
        tips.focus(b);
        assert_eq!(tips.handle_key(a, Key::Escape), vec![TooltipEvent::Closed { id: a }]);
        assert!(tips.handle_key(b, Key::Escape).is_empty());
        assert!(tips.handle_key(b, Key::Enter).is_empty());
        assert!(tips.is_open(b));
    }

    #[test]
    fn shared_group_closes_the_other() {
        let mut tips = Tooltips::new();
        let (first, _) = tips.insert(grouped(true, TooltipGroup::Shared));
        let (second, _) = tips.insert(grouped(false, TooltipGroup::Shared));
        let events = tips.set_open(second, true);
        assert_eq!(
            events,
            vec![
                TooltipEvent::Closed { id: first },
                TooltipEvent::Opened {
                    id: second,
                    reason: OpenReason::External
                },
            ]
        );
        assert!(!tips.is_open(first));
        assert_eq!(tips.open_in(&TooltipGroup::Shared), Some(second));
    }

    #[test]
    fn inserting_open_closes_the_group_member() {
        let mut tips = Tooltips::new();
        let (first, _) = tips.insert(grouped(true, TooltipGroup::from(true)));
        let (second, events) = tips.insert(grouped(true, TooltipGroup::from(true)));
        assert_eq!(events[0], TooltipEvent::Closed { id: first });
        assert!(!tips.is_open(first));
        assert!(tips.is_open(second));
    }

    #[test]
    fn different_groups_and_ungrouped_are_independent() {
        let mut tips = Tooltips::new();
        let (a, _) = tips.insert(grouped(true, TooltipGroup::from("A")));
        let (b, _) = tips.insert(grouped(false, TooltipGroup::from("B")));
        tips.set_open(b, true);
        assert!(tips.is_open(a) && tips.is_open(b));

        let (c, _) = tips.insert(grouped(true, TooltipGroup::from(false)));
        let (d, _) = tips.insert(grouped(false, TooltipGroup::Ungrouped));
        tips.set_open(d, true);
        assert!(tips.is_open(c) && tips.is_open(d));
    }

    #[test]
    fn grace_area_keeps_tooltip_open_on_the_way_to_content() {
        let mut tips = Tooltips::new();
        let (id, _) = tips.insert(instant());
        tips.set_geometry(
            id,
            Rect::new(40.0, 0.0, 60.0, 20.0),
            Rect::new(0.0, 40.0, 100.0, 80.0),
        );
        tips.pointer_enter(id, 0);
        assert!(tips.pointer_leave(id, Some(Point::new(50.0, 20.0)), 10).is_empty());
        assert!(tips.pointer_move(Point::new(52.0, 30.0), 20).is_empty());
        assert!(tips.content_pointer_enter(id).is_empty());
        assert!(tips.pointer_move(Point::new(10.0, 60.0), 30).is_empty());
        assert_eq!(
            tips.content_pointer_leave(id, 40),
            vec![TooltipEvent::Closed { id }]
        );
    }

    #[test]
    fn leaving_the_grace_area_closes() {
        let mut tips = Tooltips::new();
        let (id, _) = tips.insert(instant());
        tips.set_geometry(
            id,
            Rect::new(40.0, 0.0, 60.0, 20.0),
            Rect::new(0.0, 40.0, 100.0, 80.0),
        );
        tips.pointer_enter(id, 0);
        tips.pointer_leave(id, Some(Point::new(50.0, 20.0)), 10);
        assert_eq!(
            tips.pointer_move(Point::new(0.0, 25.0), 20),
            vec![TooltipEvent::Closed { id }]
        );
    }

    #[test]
    fn non_hoverable_content_closes_on_leave() {
        let mut tips = Tooltips::new();
        let (id, _) = tips.insert(TooltipConfig {
            disable_hoverable_content: true,
            ..instant()
        });
        tips.set_geometry(
            id,
            Rect::new(40.0, 0.0, 60.0, 20.0),
            Rect::new(0.0, 40.0, 100.0, 80.0),
        );
        tips.pointer_enter(id, 0);
        let events = tips.pointer_leave(id, Some(Point::new(50.0, 20.0)), 10);
        assert_eq!(events, vec![TooltipEvent::Closed { id }]);
    }

    #[test]
    fn removed_ids_go_stale() {
        let mut tips = Tooltips::new();
        let (id, _) = tips.insert(grouped(true, TooltipGroup::Shared));
        assert_eq!(tips.remove(id), vec![TooltipEvent::Closed { id }]);
        assert_eq!(tips.open_in(&TooltipGroup::Shared), None);
        let (reused, _) = tips.insert(TooltipConfig::default());
        assert_ne!(id, reused);
        assert!(!tips.is_alive(id));
        assert!(tips.focus(id).is_empty());
        assert!(tips.remove(id).is_empty());
        assert_eq!(tips.len(), 1);
    }

    #[test]
    fn subscribers_receive_every_event() {
        let mut tips = Tooltips::new();
        let seen = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&seen);
        let sub = tips.subscribe(move |e| sink.borrow_mut().push(*e));
        let (id, _) = tips.insert(instant());
        tips.focus(id);
        tips.blur(id);
        assert_eq!(seen.borrow().len(), 2);
        assert!(tips.unsubscribe(sub));
        tips.focus(id);
        assert_eq!(seen.borrow().len(), 2);
    }
}

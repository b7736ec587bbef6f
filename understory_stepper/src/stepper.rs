// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! The stepper controller.

use alloc::boxed::Box;
use core::fmt;

use log::{debug, trace, warn};
use understory_kbd::{Key, KeyEvent};
use understory_observe::{Derived, Observable, SubscriptionId};

use crate::bounds::{constrain, next_value, previous_value};
use crate::error::StepperError;

/// Initial options for a [`Stepper`].
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct StepperConfig {
    /// Starting value. Constrained into range on construction.
    pub value: f64,
    /// Lower bound.
    pub min: Option<f64>,
    /// Upper bound.
    pub max: Option<f64>,
    /// Increment per step; must be finite and positive.
    pub step: f64,
    /// Wrap to the opposite bound instead of stopping.
    pub looping: bool,
    /// Ignore keyboard and button input.
    pub disabled: bool,
}

impl Default for StepperConfig {
    fn default() -> Self {
        Self {
            value: 0.0,
            min: None,
            max: None,
            step: 1.0,
            looping: false,
            disabled: false,
        }
    }
}

/// A requested value change, passed to the change handler.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct ValueChange {
    /// Value before the change.
    pub curr: f64,
    /// Requested value.
    pub next: f64,
}

/// Semantic state of the spin button element.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct SpinButton {
    /// Current value (`aria-valuenow`).
    pub value: f64,
    /// Lower bound (`aria-valuemin`).
    pub min: Option<f64>,
    /// Upper bound (`aria-valuemax`).
    pub max: Option<f64>,
    /// Whether input is ignored (`aria-disabled`).
    pub disabled: bool,
}

type ChangeHandler = Box<dyn FnMut(ValueChange) -> f64>;

/// A bounded numeric stepper.
///
/// `previous` and `next` are kept in sync with the value and options after
/// every transition and published only when they change.
pub struct Stepper {
    value: Observable<f64>,
    min: Observable<Option<f64>>,
    max: Observable<Option<f64>>,
    step: Observable<f64>,
    looping: Observable<bool>,
    disabled: Observable<bool>,
    previous: Derived<Option<f64>>,
    next: Derived<Option<f64>>,
    on_value_change: Option<ChangeHandler>,
}

impl fmt::Debug for Stepper {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Stepper")
            .field("value", self.value.get())
            .field("min", self.min.get())
            .field("max", self.max.get())
            .field("step", self.step.get())
            .field("looping", self.looping.get())
            .field("disabled", self.disabled.get())
            .field("previous", self.previous.get())
            .field("next", self.next.get())
            .field("on_value_change", &self.on_value_change.is_some())
            .finish()
    }
}

impl Default for Stepper {
    fn default() -> Self {
        Self::from_valid(StepperConfig::default())
    }
}

impl Stepper {
    /// Create a stepper, rejecting an invalid step or range.
    pub fn new(config: StepperConfig) -> Result<Self, StepperError> {
        validate_step(config.step)?;
        validate_range(config.min, config.max)?;
        Ok(Self::from_valid(config))
    }

    fn from_valid(config: StepperConfig) -> Self {
        let value = constrain(config.value, config.min, config.max, config.step);
        let previous = previous_value(value, config.min, config.max, config.step, config.looping);
        let next = next_value(value, config.min, config.max, config.step, config.looping);
        let mut stepper = Self {
            value: Observable::new(value),
            min: Observable::new(config.min),
            max: Observable::new(config.max),
            step: Observable::new(config.step),
            looping: Observable::new(config.looping),
            disabled: Observable::new(config.disabled),
            previous: Derived::new(&[], previous),
            next: Derived::new(&[], next),
            on_value_change: None,
        };
        stepper.sync_derived();
        stepper
    }

    /// Install a handler that may override every requested value.
    ///
    /// The handler's return value is constrained into range and stored.
    #[must_use]
    pub fn with_value_change(mut self, handler: impl FnMut(ValueChange) -> f64 + 'static) -> Self {
        self.on_value_change = Some(Box::new(handler));
        self
    }

    // --- reads ---

    /// Current value.
    pub fn value(&self) -> f64 {
        *self.value.get()
    }

    /// Lower bound.
    pub fn min(&self) -> Option<f64> {
        *self.min.get()
    }

    /// Upper bound.
    pub fn max(&self) -> Option<f64> {
        *self.max.get()
    }

    /// Increment per step.
    pub fn step(&self) -> f64 {
        *self.step.get()
    }

    /// Whether stepping wraps around.
    pub fn looping(&self) -> bool {
        *self.looping.get()
    }

    /// Whether input is ignored.
    pub fn disabled(&self) -> bool {
        *self.disabled.get()
    }

    /// Value a decrement would produce, if any.
    pub fn previous(&self) -> Option<f64> {
        *self.previous.get()
    }

    /// Value an increment would produce, if any.
    pub fn next(&self) -> Option<f64> {
        *self.next.get()
    }

    /// Whether the increment button is active.
    pub fn increment_enabled(&self) -> bool {
        !self.disabled() && self.next().is_some()
    }

    /// Whether the decrement button is active.
    pub fn decrement_enabled(&self) -> bool {
        !self.disabled() && self.previous().is_some()
    }

    /// Semantic state of the spin button.
    pub fn spinbutton(&self) -> SpinButton {
        SpinButton {
            value: self.value(),
            min: self.min(),
            max: self.max(),
            disabled: self.disabled(),
        }
    }

    // --- writes ---

    /// Request a new value.
    ///
    /// The change handler, if any, sees the request first; its result is
    /// constrained into range. NaN is ignored. Returns `true` if the value
    /// changed.
    pub fn set_value(&mut self, requested: f64) -> bool {
        if requested.is_nan() {
            warn!("ignoring NaN stepper value");
            return false;
        }
        let curr = self.value();
        let next = match &mut self.on_value_change {
            Some(handler) => handler(ValueChange {
                curr,
                next: requested,
            }),
            None => requested,
        };
        self.store(next)
    }

    /// Step up. Returns `true` if the value changed.
    pub fn increment(&mut self) -> bool {
        match self.next() {
            Some(next) => self.set_value(next),
            None => false,
        }
    }

    /// Step down. Returns `true` if the value changed.
    pub fn decrement(&mut self) -> bool {
        match self.previous() {
            Some(previous) => self.set_value(previous),
            None => false,
        }
    }

    /// Set the lower bound and re-constrain the value.
    pub fn set_min(&mut self, min: Option<f64>) -> Result<bool, StepperError> {
        validate_range(min, self.max())?;
        let changed = self.min.set(min);
        self.reconstrain();
        Ok(changed)
    }

    /// Set the upper bound and re-constrain the value.
    pub fn set_max(&mut self, max: Option<f64>) -> Result<bool, StepperError> {
        validate_range(self.min(), max)?;
        let changed = self.max.set(max);
        self.reconstrain();
        Ok(changed)
    }

    /// Set the step and re-constrain the value.
    pub fn set_step(&mut self, step: f64) -> Result<bool, StepperError> {
        validate_step(step)?;
        let changed = self.step.set(step);
        self.reconstrain();
        Ok(changed)
    }

    /// Enable or disable wrap-around.
    pub fn set_looping(&mut self, looping: bool) -> bool {
        let changed = self.looping.set(looping);
        self.sync_derived();
        changed
    }

    /// Enable or disable input.
    pub fn set_disabled(&mut self, disabled: bool) -> bool {
        self.disabled.set(disabled)
    }

    // --- input ---

    /// Handle a key press on the spin button. Returns `true` if handled.
    ///
    /// ArrowUp and ArrowDown step; Home and End jump to the bounds when they
    /// are set. Nothing is handled while disabled.
    pub fn handle_key(&mut self, event: impl Into<KeyEvent>) -> bool {
        let event = event.into();
        if self.disabled() {
            return false;
        }
        trace!("stepper key {:?}", event.key);
        match event.key {
            Key::ArrowUp => {
                self.increment();
                true
            }
            Key::ArrowDown => {
                self.decrement();
                true
            }
            Key::Home => match self.min() {
                Some(min) => {
                    self.set_value(min);
                    true
                }
                None => false,
            },
            Key::End => match self.max() {
                Some(max) => {
                    self.set_value(max);
                    true
                }
                None => false,
            },
            _ => false,
        }
    }

    /// Activate the increment button. Returns `false` while disabled.
    pub fn press_increment(&mut self) -> bool {
        if self.disabled() {
            return false;
        }
        self.increment();
        true
    }

    /// Activate the decrement button. Returns `false` while disabled.
    pub fn press_decrement(&mut self) -> bool {
        if self.disabled() {
            return false;
        }
        self.decrement();
        true
    }

    // --- subscriptions ---

    /// Subscribe to value changes.
    pub fn subscribe_value(&mut self, callback: impl FnMut(&f64) + 'static) -> SubscriptionId {
        self.value.subscribe(callback)
    }

    /// Subscribe to changes of the previous value.
    pub fn subscribe_previous(
        &mut self,
        callback: impl FnMut(&Option<f64>) + 'static,
    ) -> SubscriptionId {
        self.previous.subscribe(callback)
    }

    /// Subscribe to changes of the next value.
    pub fn subscribe_next(&mut self, callback: impl FnMut(&Option<f64>) + 'static) -> SubscriptionId {
        self.next.subscribe(callback)
    }

    /// Subscribe to the disabled flag.
    pub fn subscribe_disabled(&mut self, callback: impl FnMut(&bool) + 'static) -> SubscriptionId {
        self.disabled.subscribe(callback)
    }

    /// Remove a subscription made on any channel of this stepper.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.value.unsubscribe(id)
            || self.previous.unsubscribe(id)
            || self.next.unsubscribe(id)
            || self.disabled.unsubscribe(id)
    }

    // --- internals ---

    /// Constrain and store a value, then refresh `previous` and `next`.
    fn store(&mut self, requested: f64) -> bool {
        let value = constrain(requested, self.min(), self.max(), self.step());
        let changed = self.value.set(value);
        if changed {
            debug!("stepper value {value}");
        }
        self.sync_derived();
        changed
    }

    fn reconstrain(&mut self) {
        let value = self.value();
        self.store(value);
    }

    fn sync_derived(&mut self) {
        let sources = [
            self.value.version(),
            self.min.version(),
            self.max.version(),
            self.step.version(),
            self.looping.version(),
        ];
        let (value, min, max, step, looping) = (
            self.value(),
            self.min(),
            self.max(),
            self.step(),
            self.looping(),
        );
        self.previous
            .sync(&sources, || previous_value(value, min, max, step, looping));
        self.next
            .sync(&sources, || next_value(value, min, max, step, looping));
    }
}

fn validate_step(step: f64) -> Result<(), StepperError> {
    if step.is_finite() && step > 0.0 {
        Ok(())
    } else {
        Err(StepperError::InvalidStep(step))
    }
}

fn validate_range(min: Option<f64>, max: Option<f64>) -> Result<(), StepperError> {
    match (min, max) {
        (Some(min), Some(max)) if min > max || min.is_nan() || max.is_nan() => {
            Err(StepperError::InvalidRange { min, max })
        }
        _ => Ok(()),
    }
}

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Observable values.

use crate::subscribers::{SubscriptionId, Subscribers};

/// A value with publish-on-change subscriptions.
///
/// Every change bumps [`Observable::version`], which [`Derived`](crate::Derived)
/// values use to detect stale sources.
pub struct Observable<T> {
    value: T,
    version: u64,
    subscribers: Subscribers<T>,
}

impl<T: core::fmt::Debug> core::fmt::Debug for Observable<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Observable")
            .field("value", &self.value)
            .field("version", &self.version)
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl<T: Default> Default for Observable<T> {
    fn default() -> Self {
        Self::new(T::default())
    }
}

impl<T> Observable<T> {
    /// Wrap an initial value. The initial version is `0`.
    pub const fn new(value: T) -> Self {
        Self {
            value,
            version: 0,
            subscribers: Subscribers::new(),
        }
    }

    /// Current value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Number of changes published so far.
    pub fn version(&self) -> u64 {
        self.version
    }

    /// Mutate the value in place.
    ///
    /// `f` reports whether it changed anything; subscribers are notified only
    /// when it returns `true`. Returns what `f` returned.
    pub fn update(&mut self, f: impl FnOnce(&mut T) -> bool) -> bool {
        let changed = f(&mut self.value);
        if changed {
            self.publish();
        }
        changed
    }

    /// Register a change callback.
    pub fn subscribe(&mut self, callback: impl FnMut(&T) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(callback)
    }

    /// Remove a change callback. Returns `false` if `id` is not registered here.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }

    /// Number of registered callbacks.
    pub fn subscriber_count(&self) -> usize {
        self.subscribers.len()
    }

    fn publish(&mut self) {
        self.version = self.version.wrapping_add(1);
        self.subscribers.notify(&self.value);
    }
}

impl<T: PartialEq> Observable<T> {
    /// Replace the value. Returns `true` and notifies subscribers if it differs
    /// from the current one.
    pub fn set(&mut self, value: T) -> bool {
        if self.value == value {
            return false;
        }
        self.value = value;
        self.publish();
        true
    }
}

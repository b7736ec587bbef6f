// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Values computed from one or more sources.

use smallvec::SmallVec;

use crate::subscribers::{SubscriptionId, Subscribers};

/// A cached value derived from other observable state.
///
/// A `Derived` remembers the versions of the sources it was last computed
/// from. [`Derived::sync`] recomputes only when those versions moved and
/// notifies subscribers only when the recomputed value differs.
///
/// The order of the source versions is significant and must be the same on
/// every call.
pub struct Derived<T> {
    value: T,
    sources: SmallVec<[u64; 4]>,
    subscribers: Subscribers<T>,
}

impl<T: core::fmt::Debug> core::fmt::Debug for Derived<T> {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        f.debug_struct("Derived")
            .field("value", &self.value)
            .field("sources", &self.sources.as_slice())
            .field("subscribers", &self.subscribers.len())
            .finish()
    }
}

impl<T> Derived<T> {
    /// Create a derived value that is current for the given source versions.
    pub fn new(sources: &[u64], value: T) -> Self {
        Self {
            value,
            sources: SmallVec::from_slice(sources),
            subscribers: Subscribers::new(),
        }
    }

    /// Last computed value.
    pub fn get(&self) -> &T {
        &self.value
    }

    /// Returns `true` if `sources` differ from the versions last synchronized.
    pub fn is_stale(&self, sources: &[u64]) -> bool {
        self.sources.as_slice() != sources
    }

    /// Register a change callback.
    pub fn subscribe(&mut self, callback: impl FnMut(&T) + 'static) -> SubscriptionId {
        self.subscribers.subscribe(callback)
    }

    /// Remove a change callback. Returns `false` if `id` is not registered here.
    pub fn unsubscribe(&mut self, id: SubscriptionId) -> bool {
        self.subscribers.unsubscribe(id)
    }
}

impl<T: PartialEq> Derived<T> {
    /// Bring the value up to date with `sources`.
    ///
    /// `compute` runs only when the sources are stale. Returns `true` if the
    /// value changed (and subscribers were notified).
    pub fn sync(&mut self, sources: &[u64], compute: impl FnOnce() -> T) -> bool {
        if !self.is_stale(sources) {
            return false;
        }
        self.sources.clear();
        self.sources.extend_from_slice(sources);
        let next = compute();
        if next == self.value {
            return false;
        }
        self.value = next;
        self.subscribers.notify(&self.value);
        true
    }
}

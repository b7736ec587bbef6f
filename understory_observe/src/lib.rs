// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_observe --heading-base-level=0

//! Understory Observe: explicit observable state for headless controllers.
//!
//! Headless widget controllers keep their state in plain structs and tell the
//! host when something changed. This crate provides the small amount of
//! machinery needed for that, and nothing more:
//!
//! - [`Observable`]: a value you can read, set, and subscribe to. Subscribers
//!   are only notified when the value actually changes.
//! - [`Derived`]: a cached value computed from one or more sources. It tracks
//!   the [`Observable::version`] of each source and recomputes only when one of
//!   them moved.
//! - [`Subscribers`]: the callback registry used by both, usable on its own for
//!   event streams.
//! - [`SubscriptionId`]: a handle returned by `subscribe`. Identifiers are
//!   unique across all registries, so a controller exposing several channels
//!   can offer a single `unsubscribe`.
//!
//! There is no scheduler and no implicit dependency tracking. The owner of the
//! state decides when a derived value is synchronized, which keeps every state
//! transition synchronous and run-to-completion.
//!
//! ## Minimal example
//!
//! ```rust
//! use std::cell::RefCell;
//! use std::rc::Rc;
//!
//! use understory_observe::{Derived, Observable};
//!
//! let mut count = Observable::new(1_i32);
//! let mut doubled = Derived::new(&[count.version()], 2_i32);
//!
//! let seen = Rc::new(RefCell::new(Vec::new()));
//! let sink = Rc::clone(&seen);
//! doubled.subscribe(move |v| sink.borrow_mut().push(*v));
//!
//! assert!(count.set(4));
//! // Setting the same value again is not a change.
//! assert!(!count.set(4));
//!
//! let value = *count.get();
//! doubled.sync(&[count.version()], || value * 2);
//! assert_eq!(*doubled.get(), 8);
//! assert_eq!(*seen.borrow(), vec![8]);
//! ```
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod derived;
mod observable;
mod subscribers;

pub use derived::Derived;
pub use observable::Observable;
pub use subscribers::{SubscriptionId, Subscribers};

// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

// After you edit the crate's doc comment, run this command, then check README.md for any missing links
// cargo rdme --workspace-project=understory_stepper --heading-base-level=0

//! Understory Stepper: a headless numeric stepper.
//!
//! A [`Stepper`] holds a value with optional bounds, a step size and a looping
//! flag. It derives the values an increment or decrement would produce, keeps
//! the value inside its range after every change, and maps ArrowUp, ArrowDown,
//! Home and End to stepping.
//!
//! ```rust
//! use understory_kbd::Key;
//! use understory_stepper::{Stepper, StepperConfig};
//!
//! let mut stepper = Stepper::new(StepperConfig {
//!     value: 4.0,
//!     min: Some(0.0),
//!     max: Some(5.0),
//!     ..StepperConfig::default()
//! })
//! .unwrap();
//!
//! assert!(stepper.handle_key(Key::ArrowUp));
//! assert_eq!(stepper.value(), 5.0);
//! assert_eq!(stepper.next(), None);
//! assert!(!stepper.increment_enabled());
//!
//! stepper.set_looping(true);
//! assert_eq!(stepper.next(), Some(0.0));
//! ```
//!
//! Values above the maximum land on the largest `min + n * step` that fits,
//! so a stepper over `0..=10` with step `3` tops out at `9`.
//!
//! This crate is `no_std` and uses `alloc`.

#![no_std]

extern crate alloc;

mod bounds;
mod error;
mod stepper;

pub use error::StepperError;
pub use stepper::{SpinButton, Stepper, StepperConfig, ValueChange};

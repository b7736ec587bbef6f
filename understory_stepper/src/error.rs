// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Error type for stepper configuration.

/// Rejected stepper options.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum StepperError {
    /// The step is not a finite number greater than zero.
    #[error("stepper step must be finite and greater than zero, got {0}")]
    InvalidStep(f64),
    /// The lower bound lies above the upper bound.
    #[error("stepper minimum {min} is greater than maximum {max}")]
    InvalidRange {
        /// Requested lower bound.
        min: f64,
        /// Requested upper bound.
        max: f64,
    },
}

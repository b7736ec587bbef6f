// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Pure functions over stepper bounds.

/// Value one step below `value`.
///
/// Falls back to `max` when looping and the step would leave the range, and
/// to `None` when there is nowhere to go.
pub(crate) fn previous_value(
    value: f64,
    min: Option<f64>,
    max: Option<f64>,
    step: f64,
    looping: bool,
) -> Option<f64> {
    let previous = value - step;
    match min {
        None => Some(previous),
        Some(min) if previous >= min => Some(previous),
        Some(_) if looping => max,
        Some(_) => None,
    }
}

/// Value one step above `value`.
///
/// Falls back to `min` when looping and the step would leave the range, and
/// to `None` when there is nowhere to go.
pub(crate) fn next_value(
    value: f64,
    min: Option<f64>,
    max: Option<f64>,
    step: f64,
    looping: bool,
) -> Option<f64> {
    let next = value + step;
    match max {
        None => Some(next),
        Some(max) if next <= max => Some(next),
        Some(_) if looping => min,
        Some(_) => None,
    }
}

/// Clamp `value` into `[min, max]`.
///
/// Values above `max` land on the largest `min + n * step` that does not
/// exceed `max`, or on `max` itself when there is no lower bound.
/// Expects `min <= max` and a positive `step`.
pub(crate) fn constrain(value: f64, min: Option<f64>, max: Option<f64>, step: f64) -> f64 {
    if let Some(min) = min
        && value < min
    {
        return min;
    }
    match (min, max) {
        (_, None) => value,
        (_, Some(max)) if value <= max => value,
        (None, Some(max)) => max,
        (Some(min), Some(max)) => min + whole_steps(max - min, step) * step,
    }
}

/// Number of whole steps that fit in a non-negative `span`.
#[allow(
    clippy::cast_possible_truncation,
    reason = "span / step is non-negative and finite, so truncation is floor"
)]
fn whole_steps(span: f64, step: f64) -> f64 {
    ((span / step) as u64) as f64
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn previous_respects_min_and_looping() {
        assert_eq!(previous_value(5.0, None, None, 1.0, false), Some(4.0));
        assert_eq!(previous_value(1.0, Some(0.0), Some(10.0), 1.0, false), Some(0.0));
        assert_eq!(previous_value(0.0, Some(0.0), Some(10.0), 1.0, false), None);
        assert_eq!(previous_value(0.0, Some(0.0), Some(10.0), 1.0, true), Some(10.0));
        assert_eq!(previous_value(0.0, Some(0.0), None, 1.0, true), None);
    }

    #[test]
    fn next_respects_max_and_looping() {
        assert_eq!(next_value(9.0, Some(0.0), Some(10.0), 1.0, false), Some(10.0));
        assert_eq!(next_value(10.0, Some(0.0), Some(10.0), 1.0, false), None);
        assert_eq!(next_value(10.0, Some(0.0), Some(10.0), 1.0, true), Some(0.0));
        assert_eq!(next_value(10.0, None, Some(10.0), 1.0, true), None);
        assert_eq!(next_value(-3.0, None, None, 0.5, false), Some(-2.5));
    }

    #[test]
    fn constrain_snaps_to_step_grid_below_max() {
        assert_eq!(constrain(-4.0, Some(0.0), Some(10.0), 1.0), 0.0);
        assert_eq!(constrain(12.0, None, Some(10.0), 3.0), 10.0);
        // 0, 3, 6, 9 fit below 10.
        assert_eq!(constrain(12.0, Some(0.0), Some(10.0), 3.0), 9.0);
        assert_eq!(constrain(7.5, Some(0.0), Some(10.0), 3.0), 7.5);
        assert_eq!(constrain(50.0, Some(2.0), Some(2.0), 1.0), 2.0);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Exponential smoothing toward a moving target.
//!
//! Every animated follower in the crate (cursor, card tilt) eases one axis
//! at a time with `current += (target - current) * k`.

use super::newtypes::SmoothingFactor;

/// Remaining distance below which a follower snaps onto its target.
pub const SNAP_EPSILON: f32 = 0.01;

/// Advances `current` one tick toward `target`.
///
/// The result lies between `current` and `target` (inclusive), never past
/// the target. When the step would be lost to rounding, or the remaining gap
/// is below [`SNAP_EPSILON`], the result is exactly `target`, so every call
/// on an unsettled value makes strict progress.
#[must_use]
pub fn ease_toward(current: f32, target: f32, k: SmoothingFactor) -> f32 {
    if !current.is_finite() || !target.is_finite() {
        return target;
    }
    let next = current + (target - current) * k.value();
    if next == current || (target - next).abs() < SNAP_EPSILON {
        target
    } else {
        next
    }
}

/// A single smoothed axis.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Smoothed {
    current: f32,
    target: f32,
}

impl Smoothed {
    /// Creates a settled value.
    #[must_use]
    pub fn new(value: f32) -> Self {
        Self {
            current: value,
            target: value,
        }
    }

    /// Moves the target; the current value catches up over later ticks.
    pub fn set_target(&mut self, target: f32) {
        self.target = target;
    }

    /// Advances one tick. Returns true if the current value changed.
    pub fn step(&mut self, k: SmoothingFactor) -> bool {
        let next = ease_toward(self.current, self.target, k);
        let moved = next != self.current;
        self.current = next;
        moved
    }

    #[must_use]
    pub fn current(&self) -> f32 {
        self.current
    }

    #[must_use]
    pub fn target(&self) -> f32 {
        self.target
    }

    /// True once the current value has reached the target.
    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.current == self.target
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Range-checked value objects.
//!
//! Each newtype clamps on construction so that the state machines never
//! have to re-validate their tuning values.

use crate::config::defaults::{
    DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY, DEFAULT_OVERLAY_HIDE_DELAY_MS, DEFAULT_SECTION_THRESHOLD,
    DEFAULT_SMOOTHING_FACTOR, MAX_DIAGNOSTICS_BUFFER_CAPACITY, MAX_OVERLAY_HIDE_DELAY_MS,
    MAX_SECTION_THRESHOLD, MAX_SMOOTHING_FACTOR, MIN_DIAGNOSTICS_BUFFER_CAPACITY,
    MIN_OVERLAY_HIDE_DELAY_MS, MIN_SECTION_THRESHOLD, MIN_SMOOTHING_FACTOR,
};
use std::time::Duration;

// =============================================================================
// SmoothingFactor
// =============================================================================

/// Per-tick interpolation fraction `k`, guaranteed to lie strictly inside `(0, 1)`.
///
/// # Example
///
/// ```
/// use folio_sync::domain::newtypes::SmoothingFactor;
///
/// assert_eq!(SmoothingFactor::default().value(), 0.15);
/// assert!(SmoothingFactor::new(1.5).value() < 1.0);
/// ```
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SmoothingFactor(f32);

impl SmoothingFactor {
    /// Creates a smoothing factor, clamping to the valid range.
    /// NaN falls back to the default.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(MIN_SMOOTHING_FACTOR, MAX_SMOOTHING_FACTOR))
    }

    /// Returns the raw fraction.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }
}

impl Default for SmoothingFactor {
    fn default() -> Self {
        Self(DEFAULT_SMOOTHING_FACTOR)
    }
}

// =============================================================================
// VisibilityThreshold
// =============================================================================

/// Minimum visible-area fraction for a section to count as in view.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct VisibilityThreshold(f32);

impl VisibilityThreshold {
    /// Creates a threshold, clamping to `[0, 1]`. NaN falls back to the default.
    #[must_use]
    pub fn new(value: f32) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(MIN_SECTION_THRESHOLD, MAX_SECTION_THRESHOLD))
    }

    /// Returns the raw fraction.
    #[must_use]
    pub fn value(self) -> f32 {
        self.0
    }

    /// Returns true if `ratio` of the element being visible satisfies the threshold.
    ///
    /// A zero threshold still requires some overlap, matching how a browser
    /// observer treats a `0` threshold.
    #[must_use]
    pub fn is_met_by(self, ratio: f32) -> bool {
        if self.0 <= 0.0 {
            ratio > 0.0
        } else {
            ratio >= self.0
        }
    }
}

impl Default for VisibilityThreshold {
    fn default() -> Self {
        Self(DEFAULT_SECTION_THRESHOLD)
    }
}

// =============================================================================
// HideDelay
// =============================================================================

/// Inactivity window before overlay controls hide, within 1–30 seconds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HideDelay(u64);

impl HideDelay {
    /// Creates a delay from milliseconds, clamping to the valid range.
    #[must_use]
    pub fn from_millis(millis: u64) -> Self {
        Self(millis.clamp(MIN_OVERLAY_HIDE_DELAY_MS, MAX_OVERLAY_HIDE_DELAY_MS))
    }

    /// Returns the delay in milliseconds.
    #[must_use]
    pub fn millis(self) -> u64 {
        self.0
    }

    /// Returns the delay as a `Duration`.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for HideDelay {
    fn default() -> Self {
        Self(DEFAULT_OVERLAY_HIDE_DELAY_MS)
    }
}

// =============================================================================
// BufferCapacity
// =============================================================================

/// Number of diagnostic events kept in memory (100–10000).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    /// Creates a new buffer capacity, clamping to valid range.
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(
            MIN_DIAGNOSTICS_BUFFER_CAPACITY,
            MAX_DIAGNOSTICS_BUFFER_CAPACITY,
        ))
    }

    /// Returns the value as usize.
    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(DEFAULT_DIAGNOSTICS_BUFFER_CAPACITY)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;

    #[test]
    fn smoothing_factor_stays_inside_open_interval() {
        assert!(SmoothingFactor::new(0.0).value() > 0.0);
        assert!(SmoothingFactor::new(1.0).value() < 1.0);
        assert_abs_diff_eq!(SmoothingFactor::new(0.4).value(), 0.4);
        assert_abs_diff_eq!(SmoothingFactor::new(f32::NAN).value(), DEFAULT_SMOOTHING_FACTOR);
    }

    #[test]
    fn threshold_clamps_and_compares() {
        assert_abs_diff_eq!(VisibilityThreshold::new(2.0).value(), 1.0);
        let threshold = VisibilityThreshold::default();
        assert!(threshold.is_met_by(0.2));
        assert!(threshold.is_met_by(0.75));
        assert!(!threshold.is_met_by(0.19));
    }

    #[test]
    fn zero_threshold_requires_some_overlap() {
        let threshold = VisibilityThreshold::new(0.0);
        assert!(!threshold.is_met_by(0.0));
        assert!(threshold.is_met_by(0.01));
    }

    #[test]
    fn hide_delay_clamps_to_range() {
        assert_eq!(HideDelay::from_millis(0).millis(), MIN_OVERLAY_HIDE_DELAY_MS);
        assert_eq!(HideDelay::from_millis(u64::MAX).millis(), MAX_OVERLAY_HIDE_DELAY_MS);
        assert_eq!(HideDelay::default().as_duration(), Duration::from_secs(3));
    }

    #[test]
    fn buffer_capacity_clamps_to_range() {
        assert_eq!(BufferCapacity::new(0).value(), MIN_DIAGNOSTICS_BUFFER_CAPACITY);
        assert_eq!(BufferCapacity::new(50_000).value(), MAX_DIAGNOSTICS_BUFFER_CAPACITY);
        assert_eq!(BufferCapacity::default().value(), 1000);
    }
}

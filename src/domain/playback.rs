// SPDX-License-Identifier: MPL-2.0
//! Playback progress model.
//!
//! Holds the position readout of one bound media resource and the pure
//! helpers that turn it into a progress bar width and clock labels.

/// Position, duration and intent of one bound media resource.
///
/// `current_time` is kept inside `[0, duration]` whenever the duration is
/// known; media clocks can report a position slightly past the end.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct PlaybackState {
    current_time: f64,
    duration: Option<f64>,
    is_playing: bool,
}

impl PlaybackState {
    /// Creates a state with nothing played yet.
    #[must_use]
    pub fn new(is_playing: bool) -> Self {
        Self {
            current_time: 0.0,
            duration: None,
            is_playing,
        }
    }

    /// Applies a position report from the resource.
    ///
    /// Non-finite or non-positive durations are stored as unknown.
    pub fn update_time(&mut self, current_time: f64, duration: Option<f64>) {
        self.duration = duration.filter(|d| d.is_finite() && *d > 0.0);
        let current = if current_time.is_finite() {
            current_time.max(0.0)
        } else {
            0.0
        };
        self.current_time = match self.duration {
            Some(d) => current.min(d),
            None => current,
        };
    }

    pub fn set_playing(&mut self, playing: bool) {
        self.is_playing = playing;
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.is_playing
    }

    #[must_use]
    pub fn current_time(&self) -> f64 {
        self.current_time
    }

    #[must_use]
    pub fn duration(&self) -> Option<f64> {
        self.duration
    }

    /// Progress in percent, see [`progress_percent`].
    #[must_use]
    pub fn progress_percent(&self) -> f64 {
        progress_percent(self.current_time, self.duration)
    }

    /// Seconds left until the end, or zero when the duration is unknown.
    #[must_use]
    pub fn remaining(&self) -> f64 {
        self.duration
            .map_or(0.0, |d| (d - self.current_time).max(0.0))
    }
}

/// Returns `clamp(current / duration, 0, 1) * 100`.
///
/// A zero, negative, unknown or non-finite duration yields `0.0`; the result
/// is never NaN or infinite.
///
/// # Examples
///
/// ```
/// use folio_sync::domain::playback::progress_percent;
///
/// assert_eq!(progress_percent(60.0, Some(120.0)), 50.0);
/// assert_eq!(progress_percent(130.0, Some(120.0)), 100.0);
/// assert_eq!(progress_percent(10.0, Some(0.0)), 0.0);
/// assert_eq!(progress_percent(10.0, None), 0.0);
/// ```
#[must_use]
pub fn progress_percent(current: f64, duration: Option<f64>) -> f64 {
    let Some(duration) = duration.filter(|d| d.is_finite() && *d > 0.0) else {
        return 0.0;
    };
    if !current.is_finite() {
        return 0.0;
    }
    (current / duration).clamp(0.0, 1.0) * 100.0
}

/// Formats seconds as `m:ss`: minutes without leading zero, seconds padded
/// to two digits. Negative or non-finite input formats as `0:00`.
///
/// # Examples
///
/// ```
/// use folio_sync::domain::playback::format_time;
///
/// assert_eq!(format_time(125.0), "2:05");
/// assert_eq!(format_time(59.9), "0:59");
/// assert_eq!(format_time(f64::NAN), "0:00");
/// ```
#[must_use]
pub fn format_time(secs: f64) -> String {
    let total = if secs.is_finite() && secs > 0.0 {
        secs.floor() as u64
    } else {
        0
    };
    format!("{}:{:02}", total / 60, total % 60)
}

/// Formats the time left as `-m:ss`.
#[must_use]
pub fn format_remaining(current: f64, duration: Option<f64>) -> String {
    let remaining = duration
        .filter(|d| d.is_finite())
        .map_or(0.0, |d| d - current);
    format!("-{}", format_time(remaining))
}

// SPDX-License-Identifier: MPL-2.0
//! Delayed callback port.

use std::time::{Duration, Instant};

/// Token for one armed timer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(pub u64);

/// Source of the current instant.
pub trait Clock {
    fn now(&self) -> Instant;
}

/// Port for cancellable one-shot timers.
///
/// There is no automatic cancellation: whoever arms a timer owns it and
/// must cancel it on every exit path.
pub trait TimerDriver {
    /// Arms a timer that expires `delay` from now.
    fn arm(&mut self, delay: Duration) -> TimerId;

    /// Cancels a pending timer. Unknown or already-expired ids are ignored.
    fn cancel(&mut self, id: TimerId);

    /// Removes and returns every timer whose deadline has passed, earliest first.
    fn expired(&mut self) -> Vec<TimerId>;

    /// Number of timers still pending.
    fn pending(&self) -> usize;
}

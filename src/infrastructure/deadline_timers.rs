// SPDX-License-Identifier: MPL-2.0
//! Deadline-ordered timer queue.
//!
//! Implements [`TimerDriver`] on top of any [`Clock`]. The host polls
//! [`TimerDriver::expired`] from its clock tick (for example an iced
//! `time::every` subscription); tests pair it with a [`ManualClock`].
//!
//! [`ManualClock`]: super::ManualClock

use super::SystemClock;
use crate::application::port::{Clock, TimerDriver, TimerId};
use std::time::{Duration, Instant};

#[derive(Debug)]
pub struct DeadlineTimers<C: Clock = SystemClock> {
    clock: C,
    next_id: u64,
    pending: Vec<(TimerId, Instant)>,
}

impl<C: Clock> DeadlineTimers<C> {
    #[must_use]
    pub fn new(clock: C) -> Self {
        Self {
            clock,
            next_id: 0,
            pending: Vec::new(),
        }
    }

    /// Deadline of a pending timer.
    #[must_use]
    pub fn deadline(&self, id: TimerId) -> Option<Instant> {
        self.pending
            .iter()
            .find(|(pending_id, _)| *pending_id == id)
            .map(|(_, deadline)| *deadline)
    }

    /// Earliest pending deadline, useful to size the host's poll interval.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Instant> {
        self.pending.iter().map(|(_, deadline)| *deadline).min()
    }
}

impl Default for DeadlineTimers<SystemClock> {
    fn default() -> Self {
        Self::new(SystemClock)
    }
}

impl<C: Clock> TimerDriver for DeadlineTimers<C> {
    fn arm(&mut self, delay: Duration) -> TimerId {
        self.next_id += 1;
        let id = TimerId(self.next_id);
        self.pending.push((id, self.clock.now() + delay));
        id
    }

    fn cancel(&mut self, id: TimerId) {
        self.pending.retain(|(pending_id, _)| *pending_id != id);
    }

    fn expired(&mut self) -> Vec<TimerId> {
        let now = self.clock.now();
        let mut due: Vec<(TimerId, Instant)> = Vec::new();
        self.pending.retain(|&(id, deadline)| {
            if deadline <= now {
                due.push((id, deadline));
                false
            } else {
                true
            }
        });
        due.sort_by_key(|&(id, deadline)| (deadline, id));
        due.into_iter().map(|(id, _)| id).collect()
    }

    fn pending(&self) -> usize {
        self.pending.len()
    }
}

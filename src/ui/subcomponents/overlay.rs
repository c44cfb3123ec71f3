// SPDX-License-Identifier: MPL-2.0
//! Auto-hiding controls overlay for an open modal.
//!
//! The overlay is visible when the modal opens and hides after an inactivity
//! window. Pointer activity shows it again and restarts the window.

use super::timer::CancellableTimer;
use crate::application::port::{TimerDriver, TimerId};
use crate::domain::newtypes::HideDelay;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Visibility {
    Visible,
    Hidden,
}

/// Overlay state of one modal.
#[derive(Debug, Clone)]
pub struct State {
    visibility: Visibility,
    delay: HideDelay,
    timer: CancellableTimer,
}

#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Pointer moved over the modal.
    Activity,
    /// A timer expired.
    TimerFired(TimerId),
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// Visibility changed to the carried value.
    VisibilityChanged(Visibility),
}

impl State {
    /// Opens the overlay visible with a fresh hide timer.
    pub fn open(delay: HideDelay, timers: &mut dyn TimerDriver) -> Self {
        let mut timer = CancellableTimer::new();
        timer.arm(timers, delay.as_duration());
        Self {
            visibility: Visibility::Visible,
            delay,
            timer,
        }
    }

    /// Handle an overlay message.
    pub fn handle(&mut self, msg: Message, timers: &mut dyn TimerDriver) -> Effect {
        match msg {
            Message::Activity => {
                self.timer.arm(timers, self.delay.as_duration());
                if self.visibility == Visibility::Hidden {
                    self.visibility = Visibility::Visible;
                    return Effect::VisibilityChanged(Visibility::Visible);
                }
                Effect::None
            }
            Message::TimerFired(id) => {
                if !self.timer.fire(id) || self.visibility == Visibility::Hidden {
                    return Effect::None;
                }
                self.visibility = Visibility::Hidden;
                Effect::VisibilityChanged(Visibility::Hidden)
            }
        }
    }

    /// Cancels the pending timer. The state should be dropped afterwards.
    pub fn close(&mut self, timers: &mut dyn TimerDriver) {
        self.timer.cancel(timers);
    }

    #[must_use]
    pub fn visibility(&self) -> Visibility {
        self.visibility
    }

    #[must_use]
    pub fn is_visible(&self) -> bool {
        self.visibility == Visibility::Visible
    }

    /// The id this overlay is waiting on, for routing expiries.
    #[must_use]
    pub fn pending_timer(&self) -> Option<TimerId> {
        self.timer.pending()
    }
}

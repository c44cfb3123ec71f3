// SPDX-License-Identifier: MPL-2.0
//! One cancellable delayed callback, and the shared driver it runs on.

use crate::application::port::{TimerDriver, TimerId};
use std::cell::RefCell;
use std::rc::Rc;
use std::time::Duration;

/// Shared owner of the page's [`TimerDriver`].
///
/// Clones drive the same timers, so a component can keep a handle and cancel
/// its own timer when it is dropped.
#[derive(Clone)]
pub struct SharedTimers {
    driver: Rc<RefCell<Box<dyn TimerDriver>>>,
}

impl SharedTimers {
    #[must_use]
    pub fn new(driver: Box<dyn TimerDriver>) -> Self {
        Self {
            driver: Rc::new(RefCell::new(driver)),
        }
    }
}

impl TimerDriver for SharedTimers {
    fn arm(&mut self, delay: Duration) -> TimerId {
        self.driver.borrow_mut().arm(delay)
    }

    fn cancel(&mut self, id: TimerId) {
        self.driver.borrow_mut().cancel(id);
    }

    fn expired(&mut self) -> Vec<TimerId> {
        self.driver.borrow_mut().expired()
    }

    fn pending(&self) -> usize {
        self.driver.borrow().pending()
    }
}

/// Owns at most one pending timer on a [`TimerDriver`].
///
/// Arming always cancels the previous timer first, and [`fire`](Self::fire)
/// rejects ids that are no longer pending, so a late expiry for a replaced
/// or cancelled timer has no effect.
#[derive(Debug, Clone, Default)]
pub struct CancellableTimer {
    pending: Option<TimerId>,
}

impl CancellableTimer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Cancels any pending timer and starts a new one.
    pub fn arm(&mut self, driver: &mut dyn TimerDriver, delay: Duration) -> TimerId {
        self.cancel(driver);
        let id = driver.arm(delay);
        self.pending = Some(id);
        id
    }

    /// Cancels the pending timer, if any.
    pub fn cancel(&mut self, driver: &mut dyn TimerDriver) {
        if let Some(id) = self.pending.take() {
            driver.cancel(id);
        }
    }

    /// Consumes an expiry. Returns true only for the pending id.
    pub fn fire(&mut self, id: TimerId) -> bool {
        if self.pending == Some(id) {
            self.pending = None;
            true
        } else {
            false
        }
    }

    #[must_use]
    pub fn pending(&self) -> Option<TimerId> {
        self.pending
    }

    #[must_use]
    pub fn is_armed(&self) -> bool {
        self.pending.is_some()
    }
}

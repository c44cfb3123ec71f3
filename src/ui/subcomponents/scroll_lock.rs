// SPDX-License-Identifier: MPL-2.0
//! Page scroll control: smooth scrolling to sections and reference-counted
//! scroll locking while modals are open.

use crate::application::port::ScrollHost;
use crate::domain::error::SectionError;
use crate::domain::ids::SectionId;
use std::cell::RefCell;
use std::rc::Rc;

struct Inner {
    host: Box<dyn ScrollHost>,
    locks: usize,
}

/// Shared owner of the page's [`ScrollHost`].
#[derive(Clone)]
pub struct ScrollLock {
    inner: Rc<RefCell<Inner>>,
}

/// Keeps the page locked until released or dropped.
#[must_use = "the page unlocks as soon as the guard is dropped"]
pub struct ScrollGuard {
    inner: Option<Rc<RefCell<Inner>>>,
}

impl ScrollLock {
    #[must_use]
    pub fn new(host: Box<dyn ScrollHost>) -> Self {
        Self {
            inner: Rc::new(RefCell::new(Inner { host, locks: 0 })),
        }
    }

    /// Locks scrolling. The host is only told on the first outstanding lock.
    pub fn acquire(&self) -> ScrollGuard {
        let mut inner = self.inner.borrow_mut();
        inner.locks += 1;
        if inner.locks == 1 {
            inner.host.set_scroll_locked(true);
        }
        ScrollGuard {
            inner: Some(Rc::clone(&self.inner)),
        }
    }

    /// Requests a smooth scroll to `section`.
    ///
    /// # Errors
    ///
    /// Returns [`SectionError::UnknownTarget`] if the page has no such section.
    pub fn scroll_to(&self, section: &SectionId) -> Result<(), SectionError> {
        self.inner.borrow_mut().host.scroll_to_section(section)
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.inner.borrow().locks > 0
    }

    #[must_use]
    pub fn outstanding(&self) -> usize {
        self.inner.borrow().locks
    }
}

impl ScrollGuard {
    /// Releases the lock now instead of at drop.
    pub fn release(mut self) {
        self.unlock();
    }

    fn unlock(&mut self) {
        if let Some(inner) = self.inner.take() {
            let mut inner = inner.borrow_mut();
            inner.locks = inner.locks.saturating_sub(1);
            if inner.locks == 0 {
                inner.host.set_scroll_locked(false);
            }
        }
    }
}

impl Drop for ScrollGuard {
    fn drop(&mut self) {
        self.unlock();
    }
}

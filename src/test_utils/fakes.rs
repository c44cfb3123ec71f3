// SPDX-License-Identifier: MPL-2.0
//! Recording port implementations.
//!
//! Every fake is a cheap handle over shared state: hand one clone to the code
//! under test (usually boxed) and keep another to inspect what is still
//! outstanding afterwards.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet};
use std::rc::Rc;
use std::time::{Duration, Instant};

use crate::application::port::{
    CursorId, CursorLayer, FrameId, FrameScheduler, IntersectionSource, ListenerId, MediaResource,
    PointerEvents, ScrollHost, TimerDriver, TimerId,
};
use crate::domain::error::{PlaybackError, SectionError};
use crate::domain::ids::SectionId;
use crate::infrastructure::{DeadlineTimers, FrameQueue, ManualClock};

// =============================================================================
// Frames
// =============================================================================

/// Shared [`FrameQueue`].
#[derive(Debug, Clone, Default)]
pub struct Frames {
    queue: Rc<RefCell<FrameQueue>>,
}

impl Frames {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Frames requested and not yet delivered or cancelled.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.queue.borrow().pending()
    }
}

impl FrameScheduler for Frames {
    fn request_frame(&mut self) -> FrameId {
        self.queue.borrow_mut().request_frame()
    }

    fn cancel_frame(&mut self, id: FrameId) {
        self.queue.borrow_mut().cancel_frame(id);
    }

    fn due_frames(&mut self) -> Vec<FrameId> {
        self.queue.borrow_mut().due_frames()
    }
}

// =============================================================================
// Timers
// =============================================================================

/// Shared [`DeadlineTimers`] on a [`ManualClock`].
#[derive(Debug, Clone)]
pub struct Timers {
    clock: ManualClock,
    timers: Rc<RefCell<DeadlineTimers<ManualClock>>>,
}

impl Timers {
    #[must_use]
    pub fn new() -> Self {
        let clock = ManualClock::starting_at(Instant::now());
        Self {
            timers: Rc::new(RefCell::new(DeadlineTimers::new(clock.clone()))),
            clock,
        }
    }

    pub fn advance(&self, by: Duration) {
        self.clock.advance(by);
    }

    pub fn advance_ms(&self, millis: u64) {
        self.advance(Duration::from_millis(millis));
    }

    #[must_use]
    pub fn clock(&self) -> ManualClock {
        self.clock.clone()
    }
}

impl Default for Timers {
    fn default() -> Self {
        Self::new()
    }
}

impl TimerDriver for Timers {
    fn arm(&mut self, delay: Duration) -> TimerId {
        self.timers.borrow_mut().arm(delay)
    }

    fn cancel(&mut self, id: TimerId) {
        self.timers.borrow_mut().cancel(id);
    }

    fn expired(&mut self) -> Vec<TimerId> {
        self.timers.borrow_mut().expired()
    }

    fn pending(&self) -> usize {
        self.timers.borrow().pending()
    }
}

// =============================================================================
// Intersections
// =============================================================================

#[derive(Debug, Default)]
struct IntersectionLog {
    known: BTreeSet<SectionId>,
    observed: BTreeSet<SectionId>,
    disconnects: usize,
}

/// Intersection source that accepts only the sections it was told exist.
#[derive(Debug, Clone, Default)]
pub struct Intersections {
    log: Rc<RefCell<IntersectionLog>>,
}

impl Intersections {
    #[must_use]
    pub fn with_sections<I, S>(sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SectionId>,
    {
        let fake = Self::default();
        fake.log.borrow_mut().known = sections.into_iter().map(Into::into).collect();
        fake
    }

    /// Sections currently observed.
    #[must_use]
    pub fn observed(&self) -> Vec<SectionId> {
        self.log.borrow().observed.iter().cloned().collect()
    }

    #[must_use]
    pub fn disconnects(&self) -> usize {
        self.log.borrow().disconnects
    }
}

impl IntersectionSource for Intersections {
    fn observe(&mut self, section: &SectionId) -> Result<(), SectionError> {
        let mut log = self.log.borrow_mut();
        if !log.known.contains(section) {
            return Err(SectionError::UnknownTarget(section.clone()));
        }
        log.observed.insert(section.clone());
        Ok(())
    }

    fn unobserve(&mut self, section: &SectionId) {
        self.log.borrow_mut().observed.remove(section);
    }

    fn disconnect(&mut self) {
        let mut log = self.log.borrow_mut();
        log.observed.clear();
        log.disconnects += 1;
    }
}

// =============================================================================
// Pointer listeners and cursors
// =============================================================================

#[derive(Debug, Default)]
struct PointerLog {
    next_id: u64,
    listeners: BTreeSet<ListenerId>,
    cursors: BTreeMap<CursorId, Option<(f32, f32, bool)>>,
    placements: usize,
}

/// Pointer listener registry and cursor layer in one.
#[derive(Debug, Clone, Default)]
pub struct Pointer {
    log: Rc<RefCell<PointerLog>>,
}

impl Pointer {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    #[must_use]
    pub fn listeners(&self) -> usize {
        self.log.borrow().listeners.len()
    }

    #[must_use]
    pub fn cursors(&self) -> usize {
        self.log.borrow().cursors.len()
    }

    /// Number of `place_cursor` calls so far.
    #[must_use]
    pub fn placements(&self) -> usize {
        self.log.borrow().placements
    }

    /// Last placement of the only live cursor.
    #[must_use]
    pub fn cursor_placement(&self) -> Option<(f32, f32, bool)> {
        self.log.borrow().cursors.values().next().copied().flatten()
    }
}

impl PointerEvents for Pointer {
    fn add_move_listener(&mut self) -> ListenerId {
        let mut log = self.log.borrow_mut();
        log.next_id += 1;
        let id = ListenerId(log.next_id);
        log.listeners.insert(id);
        id
    }

    fn remove_move_listener(&mut self, id: ListenerId) {
        self.log.borrow_mut().listeners.remove(&id);
    }
}

impl CursorLayer for Pointer {
    fn create_cursor(&mut self) -> CursorId {
        let mut log = self.log.borrow_mut();
        log.next_id += 1;
        let id = CursorId(log.next_id);
        log.cursors.insert(id, None);
        id
    }

    fn place_cursor(&mut self, id: CursorId, x: f32, y: f32, active: bool) {
        let mut log = self.log.borrow_mut();
        if let Some(slot) = log.cursors.get_mut(&id) {
            *slot = Some((x, y, active));
            log.placements += 1;
        }
    }

    fn remove_cursor(&mut self, id: CursorId) {
        self.log.borrow_mut().cursors.remove(&id);
    }
}

// =============================================================================
// Scroll
// =============================================================================

#[derive(Debug, Default)]
struct ScrollLog {
    known: BTreeSet<SectionId>,
    locked: bool,
    lock_changes: usize,
    scrolled_to: Vec<SectionId>,
}

#[derive(Debug, Clone, Default)]
pub struct Scroll {
    log: Rc<RefCell<ScrollLog>>,
}

impl Scroll {
    #[must_use]
    pub fn with_sections<I, S>(sections: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<SectionId>,
    {
        let fake = Self::default();
        fake.log.borrow_mut().known = sections.into_iter().map(Into::into).collect();
        fake
    }

    #[must_use]
    pub fn is_locked(&self) -> bool {
        self.log.borrow().locked
    }

    /// Number of times the lock state actually changed.
    #[must_use]
    pub fn lock_changes(&self) -> usize {
        self.log.borrow().lock_changes
    }

    #[must_use]
    pub fn scrolled_to(&self) -> Vec<SectionId> {
        self.log.borrow().scrolled_to.clone()
    }
}

impl ScrollHost for Scroll {
    fn set_scroll_locked(&mut self, locked: bool) {
        let mut log = self.log.borrow_mut();
        if log.locked != locked {
            log.locked = locked;
            log.lock_changes += 1;
        }
    }

    fn scroll_to_section(&mut self, section: &SectionId) -> Result<(), SectionError> {
        let mut log = self.log.borrow_mut();
        if !log.known.contains(section) {
            return Err(SectionError::UnknownTarget(section.clone()));
        }
        log.scrolled_to.push(section.clone());
        Ok(())
    }
}

// =============================================================================
// Media
// =============================================================================

#[derive(Debug, Default)]
struct MediaLog {
    playing: bool,
    reject_with: Option<String>,
    position: f64,
    duration: Option<f64>,
    time_updates: bool,
    play_calls: usize,
    pause_calls: usize,
}

/// Media element stand-in. Play succeeds unless a rejection is configured.
#[derive(Debug, Clone, Default)]
pub struct Media {
    log: Rc<RefCell<MediaLog>>,
}

impl Media {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// A resource whose `play` fails with `message`, like a browser
    /// rejecting unmuted autoplay.
    #[must_use]
    pub fn rejecting(message: impl Into<String>) -> Self {
        let fake = Self::default();
        fake.log.borrow_mut().reject_with = Some(message.into());
        fake
    }

    pub fn set_position(&self, position: f64, duration: Option<f64>) {
        let mut log = self.log.borrow_mut();
        log.position = position;
        log.duration = duration;
    }

    /// Stops rejecting play commands.
    pub fn allow_play(&self) {
        self.log.borrow_mut().reject_with = None;
    }

    #[must_use]
    pub fn is_playing(&self) -> bool {
        self.log.borrow().playing
    }

    #[must_use]
    pub fn time_updates(&self) -> bool {
        self.log.borrow().time_updates
    }

    #[must_use]
    pub fn play_calls(&self) -> usize {
        self.log.borrow().play_calls
    }

    #[must_use]
    pub fn pause_calls(&self) -> usize {
        self.log.borrow().pause_calls
    }
}

impl MediaResource for Media {
    fn play(&mut self) -> Result<(), PlaybackError> {
        let mut log = self.log.borrow_mut();
        log.play_calls += 1;
        if let Some(message) = &log.reject_with {
            return Err(PlaybackError::from_message(message));
        }
        log.playing = true;
        Ok(())
    }

    fn pause(&mut self) {
        let mut log = self.log.borrow_mut();
        log.pause_calls += 1;
        log.playing = false;
    }

    fn position(&self) -> f64 {
        self.log.borrow().position
    }

    fn duration(&self) -> Option<f64> {
        self.log.borrow().duration
    }

    fn set_time_updates(&mut self, enabled: bool) {
        self.log.borrow_mut().time_updates = enabled;
    }
}

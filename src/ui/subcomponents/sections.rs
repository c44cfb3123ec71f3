// SPDX-License-Identifier: MPL-2.0
//! Active page section, derived from viewport intersection notifications.
//!
//! A section is in view once its visible fraction meets the threshold. Each
//! transition into view makes that section active; the latest transition
//! always wins, with no averaging or debouncing.

use crate::application::port::{IntersectionSource, VisibilityEntry};
use crate::domain::error::SectionError;
use crate::domain::ids::SectionId;
use crate::domain::newtypes::VisibilityThreshold;
use iced::Rectangle;
use std::collections::{HashMap, HashSet};

/// Tracks the active section while it owns an intersection source.
///
/// Dropping the tracker disconnects the source.
pub struct Tracker {
    source: Box<dyn IntersectionSource>,
    threshold: VisibilityThreshold,
    /// Watched sections and whether each was in view at the last notification.
    in_view: HashMap<SectionId, bool>,
    /// Sections the source rejected; retried when their layout arrives.
    deferred: HashSet<SectionId>,
    active: SectionId,
    connected: bool,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Notifications delivered by the source, in arrival order.
    Visibility(Vec<VisibilityEntry>),
    /// The viewport moved; geometric sources recompute visibility.
    Viewport(Rectangle),
    /// A section was laid out at new bounds.
    Layout { section: SectionId, bounds: Rectangle },
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// The active section changed.
    Activated(SectionId),
}

impl Tracker {
    /// Creates a connected tracker with nothing watched yet.
    #[must_use]
    pub fn new(
        source: Box<dyn IntersectionSource>,
        threshold: VisibilityThreshold,
        initial: SectionId,
    ) -> Self {
        Self {
            source,
            threshold,
            in_view: HashMap::new(),
            deferred: HashSet::new(),
            active: initial,
            connected: true,
        }
    }

    /// Starts watching `section`.
    ///
    /// # Errors
    ///
    /// Returns [`SectionError::UnknownTarget`] if the page has no such
    /// section yet; other watches are unaffected. The section is observed
    /// as soon as a [`Message::Layout`] for it arrives.
    pub fn watch(&mut self, section: &SectionId) -> Result<(), SectionError> {
        if !self.connected || self.in_view.contains_key(section) {
            return Ok(());
        }
        if let Err(error) = self.source.observe(section) {
            self.deferred.insert(section.clone());
            return Err(error);
        }
        self.deferred.remove(section);
        self.in_view.insert(section.clone(), false);
        Ok(())
    }

    /// Watches every section, skipping unknown ones. Returns the skipped
    /// sections' errors.
    pub fn watch_all<'a, I>(&mut self, sections: I) -> Vec<SectionError>
    where
        I: IntoIterator<Item = &'a SectionId>,
    {
        sections
            .into_iter()
            .filter_map(|section| self.watch(section).err())
            .collect()
    }

    /// Stops watching `section`. Unknown or already removed ids are ignored.
    pub fn unwatch(&mut self, section: &SectionId) {
        self.deferred.remove(section);
        if self.in_view.remove(section).is_some() {
            self.source.unobserve(section);
        }
    }

    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        if !self.connected {
            return Effect::None;
        }
        match msg {
            Message::Visibility(entries) => self.apply(&entries),
            Message::Viewport(viewport) => {
                let entries = self.source.viewport_changed(viewport);
                self.apply(&entries)
            }
            Message::Layout { section, bounds } => {
                self.source.layout_changed(&section, bounds);
                if self.deferred.contains(&section) {
                    // still unknown: stays deferred
                    let _ = self.watch(&section);
                }
                Effect::None
            }
        }
    }

    fn apply(&mut self, entries: &[VisibilityEntry]) -> Effect {
        let previous = self.active.clone();
        for entry in entries {
            let Some(was_in_view) = self.in_view.get_mut(&entry.section) else {
                continue;
            };
            let now_in_view = self.threshold.is_met_by(entry.ratio);
            if now_in_view && !*was_in_view {
                self.active = entry.section.clone();
            }
            *was_in_view = now_in_view;
        }
        if self.active == previous {
            Effect::None
        } else {
            Effect::Activated(self.active.clone())
        }
    }

    /// Stops all observation. Later notifications are ignored.
    pub fn disconnect(&mut self) {
        if self.connected {
            self.connected = false;
            self.in_view.clear();
            self.deferred.clear();
            self.source.disconnect();
        }
    }

    #[must_use]
    pub fn active(&self) -> &SectionId {
        &self.active
    }

    #[must_use]
    pub fn is_watching(&self, section: &SectionId) -> bool {
        self.in_view.contains_key(section)
    }

    /// True while `section` waits for its layout before being observed.
    #[must_use]
    pub fn is_deferred(&self, section: &SectionId) -> bool {
        self.deferred.contains(section)
    }

    #[must_use]
    pub fn is_connected(&self) -> bool {
        self.connected
    }
}

impl Drop for Tracker {
    fn drop(&mut self) {
        self.disconnect();
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Viewport intersection port.

use crate::domain::error::SectionError;
use crate::domain::ids::SectionId;
use iced::Rectangle;

/// One visibility notification: the fraction of `section` currently inside
/// the viewport.
#[derive(Debug, Clone, PartialEq)]
pub struct VisibilityEntry {
    pub section: SectionId,
    pub ratio: f32,
}

impl VisibilityEntry {
    #[must_use]
    pub fn new(section: impl Into<SectionId>, ratio: f32) -> Self {
        Self {
            section: section.into(),
            ratio,
        }
    }
}

/// Port for an intersection notification source configured with a threshold.
///
/// Push-based sources (a browser observer) deliver their notifications to
/// the page shell as messages. Geometric sources compute them when told where
/// the viewport and the sections are, through the two `*_changed` hooks.
pub trait IntersectionSource {
    /// Starts watching a section.
    ///
    /// # Errors
    ///
    /// Returns [`SectionError::UnknownTarget`] if the page has no such section.
    fn observe(&mut self, section: &SectionId) -> Result<(), SectionError>;

    /// Stops watching a section. Never fails, even if the element is gone.
    fn unobserve(&mut self, section: &SectionId);

    /// Stops watching everything.
    fn disconnect(&mut self);

    /// The viewport moved or resized. Returns the notifications it causes.
    fn viewport_changed(&mut self, viewport: Rectangle) -> Vec<VisibilityEntry> {
        let _ = viewport;
        Vec::new()
    }

    /// A section was laid out at new bounds.
    fn layout_changed(&mut self, section: &SectionId, bounds: Rectangle) {
        let _ = (section, bounds);
    }
}

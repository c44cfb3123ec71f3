// SPDX-License-Identifier: MPL-2.0
//! Page scroll port.

use crate::domain::error::SectionError;
use crate::domain::ids::SectionId;

pub trait ScrollHost {
    /// Locks or unlocks page scrolling (modal backdrop).
    fn set_scroll_locked(&mut self, locked: bool);

    /// Smoothly scrolls a section to the top of the viewport.
    ///
    /// # Errors
    ///
    /// Returns [`SectionError::UnknownTarget`] if the page has no such section.
    fn scroll_to_section(&mut self, section: &SectionId) -> Result<(), SectionError>;
}

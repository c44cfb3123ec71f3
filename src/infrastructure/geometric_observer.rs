// SPDX-License-Identifier: MPL-2.0
//! Intersection observer computed from layout rectangles.
//!
//! The host reports where each section is laid out and where the viewport
//! is; the observer turns that into the same notifications a browser
//! intersection observer would deliver: one initial entry per newly observed
//! section, then one entry each time a section crosses the threshold.

use crate::application::port::{IntersectionSource, VisibilityEntry};
use crate::domain::error::SectionError;
use crate::domain::ids::SectionId;
use crate::domain::newtypes::VisibilityThreshold;
use iced::Rectangle;
use std::collections::HashMap;

#[derive(Debug, Clone)]
struct Watched {
    section: SectionId,
    /// `None` until the first viewport update after `observe`.
    in_view: Option<bool>,
}

#[derive(Debug, Clone, Default)]
pub struct GeometricObserver {
    threshold: VisibilityThreshold,
    layout: HashMap<SectionId, Rectangle>,
    watched: Vec<Watched>,
}

impl GeometricObserver {
    #[must_use]
    pub fn new(threshold: VisibilityThreshold) -> Self {
        Self {
            threshold,
            layout: HashMap::new(),
            watched: Vec::new(),
        }
    }

    /// Records (or moves) a section's layout rectangle.
    pub fn set_layout(&mut self, section: impl Into<SectionId>, bounds: Rectangle) {
        self.layout.insert(section.into(), bounds);
    }

    /// The section's element left the page: forget its layout and stop
    /// watching it.
    pub fn remove_section(&mut self, section: &SectionId) {
        self.layout.remove(section);
        self.unobserve(section);
    }

    /// Number of sections currently watched.
    #[must_use]
    pub fn watched_count(&self) -> usize {
        self.watched.len()
    }

    /// Fraction of `bounds` inside `viewport`, in `[0, 1]`.
    #[must_use]
    pub fn visible_ratio(bounds: Rectangle, viewport: Rectangle) -> f32 {
        let area = bounds.width * bounds.height;
        if area <= 0.0 {
            return 0.0;
        }
        bounds
            .intersection(&viewport)
            .map_or(0.0, |overlap| {
                (overlap.width * overlap.height / area).clamp(0.0, 1.0)
            })
    }

    /// Recomputes visibility for a new viewport and returns the notifications
    /// to deliver, in observation order.
    pub fn update_viewport(&mut self, viewport: Rectangle) -> Vec<VisibilityEntry> {
        let threshold = self.threshold;
        let layout = &self.layout;
        let mut entries = Vec::new();

        for watched in &mut self.watched {
            let Some(bounds) = layout.get(&watched.section) else {
                continue;
            };
            let ratio = Self::visible_ratio(*bounds, viewport);
            let in_view = threshold.is_met_by(ratio);
            if watched.in_view != Some(in_view) {
                watched.in_view = Some(in_view);
                entries.push(VisibilityEntry::new(watched.section.clone(), ratio));
            }
        }

        entries
    }
}

impl IntersectionSource for GeometricObserver {
    fn observe(&mut self, section: &SectionId) -> Result<(), SectionError> {
        if !self.layout.contains_key(section) {
            return Err(SectionError::UnknownTarget(section.clone()));
        }
        if !self.watched.iter().any(|w| &w.section == section) {
            self.watched.push(Watched {
                section: section.clone(),
                in_view: None,
            });
        }
        Ok(())
    }

    fn unobserve(&mut self, section: &SectionId) {
        self.watched.retain(|w| &w.section != section);
    }

    fn disconnect(&mut self) {
        self.watched.clear();
    }

    fn viewport_changed(&mut self, viewport: Rectangle) -> Vec<VisibilityEntry> {
        self.update_viewport(viewport)
    }

    fn layout_changed(&mut self, section: &SectionId, bounds: Rectangle) {
        self.set_layout(section.clone(), bounds);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_utils::assert_abs_diff_eq;
    use iced::{Point, Size};

    fn rect(y: f32, height: f32) -> Rectangle {
        Rectangle::new(Point::new(0.0, y), Size::new(1000.0, height))
    }

    fn page() -> GeometricObserver {
        let mut observer = GeometricObserver::new(VisibilityThreshold::default());
        observer.set_layout("home", rect(0.0, 800.0));
        observer.set_layout("about", rect(800.0, 800.0));
        observer.set_layout("contact", rect(1600.0, 800.0));
        for id in ["home", "about", "contact"] {
            observer.observe(&SectionId::from(id)).expect("section exists");
        }
        observer
    }

    #[test]
    fn visible_ratio_of_partial_overlap() {
        let ratio = GeometricObserver::visible_ratio(rect(0.0, 800.0), rect(600.0, 800.0));
        assert_abs_diff_eq!(ratio, 0.25, epsilon = 1e-6);
    }

    #[test]
    fn visible_ratio_of_empty_section_is_zero() {
        assert_eq!(
            GeometricObserver::visible_ratio(rect(0.0, 0.0), rect(0.0, 800.0)),
            0.0
        );
    }

    #[test]
    fn first_update_reports_every_watched_section() {
        let mut observer = page();
        let entries = observer.update_viewport(rect(0.0, 800.0));

        let ids: Vec<&str> = entries.iter().map(|e| e.section.as_str()).collect();
        assert_eq!(ids, vec!["home", "about", "contact"]);
        assert_abs_diff_eq!(entries[0].ratio, 1.0);
        assert_abs_diff_eq!(entries[1].ratio, 0.0);
    }

    #[test]
    fn only_threshold_crossings_are_reported() {
        let mut observer = page();
        observer.update_viewport(rect(0.0, 800.0));

        // 10% of "about" visible: below threshold, nothing changes
        assert!(observer.update_viewport(rect(80.0, 800.0)).is_empty());

        // 30% of "about" visible: crossing
        let entries = observer.update_viewport(rect(240.0, 800.0));
        assert_eq!(entries.len(), 1);
        assert_eq!(entries[0].section.as_str(), "about");
    }

    #[test]
    fn observe_unknown_section_fails_without_side_effects() {
        let mut observer = page();
        let result = observer.observe(&SectionId::from("faq"));
        assert_eq!(
            result,
            Err(SectionError::UnknownTarget(SectionId::from("faq")))
        );
        assert_eq!(observer.watched_count(), 3);
    }

    #[test]
    fn removed_section_stops_reporting() {
        let mut observer = page();
        observer.remove_section(&SectionId::from("about"));
        observer.remove_section(&SectionId::from("about"));

        let entries = observer.update_viewport(rect(800.0, 800.0));
        assert!(entries.iter().all(|e| e.section.as_str() != "about"));
        assert_eq!(observer.watched_count(), 2);
    }

    #[test]
    fn disconnect_stops_everything() {
        let mut observer = page();
        observer.disconnect();
        assert!(observer.update_viewport(rect(0.0, 800.0)).is_empty());
    }
}

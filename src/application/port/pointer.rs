// SPDX-License-Identifier: MPL-2.0
//! Pointer listener and decorative cursor ports.

use crate::config::defaults::{INTERACTIVE_ROLES, INTERACTIVE_TAGS};
use crate::domain::ids::ElementId;

/// Token for a registered pointer-move listener.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ListenerId(pub u64);

/// Token for a mounted cursor element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct CursorId(pub u64);

/// What the hover predicate needs to know about an element.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ElementInfo {
    pub id: ElementId,
    pub tag: String,
    pub role: Option<String>,
}

impl ElementInfo {
    #[must_use]
    pub fn new(id: u64, tag: impl Into<String>) -> Self {
        Self {
            id: ElementId(id),
            tag: tag.into(),
            role: None,
        }
    }

    #[must_use]
    pub fn with_role(mut self, role: impl Into<String>) -> Self {
        self.role = Some(role.into());
        self
    }

    /// Links, buttons and anything with `role="button"`.
    #[must_use]
    pub fn is_interactive(&self) -> bool {
        INTERACTIVE_TAGS
            .iter()
            .any(|tag| self.tag.eq_ignore_ascii_case(tag))
            || self.role.as_deref().is_some_and(|role| {
                INTERACTIVE_ROLES
                    .iter()
                    .any(|r| role.eq_ignore_ascii_case(r))
            })
    }
}

/// An element and its ancestors, innermost first.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ElementPath(pub Vec<ElementInfo>);

impl ElementPath {
    /// The closest element (the target itself included) that is interactive.
    #[must_use]
    pub fn closest_interactive(&self) -> Option<ElementId> {
        self.0
            .iter()
            .find(|element| element.is_interactive())
            .map(|element| element.id)
    }
}

/// Port for the document-level pointer-move listener.
pub trait PointerEvents {
    fn add_move_listener(&mut self) -> ListenerId;

    /// Removing an unknown listener is a no-op.
    fn remove_move_listener(&mut self, id: ListenerId);
}

/// Port for the layer hosting the decorative cursor element.
pub trait CursorLayer {
    fn create_cursor(&mut self) -> CursorId;

    /// Moves the cursor and sets its "over an interactive element" style.
    fn place_cursor(&mut self, id: CursorId, x: f32, y: f32, active: bool);

    /// Removing an unknown cursor is a no-op.
    fn remove_cursor(&mut self, id: CursorId);
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn links_buttons_and_button_roles_are_interactive() {
        assert!(ElementInfo::new(1, "a").is_interactive());
        assert!(ElementInfo::new(2, "BUTTON").is_interactive());
        assert!(ElementInfo::new(3, "div").with_role("button").is_interactive());
        assert!(!ElementInfo::new(4, "div").is_interactive());
        assert!(!ElementInfo::new(5, "div").with_role("link").is_interactive());
    }

    #[test]
    fn closest_interactive_walks_up_ancestors() {
        let path = ElementPath(vec![
            ElementInfo::new(10, "span"),
            ElementInfo::new(11, "button"),
            ElementInfo::new(12, "a"),
            ElementInfo::new(13, "body"),
        ]);
        assert_eq!(path.closest_interactive(), Some(ElementId(11)));
    }

    #[test]
    fn closest_interactive_none_for_plain_content() {
        let path = ElementPath(vec![ElementInfo::new(1, "p"), ElementInfo::new(2, "body")]);
        assert_eq!(path.closest_interactive(), None);
        assert_eq!(ElementPath::default().closest_interactive(), None);
    }
}

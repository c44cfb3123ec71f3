// SPDX-License-Identifier: MPL-2.0
//! Exclusive selection: at most one active item per group.
//!
//! The page has three independent groups with different rules:
//!
//! - nav tooltips ([`Policy::Transient`]): shown on hover, gone on leave
//! - services accordion ([`Policy::Toggle`]): clicking the open item closes it
//! - experience timeline ([`Policy::AlwaysOne`]): some node is always highlighted

use crate::domain::ids::{GroupId, ItemId};
use std::collections::BTreeMap;

/// How a group reacts to re-selecting or releasing its active item.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Policy {
    /// Selecting the active item clears the group.
    Toggle,
    /// Selecting the active item is a no-op; release is ignored.
    AlwaysOne,
    /// Selecting the active item is a no-op; releasing it clears the group.
    Transient,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectionGroup<T = ItemId> {
    policy: Policy,
    active: Option<T>,
}

#[derive(Debug, Clone)]
pub enum Message<T = ItemId> {
    /// Item clicked or hovered.
    Select(T),
    /// Pointer left the item.
    Release(T),
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect<T = ItemId> {
    /// No effect.
    None,
    /// The active item changed to the carried value.
    Changed(Option<T>),
}

impl<T: Clone + PartialEq> SelectionGroup<T> {
    #[must_use]
    pub fn new(policy: Policy) -> Self {
        Self {
            policy,
            active: None,
        }
    }

    /// Creates a group with `initial` already active.
    #[must_use]
    pub fn with_initial(policy: Policy, initial: T) -> Self {
        Self {
            policy,
            active: Some(initial),
        }
    }

    /// Selects `id`. Returns true if the active item changed.
    pub fn set_active(&mut self, id: T) -> bool {
        if self.active.as_ref() == Some(&id) {
            if self.policy == Policy::Toggle {
                self.active = None;
                return true;
            }
            return false;
        }
        self.active = Some(id);
        true
    }

    /// Releases `id` in a transient group. Returns true if the group cleared.
    pub fn release(&mut self, id: &T) -> bool {
        if self.policy == Policy::Transient && self.active.as_ref() == Some(id) {
            self.active = None;
            return true;
        }
        false
    }

    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message<T>) -> Effect<T> {
        let changed = match msg {
            Message::Select(id) => self.set_active(id),
            Message::Release(id) => self.release(&id),
        };
        if changed {
            Effect::Changed(self.active.clone())
        } else {
            Effect::None
        }
    }

    #[must_use]
    pub fn active(&self) -> Option<&T> {
        self.active.as_ref()
    }

    #[must_use]
    pub fn is_active(&self, id: &T) -> bool {
        self.active.as_ref() == Some(id)
    }

    #[must_use]
    pub fn policy(&self) -> Policy {
        self.policy
    }
}

/// Groups keyed by id. Groups never share state.
#[derive(Debug, Clone, Default)]
pub struct SelectionSet {
    groups: BTreeMap<GroupId, SelectionGroup<ItemId>>,
}

impl SelectionSet {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds or replaces a group.
    pub fn insert(&mut self, group: impl Into<GroupId>, selection: SelectionGroup<ItemId>) {
        self.groups.insert(group.into(), selection);
    }

    #[must_use]
    pub fn get(&self, group: &GroupId) -> Option<&SelectionGroup<ItemId>> {
        self.groups.get(group)
    }

    /// Routes a message to a group. Unknown groups yield [`Effect::None`].
    pub fn handle(&mut self, group: &GroupId, msg: Message<ItemId>) -> Effect<ItemId> {
        self.groups
            .get_mut(group)
            .map_or(Effect::None, |selection| selection.handle(msg))
    }

    #[must_use]
    pub fn active(&self, group: &GroupId) -> Option<&ItemId> {
        self.groups.get(group).and_then(SelectionGroup::active)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn item(id: &str) -> ItemId {
        ItemId::from(id)
    }

    #[test]
    fn toggle_reselect_closes() {
        let mut accordion = SelectionGroup::with_initial(Policy::Toggle, item("01"));
        assert!(accordion.set_active(item("01")));
        assert_eq!(accordion.active(), None);

        assert!(accordion.set_active(item("02")));
        assert!(accordion.set_active(item("03")));
        assert_eq!(accordion.active(), Some(&item("03")));
    }

    #[test]
    fn always_one_reselect_is_noop() {
        let mut timeline = SelectionGroup::with_initial(Policy::AlwaysOne, item("01"));
        assert!(!timeline.set_active(item("01")));
        assert!(!timeline.release(&item("01")));
        assert_eq!(timeline.active(), Some(&item("01")));

        assert!(timeline.set_active(item("02")));
        assert!(timeline.is_active(&item("02")));
    }

    #[test]
    fn transient_release_clears_only_active_item() {
        let mut nav = SelectionGroup::new(Policy::Transient);
        nav.set_active(item("about"));

        assert!(!nav.release(&item("home")));
        assert_eq!(nav.active(), Some(&item("about")));

        assert!(nav.release(&item("about")));
        assert_eq!(nav.active(), None);
    }

    #[test]
    fn handle_reports_new_active_item() {
        let mut group = SelectionGroup::new(Policy::Toggle);
        assert_eq!(
            group.handle(Message::Select(item("a"))),
            Effect::Changed(Some(item("a")))
        );
        assert_eq!(
            group.handle(Message::Select(item("a"))),
            Effect::Changed(None)
        );
        assert_eq!(group.handle(Message::Release(item("a"))), Effect::None);
    }

    #[test]
    fn set_keeps_groups_independent() {
        let mut set = SelectionSet::new();
        set.insert("services", SelectionGroup::with_initial(Policy::Toggle, item("01")));
        set.insert("experience", SelectionGroup::with_initial(Policy::AlwaysOne, item("01")));

        set.handle(&GroupId::from("services"), Message::Select(item("01")));

        assert_eq!(set.active(&GroupId::from("services")), None);
        assert_eq!(set.active(&GroupId::from("experience")), Some(&item("01")));
    }

    #[test]
    fn unknown_group_is_ignored() {
        let mut set = SelectionSet::new();
        assert_eq!(
            set.handle(&GroupId::from("nope"), Message::Select(item("x"))),
            Effect::None
        );
        assert!(set.get(&GroupId::from("nope")).is_none());
    }
}

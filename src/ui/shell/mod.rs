// SPDX-License-Identifier: MPL-2.0
//! The page shell: single owner of every interaction component.
//!
//! The shell receives one [`Message`] stream from the host (pointer, frame,
//! clock and user interactions), routes it to the sub-components and returns
//! the [`Effect`]s the view layer should react to. Mounting acquires every
//! host resource; unmounting or dropping the shell releases all of them.

pub mod modal;

use std::collections::BTreeMap;

use crate::application::port::{
    CursorLayer, FrameScheduler, IntersectionSource, MediaResource, PointerEvents, ScrollHost,
    TimerDriver,
};
use crate::config::defaults::{
    ACCORDION_GROUP, DEFAULT_ACCORDION_ITEM, DEFAULT_TIMELINE_ITEM, NAV_GROUP, PAGE_SECTIONS,
    TESTIMONIAL_COUNT, TESTIMONIAL_WINDOW, TIMELINE_GROUP,
};
use crate::config::Config;
use crate::diagnostics::{DiagnosticsHandle, StateChange, UserAction, WarningEvent, WarningType};
use crate::domain::error::SectionError;
use crate::domain::ids::{GroupId, ItemId, SectionId};
use crate::domain::newtypes::{HideDelay, SmoothingFactor};
use crate::ui::subcomponents::carousel::{self, Carousel};
use crate::ui::subcomponents::overlay::Visibility;
use crate::ui::subcomponents::pointer::{self, Follower};
use crate::ui::subcomponents::scroll_lock::ScrollLock;
use crate::ui::subcomponents::sections::{self, Tracker};
use crate::ui::subcomponents::selection::{self, Policy, SelectionGroup, SelectionSet};
use crate::ui::subcomponents::playback;
use crate::ui::subcomponents::tilt::{self, Rotation};
use crate::ui::subcomponents::timer::SharedTimers;

pub use modal::{ModalKind, ModalSession};

/// Host capabilities handed to [`PageShell::mount`].
pub struct Ports {
    pub frames: Box<dyn FrameScheduler>,
    pub timers: Box<dyn TimerDriver>,
    pub intersections: Box<dyn IntersectionSource>,
    pub pointer_events: Box<dyn PointerEvents>,
    pub cursors: Box<dyn CursorLayer>,
    pub scroll: Box<dyn ScrollHost>,
}

pub enum Message {
    /// Pointer movement and hover transitions for the cursor follower.
    Pointer(pointer::Message),
    /// Visibility reports, viewport changes and section layout.
    Sections(sections::Message),
    /// Pointer entered a nav item.
    NavHovered(SectionId),
    /// Pointer left a nav item.
    NavLeft(SectionId),
    /// Nav item clicked.
    NavClicked(SectionId),
    /// Services accordion header clicked.
    AccordionClicked(ItemId),
    /// Experience timeline node hovered.
    TimelineHovered(ItemId),
    /// Testimonials previous/next buttons.
    Testimonials(carousel::Message),
    /// Pointer input over an expertise card.
    Card {
        card: ItemId,
        message: tilt::Message,
    },
    /// A card was clicked; `media` is its video.
    OpenModal {
        kind: ModalKind,
        item: ItemId,
        media: Box<dyn MediaResource>,
    },
    /// Close button, backdrop click or Escape.
    CloseModal,
    /// Input inside the open modal. Ignored when none is open.
    Modal(modal::Message),
    /// The host delivered a frame tick.
    Frame,
    /// The host clock ticked; expired timers are drained.
    Clock,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// Cursor hover state changed or the cursor was drawn.
    Pointer(pointer::Effect),
    /// The nav highlight moves to this section.
    SectionActivated(SectionId),
    /// A selection group's active item changed.
    SelectionChanged {
        group: GroupId,
        active: Option<ItemId>,
    },
    /// The testimonials window now starts at `front`.
    TestimonialsMoved { front: usize, visible: Vec<usize> },
    /// A card eased toward its target tilt this frame.
    CardRotated {
        card: ItemId,
        rotation: Rotation,
    },
    /// Smooth scroll to this section was requested.
    ScrolledTo(SectionId),
    /// A modal opened and its media was bound.
    ModalOpened {
        kind: ModalKind,
        item: ItemId,
    },
    /// The open modal closed and released its resources.
    ModalClosed,
    /// Forwarded from the open modal.
    Modal(modal::Effect),
}

pub struct PageShell {
    pointer: pointer::Session,
    tracker: Tracker,
    selections: SelectionSet,
    testimonials: Carousel,
    cards: BTreeMap<ItemId, tilt::State>,
    modal: Option<ModalSession>,
    timers: SharedTimers,
    scroll: ScrollLock,
    smoothing: SmoothingFactor,
    hide_delay: HideDelay,
    diagnostics: DiagnosticsHandle,
    mounted: bool,
}

impl PageShell {
    /// Mounts the page: starts the cursor follower, watches every page
    /// section and seeds the selection groups.
    ///
    /// Sections the page does not have are skipped and logged.
    #[must_use]
    pub fn mount(ports: Ports, config: &Config, diagnostics: Option<DiagnosticsHandle>) -> Self {
        let diagnostics = diagnostics.unwrap_or_else(DiagnosticsHandle::disconnected);
        let smoothing = config.smoothing();

        let pointer = pointer::Session::mount(
            Follower::new(smoothing),
            ports.pointer_events,
            ports.cursors,
            ports.frames,
        );

        let mut tracker = Tracker::new(
            ports.intersections,
            config.threshold(),
            config.initial_section(),
        );
        let sections: Vec<SectionId> = PAGE_SECTIONS.iter().copied().map(SectionId::from).collect();
        for error in tracker.watch_all(&sections) {
            let SectionError::UnknownTarget(section) = &error;
            diagnostics.log_warning(WarningEvent::new(
                WarningType::UnknownSectionTarget,
                format!("section not observed: {section}"),
            ));
        }

        let mut selections = SelectionSet::new();
        selections.insert(NAV_GROUP, SelectionGroup::new(Policy::Transient));
        selections.insert(
            ACCORDION_GROUP,
            SelectionGroup::with_initial(Policy::Toggle, ItemId::from(DEFAULT_ACCORDION_ITEM)),
        );
        selections.insert(
            TIMELINE_GROUP,
            SelectionGroup::with_initial(Policy::AlwaysOne, ItemId::from(DEFAULT_TIMELINE_ITEM)),
        );

        diagnostics.log_state(StateChange::Mounted);

        Self {
            pointer,
            tracker,
            selections,
            testimonials: Carousel::new(TESTIMONIAL_COUNT, TESTIMONIAL_WINDOW),
            cards: BTreeMap::new(),
            modal: None,
            timers: SharedTimers::new(ports.timers),
            scroll: ScrollLock::new(ports.scroll),
            smoothing,
            hide_delay: config.hide_delay(),
            diagnostics,
            mounted: true,
        }
    }

    /// Routes a message. Returns nothing once unmounted.
    pub fn update(&mut self, message: Message) -> Vec<Effect> {
        if !self.mounted {
            return Vec::new();
        }
        match message {
            Message::Pointer(msg) => match self.pointer.handle(msg) {
                pointer::Effect::None => Vec::new(),
                effect => vec![Effect::Pointer(effect)],
            },
            Message::Sections(msg) => match self.tracker.handle(msg) {
                sections::Effect::None => Vec::new(),
                sections::Effect::Activated(section) => {
                    self.diagnostics.log_state(StateChange::SectionActivated {
                        section: section.to_string(),
                    });
                    vec![Effect::SectionActivated(section)]
                }
            },
            Message::NavHovered(section) => {
                self.select(NAV_GROUP, selection::Message::Select(section_item(&section)))
            }
            Message::NavLeft(section) => {
                self.select(NAV_GROUP, selection::Message::Release(section_item(&section)))
            }
            Message::NavClicked(section) => self.navigate(section),
            Message::AccordionClicked(item) => {
                self.diagnostics.log_action(UserAction::ToggleAccordion {
                    item: item.to_string(),
                });
                self.select(ACCORDION_GROUP, selection::Message::Select(item))
            }
            Message::TimelineHovered(item) => {
                self.diagnostics.log_action(UserAction::SelectTimelineNode {
                    item: item.to_string(),
                });
                self.select(TIMELINE_GROUP, selection::Message::Select(item))
            }
            Message::Testimonials(msg) => match self.testimonials.handle(msg) {
                carousel::Effect::None => Vec::new(),
                carousel::Effect::Moved(front) => {
                    self.diagnostics
                        .log_action(UserAction::BrowseTestimonials { index: front });
                    vec![Effect::TestimonialsMoved {
                        front,
                        visible: self.testimonials.visible(),
                    }]
                }
            },
            Message::Card { card, message } => {
                let smoothing = self.smoothing;
                let state = self
                    .cards
                    .entry(card.clone())
                    .or_insert_with(|| tilt::State::new(smoothing));
                match state.handle(message) {
                    tilt::Effect::None => Vec::new(),
                    tilt::Effect::Rotated(rotation) => vec![Effect::CardRotated { card, rotation }],
                }
            }
            Message::OpenModal { kind, item, media } => self.open_modal(kind, item, media),
            Message::CloseModal => self.close_modal(),
            Message::Modal(msg) => self.modal_message(msg),
            Message::Frame => self.frame(),
            Message::Clock => self.clock(),
        }
    }

    fn select(&mut self, group: &str, msg: selection::Message) -> Vec<Effect> {
        let group = GroupId::from(group);
        match self.selections.handle(&group, msg) {
            selection::Effect::None => Vec::new(),
            selection::Effect::Changed(active) => vec![Effect::SelectionChanged { group, active }],
        }
    }

    fn navigate(&mut self, section: SectionId) -> Vec<Effect> {
        self.diagnostics.log_action(UserAction::NavigateToSection {
            section: section.to_string(),
        });
        match self.scroll.scroll_to(&section) {
            Ok(()) => vec![Effect::ScrolledTo(section)],
            Err(error) => {
                self.diagnostics.log_warning(WarningEvent::new(
                    WarningType::UnknownSectionTarget,
                    error.to_string(),
                ));
                Vec::new()
            }
        }
    }

    fn open_modal(
        &mut self,
        kind: ModalKind,
        item: ItemId,
        media: Box<dyn MediaResource>,
    ) -> Vec<Effect> {
        let mut effects = self.close_modal();
        self.diagnostics.log_action(UserAction::OpenModal {
            kind: kind.as_str().to_string(),
            item: item.to_string(),
        });
        let (session, autoplay) = ModalSession::open(
            kind,
            item.clone(),
            media,
            self.hide_delay,
            &self.timers,
            &self.scroll,
            Some(self.diagnostics.clone()),
        );
        self.modal = Some(session);
        effects.push(Effect::ModalOpened { kind, item });
        if kind.auto_hides_controls() {
            self.diagnostics.log_state(StateChange::OverlayShown);
        }
        if autoplay != playback::Effect::None {
            effects.push(Effect::Modal(modal::Effect::Playback(autoplay)));
        }
        effects
    }

    fn close_modal(&mut self) -> Vec<Effect> {
        match self.modal.take() {
            Some(session) => {
                self.diagnostics.log_action(UserAction::CloseModal);
                session.close();
                vec![Effect::ModalClosed]
            }
            None => Vec::new(),
        }
    }

    fn modal_message(&mut self, msg: modal::Message) -> Vec<Effect> {
        let Some(session) = self.modal.as_mut() else {
            return Vec::new();
        };
        match &msg {
            modal::Message::Playback(playback::Message::Toggle) => {
                self.diagnostics.log_action(UserAction::TogglePlayback);
            }
            modal::Message::ToggleDetails => {
                self.diagnostics.log_action(UserAction::ToggleDetails);
            }
            _ => {}
        }
        let effect = session.handle(msg);
        self.modal_effect(effect)
    }

    fn modal_effect(&self, effect: modal::Effect) -> Vec<Effect> {
        match effect {
            modal::Effect::None => Vec::new(),
            modal::Effect::ControlsVisibility(visibility) => {
                self.diagnostics.log_state(match visibility {
                    Visibility::Visible => StateChange::OverlayShown,
                    Visibility::Hidden => StateChange::OverlayHidden,
                });
                vec![Effect::Modal(effect)]
            }
            effect => vec![Effect::Modal(effect)],
        }
    }

    fn frame(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        if let pointer::Effect::Rendered { position, active } =
            self.pointer.handle(pointer::Message::Frame)
        {
            effects.push(Effect::Pointer(pointer::Effect::Rendered { position, active }));
        }
        for (card, state) in &mut self.cards {
            if let tilt::Effect::Rotated(rotation) = state.handle(tilt::Message::Frame) {
                effects.push(Effect::CardRotated {
                    card: card.clone(),
                    rotation,
                });
            }
        }
        effects
    }

    fn clock(&mut self) -> Vec<Effect> {
        let mut effects = Vec::new();
        for id in self.timers.expired() {
            let Some(session) = self.modal.as_mut() else {
                continue;
            };
            if let Some(effect) = session.timer_fired(id) {
                effects.extend(self.modal_effect(effect));
            }
        }
        effects
    }

    /// Releases every resource: frame loop, pointer listener, cursor element,
    /// section observation, modal timers, scroll lock and playback binding.
    /// Safe to call more than once.
    pub fn unmount(&mut self) {
        if !self.mounted {
            return;
        }
        self.close_modal();
        self.pointer.unmount();
        self.tracker.disconnect();
        self.mounted = false;
        self.diagnostics.log_state(StateChange::Unmounted);
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted
    }

    #[must_use]
    pub fn active_section(&self) -> &SectionId {
        self.tracker.active()
    }

    #[must_use]
    pub fn follower(&self) -> &Follower {
        self.pointer.follower()
    }

    #[must_use]
    pub fn selection(&self, group: &str) -> Option<&ItemId> {
        self.selections.active(&GroupId::from(group))
    }

    #[must_use]
    pub fn testimonials(&self) -> &Carousel {
        &self.testimonials
    }

    #[must_use]
    pub fn card(&self, card: &ItemId) -> Option<&tilt::State> {
        self.cards.get(card)
    }

    #[must_use]
    pub fn modal(&self) -> Option<&ModalSession> {
        self.modal.as_ref()
    }

    #[must_use]
    pub fn scroll_locked(&self) -> bool {
        self.scroll.is_locked()
    }
}

impl Drop for PageShell {
    fn drop(&mut self) {
        self.unmount();
    }
}

/// Nav items are keyed by the section they link to.
fn section_item(section: &SectionId) -> ItemId {
    ItemId::from(section.as_str())
}

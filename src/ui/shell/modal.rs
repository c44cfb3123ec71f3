// SPDX-License-Identifier: MPL-2.0
//! An open card modal and everything it holds.
//!
//! A modal bundles the playback binding of its video, a scroll lock, and
//! (for expertise modals) an auto-hiding controls overlay. Project modals
//! keep their controls on screen and add a details panel instead.
//!
//! Closing or dropping a session pauses the media, cancels the hide timer
//! and releases the scroll lock.

use crate::application::port::{MediaResource, TimerId};
use crate::diagnostics::DiagnosticsHandle;
use crate::domain::ids::ItemId;
use crate::domain::newtypes::HideDelay;
use crate::ui::subcomponents::overlay::{self, Visibility};
use crate::ui::subcomponents::playback;
use crate::ui::subcomponents::scroll_lock::{ScrollGuard, ScrollLock};
use crate::ui::subcomponents::timer::SharedTimers;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ModalKind {
    /// Expertise card video: controls hide after inactivity.
    Expertise,
    /// Project showcase: persistent controls and a details panel.
    Project,
}

impl ModalKind {
    #[must_use]
    pub fn auto_hides_controls(self) -> bool {
        matches!(self, ModalKind::Expertise)
    }

    #[must_use]
    pub fn has_details(self) -> bool {
        matches!(self, ModalKind::Project)
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            ModalKind::Expertise => "expertise",
            ModalKind::Project => "project",
        }
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer moved over the modal.
    Activity,
    /// Routed to the bound media.
    Playback(playback::Message),
    /// Details panel button clicked (project modals only).
    ToggleDetails,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// Controls were shown or hidden.
    ControlsVisibility(Visibility),
    /// The playback state or readout changed.
    Playback(playback::Effect),
    /// The details panel opened (`true`) or closed.
    DetailsToggled(bool),
}

pub struct ModalSession {
    kind: ModalKind,
    item: ItemId,
    overlay: Option<overlay::State>,
    playback: playback::Bridge,
    details_open: bool,
    scroll: Option<ScrollGuard>,
    timers: SharedTimers,
}

impl ModalSession {
    /// Opens a modal: locks scrolling, starts the overlay timer if the kind
    /// auto-hides, and binds `media` with autoplay. Returns the autoplay
    /// outcome alongside the session.
    pub fn open(
        kind: ModalKind,
        item: ItemId,
        media: Box<dyn MediaResource>,
        delay: HideDelay,
        timers: &SharedTimers,
        scroll: &ScrollLock,
        diagnostics: Option<DiagnosticsHandle>,
    ) -> (Self, playback::Effect) {
        let guard = scroll.acquire();
        let mut timers = timers.clone();
        let overlay = kind
            .auto_hides_controls()
            .then(|| overlay::State::open(delay, &mut timers));
        let mut playback = playback::Bridge::new(diagnostics);
        let autoplay = playback.bind(media, true);
        let session = Self {
            kind,
            item,
            overlay,
            playback,
            details_open: false,
            scroll: Some(guard),
            timers,
        };
        (session, autoplay)
    }

    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Activity => self.overlay_effect(overlay::Message::Activity),
            Message::Playback(msg) => match self.playback.handle(msg) {
                playback::Effect::None => Effect::None,
                effect => Effect::Playback(effect),
            },
            Message::ToggleDetails => {
                if !self.kind.has_details() {
                    return Effect::None;
                }
                self.details_open = !self.details_open;
                Effect::DetailsToggled(self.details_open)
            }
        }
    }

    /// Routes a timer expiry. Returns `None` if the timer is not this modal's.
    pub fn timer_fired(&mut self, id: TimerId) -> Option<Effect> {
        if self.pending_timer() != Some(id) {
            return None;
        }
        Some(self.overlay_effect(overlay::Message::TimerFired(id)))
    }

    fn overlay_effect(&mut self, msg: overlay::Message) -> Effect {
        let timers = &mut self.timers;
        match self.overlay.as_mut().map(|overlay| overlay.handle(msg, timers)) {
            Some(overlay::Effect::VisibilityChanged(visibility)) => {
                Effect::ControlsVisibility(visibility)
            }
            Some(overlay::Effect::None) | None => Effect::None,
        }
    }

    /// Pauses the media, cancels the overlay timer and unlocks scrolling.
    pub fn close(mut self) {
        self.release();
    }

    fn release(&mut self) {
        if let Some(mut overlay) = self.overlay.take() {
            overlay.close(&mut self.timers);
        }
        self.playback.unbind();
        if let Some(guard) = self.scroll.take() {
            guard.release();
        }
    }

    #[must_use]
    pub fn kind(&self) -> ModalKind {
        self.kind
    }

    #[must_use]
    pub fn item(&self) -> &ItemId {
        &self.item
    }

    /// Controls visibility. Always visible for kinds that do not auto-hide.
    #[must_use]
    pub fn controls_visible(&self) -> bool {
        self.overlay.as_ref().is_none_or(overlay::State::is_visible)
    }

    #[must_use]
    pub fn details_open(&self) -> bool {
        self.details_open
    }

    #[must_use]
    pub fn playback(&self) -> &playback::Bridge {
        &self.playback
    }

    #[must_use]
    pub fn pending_timer(&self) -> Option<TimerId> {
        self.overlay.as_ref().and_then(overlay::State::pending_timer)
    }
}

impl Drop for ModalSession {
    fn drop(&mut self) {
        self.release();
    }
}

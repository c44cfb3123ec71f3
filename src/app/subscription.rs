// SPDX-License-Identifier: MPL-2.0
//! Native event subscriptions for the page.
//!
//! This module maps iced's native events (cursor movement, frame ticks, a
//! periodic clock) into [`HostEvent`]s, which the [`App`](super::App) turns
//! into page shell messages.

use crate::ui::shell::{self, modal, PageShell};
use crate::ui::subcomponents::{pointer, sections};
use iced::widget::scrollable::Viewport;
use iced::{event, mouse, time, window, Point, Rectangle, Subscription};
use std::time::Duration;

/// How often expired timers are drained while a modal is open.
const CLOCK_INTERVAL: Duration = Duration::from_millis(50);

/// A native event relevant to the page.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HostEvent {
    PointerMoved(Point),
    Frame,
    Tick,
    /// The page's scroll viewport moved or resized.
    ViewportChanged(Rectangle),
}

impl HostEvent {
    /// Builds a [`HostEvent::ViewportChanged`] from a scrollable's viewport,
    /// in page coordinates.
    #[must_use]
    pub fn from_scroll(viewport: Viewport) -> Self {
        let bounds = viewport.bounds();
        let offset = viewport.absolute_offset();
        HostEvent::ViewportChanged(Rectangle {
            x: offset.x,
            y: offset.y,
            width: bounds.width,
            height: bounds.height,
        })
    }

    /// Translates the event into shell messages.
    ///
    /// Pointer movement also counts as activity for an open modal's controls.
    #[must_use]
    pub fn into_messages(self, page: &PageShell) -> Vec<shell::Message> {
        match self {
            HostEvent::PointerMoved(position) => {
                let mut messages =
                    vec![shell::Message::Pointer(pointer::Message::Moved(position))];
                if page.modal().is_some() {
                    messages.push(shell::Message::Modal(modal::Message::Activity));
                }
                messages
            }
            HostEvent::Frame => vec![shell::Message::Frame],
            HostEvent::Tick => vec![shell::Message::Clock],
            HostEvent::ViewportChanged(viewport) => vec![shell::Message::Sections(
                sections::Message::Viewport(viewport),
            )],
        }
    }
}

/// Routes cursor movement anywhere in the window, captured or not: the
/// decorative cursor follows the pointer over widgets too.
pub fn create_pointer_subscription() -> Subscription<HostEvent> {
    event::listen_with(|event, _status, _window_id| {
        if let event::Event::Mouse(mouse::Event::CursorMoved { position }) = event {
            return Some(HostEvent::PointerMoved(position));
        }
        None
    })
}

/// Frame ticks while the page is mounted.
pub fn create_frame_subscription(mounted: bool) -> Subscription<HostEvent> {
    if mounted {
        window::frames().map(|_| HostEvent::Frame)
    } else {
        Subscription::none()
    }
}

/// Periodic clock ticks, only needed while some timer may be pending.
pub fn create_clock_subscription(has_modal: bool) -> Subscription<HostEvent> {
    if has_modal {
        time::every(CLOCK_INTERVAL).map(|_| HostEvent::Tick)
    } else {
        Subscription::none()
    }
}

/// Every subscription the page needs in its current state.
pub fn create_subscription(page: &PageShell) -> Subscription<HostEvent> {
    Subscription::batch([
        create_pointer_subscription(),
        create_frame_subscription(page.is_mounted()),
        create_clock_subscription(page.modal().is_some()),
    ])
}

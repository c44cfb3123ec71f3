// SPDX-License-Identifier: MPL-2.0
//! Decorative cursor that trails the real pointer.
//!
//! [`Follower`] is the pure state: a smoothed position easing toward the
//! pointer once per frame, plus a hover flag for interactive elements.
//! [`Session`] owns the host resources the effect needs (a move listener, the
//! cursor element and the frame loop) and releases all of them on unmount or
//! drop.

use crate::application::port::{
    CursorId, CursorLayer, ElementPath, FrameId, FrameScheduler, ListenerId, PointerEvents,
};
use crate::domain::ids::ElementId;
use crate::domain::motion::Smoothed;
use crate::domain::newtypes::SmoothingFactor;
use iced::Point;

/// Smoothed pointer position and hover state.
#[derive(Debug, Clone, Default)]
pub struct Follower {
    x: Smoothed,
    y: Smoothed,
    smoothing: SmoothingFactor,
    /// Closest interactive ancestor under the pointer.
    hovered: Option<ElementId>,
}

impl Follower {
    #[must_use]
    pub fn new(smoothing: SmoothingFactor) -> Self {
        Self {
            smoothing,
            ..Self::default()
        }
    }

    pub fn set_target(&mut self, target: Point) {
        self.x.set_target(target.x);
        self.y.set_target(target.y);
    }

    /// Eases one frame toward the target. Returns true if the position moved.
    pub fn step(&mut self) -> bool {
        let moved_x = self.x.step(self.smoothing);
        let moved_y = self.y.step(self.smoothing);
        moved_x || moved_y
    }

    #[must_use]
    pub fn position(&self) -> Point {
        Point::new(self.x.current(), self.y.current())
    }

    #[must_use]
    pub fn target(&self) -> Point {
        Point::new(self.x.target(), self.y.target())
    }

    #[must_use]
    pub fn hover_active(&self) -> bool {
        self.hovered.is_some()
    }

    /// Pointer entered `path`'s innermost element. Returns the new hover flag
    /// if it flipped.
    pub fn pointer_over(&mut self, path: &ElementPath) -> Option<bool> {
        match path.closest_interactive() {
            Some(element) => self.set_hovered(Some(element)),
            None => None,
        }
    }

    /// Pointer left `from` for `to`. Moving between descendants of the same
    /// interactive element is not a transition.
    pub fn pointer_out(&mut self, from: &ElementPath, to: Option<&ElementPath>) -> Option<bool> {
        let left = from.closest_interactive()?;
        let entered = to.and_then(ElementPath::closest_interactive);
        if entered == Some(left) {
            return None;
        }
        self.set_hovered(entered)
    }

    fn set_hovered(&mut self, hovered: Option<ElementId>) -> Option<bool> {
        let was_active = self.hover_active();
        self.hovered = hovered;
        let active = self.hover_active();
        (active != was_active).then_some(active)
    }
}

#[derive(Debug, Clone)]
pub enum Message {
    /// Pointer moved, in viewport coordinates.
    Moved(Point),
    /// Pointer entered an element.
    Over(ElementPath),
    /// Pointer left an element; `to` is where it went, if anywhere.
    Out {
        from: ElementPath,
        to: Option<ElementPath>,
    },
    /// The host delivered a frame tick.
    Frame,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// The cursor entered (`true`) or left an interactive element.
    HoverChanged(bool),
    /// The cursor was drawn at `position` this frame.
    Rendered { position: Point, active: bool },
}

#[derive(Debug, Clone, Copy)]
struct Mounted {
    listener: ListenerId,
    cursor: CursorId,
    frame: Option<FrameId>,
}

/// A mounted follower and the resources it holds.
pub struct Session {
    follower: Follower,
    events: Box<dyn PointerEvents>,
    cursors: Box<dyn CursorLayer>,
    frames: Box<dyn FrameScheduler>,
    mounted: Option<Mounted>,
}

impl Session {
    /// Adds the move listener, creates the cursor element and requests the
    /// first frame.
    pub fn mount(
        follower: Follower,
        mut events: Box<dyn PointerEvents>,
        mut cursors: Box<dyn CursorLayer>,
        mut frames: Box<dyn FrameScheduler>,
    ) -> Self {
        let mounted = Mounted {
            listener: events.add_move_listener(),
            cursor: cursors.create_cursor(),
            frame: Some(frames.request_frame()),
        };
        Self {
            follower,
            events,
            cursors,
            frames,
            mounted: Some(mounted),
        }
    }

    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        let Some(mounted) = self.mounted.as_mut() else {
            return Effect::None;
        };
        match msg {
            Message::Moved(position) => {
                self.follower.set_target(position);
                Effect::None
            }
            Message::Over(path) => self
                .follower
                .pointer_over(&path)
                .map_or(Effect::None, Effect::HoverChanged),
            Message::Out { from, to } => self
                .follower
                .pointer_out(&from, to.as_ref())
                .map_or(Effect::None, Effect::HoverChanged),
            Message::Frame => {
                let Some(pending) = mounted.frame else {
                    return Effect::None;
                };
                if !self.frames.due_frames().contains(&pending) {
                    return Effect::None;
                }
                self.follower.step();
                let position = self.follower.position();
                let active = self.follower.hover_active();
                self.cursors
                    .place_cursor(mounted.cursor, position.x, position.y, active);
                mounted.frame = Some(self.frames.request_frame());
                Effect::Rendered { position, active }
            }
        }
    }

    /// Cancels the frame loop, removes the listener and the cursor element.
    /// Safe to call more than once.
    pub fn unmount(&mut self) {
        if let Some(mounted) = self.mounted.take() {
            if let Some(frame) = mounted.frame {
                self.frames.cancel_frame(frame);
            }
            self.events.remove_move_listener(mounted.listener);
            self.cursors.remove_cursor(mounted.cursor);
        }
    }

    #[must_use]
    pub fn is_mounted(&self) -> bool {
        self.mounted.is_some()
    }

    #[must_use]
    pub fn follower(&self) -> &Follower {
        &self.follower
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        self.unmount();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::application::port::ElementInfo;
    use crate::test_utils::assert_abs_diff_eq;
    use crate::test_utils::fakes::{Frames, Pointer};

    fn path(elements: &[(u64, &str)]) -> ElementPath {
        ElementPath(
            elements
                .iter()
                .map(|(id, tag)| ElementInfo::new(*id, *tag))
                .collect(),
        )
    }

    fn session(pointer: &Pointer, frames: &Frames) -> Session {
        Session::mount(
            Follower::new(SmoothingFactor::default()),
            Box::new(pointer.clone()),
            Box::new(pointer.clone()),
            Box::new(frames.clone()),
        )
    }

    #[test]
    fn first_step_moves_fifteen_percent() {
        let mut follower = Follower::new(SmoothingFactor::default());
        follower.set_target(Point::new(100.0, 200.0));

        assert!(follower.step());
        assert_abs_diff_eq!(follower.position().x, 15.0, epsilon = 1e-4);
        assert_abs_diff_eq!(follower.position().y, 30.0, epsilon = 1e-4);
    }

    #[test]
    fn follower_settles_on_target() {
        let mut follower = Follower::new(SmoothingFactor::new(0.5));
        follower.set_target(Point::new(10.0, -10.0));
        let mut steps = 0;
        while follower.step() {
            steps += 1;
            assert!(steps < 100, "follower must settle");
        }
        assert_eq!(follower.position(), Point::new(10.0, -10.0));
    }

    #[test]
    fn nested_children_do_not_flicker_hover() {
        let mut follower = Follower::default();
        let button = path(&[(2, "button"), (1, "body")]);
        let icon = path(&[(3, "svg"), (2, "button"), (1, "body")]);

        assert_eq!(follower.pointer_over(&button), Some(true));
        // moving onto the icon inside the button
        assert_eq!(follower.pointer_out(&button, Some(&icon)), None);
        assert_eq!(follower.pointer_over(&icon), None);
        assert!(follower.hover_active());

        // leaving the button for plain content
        let body = path(&[(1, "body")]);
        assert_eq!(follower.pointer_out(&icon, Some(&body)), Some(false));
    }

    #[test]
    fn moving_between_interactive_elements_stays_active() {
        let mut follower = Follower::default();
        let first = path(&[(2, "a")]);
        let second = path(&[(3, "a")]);
        follower.pointer_over(&first);

        assert_eq!(follower.pointer_out(&first, Some(&second)), None);
        assert_eq!(follower.pointer_over(&second), None);
        assert!(follower.hover_active());
    }

    #[test]
    fn out_of_plain_content_is_ignored() {
        let mut follower = Follower::default();
        assert_eq!(follower.pointer_out(&path(&[(1, "p")]), None), None);
        assert_eq!(follower.pointer_over(&path(&[(1, "p")])), None);
    }

    #[test]
    fn mount_acquires_and_unmount_releases_everything() {
        let pointer = Pointer::new();
        let frames = Frames::new();
        let mut session = session(&pointer, &frames);

        assert_eq!(pointer.listeners(), 1);
        assert_eq!(pointer.cursors(), 1);
        assert_eq!(frames.pending(), 1);

        session.unmount();
        session.unmount();
        assert_eq!(pointer.listeners(), 0);
        assert_eq!(pointer.cursors(), 0);
        assert_eq!(frames.pending(), 0);
        assert_eq!(session.handle(Message::Frame), Effect::None);
    }

    #[test]
    fn drop_releases_everything() {
        let pointer = Pointer::new();
        let frames = Frames::new();
        drop(session(&pointer, &frames));

        assert_eq!(pointer.listeners(), 0);
        assert_eq!(pointer.cursors(), 0);
        assert_eq!(frames.pending(), 0);
    }

    #[test]
    fn each_frame_renders_and_requests_the_next() {
        let pointer = Pointer::new();
        let frames = Frames::new();
        let mut session = session(&pointer, &frames);
        session.handle(Message::Moved(Point::new(100.0, 0.0)));
        session.handle(Message::Over(path(&[(5, "button")])));

        let effect = session.handle(Message::Frame);
        assert!(matches!(effect, Effect::Rendered { active: true, .. }));
        assert_eq!(frames.pending(), 1);
        let (x, _, active) = pointer.cursor_placement().expect("cursor placed");
        assert_abs_diff_eq!(x, 15.0, epsilon = 1e-4);
        assert!(active);

        session.handle(Message::Frame);
        assert_eq!(pointer.placements(), 2);
    }
}

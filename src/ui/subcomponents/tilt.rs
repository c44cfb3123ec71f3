// SPDX-License-Identifier: MPL-2.0
//! Pointer-driven 3D tilt of a card.
//!
//! The pointer position over the card maps to a normalized offset in
//! `[-0.5, 0.5]` per axis, which eases per frame like the cursor follower and
//! converts to a rotation of at most [`MAX_TILT_DEGREES`].

use crate::config::defaults::MAX_TILT_DEGREES;
use crate::domain::motion::Smoothed;
use crate::domain::newtypes::SmoothingFactor;
use iced::{Point, Rectangle};

const HALF_RANGE: f32 = 0.5;

#[derive(Debug, Clone, Default)]
pub struct State {
    x: Smoothed,
    y: Smoothed,
    smoothing: SmoothingFactor,
}

#[derive(Debug, Clone, Copy)]
pub enum Message {
    /// Pointer moved over the card.
    Moved { position: Point, bounds: Rectangle },
    /// Pointer left the card.
    Left,
    /// The host delivered a frame tick.
    Frame,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// The card should be drawn with this rotation, in degrees.
    Rotated(Rotation),
}

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Rotation {
    pub x_degrees: f32,
    pub y_degrees: f32,
}

impl State {
    #[must_use]
    pub fn new(smoothing: SmoothingFactor) -> Self {
        Self {
            smoothing,
            ..Self::default()
        }
    }

    pub fn handle(&mut self, msg: Message) -> Effect {
        match msg {
            Message::Moved { position, bounds } => {
                if let Some((x, y)) = normalized_offset(position, bounds) {
                    self.x.set_target(x);
                    self.y.set_target(y);
                }
                Effect::None
            }
            Message::Left => {
                self.x.set_target(0.0);
                self.y.set_target(0.0);
                Effect::None
            }
            Message::Frame => {
                let moved_x = self.x.step(self.smoothing);
                let moved_y = self.y.step(self.smoothing);
                if moved_x || moved_y {
                    Effect::Rotated(self.rotation())
                } else {
                    Effect::None
                }
            }
        }
    }

    /// Rotation for the current smoothed offset.
    ///
    /// Pointer toward the top tilts the card back (positive X rotation);
    /// pointer toward the right turns it right (positive Y rotation).
    #[must_use]
    pub fn rotation(&self) -> Rotation {
        let scale = MAX_TILT_DEGREES / HALF_RANGE;
        Rotation {
            x_degrees: -self.y.current() * scale,
            y_degrees: self.x.current() * scale,
        }
    }

    #[must_use]
    pub fn is_settled(&self) -> bool {
        self.x.is_settled() && self.y.is_settled()
    }
}

/// Pointer position relative to the card center, as a fraction of its size.
/// `None` for degenerate bounds.
fn normalized_offset(position: Point, bounds: Rectangle) -> Option<(f32, f32)> {
    if bounds.width <= 0.0 || bounds.height <= 0.0 {
        return None;
    }
    let x = (position.x - bounds.x) / bounds.width - HALF_RANGE;
    let y = (position.y - bounds.y) / bounds.height - HALF_RANGE;
    if !x.is_finite() || !y.is_finite() {
        return None;
    }
    Some((
        x.clamp(-HALF_RANGE, HALF_RANGE),
        y.clamp(-HALF_RANGE, HALF_RANGE),
    ))
}

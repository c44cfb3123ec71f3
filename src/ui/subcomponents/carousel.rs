// SPDX-License-Identifier: MPL-2.0
//! Cyclic browsing over a fixed list with a window of visible items.
//!
//! Stepping past either end wraps around. The window starts at the current
//! item and wraps too, so with five items and a window of three, item 4 is
//! followed by items 0 and 1.

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Carousel {
    len: usize,
    window: usize,
    current: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    /// Step to the following item.
    Next,
    /// Step to the preceding item.
    Previous,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Effect {
    /// No effect.
    None,
    /// The current item changed to the carried index.
    Moved(usize),
}

impl Carousel {
    /// Creates a carousel over `len` items showing `window` at a time,
    /// starting at the first item.
    #[must_use]
    pub fn new(len: usize, window: usize) -> Self {
        Self {
            len,
            window,
            current: 0,
        }
    }

    pub fn handle(&mut self, msg: Message) -> Effect {
        if self.len == 0 {
            return Effect::None;
        }
        let next = match msg {
            Message::Next => (self.current + 1) % self.len,
            Message::Previous => (self.current + self.len - 1) % self.len,
        };
        if next == self.current {
            return Effect::None;
        }
        self.current = next;
        Effect::Moved(next)
    }

    #[must_use]
    pub fn current(&self) -> usize {
        self.current
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Indices of the visible items, front first. Lists shorter than the
    /// window repeat items; an empty list shows nothing.
    #[must_use]
    pub fn visible(&self) -> Vec<usize> {
        if self.len == 0 {
            return Vec::new();
        }
        (0..self.window)
            .map(|offset| (self.current + offset) % self.len)
            .collect()
    }
}

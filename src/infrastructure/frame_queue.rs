// SPDX-License-Identifier: MPL-2.0
//! Frame request queue.
//!
//! Implements [`FrameScheduler`] as a list of one-shot requests that the host
//! drains once per rendered frame (for example from `iced::window::frames`).

use crate::application::port::{FrameId, FrameScheduler};

#[derive(Debug, Default)]
pub struct FrameQueue {
    next_id: u64,
    requested: Vec<FrameId>,
}

impl FrameQueue {
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Number of requests waiting for the next frame.
    #[must_use]
    pub fn pending(&self) -> usize {
        self.requested.len()
    }
}

impl FrameScheduler for FrameQueue {
    fn request_frame(&mut self) -> FrameId {
        self.next_id += 1;
        let id = FrameId(self.next_id);
        self.requested.push(id);
        id
    }

    fn cancel_frame(&mut self, id: FrameId) {
        self.requested.retain(|pending| *pending != id);
    }

    fn due_frames(&mut self) -> Vec<FrameId> {
        std::mem::take(&mut self.requested)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn due_frames_drains_in_request_order() {
        let mut queue = FrameQueue::new();
        let a = queue.request_frame();
        let b = queue.request_frame();

        assert_eq!(queue.due_frames(), vec![a, b]);
        assert!(queue.due_frames().is_empty());
    }

    #[test]
    fn cancelled_frame_is_not_delivered() {
        let mut queue = FrameQueue::new();
        let a = queue.request_frame();
        let b = queue.request_frame();
        queue.cancel_frame(a);

        assert_eq!(queue.pending(), 1);
        assert_eq!(queue.due_frames(), vec![b]);
    }

    #[test]
    fn request_made_during_delivery_waits_for_next_frame() {
        let mut queue = FrameQueue::new();
        queue.request_frame();
        let delivered = queue.due_frames();
        let next = queue.request_frame();

        assert_eq!(delivered.len(), 1);
        assert_eq!(queue.due_frames(), vec![next]);
    }
}

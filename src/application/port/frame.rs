// SPDX-License-Identifier: MPL-2.0
//! Per-frame scheduling port.

/// Token for one requested animation frame.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct FrameId(pub u64);

/// Port for the host's "call me on the next frame" primitive.
///
/// A request is one-shot: a follower that wants to keep animating requests
/// the next frame from inside its frame handler.
pub trait FrameScheduler {
    /// Requests a callback on the next frame.
    fn request_frame(&mut self) -> FrameId;

    /// Cancels a pending request. Unknown or already-delivered ids are ignored.
    fn cancel_frame(&mut self, id: FrameId);

    /// Removes and returns every request due for delivery now, in request order.
    fn due_frames(&mut self) -> Vec<FrameId>;
}

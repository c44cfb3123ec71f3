// SPDX-License-Identifier: MPL-2.0
//! Playable media port.

use crate::domain::error::PlaybackError;

/// Port for a playable media element.
///
/// `play` mirrors a promise-returning host call: an immediate rejection is
/// returned here, a late one is delivered to the page shell as a message.
pub trait MediaResource {
    /// Starts or resumes playback.
    ///
    /// # Errors
    ///
    /// Returns a [`PlaybackError`] if the host rejects the request outright.
    fn play(&mut self) -> Result<(), PlaybackError>;

    /// Pauses playback.
    fn pause(&mut self);

    /// Current position in seconds.
    fn position(&self) -> f64;

    /// Total duration in seconds, if known.
    fn duration(&self) -> Option<f64>;

    /// Enables or disables position-update notifications.
    fn set_time_updates(&mut self, enabled: bool);
}

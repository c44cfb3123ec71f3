// SPDX-License-Identifier: MPL-2.0
//! Play/pause toggle and progress readout bound to a media resource.

use crate::application::port::MediaResource;
use crate::diagnostics::{DiagnosticsHandle, StateChange, WarningEvent, WarningType};
use crate::domain::error::PlaybackError;
use crate::domain::playback::PlaybackState;

struct Binding {
    resource: Box<dyn MediaResource>,
    state: PlaybackState,
    /// Unknown durations are reported once per binding.
    reported_degenerate: bool,
}

/// Playback state of the open modal, if it has media.
///
/// Unbinding (explicitly or by dropping the bridge) pauses the resource and
/// stops its time updates.
#[derive(Default)]
pub struct Bridge {
    binding: Option<Binding>,
    diagnostics: Option<DiagnosticsHandle>,
}

#[derive(Debug, Clone)]
pub enum Message {
    /// The play/pause surface was clicked.
    Toggle,
    /// The resource reported its position.
    TimeUpdate { current: f64, duration: Option<f64> },
    /// A play command issued earlier was rejected.
    PlayRejected(String),
}

#[derive(Debug, Clone, PartialEq)]
pub enum Effect {
    /// No effect.
    None,
    /// Media is now playing.
    Started,
    /// Media is now paused.
    Paused,
    /// New position readout, progress in percent.
    Progress(f64),
    /// Play was rejected; the state is paused.
    Blocked(PlaybackError),
}

impl Bridge {
    #[must_use]
    pub fn new(diagnostics: Option<DiagnosticsHandle>) -> Self {
        Self {
            binding: None,
            diagnostics,
        }
    }

    /// Binds a resource, replacing (and unbinding) any previous one. With
    /// `autoplay`, a play command is issued immediately.
    pub fn bind(&mut self, mut resource: Box<dyn MediaResource>, autoplay: bool) -> Effect {
        self.unbind();
        resource.set_time_updates(true);
        let mut state = PlaybackState::new(false);
        state.update_time(resource.position(), resource.duration());
        self.binding = Some(Binding {
            resource,
            state,
            reported_degenerate: false,
        });
        if autoplay {
            self.play()
        } else {
            Effect::None
        }
    }

    #[allow(clippy::needless_pass_by_value)]
    pub fn handle(&mut self, msg: Message) -> Effect {
        let Some(binding) = self.binding.as_mut() else {
            return Effect::None;
        };
        match msg {
            Message::Toggle => {
                if binding.state.is_playing() {
                    binding.resource.pause();
                    binding.state.set_playing(false);
                    self.log_state(StateChange::PlaybackPaused);
                    Effect::Paused
                } else {
                    self.play()
                }
            }
            Message::TimeUpdate { current, duration } => {
                binding.state.update_time(current, duration);
                let percent = binding.state.progress_percent();
                if binding.state.duration().is_none() && !binding.reported_degenerate {
                    binding.reported_degenerate = true;
                    if let Some(diagnostics) = &self.diagnostics {
                        diagnostics.log_warning(WarningEvent::new(
                            WarningType::DegenerateDuration,
                            format!("no usable duration: {duration:?}"),
                        ));
                    }
                }
                Effect::Progress(percent)
            }
            Message::PlayRejected(reason) => self.reject(PlaybackError::from_message(&reason)),
        }
    }

    fn play(&mut self) -> Effect {
        let Some(binding) = self.binding.as_mut() else {
            return Effect::None;
        };
        match binding.resource.play() {
            Ok(()) => {
                binding.state.set_playing(true);
                self.log_state(StateChange::PlaybackStarted);
                Effect::Started
            }
            Err(error) => self.reject(error),
        }
    }

    fn reject(&mut self, error: PlaybackError) -> Effect {
        if let Some(binding) = self.binding.as_mut() {
            binding.state.set_playing(false);
        }
        if let Some(diagnostics) = &self.diagnostics {
            let warning_type = if error.is_policy_block() {
                WarningType::PlaybackBlocked
            } else {
                WarningType::Other
            };
            diagnostics.log_warning(WarningEvent::new(warning_type, error.to_string()));
        }
        Effect::Blocked(error)
    }

    fn log_state(&self, state: StateChange) {
        if let Some(diagnostics) = &self.diagnostics {
            diagnostics.log_state(state);
        }
    }

    /// Pauses the resource, stops time updates and forgets it.
    pub fn unbind(&mut self) {
        if let Some(mut binding) = self.binding.take() {
            binding.resource.pause();
            binding.resource.set_time_updates(false);
        }
    }

    /// `None` when nothing is bound.
    #[must_use]
    pub fn state(&self) -> Option<&PlaybackState> {
        self.binding.as_ref().map(|binding| &binding.state)
    }

    #[must_use]
    pub fn is_bound(&self) -> bool {
        self.binding.is_some()
    }
}

impl Drop for Bridge {
    fn drop(&mut self) {
        self.unbind();
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{DiagnosticEventKind, DiagnosticsCollector};
    use crate::test_utils::assert_abs_diff_eq;
    use crate::test_utils::fakes::Media;

    #[test]
    fn autoplay_starts_playing() {
        let media = Media::new();
        let mut bridge = Bridge::default();

        assert_eq!(bridge.bind(Box::new(media.clone()), true), Effect::Started);
        assert!(media.is_playing());
        assert!(media.time_updates());
        assert!(bridge.state().is_some_and(PlaybackState::is_playing));
    }

    #[test]
    fn toggle_inverts_intent() {
        let media = Media::new();
        let mut bridge = Bridge::default();
        bridge.bind(Box::new(media.clone()), false);

        assert_eq!(bridge.handle(Message::Toggle), Effect::Started);
        assert_eq!(bridge.handle(Message::Toggle), Effect::Paused);
        assert!(!media.is_playing());
        assert_eq!(media.play_calls(), 1);
    }

    #[test]
    fn blocked_autoplay_is_logged_and_stays_paused() {
        let mut collector = DiagnosticsCollector::default();
        let media = Media::rejecting("NotAllowedError: play() failed because the user didn't interact");
        let mut bridge = Bridge::new(Some(collector.handle()));

        let effect = bridge.bind(Box::new(media.clone()), true);
        assert!(matches!(effect, Effect::Blocked(PlaybackError::Blocked(_))));
        assert!(bridge.state().is_some_and(|s| !s.is_playing()));

        collector.process_pending();
        let warning = collector.iter().find_map(|event| match &event.kind {
            DiagnosticEventKind::Warning { event } => Some(event.warning_type),
            _ => None,
        });
        assert_eq!(warning, Some(WarningType::PlaybackBlocked));
    }

    #[test]
    fn late_rejection_resets_playing() {
        let media = Media::new();
        let mut bridge = Bridge::default();
        bridge.bind(Box::new(media), true);

        let effect = bridge.handle(Message::PlayRejected("AbortError: interrupted".into()));
        assert_eq!(effect, Effect::Blocked(PlaybackError::Aborted));
        assert!(bridge.state().is_some_and(|s| !s.is_playing()));

        // next toggle tries to play again
        assert_eq!(bridge.handle(Message::Toggle), Effect::Started);
    }

    #[test]
    fn time_update_reports_clamped_progress() {
        let mut bridge = Bridge::default();
        bridge.bind(Box::new(Media::new()), false);

        let Effect::Progress(percent) = bridge.handle(Message::TimeUpdate {
            current: 130.0,
            duration: Some(120.0),
        }) else {
            panic!("expected progress");
        };
        assert_abs_diff_eq!(percent, 100.0);

        let Effect::Progress(percent) = bridge.handle(Message::TimeUpdate {
            current: 5.0,
            duration: Some(0.0),
        }) else {
            panic!("expected progress");
        };
        assert_abs_diff_eq!(percent, 0.0);
    }

    #[test]
    fn unknown_duration_is_reported_once() {
        let mut collector = DiagnosticsCollector::default();
        let mut bridge = Bridge::new(Some(collector.handle()));
        bridge.bind(Box::new(Media::new()), false);

        for _ in 0..3 {
            bridge.handle(Message::TimeUpdate {
                current: 1.0,
                duration: None,
            });
        }
        collector.process_pending();

        let reported = collector
            .iter()
            .filter(|event| {
                matches!(
                    &event.kind,
                    DiagnosticEventKind::Warning { event }
                        if event.warning_type == WarningType::DegenerateDuration
                )
            })
            .count();
        assert_eq!(reported, 1);
    }

    #[test]
    fn unbind_pauses_and_stops_updates() {
        let media = Media::new();
        let mut bridge = Bridge::default();
        bridge.bind(Box::new(media.clone()), true);

        bridge.unbind();
        assert!(!media.is_playing());
        assert!(!media.time_updates());
        assert!(bridge.state().is_none());
        assert_eq!(bridge.handle(Message::Toggle), Effect::None);
    }

    #[test]
    fn drop_unbinds() {
        let media = Media::new();
        let mut bridge = Bridge::default();
        bridge.bind(Box::new(media.clone()), true);
        drop(bridge);

        assert!(!media.is_playing());
        assert_eq!(media.pause_calls(), 1);
    }
}

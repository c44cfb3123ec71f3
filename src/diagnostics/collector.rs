// SPDX-License-Identifier: MPL-2.0
//! Diagnostics collector for aggregating and storing diagnostic events.

use std::fs;
use std::path::Path;
use std::time::Instant;

use chrono::{DateTime, Utc};
use crossbeam_channel::{bounded, Receiver, Sender};

use super::{
    BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind, DiagnosticReport,
    ErrorEvent, ReportMetadata, SerializableEvent, StateChange, UserAction, WarningEvent,
};
use crate::error::Result;

/// Handle for sending diagnostic events to the collector.
///
/// Cheap to clone. Sends never block: when the channel is full the event is
/// dropped.
#[derive(Clone, Debug)]
pub struct DiagnosticsHandle {
    event_tx: Sender<DiagnosticEvent>,
}

impl DiagnosticsHandle {
    /// A handle whose events go nowhere.
    #[must_use]
    pub fn disconnected() -> Self {
        let (event_tx, _) = bounded(1);
        Self { event_tx }
    }

    pub fn log_action(&self, action: UserAction) {
        self.log_action_with_details(action, None);
    }

    pub fn log_action_with_details(&self, action: UserAction, details: Option<String>) {
        self.send(DiagnosticEventKind::UserAction { action, details });
    }

    pub fn log_state(&self, state: StateChange) {
        self.send(DiagnosticEventKind::StateChange { state });
    }

    pub fn log_warning(&self, event: WarningEvent) {
        self.send(DiagnosticEventKind::Warning { event });
    }

    pub fn log_error(&self, event: ErrorEvent) {
        self.send(DiagnosticEventKind::Error { event });
    }

    fn send(&self, kind: DiagnosticEventKind) {
        // Non-blocking send - drop if channel is full
        let _ = self.event_tx.try_send(DiagnosticEvent::new(kind));
    }
}

/// Receives events through a bounded channel and keeps the most recent ones
/// in a [`CircularBuffer`].
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    event_rx: Receiver<DiagnosticEvent>,
    event_tx: Sender<DiagnosticEvent>,
    /// Monotonic start, for relative timestamps.
    collection_started_at: Instant,
    /// Wall-clock start, for report metadata.
    collection_started_at_utc: DateTime<Utc>,
}

const DEFAULT_CHANNEL_CAPACITY: usize = 100;

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let (event_tx, event_rx) = bounded(DEFAULT_CHANNEL_CAPACITY);
        Self {
            buffer: CircularBuffer::new(capacity),
            event_rx,
            event_tx,
            collection_started_at: Instant::now(),
            collection_started_at_utc: Utc::now(),
        }
    }

    #[must_use]
    pub fn handle(&self) -> DiagnosticsHandle {
        DiagnosticsHandle {
            event_tx: self.event_tx.clone(),
        }
    }

    /// Drains the channel into the buffer. Call once per UI tick.
    pub fn process_pending(&mut self) {
        while let Ok(event) = self.event_rx.try_recv() {
            self.buffer.push(event);
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    /// Exports the buffered events as a pretty-printed JSON report.
    ///
    /// # Errors
    ///
    /// Returns an error if JSON serialization fails.
    pub fn export_json(&self) -> serde_json::Result<String> {
        self.build_report().to_json()
    }

    /// Writes the JSON report to `path`, creating parent directories.
    ///
    /// # Errors
    ///
    /// Returns an error if serialization or any filesystem operation fails.
    pub fn export_to_path(&self, path: &Path) -> Result<()> {
        let json = self.export_json()?;
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, json)?;
        Ok(())
    }

    #[allow(clippy::cast_possible_truncation)] // Duration in ms fits comfortably in u64
    fn build_report(&self) -> DiagnosticReport {
        let collection_duration_ms = self.collection_started_at.elapsed().as_millis() as u64;
        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| {
                SerializableEvent::new(
                    event.timestamp,
                    self.collection_started_at,
                    event.kind.clone(),
                )
            })
            .collect();
        let metadata = ReportMetadata::new(
            self.collection_started_at_utc,
            collection_duration_ms,
            events.len(),
        );
        DiagnosticReport::new(metadata, events)
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{ErrorType, WarningType};
    use tempfile::tempdir;

    #[test]
    fn handle_events_arrive_after_processing() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        handle.log_state(StateChange::Mounted);
        handle.log_action(UserAction::TogglePlayback);
        assert!(collector.is_empty());

        collector.process_pending();
        assert_eq!(collector.len(), 2);
    }

    #[test]
    fn full_channel_drops_instead_of_blocking() {
        let mut collector = DiagnosticsCollector::default();
        let handle = collector.handle();

        for _ in 0..DEFAULT_CHANNEL_CAPACITY + 20 {
            handle.log_action(UserAction::CloseModal);
        }
        collector.process_pending();
        assert_eq!(collector.len(), DEFAULT_CHANNEL_CAPACITY);
    }

    #[test]
    fn buffer_keeps_only_most_recent_events() {
        let mut collector = DiagnosticsCollector::new(BufferCapacity::new(100));
        let handle = collector.handle();
        for i in 0..150 {
            handle.log_action(UserAction::NavigateToSection {
                section: format!("s{i}"),
            });
            collector.process_pending();
        }
        assert_eq!(collector.len(), 100);
        let first = collector.iter().next().expect("non-empty");
        assert!(matches!(
            &first.kind,
            DiagnosticEventKind::UserAction {
                action: UserAction::NavigateToSection { section },
                ..
            } if section == "s50"
        ));
    }

    #[test]
    fn disconnected_handle_is_silent() {
        let handle = DiagnosticsHandle::disconnected();
        handle.log_warning(WarningEvent::new(WarningType::Other, "ignored"));
    }

    #[test]
    fn export_json_contains_events_and_summary() {
        let mut collector = DiagnosticsCollector::default();
        collector.handle().log_warning(WarningEvent::new(
            WarningType::PlaybackBlocked,
            "Autoplay blocked",
        ));
        collector.process_pending();

        let json = collector.export_json().expect("export");
        let value: serde_json::Value = serde_json::from_str(&json).expect("valid json");
        assert_eq!(value["metadata"]["event_count"], 1);
        assert_eq!(value["events"][0]["event"]["warning_type"], "playback_blocked");
        assert_eq!(value["summary"]["event_counts"]["warning"], 1);
    }

    #[test]
    fn export_to_path_writes_report() {
        let mut collector = DiagnosticsCollector::default();
        collector.handle().log_state(StateChange::Unmounted);
        collector.process_pending();
        let dir = tempdir().expect("temp dir");
        let path = dir.path().join("reports").join("diagnostics.json");

        collector.export_to_path(&path).expect("export");
        let content = fs::read_to_string(&path).expect("read back");
        assert!(content.contains("unmounted"));
    }

    #[test]
    fn logged_errors_are_kept() {
        let mut collector = DiagnosticsCollector::default();
        collector
            .handle()
            .log_error(ErrorEvent::new(ErrorType::IoError, "read-only volume"));
        collector.process_pending();

        assert!(matches!(
            collector.iter().next().map(|event| &event.kind),
            Some(DiagnosticEventKind::Error { event }) if event.error_type == ErrorType::IoError
        ));
    }
}

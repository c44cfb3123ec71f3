// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types.
//!
//! Events describe what the user did and how the interaction layer reacted,
//! so a report can show, for example, that autoplay was blocked right after a
//! project modal opened.

use std::time::Instant;

use serde::{Deserialize, Serialize};

/// User-initiated actions worth recording.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    // ==========================================================================
    // Navigation
    // ==========================================================================
    /// Clicked a nav item.
    NavigateToSection { section: String },

    // ==========================================================================
    // Selection
    // ==========================================================================
    /// Clicked an accordion header.
    ToggleAccordion { item: String },

    /// Hovered a timeline node.
    SelectTimelineNode { item: String },

    /// Stepped the testimonials carousel to a new front item.
    BrowseTestimonials { index: usize },

    // ==========================================================================
    // Modals
    // ==========================================================================
    /// Opened a card's modal.
    OpenModal { kind: String, item: String },

    /// Closed the open modal.
    CloseModal,

    /// Clicked the play/pause surface.
    TogglePlayback,

    /// Opened or closed the project details panel.
    ToggleDetails,
}

/// State transitions of the interaction layer.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "state", rename_all = "snake_case")]
pub enum StateChange {
    /// The page shell acquired its host resources.
    Mounted,
    /// The page shell released its host resources.
    Unmounted,
    /// A different section became the active one.
    SectionActivated { section: String },
    /// Modal controls became visible.
    OverlayShown,
    /// Modal controls hid after inactivity.
    OverlayHidden,
    /// Modal media started playing.
    PlaybackStarted,
    /// Modal media paused.
    PlaybackPaused,
}

/// Categories of non-fatal warnings.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WarningType {
    /// A play command was rejected by the media resource.
    PlaybackBlocked,
    /// A section id had no matching element.
    UnknownSectionTarget,
    /// Progress was requested with a zero or unknown duration.
    DegenerateDuration,
    /// A configuration value was out of range or unreadable.
    ConfigurationIssue,
    /// Anything without a dedicated category.
    Other,
}

/// Categories of errors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorType {
    /// A file could not be read or written.
    IoError,
    /// A report could not be serialized.
    ExportError,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WarningEvent {
    pub warning_type: WarningType,
    pub message: String,
}

impl WarningEvent {
    #[must_use]
    pub fn new(warning_type: WarningType, message: impl Into<String>) -> Self {
        Self {
            warning_type,
            message: message.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ErrorEvent {
    pub error_type: ErrorType,
    pub message: String,
}

impl ErrorEvent {
    #[must_use]
    pub fn new(error_type: ErrorType, message: impl Into<String>) -> Self {
        Self {
            error_type,
            message: message.into(),
        }
    }
}

/// A diagnostic event with timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    /// When the event occurred (monotonic clock for relative offsets)
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
    /// Creates a new diagnostic event stamped now.
    #[must_use]
    pub fn new(kind: DiagnosticEventKind) -> Self {
        Self {
            timestamp: Instant::now(),
            kind,
        }
    }

    #[must_use]
    pub fn with_timestamp(kind: DiagnosticEventKind, timestamp: Instant) -> Self {
        Self { timestamp, kind }
    }
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction {
        action: UserAction,
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },
    StateChange {
        state: StateChange,
    },
    Warning {
        event: WarningEvent,
    },
    Error {
        event: ErrorEvent,
    },
}

impl DiagnosticEventKind {
    /// Short name used for report summaries.
    #[must_use]
    pub fn type_name(&self) -> &'static str {
        match self {
            DiagnosticEventKind::UserAction { .. } => "user_action",
            DiagnosticEventKind::StateChange { .. } => "state_change",
            DiagnosticEventKind::Warning { .. } => "warning",
            DiagnosticEventKind::Error { .. } => "error",
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
//! In-memory diagnostics for the interaction layer.
//!
//! Components log through a cloneable [`DiagnosticsHandle`]; the
//! [`DiagnosticsCollector`] drains the channel into a memory-bounded
//! [`CircularBuffer`] and can export everything as a JSON report.

mod buffer;
mod collector;
mod events;
mod report;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::{DiagnosticsCollector, DiagnosticsHandle};
pub use events::{
    DiagnosticEvent, DiagnosticEventKind, ErrorEvent, ErrorType, StateChange, UserAction,
    WarningEvent, WarningType,
};
pub use report::{DiagnosticReport, ReportMetadata, ReportSummary, SerializableEvent};

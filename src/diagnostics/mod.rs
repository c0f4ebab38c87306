// SPDX-License-Identifier: MPL-2.0
//! Diagnostics: a bounded log of user actions and engine events that can be
//! exported as a JSON report.
//!
//! # Architecture
//!
//! - [`CircularBuffer`]: Keeps the most recent events up to a set size
//! - [`BufferCapacity`]: The configured log size, clamped to its bounds
//! - [`DiagnosticEvent`]: Timestamped [`UserAction`], [`EngineEvent`] or warning
//! - [`DiagnosticsCollector`]: Records events and builds [`DiagnosticReport`]s

mod buffer;
mod collector;
mod events;
mod report;

pub use buffer::{BufferCapacity, CircularBuffer};
pub use collector::DiagnosticsCollector;
pub use events::{DiagnosticEvent, DiagnosticEventKind, EngineEvent, UserAction};
pub use report::{DiagnosticReport, ReportMetadata, ReportSummary, SerializableEvent};

// SPDX-License-Identifier: MPL-2.0
//! Diagnostic report structures for JSON export.

use std::time::Instant;

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::DiagnosticEventKind;

/// Metadata about a diagnostic report.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct ReportMetadata {
    /// When the report was generated (RFC 3339)
    pub generated_at: String,
    pub app_version: String,
    /// When collection started (RFC 3339)
    pub collection_started_at: String,
    pub collection_duration_ms: u64,
    pub event_count: usize,
}

impl ReportMetadata {
    #[must_use]
    pub fn new(
        collection_started_at: DateTime<Utc>,
        collection_duration_ms: u64,
        event_count: usize,
    ) -> Self {
        Self {
            generated_at: Utc::now().to_rfc3339(),
            app_version: env!("CARGO_PKG_VERSION").to_string(),
            collection_started_at: collection_started_at.to_rfc3339(),
            collection_duration_ms,
            event_count,
        }
    }
}

/// An event with its timestamp made relative to the start of collection.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct SerializableEvent {
    /// Milliseconds since collection started
    pub timestamp_ms: u64,
    #[serde(flatten)]
    pub kind: DiagnosticEventKind,
}

impl SerializableEvent {
    #[must_use]
    pub fn new(
        event_timestamp: Instant,
        collection_start: Instant,
        kind: DiagnosticEventKind,
    ) -> Self {
        let elapsed = event_timestamp.saturating_duration_since(collection_start);
        let timestamp_ms = u64::try_from(elapsed.as_millis()).unwrap_or(u64::MAX);
        Self { timestamp_ms, kind }
    }
}

/// Event counts per category.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
pub struct ReportSummary {
    pub user_actions: usize,
    pub engine_events: usize,
    pub warnings: usize,
}

impl ReportSummary {
    #[must_use]
    pub fn from_events(events: &[SerializableEvent]) -> Self {
        events
            .iter()
            .fold(Self::default(), |mut summary, event| {
                match event.kind {
                    DiagnosticEventKind::UserAction { .. } => summary.user_actions += 1,
                    DiagnosticEventKind::Engine { .. } => summary.engine_events += 1,
                    DiagnosticEventKind::Warning { .. } => summary.warnings += 1,
                }
                summary
            })
    }
}

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticReport {
    pub metadata: ReportMetadata,
    pub summary: ReportSummary,
    pub events: Vec<SerializableEvent>,
}

impl DiagnosticReport {
    #[must_use]
    pub fn new(metadata: ReportMetadata, events: Vec<SerializableEvent>) -> Self {
        let summary = ReportSummary::from_events(&events);
        Self {
            metadata,
            summary,
            events,
        }
    }

    pub fn to_json(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::diagnostics::{EngineEvent, UserAction};
    use std::time::Duration;

    fn events() -> Vec<SerializableEvent> {
        let start = Instant::now();
        vec![
            SerializableEvent::new(
                start + Duration::from_millis(10),
                start,
                DiagnosticEventKind::UserAction {
                    action: UserAction::LightboxNext,
                    details: None,
                },
            ),
            SerializableEvent::new(
                start + Duration::from_millis(25),
                start,
                DiagnosticEventKind::Engine {
                    event: EngineEvent::AdvanceDropped { widget: 2 },
                },
            ),
        ]
    }

    #[test]
    fn serializable_event_uses_relative_millis() {
        let events = events();
        assert_eq!(events[0].timestamp_ms, 10);
        assert_eq!(events[1].timestamp_ms, 25);
    }

    #[test]
    fn summary_counts_each_category() {
        let summary = ReportSummary::from_events(&events());
        assert_eq!(
            summary,
            ReportSummary {
                user_actions: 1,
                engine_events: 1,
                warnings: 0,
            }
        );
    }

    #[test]
    fn report_json_flattens_event_kind() {
        let report = DiagnosticReport::new(ReportMetadata::new(Utc::now(), 25, 2), events());
        let json = report.to_json().expect("serialization should succeed");
        assert!(json.contains("\"timestamp_ms\": 25"));
        assert!(json.contains("\"type\": \"engine\""));
        assert!(json.contains("\"app_version\""));
    }
}

// SPDX-License-Identifier: MPL-2.0
//! In-memory collector for diagnostic events.

use std::fs;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use chrono::{DateTime, Utc};

use super::report::{DiagnosticReport, ReportMetadata, SerializableEvent};
use super::{BufferCapacity, CircularBuffer, DiagnosticEvent, DiagnosticEventKind, EngineEvent, UserAction};
use crate::app::paths;
use crate::error::{Error, Result};

/// Prefix of exported report file names.
const REPORT_FILE_PREFIX: &str = "hackfolio-diagnostics";

/// Stores diagnostic events in a memory-bounded circular buffer.
///
/// Old events are evicted once the buffer reaches capacity. Everything runs
/// on the UI thread, so the collector is owned by the application state and
/// logged to directly from `update`.
#[derive(Debug)]
pub struct DiagnosticsCollector {
    buffer: CircularBuffer<DiagnosticEvent>,
    /// Monotonic start, for relative event timestamps.
    started_at: Instant,
    /// Wall-clock start, for report metadata.
    started_at_utc: DateTime<Utc>,
}

impl DiagnosticsCollector {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        Self {
            buffer: CircularBuffer::new(capacity),
            started_at: Instant::now(),
            started_at_utc: Utc::now(),
        }
    }

    pub fn log_action(&mut self, action: UserAction) {
        self.log_action_with_details(action, None);
    }

    pub fn log_action_with_details(&mut self, action: UserAction, details: Option<String>) {
        self.push(DiagnosticEventKind::UserAction { action, details });
    }

    pub fn log_engine(&mut self, event: EngineEvent) {
        self.push(DiagnosticEventKind::Engine { event });
    }

    pub fn log_warning(&mut self, message: impl Into<String>) {
        self.push(DiagnosticEventKind::Warning {
            message: message.into(),
        });
    }

    fn push(&mut self, kind: DiagnosticEventKind) {
        self.buffer.push(DiagnosticEvent::new(kind));
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.buffer.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.buffer.is_empty()
    }

    /// Iterates oldest first.
    pub fn iter(&self) -> impl Iterator<Item = &DiagnosticEvent> {
        self.buffer.iter()
    }

    pub fn clear(&mut self) {
        self.buffer.clear();
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.buffer.capacity()
    }

    #[must_use]
    pub fn collection_duration(&self) -> Duration {
        self.started_at.elapsed()
    }

    /// Builds a report from the current buffer contents.
    #[must_use]
    pub fn build_report(&self) -> DiagnosticReport {
        let events: Vec<SerializableEvent> = self
            .buffer
            .iter()
            .map(|event| SerializableEvent::new(event.timestamp, self.started_at, event.kind.clone()))
            .collect();

        let duration_ms =
            u64::try_from(self.collection_duration().as_millis()).unwrap_or(u64::MAX);
        let metadata = ReportMetadata::new(self.started_at_utc, duration_ms, events.len());

        DiagnosticReport::new(metadata, events)
    }

    /// Exports all collected events as a pretty-printed JSON report.
    pub fn export_json(&self) -> serde_json::Result<String> {
        self.build_report().to_json()
    }

    /// Writes the JSON report to `path`, creating parent directories.
    pub fn export_to_file(&self, path: impl AsRef<Path>) -> Result<PathBuf> {
        let path = path.as_ref();
        let json = self
            .export_json()
            .map_err(|err| Error::Io(format!("failed to serialize diagnostics: {err}")))?;

        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(path, json)?;

        tracing::info!(path = %path.display(), events = self.len(), "diagnostics exported");
        Ok(path.to_path_buf())
    }

    /// Writes the report into the application data directory under a
    /// timestamped file name.
    pub fn export_to_data_dir(&self) -> Result<PathBuf> {
        self.export_to_data_dir_with_override(None)
    }

    pub fn export_to_data_dir_with_override(&self, base_dir: Option<PathBuf>) -> Result<PathBuf> {
        let dir = paths::get_app_data_dir_with_override(base_dir)
            .ok_or_else(|| Error::Io("no data directory available".to_string()))?;
        let file_name = format!(
            "{REPORT_FILE_PREFIX}-{}.json",
            Utc::now().format("%Y%m%d-%H%M%S")
        );
        self.export_to_file(dir.join(file_name))
    }
}

impl Default for DiagnosticsCollector {
    fn default() -> Self {
        Self::new(BufferCapacity::default())
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Diagnostic event types for activity tracking.

use std::time::Instant;

use serde::{Deserialize, Serialize};

use crate::domain::media::SortOrder;
use crate::gallery::GalleryMode;

/// User-initiated actions that can be captured for diagnostics.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum UserAction {
    // ==========================================================================
    // Lightbox
    // ==========================================================================
    OpenLightbox { index: usize },
    CloseLightbox,
    LightboxNext,
    LightboxPrevious,
    ToggleFullscreen,
    ToggleSlideshow,

    // ==========================================================================
    // Gallery
    // ==========================================================================
    SetGalleryMode { mode: GalleryMode },

    /// `group` is `None` when the filter was cleared.
    SetGroupFilter {
        #[serde(skip_serializing_if = "Option::is_none")]
        group: Option<String>,
    },

    SetSortOrder { order: SortOrder },

    // ==========================================================================
    // Spotlight and Logo
    // ==========================================================================
    SpotlightGoTo { index: usize },
    SpotlightNext,
    SpotlightPrevious,
    LogoClicked,

    // ==========================================================================
    // Preferences
    // ==========================================================================
    ChangeTheme,
    ChangeLanguage { locale: String },
}

/// Things the timing engines did on their own.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "event", rename_all = "snake_case")]
pub enum EngineEvent {
    /// A carousel swapped to a new index.
    Rotated { widget: u32, index: usize },

    /// An advance arrived mid-fade and was dropped.
    AdvanceDropped { widget: u32 },

    /// The rotating logo landed on its rare variant.
    RareVariantShown { widget: u32 },

    RareViewExpired { widget: u32 },

    /// The lightbox slideshow moved forward.
    SlideshowAdvanced { index: usize },

    /// The gallery view was rebuilt after a filter or sort change.
    ViewRecomputed { items: usize },
}

/// A diagnostic event with a monotonic timestamp.
#[derive(Debug, Clone)]
pub struct DiagnosticEvent {
    pub timestamp: Instant,
    pub kind: DiagnosticEventKind,
}

impl DiagnosticEvent {
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

#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum DiagnosticEventKind {
    UserAction {
        action: UserAction,
        /// Optional additional details.
        #[serde(skip_serializing_if = "Option::is_none")]
        details: Option<String>,
    },

    Engine {
        event: EngineEvent,
    },

    /// Non-critical warning, such as a settings file that failed to load.
    Warning {
        message: String,
    },
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn diagnostic_event_new_creates_with_current_timestamp() {
        let before = Instant::now();
        let event = DiagnosticEvent::new(DiagnosticEventKind::Warning {
            message: "late".to_string(),
        });
        let after = Instant::now();

        assert!(event.timestamp >= before);
        assert!(event.timestamp <= after);
    }

    #[test]
    fn user_action_serializes_with_tags() {
        let kind = DiagnosticEventKind::UserAction {
            action: UserAction::SetGalleryMode {
                mode: GalleryMode::Timeline,
            },
            details: None,
        };
        let json = serde_json::to_string(&kind).expect("serialization should succeed");
        assert!(json.contains("\"type\":\"user_action\""));
        assert!(json.contains("\"action\":\"set_gallery_mode\""));
        assert!(json.contains("\"mode\":\"timeline\""));
        assert!(!json.contains("details"));
    }

    #[test]
    fn engine_event_round_trips_through_json() {
        let kind = DiagnosticEventKind::Engine {
            event: EngineEvent::Rotated {
                widget: 1,
                index: 3,
            },
        };
        let json = serde_json::to_string(&kind).expect("serialization should succeed");
        assert!(json.contains("\"event\":\"rotated\""));
        let back: DiagnosticEventKind =
            serde_json::from_str(&json).expect("deserialization should succeed");
        assert_eq!(back, kind);
    }

    #[test]
    fn warning_deserializes_from_json() {
        let json = r#"{"type":"warning","message":"settings ignored"}"#;
        let event: DiagnosticEventKind =
            serde_json::from_str(json).expect("deserialization should succeed");
        assert_eq!(
            event,
            DiagnosticEventKind::Warning {
                message: "settings ignored".to_string()
            }
        );
    }
}

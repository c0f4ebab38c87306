// SPDX-License-Identifier: MPL-2.0
//! User preferences, loaded from and saved to a `settings.toml` file.
//!
//! # Configuration Sections
//!
//! - `[general]` - Language and theme mode
//! - `[carousel]` - Hero rotation, fade, rotating logo and rare variant
//! - `[transition]` - Spotlight slide duration and auto-rotation
//! - `[lightbox]` - Slideshow interval
//! - `[gallery]` - Default renderer and sort order
//! - `[diagnostics]` - Event buffer capacity
//!
//! Every numeric field is optional. Accessors fall back to the defaults in
//! [`defaults`] and clamp through the domain newtypes, so an out-of-range
//! value in the file never reaches an engine.
//!
//! # Path Resolution
//!
//! 1. Use `load_from_path()`/`save_to_path()` with explicit path
//! 2. `--config-dir` CLI argument or `HACKFOLIO_CONFIG_DIR` environment variable
//! 3. Falls back to the platform config directory
//!
//! # Examples
//!
//! ```no_run
//! use hackfolio::config::{self, Config};
//!
//! let (mut config, _warning) = config::load();
//! config.lightbox.slideshow_interval_ms = Some(5_000);
//! config::save(&config).expect("Failed to save config");
//! ```

pub mod defaults;

pub use defaults::*;

use crate::app::paths;
use crate::diagnostics::BufferCapacity;
use crate::domain::media::SortOrder;
use crate::domain::ui::{
    FadeDuration, RareChance, RotationInterval, SlideshowInterval, TransitionDuration,
};
use crate::error::Result;
use crate::gallery::GalleryMode;
use crate::ui::theming::ThemeMode;
use serde::{Deserialize, Serialize};
use std::fs;
use std::path::{Path, PathBuf};
use std::time::Duration;

const CONFIG_FILE: &str = "settings.toml";

/// Warning key returned when an existing settings file cannot be read.
pub const LOAD_ERROR_KEY: &str = "notification-config-load-error";

// =============================================================================
// Section Structs
// =============================================================================

/// General application settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct GeneralConfig {
    /// UI language code (e.g., "en-US", "fr").
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub language: Option<String>,

    /// Application theme mode (light, dark, or system).
    #[serde(
        default = "default_theme_mode",
        deserialize_with = "deserialize_theme_mode"
    )]
    pub theme_mode: ThemeMode,
}

impl Default for GeneralConfig {
    fn default() -> Self {
        Self {
            language: None,
            theme_mode: default_theme_mode(),
        }
    }
}

/// Hero carousel and rotating logo settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CarouselConfig {
    /// Hero rotation interval in milliseconds.
    #[serde(
        default = "default_rotation_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub rotation_interval_ms: Option<u64>,

    /// Full fade duration in milliseconds (half out, half in).
    #[serde(default = "default_fade_ms", skip_serializing_if = "Option::is_none")]
    pub fade_ms: Option<u64>,

    /// Rotating logo interval in milliseconds.
    #[serde(
        default = "default_logo_rotation_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub logo_rotation_ms: Option<u64>,

    /// Probability that a logo rotation lands on the rare variant.
    #[serde(default = "default_rare_chance", skip_serializing_if = "Option::is_none")]
    pub rare_chance: Option<f64>,

    /// How long the rare viewing mode lasts after a click, in seconds.
    #[serde(
        default = "default_rare_view_secs",
        skip_serializing_if = "Option::is_none"
    )]
    pub rare_view_secs: Option<u64>,
}

impl Default for CarouselConfig {
    fn default() -> Self {
        Self {
            rotation_interval_ms: default_rotation_interval_ms(),
            fade_ms: default_fade_ms(),
            logo_rotation_ms: default_logo_rotation_ms(),
            rare_chance: default_rare_chance(),
            rare_view_secs: default_rare_view_secs(),
        }
    }
}

impl CarouselConfig {
    #[must_use]
    pub fn rotation_interval(&self) -> RotationInterval {
        RotationInterval::from_millis(
            self.rotation_interval_ms
                .unwrap_or(DEFAULT_ROTATION_INTERVAL_MS),
        )
    }

    #[must_use]
    pub fn fade(&self) -> FadeDuration {
        FadeDuration::from_millis(self.fade_ms.unwrap_or(DEFAULT_FADE_MS))
    }

    #[must_use]
    pub fn logo_rotation_interval(&self) -> RotationInterval {
        RotationInterval::from_millis(self.logo_rotation_ms.unwrap_or(DEFAULT_LOGO_ROTATION_MS))
    }

    #[must_use]
    pub fn rare_chance(&self) -> RareChance {
        RareChance::new(self.rare_chance.unwrap_or(DEFAULT_RARE_CHANCE))
    }

    /// Rare viewing window, clamped to
    /// [`MIN_RARE_VIEW_SECS`]..=[`MAX_RARE_VIEW_SECS`].
    #[must_use]
    pub fn rare_view_window(&self) -> Duration {
        let secs = self
            .rare_view_secs
            .unwrap_or(DEFAULT_RARE_VIEW_SECS)
            .clamp(MIN_RARE_VIEW_SECS, MAX_RARE_VIEW_SECS);
        Duration::from_secs(secs)
    }
}

/// Project spotlight settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct TransitionConfig {
    /// Slide duration in milliseconds.
    #[serde(
        default = "default_transition_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub duration_ms: Option<u64>,

    /// Auto-rotation interval in milliseconds.
    #[serde(
        default = "default_auto_rotate_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub auto_rotate_ms: Option<u64>,
}

impl Default for TransitionConfig {
    fn default() -> Self {
        Self {
            duration_ms: default_transition_ms(),
            auto_rotate_ms: default_auto_rotate_ms(),
        }
    }
}

impl TransitionConfig {
    #[must_use]
    pub fn duration(&self) -> TransitionDuration {
        TransitionDuration::from_millis(self.duration_ms.unwrap_or(DEFAULT_TRANSITION_MS))
    }

    #[must_use]
    pub fn auto_rotate_interval(&self) -> RotationInterval {
        RotationInterval::from_millis(self.auto_rotate_ms.unwrap_or(DEFAULT_AUTO_ROTATE_MS))
    }
}

/// Lightbox settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct LightboxConfig {
    /// Slideshow interval in milliseconds.
    #[serde(
        default = "default_slideshow_interval_ms",
        skip_serializing_if = "Option::is_none"
    )]
    pub slideshow_interval_ms: Option<u64>,
}

impl Default for LightboxConfig {
    fn default() -> Self {
        Self {
            slideshow_interval_ms: default_slideshow_interval_ms(),
        }
    }
}

impl LightboxConfig {
    #[must_use]
    pub fn slideshow_interval(&self) -> SlideshowInterval {
        SlideshowInterval::from_millis(
            self.slideshow_interval_ms
                .unwrap_or(DEFAULT_SLIDESHOW_INTERVAL_MS),
        )
    }
}

/// Gallery page settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct GalleryConfig {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_mode: Option<GalleryMode>,

    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default_sort: Option<SortOrder>,
}

impl GalleryConfig {
    #[must_use]
    pub fn mode(&self) -> GalleryMode {
        self.default_mode.unwrap_or_default()
    }

    #[must_use]
    pub fn sort(&self) -> SortOrder {
        self.default_sort.unwrap_or_default()
    }
}

/// Diagnostics settings.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct DiagnosticsConfig {
    /// Number of events kept in memory.
    #[serde(
        default = "default_diagnostics_capacity",
        skip_serializing_if = "Option::is_none"
    )]
    pub buffer_capacity: Option<usize>,
}

impl Default for DiagnosticsConfig {
    fn default() -> Self {
        Self {
            buffer_capacity: default_diagnostics_capacity(),
        }
    }
}

impl DiagnosticsConfig {
    #[must_use]
    pub fn capacity(&self) -> BufferCapacity {
        BufferCapacity::new(self.buffer_capacity.unwrap_or(DEFAULT_DIAGNOSTICS_CAPACITY))
    }
}

// =============================================================================
// Main Config Struct
// =============================================================================

/// Application configuration with sectioned structure.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Default)]
pub struct Config {
    #[serde(default)]
    pub general: GeneralConfig,

    #[serde(default)]
    pub carousel: CarouselConfig,

    #[serde(default)]
    pub transition: TransitionConfig,

    #[serde(default)]
    pub lightbox: LightboxConfig,

    #[serde(default)]
    pub gallery: GalleryConfig,

    #[serde(default)]
    pub diagnostics: DiagnosticsConfig,
}

// =============================================================================
// Default Value Functions
// =============================================================================

fn default_theme_mode() -> ThemeMode {
    ThemeMode::System
}

fn default_rotation_interval_ms() -> Option<u64> {
    Some(DEFAULT_ROTATION_INTERVAL_MS)
}

fn default_fade_ms() -> Option<u64> {
    Some(DEFAULT_FADE_MS)
}

fn default_logo_rotation_ms() -> Option<u64> {
    Some(DEFAULT_LOGO_ROTATION_MS)
}

fn default_rare_chance() -> Option<f64> {
    Some(DEFAULT_RARE_CHANCE)
}

fn default_rare_view_secs() -> Option<u64> {
    Some(DEFAULT_RARE_VIEW_SECS)
}

fn default_transition_ms() -> Option<u64> {
    Some(DEFAULT_TRANSITION_MS)
}

fn default_auto_rotate_ms() -> Option<u64> {
    Some(DEFAULT_AUTO_ROTATE_MS)
}

fn default_slideshow_interval_ms() -> Option<u64> {
    Some(DEFAULT_SLIDESHOW_INTERVAL_MS)
}

fn default_diagnostics_capacity() -> Option<usize> {
    Some(DEFAULT_DIAGNOSTICS_CAPACITY)
}

fn deserialize_theme_mode<'de, D>(deserializer: D) -> std::result::Result<ThemeMode, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::de::Error;

    let raw = String::deserialize(deserializer)?;
    match raw.to_lowercase().as_str() {
        "light" => Ok(ThemeMode::Light),
        "dark" => Ok(ThemeMode::Dark),
        "system" => Ok(ThemeMode::System),
        other => Err(D::Error::custom(format!("invalid theme_mode: {}", other))),
    }
}

// =============================================================================
// Config Path Resolution
// =============================================================================

fn get_config_path_with_override(base_dir: Option<PathBuf>) -> Option<PathBuf> {
    paths::get_app_config_dir_with_override(base_dir).map(|mut path| {
        path.push(CONFIG_FILE);
        path
    })
}

// =============================================================================
// Load / Save
// =============================================================================

/// Loads the configuration from the default location.
///
/// A missing file yields defaults silently. An unreadable or malformed file
/// yields defaults plus the [`LOAD_ERROR_KEY`] warning for the UI.
#[must_use]
pub fn load() -> (Config, Option<String>) {
    load_with_override(None)
}

/// Loads the configuration from a custom directory.
#[must_use]
pub fn load_with_override(base_dir: Option<PathBuf>) -> (Config, Option<String>) {
    if let Some(path) = get_config_path_with_override(base_dir) {
        if path.exists() {
            match load_from_path(&path) {
                Ok(config) => return (config, None),
                Err(err) => {
                    tracing::warn!(path = %path.display(), error = %err, "falling back to default settings");
                    return (Config::default(), Some(LOAD_ERROR_KEY.to_string()));
                }
            }
        }
    }
    (Config::default(), None)
}

/// Loads configuration from a specific path.
pub fn load_from_path(path: &Path) -> Result<Config> {
    let content = fs::read_to_string(path)?;
    let config = toml::from_str::<Config>(&content)?;
    Ok(config)
}

/// Saves the configuration to the default location.
pub fn save(config: &Config) -> Result<()> {
    save_with_override(config, None)
}

/// Saves the configuration to a custom directory.
pub fn save_with_override(config: &Config, base_dir: Option<PathBuf>) -> Result<()> {
    if let Some(path) = get_config_path_with_override(base_dir) {
        return save_to_path(config, &path);
    }
    Ok(())
}

/// Saves configuration to a specific path.
pub fn save_to_path(config: &Config, path: &Path) -> Result<()> {
    if let Some(parent) = path.parent() {
        fs::create_dir_all(parent)?;
    }
    let content = toml::to_string_pretty(config)?;
    fs::write(path, content)?;
    Ok(())
}

// =============================================================================
// Tests
// =============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::ui::newtypes::{fade_bounds, rotation_bounds};
    use crate::error::Error;
    use tempfile::tempdir;

    #[test]
    fn save_and_load_round_trip_preserves_settings() {
        let config = Config {
            general: GeneralConfig {
                language: Some("fr".to_string()),
                theme_mode: ThemeMode::Light,
            },
            carousel: CarouselConfig {
                rotation_interval_ms: Some(5_000),
                fade_ms: Some(800),
                logo_rotation_ms: Some(3_000),
                rare_chance: Some(0.2),
                rare_view_secs: Some(10),
            },
            transition: TransitionConfig {
                duration_ms: Some(500),
                auto_rotate_ms: Some(8_000),
            },
            lightbox: LightboxConfig {
                slideshow_interval_ms: Some(4_000),
            },
            gallery: GalleryConfig {
                default_mode: Some(GalleryMode::Timeline),
                default_sort: Some(SortOrder::Oldest),
            },
            diagnostics: DiagnosticsConfig {
                buffer_capacity: Some(200),
            },
        };
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("nested").join("settings.toml");

        save_to_path(&config, &config_path).expect("failed to save config");
        let loaded = load_from_path(&config_path).expect("failed to load config");

        assert_eq!(loaded, config);
    }

    #[test]
    fn load_from_path_invalid_toml_errors() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let config_path = temp_dir.path().join("settings.toml");
        fs::write(&config_path, "not = valid = toml").expect("failed to write invalid toml");

        match load_from_path(&config_path) {
            Err(Error::Config(_)) => {}
            other => panic!("expected Config error, got {:?}", other),
        }
    }

    #[test]
    fn missing_sections_fall_back_to_defaults() {
        let config: Config = toml::from_str(
            r#"
            [lightbox]
            slideshow_interval_ms = 5000
            "#,
        )
        .expect("partial config parses");

        assert_eq!(config.lightbox.slideshow_interval().as_millis(), 5_000);
        assert_eq!(config.carousel, CarouselConfig::default());
        assert_eq!(config.gallery.mode(), GalleryMode::Grid);
        assert_eq!(config.gallery.sort(), SortOrder::Newest);
        assert_eq!(config.general.theme_mode, ThemeMode::System);
    }

    #[test]
    fn out_of_range_values_are_clamped_by_accessors() {
        let config: Config = toml::from_str(
            r#"
            [carousel]
            rotation_interval_ms = 10
            fade_ms = 999999
            rare_chance = 3.5
            rare_view_secs = 0
            "#,
        )
        .expect("config parses");

        assert_eq!(
            config.carousel.rotation_interval().as_millis(),
            rotation_bounds::MIN_MS
        );
        assert_eq!(config.carousel.fade().as_millis(), fade_bounds::MAX_MS);
        assert!((config.carousel.rare_chance().value() - 1.0).abs() < f64::EPSILON);
        assert_eq!(
            config.carousel.rare_view_window(),
            Duration::from_secs(MIN_RARE_VIEW_SECS)
        );
    }

    #[test]
    fn gallery_section_uses_kebab_case_names() {
        let config: Config = toml::from_str(
            r#"
            [gallery]
            default_mode = "fun"
            default_sort = "oldest"
            "#,
        )
        .expect("config parses");
        assert_eq!(config.gallery.mode(), GalleryMode::Fun);
        assert_eq!(config.gallery.sort(), SortOrder::Oldest);
    }

    #[test]
    fn theme_mode_is_case_insensitive_and_validated() {
        let config: Config = toml::from_str("[general]\ntheme_mode = \"DARK\"\n").expect("parses");
        assert_eq!(config.general.theme_mode, ThemeMode::Dark);

        let invalid = toml::from_str::<Config>("[general]\ntheme_mode = \"sepia\"\n");
        assert!(invalid.is_err());
    }

    #[test]
    fn load_with_override_reports_broken_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        fs::write(temp_dir.path().join(CONFIG_FILE), "[carousel\n").expect("write");

        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));

        assert_eq!(config, Config::default());
        assert_eq!(warning.as_deref(), Some(LOAD_ERROR_KEY));
    }

    #[test]
    fn load_with_override_missing_file_is_silent() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let (config, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert_eq!(config, Config::default());
        assert!(warning.is_none());
    }

    #[test]
    fn save_with_override_writes_settings_file() {
        let temp_dir = tempdir().expect("failed to create temp dir");
        let mut config = Config::default();
        config.diagnostics.buffer_capacity = Some(50);

        save_with_override(&config, Some(temp_dir.path().to_path_buf())).expect("save");

        assert!(temp_dir.path().join(CONFIG_FILE).exists());
        let (loaded, warning) = load_with_override(Some(temp_dir.path().to_path_buf()));
        assert!(warning.is_none());
        assert_eq!(loaded.diagnostics.capacity().value(), 50);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Light, dark and system theme handling.

use crate::ui::design_tokens::{opacity, palette};
use iced::{Color, Theme};
use serde::{Deserialize, Serialize};

/// Color palette for a theme.
#[derive(Debug, Clone, PartialEq)]
pub struct ColorScheme {
    pub surface_primary: Color,
    pub surface_secondary: Color,

    pub text_primary: Color,
    pub text_secondary: Color,

    pub brand_primary: Color,
    pub brand_accent: Color,
    pub achievement: Color,

    pub error: Color,
    pub success: Color,

    pub backdrop: Color,
    pub overlay_text: Color,
}

impl ColorScheme {
    #[must_use]
    pub fn light() -> Self {
        Self {
            surface_primary: palette::WHITE,
            surface_secondary: palette::GRAY_100,

            text_primary: palette::INK_900,
            text_secondary: palette::GRAY_500,

            brand_primary: palette::INDIGO_500,
            brand_accent: palette::CORAL_600,
            achievement: palette::GOLD_400,

            error: palette::ERROR_500,
            success: palette::SUCCESS_500,

            backdrop: Color {
                a: opacity::BACKDROP,
                ..palette::INK_900
            },
            overlay_text: palette::WHITE,
        }
    }

    #[must_use]
    pub fn dark() -> Self {
        Self {
            surface_primary: palette::INK_900,
            surface_secondary: palette::INK_800,

            text_primary: palette::GRAY_100,
            text_secondary: palette::GRAY_300,

            brand_primary: palette::INDIGO_300,
            brand_accent: palette::CORAL_400,
            achievement: palette::GOLD_400,

            error: palette::ERROR_500,
            success: palette::SUCCESS_500,

            backdrop: Color {
                a: opacity::BACKDROP,
                ..palette::BLACK
            },
            overlay_text: palette::WHITE,
        }
    }

    /// Scheme matching the OS preference; dark when detection fails.
    #[must_use]
    pub fn from_system() -> Self {
        if let Ok(dark_light::Mode::Light) = dark_light::detect() {
            Self::light()
        } else {
            Self::dark()
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ThemeMode {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemeMode {
    pub const ALL: [ThemeMode; 3] = [ThemeMode::Light, ThemeMode::Dark, ThemeMode::System];

    /// Returns true if the effective theme is dark.
    #[must_use]
    pub fn is_dark(self) -> bool {
        match self {
            ThemeMode::Light => false,
            ThemeMode::Dark => true,
            ThemeMode::System => !matches!(dark_light::detect(), Ok(dark_light::Mode::Light)),
        }
    }

    /// Cycles Light, Dark, System.
    #[must_use]
    pub fn next(self) -> Self {
        match self {
            ThemeMode::Light => ThemeMode::Dark,
            ThemeMode::Dark => ThemeMode::System,
            ThemeMode::System => ThemeMode::Light,
        }
    }

    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            ThemeMode::Light => "theme-light",
            ThemeMode::Dark => "theme-dark",
            ThemeMode::System => "theme-system",
        }
    }
}

/// Resolved colors plus the mode they came from.
#[derive(Debug, Clone)]
pub struct AppTheme {
    pub colors: ColorScheme,
    pub mode: ThemeMode,
}

impl AppTheme {
    #[must_use]
    pub fn new(mode: ThemeMode) -> Self {
        let colors = match mode {
            ThemeMode::Light => ColorScheme::light(),
            ThemeMode::Dark => ColorScheme::dark(),
            ThemeMode::System => ColorScheme::from_system(),
        };

        Self { colors, mode }
    }

    /// Built-in Iced theme matching the resolved mode.
    #[must_use]
    pub fn iced_theme(&self) -> Theme {
        if self.mode.is_dark() {
            Theme::Dark
        } else {
            Theme::Light
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn light_theme_has_light_surface() {
        let scheme = ColorScheme::light();
        assert!(scheme.surface_primary.r > 0.9);
    }

    #[test]
    fn dark_theme_has_dark_surface() {
        let scheme = ColorScheme::dark();
        assert!(scheme.surface_primary.r < 0.2);
    }

    #[test]
    fn both_schemes_share_achievement_gold() {
        assert_eq!(ColorScheme::light().achievement, ColorScheme::dark().achievement);
    }

    #[test]
    fn theme_mode_cycles_through_all_modes() {
        let mut mode = ThemeMode::Light;
        for _ in 0..ThemeMode::ALL.len() {
            mode = mode.next();
        }
        assert_eq!(mode, ThemeMode::Light);
        assert!(ThemeMode::Dark.is_dark());
        assert!(!ThemeMode::Light.is_dark());
    }
}

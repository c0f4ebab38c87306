// SPDX-License-Identifier: MPL-2.0
//! Centralized button styles.

use crate::ui::design_tokens::{
    opacity,
    palette::{self, BLACK, WHITE},
    radius, shadow,
};
use iced::widget::button;
use iced::{Background, Border, Color, Theme};

fn is_light(theme: &Theme) -> bool {
    matches!(theme, Theme::Light)
}

/// Active chip in a toggle group (mode switcher, nav tabs, sort).
pub fn selected(_theme: &Theme, status: button::Status) -> button::Style {
    let background = match status {
        button::Status::Hovered => palette::INDIGO_300,
        button::Status::Disabled => palette::GRAY_300,
        button::Status::Active | button::Status::Pressed => palette::INDIGO_500,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: WHITE,
        border: Border {
            color: palette::INDIGO_700,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        ..button::Style::default()
    }
}

/// Inactive chip in a toggle group.
pub fn unselected(theme: &Theme, status: button::Status) -> button::Style {
    let (background, text_color) = if is_light(theme) {
        (palette::GRAY_100, palette::INK_900)
    } else {
        (palette::INK_700, palette::GRAY_100)
    };
    let border_color = match status {
        button::Status::Hovered => palette::INDIGO_500,
        _ => palette::GRAY_300,
    };
    button::Style {
        background: Some(Background::Color(background)),
        text_color: if status == button::Status::Disabled {
            palette::GRAY_500
        } else {
            text_color
        },
        border: Border {
            color: border_color,
            width: 1.0,
            radius: radius::FULL.into(),
        },
        shadow: shadow::NONE,
        ..button::Style::default()
    }
}

/// Picks [`selected`] or [`unselected`].
pub fn chip(active: bool) -> fn(&Theme, button::Status) -> button::Style {
    if active {
        selected
    } else {
        unselected
    }
}

/// Round translucent control drawn over media (lightbox arrows, close).
pub fn media_control(_theme: &Theme, status: button::Status) -> button::Style {
    let alpha = match status {
        button::Status::Hovered => opacity::HOVER,
        button::Status::Pressed => opacity::OPAQUE,
        _ => opacity::CAPTION_BAR,
    };
    button::Style {
        background: Some(Background::Color(Color { a: alpha, ..BLACK })),
        text_color: WHITE,
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        shadow: shadow::TILE,
        ..button::Style::default()
    }
}

/// Gallery tile: no chrome, a brand outline on hover.
pub fn tile(_theme: &Theme, status: button::Status) -> button::Style {
    let border = match status {
        button::Status::Hovered | button::Status::Pressed => Border {
            color: palette::INDIGO_500,
            width: 2.0,
            radius: radius::MD.into(),
        },
        _ => Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
    };
    button::Style {
        background: None,
        border,
        shadow: if status == button::Status::Hovered {
            shadow::LIFTED
        } else {
            shadow::TILE
        },
        ..button::Style::default()
    }
}

/// Text-only link, used by "clear filter" and the logo.
pub fn link(theme: &Theme, status: button::Status) -> button::Style {
    let color = if is_light(theme) {
        palette::CORAL_600
    } else {
        palette::CORAL_400
    };
    button::Style {
        background: None,
        text_color: if status == button::Status::Hovered {
            palette::INDIGO_500
        } else {
            color
        },
        ..button::Style::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selected_chip_uses_brand_color() {
        let style = selected(&Theme::Dark, button::Status::Active);
        assert_eq!(style.background, Some(Background::Color(palette::INDIGO_500)));
    }

    #[test]
    fn media_control_alpha_changes_on_hover() {
        let normal = media_control(&Theme::Dark, button::Status::Active);
        let hover = media_control(&Theme::Dark, button::Status::Hovered);
        assert_ne!(normal.background, hover.background);
    }

    #[test]
    fn chip_picks_style_by_state() {
        let active = chip(true)(&Theme::Light, button::Status::Active);
        let inactive = chip(false)(&Theme::Light, button::Status::Active);
        assert_ne!(active.background, inactive.background);
    }
}

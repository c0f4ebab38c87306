// SPDX-License-Identifier: MPL-2.0
//! Container styles.

use crate::ui::design_tokens::{opacity, palette, radius, shadow};
use iced::widget::container;
use iced::{Background, Border, Color, Theme};

/// Card surface derived from the active theme background.
pub fn card(theme: &Theme) -> container::Style {
    let base = theme.extended_palette().background.weak.color;
    container::Style {
        background: Some(Background::Color(base)),
        border: Border {
            radius: radius::LG.into(),
            ..Border::default()
        },
        shadow: shadow::TILE,
        ..container::Style::default()
    }
}

/// Dimmed layer behind the lightbox content.
pub fn backdrop(color: Color) -> impl Fn(&Theme) -> container::Style {
    move |_theme: &Theme| container::Style {
        background: Some(Background::Color(color)),
        ..container::Style::default()
    }
}

/// Translucent strip under captions laid over media.
pub fn caption_bar(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(Color {
            a: opacity::CAPTION_BAR,
            ..palette::BLACK
        })),
        text_color: Some(palette::WHITE),
        border: Border {
            radius: radius::SM.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Gold pill for hackathon prizes.
pub fn achievement_badge(_theme: &Theme) -> container::Style {
    container::Style {
        background: Some(Background::Color(palette::GOLD_400)),
        text_color: Some(palette::INK_900),
        border: Border {
            radius: radius::FULL.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

/// Placeholder frame for media that cannot be shown (remote URLs).
pub fn placeholder(theme: &Theme) -> container::Style {
    let strong = theme.extended_palette().background.strong.color;
    container::Style {
        background: Some(Background::Color(strong)),
        border: Border {
            radius: radius::MD.into(),
            ..Border::default()
        },
        ..container::Style::default()
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Rendering of a single media item.
//!
//! Local files go through Iced's image widget. Remote URLs are never fetched
//! and show a captioned placeholder instead.

use crate::domain::media::{MediaItem, MediaSource};
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::styles;
use iced::widget::{container, image, text};
use iced::{ContentFit, Element, Length, Radians, Rotation};

/// How a media frame is drawn.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Frame {
    pub width: Length,
    pub height: Length,
    pub opacity: f32,
    pub tilt_deg: f32,
    pub fit: ContentFit,
}

impl Frame {
    #[must_use]
    pub fn fixed(width: f32, height: f32) -> Self {
        Self {
            width: Length::Fixed(width),
            height: Length::Fixed(height),
            opacity: 1.0,
            tilt_deg: 0.0,
            fit: ContentFit::Cover,
        }
    }

    #[must_use]
    pub fn fill(height: f32) -> Self {
        Self {
            width: Length::Fill,
            ..Self::fixed(0.0, height)
        }
    }

    #[must_use]
    pub fn opacity(mut self, opacity: f32) -> Self {
        self.opacity = opacity.clamp(0.0, 1.0);
        self
    }

    #[must_use]
    pub fn tilt(mut self, degrees: f32) -> Self {
        self.tilt_deg = degrees;
        self
    }

    #[must_use]
    pub fn contain(mut self) -> Self {
        self.fit = ContentFit::Contain;
        self
    }
}

pub fn view<'a, M: 'a>(item: &'a MediaItem, frame: Frame) -> Element<'a, M> {
    match &item.src {
        MediaSource::Path(path) => image(image::Handle::from_path(path))
            .width(frame.width)
            .height(frame.height)
            .content_fit(frame.fit)
            .opacity(frame.opacity)
            .rotation(Rotation::Floating(Radians(frame.tilt_deg.to_radians())))
            .into(),
        MediaSource::Url(url) => container(text(url.as_str()).size(typography::CAPTION))
            .padding(spacing::XS)
            .width(frame.width)
            .height(frame.height)
            .center_x(frame.width)
            .center_y(frame.height)
            .style(styles::container::placeholder)
            .into(),
    }
}

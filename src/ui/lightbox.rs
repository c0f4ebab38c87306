// SPDX-License-Identifier: MPL-2.0
//! Lightbox overlay drawn above a gallery.
//!
//! The backdrop is a `mouse_area`; the content sits inside `opaque` so clicks
//! on the media never reach the backdrop.

use crate::domain::media::MediaItem;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{opacity, palette, sizing, spacing, typography};
use crate::ui::media::{self, Frame};
use crate::ui::styles;
use iced::widget::{button, column, container, mouse_area, opaque, row, text, Space, Stack};
use iced::{Alignment, Color, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub item: &'a MediaItem,
    /// Zero-based position in the current view.
    pub index: usize,
    pub total: usize,
    pub fullscreen: bool,
    pub slideshow: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Backdrop,
    Previous,
    Next,
    Close,
    ToggleFullscreen,
    ToggleSlideshow,
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let frame = if ctx.fullscreen {
        Frame {
            height: Length::Fill,
            ..Frame::fill(0.0)
        }
        .contain()
    } else {
        Frame {
            width: Length::Fixed(sizing::LIGHTBOX_MAX_WIDTH),
            ..Frame::fill(sizing::LIGHTBOX_MAX_WIDTH * 0.6)
        }
        .contain()
    };

    let nav = |label: &'static str, message: Message| {
        button(text(label).size(typography::TITLE_MD))
            .width(Length::Fixed(sizing::LIGHTBOX_NAV))
            .height(Length::Fixed(sizing::LIGHTBOX_NAV))
            .style(styles::button::media_control)
            .on_press(message)
    };

    let stage = row![
        nav("‹", Message::Previous),
        container(media::view(ctx.item, frame)).center_x(Length::Fill),
        nav("›", Message::Next),
    ]
    .spacing(spacing::SM)
    .align_y(Alignment::Center);

    let current = (ctx.index + 1).to_string();
    let total = ctx.total.to_string();
    let position = i18n.tr_with_args(
        "lightbox-position",
        &[("current", current.as_str()), ("total", total.as_str())],
    );

    let toggle = |key: &str, active: bool, message: Message| {
        button(text(i18n.tr(key)).size(typography::BODY))
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button::chip(active))
            .on_press(message)
    };

    let toolbar = row![
        text(position).size(typography::BODY),
        Space::new().width(Length::Fill),
        toggle(
            if ctx.slideshow {
                "lightbox-slideshow-stop"
            } else {
                "lightbox-slideshow-start"
            },
            ctx.slideshow,
            Message::ToggleSlideshow,
        ),
        toggle("lightbox-fullscreen", ctx.fullscreen, Message::ToggleFullscreen),
        button(text(i18n.tr("lightbox-close")).size(typography::BODY))
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button::media_control)
            .on_press(Message::Close),
    ]
    .spacing(spacing::SM)
    .align_y(Alignment::Center);

    let mut content = column![toolbar, stage].spacing(spacing::SM);
    if !ctx.fullscreen {
        let caption = format!("{} · {}", ctx.item.caption, ctx.item.group.name);
        content = content.push(
            container(text(caption).size(typography::BODY))
                .padding([spacing::XXS, spacing::SM])
                .style(styles::container::caption_bar),
        );
    }

    let backdrop = mouse_area(
        container(Space::new().width(Length::Fill).height(Length::Fill))
            .width(Length::Fill)
            .height(Length::Fill)
            .style(styles::container::backdrop(Color {
                a: opacity::BACKDROP,
                ..palette::BLACK
            })),
    )
    .on_press(Message::Backdrop);

    Stack::new()
        .push(backdrop)
        .push(
            container(opaque(content.padding(spacing::MD)))
                .center(Length::Fill)
                .padding(if ctx.fullscreen { 0.0 } else { spacing::XL }),
        )
        .width(Length::Fill)
        .height(Length::Fill)
        .into()
}

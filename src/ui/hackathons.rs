// SPDX-License-Identifier: MPL-2.0
//! Hackathon list and the per-event gallery.

use crate::domain::media::GroupId;
use crate::domain::portfolio::Hackathon;
use crate::gallery::GalleryUnit;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{spacing, typography};
use crate::ui::gallery;
use crate::ui::styles;
use iced::widget::{button, column, container, row, scrollable, text, Column};
use iced::{Alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    /// Newest first.
    pub hackathons: Vec<&'a Hackathon>,
    pub selected: Option<(&'a Hackathon, &'a GalleryUnit)>,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Select(GroupId),
    Back,
    Gallery(gallery::Message),
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    match ctx.selected {
        Some((hackathon, unit)) => detail(ctx.i18n, hackathon, unit),
        None => list(ctx.i18n, &ctx.hackathons),
    }
}

fn list<'a>(i18n: &I18n, hackathons: &[&'a Hackathon]) -> Element<'a, Message> {
    if hackathons.is_empty() {
        return container(text(i18n.tr("hackathons-empty")).size(typography::TITLE_SM))
            .center(Length::Fill)
            .into();
    }

    let cards = hackathons.iter().copied().fold(
        Column::new().spacing(spacing::SM),
        |cards, hackathon| {
            let media_count = hackathon.photos.len() + hackathon.memes.len();
            let count = media_count.to_string();
            let mut heading = row![text(hackathon.group.name.as_str()).size(typography::TITLE_MD)]
                .spacing(spacing::SM)
                .align_y(Alignment::Center);
            if let Some(achievement) = &hackathon.group.achievement {
                heading = heading.push(
                    container(text(achievement.as_str()).size(typography::CAPTION))
                        .padding([spacing::XXS, spacing::XS])
                        .style(styles::container::achievement_badge),
                );
            }

            let body = column![
                heading,
                text(format!(
                    "{} · {}",
                    hackathon.group.location,
                    hackathon.group.date.format("%d %b %Y")
                ))
                .size(typography::CAPTION),
                text(hackathon.description.as_str()).size(typography::BODY),
                text(i18n.tr_with_args("hackathons-media-count", &[("count", count.as_str())]))
                    .size(typography::CAPTION),
            ]
            .spacing(spacing::XXS);

            cards.push(
                button(body)
                    .width(Length::Fill)
                    .padding(spacing::MD)
                    .style(styles::button::tile)
                    .on_press(Message::Select(hackathon.id().clone())),
            )
        },
    );

    scrollable(
        column![text(i18n.tr("hackathons-title")).size(typography::TITLE_LG), cards]
            .spacing(spacing::MD)
            .padding(spacing::LG),
    )
    .height(Length::Fill)
    .into()
}

fn detail<'a>(i18n: &'a I18n, hackathon: &'a Hackathon, unit: &'a GalleryUnit) -> Element<'a, Message> {
    let header = row![
        button(text(i18n.tr("hackathons-back")).size(typography::BODY))
            .style(styles::button::link)
            .on_press(Message::Back),
        text(hackathon.group.name.as_str()).size(typography::TITLE_LG),
    ]
    .spacing(spacing::MD)
    .align_y(Alignment::Center);

    column![
        container(header).padding([spacing::SM, spacing::LG]),
        gallery::view(gallery::ViewContext { i18n, unit }).map(Message::Gallery),
    ]
    .height(Length::Fill)
    .into()
}

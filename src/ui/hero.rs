// SPDX-License-Identifier: MPL-2.0
//! Home page hero: rotating logo and the two synchronized carousels.

use crate::carousel::LogoDisplay;
use crate::domain::media::MediaItem;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::media::{self, Frame};
use crate::ui::styles;
use iced::widget::{button, column, container, row, text, Column};
use iced::{Alignment, Element, Length};

/// Regular wordmarks the logo cycles through.
pub const LOGO_VARIANTS: [&str; 4] = ["hackfolio", "HACKFOLIO", "hack/folio", "<hackfolio/>"];

/// Wordmark shown when the rare variant comes up.
pub const RARE_LOGO: &str = "~ h4ckf0l10 ~";

/// One carousel slot as seen by the renderer.
#[derive(Debug, Clone, Copy)]
pub struct Slot<'a> {
    pub item: Option<&'a MediaItem>,
    pub opacity: f32,
}

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub logo: LogoDisplay,
    pub rare_view: bool,
    pub photo: Slot<'a>,
    pub meme: Slot<'a>,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    LogoClicked,
    NextPhoto,
    NextMeme,
}

#[must_use]
pub fn logo_text(display: LogoDisplay) -> &'static str {
    match display {
        LogoDisplay::Regular(index) => LOGO_VARIANTS
            .get(index)
            .copied()
            .unwrap_or(LOGO_VARIANTS[0]),
        LogoDisplay::Rare => RARE_LOGO,
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut logo = column![button(text(logo_text(ctx.logo)).size(typography::DISPLAY))
        .height(Length::Fixed(sizing::LOGO_HEIGHT))
        .style(styles::button::link)
        .on_press(Message::LogoClicked)]
    .align_x(Alignment::Center);
    if ctx.rare_view {
        logo = logo.push(text(ctx.i18n.tr("hero-rare-found")).size(typography::CAPTION));
    }

    let slots = row![
        slot(ctx.i18n, ctx.photo, "hero-photos", Message::NextPhoto),
        slot(ctx.i18n, ctx.meme, "hero-memes", Message::NextMeme),
    ]
    .spacing(spacing::MD);

    column![container(logo).center_x(Length::Fill), slots]
        .spacing(spacing::MD)
        .into()
}

fn slot<'a>(i18n: &I18n, slot: Slot<'a>, title_key: &str, next: Message) -> Element<'a, Message> {
    let header = row![
        text(i18n.tr(title_key)).size(typography::TITLE_SM).width(Length::Fill),
        button(text(i18n.tr("hero-next")).size(typography::BODY))
            .padding([spacing::XXS, spacing::SM])
            .style(styles::button::unselected)
            .on_press(next),
    ]
    .align_y(Alignment::Center);

    let body: Element<'a, Message> = match slot.item {
        Some(item) => Column::new()
            .push(media::view(
                item,
                Frame::fill(sizing::HERO_HEIGHT).opacity(slot.opacity),
            ))
            .push(
                container(text(item.caption.as_str()).size(typography::CAPTION))
                    .width(Length::Fill)
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::container::caption_bar),
            )
            .into(),
        None => container(text(i18n.tr("hero-empty")).size(typography::BODY))
            .center(Length::Fill)
            .height(Length::Fixed(sizing::HERO_HEIGHT))
            .style(styles::container::placeholder)
            .into(),
    };

    container(column![header, body].spacing(spacing::XS))
        .width(Length::FillPortion(1))
        .padding(spacing::SM)
        .style(styles::container::card)
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn logo_text_falls_back_for_unknown_variant() {
        assert_eq!(logo_text(LogoDisplay::Regular(1)), "HACKFOLIO");
        assert_eq!(logo_text(LogoDisplay::Regular(99)), LOGO_VARIANTS[0]);
        assert_eq!(logo_text(LogoDisplay::Rare), RARE_LOGO);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Project spotlight: a sliding panel over the team's projects.
//!
//! During a transition the exiting and entering panels share the row, with
//! widths and opacity driven by the controller's progress.

use crate::carousel::{Direction, Panels};
use crate::domain::media::MediaItem;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::media::{self, Frame};
use crate::ui::styles;
use iced::widget::{button, column, container, mouse_area, row, text, Column, Row, Space};
use iced::{Alignment, Element, Length};

/// Resolution of the width split during a slide.
const SPLIT_STEPS: f32 = 1000.0;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub projects: &'a [MediaItem],
    pub panels: Panels,
    /// Transition progress in `[0, 1]`, `None` when idle.
    pub progress: Option<f32>,
    pub current: usize,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Message {
    Previous,
    Next,
    GoTo(usize),
    Hover(bool),
}

/// Width portions of the exiting and entering panels.
#[must_use]
pub fn split(progress: f32) -> (u16, u16) {
    let entering = (progress.clamp(0.0, 1.0) * SPLIT_STEPS).round() as u16;
    let total = SPLIT_STEPS as u16;
    let entering = entering.clamp(1, total - 1);
    (total - entering, entering)
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;
    let title = text(i18n.tr("spotlight-title")).size(typography::TITLE_MD);

    let stage: Element<'a, Message> = match ctx.panels {
        Panels::Empty => container(text(i18n.tr("spotlight-empty")).size(typography::BODY))
            .center(Length::Fill)
            .height(Length::Fixed(sizing::SPOTLIGHT_HEIGHT))
            .style(styles::container::placeholder)
            .into(),
        Panels::Single(index) => match ctx.projects.get(index) {
            Some(item) => panel(item, 1.0, Length::Fill),
            None => Space::new().height(Length::Fixed(sizing::SPOTLIGHT_HEIGHT)).into(),
        },
        Panels::Pair {
            exiting,
            entering,
            direction,
        } => {
            let progress = ctx.progress.unwrap_or(0.0);
            let (out_part, in_part) = split(progress);
            let outgoing = ctx
                .projects
                .get(exiting)
                .map(|item| panel(item, 1.0 - progress, Length::FillPortion(out_part)));
            let incoming = ctx
                .projects
                .get(entering)
                .map(|item| panel(item, progress, Length::FillPortion(in_part)));

            let ordered = match direction {
                Direction::Forward => [outgoing, incoming],
                Direction::Backward => [incoming, outgoing],
            };
            ordered
                .into_iter()
                .flatten()
                .fold(Row::new().spacing(spacing::XXS), |row, panel| row.push(panel))
                .into()
        }
    };

    let dots = (0..ctx.projects.len()).fold(Row::new().spacing(spacing::XXS), |dots, index| {
        dots.push(
            button(text(" ").size(typography::CAPTION))
                .width(Length::Fixed(spacing::SM))
                .height(Length::Fixed(spacing::SM))
                .padding(0)
                .style(styles::button::chip(index == ctx.current))
                .on_press(Message::GoTo(index)),
        )
    });

    let controls = row![
        button(text("‹")).style(styles::button::unselected).on_press(Message::Previous),
        Space::new().width(Length::Fill),
        dots,
        Space::new().width(Length::Fill),
        button(text("›")).style(styles::button::unselected).on_press(Message::Next),
    ]
    .align_y(Alignment::Center);

    let content = column![title, stage, controls].spacing(spacing::SM);

    mouse_area(
        container(content)
            .width(Length::Fill)
            .padding(spacing::MD)
            .style(styles::container::card),
    )
    .on_enter(Message::Hover(true))
    .on_exit(Message::Hover(false))
    .into()
}

fn panel<'a>(item: &'a MediaItem, opacity: f32, width: Length) -> Element<'a, Message> {
    let mut body = Column::new().push(media::view(
        item,
        Frame::fill(sizing::SPOTLIGHT_HEIGHT).opacity(opacity),
    ));
    body = body.push(
        container(text(format!("{} · {}", item.caption, item.group.name)).size(typography::BODY))
            .width(Length::Fill)
            .padding([spacing::XXS, spacing::SM])
            .style(styles::container::caption_bar),
    );
    container(body).width(width).clip(true).into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn split_moves_width_to_entering_panel() {
        let (out_start, in_start) = split(0.0);
        let (out_end, in_end) = split(1.0);
        assert!(out_start > in_start);
        assert!(in_end > out_end);
        assert_eq!(out_start + in_start, SPLIT_STEPS as u16);
    }

    #[test]
    fn split_never_collapses_a_panel() {
        for step in 0..=10 {
            let (a, b) = split(step as f32 / 10.0);
            assert!(a >= 1 && b >= 1);
        }
    }
}

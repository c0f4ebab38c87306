// SPDX-License-Identifier: MPL-2.0
//! Gallery page: filter bar, mode switcher and the four renderers.
//!
//! Every renderer works from the same [`Layout`], so a click on any tile
//! reports the tile's view-relative index.

use crate::domain::media::{GroupId, GroupRef, MediaItem, SortOrder};
use crate::gallery::{GalleryMode, GalleryUnit, Layout, Section, SectionHeader, Tile};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::media::{self, Frame};
use crate::ui::styles;
use iced::widget::{button, column, container, pick_list, row, scrollable, text, Column, Row, Space};
use iced::{Alignment, Element, Length};
use std::fmt;

/// Contextual data needed to render a gallery.
pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub unit: &'a GalleryUnit,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    SetMode(GalleryMode),
    SetFilter(Option<GroupId>),
    ClearFilter,
    SetSort(SortOrder),
    OpenTile(usize),
}

/// Entry of the group picker.
#[derive(Debug, Clone, PartialEq)]
pub struct GroupOption {
    pub group: Option<GroupId>,
    label: String,
}

impl fmt::Display for GroupOption {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.label)
    }
}

/// Picker entries: "all" followed by every group, newest first.
#[must_use]
pub fn group_options(i18n: &I18n, groups: &[GroupRef]) -> Vec<GroupOption> {
    std::iter::once(GroupOption {
        group: None,
        label: i18n.tr("gallery-filter-all"),
    })
    .chain(groups.iter().map(|group| GroupOption {
        group: Some(group.id.clone()),
        label: format!("{} ({})", group.name, group.year()),
    }))
    .collect()
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let mut page = Column::new().spacing(spacing::MD).padding(spacing::LG);

    page = page.push(mode_switcher(ctx.i18n, ctx.unit.mode()));
    if ctx.unit.scope().is_none() {
        page = page.push(filter_bar(ctx.i18n, ctx.unit));
    }

    let body: Element<'a, Message> = if ctx.unit.shows_no_results() {
        empty_state(ctx.i18n, true)
    } else if ctx.unit.view().is_empty() {
        empty_state(ctx.i18n, false)
    } else {
        render_layout(ctx.unit.view(), ctx.unit.layout())
    };

    scrollable(page.push(body)).height(Length::Fill).into()
}

fn mode_switcher<'a>(i18n: &I18n, active: GalleryMode) -> Element<'a, Message> {
    GalleryMode::ALL
        .into_iter()
        .fold(Row::new().spacing(spacing::XS), |chips, mode| {
            chips.push(
                button(text(i18n.tr(mode.i18n_key())).size(typography::BODY))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::button::chip(mode == active))
                    .on_press(Message::SetMode(mode)),
            )
        })
        .into()
}

fn filter_bar<'a>(i18n: &I18n, unit: &GalleryUnit) -> Element<'a, Message> {
    let options = group_options(i18n, &unit.available_groups());
    let selected = options
        .iter()
        .find(|option| option.group == unit.filter().selected_group)
        .cloned();

    let picker = pick_list(options, selected, |option: GroupOption| {
        Message::SetFilter(option.group)
    })
    .width(Length::Fixed(sizing::PICKER_WIDTH));

    let sort_chips = SortOrder::ALL
        .into_iter()
        .fold(Row::new().spacing(spacing::XS), |chips, order| {
            chips.push(
                button(text(i18n.tr(order.i18n_key())).size(typography::BODY))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::button::chip(order == unit.sort()))
                    .on_press(Message::SetSort(order)),
            )
        });

    let mut bar = row![text(i18n.tr("gallery-filter-label")).size(typography::BODY), picker]
        .spacing(spacing::SM)
        .align_y(Alignment::Center);
    if unit.filter().is_active() {
        bar = bar.push(
            button(text(i18n.tr("gallery-clear-filter")).size(typography::BODY))
                .style(styles::button::link)
                .on_press(Message::ClearFilter),
        );
    }
    bar.push(Space::new().width(Length::Fill)).push(sort_chips).into()
}

fn empty_state<'a>(i18n: &I18n, filtered: bool) -> Element<'a, Message> {
    let mut content = column![text(i18n.tr(if filtered {
        "gallery-no-results"
    } else {
        "gallery-empty"
    }))
    .size(typography::TITLE_SM)]
    .spacing(spacing::SM)
    .align_x(Alignment::Center);

    if filtered {
        content = content.push(
            button(text(i18n.tr("gallery-clear-filter")))
                .style(styles::button::selected)
                .on_press(Message::ClearFilter),
        );
    }

    container(content)
        .width(Length::Fill)
        .padding(spacing::XXL)
        .center_x(Length::Fill)
        .into()
}

fn render_layout<'a>(view: &'a [MediaItem], layout: Layout) -> Element<'a, Message> {
    layout
        .sections
        .into_iter()
        .fold(Column::new().spacing(spacing::LG), |page, section| {
            page.push(render_section(view, section))
        })
        .into()
}

fn render_section<'a>(view: &'a [MediaItem], section: Section) -> Element<'a, Message> {
    let mut block = Column::new().spacing(spacing::SM);

    match section.header {
        SectionHeader::None => {}
        SectionHeader::Year(year) => {
            block = block.push(text(year.to_string()).size(typography::TITLE_MD));
        }
        SectionHeader::Group(group) => {
            let mut header = row![text(group.name.clone()).size(typography::TITLE_MD)]
                .spacing(spacing::SM)
                .align_y(Alignment::Center);
            header = header.push(
                text(format!("{} · {}", group.location, group.date.format("%b %Y")))
                    .size(typography::CAPTION),
            );
            if let Some(achievement) = group.achievement {
                header = header.push(
                    container(text(achievement).size(typography::CAPTION))
                        .padding([spacing::XXS, spacing::XS])
                        .style(styles::container::achievement_badge),
                );
            }
            block = block.push(header);
        }
    }

    let mut rows = Column::new().spacing(spacing::SM);
    let mut current = Row::new().spacing(spacing::SM);
    let mut used = 0;
    for tile in section.tiles {
        let span = if tile.wide { 2 } else { 1 };
        if used + span > sizing::TILES_PER_ROW && used > 0 {
            rows = rows.push(current);
            current = Row::new().spacing(spacing::SM);
            used = 0;
        }
        if let Some(item) = view.get(tile.index) {
            current = current.push(render_tile(item, tile));
        }
        used += span;
    }
    if used > 0 {
        rows = rows.push(current);
    }

    block.push(rows).into()
}

fn render_tile<'a>(item: &'a MediaItem, tile: Tile) -> Element<'a, Message> {
    let width = if tile.wide {
        sizing::TILE_WIDE
    } else {
        sizing::TILE
    };
    let frame = Frame::fixed(width, sizing::TILE).tilt(tile.tilt_deg);

    let mut content = Column::new().push(media::view(item, frame));
    if !item.caption.is_empty() {
        content = content.push(
            container(text(item.caption.as_str()).size(typography::CAPTION))
                .width(Length::Fixed(width))
                .padding(spacing::XXS),
        );
    }

    button(content)
        .padding(0)
        .style(styles::button::tile)
        .on_press(Message::OpenTile(tile.index))
        .into()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::Config;
    use chrono::NaiveDate;

    fn group(id: &str, year: i32) -> GroupRef {
        GroupRef {
            id: GroupId::new(id),
            name: id.to_uppercase(),
            date: NaiveDate::from_ymd_opt(year, 5, 1).expect("valid date"),
            location: String::new(),
            achievement: None,
        }
    }

    #[test]
    fn group_options_start_with_all() {
        let i18n = I18n::new(Some("en-US".to_string()), &Config::default());
        let options = group_options(&i18n, &[group("b", 2023), group("a", 2021)]);

        assert_eq!(options.len(), 3);
        assert_eq!(options[0].group, None);
        assert_eq!(options[1].group, Some(GroupId::new("b")));
        assert_eq!(options[2].to_string(), "A (2021)");
    }
}

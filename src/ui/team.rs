// SPDX-License-Identifier: MPL-2.0
//! Team page: headline numbers and the member roster.

use crate::domain::portfolio::{TeamMember, TeamStats};
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use iced::widget::{column, container, row, scrollable, text, Column, Row};
use iced::{Alignment, Element, Length};

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub stats: TeamStats,
    pub members: &'a [TeamMember],
}

/// Two-letter monogram drawn in place of a portrait.
#[must_use]
pub fn initials(name: &str) -> String {
    name.split_whitespace()
        .filter_map(|word| word.chars().next())
        .take(2)
        .flat_map(char::to_uppercase)
        .collect()
}

pub fn view<'a, M: 'a>(ctx: ViewContext<'a>) -> Element<'a, M> {
    let i18n = ctx.i18n;

    let stat = |value: u32, key: &str| -> Element<'a, M> {
        container(
            column![
                text(value.to_string()).size(typography::DISPLAY),
                text(i18n.tr(key)).size(typography::CAPTION),
            ]
            .align_x(Alignment::Center),
        )
        .width(Length::Fill)
        .padding(spacing::MD)
        .style(styles::container::card)
        .into()
    };

    let stats = row![
        stat(ctx.stats.hackathons_attended, "stats-hackathons"),
        stat(ctx.stats.wins, "stats-wins"),
        stat(ctx.stats.projects_built, "stats-projects"),
        stat(ctx.stats.team_size, "stats-team-size"),
    ]
    .spacing(spacing::SM);

    let roster: Element<'a, M> = if ctx.members.is_empty() {
        text(i18n.tr("team-empty")).size(typography::BODY).into()
    } else {
        ctx.members
            .iter()
            .fold(Row::new().spacing(spacing::SM), |roster, member| {
                roster.push(member_card(i18n, member))
            })
            .wrap()
            .into()
    };

    scrollable(
        Column::new()
            .spacing(spacing::LG)
            .padding(spacing::LG)
            .push(text(i18n.tr("team-title")).size(typography::TITLE_LG))
            .push(stats)
            .push(text(i18n.tr("team-members")).size(typography::TITLE_MD))
            .push(roster),
    )
    .height(Length::Fill)
    .into()
}

fn member_card<'a, M: 'a>(i18n: &I18n, member: &'a TeamMember) -> Element<'a, M> {
    let avatar = container(text(initials(&member.name)).size(typography::TITLE_MD))
        .center(Length::Fixed(sizing::AVATAR))
        .style(styles::container::achievement_badge);

    let mut details = column![
        text(member.name.as_str()).size(typography::BODY_LG),
        text(member.role.as_str()).size(typography::BODY),
    ]
    .spacing(spacing::XXS);
    if let Some(github) = &member.github {
        details = details.push(
            text(i18n.tr_with_args("team-github", &[("handle", github.as_str())]))
                .size(typography::CAPTION),
        );
    }

    container(
        row![avatar, details]
            .spacing(spacing::SM)
            .align_y(Alignment::Center),
    )
    .padding(spacing::SM)
    .width(Length::Fixed(sizing::TILE * 1.5))
    .style(styles::container::card)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn initials_take_first_two_words() {
        assert_eq!(initials("Ada Okafor"), "AO");
        assert_eq!(initials("mei"), "M");
        assert_eq!(initials("Jean Luc Picard"), "JL");
        assert_eq!(initials(""), "");
    }
}

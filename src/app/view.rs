// SPDX-License-Identifier: MPL-2.0
//! View rendering for the application.
//!
//! The navbar sits above the active screen. An open lightbox and the toast
//! stack are layered on top with a `Stack`.

use super::{App, Message, Screen};
use crate::application::port::MediaCollectionProvider;
use crate::gallery::GalleryUnit;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::spacing;
use crate::ui::{gallery, hackathons, hero, lightbox, navbar, notifications, spotlight, team};
use iced::widget::{column, container, scrollable, Column, Stack};
use iced::{Element, Length};

pub(super) fn view(app: &App) -> Element<'_, Message> {
    let i18n = &app.i18n;

    let navbar = navbar::view(navbar::ViewContext {
        i18n,
        screen: app.screen,
        theme_mode: app.theme_mode,
    })
    .map(Message::Navbar);

    let screen: Element<'_, Message> = match app.screen {
        Screen::Home => view_home(app),
        Screen::Gallery => match &app.gallery {
            Some(unit) => gallery::view(gallery::ViewContext { i18n, unit }).map(Message::Gallery),
            None => Column::new().into(),
        },
        Screen::Hackathons => hackathons::view(hackathons::ViewContext {
            i18n,
            hackathons: app.catalog.get_hackathons_by_date(),
            selected: app.hackathon.as_ref().and_then(|(id, unit)| {
                app.catalog
                    .get_hackathon_by_id(id)
                    .map(|hackathon| (hackathon, unit))
            }),
        })
        .map(Message::Hackathons),
        Screen::Team => team::view(team::ViewContext {
            i18n,
            stats: app.catalog.get_stats(),
            members: app.catalog.get_all_members(),
        }),
    };

    let mut layers = Stack::new()
        .push(
            column![navbar, container(screen).height(Length::Fill)]
                .width(Length::Fill)
                .height(Length::Fill),
        )
        .width(Length::Fill)
        .height(Length::Fill);

    if let Some(overlay) = app.active_gallery().and_then(|unit| view_lightbox(i18n, unit)) {
        layers = layers.push(overlay);
    }

    if !app.notifications.is_empty() {
        layers = layers
            .push(notifications::view_overlay(&app.notifications, i18n).map(Message::Notification));
    }

    layers.into()
}

fn view_home(app: &App) -> Element<'_, Message> {
    let Some(home) = app.home.as_ref() else {
        return Column::new().into();
    };
    let banner = hero::view(home.hero_view(&app.i18n, &app.scheduler)).map(Message::Hero);
    let projects = spotlight::view(home.spotlight_view(&app.i18n, &app.scheduler))
        .map(Message::Spotlight);

    scrollable(
        column![banner, projects]
            .spacing(spacing::LG)
            .padding(spacing::LG),
    )
    .height(Length::Fill)
    .into()
}

fn view_lightbox<'a>(i18n: &'a I18n, unit: &'a GalleryUnit) -> Option<Element<'a, Message>> {
    let lightbox = unit.lightbox();
    let item = unit.current_item()?;
    let index = lightbox.index()?;
    Some(
        lightbox::view(lightbox::ViewContext {
            i18n,
            item,
            index,
            total: unit.view().len(),
            fullscreen: lightbox.is_fullscreen(),
            slideshow: lightbox.is_slideshow_running(),
        })
        .map(Message::Lightbox),
    )
}

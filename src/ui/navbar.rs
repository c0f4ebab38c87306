// SPDX-License-Identifier: MPL-2.0
//! Navigation bar shared by every screen.
//!
//! Holds the screen tabs plus the theme, language and diagnostics controls.
//! Messages are translated into [`Event`]s for the application to act on.

use crate::app::Screen;
use crate::i18n::fluent::I18n;
use crate::ui::design_tokens::{sizing, spacing, typography};
use crate::ui::styles;
use crate::ui::theming::ThemeMode;
use iced::widget::{button, container, pick_list, text, Row, Space};
use iced::{Alignment, Element, Length};
use unic_langid::LanguageIdentifier;

pub struct ViewContext<'a> {
    pub i18n: &'a I18n,
    pub screen: Screen,
    pub theme_mode: ThemeMode,
}

#[derive(Debug, Clone, PartialEq)]
pub enum Message {
    Open(Screen),
    CycleTheme,
    SelectLanguage(LanguageIdentifier),
    ExportDiagnostics,
}

/// Events propagated to the parent application.
#[derive(Debug, Clone, PartialEq)]
pub enum Event {
    None,
    SwitchScreen(Screen),
    ThemeChanged(ThemeMode),
    LanguageChanged(LanguageIdentifier),
    ExportDiagnostics,
}

/// Process a navbar message and return the corresponding event.
pub fn update(message: Message, current: Screen, theme_mode: ThemeMode) -> Event {
    match message {
        Message::Open(screen) if screen == current => Event::None,
        Message::Open(screen) => Event::SwitchScreen(screen),
        Message::CycleTheme => Event::ThemeChanged(theme_mode.next()),
        Message::SelectLanguage(locale) => Event::LanguageChanged(locale),
        Message::ExportDiagnostics => Event::ExportDiagnostics,
    }
}

pub fn view<'a>(ctx: ViewContext<'a>) -> Element<'a, Message> {
    let i18n = ctx.i18n;

    let tabs = Screen::ALL
        .into_iter()
        .fold(Row::new().spacing(spacing::XS), |tabs, screen| {
            tabs.push(
                button(text(i18n.tr(screen.i18n_key())).size(typography::BODY))
                    .padding([spacing::XXS, spacing::SM])
                    .style(styles::button::chip(screen == ctx.screen))
                    .on_press(Message::Open(screen)),
            )
        });

    let theme = button(text(i18n.tr(ctx.theme_mode.i18n_key())).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::unselected)
        .on_press(Message::CycleTheme);

    let language = pick_list(
        i18n.available_locales.clone(),
        Some(i18n.current_locale().clone()),
        Message::SelectLanguage,
    )
    .text_size(typography::BODY);

    let export = button(text(i18n.tr("navbar-export-diagnostics")).size(typography::BODY))
        .padding([spacing::XXS, spacing::SM])
        .style(styles::button::link)
        .on_press(Message::ExportDiagnostics);

    container(
        Row::new()
            .spacing(spacing::SM)
            .align_y(Alignment::Center)
            .push(tabs)
            .push(Space::new().width(Length::Fill))
            .push(theme)
            .push(language)
            .push(export),
    )
    .height(Length::Fixed(sizing::NAVBAR_HEIGHT))
    .center_y(Length::Fixed(sizing::NAVBAR_HEIGHT))
    .padding([0.0, spacing::MD])
    .width(Length::Fill)
    .style(styles::container::card)
    .into()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reopening_current_screen_is_noop() {
        assert_eq!(
            update(Message::Open(Screen::Home), Screen::Home, ThemeMode::Light),
            Event::None
        );
        assert_eq!(
            update(Message::Open(Screen::Gallery), Screen::Home, ThemeMode::Light),
            Event::SwitchScreen(Screen::Gallery)
        );
    }

    #[test]
    fn cycle_theme_yields_next_mode() {
        assert_eq!(
            update(Message::CycleTheme, Screen::Home, ThemeMode::Light),
            Event::ThemeChanged(ThemeMode::Light.next())
        );
    }
}

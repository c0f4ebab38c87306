// SPDX-License-Identifier: MPL-2.0
//! Message handling for the application.
//!
//! User messages run to completion before any timer fires: timers only fire
//! from [`Message::Tick`], which moves the virtual clock to real time.

use super::{config, App, Message, Screen, GALLERY, HACKATHON_GALLERY};
use crate::diagnostics::{DiagnosticsCollector, EngineEvent, UserAction};
use crate::domain::media::GroupFilter;
use crate::gallery::GalleryUnit;
use crate::lightbox::{ClickTarget, LightboxKey};
use crate::timing::{Fired, TimerKey, UiScheduler};
use crate::ui::notifications::{self, Notification};
use crate::ui::{gallery, hackathons, hero, lightbox, navbar, spotlight};
use iced::Task;
use std::time::Instant;

pub(super) fn handle(app: &mut App, message: Message) -> Task<Message> {
    if let Message::Tick(now) = message {
        handle_tick(app, now);
        return Task::none();
    }

    app.sync_idle_clock();
    match message {
        Message::Navbar(message) => handle_navbar(app, message),
        Message::Hero(message) => handle_hero(app, message),
        Message::Spotlight(message) => handle_spotlight(app, message),
        Message::Gallery(message) => {
            let App {
                gallery,
                scheduler,
                diagnostics,
                notifications,
                ..
            } = app;
            if let Some(unit) = gallery.as_mut() {
                apply_gallery(unit, message, scheduler, diagnostics, notifications);
            }
        }
        Message::Hackathons(message) => handle_hackathons(app, message),
        Message::Lightbox(message) => handle_lightbox(app, message),
        Message::Notification(message) => app.notifications.handle_message(&message),
        Message::Key(key) => handle_key(app, key),
        Message::Tick(_) => {}
    }
    Task::none()
}

/// Fires every timer due by `now` and records what the widgets did.
fn handle_tick(app: &mut App, now: Instant) {
    app.notifications.tick(now);

    let until = now.saturating_duration_since(app.clock_origin);
    let App {
        scheduler,
        home,
        gallery,
        hackathon,
        diagnostics,
        ..
    } = app;

    let fired = scheduler.run_until(until, |scheduler, fired| {
        let event = match fired.key.widget {
            GALLERY => gallery.as_mut().and_then(|unit| slideshow_step(unit, fired)),
            HACKATHON_GALLERY => hackathon
                .as_mut()
                .and_then(|(_, unit)| slideshow_step(unit, fired)),
            _ => home
                .as_mut()
                .and_then(|home| home.handle_timer(fired, scheduler)),
        };
        if let Some(event) = event {
            diagnostics.log_engine(event);
        }
    });
    if fired > 0 {
        tracing::trace!(fired, pending = scheduler.len(), "timers fired");
    }
}

fn slideshow_step(unit: &mut GalleryUnit, fired: Fired<TimerKey>) -> Option<EngineEvent> {
    if !unit.handle_timer(fired) {
        return None;
    }
    unit.lightbox()
        .index()
        .map(|index| EngineEvent::SlideshowAdvanced { index })
}

fn handle_navbar(app: &mut App, message: navbar::Message) {
    match navbar::update(message, app.screen, app.theme_mode) {
        navbar::Event::None => {}
        navbar::Event::SwitchScreen(screen) => app.switch_screen(screen),
        navbar::Event::ThemeChanged(mode) => {
            app.theme_mode = mode;
            app.config.general.theme_mode = mode;
            app.diagnostics.log_action(UserAction::ChangeTheme);
            persist_preferences(app);
        }
        navbar::Event::LanguageChanged(locale) => {
            let tag = locale.to_string();
            app.i18n.set_locale(locale);
            app.config.general.language = Some(tag.clone());
            app.diagnostics
                .log_action(UserAction::ChangeLanguage { locale: tag });
            persist_preferences(app);
        }
        navbar::Event::ExportDiagnostics => match app.diagnostics.export_to_data_dir() {
            Ok(path) => {
                tracing::info!(path = %path.display(), "diagnostics exported");
                app.notifications.push(
                    Notification::info("notification-diagnostics-exported")
                        .with_arg("path", path.display().to_string()),
                );
            }
            Err(err) => {
                tracing::warn!(%err, "diagnostics export failed");
                app.notifications
                    .push(Notification::error("notification-diagnostics-export-error"));
            }
        },
    }
}

fn persist_preferences(app: &mut App) {
    if let Err(err) = config::save(&app.config) {
        tracing::warn!(%err, "failed to save preferences");
        app.diagnostics.log_warning(err.to_string());
        app.notifications
            .push(Notification::warning("notification-config-save-error"));
    }
}

fn handle_hero(app: &mut App, message: hero::Message) {
    let Some(home) = app.home.as_mut() else {
        return;
    };
    if message == hero::Message::LogoClicked {
        app.diagnostics.log_action(UserAction::LogoClicked);
    }
    if let Some(event) = home.handle_hero(message, &mut app.scheduler) {
        app.diagnostics.log_engine(event);
    }
}

fn handle_spotlight(app: &mut App, message: spotlight::Message) {
    let Some(home) = app.home.as_mut() else {
        return;
    };
    let action = match message {
        spotlight::Message::Previous => Some(UserAction::SpotlightPrevious),
        spotlight::Message::Next => Some(UserAction::SpotlightNext),
        spotlight::Message::GoTo(index) => Some(UserAction::SpotlightGoTo { index }),
        spotlight::Message::Hover(_) => None,
    };
    home.handle_spotlight(message, &mut app.scheduler);
    if let Some(action) = action {
        app.diagnostics.log_action(action);
    }
}

fn handle_hackathons(app: &mut App, message: hackathons::Message) {
    match message {
        hackathons::Message::Select(id) => app.open_hackathon(id),
        hackathons::Message::Back => app.close_hackathon(),
        hackathons::Message::Gallery(message) => {
            let App {
                hackathon,
                scheduler,
                diagnostics,
                notifications,
                ..
            } = app;
            if let Some((_, unit)) = hackathon.as_mut() {
                apply_gallery(unit, message, scheduler, diagnostics, notifications);
            }
        }
    }
}

/// Applies a gallery message to `unit`.
fn apply_gallery(
    unit: &mut GalleryUnit,
    message: gallery::Message,
    scheduler: &mut UiScheduler,
    diagnostics: &mut DiagnosticsCollector,
    notifications: &mut notifications::Manager,
) {
    let recomputed = match message {
        gallery::Message::SetMode(mode) => {
            unit.set_mode(mode);
            diagnostics.log_action(UserAction::SetGalleryMode { mode });
            false
        }
        gallery::Message::SetFilter(group) => {
            diagnostics.log_action(UserAction::SetGroupFilter {
                group: group.as_ref().map(|id| id.as_str().to_string()),
            });
            let filter = group.map_or_else(GroupFilter::all, GroupFilter::scoped);
            unit.set_filter(filter, scheduler)
        }
        gallery::Message::ClearFilter => {
            diagnostics.log_action(UserAction::SetGroupFilter { group: None });
            unit.clear_filter(scheduler)
        }
        gallery::Message::SetSort(order) => {
            diagnostics.log_action(UserAction::SetSortOrder { order });
            unit.set_sort(order, scheduler)
        }
        gallery::Message::OpenTile(index) => {
            match unit.open(index) {
                Ok(()) => diagnostics.log_action(UserAction::OpenLightbox { index }),
                Err(err) => {
                    tracing::warn!(%err, "tile click rejected");
                    notifications.push(Notification::warning(err.i18n_key()));
                }
            }
            false
        }
    };
    if recomputed {
        diagnostics.log_engine(EngineEvent::ViewRecomputed {
            items: unit.view().len(),
        });
    }
}

fn with_active_gallery(
    app: &mut App,
    f: impl FnOnce(&mut GalleryUnit, &mut UiScheduler, &mut DiagnosticsCollector, &mut notifications::Manager),
) {
    let App {
        screen,
        gallery,
        hackathon,
        scheduler,
        diagnostics,
        notifications,
        ..
    } = app;
    let unit = match screen {
        Screen::Gallery => gallery.as_mut(),
        Screen::Hackathons => hackathon.as_mut().map(|(_, unit)| unit),
        Screen::Home | Screen::Team => None,
    };
    if let Some(unit) = unit {
        f(unit, scheduler, diagnostics, notifications);
    }
}

fn handle_lightbox(app: &mut App, message: lightbox::Message) {
    with_active_gallery(app, |unit, scheduler, diagnostics, notifications| {
        let lightbox = unit.lightbox_mut();
        let action = match message {
            lightbox::Message::Backdrop => {
                lightbox.click(ClickTarget::Backdrop, scheduler);
                UserAction::CloseLightbox
            }
            lightbox::Message::Close => {
                lightbox.close(scheduler);
                UserAction::CloseLightbox
            }
            lightbox::Message::Previous => {
                lightbox.previous();
                UserAction::LightboxPrevious
            }
            lightbox::Message::Next => {
                lightbox.next();
                UserAction::LightboxNext
            }
            lightbox::Message::ToggleFullscreen => {
                lightbox.toggle_fullscreen();
                UserAction::ToggleFullscreen
            }
            lightbox::Message::ToggleSlideshow => {
                if let Err(err) = lightbox.toggle_slideshow(scheduler) {
                    notifications.push(Notification::warning(err.i18n_key()));
                    return;
                }
                UserAction::ToggleSlideshow
            }
        };
        diagnostics.log_action(action);
    });
}

/// Keys go to an open lightbox first; otherwise arrows drive the spotlight.
fn handle_key(app: &mut App, key: LightboxKey) {
    let mut consumed = false;
    with_active_gallery(app, |unit, scheduler, diagnostics, _| {
        consumed = unit.lightbox_mut().handle_key(key, scheduler);
        if consumed {
            diagnostics.log_action(match key {
                LightboxKey::Left => UserAction::LightboxPrevious,
                LightboxKey::Right => UserAction::LightboxNext,
                LightboxKey::Escape => UserAction::CloseLightbox,
                LightboxKey::Fullscreen => UserAction::ToggleFullscreen,
                LightboxKey::Slideshow => UserAction::ToggleSlideshow,
            });
        }
    });
    if consumed || app.screen != Screen::Home {
        return;
    }
    match key {
        LightboxKey::Left => handle_spotlight(app, spotlight::Message::Previous),
        LightboxKey::Right => handle_spotlight(app, spotlight::Message::Next),
        LightboxKey::Escape | LightboxKey::Fullscreen | LightboxKey::Slideshow => {}
    }
}

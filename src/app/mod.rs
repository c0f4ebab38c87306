// SPDX-License-Identifier: MPL-2.0
//! Application root state and orchestration between the screens.
//!
//! The `App` owns the single scheduler and event bus shared by every mounted
//! widget. Iced drives it through two kinds of input: user messages, which
//! are processed to completion, and a frame tick, which moves the virtual
//! clock and fires whatever timers fell due in the meantime.

pub mod config;
mod home;
mod message;
pub mod paths;
mod screen;
mod subscription;
mod update;
mod view;

pub use home::{HomeWidgets, HERO_MEMES, HERO_PHOTOS, LOGO, SPOTLIGHT};
pub use message::{Flags, Message};
pub use screen::Screen;

use crate::application::port::MediaCollectionProvider;
use crate::catalog::Catalog;
use crate::diagnostics::DiagnosticsCollector;
use crate::domain::media::GroupId;
use crate::events::EventBus;
use crate::gallery::{GalleryMode, GalleryUnit};
use crate::i18n::fluent::I18n;
use crate::timing::{UiScheduler, WidgetId};
use crate::ui::notifications::{self, Notification};
use crate::ui::theming::{AppTheme, ThemeMode};
use config::Config;
use iced::{window, Element, Subscription, Task, Theme};
use std::fmt;
use std::time::Instant;

pub const GALLERY: WidgetId = WidgetId(5);
pub const HACKATHON_GALLERY: WidgetId = WidgetId(6);

pub const WINDOW_DEFAULT_HEIGHT: u32 = 760;
pub const WINDOW_DEFAULT_WIDTH: u32 = 1100;
pub const MIN_WINDOW_HEIGHT: u32 = 560;
pub const MIN_WINDOW_WIDTH: u32 = 720;

/// Root Iced application state.
pub struct App {
    pub i18n: I18n,
    config: Config,
    catalog: Catalog,
    screen: Screen,
    theme_mode: ThemeMode,
    gallery_mode: GalleryMode,
    scheduler: UiScheduler,
    bus: EventBus<UiScheduler>,
    /// Real instant matching virtual time zero.
    clock_origin: Instant,
    home: Option<HomeWidgets>,
    gallery: Option<GalleryUnit>,
    hackathon: Option<(GroupId, GalleryUnit)>,
    diagnostics: DiagnosticsCollector,
    notifications: notifications::Manager,
}

impl fmt::Debug for App {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("App")
            .field("screen", &self.screen)
            .field("pending_timers", &self.scheduler.len())
            .field("hackathon", &self.hackathon.as_ref().map(|(id, _)| id))
            .finish_non_exhaustive()
    }
}

/// Builds the window settings.
pub fn window_settings() -> window::Settings {
    window::Settings {
        size: iced::Size::new(WINDOW_DEFAULT_WIDTH as f32, WINDOW_DEFAULT_HEIGHT as f32),
        min_size: Some(iced::Size::new(
            MIN_WINDOW_WIDTH as f32,
            MIN_WINDOW_HEIGHT as f32,
        )),
        ..window::Settings::default()
    }
}

/// Entry point used by `main.rs` to launch the Iced application loop.
pub fn run(flags: Flags) -> iced::Result {
    use std::cell::RefCell;

    paths::init_cli_overrides(flags.config_dir.clone(), flags.data_dir.clone());

    // iced requires an `Fn` boot closure; the flags are consumed once.
    let boot_state = RefCell::new(Some(flags));
    let boot = move || {
        let flags = boot_state.borrow_mut().take().unwrap_or_default();
        App::new(flags)
    };

    iced::application(boot, App::update, App::view)
        .title(App::title)
        .theme(App::theme)
        .window(window_settings())
        .subscription(App::subscription)
        .run()
}

impl App {
    /// Loads config, i18n and the catalog, then mounts the home screen.
    fn new(flags: Flags) -> (Self, Task<Message>) {
        let (config, config_warning) = config::load();
        let i18n = I18n::new(flags.lang.clone(), &config);
        let mut notifications = notifications::Manager::new();
        let mut diagnostics = DiagnosticsCollector::new(config.diagnostics.capacity());

        if let Some(key) = config_warning {
            diagnostics.log_warning(key.clone());
            notifications.push(Notification::warning(key));
        }

        let catalog = match flags.catalog.as_deref() {
            Some(path) => Catalog::load_from_path(path),
            None => Catalog::embedded(),
        }
        .unwrap_or_else(|err| {
            tracing::warn!(%err, "catalog could not be loaded, starting empty");
            diagnostics.log_warning(err.to_string());
            notifications.push(Notification::error("notification-catalog-load-error"));
            Catalog::default()
        });

        let gallery_mode = flags.mode.unwrap_or_else(|| config.gallery.mode());

        let mut app = Self {
            i18n,
            theme_mode: config.general.theme_mode,
            gallery_mode,
            catalog,
            config,
            screen: Screen::Home,
            scheduler: UiScheduler::new(),
            bus: EventBus::new(),
            clock_origin: Instant::now(),
            home: None,
            gallery: None,
            hackathon: None,
            diagnostics,
            notifications,
        };
        app.mount(Screen::Home);
        (app, Task::none())
    }

    fn title(&self) -> String {
        self.i18n.tr("window-title")
    }

    fn theme(&self) -> Theme {
        AppTheme::new(self.theme_mode).iced_theme()
    }

    fn subscription(&self) -> Subscription<Message> {
        subscription::create(
            !self.scheduler.is_empty(),
            !self.notifications.is_empty() && self.notifications.has_pending_expiry(),
        )
    }

    fn update(&mut self, message: Message) -> Task<Message> {
        update::handle(self, message)
    }

    fn view(&self) -> Element<'_, Message> {
        view::view(self)
    }

    /// Mounts the widgets belonging to `screen`.
    fn mount(&mut self, screen: Screen) {
        match screen {
            Screen::Home => {
                self.home = Some(HomeWidgets::mount(
                    &self.catalog,
                    &self.config,
                    &self.bus,
                    &mut self.scheduler,
                ));
            }
            Screen::Gallery => {
                self.gallery = Some(
                    GalleryUnit::new(
                        GALLERY,
                        self.catalog.gallery_collection(),
                        self.gallery_mode,
                        None,
                    )
                    .with_sort(self.config.gallery.sort())
                    .with_slideshow_interval(self.config.lightbox.slideshow_interval()),
                );
            }
            Screen::Hackathons | Screen::Team => {}
        }
        self.screen = screen;
    }

    /// Tears down the widgets of the current screen, cancelling their timers.
    fn unmount_current(&mut self) {
        match self.screen {
            Screen::Home => {
                if let Some(mut home) = self.home.take() {
                    home.unmount(&mut self.scheduler);
                }
            }
            Screen::Gallery => {
                if let Some(mut unit) = self.gallery.take() {
                    self.gallery_mode = unit.mode();
                    unit.unmount(&mut self.scheduler);
                }
            }
            Screen::Hackathons => self.close_hackathon(),
            Screen::Team => {}
        }
    }

    fn switch_screen(&mut self, screen: Screen) {
        if screen == self.screen {
            return;
        }
        self.sync_idle_clock();
        self.unmount_current();
        self.mount(screen);
        tracing::debug!(?screen, timers = self.scheduler.len(), "screen switched");
    }

    fn open_hackathon(&mut self, id: GroupId) {
        self.close_hackathon();
        let Some(hackathon) = self.catalog.get_hackathon_by_id(&id) else {
            tracing::warn!(%id, "unknown hackathon selected");
            return;
        };
        let collection = hackathon.gallery_items().cloned().collect();
        let unit = GalleryUnit::new(HACKATHON_GALLERY, collection, self.gallery_mode, Some(id.clone()))
            .with_sort(self.config.gallery.sort())
            .with_slideshow_interval(self.config.lightbox.slideshow_interval());
        self.hackathon = Some((id, unit));
    }

    fn close_hackathon(&mut self) {
        if let Some((_, mut unit)) = self.hackathon.take() {
            unit.unmount(&mut self.scheduler);
        }
    }

    /// Gallery shown on the current screen, if any.
    fn active_gallery(&self) -> Option<&GalleryUnit> {
        match self.screen {
            Screen::Gallery => self.gallery.as_ref(),
            Screen::Hackathons => self.hackathon.as_ref().map(|(_, unit)| unit),
            Screen::Home | Screen::Team => None,
        }
    }

    /// Moves an idle virtual clock up to real time.
    ///
    /// While nothing is scheduled the tick subscription is off and the clock
    /// stands still; new timers must be armed relative to the present.
    fn sync_idle_clock(&mut self) {
        if self.scheduler.is_empty() {
            let now = self.clock_origin.elapsed();
            self.scheduler.run_until(now, |_, _| {});
        }
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Widgets mounted while the home screen is shown.
//!
//! Mounting starts every timer; unmounting cancels them and leaves the bus,
//! so switching screens never leaves a rotation running in the background.

use super::config::Config;
use crate::application::port::MediaCollectionProvider;
use crate::carousel::{
    AdvanceOutcome, CarouselEngine, RotatingLogo, SyncedCarousel, TransitionController,
};
use crate::catalog::Catalog;
use crate::diagnostics::EngineEvent;
use crate::domain::media::MediaItem;
use crate::events::{EventBus, SyncChannel};
use crate::i18n::fluent::I18n;
use crate::timing::{Fired, TimerKey, UiScheduler, WidgetId};
use crate::ui::{hero, spotlight};
use rand::rngs::StdRng;
use rand::SeedableRng;

pub const HERO_PHOTOS: WidgetId = WidgetId(1);
pub const HERO_MEMES: WidgetId = WidgetId(2);
pub const LOGO: WidgetId = WidgetId(3);
pub const SPOTLIGHT: WidgetId = WidgetId(4);

#[derive(Debug)]
pub struct HomeWidgets {
    photos: SyncedCarousel,
    memes: SyncedCarousel,
    logo: RotatingLogo,
    spotlight: TransitionController,
    photo_items: Vec<MediaItem>,
    meme_items: Vec<MediaItem>,
    projects: Vec<MediaItem>,
}

impl HomeWidgets {
    pub fn mount(
        catalog: &Catalog,
        config: &Config,
        bus: &EventBus<UiScheduler>,
        scheduler: &mut UiScheduler,
    ) -> Self {
        let fade = config.carousel.fade();
        let photo_items = catalog.get_all_photos().to_vec();
        let meme_items = catalog.get_all_memes().to_vec();
        let projects = catalog.get_all_projects().to_vec();

        let photos = SyncedCarousel::mount(
            CarouselEngine::new(HERO_PHOTOS, photo_items.len(), fade, StdRng::from_entropy()),
            bus,
            SyncChannel::HERO,
        );
        let memes = SyncedCarousel::mount(
            CarouselEngine::new(HERO_MEMES, meme_items.len(), fade, StdRng::from_entropy()),
            bus,
            SyncChannel::HERO,
        );
        let interval = config.carousel.rotation_interval();
        photos.start(interval, scheduler);
        memes.start(interval, scheduler);

        let mut logo = RotatingLogo::new(
            LOGO,
            hero::LOGO_VARIANTS.len(),
            fade,
            config.carousel.rare_chance(),
            StdRng::from_entropy(),
        )
        .with_view_window(config.carousel.rare_view_window());
        logo.start(config.carousel.logo_rotation_interval(), scheduler);

        let mut spotlight =
            TransitionController::new(SPOTLIGHT, projects.len(), config.transition.duration());
        spotlight.enable_auto_rotate(config.transition.auto_rotate_interval(), scheduler);

        tracing::debug!(
            photos = photo_items.len(),
            memes = meme_items.len(),
            projects = projects.len(),
            "home widgets mounted"
        );

        Self {
            photos,
            memes,
            logo,
            spotlight,
            photo_items,
            meme_items,
            projects,
        }
    }

    pub fn unmount(&mut self, scheduler: &mut UiScheduler) {
        self.photos.unmount(scheduler);
        self.memes.unmount(scheduler);
        self.logo.unmount(scheduler);
        self.spotlight.unmount(scheduler);
        tracing::debug!("home widgets unmounted");
    }

    /// Routes a fired task to its owner. Returns what happened, if anything
    /// worth recording.
    pub fn handle_timer(
        &mut self,
        fired: Fired<TimerKey>,
        scheduler: &mut UiScheduler,
    ) -> Option<EngineEvent> {
        let widget = fired.key.widget;
        match widget {
            HERO_PHOTOS | HERO_MEMES => {
                let carousel = if widget == HERO_PHOTOS {
                    &self.photos
                } else {
                    &self.memes
                };
                carousel
                    .handle_timer(fired, scheduler)
                    .map(|index| EngineEvent::Rotated {
                        widget: widget.0,
                        index,
                    })
            }
            LOGO => {
                let was_rare_view = self.logo.state().rare_view_mode_active;
                if !self.logo.handle_timer(fired, scheduler) {
                    return None;
                }
                let state = self.logo.state();
                if was_rare_view && !state.rare_view_mode_active {
                    Some(EngineEvent::RareViewExpired { widget: LOGO.0 })
                } else if state.show_rare_variant {
                    Some(EngineEvent::RareVariantShown { widget: LOGO.0 })
                } else {
                    Some(EngineEvent::Rotated {
                        widget: LOGO.0,
                        index: state.current_variant_index,
                    })
                }
            }
            SPOTLIGHT => self
                .spotlight
                .handle_timer(fired, scheduler)
                .then(|| EngineEvent::Rotated {
                    widget: SPOTLIGHT.0,
                    index: self.spotlight.current(),
                }),
            _ => None,
        }
    }

    pub fn handle_hero(
        &mut self,
        message: hero::Message,
        scheduler: &mut UiScheduler,
    ) -> Option<EngineEvent> {
        let (carousel, widget) = match message {
            hero::Message::LogoClicked => {
                let click = self.logo.click(scheduler);
                tracing::debug!(?click, "logo clicked");
                return None;
            }
            hero::Message::NextPhoto => (&self.photos, HERO_PHOTOS),
            hero::Message::NextMeme => (&self.memes, HERO_MEMES),
        };
        match carousel.advance(scheduler) {
            AdvanceOutcome::Dropped => Some(EngineEvent::AdvanceDropped { widget: widget.0 }),
            AdvanceOutcome::Started | AdvanceOutcome::Static => None,
        }
    }

    /// Applies a spotlight message. Hover pauses auto-rotation.
    pub fn handle_spotlight(&mut self, message: spotlight::Message, scheduler: &mut UiScheduler) {
        let outcome = match message {
            spotlight::Message::Previous => self.spotlight.previous(scheduler),
            spotlight::Message::Next => self.spotlight.next(scheduler),
            spotlight::Message::GoTo(index) => self.spotlight.go_to(index, scheduler),
            spotlight::Message::Hover(hovered) => {
                self.spotlight.set_interacting(hovered, scheduler);
                return;
            }
        };
        tracing::trace!(?outcome, "spotlight navigation");
    }

    #[must_use]
    pub fn hero_view<'a>(
        &'a self,
        i18n: &'a I18n,
        scheduler: &UiScheduler,
    ) -> hero::ViewContext<'a> {
        let slot = |carousel: &SyncedCarousel, items: &'a [MediaItem]| {
            let engine = carousel.engine();
            hero::Slot {
                item: engine.active_index().and_then(|index| items.get(index)),
                opacity: engine.opacity(scheduler),
            }
        };
        let state = self.logo.state();
        hero::ViewContext {
            i18n,
            logo: self.logo.displayed(),
            rare_view: state.rare_view_mode_active,
            photo: slot(&self.photos, &self.photo_items),
            meme: slot(&self.memes, &self.meme_items),
        }
    }

    #[must_use]
    pub fn spotlight_view<'a>(
        &'a self,
        i18n: &'a I18n,
        scheduler: &UiScheduler,
    ) -> spotlight::ViewContext<'a> {
        spotlight::ViewContext {
            i18n,
            projects: &self.projects,
            panels: self.spotlight.panels(),
            progress: self.spotlight.progress(scheduler),
            current: self.spotlight.current(),
        }
    }
}

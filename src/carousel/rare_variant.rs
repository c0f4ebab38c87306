// SPDX-License-Identifier: MPL-2.0
//! Rotating team logo with a rare easter-egg variant.
//!
//! The logo cycles through its regular variants like any carousel. On every
//! swap there is a small chance the rare variant shows instead. Clicking the
//! logo while the rare variant is visible freezes it for a short viewing
//! window; the window ends on a second click or when it expires, and a
//! started rotation resumes.

use super::engine::{AdvanceOutcome, CarouselEngine};
use crate::domain::ui::{FadeDuration, RareChance, RotationInterval};
use crate::timing::{Fired, TimerId, TimerKey, TimerKind, UiScheduler, WidgetId};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};
use std::time::Duration;

/// Default length of the rare viewing window.
pub const DEFAULT_RARE_VIEW_WINDOW: Duration = Duration::from_secs(6);

/// Observable state of the logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct RareVariantState {
    pub current_variant_index: usize,
    pub show_rare_variant: bool,
    pub rare_view_mode_active: bool,
}

/// What the logo slot renders.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoDisplay {
    Regular(usize),
    Rare,
}

/// Effect of a click on the logo.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LogoClick {
    EnteredRareView,
    ExitedRareView,
    Ignored,
}

#[derive(Debug, Clone)]
pub struct RotatingLogo {
    engine: CarouselEngine,
    state: RareVariantState,
    chance: RareChance,
    /// Interval to resume at once the rare view ends; `None` until started.
    resume: Option<RotationInterval>,
    view_window: Duration,
    expiry: Option<TimerId>,
    rng: StdRng,
}

impl RotatingLogo {
    /// Creates a logo over `variants` regular variants.
    #[must_use]
    pub fn new(
        id: WidgetId,
        variants: usize,
        fade: FadeDuration,
        chance: RareChance,
        mut rng: StdRng,
    ) -> Self {
        let engine_rng = StdRng::seed_from_u64(rng.gen());
        Self {
            engine: CarouselEngine::new(id, variants, fade, engine_rng),
            state: RareVariantState::default(),
            chance,
            resume: None,
            view_window: DEFAULT_RARE_VIEW_WINDOW,
            expiry: None,
            rng,
        }
    }

    /// Overrides the rare viewing window.
    #[must_use]
    pub fn with_view_window(mut self, window: Duration) -> Self {
        self.view_window = window;
        self
    }

    #[must_use]
    pub fn id(&self) -> WidgetId {
        self.engine.id()
    }

    #[must_use]
    pub fn state(&self) -> RareVariantState {
        self.state
    }

    #[must_use]
    pub fn engine(&self) -> &CarouselEngine {
        &self.engine
    }

    #[must_use]
    pub fn displayed(&self) -> LogoDisplay {
        if self.state.show_rare_variant {
            LogoDisplay::Rare
        } else {
            LogoDisplay::Regular(self.state.current_variant_index)
        }
    }

    /// Starts rotating. Deferred while the rare view is open.
    pub fn start(&mut self, interval: RotationInterval, scheduler: &mut UiScheduler) {
        self.resume = Some(interval);
        if !self.state.rare_view_mode_active {
            self.engine.start(interval, scheduler);
        }
    }

    pub fn advance(&mut self, scheduler: &mut UiScheduler) -> AdvanceOutcome {
        if self.state.rare_view_mode_active {
            return AdvanceOutcome::Dropped;
        }
        self.engine.advance(scheduler)
    }

    /// Handles a fired task. Returns `true` if the displayed logo changed.
    pub fn handle_timer(&mut self, fired: Fired<TimerKey>, scheduler: &mut UiScheduler) -> bool {
        if fired.key.widget != self.id() {
            return false;
        }
        if fired.key.kind == TimerKind::RareViewExpiry {
            if self.expiry == Some(fired.id) {
                self.expiry = None;
                self.exit_rare_view(scheduler);
                return true;
            }
            return false;
        }

        let Some(index) = self.engine.handle_timer(fired, scheduler) else {
            return false;
        };
        self.state.current_variant_index = index;
        self.state.show_rare_variant = self.rng.gen_bool(self.chance.value());
        if self.state.show_rare_variant {
            tracing::info!(widget = %self.id(), "rare logo variant revealed");
        }
        true
    }

    /// Handles a click on the logo.
    pub fn click(&mut self, scheduler: &mut UiScheduler) -> LogoClick {
        if self.state.rare_view_mode_active {
            self.exit_rare_view(scheduler);
            return LogoClick::ExitedRareView;
        }
        if !self.state.show_rare_variant {
            return LogoClick::Ignored;
        }

        self.state.rare_view_mode_active = true;
        self.engine.stop(scheduler);
        self.expiry = Some(scheduler.schedule_once(
            TimerKey::new(self.id(), TimerKind::RareViewExpiry),
            self.view_window,
        ));
        LogoClick::EnteredRareView
    }

    fn exit_rare_view(&mut self, scheduler: &mut UiScheduler) {
        if let Some(timer) = self.expiry.take() {
            scheduler.cancel(timer);
        }
        self.state.rare_view_mode_active = false;
        self.state.show_rare_variant = false;
        if let Some(interval) = self.resume {
            self.engine.start(interval, scheduler);
        }
    }

    pub fn unmount(&mut self, scheduler: &mut UiScheduler) {
        if let Some(timer) = self.expiry.take() {
            scheduler.cancel(timer);
        }
        self.resume = None;
        self.engine.unmount(scheduler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::pending_for;

    const ID: WidgetId = WidgetId(9);

    fn logo(chance: f64) -> RotatingLogo {
        RotatingLogo::new(
            ID,
            3,
            FadeDuration::from_millis(400),
            RareChance::new(chance),
            StdRng::seed_from_u64(5),
        )
    }

    fn run(logo: &mut RotatingLogo, scheduler: &mut UiScheduler, millis: u64) {
        scheduler.advance_by(Duration::from_millis(millis), |scheduler, fired| {
            logo.handle_timer(fired, scheduler);
        });
    }

    #[test]
    fn never_rare_with_zero_chance() {
        let mut scheduler = UiScheduler::new();
        let mut logo = logo(0.0);
        logo.start(RotationInterval::from_millis(1_000), &mut scheduler);
        run(&mut logo, &mut scheduler, 30_000);
        assert!(!logo.state().show_rare_variant);
        assert!(matches!(logo.displayed(), LogoDisplay::Regular(_)));
        assert!(logo.engine().rotation_count() > 0);
    }

    #[test]
    fn always_rare_with_full_chance() {
        let mut scheduler = UiScheduler::new();
        let mut logo = logo(1.0);
        logo.advance(&mut scheduler);
        run(&mut logo, &mut scheduler, 400);
        assert_eq!(logo.displayed(), LogoDisplay::Rare);
    }

    #[test]
    fn click_on_regular_variant_is_ignored() {
        let mut scheduler = UiScheduler::new();
        let mut logo = logo(0.0);
        assert_eq!(logo.click(&mut scheduler), LogoClick::Ignored);
    }

    #[test]
    fn rare_view_freezes_rotation_until_expiry() {
        let mut scheduler = UiScheduler::new();
        let mut logo = logo(1.0).with_view_window(Duration::from_secs(5));
        logo.start(RotationInterval::from_millis(1_000), &mut scheduler);
        run(&mut logo, &mut scheduler, 1_400);
        assert!(logo.state().show_rare_variant);

        assert_eq!(logo.click(&mut scheduler), LogoClick::EnteredRareView);
        assert!(logo.state().rare_view_mode_active);
        assert!(!logo.engine().is_rotating());
        let swaps = logo.engine().rotation_count();

        run(&mut logo, &mut scheduler, 4_999);
        assert_eq!(logo.engine().rotation_count(), swaps);
        assert!(logo.state().rare_view_mode_active);

        run(&mut logo, &mut scheduler, 1);
        assert!(!logo.state().rare_view_mode_active);
        assert!(!logo.state().show_rare_variant);
        assert!(logo.engine().is_rotating());
    }

    #[test]
    fn second_click_exits_early() {
        let mut scheduler = UiScheduler::new();
        let mut logo = logo(1.0);
        logo.advance(&mut scheduler);
        run(&mut logo, &mut scheduler, 400);
        logo.click(&mut scheduler);
        assert_eq!(logo.click(&mut scheduler), LogoClick::ExitedRareView);
        assert_eq!(
            scheduler.count_key(TimerKey::new(ID, TimerKind::RareViewExpiry)),
            0
        );
    }

    #[test]
    fn leaving_rare_view_does_not_start_an_idle_logo() {
        let mut scheduler = UiScheduler::new();
        let mut logo = logo(1.0);
        logo.advance(&mut scheduler);
        run(&mut logo, &mut scheduler, 400);
        assert_eq!(logo.click(&mut scheduler), LogoClick::EnteredRareView);
        assert_eq!(logo.click(&mut scheduler), LogoClick::ExitedRareView);

        assert!(!logo.engine().is_rotating());
        assert_eq!(pending_for(&scheduler, ID), 0);
    }

    #[test]
    fn rare_view_expiry_does_not_start_an_idle_logo() {
        let mut scheduler = UiScheduler::new();
        let mut logo = logo(1.0).with_view_window(Duration::from_secs(2));
        logo.advance(&mut scheduler);
        run(&mut logo, &mut scheduler, 400);
        logo.click(&mut scheduler);
        run(&mut logo, &mut scheduler, 2_000);

        assert!(!logo.state().rare_view_mode_active);
        assert!(!logo.engine().is_rotating());
        assert_eq!(pending_for(&scheduler, ID), 0);
    }

    #[test]
    fn unmount_cancels_everything() {
        let mut scheduler = UiScheduler::new();
        let mut logo = logo(1.0);
        logo.start(RotationInterval::default(), &mut scheduler);
        logo.advance(&mut scheduler);
        run(&mut logo, &mut scheduler, 200);
        logo.unmount(&mut scheduler);
        assert_eq!(pending_for(&scheduler, ID), 0);
    }
}

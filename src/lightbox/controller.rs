// SPDX-License-Identifier: MPL-2.0
//! Lightbox navigation over the current gallery view.
//!
//! The open index always refers to the derived (filtered and sorted) view,
//! never to the raw collection. Navigation wraps in both directions.

use crate::domain::ui::SlideshowInterval;
use crate::error::NavigationError;
use crate::timing::{Fired, TimerId, TimerKey, TimerKind, UiScheduler, WidgetId};

/// Transient state of an open lightbox.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct OpenState {
    pub index: usize,
    pub fullscreen: bool,
    slideshow: Option<TimerId>,
}

impl OpenState {
    /// Returns `true` while the slideshow timer is armed.
    #[must_use]
    pub fn slideshow_running(&self) -> bool {
        self.slideshow.is_some()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LightboxState {
    #[default]
    Closed,
    Open(OpenState),
}

/// Keys the lightbox reacts to while open.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxKey {
    Left,
    Right,
    Escape,
    Fullscreen,
    Slideshow,
}

/// Where a click inside the overlay landed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClickTarget {
    Backdrop,
    Content,
}

#[derive(Debug, Clone)]
pub struct Lightbox {
    id: WidgetId,
    len: usize,
    state: LightboxState,
    slideshow_interval: SlideshowInterval,
}

impl Lightbox {
    /// Creates a closed lightbox over a view of `len` items.
    #[must_use]
    pub fn new(id: WidgetId, len: usize, slideshow_interval: SlideshowInterval) -> Self {
        Self {
            id,
            len,
            state: LightboxState::Closed,
            slideshow_interval,
        }
    }

    #[must_use]
    pub fn id(&self) -> WidgetId {
        self.id
    }

    #[must_use]
    pub fn state(&self) -> LightboxState {
        self.state
    }

    /// Length of the view the lightbox navigates.
    #[must_use]
    pub fn view_len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_open(&self) -> bool {
        matches!(self.state, LightboxState::Open(_))
    }

    #[must_use]
    pub fn index(&self) -> Option<usize> {
        match self.state {
            LightboxState::Open(open) => Some(open.index),
            LightboxState::Closed => None,
        }
    }

    #[must_use]
    pub fn is_fullscreen(&self) -> bool {
        matches!(self.state, LightboxState::Open(open) if open.fullscreen)
    }

    #[must_use]
    pub fn is_slideshow_running(&self) -> bool {
        matches!(self.state, LightboxState::Open(open) if open.slideshow_running())
    }

    /// Opens on `index`. Reopening while open moves to `index` and keeps the
    /// fullscreen and slideshow flags.
    pub fn open(&mut self, index: usize) -> Result<(), NavigationError> {
        if self.len == 0 {
            return Err(NavigationError::EmptyView);
        }
        if index >= self.len {
            return Err(NavigationError::IndexOutOfRange {
                index,
                len: self.len,
            });
        }
        self.state = match self.state {
            LightboxState::Open(open) => LightboxState::Open(OpenState { index, ..open }),
            LightboxState::Closed => LightboxState::Open(OpenState {
                index,
                fullscreen: false,
                slideshow: None,
            }),
        };
        Ok(())
    }

    /// Moves to the next item, wrapping to the first. No-op when closed.
    pub fn next(&mut self) -> Option<usize> {
        let len = self.len;
        self.step(|index| (index + 1) % len)
    }

    /// Moves to the previous item, wrapping to the last. No-op when closed.
    pub fn previous(&mut self) -> Option<usize> {
        let len = self.len;
        self.step(|index| (index + len - 1) % len)
    }

    fn step(&mut self, advance: impl FnOnce(usize) -> usize) -> Option<usize> {
        if self.len == 0 {
            return None;
        }
        match &mut self.state {
            LightboxState::Open(open) => {
                open.index = advance(open.index);
                Some(open.index)
            }
            LightboxState::Closed => None,
        }
    }

    /// Flips fullscreen, keeping the index. Returns the new flag.
    pub fn toggle_fullscreen(&mut self) -> bool {
        match &mut self.state {
            LightboxState::Open(open) => {
                open.fullscreen = !open.fullscreen;
                open.fullscreen
            }
            LightboxState::Closed => false,
        }
    }

    /// Starts or stops the slideshow. Starting while closed opens the first
    /// item. Returns whether the slideshow runs afterwards.
    pub fn toggle_slideshow(&mut self, scheduler: &mut UiScheduler) -> Result<bool, NavigationError> {
        if let LightboxState::Open(open) = &mut self.state {
            if let Some(timer) = open.slideshow.take() {
                scheduler.cancel(timer);
                return Ok(false);
            }
        } else {
            self.open(0)?;
        }

        let key = TimerKey::new(self.id, TimerKind::Slideshow);
        let period = self.slideshow_interval.as_duration();
        if let LightboxState::Open(open) = &mut self.state {
            open.slideshow = Some(scheduler.schedule_repeating(key, period));
        }
        Ok(true)
    }

    /// Stops the slideshow, leaves fullscreen and closes, in that order.
    /// Closing a closed lightbox does nothing.
    pub fn close(&mut self, scheduler: &mut UiScheduler) {
        let LightboxState::Open(open) = &mut self.state else {
            return;
        };
        if let Some(timer) = open.slideshow.take() {
            scheduler.cancel(timer);
        }
        open.fullscreen = false;
        self.state = LightboxState::Closed;
    }

    /// Informs the lightbox that the underlying view changed. An open
    /// lightbox closes since its index no longer refers to the same item.
    pub fn sync_view(&mut self, len: usize, scheduler: &mut UiScheduler) {
        if self.is_open() {
            tracing::debug!(widget = %self.id, "view changed while open: closing lightbox");
        }
        self.close(scheduler);
        self.len = len;
    }

    /// Handles a click inside the overlay. Only the backdrop dismisses.
    pub fn click(&mut self, target: ClickTarget, scheduler: &mut UiScheduler) {
        if target == ClickTarget::Backdrop {
            self.close(scheduler);
        }
    }

    /// Handles a key press. Returns `true` if the key was consumed.
    pub fn handle_key(&mut self, key: LightboxKey, scheduler: &mut UiScheduler) -> bool {
        if !self.is_open() {
            return false;
        }
        match key {
            LightboxKey::Left => {
                self.previous();
            }
            LightboxKey::Right => {
                self.next();
            }
            LightboxKey::Escape => self.close(scheduler),
            LightboxKey::Fullscreen => {
                self.toggle_fullscreen();
            }
            LightboxKey::Slideshow => {
                // Open, so toggling cannot fail.
                let _ = self.toggle_slideshow(scheduler);
            }
        }
        true
    }

    /// Handles a fired task owned by the lightbox. Returns `true` if the
    /// index moved.
    pub fn handle_timer(&mut self, fired: Fired<TimerKey>) -> bool {
        if fired.key != TimerKey::new(self.id, TimerKind::Slideshow) {
            return false;
        }
        let armed = matches!(self.state, LightboxState::Open(open) if open.slideshow == Some(fired.id));
        armed && self.next().is_some()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::pending_for;
    use std::time::Duration;

    const ID: WidgetId = WidgetId(20);

    fn lightbox(len: usize) -> Lightbox {
        Lightbox::new(ID, len, SlideshowInterval::from_millis(3_000))
    }

    fn run(lightbox: &mut Lightbox, scheduler: &mut UiScheduler, millis: u64) {
        scheduler.advance_by(Duration::from_millis(millis), |_, fired| {
            lightbox.handle_timer(fired);
        });
    }

    #[test]
    fn open_validates_index() {
        let mut lightbox = lightbox(3);
        assert_eq!(
            lightbox.open(3),
            Err(NavigationError::IndexOutOfRange { index: 3, len: 3 })
        );
        assert!(!lightbox.is_open());
        assert!(lightbox.open(2).is_ok());
        assert_eq!(lightbox.index(), Some(2));

        assert_eq!(self::lightbox(0).open(0), Err(NavigationError::EmptyView));
    }

    #[test]
    fn navigation_wraps_both_ways() {
        let mut lightbox = lightbox(3);
        lightbox.open(2).expect("in range");
        assert_eq!(lightbox.next(), Some(0));
        assert_eq!(lightbox.previous(), Some(2));
    }

    #[test]
    fn composing_len_steps_returns_to_start() {
        for len in 1..=16 {
            for start in 0..len {
                let mut lightbox = lightbox(len);
                lightbox.open(start).expect("in range");
                for _ in 0..len {
                    lightbox.next();
                }
                assert_eq!(lightbox.index(), Some(start), "next, len {len}");
                for _ in 0..len {
                    lightbox.previous();
                }
                assert_eq!(lightbox.index(), Some(start), "previous, len {len}");
            }
        }
    }

    #[test]
    fn single_item_navigation_stays_put() {
        let mut lightbox = lightbox(1);
        lightbox.open(0).expect("in range");
        assert_eq!(lightbox.next(), Some(0));
        assert_eq!(lightbox.previous(), Some(0));
    }

    #[test]
    fn navigation_is_noop_when_closed() {
        let mut lightbox = lightbox(3);
        assert_eq!(lightbox.next(), None);
        assert_eq!(lightbox.previous(), None);
        assert!(!lightbox.toggle_fullscreen());
    }

    #[test]
    fn fullscreen_keeps_index() {
        let mut lightbox = lightbox(3);
        lightbox.open(1).expect("in range");
        assert!(lightbox.toggle_fullscreen());
        assert_eq!(lightbox.index(), Some(1));
        assert!(!lightbox.toggle_fullscreen());
    }

    #[test]
    fn slideshow_from_closed_opens_first_item_and_steps() {
        let mut scheduler = UiScheduler::new();
        let mut lightbox = lightbox(3);
        assert_eq!(lightbox.toggle_slideshow(&mut scheduler), Ok(true));
        assert_eq!(lightbox.index(), Some(0));

        run(&mut lightbox, &mut scheduler, 6_000);
        assert_eq!(lightbox.index(), Some(2));

        assert_eq!(lightbox.toggle_slideshow(&mut scheduler), Ok(false));
        assert!(scheduler.is_empty());
        run(&mut lightbox, &mut scheduler, 9_000);
        assert_eq!(lightbox.index(), Some(2));
    }

    #[test]
    fn slideshow_on_empty_view_fails() {
        let mut scheduler = UiScheduler::new();
        let mut lightbox = lightbox(0);
        assert_eq!(
            lightbox.toggle_slideshow(&mut scheduler),
            Err(NavigationError::EmptyView)
        );
        assert!(scheduler.is_empty());
    }

    #[test]
    fn close_tears_everything_down_and_is_idempotent() {
        let mut scheduler = UiScheduler::new();
        let mut lightbox = lightbox(4);
        lightbox.open(2).expect("in range");
        lightbox.toggle_fullscreen();
        lightbox.toggle_slideshow(&mut scheduler).expect("open");

        lightbox.close(&mut scheduler);
        assert_eq!(lightbox.state(), LightboxState::Closed);
        assert!(!lightbox.is_fullscreen());
        assert!(!lightbox.is_slideshow_running());
        assert_eq!(pending_for(&scheduler, ID), 0);

        lightbox.close(&mut scheduler);
        assert_eq!(lightbox.state(), LightboxState::Closed);
    }

    #[test]
    fn only_backdrop_click_dismisses() {
        let mut scheduler = UiScheduler::new();
        let mut lightbox = lightbox(2);
        lightbox.open(1).expect("in range");
        lightbox.click(ClickTarget::Content, &mut scheduler);
        assert!(lightbox.is_open());
        lightbox.click(ClickTarget::Backdrop, &mut scheduler);
        assert!(!lightbox.is_open());
    }

    #[test]
    fn view_change_closes_and_adopts_new_length() {
        let mut scheduler = UiScheduler::new();
        let mut lightbox = lightbox(5);
        lightbox.open(4).expect("in range");
        lightbox.toggle_slideshow(&mut scheduler).expect("open");
        lightbox.sync_view(2, &mut scheduler);
        assert!(!lightbox.is_open());
        assert!(scheduler.is_empty());
        assert_eq!(lightbox.view_len(), 2);
        assert!(lightbox.open(4).is_err());
    }

    #[test]
    fn keyboard_map() {
        let mut scheduler = UiScheduler::new();
        let mut lightbox = lightbox(3);
        assert!(!lightbox.handle_key(LightboxKey::Right, &mut scheduler));

        lightbox.open(0).expect("in range");
        assert!(lightbox.handle_key(LightboxKey::Right, &mut scheduler));
        assert_eq!(lightbox.index(), Some(1));
        lightbox.handle_key(LightboxKey::Left, &mut scheduler);
        lightbox.handle_key(LightboxKey::Left, &mut scheduler);
        assert_eq!(lightbox.index(), Some(2));
        lightbox.handle_key(LightboxKey::Fullscreen, &mut scheduler);
        assert!(lightbox.is_fullscreen());
        lightbox.handle_key(LightboxKey::Slideshow, &mut scheduler);
        assert!(lightbox.is_slideshow_running());
        lightbox.handle_key(LightboxKey::Escape, &mut scheduler);
        assert!(!lightbox.is_open());
        assert!(scheduler.is_empty());
    }
}

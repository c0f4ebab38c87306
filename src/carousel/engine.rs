// SPDX-License-Identifier: MPL-2.0
//! Timed, fading rotation of a single media slot.
//!
//! # State machine
//!
//! ```text
//!            advance()              FadeSwap fires           FadeSettle fires
//!   Idle ───────────────► FadingOut ───────────────► FadingIn ────────────────► Idle
//!    ▲                    (lock held)   index swaps   (lock held)                 │
//!    └────────────────────────────────────────────────────────────────────────────┘
//! ```
//!
//! Any `advance()` outside `Idle` is dropped. The repeating rotation timer is
//! independent of the fade and simply calls `advance()` on every tick.

use super::selection::pick_next;
use crate::domain::ui::{FadeDuration, RotationInterval};
use crate::timing::{Fired, TimerId, TimerKey, TimerKind, UiScheduler, WidgetId};
use rand::rngs::StdRng;
use rand::SeedableRng;
use std::time::Duration;

/// Fade phase of the slot.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FadePhase {
    /// Fully visible, accepting advances.
    Idle,
    /// Fading the current item out; the index swaps when `timer` fires.
    FadingOut { timer: TimerId },
    /// Fading the new item in; the lock is released when `timer` fires.
    FadingIn { timer: TimerId },
}

/// Result of an advance request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AdvanceOutcome {
    /// A fade started.
    Started,
    /// A fade was already running; the request was dropped.
    Dropped,
    /// Fewer than two items; nothing to rotate.
    Static,
}

#[derive(Debug, Clone, Copy)]
struct Rotation {
    timer: TimerId,
    interval: RotationInterval,
}

/// Rotation state of one carousel slot.
#[derive(Debug, Clone)]
pub struct CarouselEngine {
    id: WidgetId,
    len: usize,
    active: usize,
    previous: Option<usize>,
    phase: FadePhase,
    rotation: Option<Rotation>,
    fade: FadeDuration,
    rng: StdRng,
    rotations: u64,
}

impl CarouselEngine {
    /// Creates an engine over `len` items, showing index 0.
    #[must_use]
    pub fn new(id: WidgetId, len: usize, fade: FadeDuration, rng: StdRng) -> Self {
        Self {
            id,
            len,
            active: 0,
            previous: None,
            phase: FadePhase::Idle,
            rotation: None,
            fade,
            rng,
            rotations: 0,
        }
    }

    /// Creates an engine with a deterministic random source.
    #[must_use]
    pub fn with_seed(id: WidgetId, len: usize, fade: FadeDuration, seed: u64) -> Self {
        Self::new(id, len, fade, StdRng::seed_from_u64(seed))
    }

    #[must_use]
    pub fn id(&self) -> WidgetId {
        self.id
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.len
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Index on display, `None` for an empty collection.
    #[must_use]
    pub fn active_index(&self) -> Option<usize> {
        (self.len > 0).then_some(self.active)
    }

    /// Index shown before the last swap.
    #[must_use]
    pub fn previous_index(&self) -> Option<usize> {
        self.previous
    }

    #[must_use]
    pub fn phase(&self) -> FadePhase {
        self.phase
    }

    /// Returns `true` while the fade lock is held.
    #[must_use]
    pub fn is_transitioning(&self) -> bool {
        self.phase != FadePhase::Idle
    }

    /// Interval of the running rotation, if any.
    #[must_use]
    pub fn interval(&self) -> Option<RotationInterval> {
        self.rotation.map(|rotation| rotation.interval)
    }

    /// Returns `true` while the rotation timer is armed.
    #[must_use]
    pub fn is_rotating(&self) -> bool {
        self.rotation.is_some()
    }

    /// Number of index swaps since mount.
    #[must_use]
    pub fn rotation_count(&self) -> u64 {
        self.rotations
    }

    fn key(&self, kind: TimerKind) -> TimerKey {
        TimerKey::new(self.id, kind)
    }

    /// Starts the repeating rotation, replacing any running one.
    pub fn start(&mut self, interval: RotationInterval, scheduler: &mut UiScheduler) {
        self.stop(scheduler);
        if self.len < 2 {
            tracing::debug!(widget = %self.id, len = self.len, "rotation not started: nothing to rotate");
            return;
        }
        let timer = scheduler.schedule_repeating(self.key(TimerKind::Rotation), interval.as_duration());
        self.rotation = Some(Rotation { timer, interval });
        tracing::debug!(widget = %self.id, interval_ms = interval.as_millis(), "rotation started");
    }

    /// Cancels the rotation timer. A fade already running completes.
    pub fn stop(&mut self, scheduler: &mut UiScheduler) {
        if let Some(rotation) = self.rotation.take() {
            scheduler.cancel(rotation.timer);
        }
    }

    /// Begins a fade towards a new index.
    pub fn advance(&mut self, scheduler: &mut UiScheduler) -> AdvanceOutcome {
        if self.len < 2 {
            return AdvanceOutcome::Static;
        }
        if self.is_transitioning() {
            tracing::debug!(widget = %self.id, "advance dropped: fade in progress");
            return AdvanceOutcome::Dropped;
        }
        let timer = scheduler.schedule_once(self.key(TimerKind::FadeSwap), self.fade.half());
        self.phase = FadePhase::FadingOut { timer };
        AdvanceOutcome::Started
    }

    /// Reacts to a rotation performed by a synchronized peer.
    ///
    /// The rotation timer is cancelled, the index swaps right away (joining
    /// the peer's fade) and the timer restarts at the same interval, so both
    /// widgets tick in step afterwards. Returns the new index, or `None` if
    /// the advance was dropped.
    pub fn on_external_advance(&mut self, scheduler: &mut UiScheduler) -> Option<usize> {
        if self.len < 2 {
            return None;
        }
        let interval = self.interval();
        self.stop(scheduler);

        let swapped = if self.is_transitioning() {
            tracing::debug!(widget = %self.id, "external advance dropped: fade in progress");
            None
        } else {
            Some(self.swap(scheduler))
        };

        if let Some(interval) = interval {
            self.start(interval, scheduler);
        }
        swapped
    }

    fn swap(&mut self, scheduler: &mut UiScheduler) -> usize {
        if let Some(next) = pick_next(self.len, self.active, self.previous, &mut self.rng) {
            self.previous = Some(self.active);
            self.active = next;
            self.rotations += 1;
        }
        let timer = scheduler.schedule_once(self.key(TimerKind::FadeSettle), self.fade.half());
        self.phase = FadePhase::FadingIn { timer };
        self.active
    }

    /// Handles a fired task owned by this engine.
    ///
    /// Returns the new index when the task swapped it. Stale tasks (from a
    /// cancelled fade or rotation) are ignored.
    pub fn handle_timer(&mut self, fired: Fired<TimerKey>, scheduler: &mut UiScheduler) -> Option<usize> {
        if fired.key.widget != self.id {
            return None;
        }
        match (fired.key.kind, self.phase) {
            (TimerKind::Rotation, _) => {
                if self.rotation.is_some_and(|rotation| rotation.timer == fired.id) {
                    self.advance(scheduler);
                }
                None
            }
            (TimerKind::FadeSwap, FadePhase::FadingOut { timer }) if timer == fired.id => {
                Some(self.swap(scheduler))
            }
            (TimerKind::FadeSettle, FadePhase::FadingIn { timer }) if timer == fired.id => {
                self.phase = FadePhase::Idle;
                None
            }
            _ => None,
        }
    }

    /// Opacity of the active item, from 0.0 to 1.0, at the scheduler's
    /// current time.
    #[must_use]
    pub fn opacity(&self, scheduler: &UiScheduler) -> f32 {
        let half = self.fade.half();
        let progress = |timer: TimerId| -> f32 {
            let Some(deadline) = scheduler.deadline_of(timer) else {
                return 1.0;
            };
            let remaining = deadline.saturating_sub(scheduler.now());
            if half.is_zero() {
                return 1.0;
            }
            1.0 - (remaining.as_secs_f32() / half.as_secs_f32()).clamp(0.0, 1.0)
        };
        match self.phase {
            FadePhase::Idle => 1.0,
            FadePhase::FadingOut { timer } => 1.0 - progress(timer),
            FadePhase::FadingIn { timer } => progress(timer),
        }
    }

    /// Cancels every task owned by the engine.
    pub fn unmount(&mut self, scheduler: &mut UiScheduler) {
        self.stop(scheduler);
        match self.phase {
            FadePhase::FadingOut { timer } | FadePhase::FadingIn { timer } => {
                scheduler.cancel(timer);
            }
            FadePhase::Idle => {}
        }
        self.phase = FadePhase::Idle;
    }

    /// Duration of one half of the fade.
    #[must_use]
    pub fn half_fade(&self) -> Duration {
        self.fade.half()
    }
}

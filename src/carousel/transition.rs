// SPDX-License-Identifier: MPL-2.0
//! Directional slide transitions between indexed panels.
//!
//! A transition holds a lock for its whole duration: `go_to` requests that
//! arrive meanwhile are ignored, not queued. Optional auto-rotation runs only
//! while the controller is idle and the user is not interacting with it.

use crate::domain::ui::{RotationInterval, TransitionDuration};
use crate::timing::{Fired, TimerId, TimerKey, TimerKind, UiScheduler, WidgetId};

/// Slide direction, derived from the index change.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
    Forward,
    Backward,
}

/// Transition state machine.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransitionState {
    Idle {
        current: usize,
    },
    Transitioning {
        from: usize,
        to: usize,
        direction: Direction,
        timer: TimerId,
    },
}

/// Why a `go_to` request was ignored.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum IgnoreReason {
    SameIndex,
    Locked,
    OutOfRange,
}

/// Result of a navigation request.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GoToOutcome {
    Started(Direction),
    Ignored(IgnoreReason),
}

/// Panels to render at a given moment.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Panels {
    /// Nothing to show.
    Empty,
    /// Outside a transition: exactly one panel.
    Single(usize),
    /// During a transition: the exiting and entering panels.
    Pair {
        exiting: usize,
        entering: usize,
        direction: Direction,
    },
}

#[derive(Debug, Clone, Copy)]
struct AutoRotate {
    interval: RotationInterval,
    timer: Option<TimerId>,
}

/// Index-driven view with animated, non-overlapping transitions.
#[derive(Debug, Clone)]
pub struct TransitionController {
    id: WidgetId,
    len: usize,
    state: TransitionState,
    duration: TransitionDuration,
    auto: Option<AutoRotate>,
    interacting: bool,
}

impl TransitionController {
    #[must_use]
    pub fn new(id: WidgetId, len: usize, duration: TransitionDuration) -> Self {
        Self {
            id,
            len,
            state: TransitionState::Idle { current: 0 },
            duration,
            auto: None,
            interacting: false,
        }
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

    #[must_use]
    pub fn state(&self) -> TransitionState {
        self.state
    }

    /// Index that is (or is becoming) current.
    #[must_use]
    pub fn current(&self) -> usize {
        match self.state {
            TransitionState::Idle { current } => current,
            TransitionState::Transitioning { to, .. } => to,
        }
    }

    /// Returns `true` while a transition holds the lock.
    #[must_use]
    pub fn is_locked(&self) -> bool {
        matches!(self.state, TransitionState::Transitioning { .. })
    }

    #[must_use]
    pub fn is_auto_rotating(&self) -> bool {
        self.auto.is_some_and(|auto| auto.timer.is_some())
    }

    /// Moves to `index` with a directional animation.
    pub fn go_to(&mut self, index: usize, scheduler: &mut UiScheduler) -> GoToOutcome {
        let current = match self.state {
            TransitionState::Transitioning { .. } => {
                tracing::debug!(widget = %self.id, index, "transition ignored: locked");
                return GoToOutcome::Ignored(IgnoreReason::Locked);
            }
            TransitionState::Idle { current } => current,
        };
        if index >= self.len {
            return GoToOutcome::Ignored(IgnoreReason::OutOfRange);
        }
        if index == current {
            return GoToOutcome::Ignored(IgnoreReason::SameIndex);
        }

        let direction = if index > current {
            Direction::Forward
        } else {
            Direction::Backward
        };
        let timer = scheduler.schedule_once(
            TimerKey::new(self.id, TimerKind::TransitionEnd),
            self.duration.as_duration(),
        );
        self.state = TransitionState::Transitioning {
            from: current,
            to: index,
            direction,
            timer,
        };
        self.refresh_auto_rotate(scheduler);
        GoToOutcome::Started(direction)
    }

    /// Moves to the following index, wrapping at the end.
    pub fn next(&mut self, scheduler: &mut UiScheduler) -> GoToOutcome {
        if self.len == 0 {
            return GoToOutcome::Ignored(IgnoreReason::OutOfRange);
        }
        let target = (self.current() + 1) % self.len;
        self.go_to(target, scheduler)
    }

    /// Moves to the preceding index, wrapping at the start.
    pub fn previous(&mut self, scheduler: &mut UiScheduler) -> GoToOutcome {
        if self.len == 0 {
            return GoToOutcome::Ignored(IgnoreReason::OutOfRange);
        }
        let target = (self.current() + self.len - 1) % self.len;
        self.go_to(target, scheduler)
    }

    /// Handles a fired task owned by this controller. Returns `true` if the
    /// visible state changed.
    pub fn handle_timer(&mut self, fired: Fired<TimerKey>, scheduler: &mut UiScheduler) -> bool {
        if fired.key.widget != self.id {
            return false;
        }
        match (fired.key.kind, self.state) {
            (TimerKind::TransitionEnd, TransitionState::Transitioning { to, timer, .. })
                if timer == fired.id =>
            {
                self.state = TransitionState::Idle { current: to };
                self.refresh_auto_rotate(scheduler);
                true
            }
            (TimerKind::AutoRotate, _)
                if self.auto.and_then(|auto| auto.timer) == Some(fired.id) =>
            {
                matches!(self.next(scheduler), GoToOutcome::Started(_))
            }
            _ => false,
        }
    }

    /// Turns on auto-rotation at `interval`.
    pub fn enable_auto_rotate(&mut self, interval: RotationInterval, scheduler: &mut UiScheduler) {
        self.disable_auto_rotate(scheduler);
        self.auto = Some(AutoRotate {
            interval,
            timer: None,
        });
        self.refresh_auto_rotate(scheduler);
    }

    pub fn disable_auto_rotate(&mut self, scheduler: &mut UiScheduler) {
        if let Some(timer) = self.auto.take().and_then(|auto| auto.timer) {
            scheduler.cancel(timer);
        }
    }

    /// Signals hover/focus. Auto-rotation pauses while interacting.
    pub fn set_interacting(&mut self, interacting: bool, scheduler: &mut UiScheduler) {
        self.interacting = interacting;
        self.refresh_auto_rotate(scheduler);
    }

    fn refresh_auto_rotate(&mut self, scheduler: &mut UiScheduler) {
        let gates_clear = !self.interacting && !self.is_locked() && self.len > 1;
        let key = TimerKey::new(self.id, TimerKind::AutoRotate);
        let Some(auto) = self.auto.as_mut() else {
            return;
        };
        match (gates_clear, auto.timer) {
            (true, None) => {
                auto.timer = Some(scheduler.schedule_repeating(key, auto.interval.as_duration()));
            }
            (false, Some(timer)) => {
                scheduler.cancel(timer);
                auto.timer = None;
            }
            _ => {}
        }
    }

    /// Panels to render now.
    #[must_use]
    pub fn panels(&self) -> Panels {
        if self.len == 0 {
            return Panels::Empty;
        }
        match self.state {
            TransitionState::Idle { current } => Panels::Single(current),
            TransitionState::Transitioning {
                from,
                to,
                direction,
                ..
            } => Panels::Pair {
                exiting: from,
                entering: to,
                direction,
            },
        }
    }

    /// Fraction of the running transition already elapsed, `None` when idle.
    #[must_use]
    pub fn progress(&self, scheduler: &UiScheduler) -> Option<f32> {
        let TransitionState::Transitioning { timer, .. } = self.state else {
            return None;
        };
        let total = self.duration.as_duration().as_secs_f32();
        let remaining = scheduler
            .deadline_of(timer)
            .map_or(0.0, |deadline| deadline.saturating_sub(scheduler.now()).as_secs_f32());
        Some((1.0 - remaining / total).clamp(0.0, 1.0))
    }

    /// Cancels every task owned by the controller.
    pub fn unmount(&mut self, scheduler: &mut UiScheduler) {
        self.disable_auto_rotate(scheduler);
        if let TransitionState::Transitioning { to, timer, .. } = self.state {
            scheduler.cancel(timer);
            self.state = TransitionState::Idle { current: to };
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::timing::pending_for;
    use std::time::Duration;

    const ID: WidgetId = WidgetId(3);

    fn controller(len: usize) -> TransitionController {
        TransitionController::new(ID, len, TransitionDuration::from_millis(700))
    }

    fn run(controller: &mut TransitionController, scheduler: &mut UiScheduler, millis: u64) {
        scheduler.advance_by(Duration::from_millis(millis), |scheduler, fired| {
            controller.handle_timer(fired, scheduler);
        });
    }

    fn auto_timers(scheduler: &UiScheduler) -> usize {
        scheduler.count_key(TimerKey::new(ID, TimerKind::AutoRotate))
    }

    #[test]
    fn go_to_computes_direction_and_locks() {
        let mut scheduler = UiScheduler::new();
        let mut controller = controller(4);
        assert_eq!(
            controller.go_to(2, &mut scheduler),
            GoToOutcome::Started(Direction::Forward)
        );
        assert_eq!(
            controller.go_to(3, &mut scheduler),
            GoToOutcome::Ignored(IgnoreReason::Locked)
        );
        assert_eq!(
            controller.panels(),
            Panels::Pair {
                exiting: 0,
                entering: 2,
                direction: Direction::Forward
            }
        );

        run(&mut controller, &mut scheduler, 700);
        assert_eq!(controller.panels(), Panels::Single(2));
        assert_eq!(
            controller.go_to(1, &mut scheduler),
            GoToOutcome::Started(Direction::Backward)
        );
    }

    #[test]
    fn same_or_out_of_range_index_is_ignored() {
        let mut scheduler = UiScheduler::new();
        let mut controller = controller(3);
        assert_eq!(
            controller.go_to(0, &mut scheduler),
            GoToOutcome::Ignored(IgnoreReason::SameIndex)
        );
        assert_eq!(
            controller.go_to(3, &mut scheduler),
            GoToOutcome::Ignored(IgnoreReason::OutOfRange)
        );
        assert!(scheduler.is_empty());
    }

    #[test]
    fn next_and_previous_wrap() {
        let mut scheduler = UiScheduler::new();
        let mut controller = controller(3);
        assert_eq!(
            controller.previous(&mut scheduler),
            GoToOutcome::Started(Direction::Forward)
        );
        run(&mut controller, &mut scheduler, 700);
        assert_eq!(controller.current(), 2);

        assert_eq!(
            controller.next(&mut scheduler),
            GoToOutcome::Started(Direction::Backward)
        );
        run(&mut controller, &mut scheduler, 700);
        assert_eq!(controller.current(), 0);
    }

    #[test]
    fn auto_rotate_pauses_while_locked_or_hovered() {
        let mut scheduler = UiScheduler::new();
        let mut controller = controller(3);
        controller.enable_auto_rotate(RotationInterval::from_millis(5_000), &mut scheduler);
        assert_eq!(auto_timers(&scheduler), 1);

        controller.set_interacting(true, &mut scheduler);
        assert_eq!(auto_timers(&scheduler), 0);
        run(&mut controller, &mut scheduler, 20_000);
        assert_eq!(controller.current(), 0);

        controller.set_interacting(false, &mut scheduler);
        assert_eq!(auto_timers(&scheduler), 1);
        run(&mut controller, &mut scheduler, 5_000);
        assert!(controller.is_locked());
        assert_eq!(auto_timers(&scheduler), 0);

        run(&mut controller, &mut scheduler, 700);
        assert_eq!(controller.current(), 1);
        assert_eq!(auto_timers(&scheduler), 1);
    }

    #[test]
    fn enabling_twice_keeps_one_timer() {
        let mut scheduler = UiScheduler::new();
        let mut controller = controller(3);
        controller.enable_auto_rotate(RotationInterval::from_millis(5_000), &mut scheduler);
        controller.enable_auto_rotate(RotationInterval::from_millis(5_000), &mut scheduler);
        assert_eq!(auto_timers(&scheduler), 1);
    }

    #[test]
    fn single_panel_never_auto_rotates() {
        let mut scheduler = UiScheduler::new();
        let mut controller = controller(1);
        controller.enable_auto_rotate(RotationInterval::default(), &mut scheduler);
        assert_eq!(auto_timers(&scheduler), 0);
        assert_eq!(controller.panels(), Panels::Single(0));

        let empty = TransitionController::new(ID, 0, TransitionDuration::default());
        assert_eq!(empty.panels(), Panels::Empty);
    }

    #[test]
    fn progress_tracks_elapsed_time() {
        let mut scheduler = UiScheduler::new();
        let mut controller = controller(2);
        assert_eq!(controller.progress(&scheduler), None);
        controller.next(&mut scheduler);
        run(&mut controller, &mut scheduler, 350);
        let progress = controller.progress(&scheduler).expect("transitioning");
        assert!((progress - 0.5).abs() < 0.01);
    }

    #[test]
    fn unmount_cancels_transition_and_auto_rotate() {
        let mut scheduler = UiScheduler::new();
        let mut controller = controller(3);
        controller.enable_auto_rotate(RotationInterval::default(), &mut scheduler);
        controller.set_interacting(false, &mut scheduler);
        controller.next(&mut scheduler);
        controller.unmount(&mut scheduler);
        assert_eq!(pending_for(&scheduler, ID), 0);
        assert!(!controller.is_locked());
    }
}

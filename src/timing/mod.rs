// SPDX-License-Identifier: MPL-2.0
//! Timer plumbing shared by every animated widget.
//!
//! The generic [`Scheduler`] knows nothing about widgets; the app
//! instantiates it as [`UiScheduler`], keyed by [`TimerKey`] so a fired task
//! can be routed back to the widget that registered it.

pub mod scheduler;

pub use scheduler::{Fired, Scheduler, TimerId};

use std::fmt;

/// Identifies one mounted widget instance.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct WidgetId(pub u32);

impl fmt::Display for WidgetId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "widget#{}", self.0)
    }
}

/// What a scheduled task is for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TimerKind {
    /// Repeating carousel rotation.
    Rotation,
    /// Midpoint of a carousel fade, where the index swaps.
    FadeSwap,
    /// End of a carousel fade, where the lock is released.
    FadeSettle,
    /// End of a directional slide transition.
    TransitionEnd,
    /// Repeating auto-rotation of a transition controller.
    AutoRotate,
    /// Repeating lightbox slideshow step.
    Slideshow,
    /// End of the rare logo viewing window.
    RareViewExpiry,
}

/// Routing key of a task: which widget, which responsibility.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct TimerKey {
    pub widget: WidgetId,
    pub kind: TimerKind,
}

impl TimerKey {
    #[must_use]
    pub fn new(widget: WidgetId, kind: TimerKind) -> Self {
        Self { widget, kind }
    }
}

/// Scheduler instantiated for UI widgets.
pub type UiScheduler = Scheduler<TimerKey>;

/// Number of pending tasks owned by `widget`, all kinds included.
#[must_use]
pub fn pending_for(scheduler: &UiScheduler, widget: WidgetId) -> usize {
    scheduler.count_where(|key| key.widget == widget)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::time::Duration;

    #[test]
    fn counts_are_scoped_per_widget() {
        let mut scheduler = UiScheduler::new();
        let a = WidgetId(1);
        let b = WidgetId(2);
        scheduler.schedule_repeating(TimerKey::new(a, TimerKind::Rotation), Duration::from_secs(4));
        scheduler.schedule_once(TimerKey::new(a, TimerKind::FadeSwap), Duration::from_millis(500));
        scheduler.schedule_repeating(TimerKey::new(b, TimerKind::Rotation), Duration::from_secs(4));

        assert_eq!(pending_for(&scheduler, a), 2);
        assert_eq!(pending_for(&scheduler, b), 1);
        assert_eq!(scheduler.count_key(TimerKey::new(a, TimerKind::Rotation)), 1);
    }

    #[test]
    fn widget_id_display() {
        assert_eq!(WidgetId(7).to_string(), "widget#7");
    }
}

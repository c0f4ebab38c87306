// SPDX-License-Identifier: MPL-2.0
//! Cooperative timer queue on a virtual clock.
//!
//! All scheduled work in the app runs on the UI thread. Instead of spawning
//! real timers, components register one-shot or repeating tasks here and the
//! owner of the scheduler advances the clock: the Iced app on every frame
//! tick, tests by arbitrary amounts. Due tasks are handed back one at a time
//! in deadline order so the handler can freely schedule or cancel other
//! tasks while processing one.

use std::time::Duration;

/// Shortest period accepted for repeating tasks.
const MIN_PERIOD: Duration = Duration::from_millis(1);

/// Handle to a scheduled task.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct TimerId(u64);

/// A task whose deadline elapsed.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Fired<K> {
    /// Handle the task was registered under.
    pub id: TimerId,
    /// Routing key given at registration.
    pub key: K,
    /// Virtual time at which the task was due.
    pub deadline: Duration,
}

#[derive(Debug, Clone)]
struct Timer<K> {
    id: TimerId,
    key: K,
    deadline: Duration,
    period: Option<Duration>,
    /// Registration order, used to break deadline ties.
    seq: u64,
}

/// Timer queue keyed by `K`.
///
/// # Example
///
/// ```
/// use hackfolio::timing::Scheduler;
/// use std::time::Duration;
///
/// let mut scheduler: Scheduler<&str> = Scheduler::new();
/// scheduler.schedule_repeating("tick", Duration::from_millis(100));
///
/// let mut fired = 0;
/// scheduler.advance_by(Duration::from_millis(350), |_, _| fired += 1);
/// assert_eq!(fired, 3);
/// ```
#[derive(Debug, Clone)]
pub struct Scheduler<K> {
    now: Duration,
    next_id: u64,
    next_seq: u64,
    timers: Vec<Timer<K>>,
}

impl<K: Copy + PartialEq> Default for Scheduler<K> {
    fn default() -> Self {
        Self::new()
    }
}

impl<K: Copy + PartialEq> Scheduler<K> {
    /// Creates an empty scheduler with the clock at zero.
    #[must_use]
    pub fn new() -> Self {
        Self {
            now: Duration::ZERO,
            next_id: 0,
            next_seq: 0,
            timers: Vec::new(),
        }
    }

    /// Current virtual time.
    #[must_use]
    pub fn now(&self) -> Duration {
        self.now
    }

    /// Registers a task that fires once after `delay`.
    pub fn schedule_once(&mut self, key: K, delay: Duration) -> TimerId {
        self.insert(key, delay, None)
    }

    /// Registers a task that fires every `period` until cancelled.
    pub fn schedule_repeating(&mut self, key: K, period: Duration) -> TimerId {
        let period = period.max(MIN_PERIOD);
        self.insert(key, period, Some(period))
    }

    fn insert(&mut self, key: K, delay: Duration, period: Option<Duration>) -> TimerId {
        let id = TimerId(self.next_id);
        self.next_id += 1;
        let seq = self.bump_seq();
        self.timers.push(Timer {
            id,
            key,
            deadline: self.now.saturating_add(delay),
            period,
            seq,
        });
        id
    }

    fn bump_seq(&mut self) -> u64 {
        let seq = self.next_seq;
        self.next_seq += 1;
        seq
    }

    /// Cancels a task. Returns `false` if it already fired (one-shot) or was
    /// cancelled before.
    pub fn cancel(&mut self, id: TimerId) -> bool {
        let before = self.timers.len();
        self.timers.retain(|timer| timer.id != id);
        self.timers.len() != before
    }

    /// Returns `true` while the task is pending.
    #[must_use]
    pub fn is_scheduled(&self, id: TimerId) -> bool {
        self.timers.iter().any(|timer| timer.id == id)
    }

    /// Period of a pending repeating task.
    #[must_use]
    pub fn period_of(&self, id: TimerId) -> Option<Duration> {
        self.timers
            .iter()
            .find(|timer| timer.id == id)
            .and_then(|timer| timer.period)
    }

    /// Next deadline of a pending task.
    #[must_use]
    pub fn deadline_of(&self, id: TimerId) -> Option<Duration> {
        self.timers
            .iter()
            .find(|timer| timer.id == id)
            .map(|timer| timer.deadline)
    }

    /// Number of pending tasks.
    #[must_use]
    pub fn len(&self) -> usize {
        self.timers.len()
    }

    /// Returns `true` if nothing is pending.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.timers.is_empty()
    }

    /// Number of pending tasks registered under exactly `key`.
    #[must_use]
    pub fn count_key(&self, key: K) -> usize {
        self.count_where(|candidate| *candidate == key)
    }

    /// Number of pending tasks whose key satisfies `predicate`.
    pub fn count_where(&self, predicate: impl Fn(&K) -> bool) -> usize {
        self.timers
            .iter()
            .filter(|timer| predicate(&timer.key))
            .count()
    }

    /// Earliest pending deadline.
    #[must_use]
    pub fn next_deadline(&self) -> Option<Duration> {
        self.timers.iter().map(|timer| timer.deadline).min()
    }

    /// Pops the earliest task due at or before `until`.
    ///
    /// The clock moves to the task's deadline. Repeating tasks are
    /// re-armed one period later before being returned.
    pub fn poll_due(&mut self, until: Duration) -> Option<Fired<K>> {
        let position = self
            .timers
            .iter()
            .enumerate()
            .filter(|(_, timer)| timer.deadline <= until)
            .min_by_key(|(_, timer)| (timer.deadline, timer.seq))
            .map(|(position, _)| position)?;

        let deadline = self.timers[position].deadline;
        self.now = self.now.max(deadline);

        let next = self.timers[position]
            .period
            .and_then(|period| deadline.checked_add(period));
        let fired = match next {
            Some(next) => {
                let seq = self.bump_seq();
                let timer = &mut self.timers[position];
                timer.deadline = next;
                timer.seq = seq;
                Fired {
                    id: timer.id,
                    key: timer.key,
                    deadline,
                }
            }
            // One-shot, or a repeating task whose next deadline overflows `Duration`.
            None => {
                let timer = self.timers.swap_remove(position);
                Fired {
                    id: timer.id,
                    key: timer.key,
                    deadline,
                }
            }
        };
        Some(fired)
    }

    /// Fires every task due at or before `until`, then sets the clock to
    /// `until`. Returns the number of tasks fired.
    ///
    /// Tasks scheduled by `handler` with a deadline inside the window fire
    /// within the same call.
    pub fn run_until<F>(&mut self, until: Duration, mut handler: F) -> usize
    where
        F: FnMut(&mut Self, Fired<K>),
    {
        let mut count = 0;
        while let Some(fired) = self.poll_due(until) {
            handler(self, fired);
            count += 1;
        }
        self.now = self.now.max(until);
        count
    }

    /// Moves the clock forward by `delta`, firing due tasks.
    pub fn advance_by<F>(&mut self, delta: Duration, handler: F) -> usize
    where
        F: FnMut(&mut Self, Fired<K>),
    {
        let until = self.now.saturating_add(delta);
        self.run_until(until, handler)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(value: u64) -> Duration {
        Duration::from_millis(value)
    }

    #[test]
    fn huge_delays_saturate_instead_of_overflowing() {
        let mut scheduler: Scheduler<u8> = Scheduler::new();
        scheduler.advance_by(ms(10), |_, _| {});
        let once = scheduler.schedule_once(1, Duration::MAX);
        let repeating = scheduler.schedule_repeating(2, Duration::MAX);
        assert_eq!(scheduler.deadline_of(once), Some(Duration::MAX));
        assert_eq!(scheduler.deadline_of(repeating), Some(Duration::MAX));

        let fired = scheduler.advance_by(Duration::MAX, |_, _| {});
        assert_eq!(fired, 2);
        assert!(scheduler.is_empty());
        assert_eq!(scheduler.now(), Duration::MAX);
    }

    #[test]
    fn once_fires_a_single_time() {
        let mut scheduler: Scheduler<u8> = Scheduler::new();
        let id = scheduler.schedule_once(1, ms(100));
        assert!(scheduler.is_scheduled(id));

        let fired = scheduler.advance_by(ms(1_000), |_, _| {});
        assert_eq!(fired, 1);
        assert!(!scheduler.is_scheduled(id));
        assert_eq!(scheduler.now(), ms(1_000));
    }

    #[test]
    fn nothing_fires_before_deadline() {
        let mut scheduler: Scheduler<u8> = Scheduler::new();
        scheduler.schedule_once(1, ms(100));
        assert_eq!(scheduler.advance_by(ms(99), |_, _| {}), 0);
        assert_eq!(scheduler.advance_by(ms(1), |_, _| {}), 1);
    }

    #[test]
    fn repeating_rearms_every_period() {
        let mut scheduler: Scheduler<u8> = Scheduler::new();
        let id = scheduler.schedule_repeating(7, ms(250));
        let mut deadlines = Vec::new();
        scheduler.advance_by(ms(1_000), |_, fired| deadlines.push(fired.deadline));

        assert_eq!(deadlines, vec![ms(250), ms(500), ms(750), ms(1_000)]);
        assert_eq!(scheduler.deadline_of(id), Some(ms(1_250)));
        assert_eq!(scheduler.period_of(id), Some(ms(250)));
    }

    #[test]
    fn fires_in_deadline_order_with_ties_in_registration_order() {
        let mut scheduler: Scheduler<&str> = Scheduler::new();
        scheduler.schedule_once("late", ms(300));
        scheduler.schedule_once("first-tie", ms(100));
        scheduler.schedule_once("second-tie", ms(100));

        let mut order = Vec::new();
        scheduler.advance_by(ms(300), |_, fired| order.push(fired.key));
        assert_eq!(order, vec!["first-tie", "second-tie", "late"]);
    }

    #[test]
    fn cancel_removes_pending_task() {
        let mut scheduler: Scheduler<u8> = Scheduler::new();
        let id = scheduler.schedule_repeating(1, ms(10));
        assert!(scheduler.cancel(id));
        assert!(!scheduler.cancel(id));
        assert_eq!(scheduler.advance_by(ms(100), |_, _| {}), 0);
    }

    #[test]
    fn handler_may_cancel_the_repeating_task_it_is_handling() {
        let mut scheduler: Scheduler<u8> = Scheduler::new();
        scheduler.schedule_repeating(1, ms(10));
        let fired = scheduler.advance_by(ms(100), |scheduler, fired| {
            scheduler.cancel(fired.id);
        });
        assert_eq!(fired, 1);
        assert!(scheduler.is_empty());
    }

    #[test]
    fn tasks_scheduled_by_handler_fire_inside_the_window() {
        let mut scheduler: Scheduler<u8> = Scheduler::new();
        scheduler.schedule_once(1, ms(100));
        let mut keys = Vec::new();
        scheduler.advance_by(ms(300), |scheduler, fired| {
            keys.push(fired.key);
            if fired.key == 1 {
                scheduler.schedule_once(2, ms(50));
            }
        });
        assert_eq!(keys, vec![1, 2]);
    }

    #[test]
    fn counts_pending_tasks_by_key() {
        let mut scheduler: Scheduler<u8> = Scheduler::new();
        scheduler.schedule_repeating(1, ms(10));
        scheduler.schedule_once(2, ms(10));
        scheduler.schedule_once(2, ms(20));

        assert_eq!(scheduler.count_key(1), 1);
        assert_eq!(scheduler.count_key(2), 2);
        assert_eq!(scheduler.count_where(|key| *key > 0), 3);
        assert_eq!(scheduler.len(), 3);
        assert_eq!(scheduler.next_deadline(), Some(ms(10)));
    }

    #[test]
    fn zero_period_is_raised_to_minimum() {
        let mut scheduler: Scheduler<u8> = Scheduler::new();
        let id = scheduler.schedule_repeating(1, Duration::ZERO);
        assert_eq!(scheduler.period_of(id), Some(MIN_PERIOD));
        assert_eq!(scheduler.advance_by(ms(5), |_, _| {}), 5);
    }
}

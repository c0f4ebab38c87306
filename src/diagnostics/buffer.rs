// SPDX-License-Identifier: MPL-2.0
//! Fixed-size event log. A long session keeps only its most recent events.

use crate::config::{
    DEFAULT_DIAGNOSTICS_CAPACITY, MAX_DIAGNOSTICS_CAPACITY, MIN_DIAGNOSTICS_CAPACITY,
};
use std::collections::VecDeque;

/// How many diagnostic events are retained.
///
/// Out-of-range settings are pulled back into
/// [`MIN_DIAGNOSTICS_CAPACITY`]..=[`MAX_DIAGNOSTICS_CAPACITY`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BufferCapacity(usize);

impl BufferCapacity {
    #[must_use]
    pub fn new(value: usize) -> Self {
        Self(value.clamp(MIN_DIAGNOSTICS_CAPACITY, MAX_DIAGNOSTICS_CAPACITY))
    }

    #[must_use]
    pub fn value(self) -> usize {
        self.0
    }
}

impl Default for BufferCapacity {
    fn default() -> Self {
        Self(DEFAULT_DIAGNOSTICS_CAPACITY)
    }
}

/// Ring of the latest `capacity` entries, oldest first.
///
/// ```
/// use hackfolio::diagnostics::{BufferCapacity, CircularBuffer};
///
/// let mut rotations = CircularBuffer::new(BufferCapacity::new(10));
/// for index in 0..12 {
///     rotations.push(index);
/// }
/// assert_eq!(rotations.len(), 10);
/// assert_eq!(rotations.iter().next(), Some(&2));
/// ```
#[derive(Debug, Clone)]
pub struct CircularBuffer<T> {
    entries: VecDeque<T>,
    capacity: usize,
}

impl<T> CircularBuffer<T> {
    #[must_use]
    pub fn new(capacity: BufferCapacity) -> Self {
        let capacity = capacity.value();
        Self {
            entries: VecDeque::with_capacity(capacity),
            capacity,
        }
    }

    /// Appends `entry`, dropping the oldest one when full.
    pub fn push(&mut self, entry: T) {
        if self.entries.len() == self.capacity {
            self.entries.pop_front();
        }
        self.entries.push_back(entry);
    }

    pub fn iter(&self) -> impl Iterator<Item = &T> {
        self.entries.iter()
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    #[must_use]
    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn clear(&mut self) {
        self.entries.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn smallest() -> CircularBuffer<usize> {
        CircularBuffer::new(BufferCapacity::new(MIN_DIAGNOSTICS_CAPACITY))
    }

    #[test]
    fn capacity_setting_is_pulled_into_range() {
        assert_eq!(BufferCapacity::new(0).value(), MIN_DIAGNOSTICS_CAPACITY);
        assert_eq!(BufferCapacity::new(usize::MAX).value(), MAX_DIAGNOSTICS_CAPACITY);
        assert_eq!(BufferCapacity::new(250).value(), 250);
        assert_eq!(BufferCapacity::default().value(), DEFAULT_DIAGNOSTICS_CAPACITY);
    }

    #[test]
    fn full_log_keeps_the_latest_rotations() {
        let mut log = smallest();
        let total = MIN_DIAGNOSTICS_CAPACITY + 3;
        for index in 0..total {
            log.push(index);
        }

        assert_eq!(log.len(), MIN_DIAGNOSTICS_CAPACITY);
        let kept: Vec<usize> = log.iter().copied().collect();
        assert_eq!(kept, (3..total).collect::<Vec<_>>());
    }

    #[test]
    fn clearing_keeps_the_capacity() {
        let mut log = smallest();
        log.push(1);
        log.clear();
        assert!(log.is_empty());
        assert_eq!(log.capacity(), MIN_DIAGNOSTICS_CAPACITY);
    }
}

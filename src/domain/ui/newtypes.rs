// SPDX-License-Identifier: MPL-2.0
//! UI newtypes.
//!
//! This module provides type-safe wrappers for timing values used by the
//! carousels and the lightbox, ensuring they are always within valid ranges.

use std::time::Duration;

// =============================================================================
// Bounds
// =============================================================================

/// Carousel rotation interval bounds (1 s to 60 s).
pub mod rotation_bounds {
    /// Minimum rotation interval in milliseconds.
    pub const MIN_MS: u64 = 1_000;
    /// Maximum rotation interval in milliseconds.
    pub const MAX_MS: u64 = 60_000;
    /// Default rotation interval in milliseconds.
    pub const DEFAULT_MS: u64 = 4_000;
}

/// Fade duration bounds (full fade-out + fade-in cycle).
pub mod fade_bounds {
    /// Minimum fade duration in milliseconds.
    pub const MIN_MS: u64 = 100;
    /// Maximum fade duration in milliseconds.
    pub const MAX_MS: u64 = 4_000;
    /// Default fade duration in milliseconds.
    pub const DEFAULT_MS: u64 = 1_000;
}

/// Slide transition duration bounds.
pub mod transition_bounds {
    /// Minimum transition duration in milliseconds.
    pub const MIN_MS: u64 = 100;
    /// Maximum transition duration in milliseconds.
    pub const MAX_MS: u64 = 3_000;
    /// Default transition duration in milliseconds.
    pub const DEFAULT_MS: u64 = 700;
}

/// Lightbox slideshow interval bounds.
pub mod slideshow_bounds {
    /// Minimum slideshow interval in milliseconds.
    pub const MIN_MS: u64 = 1_000;
    /// Maximum slideshow interval in milliseconds.
    pub const MAX_MS: u64 = 30_000;
    /// Default slideshow interval in milliseconds.
    pub const DEFAULT_MS: u64 = 3_000;
}

/// Rare logo variant probability bounds.
pub mod rare_chance_bounds {
    /// Minimum probability (never).
    pub const MIN: f64 = 0.0;
    /// Maximum probability (every rotation).
    pub const MAX: f64 = 1.0;
    /// Default probability per rotation.
    pub const DEFAULT: f64 = 0.05;
}

// =============================================================================
// RotationInterval
// =============================================================================

/// Interval between two automatic carousel rotations.
///
/// # Example
///
/// ```
/// use hackfolio::domain::ui::RotationInterval;
///
/// let interval = RotationInterval::from_millis(4_000);
/// assert_eq!(interval.as_millis(), 4_000);
///
/// // Values outside range are clamped
/// assert_eq!(RotationInterval::from_millis(10).as_millis(), 1_000);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RotationInterval(u64);

impl RotationInterval {
    /// Creates an interval, clamping to the valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.clamp(rotation_bounds::MIN_MS, rotation_bounds::MAX_MS))
    }

    /// Returns the interval in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the interval as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for RotationInterval {
    fn default() -> Self {
        Self(rotation_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// FadeDuration
// =============================================================================

/// Duration of a full carousel fade (fade-out followed by fade-in).
///
/// The index swap happens at the midpoint, see [`FadeDuration::half`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FadeDuration(u64);

impl FadeDuration {
    /// Creates a fade duration, clamping to the valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.clamp(fade_bounds::MIN_MS, fade_bounds::MAX_MS))
    }

    /// Returns the duration in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Half of the fade: the delay between fade-out start and the index swap.
    #[must_use]
    pub fn half(self) -> Duration {
        Duration::from_millis(self.0 / 2)
    }
}

impl Default for FadeDuration {
    fn default() -> Self {
        Self(fade_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// TransitionDuration
// =============================================================================

/// Duration of a directional slide transition.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct TransitionDuration(u64);

impl TransitionDuration {
    /// Creates a transition duration, clamping to the valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.clamp(transition_bounds::MIN_MS, transition_bounds::MAX_MS))
    }

    /// Returns the duration in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the duration as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for TransitionDuration {
    fn default() -> Self {
        Self(transition_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// SlideshowInterval
// =============================================================================

/// Interval between two slides of the lightbox slideshow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SlideshowInterval(u64);

impl SlideshowInterval {
    /// Creates a slideshow interval, clamping to the valid range.
    #[must_use]
    pub fn from_millis(ms: u64) -> Self {
        Self(ms.clamp(slideshow_bounds::MIN_MS, slideshow_bounds::MAX_MS))
    }

    /// Returns the interval in milliseconds.
    #[must_use]
    pub fn as_millis(self) -> u64 {
        self.0
    }

    /// Returns the interval as a Duration.
    #[must_use]
    pub fn as_duration(self) -> Duration {
        Duration::from_millis(self.0)
    }
}

impl Default for SlideshowInterval {
    fn default() -> Self {
        Self(slideshow_bounds::DEFAULT_MS)
    }
}

// =============================================================================
// RareChance
// =============================================================================

/// Probability that a logo rotation lands on the rare variant.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct RareChance(f64);

impl RareChance {
    /// Creates a probability, clamping to `[0, 1]`. NaN becomes the default.
    #[must_use]
    pub fn new(value: f64) -> Self {
        if value.is_nan() {
            return Self::default();
        }
        Self(value.clamp(rare_chance_bounds::MIN, rare_chance_bounds::MAX))
    }

    /// Returns the raw probability.
    #[must_use]
    pub fn value(self) -> f64 {
        self.0
    }
}

impl Default for RareChance {
    fn default() -> Self {
        Self(rare_chance_bounds::DEFAULT)
    }
}

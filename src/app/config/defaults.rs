// SPDX-License-Identifier: MPL-2.0
//! Centralized default values for all configuration constants.
//!
//! Timing bounds live next to their newtypes in
//! [`crate::domain::ui::newtypes`]; the values here pick the defaults each
//! widget starts with and are checked against those bounds at compile time.
//!
//! # Categories
//!
//! - **Carousel**: hero rotation, fade, rotating logo
//! - **Transition**: project spotlight slide and auto-rotation
//! - **Lightbox**: slideshow pace
//! - **Diagnostics**: event buffer capacity
//! - **Frame tick**: how often the app advances the timer queue

use crate::domain::ui::newtypes::{
    fade_bounds, rare_chance_bounds, rotation_bounds, slideshow_bounds, transition_bounds,
};

// ==========================================================================
// Carousel Defaults
// ==========================================================================

/// Default hero carousel rotation interval (milliseconds).
pub const DEFAULT_ROTATION_INTERVAL_MS: u64 = rotation_bounds::DEFAULT_MS;

/// Default full fade duration (milliseconds).
pub const DEFAULT_FADE_MS: u64 = fade_bounds::DEFAULT_MS;

/// Default rotating logo interval (milliseconds).
pub const DEFAULT_LOGO_ROTATION_MS: u64 = 2_500;

/// Default probability that a logo rotation shows the rare variant.
pub const DEFAULT_RARE_CHANCE: f64 = rare_chance_bounds::DEFAULT;

/// Default rare viewing window after clicking the rare logo (seconds).
pub const DEFAULT_RARE_VIEW_SECS: u64 = 6;

/// Minimum rare viewing window (seconds).
pub const MIN_RARE_VIEW_SECS: u64 = 1;

/// Maximum rare viewing window (seconds).
pub const MAX_RARE_VIEW_SECS: u64 = 60;

// ==========================================================================
// Transition Defaults
// ==========================================================================

/// Default slide transition duration (milliseconds).
pub const DEFAULT_TRANSITION_MS: u64 = transition_bounds::DEFAULT_MS;

/// Default spotlight auto-rotation interval (milliseconds).
pub const DEFAULT_AUTO_ROTATE_MS: u64 = 6_000;

// ==========================================================================
// Lightbox Defaults
// ==========================================================================

/// Default slideshow interval (milliseconds).
pub const DEFAULT_SLIDESHOW_INTERVAL_MS: u64 = slideshow_bounds::DEFAULT_MS;

// ==========================================================================
// Diagnostics Defaults
// ==========================================================================

/// Default number of diagnostic events kept in memory.
pub const DEFAULT_DIAGNOSTICS_CAPACITY: usize = 1_000;

/// Minimum diagnostic buffer capacity.
pub const MIN_DIAGNOSTICS_CAPACITY: usize = 10;

/// Maximum diagnostic buffer capacity.
pub const MAX_DIAGNOSTICS_CAPACITY: usize = 10_000;

// ==========================================================================
// Frame Tick
// ==========================================================================

/// Interval of the frame tick that drives the timer queue (milliseconds).
pub const FRAME_TICK_MS: u64 = 16;

// ==========================================================================
// Compile-time Validation
// ==========================================================================

const _: () = {
    // Carousel validation
    assert!(DEFAULT_ROTATION_INTERVAL_MS >= rotation_bounds::MIN_MS);
    assert!(DEFAULT_ROTATION_INTERVAL_MS <= rotation_bounds::MAX_MS);
    assert!(DEFAULT_LOGO_ROTATION_MS >= rotation_bounds::MIN_MS);
    assert!(DEFAULT_LOGO_ROTATION_MS <= rotation_bounds::MAX_MS);
    assert!(DEFAULT_FADE_MS >= fade_bounds::MIN_MS);
    assert!(DEFAULT_FADE_MS <= fade_bounds::MAX_MS);
    assert!(DEFAULT_FADE_MS < DEFAULT_ROTATION_INTERVAL_MS);
    assert!(DEFAULT_FADE_MS < DEFAULT_LOGO_ROTATION_MS);
    assert!(DEFAULT_RARE_CHANCE >= rare_chance_bounds::MIN);
    assert!(DEFAULT_RARE_CHANCE <= rare_chance_bounds::MAX);
    assert!(MIN_RARE_VIEW_SECS > 0);
    assert!(DEFAULT_RARE_VIEW_SECS >= MIN_RARE_VIEW_SECS);
    assert!(DEFAULT_RARE_VIEW_SECS <= MAX_RARE_VIEW_SECS);

    // Transition validation
    assert!(DEFAULT_TRANSITION_MS >= transition_bounds::MIN_MS);
    assert!(DEFAULT_TRANSITION_MS <= transition_bounds::MAX_MS);
    assert!(DEFAULT_AUTO_ROTATE_MS >= rotation_bounds::MIN_MS);
    assert!(DEFAULT_AUTO_ROTATE_MS <= rotation_bounds::MAX_MS);
    assert!(DEFAULT_TRANSITION_MS < DEFAULT_AUTO_ROTATE_MS);

    // Lightbox validation
    assert!(DEFAULT_SLIDESHOW_INTERVAL_MS >= slideshow_bounds::MIN_MS);
    assert!(DEFAULT_SLIDESHOW_INTERVAL_MS <= slideshow_bounds::MAX_MS);

    // Diagnostics validation
    assert!(MIN_DIAGNOSTICS_CAPACITY > 0);
    assert!(MAX_DIAGNOSTICS_CAPACITY >= MIN_DIAGNOSTICS_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_CAPACITY >= MIN_DIAGNOSTICS_CAPACITY);
    assert!(DEFAULT_DIAGNOSTICS_CAPACITY <= MAX_DIAGNOSTICS_CAPACITY);

    // The tick must be finer than the shortest animation half.
    assert!(FRAME_TICK_MS > 0);
    assert!(FRAME_TICK_MS * 2 < fade_bounds::MIN_MS / 2);
};

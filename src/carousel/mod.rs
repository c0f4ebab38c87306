// SPDX-License-Identifier: MPL-2.0
//! Rotating widgets.
//!
//! - [`engine`]: timed fade rotation of one slot with a randomized next-index policy
//! - [`transition`]: directional slide transitions with a re-entrancy lock
//! - [`rare_variant`]: the rotating team logo and its rare variant
//! - [`synced`]: an engine that follows and leads peers over the event bus
//!
//! None of these types own a timer. They register tasks on the shared
//! [`UiScheduler`](crate::timing::UiScheduler) and react when the owner
//! routes the fired tasks back to them.

pub mod engine;
pub mod rare_variant;
pub mod selection;
pub mod synced;
pub mod transition;

pub use engine::{AdvanceOutcome, CarouselEngine, FadePhase};
pub use rare_variant::{LogoClick, LogoDisplay, RareVariantState, RotatingLogo};
pub use synced::SyncedCarousel;
pub use transition::{
    Direction, GoToOutcome, IgnoreReason, Panels, TransitionController, TransitionState,
};

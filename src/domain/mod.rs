// SPDX-License-Identifier: MPL-2.0
//! Domain layer: pure types with no framework dependencies.
//!
//! - [`media`]: media records, identifiers and view criteria
//! - [`portfolio`]: hackathons, team roster and stats
//! - [`ui`]: clamped timing value objects used by the widgets
//!
//! Nothing in this layer knows about Iced, TOML or the scheduler.

pub mod media;
pub mod portfolio;
pub mod ui;

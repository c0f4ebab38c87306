// SPDX-License-Identifier: MPL-2.0
//! Query services (read-side).
//!
//! These functions never modify their inputs; they derive what the UI shows
//! from the loaded collection.
//!
//! # Available Services
//!
//! - [`view`]: filter/sort pipeline producing the gallery view

pub mod view;

pub use view::{available_groups, view};

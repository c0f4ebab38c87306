// SPDX-License-Identifier: MPL-2.0
//! Gallery view selection.
//!
//! Several renderers (grid, timeline, grouped, fun) present the same derived
//! view. The selector itself only stores the active [`GalleryMode`]; the
//! [`GalleryUnit`] ties mode, view criteria and lightbox together.

pub mod layout;
pub mod mode;
pub mod unit;

pub use layout::{layout, Layout, Section, SectionHeader, Tile};
pub use mode::GalleryMode;
pub use unit::GalleryUnit;

// SPDX-License-Identifier: MPL-2.0
//! User interface components.
//!
//! Components follow the Elm-style "state down, messages up" pattern: each
//! one takes a `ViewContext` borrowing core state and emits its own
//! `Message`, which the application maps into its top-level message.
//!
//! # Pages
//!
//! - [`hero`] - Rotating logo and the synchronized hero carousels
//! - [`spotlight`] - Sliding project spotlight
//! - [`gallery`] - Filterable gallery in four layouts
//! - [`lightbox`] - Full-size overlay above a gallery
//! - [`hackathons`] - Event list and per-event gallery
//! - [`team`] - Stats and roster
//!
//! # Shared Infrastructure
//!
//! - [`navbar`] - Screen tabs and app-level controls
//! - [`notifications`] - Toasts for user feedback
//! - [`media`] - Rendering of a single media item
//! - [`styles`] - Centralized widget styles
//! - [`design_tokens`] - Design system constants
//! - [`theming`] - Light/Dark/System theme mode management

pub mod design_tokens;
pub mod gallery;
pub mod hackathons;
pub mod hero;
pub mod lightbox;
pub mod media;
pub mod navbar;
pub mod notifications;
pub mod spotlight;
pub mod styles;
pub mod team;
pub mod theming;

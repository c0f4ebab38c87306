// SPDX-License-Identifier: MPL-2.0
//! `hackfolio` is a hackathon team showcase built with the Iced GUI framework.
//!
//! The interesting part is toolkit independent: timed carousels with
//! non-overlapping fades, carousels kept in step through an event bus, an
//! animated transition controller, and a filterable gallery with a
//! wrap-around lightbox. All of it runs on a virtual clock so it can be
//! driven deterministically from tests; the Iced layer only renders state
//! and forwards input.

pub mod app;
pub mod application;
pub mod carousel;
pub mod catalog;
pub mod diagnostics;
pub mod domain;
pub mod error;
pub mod events;
pub mod gallery;
pub mod i18n;
pub mod lightbox;
pub mod timing;
pub mod ui;

pub use app::config;

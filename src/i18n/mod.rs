// SPDX-License-Identifier: MPL-2.0
//! Internationalization (i18n) support for the application.
//!
//! Translations are Fluent `.ftl` files embedded at build time from
//! `assets/i18n/`. The locale is resolved from the CLI, then the config file,
//! then the OS, falling back to `en-US`. Missing keys render as
//! `MISSING: <key>` so gaps are visible without crashing the UI.

pub mod fluent;

pub use fluent::{I18n, DEFAULT_LOCALE};

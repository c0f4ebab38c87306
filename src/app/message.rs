// SPDX-License-Identifier: MPL-2.0
//! Top-level messages and runtime flags for the application.

use crate::gallery::GalleryMode;
use crate::lightbox::LightboxKey;
use crate::ui::{gallery, hackathons, hero, lightbox, navbar, notifications, spotlight};
use std::path::PathBuf;
use std::time::Instant;

/// Top-level messages consumed by `App::update`. The variants forward
/// component messages while keeping a single update entrypoint.
#[derive(Debug, Clone)]
pub enum Message {
    Navbar(navbar::Message),
    Hero(hero::Message),
    Spotlight(spotlight::Message),
    Gallery(gallery::Message),
    Hackathons(hackathons::Message),
    Lightbox(lightbox::Message),
    Notification(notifications::Message),
    /// A navigation key not captured by a focused widget.
    Key(LightboxKey),
    /// Frame tick driving the virtual clock.
    Tick(Instant),
}

/// Runtime flags passed in from the CLI.
#[derive(Debug, Default)]
pub struct Flags {
    /// Optional locale override in BCP-47 form (e.g. `fr`, `en-US`).
    pub lang: Option<String>,
    /// Optional dataset replacing the bundled catalog.
    pub catalog: Option<PathBuf>,
    /// Optional config directory override (for settings.toml).
    /// Takes precedence over `HACKFOLIO_CONFIG_DIR`.
    pub config_dir: Option<String>,
    /// Optional data directory override (for diagnostics exports).
    /// Takes precedence over `HACKFOLIO_DATA_DIR`.
    pub data_dir: Option<String>,
    /// Initial gallery layout, overriding the configured default.
    pub mode: Option<GalleryMode>,
}

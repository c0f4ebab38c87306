// SPDX-License-Identifier: MPL-2.0
//! Gallery rendering modes.

use crate::error::Error;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Which renderer the gallery uses. The view and lightbox are shared by all.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum GalleryMode {
    #[default]
    Grid,
    Timeline,
    Grouped,
    Fun,
}

impl GalleryMode {
    /// All modes, in the order the mode switcher lists them.
    pub const ALL: [GalleryMode; 4] = [
        GalleryMode::Grid,
        GalleryMode::Timeline,
        GalleryMode::Grouped,
        GalleryMode::Fun,
    ];

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Grid => "grid",
            Self::Timeline => "timeline",
            Self::Grouped => "grouped",
            Self::Fun => "fun",
        }
    }

    /// Returns the i18n key of the mode switcher label.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Self::Grid => "gallery-mode-grid",
            Self::Timeline => "gallery-mode-timeline",
            Self::Grouped => "gallery-mode-grouped",
            Self::Fun => "gallery-mode-fun",
        }
    }
}

impl fmt::Display for GalleryMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for GalleryMode {
    type Err = Error;

    fn from_str(value: &str) -> Result<Self, Self::Err> {
        let value = value.trim();
        Self::ALL
            .into_iter()
            .find(|mode| mode.as_str().eq_ignore_ascii_case(value))
            .ok_or_else(|| Error::Config(format!("unknown gallery mode '{value}'")))
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Media record types.
//!
//! A [`MediaItem`] is a photo, project shot or meme taken at one hackathon.
//! Every item carries a denormalized copy of its hackathon ([`GroupRef`]) so
//! the filter/sort pipeline never needs to look the group up.

use chrono::{Datelike, NaiveDate};
use std::fmt;
use std::path::PathBuf;

// =============================================================================
// Identifiers
// =============================================================================

/// Stable identifier of a group (a hackathon or event).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct GroupId(String);

impl GroupId {
    /// Creates a group identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for GroupId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<&str> for GroupId {
    fn from(value: &str) -> Self {
        Self::new(value)
    }
}

/// Stable identifier of a media item.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct MediaId(String);

impl MediaId {
    /// Creates a media identifier from any string-like value.
    pub fn new(id: impl Into<String>) -> Self {
        Self(id.into())
    }

    /// Builds the identifier used when the dataset does not name an item:
    /// `<group>/<kind>/<position within group>`.
    #[must_use]
    pub fn derived(group: &GroupId, kind: MediaKind, index: usize) -> Self {
        Self(format!("{}/{}/{}", group, kind.slug(), index))
    }

    /// Returns the identifier as a string slice.
    #[must_use]
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl fmt::Display for MediaId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

// =============================================================================
// Media Kind & Source
// =============================================================================

/// What a media item depicts.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MediaKind {
    /// A photo taken at the event.
    Photo,
    /// A screenshot or cover image of a project built at the event.
    Project,
    /// A meme born at the event.
    Meme,
}

impl MediaKind {
    /// Short lowercase name used in derived identifiers.
    #[must_use]
    pub fn slug(self) -> &'static str {
        match self {
            Self::Photo => "photo",
            Self::Project => "project",
            Self::Meme => "meme",
        }
    }
}

/// Where the image bytes of a media item live.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MediaSource {
    /// A local file path.
    Path(PathBuf),
    /// A remote URL; rendered as a placeholder since the app does no network I/O.
    Url(String),
}

impl MediaSource {
    /// Classifies a raw `src` string from the dataset.
    #[must_use]
    pub fn parse(raw: &str) -> Self {
        let trimmed = raw.trim();
        if trimmed.starts_with("http://") || trimmed.starts_with("https://") {
            Self::Url(trimmed.to_string())
        } else {
            Self::Path(PathBuf::from(trimmed))
        }
    }

    /// Returns the local path, if any.
    #[must_use]
    pub fn as_path(&self) -> Option<&std::path::Path> {
        match self {
            Self::Path(path) => Some(path.as_path()),
            Self::Url(_) => None,
        }
    }
}

impl fmt::Display for MediaSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Path(path) => write!(f, "{}", path.display()),
            Self::Url(url) => f.write_str(url),
        }
    }
}

// =============================================================================
// Group Reference
// =============================================================================

/// Denormalized metadata of the group (hackathon) an item belongs to.
///
/// `date` is the chronological sort key of every item in the group.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GroupRef {
    pub id: GroupId,
    pub name: String,
    pub date: NaiveDate,
    pub location: String,
    pub achievement: Option<String>,
}

impl GroupRef {
    /// Calendar year of the event, used by the timeline renderer.
    #[must_use]
    pub fn year(&self) -> i32 {
        self.date.year()
    }
}

// =============================================================================
// Media Item
// =============================================================================

/// An immutable media record.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MediaItem {
    pub id: MediaId,
    pub kind: MediaKind,
    pub src: MediaSource,
    pub caption: String,
    pub group: GroupRef,
}

impl MediaItem {
    /// Identifier of the group this item belongs to.
    #[must_use]
    pub fn group_id(&self) -> &GroupId {
        &self.group.id
    }

    /// Chronological key inherited from the group.
    #[must_use]
    pub fn sort_key(&self) -> NaiveDate {
        self.group.date
    }
}

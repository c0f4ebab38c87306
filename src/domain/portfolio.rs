// SPDX-License-Identifier: MPL-2.0
//! Team portfolio records: hackathons, members and headline numbers.

use super::media::{GroupId, GroupRef, MediaItem};
use serde::{Deserialize, Serialize};

/// One hackathon the team attended, with the media taken there.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Hackathon {
    pub group: GroupRef,
    pub description: String,
    pub photos: Vec<MediaItem>,
    pub projects: Vec<MediaItem>,
    pub memes: Vec<MediaItem>,
}

impl Hackathon {
    #[must_use]
    pub fn id(&self) -> &GroupId {
        &self.group.id
    }

    /// Returns `true` if the team placed or won a prize.
    #[must_use]
    pub fn has_achievement(&self) -> bool {
        self.group.achievement.is_some()
    }

    /// Photos and memes, in that order.
    pub fn gallery_items(&self) -> impl Iterator<Item = &MediaItem> {
        self.photos.iter().chain(self.memes.iter())
    }
}

/// A member of the team roster.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TeamMember {
    pub id: String,
    pub name: String,
    pub role: String,
    #[serde(default)]
    pub github: Option<String>,
    #[serde(default)]
    pub photo: Option<String>,
}

/// Headline numbers shown on the landing view.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct TeamStats {
    pub hackathons_attended: u32,
    pub wins: u32,
    pub projects_built: u32,
    pub team_size: u32,
}

// SPDX-License-Identifier: MPL-2.0
//! Media collection port definition.
//!
//! The gallery, carousels and lightbox only ever read the collection through
//! [`MediaCollectionProvider`]. The shipped adapter is
//! [`Catalog`](crate::catalog::Catalog), backed by a TOML dataset.

use crate::domain::media::{GroupId, MediaItem};
use crate::domain::portfolio::{Hackathon, TeamMember, TeamStats};
use chrono::NaiveDate;

/// Read-only access to the team's media and roster.
///
/// Media lists keep dataset order: hackathons in declaration order, and
/// within a hackathon the items in declaration order.
pub trait MediaCollectionProvider {
    /// Every photo, across all hackathons.
    fn get_all_photos(&self) -> &[MediaItem];

    /// Every project shot, across all hackathons.
    fn get_all_projects(&self) -> &[MediaItem];

    /// Every meme, across all hackathons.
    fn get_all_memes(&self) -> &[MediaItem];

    /// Hackathons in dataset order.
    fn get_all_hackathons(&self) -> &[Hackathon];

    /// Hackathons, newest first.
    fn get_hackathons_by_date(&self) -> Vec<&Hackathon>;

    fn get_hackathon_by_id(&self, id: &GroupId) -> Option<&Hackathon>;

    /// First hackathon held on `date`.
    fn get_hackathon_by_date(&self, date: NaiveDate) -> Option<&Hackathon>;

    fn get_all_members(&self) -> &[TeamMember];

    fn get_member_by_id(&self, id: &str) -> Option<&TeamMember>;

    fn get_stats(&self) -> TeamStats;

    /// Photos followed by memes: the collection the gallery shows.
    fn gallery_collection(&self) -> Vec<MediaItem> {
        self.get_all_photos()
            .iter()
            .chain(self.get_all_memes())
            .cloned()
            .collect()
    }
}

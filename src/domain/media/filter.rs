// SPDX-License-Identifier: MPL-2.0
//! View criteria for the gallery.
//!
//! # Available Criteria
//!
//! - [`GroupFilter`]: Keep only the items of one hackathon, or everything
//! - [`SortOrder`]: Chronological order of the derived view

use super::types::{GroupId, MediaItem};
use serde::{Deserialize, Serialize};

// =============================================================================
// Group Filter
// =============================================================================

/// Filter by group.
///
/// `selected_group == None` means "no filter, show all".
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct GroupFilter {
    pub selected_group: Option<GroupId>,
}

impl GroupFilter {
    /// Creates a filter that matches every item.
    #[must_use]
    pub fn all() -> Self {
        Self::default()
    }

    /// Creates a filter pinned to one group.
    #[must_use]
    pub fn scoped(group: GroupId) -> Self {
        Self {
            selected_group: Some(group),
        }
    }

    /// Returns `true` if the item passes the filter.
    #[must_use]
    pub fn matches(&self, item: &MediaItem) -> bool {
        self.selected_group
            .as_ref()
            .is_none_or(|group| item.group_id() == group)
    }

    /// Returns `true` if a group is selected.
    #[must_use]
    pub fn is_active(&self) -> bool {
        self.selected_group.is_some()
    }

    /// Resets the filter to "show all".
    pub fn clear(&mut self) {
        self.selected_group = None;
    }
}

// =============================================================================
// Sort Order
// =============================================================================

/// Chronological order of the view, keyed on the group's date.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Default)]
#[serde(rename_all = "kebab-case")]
pub enum SortOrder {
    #[default]
    Newest,
    Oldest,
}

impl SortOrder {
    /// All orders, in the order the sort picker lists them.
    pub const ALL: [SortOrder; 2] = [SortOrder::Newest, SortOrder::Oldest];

    /// Returns the opposite order.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Newest => Self::Oldest,
            Self::Oldest => Self::Newest,
        }
    }

    /// Returns the i18n key of the label shown in the sort picker.
    #[must_use]
    pub fn i18n_key(self) -> &'static str {
        match self {
            Self::Newest => "gallery-sort-newest",
            Self::Oldest => "gallery-sort-oldest",
        }
    }
}

// =============================================================================
// Tests
// =============================================================================

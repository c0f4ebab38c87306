// SPDX-License-Identifier: MPL-2.0
//! Filter/sort pipeline producing the gallery view.
//!
//! Every gallery renderer and the lightbox work on the output of [`view`];
//! indices handed around the UI are positions in that output.

use crate::domain::media::{GroupFilter, GroupRef, MediaItem, SortOrder};
use std::cmp::Reverse;

/// Derives the ordered view of `collection`.
///
/// Items outside the filter are dropped, the rest are sorted by their
/// group's date. The sort is stable, so items sharing a date keep their
/// collection order. A filter naming an unknown group yields an empty view.
#[must_use]
pub fn view(collection: &[MediaItem], filter: &GroupFilter, sort: SortOrder) -> Vec<MediaItem> {
    let mut items: Vec<MediaItem> = collection
        .iter()
        .filter(|item| filter.matches(item))
        .cloned()
        .collect();
    match sort {
        SortOrder::Newest => items.sort_by_key(|item| Reverse(item.sort_key())),
        SortOrder::Oldest => items.sort_by_key(MediaItem::sort_key),
    }
    items
}

/// Distinct groups present in `collection`, newest first.
///
/// Groups sharing a date keep their first-appearance order.
#[must_use]
pub fn available_groups(collection: &[MediaItem]) -> Vec<GroupRef> {
    let mut groups: Vec<GroupRef> = Vec::new();
    for item in collection {
        if !groups.iter().any(|group| group.id == item.group.id) {
            groups.push(item.group.clone());
        }
    }
    groups.sort_by_key(|group| Reverse(group.date));
    groups
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::media::{GroupId, MediaId, MediaKind, MediaSource};
    use chrono::NaiveDate;

    fn item(id: &str, group: &str, year: i32) -> MediaItem {
        MediaItem {
            id: MediaId::new(id),
            kind: MediaKind::Photo,
            src: MediaSource::parse(&format!("{id}.jpg")),
            caption: id.to_string(),
            group: GroupRef {
                id: GroupId::new(group),
                name: group.to_uppercase(),
                date: NaiveDate::from_ymd_opt(year, 6, 1).expect("valid date"),
                location: String::new(),
                achievement: None,
            },
        }
    }

    fn ids(items: &[MediaItem]) -> Vec<&str> {
        items.iter().map(|item| item.id.as_str()).collect()
    }

    fn sample() -> Vec<MediaItem> {
        vec![item("A", "g1", 2022), item("B", "g2", 2023), item("C", "g1", 2021)]
    }

    #[test]
    fn filter_then_sort_newest() {
        let view = view(&sample(), &GroupFilter::scoped(GroupId::new("g1")), SortOrder::Newest);
        assert_eq!(ids(&view), vec!["A", "C"]);
    }

    #[test]
    fn unfiltered_oldest_first() {
        let view = view(&sample(), &GroupFilter::all(), SortOrder::Oldest);
        assert_eq!(ids(&view), vec!["C", "A", "B"]);
    }

    #[test]
    fn unknown_group_yields_empty_view() {
        let view = view(&sample(), &GroupFilter::scoped(GroupId::new("nope")), SortOrder::Newest);
        assert!(view.is_empty());
    }

    #[test]
    fn ties_keep_collection_order_in_both_directions() {
        let collection = vec![
            item("x1", "g", 2020),
            item("y", "h", 2024),
            item("x2", "g", 2020),
            item("x3", "g", 2020),
        ];
        let newest = view(&collection, &GroupFilter::all(), SortOrder::Newest);
        assert_eq!(ids(&newest), vec!["y", "x1", "x2", "x3"]);
        let oldest = view(&collection, &GroupFilter::all(), SortOrder::Oldest);
        assert_eq!(ids(&oldest), vec!["x1", "x2", "x3", "y"]);
    }

    #[test]
    fn view_is_pure() {
        let collection = sample();
        let snapshot = collection.clone();
        let filters = [
            GroupFilter::all(),
            GroupFilter::scoped(GroupId::new("g1")),
            GroupFilter::scoped(GroupId::new("g2")),
            GroupFilter::scoped(GroupId::new("nope")),
        ];
        for filter in &filters {
            for sort in SortOrder::ALL {
                let first = view(&collection, filter, sort);
                let second = view(&collection, filter, sort);
                assert_eq!(first, second, "{filter:?} {sort:?}");
                assert_eq!(collection, snapshot);
            }
        }
    }

    #[test]
    fn empty_collection_yields_empty_view() {
        assert!(view(&[], &GroupFilter::all(), SortOrder::Newest).is_empty());
    }

    #[test]
    fn available_groups_are_distinct_and_newest_first() {
        let groups = available_groups(&sample());
        let names: Vec<&str> = groups.iter().map(|group| group.id.as_str()).collect();
        assert_eq!(names, vec!["g2", "g1"]);
    }
}

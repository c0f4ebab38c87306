// SPDX-License-Identifier: MPL-2.0
//! Mountable gallery: collection, view criteria, renderer choice, lightbox.

use super::layout::{layout, Layout};
use super::mode::GalleryMode;
use crate::application::query::{available_groups, view};
use crate::domain::media::{GroupFilter, GroupId, GroupRef, MediaItem, SortOrder};
use crate::domain::ui::SlideshowInterval;
use crate::error::NavigationError;
use crate::lightbox::Lightbox;
use crate::timing::{Fired, TimerKey, UiScheduler, WidgetId};

/// A gallery instance as mounted by a page.
///
/// The view is recomputed only when the filter or sort actually change.
/// Every recomputation closes the lightbox, since an open index would
/// otherwise point at a different item.
#[derive(Debug, Clone)]
pub struct GalleryUnit {
    collection: Vec<MediaItem>,
    mode: GalleryMode,
    filter: GroupFilter,
    sort: SortOrder,
    scope: Option<GroupId>,
    view: Vec<MediaItem>,
    slideshow_interval: SlideshowInterval,
    lightbox: Lightbox,
}

impl GalleryUnit {
    /// Mounts a gallery. With a `scope`, the filter is pinned to that group.
    #[must_use]
    pub fn new(
        id: WidgetId,
        collection: Vec<MediaItem>,
        mode: GalleryMode,
        scope: Option<GroupId>,
    ) -> Self {
        let filter = scope.clone().map_or_else(GroupFilter::all, GroupFilter::scoped);
        let sort = SortOrder::default();
        let view = view(&collection, &filter, sort);
        let slideshow_interval = SlideshowInterval::default();
        let lightbox = Lightbox::new(id, view.len(), slideshow_interval);
        Self {
            collection,
            mode,
            filter,
            sort,
            scope,
            view,
            slideshow_interval,
            lightbox,
        }
    }

    /// Sets the lightbox slideshow pace. Mount time only: the lightbox must
    /// still be closed so no slideshow task is left behind.
    #[must_use]
    pub fn with_slideshow_interval(mut self, interval: SlideshowInterval) -> Self {
        debug_assert!(!self.lightbox.is_open(), "lightbox replaced while open");
        self.slideshow_interval = interval;
        self.lightbox = Lightbox::new(self.id(), self.view.len(), interval);
        self
    }

    /// Sets the initial sort order. Mount time only: the lightbox must still
    /// be closed.
    #[must_use]
    pub fn with_sort(mut self, sort: SortOrder) -> Self {
        debug_assert!(!self.lightbox.is_open(), "lightbox replaced while open");
        self.sort = sort;
        self.view = view(&self.collection, &self.filter, sort);
        self.lightbox = Lightbox::new(self.id(), self.view.len(), self.slideshow_interval);
        self
    }

    #[must_use]
    pub fn id(&self) -> WidgetId {
        self.lightbox.id()
    }

    #[must_use]
    pub fn view(&self) -> &[MediaItem] {
        &self.view
    }

    #[must_use]
    pub fn collection(&self) -> &[MediaItem] {
        &self.collection
    }

    #[must_use]
    pub fn mode(&self) -> GalleryMode {
        self.mode
    }

    /// Switches renderer. Filter, sort and lightbox are untouched.
    pub fn set_mode(&mut self, mode: GalleryMode) {
        self.mode = mode;
    }

    #[must_use]
    pub fn filter(&self) -> &GroupFilter {
        &self.filter
    }

    #[must_use]
    pub fn sort(&self) -> SortOrder {
        self.sort
    }

    #[must_use]
    pub fn scope(&self) -> Option<&GroupId> {
        self.scope.as_ref()
    }

    /// Changes the group filter. Ignored when the unit is scoped.
    /// Returns `true` if the view was recomputed.
    pub fn set_filter(&mut self, filter: GroupFilter, scheduler: &mut UiScheduler) -> bool {
        if self.scope.is_some() {
            tracing::debug!(unit = %self.id(), "filter change ignored: gallery is scoped");
            return false;
        }
        if filter == self.filter {
            return false;
        }
        self.filter = filter;
        self.recompute(scheduler);
        true
    }

    /// Shows every group again.
    pub fn clear_filter(&mut self, scheduler: &mut UiScheduler) -> bool {
        self.set_filter(GroupFilter::all(), scheduler)
    }

    /// Changes the sort order. Returns `true` if the view was recomputed.
    pub fn set_sort(&mut self, sort: SortOrder, scheduler: &mut UiScheduler) -> bool {
        if sort == self.sort {
            return false;
        }
        self.sort = sort;
        self.recompute(scheduler);
        true
    }

    fn recompute(&mut self, scheduler: &mut UiScheduler) {
        self.view = view(&self.collection, &self.filter, self.sort);
        self.lightbox.sync_view(self.view.len(), scheduler);
        tracing::debug!(unit = %self.id(), items = self.view.len(), "gallery view recomputed");
    }

    /// Groups offered by the filter picker.
    #[must_use]
    pub fn available_groups(&self) -> Vec<GroupRef> {
        available_groups(&self.collection)
    }

    /// Returns `true` when a filter is active but matches nothing.
    #[must_use]
    pub fn shows_no_results(&self) -> bool {
        self.view.is_empty() && self.filter.is_active()
    }

    /// Tile arrangement for the active mode.
    #[must_use]
    pub fn layout(&self) -> Layout {
        layout(self.mode, &self.view)
    }

    #[must_use]
    pub fn lightbox(&self) -> &Lightbox {
        &self.lightbox
    }

    /// Mutable lightbox access for navigation, keyboard and click handling.
    /// The view length it navigates is kept in sync by the unit.
    pub fn lightbox_mut(&mut self) -> &mut Lightbox {
        &mut self.lightbox
    }

    /// Opens the lightbox on a view index taken from a tile.
    pub fn open(&mut self, index: usize) -> Result<(), NavigationError> {
        self.lightbox.open(index)
    }

    /// Item shown in the lightbox.
    #[must_use]
    pub fn current_item(&self) -> Option<&MediaItem> {
        self.lightbox.index().and_then(|index| self.view.get(index))
    }

    pub fn handle_timer(&mut self, fired: Fired<TimerKey>) -> bool {
        self.lightbox.handle_timer(fired)
    }

    pub fn unmount(&mut self, scheduler: &mut UiScheduler) {
        self.lightbox.close(scheduler);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::media::{MediaId, MediaKind, MediaSource};
    use chrono::NaiveDate;

    const ID: WidgetId = WidgetId(30);

    fn item(id: &str, group: &str, year: i32) -> MediaItem {
        MediaItem {
            id: MediaId::new(id),
            kind: MediaKind::Photo,
            src: MediaSource::parse("x.jpg"),
            caption: String::new(),
            group: GroupRef {
                id: GroupId::new(group),
                name: group.to_string(),
                date: NaiveDate::from_ymd_opt(year, 1, 1).expect("valid date"),
                location: String::new(),
                achievement: None,
            },
        }
    }

    fn unit() -> GalleryUnit {
        GalleryUnit::new(
            ID,
            vec![item("A", "g1", 2022), item("B", "g2", 2023), item("C", "g1", 2021)],
            GalleryMode::Grid,
            None,
        )
    }

    fn ids(unit: &GalleryUnit) -> Vec<&str> {
        unit.view().iter().map(|item| item.id.as_str()).collect()
    }

    #[test]
    fn mount_time_builders_keep_an_idle_lightbox() {
        let unit = unit()
            .with_sort(SortOrder::Oldest)
            .with_slideshow_interval(SlideshowInterval::from_millis(1_500));
        assert_eq!(ids(&unit), vec!["C", "A", "B"]);
        assert!(!unit.lightbox().is_open());
    }

    #[test]
    #[cfg(debug_assertions)]
    #[should_panic(expected = "lightbox replaced while open")]
    fn rebuilding_an_open_lightbox_is_rejected() {
        let mut scheduler = UiScheduler::new();
        let mut unit = unit();
        unit.lightbox_mut()
            .toggle_slideshow(&mut scheduler)
            .expect("view is not empty");
        let _ = unit.with_sort(SortOrder::Oldest);
    }

    #[test]
    fn initial_view_is_newest_first() {
        assert_eq!(ids(&unit()), vec!["B", "A", "C"]);
    }

    #[test]
    fn filtered_lightbox_navigation_wraps_within_view() {
        let mut scheduler = UiScheduler::new();
        let mut unit = unit();
        unit.set_filter(GroupFilter::scoped(GroupId::new("g1")), &mut scheduler);
        assert_eq!(ids(&unit), vec!["A", "C"]);

        unit.open(1).expect("in range");
        assert_eq!(unit.current_item().map(|item| item.id.as_str()), Some("C"));
        assert_eq!(unit.lightbox_mut().next(), Some(0));
        assert_eq!(unit.lightbox_mut().previous(), Some(1));
    }

    #[test]
    fn filter_change_closes_lightbox() {
        let mut scheduler = UiScheduler::new();
        let mut unit = unit();
        unit.open(2).expect("in range");
        unit.lightbox_mut().toggle_slideshow(&mut scheduler).expect("open");

        assert!(unit.set_filter(GroupFilter::scoped(GroupId::new("g2")), &mut scheduler));
        assert!(!unit.lightbox().is_open());
        assert!(scheduler.is_empty());
        assert!(unit.open(1).is_err());
    }

    #[test]
    fn unchanged_criteria_keep_lightbox_open() {
        let mut scheduler = UiScheduler::new();
        let mut unit = unit();
        unit.open(0).expect("in range");
        assert!(!unit.set_sort(SortOrder::Newest, &mut scheduler));
        assert!(!unit.set_filter(GroupFilter::all(), &mut scheduler));
        assert!(unit.lightbox().is_open());
    }

    #[test]
    fn mode_switch_keeps_filter_sort_and_lightbox() {
        let mut scheduler = UiScheduler::new();
        let mut unit = unit();
        unit.set_sort(SortOrder::Oldest, &mut scheduler);
        unit.open(1).expect("in range");
        unit.set_mode(GalleryMode::Timeline);
        assert_eq!(unit.sort(), SortOrder::Oldest);
        assert_eq!(unit.lightbox().index(), Some(1));
        assert_eq!(unit.layout().mode, GalleryMode::Timeline);
    }

    #[test]
    fn unknown_group_shows_no_results_until_cleared() {
        let mut scheduler = UiScheduler::new();
        let mut unit = unit();
        unit.set_filter(GroupFilter::scoped(GroupId::new("missing")), &mut scheduler);
        assert!(unit.shows_no_results());
        assert_eq!(unit.layout().tile_count(), 0);
        unit.clear_filter(&mut scheduler);
        assert!(!unit.shows_no_results());
        assert_eq!(unit.view().len(), 3);
    }

    #[test]
    fn scoped_unit_pins_its_filter() {
        let mut scheduler = UiScheduler::new();
        let mut unit = GalleryUnit::new(
            ID,
            unit().collection().to_vec(),
            GalleryMode::Grouped,
            Some(GroupId::new("g2")),
        );
        assert_eq!(ids(&unit), vec!["B"]);
        assert!(!unit.clear_filter(&mut scheduler));
        assert_eq!(ids(&unit), vec!["B"]);
    }

    #[test]
    fn available_groups_are_newest_first() {
        let groups: Vec<String> = unit()
            .available_groups()
            .into_iter()
            .map(|group| group.id.to_string())
            .collect();
        assert_eq!(groups, vec!["g2", "g1"]);
    }
}

// SPDX-License-Identifier: MPL-2.0
//! Layout models for each gallery mode.
//!
//! A layout is a list of sections, each holding tiles. Every tile carries
//! the position of its item in the view, so a click on any renderer opens
//! the lightbox on the same index regardless of how tiles are arranged.

use super::mode::GalleryMode;
use crate::domain::media::{GroupRef, MediaItem};

/// Largest tilt applied by the fun layout, in degrees.
pub const MAX_TILT_DEG: f32 = 4.0;

/// One in this many fun tiles spans two columns.
const WIDE_TILE_EVERY: u64 = 7;

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Tile {
    /// Position of the item in the view.
    pub index: usize,
    pub tilt_deg: f32,
    pub wide: bool,
}

impl Tile {
    fn plain(index: usize) -> Self {
        Self {
            index,
            tilt_deg: 0.0,
            wide: false,
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum SectionHeader {
    None,
    Year(i32),
    Group(GroupRef),
}

#[derive(Debug, Clone, PartialEq)]
pub struct Section {
    pub header: SectionHeader,
    pub tiles: Vec<Tile>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Layout {
    pub mode: GalleryMode,
    pub sections: Vec<Section>,
}

impl Layout {
    #[must_use]
    pub fn tile_count(&self) -> usize {
        self.sections.iter().map(|section| section.tiles.len()).sum()
    }

    /// View indices in rendering order.
    pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
        self.sections
            .iter()
            .flat_map(|section| section.tiles.iter().map(|tile| tile.index))
    }
}

/// Arranges `view` for `mode`.
#[must_use]
pub fn layout(mode: GalleryMode, view: &[MediaItem]) -> Layout {
    let sections = if view.is_empty() {
        Vec::new()
    } else {
        match mode {
            GalleryMode::Grid => vec![Section {
                header: SectionHeader::None,
                tiles: (0..view.len()).map(Tile::plain).collect(),
            }],
            GalleryMode::Timeline => timeline(view),
            GalleryMode::Grouped => grouped(view),
            GalleryMode::Fun => vec![Section {
                header: SectionHeader::None,
                tiles: view.iter().enumerate().map(|(index, item)| fun_tile(index, item)).collect(),
            }],
        }
    };
    Layout { mode, sections }
}

fn timeline(view: &[MediaItem]) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    for (index, item) in view.iter().enumerate() {
        let year = item.group.year();
        match sections.last_mut() {
            Some(section) if section.header == SectionHeader::Year(year) => {
                section.tiles.push(Tile::plain(index));
            }
            _ => sections.push(Section {
                header: SectionHeader::Year(year),
                tiles: vec![Tile::plain(index)],
            }),
        }
    }
    sections
}

fn grouped(view: &[MediaItem]) -> Vec<Section> {
    let mut sections: Vec<Section> = Vec::new();
    for (index, item) in view.iter().enumerate() {
        let existing = sections.iter_mut().find(
            |section| matches!(&section.header, SectionHeader::Group(group) if group.id == item.group.id),
        );
        match existing {
            Some(section) => section.tiles.push(Tile::plain(index)),
            None => sections.push(Section {
                header: SectionHeader::Group(item.group.clone()),
                tiles: vec![Tile::plain(index)],
            }),
        }
    }
    sections
}

fn fun_tile(index: usize, item: &MediaItem) -> Tile {
    let hash = fnv1a(item.id.as_str().as_bytes());
    // Map the low 16 bits onto [-MAX_TILT_DEG, MAX_TILT_DEG].
    let unit = f32::from(u16::try_from(hash & 0xFFFF).unwrap_or(0)) / f32::from(u16::MAX);
    Tile {
        index,
        tilt_deg: (unit * 2.0 - 1.0) * MAX_TILT_DEG,
        wide: (hash >> 16) % WIDE_TILE_EVERY == 0,
    }
}

fn fnv1a(bytes: &[u8]) -> u64 {
    const OFFSET: u64 = 0xcbf2_9ce4_8422_2325;
    const PRIME: u64 = 0x0000_0100_0000_01b3;
    bytes
        .iter()
        .fold(OFFSET, |hash, byte| (hash ^ u64::from(*byte)).wrapping_mul(PRIME))
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
            src: MediaSource::parse("x.jpg"),
            caption: String::new(),
            group: GroupRef {
                id: GroupId::new(group),
                name: group.to_string(),
                date: NaiveDate::from_ymd_opt(year, 3, 1).expect("valid date"),
                location: String::new(),
                achievement: None,
            },
        }
    }

    fn view() -> Vec<MediaItem> {
        vec![
            item("a", "g3", 2023),
            item("b", "g3", 2023),
            item("c", "g2", 2023),
            item("d", "g1", 2021),
            item("e", "g2", 2023),
        ]
    }

    #[test]
    fn every_mode_covers_each_view_index_once() {
        let view = view();
        for mode in GalleryMode::ALL {
            let layout = layout(mode, &view);
            let mut indices: Vec<usize> = layout.indices().collect();
            indices.sort_unstable();
            assert_eq!(indices, (0..view.len()).collect::<Vec<_>>(), "{mode}");
        }
    }

    #[test]
    fn timeline_buckets_consecutive_years() {
        let layout = layout(GalleryMode::Timeline, &view());
        let headers: Vec<&SectionHeader> = layout.sections.iter().map(|s| &s.header).collect();
        assert_eq!(headers, vec![&SectionHeader::Year(2023), &SectionHeader::Year(2021), &SectionHeader::Year(2023)]);
    }

    #[test]
    fn grouped_uses_first_appearance_order_and_keeps_indices() {
        let layout = layout(GalleryMode::Grouped, &view());
        let groups: Vec<&str> = layout
            .sections
            .iter()
            .filter_map(|section| match &section.header {
                SectionHeader::Group(group) => Some(group.id.as_str()),
                _ => None,
            })
            .collect();
        assert_eq!(groups, vec!["g3", "g2", "g1"]);
        let g2: Vec<usize> = layout.sections[1].tiles.iter().map(|tile| tile.index).collect();
        assert_eq!(g2, vec![2, 4]);
    }

    #[test]
    fn fun_tiles_are_deterministic_and_bounded() {
        let view = view();
        let first = layout(GalleryMode::Fun, &view);
        let second = layout(GalleryMode::Fun, &view);
        assert_eq!(first, second);
        for tile in &first.sections[0].tiles {
            assert!(tile.tilt_deg.abs() <= MAX_TILT_DEG);
        }
    }

    #[test]
    fn empty_view_has_no_sections() {
        for mode in GalleryMode::ALL {
            assert_eq!(layout(mode, &[]).tile_count(), 0);
        }
    }
}

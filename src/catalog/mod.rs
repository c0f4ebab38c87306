// SPDX-License-Identifier: MPL-2.0
//! Read-only portfolio catalog.
//!
//! The catalog is the shipped [`MediaCollectionProvider`]. It loads either
//! the dataset bundled into the binary or a TOML file supplied on the
//! command line, validates identifiers, and flattens every hackathon's media
//! into per-kind lists once at load time.

mod records;

use crate::application::port::MediaCollectionProvider;
use crate::domain::media::{GroupId, GroupRef, MediaId, MediaItem, MediaKind, MediaSource};
use crate::domain::portfolio::{Hackathon, TeamMember, TeamStats};
use crate::error::{Error, Result};
use chrono::NaiveDate;
use records::{CatalogFile, HackathonRecord, MediaRecord};
use rust_embed::RustEmbed;
use std::cmp::Reverse;
use std::collections::HashSet;
use std::path::Path;

#[derive(RustEmbed)]
#[folder = "assets/data/"]
struct DataAsset;

/// File name of the bundled dataset.
pub const EMBEDDED_CATALOG: &str = "catalog.toml";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct Catalog {
    hackathons: Vec<Hackathon>,
    members: Vec<TeamMember>,
    stats: TeamStats,
    photos: Vec<MediaItem>,
    projects: Vec<MediaItem>,
    memes: Vec<MediaItem>,
}

impl Catalog {
    /// Loads the dataset bundled into the binary.
    pub fn embedded() -> Result<Self> {
        let file = DataAsset::get(EMBEDDED_CATALOG)
            .ok_or_else(|| Error::Catalog(format!("bundled {EMBEDDED_CATALOG} is missing")))?;
        let text = String::from_utf8_lossy(file.data.as_ref());
        Self::from_toml_str(&text, None)
    }

    /// Loads a dataset from disk. Relative media paths resolve against the
    /// file's directory.
    pub fn load_from_path(path: &Path) -> Result<Self> {
        let text = std::fs::read_to_string(path)?;
        Self::from_toml_str(&text, path.parent())
    }

    /// Parses a dataset. Relative media paths are joined onto `base_dir`
    /// when given.
    pub fn from_toml_str(text: &str, base_dir: Option<&Path>) -> Result<Self> {
        let file: CatalogFile =
            toml::from_str(text).map_err(|err| Error::Catalog(err.to_string()))?;
        Self::from_records(file, base_dir)
    }

    fn from_records(file: CatalogFile, base_dir: Option<&Path>) -> Result<Self> {
        let mut group_ids = HashSet::new();
        let mut media_ids = HashSet::new();
        let mut hackathons = Vec::with_capacity(file.hackathons.len());

        for record in file.hackathons {
            if !group_ids.insert(record.id.clone()) {
                return Err(Error::Catalog(format!("duplicate hackathon id '{}'", record.id)));
            }
            let hackathon = build_hackathon(record, base_dir)?;
            for item in hackathon
                .photos
                .iter()
                .chain(&hackathon.projects)
                .chain(&hackathon.memes)
            {
                if !media_ids.insert(item.id.clone()) {
                    return Err(Error::Catalog(format!("duplicate media id '{}'", item.id)));
                }
            }
            hackathons.push(hackathon);
        }

        let mut member_ids = HashSet::new();
        for member in &file.members {
            if !member_ids.insert(member.id.as_str()) {
                return Err(Error::Catalog(format!("duplicate member id '{}'", member.id)));
            }
        }

        let photos: Vec<MediaItem> = hackathons.iter().flat_map(|h| h.photos.clone()).collect();
        let projects: Vec<MediaItem> = hackathons.iter().flat_map(|h| h.projects.clone()).collect();
        let memes: Vec<MediaItem> = hackathons.iter().flat_map(|h| h.memes.clone()).collect();

        let stats = file.stats.unwrap_or_else(|| derive_stats(&hackathons, &projects, &file.members));

        tracing::info!(
            hackathons = hackathons.len(),
            photos = photos.len(),
            projects = projects.len(),
            memes = memes.len(),
            members = file.members.len(),
            "catalog loaded"
        );

        Ok(Self {
            hackathons,
            members: file.members,
            stats,
            photos,
            projects,
            memes,
        })
    }
}

fn build_hackathon(record: HackathonRecord, base_dir: Option<&Path>) -> Result<Hackathon> {
    let group = GroupRef {
        id: GroupId::new(record.id),
        name: record.name,
        date: record.date,
        location: record.location,
        achievement: record.achievement,
    };
    let convert = |kind: MediaKind, records: Vec<MediaRecord>| -> Result<Vec<MediaItem>> {
        records
            .into_iter()
            .enumerate()
            .map(|(index, media)| build_item(&group, kind, index, media, base_dir))
            .collect()
    };
    let photos = convert(MediaKind::Photo, record.photos)?;
    let projects = convert(MediaKind::Project, record.projects)?;
    let memes = convert(MediaKind::Meme, record.memes)?;

    Ok(Hackathon {
        group,
        description: record.description,
        photos,
        projects,
        memes,
    })
}

fn build_item(
    group: &GroupRef,
    kind: MediaKind,
    index: usize,
    record: MediaRecord,
    base_dir: Option<&Path>,
) -> Result<MediaItem> {
    if record.src.trim().is_empty() {
        return Err(Error::Catalog(format!(
            "{} #{index} of '{}' has an empty src",
            kind.slug(),
            group.id
        )));
    }
    let src = match (MediaSource::parse(&record.src), base_dir) {
        (MediaSource::Path(path), Some(base)) if path.is_relative() => {
            MediaSource::Path(base.join(path))
        }
        (source, _) => source,
    };
    let id = record
        .id
        .map_or_else(|| MediaId::derived(&group.id, kind, index), MediaId::new);

    Ok(MediaItem {
        id,
        kind,
        src,
        caption: record.caption,
        group: group.clone(),
    })
}

fn derive_stats(hackathons: &[Hackathon], projects: &[MediaItem], members: &[TeamMember]) -> TeamStats {
    let count = |n: usize| u32::try_from(n).unwrap_or(u32::MAX);
    TeamStats {
        hackathons_attended: count(hackathons.len()),
        wins: count(hackathons.iter().filter(|h| h.has_achievement()).count()),
        projects_built: count(projects.len()),
        team_size: count(members.len()),
    }
}

impl MediaCollectionProvider for Catalog {
    fn get_all_photos(&self) -> &[MediaItem] {
        &self.photos
    }

    fn get_all_projects(&self) -> &[MediaItem] {
        &self.projects
    }

    fn get_all_memes(&self) -> &[MediaItem] {
        &self.memes
    }

    fn get_all_hackathons(&self) -> &[Hackathon] {
        &self.hackathons
    }

    fn get_hackathons_by_date(&self) -> Vec<&Hackathon> {
        let mut sorted: Vec<&Hackathon> = self.hackathons.iter().collect();
        sorted.sort_by_key(|h| Reverse(h.group.date));
        sorted
    }

    fn get_hackathon_by_id(&self, id: &GroupId) -> Option<&Hackathon> {
        self.hackathons.iter().find(|h| h.id() == id)
    }

    fn get_hackathon_by_date(&self, date: NaiveDate) -> Option<&Hackathon> {
        self.hackathons.iter().find(|h| h.group.date == date)
    }

    fn get_all_members(&self) -> &[TeamMember] {
        &self.members
    }

    fn get_member_by_id(&self, id: &str) -> Option<&TeamMember> {
        self.members.iter().find(|member| member.id == id)
    }

    fn get_stats(&self) -> TeamStats {
        self.stats
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::path::PathBuf;

    const SMALL: &str = r#"
        [[members]]
        id = "a"
        name = "A"
        role = "dev"

        [[hackathons]]
        id = "old"
        name = "Old"
        date = "2020-05-01"
        achievement = "Winner"

        [[hackathons.photos]]
        src = "old/1.jpg"
        caption = "one"

        [[hackathons.photos]]
        id = "custom"
        src = "https://example.org/2.jpg"

        [[hackathons]]
        id = "new"
        name = "New"
        date = "2022-05-01"

        [[hackathons.projects]]
        src = "/abs/p.png"

        [[hackathons.memes]]
        src = "m.png"
    "#;

    #[test]
    fn embedded_dataset_loads() {
        let catalog = Catalog::embedded().expect("bundled dataset is valid");
        assert!(!catalog.get_all_hackathons().is_empty());
        assert!(!catalog.get_all_photos().is_empty());
        assert!(!catalog.get_all_members().is_empty());
        assert_eq!(
            catalog.get_stats().hackathons_attended as usize,
            catalog.get_all_hackathons().len()
        );
    }

    #[test]
    fn derives_ids_and_resolves_relative_paths() {
        let catalog = Catalog::from_toml_str(SMALL, Some(Path::new("/data"))).expect("valid");
        let photos = catalog.get_all_photos();
        assert_eq!(photos[0].id.as_str(), "old/photo/0");
        assert_eq!(photos[0].src, MediaSource::Path(PathBuf::from("/data/old/1.jpg")));
        assert_eq!(photos[1].id.as_str(), "custom");
        assert!(matches!(photos[1].src, MediaSource::Url(_)));
        assert_eq!(
            catalog.get_all_projects()[0].src,
            MediaSource::Path(PathBuf::from("/abs/p.png"))
        );
        assert_eq!(catalog.get_all_memes()[0].group.id.as_str(), "new");
    }

    #[test]
    fn stats_are_derived_when_absent() {
        let catalog = Catalog::from_toml_str(SMALL, None).expect("valid");
        assert_eq!(
            catalog.get_stats(),
            TeamStats {
                hackathons_attended: 2,
                wins: 1,
                projects_built: 1,
                team_size: 1,
            }
        );
    }

    #[test]
    fn hackathon_lookups() {
        let catalog = Catalog::from_toml_str(SMALL, None).expect("valid");
        let by_date: Vec<&str> = catalog
            .get_hackathons_by_date()
            .iter()
            .map(|h| h.id().as_str())
            .collect();
        assert_eq!(by_date, vec!["new", "old"]);
        assert!(catalog.get_hackathon_by_id(&GroupId::new("old")).is_some());
        assert!(catalog.get_hackathon_by_id(&GroupId::new("nope")).is_none());
        let date = NaiveDate::from_ymd_opt(2022, 5, 1).expect("valid date");
        assert_eq!(
            catalog.get_hackathon_by_date(date).map(|h| h.id().as_str()),
            Some("new")
        );
        assert_eq!(catalog.get_member_by_id("a").map(|m| m.role.as_str()), Some("dev"));
        assert!(catalog.get_member_by_id("z").is_none());
    }

    #[test]
    fn gallery_collection_is_photos_then_memes() {
        let catalog = Catalog::from_toml_str(SMALL, None).expect("valid");
        let ids: Vec<String> = catalog
            .gallery_collection()
            .iter()
            .map(|item| item.id.to_string())
            .collect();
        assert_eq!(ids, vec!["old/photo/0", "custom", "new/meme/0"]);
    }

    #[test]
    fn duplicate_hackathon_is_rejected() {
        let text = r#"
            [[hackathons]]
            id = "x"
            name = "X"
            date = "2020-01-01"

            [[hackathons]]
            id = "x"
            name = "X again"
            date = "2021-01-01"
        "#;
        assert!(matches!(Catalog::from_toml_str(text, None), Err(Error::Catalog(_))));
    }

    #[test]
    fn duplicate_media_id_is_rejected() {
        let text = r#"
            [[hackathons]]
            id = "x"
            name = "X"
            date = "2020-01-01"

            [[hackathons.photos]]
            id = "same"
            src = "a.jpg"

            [[hackathons.memes]]
            id = "same"
            src = "b.jpg"
        "#;
        let err = Catalog::from_toml_str(text, None).expect_err("duplicate id");
        assert!(err.to_string().contains("duplicate media id"));
    }

    #[test]
    fn empty_src_is_rejected() {
        let text = r#"
            [[hackathons]]
            id = "x"
            name = "X"
            date = "2020-01-01"

            [[hackathons.photos]]
            src = "  "
        "#;
        assert!(Catalog::from_toml_str(text, None).is_err());
    }

    #[test]
    fn missing_file_is_an_io_error() {
        let result = Catalog::load_from_path(Path::new("/definitely/not/here.toml"));
        assert!(matches!(result, Err(Error::Io(_))));
    }
}

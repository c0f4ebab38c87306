// SPDX-License-Identifier: MPL-2.0
//! On-disk shape of the catalog dataset.

use crate::domain::portfolio::{TeamMember, TeamStats};
use chrono::NaiveDate;
use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub(super) struct CatalogFile {
    #[serde(default)]
    pub stats: Option<TeamStats>,
    #[serde(default)]
    pub members: Vec<TeamMember>,
    #[serde(default)]
    pub hackathons: Vec<HackathonRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct HackathonRecord {
    pub id: String,
    pub name: String,
    pub date: NaiveDate,
    #[serde(default)]
    pub location: String,
    #[serde(default)]
    pub achievement: Option<String>,
    #[serde(default)]
    pub description: String,
    #[serde(default)]
    pub photos: Vec<MediaRecord>,
    #[serde(default)]
    pub projects: Vec<MediaRecord>,
    #[serde(default)]
    pub memes: Vec<MediaRecord>,
}

#[derive(Debug, Clone, Deserialize)]
pub(super) struct MediaRecord {
    #[serde(default)]
    pub id: Option<String>,
    pub src: String,
    #[serde(default)]
    pub caption: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn minimal_hackathon_parses_with_defaults() {
        let file: CatalogFile = toml::from_str(
            r#"
            [[hackathons]]
            id = "x"
            name = "X"
            date = "2020-01-02"
            "#,
        )
        .expect("valid toml");
        assert!(file.stats.is_none());
        assert!(file.members.is_empty());
        let hackathon = &file.hackathons[0];
        assert_eq!(hackathon.date, NaiveDate::from_ymd_opt(2020, 1, 2).expect("valid date"));
        assert!(hackathon.photos.is_empty());
        assert!(hackathon.achievement.is_none());
    }

    #[test]
    fn malformed_date_is_rejected() {
        let result: Result<CatalogFile, _> = toml::from_str(
            r#"
            [[hackathons]]
            id = "x"
            name = "X"
            date = "last spring"
            "#,
        );
        assert!(result.is_err());
    }
}

// SPDX-License-Identifier: MPL-2.0
use hackfolio::application::port::MediaCollectionProvider;
use hackfolio::application::query::view;
use hackfolio::catalog::Catalog;
use hackfolio::config::{self, Config};
use hackfolio::domain::media::{GroupFilter, MediaKind, SortOrder};
use hackfolio::error::Error;
use hackfolio::gallery::GalleryMode;
use hackfolio::i18n::fluent::I18n;
use hackfolio::ui::theming::ThemeMode;
use tempfile::tempdir;

#[test]
fn test_language_change_via_config() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut english = Config::default();
    english.general.language = Some("en-US".to_string());
    config::save_to_path(&english, &path).expect("Failed to write english config");
    let loaded = config::load_from_path(&path).expect("Failed to load english config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "en-US");

    let mut french = Config::default();
    french.general.language = Some("fr".to_string());
    config::save_to_path(&french, &path).expect("Failed to write french config");
    let loaded = config::load_from_path(&path).expect("Failed to load french config");
    assert_eq!(I18n::new(None, &loaded).current_locale().to_string(), "fr");

    dir.close().expect("Failed to close temporary directory");
}

#[test]
fn test_cli_language_beats_config() {
    let mut config = Config::default();
    config.general.language = Some("en-US".to_string());
    let i18n = I18n::new(Some("fr".to_string()), &config);
    assert_eq!(i18n.current_locale().to_string(), "fr");
    assert_eq!(i18n.tr("nav-gallery"), "Galerie");
}

#[test]
fn test_preferences_survive_a_save_load_cycle() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("settings.toml");

    let mut config = Config::default();
    config.general.theme_mode = ThemeMode::Dark;
    config::save_to_path(&config, &path).expect("Failed to write config");

    let loaded = config::load_from_path(&path).expect("Failed to load config");
    assert_eq!(loaded, config);
    assert_eq!(loaded.gallery.mode(), GalleryMode::default());
}

#[test]
fn test_every_user_facing_key_is_translated() {
    let keys = [
        "window-title",
        "nav-home",
        "nav-gallery",
        "nav-hackathons",
        "nav-team",
        "gallery-filter-all",
        "gallery-no-results",
        "gallery-empty",
        "lightbox-close",
        "hero-empty",
        "spotlight-empty",
        "team-title",
        "hackathons-title",
        "notification-catalog-load-error",
        "error-navigation-empty-view",
        "error-navigation-out-of-range",
    ];
    let mut i18n = I18n::new(Some("en-US".to_string()), &Config::default());
    for locale in i18n.available_locales.clone() {
        i18n.set_locale(locale.clone());
        for key in keys {
            assert!(
                !i18n.tr(key).starts_with("MISSING"),
                "{key} is missing in {locale}"
            );
        }
        for mode in GalleryMode::ALL {
            assert!(!i18n.tr(mode.i18n_key()).starts_with("MISSING"));
        }
        for order in SortOrder::ALL {
            assert!(!i18n.tr(order.i18n_key()).starts_with("MISSING"));
        }
    }
}

#[test]
fn test_bundled_catalog_feeds_the_gallery() {
    let catalog = Catalog::embedded().expect("bundled dataset is valid");
    let collection = catalog.gallery_collection();
    assert_eq!(
        collection.len(),
        catalog.get_all_photos().len() + catalog.get_all_memes().len()
    );
    assert!(collection.iter().all(|item| item.kind != MediaKind::Project));

    let newest = view(&collection, &GroupFilter::all(), SortOrder::Newest);
    assert!(newest
        .windows(2)
        .all(|pair| pair[0].sort_key() >= pair[1].sort_key()));

    let first = catalog.get_hackathons_by_date()[0].id().clone();
    let scoped = view(&collection, &GroupFilter::scoped(first.clone()), SortOrder::Newest);
    assert!(!scoped.is_empty());
    assert!(scoped.iter().all(|item| item.group_id() == &first));
}

#[test]
fn test_catalog_from_disk_resolves_relative_media() {
    let dir = tempdir().expect("Failed to create temporary directory");
    let path = dir.path().join("catalog.toml");
    std::fs::write(
        &path,
        r#"
[[hackathons]]
id = "treehacks-2024"
name = "TreeHacks"
date = "2024-02-16"
location = "Stanford, CA"
description = "Weekend build."

[[hackathons.photos]]
src = "media/stage.jpg"

[[hackathons.memes]]
src = "https://example.org/meme.png"
"#,
    )
    .expect("Failed to write catalog");

    let catalog = Catalog::load_from_path(&path).expect("catalog parses");
    let photo = &catalog.get_all_photos()[0];
    assert_eq!(
        photo.src.as_path(),
        Some(dir.path().join("media/stage.jpg").as_path())
    );
    assert_eq!(catalog.get_all_memes()[0].src.as_path(), None);
    assert_eq!(catalog.get_stats().hackathons_attended, 1);
}

#[test]
fn test_broken_catalog_is_reported_not_panicked() {
    let err = Catalog::from_toml_str("hackathons = 3", None).expect_err("invalid shape");
    assert!(matches!(err, Error::Catalog(_)));
}

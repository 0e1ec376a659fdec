//! Session state and asset catalog behavior

use image::{Rgba, RgbaImage};
use jewelry_tryon::anchors::JewelryKind;
use jewelry_tryon::app::TryOnApp;
use jewelry_tryon::assets::{asset_path, variant_count, AssetCatalog, Tier};
use jewelry_tryon::config::Config;
use jewelry_tryon::session::CameraFacing;
use jewelry_tryon::tracking::{ScriptedFaceTracker, ScriptedHandTracker};
use std::path::PathBuf;

fn catalog_root() -> PathBuf {
    static CATALOG: std::sync::OnceLock<PathBuf> = std::sync::OnceLock::new();
    CATALOG
        .get_or_init(|| {
            let dir = std::env::temp_dir().join("jewelry-tryon-session-test");
            std::fs::create_dir_all(dir.join("ring")).unwrap();
            std::fs::create_dir_all(dir.join("necklaces")).unwrap();
            let sprite = RgbaImage::from_pixel(20, 20, Rgba([255, 255, 255, 255]));
            sprite.save(dir.join("ring/ring1.png")).unwrap();
            sprite.save(dir.join("necklaces/necklaces1.png")).unwrap();
            dir
        })
        .clone()
}

fn idle_app() -> TryOnApp {
    let mut config = Config::default();
    config.assets.root = catalog_root();
    TryOnApp::new(
        config,
        Box::new(ScriptedFaceTracker::repeating(None, 1)),
        Box::new(ScriptedHandTracker::repeating(vec![], 1)),
    )
    .unwrap()
}

#[test]
fn recognized_categories_use_the_count_table() {
    assert_eq!(variant_count(JewelryKind::Bracelet, None), 7);
    assert_eq!(variant_count(JewelryKind::Ring, None), 10);
    assert_eq!(variant_count(JewelryKind::Earrings, Some(Tier::Gold)), 16);
    assert_eq!(variant_count(JewelryKind::Necklaces, Some(Tier::Gold)), 19);
    assert_eq!(variant_count(JewelryKind::Earrings, Some(Tier::Diamond)), 9);
    assert_eq!(variant_count(JewelryKind::Necklaces, Some(Tier::Diamond)), 6);
}

#[test]
fn unrecognized_keys_fall_back_to_default_counts() {
    // Tiered hand-worn pairings are not in the table
    assert_eq!(variant_count(JewelryKind::Bracelet, Some(Tier::Gold)), 5);
    assert_eq!(variant_count(JewelryKind::Ring, Some(Tier::Diamond)), 5);
    // Untiered face-worn pairings are not in the table either
    assert_eq!(variant_count(JewelryKind::Earrings, None), 15);
    assert_eq!(variant_count(JewelryKind::Necklaces, None), 15);
}

#[test]
fn path_conventions_match_the_asset_store() {
    assert_eq!(
        asset_path(JewelryKind::Bracelet, None, 7),
        PathBuf::from("bracelet/bracelet7.png")
    );
    assert_eq!(
        asset_path(JewelryKind::Necklaces, Some(Tier::Diamond), 2),
        PathBuf::from("necklaces/diamond/necklaces2-diamond.png")
    );
}

#[test]
fn variant_paths_enumerate_in_index_order() {
    let catalog = AssetCatalog::new("store");
    let paths = catalog.variant_paths(JewelryKind::Earrings, Some(Tier::Diamond));
    assert_eq!(paths.len(), 9);
    assert_eq!(paths[0], PathBuf::from("store/earrings/diamond/earrings1-diamond.png"));
    assert_eq!(paths[8], PathBuf::from("store/earrings/diamond/earrings9-diamond.png"));
}

#[test]
fn categories_are_independent_slots() {
    let mut app = idle_app();
    app.select_jewelry(JewelryKind::Ring, None, 1);
    app.select_jewelry(JewelryKind::Necklaces, None, 1);

    // Activating the necklace did not clear the ring
    assert!(app.session().active(JewelryKind::Ring).is_some());
    assert!(app.session().active(JewelryKind::Necklaces).is_some());
    assert!(app.session().active(JewelryKind::Earrings).is_none());
}

#[test]
fn clear_jewelry_nulls_every_category() {
    let mut app = idle_app();
    app.select_jewelry(JewelryKind::Ring, None, 1);
    app.select_jewelry(JewelryKind::Necklaces, None, 1);

    app.clear_jewelry();
    assert!(!app.session().any_active());
}

#[test]
fn category_selection_prefers_the_matching_camera() {
    let mut app = idle_app();
    assert_eq!(app.session().facing(), CameraFacing::User);

    app.select_category(JewelryKind::Bracelet, None);
    assert_eq!(app.session().facing(), CameraFacing::Environment);
    let epoch_after_switch = app.session().epoch();
    assert_eq!(epoch_after_switch, 1);

    // Staying on a hand category keeps the same source
    app.select_category(JewelryKind::Ring, None);
    assert_eq!(app.session().epoch(), epoch_after_switch);

    app.select_category(JewelryKind::Necklaces, Some(Tier::Gold));
    assert_eq!(app.session().facing(), CameraFacing::User);
    assert_eq!(app.session().epoch(), 2);
}

#[test]
fn failed_load_does_not_change_the_active_asset() {
    let mut app = idle_app();
    app.select_jewelry(JewelryKind::Ring, None, 1);

    // Index 2 has no file behind it
    app.select_jewelry(JewelryKind::Ring, None, 2);
    assert!(app.session().active(JewelryKind::Ring).is_some());

    // An out-of-range index is rejected before touching the filesystem
    app.select_jewelry(JewelryKind::Ring, None, 99);
    assert!(app.session().active(JewelryKind::Ring).is_some());
}

//! Jewelry asset store: decoded overlay sprites, the per-category variant
//! catalog, and the on-disk path conventions.

use crate::anchors::JewelryKind;
use crate::constants::{DEFAULT_FACE_VARIANTS, DEFAULT_HAND_VARIANTS};
use crate::{Error, Result};
use image::RgbaImage;
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Metal/stone tier for the face-worn categories
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Tier {
    Gold,
    Diamond,
}

impl Tier {
    /// Tier name as used in asset paths
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Tier::Gold => "gold",
            Tier::Diamond => "diamond",
        }
    }

    /// Parse a tier name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "gold" => Some(Tier::Gold),
            "diamond" => Some(Tier::Diamond),
            _ => None,
        }
    }
}

impl std::fmt::Display for Tier {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// An in-memory decoded overlay sprite
#[derive(Debug, Clone)]
pub struct JewelryAsset {
    image: RgbaImage,
}

impl JewelryAsset {
    /// Wrap an already-decoded image
    #[must_use]
    pub fn from_image(image: RgbaImage) -> Self {
        Self { image }
    }

    /// Decode an asset from a PNG file
    pub fn load<P: AsRef<Path>>(path: P) -> Result<Self> {
        let image = image::open(path.as_ref())
            .map_err(|e| {
                log::error!("Failed to load jewelry asset {}: {e}", path.as_ref().display());
                Error::Asset(format!("{}: {e}", path.as_ref().display()))
            })?
            .to_rgba8();
        Ok(Self { image })
    }

    /// Intrinsic pixel width
    #[must_use]
    pub fn width(&self) -> u32 {
        self.image.width()
    }

    /// Intrinsic pixel height
    #[must_use]
    pub fn height(&self) -> u32 {
        self.image.height()
    }

    #[must_use]
    pub fn image(&self) -> &RgbaImage {
        &self.image
    }
}

/// Number of selectable variants for a category/tier pair.
///
/// Unrecognized pairs fall back to a default so the selection UI is never
/// empty: 5 for hand-worn categories, 15 for face-worn ones.
#[must_use]
pub fn variant_count(kind: JewelryKind, tier: Option<Tier>) -> u32 {
    match (kind, tier) {
        (JewelryKind::Bracelet, None) => 7,
        (JewelryKind::Ring, None) => 10,
        (JewelryKind::Earrings, Some(Tier::Gold)) => 16,
        (JewelryKind::Earrings, Some(Tier::Diamond)) => 9,
        (JewelryKind::Necklaces, Some(Tier::Gold)) => 19,
        (JewelryKind::Necklaces, Some(Tier::Diamond)) => 6,
        _ if kind.is_hand_worn() => DEFAULT_HAND_VARIANTS,
        _ => DEFAULT_FACE_VARIANTS,
    }
}

/// Relative path of one asset under the catalog root.
///
/// Untiered: `{category}/{category}{index}.png`.
/// Tiered: `{category}/{tier}/{category}{index}-{tier}.png`.
#[must_use]
pub fn asset_path(kind: JewelryKind, tier: Option<Tier>, index: u32) -> PathBuf {
    let category = kind.as_str();
    match tier {
        Some(tier) => PathBuf::from(category)
            .join(tier.as_str())
            .join(format!("{category}{index}-{tier}.png")),
        None => PathBuf::from(category).join(format!("{category}{index}.png")),
    }
}

/// On-demand loader for the jewelry asset directory
#[derive(Debug, Clone)]
pub struct AssetCatalog {
    root: PathBuf,
}

impl AssetCatalog {
    #[must_use]
    pub fn new<P: Into<PathBuf>>(root: P) -> Self {
        Self { root: root.into() }
    }

    #[must_use]
    pub fn root(&self) -> &Path {
        &self.root
    }

    /// Paths of every selectable variant for a category, in index order.
    /// The selection UI shows these as thumbnails.
    #[must_use]
    pub fn variant_paths(&self, kind: JewelryKind, tier: Option<Tier>) -> Vec<PathBuf> {
        (1..=variant_count(kind, tier))
            .map(|index| self.root.join(asset_path(kind, tier, index)))
            .collect()
    }

    /// Load one variant by index (1-based, matching the filename scheme)
    pub fn load(&self, kind: JewelryKind, tier: Option<Tier>, index: u32) -> Result<JewelryAsset> {
        if index == 0 || index > variant_count(kind, tier) {
            return Err(Error::Asset(format!(
                "Variant index {index} out of range for {kind}"
            )));
        }
        JewelryAsset::load(self.root.join(asset_path(kind, tier, index)))
    }
}

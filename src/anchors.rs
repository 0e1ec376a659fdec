//! Anchor resolution: from smoothed landmarks to pixel-space placement
//! origins for each jewelry category.

use crate::constants::{BRACELET_ANGLE_OFFSET, LEFT_EAR_BIAS, NECK_BIAS, RIGHT_EAR_BIAS};
use crate::landmarks::{face, hand, LandmarkFrame};
use serde::{Deserialize, Serialize};

/// Jewelry category
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum JewelryKind {
    Earrings,
    Necklaces,
    Bracelet,
    Ring,
}

impl JewelryKind {
    /// All categories, in selection-UI order
    pub const ALL: [JewelryKind; 4] = [
        JewelryKind::Earrings,
        JewelryKind::Necklaces,
        JewelryKind::Bracelet,
        JewelryKind::Ring,
    ];

    /// Category name as used in asset paths
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            JewelryKind::Earrings => "earrings",
            JewelryKind::Necklaces => "necklaces",
            JewelryKind::Bracelet => "bracelet",
            JewelryKind::Ring => "ring",
        }
    }

    /// Whether this category anchors to hand landmarks (vs. face landmarks)
    #[must_use]
    pub fn is_hand_worn(self) -> bool {
        matches!(self, JewelryKind::Bracelet | JewelryKind::Ring)
    }

    /// Parse a category name
    #[must_use]
    pub fn from_name(name: &str) -> Option<Self> {
        match name.to_lowercase().as_str() {
            "earrings" | "earring" => Some(JewelryKind::Earrings),
            "necklaces" | "necklace" => Some(JewelryKind::Necklaces),
            "bracelet" | "bracelets" => Some(JewelryKind::Bracelet),
            "ring" | "rings" => Some(JewelryKind::Ring),
            _ => None,
        }
    }
}

impl std::fmt::Display for JewelryKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A pixel-space placement origin derived from landmarks
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Anchor {
    pub x: f32,
    pub y: f32,
    /// Orientation in radians; 0 for axis-aligned placements
    pub rotation: f32,
    /// Wrist-to-middle-fingertip distance in pixels, measured for ring
    /// anchors so sizing can follow the visible hand size
    pub hand_span: Option<f32>,
}

impl Anchor {
    fn at(x: f32, y: f32) -> Self {
        Self {
            x,
            y,
            rotation: 0.0,
            hand_span: None,
        }
    }
}

/// Resolve the anchors for one category this frame.
///
/// Face categories require a face detection, hand categories at least one
/// hand; each detected hand yields its own anchor. A missing requirement
/// yields an empty list and the overlay is simply not drawn this frame.
#[must_use]
pub fn resolve(
    kind: JewelryKind,
    face_frame: Option<&LandmarkFrame>,
    hand_frames: &[LandmarkFrame],
    surface_width: u32,
    surface_height: u32,
) -> Vec<Anchor> {
    match kind {
        JewelryKind::Earrings => face_frame
            .map(|frame| resolve_earrings(frame, surface_width, surface_height))
            .unwrap_or_default(),
        JewelryKind::Necklaces => face_frame
            .map(|frame| resolve_necklace(frame, surface_width, surface_height))
            .unwrap_or_default(),
        JewelryKind::Bracelet => hand_frames
            .iter()
            .filter_map(|frame| resolve_bracelet(frame, surface_width, surface_height))
            .collect(),
        JewelryKind::Ring => hand_frames
            .iter()
            .filter_map(|frame| resolve_ring(frame, surface_width, surface_height))
            .collect(),
    }
}

fn resolve_earrings(frame: &LandmarkFrame, width: u32, height: u32) -> Vec<Anchor> {
    let mut anchors = Vec::with_capacity(2);
    if let Some(left) = frame.get(face::LEFT_EAR) {
        let (x, y) = left.to_pixels(width, height);
        anchors.push(Anchor::at(x + LEFT_EAR_BIAS.0, y + LEFT_EAR_BIAS.1));
    }
    if let Some(right) = frame.get(face::RIGHT_EAR) {
        let (x, y) = right.to_pixels(width, height);
        anchors.push(Anchor::at(x + RIGHT_EAR_BIAS.0, y + RIGHT_EAR_BIAS.1));
    }
    anchors
}

fn resolve_necklace(frame: &LandmarkFrame, width: u32, height: u32) -> Vec<Anchor> {
    frame
        .get(face::CHIN)
        .map(|chin| {
            let (x, y) = chin.to_pixels(width, height);
            vec![Anchor::at(x + NECK_BIAS.0, y + NECK_BIAS.1)]
        })
        .unwrap_or_default()
}

fn resolve_bracelet(frame: &LandmarkFrame, width: u32, height: u32) -> Option<Anchor> {
    let wrist = frame.get(hand::WRIST)?.to_pixels(width, height);
    let knuckle = frame.get(hand::MIDDLE_KNUCKLE)?.to_pixels(width, height);

    // Orient along the wrist-to-knuckle axis, then turn a right angle so
    // the band lies across the forearm
    let angle = (knuckle.1 - wrist.1).atan2(knuckle.0 - wrist.0);
    Some(Anchor {
        x: wrist.0,
        y: wrist.1,
        rotation: angle + BRACELET_ANGLE_OFFSET,
        hand_span: None,
    })
}

fn resolve_ring(frame: &LandmarkFrame, width: u32, height: u32) -> Option<Anchor> {
    let ring = frame.get(hand::RING_FINGER)?.to_pixels(width, height);
    let wrist = frame.get(hand::WRIST)?.to_pixels(width, height);
    let tip = frame.get(hand::MIDDLE_TIP)?.to_pixels(width, height);

    let span = (tip.0 - wrist.0).hypot(tip.1 - wrist.1);
    Some(Anchor {
        x: ring.0,
        y: ring.1,
        rotation: 0.0,
        hand_span: Some(span),
    })
}

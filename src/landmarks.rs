//! Landmark types and the fixed index scheme of the external trackers.
//!
//! Trackers deliver landmarks as fixed-length ordered sequences of
//! normalized points; the indices below are defined by the external models
//! and the anchor resolver depends on them verbatim.

use serde::{Deserialize, Serialize};

/// A normalized 3D point in `[0, 1]` relative to the frame dimensions
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Landmark {
    pub x: f32,
    pub y: f32,
    pub z: f32,
}

impl Landmark {
    #[must_use]
    pub fn new(x: f32, y: f32, z: f32) -> Self {
        Self { x, y, z }
    }

    /// Map the normalized position to pixel coordinates on a surface.
    ///
    /// Assumes the source frame and the surface share an aspect ratio; no
    /// letterbox or crop correction is applied.
    #[must_use]
    pub fn to_pixels(&self, surface_width: u32, surface_height: u32) -> (f32, f32) {
        (self.x * surface_width as f32, self.y * surface_height as f32)
    }
}

/// Ordered landmark sequence for one detected entity.
///
/// Face frames carry [`crate::constants::NUM_FACE_LANDMARKS`] points, hand
/// frames [`crate::constants::NUM_HAND_LANDMARKS`].
pub type LandmarkFrame = Vec<Landmark>;

/// Face mesh landmark indices used by the anchor resolver
pub mod face {
    /// Jaw contour point adjacent to the left ear
    pub const LEFT_EAR: usize = 132;
    /// Jaw contour point adjacent to the right ear
    pub const RIGHT_EAR: usize = 361;
    /// Chin center, lowest point of the jaw
    pub const CHIN: usize = 152;
}

/// Hand landmark indices used by the anchor resolver
pub mod hand {
    /// Wrist
    pub const WRIST: usize = 0;
    /// Middle finger base knuckle, used for hand orientation
    pub const MIDDLE_KNUCKLE: usize = 9;
    /// Middle fingertip, used for the hand-span measurement
    pub const MIDDLE_TIP: usize = 12;
    /// Ring finger knuckle the ring is anchored to
    pub const RING_FINGER: usize = 14;
}

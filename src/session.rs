//! Session state: active jewelry selection and camera source.
//!
//! One session object owns all of this; there are no process-wide
//! singletons. The frame loop is the only writer.

use crate::anchors::JewelryKind;
use crate::assets::JewelryAsset;
use serde::{Deserialize, Serialize};
use std::collections::HashMap;

/// Which camera the session is using
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum CameraFacing {
    /// Front camera
    User,
    /// Back camera
    Environment,
}

impl CameraFacing {
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            CameraFacing::User => "user",
            CameraFacing::Environment => "environment",
        }
    }
}

impl std::fmt::Display for CameraFacing {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Camera used when entering a category: hand-worn jewelry is aimed with
/// the back camera, face-worn with the front
#[must_use]
pub fn preferred_facing(kind: JewelryKind) -> CameraFacing {
    if kind.is_hand_worn() {
        CameraFacing::Environment
    } else {
        CameraFacing::User
    }
}

/// Per-session mutable state: the active asset of each category, the
/// camera facing, and the source epoch.
///
/// Categories are independent slots: activating a necklace leaves an
/// already-active pair of earrings in place, since multiple jewelry types
/// can be worn at once. `clear_all` is the explicit reset.
pub struct SessionState {
    active: HashMap<JewelryKind, JewelryAsset>,
    facing: CameraFacing,
    epoch: u64,
}

impl SessionState {
    #[must_use]
    pub fn new(facing: CameraFacing) -> Self {
        Self {
            active: HashMap::new(),
            facing,
            epoch: 0,
        }
    }

    /// Set the active asset for a category
    pub fn activate(&mut self, kind: JewelryKind, asset: JewelryAsset) {
        self.active.insert(kind, asset);
    }

    /// Remove one category's active asset
    pub fn deactivate(&mut self, kind: JewelryKind) {
        self.active.remove(&kind);
    }

    /// The active asset for a category, if any
    #[must_use]
    pub fn active(&self, kind: JewelryKind) -> Option<&JewelryAsset> {
        self.active.get(&kind)
    }

    #[must_use]
    pub fn any_active(&self) -> bool {
        !self.active.is_empty()
    }

    /// Null every category's selection
    pub fn clear_all(&mut self) {
        self.active.clear();
    }

    #[must_use]
    pub fn facing(&self) -> CameraFacing {
        self.facing
    }

    /// Switch the camera facing. Returns true if the source actually
    /// changed; a change advances the epoch so results from in-flight
    /// detector calls against the old source can be recognized as stale.
    pub fn set_facing(&mut self, facing: CameraFacing) -> bool {
        if self.facing == facing {
            return false;
        }
        self.facing = facing;
        self.epoch += 1;
        true
    }

    /// Current camera-source epoch
    #[must_use]
    pub fn epoch(&self) -> u64 {
        self.epoch
    }

    /// Whether detector results tagged with `epoch` are from the current
    /// camera source
    #[must_use]
    pub fn is_current(&self, epoch: u64) -> bool {
        self.epoch == epoch
    }
}

impl Default for SessionState {
    fn default() -> Self {
        Self::new(CameraFacing::User)
    }
}

//! Tracking collaborator contract.
//!
//! The landmark models themselves are external: a tracker consumes a video
//! frame and yields zero-or-one face landmark sets and zero-or-more hand
//! landmark sets, using the fixed index scheme in [`crate::landmarks`].
//! This module defines the traits the frame loop drives, plus scripted
//! implementations that replay fixture landmarks for the offline driver
//! and for tests.

use crate::landmarks::LandmarkFrame;
use crate::{Error, Result};
use image::RgbaImage;
use serde::{Deserialize, Serialize};
use std::collections::VecDeque;
use std::path::Path;

/// Face landmark source. At most one face is tracked.
pub trait FaceTracker: Send {
    /// Detect face landmarks in a frame; `None` when no face is visible
    fn detect(&mut self, frame: &RgbaImage) -> Result<Option<LandmarkFrame>>;
}

/// Hand landmark source. Zero or more hands per frame.
pub trait HandTracker: Send {
    /// Detect hand landmark sets in a frame, one per visible hand
    fn detect(&mut self, frame: &RgbaImage) -> Result<Vec<LandmarkFrame>>;
}

/// Joined detector results for one frame.
///
/// `epoch` records the session's camera-source epoch at the moment the
/// detectors were invoked. Results delivered after the source was torn
/// down carry a stale epoch and must be discarded, never composited.
#[derive(Debug, Clone)]
pub struct Detections {
    pub epoch: u64,
    pub face: Option<LandmarkFrame>,
    pub hands: Vec<LandmarkFrame>,
}

/// One frame of tracker output, loadable from a YAML fixture
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct TrackedScene {
    #[serde(default)]
    pub face: Option<LandmarkFrame>,
    #[serde(default)]
    pub hands: Vec<LandmarkFrame>,
}

impl TrackedScene {
    /// Load a scene fixture from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path.as_ref())?;
        serde_yaml::from_str(&content)
            .map_err(|e| Error::Tracking(format!("Failed to parse landmark fixture: {e}")))
    }
}

/// Face tracker replaying a scripted detection sequence.
/// Reports no face once the script is exhausted.
pub struct ScriptedFaceTracker {
    detections: VecDeque<Option<LandmarkFrame>>,
}

impl ScriptedFaceTracker {
    #[must_use]
    pub fn new(detections: Vec<Option<LandmarkFrame>>) -> Self {
        Self {
            detections: detections.into(),
        }
    }

    /// Replay the same detection for `frames` frames
    #[must_use]
    pub fn repeating(detection: Option<LandmarkFrame>, frames: usize) -> Self {
        Self::new(vec![detection; frames])
    }
}

impl FaceTracker for ScriptedFaceTracker {
    fn detect(&mut self, _frame: &RgbaImage) -> Result<Option<LandmarkFrame>> {
        Ok(self.detections.pop_front().flatten())
    }
}

/// Hand tracker replaying a scripted detection sequence.
/// Reports no hands once the script is exhausted.
pub struct ScriptedHandTracker {
    detections: VecDeque<Vec<LandmarkFrame>>,
}

impl ScriptedHandTracker {
    #[must_use]
    pub fn new(detections: Vec<Vec<LandmarkFrame>>) -> Self {
        Self {
            detections: detections.into(),
        }
    }

    /// Replay the same detection for `frames` frames
    #[must_use]
    pub fn repeating(detection: Vec<LandmarkFrame>, frames: usize) -> Self {
        Self::new(vec![detection; frames])
    }
}

impl HandTracker for ScriptedHandTracker {
    fn detect(&mut self, _frame: &RgbaImage) -> Result<Vec<LandmarkFrame>> {
        Ok(self.detections.pop_front().unwrap_or_default())
    }
}

//! Configuration management for the jewelry try-on application

use crate::constants::{
    BRACELET_SCALE, DEFAULT_CAPTURE_HEIGHT, DEFAULT_CAPTURE_WIDTH, DEFAULT_MAX_FACES, DEFAULT_MAX_HANDS,
    DEFAULT_MIN_DETECTION_CONFIDENCE, DEFAULT_MIN_TRACKING_CONFIDENCE, DEFAULT_SMOOTHING_ALPHA, EARRING_SCALE,
    NECKLACE_SCALE, REFERENCE_HAND_SPAN, RING_SCALE,
};
use crate::session::CameraFacing;
use crate::{Error, Result};
use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

/// Application configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Landmark smoothing configuration
    pub smoothing: SmoothingConfig,

    /// Overlay placement configuration
    pub placement: PlacementConfig,

    /// Tracker options
    pub tracking: TrackingConfig,

    /// Camera configuration
    pub camera: CameraConfig,

    /// Asset store configuration
    pub assets: AssetsConfig,
}

/// Landmark smoothing parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SmoothingConfig {
    /// Smoother type ("exponential" or "none")
    pub smoother: String,

    /// Weight of the newest observation; lower is smoother with more lag
    pub alpha: f32,
}

/// Overlay placement parameters
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct PlacementConfig {
    /// Earring scale relative to intrinsic asset size
    pub earring_scale: f32,

    /// Necklace scale relative to intrinsic asset size
    pub necklace_scale: f32,

    /// Bracelet scale relative to intrinsic asset size
    pub bracelet_scale: f32,

    /// Ring scale relative to intrinsic asset size
    pub ring_scale: f32,

    /// Derive ring size from the measured hand span instead of using
    /// `ring_scale` as-is
    pub size_aware_ring: bool,

    /// Hand span in pixels at which the size-aware ring scale equals
    /// `ring_scale`
    pub reference_hand_span: f32,
}

/// Tracker options forwarded to the external landmark models
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TrackingConfig {
    /// Maximum number of faces to track
    pub max_faces: usize,

    /// Maximum number of hands to track
    pub max_hands: usize,

    /// Minimum detection confidence (0.0-1.0)
    pub min_detection_confidence: f32,

    /// Minimum tracking confidence (0.0-1.0)
    pub min_tracking_confidence: f32,
}

/// Camera configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct CameraConfig {
    /// Requested capture width; the surface is sized to the actual
    /// negotiated frame dimensions
    pub capture_width: u32,

    /// Requested capture height
    pub capture_height: u32,

    /// Initial camera facing
    pub facing: CameraFacing,
}

/// Asset store configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AssetsConfig {
    /// Root directory of the jewelry asset store
    pub root: PathBuf,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            smoothing: SmoothingConfig::default(),
            placement: PlacementConfig::default(),
            tracking: TrackingConfig::default(),
            camera: CameraConfig::default(),
            assets: AssetsConfig::default(),
        }
    }
}

impl Default for SmoothingConfig {
    fn default() -> Self {
        Self {
            smoother: "exponential".to_string(),
            alpha: DEFAULT_SMOOTHING_ALPHA,
        }
    }
}

impl Default for PlacementConfig {
    fn default() -> Self {
        Self {
            earring_scale: EARRING_SCALE,
            necklace_scale: NECKLACE_SCALE,
            bracelet_scale: BRACELET_SCALE,
            ring_scale: RING_SCALE,
            size_aware_ring: true,
            reference_hand_span: REFERENCE_HAND_SPAN,
        }
    }
}

impl Default for TrackingConfig {
    fn default() -> Self {
        Self {
            max_faces: DEFAULT_MAX_FACES,
            max_hands: DEFAULT_MAX_HANDS,
            min_detection_confidence: DEFAULT_MIN_DETECTION_CONFIDENCE,
            min_tracking_confidence: DEFAULT_MIN_TRACKING_CONFIDENCE,
        }
    }
}

impl Default for CameraConfig {
    fn default() -> Self {
        Self {
            capture_width: DEFAULT_CAPTURE_WIDTH,
            capture_height: DEFAULT_CAPTURE_HEIGHT,
            facing: CameraFacing::User,
        }
    }
}

impl Default for AssetsConfig {
    fn default() -> Self {
        Self {
            root: PathBuf::from("assets/jewelry"),
        }
    }
}

impl Config {
    /// Load configuration from a YAML file
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        serde_yaml::from_str(&content).map_err(|e| Error::Config(format!("Failed to parse config: {e}")))
    }

    /// Save configuration to a YAML file
    pub fn to_file<P: AsRef<Path>>(&self, path: P) -> Result<()> {
        let content =
            serde_yaml::to_string(self).map_err(|e| Error::Config(format!("Failed to serialize config: {e}")))?;
        std::fs::write(path, content)?;
        Ok(())
    }

    /// Create the face landmark smoother from configuration
    pub fn create_face_smoother(&self) -> Result<Box<dyn crate::smoothing::LandmarkSmoother>> {
        crate::smoothing::create_smoother(&self.smoothing.smoother, self.smoothing.alpha)
    }

    /// Create the hand landmark smoother from configuration
    pub fn create_hand_smoother(&self) -> Result<crate::smoothing::hand_set::HandSetSmoother> {
        crate::smoothing::hand_set::HandSetSmoother::new(&self.smoothing.smoother, self.smoothing.alpha)
    }

    /// Validate configuration
    pub fn validate(&self) -> Result<()> {
        if !(0.0..=1.0).contains(&self.smoothing.alpha) || self.smoothing.alpha == 0.0 {
            return Err(Error::Config("Smoothing alpha must be in (0, 1]".to_string()));
        }

        let scales = [
            ("earring_scale", self.placement.earring_scale),
            ("necklace_scale", self.placement.necklace_scale),
            ("bracelet_scale", self.placement.bracelet_scale),
            ("ring_scale", self.placement.ring_scale),
        ];
        for (name, scale) in scales {
            if scale <= 0.0 {
                return Err(Error::Config(format!("{name} must be greater than 0")));
            }
        }
        if self.placement.reference_hand_span <= 0.0 {
            return Err(Error::Config("Reference hand span must be greater than 0".to_string()));
        }

        if !(0.0..=1.0).contains(&self.tracking.min_detection_confidence) {
            return Err(Error::Config(
                "Detection confidence must be between 0.0 and 1.0".to_string(),
            ));
        }
        if !(0.0..=1.0).contains(&self.tracking.min_tracking_confidence) {
            return Err(Error::Config(
                "Tracking confidence must be between 0.0 and 1.0".to_string(),
            ));
        }
        if self.tracking.max_faces == 0 || self.tracking.max_hands == 0 {
            return Err(Error::Config("Tracker limits must be greater than 0".to_string()));
        }

        if self.camera.capture_width == 0 || self.camera.capture_height == 0 {
            return Err(Error::Config("Capture resolution must be non-zero".to_string()));
        }

        Ok(())
    }
}

/// Example configuration file content
pub const EXAMPLE_CONFIG: &str = r#"# Jewelry Try-On Configuration

# Landmark smoothing
smoothing:
  smoother: "exponential"
  alpha: 0.2

# Overlay placement
placement:
  earring_scale: 0.07
  necklace_scale: 0.18
  bracelet_scale: 0.15
  ring_scale: 0.05
  size_aware_ring: true
  reference_hand_span: 250.0

# Tracker options
tracking:
  max_faces: 1
  max_hands: 2
  min_detection_confidence: 0.6
  min_tracking_confidence: 0.6

# Camera
camera:
  capture_width: 1280
  capture_height: 720
  facing: "user"

# Asset store
assets:
  root: "assets/jewelry"
"#;

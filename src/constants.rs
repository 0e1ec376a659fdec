//! Constants used throughout the application

/// Number of face mesh landmarks per detected face
pub const NUM_FACE_LANDMARKS: usize = 468;

/// Number of hand landmarks per detected hand
pub const NUM_HAND_LANDMARKS: usize = 21;

/// Default exponential smoothing factor (weight of the newest observation)
pub const DEFAULT_SMOOTHING_ALPHA: f32 = 0.2;

/// Per-category overlay scale factors relative to intrinsic asset size
pub const EARRING_SCALE: f32 = 0.07;
pub const NECKLACE_SCALE: f32 = 0.18;
pub const BRACELET_SCALE: f32 = 0.15;
pub const RING_SCALE: f32 = 0.05;

/// Pixel bias applied to the left-ear anchor (clears the ear silhouette)
pub const LEFT_EAR_BIAS: (f32, f32) = (-6.0, -16.0);

/// Pixel bias applied to the right-ear anchor
pub const RIGHT_EAR_BIAS: (f32, f32) = (6.0, -16.0);

/// Pixel bias applied to the necklace anchor (below the chin)
pub const NECK_BIAS: (f32, f32) = (-8.0, 10.0);

/// Rotation added to the wrist-to-knuckle angle so bracelets lie across the forearm
pub const BRACELET_ANGLE_OFFSET: f32 = std::f32::consts::FRAC_PI_2;

/// Hand span (wrist to middle fingertip, pixels) at which the size-aware
/// ring scale equals [`RING_SCALE`]
pub const REFERENCE_HAND_SPAN: f32 = 250.0;

/// Fallback variant count for unrecognized hand-worn categories
pub const DEFAULT_HAND_VARIANTS: u32 = 5;

/// Fallback variant count for unrecognized face-worn category/tier pairs
pub const DEFAULT_FACE_VARIANTS: u32 = 15;

/// Requested camera capture resolution
pub const DEFAULT_CAPTURE_WIDTH: u32 = 1280;
pub const DEFAULT_CAPTURE_HEIGHT: u32 = 720;

/// Default tracker options
pub const DEFAULT_MAX_FACES: usize = 1;
pub const DEFAULT_MAX_HANDS: usize = 2;
pub const DEFAULT_MIN_DETECTION_CONFIDENCE: f32 = 0.6;
pub const DEFAULT_MIN_TRACKING_CONFIDENCE: f32 = 0.6;

/// Smoothing factor bounds
pub const SMOOTHING_ALPHA_MIN: f32 = 0.0;
pub const SMOOTHING_ALPHA_MAX: f32 = 1.0;

/// Numeric precision epsilon
pub const EPSILON: f32 = 1e-6;

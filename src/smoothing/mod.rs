//! Landmark smoothing for jitter reduction.
//!
//! Trackers report slightly different positions every frame even for a
//! still subject; overlays anchored to raw landmarks visibly shiver. The
//! smoothers here blend each incoming frame against the previous smoothed
//! state before it reaches the anchor resolver.

/// Single-pole exponential smoother over landmark frames
pub mod exponential;

/// Per-hand smoothing for multi-hand tracker output
pub mod hand_set;

use crate::landmarks::LandmarkFrame;
use crate::Result;

/// Trait for all landmark smoothers
pub trait LandmarkSmoother: Send + Sync {
    /// Fold an incoming detection into the smoothed state.
    ///
    /// An absent detection means tracking was lost: the state is dropped
    /// and nothing is returned. Smoothers never extrapolate.
    fn apply(&mut self, incoming: Option<&LandmarkFrame>) -> Option<LandmarkFrame>;

    /// Drop the smoothed state; the next detection seeds verbatim
    fn reset(&mut self);

    /// Get smoother name
    fn name(&self) -> &str;
}

/// No-op smoother that passes detections through unchanged
pub struct Passthrough;

impl LandmarkSmoother for Passthrough {
    fn apply(&mut self, incoming: Option<&LandmarkFrame>) -> Option<LandmarkFrame> {
        incoming.cloned()
    }

    fn reset(&mut self) {}

    fn name(&self) -> &str {
        "Passthrough"
    }
}

/// Create a landmark smoother by type name
pub fn create_smoother(kind: &str, alpha: f32) -> Result<Box<dyn LandmarkSmoother>> {
    match kind.to_lowercase().as_str() {
        "none" | "passthrough" => Ok(Box::new(Passthrough)),
        "exponential" => Ok(Box::new(exponential::ExponentialSmoother::new(alpha))),
        _ => Err(crate::Error::Smoothing(format!("Unknown smoother type: {kind}"))),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::landmarks::Landmark;

    #[test]
    fn test_passthrough() {
        let mut smoother = Passthrough;
        let frame = vec![Landmark::new(0.1, 0.2, 0.3)];
        assert_eq!(smoother.apply(Some(&frame)), Some(frame.clone()));
        assert_eq!(smoother.apply(None), None);
    }

    #[test]
    fn test_create_smoother() {
        assert!(create_smoother("none", 0.2).is_ok());
        assert!(create_smoother("exponential", 0.2).is_ok());
        assert!(create_smoother("kalman", 0.2).is_err());
    }
}

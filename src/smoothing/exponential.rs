use super::LandmarkSmoother;
use crate::landmarks::{Landmark, LandmarkFrame};

/// Exponential smoothing over landmark frames.
///
/// Each axis of each landmark is blended independently:
/// `smoothed = previous * (1 - alpha) + incoming * alpha`. The output is a
/// strict convex combination, so it always lies between the previous and
/// incoming values and never overshoots. Lower alpha means smoother motion
/// with more lag.
pub struct ExponentialSmoother {
    alpha: f32,
    state: Option<LandmarkFrame>,
}

impl ExponentialSmoother {
    pub fn new(alpha: f32) -> Self {
        assert!(alpha > 0.0 && alpha <= 1.0, "Alpha must be in (0, 1]");
        Self { alpha, state: None }
    }
}

impl LandmarkSmoother for ExponentialSmoother {
    fn apply(&mut self, incoming: Option<&LandmarkFrame>) -> Option<LandmarkFrame> {
        let Some(incoming) = incoming else {
            // Tracking lost: drop the state rather than extrapolate
            self.state = None;
            return None;
        };

        let smoothed: LandmarkFrame = match self.state.take() {
            Some(previous) if previous.len() == incoming.len() => previous
                .iter()
                .zip(incoming.iter())
                .map(|(prev, new)| {
                    Landmark::new(
                        prev.x * (1.0 - self.alpha) + new.x * self.alpha,
                        prev.y * (1.0 - self.alpha) + new.y * self.alpha,
                        prev.z * (1.0 - self.alpha) + new.z * self.alpha,
                    )
                })
                .collect(),
            // Cold start, or the tracker changed its landmark layout:
            // seed from the incoming frame verbatim
            _ => incoming.clone(),
        };

        self.state = Some(smoothed.clone());
        Some(smoothed)
    }

    fn reset(&mut self) {
        self.state = None;
    }

    fn name(&self) -> &str {
        "ExponentialSmoother"
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn frame(x: f32, y: f32, z: f32) -> LandmarkFrame {
        vec![Landmark::new(x, y, z)]
    }

    #[test]
    fn test_first_frame_passes_through() {
        let mut smoother = ExponentialSmoother::new(0.2);
        let seeded = smoother.apply(Some(&frame(0.4, 0.6, 0.1))).unwrap();
        assert_eq!(seeded[0], Landmark::new(0.4, 0.6, 0.1));
    }

    #[test]
    fn test_second_frame_is_blended() {
        let mut smoother = ExponentialSmoother::new(0.5);
        smoother.apply(Some(&frame(0.0, 0.0, 0.0)));
        let blended = smoother.apply(Some(&frame(1.0, 0.5, 0.2))).unwrap();
        assert!((blended[0].x - 0.5).abs() < 1e-6);
        assert!((blended[0].y - 0.25).abs() < 1e-6);
        assert!((blended[0].z - 0.1).abs() < 1e-6);
    }

    #[test]
    fn test_output_never_overshoots() {
        let mut smoother = ExponentialSmoother::new(0.2);
        smoother.apply(Some(&frame(0.2, 0.8, 0.0)));
        let blended = smoother.apply(Some(&frame(0.6, 0.4, 0.0))).unwrap();
        assert!(blended[0].x >= 0.2 && blended[0].x <= 0.6);
        assert!(blended[0].y >= 0.4 && blended[0].y <= 0.8);
    }

    #[test]
    fn test_constant_input_converges() {
        let mut smoother = ExponentialSmoother::new(0.2);
        smoother.apply(Some(&frame(0.0, 0.0, 0.0)));
        let target = frame(0.7, 0.3, 0.1);
        let mut last = frame(0.0, 0.0, 0.0);
        for _ in 0..200 {
            last = smoother.apply(Some(&target)).unwrap();
        }
        assert!((last[0].x - 0.7).abs() < 1e-4);
        assert!((last[0].y - 0.3).abs() < 1e-4);
    }

    #[test]
    fn test_loss_resets_state() {
        let mut smoother = ExponentialSmoother::new(0.2);
        smoother.apply(Some(&frame(0.1, 0.1, 0.1)));
        assert_eq!(smoother.apply(None), None);

        // Re-detection seeds verbatim, without blending against stale state
        let reseeded = smoother.apply(Some(&frame(0.9, 0.9, 0.9))).unwrap();
        assert_eq!(reseeded[0], Landmark::new(0.9, 0.9, 0.9));
    }

    #[test]
    #[should_panic(expected = "Alpha must be in (0, 1]")]
    fn test_zero_alpha_rejected() {
        let _ = ExponentialSmoother::new(0.0);
    }

    #[test]
    #[should_panic(expected = "Alpha must be in (0, 1]")]
    fn test_too_large_alpha_rejected() {
        let _ = ExponentialSmoother::new(1.5);
    }
}

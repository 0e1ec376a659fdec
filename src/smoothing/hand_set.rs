use super::{exponential::ExponentialSmoother, LandmarkSmoother, Passthrough};
use crate::landmarks::LandmarkFrame;
use crate::{Error, Result};

#[derive(Debug, Clone, Copy, PartialEq)]
enum SlotKind {
    Passthrough,
    Exponential,
}

/// Smooths each detected hand independently.
///
/// Hand identity across frames is positional only, so when the number of
/// tracked hands changes every slot is re-seeded instead of blending one
/// hand's history into another hand's position.
pub struct HandSetSmoother {
    kind: SlotKind,
    alpha: f32,
    slots: Vec<Box<dyn LandmarkSmoother>>,
}

impl HandSetSmoother {
    pub fn new(kind: &str, alpha: f32) -> Result<Self> {
        let kind = match kind.to_lowercase().as_str() {
            "none" | "passthrough" => SlotKind::Passthrough,
            "exponential" => {
                if alpha <= 0.0 || alpha > 1.0 {
                    return Err(Error::Smoothing(format!(
                        "Smoothing alpha must be in (0, 1], got {alpha}"
                    )));
                }
                SlotKind::Exponential
            }
            other => return Err(Error::Smoothing(format!("Unknown smoother type: {other}"))),
        };

        Ok(Self {
            kind,
            alpha,
            slots: Vec::new(),
        })
    }

    fn new_slot(&self) -> Box<dyn LandmarkSmoother> {
        match self.kind {
            SlotKind::Passthrough => Box::new(Passthrough),
            SlotKind::Exponential => Box::new(ExponentialSmoother::new(self.alpha)),
        }
    }

    /// Smooth the hand frames reported this frame.
    ///
    /// An empty slice means no hands were detected; all slots are dropped
    /// so the next detection seeds fresh.
    pub fn apply(&mut self, hands: &[LandmarkFrame]) -> Vec<LandmarkFrame> {
        if hands.len() != self.slots.len() {
            self.slots = (0..hands.len()).map(|_| self.new_slot()).collect();
        }

        hands
            .iter()
            .zip(self.slots.iter_mut())
            .filter_map(|(hand, slot)| slot.apply(Some(hand)))
            .collect()
    }

    /// Drop all per-hand state
    pub fn reset(&mut self) {
        self.slots.clear();
    }
}

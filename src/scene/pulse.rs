//! The continuously "breathing" tap target of the closing section.

use crate::{
    animation::anim::{Anim, LoopMode},
    animation::ease::Ease,
    animation::ops::{looped_sequence, timing},
    foundation::core::Millis,
    foundation::error::KeepsakeResult,
};

const PULSE_PEAK_SCALE: f64 = 1.15;
const PULSE_HALF_MS: u64 = 800;

/// Infinite, non-reversing 1 -> 1.15 -> 1 scale oscillation. The control is
/// stateless about taps: the owning screen decides what a press means.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct PulsingHeart {
    scale: Anim<f64>,
}

impl Default for PulsingHeart {
    fn default() -> Self {
        Self::new()
    }
}

impl PulsingHeart {
    pub fn new() -> Self {
        let scale = looped_sequence(
            1.0,
            vec![
                timing(PULSE_PEAK_SCALE, PULSE_HALF_MS, Ease::InOutSine),
                timing(1.0, PULSE_HALF_MS, Ease::InOutSine),
            ],
            LoopMode::Repeat,
        );
        Self { scale }
    }

    pub fn scale_at(&self, at: Millis) -> KeepsakeResult<f64> {
        self.scale.sample(at)
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/pulse.rs"]
mod tests;

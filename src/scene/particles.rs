//! Decorative particle fields. Every particle samples its randomized
//! configuration exactly once, at spawn, and then owns a fixed set of
//! animation programs for the rest of the screen's lifetime.

use rand::Rng;

use crate::{
    animation::anim::{Anim, LoopMode},
    animation::ease::Ease,
    animation::ops::{delay, looped_sequence, timing},
    foundation::core::{Millis, Viewport},
    foundation::error::KeepsakeResult,
};

/// Sparkles only spawn in the upper portion of the section.
pub const SPARKLE_FIELD_HEIGHT_FRACTION: f64 = 0.8;
const SPARKLE_PULSE_MS: u64 = 1200;
const SPARKLE_DRIFT_MS: u64 = 2400;
const SPARKLE_DRIFT_PX: f64 = -30.0;
const SPARKLE_SCALE_MIN: f64 = 0.3;
const SPARKLE_SIZE_MIN: f64 = 8.0;
const SPARKLE_SIZE_SPAN: f64 = 16.0;
const SPARKLE_DELAY_SPAN_MS: f64 = 3000.0;

/// A twinkling sparkle: opacity pulses 0 -> 1 -> 0, scale pulses in
/// lockstep between 0.3 and 1, and the whole glyph drifts up and back.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Sparkle {
    pub id: u32,
    pub x: f64,
    pub y: f64,
    pub size: f64,
    pub delay_ms: u64,
    opacity: Anim<f64>,
    scale: Anim<f64>,
    drift: Anim<f64>,
}

/// Instantaneous visual state of a sparkle.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct SparkleFrame {
    pub opacity: f64,
    pub scale: f64,
    pub drift_y: f64,
}

impl Sparkle {
    pub fn new(id: u32, x: f64, y: f64, size: f64, delay_ms: u64) -> Self {
        let opacity = delay(
            looped_sequence(
                0.0,
                vec![
                    timing(1.0, SPARKLE_PULSE_MS, Ease::InOutSine),
                    timing(0.0, SPARKLE_PULSE_MS, Ease::InOutSine),
                ],
                LoopMode::Repeat,
            ),
            delay_ms,
        );
        let scale = delay(
            looped_sequence(
                SPARKLE_SCALE_MIN,
                vec![
                    timing(1.0, SPARKLE_PULSE_MS, Ease::Linear),
                    timing(SPARKLE_SCALE_MIN, SPARKLE_PULSE_MS, Ease::Linear),
                ],
                LoopMode::Repeat,
            ),
            delay_ms,
        );
        let drift = delay(
            looped_sequence(
                0.0,
                vec![timing(SPARKLE_DRIFT_PX, SPARKLE_DRIFT_MS, Ease::InOutSine)],
                LoopMode::PingPong,
            ),
            delay_ms,
        );
        Self {
            id,
            x,
            y,
            size,
            delay_ms,
            opacity,
            scale,
            drift,
        }
    }

    /// Spawn a field of `count` sparkles with positions sampled uniformly in
    /// `[0, width) x [0, 0.8 * height)` and randomized size and delay.
    pub fn spawn_field(count: usize, viewport: Viewport, rng: &mut impl Rng) -> Vec<Self> {
        (0..count)
            .map(|i| {
                let x = rng.random::<f64>() * viewport.width;
                let y = rng.random::<f64>() * viewport.height * SPARKLE_FIELD_HEIGHT_FRACTION;
                let size = SPARKLE_SIZE_MIN + rng.random::<f64>() * SPARKLE_SIZE_SPAN;
                let delay_ms = (rng.random::<f64>() * SPARKLE_DELAY_SPAN_MS) as u64;
                Self::new(i as u32, x, y, size, delay_ms)
            })
            .collect()
    }

    /// A copy of this sparkle re-homed for the closing section: same size
    /// and phase offset, vertically compressed position, extra start delay.
    pub fn echo(&self, extra_delay_ms: u64, y_scale: f64) -> Self {
        Self::new(
            self.id,
            self.x,
            self.y * y_scale,
            self.size,
            self.delay_ms + extra_delay_ms,
        )
    }

    pub fn sample(&self, at: Millis) -> KeepsakeResult<SparkleFrame> {
        Ok(SparkleFrame {
            opacity: self.opacity.sample(at)?,
            scale: self.scale.sample(at)?,
            drift_y: self.drift.sample(at)?,
        })
    }
}

const HEART_RISE_MIN_MS: u64 = 6000;
const HEART_RISE_SPAN_MS: f64 = 4000.0;
const HEART_FADE_MS: u64 = 1500;
const HEART_PEAK_OPACITY: f64 = 0.15;
const HEART_EXIT_Y: f64 = -100.0;
const HEART_SWAY_DEG: f64 = 15.0;
const HEART_SWAY_MS: u64 = 2000;
const HEART_SIZE_MIN: f64 = 16.0;
const HEART_SIZE_SPAN: f64 = 24.0;
const HEART_SPAWN_STAGGER_MS: u64 = 1200;

/// A heart that rises from below the viewport to past its top edge, fading
/// in and out, swaying between +15 and -15 degrees. The rise duration is
/// randomized once per instance; each loop restarts from the bottom.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct FloatingHeart {
    pub id: u32,
    pub x: f64,
    pub size: f64,
    pub delay_ms: u64,
    pub duration_ms: u64,
    rise: Anim<f64>,
    opacity: Anim<f64>,
    sway: Anim<f64>,
}

/// Instantaneous visual state of a floating heart.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct HeartFrame {
    pub rise_y: f64,
    pub opacity: f64,
    pub sway_deg: f64,
}

impl FloatingHeart {
    pub fn new(
        id: u32,
        x: f64,
        size: f64,
        delay_ms: u64,
        duration_ms: u64,
        viewport_height: f64,
    ) -> Self {
        let rise = delay(
            looped_sequence(
                viewport_height,
                vec![timing(HEART_EXIT_Y, duration_ms, Ease::InOutSine)],
                LoopMode::Repeat,
            ),
            delay_ms,
        );
        // Fade-in / hold / fade-out envelope. The hold is whatever remains
        // of the rise after both fades; rises shorter than the two fades
        // clamp to a zero-length hold.
        let hold_ms = duration_ms.saturating_sub(2 * HEART_FADE_MS);
        let opacity = delay(
            looped_sequence(
                0.0,
                vec![
                    timing(HEART_PEAK_OPACITY, HEART_FADE_MS, Ease::Linear),
                    timing(HEART_PEAK_OPACITY, hold_ms, Ease::Linear),
                    timing(0.0, HEART_FADE_MS, Ease::Linear),
                ],
                LoopMode::Repeat,
            ),
            delay_ms,
        );
        let sway = delay(
            looped_sequence(
                0.0,
                vec![
                    timing(HEART_SWAY_DEG, HEART_SWAY_MS, Ease::Linear),
                    timing(-HEART_SWAY_DEG, HEART_SWAY_MS, Ease::Linear),
                ],
                LoopMode::PingPong,
            ),
            delay_ms,
        );
        Self {
            id,
            x,
            size,
            delay_ms,
            duration_ms,
            rise,
            opacity,
            sway,
        }
    }

    /// Spawn `count` hearts with uniform random x in `[0, width)`, random
    /// size, staggered fixed delays, and a per-instance rise duration drawn
    /// once from `[6000, 10000)` ms.
    pub fn spawn_field(count: usize, viewport: Viewport, rng: &mut impl Rng) -> Vec<Self> {
        (0..count)
            .map(|i| {
                let x = rng.random::<f64>() * viewport.width;
                let size = HEART_SIZE_MIN + rng.random::<f64>() * HEART_SIZE_SPAN;
                let delay_ms = i as u64 * HEART_SPAWN_STAGGER_MS;
                let duration_ms =
                    HEART_RISE_MIN_MS + (rng.random::<f64>() * HEART_RISE_SPAN_MS) as u64;
                Self::new(i as u32, x, size, delay_ms, duration_ms, viewport.height)
            })
            .collect()
    }

    pub fn sample(&self, at: Millis) -> KeepsakeResult<HeartFrame> {
        Ok(HeartFrame {
            rise_y: self.rise.sample(at)?,
            opacity: self.opacity.sample(at)?,
            sway_deg: self.sway.sample(at)?,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/particles.rs"]
mod tests;

//! One-shot entrance animations. Every visible element declares an entrance
//! keyed by a fixed delay relative to section mount; larger delays settle
//! later, producing the staggered reveal. Entrances are not scroll-aware.

use crate::{
    animation::anim::Anim,
    animation::ease::Ease,
    animation::ops::{delay, sequence, timing},
    foundation::core::{Millis, Vec2},
    foundation::error::KeepsakeResult,
};

/// Vertical travel of the slide-in variants, in points.
const ENTRANCE_OFFSET: f64 = 24.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum EntranceKind {
    /// Fade from transparent in place.
    FadeIn,
    /// Fade in while sliding up into position.
    FadeInUp,
    /// Fade in while sliding down into position.
    FadeInDown,
}

/// A one-shot fade/slide program. Opacity goes 0 -> 1 and the offset decays
/// to zero over `duration_ms`, starting `delay_ms` after mount; both hold
/// their final values forever after.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Entrance {
    pub kind: EntranceKind,
    pub delay_ms: u64,
    pub duration_ms: u64,
    opacity: Anim<f64>,
    offset: Anim<Vec2>,
}

/// Instantaneous entrance state.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct EntranceFrame {
    pub opacity: f64,
    pub offset: Vec2,
}

impl Entrance {
    pub fn new(kind: EntranceKind, delay_ms: u64, duration_ms: u64) -> Self {
        let opacity = delay(
            sequence(0.0, vec![timing(1.0, duration_ms, Ease::OutCubic)]),
            delay_ms,
        );
        let from = match kind {
            EntranceKind::FadeIn => Vec2::ZERO,
            EntranceKind::FadeInUp => Vec2::new(0.0, ENTRANCE_OFFSET),
            EntranceKind::FadeInDown => Vec2::new(0.0, -ENTRANCE_OFFSET),
        };
        let offset = delay(
            sequence(from, vec![timing(Vec2::ZERO, duration_ms, Ease::OutCubic)]),
            delay_ms,
        );
        Self {
            kind,
            delay_ms,
            duration_ms,
            opacity,
            offset,
        }
    }

    pub fn fade_in(delay_ms: u64, duration_ms: u64) -> Self {
        Self::new(EntranceKind::FadeIn, delay_ms, duration_ms)
    }

    pub fn fade_in_up(delay_ms: u64, duration_ms: u64) -> Self {
        Self::new(EntranceKind::FadeInUp, delay_ms, duration_ms)
    }

    pub fn fade_in_down(delay_ms: u64, duration_ms: u64) -> Self {
        Self::new(EntranceKind::FadeInDown, delay_ms, duration_ms)
    }

    /// Timestamp at which this entrance has fully settled.
    pub fn settles_at(&self) -> Millis {
        Millis(self.delay_ms + self.duration_ms)
    }

    pub fn sample(&self, at: Millis) -> KeepsakeResult<EntranceFrame> {
        Ok(EntranceFrame {
            opacity: self.opacity.sample(at)?,
            offset: self.offset.sample(at)?,
        })
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/reveal.rs"]
mod tests;

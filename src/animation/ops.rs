//! Free-function surface for building animation programs as ordered steps:
//! timed transitions with easing, delays, and finite or infinite loops.

use crate::animation::anim::{Anim, Expr, InterpMode, Keyframe, Keyframes, Lerp, LoopMode};
use crate::animation::ease::Ease;
use crate::foundation::core::Millis;

/// One step of a sequence: ease toward `to` over `duration_ms`.
#[derive(Clone, Debug)]
pub struct TimingStep<T> {
    pub to: T,
    pub duration_ms: u64,
    pub ease: Ease,
}

pub fn timing<T>(to: T, duration_ms: u64, ease: Ease) -> TimingStep<T> {
    TimingStep {
        to,
        duration_ms,
        ease,
    }
}

/// Play `steps` in order, starting from `from` at t = 0. The resulting
/// program holds its final value once the last step completes.
pub fn sequence<T: Lerp + Clone>(from: T, steps: Vec<TimingStep<T>>) -> Anim<T> {
    let mut keys = Vec::with_capacity(steps.len() + 1);
    let mut cursor = 0u64;
    let first_ease = steps.first().map_or(Ease::Linear, |s| s.ease);
    keys.push(Keyframe {
        at: Millis(0),
        value: from,
        ease: first_ease,
    });
    let mut steps = steps.into_iter().peekable();
    while let Some(step) = steps.next() {
        cursor = cursor.saturating_add(step.duration_ms);
        // Each key carries the ease used toward the NEXT key.
        let next_ease = steps.peek().map_or(Ease::Linear, |s| s.ease);
        keys.push(Keyframe {
            at: Millis(cursor),
            value: step.to,
            ease: next_ease,
        });
    }
    Anim::Keyframes(Keyframes {
        keys,
        mode: InterpMode::Linear,
    })
}

pub fn delay<T>(inner: Anim<T>, by_ms: u64) -> Anim<T> {
    Anim::Expr(Expr::Delay {
        inner: Box::new(inner),
        by_ms,
    })
}

pub fn loop_<T>(inner: Anim<T>, period_ms: u64, mode: LoopMode) -> Anim<T> {
    Anim::Expr(Expr::Loop {
        inner: Box::new(inner),
        period_ms,
        mode,
        cycles: None,
    })
}

/// Finite repetition: play `cycles` traversals of the inner program, then
/// hold the final traversal's end value.
pub fn repeat<T>(inner: Anim<T>, period_ms: u64, cycles: u64, mode: LoopMode) -> Anim<T> {
    Anim::Expr(Expr::Loop {
        inner: Box::new(inner),
        period_ms,
        mode,
        cycles: Some(cycles),
    })
}

/// Infinite repetition of a step sequence, with the loop period taken from
/// the sequence's own span. `PingPong` reverses every other cycle.
pub fn looped_sequence<T: Lerp + Clone>(
    from: T,
    steps: Vec<TimingStep<T>>,
    mode: LoopMode,
) -> Anim<T> {
    let span: u64 = steps.iter().map(|s| s.duration_ms).sum();
    let inner = sequence(from, steps);
    // A degenerate all-zero-duration sequence cannot loop; hold it instead.
    if span == 0 {
        return inner;
    }
    loop_(inner, span, mode)
}

#[cfg(test)]
#[path = "../../tests/unit/animation/ops.rs"]
mod tests;

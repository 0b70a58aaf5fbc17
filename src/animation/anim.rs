use crate::{
    animation::ease::Ease,
    foundation::core::{Millis, Vec2},
    foundation::error::{KeepsakeError, KeepsakeResult},
};

/// Interpolation over the driven value type.
pub trait Lerp: Sized {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self;
}

impl Lerp for f64 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        a + (b - a) * t
    }
}

impl Lerp for Vec2 {
    fn lerp(a: &Self, b: &Self, t: f64) -> Self {
        Vec2::new(a.x + (b.x - a.x) * t, a.y + (b.y - a.y) * t)
    }
}

/// A declarative animation program producing a value for any timestamp.
///
/// Programs are pure data: sampling the same program at the same timestamp
/// always yields the same value, so owners never manage timers and teardown
/// is simply dropping the program.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum Anim<T> {
    Keyframes(Keyframes<T>),
    Expr(Expr<T>),
}

impl<T> Anim<T>
where
    T: Lerp + Clone,
{
    pub fn constant(value: T) -> Self {
        Self::Keyframes(Keyframes {
            keys: vec![Keyframe {
                at: Millis(0),
                value,
                ease: Ease::Linear,
            }],
            mode: InterpMode::Hold,
        })
    }

    pub fn sample(&self, at: Millis) -> KeepsakeResult<T> {
        match self {
            Self::Keyframes(kf) => kf.sample(at),
            Self::Expr(expr) => expr.sample(at),
        }
    }

    pub fn validate(&self) -> KeepsakeResult<()> {
        match self {
            Self::Keyframes(kf) => kf.validate(),
            Self::Expr(expr) => expr.validate(),
        }
    }
}

/// An ordered keyframe program. Before the first key the program holds the
/// first value; after the last key it holds the last value, which is what
/// makes one-shot entrance programs settle.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Keyframes<T> {
    pub keys: Vec<Keyframe<T>>, // sorted by timestamp
    pub mode: InterpMode,
}

impl<T> Keyframes<T>
where
    T: Lerp + Clone,
{
    pub fn validate(&self) -> KeepsakeResult<()> {
        if self.keys.is_empty() {
            return Err(KeepsakeError::animation(
                "Keyframes must have at least one key",
            ));
        }
        if !self.keys.windows(2).all(|w| w[0].at.0 <= w[1].at.0) {
            return Err(KeepsakeError::animation(
                "Keyframes keys must be sorted by timestamp",
            ));
        }
        Ok(())
    }

    pub fn sample(&self, at: Millis) -> KeepsakeResult<T> {
        if self.keys.is_empty() {
            return Err(KeepsakeError::animation("Keyframes has no keys"));
        }

        let t_ms = at.0;
        let idx = self.keys.partition_point(|k| k.at.0 <= t_ms);

        if idx == 0 {
            return Ok(self.keys[0].value.clone());
        }
        if idx >= self.keys.len() {
            return Ok(self.keys[self.keys.len() - 1].value.clone());
        }

        let a = &self.keys[idx - 1];
        let b = &self.keys[idx];
        let denom = b.at.0.saturating_sub(a.at.0);
        if denom == 0 {
            return Ok(a.value.clone());
        }

        let t = ((t_ms - a.at.0) as f64) / (denom as f64);
        let te = a.ease.apply(t);
        match self.mode {
            InterpMode::Hold => Ok(a.value.clone()),
            InterpMode::Linear => Ok(T::lerp(&a.value, &b.value, te)),
        }
    }
}

#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Keyframe<T> {
    pub at: Millis,
    pub value: T,
    pub ease: Ease, // ease applied toward next key
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum InterpMode {
    Hold,
    Linear,
}

/// Time-remapping wrappers around an inner program.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub enum Expr<T> {
    /// Hold the inner program's initial value for `by_ms`, then play it.
    Delay { inner: Box<Anim<T>>, by_ms: u64 },
    /// Restart (or reverse, for `PingPong`) the inner program every
    /// `period_ms`. `cycles: None` loops forever; `Some(n)` plays n
    /// traversals and then holds the final traversal's end value.
    Loop {
        inner: Box<Anim<T>>,
        period_ms: u64,
        mode: LoopMode,
        cycles: Option<u64>,
    },
}

#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub enum LoopMode {
    Repeat,
    PingPong,
}

impl<T> Expr<T>
where
    T: Lerp + Clone,
{
    pub fn validate(&self) -> KeepsakeResult<()> {
        match self {
            Self::Delay { inner, by_ms: _ } => inner.validate(),
            Self::Loop {
                inner,
                period_ms,
                mode: _,
                cycles,
            } => {
                if *period_ms == 0 {
                    return Err(KeepsakeError::animation("Loop period must be > 0"));
                }
                if *cycles == Some(0) {
                    return Err(KeepsakeError::animation("Loop cycle count must be > 0"));
                }
                inner.validate()
            }
        }
    }

    pub fn sample(&self, at: Millis) -> KeepsakeResult<T> {
        match self {
            Self::Delay { inner, by_ms } => {
                let mapped = Millis(at.0.saturating_sub(*by_ms));
                inner.sample(mapped)
            }
            Self::Loop {
                inner,
                period_ms,
                mode,
                cycles,
            } => {
                if *period_ms == 0 {
                    return Err(KeepsakeError::animation("Loop period must be > 0"));
                }
                // Past a finite cycle count the program parks on the last
                // traversal's end value.
                if let Some(n) = cycles {
                    let total = period_ms.saturating_mul(*n);
                    if at.0 >= total {
                        let end = match mode {
                            LoopMode::Repeat => *period_ms,
                            LoopMode::PingPong if n % 2 == 1 => *period_ms,
                            LoopMode::PingPong => 0,
                        };
                        return inner.sample(Millis(end));
                    }
                }
                let mapped = match mode {
                    LoopMode::Repeat => Millis(at.0 % period_ms),
                    LoopMode::PingPong => {
                        let cycle = 2 * period_ms;
                        let pos = at.0 % cycle;
                        if pos <= *period_ms {
                            Millis(pos)
                        } else {
                            Millis(cycle - pos)
                        }
                    }
                };
                inner.sample(mapped)
            }
        }
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/anim.rs"]
mod tests;

//! Keepsake is an animated greeting presentation engine.
//!
//! It models a single vertically scrolling screen of decorated sections
//! (hero banner, photo gallery, affirmations, a letter, and a closing
//! interactive reveal) as pure data, and evaluates that model into
//! per-element visual state on a millisecond clock.
//!
//! # Pipeline overview
//!
//! 1. **Mount**: `Screen::mount` samples every randomized particle field
//!    once and freezes the entrance schedule.
//! 2. **Evaluate**: `Screen + Millis -> EvaluatedFrame` (opacity and
//!    transform per node, in painter's order).
//! 3. **Interact**: discrete events update the two screen-state values and
//!    emit fire-and-forget [`Command`]s for the hosting shell.
//!
//! The key design constraints:
//!
//! - **No unsafe**: `unsafe` is forbidden in this crate.
//! - **Deterministic-by-seed**: mounts with equal seeds evaluate to
//!   identical frames; `Screen::mount` draws a fresh seed so every mount is
//!   an independent sample.
//! - **No timers**: animation state is a pure function of time, so dropping
//!   the screen tears down every loop.
#![forbid(unsafe_code)]

mod animation;
mod eval;
mod foundation;
mod platform;
mod scene;
mod theme;

pub use animation::anim::{Anim, Expr, InterpMode, Keyframe, Keyframes, Lerp, LoopMode};
pub use animation::ease::Ease;
pub use animation::ops::{TimingStep, delay, loop_, looped_sequence, repeat, sequence, timing};
pub use eval::evaluator::{EvaluatedFrame, EvaluatedNode, Evaluator, NodeKind};
pub use foundation::core::{Affine, LinearGradient, Millis, Rgba8, Transform2D, Vec2, Viewport};
pub use foundation::error::{KeepsakeError, KeepsakeResult};
pub use platform::{Command, Haptic, Platform, SafeAreaInsets, SafeAreaPadding};
pub use scene::carousel::{CARD_STRIDE_FRACTION, CarouselTracker};
pub use scene::content::{Affirmation, Content, IconKind, Letter, PhotoItem};
pub use scene::particles::{
    FloatingHeart, HeartFrame, SPARKLE_FIELD_HEIGHT_FRACTION, Sparkle, SparkleFrame,
};
pub use scene::pulse::PulsingHeart;
pub use scene::reveal::{Entrance, EntranceFrame, EntranceKind};
pub use scene::screen::{
    Element, HERO_HEART_COUNT, HERO_SPARKLE_COUNT, SCROLL_TARGET_FRACTION, SURPRISE_SPARKLE_COUNT,
    Screen, ScreenBuilder, SectionId,
};
pub use theme::{
    Palette, ROMANTIC, about_gradient, gallery_gradient, heart_button_gradient, hero_gradient,
    letter_card_gradient, letter_gradient, reveal_gradient, scroll_button_gradient,
    surprise_gradient,
};

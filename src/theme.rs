//! Fixed presentation palette and section background gradients. There is no
//! runtime theme switching; the palette is process-wide immutable data.

use crate::foundation::core::{LinearGradient, Rgba8};

/// Named colors used throughout the screen.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Palette {
    pub blush_pink: Rgba8,
    pub deep_rose: Rgba8,
    pub lavender: Rgba8,
    pub soft_gold: Rgba8,
    pub warm_cream: Rgba8,
    pub petal: Rgba8,
    pub deep_purple: Rgba8,
    pub heart_red: Rgba8,
    pub text_primary: Rgba8,
    pub text_secondary: Rgba8,
    pub sparkle: Rgba8,
}

/// The one palette this presentation ships with.
pub const ROMANTIC: Palette = Palette {
    blush_pink: Rgba8::rgb(0xFF, 0xB6, 0xC1),
    deep_rose: Rgba8::rgb(0xD4, 0x48, 0x7A),
    lavender: Rgba8::rgb(0xD8, 0xB4, 0xE2),
    soft_gold: Rgba8::rgb(0xF5, 0xD5, 0xA0),
    warm_cream: Rgba8::rgb(0xFF, 0xF8, 0xF0),
    petal: Rgba8::rgb(0xFF, 0xE4, 0xEC),
    deep_purple: Rgba8::rgb(0x4A, 0x19, 0x42),
    heart_red: Rgba8::rgb(0xE8, 0x40, 0x57),
    text_primary: Rgba8::rgb(0x2D, 0x1B, 0x30),
    text_secondary: Rgba8::rgb(0x6B, 0x4D, 0x6E),
    sparkle: Rgba8::rgb(0xFF, 0xD7, 0x00),
};

pub fn hero_gradient() -> LinearGradient {
    LinearGradient {
        colors: vec![
            Rgba8::rgb(0x2D, 0x1B, 0x30),
            Rgba8::rgb(0x4A, 0x19, 0x42),
            Rgba8::rgb(0x6B, 0x2D, 0x5B),
            Rgba8::rgb(0x8B, 0x3A, 0x62),
        ],
        start: (0.0, 0.0),
        end: (0.5, 1.0),
    }
}

pub fn gallery_gradient() -> LinearGradient {
    LinearGradient::vertical(vec![
        Rgba8::rgb(0xFF, 0xF0, 0xF3),
        Rgba8::rgb(0xFF, 0xF8, 0xF0),
        Rgba8::rgb(0xFF, 0xE4, 0xEC),
    ])
}

pub fn about_gradient() -> LinearGradient {
    LinearGradient::vertical(vec![
        Rgba8::rgb(0xFF, 0xE4, 0xEC),
        Rgba8::rgb(0xF8, 0xE8, 0xF0),
        Rgba8::rgb(0xE8, 0xD4, 0xF0),
    ])
}

pub fn letter_gradient() -> LinearGradient {
    LinearGradient::vertical(vec![
        Rgba8::rgb(0xE8, 0xD4, 0xF0),
        Rgba8::rgb(0xDB, 0xC4, 0xE8),
        Rgba8::rgb(0xD8, 0xB4, 0xE2),
    ])
}

pub fn surprise_gradient() -> LinearGradient {
    LinearGradient::vertical(vec![
        Rgba8::rgb(0x4A, 0x19, 0x42),
        Rgba8::rgb(0x2D, 0x1B, 0x30),
        Rgba8::rgb(0x1A, 0x0F, 0x1E),
    ])
}

pub fn heart_button_gradient() -> LinearGradient {
    LinearGradient::diagonal(vec![
        Rgba8::rgb(0xE8, 0x40, 0x57),
        Rgba8::rgb(0xD4, 0x48, 0x7A),
        Rgba8::rgb(0xC7, 0x4B, 0x90),
    ])
}

pub fn scroll_button_gradient() -> LinearGradient {
    LinearGradient::diagonal(vec![
        Rgba8::rgb(0xD4, 0x48, 0x7A),
        Rgba8::rgb(0xE8, 0x40, 0x57),
    ])
}

pub fn letter_card_gradient() -> LinearGradient {
    LinearGradient::vertical(vec![
        Rgba8::rgb(0xFF, 0xFF, 0xFF).with_alpha(242),
        Rgba8::rgb(0xFF, 0xF0, 0xF3).with_alpha(242),
    ])
}

pub fn reveal_gradient() -> LinearGradient {
    LinearGradient::vertical(vec![
        Rgba8::rgba(0xD4, 0x48, 0x7A, 51),
        Rgba8::rgba(0xE8, 0x40, 0x57, 51),
    ])
}

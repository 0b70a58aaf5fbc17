use crate::foundation::error::{KeepsakeError, KeepsakeResult};

pub use kurbo::{Affine, Vec2};

/// Milliseconds since screen mount. All animation programs are keyed on this
/// clock; the shell supplies it from its own render-aligned timer.
#[derive(
    Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, serde::Serialize, serde::Deserialize,
)]
pub struct Millis(pub u64);

impl Millis {
    pub fn saturating_sub(self, other: Millis) -> Millis {
        Millis(self.0.saturating_sub(other.0))
    }
}

/// Logical viewport dimensions in points.
#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Viewport {
    pub width: f64,
    pub height: f64,
}

impl Viewport {
    pub fn new(width: f64, height: f64) -> KeepsakeResult<Self> {
        if !(width > 0.0 && height > 0.0) {
            return Err(KeepsakeError::validation(
                "Viewport dimensions must be positive",
            ));
        }
        Ok(Self { width, height })
    }
}

/// Straight-alpha RGBA8 color.
#[derive(Clone, Copy, Debug, PartialEq, Eq, serde::Serialize, serde::Deserialize)]
pub struct Rgba8 {
    pub r: u8,
    pub g: u8,
    pub b: u8,
    pub a: u8,
}

impl Rgba8 {
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b, a: 255 }
    }

    pub const fn rgba(r: u8, g: u8, b: u8, a: u8) -> Self {
        Self { r, g, b, a }
    }

    pub const fn with_alpha(self, a: u8) -> Self {
        Self { a, ..self }
    }
}

/// A linear gradient over unit-square coordinates, as used for section
/// backgrounds. Stops are evenly spaced along the start-end axis.
#[derive(Clone, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct LinearGradient {
    pub colors: Vec<Rgba8>,
    /// Start point in unit-square coordinates.
    pub start: (f64, f64),
    /// End point in unit-square coordinates.
    pub end: (f64, f64),
}

impl LinearGradient {
    pub fn vertical(colors: Vec<Rgba8>) -> Self {
        Self {
            colors,
            start: (0.0, 0.0),
            end: (0.0, 1.0),
        }
    }

    pub fn diagonal(colors: Vec<Rgba8>) -> Self {
        Self {
            colors,
            start: (0.0, 0.0),
            end: (1.0, 1.0),
        }
    }

    pub fn validate(&self) -> KeepsakeResult<()> {
        if self.colors.len() < 2 {
            return Err(KeepsakeError::validation(
                "LinearGradient needs at least two color stops",
            ));
        }
        Ok(())
    }
}

#[derive(Clone, Copy, Debug, PartialEq, serde::Serialize, serde::Deserialize)]
pub struct Transform2D {
    pub translate: Vec2,
    pub rotation_rad: f64,
    pub scale: Vec2,  // default (1,1)
    pub anchor: Vec2, // pivot in local space
}

impl Default for Transform2D {
    fn default() -> Self {
        Self {
            translate: Vec2::ZERO,
            rotation_rad: 0.0,
            scale: Vec2::new(1.0, 1.0),
            anchor: Vec2::ZERO,
        }
    }
}

impl Transform2D {
    pub fn translation(x: f64, y: f64) -> Self {
        Self {
            translate: Vec2::new(x, y),
            ..Self::default()
        }
    }

    pub fn to_affine(self) -> kurbo::Affine {
        let t_translate = kurbo::Affine::translate(self.translate);
        let t_anchor = kurbo::Affine::translate(self.anchor);
        let t_unanchor = kurbo::Affine::translate(-self.anchor);
        let t_rotate = kurbo::Affine::rotate(self.rotation_rad);
        let t_scale = kurbo::Affine::scale_non_uniform(self.scale.x, self.scale.y);

        // Canonical order:
        // T(translate) * T(anchor) * R(rot) * S(scale) * T(-anchor)
        t_translate * t_anchor * t_rotate * t_scale * t_unanchor
    }
}

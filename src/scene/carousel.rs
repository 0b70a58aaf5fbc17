//! Horizontal-scroll-to-index tracking for the photo carousel.

use crate::foundation::error::{KeepsakeError, KeepsakeResult};

/// Card stride as a fraction of viewport width.
pub const CARD_STRIDE_FRACTION: f64 = 0.78;

/// Converts horizontal scroll offsets into a discrete active index for the
/// dot indicator. Every scroll sample recomputes the index; there is no
/// smoothing or debounce. The index is clamped into the photo list so
/// overscroll and bounce cannot select a nonexistent card.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct CarouselTracker {
    stride: f64,
    photo_count: usize,
    active: usize,
}

impl CarouselTracker {
    pub fn new(viewport_width: f64, photo_count: usize) -> KeepsakeResult<Self> {
        if photo_count == 0 {
            return Err(KeepsakeError::validation(
                "carousel needs at least one photo",
            ));
        }
        if !(viewport_width > 0.0) {
            return Err(KeepsakeError::validation(
                "carousel viewport width must be positive",
            ));
        }
        Ok(Self {
            stride: viewport_width * CARD_STRIDE_FRACTION,
            photo_count,
            active: 0,
        })
    }

    /// Feed one scroll sample; returns the new active index.
    pub fn on_scroll(&mut self, offset_x: f64) -> usize {
        let raw = (offset_x / self.stride).round();
        let clamped = raw.clamp(0.0, (self.photo_count - 1) as f64);
        self.active = clamped as usize;
        self.active
    }

    pub fn active(&self) -> usize {
        self.active
    }

    pub fn stride(&self) -> f64 {
        self.stride
    }

    pub fn photo_count(&self) -> usize {
        self.photo_count
    }
}

#[cfg(test)]
#[path = "../../tests/unit/scene/carousel.rs"]
mod tests;

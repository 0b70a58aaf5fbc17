//! The greeting screen model: five sections, their entrance schedules, the
//! particle fields, and the two pieces of interactive state.

use rand::{Rng, SeedableRng};
use rand_pcg::Pcg32;

use crate::{
    foundation::core::{Millis, Viewport},
    foundation::error::KeepsakeResult,
    platform::{Command, Haptic, Platform, SafeAreaInsets},
    scene::carousel::CarouselTracker,
    scene::content::Content,
    scene::particles::{FloatingHeart, Sparkle},
    scene::pulse::PulsingHeart,
    scene::reveal::{Entrance, EntranceFrame},
};

pub const HERO_SPARKLE_COUNT: usize = 20;
pub const HERO_HEART_COUNT: usize = 8;
pub const SURPRISE_SPARKLE_COUNT: usize = 12;
const SURPRISE_SPARKLE_EXTRA_DELAY_MS: u64 = 500;
const SURPRISE_SPARKLE_Y_SCALE: f64 = 0.4;
/// Scroll-to-surprise target as a fraction of viewport height.
pub const SCROLL_TARGET_FRACTION: f64 = 0.9;
const HERO_BASE_TOP_PADDING: f64 = 60.0;
/// Element id of the pulsing tap target in the closing section.
pub(crate) const HEART_BUTTON_ID: &str = "surprise/heart-button";

/// Screen sections in scroll order.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, serde::Serialize, serde::Deserialize)]
pub enum SectionId {
    Hero,
    Gallery,
    About,
    Letter,
    Surprise,
}

impl SectionId {
    pub const ALL: [SectionId; 5] = [
        SectionId::Hero,
        SectionId::Gallery,
        SectionId::About,
        SectionId::Letter,
        SectionId::Surprise,
    ];

    pub fn index(self) -> usize {
        match self {
            Self::Hero => 0,
            Self::Gallery => 1,
            Self::About => 2,
            Self::Letter => 3,
            Self::Surprise => 4,
        }
    }
}

/// A mount-keyed element with a one-shot entrance.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Element {
    pub id: String,
    pub section: SectionId,
    pub entrance: Entrance,
}

/// The complete screen model. Everything except `active_photo` and the
/// reveal timestamp is immutable after mount; animation state is a pure
/// function of the mount clock.
#[derive(Clone, Debug, serde::Serialize, serde::Deserialize)]
pub struct Screen {
    viewport: Viewport,
    insets: SafeAreaInsets,
    platform: Platform,
    seed: u64,
    content: Content,
    elements: Vec<Element>,
    hero_sparkles: Vec<Sparkle>,
    hero_hearts: Vec<FloatingHeart>,
    surprise_sparkles: Vec<Sparkle>,
    pulse: PulsingHeart,
    reveal_entrance: Entrance,
    carousel: CarouselTracker,
    surprise_revealed_at: Option<Millis>,
}

impl Screen {
    pub fn builder(viewport: Viewport) -> ScreenBuilder {
        ScreenBuilder::new(viewport)
    }

    /// Mount with a fresh random seed: every mount is an independent sample
    /// of all particle fields.
    pub fn mount(
        viewport: Viewport,
        insets: SafeAreaInsets,
        platform: Platform,
    ) -> KeepsakeResult<Self> {
        ScreenBuilder::new(viewport)
            .insets(insets)
            .platform(platform)
            .build()
    }

    pub fn viewport(&self) -> Viewport {
        self.viewport
    }

    pub fn platform(&self) -> Platform {
        self.platform
    }

    pub fn seed(&self) -> u64 {
        self.seed
    }

    pub fn content(&self) -> &Content {
        &self.content
    }

    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    pub fn hero_sparkles(&self) -> &[Sparkle] {
        &self.hero_sparkles
    }

    pub fn hero_hearts(&self) -> &[FloatingHeart] {
        &self.hero_hearts
    }

    pub fn surprise_sparkles(&self) -> &[Sparkle] {
        &self.surprise_sparkles
    }

    pub fn pulse(&self) -> &PulsingHeart {
        &self.pulse
    }

    pub fn carousel(&self) -> &CarouselTracker {
        &self.carousel
    }

    pub fn active_photo(&self) -> usize {
        self.carousel.active()
    }

    pub fn surprise_revealed(&self) -> bool {
        self.surprise_revealed_at.is_some()
    }

    /// Hero top padding: safe-area inset plus platform constants plus the
    /// section's own padding.
    pub fn hero_top_padding(&self) -> f64 {
        self.insets.padding_for(self.platform).top + HERO_BASE_TOP_PADDING
    }

    /// Feed one horizontal scroll sample from the photo list; returns the
    /// recomputed active index.
    pub fn on_photo_scroll(&mut self, offset_x: f64) -> usize {
        let index = self.carousel.on_scroll(offset_x);
        tracing::debug!(offset_x, index, "photo scroll sample");
        index
    }

    /// Handle a press of the "scroll for a surprise" button: a light haptic
    /// on platforms that support one, then exactly one scroll request
    /// targeting `0.9 x viewport height`.
    pub fn press_scroll_button(&self) -> Vec<Command> {
        let mut commands = Vec::with_capacity(2);
        if self.platform.supports_haptics() {
            commands.push(Command::Haptic(Haptic::LightImpact));
        }
        commands.push(Command::ScrollTo {
            y: self.viewport.height * SCROLL_TARGET_FRACTION,
        });
        tracing::debug!("scroll-to-surprise requested");
        commands
    }

    /// Handle a tap on the pulsing heart. The reveal flag flips one way: the
    /// first tap records the reveal timestamp, later taps only replay the
    /// haptic.
    pub fn press_heart(&mut self, at: Millis) -> Vec<Command> {
        let mut commands = Vec::with_capacity(1);
        if self.platform.supports_haptics() {
            commands.push(Command::Haptic(Haptic::SuccessNotification));
        }
        if self.surprise_revealed_at.is_none() {
            self.surprise_revealed_at = Some(at);
            tracing::debug!(at = at.0, "surprise revealed");
        }
        commands
    }

    /// Entrance state of the reveal card, or `None` while it is hidden. The
    /// reveal's entrance clock starts at the tap, not at mount.
    pub fn reveal_frame(&self, at: Millis) -> KeepsakeResult<Option<EntranceFrame>> {
        let Some(revealed_at) = self.surprise_revealed_at else {
            return Ok(None);
        };
        let frame = self.reveal_entrance.sample(at.saturating_sub(revealed_at))?;
        Ok(Some(frame))
    }
}

pub struct ScreenBuilder {
    viewport: Viewport,
    insets: SafeAreaInsets,
    platform: Platform,
    content: Content,
    seed: Option<u64>,
}

impl ScreenBuilder {
    pub fn new(viewport: Viewport) -> Self {
        Self {
            viewport,
            insets: SafeAreaInsets::default(),
            platform: Platform::Ios,
            content: Content::default(),
            seed: None,
        }
    }

    pub fn insets(mut self, insets: SafeAreaInsets) -> Self {
        self.insets = insets;
        self
    }

    pub fn platform(mut self, platform: Platform) -> Self {
        self.platform = platform;
        self
    }

    pub fn content(mut self, content: Content) -> Self {
        self.content = content;
        self
    }

    /// Pin the particle RNG seed; mounts with equal seeds produce identical
    /// particle fields.
    pub fn seed(mut self, seed: u64) -> Self {
        self.seed = Some(seed);
        self
    }

    pub fn build(self) -> KeepsakeResult<Screen> {
        self.content.validate()?;
        let seed = self.seed.unwrap_or_else(|| rand::rng().random());
        let mut rng = Pcg32::seed_from_u64(seed);

        let hero_sparkles = Sparkle::spawn_field(HERO_SPARKLE_COUNT, self.viewport, &mut rng);
        let hero_hearts = FloatingHeart::spawn_field(HERO_HEART_COUNT, self.viewport, &mut rng);
        let surprise_sparkles = hero_sparkles
            .iter()
            .take(SURPRISE_SPARKLE_COUNT)
            .map(|s| s.echo(SURPRISE_SPARKLE_EXTRA_DELAY_MS, SURPRISE_SPARKLE_Y_SCALE))
            .collect();

        let carousel = CarouselTracker::new(self.viewport.width, self.content.photos.len())?;
        let elements = entrance_schedule(&self.content);

        Ok(Screen {
            viewport: self.viewport,
            insets: self.insets,
            platform: self.platform,
            seed,
            content: self.content,
            elements,
            hero_sparkles,
            hero_hearts,
            surprise_sparkles,
            pulse: PulsingHeart::new(),
            reveal_entrance: Entrance::fade_in_up(0, 800),
            carousel,
            surprise_revealed_at: None,
        })
    }
}

/// The authored entrance schedule: fixed delays, all relative to mount.
fn entrance_schedule(content: &Content) -> Vec<Element> {
    fn el(id: impl Into<String>, section: SectionId, entrance: Entrance) -> Element {
        Element {
            id: id.into(),
            section,
            entrance,
        }
    }

    let mut elements = vec![
        el("hero/deco-top", SectionId::Hero, Entrance::fade_in_down(300, 1000)),
        el("hero/title", SectionId::Hero, Entrance::fade_in_up(500, 1200)),
        el("hero/heart-icon", SectionId::Hero, Entrance::fade_in(800, 800)),
        el("hero/subtitle", SectionId::Hero, Entrance::fade_in_up(1000, 1000)),
        el(
            "hero/scroll-button",
            SectionId::Hero,
            Entrance::fade_in_up(1400, 800),
        ),
        el("hero/wave", SectionId::Hero, Entrance::fade_in(1800, 600)),
        el("gallery/title", SectionId::Gallery, Entrance::fade_in_up(0, 800)),
        el("about/title", SectionId::About, Entrance::fade_in_up(0, 800)),
    ];
    for (i, affirmation) in content.affirmations.iter().enumerate() {
        elements.push(el(
            format!("about/affirmation/{i}"),
            SectionId::About,
            Entrance::fade_in_up(affirmation.delay_ms, 600),
        ));
    }
    elements.extend([
        el("letter/title", SectionId::Letter, Entrance::fade_in_up(0, 800)),
        el("letter/card", SectionId::Letter, Entrance::fade_in(300, 1000)),
        el(
            "surprise/title",
            SectionId::Surprise,
            Entrance::fade_in_up(0, 1000),
        ),
        el(
            "surprise/icon-row",
            SectionId::Surprise,
            Entrance::fade_in(400, 800),
        ),
        el(
            HEART_BUTTON_ID,
            SectionId::Surprise,
            Entrance::fade_in_up(600, 800),
        ),
        el(
            "surprise/footer",
            SectionId::Surprise,
            Entrance::fade_in(1000, 600),
        ),
    ]);
    elements
}

#[cfg(test)]
#[path = "../../tests/unit/scene/screen.rs"]
mod tests;

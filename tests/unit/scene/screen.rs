use super::*;

use crate::foundation::core::Viewport;
use crate::platform::{Command, Haptic, Platform, SafeAreaInsets};

fn viewport() -> Viewport {
    Viewport::new(800.0, 1600.0).unwrap()
}

fn seeded_screen(platform: Platform) -> Screen {
    Screen::builder(viewport())
        .platform(platform)
        .seed(42)
        .build()
        .unwrap()
}

#[test]
fn mount_spawns_the_declared_particle_counts() {
    let screen = seeded_screen(Platform::Ios);
    assert_eq!(screen.hero_sparkles().len(), HERO_SPARKLE_COUNT);
    assert_eq!(screen.hero_hearts().len(), HERO_HEART_COUNT);
    assert_eq!(screen.surprise_sparkles().len(), SURPRISE_SPARKLE_COUNT);
}

#[test]
fn surprise_sparkles_echo_the_hero_field() {
    let screen = seeded_screen(Platform::Ios);
    for (hero, echo) in screen
        .hero_sparkles()
        .iter()
        .zip(screen.surprise_sparkles())
    {
        assert_eq!(echo.x, hero.x);
        assert_eq!(echo.y, hero.y * 0.4);
        assert_eq!(echo.size, hero.size);
        assert_eq!(echo.delay_ms, hero.delay_ms + 500);
    }
}

#[test]
fn scroll_button_requests_exactly_one_scroll_to_ninety_percent() {
    let screen = seeded_screen(Platform::Ios);
    let commands = screen.press_scroll_button();
    let scrolls: Vec<_> = commands
        .iter()
        .filter(|c| matches!(c, Command::ScrollTo { .. }))
        .collect();
    assert_eq!(scrolls.len(), 1);
    assert_eq!(
        commands.last().unwrap(),
        &Command::ScrollTo { y: 1600.0 * 0.9 }
    );
    assert!(commands.contains(&Command::Haptic(Haptic::LightImpact)));
}

#[test]
fn web_platform_skips_haptics_entirely() {
    let mut screen = seeded_screen(Platform::Web);
    let commands = screen.press_scroll_button();
    assert_eq!(commands, vec![Command::ScrollTo { y: 1440.0 }]);
    let commands = screen.press_heart(Millis(100));
    assert!(commands.is_empty());
}

#[test]
fn heart_press_reveals_once_and_stays_revealed() {
    let mut screen = seeded_screen(Platform::Ios);
    assert!(!screen.surprise_revealed());
    assert_eq!(screen.reveal_frame(Millis(5000)).unwrap(), None);

    let commands = screen.press_heart(Millis(2000));
    assert_eq!(commands, vec![Command::Haptic(Haptic::SuccessNotification)]);
    assert!(screen.surprise_revealed());

    // A second tap replays the haptic but does not restart the reveal.
    let first = screen.reveal_frame(Millis(2400)).unwrap().unwrap();
    screen.press_heart(Millis(2300));
    assert!(screen.surprise_revealed());
    let second = screen.reveal_frame(Millis(2400)).unwrap().unwrap();
    assert_eq!(first.opacity, second.opacity);
}

#[test]
fn reveal_entrance_runs_on_the_tap_clock() {
    let mut screen = seeded_screen(Platform::Ios);
    screen.press_heart(Millis(10_000));
    let just_tapped = screen.reveal_frame(Millis(10_000)).unwrap().unwrap();
    assert_eq!(just_tapped.opacity, 0.0);
    let settled = screen.reveal_frame(Millis(10_800)).unwrap().unwrap();
    assert_eq!(settled.opacity, 1.0);
}

#[test]
fn photo_scroll_updates_the_active_index() {
    let mut screen = seeded_screen(Platform::Ios);
    assert_eq!(screen.active_photo(), 0);
    let stride = screen.carousel().stride();
    assert_eq!(screen.on_photo_scroll(2.4 * stride), 2);
    assert_eq!(screen.active_photo(), 2);
}

#[test]
fn hero_top_padding_applies_web_constants() {
    let insets = SafeAreaInsets {
        top: 20.0,
        bottom: 0.0,
    };
    let native = Screen::builder(viewport())
        .insets(insets)
        .platform(Platform::Ios)
        .seed(1)
        .build()
        .unwrap();
    assert_eq!(native.hero_top_padding(), 80.0);

    let web = Screen::builder(viewport())
        .insets(insets)
        .platform(Platform::Web)
        .seed(1)
        .build()
        .unwrap();
    assert_eq!(web.hero_top_padding(), 147.0);
}

#[test]
fn entrance_schedule_staggers_within_each_section() {
    let screen = seeded_screen(Platform::Ios);
    let hero_delays: Vec<u64> = screen
        .elements()
        .iter()
        .filter(|e| e.section == SectionId::Hero)
        .map(|e| e.entrance.delay_ms)
        .collect();
    assert_eq!(hero_delays, vec![300, 500, 800, 1000, 1400, 1800]);
}

#[test]
fn equal_seeds_mount_identical_particle_fields() {
    let a = seeded_screen(Platform::Ios);
    let b = seeded_screen(Platform::Ios);
    for (x, y) in a.hero_sparkles().iter().zip(b.hero_sparkles()) {
        assert_eq!(x.x, y.x);
        assert_eq!(x.y, y.y);
        assert_eq!(x.size, y.size);
        assert_eq!(x.delay_ms, y.delay_ms);
    }
    for (x, y) in a.hero_hearts().iter().zip(b.hero_hearts()) {
        assert_eq!(x.duration_ms, y.duration_ms);
    }
}

#[test]
fn misaligned_content_fails_to_mount() {
    let mut content = crate::scene::content::Content::default();
    content.photo_sources.pop();
    let err = Screen::builder(viewport()).content(content).build();
    assert!(err.is_err());
}

use super::*;

use rand::SeedableRng;
use rand_pcg::Pcg32;

use crate::foundation::core::Viewport;

fn viewport() -> Viewport {
    Viewport::new(800.0, 1600.0).unwrap()
}

#[test]
fn sparkle_field_samples_positions_inside_bounds() {
    let mut rng = Pcg32::seed_from_u64(7);
    let field = Sparkle::spawn_field(20, viewport(), &mut rng);
    assert_eq!(field.len(), 20);
    for s in &field {
        assert!((0.0..800.0).contains(&s.x));
        assert!((0.0..1280.0).contains(&s.y), "y field is 0.8 * height");
        assert!((8.0..24.0).contains(&s.size));
        assert!(s.delay_ms < 3000);
    }
}

#[test]
fn sparkle_values_stay_inside_declared_bounds() {
    let sparkle = Sparkle::new(0, 100.0, 100.0, 12.0, 700);
    for t in (0..20_000).step_by(37) {
        let frame = sparkle.sample(Millis(t)).unwrap();
        assert!((0.0..=1.0).contains(&frame.opacity), "t={t}");
        assert!((SPARKLE_SCALE_MIN..=1.0).contains(&frame.scale), "t={t}");
        assert!((SPARKLE_DRIFT_PX..=0.0).contains(&frame.drift_y), "t={t}");
    }
}

#[test]
fn sparkle_is_dark_until_its_delay_elapses() {
    let sparkle = Sparkle::new(0, 0.0, 0.0, 10.0, 1500);
    let frame = sparkle.sample(Millis(1000)).unwrap();
    assert_eq!(frame.opacity, 0.0);
    assert_eq!(frame.drift_y, 0.0);
}

#[test]
fn sparkle_echo_keeps_phase_but_shifts_delay_and_y() {
    let sparkle = Sparkle::new(3, 50.0, 400.0, 10.0, 1000);
    let echo = sparkle.echo(500, 0.4);
    assert_eq!(echo.id, 3);
    assert_eq!(echo.x, 50.0);
    assert_eq!(echo.y, 160.0);
    assert_eq!(echo.delay_ms, 1500);
    // Identical program, just shifted: sampling the echo 500ms later
    // matches the original.
    let a = sparkle.sample(Millis(2_345)).unwrap();
    let b = echo.sample(Millis(2_845)).unwrap();
    assert_eq!(a.opacity, b.opacity);
}

#[test]
fn heart_field_randomizes_duration_once_per_instance() {
    let mut rng = Pcg32::seed_from_u64(11);
    let field = FloatingHeart::spawn_field(8, viewport(), &mut rng);
    assert_eq!(field.len(), 8);
    for (i, h) in field.iter().enumerate() {
        assert!((0.0..800.0).contains(&h.x));
        assert!((16.0..40.0).contains(&h.size));
        assert_eq!(h.delay_ms, i as u64 * 1200);
        assert!((6000..10_000).contains(&h.duration_ms));
    }
}

#[test]
fn heart_rises_from_bottom_and_restarts_without_reversing() {
    let heart = FloatingHeart::new(0, 10.0, 20.0, 0, 8000, 1600.0);
    assert_eq!(heart.sample(Millis(0)).unwrap().rise_y, 1600.0);
    let near_top = heart.sample(Millis(7_999)).unwrap().rise_y;
    assert!(near_top < 0.0, "almost off the top: {near_top}");
    // The next loop iteration restarts at the bottom.
    assert_eq!(heart.sample(Millis(8_000)).unwrap().rise_y, 1600.0);
}

#[test]
fn heart_opacity_envelope_holds_at_peak() {
    let heart = FloatingHeart::new(0, 10.0, 20.0, 0, 8000, 1600.0);
    // Fade-in for 1500, hold at 0.15 for duration - 3000, fade-out.
    assert_eq!(heart.sample(Millis(1500)).unwrap().opacity, 0.15);
    assert_eq!(heart.sample(Millis(4000)).unwrap().opacity, 0.15);
    assert_eq!(heart.sample(Millis(6500)).unwrap().opacity, 0.15);
    assert!(heart.sample(Millis(7500)).unwrap().opacity < 0.15);
}

#[test]
fn heart_hold_duration_clamps_at_and_below_the_fade_total() {
    // Rises shorter than the two fades must clamp the hold to zero rather
    // than produce a negative-duration step.
    for duration in [0, 1000, 2999, 3000] {
        let heart = FloatingHeart::new(0, 0.0, 20.0, 0, duration, 1600.0);
        for t in (0..12_000).step_by(101) {
            let opacity = heart.sample(Millis(t)).unwrap().opacity;
            assert!((0.0..=0.15).contains(&opacity), "duration={duration} t={t}");
        }
    }
}

#[test]
fn heart_sway_stays_within_fifteen_degrees() {
    let heart = FloatingHeart::new(0, 0.0, 20.0, 250, 7000, 1600.0);
    for t in (0..30_000).step_by(53) {
        let sway = heart.sample(Millis(t)).unwrap().sway_deg;
        assert!((-15.0..=15.0).contains(&sway), "t={t} sway={sway}");
    }
}

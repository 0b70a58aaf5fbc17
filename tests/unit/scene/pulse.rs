use super::*;

#[test]
fn pulse_breathes_between_one_and_peak() {
    let pulse = PulsingHeart::new();
    assert_eq!(pulse.scale_at(Millis(0)).unwrap(), 1.0);
    assert_eq!(pulse.scale_at(Millis(800)).unwrap(), 1.15);
    assert_eq!(pulse.scale_at(Millis(1600)).unwrap(), 1.0);
    // Same phase one full period later: the loop does not reverse.
    assert_eq!(pulse.scale_at(Millis(2400)).unwrap(), 1.15);
}

#[test]
fn pulse_scale_stays_inside_bounds() {
    let pulse = PulsingHeart::new();
    for t in (0..10_000).step_by(31) {
        let s = pulse.scale_at(Millis(t)).unwrap();
        assert!((1.0..=1.15).contains(&s), "t={t} scale={s}");
    }
}

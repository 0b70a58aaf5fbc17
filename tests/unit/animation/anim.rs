use super::*;

fn keys(pairs: &[(u64, f64)]) -> Keyframes<f64> {
    Keyframes {
        keys: pairs
            .iter()
            .map(|&(at, value)| Keyframe {
                at: Millis(at),
                value,
                ease: Ease::Linear,
            })
            .collect(),
        mode: InterpMode::Linear,
    }
}

#[test]
fn keyframes_linear_interpolates() {
    let anim = Anim::Keyframes(keys(&[(0, 0.0), (10, 10.0)]));
    assert_eq!(anim.sample(Millis(5)).unwrap(), 5.0);
}

#[test]
fn keyframes_hold_is_constant_between_keys() {
    let mut kf = keys(&[(0, 1.0), (10, 3.0)]);
    kf.mode = InterpMode::Hold;
    let anim = Anim::Keyframes(kf);
    assert_eq!(anim.sample(Millis(5)).unwrap(), 1.0);
    assert_eq!(anim.sample(Millis(10)).unwrap(), 3.0);
}

#[test]
fn keyframes_clamp_outside_the_program() {
    let anim = Anim::Keyframes(keys(&[(100, 2.0), (200, 4.0)]));
    assert_eq!(anim.sample(Millis(0)).unwrap(), 2.0);
    assert_eq!(anim.sample(Millis(10_000)).unwrap(), 4.0);
}

#[test]
fn delay_holds_the_initial_value() {
    let inner = Anim::Keyframes(keys(&[(0, 5.0), (100, 6.0)]));
    let delayed = Anim::Expr(Expr::Delay {
        inner: Box::new(inner),
        by_ms: 50,
    });
    assert_eq!(delayed.sample(Millis(0)).unwrap(), 5.0);
    assert_eq!(delayed.sample(Millis(49)).unwrap(), 5.0);
    assert_eq!(delayed.sample(Millis(150)).unwrap(), 6.0);
}

#[test]
fn loop_repeat_wraps_around() {
    let inner = Anim::Keyframes(keys(&[(0, 0.0), (100, 100.0)]));
    let looped = Anim::Expr(Expr::Loop {
        inner: Box::new(inner),
        period_ms: 100,
        mode: LoopMode::Repeat,
        cycles: None,
    });
    assert_eq!(looped.sample(Millis(25)).unwrap(), 25.0);
    assert_eq!(looped.sample(Millis(125)).unwrap(), 25.0);
    assert_eq!(looped.sample(Millis(1_000_025)).unwrap(), 25.0);
}

#[test]
fn loop_ping_pong_reflects_every_other_cycle() {
    let inner = Anim::Keyframes(keys(&[(0, 0.0), (100, 100.0)]));
    let looped = Anim::Expr(Expr::Loop {
        inner: Box::new(inner),
        period_ms: 100,
        mode: LoopMode::PingPong,
        cycles: None,
    });
    assert_eq!(looped.sample(Millis(25)).unwrap(), 25.0);
    assert_eq!(looped.sample(Millis(100)).unwrap(), 100.0);
    // Descending half of the cycle.
    assert_eq!(looped.sample(Millis(125)).unwrap(), 75.0);
    assert_eq!(looped.sample(Millis(200)).unwrap(), 0.0);
    assert_eq!(looped.sample(Millis(225)).unwrap(), 25.0);
}

#[test]
fn validate_rejects_empty_and_unsorted_keys() {
    let empty: Anim<f64> = Anim::Keyframes(Keyframes {
        keys: vec![],
        mode: InterpMode::Linear,
    });
    assert!(empty.validate().is_err());

    let unsorted = Anim::Keyframes(keys(&[(100, 0.0), (0, 1.0)]));
    assert!(unsorted.validate().is_err());
}

#[test]
fn validate_rejects_zero_loop_period() {
    let looped = Anim::Expr(Expr::Loop {
        inner: Box::new(Anim::constant(1.0)),
        period_ms: 0,
        mode: LoopMode::Repeat,
        cycles: None,
    });
    assert!(looped.validate().is_err());

    let zero_cycles = Anim::Expr(Expr::Loop {
        inner: Box::new(Anim::constant(1.0)),
        period_ms: 100,
        mode: LoopMode::Repeat,
        cycles: Some(0),
    });
    assert!(zero_cycles.validate().is_err());
}

#[test]
fn finite_repeat_parks_on_the_end_value() {
    let inner = Anim::Keyframes(keys(&[(0, 0.0), (100, 100.0)]));
    let thrice = Anim::Expr(Expr::Loop {
        inner: Box::new(inner),
        period_ms: 100,
        mode: LoopMode::Repeat,
        cycles: Some(3),
    });
    assert_eq!(thrice.sample(Millis(250)).unwrap(), 50.0);
    assert_eq!(thrice.sample(Millis(300)).unwrap(), 100.0);
    assert_eq!(thrice.sample(Millis(10_000)).unwrap(), 100.0);
}

#[test]
fn finite_ping_pong_ends_where_its_parity_says() {
    let inner = Anim::Keyframes(keys(&[(0, 0.0), (100, 100.0)]));
    let odd = Anim::Expr(Expr::Loop {
        inner: Box::new(inner.clone()),
        period_ms: 100,
        mode: LoopMode::PingPong,
        cycles: Some(3),
    });
    // Three traversals: forward, back, forward -- ends at the peak.
    assert_eq!(odd.sample(Millis(9_999)).unwrap(), 100.0);

    let even = Anim::Expr(Expr::Loop {
        inner: Box::new(inner),
        period_ms: 100,
        mode: LoopMode::PingPong,
        cycles: Some(2),
    });
    assert_eq!(even.sample(Millis(9_999)).unwrap(), 0.0);
}

#[test]
fn vec2_lerp_is_componentwise() {
    let a = Vec2::new(0.0, 10.0);
    let b = Vec2::new(10.0, 0.0);
    let mid = <Vec2 as Lerp>::lerp(&a, &b, 0.5);
    assert_eq!(mid, Vec2::new(5.0, 5.0));
}

use super::*;

fn leg(from: (f64, f64), to: (f64, f64)) -> MotionLeg {
    MotionLeg {
        from: Point::new(from.0, from.1),
        to: Point::new(to.0, to.1),
        start: Millis(1_000),
        duration: Millis(500),
        ease: Ease::OutQuad,
    }
}

#[test]
fn origin_pen_is_hidden() {
    assert!(!PenPosition::ORIGIN.is_visible());
    assert!(!PenPosition(Point::new(0.0, 40.0)).is_visible());
    assert!(PenPosition(Point::new(12.0, 40.0)).is_visible());
}

#[test]
fn leg_eases_out_between_endpoints() {
    let l = leg((0.0, 0.0), (100.0, 200.0));
    assert_eq!(l.position_at(Millis(1_000)), Point::new(0.0, 0.0));

    // p = 0.5 -> eased 0.75
    let mid = l.position_at(Millis(1_250));
    assert!((mid.x - 75.0).abs() < 1e-9);
    assert!((mid.y - 150.0).abs() < 1e-9);

    assert_eq!(l.position_at(Millis(1_500)), Point::new(100.0, 200.0));
    assert_eq!(l.position_at(Millis(9_999)), Point::new(100.0, 200.0));
}

#[test]
fn leg_before_start_stays_at_origin_point() {
    let l = leg((10.0, 10.0), (20.0, 20.0));
    assert_eq!(l.position_at(Millis(0)), Point::new(10.0, 10.0));
    assert!(!l.is_complete(Millis(1_499)));
    assert!(l.is_complete(Millis(1_500)));
    assert_eq!(l.end(), Millis(1_500));
}

#[test]
fn zero_duration_leg_completes_immediately() {
    let l = MotionLeg {
        duration: Millis::ZERO,
        ..leg((0.0, 0.0), (5.0, 5.0))
    };
    assert!(l.is_complete(l.start));
    assert_eq!(l.position_at(l.start), Point::new(5.0, 5.0));
}

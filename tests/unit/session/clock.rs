use super::*;

#[test]
fn manual_clock_only_moves_forward() {
    let c = ManualClock::new(Millis(10));
    assert_eq!(c.now(), Millis(10));
    c.advance(Millis(5));
    assert_eq!(c.now(), Millis(15));
    c.set(Millis(3));
    assert_eq!(c.now(), Millis(15));
    c.set(Millis(40));
    assert_eq!(c.now(), Millis(40));
}

#[test]
fn system_clock_is_monotonic() {
    let c = SystemClock::start();
    let a = c.now();
    let b = c.now();
    assert!(b >= a);
}

use super::*;
use crate::foundation::core::Canvas;
use crate::render::surface::RecordingSurface;
use crate::session::sketch_session::SessionState;
use crate::source::{FallbackSource, InstructionSource};

fn host() -> SessionHost<RecordingSurface> {
    SessionHost::new(SketchOpts::default())
}

fn surface() -> RecordingSurface {
    RecordingSurface::new(Canvas::default())
}

#[test]
fn assign_issues_fresh_ids() {
    let mut h = host();
    let a = h.assign("cat", surface());
    let b = h.assign("dog", surface());
    assert_ne!(a, b);
    assert_eq!(h.session().map(|s| s.category()), Some("dog"));
    assert_eq!(h.session().map(|s| s.state()), Some(SessionState::Idle));
}

#[test]
fn stale_ticks_never_touch_the_new_session() {
    let mut h = host();
    let old = h.assign("cat", surface());
    h.session_mut().unwrap().start();
    h.deliver(old, FallbackSource.fetch("cat").into(), Millis(0));
    h.tick(old, Millis(100));

    let new = h.assign("house", surface());
    assert!(h.tick(old, Millis(60_000)).is_empty());
    assert!(h
        .deliver(old, FallbackSource.fetch("cat").into(), Millis(0))
        .is_empty());

    let s = h.session().unwrap();
    assert_eq!(s.id(), new);
    assert_eq!(s.state(), SessionState::Idle);
    assert_eq!(s.surface().clear_count(), 0);
    assert!(s.surface().strokes().is_empty());
}

#[test]
fn current_id_drives_the_active_session() {
    let mut h = host();
    let id = h.assign("car", surface());
    h.session_mut().unwrap().start();
    h.deliver(id, FallbackSource.fetch("car").into(), Millis(0));
    h.tick(id, Millis(60_000));

    let s = h.discard().unwrap();
    assert!(s.accepts_guess());
    assert_eq!(s.into_surface().strokes().len(), 3);
    assert!(h.session().is_none());
    assert!(h.tick(id, Millis(60_001)).is_empty());
}

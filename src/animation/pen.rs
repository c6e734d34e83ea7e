use crate::animation::ease::Ease;
use crate::foundation::core::{Millis, Point};

/// Position of the virtual pen.
///
/// The origin doubles as the "hidden" sentinel: a pen sitting on either axis at zero has no
/// cursor indicator.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct PenPosition(pub Point);

impl PenPosition {
    /// The resting (hidden) pen.
    pub const ORIGIN: Self = Self(Point::ORIGIN);

    /// Whether a cursor indicator should be shown for this position.
    pub fn is_visible(self) -> bool {
        self.0.x != 0.0 && self.0.y != 0.0
    }

    /// Underlying point.
    pub fn point(self) -> Point {
        self.0
    }
}

/// One eased transition of the pen between two points.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct MotionLeg {
    /// Pen position when the leg started.
    pub from: Point,
    /// Leg target.
    pub to: Point,
    /// Clock time at which the leg started.
    pub start: Millis,
    /// Leg duration; zero completes immediately.
    pub duration: Millis,
    /// Progress curve.
    pub ease: Ease,
}

impl MotionLeg {
    /// Normalized progress in `[0, 1]` at `now`.
    pub fn progress(&self, now: Millis) -> f64 {
        if self.duration.0 == 0 {
            return 1.0;
        }
        (now.since(self.start).as_f64() / self.duration.as_f64()).min(1.0)
    }

    /// Eased pen position at `now`.
    pub fn position_at(&self, now: Millis) -> Point {
        let p = self.progress(now);
        if p >= 1.0 {
            return self.to;
        }
        self.from.lerp(self.to, self.ease.apply(p))
    }

    /// Clock time at which this leg reaches its target.
    pub fn end(&self) -> Millis {
        self.start.saturating_add(self.duration)
    }

    /// Whether the leg has reached its target at `now`.
    pub fn is_complete(&self, now: Millis) -> bool {
        now >= self.end()
    }
}

#[cfg(test)]
#[path = "../../tests/unit/animation/pen.rs"]
mod tests;

use std::cell::Cell;
use std::time::Instant;

use crate::foundation::core::Millis;

/// Source of animation time.
///
/// Sessions never read wall-clock time themselves; callers pass a clock so tests can step time
/// deterministically.
pub trait FrameClock {
    /// Current time on this clock.
    fn now(&self) -> Millis;
}

/// Manually stepped clock.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<Millis>,
}

impl ManualClock {
    /// Clock starting at `start`.
    pub fn new(start: Millis) -> Self {
        Self {
            now: Cell::new(start),
        }
    }

    /// Move the clock forward by `d`.
    pub fn advance(&self, d: Millis) {
        self.now.set(self.now.get().saturating_add(d));
    }

    /// Jump to an absolute time; moving backwards is ignored.
    pub fn set(&self, t: Millis) {
        if t > self.now.get() {
            self.now.set(t);
        }
    }
}

impl FrameClock for ManualClock {
    fn now(&self) -> Millis {
        self.now.get()
    }
}

/// Monotonic wall clock measured from construction.
#[derive(Debug, Clone, Copy)]
pub struct SystemClock {
    origin: Instant,
}

impl SystemClock {
    /// Clock whose zero is the moment of construction.
    pub fn start() -> Self {
        Self {
            origin: Instant::now(),
        }
    }
}

impl FrameClock for SystemClock {
    fn now(&self) -> Millis {
        let ms = self.origin.elapsed().as_millis();
        Millis(u64::try_from(ms).unwrap_or(u64::MAX))
    }
}

#[cfg(test)]
#[path = "../../tests/unit/session/clock.rs"]
mod tests;

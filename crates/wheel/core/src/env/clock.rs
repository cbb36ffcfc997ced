//! Time sources for the spin animation.
use std::cell::Cell;

/// Monotonic millisecond clock.
///
/// Only differences between readings matter; the origin is arbitrary.
pub trait Clock {
    fn now_ms(&self) -> u64;
}

impl<C: Clock + ?Sized> Clock for &C {
    fn now_ms(&self) -> u64 {
        (**self).now_ms()
    }
}

/// Virtual clock advanced by hand.
///
/// Lets animation tests step through a spin frame by frame without a
/// display refresh or real sleeps.
#[derive(Debug, Default)]
pub struct ManualClock {
    now: Cell<u64>,
}

impl ManualClock {
    pub fn new(start_ms: u64) -> Self {
        Self {
            now: Cell::new(start_ms),
        }
    }

    pub fn set(&self, now_ms: u64) {
        self.now.set(now_ms);
    }

    /// Move the clock forward and return the new reading.
    pub fn advance(&self, delta_ms: u64) -> u64 {
        let next = self.now.get().saturating_add(delta_ms);
        self.now.set(next);
        next
    }
}

impl Clock for ManualClock {
    fn now_ms(&self) -> u64 {
        self.now.get()
    }
}

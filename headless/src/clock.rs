//! Fixed-rate frame pacing

use std::thread;
use std::time::{Duration, Instant};

pub struct FrameClock {
    budget: Duration,
    enabled: bool,
    frame_start: Instant,
}

impl FrameClock {
    /// A clock that sleeps out the rest of each `budget`; a disabled clock
    /// never sleeps.
    pub fn new(budget: Duration, enabled: bool) -> Self {
        Self {
            budget,
            enabled,
            frame_start: Instant::now(),
        }
    }

    pub fn begin(&mut self) {
        self.frame_start = Instant::now();
    }

    /// Time left in the frame budget after `elapsed`, if any
    pub fn remaining(&self, elapsed: Duration) -> Option<Duration> {
        self.budget
            .checked_sub(elapsed)
            .filter(|rest| !rest.is_zero())
    }

    pub fn finish(&mut self) {
        if !self.enabled {
            return;
        }
        if let Some(rest) = self.remaining(self.frame_start.elapsed()) {
            thread::sleep(rest);
        }
    }

    /// Hold the display, e.g. after a goal
    pub fn pause(&self, duration: Duration) {
        if self.enabled {
            thread::sleep(duration);
        }
    }
}

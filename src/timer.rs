use std::time::{Duration, Instant};

/// Monotonic stopwatch for wall-clock measurements.
///
/// The start timestamp is captured at construction, so `elapsed()` yields a
/// valid reading on every exit path from the measured scope — including an
/// early return after a failed child launch. `Instant` is immune to
/// system-clock adjustments, so readings are never negative.
pub struct Stopwatch {
    start: Instant,
}

impl Stopwatch {
    pub fn start_new() -> Self {
        Self {
            start: Instant::now(),
        }
    }

    pub fn elapsed(&self) -> Duration {
        self.start.elapsed()
    }
}

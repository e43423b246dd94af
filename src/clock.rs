use std::time::Instant;

/// Time source for the controller
///
/// Wall-clock time drives the persisted last-tick timestamp and catch-up;
/// the monotonic instant drives the tick scheduler.
pub trait Clock {
    /// Wall-clock time as milliseconds since the Unix epoch
    fn now_ms(&self) -> i64;

    /// Monotonic time for scheduling ticks
    fn instant(&self) -> Instant;
}

/// The real clocks
#[derive(Debug, Clone, Copy, Default)]
pub struct SystemClock;

impl Clock for SystemClock {
    fn now_ms(&self) -> i64 {
        chrono::Utc::now().timestamp_millis()
    }

    fn instant(&self) -> Instant {
        Instant::now()
    }
}

/// Hand-driven clock for tests; both clocks move together
#[cfg(test)]
#[derive(Debug)]
pub struct ManualClock {
    wall_ms: std::cell::Cell<i64>,
    base: Instant,
    offset: std::cell::Cell<std::time::Duration>,
}

#[cfg(test)]
impl ManualClock {
    pub fn new(wall_ms: i64) -> Self {
        Self {
            wall_ms: std::cell::Cell::new(wall_ms),
            base: Instant::now(),
            offset: std::cell::Cell::new(std::time::Duration::ZERO),
        }
    }

    pub fn advance_ms(&self, ms: u64) {
        self.wall_ms.set(self.wall_ms.get() + ms as i64);
        self.offset
            .set(self.offset.get() + std::time::Duration::from_millis(ms));
    }
}

#[cfg(test)]
impl Clock for ManualClock {
    fn now_ms(&self) -> i64 {
        self.wall_ms.get()
    }

    fn instant(&self) -> Instant {
        self.base + self.offset.get()
    }
}

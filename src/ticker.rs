use std::time::{Duration, Instant};

/// Countdown tick interval in milliseconds
pub const TICK_MS: u64 = 1000;

/// Input poll interval in milliseconds
pub const POLL_MS: u64 = 250;

/// Get input poll duration
pub fn poll_duration() -> Duration {
    Duration::from_millis(POLL_MS)
}

/// Repeating one-second schedule that is only live while armed.
///
/// The scheduler never fires on its own: the event loop asks how many ticks
/// are due. Disarming drops the schedule immediately, so nothing is due
/// afterwards.
#[derive(Debug, Clone)]
pub struct Ticker {
    interval: Duration,
    next_due: Option<Instant>,
}

impl Default for Ticker {
    fn default() -> Self {
        Self::new(Duration::from_millis(TICK_MS))
    }
}

impl Ticker {
    pub fn new(interval: Duration) -> Self {
        Self {
            interval,
            next_due: None,
        }
    }

    /// Arm the schedule; the first tick is due one interval after `now`.
    /// Arming an armed ticker keeps its phase.
    pub fn arm(&mut self, now: Instant) {
        if self.next_due.is_none() {
            self.next_due = Some(now + self.interval);
        }
    }

    pub fn disarm(&mut self) {
        self.next_due = None;
    }

    pub fn is_armed(&self) -> bool {
        self.next_due.is_some()
    }

    /// Take the next due tick, if one is due at `now`
    pub fn take_due(&mut self, now: Instant) -> bool {
        match self.next_due {
            Some(due) if due <= now => {
                self.next_due = Some(due + self.interval);
                true
            }
            _ => false,
        }
    }

    /// Time left until the next tick, for sizing the input poll
    pub fn until_next(&self, now: Instant) -> Option<Duration> {
        self.next_due
            .map(|due| due.saturating_duration_since(now))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ms(n: u64) -> Duration {
        Duration::from_millis(n)
    }

    #[test]
    fn test_poll_duration() {
        assert_eq!(poll_duration(), Duration::from_millis(250));
    }

    #[test]
    fn test_disarmed_never_due() {
        let mut ticker = Ticker::default();
        let now = Instant::now();
        assert!(!ticker.take_due(now + ms(10_000)));
        assert_eq!(ticker.until_next(now), None);
    }

    #[test]
    fn test_ticks_due_once_per_interval() {
        let mut ticker = Ticker::default();
        let t0 = Instant::now();
        ticker.arm(t0);

        assert!(!ticker.take_due(t0 + ms(999)));
        assert!(ticker.take_due(t0 + ms(1000)));
        assert!(!ticker.take_due(t0 + ms(1500)));
        assert_eq!(ticker.until_next(t0 + ms(1500)), Some(ms(500)));
    }

    #[test]
    fn test_backlog_drains_one_at_a_time() {
        let mut ticker = Ticker::default();
        let t0 = Instant::now();
        ticker.arm(t0);

        let now = t0 + ms(3_200);
        let mut count = 0;
        while ticker.take_due(now) {
            count += 1;
        }
        assert_eq!(count, 3);
    }

    #[test]
    fn test_disarm_cancels_pending_tick() {
        let mut ticker = Ticker::default();
        let t0 = Instant::now();
        ticker.arm(t0);
        ticker.disarm();
        assert!(!ticker.is_armed());
        assert!(!ticker.take_due(t0 + ms(5_000)));
    }

    #[test]
    fn test_rearm_keeps_phase() {
        let mut ticker = Ticker::default();
        let t0 = Instant::now();
        ticker.arm(t0);
        ticker.arm(t0 + ms(700));
        assert!(ticker.take_due(t0 + ms(1000)));
    }
}

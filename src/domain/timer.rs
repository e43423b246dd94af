use super::enums::Mode;

/// Default work interval length in minutes
pub const DEFAULT_WORK_MINUTES: u32 = 60;
/// Default rest interval length in minutes
pub const DEFAULT_REST_MINUTES: u32 = 15;

/// What happened when a tick finished an interval
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Completion {
    /// Mode whose countdown reached zero
    pub finished: Mode,
    /// Seconds added to the cumulative work total (0 for rest)
    pub credited_secs: u64,
}

/// Full countdown state, one value per persisted key
///
/// All transitions are pure: they take the wall-clock time they need as
/// epoch milliseconds and never read a clock themselves.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TimerState {
    pub mode: Mode,
    pub remaining_work: u64,
    pub remaining_rest: u64,
    pub work_minutes: u32,
    pub rest_minutes: u32,
    pub running: bool,
    /// Seconds ticked in the current stretch, credited on work completion
    pub elapsed: u64,
    /// Wall-clock ms of the last tick; Some only while running
    pub last_tick_ms: Option<i64>,
    pub total_work_secs: u64,
}

impl Default for TimerState {
    fn default() -> Self {
        Self {
            mode: Mode::Work,
            remaining_work: u64::from(DEFAULT_WORK_MINUTES) * 60,
            remaining_rest: u64::from(DEFAULT_REST_MINUTES) * 60,
            work_minutes: DEFAULT_WORK_MINUTES,
            rest_minutes: DEFAULT_REST_MINUTES,
            running: false,
            elapsed: 0,
            last_tick_ms: None,
            total_work_secs: 0,
        }
    }
}

impl TimerState {
    /// Configured length of an interval of `mode`, in seconds
    pub fn default_secs(&self, mode: Mode) -> u64 {
        match mode {
            Mode::Work => u64::from(self.work_minutes) * 60,
            Mode::Rest => u64::from(self.rest_minutes) * 60,
        }
    }

    pub fn remaining(&self, mode: Mode) -> u64 {
        match mode {
            Mode::Work => self.remaining_work,
            Mode::Rest => self.remaining_rest,
        }
    }

    fn remaining_mut(&mut self, mode: Mode) -> &mut u64 {
        match mode {
            Mode::Work => &mut self.remaining_work,
            Mode::Rest => &mut self.remaining_rest,
        }
    }

    /// Seconds left in the active interval
    pub fn active_remaining(&self) -> u64 {
        self.remaining(self.mode)
    }

    fn reset_active_to_default(&mut self) {
        let secs = self.default_secs(self.mode);
        *self.remaining_mut(self.mode) = secs;
    }

    /// Start the countdown. A finished interval is refilled first.
    pub fn start(&mut self, now_ms: i64) {
        if self.active_remaining() == 0 {
            self.reset_active_to_default();
        }
        self.running = true;
        self.last_tick_ms = Some(now_ms);
    }

    /// Pause the countdown. Nothing else changes.
    pub fn pause(&mut self) {
        self.running = false;
        self.last_tick_ms = None;
    }

    /// Start when paused, pause when running. Returns the new running flag.
    pub fn toggle_running(&mut self, now_ms: i64) -> bool {
        if self.running {
            self.pause();
        } else {
            self.start(now_ms);
        }
        self.running
    }

    /// Stop and refill the active interval. History is left alone.
    pub fn reset(&mut self) {
        self.pause();
        self.elapsed = 0;
        self.reset_active_to_default();
    }

    /// User-selected mode switch; always pauses
    pub fn select_mode(&mut self, mode: Mode) {
        self.mode = mode;
        self.pause();
    }

    /// Store new default lengths. While paused the active countdown follows
    /// the new default right away; while running it waits for the next
    /// reset or completion.
    pub fn apply_settings(&mut self, work_minutes: u32, rest_minutes: u32) {
        self.work_minutes = work_minutes.max(1);
        self.rest_minutes = rest_minutes.max(1);
        if !self.running {
            self.reset_active_to_default();
        }
    }

    /// Advance the countdown by one second.
    ///
    /// Returns the completion if this tick finished the interval. A tick
    /// delivered while paused is ignored.
    pub fn tick(&mut self, now_ms: i64) -> Option<Completion> {
        if !self.running {
            return None;
        }
        self.last_tick_ms = Some(now_ms);

        let mode = self.mode;
        let remaining = self.remaining_mut(mode);
        *remaining = remaining.saturating_sub(1);
        if *remaining > 0 {
            self.elapsed = self.elapsed.saturating_add(1);
            return None;
        }

        let credited_secs = match mode {
            Mode::Work => self.elapsed.saturating_add(1),
            Mode::Rest => 0,
        };
        self.total_work_secs = self.total_work_secs.saturating_add(credited_secs);
        self.elapsed = 0;
        self.pause();
        self.mode = mode.other();

        Some(Completion {
            finished: mode,
            credited_secs,
        })
    }

    /// Fast-forward a running countdown by the wall-clock gap since the last
    /// recorded tick, clamping at zero. Completion side effects are not
    /// applied here; a countdown clamped to zero completes on its next tick.
    ///
    /// Re-anchors the last tick to `now_ms` and returns the seconds skipped.
    pub fn catch_up(&mut self, now_ms: i64) -> u64 {
        if !self.running {
            self.last_tick_ms = None;
            return 0;
        }

        let skipped = match self.last_tick_ms {
            Some(last) => (now_ms.saturating_sub(last).max(0) / 1000) as u64,
            None => 0,
        };
        let mode = self.mode;
        let remaining = self.remaining_mut(mode);
        *remaining = remaining.saturating_sub(skipped);
        self.last_tick_ms = Some(now_ms);
        skipped
    }
}

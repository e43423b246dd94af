use super::enums::Mode;
use super::timer::TimerState;

/// Format seconds as "MM:SS"; minutes widen past two digits when needed
pub fn format_clock(secs: u64) -> String {
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Human-readable status, e.g. "59:58 - Work" or "15:00 - Rest (paused)"
pub fn status_line(timer: &TimerState) -> String {
    let paused = if timer.running { "" } else { " (paused)" };
    format!(
        "{} - {}{}",
        format_clock(timer.active_remaining()),
        timer.mode.name(),
        paused
    )
}

/// Label for the start/pause control
pub fn toggle_label(timer: &TimerState) -> &'static str {
    if timer.running {
        "pause"
    } else {
        "start"
    }
}

/// Checkbox glyph for a todo
pub fn todo_checkbox(completed: bool) -> &'static str {
    if completed {
        "[x]"
    } else {
        "[ ]"
    }
}

/// Message shown when an interval finishes on its own
pub fn completion_message(finished: Mode) -> &'static str {
    match finished {
        Mode::Work => "Work interval finished. Time to rest.",
        Mode::Rest => "Rest is over. Back to deep work.",
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_clock() {
        assert_eq!(format_clock(0), "00:00");
        assert_eq!(format_clock(59), "00:59");
        assert_eq!(format_clock(3600), "60:00");
        assert_eq!(format_clock(900 + 7), "15:07");
        assert_eq!(format_clock(100 * 60 + 1), "100:01");
    }

    #[test]
    fn test_status_line() {
        let mut timer = TimerState::default();
        assert_eq!(status_line(&timer), "60:00 - Work (paused)");

        timer.start(0);
        timer.tick(1000);
        assert_eq!(status_line(&timer), "59:59 - Work");

        timer.select_mode(Mode::Rest);
        assert_eq!(status_line(&timer), "15:00 - Rest (paused)");
    }

    #[test]
    fn test_toggle_label() {
        let mut timer = TimerState::default();
        assert_eq!(toggle_label(&timer), "start");
        timer.start(0);
        assert_eq!(toggle_label(&timer), "pause");
    }
}

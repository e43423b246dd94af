use crate::clock::Clock;
use crate::domain::{
    completion_message, parse_minutes, status_line, Completion, Mode, TimerState, TodoList, UiMode,
};
use crate::notifications;
use crate::persistence::{load_timer, load_todos, save_timer, save_todos, KvStore};
use crate::ticker::Ticker;
use anyhow::{Context, Result};
use std::time::Duration;

/// Settings form state (two minute fields)
#[derive(Debug, Clone)]
pub struct SettingsFormState {
    pub work: String,
    pub rest: String,
    pub editing_field: usize, // 0 = work, 1 = rest
}

/// Main application state
///
/// Owns the timer, the todo list, the persistence port and the time source.
/// Every mutating operation writes the affected keys before returning.
pub struct AppState<S: KvStore, C: Clock> {
    pub timer: TimerState,
    pub todos: TodoList,
    pub selected_todo: usize,
    pub ui_mode: UiMode,
    pub settings_form: Option<SettingsFormState>,
    pub todo_input: Option<String>,
    /// Last completion message, cleared by the next user action
    pub notice: Option<String>,
    pub ticker: Ticker,
    pub store: S,
    pub clock: C,
}

impl<S: KvStore, C: Clock> AppState<S, C> {
    /// Restore state from the store and catch up on time that passed while
    /// nothing was ticking.
    pub fn restore(mut store: S, clock: C) -> Result<Self> {
        let mut timer = load_timer(&store);
        let todos = load_todos(&store);

        let skipped = timer.catch_up(clock.now_ms());
        if skipped > 0 {
            tracing::info!(
                mode = timer.mode.name(),
                skipped_secs = skipped,
                remaining = timer.active_remaining(),
                "caught up running timer"
            );
        }
        save_timer(&mut store, &timer).context("Failed to write restored timer state")?;

        let mut ticker = Ticker::default();
        if timer.running {
            ticker.arm(clock.instant());
        }

        tracing::debug!(
            status = %status_line(&timer),
            ticking = ticker.is_armed(),
            todos = todos.len(),
            "restored state"
        );

        Ok(Self {
            timer,
            todos,
            selected_todo: 0,
            ui_mode: UiMode::Normal,
            settings_form: None,
            todo_input: None,
            notice: None,
            ticker,
            store,
            clock,
        })
    }

    fn save_timer(&mut self) -> Result<()> {
        save_timer(&mut self.store, &self.timer).context("Failed to persist timer state")
    }

    fn save_todos(&mut self) -> Result<()> {
        save_todos(&mut self.store, &self.todos).context("Failed to persist todo list")
    }

    /// Keep the tick schedule in step with the running flag
    fn sync_ticker(&mut self) {
        if self.timer.running {
            self.ticker.arm(self.clock.instant());
        } else {
            self.ticker.disarm();
        }
    }

    /// Status text for the window title and the timer pane
    pub fn status_line(&self) -> String {
        status_line(&self.timer)
    }

    /// Start when paused, pause when running
    pub fn toggle_running(&mut self) -> Result<()> {
        self.notice = None;
        let running = self.timer.toggle_running(self.clock.now_ms());
        self.sync_ticker();
        self.save_timer()?;

        if running {
            tracing::info!(mode = self.timer.mode.name(), remaining = self.timer.active_remaining(), "timer started");
        } else {
            tracing::info!(mode = self.timer.mode.name(), remaining = self.timer.active_remaining(), "timer paused");
        }
        Ok(())
    }

    /// Stop and refill the active interval
    pub fn reset(&mut self) -> Result<()> {
        self.notice = None;
        self.timer.reset();
        self.sync_ticker();
        self.save_timer()?;
        tracing::info!(mode = self.timer.mode.name(), "timer reset");
        Ok(())
    }

    /// Switch to `mode`; always pauses
    pub fn select_mode(&mut self, mode: Mode) -> Result<()> {
        self.notice = None;
        self.timer.select_mode(mode);
        self.sync_ticker();
        self.save_timer()?;
        tracing::debug!(mode = mode.name(), "mode selected");
        Ok(())
    }

    /// Apply raw settings input; unusable values keep the previous default
    pub fn apply_settings(&mut self, work_input: &str, rest_input: &str) -> Result<()> {
        let work = parse_minutes(work_input, self.timer.work_minutes);
        let rest = parse_minutes(rest_input, self.timer.rest_minutes);
        self.timer.apply_settings(work, rest);
        self.save_timer()?;
        tracing::info!(work_minutes = work, rest_minutes = rest, running = self.timer.running, "settings applied");
        Ok(())
    }

    /// Apply one tick of the countdown
    pub fn tick(&mut self) -> Result<Option<Completion>> {
        let completion = self.timer.tick(self.clock.now_ms());
        self.sync_ticker();
        self.save_timer()?;

        if let Some(done) = completion {
            tracing::info!(
                finished = done.finished.name(),
                credited_secs = done.credited_secs,
                total_work_secs = self.timer.total_work_secs,
                "interval completed"
            );
            self.notice = Some(completion_message(done.finished).to_string());
            notifications::notify_interval_done(done.finished);
        }
        Ok(completion)
    }

    /// Deliver every tick that is due. Stops as soon as the timer stops.
    pub fn pump(&mut self) -> Result<()> {
        let now = self.clock.instant();
        while self.timer.running && self.ticker.take_due(now) {
            self.tick()?;
        }
        Ok(())
    }

    /// How long the event loop may block before the next tick is due
    pub fn poll_timeout(&self, max: Duration) -> Duration {
        self.ticker
            .until_next(self.clock.instant())
            .map_or(max, |next| next.min(max))
    }

    /// Open the settings modal prefilled with the current defaults
    pub fn open_settings(&mut self) {
        self.settings_form = Some(SettingsFormState {
            work: self.timer.work_minutes.to_string(),
            rest: self.timer.rest_minutes.to_string(),
            editing_field: 0,
        });
        self.ui_mode = UiMode::Settings;
    }

    /// Toggle between the work and rest fields
    pub fn settings_toggle_field(&mut self) {
        if let Some(form) = &mut self.settings_form {
            form.editing_field = (form.editing_field + 1) % 2;
        }
    }

    /// Add character to the focused settings field
    pub fn settings_add_char(&mut self, c: char) {
        if let Some(form) = &mut self.settings_form {
            match form.editing_field {
                0 => form.work.push(c),
                _ => form.rest.push(c),
            }
        }
    }

    /// Backspace in the focused settings field
    pub fn settings_backspace(&mut self) {
        if let Some(form) = &mut self.settings_form {
            match form.editing_field {
                0 => {
                    form.work.pop();
                }
                _ => {
                    form.rest.pop();
                }
            }
        }
    }

    /// Apply the settings form and close it
    pub fn submit_settings(&mut self) -> Result<()> {
        if let Some(form) = self.settings_form.take() {
            self.ui_mode = UiMode::Normal;
            self.apply_settings(&form.work, &form.rest)?;
        }
        Ok(())
    }

    pub fn cancel_settings(&mut self) {
        self.settings_form = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Start typing a new todo
    pub fn start_add_todo(&mut self) {
        self.todo_input = Some(String::new());
        self.ui_mode = UiMode::AddingTodo;
    }

    pub fn todo_input_add_char(&mut self, c: char) {
        if let Some(input) = &mut self.todo_input {
            input.push(c);
        }
    }

    pub fn todo_input_backspace(&mut self) {
        if let Some(input) = &mut self.todo_input {
            input.pop();
        }
    }

    /// Add the typed todo and close the input
    pub fn submit_todo(&mut self) -> Result<()> {
        if let Some(input) = self.todo_input.take() {
            self.ui_mode = UiMode::Normal;
            self.add_todo(&input)?;
        }
        Ok(())
    }

    pub fn cancel_todo_input(&mut self) {
        self.todo_input = None;
        self.ui_mode = UiMode::Normal;
    }

    /// Add a todo directly; blank text is ignored
    pub fn add_todo(&mut self, text: &str) -> Result<Option<i64>> {
        let id = self.todos.add(text, self.clock.now_ms());
        if id.is_some() {
            self.save_todos()?;
            self.selected_todo = self.todos.len() - 1;
        }
        Ok(id)
    }

    pub fn move_selection_up(&mut self) {
        self.selected_todo = self.selected_todo.saturating_sub(1);
    }

    pub fn move_selection_down(&mut self) {
        if self.selected_todo + 1 < self.todos.len() {
            self.selected_todo += 1;
        }
    }

    fn selected_todo_id(&self) -> Option<i64> {
        self.todos.get(self.selected_todo).map(|item| item.id)
    }

    /// Toggle completion of the selected todo
    pub fn toggle_selected_todo(&mut self) -> Result<()> {
        if let Some(id) = self.selected_todo_id() {
            if self.todos.toggle(id) {
                self.save_todos()?;
            }
        }
        Ok(())
    }

    /// Delete the selected todo
    pub fn delete_selected_todo(&mut self) -> Result<()> {
        if let Some(id) = self.selected_todo_id() {
            if self.todos.delete(id).is_some() {
                self.save_todos()?;
                if self.selected_todo >= self.todos.len() {
                    self.selected_todo = self.todos.len().saturating_sub(1);
                }
            }
        }
        Ok(())
    }
}

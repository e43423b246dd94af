use crate::app::AppState;
use crate::clock::Clock;
use crate::domain::{Mode, UiMode};
use crate::persistence::KvStore;
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent, KeyModifiers};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key<S: KvStore, C: Clock>(app: &mut AppState<S, C>, key: KeyEvent) -> Result<bool> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return Ok(true);
    }

    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::Settings => handle_settings_mode(app, key),
        UiMode::AddingTodo => handle_todo_input_mode(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode<S: KvStore, C: Clock>(app: &mut AppState<S, C>, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Start / pause
        KeyCode::Char(' ') => app.toggle_running()?,

        // Open settings
        KeyCode::Char('s') | KeyCode::Char('S') => app.open_settings(),

        // Reset current interval
        KeyCode::Char('r') | KeyCode::Char('R') => app.reset()?,

        // Select mode
        KeyCode::Char('w') | KeyCode::Char('W') => app.select_mode(Mode::Work)?,
        KeyCode::Char('b') | KeyCode::Char('B') => app.select_mode(Mode::Rest)?,

        // Todo list
        KeyCode::Char('a') | KeyCode::Char('A') => app.start_add_todo(),
        KeyCode::Up => app.move_selection_up(),
        KeyCode::Down => app.move_selection_down(),
        KeyCode::Enter | KeyCode::Char('x') | KeyCode::Char('X') => app.toggle_selected_todo()?,
        KeyCode::Char('d') | KeyCode::Char('D') | KeyCode::Delete => app.delete_selected_todo()?,

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') => return Ok(true),

        _ => {}
    }
    Ok(false)
}

/// Handle keys while the settings modal has focus
fn handle_settings_mode<S: KvStore, C: Clock>(app: &mut AppState<S, C>, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Tab | KeyCode::BackTab | KeyCode::Up | KeyCode::Down => app.settings_toggle_field(),
        KeyCode::Enter => app.submit_settings()?,
        KeyCode::Esc => app.cancel_settings(),
        KeyCode::Backspace => app.settings_backspace(),
        KeyCode::Char(c) => app.settings_add_char(c),
        _ => {}
    }
    Ok(false)
}

/// Handle keys while typing a todo
fn handle_todo_input_mode<S: KvStore, C: Clock>(app: &mut AppState<S, C>, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => app.submit_todo()?,
        KeyCode::Esc => app.cancel_todo_input(),
        KeyCode::Backspace => app.todo_input_backspace(),
        KeyCode::Char(c) => app.todo_input_add_char(c),
        _ => {}
    }
    Ok(false)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::persistence::MemoryStore;

    fn create_test_app() -> AppState<MemoryStore, ManualClock> {
        AppState::restore(MemoryStore::new(), ManualClock::new(1_700_000_000_000)).unwrap()
    }

    fn press(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn test_space_toggles_running() {
        let mut app = create_test_app();
        assert!(!handle_key(&mut app, press(KeyCode::Char(' '))).unwrap());
        assert!(app.timer.running);
        handle_key(&mut app, press(KeyCode::Char(' '))).unwrap();
        assert!(!app.timer.running);
    }

    #[test]
    fn test_s_opens_settings() {
        let mut app = create_test_app();
        handle_key(&mut app, press(KeyCode::Char('s'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::Settings);
        assert!(app.settings_form.is_some());
    }

    #[test]
    fn test_shortcuts_suppressed_while_typing_todo() {
        let mut app = create_test_app();
        handle_key(&mut app, press(KeyCode::Char('a'))).unwrap();
        assert_eq!(app.ui_mode, UiMode::AddingTodo);

        for c in "s q".chars() {
            assert!(!handle_key(&mut app, press(KeyCode::Char(c))).unwrap());
        }
        assert!(!app.timer.running);
        assert_eq!(app.ui_mode, UiMode::AddingTodo);
        assert_eq!(app.todo_input.as_deref(), Some("s q"));

        handle_key(&mut app, press(KeyCode::Enter)).unwrap();
        assert_eq!(app.todos.items()[0].text, "s q");
    }

    #[test]
    fn test_space_suppressed_in_settings() {
        let mut app = create_test_app();
        handle_key(&mut app, press(KeyCode::Char('s'))).unwrap();
        handle_key(&mut app, press(KeyCode::Char(' '))).unwrap();
        assert!(!app.timer.running);

        handle_key(&mut app, press(KeyCode::Esc)).unwrap();
        assert_eq!(app.ui_mode, UiMode::Normal);
    }

    #[test]
    fn test_settings_submit_via_keys() {
        let mut app = create_test_app();
        handle_key(&mut app, press(KeyCode::Char('s'))).unwrap();
        handle_key(&mut app, press(KeyCode::Tab)).unwrap();
        handle_key(&mut app, press(KeyCode::Backspace)).unwrap();
        handle_key(&mut app, press(KeyCode::Backspace)).unwrap();
        handle_key(&mut app, press(KeyCode::Char('5'))).unwrap();
        handle_key(&mut app, press(KeyCode::Enter)).unwrap();

        assert_eq!(app.timer.rest_minutes, 5);
        assert_eq!(app.timer.work_minutes, 60);
    }

    #[test]
    fn test_mode_keys() {
        let mut app = create_test_app();
        handle_key(&mut app, press(KeyCode::Char('b'))).unwrap();
        assert_eq!(app.timer.mode, Mode::Rest);
        handle_key(&mut app, press(KeyCode::Char('w'))).unwrap();
        assert_eq!(app.timer.mode, Mode::Work);
    }

    #[test]
    fn test_quit_keys() {
        let mut app = create_test_app();
        assert!(handle_key(&mut app, press(KeyCode::Char('q'))).unwrap());
        let ctrl_c = KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL);
        assert!(handle_key(&mut app, ctrl_c).unwrap());
    }
}

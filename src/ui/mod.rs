pub mod history_pane;
pub mod keybindings;
pub mod layout;
pub mod settings_modal;
pub mod styles;
pub mod timer_pane;
pub mod todo_pane;

use crate::app::AppState;
use crate::clock::Clock;
use crate::persistence::KvStore;
use history_pane::render_history_pane;
use keybindings::render_keybindings;
use layout::create_layout;
use ratatui::Frame;
use settings_modal::render_settings_modal;
use timer_pane::render_timer_pane;
use todo_pane::render_todo_pane;

/// Main render function - draws the entire UI
pub fn render<S: KvStore, C: Clock>(f: &mut Frame, app: &AppState<S, C>) {
    let size = f.size();
    let layout = create_layout(size);

    render_keybindings(f, app.ui_mode, layout.keybindings_area);

    render_timer_pane(f, app, layout.timer_area);
    render_history_pane(f, app, layout.history_area);
    render_todo_pane(f, app, layout.todo_area);

    // Render settings modal if active
    if app.settings_form.is_some() {
        render_settings_modal(f, app, size);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::clock::ManualClock;
    use crate::persistence::MemoryStore;
    use ratatui::{backend::TestBackend, Terminal};

    fn buffer_text(terminal: &Terminal<TestBackend>) -> String {
        terminal
            .backend()
            .buffer()
            .content()
            .iter()
            .map(|cell| cell.symbol())
            .collect()
    }

    #[test]
    fn test_render_shows_clock_and_todos() {
        let mut app = AppState::restore(MemoryStore::new(), ManualClock::new(0)).unwrap();
        app.add_todo("ship it").unwrap();

        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| render(f, &app)).unwrap();

        let text = buffer_text(&terminal);
        assert!(text.contains("60:00"));
        assert!(text.contains("ship it"));
        assert!(text.contains("todo list (0/1)"));
    }

    #[test]
    fn test_render_settings_modal() {
        let mut app = AppState::restore(MemoryStore::new(), ManualClock::new(0)).unwrap();
        app.open_settings();

        let mut terminal = Terminal::new(TestBackend::new(100, 40)).unwrap();
        terminal.draw(|f| render(f, &app)).unwrap();

        assert!(buffer_text(&terminal).contains("Settings"));
    }
}

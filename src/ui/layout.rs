use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub timer_area: Rect,
    pub history_area: Rect,
    pub todo_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Upper row: Timer (40%) | History (60%)
/// - Lower row: Todo list
pub fn create_layout(area: Rect) -> MainLayout {
    let main_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1),  // Keybindings bar
            Constraint::Length(14), // Timer + history
            Constraint::Min(0),     // Todo list
        ])
        .split(area);

    let top_horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(40), // Timer pane
            Constraint::Percentage(60), // History pane
        ])
        .split(main_chunks[1]);

    MainLayout {
        keybindings_area: main_chunks[0],
        timer_area: top_horizontal[0],
        history_area: top_horizontal[1],
        todo_area: main_chunks[2],
    }
}

/// Create centered modal area (for the settings modal)
pub fn create_modal_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Length(12),
            Constraint::Percentage(25),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(25),
            Constraint::Percentage(50),
            Constraint::Percentage(25),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}

use crate::app::AppState;
use crate::clock::Clock;
use crate::domain::{todo_checkbox, UiMode};
use crate::persistence::KvStore;
use crate::ui::styles::{
    border_style, default_style, done_style, hint_style, modal_title_style, selected_style,
    title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Render the todo list, with the entry line while adding
pub fn render_todo_pane<S: KvStore, C: Clock>(f: &mut Frame, app: &AppState<S, C>, area: Rect) {
    let mut items: Vec<ListItem> = Vec::new();

    if let Some(input) = &app.todo_input {
        items.push(ListItem::new(Line::from(vec![
            Span::raw("> "),
            Span::styled(input.as_str(), modal_title_style()),
            Span::styled("█", modal_title_style()), // Cursor
        ])));
    }

    if app.todos.is_empty() && app.todo_input.is_none() {
        items.push(ListItem::new(Line::styled("no tasks yet", hint_style())));
    }

    for (idx, todo) in app.todos.items().iter().enumerate() {
        let text_style = if todo.completed {
            done_style()
        } else {
            default_style()
        };
        let line = Line::from(vec![
            Span::raw(format!("{} ", todo_checkbox(todo.completed))),
            Span::styled(todo.text.as_str(), text_style),
        ]);

        let is_selected = idx == app.selected_todo && app.ui_mode == UiMode::Normal;
        let item = if is_selected {
            ListItem::new(line).style(selected_style())
        } else {
            ListItem::new(line)
        };
        items.push(item);
    }

    let title = format!(
        " todo list ({}/{}) ",
        app.todos.completed_count(),
        app.todos.len()
    );
    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(list, area);
}

use crate::domain::UiMode;
use crate::ui::styles::hint_style;
use ratatui::{layout::Rect, text::{Line, Span}, widgets::Paragraph, Frame};

/// Render the keybindings hint bar
pub fn render_keybindings(f: &mut Frame, ui_mode: UiMode, area: Rect) {
    let hints = if ui_mode.captures_text() {
        Line::from(vec![
            Span::raw(" typing...   "),
            Span::raw("Enter save   "),
            Span::raw("Esc cancel"),
        ])
    } else {
        Line::from(vec![
            Span::raw(" Space start/pause   "),
            Span::raw("r reset   "),
            Span::raw("w/b work/rest   "),
            Span::raw("s settings   "),
            Span::raw("a add todo   "),
            Span::raw("↑/↓ select   "),
            Span::raw("Enter/x done   "),
            Span::raw("d delete   "),
            Span::raw("q quit"),
        ])
    };

    let paragraph = Paragraph::new(hints).style(hint_style());
    f.render_widget(paragraph, area);
}

use crate::app::AppState;
use crate::clock::Clock;
use crate::persistence::KvStore;
use crate::ui::{
    layout::create_modal_area,
    styles::{modal_bg_style, modal_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

fn field_lines<'a>(label: &'static str, value: &'a str, editing: bool) -> [Line<'a>; 2] {
    let label = if editing {
        Line::raw(format!("{} (editing)", label))
    } else {
        Line::raw(label)
    };
    let value = Line::from(vec![
        Span::raw("> "),
        Span::styled(value, modal_title_style()),
        if editing {
            Span::styled("█", modal_title_style()) // Cursor
        } else {
            Span::raw("")
        },
    ]);
    [label, value]
}

/// Render the settings modal for the two interval lengths
pub fn render_settings_modal<S: KvStore, C: Clock>(f: &mut Frame, app: &AppState<S, C>, area: Rect) {
    if let Some(form) = &app.settings_form {
        let modal_area = create_modal_area(area);

        // Clear the area behind the form
        f.render_widget(Clear, modal_area);

        let mut lines = vec![Line::raw("")];
        lines.extend(field_lines(
            "Deep work length (minutes):",
            &form.work,
            form.editing_field == 0,
        ));
        lines.push(Line::raw(""));
        lines.extend(field_lines(
            "Rest length (minutes):",
            &form.rest,
            form.editing_field == 1,
        ));
        lines.push(Line::raw(""));
        lines.push(Line::raw("Tab to switch fields  ·  Enter to save  ·  Esc to cancel"));

        let paragraph = Paragraph::new(lines)
            .block(
                Block::default()
                    .borders(Borders::ALL)
                    .title(Span::styled(" Settings ", modal_title_style()))
                    .style(modal_bg_style()),
            )
            .wrap(Wrap { trim: false });

        f.render_widget(paragraph, modal_area);
    }
}

use crate::app::AppState;
use crate::clock::Clock;
use crate::domain::history::{history_rows, total_minutes};
use crate::persistence::KvStore;
use crate::ui::styles::{
    block_empty_style, block_filled_style, border_style, default_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Format minutes as "Xh Ym" or "Xm" for short durations
fn format_minutes(total_mins: u64) -> String {
    if total_mins < 60 {
        format!("{}m", total_mins)
    } else {
        let hours = total_mins / 60;
        let mins = total_mins % 60;
        if mins == 0 {
            format!("{}h", hours)
        } else {
            format!("{}h {}m", hours, mins)
        }
    }
}

/// Render the deep-work history grid, one block per 15 minutes
pub fn render_history_pane<S: KvStore, C: Clock>(f: &mut Frame, app: &AppState<S, C>, area: Rect) {
    let total = app.timer.total_work_secs;

    let mut lines = vec![Line::from(vec![
        Span::styled("Total: ", title_style()),
        Span::styled(format_minutes(total_minutes(total)), default_style()),
    ])];

    for row in history_rows(total) {
        let spans: Vec<Span> = row
            .into_iter()
            .map(|filled| {
                if filled {
                    Span::styled("■", block_filled_style())
                } else {
                    Span::styled("□", block_empty_style())
                }
            })
            .collect();
        lines.push(Line::from(spans));
    }

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" time spent deep working ", title_style())),
    );

    f.render_widget(paragraph, area);
}

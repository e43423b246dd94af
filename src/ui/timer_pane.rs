use crate::app::AppState;
use crate::clock::Clock;
use crate::domain::{format_clock, toggle_label, Mode};
use crate::persistence::KvStore;
use crate::ui::styles::{
    active_pill_style, border_style, hint_style, inactive_pill_style, notice_style, paused_style,
    running_style, title_style,
};
use ratatui::{
    layout::{Alignment, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

fn mode_pill(mode: Mode, active: Mode) -> Span<'static> {
    let label = format!(" {} ", mode.name().to_lowercase());
    if mode == active {
        Span::styled(label, active_pill_style())
    } else {
        Span::styled(label, inactive_pill_style())
    }
}

/// Render the countdown with mode pills and controls
pub fn render_timer_pane<S: KvStore, C: Clock>(f: &mut Frame, app: &AppState<S, C>, area: Rect) {
    let timer = &app.timer;
    let clock_style = if timer.running {
        running_style()
    } else {
        paused_style()
    };

    let mut lines = vec![
        Line::raw(""),
        Line::from(vec![
            mode_pill(Mode::Work, timer.mode),
            Span::raw("  "),
            mode_pill(Mode::Rest, timer.mode),
        ]),
        Line::raw(""),
        Line::styled(format_clock(timer.active_remaining()), clock_style),
        Line::raw(""),
        Line::styled(if timer.running { "running" } else { "paused" }, hint_style()),
        Line::raw(""),
        Line::from(vec![
            Span::styled("[space] ", title_style()),
            Span::raw(toggle_label(timer)),
            Span::raw("   "),
            Span::styled("[r] ", title_style()),
            Span::raw("reset"),
        ]),
    ];

    if let Some(notice) = &app.notice {
        lines.push(Line::raw(""));
        lines.push(Line::styled(notice.clone(), notice_style()));
    }

    let paragraph = Paragraph::new(lines)
        .alignment(Alignment::Center)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(border_style())
                .title(Span::styled(" deep work depot ", title_style())),
        );

    f.render_widget(paragraph, area);
}

use crate::app::AppState;
use crate::ui::styles::{
    border_style, done_style, not_done_style, pending_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the status-count report pane
pub fn render_report_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let report = app.report();

    let lines = vec![
        Line::from(vec![
            Span::styled("  Done     ", done_style()),
            Span::raw(report.done.to_string()),
        ]),
        Line::from(vec![
            Span::styled("  Not done ", not_done_style()),
            Span::raw(report.not_done.to_string()),
        ]),
        Line::from(vec![
            Span::styled("  Pending  ", pending_style()),
            Span::raw(report.pending.to_string()),
        ]),
        Line::from(vec![
            Span::raw("  Total    "),
            Span::raw(report.total().to_string()),
        ]),
    ];

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(" Report ", title_style())),
    );

    f.render_widget(paragraph, area);
}

use crate::app::AppState;
use crate::ui::styles::{border_style, default_style, done_style, hint_style, title_style};
use ratatui::{
    layout::{Constraint, Rect},
    text::Span,
    widgets::{Block, Borders, Row, Table},
    Frame,
};

/// Render the focus-session log table
pub fn render_log_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let header = Row::new(vec!["Task", "Target", "Focused", "At"]).style(hint_style());

    let rows: Vec<Row> = app
        .sessions
        .iter()
        .map(|session| {
            Row::new(vec![
                session.label.clone(),
                session.target.compact(),
                session.focused.compact(),
                session.finished_at.format("%H:%M").to_string(),
            ])
            .style(if session.focused == session.target {
                done_style()
            } else {
                default_style()
            })
        })
        .collect();

    let widths = [
        Constraint::Percentage(40),
        Constraint::Percentage(22),
        Constraint::Percentage(22),
        Constraint::Percentage(16),
    ];

    let title = format!(" Focus Log ({}) ", app.sessions.len());

    let table = Table::new(rows, widths).header(header).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(table, area);
}

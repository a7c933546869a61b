use crate::app::AppState;
use crate::domain::UiMode;
use crate::ui::{
    layout::create_prompt_area,
    styles::{prompt_bg_style, prompt_title_style},
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Clear, Paragraph, Wrap},
    Frame,
};

/// Render the single-field text prompt for adding a task or editing the
/// countdown label.
pub fn render_input_prompt(f: &mut Frame, app: &AppState, area: Rect) {
    let (title, value) = match app.ui_mode {
        UiMode::AddingTask => (" Add Task ", &app.task_input),
        UiMode::EditingLabel => (" Countdown Label ", &app.label_input),
        UiMode::Normal => return,
    };

    let prompt_area = create_prompt_area(area);

    // Clear the area behind the prompt
    f.render_widget(Clear, prompt_area);

    let lines = vec![
        Line::raw(""),
        Line::from(vec![
            Span::raw("> "),
            Span::styled(value.clone(), prompt_title_style()),
            Span::styled("█", prompt_title_style()), // Cursor
        ]),
        Line::raw(""),
        Line::raw("Enter to submit  ·  Esc to cancel"),
    ];

    let paragraph = Paragraph::new(lines)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .title(Span::styled(title, prompt_title_style()))
                .style(prompt_bg_style()),
        )
        .wrap(Wrap { trim: false });

    f.render_widget(paragraph, prompt_area);
}

pub mod countdown_pane;
pub mod input_form;
pub mod keybindings;
pub mod layout;
pub mod log_pane;
pub mod report_pane;
pub mod styles;
pub mod task_pane;

use crate::app::AppState;
use crate::domain::UiMode;
use countdown_pane::render_countdown_pane;
use input_form::render_input_prompt;
use keybindings::render_keybindings;
use layout::create_layout;
use log_pane::render_log_pane;
use ratatui::{layout::Rect, widgets::Paragraph, Frame};
use report_pane::render_report_pane;
use styles::notice_style;
use task_pane::render_task_pane;

/// Main render function - draws the entire UI
pub fn render(f: &mut Frame, app: &AppState) {
    let size = f.size();
    let layout = create_layout(size);

    // Render keybindings bar
    render_keybindings(f, layout.keybindings_area);

    // Render panes
    render_task_pane(f, app, layout.tasks_area);
    render_report_pane(f, app, layout.report_area);
    render_countdown_pane(f, app, layout.countdown_area);
    render_log_pane(f, app, layout.log_area);

    // Render notice bar
    render_notice(f, app, layout.notice_area);

    // Render text prompt if active
    if app.ui_mode != UiMode::Normal {
        render_input_prompt(f, app, size);
    }
}

/// Render the one-line notice bar
fn render_notice(f: &mut Frame, app: &AppState, area: Rect) {
    if let Some(notice) = &app.notice {
        let paragraph =
            Paragraph::new(format!(" {}", notice.message)).style(notice_style(notice.kind));
        f.render_widget(paragraph, area);
    }
}

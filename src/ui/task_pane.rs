use crate::app::AppState;
use crate::domain::{status_badge, Task};
use crate::ui::styles::{border_style, hint_style, selected_style, status_style, title_style};
use chrono::Local;
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, List, ListItem},
    Frame,
};

/// Create a single line for a task row
/// Format: [✓ DONE] Write report  · added 09:12
fn create_task_line(task: &Task, use_emoji: bool) -> Line<'static> {
    let badge = status_badge(task, use_emoji);

    Line::from(vec![
        Span::styled(format!("[{}] ", badge), status_style(task.status)),
        Span::raw(task.name.clone()),
        Span::styled(
            format!("  · added {}", task.created_at.format("%H:%M")),
            hint_style(),
        ),
    ])
}

/// Render the task list pane
pub fn render_task_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let items: Vec<ListItem> = app
        .tasks
        .iter()
        .enumerate()
        .map(|(idx, task)| {
            let line = create_task_line(task, app.use_emoji);
            let item = ListItem::new(line);
            if idx == app.selected_index {
                item.style(selected_style())
            } else {
                item.style(status_style(task.status))
            }
        })
        .collect();

    let date = Local::now().format("%a %b %d");
    let title = format!(" Tasks ({}) — {} ", app.tasks.len(), date);

    let list = List::new(items).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(list, area);
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::TaskStatus;

    #[test]
    fn test_create_task_line() {
        let task = Task::new("Write report".to_string());
        let line = create_task_line(&task, true);

        let line_str = format!("{:?}", line);
        assert!(line_str.contains("Write report"));
        assert!(line_str.contains("PENDING"));
    }

    #[test]
    fn test_create_task_line_ascii_badges() {
        let mut task = Task::new("Write report".to_string());
        task.set_status(TaskStatus::Done);
        let line = create_task_line(&task, false);

        let line_str = format!("{:?}", line);
        assert!(line_str.contains("+ DONE"));
    }
}

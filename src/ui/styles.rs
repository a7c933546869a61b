use crate::domain::{NoticeKind, TaskStatus};
use ratatui::style::{Color, Modifier, Style};

/// Default text style
pub fn default_style() -> Style {
    Style::default().fg(Color::White)
}

/// Selected row highlight style
pub fn selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::LightCyan)
        .add_modifier(Modifier::BOLD)
}

/// Pending task row style (amber)
pub fn pending_style() -> Style {
    Style::default().fg(Color::Yellow)
}

/// Done task row style
pub fn done_style() -> Style {
    Style::default().fg(Color::Green)
}

/// Not-done task row style
pub fn not_done_style() -> Style {
    Style::default().fg(Color::Red)
}

/// Row style for a task status
pub fn status_style(status: TaskStatus) -> Style {
    match status {
        TaskStatus::Pending => pending_style(),
        TaskStatus::Done => done_style(),
        TaskStatus::NotDone => not_done_style(),
    }
}

/// Live countdown readout style
pub fn countdown_style() -> Style {
    Style::default()
        .fg(Color::Magenta)
        .add_modifier(Modifier::BOLD)
}

/// Selected picker field style
pub fn picker_selected_style() -> Style {
    Style::default()
        .fg(Color::Black)
        .bg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Title style for panes
pub fn title_style() -> Style {
    Style::default()
        .fg(Color::Cyan)
        .add_modifier(Modifier::BOLD)
}

/// Border style
pub fn border_style() -> Style {
    Style::default().fg(Color::Gray)
}

/// Prompt background style
pub fn prompt_bg_style() -> Style {
    Style::default().bg(Color::DarkGray).fg(Color::White)
}

/// Prompt title style
pub fn prompt_title_style() -> Style {
    Style::default()
        .fg(Color::Yellow)
        .add_modifier(Modifier::BOLD)
}

/// Keybinding hint style
pub fn hint_style() -> Style {
    Style::default().fg(Color::DarkGray)
}

/// Notice bar style for a notice kind
pub fn notice_style(kind: NoticeKind) -> Style {
    match kind {
        NoticeKind::Success => Style::default()
            .fg(Color::Green)
            .add_modifier(Modifier::BOLD),
        NoticeKind::Warning => Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD),
        NoticeKind::Info => Style::default().fg(Color::Gray),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_status_styles_are_color_coded() {
        assert_eq!(status_style(TaskStatus::Pending), pending_style());
        assert_eq!(status_style(TaskStatus::Done), done_style());
        assert_eq!(status_style(TaskStatus::NotDone), not_done_style());
    }
}

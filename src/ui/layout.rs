use ratatui::layout::{Constraint, Direction, Layout, Rect};

/// Main layout structure
pub struct MainLayout {
    pub keybindings_area: Rect,
    pub tasks_area: Rect,
    pub report_area: Rect,
    pub countdown_area: Rect,
    pub log_area: Rect,
    pub notice_area: Rect,
}

/// Create the main layout
/// - Top bar: keybindings (1 row)
/// - Main area: tasks (60%) on the left; report, countdown and session
///   log stacked in the right sidebar (40%)
/// - Bottom bar: notice line (1 row)
pub fn create_layout(area: Rect) -> MainLayout {
    let vertical = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(1), // Keybindings bar
            Constraint::Min(0),    // Main content
            Constraint::Length(1), // Notice bar
        ])
        .split(area);

    let keybindings_area = vertical[0];
    let content_area = vertical[1];
    let notice_area = vertical[2];

    let horizontal = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(60), // Task list
            Constraint::Percentage(40), // Sidebar
        ])
        .split(content_area);

    let tasks_area = horizontal[0];

    let sidebar = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(6), // Report pane
            Constraint::Length(8), // Countdown pane
            Constraint::Min(0),    // Session log
        ])
        .split(horizontal[1]);

    MainLayout {
        keybindings_area,
        tasks_area,
        report_area: sidebar[0],
        countdown_area: sidebar[1],
        log_area: sidebar[2],
        notice_area,
    }
}

/// Create centered prompt area (for the text prompts)
pub fn create_prompt_area(area: Rect) -> Rect {
    let vertical_chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Percentage(35),
            Constraint::Length(7),
            Constraint::Percentage(35),
        ])
        .split(area);

    let horizontal_chunks = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([
            Constraint::Percentage(20),
            Constraint::Percentage(60),
            Constraint::Percentage(20),
        ])
        .split(vertical_chunks[1]);

    horizontal_chunks[1]
}

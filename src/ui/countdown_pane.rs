use crate::app::AppState;
use crate::domain::PickerField;
use crate::ui::styles::{
    border_style, countdown_style, default_style, hint_style, picker_selected_style, title_style,
};
use ratatui::{
    layout::Rect,
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph},
    Frame,
};

/// Render the countdown pane: a live readout while running, the
/// duration picker and label while idle.
pub fn render_countdown_pane(f: &mut Frame, app: &AppState, area: Rect) {
    let lines = if app.countdown.is_running() {
        running_lines(app)
    } else {
        picker_lines(app)
    };

    let title = if app.countdown.is_running() {
        " Countdown ⏱ "
    } else {
        " Countdown "
    };

    let paragraph = Paragraph::new(lines).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style())
            .title(Span::styled(title, title_style())),
    );

    f.render_widget(paragraph, area);
}

fn running_lines(app: &AppState) -> Vec<Line<'static>> {
    vec![
        Line::raw(""),
        Line::from(Span::styled(
            format!("    {}", app.countdown.remaining()),
            countdown_style(),
        )),
        Line::from(Span::raw(format!("    {}", app.countdown.label()))),
        Line::raw(""),
        Line::from(Span::styled("    x to stop", hint_style())),
    ]
}

fn picker_lines(app: &AppState) -> Vec<Line<'static>> {
    let field_span = |field: PickerField, value: u32| {
        let text = format!("{:02}", value);
        if app.picker.field == field {
            Span::styled(text, picker_selected_style())
        } else {
            Span::styled(text, default_style())
        }
    };

    let label = if app.label_input.trim().is_empty() {
        "Unnamed".to_string()
    } else {
        app.label_input.clone()
    };

    vec![
        Line::raw(""),
        Line::from(vec![
            Span::raw("    "),
            field_span(PickerField::Hours, app.picker.hours),
            Span::raw(" : "),
            field_span(PickerField::Minutes, app.picker.minutes),
            Span::raw(" : "),
            field_span(PickerField::Seconds, app.picker.seconds),
        ]),
        Line::from(Span::raw(format!("    {}", label))),
        Line::raw(""),
        Line::from(Span::styled(
            "    ←/→ field · +/- adjust · Enter to start",
            hint_style(),
        )),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::Hms;

    #[test]
    fn test_picker_lines_show_selected_field_and_label() {
        let mut app = AppState::new(true);
        app.label_input = "Deep work".to_string();

        let lines = picker_lines(&app);
        let rendered = format!("{:?}", lines);
        assert!(rendered.contains("25"));
        assert!(rendered.contains("Deep work"));
    }

    #[test]
    fn test_running_lines_show_remaining() {
        let mut app = AppState::new(true);
        app.countdown.start(Hms::new(0, 0, 5), "Focus").unwrap();

        let lines = running_lines(&app);
        let rendered = format!("{:?}", lines);
        assert!(rendered.contains("00:00:05"));
        assert!(rendered.contains("Focus"));
    }
}

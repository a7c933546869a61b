use crate::app::AppState;
use crate::domain::{TaskStatus, UiMode};
use anyhow::Result;
use crossterm::event::{KeyCode, KeyEvent};

/// Handle keyboard input events. Returns true when the app should quit.
pub fn handle_key(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match app.ui_mode {
        UiMode::Normal => handle_normal_mode(app, key),
        UiMode::AddingTask => handle_task_prompt(app, key),
        UiMode::EditingLabel => handle_label_prompt(app, key),
    }
}

/// Handle keys in normal mode
fn handle_normal_mode(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        // Task selection
        KeyCode::Up => {
            app.move_selection_up();
            Ok(false)
        }
        KeyCode::Down => {
            app.move_selection_down();
            Ok(false)
        }

        // Add task
        KeyCode::Char('a') | KeyCode::Char('A') => {
            app.start_add_task();
            Ok(false)
        }

        // Mark selected task done / not done
        KeyCode::Char('d') | KeyCode::Char('D') => {
            app.mark_selected(TaskStatus::Done);
            Ok(false)
        }
        KeyCode::Char('n') | KeyCode::Char('N') => {
            app.mark_selected(TaskStatus::NotDone);
            Ok(false)
        }

        // Duration picker field and value
        KeyCode::Left => {
            app.picker.select_prev();
            Ok(false)
        }
        KeyCode::Right => {
            app.picker.select_next();
            Ok(false)
        }
        KeyCode::Char('+') | KeyCode::Char('=') => {
            app.picker.increase();
            Ok(false)
        }
        KeyCode::Char('-') | KeyCode::Char('_') => {
            app.picker.decrease();
            Ok(false)
        }

        // Countdown label
        KeyCode::Char('e') | KeyCode::Char('E') => {
            app.start_edit_label();
            Ok(false)
        }

        // Start / stop countdown
        KeyCode::Enter => {
            app.start_countdown();
            Ok(false)
        }
        KeyCode::Char('x') | KeyCode::Char('X') => {
            app.stop_countdown();
            Ok(false)
        }

        // Quit
        KeyCode::Char('q') | KeyCode::Char('Q') | KeyCode::Esc => Ok(true),

        _ => Ok(false),
    }
}

/// Handle keys in the add-task prompt
fn handle_task_prompt(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter => app.submit_task(),
        KeyCode::Esc => {
            app.task_input.clear();
            app.ui_mode = UiMode::Normal;
        }
        KeyCode::Backspace => {
            app.task_input.pop();
        }
        KeyCode::Char(c) => {
            app.task_input.push(c);
        }
        _ => {}
    }
    Ok(false)
}

/// Handle keys in the countdown-label prompt
fn handle_label_prompt(app: &mut AppState, key: KeyEvent) -> Result<bool> {
    match key.code {
        KeyCode::Enter | KeyCode::Esc => app.finish_edit_label(),
        KeyCode::Backspace => {
            app.label_input.pop();
        }
        KeyCode::Char(c) => {
            app.label_input.push(c);
        }
        _ => {}
    }
    Ok(false)
}

use crate::countdown::{Countdown, Tick};
use crate::domain::{
    compute_report, FocusSession, Hms, NoticeKind, PickerField, StatusReport, Task, TaskStatus,
    UiMode,
};
use crate::notifications;
use crate::ticker;
use std::time::Instant;

/// One-line message shown in the status bar after an update
#[derive(Debug, Clone)]
pub struct Notice {
    pub kind: NoticeKind,
    pub message: String,
}

impl Notice {
    pub fn success(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Success,
            message: message.into(),
        }
    }

    pub fn warning(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Warning,
            message: message.into(),
        }
    }

    pub fn info(message: impl Into<String>) -> Self {
        Self {
            kind: NoticeKind::Info,
            message: message.into(),
        }
    }
}

/// Bounded H/M/S selector for the countdown target
#[derive(Debug, Clone)]
pub struct DurationPicker {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
    pub field: PickerField,
}

impl Default for DurationPicker {
    fn default() -> Self {
        Self {
            hours: 0,
            minutes: 25,
            seconds: 0,
            field: PickerField::Minutes,
        }
    }
}

impl DurationPicker {
    pub fn value(&self) -> Hms {
        Hms::new(self.hours, self.minutes, self.seconds)
    }

    pub fn select_next(&mut self) {
        self.field = self.field.next();
    }

    pub fn select_prev(&mut self) {
        self.field = self.field.prev();
    }

    /// Increment the selected field, wrapping within its bound
    pub fn increase(&mut self) {
        let max = self.field.max();
        let value = self.field_mut();
        *value = if *value >= max { 0 } else { *value + 1 };
    }

    /// Decrement the selected field, wrapping within its bound
    pub fn decrease(&mut self) {
        let max = self.field.max();
        let value = self.field_mut();
        *value = if *value == 0 { max } else { *value - 1 };
    }

    fn field_mut(&mut self) -> &mut u32 {
        match self.field {
            PickerField::Hours => &mut self.hours,
            PickerField::Minutes => &mut self.minutes,
            PickerField::Seconds => &mut self.seconds,
        }
    }
}

/// Main application state
pub struct AppState {
    pub tasks: Vec<Task>,
    pub selected_index: usize,
    pub countdown: Countdown,
    pub sessions: Vec<FocusSession>,
    pub picker: DurationPicker,
    pub ui_mode: UiMode,
    pub task_input: String,
    pub label_input: String,
    pub notice: Option<Notice>,
    pub last_second: Instant,
    pub use_emoji: bool,
}

impl AppState {
    pub fn new(use_emoji: bool) -> Self {
        Self {
            tasks: Vec::new(),
            selected_index: 0,
            countdown: Countdown::new(),
            sessions: Vec::new(),
            picker: DurationPicker::default(),
            ui_mode: UiMode::Normal,
            task_input: String::new(),
            label_input: String::new(),
            notice: None,
            last_second: Instant::now(),
            use_emoji,
        }
    }

    /// Append a task with status Pending. A blank name is a validation
    /// failure: warn and leave the list untouched.
    pub fn add_task(&mut self, name: &str) {
        let name = name.trim();
        if name.is_empty() {
            self.notice = Some(Notice::warning("Task name cannot be empty"));
            return;
        }

        self.tasks.push(Task::new(name.to_string()));
    }

    /// Set the status of the task at `index`. An out-of-range index is
    /// silently ignored.
    pub fn set_status(&mut self, index: usize, status: TaskStatus) {
        if let Some(task) = self.tasks.get_mut(index) {
            task.set_status(status);
        }
    }

    /// Set the status of the selected task
    pub fn mark_selected(&mut self, status: TaskStatus) {
        self.set_status(self.selected_index, status);
    }

    /// Status counts for the report pane
    pub fn report(&self) -> StatusReport {
        compute_report(&self.tasks)
    }

    /// Move selection up
    pub fn move_selection_up(&mut self) {
        if self.selected_index > 0 {
            self.selected_index -= 1;
        }
    }

    /// Move selection down
    pub fn move_selection_down(&mut self) {
        if self.selected_index + 1 < self.tasks.len() {
            self.selected_index += 1;
        }
    }

    /// Start a countdown from the picker's target and the label buffer
    pub fn start_countdown(&mut self) {
        let target = self.picker.value();
        match self.countdown.start(target, &self.label_input) {
            Ok(()) => {
                self.last_second = Instant::now();
                self.notice = Some(Notice::info(format!(
                    "Counting down {} — {}",
                    target,
                    self.countdown.label()
                )));
            }
            Err(err) => {
                self.notice = Some(Notice::warning(err.to_string()));
            }
        }
    }

    /// Stop the active countdown and log the session. Stopping with
    /// nothing running is a redundant action, not an error.
    pub fn stop_countdown(&mut self) {
        match self.countdown.stop() {
            Some(session) => {
                self.notice = Some(Notice::success(format!(
                    "Focused {} on {}",
                    session.focused.compact(),
                    session.label
                )));
                self.sessions.push(session);
            }
            None => {
                self.notice = Some(Notice::info("No countdown is running"));
            }
        }
    }

    /// Advance the countdown by one second once a full second of wall
    /// clock has accumulated since the last decrement. Called on every
    /// render tick; a no-op while idle.
    pub fn tick(&mut self) {
        if !self.countdown.is_running() {
            self.last_second = Instant::now();
            return;
        }

        if self.last_second.elapsed() >= ticker::second_duration() {
            self.last_second = Instant::now();
            if let Tick::Expired(session) = self.countdown.tick() {
                notifications::notify_countdown_done(&session.label);
                self.notice = Some(Notice::success(format!(
                    "Focus complete: {}",
                    session.label
                )));
                self.sessions.push(session);
            }
        }
    }

    /// Open the add-task prompt
    pub fn start_add_task(&mut self) {
        self.task_input.clear();
        self.ui_mode = UiMode::AddingTask;
    }

    /// Submit the add-task prompt
    pub fn submit_task(&mut self) {
        let name = std::mem::take(&mut self.task_input);
        self.add_task(&name);
        self.ui_mode = UiMode::Normal;
    }

    /// Open the countdown-label prompt
    pub fn start_edit_label(&mut self) {
        self.ui_mode = UiMode::EditingLabel;
    }

    /// Close the countdown-label prompt, keeping the buffer
    pub fn finish_edit_label(&mut self) {
        self.ui_mode = UiMode::Normal;
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::time::Duration;

    fn app() -> AppState {
        AppState::new(true)
    }

    /// Pretend a full second has passed since the last decrement
    fn force_second(app: &mut AppState) {
        app.last_second = Instant::now() - Duration::from_secs(1);
    }

    #[test]
    fn test_add_task_appends_pending() {
        let mut app = app();
        app.add_task("Write report");

        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks[0].name, "Write report");
        assert_eq!(app.tasks[0].status, TaskStatus::Pending);
    }

    #[test]
    fn test_add_task_rejects_blank_names() {
        let mut app = app();
        app.add_task("");
        app.add_task("   ");
        app.add_task("\t\n");

        assert!(app.tasks.is_empty());
        let notice = app.notice.expect("warning notice");
        assert_eq!(notice.kind, NoticeKind::Warning);
    }

    #[test]
    fn test_set_status_out_of_range_is_noop() {
        let mut app = app();
        app.add_task("Write report");
        app.set_status(5, TaskStatus::Done);

        assert_eq!(app.tasks.len(), 1);
        assert_eq!(app.tasks[0].status, TaskStatus::Pending);
    }

    #[test]
    fn test_report_counts_after_mark_done() {
        let mut app = app();
        app.add_task("Write report");
        app.set_status(0, TaskStatus::Done);

        let report = app.report();
        assert_eq!(report.done, 1);
        assert_eq!(report.not_done, 0);
        assert_eq!(report.pending, 0);
    }

    #[test]
    fn test_selection_stays_in_bounds() {
        let mut app = app();
        app.add_task("a");
        app.add_task("b");

        app.move_selection_up();
        assert_eq!(app.selected_index, 0);
        app.move_selection_down();
        assert_eq!(app.selected_index, 1);
        app.move_selection_down();
        assert_eq!(app.selected_index, 1);
    }

    #[test]
    fn test_countdown_runs_to_expiry() {
        let mut app = app();
        app.picker.hours = 0;
        app.picker.minutes = 0;
        app.picker.seconds = 5;
        app.label_input = "Focus".to_string();

        app.start_countdown();
        assert!(app.countdown.is_running());

        for _ in 0..5 {
            force_second(&mut app);
            app.tick();
        }

        assert!(!app.countdown.is_running());
        assert_eq!(app.countdown.remaining(), Hms::new(0, 0, 0));
        assert_eq!(app.sessions.len(), 1);
        assert_eq!(app.sessions[0].label, "Focus");
        assert_eq!(app.sessions[0].target.compact(), "0h0m5s");
        assert_eq!(app.sessions[0].focused.compact(), "0h0m5s");

        let notice = app.notice.expect("completion notice");
        assert_eq!(notice.kind, NoticeKind::Success);
    }

    #[test]
    fn test_countdown_stopped_early_logs_partial_session() {
        let mut app = app();
        app.picker.hours = 0;
        app.picker.minutes = 0;
        app.picker.seconds = 5;
        app.label_input = "Focus".to_string();

        app.start_countdown();
        for _ in 0..2 {
            force_second(&mut app);
            app.tick();
        }
        app.stop_countdown();

        assert!(!app.countdown.is_running());
        assert_eq!(app.sessions.len(), 1);
        assert_eq!(app.sessions[0].target.compact(), "0h0m5s");
        assert_eq!(app.sessions[0].focused.compact(), "0h0m2s");
    }

    #[test]
    fn test_zero_duration_start_warns() {
        let mut app = app();
        app.picker.hours = 0;
        app.picker.minutes = 0;
        app.picker.seconds = 0;

        app.start_countdown();
        assert!(!app.countdown.is_running());
        let notice = app.notice.expect("warning notice");
        assert_eq!(notice.kind, NoticeKind::Warning);
    }

    #[test]
    fn test_stop_while_idle_is_informational() {
        let mut app = app();
        app.stop_countdown();

        assert!(app.sessions.is_empty());
        let notice = app.notice.expect("info notice");
        assert_eq!(notice.kind, NoticeKind::Info);
    }

    #[test]
    fn test_start_while_running_warns_and_keeps_countdown() {
        let mut app = app();
        app.picker.seconds = 5;
        app.picker.minutes = 0;
        app.start_countdown();

        app.start_countdown();
        assert!(app.countdown.is_running());
        let notice = app.notice.expect("warning notice");
        assert_eq!(notice.kind, NoticeKind::Warning);
        assert!(app.sessions.is_empty());
    }

    #[test]
    fn test_tick_before_a_full_second_does_nothing() {
        let mut app = app();
        app.picker.seconds = 5;
        app.picker.minutes = 0;
        app.start_countdown();

        app.tick();
        assert_eq!(app.countdown.remaining(), Hms::new(0, 0, 5));
    }

    #[test]
    fn test_submit_task_clears_prompt() {
        let mut app = app();
        app.start_add_task();
        assert_eq!(app.ui_mode, UiMode::AddingTask);

        app.task_input.push_str("Write report");
        app.submit_task();

        assert_eq!(app.ui_mode, UiMode::Normal);
        assert!(app.task_input.is_empty());
        assert_eq!(app.tasks.len(), 1);
    }

    #[test]
    fn test_picker_wraps_within_bounds() {
        let mut picker = DurationPicker::default();
        picker.field = PickerField::Hours;
        picker.hours = 23;
        picker.increase();
        assert_eq!(picker.hours, 0);
        picker.decrease();
        assert_eq!(picker.hours, 23);

        picker.field = PickerField::Seconds;
        picker.seconds = 59;
        picker.increase();
        assert_eq!(picker.seconds, 0);
        picker.decrease();
        assert_eq!(picker.seconds, 59);
    }
}

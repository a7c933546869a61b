use super::enums::TaskStatus;
use super::task::Task;

/// Status counts for the report pane
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct StatusReport {
    pub done: usize,
    pub not_done: usize,
    pub pending: usize,
}

impl StatusReport {
    pub fn total(&self) -> usize {
        self.done + self.not_done + self.pending
    }
}

/// Count tasks by status. No side effects; display order is the list order.
pub fn compute_report(tasks: &[Task]) -> StatusReport {
    let mut report = StatusReport::default();

    for task in tasks {
        match task.status {
            TaskStatus::Done => report.done += 1,
            TaskStatus::NotDone => report.not_done += 1,
            TaskStatus::Pending => report.pending += 1,
        }
    }

    report
}

/// Get status badge text for a task row
pub fn status_badge(task: &Task, use_emoji: bool) -> &'static str {
    if use_emoji {
        match task.status {
            TaskStatus::Pending => "⏳ PENDING",
            TaskStatus::Done => "✓ DONE",
            TaskStatus::NotDone => "✗ NOT DONE",
        }
    } else {
        match task.status {
            TaskStatus::Pending => "~ PENDING",
            TaskStatus::Done => "+ DONE",
            TaskStatus::NotDone => "! NOT DONE",
        }
    }
}

use super::enums::TaskStatus;
use chrono::{DateTime, Local};

/// A single entry in the task list
#[derive(Debug, Clone)]
pub struct Task {
    /// Task name
    pub name: String,
    /// Current status
    pub status: TaskStatus,
    /// When the task was created
    pub created_at: DateTime<Local>,
}

impl Task {
    pub fn new(name: String) -> Self {
        Self {
            name,
            status: TaskStatus::Pending,
            created_at: Local::now(),
        }
    }

    pub fn set_status(&mut self, status: TaskStatus) {
        self.status = status;
    }
}

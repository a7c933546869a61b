pub mod enums;
pub mod hms;
pub mod session;
pub mod task;
pub mod views;

pub use enums::{NoticeKind, PickerField, TaskStatus, UiMode};
pub use hms::Hms;
pub use session::FocusSession;
pub use task::Task;
pub use views::{compute_report, status_badge, StatusReport};

/// Status of a task in the list
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TaskStatus {
    Pending,
    Done,
    NotDone,
}

/// UI mode for the application
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UiMode {
    Normal,
    AddingTask,
    EditingLabel,
}

/// Severity of a one-line notice shown in the status bar
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum NoticeKind {
    Success,
    Warning,
    Info,
}

/// Which field of the duration picker is selected
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PickerField {
    Hours,
    Minutes,
    Seconds,
}

impl PickerField {
    pub fn next(&self) -> Self {
        match self {
            Self::Hours => Self::Minutes,
            Self::Minutes => Self::Seconds,
            Self::Seconds => Self::Hours,
        }
    }

    pub fn prev(&self) -> Self {
        match self {
            Self::Hours => Self::Seconds,
            Self::Minutes => Self::Hours,
            Self::Seconds => Self::Minutes,
        }
    }

    /// Upper bound for this field (inclusive)
    pub fn max(&self) -> u32 {
        match self {
            Self::Hours => 23,
            Self::Minutes | Self::Seconds => 59,
        }
    }
}

use super::hms::Hms;
use chrono::{DateTime, Local};

/// One completed (stopped or expired) countdown, recorded with the
/// requested target and the actually focused duration.
#[derive(Debug, Clone)]
pub struct FocusSession {
    /// Label of the countdown, "Unnamed" when none was given
    pub label: String,
    /// Duration originally requested
    pub target: Hms,
    /// Duration actually elapsed at stop/expiry
    pub focused: Hms,
    /// When the session ended
    pub finished_at: DateTime<Local>,
}

impl FocusSession {
    pub fn new(label: String, target: Hms, focused: Hms) -> Self {
        Self {
            label,
            target,
            focused,
            finished_at: Local::now(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_session_records_both_durations() {
        let session = FocusSession::new(
            "Focus".to_string(),
            Hms::new(0, 0, 5),
            Hms::new(0, 0, 2),
        );
        assert_eq!(session.label, "Focus");
        assert_eq!(session.target.compact(), "0h0m5s");
        assert_eq!(session.focused.compact(), "0h0m2s");
    }
}

use crate::domain::{FocusSession, Hms};
use thiserror::Error;

/// Label used when a countdown is started without one
pub const UNNAMED_LABEL: &str = "Unnamed";

/// Why a countdown could not be started
#[derive(Debug, Error, PartialEq, Eq)]
pub enum StartError {
    #[error("countdown duration must be greater than zero")]
    ZeroDuration,
    #[error("a countdown is already running")]
    AlreadyRunning,
}

/// Result of one engine tick
#[derive(Debug)]
pub enum Tick {
    /// Nothing running
    Noop,
    /// Still counting down
    Counting,
    /// Reached zero; the completed session is handed back
    Expired(FocusSession),
}

/// The countdown state machine.
///
/// Exactly one countdown is active at a time. Each start -> stop/expiry
/// cycle produces exactly one [`FocusSession`].
#[derive(Debug, Default)]
pub struct Countdown {
    running: bool,
    target: Hms,
    remaining: Hms,
    label: String,
}

impl Countdown {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_running(&self) -> bool {
        self.running
    }

    /// Remaining time; only meaningful while running
    pub fn remaining(&self) -> Hms {
        self.remaining
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Begin counting down from `target`. A blank label becomes "Unnamed".
    pub fn start(&mut self, target: Hms, label: &str) -> Result<(), StartError> {
        if self.running {
            return Err(StartError::AlreadyRunning);
        }
        if target.is_zero() {
            return Err(StartError::ZeroDuration);
        }

        let label = label.trim();
        self.label = if label.is_empty() {
            UNNAMED_LABEL.to_string()
        } else {
            label.to_string()
        };
        self.target = target;
        self.remaining = target;
        self.running = true;
        Ok(())
    }

    /// Stop an active countdown, logging the time focused so far.
    /// Returns `None` when nothing is running.
    pub fn stop(&mut self) -> Option<FocusSession> {
        if !self.running {
            return None;
        }

        self.running = false;
        let elapsed = self.target.total_seconds() - self.remaining.total_seconds();
        Some(FocusSession::new(
            self.label.clone(),
            self.target,
            Hms::from_seconds(elapsed),
        ))
    }

    /// Count down by one second. On reaching zero the countdown expires
    /// and the session is recorded with the full target as focused time.
    pub fn tick(&mut self) -> Tick {
        if !self.running {
            return Tick::Noop;
        }

        self.remaining.decrement();

        if self.remaining.is_zero() {
            self.running = false;
            Tick::Expired(FocusSession::new(
                self.label.clone(),
                self.target,
                self.target,
            ))
        } else {
            Tick::Counting
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_start_requires_positive_duration() {
        let mut countdown = Countdown::new();
        let err = countdown.start(Hms::new(0, 0, 0), "Focus").unwrap_err();
        assert_eq!(err, StartError::ZeroDuration);
        assert!(!countdown.is_running());
    }

    #[test]
    fn test_start_rejected_while_running() {
        let mut countdown = Countdown::new();
        countdown.start(Hms::new(0, 1, 0), "First").unwrap();
        let err = countdown.start(Hms::new(0, 2, 0), "Second").unwrap_err();
        assert_eq!(err, StartError::AlreadyRunning);
        // The running countdown is untouched
        assert!(countdown.is_running());
        assert_eq!(countdown.label(), "First");
        assert_eq!(countdown.remaining(), Hms::new(0, 1, 0));
    }

    #[test]
    fn test_blank_label_defaults_to_unnamed() {
        let mut countdown = Countdown::new();
        countdown.start(Hms::new(0, 0, 10), "   ").unwrap();
        assert_eq!(countdown.label(), UNNAMED_LABEL);
    }

    #[test]
    fn test_tick_counts_down_to_expiry() {
        let mut countdown = Countdown::new();
        countdown.start(Hms::new(0, 0, 5), "Focus").unwrap();

        for expected_remaining in (1..5).rev() {
            match countdown.tick() {
                Tick::Counting => {}
                other => panic!("expected Counting, got {:?}", other),
            }
            assert_eq!(
                countdown.remaining(),
                Hms::from_seconds(expected_remaining)
            );
        }

        // Fifth tick reaches zero and expires
        let session = match countdown.tick() {
            Tick::Expired(session) => session,
            other => panic!("expected Expired, got {:?}", other),
        };

        assert_eq!(countdown.remaining(), Hms::new(0, 0, 0));
        assert!(!countdown.is_running());
        assert_eq!(session.label, "Focus");
        assert_eq!(session.target.compact(), "0h0m5s");
        assert_eq!(session.focused.compact(), "0h0m5s");
    }

    #[test]
    fn test_tick_borrows_across_minute_boundary() {
        let mut countdown = Countdown::new();
        countdown.start(Hms::new(0, 1, 0), "Focus").unwrap();
        countdown.tick();
        assert_eq!(countdown.remaining(), Hms::new(0, 0, 59));
    }

    #[test]
    fn test_stop_logs_elapsed_time() {
        let mut countdown = Countdown::new();
        countdown.start(Hms::new(0, 0, 5), "Focus").unwrap();
        countdown.tick();
        countdown.tick();

        let session = countdown.stop().expect("session");
        assert!(!countdown.is_running());
        assert_eq!(session.label, "Focus");
        assert_eq!(session.target.compact(), "0h0m5s");
        assert_eq!(session.focused.compact(), "0h0m2s");
    }

    #[test]
    fn test_stop_while_idle_is_none() {
        let mut countdown = Countdown::new();
        assert!(countdown.stop().is_none());
    }

    #[test]
    fn test_tick_while_idle_is_noop() {
        let mut countdown = Countdown::new();
        assert!(matches!(countdown.tick(), Tick::Noop));
    }

    #[test]
    fn test_one_session_per_cycle() {
        let mut countdown = Countdown::new();
        countdown.start(Hms::new(0, 0, 1), "Focus").unwrap();

        assert!(matches!(countdown.tick(), Tick::Expired(_)));
        // Expired: further stop/tick produce nothing
        assert!(countdown.stop().is_none());
        assert!(matches!(countdown.tick(), Tick::Noop));
    }

    #[test]
    fn test_restart_after_stop() {
        let mut countdown = Countdown::new();
        countdown.start(Hms::new(0, 0, 5), "First").unwrap();
        countdown.stop();

        countdown.start(Hms::new(0, 0, 3), "Second").unwrap();
        assert!(countdown.is_running());
        assert_eq!(countdown.label(), "Second");
        assert_eq!(countdown.remaining(), Hms::new(0, 0, 3));
    }
}

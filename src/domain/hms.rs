use std::fmt;

/// A duration expressed as (hours, minutes, seconds).
///
/// Values entered through the picker are bounded (0-23 / 0-59 / 0-59);
/// arithmetic keeps minutes and seconds within their natural range.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Hms {
    pub hours: u32,
    pub minutes: u32,
    pub seconds: u32,
}

impl Hms {
    pub fn new(hours: u32, minutes: u32, seconds: u32) -> Self {
        Self {
            hours,
            minutes,
            seconds,
        }
    }

    /// Total duration in seconds
    pub fn total_seconds(&self) -> u32 {
        self.hours * 3600 + self.minutes * 60 + self.seconds
    }

    /// Build from a total second count, normalizing into H/M/S
    pub fn from_seconds(total: u32) -> Self {
        Self {
            hours: total / 3600,
            minutes: (total % 3600) / 60,
            seconds: total % 60,
        }
    }

    pub fn is_zero(&self) -> bool {
        self.total_seconds() == 0
    }

    /// Subtract one second with borrow arithmetic.
    ///
    /// Seconds underflow borrows from minutes, minutes from hours. An
    /// already-zero duration stays clamped at zero.
    pub fn decrement(&mut self) {
        if self.seconds > 0 {
            self.seconds -= 1;
        } else if self.minutes > 0 {
            self.minutes -= 1;
            self.seconds = 59;
        } else if self.hours > 0 {
            self.hours -= 1;
            self.minutes = 59;
            self.seconds = 59;
        }
        // All zero: clamp, never go negative
    }

    /// Compact form for the session log, e.g. "0h5m30s"
    pub fn compact(&self) -> String {
        format!("{}h{}m{}s", self.hours, self.minutes, self.seconds)
    }
}

impl fmt::Display for Hms {
    /// Clock form for the live readout, e.g. "00:05:30"
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{:02}:{:02}:{:02}",
            self.hours, self.minutes, self.seconds
        )
    }
}

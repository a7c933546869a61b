use std::time::Duration;

/// Default render tick interval in milliseconds
pub const DEFAULT_TICK_MS: u64 = 250;

/// Countdown decrement interval in milliseconds (one time unit)
pub const COUNTDOWN_SECOND_MS: u64 = 1000;

/// Get render tick duration (event poll timeout)
pub fn tick_duration() -> Duration {
    Duration::from_millis(DEFAULT_TICK_MS)
}

/// Get the countdown's one-second time unit
pub fn second_duration() -> Duration {
    Duration::from_millis(COUNTDOWN_SECOND_MS)
}

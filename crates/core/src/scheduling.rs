pub mod availability;
pub mod buffer;
pub mod conflict;
pub mod generator;

use chrono::Duration;

/// Converts a minute count into a `Duration`, or `None` if chrono cannot represent it.
pub(crate) fn minutes(value: i64) -> Option<Duration> {
    Duration::try_minutes(value)
}

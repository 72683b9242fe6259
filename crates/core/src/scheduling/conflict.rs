//! Buffered conflict pre-check.
//!
//! This is a fast, best-effort filter. It cannot see bookings admitted between
//! the read of `booked` and the eventual insert; the storage layer re-checks
//! inside a transaction and is the authority on whether a booking lands.

use chrono::{DateTime, Utc};

use super::minutes;
use crate::models::interval::{TimeInterval, Timespan, intersects};

/// Returns `true` if any booked span intersects `candidate` widened by the buffer.
///
/// The candidate becomes `[start - buffer, end + buffer)` and is tested against
/// each booked span's raw bounds with half-open intersection.
///
/// A buffer of zero or less skips the check entirely and reports no conflict,
/// even for an exact overlap. Callers relying on zero-buffer configurations get
/// no overlap protection from this function; only the storage constraint
/// guards them.
pub fn has_conflict<T: Timespan>(candidate: &TimeInterval, booked: &[T], buffer_minutes: i64) -> bool {
    match buffered_window(candidate, buffer_minutes) {
        Some((start, end)) => booked.iter().any(|slot| intersects(slot, start, end)),
        None => false,
    }
}

/// The booked spans that collide with `candidate` under the same rules as [`has_conflict`].
pub fn conflicting<'a, T: Timespan>(
    candidate: &TimeInterval,
    booked: &'a [T],
    buffer_minutes: i64,
) -> Vec<&'a T> {
    match buffered_window(candidate, buffer_minutes) {
        Some((start, end)) => booked
            .iter()
            .filter(|slot| intersects(*slot, start, end))
            .collect(),
        None => Vec::new(),
    }
}

fn buffered_window(
    candidate: &TimeInterval,
    buffer_minutes: i64,
) -> Option<(DateTime<Utc>, DateTime<Utc>)> {
    if buffer_minutes <= 0 {
        return None;
    }

    // Saturate at the representable range instead of overflowing.
    let (start, end) = match minutes(buffer_minutes) {
        Some(buffer) => (
            candidate
                .start_at()
                .checked_sub_signed(buffer)
                .unwrap_or(DateTime::<Utc>::MIN_UTC),
            candidate
                .end_at()
                .checked_add_signed(buffer)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        ),
        None => (DateTime::<Utc>::MIN_UTC, DateTime::<Utc>::MAX_UTC),
    };

    Some((start, end))
}

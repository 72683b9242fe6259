//! Availability composition: generate candidates, then drop the ones that collide.

use chrono::{DateTime, Utc};

use super::conflict::has_conflict;
use super::generator::generate_slots;
use super::minutes;
use crate::errors::{BookingError, BookingResult};
use crate::models::interval::{TimeInterval, Timespan};

/// Candidate slots inside the window that pass the buffered conflict check.
pub fn available_slots<T: Timespan>(
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
    duration_minutes: i64,
    buffer_minutes: i64,
    booked: &[T],
) -> BookingResult<Vec<TimeInterval>> {
    let candidates = generate_slots(window_start, window_end, duration_minutes, buffer_minutes)?;

    Ok(candidates
        .into_iter()
        .filter(|candidate| !has_conflict(candidate, booked, buffer_minutes))
        .collect())
}

pub fn first_available_slot<T: Timespan>(
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
    duration_minutes: i64,
    buffer_minutes: i64,
    booked: &[T],
) -> BookingResult<Option<TimeInterval>> {
    let slots = available_slots(window_start, window_end, duration_minutes, buffer_minutes, booked)?;
    Ok(slots.into_iter().next())
}

/// The interval a booking starting at `start_at` would occupy.
pub fn booking_interval(start_at: DateTime<Utc>, duration_minutes: i64) -> BookingResult<TimeInterval> {
    if duration_minutes <= 0 {
        return Err(BookingError::InvalidDuration(duration_minutes));
    }

    let end_at = minutes(duration_minutes)
        .and_then(|duration| start_at.checked_add_signed(duration))
        .ok_or(BookingError::InvalidDuration(duration_minutes))?;

    TimeInterval::new(start_at, end_at)
}

/// The range of existing bookings that can collide with anything inside the window.
///
/// Bookings ending up to `buffer_minutes` before the window or starting up to
/// `buffer_minutes` after it still matter to the buffered check.
pub fn lookup_range(
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
    buffer_minutes: i64,
) -> (DateTime<Utc>, DateTime<Utc>) {
    match minutes(buffer_minutes.max(0)) {
        Some(buffer) => (
            window_start
                .checked_sub_signed(buffer)
                .unwrap_or(DateTime::<Utc>::MIN_UTC),
            window_end
                .checked_add_signed(buffer)
                .unwrap_or(DateTime::<Utc>::MAX_UTC),
        ),
        None => (DateTime::<Utc>::MIN_UTC, DateTime::<Utc>::MAX_UTC),
    }
}

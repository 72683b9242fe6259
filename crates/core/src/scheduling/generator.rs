//! Candidate slot generation.
//!
//! Walks a cursor across the working window, emitting `[cursor, cursor + duration)`
//! for as long as the slot fits, then stepping over the slot and the buffer.

use chrono::{DateTime, Utc};

use super::minutes;
use crate::errors::{BookingError, BookingResult};
use crate::models::interval::TimeInterval;

/// Enumerate the maximal run of fixed-length, buffer-separated slots in a window.
///
/// An empty or inverted window yields no slots. A non-positive duration is
/// rejected with [`BookingError::InvalidDuration`]; a negative buffer is
/// treated as zero.
///
/// Slots come back strictly increasing, each exactly `duration_minutes` long,
/// with exactly `buffer_minutes` between one slot's end and the next one's
/// start. None extends past `window_end`.
pub fn generate_slots(
    window_start: DateTime<Utc>,
    window_end: DateTime<Utc>,
    duration_minutes: i64,
    buffer_minutes: i64,
) -> BookingResult<Vec<TimeInterval>> {
    if duration_minutes <= 0 {
        return Err(BookingError::InvalidDuration(duration_minutes));
    }
    let duration =
        minutes(duration_minutes).ok_or(BookingError::InvalidDuration(duration_minutes))?;

    if window_start >= window_end {
        return Ok(Vec::new());
    }

    // A buffer too large to represent can never fit a second slot anyway.
    let step = minutes(buffer_minutes.max(0)).and_then(|buffer| duration.checked_add(&buffer));

    let mut slots = Vec::new();
    let mut cursor = window_start;

    while let Some(slot_end) = cursor.checked_add_signed(duration) {
        if slot_end > window_end {
            break;
        }
        slots.push(TimeInterval::new(cursor, slot_end)?);

        match step.and_then(|step| cursor.checked_add_signed(step)) {
            Some(next) => cursor = next,
            None => break,
        }
    }

    Ok(slots)
}

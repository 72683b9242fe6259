use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

use crate::errors::{BookingError, BookingResult};

/// Anything that occupies a span of time on a professional's schedule.
///
/// The conflict checker compares candidates against any `Timespan` without
/// re-validating it, so booked rows coming back from storage can be passed
/// in as they are.
pub trait Timespan {
    fn start_at(&self) -> DateTime<Utc>;
    fn end_at(&self) -> DateTime<Utc>;
}

/// A half-open `[start_at, end_at)` interval with `start_at < end_at`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "RawInterval")]
pub struct TimeInterval {
    start_at: DateTime<Utc>,
    end_at: DateTime<Utc>,
}

#[derive(Deserialize)]
struct RawInterval {
    start_at: DateTime<Utc>,
    end_at: DateTime<Utc>,
}

impl TryFrom<RawInterval> for TimeInterval {
    type Error = BookingError;

    fn try_from(raw: RawInterval) -> BookingResult<Self> {
        TimeInterval::new(raw.start_at, raw.end_at)
    }
}

impl TimeInterval {
    /// Builds an interval, rejecting empty and inverted bounds.
    pub fn new(start_at: DateTime<Utc>, end_at: DateTime<Utc>) -> BookingResult<Self> {
        if start_at >= end_at {
            return Err(BookingError::Validation(format!(
                "interval start {} must be before end {}",
                start_at, end_at
            )));
        }

        Ok(Self { start_at, end_at })
    }

    pub fn duration(&self) -> Duration {
        self.end_at - self.start_at
    }

    /// Half-open intersection test. Intervals that only touch do not overlap.
    pub fn overlaps<T: Timespan + ?Sized>(&self, other: &T) -> bool {
        intersects(other, self.start_at, self.end_at)
    }
}

/// Whether `span` intersects the half-open range `[start, end)`.
pub(crate) fn intersects<T: Timespan + ?Sized>(span: &T, start: DateTime<Utc>, end: DateTime<Utc>) -> bool {
    span.start_at() < end && span.end_at() > start
}

impl Timespan for TimeInterval {
    fn start_at(&self) -> DateTime<Utc> {
        self.start_at
    }

    fn end_at(&self) -> DateTime<Utc> {
        self.end_at
    }
}

impl<T: Timespan + ?Sized> Timespan for &T {
    fn start_at(&self) -> DateTime<Utc> {
        (**self).start_at()
    }

    fn end_at(&self) -> DateTime<Utc> {
        (**self).end_at()
    }
}

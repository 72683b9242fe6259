use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use super::interval::{TimeInterval, Timespan};

/// A confirmed appointment occupying an interval on one professional's schedule.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct BookedSlot {
    pub id: Uuid,
    pub professional_id: Uuid,
    pub specialty_id: Option<Uuid>,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Timespan for BookedSlot {
    fn start_at(&self) -> DateTime<Utc> {
        self.start_at
    }

    fn end_at(&self) -> DateTime<Utc> {
        self.end_at
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct SlotResponse {
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
}

impl From<TimeInterval> for SlotResponse {
    fn from(interval: TimeInterval) -> Self {
        Self {
            start_at: interval.start_at(),
            end_at: interval.end_at(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AvailabilityResponse {
    pub professional_id: Uuid,
    pub window_start: DateTime<Utc>,
    pub window_end: DateTime<Utc>,
    pub duration_minutes: i64,
    pub buffer_minutes: i64,
    pub slots: Vec<SlotResponse>,
}

/// The earliest bookable slot in a window, if there is one.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct NextSlotResponse {
    pub professional_id: Uuid,
    pub duration_minutes: i64,
    pub buffer_minutes: i64,
    pub slot: Option<SlotResponse>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookSlotRequest {
    pub start_at: DateTime<Utc>,
    pub specialty_id: Option<Uuid>,
    pub duration_minutes: Option<i64>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookSlotResponse {
    pub id: Uuid,
    pub professional_id: Uuid,
    pub specialty_id: Option<Uuid>,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl From<BookedSlot> for BookSlotResponse {
    fn from(slot: BookedSlot) -> Self {
        Self {
            id: slot.id,
            professional_id: slot.professional_id,
            specialty_id: slot.specialty_id,
            start_at: slot.start_at,
            end_at: slot.end_at,
            created_at: slot.created_at,
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BookingsResponse {
    pub professional_id: Uuid,
    pub bookings: Vec<BookSlotResponse>,
}

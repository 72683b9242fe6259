use carebook_core::models::{
    booking::BookedSlot,
    clinic::{Professional, Specialty},
    interval::Timespan,
};
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use sqlx::FromRow;
use uuid::Uuid;

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbSpecialty {
    pub id: Uuid,
    pub name: String,
    pub duration_minutes: i64,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, Serialize, Deserialize, FromRow)]
pub struct DbProfessional {
    pub id: Uuid,
    pub name: String,
    pub specialty_id: Option<Uuid>,
    pub created_at: DateTime<Utc>,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, FromRow)]
pub struct DbBookedSlot {
    pub id: Uuid,
    pub professional_id: Uuid,
    pub specialty_id: Option<Uuid>,
    pub start_at: DateTime<Utc>,
    pub end_at: DateTime<Utc>,
    pub created_at: DateTime<Utc>,
}

impl Timespan for DbBookedSlot {
    fn start_at(&self) -> DateTime<Utc> {
        self.start_at
    }

    fn end_at(&self) -> DateTime<Utc> {
        self.end_at
    }
}

/// Result of the transactional insert in [`crate::repositories::booked_slot::book_slot`].
#[derive(Debug, Clone, PartialEq)]
pub enum BookingOutcome {
    Booked(DbBookedSlot),
    /// Rejected by the commit-time guard. Empty when only the exclusion
    /// constraint caught the overlap.
    Conflict(Vec<DbBookedSlot>),
    ProfessionalNotFound,
}

impl From<DbSpecialty> for Specialty {
    fn from(row: DbSpecialty) -> Self {
        Self {
            id: row.id,
            name: row.name,
            duration_minutes: row.duration_minutes,
            created_at: row.created_at,
        }
    }
}

impl From<DbProfessional> for Professional {
    fn from(row: DbProfessional) -> Self {
        Self {
            id: row.id,
            name: row.name,
            specialty_id: row.specialty_id,
            created_at: row.created_at,
        }
    }
}

impl From<DbBookedSlot> for BookedSlot {
    fn from(row: DbBookedSlot) -> Self {
        Self {
            id: row.id,
            professional_id: row.professional_id,
            specialty_id: row.specialty_id,
            start_at: row.start_at,
            end_at: row.end_at,
            created_at: row.created_at,
        }
    }
}

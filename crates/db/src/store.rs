//! The storage seam the booking API depends on.

use async_trait::async_trait;
use carebook_core::TimeInterval;
use chrono::{DateTime, Utc};
use eyre::Result;
use uuid::Uuid;

use crate::{
    DbPool,
    models::{BookingOutcome, DbBookedSlot, DbProfessional, DbSpecialty},
    repositories::{booked_slot, professional, specialty},
};

#[async_trait]
pub trait SlotStore: Send + Sync {
    async fn create_specialty(&self, name: String, duration_minutes: i64) -> Result<DbSpecialty>;

    async fn get_specialty(&self, id: Uuid) -> Result<Option<DbSpecialty>>;

    async fn list_specialties(&self) -> Result<Vec<DbSpecialty>>;

    async fn create_professional(
        &self,
        name: String,
        specialty_id: Option<Uuid>,
    ) -> Result<DbProfessional>;

    async fn get_professional(&self, id: Uuid) -> Result<Option<DbProfessional>>;

    async fn get_booked_slots_in_range(
        &self,
        professional_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<DbBookedSlot>>;

    /// Authoritative, transactional admission of a booking.
    async fn book_slot(
        &self,
        professional_id: Uuid,
        specialty_id: Option<Uuid>,
        interval: TimeInterval,
        buffer_minutes: i64,
    ) -> Result<BookingOutcome>;
}

/// [`SlotStore`] backed by the PostgreSQL repositories.
#[derive(Clone)]
pub struct PgSlotStore {
    pool: DbPool,
}

impl PgSlotStore {
    pub fn new(pool: DbPool) -> Self {
        Self { pool }
    }
}

#[async_trait]
impl SlotStore for PgSlotStore {
    async fn create_specialty(&self, name: String, duration_minutes: i64) -> Result<DbSpecialty> {
        specialty::create_specialty(&self.pool, &name, duration_minutes).await
    }

    async fn get_specialty(&self, id: Uuid) -> Result<Option<DbSpecialty>> {
        specialty::get_specialty_by_id(&self.pool, id).await
    }

    async fn list_specialties(&self) -> Result<Vec<DbSpecialty>> {
        specialty::list_specialties(&self.pool).await
    }

    async fn create_professional(
        &self,
        name: String,
        specialty_id: Option<Uuid>,
    ) -> Result<DbProfessional> {
        professional::create_professional(&self.pool, &name, specialty_id).await
    }

    async fn get_professional(&self, id: Uuid) -> Result<Option<DbProfessional>> {
        professional::get_professional_by_id(&self.pool, id).await
    }

    async fn get_booked_slots_in_range(
        &self,
        professional_id: Uuid,
        from: DateTime<Utc>,
        to: DateTime<Utc>,
    ) -> Result<Vec<DbBookedSlot>> {
        booked_slot::get_booked_slots_in_range(&self.pool, professional_id, from, to).await
    }

    async fn book_slot(
        &self,
        professional_id: Uuid,
        specialty_id: Option<Uuid>,
        interval: TimeInterval,
        buffer_minutes: i64,
    ) -> Result<BookingOutcome> {
        booked_slot::book_slot(&self.pool, professional_id, specialty_id, interval, buffer_minutes)
            .await
    }
}

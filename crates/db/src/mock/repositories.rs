use async_trait::async_trait;
use carebook_core::TimeInterval;
use chrono::{DateTime, Utc};
use mockall::mock;
use uuid::Uuid;

use crate::models::{BookingOutcome, DbBookedSlot, DbProfessional, DbSpecialty};
use crate::store::SlotStore;

// Mock store for handler tests
mock! {
    pub SlotStore {}

    #[async_trait]
    impl SlotStore for SlotStore {
        async fn create_specialty(
            &self,
            name: String,
            duration_minutes: i64,
        ) -> eyre::Result<DbSpecialty>;

        async fn get_specialty(&self, id: Uuid) -> eyre::Result<Option<DbSpecialty>>;

        async fn list_specialties(&self) -> eyre::Result<Vec<DbSpecialty>>;

        async fn create_professional(
            &self,
            name: String,
            specialty_id: Option<Uuid>,
        ) -> eyre::Result<DbProfessional>;

        async fn get_professional(&self, id: Uuid) -> eyre::Result<Option<DbProfessional>>;

        async fn get_booked_slots_in_range(
            &self,
            professional_id: Uuid,
            from: DateTime<Utc>,
            to: DateTime<Utc>,
        ) -> eyre::Result<Vec<DbBookedSlot>>;

        async fn book_slot(
            &self,
            professional_id: Uuid,
            specialty_id: Option<Uuid>,
            interval: TimeInterval,
            buffer_minutes: i64,
        ) -> eyre::Result<BookingOutcome>;
    }
}

#![allow(dead_code)]

use std::sync::Arc;

use axum_test::TestServer;
use carebook_api::{ApiState, app};
use carebook_db::{
    mock::repositories::MockSlotStore,
    models::{DbBookedSlot, DbProfessional, DbSpecialty},
};
use chrono::{DateTime, TimeZone, Utc};
use uuid::Uuid;

pub const BUFFER_MINUTES: i64 = 10;

pub fn at(hour: u32, minute: u32) -> DateTime<Utc> {
    Utc.with_ymd_and_hms(2026, 3, 16, hour, minute, 0).unwrap()
}

pub fn rfc3339(instant: DateTime<Utc>) -> String {
    instant.format("%Y-%m-%dT%H:%M:%SZ").to_string()
}

pub fn specialty(duration_minutes: i64) -> DbSpecialty {
    DbSpecialty {
        id: Uuid::new_v4(),
        name: "General Practice".to_string(),
        duration_minutes,
        created_at: Utc::now(),
    }
}

pub fn professional(specialty_id: Option<Uuid>) -> DbProfessional {
    DbProfessional {
        id: Uuid::new_v4(),
        name: "Dr. Ana Souza".to_string(),
        specialty_id,
        created_at: Utc::now(),
    }
}

pub fn booked(professional_id: Uuid, start: DateTime<Utc>, end: DateTime<Utc>) -> DbBookedSlot {
    DbBookedSlot {
        id: Uuid::new_v4(),
        professional_id,
        specialty_id: None,
        start_at: start,
        end_at: end,
        created_at: Utc::now(),
    }
}

/// Serves the real router against a mock store.
pub fn server(store: MockSlotStore, buffer_minutes: i64) -> TestServer {
    let state = Arc::new(ApiState {
        store: Arc::new(store),
        buffer_minutes,
    });

    TestServer::new(app(state)).expect("Failed to start test server")
}

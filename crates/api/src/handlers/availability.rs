//! # Availability Handlers
//!
//! Answers "when can this professional be booked?" for a working window.
//!
//! 1. Resolve the appointment duration (explicit, requested specialty, or the
//!    professional's default specialty)
//! 2. Generate every buffer-separated candidate slot in the window
//! 3. Load bookings that can reach into the window once the buffer is applied
//! 4. Drop candidates that collide with them
//!
//! The result is advisory. A slot shown here can still be taken before the
//! client books it; the booking endpoint re-checks under a lock.

use axum::{
    Json,
    extract::{Path, Query, State},
};
use carebook_core::{
    errors::BookingError,
    models::booking::{AvailabilityResponse, NextSlotResponse, SlotResponse},
    scheduling::availability::{available_slots, first_available_slot, lookup_range},
};
use carebook_db::models::DbBookedSlot;
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use std::sync::Arc;
use uuid::Uuid;

use crate::{
    ApiState,
    handlers::{load_professional, resolve_duration},
    middleware::error_handling::AppError,
};

/// Longest window a single availability request may span.
pub const MAX_WINDOW_DAYS: i64 = 31;

/// Query parameters for the availability endpoints
#[derive(Debug, Deserialize)]
pub struct AvailabilityQuery {
    /// Start of the working window (RFC 3339)
    pub window_start: DateTime<Utc>,

    /// End of the working window (RFC 3339)
    pub window_end: DateTime<Utc>,

    /// Specialty whose duration sizes the slots
    pub specialty_id: Option<Uuid>,

    /// Explicit slot length, overriding any specialty
    pub duration_minutes: Option<i64>,
}

struct WindowInputs {
    duration_minutes: i64,
    buffer_minutes: i64,
    booked: Vec<DbBookedSlot>,
}

async fn window_inputs(
    state: &ApiState,
    id: Uuid,
    query: &AvailabilityQuery,
) -> Result<WindowInputs, AppError> {
    if query.window_end - query.window_start > Duration::days(MAX_WINDOW_DAYS) {
        return Err(AppError(BookingError::Validation(format!(
            "Availability window may span at most {} days",
            MAX_WINDOW_DAYS
        ))));
    }

    let professional = load_professional(state, id).await?;
    let duration_minutes =
        resolve_duration(state, &professional, query.specialty_id, query.duration_minutes).await?;
    let buffer_minutes = state.buffer_minutes;

    let booked = if query.window_start < query.window_end {
        let (from, to) = lookup_range(query.window_start, query.window_end, buffer_minutes);
        state.store.get_booked_slots_in_range(id, from, to).await?
    } else {
        Vec::new()
    };

    Ok(WindowInputs {
        duration_minutes,
        buffer_minutes,
        booked,
    })
}

/// Lists bookable slots for a professional inside a working window
///
/// # Endpoint
///
/// ```text
/// GET /api/professionals/:id/availability?window_start=...&window_end=...&specialty_id=...
/// ```
///
/// An empty or inverted window is not an error; it simply has no slots.
///
/// # Errors
///
/// * `BookingError::NotFound` - Unknown professional or specialty
/// * `BookingError::Validation` - No way to determine the slot duration, or
///   a window longer than [`MAX_WINDOW_DAYS`]
/// * `BookingError::InvalidDuration` - Non-positive duration
/// * `BookingError::Database` - Storage failure
#[axum::debug_handler]
pub async fn get_availability(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<AvailabilityResponse>, AppError> {
    let inputs = window_inputs(&state, id, &query).await?;

    let slots = available_slots(
        query.window_start,
        query.window_end,
        inputs.duration_minutes,
        inputs.buffer_minutes,
        &inputs.booked,
    )?;

    tracing::debug!(
        "Availability for professional {}: {} free slots, {} bookings nearby",
        id,
        slots.len(),
        inputs.booked.len()
    );

    Ok(Json(AvailabilityResponse {
        professional_id: id,
        window_start: query.window_start,
        window_end: query.window_end,
        duration_minutes: inputs.duration_minutes,
        buffer_minutes: inputs.buffer_minutes,
        slots: slots.into_iter().map(SlotResponse::from).collect(),
    }))
}

/// Earliest bookable slot for a professional inside a working window
///
/// ```text
/// GET /api/professionals/:id/availability/next?window_start=...&window_end=...
/// ```
///
/// Takes the same parameters as [`get_availability`]. `slot` is `null` when
/// nothing in the window is free.
#[axum::debug_handler]
pub async fn get_next_available(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Query(query): Query<AvailabilityQuery>,
) -> Result<Json<NextSlotResponse>, AppError> {
    let inputs = window_inputs(&state, id, &query).await?;

    let slot = first_available_slot(
        query.window_start,
        query.window_end,
        inputs.duration_minutes,
        inputs.buffer_minutes,
        &inputs.booked,
    )?;

    Ok(Json(NextSlotResponse {
        professional_id: id,
        duration_minutes: inputs.duration_minutes,
        buffer_minutes: inputs.buffer_minutes,
        slot: slot.map(SlotResponse::from),
    }))
}

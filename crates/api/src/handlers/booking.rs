//! # Booking Handlers
//!
//! Admission runs in two layers. The handler first runs the in-memory conflict
//! check against a fresh read of nearby bookings and rejects obvious clashes
//! cheaply. It then hands the interval to the store, whose transactional
//! insert re-checks under a per-professional lock and has the final say.

use axum::{
    Json,
    extract::{Path, Query, State},
    http::StatusCode,
};
use carebook_core::{
    Timespan, conflicting,
    errors::BookingError,
    models::booking::{BookSlotRequest, BookSlotResponse, BookedSlot, BookingsResponse},
    scheduling::availability::{booking_interval, lookup_range},
};
use carebook_db::models::BookingOutcome;
use chrono::{DateTime, Utc};
use serde::Deserialize;
use std::sync::Arc;
use tracing::{info, warn};
use uuid::Uuid;

use crate::{
    ApiState,
    handlers::{load_professional, resolve_duration},
    middleware::error_handling::AppError,
};

#[derive(Debug, Deserialize)]
pub struct BookingsQuery {
    pub from: DateTime<Utc>,
    pub to: DateTime<Utc>,
}

#[axum::debug_handler]
pub async fn list_bookings(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Query(query): Query<BookingsQuery>,
) -> Result<Json<BookingsResponse>, AppError> {
    if query.from >= query.to {
        return Err(AppError(BookingError::Validation(
            "from must be before to".to_string(),
        )));
    }

    load_professional(&state, id).await?;
    let booked = state
        .store
        .get_booked_slots_in_range(id, query.from, query.to)
        .await?;

    Ok(Json(BookingsResponse {
        professional_id: id,
        bookings: booked
            .into_iter()
            .map(|row| BookSlotResponse::from(BookedSlot::from(row)))
            .collect(),
    }))
}

/// Books a slot for a professional
///
/// # Endpoint
///
/// ```text
/// POST /api/professionals/:id/bookings
/// ```
///
/// Responds `201 Created` with the stored booking, or `409 Conflict` when the
/// slot collides with an existing booking (including its buffer).
#[axum::debug_handler]
pub async fn book_slot(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
    Json(payload): Json<BookSlotRequest>,
) -> Result<(StatusCode, Json<BookSlotResponse>), AppError> {
    let professional = load_professional(&state, id).await?;
    let duration_minutes =
        resolve_duration(&state, &professional, payload.specialty_id, payload.duration_minutes)
            .await?;
    let specialty_id = payload.specialty_id.or(professional.specialty_id);
    let interval = booking_interval(payload.start_at, duration_minutes)?;
    let buffer_minutes = state.buffer_minutes;

    // Pre-check
    let (from, to) = lookup_range(interval.start_at(), interval.end_at(), buffer_minutes);
    let nearby = state.store.get_booked_slots_in_range(id, from, to).await?;
    let clashes = conflicting(&interval, &nearby, buffer_minutes);
    if !clashes.is_empty() {
        warn!(
            "Booking pre-check rejected {} - {} for professional {}: {} clashing bookings",
            interval.start_at(),
            interval.end_at(),
            id,
            clashes.len()
        );
        return Err(AppError(BookingError::Conflict(format!(
            "{} - {} is within {} minutes of an existing booking",
            interval.start_at(),
            interval.end_at(),
            buffer_minutes
        ))));
    }

    // Authoritative insert
    match state
        .store
        .book_slot(id, specialty_id, interval, buffer_minutes)
        .await?
    {
        BookingOutcome::Booked(row) => {
            info!(
                "Booked {} - {} for professional {} (booking {})",
                row.start_at, row.end_at, id, row.id
            );
            Ok((
                StatusCode::CREATED,
                Json(BookSlotResponse::from(BookedSlot::from(row))),
            ))
        }
        BookingOutcome::Conflict(_) => {
            warn!(
                "Booking {} - {} for professional {} lost to a concurrent booking",
                interval.start_at(),
                interval.end_at(),
                id
            );
            Err(AppError(BookingError::Conflict(format!(
                "{} - {} was taken by another booking",
                interval.start_at(),
                interval.end_at()
            ))))
        }
        BookingOutcome::ProfessionalNotFound => Err(AppError(BookingError::NotFound(format!(
            "Professional with ID {} not found",
            id
        )))),
    }
}

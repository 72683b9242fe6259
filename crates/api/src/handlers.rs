//! Request handlers and the lookups they share.

pub mod availability;
pub mod booking;
pub mod clinic;

use carebook_core::errors::BookingError;
use carebook_db::models::{DbProfessional, DbSpecialty};
use uuid::Uuid;

use crate::{ApiState, middleware::error_handling::AppError};

pub(crate) async fn load_professional(state: &ApiState, id: Uuid) -> Result<DbProfessional, AppError> {
    state
        .store
        .get_professional(id)
        .await?
        .ok_or_else(|| AppError(BookingError::NotFound(format!("Professional with ID {} not found", id))))
}

/// Works out how long the requested appointment lasts.
///
/// A requested specialty must exist even when an explicit duration is given,
/// since it is stored with the booking. An explicit duration wins, then the
/// requested specialty, then the professional's default specialty.
pub(crate) async fn resolve_duration(
    state: &ApiState,
    professional: &DbProfessional,
    specialty_id: Option<Uuid>,
    duration_minutes: Option<i64>,
) -> Result<i64, AppError> {
    let requested = match specialty_id {
        Some(specialty_id) => Some(load_specialty(state, specialty_id).await?),
        None => None,
    };

    if let Some(duration) = duration_minutes {
        return Ok(duration);
    }
    if let Some(specialty) = requested {
        return Ok(specialty.duration_minutes);
    }

    let default_id = professional.specialty_id.ok_or_else(|| {
        AppError(BookingError::Validation(
            "A specialty_id or duration_minutes is required for this professional".to_string(),
        ))
    })?;

    Ok(load_specialty(state, default_id).await?.duration_minutes)
}

async fn load_specialty(state: &ApiState, id: Uuid) -> Result<DbSpecialty, AppError> {
    state
        .store
        .get_specialty(id)
        .await?
        .ok_or_else(|| AppError(BookingError::NotFound(format!("Specialty with ID {} not found", id))))
}

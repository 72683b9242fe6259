use axum::{
    Json,
    extract::{Path, State},
    http::StatusCode,
};
use carebook_core::{
    errors::BookingError,
    models::clinic::{
        CreateProfessionalRequest, CreateSpecialtyRequest, Professional, SpecialtiesResponse,
        Specialty,
    },
};
use std::sync::Arc;
use uuid::Uuid;

use crate::{ApiState, handlers::load_professional, middleware::error_handling::AppError};

fn required_name(name: &str) -> Result<String, AppError> {
    let name = name.trim();
    if name.is_empty() {
        return Err(AppError(BookingError::Validation("name must not be empty".to_string())));
    }
    Ok(name.to_string())
}

#[axum::debug_handler]
pub async fn create_specialty(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateSpecialtyRequest>,
) -> Result<(StatusCode, Json<Specialty>), AppError> {
    let name = required_name(&payload.name)?;
    if payload.duration_minutes <= 0 {
        return Err(AppError(BookingError::InvalidDuration(payload.duration_minutes)));
    }

    let specialty = state
        .store
        .create_specialty(name, payload.duration_minutes)
        .await?;

    Ok((StatusCode::CREATED, Json(specialty.into())))
}

#[axum::debug_handler]
pub async fn list_specialties(
    State(state): State<Arc<ApiState>>,
) -> Result<Json<SpecialtiesResponse>, AppError> {
    let specialties = state.store.list_specialties().await?;

    Ok(Json(SpecialtiesResponse {
        specialties: specialties.into_iter().map(Specialty::from).collect(),
    }))
}

#[axum::debug_handler]
pub async fn get_specialty(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Specialty>, AppError> {
    let specialty = state
        .store
        .get_specialty(id)
        .await?
        .ok_or_else(|| BookingError::NotFound(format!("Specialty with ID {} not found", id)))?;

    Ok(Json(specialty.into()))
}

#[axum::debug_handler]
pub async fn create_professional(
    State(state): State<Arc<ApiState>>,
    Json(payload): Json<CreateProfessionalRequest>,
) -> Result<(StatusCode, Json<Professional>), AppError> {
    let name = required_name(&payload.name)?;

    if let Some(specialty_id) = payload.specialty_id {
        state.store.get_specialty(specialty_id).await?.ok_or_else(|| {
            BookingError::NotFound(format!("Specialty with ID {} not found", specialty_id))
        })?;
    }

    let professional = state
        .store
        .create_professional(name, payload.specialty_id)
        .await?;

    Ok((StatusCode::CREATED, Json(professional.into())))
}

#[axum::debug_handler]
pub async fn get_professional(
    State(state): State<Arc<ApiState>>,
    Path(id): Path<Uuid>,
) -> Result<Json<Professional>, AppError> {
    let professional = load_professional(&state, id).await?;

    Ok(Json(professional.into()))
}

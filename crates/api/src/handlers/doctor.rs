//! Handlers for the `/doctors` resource.

use axum::extract::{Path, Query, State};
use axum::http::StatusCode;
use axum::Json;
use clinic_core::doctor::{self, ENTITY};
use clinic_core::error::CoreError;
use clinic_core::types::DbId;
use clinic_db::models::doctor::{
    CreateDoctor, Doctor, DoctorFilter, DoctorWithAppointments, UpdateDoctor,
};

use crate::error::{AppError, AppResult};
use crate::query::ListDoctorsParams;
use crate::state::AppState;

fn not_found(id: DbId) -> AppError {
    AppError::Core(CoreError::NotFound { entity: ENTITY, id })
}

/// POST /doctors
pub async fn create(
    State(state): State<AppState>,
    Json(input): Json<CreateDoctor>,
) -> AppResult<(StatusCode, Json<Doctor>)> {
    doctor::validate_create(&input.name, &input.specialty)?;

    let created = state.store.create(&input).await?;
    tracing::info!(id = created.id, specialty = %created.specialty, "Doctor created");
    Ok((StatusCode::CREATED, Json(created)))
}

/// GET /doctors/{id}
///
/// Includes the doctor's appointments.
pub async fn get_by_id(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<DoctorWithAppointments>> {
    let found = state
        .store
        .find_with_appointments(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    Ok(Json(found))
}

/// GET /doctors?specialty=&skip=&limit=
pub async fn list(
    State(state): State<AppState>,
    Query(params): Query<ListDoctorsParams>,
) -> AppResult<Json<Vec<Doctor>>> {
    let page = doctor::resolve_page(params.skip, params.limit)?;
    let filter = DoctorFilter {
        specialty: doctor::specialty_filter(params.specialty.as_deref()).map(str::to_string),
        page,
    };

    let doctors = state.store.list(&filter).await?;
    tracing::debug!(count = doctors.len(), skip = page.skip, limit = page.limit, "Listed doctors");
    Ok(Json(doctors))
}

/// PUT /doctors/{id}
///
/// Fields omitted from the body keep their stored value.
pub async fn update(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
    Json(input): Json<UpdateDoctor>,
) -> AppResult<Json<Doctor>> {
    doctor::validate_update(input.name.as_deref(), input.specialty.as_deref())?;

    let updated = state
        .store
        .update(id, &input)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id, "Doctor updated");
    Ok(Json(updated))
}

/// DELETE /doctors/{id}
///
/// Responds with the record as it was before deletion.
pub async fn delete(
    State(state): State<AppState>,
    Path(id): Path<DbId>,
) -> AppResult<Json<Doctor>> {
    let deleted = state
        .store
        .delete(id)
        .await?
        .ok_or_else(|| not_found(id))?;
    tracing::info!(id, "Doctor deleted");
    Ok(Json(deleted))
}

//! Patient endpoints.

use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{found, ApiContext, DeletedResponse, EntityId, ValidJson};
use crate::db;
use crate::models::{EntityKind, NewPatient, Patient};

pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<Patient>>, ApiError> {
    let conn = ctx.core.open_db()?;
    Ok(Json(db::get_all_patients(&conn)?))
}

pub async fn create(
    State(ctx): State<ApiContext>,
    ValidJson(input): ValidJson<NewPatient>,
) -> Result<Json<Patient>, ApiError> {
    let conn = ctx.core.open_db()?;
    let patient = db::insert_patient(&conn, &input)?;
    tracing::info!(patient_id = patient.id, "Patient created");
    Ok(Json(patient))
}

pub async fn detail(
    State(ctx): State<ApiContext>,
    EntityId(id): EntityId,
) -> Result<Json<Patient>, ApiError> {
    let conn = ctx.core.open_db()?;
    let patient = found(EntityKind::Patient, db::get_patient(&conn, id)?)?;
    Ok(Json(patient))
}

pub async fn remove(
    State(ctx): State<ApiContext>,
    EntityId(id): EntityId,
) -> Result<Json<DeletedResponse>, ApiError> {
    let conn = ctx.core.open_db()?;
    db::delete_patient(&conn, id)?;
    Ok(Json(DeletedResponse::new(EntityKind::Patient)))
}

//! Medication endpoints.

use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{found, ApiContext, DeletedResponse, EntityId, ValidJson};
use crate::db;
use crate::models::{EntityKind, Medication, NewMedication};

pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<Medication>>, ApiError> {
    let conn = ctx.core.open_db()?;
    Ok(Json(db::get_all_medications(&conn)?))
}

pub async fn create(
    State(ctx): State<ApiContext>,
    ValidJson(input): ValidJson<NewMedication>,
) -> Result<Json<Medication>, ApiError> {
    let conn = ctx.core.open_db()?;
    let medication = db::insert_medication(&conn, &input)?;
    tracing::info!(medication_id = medication.id, "Medication created");
    Ok(Json(medication))
}

pub async fn detail(
    State(ctx): State<ApiContext>,
    EntityId(id): EntityId,
) -> Result<Json<Medication>, ApiError> {
    let conn = ctx.core.open_db()?;
    let medication = found(EntityKind::Medication, db::get_medication(&conn, id)?)?;
    Ok(Json(medication))
}

pub async fn remove(
    State(ctx): State<ApiContext>,
    EntityId(id): EntityId,
) -> Result<Json<DeletedResponse>, ApiError> {
    let conn = ctx.core.open_db()?;
    db::delete_medication(&conn, id)?;
    Ok(Json(DeletedResponse::new(EntityKind::Medication)))
}

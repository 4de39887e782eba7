//! Doctor endpoints.

use axum::extract::State;
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{found, ApiContext, DeletedResponse, EntityId, ValidJson};
use crate::db;
use crate::models::{Doctor, EntityKind, NewDoctor};

/// `GET /doctors/`
pub async fn list(State(ctx): State<ApiContext>) -> Result<Json<Vec<Doctor>>, ApiError> {
    let conn = ctx.core.open_db()?;
    Ok(Json(db::get_all_doctors(&conn)?))
}

/// `POST /doctors/`
pub async fn create(
    State(ctx): State<ApiContext>,
    ValidJson(input): ValidJson<NewDoctor>,
) -> Result<Json<Doctor>, ApiError> {
    let conn = ctx.core.open_db()?;
    let doctor = db::insert_doctor(&conn, &input)?;
    tracing::info!(doctor_id = doctor.id, "Doctor created");
    Ok(Json(doctor))
}

/// `GET /doctors/{id}`
pub async fn detail(
    State(ctx): State<ApiContext>,
    EntityId(id): EntityId,
) -> Result<Json<Doctor>, ApiError> {
    let conn = ctx.core.open_db()?;
    let doctor = found(EntityKind::Doctor, db::get_doctor(&conn, id)?)?;
    Ok(Json(doctor))
}

/// `DELETE /doctors/{id}` — also removes the doctor's appointments and
/// prescriptions.
pub async fn remove(
    State(ctx): State<ApiContext>,
    EntityId(id): EntityId,
) -> Result<Json<DeletedResponse>, ApiError> {
    let conn = ctx.core.open_db()?;
    db::delete_doctor(&conn, id)?;
    Ok(Json(DeletedResponse::new(EntityKind::Doctor)))
}

//! Appointment endpoints.
//!
//! - `GET /appointments/` — list, optionally windowed with `skip`/`limit`
//! - `GET /appointments/schedule` — joined view with names and 12-hour times
//! - `POST /appointments/` — book; 404 when the doctor or patient is missing
//! - `GET|DELETE /appointments/{id}`

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{found, ApiContext, DeletedResponse, EntityId, ValidJson};
use crate::db;
use crate::models::{Appointment, AppointmentDetail, AppointmentPage, EntityKind, NewAppointment};

pub async fn list(
    State(ctx): State<ApiContext>,
    page: Result<Query<AppointmentPage>, QueryRejection>,
) -> Result<Json<Vec<Appointment>>, ApiError> {
    let Query(page) = page?;
    let conn = ctx.core.open_db()?;
    Ok(Json(db::get_appointments(&conn, &page)?))
}

pub async fn schedule(
    State(ctx): State<ApiContext>,
) -> Result<Json<Vec<AppointmentDetail>>, ApiError> {
    let conn = ctx.core.open_db()?;
    Ok(Json(db::get_appointment_schedule(&conn)?))
}

pub async fn create(
    State(ctx): State<ApiContext>,
    ValidJson(input): ValidJson<NewAppointment>,
) -> Result<Json<Appointment>, ApiError> {
    let conn = ctx.core.open_db()?;
    let appointment = db::insert_appointment(&conn, &input)?;
    tracing::info!(
        appointment_id = appointment.id,
        doctor_id = appointment.doctor_id,
        patient_id = appointment.patient_id,
        "Appointment booked"
    );
    Ok(Json(appointment))
}

pub async fn detail(
    State(ctx): State<ApiContext>,
    EntityId(id): EntityId,
) -> Result<Json<Appointment>, ApiError> {
    let conn = ctx.core.open_db()?;
    let appointment = found(EntityKind::Appointment, db::get_appointment(&conn, id)?)?;
    Ok(Json(appointment))
}

pub async fn remove(
    State(ctx): State<ApiContext>,
    EntityId(id): EntityId,
) -> Result<Json<DeletedResponse>, ApiError> {
    let conn = ctx.core.open_db()?;
    db::delete_appointment(&conn, id)?;
    Ok(Json(DeletedResponse::new(EntityKind::Appointment)))
}

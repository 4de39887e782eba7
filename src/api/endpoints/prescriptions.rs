//! Prescription endpoints.
//!
//! `GET /prescriptions/?patient_id=&doctor_id=` filters with AND; either
//! parameter may be omitted.

use axum::extract::rejection::QueryRejection;
use axum::extract::{Query, State};
use axum::Json;

use crate::api::error::ApiError;
use crate::api::types::{found, ApiContext, DeletedResponse, EntityId, ValidJson};
use crate::db;
use crate::models::{EntityKind, NewPrescription, Prescription, PrescriptionFilter};

pub async fn list(
    State(ctx): State<ApiContext>,
    filter: Result<Query<PrescriptionFilter>, QueryRejection>,
) -> Result<Json<Vec<Prescription>>, ApiError> {
    let Query(filter) = filter?;
    let conn = ctx.core.open_db()?;
    Ok(Json(db::get_prescriptions(&conn, &filter)?))
}

pub async fn create(
    State(ctx): State<ApiContext>,
    ValidJson(input): ValidJson<NewPrescription>,
) -> Result<Json<Prescription>, ApiError> {
    let conn = ctx.core.open_db()?;
    let prescription = db::insert_prescription(&conn, &input)?;
    tracing::info!(
        prescription_id = prescription.id,
        doctor_id = prescription.doctor_id,
        patient_id = prescription.patient_id,
        "Prescription recorded"
    );
    Ok(Json(prescription))
}

pub async fn detail(
    State(ctx): State<ApiContext>,
    EntityId(id): EntityId,
) -> Result<Json<Prescription>, ApiError> {
    let conn = ctx.core.open_db()?;
    let prescription = found(EntityKind::Prescription, db::get_prescription(&conn, id)?)?;
    Ok(Json(prescription))
}

pub async fn remove(
    State(ctx): State<ApiContext>,
    EntityId(id): EntityId,
) -> Result<Json<DeletedResponse>, ApiError> {
    let conn = ctx.core.open_db()?;
    db::delete_prescription(&conn, id)?;
    Ok(Json(DeletedResponse::new(EntityKind::Prescription)))
}

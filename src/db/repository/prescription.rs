use rusqlite::{params, Connection, OptionalExtension, Row};

use super::{begin_write, delete_by_id, ensure_exists};
use crate::db::DatabaseError;
use crate::models::*;

const PRESCRIPTION_COLUMNS: &str = "id, doctor_id, patient_id, prescription_date, notes";

fn prescription_from_row(row: &Row<'_>) -> rusqlite::Result<Prescription> {
    Ok(Prescription {
        id: row.get(0)?,
        doctor_id: row.get(1)?,
        patient_id: row.get(2)?,
        prescription_date: row.get(3)?,
        notes: row.get(4)?,
    })
}

/// Record a prescription. Same all-or-nothing reference check as
/// appointments.
pub fn insert_prescription(
    conn: &Connection,
    rx: &NewPrescription,
) -> Result<Prescription, DatabaseError> {
    let tx = begin_write(conn)?;

    ensure_exists(&tx, EntityKind::Doctor, rx.doctor_id)?;
    ensure_exists(&tx, EntityKind::Patient, rx.patient_id)?;

    tx.execute(
        "INSERT INTO prescriptions (doctor_id, patient_id, prescription_date, notes)
         VALUES (?1, ?2, ?3, ?4)",
        params![rx.doctor_id, rx.patient_id, rx.prescription_date, rx.notes],
    )
    .map_err(DatabaseError::from_write)?;
    let id = tx.last_insert_rowid();
    tx.commit()?;

    Ok(Prescription {
        id,
        doctor_id: rx.doctor_id,
        patient_id: rx.patient_id,
        prescription_date: rx.prescription_date,
        notes: rx.notes.clone(),
    })
}

pub fn get_prescription(conn: &Connection, id: i64) -> Result<Option<Prescription>, DatabaseError> {
    let rx = conn
        .query_row(
            &format!("SELECT {PRESCRIPTION_COLUMNS} FROM prescriptions WHERE id = ?1"),
            params![id],
            prescription_from_row,
        )
        .optional()?;
    Ok(rx)
}

pub fn get_prescriptions(
    conn: &Connection,
    filter: &PrescriptionFilter,
) -> Result<Vec<Prescription>, DatabaseError> {
    let mut stmt = conn.prepare(&format!(
        "SELECT {PRESCRIPTION_COLUMNS} FROM prescriptions
         WHERE (?1 IS NULL OR patient_id = ?1)
           AND (?2 IS NULL OR doctor_id = ?2)
         ORDER BY id"
    ))?;
    let rows = stmt.query_map(
        params![filter.patient_id, filter.doctor_id],
        prescription_from_row,
    )?;
    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

pub fn delete_prescription(conn: &Connection, id: i64) -> Result<(), DatabaseError> {
    delete_by_id(conn, EntityKind::Prescription, id)
}

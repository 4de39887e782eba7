use rusqlite::{params, Connection, OptionalExtension, Row};

use super::delete_by_id;
use crate::db::DatabaseError;
use crate::models::*;

const PATIENT_COLUMNS: &str = "id, first_name, last_name, birth_date, phone, address, email";

fn patient_from_row(row: &Row<'_>) -> rusqlite::Result<Patient> {
    Ok(Patient {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        birth_date: row.get(3)?,
        phone: row.get(4)?,
        address: row.get(5)?,
        email: row.get(6)?,
    })
}

pub fn insert_patient(conn: &Connection, patient: &NewPatient) -> Result<Patient, DatabaseError> {
    conn.execute(
        "INSERT INTO patients (first_name, last_name, birth_date, phone, address, email)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            patient.first_name,
            patient.last_name,
            patient.birth_date,
            patient.phone,
            patient.address,
            patient.email,
        ],
    )
    .map_err(DatabaseError::from_write)?;

    Ok(Patient {
        id: conn.last_insert_rowid(),
        first_name: patient.first_name.clone(),
        last_name: patient.last_name.clone(),
        birth_date: patient.birth_date,
        phone: patient.phone.clone(),
        address: patient.address.clone(),
        email: patient.email.clone(),
    })
}

pub fn get_patient(conn: &Connection, id: i64) -> Result<Option<Patient>, DatabaseError> {
    let patient = conn
        .query_row(
            &format!("SELECT {PATIENT_COLUMNS} FROM patients WHERE id = ?1"),
            params![id],
            patient_from_row,
        )
        .optional()?;
    Ok(patient)
}

pub fn get_all_patients(conn: &Connection) -> Result<Vec<Patient>, DatabaseError> {
    let mut stmt = conn.prepare(&format!("SELECT {PATIENT_COLUMNS} FROM patients ORDER BY id"))?;
    let rows = stmt.query_map([], patient_from_row)?;
    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

pub fn delete_patient(conn: &Connection, id: i64) -> Result<(), DatabaseError> {
    delete_by_id(conn, EntityKind::Patient, id)
}

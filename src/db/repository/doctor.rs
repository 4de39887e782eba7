use rusqlite::{params, Connection, OptionalExtension, Row};

use super::delete_by_id;
use crate::db::DatabaseError;
use crate::models::*;

const DOCTOR_COLUMNS: &str = "id, first_name, last_name, specialization, phone, address, email";

fn doctor_from_row(row: &Row<'_>) -> rusqlite::Result<Doctor> {
    Ok(Doctor {
        id: row.get(0)?,
        first_name: row.get(1)?,
        last_name: row.get(2)?,
        specialization: row.get(3)?,
        phone: row.get(4)?,
        address: row.get(5)?,
        email: row.get(6)?,
    })
}

pub fn insert_doctor(conn: &Connection, doctor: &NewDoctor) -> Result<Doctor, DatabaseError> {
    conn.execute(
        "INSERT INTO doctors (first_name, last_name, specialization, phone, address, email)
         VALUES (?1, ?2, ?3, ?4, ?5, ?6)",
        params![
            doctor.first_name,
            doctor.last_name,
            doctor.specialization,
            doctor.phone,
            doctor.address,
            doctor.email,
        ],
    )
    .map_err(DatabaseError::from_write)?;

    Ok(Doctor {
        id: conn.last_insert_rowid(),
        first_name: doctor.first_name.clone(),
        last_name: doctor.last_name.clone(),
        specialization: doctor.specialization.clone(),
        phone: doctor.phone.clone(),
        address: doctor.address.clone(),
        email: doctor.email.clone(),
    })
}

pub fn get_doctor(conn: &Connection, id: i64) -> Result<Option<Doctor>, DatabaseError> {
    let doctor = conn
        .query_row(
            &format!("SELECT {DOCTOR_COLUMNS} FROM doctors WHERE id = ?1"),
            params![id],
            doctor_from_row,
        )
        .optional()?;
    Ok(doctor)
}

pub fn get_all_doctors(conn: &Connection) -> Result<Vec<Doctor>, DatabaseError> {
    let mut stmt = conn.prepare(&format!("SELECT {DOCTOR_COLUMNS} FROM doctors ORDER BY id"))?;
    let rows = stmt.query_map([], doctor_from_row)?;
    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

/// Delete a doctor. Their appointments and prescriptions go with them
/// (`ON DELETE CASCADE`).
pub fn delete_doctor(conn: &Connection, id: i64) -> Result<(), DatabaseError> {
    delete_by_id(conn, EntityKind::Doctor, id)
}

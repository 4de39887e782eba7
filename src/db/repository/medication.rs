use rusqlite::{params, Connection, OptionalExtension, Row};

use super::delete_by_id;
use crate::db::DatabaseError;
use crate::models::*;

fn medication_from_row(row: &Row<'_>) -> rusqlite::Result<Medication> {
    Ok(Medication {
        id: row.get(0)?,
        name: row.get(1)?,
        description: row.get(2)?,
    })
}

pub fn insert_medication(
    conn: &Connection,
    med: &NewMedication,
) -> Result<Medication, DatabaseError> {
    conn.execute(
        "INSERT INTO medications (name, description) VALUES (?1, ?2)",
        params![med.name, med.description],
    )
    .map_err(DatabaseError::from_write)?;

    Ok(Medication {
        id: conn.last_insert_rowid(),
        name: med.name.clone(),
        description: med.description.clone(),
    })
}

pub fn get_medication(conn: &Connection, id: i64) -> Result<Option<Medication>, DatabaseError> {
    let med = conn
        .query_row(
            "SELECT id, name, description FROM medications WHERE id = ?1",
            params![id],
            medication_from_row,
        )
        .optional()?;
    Ok(med)
}

pub fn get_all_medications(conn: &Connection) -> Result<Vec<Medication>, DatabaseError> {
    let mut stmt = conn.prepare("SELECT id, name, description FROM medications ORDER BY id")?;
    let rows = stmt.query_map([], medication_from_row)?;
    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

pub fn delete_medication(conn: &Connection, id: i64) -> Result<(), DatabaseError> {
    delete_by_id(conn, EntityKind::Medication, id)
}

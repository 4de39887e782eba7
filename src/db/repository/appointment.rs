use rusqlite::{params, Connection, OptionalExtension, Row};

use super::{begin_write, delete_by_id, ensure_exists};
use crate::db::DatabaseError;
use crate::models::*;

const APPOINTMENT_COLUMNS: &str =
    "id, doctor_id, patient_id, appointment_date, appointment_time, consultation_type";

fn appointment_from_row(row: &Row<'_>) -> rusqlite::Result<Appointment> {
    Ok(Appointment {
        id: row.get(0)?,
        doctor_id: row.get(1)?,
        patient_id: row.get(2)?,
        appointment_date: row.get(3)?,
        appointment_time: row.get(4)?,
        consultation_type: row.get(5)?,
    })
}

/// Book an appointment. The doctor and the patient must already exist;
/// otherwise nothing is written and `NotFound` names the missing side.
pub fn insert_appointment(
    conn: &Connection,
    appt: &NewAppointment,
) -> Result<Appointment, DatabaseError> {
    let tx = begin_write(conn)?;

    ensure_exists(&tx, EntityKind::Doctor, appt.doctor_id)?;
    ensure_exists(&tx, EntityKind::Patient, appt.patient_id)?;

    tx.execute(
        "INSERT INTO appointments (doctor_id, patient_id, appointment_date, appointment_time, consultation_type)
         VALUES (?1, ?2, ?3, ?4, ?5)",
        params![
            appt.doctor_id,
            appt.patient_id,
            appt.appointment_date,
            appt.appointment_time,
            appt.consultation_type,
        ],
    )
    .map_err(DatabaseError::from_write)?;
    let id = tx.last_insert_rowid();
    tx.commit()?;

    Ok(Appointment {
        id,
        doctor_id: appt.doctor_id,
        patient_id: appt.patient_id,
        appointment_date: appt.appointment_date,
        appointment_time: appt.appointment_time,
        consultation_type: appt.consultation_type.clone(),
    })
}

pub fn get_appointment(conn: &Connection, id: i64) -> Result<Option<Appointment>, DatabaseError> {
    let appt = conn
        .query_row(
            &format!("SELECT {APPOINTMENT_COLUMNS} FROM appointments WHERE id = ?1"),
            params![id],
            appointment_from_row,
        )
        .optional()?;
    Ok(appt)
}

/// List appointments in id order, windowed by `page`.
pub fn get_appointments(
    conn: &Connection,
    page: &AppointmentPage,
) -> Result<Vec<Appointment>, DatabaseError> {
    // SQLite treats a negative LIMIT as unbounded.
    let limit = page.limit.map(i64::from).unwrap_or(-1);
    let offset = i64::from(page.skip.unwrap_or(0));

    let mut stmt = conn.prepare(&format!(
        "SELECT {APPOINTMENT_COLUMNS} FROM appointments ORDER BY id LIMIT ?1 OFFSET ?2"
    ))?;
    let rows = stmt.query_map(params![limit, offset], appointment_from_row)?;
    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

/// Appointments joined with doctor and patient names, ordered by date
/// then time, with display strings filled in.
pub fn get_appointment_schedule(conn: &Connection) -> Result<Vec<AppointmentDetail>, DatabaseError> {
    let mut stmt = conn.prepare(
        "SELECT a.id, a.doctor_id, d.first_name, d.last_name,
                a.patient_id, p.first_name, p.last_name,
                a.appointment_date, a.appointment_time, a.consultation_type
         FROM appointments a
         JOIN doctors d ON d.id = a.doctor_id
         JOIN patients p ON p.id = a.patient_id
         ORDER BY a.appointment_date, a.appointment_time, a.id",
    )?;

    let rows = stmt.query_map([], |row| {
        let appointment_date: chrono::NaiveDate = row.get(7)?;
        let appointment_time: TimeOfDay = row.get(8)?;
        Ok(AppointmentDetail {
            id: row.get(0)?,
            doctor_id: row.get(1)?,
            doctor_name: format!("{} {}", row.get::<_, String>(2)?, row.get::<_, String>(3)?),
            patient_id: row.get(4)?,
            patient_name: format!("{} {}", row.get::<_, String>(5)?, row.get::<_, String>(6)?),
            appointment_date,
            appointment_time,
            consultation_type: row.get(9)?,
            date_display: appointment_date.format("%d %b %Y").to_string(),
            time_display: appointment_time.format(ClockStyle::TwelveHour),
        })
    })?;

    rows.map(|r| r.map_err(DatabaseError::from)).collect()
}

pub fn delete_appointment(conn: &Connection, id: i64) -> Result<(), DatabaseError> {
    delete_by_id(conn, EntityKind::Appointment, id)
}

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use super::time_of_day::TimeOfDay;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Appointment {
    pub id: i64,
    pub doctor_id: i64,
    pub patient_id: i64,
    pub appointment_date: NaiveDate,
    pub appointment_time: TimeOfDay,
    pub consultation_type: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct NewAppointment {
    pub doctor_id: i64,
    pub patient_id: i64,
    pub appointment_date: NaiveDate,
    pub appointment_time: TimeOfDay,
    pub consultation_type: String,
}

/// Schedule row: an appointment joined with the names of both parties,
/// plus display strings (`01 May 2024`, `02:30 PM`).
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AppointmentDetail {
    pub id: i64,
    pub doctor_id: i64,
    pub doctor_name: String,
    pub patient_id: i64,
    pub patient_name: String,
    pub appointment_date: NaiveDate,
    pub appointment_time: TimeOfDay,
    pub consultation_type: String,
    pub date_display: String,
    pub time_display: String,
}

use std::fmt;
use std::str::FromStr;

use serde::{de, Deserialize, Deserializer};

/// Prescription listing filter. Set fields combine with AND.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct PrescriptionFilter {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub patient_id: Option<i64>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub doctor_id: Option<i64>,
}

/// Offset/limit window for the appointment listing. No limit means all rows.
#[derive(Debug, Default, Clone, Deserialize)]
pub struct AppointmentPage {
    #[serde(default, deserialize_with = "empty_as_none")]
    pub skip: Option<u32>,
    #[serde(default, deserialize_with = "empty_as_none")]
    pub limit: Option<u32>,
}

/// Query values arrive as strings; `?patient_id=` means no filter.
fn empty_as_none<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: FromStr,
    T::Err: fmt::Display,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    match raw.as_deref().map(str::trim) {
        None | Some("") => Ok(None),
        Some(value) => value.parse().map(Some).map_err(de::Error::custom),
    }
}

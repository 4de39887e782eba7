//! Shape checks for create inputs, applied at the boundary before any
//! store access. Length caps mirror the column sizes of the original
//! schema.

use std::sync::LazyLock;

use regex::Regex;
use serde::Serialize;

use super::{NewAppointment, NewDoctor, NewMedication, NewPatient, NewPrescription};

const MAX_NAME_LEN: usize = 100;
const MAX_PHONE_LEN: usize = 15;
const MAX_TEXT_LEN: usize = 255;
const MAX_EMAIL_LEN: usize = 100;

static EMAIL_PATTERN: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9.!#$%&'*+/=?^_`{|}~-]+@[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?(?:\.[A-Za-z0-9](?:[A-Za-z0-9-]{0,61}[A-Za-z0-9])?)+$")
        .expect("email pattern is valid")
});

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct FieldError {
    pub field: &'static str,
    pub message: String,
}

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("{} invalid field(s)", .0.len())]
pub struct ValidationErrors(pub Vec<FieldError>);

pub trait Validate {
    fn validate(&self) -> Result<(), ValidationErrors>;
}

/// Collects field errors for one input.
#[derive(Default)]
struct Checker {
    errors: Vec<FieldError>,
}

impl Checker {
    fn required(&mut self, field: &'static str, value: &str, max_len: usize) -> &mut Self {
        if value.trim().is_empty() {
            self.push(field, "field required");
        } else {
            self.max_len(field, value, max_len);
        }
        self
    }

    fn optional(&mut self, field: &'static str, value: Option<&str>, max_len: usize) -> &mut Self {
        if let Some(value) = value {
            self.max_len(field, value, max_len);
        }
        self
    }

    fn email(&mut self, field: &'static str, value: &str) -> &mut Self {
        if value.chars().count() > MAX_EMAIL_LEN {
            self.push(field, format!("must be at most {MAX_EMAIL_LEN} characters"));
        } else if !is_valid_email(value) {
            self.push(field, "value is not a valid email address");
        }
        self
    }

    fn max_len(&mut self, field: &'static str, value: &str, max_len: usize) {
        if value.chars().count() > max_len {
            self.push(field, format!("must be at most {max_len} characters"));
        }
    }

    fn push(&mut self, field: &'static str, message: impl Into<String>) {
        self.errors.push(FieldError {
            field,
            message: message.into(),
        });
    }

    fn finish(&mut self) -> Result<(), ValidationErrors> {
        if self.errors.is_empty() {
            Ok(())
        } else {
            Err(ValidationErrors(std::mem::take(&mut self.errors)))
        }
    }
}

pub fn is_valid_email(value: &str) -> bool {
    EMAIL_PATTERN.is_match(value)
}

impl Validate for NewDoctor {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Checker::default()
            .required("first_name", &self.first_name, MAX_NAME_LEN)
            .required("last_name", &self.last_name, MAX_NAME_LEN)
            .required("specialization", &self.specialization, MAX_NAME_LEN)
            .required("phone", &self.phone, MAX_PHONE_LEN)
            .required("address", &self.address, MAX_TEXT_LEN)
            .email("email", &self.email)
            .finish()
    }
}

impl Validate for NewPatient {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Checker::default()
            .required("first_name", &self.first_name, MAX_NAME_LEN)
            .required("last_name", &self.last_name, MAX_NAME_LEN)
            .required("phone", &self.phone, MAX_PHONE_LEN)
            .required("address", &self.address, MAX_TEXT_LEN)
            .email("email", &self.email)
            .finish()
    }
}

impl Validate for NewAppointment {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Checker::default()
            .required("consultation_type", &self.consultation_type, MAX_NAME_LEN)
            .finish()
    }
}

impl Validate for NewMedication {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Checker::default()
            .required("name", &self.name, MAX_NAME_LEN)
            .optional("description", self.description.as_deref(), MAX_TEXT_LEN)
            .finish()
    }
}

impl Validate for NewPrescription {
    fn validate(&self) -> Result<(), ValidationErrors> {
        Checker::default()
            .optional("notes", self.notes.as_deref(), MAX_TEXT_LEN)
            .finish()
    }
}

#[cfg(test)]
mod tests {
    use chrono::NaiveDate;

    use super::*;

    fn doctor() -> NewDoctor {
        NewDoctor {
            first_name: "A".into(),
            last_name: "B".into(),
            specialization: "Cardiology".into(),
            phone: "123".into(),
            address: "X".into(),
            email: "a@b.com".into(),
        }
    }

    #[test]
    fn accepts_well_formed_doctor() {
        assert!(doctor().validate().is_ok());
    }

    #[test]
    fn reports_every_bad_field() {
        let mut input = doctor();
        input.first_name = "  ".into();
        input.phone = "1".repeat(16);
        input.email = "not-an-email".into();
        let errors = input.validate().unwrap_err().0;
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["first_name", "phone", "email"]);
    }

    #[test]
    fn email_format() {
        assert!(is_valid_email("a@b.com"));
        assert!(is_valid_email("first.last+tag@clinic.example.org"));
        assert!(!is_valid_email("a@b"));
        assert!(!is_valid_email("@b.com"));
        assert!(!is_valid_email("a b@c.com"));
        assert!(!is_valid_email(""));
    }

    #[test]
    fn medication_description_is_optional_but_capped() {
        let mut med = NewMedication {
            name: "Ibuprofen".into(),
            description: None,
        };
        assert!(med.validate().is_ok());
        med.description = Some("x".repeat(256));
        assert_eq!(med.validate().unwrap_err().0[0].field, "description");
    }

    #[test]
    fn reference_ids_are_left_to_the_store() {
        let rx = NewPrescription {
            doctor_id: 0,
            patient_id: -3,
            prescription_date: NaiveDate::from_ymd_opt(2024, 2, 1).unwrap(),
            notes: Some("x".repeat(256)),
        };
        let errors = rx.validate().unwrap_err().0;
        let fields: Vec<_> = errors.iter().map(|e| e.field).collect();
        assert_eq!(fields, vec!["notes"]);
    }
}

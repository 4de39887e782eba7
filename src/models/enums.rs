use serde::{Deserialize, Serialize};

/// The five persisted record types.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EntityKind {
    Doctor,
    Patient,
    Appointment,
    Medication,
    Prescription,
}

impl EntityKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Doctor => "doctor",
            Self::Patient => "patient",
            Self::Appointment => "appointment",
            Self::Medication => "medication",
            Self::Prescription => "prescription",
        }
    }

    /// Human-readable name used in not-found and deleted messages.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Doctor => "Doctor",
            Self::Patient => "Patient",
            Self::Appointment => "Appointment",
            Self::Medication => "Medication",
            Self::Prescription => "Prescription",
        }
    }

    pub fn table(&self) -> &'static str {
        match self {
            Self::Doctor => "doctors",
            Self::Patient => "patients",
            Self::Appointment => "appointments",
            Self::Medication => "medications",
            Self::Prescription => "prescriptions",
        }
    }
}

impl std::fmt::Display for EntityKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.label())
    }
}

/// Clock used when rendering a time of day for display.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ClockStyle {
    TwentyFourHour,
    TwelveHour,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn labels_and_tables_line_up() {
        let kinds = [
            EntityKind::Doctor,
            EntityKind::Patient,
            EntityKind::Appointment,
            EntityKind::Medication,
            EntityKind::Prescription,
        ];
        for kind in kinds {
            assert_eq!(kind.table(), format!("{}s", kind.as_str()));
            assert_eq!(kind.label().to_lowercase(), kind.as_str());
        }
    }

    #[test]
    fn entity_kind_serializes_snake_case() {
        let json = serde_json::to_string(&EntityKind::Prescription).unwrap();
        assert_eq!(json, "\"prescription\"");
    }
}

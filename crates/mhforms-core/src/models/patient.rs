use serde::{Deserialize, Serialize};
use ts_rs::TS;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Gender {
    Male,
    Female,
    Other,
}

/// Demographic fields an ingest attempts to infer.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum PatientField {
    Name,
    DateOfBirth,
    Gender,
    Ward,
    LegalSection,
    Reference,
}

/// Best-effort demographics. Any field may be unset.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct PatientInfo {
    pub name: Option<String>,
    pub date_of_birth: Option<jiff::civil::Date>,
    pub gender: Option<Gender>,
    pub ward: Option<String>,
    /// Mental Health Act section, e.g. `Section 37/41`.
    pub legal_section: Option<String>,
    /// NHS number or local hospital number.
    pub reference: Option<String>,
}

impl PatientInfo {
    pub fn missing_fields(&self) -> Vec<PatientField> {
        let mut missing = Vec::new();
        if self.name.is_none() {
            missing.push(PatientField::Name);
        }
        if self.date_of_birth.is_none() {
            missing.push(PatientField::DateOfBirth);
        }
        if self.gender.is_none() {
            missing.push(PatientField::Gender);
        }
        if self.ward.is_none() {
            missing.push(PatientField::Ward);
        }
        if self.legal_section.is_none() {
            missing.push(PatientField::LegalSection);
        }
        if self.reference.is_none() {
            missing.push(PatientField::Reference);
        }
        missing
    }
}

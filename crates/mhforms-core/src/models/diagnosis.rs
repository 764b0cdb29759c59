use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::error::CoreError;

/// Closed ICD-10 vocabulary used by the statutory forms.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum Diagnosis {
    ParanoidSchizophrenia,
    HebephrenicSchizophrenia,
    CatatonicSchizophrenia,
    ResidualSchizophrenia,
    Schizophrenia,
    SchizoaffectiveManic,
    SchizoaffectiveDepressive,
    SchizoaffectiveDisorder,
    PersistentDelusionalDisorder,
    AcutePsychoticDisorder,
    UnspecifiedPsychosis,
    DrugInducedPsychosis,
    BipolarManicWithPsychosis,
    BipolarAffectiveDisorder,
    SevereDepressionWithPsychosis,
    RecurrentDepressiveDisorder,
    DepressiveEpisode,
    GeneralisedAnxietyDisorder,
    PostTraumaticStressDisorder,
    EmotionallyUnstablePersonalityDisorder,
    DissocialPersonalityDisorder,
    ParanoidPersonalityDisorder,
    AutismSpectrumDisorder,
    Adhd,
    MildLearningDisability,
    ModerateLearningDisability,
    LearningDisability,
    AlcoholDependence,
    CannabisDependence,
    PolysubstanceDependence,
}

impl Diagnosis {
    pub const ALL: [Diagnosis; 30] = [
        Diagnosis::ParanoidSchizophrenia,
        Diagnosis::HebephrenicSchizophrenia,
        Diagnosis::CatatonicSchizophrenia,
        Diagnosis::ResidualSchizophrenia,
        Diagnosis::Schizophrenia,
        Diagnosis::SchizoaffectiveManic,
        Diagnosis::SchizoaffectiveDepressive,
        Diagnosis::SchizoaffectiveDisorder,
        Diagnosis::PersistentDelusionalDisorder,
        Diagnosis::AcutePsychoticDisorder,
        Diagnosis::UnspecifiedPsychosis,
        Diagnosis::DrugInducedPsychosis,
        Diagnosis::BipolarManicWithPsychosis,
        Diagnosis::BipolarAffectiveDisorder,
        Diagnosis::SevereDepressionWithPsychosis,
        Diagnosis::RecurrentDepressiveDisorder,
        Diagnosis::DepressiveEpisode,
        Diagnosis::GeneralisedAnxietyDisorder,
        Diagnosis::PostTraumaticStressDisorder,
        Diagnosis::EmotionallyUnstablePersonalityDisorder,
        Diagnosis::DissocialPersonalityDisorder,
        Diagnosis::ParanoidPersonalityDisorder,
        Diagnosis::AutismSpectrumDisorder,
        Diagnosis::Adhd,
        Diagnosis::MildLearningDisability,
        Diagnosis::ModerateLearningDisability,
        Diagnosis::LearningDisability,
        Diagnosis::AlcoholDependence,
        Diagnosis::CannabisDependence,
        Diagnosis::PolysubstanceDependence,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Diagnosis::ParanoidSchizophrenia => "F20.0",
            Diagnosis::HebephrenicSchizophrenia => "F20.1",
            Diagnosis::CatatonicSchizophrenia => "F20.2",
            Diagnosis::ResidualSchizophrenia => "F20.5",
            Diagnosis::Schizophrenia => "F20.9",
            Diagnosis::SchizoaffectiveManic => "F25.0",
            Diagnosis::SchizoaffectiveDepressive => "F25.1",
            Diagnosis::SchizoaffectiveDisorder => "F25.9",
            Diagnosis::PersistentDelusionalDisorder => "F22.0",
            Diagnosis::AcutePsychoticDisorder => "F23.9",
            Diagnosis::UnspecifiedPsychosis => "F29",
            Diagnosis::DrugInducedPsychosis => "F19.5",
            Diagnosis::BipolarManicWithPsychosis => "F31.2",
            Diagnosis::BipolarAffectiveDisorder => "F31.9",
            Diagnosis::SevereDepressionWithPsychosis => "F32.3",
            Diagnosis::RecurrentDepressiveDisorder => "F33.9",
            Diagnosis::DepressiveEpisode => "F32.9",
            Diagnosis::GeneralisedAnxietyDisorder => "F41.1",
            Diagnosis::PostTraumaticStressDisorder => "F43.1",
            Diagnosis::EmotionallyUnstablePersonalityDisorder => "F60.3",
            Diagnosis::DissocialPersonalityDisorder => "F60.2",
            Diagnosis::ParanoidPersonalityDisorder => "F60.0",
            Diagnosis::AutismSpectrumDisorder => "F84.0",
            Diagnosis::Adhd => "F90.0",
            Diagnosis::MildLearningDisability => "F70",
            Diagnosis::ModerateLearningDisability => "F71",
            Diagnosis::LearningDisability => "F79",
            Diagnosis::AlcoholDependence => "F10.2",
            Diagnosis::CannabisDependence => "F12.2",
            Diagnosis::PolysubstanceDependence => "F19.2",
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Diagnosis::ParanoidSchizophrenia => "Paranoid schizophrenia",
            Diagnosis::HebephrenicSchizophrenia => "Hebephrenic schizophrenia",
            Diagnosis::CatatonicSchizophrenia => "Catatonic schizophrenia",
            Diagnosis::ResidualSchizophrenia => "Residual schizophrenia",
            Diagnosis::Schizophrenia => "Schizophrenia, unspecified",
            Diagnosis::SchizoaffectiveManic => "Schizoaffective disorder, manic type",
            Diagnosis::SchizoaffectiveDepressive => "Schizoaffective disorder, depressive type",
            Diagnosis::SchizoaffectiveDisorder => "Schizoaffective disorder, unspecified",
            Diagnosis::PersistentDelusionalDisorder => "Delusional disorder",
            Diagnosis::AcutePsychoticDisorder => "Acute and transient psychotic disorder",
            Diagnosis::UnspecifiedPsychosis => "Unspecified nonorganic psychosis",
            Diagnosis::DrugInducedPsychosis => "Psychotic disorder due to multiple drug use",
            Diagnosis::BipolarManicWithPsychosis => {
                "Bipolar affective disorder, current episode manic with psychotic symptoms"
            }
            Diagnosis::BipolarAffectiveDisorder => "Bipolar affective disorder, unspecified",
            Diagnosis::SevereDepressionWithPsychosis => {
                "Severe depressive episode with psychotic symptoms"
            }
            Diagnosis::RecurrentDepressiveDisorder => "Recurrent depressive disorder",
            Diagnosis::DepressiveEpisode => "Depressive episode, unspecified",
            Diagnosis::GeneralisedAnxietyDisorder => "Generalised anxiety disorder",
            Diagnosis::PostTraumaticStressDisorder => "Post-traumatic stress disorder",
            Diagnosis::EmotionallyUnstablePersonalityDisorder => {
                "Emotionally unstable personality disorder"
            }
            Diagnosis::DissocialPersonalityDisorder => "Dissocial personality disorder",
            Diagnosis::ParanoidPersonalityDisorder => "Paranoid personality disorder",
            Diagnosis::AutismSpectrumDisorder => "Childhood autism",
            Diagnosis::Adhd => "Disturbance of activity and attention",
            Diagnosis::MildLearningDisability => "Mild learning disability",
            Diagnosis::ModerateLearningDisability => "Moderate learning disability",
            Diagnosis::LearningDisability => "Learning disability, unspecified",
            Diagnosis::AlcoholDependence => "Alcohol dependence syndrome",
            Diagnosis::CannabisDependence => "Cannabis dependence syndrome",
            Diagnosis::PolysubstanceDependence => "Dependence syndrome, multiple drug use",
        }
    }

    /// Exclusivity group. A form lists at most one diagnosis per category.
    pub fn category(self) -> &'static str {
        match self {
            Diagnosis::ParanoidSchizophrenia
            | Diagnosis::HebephrenicSchizophrenia
            | Diagnosis::CatatonicSchizophrenia
            | Diagnosis::ResidualSchizophrenia
            | Diagnosis::Schizophrenia => "schizophrenia",
            Diagnosis::SchizoaffectiveManic
            | Diagnosis::SchizoaffectiveDepressive
            | Diagnosis::SchizoaffectiveDisorder => "schizoaffective",
            Diagnosis::PersistentDelusionalDisorder
            | Diagnosis::AcutePsychoticDisorder
            | Diagnosis::UnspecifiedPsychosis
            | Diagnosis::DrugInducedPsychosis => "psychosis",
            Diagnosis::BipolarManicWithPsychosis | Diagnosis::BipolarAffectiveDisorder => "bipolar",
            Diagnosis::SevereDepressionWithPsychosis
            | Diagnosis::RecurrentDepressiveDisorder
            | Diagnosis::DepressiveEpisode => "depression",
            Diagnosis::GeneralisedAnxietyDisorder => "anxiety",
            Diagnosis::PostTraumaticStressDisorder => "trauma",
            Diagnosis::EmotionallyUnstablePersonalityDisorder
            | Diagnosis::DissocialPersonalityDisorder
            | Diagnosis::ParanoidPersonalityDisorder => "personality",
            Diagnosis::AutismSpectrumDisorder => "autism",
            Diagnosis::Adhd => "adhd",
            Diagnosis::MildLearningDisability
            | Diagnosis::ModerateLearningDisability
            | Diagnosis::LearningDisability => "learning_disability",
            Diagnosis::AlcoholDependence => "alcohol",
            Diagnosis::CannabisDependence => "cannabis",
            Diagnosis::PolysubstanceDependence => "polysubstance",
        }
    }

    pub fn from_code(code: &str) -> Result<Self, CoreError> {
        let wanted = code.trim().to_uppercase();
        Self::ALL
            .into_iter()
            .find(|d| d.code() == wanted)
            .ok_or(CoreError::UnknownDiagnosisCode(wanted))
    }
}

/// Primary / secondary / tertiary diagnosis slots on a form.
///
/// A populated slot is never overwritten.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct DiagnosisSlots {
    pub primary: Option<Diagnosis>,
    pub secondary: Option<Diagnosis>,
    pub tertiary: Option<Diagnosis>,
}

impl DiagnosisSlots {
    pub fn as_vec(&self) -> Vec<Diagnosis> {
        [self.primary, self.secondary, self.tertiary]
            .into_iter()
            .flatten()
            .collect()
    }

    pub fn contains(&self, diagnosis: Diagnosis) -> bool {
        self.as_vec().contains(&diagnosis)
    }

    /// Whether a slot already holds a diagnosis from `category`.
    pub fn has_category(&self, category: &str) -> bool {
        self.as_vec().iter().any(|d| d.category() == category)
    }

    /// Place each extracted diagnosis into the first empty slot, skipping
    /// any whose category is already on the form. Returns how many slots
    /// were filled.
    pub fn fill(&mut self, extracted: &[Diagnosis]) -> usize {
        let mut filled = 0;
        for &diagnosis in extracted {
            if self.has_category(diagnosis.category()) {
                continue;
            }
            let slot = [&mut self.primary, &mut self.secondary, &mut self.tertiary]
                .into_iter()
                .find(|slot| slot.is_none());
            match slot {
                Some(slot) => {
                    *slot = Some(diagnosis);
                    filled += 1;
                }
                None => break,
            }
        }
        filled
    }
}

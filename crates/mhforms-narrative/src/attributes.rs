//! Structured clinical judgments consumed by the generator.
//!
//! Enum declaration order is output order: for levels it runs from the lead
//! (best, or most severe for risk) downwards; for domains and areas it is the
//! order items are listed within a group.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use ts_rs::TS;

use crate::pronouns::Pronouns;
use crate::severity::Level;

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum UnderstandingDomain {
    Diagnosis,
    Symptoms,
    Medication,
    NeedForTreatment,
    Risks,
}

impl UnderstandingDomain {
    pub fn phrase(self, pronouns: &Pronouns) -> String {
        let possessive = pronouns.possessive;
        match self {
            Self::Diagnosis => format!("{possessive} diagnosis"),
            Self::Symptoms => format!("{possessive} symptoms"),
            Self::Medication => format!("{possessive} medication"),
            Self::NeedForTreatment => "the need for treatment".to_string(),
            Self::Risks => format!("{possessive} risks"),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum UnderstandingLevel {
    Full,
    Good,
    Partial,
    Limited,
}

impl UnderstandingLevel {
    pub fn phrase(self) -> &'static str {
        match self {
            Self::Full => "full",
            Self::Good => "good",
            Self::Partial => "partial",
            Self::Limited => "limited",
        }
    }
}

impl Level for UnderstandingLevel {
    fn tier(self) -> u8 {
        match self {
            Self::Full | Self::Good => 0,
            Self::Partial | Self::Limited => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum TreatmentArea {
    Medication,
    NursingCare,
    Psychology,
    OccupationalTherapy,
    PhysicalHealthCare,
    SocialWork,
}

impl TreatmentArea {
    pub fn phrase(self) -> &'static str {
        match self {
            Self::Medication => "medication",
            Self::NursingCare => "nursing care",
            Self::Psychology => "psychology",
            Self::OccupationalTherapy => "occupational therapy",
            Self::PhysicalHealthCare => "physical health care",
            Self::SocialWork => "social work",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum ComplianceLevel {
    Full,
    Good,
    Partial,
    Poor,
}

impl ComplianceLevel {
    pub fn phrase(self) -> &'static str {
        match self {
            Self::Full => "fully compliant",
            Self::Good => "largely compliant",
            Self::Partial => "partially compliant",
            Self::Poor => "poorly compliant",
        }
    }
}

impl Level for ComplianceLevel {
    fn tier(self) -> u8 {
        match self {
            Self::Full | Self::Good => 0,
            Self::Partial | Self::Poor => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum EngagementLevel {
    Full,
    Good,
    Partial,
    Minimal,
}

impl EngagementLevel {
    pub fn phrase(self) -> &'static str {
        match self {
            Self::Full => "fully",
            Self::Good => "well",
            Self::Partial => "partially",
            Self::Minimal => "minimally",
        }
    }
}

impl Level for EngagementLevel {
    fn tier(self) -> u8 {
        match self {
            Self::Full | Self::Good => 0,
            Self::Partial | Self::Minimal => 1,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskFactor {
    ViolenceToOthers,
    VerbalAggression,
    PropertyDamage,
    SexualOffending,
    FireSetting,
    SelfHarm,
    Suicide,
    SelfNeglect,
    Exploitation,
    SubstanceMisuse,
    Absconding,
}

impl RiskFactor {
    pub fn phrase(self) -> &'static str {
        match self {
            Self::ViolenceToOthers => "violence to others",
            Self::VerbalAggression => "verbal aggression",
            Self::PropertyDamage => "damage to property",
            Self::SexualOffending => "sexual offending",
            Self::FireSetting => "fire setting",
            Self::SelfHarm => "self-harm",
            Self::Suicide => "suicide",
            Self::SelfNeglect => "self-neglect",
            Self::Exploitation => "exploitation by others",
            Self::SubstanceMisuse => "substance misuse",
            Self::Absconding => "absconding",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum RiskLevel {
    High,
    Significant,
    Moderate,
    Low,
}

impl RiskLevel {
    pub fn phrase(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Significant => "significant",
            Self::Moderate => "moderate",
            Self::Low => "low",
        }
    }
}

impl Level for RiskLevel {
    fn tier(self) -> u8 {
        self as u8
    }
}

/// Current and historical status of one risk factor.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RiskRecord {
    pub current: Option<RiskLevel>,
    #[serde(default)]
    pub historical: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct TreatmentStatus {
    pub needs_inpatient_care: bool,
    #[serde(default)]
    pub for_own_health: bool,
    #[serde(default)]
    pub for_own_safety: bool,
    #[serde(default)]
    pub for_protection_of_others: bool,
    #[serde(default)]
    pub treatment_available: bool,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct RelapsePrevention {
    pub has_plan: bool,
    #[serde(default)]
    pub recognises_warning_signs: bool,
    #[serde(default)]
    pub knows_how_to_seek_help: bool,
}

/// Every clause group is optional; empty maps and `None` produce no text.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize, TS)]
#[serde(default)]
#[ts(export)]
pub struct NarrativeAttributes {
    pub understanding: BTreeMap<UnderstandingDomain, UnderstandingLevel>,
    pub compliance: BTreeMap<TreatmentArea, ComplianceLevel>,
    pub engagement: BTreeMap<TreatmentArea, EngagementLevel>,
    pub risks: BTreeMap<RiskFactor, RiskRecord>,
    pub treatment: Option<TreatmentStatus>,
    pub relapse_prevention: Option<RelapsePrevention>,
}

impl NarrativeAttributes {
    pub fn is_empty(&self) -> bool {
        self == &Self::default()
    }
}

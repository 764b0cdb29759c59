use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Drug class used to prioritise the medication shortlist.
///
/// Declaration order is the selection priority for psychiatric subtypes;
/// `Physical` is handled separately.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum DrugSubtype {
    Antipsychotic,
    Antidepressant,
    Antimanic,
    Hypnotic,
    Anticholinergic,
    Other,
    Physical,
}

impl DrugSubtype {
    /// Psychiatric subtypes in selection priority order.
    pub const PSYCHIATRIC_PRIORITY: [DrugSubtype; 6] = [
        DrugSubtype::Antipsychotic,
        DrugSubtype::Antidepressant,
        DrugSubtype::Antimanic,
        DrugSubtype::Hypnotic,
        DrugSubtype::Anticholinergic,
        DrugSubtype::Other,
    ];

    pub fn is_psychiatric(self) -> bool {
        self != DrugSubtype::Physical
    }
}

/// One dated mention of a drug in a clinical note.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct MedicationMention {
    pub drug_name: String,
    pub dose: Option<String>,
    /// Normalized frequency (`OD`, `BD`, `Nocte`, ...).
    pub frequency: Option<String>,
    pub date: jiff::civil::Date,
    pub subtype: DrugSubtype,
}

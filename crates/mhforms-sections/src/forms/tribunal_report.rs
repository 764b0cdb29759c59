use std::sync::LazyLock;

use mhforms_core::models::lookback::Lookback;

use crate::Form;
use crate::section::SectionSpec;
use crate::tables;

/// Responsible clinician's report to the First-tier Tribunal.
/// History sections keep the whole record; incident sections look back a
/// year from the latest matching note, progress six months.
pub struct TribunalReport;

impl Form for TribunalReport {
    fn id(&self) -> &str {
        "tribunal_report"
    }

    fn name(&self) -> &str {
        "Responsible Clinician's Tribunal Report"
    }

    fn sections(&self) -> &[SectionSpec] {
        static SECTIONS: LazyLock<Vec<SectionSpec>> = LazyLock::new(|| {
            let year = Lookback::Months(12);
            vec![
                SectionSpec::new(
                    "forensic_history",
                    "Forensic history",
                    tables::forensic_history().clone(),
                ),
                SectionSpec::new(
                    "psychiatric_history",
                    "Past psychiatric history",
                    tables::psychiatric_history().clone(),
                ),
                SectionSpec::new(
                    "risk_to_others",
                    "Incidents of harm to others",
                    tables::risk_to_others().clone(),
                )
                .with_window(year),
                SectionSpec::new(
                    "risk_to_self",
                    "Incidents of harm to self",
                    tables::risk_to_self().clone(),
                )
                .with_window(year),
                SectionSpec::new(
                    "substance_misuse",
                    "Substance misuse",
                    tables::substance_misuse().clone(),
                )
                .with_window(year),
                SectionSpec::new(
                    "absconding",
                    "Absconding and leave",
                    tables::absconding().clone(),
                )
                .with_window(year),
                SectionSpec::new(
                    "compliance",
                    "Compliance with treatment",
                    tables::treatment_compliance().clone(),
                )
                .with_window(year),
                SectionSpec::new(
                    "progress",
                    "Progress and mental state",
                    tables::mental_state().clone(),
                )
                .with_window(Lookback::Months(6)),
                SectionSpec::new(
                    "physical_health",
                    "Physical health",
                    tables::physical_health().clone(),
                )
                .with_window(year),
            ]
        });
        &SECTIONS
    }
}

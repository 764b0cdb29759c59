use std::sync::LazyLock;

use mhforms_core::models::lookback::Lookback;

use crate::Form;
use crate::keywords::CategoryKeywordSet;
use crate::section::SectionSpec;
use crate::tables;

/// Nursing report to the First-tier Tribunal.
/// Incidents fold harm to others, harm to self and restrictive practice
/// into one section, as the nursing form asks for them together.
pub struct NursingReport;

impl Form for NursingReport {
    fn id(&self) -> &str {
        "nursing_report"
    }

    fn name(&self) -> &str {
        "Tribunal Nursing Report"
    }

    fn sections(&self) -> &[SectionSpec] {
        static SECTIONS: LazyLock<Vec<SectionSpec>> = LazyLock::new(|| {
            let year = Lookback::Months(12);
            let half_year = Lookback::Months(6);
            let incidents = CategoryKeywordSet::merged(&[
                tables::risk_to_others(),
                tables::risk_to_self(),
                tables::mental_state(),
            ]);
            vec![
                SectionSpec::new(
                    "progress",
                    "Nature of nursing care and progress",
                    tables::mental_state().clone(),
                )
                .with_window(half_year),
                SectionSpec::new("incidents", "Incidents on the ward", incidents)
                    .with_window(year),
                SectionSpec::new(
                    "engagement",
                    "Engagement with ward and therapies",
                    tables::engagement().clone(),
                )
                .with_window(half_year),
                SectionSpec::new(
                    "absconding",
                    "AWOL and leave",
                    tables::absconding().clone(),
                )
                .with_window(year),
                SectionSpec::new(
                    "substance_misuse",
                    "Substance misuse on the ward",
                    tables::substance_misuse().clone(),
                )
                .with_window(year),
                SectionSpec::new(
                    "compliance",
                    "Compliance with medication",
                    tables::treatment_compliance().clone(),
                )
                .with_window(year),
            ]
        });
        &SECTIONS
    }
}

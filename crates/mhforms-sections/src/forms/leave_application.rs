use std::sync::LazyLock;

use mhforms_core::models::lookback::Lookback;

use crate::Form;
use crate::section::SectionSpec;
use crate::tables;

/// Section 17 leave application.
pub struct LeaveApplication;

impl Form for LeaveApplication {
    fn id(&self) -> &str {
        "leave_application"
    }

    fn name(&self) -> &str {
        "Section 17 Leave Application"
    }

    fn sections(&self) -> &[SectionSpec] {
        static SECTIONS: LazyLock<Vec<SectionSpec>> = LazyLock::new(|| {
            let year = Lookback::Months(12);
            vec![
                SectionSpec::new(
                    "risk_to_others",
                    "Recent risk to others",
                    tables::risk_to_others().clone(),
                )
                .with_window(year),
                SectionSpec::new(
                    "risk_to_self",
                    "Recent risk to self",
                    tables::risk_to_self().clone(),
                )
                .with_window(year),
                SectionSpec::new(
                    "absconding",
                    "AWOL history",
                    tables::absconding().clone(),
                )
                .with_window(year),
                SectionSpec::new(
                    "substance_misuse",
                    "Substance misuse",
                    tables::substance_misuse().clone(),
                )
                .with_window(year),
                SectionSpec::new(
                    "leave_history",
                    "Previous leave",
                    tables::engagement().clone(),
                )
                .with_window(Lookback::Months(3))
                .without_false_positive_filter(),
            ]
        });
        &SECTIONS
    }
}

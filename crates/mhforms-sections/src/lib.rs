//! mhforms-sections
//!
//! Keyword categorization and the statutory form catalogue. Pure data: each
//! form lists the sections it collects evidence for and the keyword tables
//! that feed them.

pub mod error;
pub mod forms;
pub mod keywords;
pub mod section;
pub mod tables;

use mhforms_core::models::category::SectionId;

use error::SectionError;
use section::SectionSpec;

/// Trait implemented by each supported form.
pub trait Form: Send + Sync {
    /// Unique identifier for this form (e.g. "tribunal_report").
    fn id(&self) -> &str;

    /// Human-readable name.
    fn name(&self) -> &str;

    /// The sections this form collects evidence for, in form order.
    fn sections(&self) -> &[SectionSpec];

    fn section(&self, id: &SectionId) -> Result<&SectionSpec, SectionError> {
        self.sections()
            .iter()
            .find(|s| &s.id == id)
            .ok_or_else(|| SectionError::UnknownSection {
                form_id: self.id().to_string(),
                section_id: id.clone(),
            })
    }

    /// Plain-text outline of sections and their categories.
    fn describe(&self) -> String {
        let mut output = format!("## {} ({})\n\n", self.name(), self.id());
        for section in self.sections() {
            let window = match section.window {
                Some(lookback) => format!("last {lookback}"),
                None => "full history".to_string(),
            };
            output.push_str(&format!(
                "### {} [{}], {}\n",
                section.label, section.id, window
            ));
            for rule in section.keywords.rules() {
                output.push_str(&format!(
                    "- {} ({}): {} phrases\n",
                    rule.label,
                    rule.id,
                    rule.keywords.len()
                ));
            }
            output.push('\n');
        }
        output
    }
}

/// Return all registered forms.
pub fn all_forms() -> Vec<Box<dyn Form>> {
    vec![
        Box::new(forms::tribunal_report::TribunalReport),
        Box::new(forms::nursing_report::NursingReport),
        Box::new(forms::leave_application::LeaveApplication),
    ]
}

/// Look up a form by ID.
pub fn get_form(id: &str) -> Result<Box<dyn Form>, SectionError> {
    all_forms()
        .into_iter()
        .find(|f| f.id() == id)
        .ok_or_else(|| SectionError::UnknownForm(id.to_string()))
}

//! mhforms-narrative
//!
//! Templated prose from structured clinical attributes. Generation is pure:
//! the same attributes and gender always produce the same text.

pub mod attributes;
pub mod clauses;
pub mod evidence;
pub mod list;
pub mod pronouns;
pub mod severity;

use attributes::NarrativeAttributes;
use pronouns::{GenderContext, Pronouns};

pub use evidence::{DEFAULT_EVIDENCE_HEADER, append_selected_evidence};
pub use list::format_list;

/// Render every present clause group.
///
/// Groups within a topic (insight, engagement, risk, treatment) are joined
/// by a space; topics are separated by a blank line.
pub fn generate(attrs: &NarrativeAttributes, gender: GenderContext) -> String {
    let pronouns = Pronouns::new(gender);
    let topics: [Vec<Option<String>>; 4] = [
        vec![clauses::understanding(&attrs.understanding, &pronouns)],
        vec![
            clauses::compliance(&attrs.compliance, &pronouns),
            clauses::engagement(&attrs.engagement, &pronouns),
        ],
        vec![
            clauses::current_risk(&attrs.risks, &pronouns),
            clauses::historical_risk(&attrs.risks, &pronouns),
        ],
        vec![
            attrs.treatment.map(|t| clauses::treatment(&t, &pronouns)),
            attrs
                .relapse_prevention
                .map(|r| clauses::relapse_prevention(&r, &pronouns)),
        ],
    ];

    topics
        .into_iter()
        .map(|groups| groups.into_iter().flatten().collect::<Vec<_>>().join(" "))
        .filter(|topic| !topic.is_empty())
        .collect::<Vec<_>>()
        .join("\n\n")
}

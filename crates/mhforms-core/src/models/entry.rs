use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};
use ts_rs::TS;
use uuid::Uuid;

use crate::models::category::CategoryId;

/// Maximum number of characters kept in an entry snippet before the ellipsis.
pub const SNIPPET_CHARS: usize = 150;

/// A categorized, dated evidence fragment extracted from a note.
///
/// Every field except `selected` is fixed at creation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, TS)]
#[ts(export)]
pub struct ImportedEntry {
    pub id: Uuid,
    pub date: Option<jiff::civil::Date>,
    pub text: String,
    pub snippet: String,
    pub categories: BTreeSet<CategoryId>,
    pub selected: bool,
}

impl ImportedEntry {
    pub fn new(
        date: Option<jiff::civil::Date>,
        text: impl Into<String>,
        categories: BTreeSet<CategoryId>,
    ) -> Self {
        let text = text.into();
        let snippet = make_snippet(&text);
        Self {
            id: Uuid::new_v4(),
            date,
            text,
            snippet,
            categories,
            selected: false,
        }
    }
}

/// Collapse whitespace and cut to [`SNIPPET_CHARS`] characters, appending
/// `...` only when something was cut.
pub fn make_snippet(text: &str) -> String {
    let collapsed = text.split_whitespace().collect::<Vec<_>>().join(" ");
    if collapsed.chars().count() <= SNIPPET_CHARS {
        return collapsed;
    }
    let mut snippet: String = collapsed.chars().take(SNIPPET_CHARS).collect();
    snippet.push_str("...");
    snippet
}

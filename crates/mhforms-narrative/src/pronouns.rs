use mhforms_core::models::patient::Gender;
use serde::{Deserialize, Serialize};
use ts_rs::TS;

/// Grammatical gender used to phrase generated text.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize, TS)]
#[serde(rename_all = "snake_case")]
#[ts(export)]
pub enum GenderContext {
    Male,
    Female,
    /// Singular "they"; always takes plural agreement.
    #[default]
    Other,
}

impl From<Gender> for GenderContext {
    fn from(gender: Gender) -> Self {
        match gender {
            Gender::Male => GenderContext::Male,
            Gender::Female => GenderContext::Female,
            Gender::Other => GenderContext::Other,
        }
    }
}

impl From<Option<Gender>> for GenderContext {
    fn from(gender: Option<Gender>) -> Self {
        gender.map_or(GenderContext::Other, GenderContext::from)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Pronouns {
    pub subject: &'static str,
    pub object: &'static str,
    pub possessive: &'static str,
    pub reflexive: &'static str,
    plural: bool,
}

impl Pronouns {
    pub fn new(gender: GenderContext) -> Self {
        match gender {
            GenderContext::Male => Self {
                subject: "he",
                object: "him",
                possessive: "his",
                reflexive: "himself",
                plural: false,
            },
            GenderContext::Female => Self {
                subject: "she",
                object: "her",
                possessive: "her",
                reflexive: "herself",
                plural: false,
            },
            GenderContext::Other => Self {
                subject: "they",
                object: "them",
                possessive: "their",
                reflexive: "themselves",
                plural: true,
            },
        }
    }

    pub fn has(&self) -> &'static str {
        if self.plural { "have" } else { "has" }
    }

    pub fn is(&self) -> &'static str {
        if self.plural { "are" } else { "is" }
    }

    pub fn does(&self) -> &'static str {
        if self.plural { "do" } else { "does" }
    }

    /// Present-tense form of `base` agreeing with the subject pronoun.
    pub fn verb(&self, base: &str) -> String {
        if self.plural {
            base.to_string()
        } else {
            third_person(base)
        }
    }

    /// Capitalised subject followed by the agreeing verb, e.g. "She engages".
    pub fn subject_with(&self, base: &str) -> String {
        format!("{} {}", capitalize(self.subject), self.verb(base))
    }
}

fn third_person(base: &str) -> String {
    match base {
        "have" => return "has".to_string(),
        "be" => return "is".to_string(),
        "do" => return "does".to_string(),
        _ => {}
    }
    if ["s", "sh", "ch", "x", "z", "o"]
        .iter()
        .any(|suffix| base.ends_with(suffix))
    {
        return format!("{base}es");
    }
    let mut chars = base.chars().rev();
    if let (Some('y'), Some(before)) = (chars.next(), chars.next())
        && !"aeiou".contains(before)
    {
        return format!("{}ies", &base[..base.len() - 1]);
    }
    format!("{base}s")
}

/// Upper-case the first character.
pub fn capitalize(text: &str) -> String {
    let mut chars = text.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

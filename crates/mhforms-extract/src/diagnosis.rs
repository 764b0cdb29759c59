//! Priority-ordered diagnosis extraction.
//!
//! The pattern table is scanned once, top to bottom. Within a category the
//! first matching pattern wins, so specific phrases must come before the
//! generic phrases they contain; [`check_priority_order`] enforces this.

use std::collections::HashSet;
use std::sync::LazyLock;

use mhforms_core::models::diagnosis::Diagnosis;
use regex::Regex;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::error::ExtractError;

pub const DEFAULT_MAX_DIAGNOSES: usize = 3;

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DiagnosisPattern {
    pub phrase: String,
    pub diagnosis: Diagnosis,
    /// Exclusivity group: at most one result per category.
    pub category: String,
}

impl DiagnosisPattern {
    pub fn new(phrase: &str, diagnosis: Diagnosis, category: &str) -> Self {
        Self {
            phrase: phrase.to_lowercase(),
            diagnosis,
            category: category.to_string(),
        }
    }
}

static HEADER: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\bdiagnos(?:is|es)\s*:").expect("diagnosis header pattern"));

/// The built-in pattern table, specific before generic.
pub fn default_patterns() -> &'static [DiagnosisPattern] {
    static PATTERNS: LazyLock<Vec<DiagnosisPattern>> = LazyLock::new(|| {
        use Diagnosis::*;
        let p = |phrase: &str, diagnosis: Diagnosis| {
            DiagnosisPattern::new(phrase, diagnosis, diagnosis.category())
        };
        vec![
            p("paranoid schizophrenia", ParanoidSchizophrenia),
            p("hebephrenic schizophrenia", HebephrenicSchizophrenia),
            p("catatonic schizophrenia", CatatonicSchizophrenia),
            p("residual schizophrenia", ResidualSchizophrenia),
            p("schizophrenia", Schizophrenia),
            p("schizoaffective disorder, manic type", SchizoaffectiveManic),
            p("schizoaffective disorder manic type", SchizoaffectiveManic),
            p("schizoaffective disorder, depressive type", SchizoaffectiveDepressive),
            p("schizoaffective disorder depressive type", SchizoaffectiveDepressive),
            p("schizoaffective", SchizoaffectiveDisorder),
            p("drug induced psychosis", DrugInducedPsychosis),
            p("drug-induced psychosis", DrugInducedPsychosis),
            p("substance induced psychosis", DrugInducedPsychosis),
            p("persistent delusional disorder", PersistentDelusionalDisorder),
            p("delusional disorder", PersistentDelusionalDisorder),
            p("acute and transient psychotic disorder", AcutePsychoticDisorder),
            p("acute psychotic episode", AcutePsychoticDisorder),
            p("unspecified nonorganic psychosis", UnspecifiedPsychosis),
            p("psychotic disorder", UnspecifiedPsychosis),
            p("psychosis", UnspecifiedPsychosis),
            p("bipolar affective disorder, current episode manic with psychotic symptoms", BipolarManicWithPsychosis),
            p("mania with psychotic symptoms", BipolarManicWithPsychosis),
            p("bipolar affective disorder", BipolarAffectiveDisorder),
            p("bipolar disorder", BipolarAffectiveDisorder),
            p("bipolar", BipolarAffectiveDisorder),
            p("severe depressive episode with psychotic symptoms", SevereDepressionWithPsychosis),
            p("psychotic depression", SevereDepressionWithPsychosis),
            p("recurrent depressive disorder", RecurrentDepressiveDisorder),
            p("recurrent depression", RecurrentDepressiveDisorder),
            p("depressive episode", DepressiveEpisode),
            p("depression", DepressiveEpisode),
            p("generalised anxiety disorder", GeneralisedAnxietyDisorder),
            p("generalized anxiety disorder", GeneralisedAnxietyDisorder),
            p("post-traumatic stress disorder", PostTraumaticStressDisorder),
            p("post traumatic stress disorder", PostTraumaticStressDisorder),
            p("ptsd", PostTraumaticStressDisorder),
            p("emotionally unstable personality disorder", EmotionallyUnstablePersonalityDisorder),
            p("borderline personality disorder", EmotionallyUnstablePersonalityDisorder),
            p("eupd", EmotionallyUnstablePersonalityDisorder),
            p("dissocial personality disorder", DissocialPersonalityDisorder),
            p("antisocial personality disorder", DissocialPersonalityDisorder),
            p("paranoid personality disorder", ParanoidPersonalityDisorder),
            p("autism spectrum disorder", AutismSpectrumDisorder),
            p("autistic spectrum disorder", AutismSpectrumDisorder),
            p("autism", AutismSpectrumDisorder),
            p("attention deficit hyperactivity disorder", Adhd),
            p("adhd", Adhd),
            p("mild learning disability", MildLearningDisability),
            p("moderate learning disability", ModerateLearningDisability),
            p("learning disability", LearningDisability),
            p("intellectual disability", LearningDisability),
            p("alcohol dependence", AlcoholDependence),
            p("cannabis dependence", CannabisDependence),
            p("polysubstance dependence", PolysubstanceDependence),
            p("polysubstance misuse", PolysubstanceDependence),
        ]
    });
    &PATTERNS
}

/// Case-insensitive phrase match on word boundaries.
fn contains_phrase(lowered: &str, phrase: &str) -> bool {
    if phrase.is_empty() {
        return false;
    }
    lowered.match_indices(phrase).any(|(start, matched)| {
        let before = lowered[..start].chars().next_back();
        let after = lowered[start + matched.len()..].chars().next();
        !before.is_some_and(char::is_alphanumeric) && !after.is_some_and(char::is_alphanumeric)
    })
}

/// Scan `patterns` in order, taking at most one diagnosis per category and
/// stopping after `max_count`.
pub fn extract_diagnoses(
    text: &str,
    patterns: &[DiagnosisPattern],
    max_count: usize,
) -> Vec<Diagnosis> {
    let lowered = text.to_lowercase();
    let mut taken_categories: HashSet<&str> = HashSet::new();
    let mut found = Vec::new();

    for pattern in patterns {
        if found.len() >= max_count {
            break;
        }
        if taken_categories.contains(pattern.category.as_str()) {
            continue;
        }
        if contains_phrase(&lowered, &pattern.phrase.to_lowercase()) {
            taken_categories.insert(pattern.category.as_str());
            if !found.contains(&pattern.diagnosis) {
                debug!(phrase = %pattern.phrase, code = pattern.diagnosis.code(), "diagnosis matched");
                found.push(pattern.diagnosis);
            }
        }
    }
    found
}

/// Text under `Diagnosis:` / `Diagnoses:` headers: the rest of each header
/// line plus following lines up to the next blank line.
pub fn diagnosis_header_text(text: &str) -> String {
    let mut collected = Vec::new();
    let mut in_block = false;
    for line in text.lines() {
        if let Some(header) = HEADER.find(line) {
            in_block = true;
            let rest = line[header.end()..].trim();
            if !rest.is_empty() {
                collected.push(rest);
            }
        } else if in_block {
            if line.trim().is_empty() {
                in_block = false;
            } else {
                collected.push(line.trim());
            }
        }
    }
    collected.join("\n")
}

/// Stricter variant of [`extract_diagnoses`] that only reads text under a
/// diagnosis header, ignoring narrative mentions elsewhere.
pub fn extract_diagnoses_from_headers(
    text: &str,
    patterns: &[DiagnosisPattern],
    max_count: usize,
) -> Vec<Diagnosis> {
    extract_diagnoses(&diagnosis_header_text(text), patterns, max_count)
}

/// Reject tables where an earlier pattern's phrase occurs inside a later
/// pattern's phrase in the same category; the later one could never match.
pub fn check_priority_order(patterns: &[DiagnosisPattern]) -> Result<(), ExtractError> {
    for (i, earlier) in patterns.iter().enumerate() {
        for later in &patterns[i + 1..] {
            if earlier.category == later.category
                && contains_phrase(&later.phrase.to_lowercase(), &earlier.phrase.to_lowercase())
            {
                return Err(ExtractError::PriorityOrder {
                    category: earlier.category.clone(),
                    earlier: earlier.phrase.clone(),
                    later: later.phrase.clone(),
                });
            }
        }
    }
    Ok(())
}

use std::collections::BTreeSet;

use mhforms_core::models::category::{CategoryId, SectionId};
use mhforms_core::models::diagnosis::{Diagnosis, DiagnosisSlots};
use mhforms_core::models::entry::{ImportedEntry, SNIPPET_CHARS, make_snippet};
use mhforms_core::models::patient::{PatientField, PatientInfo};

#[test]
fn slugs_reject_display_text() {
    assert!(CategoryId::new("verbal_aggression").is_ok());
    assert!(CategoryId::new("Verbal Aggression").is_err());
    assert!(SectionId::new("").is_err());
    assert_eq!(SectionId::from_static("risk_to_others").as_str(), "risk_to_others");
}

#[test]
fn short_text_snippet_is_unchanged() {
    assert_eq!(make_snippet("  settled   on the ward "), "settled on the ward");
}

#[test]
fn long_text_snippet_is_truncated_with_ellipsis() {
    let text = "a".repeat(400);
    let snippet = make_snippet(&text);
    assert_eq!(snippet.chars().count(), SNIPPET_CHARS + 3);
    assert!(snippet.ends_with("..."));
}

#[test]
fn new_entries_start_unselected() {
    let entry = ImportedEntry::new(None, "text", BTreeSet::new());
    assert!(!entry.selected);
    assert_eq!(entry.snippet, "text");
}

#[test]
fn diagnosis_codes_round_trip() {
    for diagnosis in Diagnosis::ALL {
        assert_eq!(Diagnosis::from_code(diagnosis.code()).unwrap(), diagnosis);
    }
    assert!(Diagnosis::from_code("Z99.9").is_err());
}

#[test]
fn slots_fill_in_order_and_never_overwrite() {
    let mut slots = DiagnosisSlots::default();
    let filled = slots.fill(&[Diagnosis::ParanoidSchizophrenia, Diagnosis::AlcoholDependence]);
    assert_eq!(filled, 2);
    assert_eq!(slots.primary, Some(Diagnosis::ParanoidSchizophrenia));
    assert_eq!(slots.secondary, Some(Diagnosis::AlcoholDependence));

    let again = slots.fill(&[Diagnosis::Schizophrenia, Diagnosis::Adhd]);
    assert_eq!(again, 1);
    assert_eq!(slots.primary, Some(Diagnosis::ParanoidSchizophrenia));
    assert_eq!(slots.tertiary, Some(Diagnosis::Adhd));

    assert_eq!(slots.fill(&[Diagnosis::CannabisDependence]), 0);
}

#[test]
fn same_category_never_takes_a_second_slot() {
    let mut slots = DiagnosisSlots::default();
    let filled = slots.fill(&[
        Diagnosis::ParanoidSchizophrenia,
        Diagnosis::Schizophrenia,
        Diagnosis::MildLearningDisability,
        Diagnosis::LearningDisability,
    ]);
    assert_eq!(filled, 2);
    assert_eq!(slots.primary, Some(Diagnosis::ParanoidSchizophrenia));
    assert_eq!(slots.secondary, Some(Diagnosis::MildLearningDisability));
    assert_eq!(slots.tertiary, None);
}

#[test]
fn slot_filling_is_idempotent() {
    let extracted = [Diagnosis::EmotionallyUnstablePersonalityDisorder];
    let mut slots = DiagnosisSlots::default();
    slots.fill(&extracted);
    let snapshot = slots;
    slots.fill(&extracted);
    assert_eq!(slots, snapshot);
}

#[test]
fn missing_fields_lists_unset_demographics() {
    let info = PatientInfo {
        name: Some("John Smith".to_string()),
        ..Default::default()
    };
    let missing = info.missing_fields();
    assert!(!missing.contains(&PatientField::Name));
    assert!(missing.contains(&PatientField::Gender));
    assert_eq!(missing.len(), 5);
}

#[test]
fn lookback_cutoff_is_calendar_aware() {
    use jiff::civil::date;
    use mhforms_core::models::lookback::Lookback;

    assert_eq!(Lookback::Months(12).cutoff(date(2023, 6, 1)), date(2022, 6, 1));
    assert_eq!(Lookback::Months(6).cutoff(date(2023, 8, 31)), date(2023, 2, 28));
    assert_eq!(Lookback::Days(30).cutoff(date(2023, 3, 1)), date(2023, 1, 30));
}

#[test]
fn lookback_displays_in_words() {
    use mhforms_core::models::lookback::Lookback;

    assert_eq!(Lookback::Months(12).to_string(), "12 months");
    assert_eq!(Lookback::Months(1).to_string(), "1 month");
    assert_eq!(Lookback::Days(30).to_string(), "30 days");
}
